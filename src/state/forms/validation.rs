//! Required-field validation

use super::field::{FieldName, FormValues};
use std::collections::BTreeMap;

/// Per-field validation messages, keyed in display order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<FieldName, &'static str>);

impl FormErrors {
    pub fn get(&self, field: FieldName) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn contains(&self, field: FieldName) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = FieldName> + '_ {
        self.0.keys().copied()
    }
}

impl FromIterator<(FieldName, &'static str)> for FormErrors {
    fn from_iter<I: IntoIterator<Item = (FieldName, &'static str)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Message shown when a required field is left empty
pub fn required_message(field: FieldName) -> &'static str {
    match field {
        FieldName::Name => "Name is required",
        FieldName::Address => "Address is required",
        FieldName::Country => "Country is required",
        FieldName::Gender => "Gender is required",
        FieldName::Hobbies => "Hobbies are required",
    }
}

fn is_missing(values: &FormValues, field: FieldName) -> bool {
    match field {
        FieldName::Name => values.name.is_empty(),
        FieldName::Address => values.address.is_empty(),
        FieldName::Country => values.country.is_none(),
        FieldName::Gender => values.gender.is_none(),
        FieldName::Hobbies => values.hobbies.is_empty(),
    }
}

/// Validate every field. Only emptiness is checked: whitespace counts as a value.
pub fn validate(values: &FormValues) -> FormErrors {
    FieldName::ALL
        .into_iter()
        .filter(|f| is_missing(values, *f))
        .map(|f| (f, required_message(f)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::field::{Country, Gender, Hobby};
    use pretty_assertions::assert_eq;

    fn complete() -> FormValues {
        FormValues {
            name: "Jane".to_string(),
            address: "1 Main St".to_string(),
            country: Some(Country::Usa),
            gender: Some(Gender::Female),
            hobbies: vec![Hobby::Reading, Hobby::Sports],
        }
    }

    #[test]
    fn test_complete_values_have_no_errors() {
        assert_eq!(validate(&complete()), FormErrors::default());
    }

    #[test]
    fn test_empty_name_reports_only_name() {
        let values = FormValues {
            name: String::new(),
            hobbies: vec![Hobby::Reading],
            ..complete()
        };
        let errors = validate(&values);
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec![FieldName::Name]);
        assert_eq!(errors.get(FieldName::Name), Some("Name is required"));
    }

    #[test]
    fn test_defaults_report_every_field() {
        let errors = validate(&FormValues::default());
        assert_eq!(errors.fields().collect::<Vec<_>>(), FieldName::ALL.to_vec());
        assert_eq!(errors.get(FieldName::Hobbies), Some("Hobbies are required"));
        assert_eq!(errors.get(FieldName::Country), Some("Country is required"));
        assert_eq!(errors.get(FieldName::Gender), Some("Gender is required"));
        assert_eq!(errors.get(FieldName::Address), Some("Address is required"));
    }

    #[test]
    fn test_each_default_field_is_reported_alone() {
        for field in FieldName::ALL {
            let mut values = complete();
            match field {
                FieldName::Name => values.name.clear(),
                FieldName::Address => values.address.clear(),
                FieldName::Country => values.country = None,
                FieldName::Gender => values.gender = None,
                FieldName::Hobbies => values.hobbies.clear(),
            }
            let errors = validate(&values);
            assert_eq!(errors.len(), 1, "{field}");
            assert_eq!(errors.get(field), Some(required_message(field)));
        }
    }

    #[test]
    fn test_whitespace_counts_as_a_value() {
        let values = FormValues {
            name: " ".to_string(),
            ..complete()
        };
        assert!(validate(&values).is_empty());
    }
}
