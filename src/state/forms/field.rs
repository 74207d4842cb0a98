//! Form field names, option sets and value objects

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised when driving the form with inconsistent input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("unknown form field: {0}")]
    UnknownField(String),
    #[error("field `{field}` does not accept a {kind} value")]
    ValueMismatch { field: FieldName, kind: &'static str },
}

/// The five fields of the profile form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldName {
    Name,
    Address,
    Country,
    Gender,
    Hobbies,
}

impl FieldName {
    pub const ALL: [FieldName; 5] = [
        FieldName::Name,
        FieldName::Address,
        FieldName::Country,
        FieldName::Gender,
        FieldName::Hobbies,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Address => "address",
            Self::Country => "country",
            Self::Gender => "gender",
            Self::Hobbies => "hobbies",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Address => "Address",
            Self::Country => "Country",
            Self::Gender => "Gender",
            Self::Hobbies => "Hobbies/Interests",
        }
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, Self::Address)
    }

    /// Text fields take keystrokes; the rest are picked from fixed options
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Name | Self::Address)
    }

    pub fn is_choice(&self) -> bool {
        !self.is_text()
    }

    /// Position in the focus order
    pub fn index(&self) -> usize {
        Self::ALL
            .iter()
            .position(|f| f == self)
            .unwrap_or_default()
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for FieldName {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.key() == s)
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}

/// A fixed set of labelled options backing a choice field
pub trait Choice: Copy + PartialEq + Sized + 'static {
    const OPTIONS: &'static [Self];

    fn value(&self) -> &'static str;
    fn label(&self) -> &'static str;

    fn position(&self) -> usize {
        Self::OPTIONS
            .iter()
            .position(|o| o == self)
            .unwrap_or_default()
    }

    /// Next option, starting at the first when nothing is selected yet
    fn next_option(current: Option<Self>) -> Self {
        match current {
            None => Self::OPTIONS[0],
            Some(c) => Self::OPTIONS[(c.position() + 1) % Self::OPTIONS.len()],
        }
    }

    /// Previous option, starting at the last when nothing is selected yet
    fn prev_option(current: Option<Self>) -> Self {
        let count = Self::OPTIONS.len();
        match current {
            None => Self::OPTIONS[count - 1],
            Some(c) => Self::OPTIONS[(c.position() + count - 1) % count],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Country {
    Usa,
    Canada,
    Uk,
}

impl Choice for Country {
    const OPTIONS: &'static [Self] = &[Country::Usa, Country::Canada, Country::Uk];

    fn value(&self) -> &'static str {
        match self {
            Self::Usa => "usa",
            Self::Canada => "canada",
            Self::Uk => "uk",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Usa => "USA",
            Self::Canada => "Canada",
            Self::Uk => "UK",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Choice for Gender {
    const OPTIONS: &'static [Self] = &[Gender::Male, Gender::Female, Gender::Other];

    fn value(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hobby {
    Reading,
    Sports,
    Cooking,
}

impl Choice for Hobby {
    const OPTIONS: &'static [Self] = &[Hobby::Reading, Hobby::Sports, Hobby::Cooking];

    fn value(&self) -> &'static str {
        match self {
            Self::Reading => "reading",
            Self::Sports => "sports",
            Self::Cooking => "cooking",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Reading => "Reading",
            Self::Sports => "Sports",
            Self::Cooking => "Cooking",
        }
    }
}

/// Type-safe field values, one variant per field kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Country(Option<Country>),
    Gender(Option<Gender>),
    Hobbies(Vec<Hobby>),
}

impl FieldValue {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Country(_) => "country",
            Self::Gender(_) => "gender",
            Self::Hobbies(_) => "hobbies",
        }
    }
}

/// Current values of every field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormValues {
    pub name: String,
    pub address: String,
    pub country: Option<Country>,
    pub gender: Option<Gender>,
    #[serde(default)]
    pub hobbies: Vec<Hobby>,
}

impl FormValues {
    /// Store a value, rejecting one whose kind does not fit the field
    pub fn set(&mut self, field: FieldName, value: FieldValue) -> Result<(), FormError> {
        match (field, value) {
            (FieldName::Name, FieldValue::Text(s)) => self.name = s,
            (FieldName::Address, FieldValue::Text(s)) => self.address = s,
            (FieldName::Country, FieldValue::Country(c)) => self.country = c,
            (FieldName::Gender, FieldValue::Gender(g)) => self.gender = g,
            (FieldName::Hobbies, FieldValue::Hobbies(h)) => self.hobbies = h,
            (field, value) => {
                return Err(FormError::ValueMismatch {
                    field,
                    kind: value.kind(),
                })
            }
        }
        Ok(())
    }

    pub fn text(&self, field: FieldName) -> &str {
        match field {
            FieldName::Name => &self.name,
            FieldName::Address => &self.address,
            _ => "",
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self, field: FieldName) -> String {
        match field {
            FieldName::Name => self.name.clone(),
            FieldName::Address => self.address.clone(),
            FieldName::Country => self.country.map(|c| c.label()).unwrap_or_default().into(),
            FieldName::Gender => self.gender.map(|g| g.label()).unwrap_or_default().into(),
            FieldName::Hobbies => self
                .hobbies
                .iter()
                .map(|h| h.value())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_field_name_parses_keys() {
        for field in FieldName::ALL {
            assert_eq!(field.key().parse::<FieldName>(), Ok(field));
        }
    }

    #[test]
    fn test_unknown_field_key_is_rejected() {
        assert_eq!(
            "email".parse::<FieldName>(),
            Err(FormError::UnknownField("email".to_string()))
        );
    }

    #[test]
    fn test_index_round_trips_focus_order() {
        assert_eq!(FieldName::Name.index(), 0);
        assert_eq!(FieldName::Hobbies.index(), 4);
        assert_eq!(FieldName::from_index(2), Some(FieldName::Country));
        assert_eq!(FieldName::from_index(5), None);
    }

    #[test]
    fn test_only_address_is_multiline() {
        let multiline: Vec<_> = FieldName::ALL
            .into_iter()
            .filter(|f| f.is_multiline())
            .collect();
        assert_eq!(multiline, vec![FieldName::Address]);
    }

    #[test]
    fn test_next_option_starts_at_first_and_wraps() {
        assert_eq!(Country::next_option(None), Country::Usa);
        assert_eq!(Country::next_option(Some(Country::Usa)), Country::Canada);
        assert_eq!(Country::next_option(Some(Country::Uk)), Country::Usa);
    }

    #[test]
    fn test_prev_option_starts_at_last_and_wraps() {
        assert_eq!(Gender::prev_option(None), Gender::Other);
        assert_eq!(Gender::prev_option(Some(Gender::Male)), Gender::Other);
        assert_eq!(Gender::prev_option(Some(Gender::Female)), Gender::Male);
    }

    #[test]
    fn test_set_rejects_mismatched_kind() {
        let mut values = FormValues::default();
        let err = values
            .set(FieldName::Name, FieldValue::Hobbies(vec![Hobby::Reading]))
            .unwrap_err();
        assert_eq!(
            err,
            FormError::ValueMismatch {
                field: FieldName::Name,
                kind: "hobbies"
            }
        );
        assert_eq!(values, FormValues::default());
    }

    #[test]
    fn test_set_stores_value() {
        let mut values = FormValues::default();
        values
            .set(FieldName::Country, FieldValue::Country(Some(Country::Uk)))
            .unwrap();
        values
            .set(FieldName::Address, FieldValue::Text("10 Downing St".to_string()))
            .unwrap();
        assert_eq!(values.country, Some(Country::Uk));
        assert_eq!(values.text(FieldName::Address), "10 Downing St");
    }

    #[test]
    fn test_serializes_with_lowercase_option_values() {
        let values = FormValues {
            name: "Jane".to_string(),
            address: "1 Main St".to_string(),
            country: Some(Country::Usa),
            gender: Some(Gender::Female),
            hobbies: vec![Hobby::Reading, Hobby::Sports],
        };
        let json = serde_json::to_value(&values).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Jane",
                "address": "1 Main St",
                "country": "usa",
                "gender": "female",
                "hobbies": ["reading", "sports"],
            })
        );
    }

    #[test]
    fn test_default_hobbies_is_empty_list() {
        let values: FormValues =
            serde_json::from_str(r#"{"name":"","address":"","country":null,"gender":null}"#)
                .unwrap();
        assert!(values.hobbies.is_empty());
    }

    #[test]
    fn test_display_value_joins_hobbies() {
        let values = FormValues {
            hobbies: vec![Hobby::Cooking, Hobby::Reading],
            ..Default::default()
        };
        assert_eq!(values.display_value(FieldName::Hobbies), "cooking, reading");
        assert_eq!(values.display_value(FieldName::Country), "");
    }
}
