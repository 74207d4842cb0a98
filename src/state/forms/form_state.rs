//! Form controller: values, touched flags and validation errors

use super::field::{Choice, FieldName, FieldValue, FormError, FormValues, Hobby};
use super::validation::{validate, FormErrors};
use crate::submit::{SubmitNotifier, SubmitOutcome, Submission};
use std::collections::BTreeSet;

/// Trait for common form focus operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Owns the profile form's values, touched set and errors
#[derive(Debug, Clone)]
pub struct FormController {
    values: FormValues,
    touched: BTreeSet<FieldName>,
    errors: FormErrors,
    /// 0-4 are fields, 5 is the submit row
    pub active_field_index: usize,
    /// Highlighted option inside the hobbies list
    pub option_cursor: usize,
    submit_count: u32,
    touch_choices_on_change: bool,
}

impl FormController {
    /// Index of the submit row in the focus order
    pub const SUBMIT_ROW: usize = FieldName::ALL.len();

    pub fn new() -> Self {
        Self::with_options(false)
    }

    /// `touch_choices_on_change` marks choice fields touched as soon as they change
    pub fn with_options(touch_choices_on_change: bool) -> Self {
        let values = FormValues::default();
        let errors = validate(&values);
        Self {
            values,
            touched: BTreeSet::new(),
            errors,
            active_field_index: 0,
            option_cursor: 0,
            submit_count: 0,
            touch_choices_on_change,
        }
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn is_touched(&self, field: FieldName) -> bool {
        self.touched.contains(&field)
    }

    /// Set a field's value and revalidate the whole form
    pub fn change(&mut self, field: FieldName, value: FieldValue) -> Result<(), FormError> {
        self.values.set(field, value)?;
        if self.touch_choices_on_change && field.is_choice() {
            self.touched.insert(field);
        }
        self.errors = validate(&self.values);
        tracing::debug!(%field, errors = self.errors.len(), "Field changed");
        Ok(())
    }

    /// Record that a field lost focus
    pub fn blur(&mut self, field: FieldName) {
        self.touched.insert(field);
        self.errors = validate(&self.values);
    }

    /// Whether a field's error should be displayed
    pub fn show_error(&self, field: FieldName) -> bool {
        self.is_touched(field) && self.errors.contains(field)
    }

    pub fn visible_error(&self, field: FieldName) -> Option<&'static str> {
        if self.show_error(field) {
            self.errors.get(field)
        } else {
            None
        }
    }

    /// Touch every field, validate, and hand valid values to the notifier
    pub fn submit<N: SubmitNotifier + ?Sized>(&mut self, notifier: &mut N) -> SubmitOutcome {
        self.submit_count += 1;
        self.touched.extend(FieldName::ALL);
        self.errors = validate(&self.values);

        if !self.errors.is_empty() {
            let missing: Vec<_> = self.errors.fields().collect();
            tracing::info!(attempt = self.submit_count, ?missing, "Submit blocked by validation");
            return SubmitOutcome::Blocked(self.errors.clone());
        }

        let submission = Submission::new(self.values.clone());
        tracing::debug!(attempt = self.submit_count, id = %submission.id, "Submitting form");
        notifier.notify(&submission);
        SubmitOutcome::Submitted(submission)
    }

    pub fn active_field_name(&self) -> Option<FieldName> {
        FieldName::from_index(self.active_field_index)
    }

    /// Returns true if the submit row is currently active
    pub fn is_submit_row_active(&self) -> bool {
        self.active_field_index == Self::SUBMIT_ROW
    }

    pub fn is_active_field_multiline(&self) -> bool {
        self.active_field_name().is_some_and(|f| f.is_multiline())
    }

    /// Push a character to the active text field
    pub fn input_char(&mut self, c: char) -> Result<(), FormError> {
        match self.active_field_name() {
            Some(field) if field.is_text() => {
                let mut text = self.values.text(field).to_string();
                text.push(c);
                self.change(field, FieldValue::Text(text))
            }
            _ => Ok(()),
        }
    }

    /// Remove the last character from the active text field
    pub fn backspace(&mut self) -> Result<(), FormError> {
        match self.active_field_name() {
            Some(field) if field.is_text() => {
                let mut text = self.values.text(field).to_string();
                if text.pop().is_none() {
                    return Ok(());
                }
                self.change(field, FieldValue::Text(text))
            }
            _ => Ok(()),
        }
    }

    /// Insert a line break when the active field is multiline
    pub fn newline(&mut self) -> Result<(), FormError> {
        if self.is_active_field_multiline() {
            self.input_char('\n')
        } else {
            Ok(())
        }
    }

    /// Step the active single-choice field, or the hobbies cursor
    pub fn cycle_choice(&mut self, forward: bool) -> Result<(), FormError> {
        match self.active_field_name() {
            Some(FieldName::Country) => {
                let next = step(self.values.country, forward);
                self.change(FieldName::Country, FieldValue::Country(Some(next)))
            }
            Some(FieldName::Gender) => {
                let next = step(self.values.gender, forward);
                self.change(FieldName::Gender, FieldValue::Gender(Some(next)))
            }
            Some(FieldName::Hobbies) => {
                let count = Hobby::OPTIONS.len();
                self.option_cursor = if forward {
                    (self.option_cursor + 1) % count
                } else {
                    (self.option_cursor + count - 1) % count
                };
                Ok(())
            }
            _ => Ok(()),
        }
    }

    /// Toggle the hobby under the cursor when the hobbies field is active
    pub fn toggle_hobby_at_cursor(&mut self) -> Result<(), FormError> {
        if self.active_field_name() != Some(FieldName::Hobbies) {
            return Ok(());
        }
        match Hobby::OPTIONS.get(self.option_cursor) {
            Some(hobby) => self.toggle_hobby(*hobby),
            None => Ok(()),
        }
    }

    /// Add a hobby at the end of the selection, or remove it if present
    pub fn toggle_hobby(&mut self, hobby: Hobby) -> Result<(), FormError> {
        let mut hobbies = self.values.hobbies.clone();
        if let Some(pos) = hobbies.iter().position(|h| *h == hobby) {
            hobbies.remove(pos);
        } else {
            hobbies.push(hobby);
        }
        self.change(FieldName::Hobbies, FieldValue::Hobbies(hobbies))
    }
}

fn step<C: Choice>(current: Option<C>, forward: bool) -> C {
    if forward {
        C::next_option(current)
    } else {
        C::prev_option(current)
    }
}

impl Default for FormController {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for FormController {
    fn field_count(&self) -> usize {
        Self::SUBMIT_ROW + 1 // five fields, submit row
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        let index = index.min(Self::SUBMIT_ROW);
        if index == self.active_field_index {
            return;
        }
        // Focus leaving a field is a blur
        if let Some(field) = self.active_field_name() {
            self.blur(field);
        }
        self.active_field_index = index;
        self.option_cursor = 0;
    }
}
