//! Submission records and the notifier invoked on a valid submit

use crate::state::{FormErrors, FormValues};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default acknowledgement shown after a valid submit
pub const DEFAULT_ACKNOWLEDGEMENT: &str = "Form submitted successfully!";

/// A validated snapshot of the form, handed to the notifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub values: FormValues,
}

impl Submission {
    pub fn new(values: FormValues) -> Self {
        Self {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            values,
        }
    }

    /// The submitted values as pretty JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.values)
    }
}

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed, nothing was sent to the notifier
    Blocked(FormErrors),
    Submitted(Submission),
}

/// Side effect run once for every valid submit
#[cfg_attr(test, mockall::automock)]
pub trait SubmitNotifier {
    fn notify(&mut self, submission: &Submission);
}

/// Acknowledgement waiting to be dismissed by the user
#[derive(Debug, Clone)]
pub struct Acknowledgement {
    pub message: String,
    pub submission: Submission,
}

/// Logs each submission and raises a user-facing acknowledgement
#[derive(Debug, Default)]
pub struct AcknowledgingNotifier {
    message: Option<String>,
    pending: Option<Acknowledgement>,
}

impl AcknowledgingNotifier {
    pub fn new(message: Option<String>) -> Self {
        Self {
            message,
            pending: None,
        }
    }

    pub fn pending(&self) -> Option<&Acknowledgement> {
        self.pending.as_ref()
    }

    pub fn dismiss(&mut self) {
        self.pending = None;
    }
}

impl SubmitNotifier for AcknowledgingNotifier {
    fn notify(&mut self, submission: &Submission) {
        match serde_json::to_string(&submission.values) {
            Ok(record) => tracing::info!(id = %submission.id, %record, "Form submitted"),
            Err(err) => tracing::warn!(id = %submission.id, "Failed to serialize submission: {err}"),
        }

        let message = self
            .message
            .clone()
            .unwrap_or_else(|| DEFAULT_ACKNOWLEDGEMENT.to_string());
        self.pending = Some(Acknowledgement {
            message,
            submission: submission.clone(),
        });
    }
}
