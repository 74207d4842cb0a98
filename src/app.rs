//! Application state and core logic

use crate::config::FormConfig;
use crate::state::{FieldName, Form, FormController};
use crate::submit::{Acknowledgement, AcknowledgingNotifier, SubmitOutcome};
use anyhow::{Context, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Form values, touched flags and errors
    pub form: FormController,
    /// Receives valid submissions and holds the acknowledgement
    pub notifier: AcknowledgingNotifier,
    /// Whether the app should quit
    quit: bool,
    /// One-line feedback shown in the status bar
    pub status_message: Option<String>,
}

impl App {
    /// Create a new App instance
    pub fn new(config: &FormConfig) -> Self {
        Self {
            form: FormController::with_options(config.touch_choices_on_change()),
            notifier: AcknowledgingNotifier::new(config.acknowledgement.clone()),
            quit: false,
            status_message: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Acknowledgement dialog currently on screen, if any
    pub fn acknowledgement(&self) -> Option<&Acknowledgement> {
        self.notifier.pending()
    }

    /// Ctrl+C quits, except while the acknowledgement uses it to copy
    pub fn is_quit_key(&self, key: &KeyEvent) -> bool {
        if key.code != KeyCode::Char('c') || !key.modifiers.contains(KeyModifiers::CONTROL) {
            return false;
        }
        self.acknowledgement().is_none() || crate::platform::COPY_MODIFIER != KeyModifiers::CONTROL
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Acknowledgement dialog is modal
        if self.acknowledgement().is_some() {
            self.handle_acknowledgement_key(key);
            return Ok(());
        }

        // Clear any status messages on key press
        self.status_message = None;

        self.handle_form_key(key)
    }

    fn handle_acknowledgement_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Esc => self.notifier.dismiss(),
            KeyCode::Char('c') if key.modifiers.contains(crate::platform::COPY_MODIFIER) => {
                self.copy_submission()
            }
            KeyCode::Char('y') => self.copy_submission(),
            _ => {}
        }
    }

    /// Handle keys on the form
    fn handle_form_key(&mut self, key: KeyEvent) -> Result<()> {
        let on_submit_row = self.form.is_submit_row_active();
        let active = self.form.active_field_name();
        let on_choice = active.is_some_and(|f| f.is_choice());
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Tab => self.form.next_field(),
            KeyCode::BackTab => self.form.prev_field(),
            // Keyboard shortcut (works from anywhere)
            KeyCode::Char('s') if ctrl => self.submit(),
            KeyCode::Enter if on_submit_row => self.submit(),
            KeyCode::Esc => self.quit = true,
            KeyCode::Left | KeyCode::Up if on_choice => self.form.cycle_choice(false)?,
            KeyCode::Right | KeyCode::Down if on_choice => self.form.cycle_choice(true)?,
            KeyCode::Char(' ') | KeyCode::Enter if active == Some(FieldName::Hobbies) => {
                self.form.toggle_hobby_at_cursor()?
            }
            KeyCode::Char(c) if !ctrl => self.form.input_char(c)?,
            KeyCode::Backspace => self.form.backspace()?,
            // Enter in the address field adds a newline
            KeyCode::Enter => self.form.newline()?,
            _ => {}
        }
        Ok(())
    }

    /// Submit the form, reporting a blocked attempt in the status bar
    pub fn submit(&mut self) {
        match self.form.submit(&mut self.notifier) {
            SubmitOutcome::Submitted(_) => {}
            SubmitOutcome::Blocked(errors) => {
                let noun = if errors.len() == 1 { "field" } else { "fields" };
                self.status_message = Some(format!(
                    "Cannot submit: {} required {noun} missing",
                    errors.len()
                ));
            }
        }
    }

    fn copy_submission(&mut self) {
        let Some(ack) = self.notifier.pending() else {
            return;
        };
        let result = ack
            .submission
            .to_json()
            .context("Failed to serialize submission")
            .and_then(|json| copy_to_clipboard(&json));

        self.status_message = Some(match result {
            Ok(()) => "Copied submission to clipboard".to_string(),
            Err(err) => {
                tracing::warn!("Clipboard copy failed: {err:#}");
                format!("Copy failed: {err}")
            }
        });
    }
}

fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new().context("Clipboard unavailable")?;
    clipboard.set_text(text.to_string())?;
    Ok(())
}
