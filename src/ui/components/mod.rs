//! Reusable UI components

mod dialog;

pub use dialog::render_acknowledgement_dialog;
