//! Acknowledgement dialog shown after a valid submit

use super::base::{render_dialog, DialogConfig};
use crate::submit::Acknowledgement;
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

/// Render the acknowledgement overlay centered on the screen
pub fn render_acknowledgement_dialog(frame: &mut Frame, ack: &Acknowledgement) {
    let key = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let hint = vec![
        Span::raw("Press "),
        Span::styled("Enter", key),
        Span::raw(" to dismiss, "),
        Span::styled(crate::platform::COPY_SHORTCUT, key),
        Span::raw(" to copy"),
    ];

    let values = &ack.submission.values;
    let message = format!(
        "{}\n\nName: {}\nCountry: {}\nHobbies: {}",
        ack.message,
        values.name,
        values.display_value(crate::state::FieldName::Country),
        values.display_value(crate::state::FieldName::Hobbies),
    );

    render_dialog(
        frame,
        DialogConfig {
            title: "Submitted",
            title_color: Color::Green,
            border_color: Color::Green,
            message: &message,
            hint: Some(hint),
            max_width: 60,
        },
    );
}
