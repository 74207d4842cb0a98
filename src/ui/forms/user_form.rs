//! Profile form rendering

use super::field_renderer::{draw_choice_field, draw_text_field, OptionItem, OptionMarker};
use crate::app::App;
use crate::state::{Choice, FieldName, FormController, Hobby};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the profile form with its submit button and help text
pub fn draw_user_form(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.form;

    let block = Block::default()
        .title(" User Profile ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Name
            Constraint::Min(6),    // Address
            Constraint::Length(3), // Country
            Constraint::Length(3), // Gender
            Constraint::Length(3), // Hobbies
            Constraint::Length(3), // Submit
            Constraint::Length(1), // Help text
        ])
        .horizontal_margin(1)
        .split(inner);

    for field in FieldName::ALL {
        draw_field(frame, chunks[field.index()], form, field);
    }

    draw_submit_button(frame, chunks[5], form);

    draw_help_text(frame, chunks[6], form);
}

fn draw_field(frame: &mut Frame, area: Rect, form: &FormController, field: FieldName) {
    let is_active = form.active_field_name() == Some(field);
    let error = form.visible_error(field);
    let values = form.values();

    match field {
        FieldName::Name | FieldName::Address => draw_text_field(
            frame,
            area,
            field.label(),
            values.text(field),
            is_active,
            field.is_multiline(),
            error,
        ),
        FieldName::Country => {
            let options = single_choice_items(values.country);
            draw_choice_field(
                frame,
                area,
                field.label(),
                &options,
                OptionMarker::Radio,
                is_active,
                error,
            );
        }
        FieldName::Gender => {
            let options = single_choice_items(values.gender);
            draw_choice_field(
                frame,
                area,
                field.label(),
                &options,
                OptionMarker::Radio,
                is_active,
                error,
            );
        }
        FieldName::Hobbies => {
            let options: Vec<_> = Hobby::OPTIONS
                .iter()
                .enumerate()
                .map(|(i, hobby)| OptionItem {
                    label: hobby.label(),
                    selected: values.hobbies.contains(hobby),
                    highlighted: i == form.option_cursor,
                })
                .collect();
            draw_choice_field(
                frame,
                area,
                field.label(),
                &options,
                OptionMarker::Checkbox,
                is_active,
                error,
            );
        }
    }
}

/// The submit row. It stays focusable while the form is invalid so a submit
/// attempt can reveal every missing field.
fn draw_submit_button(frame: &mut Frame, area: Rect, form: &FormController) {
    let focused = form.is_submit_row_active();
    let shown_errors = FieldName::ALL
        .iter()
        .filter(|field| form.show_error(**field))
        .count();

    let label = match shown_errors {
        0 => " Submit ".to_string(),
        n => format!(" Submit ({n} missing) "),
    };
    let color = match (focused, form.errors().is_empty()) {
        (true, _) => Color::Cyan,
        (false, true) => Color::Green,
        (false, false) => Color::DarkGray,
    };
    let mut text_style = Style::default().fg(color);
    if focused {
        text_style = text_style.add_modifier(Modifier::BOLD);
    }
    let border = if focused { Color::Cyan } else { Color::DarkGray };

    let button = Paragraph::new(label)
        .alignment(Alignment::Center)
        .style(text_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        );
    frame.render_widget(button, area);
}

fn single_choice_items<C: Choice>(current: Option<C>) -> Vec<OptionItem<'static>> {
    C::OPTIONS
        .iter()
        .map(|option| OptionItem {
            label: option.label(),
            selected: current == Some(*option),
            highlighted: false,
        })
        .collect()
}

fn draw_help_text(frame: &mut Frame, area: Rect, form: &FormController) {
    let key = Style::default().fg(Color::Cyan);
    let mut spans = vec![Span::styled("Tab", key), Span::raw(": next field  ")];

    match form.active_field_name() {
        Some(FieldName::Country) | Some(FieldName::Gender) => {
            spans.push(Span::styled("←/→", key));
            spans.push(Span::raw(": choose  "));
        }
        Some(FieldName::Hobbies) => {
            spans.push(Span::styled("←/→", key));
            spans.push(Span::raw(": move  "));
            spans.push(Span::styled("Space", key));
            spans.push(Span::raw(": toggle  "));
        }
        Some(FieldName::Address) => {
            spans.push(Span::styled("Enter", key));
            spans.push(Span::raw(": new line  "));
        }
        Some(FieldName::Name) => {}
        None => {
            spans.push(Span::styled("Enter", key));
            spans.push(Span::raw(": submit  "));
        }
    }

    spans.push(Span::styled(crate::platform::SUBMIT_SHORTCUT, key));
    spans.push(Span::raw(": submit"));

    let help = Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}
