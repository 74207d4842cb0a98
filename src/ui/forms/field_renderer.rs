//! Field rendering utilities for forms

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// One option of a choice field as it should be drawn
pub struct OptionItem<'a> {
    pub label: &'a str,
    pub selected: bool,
    /// Cursor position inside a multi-select
    pub highlighted: bool,
}

/// Markers drawn in front of selected and unselected options
#[derive(Clone, Copy)]
pub enum OptionMarker {
    Radio,
    Checkbox,
}

impl OptionMarker {
    fn symbol(self, selected: bool) -> &'static str {
        match (self, selected) {
            (Self::Radio, true) => "(•)",
            (Self::Radio, false) => "( )",
            (Self::Checkbox, true) => "[x]",
            (Self::Checkbox, false) => "[ ]",
        }
    }
}

fn field_block<'a>(label: &'a str, is_active: bool, error: Option<&'a str>) -> Block<'a> {
    let border_color = match (error, is_active) {
        (Some(_), _) => Color::Red,
        (None, true) => Color::Cyan,
        (None, false) => Color::DarkGray,
    };

    let mut block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    if let Some(message) = error {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {message} "),
            Style::default().fg(Color::Red),
        )));
    }

    block
}

/// Draw a text field, with its error under the value when one is visible
pub fn draw_text_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    is_active: bool,
    is_multiline: bool,
    error: Option<&str>,
) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let display_value = if value.is_empty() && !is_active {
        "(empty)"
    } else {
        value
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = if is_multiline {
        let mut lines: Vec<Line> = display_value
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), style)))
            .collect();
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans
                    .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
            }
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(display_value, style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    };

    let block = field_block(label, is_active, error);
    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

/// Draw a single- or multi-choice field as a row of options
pub fn draw_choice_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    options: &[OptionItem],
    marker: OptionMarker,
    is_active: bool,
    error: Option<&str>,
) {
    let mut spans = Vec::with_capacity(options.len() * 2);
    for (i, option) in options.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("   "));
        }

        let mut style = if option.selected {
            Style::default().fg(Color::Green)
        } else if is_active {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        if is_active && option.highlighted {
            style = style.add_modifier(Modifier::REVERSED);
        }

        spans.push(Span::styled(
            format!("{} {}", marker.symbol(option.selected), option.label),
            style,
        ));
    }

    let block = field_block(label, is_active, error);
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
