//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (main_area, status_area) = layout::create_layout(frame.area());

    forms::draw_user_form(frame, main_area, app);
    layout::draw_status_bar(frame, status_area, app);

    // Acknowledgement overlays everything else
    if let Some(ack) = app.acknowledgement() {
        components::render_acknowledgement_dialog(frame, ack);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FormConfig;
    use crate::state::{Country, FieldName, FieldValue, Gender, Hobby};
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn buffer_to_string(buf: &Buffer) -> String {
        let mut s = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                s.push(buf[(x, y)].symbol().chars().next().unwrap_or(' '));
            }
            s.push('\n');
        }
        s
    }

    fn render(app: &App) -> String {
        let backend = TestBackend::new(80, 36);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    fn filled_app() -> App {
        let mut app = App::new(&FormConfig::default());
        let form = &mut app.form;
        form.change(FieldName::Name, FieldValue::Text("Jane".to_string()))
            .unwrap();
        form.change(FieldName::Address, FieldValue::Text("1 Main St".to_string()))
            .unwrap();
        form.change(FieldName::Country, FieldValue::Country(Some(Country::Usa)))
            .unwrap();
        form.change(FieldName::Gender, FieldValue::Gender(Some(Gender::Female)))
            .unwrap();
        form.toggle_hobby(Hobby::Reading).unwrap();
        app
    }

    #[test]
    fn renders_all_fields_and_submit() {
        let output = render(&App::new(&FormConfig::default()));
        for label in ["Name", "Address", "Country", "Gender", "Hobbies/Interests", "Submit"] {
            assert!(output.contains(label), "should show {label}");
        }
        assert!(output.contains("( ) USA"), "should show country options");
        assert!(output.contains("[ ] Reading"), "should show hobby options");
    }

    #[test]
    fn hides_errors_before_blur() {
        let output = render(&App::new(&FormConfig::default()));
        assert!(!output.contains("Name is required"));
    }

    #[test]
    fn shows_error_after_blur() {
        let mut app = App::new(&FormConfig::default());
        app.form.blur(FieldName::Name);
        let output = render(&app);
        assert!(output.contains("Name is required"));
        assert!(!output.contains("Address is required"));
    }

    #[test]
    fn shows_every_error_after_blocked_submit() {
        let mut app = App::new(&FormConfig::default());
        app.submit();
        let output = render(&app);
        assert!(output.contains("Name is required"));
        assert!(output.contains("Address is required"));
        assert!(output.contains("Country is required"));
        assert!(output.contains("Gender is required"));
        assert!(output.contains("Hobbies are required"));
        assert!(output.contains("Submit (5 missing)"));
    }

    #[test]
    fn submit_button_counts_only_shown_errors() {
        let mut app = App::new(&FormConfig::default());
        assert!(!render(&app).contains("missing)"));
        app.form.blur(FieldName::Name);
        assert!(render(&app).contains("Submit (1 missing)"));
    }

    #[test]
    fn renders_selected_values() {
        let output = render(&filled_app());
        assert!(output.contains("Jane"));
        assert!(output.contains("(•) USA"));
        assert!(output.contains("(•) Female"));
        assert!(output.contains("[x] Reading"));
    }

    #[test]
    fn renders_acknowledgement_after_submit() {
        let mut app = filled_app();
        app.submit();
        let output = render(&app);
        assert!(output.contains("Form submitted successfully!"));
    }
}
