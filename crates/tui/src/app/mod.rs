use crate::input::{Control, FocusState};
use crate::keybinds::Keybinds;
use crate::ui::layout::LayoutState;
use crate::ui::panel::PanelType;
use crate::Config;
use anyhow::Result;
use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use ratatui::Frame;
use shipbook_booking::{BookingForm, Choice, Field, FieldKind, Step, StepButton, Submission};
use shipbook_directory::CountryDirectory;
use std::future::Future;
use tokio::sync::mpsc;

mod actions;
mod effects;
mod input;
mod render;
mod state;
mod types;

pub use state::App;
pub use types::{AppAsyncEvent, Picker};

impl App {
    pub(super) fn report_error(&mut self, context: &str, error: impl std::fmt::Display) {
        let message = format!("{context}: {error}");
        self.last_error = Some(message.clone());
        tracing::warn!("{message}");
    }

    pub(super) fn clear_error(&mut self) {
        self.last_error = None;
    }

    pub(super) fn spawn_app_task<F>(&self, future: F)
    where
        F: Future<Output = AppAsyncEvent> + Send + 'static,
    {
        if let Some(tx) = self.app_async_tx.clone() {
            tokio::spawn(async move {
                let event = future.await;
                let _ = tx.send(event);
            });
        }
    }

    pub fn submission(&self) -> Option<&Submission> {
        self.booking.submission.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::{App, AppAsyncEvent};
    use crate::input::Control;
    use crate::Config;
    use ratatui::backend::TestBackend;
    use ratatui::crossterm::event::{
        Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    };
    use ratatui::Terminal;
    use shipbook_booking::{Field, Step, StepButton, EMPTY_PLACEHOLDER};

    fn press(app: &mut App, code: KeyCode) {
        app.handle_event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
            .expect("handle key");
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn draw(app: &mut App) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(90, 40)).expect("terminal");
        terminal.draw(|frame| app.render(frame)).expect("draw");
        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }

    fn screen_contains(lines: &[String], needle: &str) -> bool {
        lines.iter().any(|line| line.contains(needle))
    }

    fn load_countries(app: &mut App, countries: &[&str]) {
        let tx = app.app_async_tx.as_ref().expect("async tx").clone();
        tx.send(AppAsyncEvent::CountriesLoaded {
            countries: countries.iter().map(|c| c.to_string()).collect(),
            error: None,
        })
        .expect("send countries");
        app.process_async_events();
    }

    #[test]
    fn loaded_countries_fill_catalog_and_suggestions() {
        let mut app = App::new(Config::default());
        app.booking.catalog.begin_loading();

        load_countries(&mut app, &["Aruba", "Canada", "Chad", "Denmark", "Zambia"]);

        assert!(!app.booking.catalog.is_loading);
        assert_eq!(app.booking.catalog.countries.len(), 5);
        assert_eq!(
            app.booking.catalog.suggested,
            vec!["Aruba", "Canada", "Chad", "Denmark"]
        );
    }

    #[test]
    fn failed_fetch_is_surfaced_to_the_user() {
        let mut app = App::new(Config::default());
        app.booking.catalog.begin_loading();
        let tx = app.app_async_tx.as_ref().expect("async tx").clone();
        tx.send(AppAsyncEvent::CountriesLoaded {
            countries: Vec::new(),
            error: Some("Failed to fetch countries.".to_string()),
        })
        .expect("send failure");

        app.process_async_events();

        assert!(!app.booking.catalog.is_loading);
        assert!(app.booking.catalog.is_empty());
        assert!(app.last_error.is_some());
        let screen = draw(&mut app);
        assert!(screen_contains(&screen, "Countries unavailable"));
    }

    #[test]
    fn misconfigured_directory_fails_without_spawning() {
        let mut config = Config::default();
        config.directory.base_url = "not a url".to_string();
        let mut app = App::new(config);

        app.fetch_countries();

        assert!(!app.booking.catalog.is_loading);
        assert!(app.booking.catalog.error.is_some());
        assert!(app.last_error.is_some());
    }

    #[tokio::test]
    async fn unreachable_directory_ends_loading_with_error() {
        std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        let addr = listener.local_addr().expect("local addr");
        drop(listener);

        let mut config = Config::default();
        config.directory.base_url = format!("http://{addr}");
        let mut app = App::new(config);

        app.init().await.expect("init");
        assert!(app.booking.catalog.is_loading);

        for _ in 0..100 {
            app.process_async_events();
            if !app.booking.catalog.is_loading {
                break;
            }
            tokio::time::sleep(std::time::Duration::from_millis(50)).await;
        }

        assert!(!app.booking.catalog.is_loading);
        assert!(app.booking.catalog.is_empty());
        assert!(app.booking.catalog.error.is_some());
    }

    #[test]
    fn first_step_renders_shipment_fields_only() {
        let mut app = App::new(Config::default());
        let screen = draw(&mut app);

        assert!(screen_contains(&screen, "Select a country"));
        assert!(screen_contains(&screen, "Cargo Type"));
        assert!(screen_contains(&screen, "Weight"));
        assert!(screen_contains(&screen, "Next"));
        assert!(!screen_contains(&screen, "Pickup Type"));
        assert!(!screen_contains(&screen, "Previous"));
    }

    #[test]
    fn second_step_renders_delivery_fields_only() {
        let mut app = App::new(Config::default());
        app.go_to_step(Step::Delivery);
        let screen = draw(&mut app);

        assert!(screen_contains(&screen, "Pickup Type"));
        assert!(screen_contains(&screen, "Previous"));
        assert!(!screen_contains(&screen, "Cargo Type"));
        assert!(!screen_contains(&screen, "Select a country"));
    }

    #[test]
    fn review_step_shows_placeholders_and_literal_values() {
        let mut app = App::new(Config::default());
        app.update_field(Field::DeliveryAddress, "12 Harbour Road");
        app.go_to_step(Step::Confirmation);
        let screen = draw(&mut app);

        assert!(screen_contains(&screen, "Review Your Information"));
        assert!(screen_contains(&screen, "12 Harbour Road"));
        let placeholders = screen
            .iter()
            .filter(|line| line.trim().trim_matches('│').trim() == EMPTY_PLACEHOLDER)
            .count();
        assert_eq!(placeholders, 5);
        assert!(screen_contains(&screen, "Submit"));
    }

    #[test]
    fn next_button_advances_and_previous_goes_back() {
        let mut app = App::new(Config::default());
        app.focus.focus(Control::Button(StepButton::Next));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.booking.step, Step::Delivery);

        app.focus.focus(Control::Button(StepButton::Previous));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.booking.step, Step::Shipment);
    }

    #[test]
    fn typing_goes_into_the_focused_text_field() {
        let mut app = App::new(Config::default());
        app.focus.focus(Control::Field(Field::Weight));
        type_text(&mut app, "12kg");
        assert_eq!(app.booking.form.weight, "12");

        app.go_to_step(Step::Delivery);
        type_text(&mut app, "Main St?");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.booking.form.delivery_address, "Main St");
        assert!(!app.show_help);
    }

    #[test]
    fn selector_picker_stores_option_value() {
        let mut app = App::new(Config::default());
        app.focus.focus(Control::Field(Field::CargoType));
        press(&mut app, KeyCode::Enter);
        assert!(app.picker.is_some());

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);

        assert!(app.picker.is_none());
        assert_eq!(app.booking.form.cargo_type, "electronics");
    }

    #[test]
    fn location_picker_filters_and_offers_suggestions() {
        let mut app = App::new(Config::default());
        load_countries(&mut app, &["Aruba", "Canada", "Chad", "Denmark", "Zambia"]);

        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.booking.form.selected_location, "Canada");

        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "zam");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.booking.form.selected_location, "Zambia");
    }

    #[test]
    fn clicking_the_indicator_jumps_to_any_step() {
        let mut app = App::new(Config::default());
        draw(&mut app);

        let (_, rect) = app.layout.indicator_segments()[2];
        app.handle_event(Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: rect.x + 1,
            row: rect.y + 1,
            modifiers: KeyModifiers::NONE,
        }))
        .expect("handle click");

        assert_eq!(app.booking.step, Step::Confirmation);
        assert_eq!(app.focus.current(), Some(Control::Button(StepButton::Previous)));
    }

    #[test]
    fn function_keys_jump_between_steps() {
        let mut app = App::new(Config::default());
        press(&mut app, KeyCode::F(3));
        assert_eq!(app.booking.step, Step::Confirmation);
        press(&mut app, KeyCode::F(2));
        assert_eq!(app.booking.step, Step::Delivery);
        press(&mut app, KeyCode::F(9));
        assert_eq!(app.booking.step, Step::Delivery);
    }

    #[test]
    fn submit_snapshots_booking_and_shows_confirmation() {
        let mut app = App::new(Config::default());
        app.update_field(Field::SelectedLocation, "Chad");
        app.go_to_step(Step::Confirmation);
        app.focus.focus(Control::Button(StepButton::Submit));
        press(&mut app, KeyCode::Enter);

        assert!(app.show_submitted);
        let submission = app.submission().expect("submitted");
        assert_eq!(submission.form.selected_location, "Chad");

        press(&mut app, KeyCode::Enter);
        assert!(!app.show_submitted);
        assert!(!app.should_quit);
    }

    #[test]
    fn fetch_error_stays_in_status_line_after_submit() {
        let mut app = App::new(Config::default());
        app.booking.catalog.begin_loading();
        let tx = app.app_async_tx.as_ref().expect("async tx").clone();
        tx.send(AppAsyncEvent::CountriesLoaded {
            countries: Vec::new(),
            error: Some("Failed to fetch countries.".to_string()),
        })
        .expect("send failure");
        app.process_async_events();

        app.go_to_step(Step::Confirmation);
        app.submit();
        press(&mut app, KeyCode::Enter);

        let screen = draw(&mut app);
        let status = screen.last().expect("status line");
        assert!(status.contains("Failed to fetch countries."), "status: {status}");
        assert!(!status.contains("Booking submitted"));
        assert!(app.submission().is_some());
    }

    #[test]
    fn submit_without_errors_reports_in_status_line() {
        let mut app = App::new(Config::default());
        app.go_to_step(Step::Confirmation);
        app.submit();
        press(&mut app, KeyCode::Enter);

        let screen = draw(&mut app);
        let status = screen.last().expect("status line");
        assert!(status.contains("Booking submitted at"), "status: {status}");
    }

    #[test]
    fn f12_opens_help_while_a_text_field_has_focus() {
        let mut app = App::new(Config::default());
        app.go_to_step(Step::Delivery);
        assert_eq!(app.focus.current(), Some(Control::Field(Field::DeliveryAddress)));

        press(&mut app, KeyCode::F(12));
        assert!(app.show_help);
        assert_eq!(app.booking.form.delivery_address, "");

        press(&mut app, KeyCode::F(12));
        assert!(!app.show_help);
    }

    #[test]
    fn weight_and_unit_share_one_row() {
        let mut app = App::new(Config::default());
        let screen = draw(&mut app);

        let row = screen
            .iter()
            .find(|line| line.contains("Weight Unit"))
            .expect("unit selector row");
        assert!(row.contains("┌ Weight ─"), "row: {row}");
    }

    #[test]
    fn escape_quits_when_no_popup_is_open() {
        let mut app = App::new(Config::default());
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);
        press(&mut app, KeyCode::Esc);
        assert!(!app.show_help);
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }
}
