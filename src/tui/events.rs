//! Dashboard event handling
//!
//! Polls crossterm events and translates keyboard input into app state
//! mutations. Parameter edits recompute the simulation inside the `App`
//! methods; this module only routes.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};

use super::app::App;

/// Result of polling for a terminal event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// User pressed quit (q, Esc or Ctrl+C).
    Quit,
    /// User toggled the help overlay.
    Help,
    /// Focus the next parameter field.
    NextField,
    /// Focus the previous parameter field.
    PrevField,
    /// Step the focused field up.
    Increase,
    /// Step the focused field down.
    Decrease,
    /// Rerun with fresh samples.
    Resample,
    /// A terminal resize occurred.
    Resize(u16, u16),
    /// No actionable event within the poll window.
    None,
}

/// Polls for a single input event with the given timeout.
///
/// Never panics; polling errors surface as `InputEvent::None`.
pub fn poll_event(timeout: Duration) -> InputEvent {
    let available = match event::poll(timeout) {
        Ok(v) => v,
        Err(_) => return InputEvent::None,
    };
    if !available {
        return InputEvent::None;
    }

    match event::read() {
        Ok(Event::Key(key)) => translate_key(key),
        Ok(Event::Resize(w, h)) => InputEvent::Resize(w, h),
        _ => InputEvent::None,
    }
}

/// Applies an input event to the app state.
pub fn apply_event(app: &mut App, event: InputEvent) {
    match event {
        InputEvent::Quit => app.should_quit = true,
        InputEvent::Help => app.show_help = !app.show_help,
        InputEvent::NextField => app.focus_next(),
        InputEvent::PrevField => app.focus_prev(),
        InputEvent::Increase => app.increase(),
        InputEvent::Decrease => app.decrease(),
        InputEvent::Resample => app.resample(),
        InputEvent::Resize(_, _) | InputEvent::None => {}
    }
}

/// Translates a crossterm key event to an `InputEvent`.
fn translate_key(key: KeyEvent) -> InputEvent {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return InputEvent::Quit;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => InputEvent::Quit,
        KeyCode::Char('h') | KeyCode::Char('H') => InputEvent::Help,
        KeyCode::Char('r') | KeyCode::Char('R') => InputEvent::Resample,
        KeyCode::Tab => InputEvent::NextField,
        KeyCode::BackTab => InputEvent::PrevField,
        KeyCode::Up | KeyCode::Right | KeyCode::Char('+') => InputEvent::Increase,
        KeyCode::Down | KeyCode::Left | KeyCode::Char('-') => InputEvent::Decrease,
        _ => InputEvent::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::app::Field;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_translate_quit_keys() {
        assert_eq!(translate_key(key(KeyCode::Char('q'))), InputEvent::Quit);
        assert_eq!(translate_key(key(KeyCode::Esc)), InputEvent::Quit);
        assert_eq!(
            translate_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            InputEvent::Quit
        );
    }

    #[test]
    fn test_translate_field_navigation() {
        assert_eq!(translate_key(key(KeyCode::Tab)), InputEvent::NextField);
        assert_eq!(translate_key(key(KeyCode::BackTab)), InputEvent::PrevField);
    }

    #[test]
    fn test_translate_adjustment_keys() {
        assert_eq!(translate_key(key(KeyCode::Up)), InputEvent::Increase);
        assert_eq!(translate_key(key(KeyCode::Right)), InputEvent::Increase);
        assert_eq!(translate_key(key(KeyCode::Down)), InputEvent::Decrease);
        assert_eq!(translate_key(key(KeyCode::Char('-'))), InputEvent::Decrease);
    }

    #[test]
    fn test_translate_unknown_key_is_none() {
        assert_eq!(translate_key(key(KeyCode::Char('x'))), InputEvent::None);
    }

    #[test]
    fn test_apply_quit() {
        let mut app = App::new(42);
        apply_event(&mut app, InputEvent::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn test_apply_help_toggles() {
        let mut app = App::new(42);
        apply_event(&mut app, InputEvent::Help);
        assert!(app.show_help);
        apply_event(&mut app, InputEvent::Help);
        assert!(!app.show_help);
    }

    #[test]
    fn test_apply_field_navigation_and_step() {
        let mut app = App::new(42);
        assert_eq!(app.focus, Field::SampleA);
        apply_event(&mut app, InputEvent::NextField);
        assert_eq!(app.focus, Field::RateA);

        let before = app.rate_a_pct;
        apply_event(&mut app, InputEvent::Increase);
        assert_eq!(app.rate_a_pct, before + 1);
    }

    #[test]
    fn test_apply_none_is_inert() {
        let mut app = App::new(42);
        let status = app.status.clone();
        apply_event(&mut app, InputEvent::None);
        apply_event(&mut app, InputEvent::Resize(120, 40));
        assert!(!app.should_quit);
        assert_eq!(app.status, status);
    }
}
