use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::App;

/// Map a key press onto the session: `q` or Ctrl+C quits, `p` toggles
/// pause. Everything else is ignored.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    // Raw mode delivers Ctrl+C as a key event rather than SIGINT.
    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.request_quit(),
        KeyCode::Char('p') | KeyCode::Char('P') => app.toggle_pause(),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alert::{Alerter, Notifier};
    use crate::timer::TimerState;

    struct NullAlerter;

    impl Alerter for NullAlerter {
        fn alert(&self) {}
    }

    struct NullNotifier;

    impl Notifier for NullNotifier {
        fn notify(&self, _message: &str) {}
    }

    fn make_app() -> App {
        App::new(
            TimerState::new(25, 5),
            true,
            Box::new(NullAlerter),
            Box::new(NullNotifier),
        )
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    #[test]
    fn q_requests_quit() {
        let mut app = make_app();
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(app.should_quit());
    }

    #[test]
    fn ctrl_c_requests_quit() {
        let mut app = make_app();
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit());
    }

    #[test]
    fn p_toggles_pause() {
        let mut app = make_app();
        handle_key(&mut app, press(KeyCode::Char('p')));
        assert!(app.snapshot().paused);
        handle_key(&mut app, press(KeyCode::Char('p')));
        assert!(!app.snapshot().paused);
    }

    #[test]
    fn other_keys_are_ignored() {
        let mut app = make_app();
        handle_key(&mut app, press(KeyCode::Char('x')));
        handle_key(&mut app, press(KeyCode::Enter));
        assert!(!app.should_quit());
        assert!(!app.snapshot().paused);
    }
}
