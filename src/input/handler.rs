use crate::app::AppState;
use crate::chime::Chime;
use crate::persistence::KeyValueStore;
use crate::ticker::TickScheduler;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key<S, K, C>(app: &mut AppState<S, K, C>, key: KeyEvent) -> bool
where
    S: TickScheduler,
    K: KeyValueStore,
    C: Chime,
{
    match key.code {
        // Start / pause
        KeyCode::Char(' ') | KeyCode::Enter => app.toggle_run_pause(),

        KeyCode::Char('r') | KeyCode::Char('R') => app.reset(),

        // Work duration
        KeyCode::Char('+') | KeyCode::Char('=') => app.increase_work(),
        KeyCode::Char('-') | KeyCode::Char('_') => app.decrease_work(),

        // Break duration
        KeyCode::Char(']') => app.increase_break(),
        KeyCode::Char('[') => app.decrease_break(),

        KeyCode::Char('h') | KeyCode::Char('H') => app.toggle_show_history(),

        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => app.quit(),

        _ => {}
    }

    app.should_quit
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chime::CountingChime;
    use crate::domain::TimerConfig;
    use crate::focus::FocusTimer;
    use crate::persistence::MemoryStore;
    use crate::ticker::ManualTicker;
    use crossterm::event::KeyEventKind;

    fn app() -> AppState<ManualTicker, MemoryStore, CountingChime> {
        AppState::new(FocusTimer::new(
            TimerConfig::default(),
            ManualTicker::new(),
            MemoryStore::new(),
            CountingChime::default(),
        ))
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: crossterm::event::KeyEventState::NONE,
        }
    }

    #[test]
    fn test_space_toggles() {
        let mut app = app();
        assert!(!handle_key(&mut app, press(KeyCode::Char(' '))));
        assert!(app.timer.is_running());
        handle_key(&mut app, press(KeyCode::Enter));
        assert!(!app.timer.is_running());
    }

    #[test]
    fn test_duration_keys() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Char('+')));
        assert_eq!(app.timer.config().work_secs(), 26 * 60);
        handle_key(&mut app, press(KeyCode::Char(']')));
        assert_eq!(app.timer.config().break_secs(), 6 * 60);
        handle_key(&mut app, press(KeyCode::Char('[')));
        handle_key(&mut app, press(KeyCode::Char('[')));
        assert_eq!(app.timer.config().break_secs(), 4 * 60);
    }

    #[test]
    fn test_reset_key() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Char(' ')));
        app.timer.scheduler_mut().advance(3);
        app.tick(std::time::Instant::now());
        handle_key(&mut app, press(KeyCode::Char('r')));
        assert_eq!(app.timer.remaining_secs(), 25 * 60);
        assert!(!app.timer.is_running());
    }

    #[test]
    fn test_history_toggle() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Char('h')));
        assert!(!app.show_history);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        assert!(handle_key(&mut app, press(KeyCode::Char('q'))));

        let mut app = self::app();
        let ctrl_c = KeyEvent {
            modifiers: KeyModifiers::CONTROL,
            ..press(KeyCode::Char('c'))
        };
        assert!(handle_key(&mut app, ctrl_c));
    }
}
