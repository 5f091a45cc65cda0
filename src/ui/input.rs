use crate::ui::app::App;
use crate::ui::news_input::NewsInput;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if is_ctrl_char(key, 'r') || key.code == KeyCode::F(5) {
        app.trigger_analysis();
        return;
    }

    if is_ctrl_char(key, 'e') {
        app.load_sample();
        return;
    }

    if is_ctrl_char(key, 'l') {
        app.clear();
        return;
    }

    let checker = app.checker();
    let proposed = NewsInput::new(&checker.text, checker.is_analyzing).on_key(key);
    if let Some(text) = proposed {
        app.on_text_changed(text);
    }
}

pub fn handle_paste(app: &mut App, pasted: &str) {
    let checker = app.checker();
    let proposed = NewsInput::new(&checker.text, checker.is_analyzing).on_paste(pasted);
    if let Some(text) = proposed {
        app.on_text_changed(text);
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, ConfigStore};
    use crossterm::event::KeyEventState;
    use std::path::PathBuf;

    fn make_app() -> App {
        App::new(ConfigStore::new(Config::default(), PathBuf::from("/tmp/newscheck-test.toml")))
    }

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    #[test]
    fn typing_flows_through_input_field() {
        let mut app = make_app();
        handle_key(&mut app, key(KeyCode::Char('H'), KeyModifiers::SHIFT));
        handle_key(&mut app, key(KeyCode::Char('i'), KeyModifiers::empty()));
        assert_eq!(app.checker().text, "Hi");
    }

    #[test]
    fn ctrl_q_quits() {
        let mut app = make_app();
        handle_key(&mut app, key(KeyCode::Char('q'), KeyModifiers::CONTROL));
        assert!(app.should_quit());
    }

    #[test]
    fn ctrl_r_on_blank_text_raises_error_toast() {
        let mut app = make_app();
        handle_key(&mut app, key(KeyCode::Char('r'), KeyModifiers::CONTROL));
        assert!(!app.checker().is_analyzing);
        assert_eq!(app.toasts().visible().len(), 1);
    }

    #[test]
    fn ctrl_e_loads_sample_and_ctrl_l_clears() {
        let mut app = make_app();
        handle_key(&mut app, key(KeyCode::Char('e'), KeyModifiers::CONTROL));
        assert!(!app.checker().text.is_empty());
        handle_key(&mut app, key(KeyCode::Char('l'), KeyModifiers::CONTROL));
        assert!(app.checker().text.is_empty());
    }

    #[test]
    fn paste_appends_text() {
        let mut app = make_app();
        handle_paste(&mut app, "Pasted article");
        assert_eq!(app.checker().text, "Pasted article");
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = make_app();
        let mut release = key(KeyCode::Char('x'), KeyModifiers::empty());
        release.kind = KeyEventKind::Release;
        handle_key(&mut app, release);
        assert!(app.checker().text.is_empty());
    }
}
