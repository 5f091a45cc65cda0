use crate::analysis::AnalysisResult;
use crate::config::ConfigStore;
use crate::notify::ToastQueue;
use crate::ui::checker::{CheckerIntent, CheckerSession, CheckerState};
use tokio::sync::mpsc;

/// Work handed from the UI thread to the analysis worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    Analyze { text: String },
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

const WORKER_UNAVAILABLE: &str = "Analysis worker is not running";

pub struct App {
    should_quit: bool,
    session: CheckerSession<ToastQueue>,
    toasts: ToastQueue,
    command_sender: Option<UiCommandSender>,
    config: ConfigStore,
}

impl App {
    pub fn new(config: ConfigStore) -> Self {
        let toasts = ToastQueue::new(config.get().ui.toast_duration());
        Self {
            should_quit: false,
            session: CheckerSession::new(toasts.clone()),
            toasts,
            command_sender: None,
            config,
        }
    }

    pub fn config(&self) -> &ConfigStore {
        &self.config
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn checker(&self) -> &CheckerState {
        self.session.state()
    }

    pub fn toasts(&self) -> &ToastQueue {
        &self.toasts
    }

    pub fn set_command_sender(&mut self, sender: UiCommandSender) {
        self.command_sender = Some(sender);
    }

    pub fn on_tick(&mut self) {
        self.toasts.prune();
        self.session.dispatch(CheckerIntent::AnimationTick);
    }

    /// Owner side of the input field's change callback.
    pub fn on_text_changed(&mut self, text: String) {
        self.session.dispatch(CheckerIntent::TextChanged { text });
    }

    pub fn load_sample(&mut self) {
        self.session.dispatch(CheckerIntent::LoadSample);
    }

    pub fn clear(&mut self) {
        self.session.dispatch(CheckerIntent::Clear);
    }

    /// The analyze trigger. Does nothing while a run is in flight.
    pub fn trigger_analysis(&mut self) {
        if self.session.state().is_analyzing {
            return;
        }
        let Ok(text) = self.session.begin() else {
            return;
        };
        if !self.send_command(UiCommand::Analyze { text }) {
            self.session.abort(WORKER_UNAVAILABLE);
        }
    }

    pub fn on_analysis_complete(&mut self, result: AnalysisResult) {
        self.session.complete(result);
    }

    fn send_command(&mut self, command: UiCommand) -> bool {
        let Some(sender) = &self.command_sender else {
            return false;
        };

        match sender.try_send(command) {
            Ok(()) => true,
            Err(err) => {
                tracing::error!("Analysis command send failed: {}", err);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::FAKE_EXPLANATION;
    use crate::config::Config;
    use crate::notify::ToastKind;
    use std::path::PathBuf;

    fn make_app() -> App {
        let config = ConfigStore::new(Config::default(), PathBuf::from("/tmp/newscheck-test.toml"));
        App::new(config)
    }

    fn fake_result() -> AnalysisResult {
        AnalysisResult {
            is_fake: true,
            confidence: 90,
            analysis: FAKE_EXPLANATION.to_string(),
        }
    }

    #[test]
    fn blank_trigger_shows_error_and_keeps_state() {
        let mut app = make_app();
        app.on_text_changed("   ".to_string());
        app.trigger_analysis();

        assert!(!app.checker().is_analyzing);
        assert!(app.checker().result.is_none());
        let toasts = app.toasts().visible();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].kind, ToastKind::Error);
    }

    #[test]
    fn trigger_sends_text_to_worker() {
        let mut app = make_app();
        let (tx, mut rx) = mpsc::channel(4);
        app.set_command_sender(tx);
        app.on_text_changed("Shocking discovery".to_string());

        app.trigger_analysis();

        assert!(app.checker().is_analyzing);
        assert_eq!(
            rx.try_recv().ok(),
            Some(UiCommand::Analyze {
                text: "Shocking discovery".to_string()
            })
        );
    }

    #[test]
    fn second_trigger_while_analyzing_is_ignored() {
        let mut app = make_app();
        let (tx, mut rx) = mpsc::channel(4);
        app.set_command_sender(tx);
        app.on_text_changed("text".to_string());

        app.trigger_analysis();
        app.trigger_analysis();

        assert!(rx.try_recv().is_ok());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn missing_worker_aborts_run() {
        let mut app = make_app();
        app.on_text_changed("text".to_string());
        app.trigger_analysis();

        assert!(!app.checker().is_analyzing);
        assert_eq!(app.toasts().visible()[0].message, WORKER_UNAVAILABLE);
    }

    #[test]
    fn completion_publishes_result_and_success_toast() {
        let mut app = make_app();
        let (tx, _rx) = mpsc::channel(4);
        app.set_command_sender(tx);
        app.on_text_changed("click here".to_string());
        app.trigger_analysis();

        app.on_analysis_complete(fake_result());

        assert!(!app.checker().is_analyzing);
        assert_eq!(app.checker().result, Some(fake_result()));
        let toasts = app.toasts().visible();
        assert_eq!(toasts.last().map(|t| t.kind), Some(ToastKind::Success));
    }

    #[test]
    fn edits_ignored_while_analyzing() {
        let mut app = make_app();
        let (tx, _rx) = mpsc::channel(4);
        app.set_command_sender(tx);
        app.on_text_changed("original".to_string());
        app.trigger_analysis();

        app.on_text_changed("changed".to_string());
        app.clear();

        assert_eq!(app.checker().text, "original");
    }

    #[test]
    fn tick_advances_spinner_only_while_analyzing() {
        let mut app = make_app();
        app.on_tick();
        assert_eq!(app.checker().animation_tick, 0);

        let (tx, _rx) = mpsc::channel(4);
        app.set_command_sender(tx);
        app.on_text_changed("x".to_string());
        app.trigger_analysis();
        app.on_tick();
        assert_eq!(app.checker().animation_tick, 1);
    }
}
