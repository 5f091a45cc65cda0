use crate::analysis::MockScorer;
use crate::config::ConfigStore;
use crate::ui::app::{App, UiCommand};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_paste};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc;
use tokio::runtime::Handle;
use tokio::sync::mpsc as async_mpsc;

/// Pending analyze commands. The trigger is disabled while a run is in
/// flight, so one slot is enough; the rest is headroom.
const COMMAND_CHANNEL_SIZE: usize = 4;

/// Runs the interactive checker until the user quits.
///
/// The draw/event loop stays on the calling thread; scoring runs on the
/// given tokio runtime so the simulated wait never blocks redraws.
pub fn run(config: ConfigStore, scorer: MockScorer, runtime: Handle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = config.get().ui.tick_rate();
    let mut app = App::new(config);
    let events = EventHandler::new(tick_rate);

    let (command_tx, command_rx) = async_mpsc::channel(COMMAND_CHANNEL_SIZE);
    app.set_command_sender(command_tx);
    let worker = runtime.spawn(analysis_worker(scorer, command_rx, events.sender()));

    tracing::info!(
        config = %app.config().path().display(),
        tick_ms = tick_rate.as_millis() as u64,
        "Checker UI started"
    );

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Paste(text)) => handle_paste(&mut app, &text),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::AnalysisComplete(result)) => app.on_analysis_complete(result),
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    worker.abort();
    drop(guard);
    tracing::info!("Checker UI stopped");
    Ok(())
}

/// Scores each submitted text and posts the verdict back to the UI loop.
pub async fn analysis_worker(
    scorer: MockScorer,
    mut commands: async_mpsc::Receiver<UiCommand>,
    events: mpsc::Sender<AppEvent>,
) {
    while let Some(UiCommand::Analyze { text }) = commands.recv().await {
        let result = scorer.score(&text).await;
        if events.send(AppEvent::AnalysisComplete(result)).is_err() {
            tracing::debug!("UI loop gone, analysis worker exiting");
            break;
        }
    }
}
