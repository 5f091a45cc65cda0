use crossterm::event::{self, Event, KeyEvent};
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use crate::analysis::AnalysisResult;

pub enum AppEvent {
    Key(KeyEvent),
    Paste(String),
    Tick,
    Resize(u16, u16),
    /// The worker finished scoring the in-flight run.
    AnalysisComplete(AnalysisResult),
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: mpsc::Sender<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        let spawned = thread::Builder::new()
            .name("terminal-input".to_string())
            .spawn(move || input_loop(event_tx, tick_rate));
        if let Err(err) = spawned {
            tracing::error!("Failed to spawn input thread: {}", err);
        }

        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    /// Sender for events produced off the input thread (worker results).
    pub fn sender(&self) -> mpsc::Sender<AppEvent> {
        self.tx.clone()
    }
}

fn input_loop(event_tx: mpsc::Sender<AppEvent>, tick_rate: Duration) {
    let mut last_tick = Instant::now();
    loop {
        // Short poll timeout so ticks stay on schedule
        let timeout = tick_rate
            .saturating_sub(last_tick.elapsed())
            .min(Duration::from_millis(50));

        let forwarded = match event::poll(timeout) {
            Ok(true) => match event::read() {
                Ok(Event::Key(key)) => event_tx.send(AppEvent::Key(key)),
                Ok(Event::Paste(text)) => event_tx.send(AppEvent::Paste(text)),
                Ok(Event::Resize(cols, rows)) => event_tx.send(AppEvent::Resize(cols, rows)),
                Ok(_) => Ok(()),
                Err(err) => {
                    tracing::error!("Terminal read error: {}", err);
                    break;
                }
            },
            Ok(false) => Ok(()),
            Err(err) => {
                tracing::error!("Terminal poll error: {}", err);
                break;
            }
        };

        // Receiver gone: the UI loop has exited
        if forwarded.is_err() {
            break;
        }

        if last_tick.elapsed() >= tick_rate {
            if event_tx.send(AppEvent::Tick).is_err() {
                break;
            }
            last_tick = Instant::now();
        }
    }
}
