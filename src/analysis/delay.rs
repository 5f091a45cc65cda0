use parking_lot::Mutex;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

pub type DelayFuture = Pin<Box<dyn Future<Output = ()> + Send + 'static>>;

/// Suspension point standing in for network latency.
pub trait Delay: Send + Sync {
    fn sleep(&self, duration: Duration) -> DelayFuture;
}

/// Real wall-clock wait on the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioDelay;

impl Delay for TokioDelay {
    fn sleep(&self, duration: Duration) -> DelayFuture {
        Box::pin(tokio::time::sleep(duration))
    }
}

/// Completes immediately and records every requested duration.
#[derive(Debug, Clone, Default)]
pub struct InstantDelay {
    requested: Arc<Mutex<Vec<Duration>>>,
}

impl InstantDelay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requested(&self) -> Vec<Duration> {
        self.requested.lock().clone()
    }
}

impl Delay for InstantDelay {
    fn sleep(&self, duration: Duration) -> DelayFuture {
        self.requested.lock().push(duration);
        Box::pin(std::future::ready(()))
    }
}
