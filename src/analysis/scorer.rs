use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use std::time::Duration;

use super::delay::{Delay, TokioDelay};
use super::random::RandomSource;
use super::{classify, AnalysisResult};

/// Fixed wait emulating a round trip to a real classifier.
pub const SIMULATED_LATENCY: Duration = Duration::from_millis(2000);

type SharedRandom = Arc<Mutex<Box<dyn RandomSource + Send>>>;

/// Delay followed by the keyword/random classification.
///
/// Cloning shares the same random source, so a clone handed to a worker
/// task continues the caller's sequence.
#[derive(Clone)]
pub struct MockScorer {
    delay: Arc<dyn Delay>,
    rng: SharedRandom,
    latency: Duration,
}

impl MockScorer {
    pub fn new(delay: Arc<dyn Delay>, rng: Box<dyn RandomSource + Send>) -> Self {
        Self {
            delay,
            rng: Arc::new(Mutex::new(rng)),
            latency: SIMULATED_LATENCY,
        }
    }

    /// Real-time scorer. A seed makes the verdict sequence reproducible.
    pub fn from_seed(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(Arc::new(TokioDelay), Box::new(rng))
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub async fn score(&self, text: &str) -> AnalysisResult {
        self.delay.sleep(self.latency).await;
        let mut rng = self.rng.lock();
        classify(text, &mut **rng)
    }
}

impl std::fmt::Debug for MockScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockScorer")
            .field("latency", &self.latency)
            .finish_non_exhaustive()
    }
}
