use uuid::Uuid;

use crate::analysis::{AnalysisResult, MockScorer};
use crate::error::AnalyzeError;
use crate::notify::Notifier;
use crate::ui::mvi::Reducer;

use super::intent::CheckerIntent;
use super::reducer::CheckerReducer;
use super::state::CheckerState;

pub const COMPLETE_MESSAGE: &str = "Analysis complete!";

/// Owner of the checker state plus the notification sink.
///
/// The event-driven UI calls [`begin`](Self::begin), hands the returned text
/// to a worker and later calls [`complete`](Self::complete). Headless callers
/// use [`analyze`](Self::analyze), which does both around the scorer.
pub struct CheckerSession<N: Notifier> {
    state: CheckerState,
    notifier: N,
    run_id: Option<Uuid>,
}

impl<N: Notifier> CheckerSession<N> {
    pub fn new(notifier: N) -> Self {
        Self {
            state: CheckerState::default(),
            notifier,
            run_id: None,
        }
    }

    pub fn state(&self) -> &CheckerState {
        &self.state
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Id of the run in flight, if any.
    pub fn run_id(&self) -> Option<Uuid> {
        self.run_id
    }

    pub fn dispatch(&mut self, intent: CheckerIntent) {
        self.state = CheckerReducer::reduce(std::mem::take(&mut self.state), intent);
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.dispatch(CheckerIntent::TextChanged { text: text.into() });
    }

    /// Validates the text and starts a run.
    ///
    /// Blank text raises the error notification and leaves the state
    /// untouched. On success the returned snapshot is what gets scored.
    pub fn begin(&mut self) -> Result<String, AnalyzeError> {
        if self.state.is_blank() {
            let err = AnalyzeError::EmptyInput;
            tracing::warn!("Analyze triggered with blank input");
            self.notifier.error(&err.to_string());
            return Err(err);
        }

        let run_id = Uuid::new_v4();
        tracing::info!(
            run_id = %run_id,
            chars = self.state.char_count(),
            "Analysis started"
        );
        self.run_id = Some(run_id);
        self.dispatch(CheckerIntent::Begin);
        Ok(self.state.text.clone())
    }

    /// Publishes the verdict of the in-flight run. Ignored when no run is
    /// in flight.
    pub fn complete(&mut self, result: AnalysisResult) {
        if !self.state.is_analyzing {
            tracing::debug!("Completion without a run in flight, ignoring");
            return;
        }
        let run_id = self.run_id.take();
        tracing::info!(
            run_id = ?run_id,
            is_fake = result.is_fake,
            confidence = result.confidence,
            "Analysis complete"
        );
        self.dispatch(CheckerIntent::Complete { result });
        self.notifier.success(COMPLETE_MESSAGE);
    }

    /// Ends the in-flight run without a verdict.
    pub fn abort(&mut self, message: &str) {
        let run_id = self.run_id.take();
        tracing::error!(run_id = ?run_id, reason = message, "Analysis aborted");
        self.dispatch(CheckerIntent::Abort);
        self.notifier.error(message);
    }

    /// Full run: validate, wait and score, publish.
    pub async fn analyze(&mut self, scorer: &MockScorer) -> Result<AnalysisResult, AnalyzeError> {
        let text = self.begin()?;
        let result = scorer.score(&text).await;
        self.complete(result.clone());
        Ok(result)
    }
}
