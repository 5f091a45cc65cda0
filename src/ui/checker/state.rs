use crate::analysis::AnalysisResult;
use crate::ui::mvi::UiState;

/// Everything the checker page renders.
///
/// `result` is `None` while a run is in flight, so a previous verdict is
/// never shown next to the analyzing spinner.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CheckerState {
    pub text: String,
    pub is_analyzing: bool,
    pub result: Option<AnalysisResult>,
    /// Spinner frame, advanced only while analyzing.
    pub animation_tick: u8,
    /// Index of the sample article loaded by the next `LoadSample`.
    pub next_sample: usize,
}

impl UiState for CheckerState {}

impl CheckerState {
    /// True when the text is empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Whether the analyze button is shown as enabled.
    pub fn can_analyze(&self) -> bool {
        !self.is_analyzing && !self.is_blank()
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}
