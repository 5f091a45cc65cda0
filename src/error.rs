use thiserror::Error;

/// Errors surfaced by the analyze trigger.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalyzeError {
    /// Trigger invoked with blank or whitespace-only text.
    #[error("Please enter some text to analyze")]
    EmptyInput,
}

impl AnalyzeError {
    /// Process exit code used by the headless `check` command.
    pub fn exit_code(&self) -> i32 {
        match self {
            AnalyzeError::EmptyInput => 2,
        }
    }
}
