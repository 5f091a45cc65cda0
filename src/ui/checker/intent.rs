//! Intents for the checker page.

use crate::analysis::AnalysisResult;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum CheckerIntent {
    /// The input field proposed a new value.
    TextChanged { text: String },

    /// Replace the text with the next built-in sample article.
    LoadSample,

    /// Reset text and result.
    Clear,

    /// A validated run started.
    Begin,

    /// The mock analysis produced a verdict.
    Complete { result: AnalysisResult },

    /// The run could not be handed to the worker.
    Abort,

    /// Animation tick (for spinner updates).
    AnimationTick,
}

impl Intent for CheckerIntent {}
