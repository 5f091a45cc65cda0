//! Mock analysis: the stand-in classifier behind the "Analyze News" trigger.
//!
//! The procedure waits a fixed simulated latency, scans the text for a small
//! set of sensational trigger phrases and draws random numbers for the
//! verdict and the confidence score. Both the wait and the random draws are
//! injected so callers can run it deterministically.

mod delay;
mod random;
mod scorer;

pub use delay::{Delay, DelayFuture, InstantDelay, TokioDelay};
pub use random::{RandomSource, SequenceSource};
pub use scorer::{MockScorer, SIMULATED_LATENCY};

use serde::{Deserialize, Serialize};

/// Phrases whose presence (case-insensitive) forces a fake verdict.
pub const TRIGGER_PHRASES: [&str; 5] = [
    "click here",
    "you won't believe",
    "shocking",
    "miracle cure",
    "one weird trick",
];

/// Random draws strictly above this mark a text as fake.
pub const RANDOM_FAKE_THRESHOLD: f64 = 0.6;

/// Lowest confidence score a run can produce.
pub const MIN_CONFIDENCE: u8 = 75;

/// Number of distinct confidence values (75..=94).
pub const CONFIDENCE_SPAN: u8 = 20;

pub const FAKE_EXPLANATION: &str = "Our analysis detected patterns commonly associated with misleading content, including sensational language, lack of credible sources, and manipulative phrasing.";

pub const REAL_EXPLANATION: &str = "The text appears to follow journalistic standards with factual language and credible presentation. However, always verify with multiple sources.";

/// Outcome of one completed run. Replaced wholesale by the next run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub is_fake: bool,
    /// Percentage in `75..=94`, unrelated to the text.
    pub confidence: u8,
    pub analysis: String,
}

impl AnalysisResult {
    /// Short classification label, "Fake" or "Real".
    pub fn classification(&self) -> &'static str {
        if self.is_fake {
            "Fake"
        } else {
            "Real"
        }
    }

    /// Headline shown on the result card.
    pub fn headline(&self) -> &'static str {
        if self.is_fake {
            "Fake News Detected"
        } else {
            "Appears to be Real News"
        }
    }
}

/// Returns true when the lower-cased text contains any trigger phrase.
pub fn contains_trigger_phrase(text: &str) -> bool {
    let lower = text.to_lowercase();
    TRIGGER_PHRASES.iter().any(|phrase| lower.contains(phrase))
}

/// Runs the scoring steps that follow the simulated wait.
///
/// The keyword check short-circuits the verdict draw: when a trigger phrase
/// is present only the confidence draw is consumed.
pub fn classify(text: &str, rng: &mut dyn RandomSource) -> AnalysisResult {
    let keyword_hit = contains_trigger_phrase(text);
    let is_fake = keyword_hit || rng.next_unit() > RANDOM_FAKE_THRESHOLD;
    let confidence = confidence_from_draw(rng.next_unit());

    tracing::debug!(keyword_hit, is_fake, confidence, "Mock classification drawn");

    AnalysisResult {
        is_fake,
        confidence,
        analysis: explanation_for(is_fake).to_string(),
    }
}

/// Fixed explanatory sentence for a verdict.
pub fn explanation_for(is_fake: bool) -> &'static str {
    if is_fake {
        FAKE_EXPLANATION
    } else {
        REAL_EXPLANATION
    }
}

fn confidence_from_draw(draw: f64) -> u8 {
    let offset = (draw * CONFIDENCE_SPAN as f64).floor() as u8;
    MIN_CONFIDENCE + offset.min(CONFIDENCE_SPAN - 1)
}
