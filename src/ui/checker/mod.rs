//! The checker page: owns the article text, the analyzing flag and the
//! last verdict, and drives the mock analysis.

mod intent;
mod reducer;
mod samples;
mod session;
mod state;

pub use intent::CheckerIntent;
pub use reducer::CheckerReducer;
pub use samples::SAMPLE_ARTICLES;
pub use session::{CheckerSession, COMPLETE_MESSAGE};
pub use state::CheckerState;
