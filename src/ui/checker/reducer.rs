//! Reducer for the checker page.

use crate::ui::mvi::Reducer;

use super::intent::CheckerIntent;
use super::samples::SAMPLE_ARTICLES;
use super::state::CheckerState;

/// Reducer for checker state transitions.
///
/// Edits, samples and clears are ignored while a run is in flight; that is
/// what keeps the input disabled for the whole simulated wait.
pub struct CheckerReducer;

impl Reducer for CheckerReducer {
    type State = CheckerState;
    type Intent = CheckerIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CheckerIntent::TextChanged { text } => {
                if state.is_analyzing {
                    return state;
                }
                CheckerState { text, ..state }
            }

            CheckerIntent::LoadSample => {
                if state.is_analyzing {
                    return state;
                }
                let index = state.next_sample % SAMPLE_ARTICLES.len();
                CheckerState {
                    text: SAMPLE_ARTICLES[index].to_string(),
                    next_sample: (index + 1) % SAMPLE_ARTICLES.len(),
                    ..state
                }
            }

            CheckerIntent::Clear => {
                if state.is_analyzing {
                    return state;
                }
                CheckerState {
                    text: String::new(),
                    result: None,
                    ..state
                }
            }

            CheckerIntent::Begin => CheckerState {
                is_analyzing: true,
                result: None,
                animation_tick: 0,
                ..state
            },

            CheckerIntent::Complete { result } => {
                if !state.is_analyzing {
                    return state;
                }
                CheckerState {
                    is_analyzing: false,
                    result: Some(result),
                    ..state
                }
            }

            CheckerIntent::Abort => CheckerState {
                is_analyzing: false,
                ..state
            },

            CheckerIntent::AnimationTick => {
                if !state.is_analyzing {
                    return state;
                }
                CheckerState {
                    animation_tick: state.animation_tick.wrapping_add(1),
                    ..state
                }
            }
        }
    }
}
