/// Marker trait for intents: user edits, trigger presses, worker results
/// and animation ticks.
pub trait Intent: Send + 'static {}
