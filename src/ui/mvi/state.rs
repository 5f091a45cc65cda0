/// Marker trait for UI state records.
///
/// A state carries everything its view needs and is replaced, not patched,
/// on every transition.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
