/// Marker trait for renderable state.
///
/// `Default` is the state before any event; `PartialEq` lets callers detect
/// whether a dispatch changed anything.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
