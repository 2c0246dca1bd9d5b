/// Marker trait for intents: keystrokes, layout changes, request results.
pub trait Intent: Send + 'static {}
