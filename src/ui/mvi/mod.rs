//! Model-View-Intent (MVI) primitives for the generator screen.
//!
//! ```text
//! key / mouse / resize / task result
//!        │
//!     Intent ──→ Reducer ──→ State ──→ draw()
//! ```
//!
//! Reducers are pure. Anything that talks to the outside world (spawning the
//! request task, aborting it, logging) happens in `App` around the dispatch.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
