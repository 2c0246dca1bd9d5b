mod intent;
mod reducer;
mod state;

pub use intent::GeneratorIntent;
pub use reducer::GeneratorReducer;
pub use state::{DisplayedImage, GeneratorState, Phase};
