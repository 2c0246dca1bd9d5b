//! Reducer for the generator view.

use crate::ui::mvi::Reducer;

use super::intent::GeneratorIntent;
use super::state::{DisplayedImage, GeneratorState, Phase};

/// Pure state transitions. Spawning and aborting the request task is done by
/// the caller around the dispatch.
pub struct GeneratorReducer;

impl Reducer for GeneratorReducer {
    type State = GeneratorState;
    type Intent = GeneratorIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            GeneratorIntent::Insert(ch) => {
                if !ch.is_control() {
                    state.prompt.push(ch);
                }
                state
            }
            GeneratorIntent::Paste(text) => {
                let wide = state.layout.is_wide();
                let text = text.replace("\r\n", "\n").replace('\r', "\n");
                state.prompt.extend(text.chars().filter_map(|ch| match ch {
                    '\n' if wide => Some(' '),
                    '\n' => Some('\n'),
                    ch if ch.is_control() => None,
                    ch => Some(ch),
                }));
                state
            }
            GeneratorIntent::Newline => {
                if !state.layout.is_wide() {
                    state.prompt.push('\n');
                }
                state
            }
            GeneratorIntent::DeleteBackward => {
                state.prompt.pop();
                state
            }
            GeneratorIntent::ClearPrompt => {
                state.prompt.clear();
                state
            }
            GeneratorIntent::LayoutChanged { mode } => {
                if mode != state.layout {
                    // The surface that held the text is now hidden.
                    state.prompt.clear();
                    state.layout = mode;
                }
                state
            }
            GeneratorIntent::Submit => {
                if state.can_submit() {
                    state.last_generation += 1;
                    state.phase = Phase::Busy {
                        generation: state.last_generation,
                    };
                }
                state
            }
            GeneratorIntent::Settled {
                generation,
                image_url,
            } => {
                if state.in_flight() != Some(generation) {
                    return state;
                }
                state.phase = Phase::Idle;
                if let Some(url) = image_url {
                    state.image = DisplayedImage::Generated { url };
                }
                state
            }
            GeneratorIntent::Cancelled => {
                state.phase = Phase::Idle;
                state
            }
        }
    }
}
