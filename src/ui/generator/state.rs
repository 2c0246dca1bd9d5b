//! State of the generator view.

use crate::ui::layout::LayoutMode;
use crate::ui::mvi::UiState;

/// Request lifecycle. Busy strictly while one request is in flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Busy {
        generation: u64,
    },
}

/// What the image region shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DisplayedImage {
    /// Nothing generated yet.
    #[default]
    Placeholder,
    /// Most recent successful result. Never cleared once set.
    Generated { url: String },
}

/// Generator view state.
///
/// The prompt is the single source of truth for both input surfaces; `layout`
/// decides which surface presents it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratorState {
    pub prompt: String,
    pub layout: LayoutMode,
    pub phase: Phase,
    pub image: DisplayedImage,
    /// Id handed to the most recently issued request.
    pub last_generation: u64,
}

impl UiState for GeneratorState {}

impl GeneratorState {
    pub fn with_layout(layout: LayoutMode) -> Self {
        Self {
            layout,
            ..Self::default()
        }
    }

    /// Prompt as it will be sent.
    pub fn trimmed_prompt(&self) -> &str {
        self.prompt.trim()
    }

    /// Enablement flag: the trimmed prompt is non-empty.
    pub fn is_enabled(&self) -> bool {
        !self.trimmed_prompt().is_empty()
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.phase, Phase::Busy { .. })
    }

    /// Whether the Generate control accepts activation right now.
    pub fn can_submit(&self) -> bool {
        self.is_enabled() && !self.is_busy()
    }

    /// Generation id of the in-flight request.
    pub fn in_flight(&self) -> Option<u64> {
        match self.phase {
            Phase::Busy { generation } => Some(generation),
            Phase::Idle => None,
        }
    }

    pub fn image_url(&self) -> Option<&str> {
        match &self.image {
            DisplayedImage::Generated { url } => Some(url),
            DisplayedImage::Placeholder => None,
        }
    }
}
