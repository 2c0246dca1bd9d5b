use crate::ui::layout::LayoutMode;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum GeneratorIntent {
    /// Printable character typed into the prompt.
    Insert(char),
    /// Pasted text. Newlines are kept only in the narrow layout.
    Paste(String),
    /// Line break; only the narrow (multi-line) surface accepts it.
    Newline,
    DeleteBackward,
    ClearPrompt,
    /// Terminal width produced this layout. Crossing the breakpoint discards
    /// the prompt held by the surface that becomes hidden.
    LayoutChanged { mode: LayoutMode },
    /// User activated the Generate control. No-op unless submittable.
    Submit,
    /// The request tagged `generation` finished. `image_url` is `None` on any
    /// failure; the failure itself has already been logged.
    Settled {
        generation: u64,
        image_url: Option<String>,
    },
    /// The in-flight request was aborted (view torn down).
    Cancelled,
}

impl Intent for GeneratorIntent {}
