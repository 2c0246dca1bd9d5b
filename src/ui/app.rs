use std::sync::mpsc;
use std::sync::Arc;

use ratatui::layout::Rect;
use tokio::runtime::Handle;
use tokio::task::AbortHandle;

use crate::client::ImageGenerator;
use crate::config::Config;
use crate::error::GenerateError;
use crate::ui::events::AppEvent;
use crate::ui::generator::{GeneratorIntent, GeneratorReducer, GeneratorState};
use crate::ui::input::{handle_key, handle_mouse};
use crate::ui::layout::{contains, view_regions, LayoutMode};
use crate::ui::mvi::Reducer;
use crate::ui::preview::PreviewImage;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    size: Option<(u16, u16)>,
    breakpoint: u16,
    /// Generator view state (MVI pattern).
    generator_state: GeneratorState,
    /// Request side, managed outside MVI.
    generator: Arc<dyn ImageGenerator>,
    runtime: Handle,
    events: mpsc::Sender<AppEvent>,
    /// Abort handle of the in-flight request task.
    in_flight: Option<AbortHandle>,
    /// Decoded pixels, keyed by the URL they were downloaded from.
    preview: Option<(String, PreviewImage)>,
    frame: u64,
}

impl App {
    pub fn new(
        config: &Config,
        generator: Arc<dyn ImageGenerator>,
        runtime: Handle,
        events: mpsc::Sender<AppEvent>,
    ) -> Self {
        Self {
            should_quit: false,
            size: None,
            breakpoint: config.layout.breakpoint_columns,
            generator_state: GeneratorState::default(),
            generator,
            runtime,
            events,
            in_flight: None,
            preview: None,
            frame: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn state(&self) -> &GeneratorState {
        &self.generator_state
    }

    pub fn layout(&self) -> LayoutMode {
        self.generator_state.layout
    }

    /// Preview of the currently displayed image, once downloaded.
    pub fn preview(&self) -> Option<&PreviewImage> {
        let displayed = self.generator_state.image_url()?;
        self.preview
            .as_ref()
            .filter(|(url, _)| url == displayed)
            .map(|(_, image)| image)
    }

    /// Animation frame counter for the loading skeleton.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) => handle_key(self, key),
            AppEvent::Mouse(mouse) => handle_mouse(self, mouse),
            AppEvent::Paste(text) => self.dispatch(GeneratorIntent::Paste(text)),
            AppEvent::Resize(cols, rows) => self.on_resize(cols, rows),
            AppEvent::Tick => self.on_tick(),
            AppEvent::GenerationSettled {
                generation,
                outcome,
            } => self.on_generation_settled(generation, outcome),
            AppEvent::PreviewReady { url, image } => self.on_preview_ready(url, image),
            AppEvent::PreviewFailed { url, error } => {
                tracing::warn!(url = %url, error = %error, "preview unavailable");
            }
        }
    }

    pub fn on_tick(&mut self) {
        self.frame = self.frame.wrapping_add(1);
    }

    /// Recomputes the layout from the new width. Crossing the breakpoint
    /// discards the prompt of the surface that becomes hidden.
    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
        let mode = LayoutMode::for_width(cols, self.breakpoint);
        if mode != self.generator_state.layout {
            tracing::debug!(cols, ?mode, "layout breakpoint crossed");
        }
        self.dispatch(GeneratorIntent::LayoutChanged { mode });
    }

    pub fn insert_char(&mut self, ch: char) {
        self.dispatch(GeneratorIntent::Insert(ch));
    }

    pub fn insert_newline(&mut self) {
        self.dispatch(GeneratorIntent::Newline);
    }

    pub fn delete_backward(&mut self) {
        self.dispatch(GeneratorIntent::DeleteBackward);
    }

    pub fn clear_prompt(&mut self) {
        self.dispatch(GeneratorIntent::ClearPrompt);
    }

    /// Activates the Generate control.
    ///
    /// Issues exactly one request when the prompt is non-empty and nothing is
    /// in flight; returns whether a request was issued.
    pub fn submit(&mut self) -> bool {
        let before = self.generator_state.last_generation;
        self.dispatch(GeneratorIntent::Submit);
        let Some(generation) = self.generator_state.in_flight() else {
            return false;
        };
        if generation == before {
            return false;
        }

        let prompt = self.generator_state.trimmed_prompt().to_string();
        tracing::info!(generation, prompt = %prompt, "generating image");

        let generator = Arc::clone(&self.generator);
        let events = self.events.clone();
        let task = self.runtime.spawn(async move {
            let outcome = generator.generate(&prompt).await;
            let _ = events.send(AppEvent::GenerationSettled {
                generation,
                outcome,
            });
        });
        self.in_flight = Some(task.abort_handle());
        true
    }

    /// Pointer activation at a screen cell. Only the Generate control reacts.
    pub fn on_click(&mut self, column: u16, row: u16) -> bool {
        let Some((cols, rows)) = self.size else {
            return false;
        };
        let regions = view_regions(Rect::new(0, 0, cols, rows), self.layout());
        if contains(regions.button, column, row) {
            return self.submit();
        }
        false
    }

    /// Aborts the in-flight request, if any. Called when the view goes away.
    pub fn teardown(&mut self) {
        if let Some(task) = self.in_flight.take() {
            task.abort();
            if let Some(generation) = self.generator_state.in_flight() {
                tracing::info!(generation, "generation aborted");
            }
            self.dispatch(GeneratorIntent::Cancelled);
        }
    }

    fn on_generation_settled(&mut self, generation: u64, outcome: Result<String, GenerateError>) {
        if self.generator_state.in_flight() != Some(generation) {
            tracing::debug!(generation, "ignoring stale generation result");
            return;
        }
        self.in_flight = None;

        let image_url = match outcome {
            Ok(url) => {
                tracing::info!(generation, url = %url, "image generated");
                Some(url)
            }
            Err(error) => {
                tracing::error!(generation, error = %error, "Error generating image");
                None
            }
        };

        self.dispatch(GeneratorIntent::Settled {
            generation,
            image_url: image_url.clone(),
        });

        if let Some(url) = image_url {
            self.request_preview(url);
        }
    }

    fn request_preview(&self, url: String) {
        let generator = Arc::clone(&self.generator);
        let events = self.events.clone();
        self.runtime.spawn(async move {
            let event = match generator.download(&url).await {
                Ok(bytes) => match PreviewImage::decode(&bytes) {
                    Ok(image) => AppEvent::PreviewReady { url, image },
                    Err(error) => AppEvent::PreviewFailed { url, error },
                },
                Err(error) => AppEvent::PreviewFailed { url, error },
            };
            let _ = events.send(event);
        });
    }

    fn on_preview_ready(&mut self, url: String, image: PreviewImage) {
        if self.generator_state.image_url() != Some(url.as_str()) {
            tracing::debug!(url = %url, "dropping preview for replaced image");
            return;
        }
        self.preview = Some((url, image));
    }

    fn dispatch(&mut self, intent: GeneratorIntent) {
        dispatch_mvi!(self, generator_state, GeneratorReducer, intent);
    }
}

impl Drop for App {
    fn drop(&mut self) {
        if let Some(task) = self.in_flight.take() {
            task.abort();
        }
    }
}
