//! Shared test utilities and mock infrastructure.

#![allow(dead_code)]

pub mod mock_backend;

use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use imagegen::client::ImageGenerator;
use imagegen::config::Config;
use imagegen::error::{GenerateError, PreviewError};
use imagegen::ui::app::App;
use imagegen::ui::events::AppEvent;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use tempfile::TempDir;

/// Create a temporary config file with the given TOML content.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

// -- Fake generator -----------------------------------------------------------

/// Scripted result for one `generate` call.
#[derive(Debug, Clone)]
pub enum Scripted {
    Url(String),
    Api { status: u16, message: String },
    NoImage,
}

/// In-memory generator that records prompts and replays scripted results.
#[derive(Default)]
pub struct FakeGenerator {
    script: Mutex<VecDeque<Scripted>>,
    prompts: Mutex<Vec<String>>,
    preview: Mutex<Option<Vec<u8>>>,
}

impl FakeGenerator {
    pub fn new(script: Vec<Scripted>) -> Arc<Self> {
        Arc::new(Self {
            script: Mutex::new(script.into()),
            ..Self::default()
        })
    }

    pub fn with_preview(self: Arc<Self>, bytes: Vec<u8>) -> Arc<Self> {
        *self.preview.lock().unwrap() = Some(bytes);
        self
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl ImageGenerator for FakeGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GenerateError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        let next = self.script.lock().unwrap().pop_front();
        match next {
            Some(Scripted::Url(url)) => Ok(url),
            Some(Scripted::Api { status, message }) => Err(GenerateError::Api { status, message }),
            Some(Scripted::NoImage) | None => Err(GenerateError::NoImage),
        }
    }

    async fn download(&self, _url: &str) -> Result<Vec<u8>, PreviewError> {
        self.preview
            .lock()
            .unwrap()
            .clone()
            .ok_or(PreviewError::Status(404))
    }
}

// -- App helpers --------------------------------------------------------------

pub struct TestApp {
    pub app: App,
    pub events: Receiver<AppEvent>,
    // Dropped last so in-flight tasks outlive the app.
    pub runtime: tokio::runtime::Runtime,
}

pub fn make_app(generator: Arc<dyn ImageGenerator>) -> TestApp {
    make_app_with_config(generator, &Config::default())
}

pub fn make_app_with_config(generator: Arc<dyn ImageGenerator>, config: &Config) -> TestApp {
    let runtime = tokio::runtime::Runtime::new().expect("Failed to build runtime");
    let (tx, rx) = mpsc::channel();
    let mut app = App::new(config, generator, runtime.handle().clone(), tx);
    app.on_resize(120, 40);
    TestApp {
        app,
        events: rx,
        runtime,
    }
}

impl TestApp {
    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            self.app.insert_char(ch);
        }
    }

    pub fn press(&mut self, code: KeyCode) {
        self.app
            .handle_event(AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    /// Feeds background events into the app until the request settles.
    pub fn wait_until_idle(&mut self) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while self.app.state().is_busy() {
            let remaining = deadline.saturating_duration_since(Instant::now());
            let event = self
                .events
                .recv_timeout(remaining)
                .expect("request did not settle in time");
            self.app.handle_event(event);
        }
    }

    /// Feeds background events until `done` holds.
    pub fn wait_for(&mut self, done: impl Fn(&App) -> bool) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while !done(&self.app) {
            let remaining = deadline.saturating_duration_since(Instant::now());
            let event = self
                .events
                .recv_timeout(remaining)
                .expect("condition not reached in time");
            self.app.handle_event(event);
        }
    }
}

/// Solid-color PNG of the given size.
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(width, height, image::Rgba([200, 30, 30, 255]));
    let mut out = std::io::Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Png)
        .expect("PNG encoding");
    out.into_inner()
}
