//! Terminal front-end for text-to-image generation.
//!
//! The screen collects a prompt, sends one request to an OpenAI-compatible
//! generations endpoint per activation of the Generate control, and shows the
//! returned image.

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod ui;
