pub mod app;
pub mod events;
pub mod footer;
pub mod generator;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod preview;
pub mod render;
pub mod runtime;
pub mod shell;
pub mod skeleton;
pub mod terminal_guard;
pub mod theme;
