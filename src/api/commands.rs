//! Command modules for the presentation layer
//!
//! Every command takes and returns plain serde/ts-rs DTOs so any frontend
//! (webview IPC, TUI, tests) can drive the converter.
//!
//! ## Architecture
//!
//! - `converter`: measurement converter session commands
//! - `settings`: settings persistence

pub mod converter;
pub mod settings;
