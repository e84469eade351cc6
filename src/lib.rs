pub mod clipboard;
pub mod config;
pub mod engine;
pub mod output;
pub mod stderr_buffer;
pub mod tui;

pub use engine::{generate, score, GenerationConfig, StrengthLevel};
