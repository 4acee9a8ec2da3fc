// src/infrastructure/mod.rs
pub mod card_file;
pub mod config;
pub mod console;
pub mod transcript;

pub use config::Config;
pub use console::TerminalConsole;
pub use transcript::Transcript;
