// src/application/mod.rs
pub mod dialogue;
pub mod quiz;
pub mod session;

use crate::domain::DomainError;
use std::path::Path;

pub use dialogue::Dialogue;
pub use quiz::{QuizEngine, Verdict};
pub use session::{Session, SessionOptions};

/// Line-oriented input/output channel the user talks through.
pub trait Console {
    fn write_line(&mut self, line: &str) -> Result<(), DomainError>;

    /// Next input line without its line terminator.
    /// Returns `DomainError::InputExhausted` once the input is closed.
    fn read_line(&mut self) -> Result<String, DomainError>;
}

/// Records the session transcript so it can be written out on request.
pub trait SessionLog {
    fn record(&mut self, line: &str);

    /// Write every recorded line to `path`, replacing its content.
    /// Returns the number of lines written.
    fn save(&self, path: &Path) -> Result<usize, DomainError>;
}
