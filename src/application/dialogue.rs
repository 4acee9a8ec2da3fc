// src/application/dialogue.rs
use crate::application::{Console, SessionLog};
use crate::domain::DomainError;
use std::path::Path;
use tracing::trace;

/// A console whose traffic, in both directions, lands in a session log.
pub struct Dialogue<C: Console, L: SessionLog> {
    console: C,
    log: L,
}

impl<C: Console, L: SessionLog> Dialogue<C, L> {
    pub fn new(console: C, log: L) -> Self {
        Self { console, log }
    }

    pub fn say(&mut self, line: &str) -> Result<(), DomainError> {
        self.log.record(line);
        self.console.write_line(line)
    }

    pub fn listen(&mut self) -> Result<String, DomainError> {
        let line = self.console.read_line()?;
        trace!(%line, "Read input");
        self.log.record(&line);
        Ok(line)
    }

    /// Say `prompt`, then read the reply.
    pub fn ask(&mut self, prompt: &str) -> Result<String, DomainError> {
        self.say(prompt)?;
        self.listen()
    }

    pub fn save_log(&self, path: &Path) -> Result<usize, DomainError> {
        self.log.save(path)
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn log(&self) -> &L {
        &self.log
    }
}
