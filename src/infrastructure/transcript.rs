// src/infrastructure/transcript.rs
use crate::application::SessionLog;
use crate::domain::DomainError;
use std::fs;
use std::path::Path;
use tracing::debug;

/// In-memory session transcript: every line said and every line heard.
#[derive(Debug, Default, Clone)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl SessionLog for Transcript {
    fn record(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }

    fn save(&self, path: &Path) -> Result<usize, DomainError> {
        let content: String = self.lines.iter().map(|l| format!("{}\n", l)).collect();
        fs::write(path, content)?;
        debug!(?path, lines = self.lines.len(), "Transcript written");
        Ok(self.lines.len())
    }
}
