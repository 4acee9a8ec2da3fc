// src/domain/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("The card \"{0}\" already exists")]
    DuplicateName(String),
    #[error("The definition \"{0}\" already exists")]
    DuplicateDefinition(String),
    #[error("No card named \"{0}\"")]
    NotFound(String),
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("Line {line} is malformed: {reason}")]
    MalformedRecord { line: usize, reason: String },
    #[error("Not a number of rounds: {0}")]
    InvalidRoundCount(String),
    #[error("Input exhausted")]
    InputExhausted,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
