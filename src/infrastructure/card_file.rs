// src/infrastructure/card_file.rs
use crate::constants::{FIELDS_PER_RECORD, FIELD_SEPARATOR};
use crate::domain::{Card, DomainError};
use std::fs;
use std::path::Path;
use tracing::{debug, instrument, warn};

/// Parsed content of a card file.
#[derive(Debug, Default)]
pub struct CardFile {
    /// Valid records in file order.
    pub records: Vec<Card>,
    /// One `DomainError::MalformedRecord` per unreadable line.
    pub malformed: Vec<DomainError>,
}

/// Parse one `name=definition=mistakes` line. `line_number` is 1-based.
pub fn parse_record(line_number: usize, line: &str) -> Result<Card, DomainError> {
    let malformed = |reason: String| DomainError::MalformedRecord {
        line: line_number,
        reason,
    };

    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    let [name, definition, mistakes] = fields.as_slice() else {
        return Err(malformed(format!(
            "expected {} fields, found {}",
            FIELDS_PER_RECORD,
            fields.len()
        )));
    };

    let mistakes: u32 = mistakes
        .parse()
        .map_err(|_| malformed(format!("\"{}\" is not a mistake count", mistakes)))?;

    Ok(Card::new(*name, *definition).with_mistakes(mistakes))
}

/// Render one card as a file line, without the line terminator.
pub fn format_record(card: &Card) -> String {
    format!(
        "{name}{sep}{definition}{sep}{mistakes}",
        name = card.name(),
        definition = card.definition(),
        mistakes = card.mistakes(),
        sep = FIELD_SEPARATOR
    )
}

/// Read a card file. Blank lines are skipped; malformed ones are collected.
#[instrument(level = "debug")]
pub fn read_cards(path: &Path) -> Result<CardFile, DomainError> {
    if !path.exists() {
        return Err(DomainError::FileNotFound(path.to_path_buf()));
    }

    let content = fs::read_to_string(path)?;
    let mut file = CardFile::default();

    for (index, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match parse_record(index + 1, line) {
            Ok(card) => file.records.push(card),
            Err(e) => {
                warn!(error = %e, "Skipping malformed line");
                file.malformed.push(e);
            }
        }
    }

    debug!(
        records = file.records.len(),
        malformed = file.malformed.len(),
        "Card file read"
    );
    Ok(file)
}

/// Replace the content of `path` with one line per card. Returns the count.
#[instrument(level = "debug", skip(cards))]
pub fn write_cards(path: &Path, cards: &[Card]) -> Result<usize, DomainError> {
    let content: String = cards
        .iter()
        .map(|card| format_record(card) + "\n")
        .collect();

    fs::write(path, content)?;
    debug!(count = cards.len(), "Card file written");
    Ok(cards.len())
}
