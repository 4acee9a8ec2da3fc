// src/constants.rs
//
// Fixed prompts and file-format constants shared across the crate.

/// Field separator in the persisted card file (`name=definition=mistakes`).
///
/// Fields are not escaped, so a separator inside a name or definition makes
/// the line unreadable on import.
///
/// Used in: `infrastructure/card_file.rs`
pub const FIELD_SEPARATOR: char = '=';

/// Number of fields per card line.
pub const FIELDS_PER_RECORD: usize = 3;

/// Config file looked up under the user's config directory.
///
/// Used in: `infrastructure/config.rs`
pub const CONFIG_DIR_NAME: &str = "flashcards";
pub const CONFIG_FILE_NAME: &str = "flashcards.toml";

pub const ACTION_PROMPT: &str =
    "Input the action (add, remove, import, export, ask, exit, log, hardest card, reset stats):";
pub const CARD_PROMPT: &str = "The card:";
pub const DEFINITION_PROMPT: &str = "The definition of the card:";
pub const REMOVE_PROMPT: &str = "Which card?";
pub const FILE_NAME_PROMPT: &str = "File name:";
pub const ROUNDS_PROMPT: &str = "How many times to ask?";
pub const FAREWELL: &str = "Bye bye!";
