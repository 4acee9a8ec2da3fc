// src/ports/messages.rs
use crate::application::quiz::Verdict;
use crate::domain::{Card, DomainError, Hardest};

/// Renders every user-facing report line.
#[derive(Debug, Default, Clone, Copy)]
pub struct MessagePresenter;

impl MessagePresenter {
    pub fn new() -> Self {
        Self
    }

    pub fn card_added(&self, card: &Card) -> String {
        format!(
            "The pair (\"{}\":\"{}\") has been added.",
            card.name(),
            card.definition()
        )
    }

    pub fn card_removed(&self) -> String {
        "The card has been removed.".to_string()
    }

    pub fn cards_loaded(&self, count: usize) -> String {
        format!("{} cards have been loaded.", count)
    }

    pub fn cards_saved(&self, count: usize) -> String {
        format!("{} cards have been saved.", count)
    }

    pub fn statistics_reset(&self) -> String {
        "Card statistics have been reset.".to_string()
    }

    pub fn log_saved(&self) -> String {
        "The log has been saved.".to_string()
    }

    pub fn hardest(&self, hardest: &Hardest<'_>) -> String {
        match hardest {
            Hardest::None => "There are no cards with errors.".to_string(),
            Hardest::Single(card) => format!(
                "The hardest card is \"{}\". You have {} errors answering it.",
                card.name(),
                card.mistakes()
            ),
            Hardest::Tie(cards) => {
                let names = cards
                    .iter()
                    .map(|c| format!("\"{}\"", c.name()))
                    .collect::<Vec<_>>()
                    .join(", ");
                let count = cards.first().map_or(0, |c| c.mistakes());
                format!(
                    "The hardest cards are {}. You have {} errors answering them.",
                    names, count
                )
            }
        }
    }

    pub fn question(&self, card: &Card) -> String {
        format!("Print the definition of \"{}\":", card.name())
    }

    pub fn verdict(&self, verdict: &Verdict) -> String {
        match verdict {
            Verdict::Correct => "Correct!".to_string(),
            Verdict::Wrong { expected } => {
                format!("Wrong. The right answer is \"{}\".", expected)
            }
            Verdict::WrongButMatches { expected, other } => format!(
                "Wrong. The right answer is \"{}\", but your definition is correct for \"{}\".",
                expected, other
            ),
        }
    }

    /// Report line for a recoverable error.
    pub fn error(&self, error: &DomainError) -> String {
        match error {
            DomainError::DuplicateName(name) => format!("The card \"{}\" already exists.", name),
            DomainError::DuplicateDefinition(definition) => {
                format!("The definition \"{}\" already exists.", definition)
            }
            DomainError::NotFound(name) => {
                format!("Can't remove \"{}\": there is no such card.", name)
            }
            DomainError::FileNotFound(_) => "File not found.".to_string(),
            other => format!("{}.", other),
        }
    }
}
