// src/domain/card.rs

/// A single term/definition pair and the number of times it was missed
/// since the last statistics reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    name: String,
    definition: String,
    mistakes: u32,
}

impl Card {
    pub fn new(name: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            definition: definition.into(),
            mistakes: 0,
        }
    }

    pub fn with_mistakes(mut self, mistakes: u32) -> Self {
        self.mistakes = mistakes;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn definition(&self) -> &str {
        &self.definition
    }

    pub fn mistakes(&self) -> u32 {
        self.mistakes
    }

    // Mutation stays inside the domain module; callers go through CardStore.
    pub(super) fn set_definition(&mut self, definition: String) {
        self.definition = definition;
    }

    // Imported counts may already sit at the maximum.
    pub(super) fn record_mistake(&mut self) {
        self.mistakes = self.mistakes.saturating_add(1);
    }

    pub(super) fn reset_mistakes(&mut self) {
        self.mistakes = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_name_and_definition_when_creating_card_then_starts_without_mistakes() {
        let card = Card::new("capital", "Paris");

        assert_eq!(card.name(), "capital");
        assert_eq!(card.definition(), "Paris");
        assert_eq!(card.mistakes(), 0);
    }

    #[test]
    fn given_card_when_recording_mistakes_then_counts_up_and_resets() {
        let mut card = Card::new("capital", "Paris").with_mistakes(2);

        card.record_mistake();
        assert_eq!(card.mistakes(), 3);

        card.reset_mistakes();
        assert_eq!(card.mistakes(), 0);
    }

    #[test]
    fn given_maximum_count_when_recording_mistake_then_stays_at_maximum() {
        let mut card = Card::new("capital", "Paris").with_mistakes(u32::MAX);

        card.record_mistake();

        assert_eq!(card.mistakes(), u32::MAX);
    }
}
