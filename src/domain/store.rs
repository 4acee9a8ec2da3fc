// src/domain/store.rs
use crate::domain::{Card, DomainError};
use tracing::{debug, instrument};

/// Result of a hardest-card query.
#[derive(Debug, PartialEq, Eq)]
pub enum Hardest<'a> {
    None,
    Single(&'a Card),
    /// Every card sharing the maximum mistake count, in insertion order.
    Tie(Vec<&'a Card>),
}

/// Ordered card collection.
///
/// Names are unique and definitions are unique, each in their own space:
/// a card's name may equal another card's definition. Insertion order is
/// observable through export, quiz order and tie listings.
#[derive(Debug, Default, Clone)]
pub struct CardStore {
    cards: Vec<Card>,
}

impl CardStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.find_by_name(name).is_some()
    }

    pub fn contains_definition(&self, definition: &str) -> bool {
        self.find_by_definition(definition).is_some()
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.name() == name)
    }

    pub fn find_by_definition(&self, definition: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.definition() == definition)
    }

    /// Append a new card with no mistakes.
    ///
    /// The name is checked before the definition, so a card that collides on
    /// both reports `DuplicateName`.
    #[instrument(level = "debug", skip(self))]
    pub fn add(&mut self, name: &str, definition: &str) -> Result<&Card, DomainError> {
        if self.contains_name(name) {
            return Err(DomainError::DuplicateName(name.to_string()));
        }
        if self.contains_definition(definition) {
            return Err(DomainError::DuplicateDefinition(definition.to_string()));
        }

        self.cards.push(Card::new(name, definition));
        debug!(size = self.cards.len(), "Card added");
        Ok(&self.cards[self.cards.len() - 1])
    }

    /// Remove the card with this name, keeping the order of the rest.
    #[instrument(level = "debug", skip(self))]
    pub fn remove(&mut self, name: &str) -> Result<Card, DomainError> {
        let index = self
            .cards
            .iter()
            .position(|c| c.name() == name)
            .ok_or_else(|| DomainError::NotFound(name.to_string()))?;

        Ok(self.cards.remove(index))
    }

    /// Merge records into the store in the order given.
    ///
    /// An existing name only gets its definition overwritten; its mistake
    /// count and position stay. Unknown names are appended as-is. Definition
    /// uniqueness is not re-checked here. Returns the number of records applied.
    #[instrument(level = "debug", skip_all)]
    pub fn import_from<I>(&mut self, records: I) -> usize
    where
        I: IntoIterator<Item = Card>,
    {
        let mut applied = 0;
        for record in records {
            match self.cards.iter_mut().find(|c| c.name() == record.name()) {
                Some(existing) => {
                    debug!(name = record.name(), "Overwriting definition");
                    existing.set_definition(record.definition().to_string());
                }
                None => self.cards.push(record),
            }
            applied += 1;
        }
        debug!(applied, size = self.cards.len(), "Import applied");
        applied
    }

    /// All cards in insertion order.
    pub fn export_to(&self) -> &[Card] {
        &self.cards
    }

    /// Increment the mistake count of the named card and return the new count.
    pub fn record_mistake(&mut self, name: &str) -> Result<u32, DomainError> {
        let card = self
            .cards
            .iter_mut()
            .find(|c| c.name() == name)
            .ok_or_else(|| DomainError::NotFound(name.to_string()))?;

        card.record_mistake();
        Ok(card.mistakes())
    }

    /// Zero every mistake count. Returns how many cards were touched.
    pub fn reset_statistics(&mut self) -> usize {
        self.cards.iter_mut().for_each(Card::reset_mistakes);
        self.cards.len()
    }

    pub fn hardest(&self) -> Hardest<'_> {
        let max = self.cards.iter().map(Card::mistakes).max().unwrap_or(0);
        if max == 0 {
            return Hardest::None;
        }

        let mut tied: Vec<&Card> = self.cards.iter().filter(|c| c.mistakes() == max).collect();
        if tied.len() == 1 {
            Hardest::Single(tied.remove(0))
        } else {
            Hardest::Tie(tied)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_of(records: &[(&str, &str, u32)]) -> CardStore {
        let mut store = CardStore::new();
        store.import_from(
            records
                .iter()
                .map(|(n, d, m)| Card::new(*n, *d).with_mistakes(*m)),
        );
        store
    }

    #[test]
    fn given_distinct_cards_when_adding_then_each_is_findable_by_name() {
        // Arrange
        let mut store = CardStore::new();
        let pairs = [("a", "1"), ("b", "2"), ("c", "3"), ("d", "4")];

        // Act
        for (name, definition) in pairs {
            store.add(name, definition).expect("Add should succeed");
        }

        // Assert
        assert_eq!(store.len(), pairs.len());
        for (name, definition) in pairs {
            let card = store.find_by_name(name).expect("Card should exist");
            assert_eq!(card.definition(), definition);
            assert_eq!(card.mistakes(), 0);
        }
    }

    #[test]
    fn given_existing_name_when_adding_then_returns_duplicate_name() {
        let mut store = CardStore::new();
        store.add("capital", "Paris").unwrap();

        let result = store.add("capital", "Berlin");

        match result {
            Err(DomainError::DuplicateName(name)) => assert_eq!(name, "capital"),
            other => panic!("Expected DuplicateName, got {:?}", other),
        }
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn given_existing_definition_when_adding_then_returns_duplicate_definition() {
        let mut store = CardStore::new();
        store.add("capital", "Paris").unwrap();

        let result = store.add("city of light", "Paris");

        match result {
            Err(DomainError::DuplicateDefinition(definition)) => assert_eq!(definition, "Paris"),
            other => panic!("Expected DuplicateDefinition, got {:?}", other),
        }
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn given_name_matching_other_definition_when_adding_then_succeeds() {
        let mut store = CardStore::new();
        store.add("a", "b").unwrap();

        let result = store.add("b", "a");

        assert!(result.is_ok());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn given_existing_card_when_removing_then_keeps_order_of_rest() {
        let mut store = store_of(&[("a", "1", 0), ("b", "2", 0), ("c", "3", 0)]);

        let removed = store.remove("b").expect("Remove should succeed");

        assert_eq!(removed.name(), "b");
        let names: Vec<_> = store.export_to().iter().map(Card::name).collect();
        assert_eq!(names, vec!["a", "c"]);
    }

    #[test]
    fn given_unknown_card_when_removing_then_returns_not_found() {
        let mut store = store_of(&[("a", "1", 0)]);

        let result = store.remove("z");

        assert!(matches!(result, Err(DomainError::NotFound(ref n)) if n == "z"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn given_known_name_when_importing_then_overwrites_definition_only() {
        let mut store = store_of(&[("a", "1", 4), ("b", "2", 0)]);

        let applied = store.import_from(vec![
            Card::new("a", "one").with_mistakes(9),
            Card::new("c", "3").with_mistakes(1),
        ]);

        assert_eq!(applied, 2);
        assert_eq!(
            store.export_to(),
            &[
                Card::new("a", "one").with_mistakes(4),
                Card::new("b", "2"),
                Card::new("c", "3").with_mistakes(1),
            ]
        );
    }

    #[test]
    fn given_duplicate_definitions_in_import_when_importing_then_accepts_them() {
        let mut store = CardStore::new();

        store.import_from(vec![Card::new("a", "same"), Card::new("b", "same")]);

        assert_eq!(store.len(), 2);
    }

    #[test]
    fn given_exported_cards_when_importing_into_fresh_store_then_equal() {
        let original = store_of(&[("x", "1", 2), ("y", "2", 0), ("z", "3", 7)]);

        let mut copy = CardStore::new();
        copy.import_from(original.export_to().to_vec());

        assert_eq!(copy.export_to(), original.export_to());
    }

    #[test]
    fn given_mistakes_when_resetting_then_hardest_is_none() {
        let mut store = store_of(&[("a", "1", 3), ("b", "2", 1)]);

        let affected = store.reset_statistics();

        assert_eq!(affected, 2);
        assert_eq!(store.hardest(), Hardest::None);
    }

    #[test]
    fn given_empty_store_when_querying_hardest_then_none() {
        assert_eq!(CardStore::new().hardest(), Hardest::None);
    }

    #[test]
    fn given_one_maximum_when_querying_hardest_then_single() {
        let store = store_of(&[("a", "1", 1), ("b", "2", 5)]);

        match store.hardest() {
            Hardest::Single(card) => {
                assert_eq!(card.name(), "b");
                assert_eq!(card.mistakes(), 5);
            }
            other => panic!("Expected Single, got {:?}", other),
        }
    }

    #[test]
    fn given_shared_maximum_when_querying_hardest_then_tie_of_tied_cards_only() {
        let store = store_of(&[("a", "1", 0), ("b", "2", 3), ("c", "3", 3)]);

        match store.hardest() {
            Hardest::Tie(cards) => {
                let names: Vec<_> = cards.iter().map(|c| c.name()).collect();
                assert_eq!(names, vec!["b", "c"]);
                assert!(cards.iter().all(|c| c.mistakes() == 3));
            }
            other => panic!("Expected Tie, got {:?}", other),
        }
    }

    #[test]
    fn given_card_when_recording_mistake_then_only_that_card_changes() {
        let mut store = store_of(&[("a", "1", 0), ("b", "2", 0)]);

        let count = store.record_mistake("b").unwrap();

        assert_eq!(count, 1);
        assert_eq!(store.find_by_name("a").unwrap().mistakes(), 0);
        assert!(store.record_mistake("nope").is_err());
    }
}
