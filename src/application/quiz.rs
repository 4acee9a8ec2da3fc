// src/application/quiz.rs
use crate::application::{Console, Dialogue, SessionLog};
use crate::domain::{CardStore, DomainError};
use crate::ports::MessagePresenter;
use tracing::{debug, instrument};

/// Outcome of one quiz round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Wrong { expected: String },
    /// Wrong for the asked card but exactly the definition of `other`.
    WrongButMatches { expected: String, other: String },
}

impl Verdict {
    pub fn is_correct(&self) -> bool {
        matches!(self, Verdict::Correct)
    }
}

/// Asks cards in store order and tracks mistakes.
#[derive(Debug, Default)]
pub struct QuizEngine {
    presenter: MessagePresenter,
}

impl QuizEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the user's answer to "how many times to ask".
    pub fn parse_round_count(input: &str) -> Result<usize, DomainError> {
        input
            .trim()
            .parse()
            .map_err(|_| DomainError::InvalidRoundCount(input.to_string()))
    }

    /// Grade `answer` for the card named `name`, counting a mistake if wrong.
    pub fn grade(store: &mut CardStore, name: &str, answer: &str) -> Result<Verdict, DomainError> {
        let card = store
            .find_by_name(name)
            .ok_or_else(|| DomainError::NotFound(name.to_string()))?;

        if card.definition() == answer {
            return Ok(Verdict::Correct);
        }

        let expected = card.definition().to_string();
        let verdict = match store.find_by_definition(answer) {
            Some(other) => Verdict::WrongButMatches {
                expected,
                other: other.name().to_string(),
            },
            None => Verdict::Wrong { expected },
        };

        let mistakes = store.record_mistake(name)?;
        debug!(name, mistakes, "Wrong answer");
        Ok(verdict)
    }

    /// Run up to `rounds` rounds, one card per round in insertion order.
    ///
    /// Ends early when the cards run out. A failing answer source aborts the
    /// session before the current round is graded.
    #[instrument(level = "debug", skip(self, store, dialogue))]
    pub fn run<C: Console, L: SessionLog>(
        &self,
        store: &mut CardStore,
        rounds: usize,
        dialogue: &mut Dialogue<C, L>,
    ) -> Result<Vec<Verdict>, DomainError> {
        let mut verdicts = Vec::with_capacity(rounds.min(store.len()));

        for index in 0..rounds.min(store.len()) {
            let Some(card) = store.get(index) else { break };
            let name = card.name().to_string();
            let question = self.presenter.question(card);

            let answer = dialogue.ask(&question)?;
            let verdict = Self::grade(store, &name, &answer)?;
            dialogue.say(&self.presenter.verdict(&verdict))?;
            verdicts.push(verdict);
        }

        debug!(
            asked = verdicts.len(),
            correct = verdicts.iter().filter(|v| v.is_correct()).count(),
            "Quiz finished"
        );
        Ok(verdicts)
    }
}
