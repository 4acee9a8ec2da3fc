// src/application/session.rs
use crate::application::{Console, Dialogue, QuizEngine, SessionLog};
use crate::constants::{
    ACTION_PROMPT, CARD_PROMPT, DEFINITION_PROMPT, FAREWELL, FILE_NAME_PROMPT, REMOVE_PROMPT,
    ROUNDS_PROMPT,
};
use crate::domain::{CardStore, DomainError};
use crate::infrastructure::card_file;
use crate::ports::MessagePresenter;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info, instrument, warn};

/// Files the session touches without asking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionOptions {
    /// Loaded before the first prompt.
    pub import: Option<PathBuf>,
    /// Written on `exit`, before the farewell.
    pub export: Option<PathBuf>,
    /// Transcript written on `exit`, after the farewell.
    pub autosave_log: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Add,
    Remove,
    Import,
    Export,
    Ask,
    Exit,
    Log,
    HardestCard,
    ResetStats,
}

impl FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "add" => Ok(Action::Add),
            "remove" => Ok(Action::Remove),
            "import" => Ok(Action::Import),
            "export" => Ok(Action::Export),
            "ask" => Ok(Action::Ask),
            "exit" => Ok(Action::Exit),
            "log" => Ok(Action::Log),
            "hardest card" => Ok(Action::HardestCard),
            "reset stats" => Ok(Action::ResetStats),
            other => Err(other.to_string()),
        }
    }
}

/// The interactive command loop over one card store.
pub struct Session<C: Console, L: SessionLog> {
    store: CardStore,
    dialogue: Dialogue<C, L>,
    options: SessionOptions,
    quiz: QuizEngine,
    presenter: MessagePresenter,
}

impl<C: Console, L: SessionLog> Session<C, L> {
    pub fn new(dialogue: Dialogue<C, L>, options: SessionOptions) -> Self {
        Self {
            store: CardStore::new(),
            dialogue,
            options,
            quiz: QuizEngine::new(),
            presenter: MessagePresenter::new(),
        }
    }

    pub fn store(&self) -> &CardStore {
        &self.store
    }

    pub fn dialogue(&self) -> &Dialogue<C, L> {
        &self.dialogue
    }

    /// Run until `exit`. Fails only when input runs out or output breaks.
    pub fn run(&mut self) -> Result<(), DomainError> {
        if let Some(path) = self.options.import.clone() {
            info!(?path, "Importing startup file");
            let result = self.import_file(&path);
            self.report(result)?;
        }

        loop {
            let input = self.dialogue.ask(ACTION_PROMPT)?;
            match input.parse::<Action>() {
                Ok(Action::Exit) => return self.exit(),
                Ok(action) => {
                    let result = self.dispatch(action);
                    self.report(result)?;
                }
                Err(unknown) => debug!(%unknown, "Ignoring unknown action"),
            }
        }
    }

    #[instrument(level = "debug", skip(self))]
    fn dispatch(&mut self, action: Action) -> Result<(), DomainError> {
        match action {
            Action::Add => self.add(),
            Action::Remove => self.remove(),
            Action::Import => {
                let path = self.dialogue.ask(FILE_NAME_PROMPT)?;
                self.import_file(Path::new(&path))
            }
            Action::Export => {
                let path = self.dialogue.ask(FILE_NAME_PROMPT)?;
                self.export_file(Path::new(&path))
            }
            Action::Ask => self.ask(),
            Action::Log => self.save_log(),
            Action::HardestCard => {
                let line = self.presenter.hardest(&self.store.hardest());
                self.dialogue.say(&line)
            }
            Action::ResetStats => {
                let affected = self.store.reset_statistics();
                debug!(affected, "Statistics reset");
                self.dialogue.say(&self.presenter.statistics_reset())
            }
            Action::Exit => self.exit(),
        }
    }

    /// Turn a recoverable failure into a report line; pass fatal ones up.
    fn report(&mut self, result: Result<(), DomainError>) -> Result<(), DomainError> {
        match result {
            Err(DomainError::InputExhausted) => Err(DomainError::InputExhausted),
            Err(e) => {
                warn!(error = %e, "Command failed");
                let line = self.presenter.error(&e);
                self.dialogue.say(&line)
            }
            Ok(()) => Ok(()),
        }
    }

    fn add(&mut self) -> Result<(), DomainError> {
        let name = self.dialogue.ask(CARD_PROMPT)?;
        if self.store.contains_name(&name) {
            return Err(DomainError::DuplicateName(name));
        }

        let definition = self.dialogue.ask(DEFINITION_PROMPT)?;
        let line = self.presenter.card_added(self.store.add(&name, &definition)?);
        self.dialogue.say(&line)
    }

    fn remove(&mut self) -> Result<(), DomainError> {
        let name = self.dialogue.ask(REMOVE_PROMPT)?;
        self.store.remove(&name)?;
        self.dialogue.say(&self.presenter.card_removed())
    }

    fn import_file(&mut self, path: &Path) -> Result<(), DomainError> {
        let file = card_file::read_cards(path)?;
        for error in &file.malformed {
            let line = self.presenter.error(error);
            self.dialogue.say(&line)?;
        }

        let loaded = self.store.import_from(file.records);
        self.dialogue.say(&self.presenter.cards_loaded(loaded))
    }

    fn export_file(&mut self, path: &Path) -> Result<(), DomainError> {
        let saved = card_file::write_cards(path, self.store.export_to())?;
        self.dialogue.say(&self.presenter.cards_saved(saved))
    }

    fn ask(&mut self) -> Result<(), DomainError> {
        let input = self.dialogue.ask(ROUNDS_PROMPT)?;
        let rounds = QuizEngine::parse_round_count(&input)?;
        self.quiz.run(&mut self.store, rounds, &mut self.dialogue)?;
        Ok(())
    }

    fn save_log(&mut self) -> Result<(), DomainError> {
        let path = self.dialogue.ask(FILE_NAME_PROMPT)?;
        self.dialogue.save_log(Path::new(&path))?;
        self.dialogue.say(&self.presenter.log_saved())
    }

    fn exit(&mut self) -> Result<(), DomainError> {
        if let Some(path) = self.options.export.clone() {
            let result = self.export_file(&path);
            self.report(result)?;
        }
        self.dialogue.say(FAREWELL)?;

        if let Some(path) = &self.options.autosave_log {
            match self.dialogue.save_log(path) {
                Ok(lines) => info!(?path, lines, "Transcript saved"),
                Err(e) => warn!(?path, error = %e, "Transcript autosave failed"),
            }
        }
        Ok(())
    }
}
