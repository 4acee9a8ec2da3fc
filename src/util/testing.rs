// src/util/testing.rs

use anyhow::Result;
use std::collections::VecDeque;
use tracing::{debug, info};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::Console;
use crate::domain::DomainError;

/// Console test double: replays scripted input lines and captures output.
///
/// Once the script runs out, `read_line` fails with `InputExhausted`, the
/// same way a closed stdin does.
///
/// # Examples
///
/// ```
/// use flashcards::application::Console;
/// use flashcards::util::testing::ScriptedConsole;
///
/// let mut console = ScriptedConsole::builder()
///     .with_input("add")
///     .with_inputs(["capital", "Paris"])
///     .build();
///
/// assert_eq!(console.read_line().unwrap(), "add");
/// console.write_line("The card:").unwrap();
/// assert_eq!(console.outputs(), &["The card:"]);
/// ```
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    outputs: Vec<String>,
}

impl ScriptedConsole {
    pub fn builder() -> ScriptedConsoleBuilder {
        ScriptedConsoleBuilder::new()
    }

    pub fn with_inputs<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::builder().with_inputs(inputs).build()
    }

    /// Every line written so far, in order.
    pub fn outputs(&self) -> &[String] {
        &self.outputs
    }

    /// Input lines not consumed yet.
    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }
}

impl Console for ScriptedConsole {
    fn write_line(&mut self, line: &str) -> Result<(), DomainError> {
        self.outputs.push(line.to_string());
        Ok(())
    }

    fn read_line(&mut self) -> Result<String, DomainError> {
        self.inputs.pop_front().ok_or(DomainError::InputExhausted)
    }
}

/// Builder for ScriptedConsole
pub struct ScriptedConsoleBuilder {
    inputs: VecDeque<String>,
}

impl ScriptedConsoleBuilder {
    pub fn new() -> Self {
        Self {
            inputs: VecDeque::new(),
        }
    }

    /// Queue one input line
    pub fn with_input(mut self, line: impl Into<String>) -> Self {
        self.inputs.push_back(line.into());
        self
    }

    /// Queue several input lines in order
    pub fn with_inputs<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inputs.extend(lines.into_iter().map(Into::into));
        self
    }

    pub fn build(self) -> ScriptedConsole {
        ScriptedConsole {
            inputs: self.inputs,
            outputs: Vec::new(),
        }
    }
}

impl Default for ScriptedConsoleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn init_test_setup() -> Result<()> {
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");

    // RUST_LOG wins; otherwise only this crate at debug
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("flashcards=debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_test_writer()
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}
