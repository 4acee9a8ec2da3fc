// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use crate::cli::args::Args;
use anyhow::{Context, Result};
use application::{Dialogue, Session};
use infrastructure::{Config, TerminalConsole, Transcript};
use tracing::{debug, info};

pub fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting flashcards with arguments");

    let config = Config::discover(args.config.as_deref())?;
    let options = config.session_options(args.import, args.export);
    debug!(?options, "Resolved session options");

    let dialogue = Dialogue::new(TerminalConsole::stdio(), Transcript::new());
    let mut session = Session::new(dialogue, options);

    session.run().context("Session ended unexpectedly")?;
    info!(cards = session.store().len(), "Session finished");

    Ok(())
}
