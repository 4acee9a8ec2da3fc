// src/cli/args.rs
use clap::Parser;
use std::path::PathBuf;

/// Single-dash long flags accepted for compatibility, with their clap spelling.
const LEGACY_FLAGS: &[(&str, &str)] = &[("-import", "--import"), ("-export", "--export")];

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
pub struct Args {
    /// Card file to load before the first prompt
    #[arg(long, value_name = "FILE")]
    pub import: Option<PathBuf>,

    /// Card file to write on exit
    #[arg(long, value_name = "FILE")]
    pub export: Option<PathBuf>,

    /// Path to config file (optional)
    #[arg(short, long, value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Parse process arguments, accepting `-import`/`-export` as well.
    pub fn parse_with_legacy_flags() -> Self {
        Self::parse_from(normalize_legacy_flags(std::env::args()))
    }
}

/// Rewrite `-import`/`-export` to `--import`/`--export`.
///
/// Only whole arguments are rewritten, so a file literally named `-import`
/// after `--export` is left alone.
pub fn normalize_legacy_flags<I, S>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut out: Vec<String> = Vec::new();
    for arg in args.into_iter().map(Into::into) {
        let expects_value = out
            .last()
            .is_some_and(|prev| prev == "--import" || prev == "--export");
        let rewritten = LEGACY_FLAGS
            .iter()
            .find(|(legacy, _)| !expects_value && arg == *legacy)
            .map(|(_, modern)| modern.to_string());
        out.push(rewritten.unwrap_or(arg));
    }
    out
}
