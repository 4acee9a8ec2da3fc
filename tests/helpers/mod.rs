use anyhow::{Context, Result};
use flashcards::application::{Dialogue, Session, SessionOptions};
use flashcards::infrastructure::Transcript;
use flashcards::util::testing::ScriptedConsole;
use std::path::PathBuf;
use tempfile::TempDir;

/// Temporary directory for card files and transcripts
#[allow(dead_code)]
pub struct TestFiles {
    _temp_dir: TempDir,
    pub root: PathBuf,
}

#[allow(dead_code)]
impl TestFiles {
    pub fn new() -> Result<Self> {
        let temp_dir = tempfile::tempdir().context("Failed to create temporary directory")?;
        let root = temp_dir.path().to_path_buf();
        Ok(Self {
            _temp_dir: temp_dir,
            root,
        })
    }

    /// Path inside the temp dir, as a string the user would type
    pub fn path(&self, name: &str) -> String {
        self.root.join(name).to_string_lossy().into_owned()
    }

    /// Write `content` to `name` and return its path
    pub fn write(&self, name: &str, content: &str) -> Result<String> {
        let path = self.path(name);
        std::fs::write(&path, content).context("Failed to write test file")?;
        Ok(path)
    }

    pub fn read(&self, name: &str) -> Result<String> {
        std::fs::read_to_string(self.root.join(name)).context("Failed to read test file")
    }
}

/// Run a scripted session to completion
#[allow(dead_code)]
pub fn run_session(
    inputs: &[&str],
    options: SessionOptions,
) -> Result<Session<ScriptedConsole, Transcript>> {
    let console = ScriptedConsole::with_inputs(inputs.iter().copied());
    let mut session = Session::new(Dialogue::new(console, Transcript::new()), options);
    session.run()?;
    Ok(session)
}

/// Lines the session printed
#[allow(dead_code)]
pub fn outputs(session: &Session<ScriptedConsole, Transcript>) -> Vec<String> {
    session.dialogue().console().outputs().to_vec()
}
