// src/infrastructure/console.rs
use crate::application::Console;
use crate::domain::DomainError;
use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};

/// Console over any buffered reader and writer; stdin/stdout in the binary.
pub struct TerminalConsole<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl TerminalConsole<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalConsole<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl<R: BufRead, W: Write> Console for TerminalConsole<R, W> {
    fn write_line(&mut self, line: &str) -> Result<(), DomainError> {
        writeln!(self.writer, "{}", line)?;
        self.writer.flush()?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<String, DomainError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(DomainError::InputExhausted);
        }

        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn given_crlf_input_when_reading_then_strips_terminators() {
        let mut console = TerminalConsole::new(Cursor::new("add\r\nexit\n"), Vec::new());

        assert_eq!(console.read_line().unwrap(), "add");
        assert_eq!(console.read_line().unwrap(), "exit");
        assert!(matches!(console.read_line(), Err(DomainError::InputExhausted)));
    }

    #[test]
    fn given_last_line_without_newline_when_reading_then_returns_it() {
        let mut console = TerminalConsole::new(Cursor::new("exit"), Vec::new());

        assert_eq!(console.read_line().unwrap(), "exit");
    }

    #[test]
    fn given_lines_when_writing_then_appends_newlines() {
        let mut written = Vec::new();
        {
            let mut console = TerminalConsole::new(Cursor::new(""), &mut written);
            console.write_line("Correct!").unwrap();
            console.write_line("Bye bye!").unwrap();
        }

        assert_eq!(String::from_utf8(written).unwrap(), "Correct!\nBye bye!\n");
    }
}
