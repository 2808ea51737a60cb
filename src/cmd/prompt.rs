//! Interactive prompts for arguments missing from the command line.

use crate::schema::Table;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// Reads answers from the terminal
pub struct Prompter {
    rl: DefaultEditor,
}

impl Prompter {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            rl: DefaultEditor::new()?,
        })
    }

    fn ask(&mut self, question: &str) -> anyhow::Result<String> {
        match self.rl.readline(question) {
            Ok(line) => Ok(line.trim().to_string()),
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                anyhow::bail!("Aborted")
            }
            Err(err) => Err(err.into()),
        }
    }

    pub fn table(&mut self) -> anyhow::Result<String> {
        self.ask(&format!("Enter table name ({}): ", Table::valid_names()))
    }

    pub fn count(&mut self) -> anyhow::Result<String> {
        self.ask("Enter the number of records to generate: ")
    }
}
