//! # REPL - Read-Eval-Print Loop
//!
//! The main interactive loop for the AVLDB CLI. Handles:
//!
//! - Reading input with rustyline (history, line editing)
//! - Dispatching commands to the handler
//! - Saving the snapshot on every exit path
//!
//! ## Execution Flow
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                  Read Line                   │
//! └──────────────────────────────────────────────┘
//!                      │
//!                      ▼
//! ┌──────────────────────────────────────────────┐
//! │          CommandHandler::execute             │
//! └──────────────────────────────────────────────┘
//!        │ Output/Error        │ Exit
//!        ▼                     ▼
//! ┌──────────────────┐  ┌──────────────────────┐
//! │   Print Result   │  │  Save Snapshot, Bye  │
//! └──────────────────┘  └──────────────────────┘
//!        │
//!        ▼
//!     [Loop]
//! ```
//!
//! ## Error Handling
//!
//! Command failures are displayed but do not terminate the REPL. The
//! snapshot is saved when the user quits, on Ctrl+D, and when the loop
//! ends for any other reason — mirroring the save-on-close lifecycle of
//! the record store.

use eyre::{Result, WrapErr};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::warn;

use crate::cli::commands::{CommandHandler, CommandResult};
use crate::cli::history::history_path;
use crate::Database;

const PROMPT: &str = "avldb> ";

pub struct Repl {
    db: Database,
    editor: DefaultEditor,
}

impl Repl {
    pub fn new(db: Database) -> Result<Self> {
        let mut editor = DefaultEditor::new().wrap_err("failed to initialize line editor")?;

        if let Some(history_file) = history_path() {
            let _ = editor.load_history(&history_file);
        }

        Ok(Self { db, editor })
    }

    pub fn run(&mut self) -> Result<()> {
        self.print_welcome();

        loop {
            match self.editor.readline(PROMPT) {
                Ok(line) => {
                    if !self.handle_line(&line) {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye");
                    break;
                }
                Err(err) => {
                    eprintln!("Error reading input: {}", err);
                    break;
                }
            }
        }

        if let Some(history_file) = history_path() {
            let _ = self.editor.save_history(&history_file);
        }

        // the save hook: persist once on the way out
        if let Err(e) = self.db.save() {
            warn!(%e, "failed to save snapshot on exit");
            eprintln!("Warning: failed to save snapshot: {}", e);
        }

        Ok(())
    }

    fn handle_line(&mut self, line: &str) -> bool {
        if line.trim().is_empty() {
            return true;
        }
        let _ = self.editor.add_history_entry(line);

        match CommandHandler::execute(line, &mut self.db) {
            CommandResult::Output(text) => {
                println!("{}", text);
                true
            }
            CommandResult::Error(message) => {
                eprintln!("Error: {}", message);
                true
            }
            CommandResult::Continue => true,
            CommandResult::Exit => {
                println!("Bye");
                false
            }
        }
    }

    fn print_welcome(&self) {
        println!("avldb {}", env!("CARGO_PKG_VERSION"));
        println!(
            "{} records loaded from {:?}",
            self.db.len(),
            self.db.path()
        );
        println!("Type help for available commands.");
    }
}
