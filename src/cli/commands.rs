//! # Command Handler
//!
//! Parses and executes the REPL's record commands. Commands are
//! case-insensitive; the key is an `i64`; for `create` and `edit` the
//! value is everything after the key.
//!
//! ## Implementation
//!
//! Each command maps to one Database call and returns a CommandResult:
//! - Output: text to display to the user
//! - Exit: signal to terminate the REPL
//! - Error: error message to display
//!
//! Failures reported by the database (duplicate key, absent key) come back
//! as error messages; they never terminate the REPL.

use crate::cli::table::TableFormatter;
use crate::Database;

#[derive(Debug, PartialEq)]
pub enum CommandResult {
    Output(String),
    Exit,
    Continue,
    Error(String),
}

pub struct CommandHandler;

impl CommandHandler {
    pub fn execute(input: &str, db: &mut Database) -> CommandResult {
        let input = input.trim();
        let parts: Vec<&str> = input.split_whitespace().collect();

        if parts.is_empty() {
            return CommandResult::Continue;
        }

        let cmd = parts[0].to_lowercase();
        let args = &parts[1..];

        match cmd.as_str() {
            "quit" | "exit" | "q" => CommandResult::Exit,
            "help" | "h" | "?" => CommandResult::Output(help_text()),
            "create" => create_record(db, args),
            "find" => find_record(db, args),
            "edit" => edit_record(db, args),
            "delete" => delete_record(db, args),
            "list" => list_records(db),
            "clear" => clear_records(db),
            "save" => save_snapshot(db),
            _ => CommandResult::Error(format!(
                "Unknown command: {}. Type help for available commands.",
                cmd
            )),
        }
    }
}

fn parse_key(arg: &str) -> Result<i64, CommandResult> {
    arg.parse::<i64>()
        .map_err(|_| CommandResult::Error(format!("Invalid key: {} (expected an integer)", arg)))
}

fn create_record(db: &mut Database, args: &[&str]) -> CommandResult {
    if args.len() < 2 {
        return CommandResult::Error("Usage: create <key> <value>".into());
    }
    let key = match parse_key(args[0]) {
        Ok(key) => key,
        Err(err) => return err,
    };
    let value = args[1..].join(" ");

    if db.create(key, &value) {
        CommandResult::Output(format!("Created record {}", key))
    } else {
        CommandResult::Error(format!("Key {} is already used", key))
    }
}

fn find_record(db: &Database, args: &[&str]) -> CommandResult {
    if args.len() != 1 {
        return CommandResult::Error("Usage: find <key>".into());
    }
    let key = match parse_key(args[0]) {
        Ok(key) => key,
        Err(err) => return err,
    };

    match db.find(key) {
        Some(hit) => CommandResult::Output(format!(
            "{} = {} ({} comparisons)",
            key, hit.value, hit.comparisons
        )),
        None => CommandResult::Error(format!("Record with key {} not found", key)),
    }
}

fn edit_record(db: &mut Database, args: &[&str]) -> CommandResult {
    if args.len() < 2 {
        return CommandResult::Error("Usage: edit <key> <value>".into());
    }
    let key = match parse_key(args[0]) {
        Ok(key) => key,
        Err(err) => return err,
    };
    let value = args[1..].join(" ");

    if db.edit(key, &value) {
        CommandResult::Output(format!("Updated record {}", key))
    } else {
        CommandResult::Error(format!("Record with key {} not found", key))
    }
}

fn delete_record(db: &mut Database, args: &[&str]) -> CommandResult {
    if args.len() != 1 {
        return CommandResult::Error("Usage: delete <key>".into());
    }
    let key = match parse_key(args[0]) {
        Ok(key) => key,
        Err(err) => return err,
    };

    if db.delete(key) {
        CommandResult::Output(format!("Deleted record {}", key))
    } else {
        CommandResult::Error(format!("Record with key {} not found", key))
    }
}

fn list_records(db: &Database) -> CommandResult {
    let records = db.export();
    if records.is_empty() {
        return CommandResult::Output("No records".into());
    }
    CommandResult::Output(TableFormatter::new(&records).render())
}

fn clear_records(db: &mut Database) -> CommandResult {
    db.clear();
    CommandResult::Output("All records cleared".into())
}

fn save_snapshot(db: &Database) -> CommandResult {
    match db.save() {
        Ok(()) => CommandResult::Output(format!("Saved to {:?}", db.path())),
        Err(e) => CommandResult::Error(format!("Save failed: {}", e)),
    }
}

fn help_text() -> String {
    r#"AVLDB commands:

  create <key> <value>   Insert a new record
  find <key>             Show a record and the comparison count
  edit <key> <value>     Replace an existing record's value
  delete <key>           Remove a record
  list                   Show all records
  clear                  Drop every record from the live tree
  save                   Persist the snapshot immediately
  help                   Show this help message
  quit, exit             Save and exit
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn test_db() -> (Database, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let db = Database::open(dir.path().join("cli.avldb")).unwrap();
        (db, dir)
    }

    #[test]
    fn create_and_find_round_trip() {
        let (mut db, _dir) = test_db();

        let result = CommandHandler::execute("create 5 hello world", &mut db);
        assert_eq!(result, CommandResult::Output("Created record 5".into()));

        match CommandHandler::execute("find 5", &mut db) {
            CommandResult::Output(text) => {
                assert!(text.contains("hello world"));
                assert!(text.contains("comparisons"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn duplicate_create_reports_an_error() {
        let (mut db, _dir) = test_db();
        CommandHandler::execute("create 1 a", &mut db);

        let result = CommandHandler::execute("create 1 b", &mut db);
        assert_eq!(result, CommandResult::Error("Key 1 is already used".into()));
    }

    #[test]
    fn missing_key_commands_report_errors() {
        let (mut db, _dir) = test_db();

        assert!(matches!(
            CommandHandler::execute("find 9", &mut db),
            CommandResult::Error(_)
        ));
        assert!(matches!(
            CommandHandler::execute("delete 9", &mut db),
            CommandResult::Error(_)
        ));
        assert!(matches!(
            CommandHandler::execute("edit 9 x", &mut db),
            CommandResult::Error(_)
        ));
    }

    #[test]
    fn non_integer_key_is_rejected() {
        let (mut db, _dir) = test_db();

        let result = CommandHandler::execute("create abc x", &mut db);
        assert!(matches!(result, CommandResult::Error(msg) if msg.contains("Invalid key")));
    }

    #[test]
    fn unknown_command_is_reported() {
        let (mut db, _dir) = test_db();

        let result = CommandHandler::execute("frobnicate", &mut db);
        assert!(matches!(result, CommandResult::Error(msg) if msg.contains("Unknown command")));
    }

    #[test]
    fn blank_input_continues() {
        let (mut db, _dir) = test_db();

        assert_eq!(
            CommandHandler::execute("   ", &mut db),
            CommandResult::Continue
        );
    }

    #[test]
    fn quit_and_exit_signal_termination() {
        let (mut db, _dir) = test_db();

        assert_eq!(CommandHandler::execute("quit", &mut db), CommandResult::Exit);
        assert_eq!(CommandHandler::execute("EXIT", &mut db), CommandResult::Exit);
    }

    #[test]
    fn list_renders_records_in_key_set_order() {
        let (mut db, _dir) = test_db();
        CommandHandler::execute("create 5 five", &mut db);
        CommandHandler::execute("create 1 one", &mut db);

        match CommandHandler::execute("list", &mut db) {
            CommandResult::Output(table) => {
                assert!(table.contains("five"));
                assert!(table.contains("one"));
                assert!(table.find("five").unwrap() < table.find("one").unwrap());
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
