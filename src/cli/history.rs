//! # History File Management
//!
//! Manages the location of the CLI history file. By default, history is
//! stored in `~/.avldb_history`.
//!
//! ## Configuration
//!
//! The history file location can be overridden using the `AVLDB_HISTORY`
//! environment variable:
//!
//! ```bash
//! export AVLDB_HISTORY=/custom/path/history
//! avldb ./data.avldb
//! ```
//!
//! Setting `AVLDB_HISTORY` to an empty string disables history
//! persistence.
//!
//! ## Implementation
//!
//! The history path is resolved once at CLI startup and passed to
//! rustyline, which handles the actual file I/O.

use std::env;
use std::path::PathBuf;

const DEFAULT_HISTORY_FILE: &str = ".avldb_history";
const HISTORY_ENV_VAR: &str = "AVLDB_HISTORY";

pub fn history_path() -> Option<PathBuf> {
    if let Ok(custom_path) = env::var(HISTORY_ENV_VAR) {
        if custom_path.is_empty() {
            return None;
        }
        return Some(PathBuf::from(custom_path));
    }

    home_dir().map(|home| home.join(DEFAULT_HISTORY_FILE))
}

fn home_dir() -> Option<PathBuf> {
    env::var("HOME").ok().map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    // one test so the env-var mutations cannot race under the parallel
    // test runner
    #[test]
    fn history_path_resolution() {
        env::remove_var(HISTORY_ENV_VAR);
        if let Some(path) = history_path() {
            assert!(path.to_string_lossy().contains(".avldb_history"));
        }

        env::set_var(HISTORY_ENV_VAR, "/custom/path");
        assert_eq!(history_path(), Some(PathBuf::from("/custom/path")));

        env::set_var(HISTORY_ENV_VAR, "");
        assert_eq!(history_path(), None);

        env::remove_var(HISTORY_ENV_VAR);
    }
}
