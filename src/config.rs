//! Runtime configuration.
//!
//! Every option can come from the command line or a `TICTACTOE_*`
//! environment variable; command-line flags win.
//!
//! | Flag | Environment | Default |
//! |------|-------------|---------|
//! | `--history-mode` | `TICTACTOE_HISTORY_MODE` | `append` |
//! | `--sort-descending` | `TICTACTOE_SORT_DESC` | off |
//! | `--no-title` | `TICTACTOE_NO_TITLE` | off |
//! | `--log-file` | `TICTACTOE_LOG_FILE` | `tui-tictactoe.log` |
//! | `--no-log` | | off |
//! | `--headless` | | off |

use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::Parser;

use crate::core::HistoryMode;

pub const DEFAULT_LOG_FILE: &str = "tui-tictactoe.log";

/// Terminal tic-tac-toe with a time-travel move log.
#[derive(Parser, Debug)]
#[command(name = "tui-tictactoe")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// What a move played after jumping back does to later moves
    /// (append: keep them, truncate: discard them)
    #[arg(long, env = "TICTACTOE_HISTORY_MODE", default_value = "append", value_parser = parse_history_mode)]
    pub history_mode: HistoryMode,

    /// Show the move list newest first
    #[arg(long, env = "TICTACTOE_SORT_DESC", value_parser = BoolishValueParser::new())]
    pub sort_descending: bool,

    /// Do not mirror the game status into the terminal title
    #[arg(long, env = "TICTACTOE_NO_TITLE", value_parser = BoolishValueParser::new())]
    pub no_title: bool,

    /// Log file path
    #[arg(long, env = "TICTACTOE_LOG_FILE", default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,

    /// Disable logging
    #[arg(long)]
    pub no_log: bool,

    /// Read commands from stdin and write JSON snapshots to stdout
    #[arg(long)]
    pub headless: bool,
}

fn parse_history_mode(s: &str) -> Result<HistoryMode, String> {
    HistoryMode::from_str(s).ok_or_else(|| format!("expected `append` or `truncate`, got `{}`", s))
}

/// Resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub history_mode: HistoryMode,
    pub sort_descending: bool,
    /// Mirror the status line into the terminal title.
    pub title: bool,
    pub log_file: Option<PathBuf>,
    pub headless: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            history_mode: HistoryMode::Append,
            sort_descending: false,
            title: true,
            log_file: Some(PathBuf::from(DEFAULT_LOG_FILE)),
            headless: false,
        }
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            history_mode: cli.history_mode,
            sort_descending: cli.sort_descending,
            title: !cli.no_title,
            log_file: (!cli.no_log).then_some(cli.log_file),
            headless: cli.headless,
        }
    }
}

impl Config {
    /// Parse the process arguments and environment.
    pub fn load() -> Self {
        Cli::parse().into()
    }

    /// Parse an explicit argument list (first item is the program name).
    pub fn try_from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Cli::try_parse_from(args).map(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn flags_override_defaults() {
        let config = Config::try_from_args([
            "tui-tictactoe",
            "--history-mode",
            "truncate",
            "--sort-descending",
            "--no-title",
            "--no-log",
        ])
        .unwrap();
        assert_eq!(config.history_mode, HistoryMode::Truncate);
        assert!(config.sort_descending);
        assert!(!config.title);
        assert_eq!(config.log_file, None);
        assert!(!config.headless);
    }

    #[test]
    fn rejects_unknown_history_mode() {
        assert!(Config::try_from_args(["tui-tictactoe", "--history-mode", "rewind"]).is_err());
    }

    #[test]
    fn log_file_can_be_overridden() {
        let config =
            Config::try_from_args(["tui-tictactoe", "--log-file", "/tmp/ttt.log", "--headless"])
                .unwrap();
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/ttt.log")));
        assert!(config.headless);
    }
}
