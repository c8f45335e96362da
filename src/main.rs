//! Terminal tic-tac-toe runner (default binary).
//!
//! Interactive by default; `--headless` switches to the line-delimited JSON
//! driver on stdin/stdout.

use anyhow::Result;
use tracing::info;

use tui_tictactoe::config::Config;
use tui_tictactoe::{app, headless, logging};

fn main() -> Result<()> {
    let config = Config::load();
    logging::init(config.log_file.as_deref())?;
    info!(
        history_mode = %config.history_mode,
        sort_descending = config.sort_descending,
        title = config.title,
        headless = config.headless,
        "starting"
    );

    if config.headless {
        headless::run_stdio(&config)
    } else {
        app::run(&config)
    }
}
