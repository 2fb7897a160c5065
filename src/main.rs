//! termgrid - character-grid pages for terminals and monospace panes.
//!
//! By default the page is rendered once for the current terminal (or the
//! configured default size when output is redirected) and printed. With
//! `--live` it is shown full-screen and re-fitted as the terminal resizes.

mod app;
mod compose;
mod event;
mod terminal;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use termgrid_config::{ClientHints, Config, negotiate};
use termgrid_protocol::{BorderStyle, Dimensions, Perspective};
use tracing_subscriber::EnvFilter;

use crate::app::App;
use crate::compose::{Screen, to_markup};

/// Environment variable holding the log filter.
const LOG_ENV: &str = "TERMGRID_LOG";

#[derive(Debug, Parser)]
#[command(name = "termgrid", version, about)]
struct Args {
    /// Show the page full-screen and follow terminal resizes.
    #[arg(long)]
    live: bool,

    /// Show a board position, given as piece placement (e.g. `8/8/8/8/8/8/8/K7`).
    #[arg(long, value_name = "PLACEMENT")]
    fen: Option<String>,

    /// Show the board from black's side.
    #[arg(long)]
    black: bool,

    /// Columns to render, instead of the terminal width.
    #[arg(long, env = "TERMGRID_COLS")]
    cols: Option<String>,

    /// Rows to render, instead of the terminal height.
    #[arg(long, env = "TERMGRID_ROWS")]
    rows: Option<String>,

    /// Border style: ascii, light, heavy, double or rounded.
    #[arg(long, value_name = "STYLE")]
    border: Option<BorderStyle>,

    /// Read configuration from this file instead of the default locations.
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Negotiate output for this client; clients that are not plain-text
    /// tools get the page wrapped in markup.
    #[arg(long, value_name = "AGENT")]
    user_agent: Option<String>,
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

async fn load_config(args: &Args) -> anyhow::Result<Config> {
    let mut config = match &args.config {
        Some(path) => {
            Config::load_file(path).with_context(|| format!("loading {}", path.display()))?
        }
        None => Config::load().await?,
    };

    if let Some(style) = args.border {
        config.border_style = style;
    }
    Ok(config)
}

fn print_once(args: &Args, screen: &mut Screen, config: &Config) {
    let measured = terminal::measure();
    let cols = args
        .cols
        .clone()
        .or_else(|| measured.map(|dims| dims.cols.to_string()));
    let rows = args
        .rows
        .clone()
        .or_else(|| measured.map(|dims| dims.rows.to_string()));

    let request = negotiate(
        &config.grid,
        ClientHints {
            cols: cols.as_deref(),
            rows: rows.as_deref(),
            user_agent: args.user_agent.as_deref(),
        },
    );

    let lines = screen.lines_for(request.dimensions);
    if args.user_agent.is_none() || request.plain_text {
        println!("{}", lines.join("\n"));
    } else {
        print!("{}", to_markup(&lines));
    }
}

async fn run_live(screen: Screen) -> anyhow::Result<()> {
    terminal::install_panic_hook();
    let mut terminal = terminal::setup_terminal()?;

    let size = terminal.size()?;
    let mut app = App::new(screen, Dimensions::new(size.width, size.height));

    let result = app.run(&mut terminal).await;

    // Always restore the terminal, even if the loop failed
    terminal::restore_terminal(&mut terminal)?;

    result
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();

    let config = load_config(&args).await?;
    let perspective = if args.black {
        Perspective::Black
    } else {
        Perspective::White
    };
    let mut screen = Screen::new(config, args.fen.clone(), perspective);

    if args.live {
        run_live(screen).await
    } else {
        print_once(&args, &mut screen, &config);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_parse_hints_as_text() {
        let args = Args::try_parse_from(["termgrid", "--cols", "120px", "--rows", "40"]).unwrap();
        assert_eq!(args.cols.as_deref(), Some("120px"));
        assert_eq!(args.rows.as_deref(), Some("40"));
        assert!(!args.live);
    }

    #[test]
    fn args_parse_border_style() {
        let args = Args::try_parse_from(["termgrid", "--border", "rounded"]).unwrap();
        assert_eq!(args.border, Some(BorderStyle::Rounded));
        assert!(Args::try_parse_from(["termgrid", "--border", "dotted"]).is_err());
    }

    #[test]
    fn args_parse_board_options() {
        let args =
            Args::try_parse_from(["termgrid", "--live", "--fen", "8/8/8/8/8/8/8/K7", "--black"])
                .unwrap();
        assert!(args.live);
        assert!(args.black);
        assert_eq!(args.fen.as_deref(), Some("8/8/8/8/8/8/8/K7"));
    }
}
