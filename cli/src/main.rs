//! Terminal 2048.

mod keys;
mod view;

use std::io::stdout;

use clap::Parser;
use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::info;
use twenty_48::{
    Error, FieldConfig, GameField, Result, Session, DEFAULT_HEIGHT, DEFAULT_WIDTH,
    DEFAULT_WIN_VALUE,
};

use crate::{keys::Keyboard, view::Screen};

#[derive(Parser, Debug)]
#[command(name = "twenty_48")]
#[command(about = "Slide, merge, reach the goal tile")]
#[command(version)]
struct Args {
    /// Board rows
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: usize,

    /// Board columns
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: usize,

    /// Tile value that wins the round
    #[arg(long, default_value_t = DEFAULT_WIN_VALUE)]
    win: u64,

    /// Seed for a reproducible game
    #[arg(short, long)]
    seed: Option<u64>,

    /// Log level (error, warn, info, debug, trace), written to stderr
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .parse_filters(&args.log_level)
        .init();

    let config = FieldConfig {
        height: args.height,
        width: args.width,
        win_value: args.win,
    };
    let field = match args.seed {
        Some(seed) => GameField::new_from_seed(config, seed)?,
        None => GameField::new_from_entropy(config)?,
    };
    let config = field.config();
    info!(
        "starting {}x{} game, goal {}",
        config.height, config.width, config.win_value
    );

    let mut session = Session::new(field);

    enable_raw_mode()?;
    let result = execute!(stdout(), EnterAlternateScreen, Hide)
        .map_err(Error::from)
        .and_then(|()| session.run(&mut Keyboard, &mut Screen::new(stdout())));

    // Always try to restore terminal state.
    let _ = execute!(stdout(), Show, LeaveAlternateScreen);
    let _ = disable_raw_mode();

    let snapshot = session.snapshot();
    println!(
        "score {}, best {}",
        snapshot.score,
        snapshot.high_score.max(snapshot.score)
    );
    result
}
