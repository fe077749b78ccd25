mod config;
mod terminal;

use std::io;

use greed_core::{DiceSet, Game};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use config::Config;
use terminal::TerminalConsole;

fn main() {
    // 日志写到 stderr，避免和游戏文本混在一起
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let config = Config::from_env();
    info!(?config, "终端客户端启动");

    let dice = match config.seed {
        Some(seed) => DiceSet::seeded(seed),
        None => DiceSet::new(),
    };
    let console = TerminalConsole::new(io::stdin().lock(), io::stdout(), config.message_format);

    let mut game = Game::new(console, dice);
    if let Err(e) = game.start() {
        error!("游戏中止: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
