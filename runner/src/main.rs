// ═══════════════════════════════════════════════════════════════════════
// Runner — CLI entry point for hot-seat console games
// ═══════════════════════════════════════════════════════════════════════

mod console;

use clap::{Parser, Subcommand};
use conquest_engine::setup::{self, Game, GameConfig};
use conquest_engine::types::{Color, PlayerSpec};
use conquest_engine::SetupError;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "conquest-runner", about = "Turn-based conquest on the console")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game, all seats at this console
    Play {
        /// Game config as JSON; overrides --player, --goals and --seed
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Seat as NAME:COLOR, repeat for each player
        #[arg(short, long = "player", value_parser = parse_player)]
        players: Vec<PlayerSpec>,
        /// Play for secret goals instead of world domination
        #[arg(short, long)]
        goals: bool,
        #[arg(short, long, default_value_t = 42)]
        seed: u64,
        /// Territory topology as JSON (defaults to the classic board)
        #[arg(long)]
        board: Option<PathBuf>,
        /// Card deck as JSON (defaults to the classic deck)
        #[arg(long)]
        deck: Option<PathBuf>,
    },
    /// Print the classic board as topology JSON
    ExportBoard,
}

#[derive(Debug, Error)]
enum RunnerError {
    #[error("cannot read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("bad config: {0}")]
    Config(#[from] serde_json::Error),
    #[error(transparent)]
    Setup(#[from] SetupError),
    #[error("console: {0}")]
    Io(#[from] io::Error),
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Play { config, players, goals, seed, board, deck } => {
            cmd_play(config.as_deref(), players, goals, seed, board.as_deref(), deck.as_deref())
        }
        Commands::ExportBoard => cmd_export_board(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn cmd_play(
    config_path: Option<&Path>,
    players: Vec<PlayerSpec>,
    goals: bool,
    seed: u64,
    board_path: Option<&Path>,
    deck_path: Option<&Path>,
) -> Result<(), RunnerError> {
    let config = match config_path {
        Some(path) => serde_json::from_str(&read(path)?)?,
        None => GameConfig { players, world_domination: !goals, seed },
    };
    let board_json = board_path.map(read).transpose()?;
    let deck_json = deck_path.map(read).transpose()?;
    let (board, deck) = setup::load_topology(board_json.as_deref(), deck_json.as_deref())?;

    let game = Game::from_config(&config, board, deck)?;
    println!("=== Conquest ===\n");
    println!(
        "{} players, seed={}, {}\n",
        game.players().len(),
        config.seed,
        if game.is_world_domination() { "world domination" } else { "secret goals" }
    );

    let stdin = io::stdin();
    let mut console = console::Console::new(game.start(), stdin.lock(), io::stdout());
    console.run()?;
    Ok(())
}

fn cmd_export_board() -> Result<(), RunnerError> {
    let defs = conquest_engine::Board::classic().to_defs();
    println!("{}", serde_json::to_string_pretty(&defs)?);
    Ok(())
}

fn read(path: &Path) -> Result<String, RunnerError> {
    std::fs::read_to_string(path).map_err(|source| RunnerError::Read { path: path.to_path_buf(), source })
}

fn parse_player(s: &str) -> Result<PlayerSpec, String> {
    let (name, color) = s.rsplit_once(':').ok_or_else(|| format!("expected NAME:COLOR, got '{s}'"))?;
    if name.trim().is_empty() {
        return Err("player name is empty".into());
    }
    let color: Color = color.parse()?;
    Ok(PlayerSpec::new(name.trim(), color))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_player() {
        assert_eq!(parse_player("Erika:red"), Ok(PlayerSpec::new("Erika", Color::Red)));
        assert_eq!(parse_player("Mr: X:Brown"), Ok(PlayerSpec::new("Mr: X", Color::Brown)));
        assert!(parse_player("Erika").is_err());
        assert!(parse_player(":Red").is_err());
        assert!(parse_player("Erika:purple").is_err());
    }

    #[test]
    fn test_cli_builds_roster() {
        let cli = Cli::try_parse_from([
            "conquest-runner",
            "play",
            "--player",
            "Jack:Black",
            "--player",
            "Kate:Orange",
            "--goals",
        ])
        .expect("valid arguments");
        match cli.command {
            Commands::Play { players, goals, seed, .. } => {
                assert_eq!(players.len(), 2);
                assert!(goals);
                assert_eq!(seed, 42);
            }
            Commands::ExportBoard => panic!("wrong subcommand"),
        }
    }
}
