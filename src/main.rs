//! # Console Tic-Tac-Toe Arena
//!
//! This is the main entry point for a console Tic-Tac-Toe arena supporting a
//! configurable board dimension, human players, and random-move AI opponents.
//!
//! The application runs an interactive command loop on stdin:
//!
//! ```text
//! Input command: >start user easy
//! Input command: >exit
//! ```
//!
//! Each seat in `start <playerX> <playerO>` is either `user` (human input) or
//! an AI difficulty label. Difficulty labels are cosmetic: every AI level
//! plays uniformly at random.
//!
//! ## Usage
//! Run with `cargo run --release`, optionally passing `--dimension 5` for a
//! larger board.

use clap::Parser;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use tictactoe::game_controller::{GameController, MoveResult};
use tictactoe::games::tictactoe::{GameStatus, Symbol, TicTacToeState};

/// AI difficulty labels accepted by the `start` command.
///
/// Move selection is uniform-random regardless of level; the label only
/// changes the `Making move level "<label>"` banner.
const AI_LEVELS: [&str; 3] = ["easy", "medium", "hard"];

/// Type of player occupying a seat (human or AI)
#[derive(Debug, Clone, PartialEq, Eq)]
enum PlayerKind {
    /// Human player (moves read from stdin)
    Human,
    /// AI player (uniform-random moves), tagged with its display level
    Bot { level: String },
}

impl PlayerKind {
    /// Parses a `start` command token into a player kind.
    ///
    /// `user` selects a human seat; a known difficulty label selects an AI
    /// seat. Anything else is a bad parameter.
    fn parse(token: &str) -> Option<Self> {
        if token == "user" {
            return Some(PlayerKind::Human);
        }
        if AI_LEVELS.contains(&token) {
            return Some(PlayerKind::Bot {
                level: token.to_string(),
            });
        }
        None
    }
}

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Board dimension N (the board has N x N cells)
    #[clap(short, long, default_value_t = 3)]
    dimension: usize,

    /// Start position for the first game: N*N characters over {_, X, O},
    /// row-major, case-insensitive
    #[clap(short, long)]
    start_position: Option<String>,
}

/// Prints `text` as a prompt and reads one line from stdin.
///
/// Returns `None` on end of input.
fn prompt(stdin: &io::Stdin, text: &str) -> io::Result<Option<String>> {
    print!("{}", text);
    io::stdout().flush()?;
    let mut line = String::new();
    if stdin.lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Plays one game between the two configured seats.
///
/// Alternates seats starting with X. Input errors print their message and
/// re-prompt without advancing the turn; a win or draw prints the final
/// result and returns.
fn run_game(
    stdin: &io::Stdin,
    player_x: &PlayerKind,
    player_o: &PlayerKind,
    dimension: usize,
    start_position: Option<&str>,
) -> io::Result<()> {
    let state = match start_position {
        Some(position) => match TicTacToeState::from_position(dimension, position) {
            Ok(state) => state,
            Err(detected) => {
                // The position already holds a winning line; nothing to play.
                println!("{}", detected.to_string().green().bold());
                return Ok(());
            }
        },
        None => TicTacToeState::new(dimension),
    };
    let mut controller = GameController::new(state);
    print!("{}", controller.state());

    let seats = [(Symbol::X, player_x), (Symbol::O, player_o)];
    'game: loop {
        for (symbol, kind) in &seats {
            let status = match kind {
                PlayerKind::Human => loop {
                    let text = match prompt(stdin, "Enter the coordinates: >")? {
                        Some(text) => text,
                        None => return Ok(()),
                    };
                    match controller.try_human_move(&text, None) {
                        MoveResult::Success { status, .. } => {
                            print!("{}", controller.state());
                            break status;
                        }
                        MoveResult::Invalid { reason } => {
                            println!("{}", reason.to_string().red());
                        }
                        MoveResult::GameOver => break 'game,
                    }
                },
                PlayerKind::Bot { level } => {
                    println!("Making move level \"{}\"", level);
                    match controller.try_random_move(*symbol) {
                        MoveResult::Success { status, .. } => {
                            print!("{}", controller.state());
                            status
                        }
                        _ => break 'game,
                    }
                }
            };
            match status {
                GameStatus::Win(winner) => {
                    println!("{}", format!("{} wins", winner).green().bold());
                    break 'game;
                }
                GameStatus::Draw => {
                    println!("{}", "Draw".yellow());
                    break 'game;
                }
                GameStatus::InProgress => {}
            }
        }
    }
    Ok(())
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    if args.dimension < 3 {
        println!("{}", "Bad parameters!".red());
        return Ok(());
    }

    let stdin = io::stdin();
    // The CLI start position only seeds the first game.
    let mut start_position = args.start_position;

    loop {
        let command = match prompt(&stdin, "Input command: >")? {
            Some(line) => line.to_lowercase(),
            None => break,
        };
        let tokens: Vec<&str> = command.split_whitespace().collect();
        match tokens.as_slice() {
            ["exit"] => break,
            ["start", rest @ ..] => {
                let players = if rest.len() == 2 {
                    PlayerKind::parse(rest[0]).zip(PlayerKind::parse(rest[1]))
                } else {
                    None
                };
                match players {
                    Some((player_x, player_o)) => {
                        run_game(
                            &stdin,
                            &player_x,
                            &player_o,
                            args.dimension,
                            start_position.take().as_deref(),
                        )?;
                    }
                    None => println!("{}", "Bad parameters!".red()),
                }
            }
            [] => {}
            _ => println!("{}", "Bad parameters!".red()),
        }
    }
    Ok(())
}
