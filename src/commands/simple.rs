//! Simple interactive CLI mode
//!
//! Text-based game without TUI

use crate::core::{Code, GameStatus, InputError, Palette};
use crate::game::{GameSession, Statistics};
use crate::output::{print_attempt, print_game_over, print_palette, print_statistics};
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or writing
/// prompts.
pub fn run_simple<R: Rng>(session: &mut GameSession<R>) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                   Mastermind - Simple Mode                   ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    print_rules(session);
    let mut stats = Statistics::default();

    loop {
        let (turn, max_attempts) = {
            let state = session.state();
            (state.history().len() + 1, state.config().max_attempts())
        };

        let Some(line) = read_line(&mut input, &format!("Attempt {turn}/{max_attempts}"))? else {
            break;
        };

        // A full-length guess wins over a command word spelled by palette keys
        let command = if is_guess(session, &line) {
            None
        } else {
            Some(line.to_lowercase())
        };

        match command.as_deref() {
            Some("") => {}
            Some("quit" | "q" | "exit") => break,
            Some("new" | "n") => {
                session.restart()?;
                println!("\n🔄 New game started!\n");
            }
            Some("show" | "s") => {
                let palette = session.config().palette();
                println!(
                    "🔍 Secret: {}\n",
                    palette.format_code(session.reveal_secret()).bright_yellow()
                );
            }
            Some("help" | "h" | "?") => print_rules(session),
            _ => {
                if !play_turn(session, &line) {
                    continue;
                }

                stats.record(session.state());
                print_game_over(session.state());

                match read_line(&mut input, "Play again? (yes/no)")?
                    .unwrap_or_default()
                    .to_lowercase()
                    .as_str()
                {
                    "yes" | "y" => {
                        session.restart()?;
                        println!("\n🔄 New game started!\n");
                    }
                    _ => break,
                }
            }
        }
    }

    print_statistics(&stats);
    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

/// Parse a guess, retrying in lowercase so `RGBY` matches lowercase keys
fn parse_guess(palette: &Palette, line: &str) -> Result<Code, InputError> {
    palette.parse_code(line).or_else(|e| {
        let lower = line.to_lowercase();
        if lower == line {
            Err(e)
        } else {
            palette.parse_code(&lower)
        }
    })
}

fn is_guess<R: Rng>(session: &GameSession<R>, line: &str) -> bool {
    let config = session.config();
    parse_guess(config.palette(), line).is_ok_and(|code| code.len() == config.length())
}

/// Parse and submit one guess; returns whether the game just ended
fn play_turn<R: Rng>(session: &mut GameSession<R>, line: &str) -> bool {
    let guess = match parse_guess(session.config().palette(), line) {
        Ok(guess) => guess,
        Err(e) => {
            println!("❌ {e}\n");
            return false;
        }
    };

    match session.submit_guess(&guess) {
        Ok(attempt) => {
            let state = session.state();
            let config = state.config();
            print_attempt(
                config.palette(),
                state.history().len(),
                &attempt,
                config.length(),
            );
            println!();
            state.status() != GameStatus::InProgress
        }
        Err(e) => {
            println!("❌ {e}\n");
            false
        }
    }
}

fn print_rules<R: Rng>(session: &GameSession<R>) {
    let config = session.config();

    println!(
        "Crack a code of {} colors in {} attempts.",
        config.length(),
        config.max_attempts()
    );
    if config.guarantees_unique_secret() {
        println!("The secret has no repeated colors.");
    } else {
        println!("The secret may repeat colors.");
    }
    print_palette(config.palette());
    println!("\nFeedback: ● right color & position, ○ right color elsewhere");
    println!("Enter guesses as keys, e.g. 'rgby' or 'r g b y'.");
    println!("Commands: 'quit' to exit, 'new' for new game, 'show' to reveal the code\n");
}

/// Prompt and read a trimmed line; `None` at end of input
fn read_line(input: &mut impl BufRead, prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}
