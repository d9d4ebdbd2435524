//! Display functions for game results

use super::formatters::{colorize_code, colorize_feedback, create_progress_bar, parse_hex};
use crate::core::{GameStatus, Palette};
use crate::game::{Attempt, GameState, Statistics};
use colored::Colorize;

/// Print a palette legend
pub fn print_palette(palette: &Palette) {
    println!("Colors:");
    for color in palette.colors() {
        let swatch = match parse_hex(color.hex()) {
            Some((r, g, b)) => "●".truecolor(r, g, b).to_string(),
            None => "●".to_string(),
        };
        println!("  {swatch} {}  {}", color.key().bold(), color.label());
    }
}

/// Print one scored attempt
pub fn print_attempt(palette: &Palette, turn: usize, attempt: &Attempt, length: usize) {
    let feedback = attempt.feedback();
    println!(
        "{:>3}. {}   {}  ({} exact, {} partial)",
        turn.to_string().bright_black(),
        colorize_code(palette, attempt.guess()),
        colorize_feedback(feedback, length),
        feedback.exact,
        feedback.partial
    );
}

/// Print the end-of-game banner
pub fn print_game_over(state: &GameState) {
    let config = state.config();
    let palette = config.palette();
    let used = state.history().len();

    println!("\n{}", "═".repeat(60).bright_cyan());
    match state.status() {
        GameStatus::Won => println!(
            "{}",
            format!(
                "  🎉 Code cracked in {used} {}!",
                if used == 1 { "attempt" } else { "attempts" }
            )
            .bright_green()
            .bold()
        ),
        GameStatus::Lost => println!(
            "{}",
            format!("  ❌ Out of attempts ({used}/{})", config.max_attempts())
                .red()
                .bold()
        ),
        GameStatus::InProgress => println!("  Game in progress"),
    }
    println!(
        "  Secret: {}",
        colorize_code(palette, state.reveal_secret())
    );
    println!(
        "  Attempts: [{}] {used}/{}",
        create_progress_bar(used, config.max_attempts(), 20),
        config.max_attempts()
    );
    println!("{}", "═".repeat(60).bright_cyan());
}

/// Print session statistics
pub fn print_statistics(stats: &Statistics) {
    println!("\n📊 {}", "Statistics:".bright_cyan().bold());
    println!("   Games played:  {}", stats.total_games);
    println!(
        "   Win rate:      {}",
        format!("{:.0}%", stats.win_rate()).bright_yellow().bold()
    );

    if stats.games_won == 0 {
        return;
    }

    println!("\n📈 {}", "Attempts to win:".bright_cyan().bold());
    for (&attempts, &count) in &stats.guess_distribution {
        let bar = create_progress_bar(count, stats.games_won, 30);
        println!("   {attempts:>2}: {} {count}", bar.green());
    }
}
