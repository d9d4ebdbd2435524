//! Mastermind - CLI
//!
//! Code-breaking game with TUI and CLI modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use mastermind::{
    commands::{run_simple, score_codes},
    core::Palette,
    game::{GameConfiguration, GameSession, generate_code},
    output::formatters::{colorize_code, colorize_feedback},
    palettes::{self, loader::load_from_file},
};
use rand::{SeedableRng, rngs::StdRng};

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Mastermind code-breaking game with exact/partial peg feedback",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of pegs in the secret code
    #[arg(
        short,
        long,
        global = true,
        default_value_t = 4,
        value_parser = clap::value_parser!(u8).range(2..=10)
    )]
    length: u8,

    /// Number of guesses allowed per game
    #[arg(
        short,
        long,
        global = true,
        default_value_t = 10,
        value_parser = clap::value_parser!(u8).range(1..=20)
    )]
    attempts: u8,

    /// Allow the secret to repeat colors
    #[arg(short, long, global = true)]
    duplicates: bool,

    /// Palette: 'classic' (default, 6 colors), 'extended' (8 colors), or path to file
    #[arg(short, long, global = true, default_value = "classic")]
    palette: String,

    /// Seed for a reproducible sequence of secrets
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Score a guess against a secret
    Score {
        /// The secret code, e.g. 'rrbg' or 'r,r,b,g'
        secret: String,

        /// The guess to score
        guess: String,
    },

    /// Print freshly generated secret codes
    Generate {
        /// Number of codes to generate
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,
    },

    /// List the colors of the selected palette
    Colors,
}

/// Load a palette based on the -p flag
fn load_palette(palette_mode: &str) -> Result<Palette> {
    match palette_mode {
        "classic" => Ok(palettes::classic()),
        "extended" => Ok(palettes::extended()),
        path => {
            let colors = load_from_file(path)
                .with_context(|| format!("Failed to read palette file '{path}'"))?;
            Palette::new(colors).with_context(|| format!("Invalid palette in '{path}'"))
        }
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    let palette = load_palette(&cli.palette)?;

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);

    match command {
        Commands::Score { secret, guess } => run_score_command(&palette, &secret, &guess),
        Commands::Colors => {
            mastermind::output::print_palette(&palette);
            Ok(())
        }
        Commands::Generate { count } => run_generate_command(&palette, &cli, count),
        Commands::Simple => run_simple(&mut start_session(&cli, palette)?),
        Commands::Play => run_play_command(start_session(&cli, palette)?),
    }
}

fn start_session(cli: &Cli, palette: Palette) -> Result<GameSession<StdRng>> {
    let config = GameConfiguration::new(
        usize::from(cli.length),
        usize::from(cli.attempts),
        cli.duplicates,
        palette,
    )?;
    Ok(GameSession::new(config, make_rng(cli.seed))?)
}

fn run_score_command(palette: &Palette, secret: &str, guess: &str) -> Result<()> {
    let result = score_codes(palette, secret, guess)?;

    println!("Secret:   {}", result.secret);
    println!("Guess:    {}", result.guess);
    println!(
        "Feedback: {}  {}",
        colorize_feedback(result.feedback, result.length),
        result.feedback.to_string().bright_yellow()
    );
    if result.feedback.is_solved(result.length) {
        println!("{}", "✅ Exact match!".green().bold());
    }
    Ok(())
}

fn run_generate_command(palette: &Palette, cli: &Cli, count: usize) -> Result<()> {
    let length = usize::from(cli.length);
    if !cli.duplicates && length > palette.len() {
        eprintln!(
            "{}",
            format!(
                "Note: {length} pegs exceed {} colors, secrets may repeat colors",
                palette.len()
            )
            .yellow()
        );
    }

    let mut rng = make_rng(cli.seed);
    for _ in 0..count {
        let code = generate_code(palette, length, cli.duplicates, &mut rng)?;
        println!("{}", colorize_code(palette, &code));
    }
    Ok(())
}

fn run_play_command(session: GameSession<StdRng>) -> Result<()> {
    use mastermind::interactive::{App, run_tui};

    let app = App::new(session);
    run_tui(app)
}
