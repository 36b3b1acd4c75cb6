#![warn(clippy::pedantic)]

mod config;

use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser, Subcommand};
use color_eyre::eyre::WrapErr;
use config::CliConfig;
use cube3::{Color, Cube, MoveSequence, Scrambler, render::render_with, success};
use env_logger::TimestampPrecision;
use log::{LevelFilter, info};
use owo_colors::OwoColorize;

const DEFAULT_CONFIG: &str = "cube3.toml";

/// Turn, scramble and print a 3x3x3 cube
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The configuration file to use, in TOML format. Defaults to
    /// `cube3.toml` in the working directory if it exists.
    #[arg(long, short = 'c', value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (can be repeated)
    #[arg(short, long, action = ArgAction::Count)]
    log_level: u8,

    /// Print color letters without terminal colors
    #[arg(long)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply a move sequence to a solved cube and print it.
    Show {
        /// The move sequence to apply, e.g. "R U' F2".
        #[arg(default_value = "")]
        sequence: String,
    },
    /// Generate a random scramble and print the scrambled cube.
    Scramble {
        /// Number of moves, overriding the configuration file
        #[arg(long, short = 'n')]
        length: Option<usize>,
        /// Seed for a reproducible scramble
        #[arg(long, short)]
        seed: Option<u64>,
    },
    /// Print the inverse of a move sequence.
    Invert {
        /// The move sequence to invert, e.g. "R U' F2".
        sequence: String,
    },
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.log_level {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .format_timestamp(Some(TimestampPrecision::Millis))
        .init();

    let config = match &cli.config {
        Some(path) => CliConfig::load(path, true)?,
        None => CliConfig::load(Path::new(DEFAULT_CONFIG), false)?,
    };
    let colored = config.color && !cli.no_color;

    match cli.command {
        Commands::Show { sequence } => {
            let moves = parse_moves(&sequence)?;
            let mut cube = Cube::default();
            cube.apply_sequence(&moves);
            print_cube(&cube, colored);
        }
        Commands::Scramble { length, seed } => {
            let mut scrambler = seed.map_or_else(Scrambler::new, Scrambler::with_seed);
            let moves = scrambler.scramble(length.unwrap_or(config.scramble_length));
            let mut cube = Cube::default();
            cube.apply_sequence(&moves);
            println!("{moves}");
            print_cube(&cube, colored);
            info!(success!("Scrambled with {} moves"), moves.len());
        }
        Commands::Invert { sequence } => {
            let moves = parse_moves(&sequence)?;
            println!("{}", moves.invert());
        }
    }

    Ok(())
}

fn parse_moves(sequence: &str) -> color_eyre::Result<MoveSequence> {
    sequence
        .parse()
        .wrap_err_with(|| format!("Invalid move sequence {sequence:?}"))
}

fn print_cube(cube: &Cube, colored: bool) {
    let net = if colored {
        render_with(cube, paint)
    } else {
        render_with(cube, |color| color.to_string())
    };
    println!("{net}");
    println!();
}

fn paint(color: Color) -> String {
    let letter = color.to_string();
    let (r, g, b) = match color {
        Color::W => (255, 255, 255),
        Color::G => (0, 155, 72),
        Color::R => (183, 18, 52),
        Color::B => (0, 70, 173),
        Color::O => (255, 88, 0),
        Color::Y => (255, 213, 0),
    };
    letter.black().on_truecolor(r, g, b).to_string()
}
