#![warn(clippy::pedantic)]

mod settings;

use clap::{ArgAction, Parser, Subcommand};
use color_eyre::eyre::{WrapErr, eyre};
use cube3::{
    Configuration, IterativeDeepening, LayerByLayer, Move, MoveSequence, Solver,
    generate_scramble_with, validate,
};
use itertools::Itertools;
use log::{LevelFilter, info};
use serde::{Deserialize, Serialize};
use settings::{Settings, StrategyKind};
use std::{fs, path::PathBuf};

/// Scrambles, checks and solves 3x3x3 cubes
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// A settings file in TOML format
    #[arg(long, short = 'c', value_name = "SETTINGS")]
    settings: Option<PathBuf>,

    /// Log more. Can be given up to three times.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a random scramble
    Scramble {
        /// How many moves; defaults to the settings file or 20
        #[arg(short, long)]
        length: Option<usize>,
        /// Seed for a reproducible scramble
        #[arg(long)]
        seed: Option<u64>,
        /// Also draw the scrambled cube
        #[arg(long)]
        show: bool,
    },
    /// Apply moves to the solved cube and print the stickers
    Apply {
        /// Moves such as "R U R' U'"
        moves: String,
    },
    /// Check whether a sticker configuration can be reached from solved
    Validate {
        /// 54 color letters (W Y O R G B), faces in U D L R F B order
        stickers: String,
    },
    /// Solve a sticker configuration
    Solve {
        /// 54 color letters (W Y O R G B), faces in U D L R F B order
        #[arg(required_unless_present = "scramble")]
        stickers: Option<String>,
        /// Solve the cube produced by these moves instead
        #[arg(long, short, conflicts_with = "stickers")]
        scramble: Option<String>,
        /// Overrides the strategy from the settings file
        #[arg(long, value_enum)]
        strategy: Option<StrategyKind>,
        /// Write the configuration and solution to this TOML file
        #[arg(long, value_name = "FILE")]
        record: Option<PathBuf>,
    },
}

/// A solved cube as stored for later replay.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Record {
    configuration: Configuration,
    solution: Vec<Move>,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .format_timestamp(None)
        .init();

    let settings = Settings::load(cli.settings.as_deref())?;

    match cli.command {
        Commands::Scramble { length, seed, show } => {
            let mut rng = seed.map_or_else(fastrand::Rng::new, fastrand::Rng::with_seed);
            let scramble =
                generate_scramble_with(&mut rng, length.unwrap_or(settings.scramble_length));
            println!("{}", MoveSequence(scramble.clone()));
            if show {
                let mut configuration = Configuration::solved();
                configuration.apply_all(&scramble);
                print!("{}", configuration.net());
            }
        }
        Commands::Apply { moves } => {
            let configuration = scrambled(&moves)?;
            println!("{configuration}");
            print!("{}", configuration.net());
        }
        Commands::Validate { stickers } => {
            let configuration: Configuration = stickers.parse()?;
            validate(&configuration)?;
            println!("Legal");
        }
        Commands::Solve {
            stickers,
            scramble,
            strategy,
            record,
        } => {
            let configuration: Configuration = match (stickers, scramble) {
                (Some(stickers), _) => stickers.parse()?,
                (None, Some(moves)) => scrambled(&moves)?,
                (None, None) => return Err(eyre!("Give either stickers or --scramble")),
            };
            info!("Solving\n{}", configuration.net());

            let solution = match strategy.unwrap_or(settings.strategy) {
                StrategyKind::LayerByLayer => Solver::new(LayerByLayer).solve(&configuration)?,
                StrategyKind::Search => {
                    Solver::new(IterativeDeepening::new(settings.search_depth))
                        .solve(&configuration)?
                }
            };
            println!("{}", solution.iter().join(" "));
            println!("({} moves)", solution.len());

            if let Some(path) = record {
                let text = toml::to_string(&Record {
                    configuration,
                    solution,
                })?;
                fs::write(&path, text)
                    .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
            }
        }
    }

    Ok(())
}

fn scrambled(moves: &str) -> color_eyre::Result<Configuration> {
    let moves: MoveSequence = moves.parse()?;
    let mut configuration = Configuration::solved();
    configuration.apply_all(&moves);
    Ok(configuration)
}
