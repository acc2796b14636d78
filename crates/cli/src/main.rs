//! Command-line front end for the bomb rule engine.

mod report;

use anyhow::Context;
use bomb_core::{
    check_cards, deal_seeded, parse_cards, prompt_all, validate_from_hand, validate_play, Card,
    Registry,
};
use bomb_data::{load_registry, load_rules_file};
use clap::{Parser, Subcommand};
use report::Report;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const DEFAULT_DEAL_SEED: u64 = 0xB0B;

#[derive(Debug, Parser)]
#[command(name = "bomb")]
#[command(about = "Classify, check and hint plays for the bomb shedding game")]
struct Cli {
    /// Rules file; takes precedence over --assets
    #[arg(long, global = true)]
    rules: Option<PathBuf>,

    /// Assets directory searched for rules.json
    #[arg(long, global = true, default_value = "assets")]
    assets: PathBuf,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the hand type a set of cards forms
    Classify {
        #[arg(required = true)]
        cards: Vec<String>,
    },
    /// Decide whether a play is legal on the table
    Check {
        #[arg(long, num_args = 1.., required = true)]
        play: Vec<String>,
        /// Cards currently on the table; omit for a leading play
        #[arg(long, num_args = 1..)]
        table: Vec<String>,
        /// The player's hand; when given, the play must come out of it
        #[arg(long, num_args = 1..)]
        hand: Vec<String>,
    },
    /// Suggest the weakest legal response from a hand
    Prompt {
        #[arg(long, num_args = 1.., required = true)]
        hand: Vec<String>,
        #[arg(long, num_args = 1..)]
        table: Vec<String>,
        /// List every legal response instead of the first
        #[arg(long)]
        all: bool,
    },
    /// Shuffle a 54-card deck and deal it
    Deal {
        #[arg(long, default_value_t = DEFAULT_DEAL_SEED)]
        seed: u64,
        #[arg(long, default_value_t = 4)]
        players: usize,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let registry = build_registry(&cli)?;
    let report = run(&registry, cli.command)?;
    let code = if report.is_rejection() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    };
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.render());
    }
    Ok(code)
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_registry(cli: &Cli) -> anyhow::Result<Registry> {
    match &cli.rules {
        Some(path) => Ok(Registry::new(load_rules_file(path)?)),
        None => load_registry(&cli.assets)
            .with_context(|| format!("load rules from {}", cli.assets.display())),
    }
}

fn run(registry: &Registry, command: Command) -> anyhow::Result<Report> {
    match command {
        Command::Classify { cards } => {
            let cards = read_cards(&cards)?;
            check_cards(&cards)?;
            let hand_type = registry.resolve(&cards)?;
            debug!(?hand_type, "classified");
            Ok(Report::Classify { cards, hand_type })
        }
        Command::Check { play, table, hand } => {
            let play = read_cards(&play)?;
            let table = read_cards(&table)?;
            let reference = (!table.is_empty()).then_some(table.as_slice());
            let verdict = if hand.is_empty() {
                validate_play(registry, &play, reference)
            } else {
                let hand = read_cards(&hand)?;
                validate_from_hand(registry, &hand, &play, reference)
            };
            debug!(?verdict, "checked play");
            match verdict {
                Ok(group) => Ok(Report::Accepted { play: group }),
                Err(err) if err.is_player_facing() => Ok(Report::Rejected {
                    cards: play,
                    reason: err.to_string(),
                }),
                Err(err) => Err(err.into()),
            }
        }
        Command::Prompt { hand, table, all } => {
            let hand = read_cards(&hand)?;
            let table = read_cards(&table)?;
            let reference = (!table.is_empty()).then_some(table.as_slice());
            let mut suggestions = prompt_all(registry, &hand, reference)?;
            debug!(count = suggestions.len(), "prompt responses");
            if !all {
                suggestions.truncate(1);
            }
            Ok(Report::Prompt { suggestions })
        }
        Command::Deal { seed, players } => {
            let deal = deal_seeded(seed, players)?;
            debug!(seed, players, kitty = deal.kitty.len(), "dealt");
            Ok(Report::Deal { seed, deal })
        }
    }
}

/// Joins shell words back into one card list, so both `7S 7H` and `"7S,7H"`
/// are accepted.
fn read_cards(words: &[String]) -> anyhow::Result<Vec<Card>> {
    let text = words.join(" ");
    parse_cards(&text).with_context(|| format!("parse cards {text:?}"))
}
