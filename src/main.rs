//! Listing Matcher CLI
//!
//! Matches listing titles against a local candidate file and prints the
//! assessment as JSON.

use clap::{Parser, Subcommand};
use listing_matcher::{
    assess_listing, assess_listings, catalog_identity, read_candidates, read_titles, MatchError,
    MatcherConfig, Result, VariantTaxonomy,
};
use serde::Serialize;
use std::path::PathBuf;

/// Match marketplace card listings to the right catalog variant
#[derive(Parser, Debug)]
#[command(name = "listing_matcher")]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// JSON file overriding scoring weights and confidence thresholds
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// JSON file replacing the built-in variant taxonomy
    #[arg(long, global = true)]
    taxonomy: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Screen, match and price a single title
    Match {
        /// Listing title
        #[arg(long)]
        title: String,

        /// Candidate file (CSV, or JSON with a .json extension)
        #[arg(long)]
        candidates: PathBuf,
    },

    /// Assess every title in a file, one per line
    Batch {
        /// Title file, one title per line
        #[arg(long)]
        titles: PathBuf,

        /// Candidate file (CSV, or JSON with a .json extension)
        #[arg(long)]
        candidates: PathBuf,
    },

    /// Show the parsed identity and search query of a catalog name
    Query {
        /// Catalog display name, e.g. "Charizard [1st Edition] #4"
        #[arg(long)]
        name: String,

        /// Set name
        #[arg(long, default_value = "")]
        set: String,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    if let Err(e) = run(args) {
        log::error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => MatcherConfig::from_file(path)?,
        None => MatcherConfig::default(),
    };
    let taxonomy = match &args.taxonomy {
        Some(path) => VariantTaxonomy::from_file(path)?,
        None => VariantTaxonomy::standard(),
    };

    match args.command {
        Command::Match { title, candidates } => {
            let candidates = read_candidates(&candidates)?;
            let assessment = assess_listing(&taxonomy, &config, &title, &candidates);
            print_json(&assessment)
        }
        Command::Batch { titles, candidates } => {
            let titles = read_titles(&titles)?;
            let candidates = read_candidates(&candidates)?;
            let assessments = assess_listings(&taxonomy, &config, &titles, &candidates);
            print_json(&assessments)
        }
        Command::Query { name, set } => match catalog_identity(&taxonomy, &name, &set) {
            Some(identity) => print_json(&identity),
            None => Err(MatchError::InvalidInput(format!(
                "catalog name '{}' is empty",
                name
            ))),
        },
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
