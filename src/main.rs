//! deckview - Entry Point

use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// deckview - TUI card-carousel viewer
#[derive(Parser, Debug)]
#[command(name = "deckview")]
#[command(version)]
#[command(about = "TUI carousel for browsing a deck of cards")]
pub struct Args {
    /// Path to deck file, one JSON card per line (reads stdin if piped;
    /// shows the demo deck otherwise)
    pub deck: Option<PathBuf>,

    /// Auto-advance interval in milliseconds
    #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
    pub interval_ms: Option<u64>,

    /// Start with auto-advance disabled
    #[arg(long)]
    pub no_autoplay: bool,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let colors = deckview::view::ColorConfig::from_env_and_args(args.no_color);

    // Resolve configuration: Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = deckview::config::load_config_with_precedence(args.config.clone())?;
        let merged = deckview::config::merge_config(config_file);
        let with_env = deckview::config::apply_env_overrides(merged);
        deckview::config::apply_cli_overrides(with_env, args.interval_ms, args.no_autoplay)
    };

    deckview::logging::init(&config.log_file_path)?;
    info!(config = ?config, "Configuration loaded and resolved");

    let source = deckview::source::detect_deck_source(args.deck.clone());
    let deck = deckview::source::load_deck(&source)?;
    info!(cards = deck.len(), source = ?source, "Deck loaded");

    deckview::view::run_with_deck(deck, config.carousel(), colors)?;

    Ok(())
}
