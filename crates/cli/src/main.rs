mod cmd;
mod logging;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use vaultfind_core::config::ConfigLoader;

#[derive(Debug, Parser)]
#[command(name = "vfind", version, about = "Search and create notes in a markdown vault")]
struct Cli {
    /// Path to the config file (defaults to the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate configuration and print resolved settings
    Doctor,

    /// Rebuild the index once and print stats
    Index(OutputArgs),

    /// Search the vault with a fresh scan (whole-query substring match)
    Search(SearchArgs),

    /// Search a just-built index (whitespace tokens, AND semantics)
    Quick(SearchArgs),

    /// Watch the vault and answer indexed queries read from stdin
    Watch,

    /// Open a note via the external opener
    Open(NameArgs),

    /// Print the obsidian:// URI for a note (or a new-note name)
    Uri(UriArgs),

    /// Get or set configuration values
    Config(ConfigArgs),
}

#[derive(Debug, Args)]
pub struct OutputArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Query string
    pub query: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Print paths only
    #[arg(long, conflicts_with = "json")]
    pub quiet: bool,
}

#[derive(Debug, Args)]
pub struct NameArgs {
    /// Note file name, e.g. "meeting.md"
    pub name: String,
}

#[derive(Debug, Args)]
pub struct UriArgs {
    /// Note file name (or new-note name with --new)
    pub name: String,

    /// Build a new-note URI instead of an open URI
    #[arg(long)]
    pub new: bool,
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the current settings
    Get,
    /// Set one setting and persist it
    Set {
        /// One of: vault_root, open_override, filter_by_tags, filter_by_body
        key: String,
        value: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let settings = match ConfigLoader::load(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            std::process::exit(1);
        }
    };

    logging::init(&settings);

    match cli.command {
        Commands::Doctor => cmd::doctor::run(cli.config.as_deref(), &settings),
        Commands::Index(args) => cmd::index::run(&settings, &args),
        Commands::Search(args) => cmd::search::run(&settings, &args),
        Commands::Quick(args) => cmd::quick::run(&settings, &args),
        Commands::Watch => cmd::watch::run(&settings, cli.config.clone()),
        Commands::Open(args) => cmd::open::run(&settings, &args),
        Commands::Uri(args) => cmd::uri::run(&settings, &args),
        Commands::Config(args) => {
            cmd::config::run(cli.config.as_deref(), &settings, &args);
        }
    }
}
