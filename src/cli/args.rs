//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

/// Hierarchical revenue catalog: nested game groups with indented-text persistence
#[derive(Parser, Debug)]
#[command(name = "revtree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Raise log verbosity (-d: info, -dd: debug, -ddd: trace)
    #[arg(short = 'd', long = "debug", action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    /// Catalog file (default: from config, then "casino.txt")
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub file: Option<PathBuf>,

    /// Reject malformed records instead of silently dropping them
    #[arg(long, global = true)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Display the catalog with per-group totals
    Show,

    /// Show the catalog structure as a tree
    Tree,

    /// Print the aggregate revenue of the whole catalog
    Total,

    /// List the top-level groups with selection indices
    Groups,

    /// List all games with selection indices
    Games,

    /// Add a game to a top-level group, then save
    AddGame {
        /// Group index (1-based, as shown by `groups`)
        group: usize,
        /// Game name (may contain spaces)
        name: String,
        /// Initial revenue
        revenue: f64,
    },

    /// Add revenue to a game, then save
    AddRevenue {
        /// Game index (1-based, as shown by `games`)
        game: usize,
        /// Amount to add (may be negative)
        amount: f64,
    },

    /// Write a starter catalog to the catalog file
    Init {
        /// Overwrite an existing catalog
        #[arg(short = 'F', long)]
        force: bool,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Create config template
    Init,

    /// Show config path
    Path,
}
