//! Command dispatch: thin wrappers over the catalog facade

use std::fs;
use std::io;
use std::path::Path;

use clap::CommandFactory;
use clap_complete::generate;
use termtree::Tree;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::codec::ParsePolicy;
use crate::config::Settings;
use crate::domain::Node;
use crate::errors::CatalogError;
use crate::{
    add_game_to_group, add_revenue_to_game, list_all_games, list_direct_groups, load_catalog,
    render_catalog, sample_catalog, save_catalog,
};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load()?;
    let path = cli
        .file
        .clone()
        .unwrap_or_else(|| settings.catalog_file.clone());
    let policy = if cli.strict {
        ParsePolicy::Strict
    } else {
        settings.parse_policy()
    };
    debug!(?path, ?policy, "resolved catalog source");

    match &cli.command {
        Some(Commands::Show) => _show(&path, policy),
        Some(Commands::Tree) => _tree(&path, policy),
        Some(Commands::Total) => _total(&path, policy),
        Some(Commands::Groups) => _groups(&path, policy),
        Some(Commands::Games) => _games(&path, policy),
        Some(Commands::AddGame {
            group,
            name,
            revenue,
        }) => _add_game(&path, policy, *group, name, *revenue),
        Some(Commands::AddRevenue { game, amount }) => {
            _add_revenue(&path, policy, *game, *amount)
        }
        Some(Commands::Init { force }) => _init(&path, *force),
        Some(Commands::Config { command }) => _config(command, &settings),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            generate(*shell, &mut cmd, "revtree", &mut io::stdout());
            Ok(())
        }
        None => Ok(()),
    }
}

#[instrument]
fn _show(path: &Path, policy: ParsePolicy) -> CliResult<()> {
    let root = load_catalog(path, policy)?;
    for line in render_catalog(&root) {
        output::info(&line);
    }
    Ok(())
}

#[instrument]
fn _tree(path: &Path, policy: ParsePolicy) -> CliResult<()> {
    let root = load_catalog(path, policy)?;
    output::info(&to_termtree(&root));
    Ok(())
}

fn to_termtree(node: &Node) -> Tree<String> {
    match node {
        Node::Game { name, revenue } => Tree::new(format!("{name} ({revenue})")),
        Node::Group { name, children } => {
            Tree::new(name.clone()).with_leaves(children.iter().map(to_termtree))
        }
    }
}

#[instrument]
fn _total(path: &Path, policy: ParsePolicy) -> CliResult<()> {
    let root = load_catalog(path, policy)?;
    output::info(&root.revenue());
    Ok(())
}

#[instrument]
fn _groups(path: &Path, policy: ParsePolicy) -> CliResult<()> {
    let root = load_catalog(path, policy)?;
    output::header("Groups");
    for (index, name) in list_direct_groups(&root) {
        output::detail(&format!("{index}. {name}"));
    }
    Ok(())
}

#[instrument]
fn _games(path: &Path, policy: ParsePolicy) -> CliResult<()> {
    let root = load_catalog(path, policy)?;
    output::header("Games");
    for (index, name, revenue) in list_all_games(&root) {
        output::detail(&format!("{index}. {name} (Revenue: {revenue})"));
    }
    Ok(())
}

#[instrument]
fn _add_game(
    path: &Path,
    policy: ParsePolicy,
    group: usize,
    name: &str,
    revenue: f64,
) -> CliResult<()> {
    let mut root = load_catalog(path, policy)?;
    add_game_to_group(&mut root, group, name, revenue)?;
    save_catalog(&root, path)?;
    output::action("Added", &format!("{name} (Revenue: {revenue})"));
    Ok(())
}

#[instrument]
fn _add_revenue(path: &Path, policy: ParsePolicy, game: usize, amount: f64) -> CliResult<()> {
    let mut root = load_catalog(path, policy)?;
    add_revenue_to_game(&mut root, game, amount)?;
    save_catalog(&root, path)?;
    output::action("Revenue added", &amount);
    Ok(())
}

#[instrument]
fn _init(path: &Path, force: bool) -> CliResult<()> {
    if path.exists() && !force {
        return Err(CliError::InvalidArgs(format!(
            "{} already exists, use --force to overwrite",
            path.display()
        )));
    }
    let root = sample_catalog();
    save_catalog(&root, path)?;
    output::action("Initialized", &path.display());
    Ok(())
}

fn _config(command: &ConfigCommands, settings: &Settings) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            output::info(&settings.to_toml()?);
            Ok(())
        }
        ConfigCommands::Init => {
            let Some(path) = Settings::global_config_path() else {
                return Err(CliError::InvalidArgs(
                    "cannot determine config directory".to_string(),
                ));
            };
            if path.exists() {
                return Err(CliError::InvalidArgs(format!(
                    "config already exists: {}",
                    path.display()
                )));
            }
            if let Some(dir) = path.parent() {
                fs::create_dir_all(dir).map_err(CatalogError::Io)?;
            }
            fs::write(&path, Settings::default().to_toml()?).map_err(CatalogError::Io)?;
            output::action("Created", &path.display());
            Ok(())
        }
        ConfigCommands::Path => {
            match Settings::global_config_path() {
                Some(path) => output::info(&path.display()),
                None => output::info("<unavailable>"),
            }
            Ok(())
        }
    }
}
