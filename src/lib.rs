//! revtree: hierarchical revenue catalog with indented-text persistence
//!
//! Games (leaves) nest inside named groups to arbitrary depth; aggregate
//! revenue is computed over any subtree on demand. The catalog persists to a
//! line-oriented text format with two-space indentation per level and
//! round-trips losslessly for well-formed input.

pub mod cli;
pub mod codec;
pub mod config;
pub mod domain;
pub mod errors;
pub mod exitcode;
pub mod store;
pub mod util;

use std::path::Path;

use crate::codec::ParsePolicy;
use crate::domain::Node;
use crate::errors::{CatalogError, CatalogResult};

/// Load a catalog and require its root to be a group.
pub fn load_catalog(path: &Path, policy: ParsePolicy) -> CatalogResult<Node> {
    let root = store::load(path, policy)?;
    if !root.is_group() {
        return Err(CatalogError::ParseFailure {
            line: 1,
            reason: "root record is not a group".to_string(),
        });
    }
    Ok(root)
}

/// Save a catalog, replacing the destination file.
pub fn save_catalog(root: &Node, path: &Path) -> CatalogResult<()> {
    store::save(root, path)
}

/// Direct group children of the root, with 1-based selection indices.
pub fn list_direct_groups(root: &Node) -> Vec<(usize, &str)> {
    root.children()
        .iter()
        .filter(|child| child.is_group())
        .enumerate()
        .map(|(i, group)| (i + 1, group.name()))
        .collect()
}

/// Every game in the catalog, depth-first, with 1-based selection indices.
pub fn list_all_games(root: &Node) -> Vec<(usize, &str, f64)> {
    root.games()
        .iter()
        .enumerate()
        .map(|(i, game)| (i + 1, game.name(), game.revenue()))
        .collect()
}

/// Append a new game to the root's n-th direct group (1-based, counting
/// groups only, matching [`list_direct_groups`]).
pub fn add_game_to_group(
    root: &mut Node,
    group_index: usize,
    name: &str,
    revenue: f64,
) -> CatalogResult<()> {
    let Node::Group { children, .. } = root else {
        return Err(CatalogError::NotAGroup(root.name().to_string()));
    };
    let position = group_index
        .checked_sub(1)
        .ok_or(CatalogError::GroupIndexOutOfRange(group_index))?;
    let group = children
        .iter_mut()
        .filter(|child| child.is_group())
        .nth(position)
        .ok_or(CatalogError::GroupIndexOutOfRange(group_index))?;
    group.add(Node::game(name, revenue))
}

/// Add revenue to the n-th game (1-based, matching [`list_all_games`]).
pub fn add_revenue_to_game(root: &mut Node, game_index: usize, amount: f64) -> CatalogResult<()> {
    let position = game_index
        .checked_sub(1)
        .ok_or(CatalogError::GameIndexOutOfRange(game_index))?;
    let mut games = root.games_mut();
    let game = games
        .get_mut(position)
        .ok_or(CatalogError::GameIndexOutOfRange(game_index))?;
    game.add_revenue(amount)
}

/// Display lines for the whole catalog.
pub fn render_catalog(root: &Node) -> Vec<String> {
    root.render()
}

/// Starter catalog used by `revtree init` and the test suite.
pub fn sample_catalog() -> Node {
    Node::Group {
        name: "Casino Games".to_string(),
        children: vec![
            Node::Group {
                name: "Table Games".to_string(),
                children: vec![Node::game("Blackjack", 0.0), Node::game("Roulette", 0.0)],
            },
            Node::Group {
                name: "Slot Games".to_string(),
                children: vec![Node::game("Mega Joker", 0.0)],
            },
        ],
    }
}
