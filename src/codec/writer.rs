//! Serializer: catalog tree to indented lines

use crate::codec::{GAME_PREFIX, GROUP_PREFIX};
use crate::domain::Node;

/// Serialize a tree depth-first pre-order, root at depth 0.
///
/// Revenue is emitted with `f64`'s default `Display` (shortest form that
/// round-trips; `100.0` becomes `100`), so parsing the output reproduces the
/// stored value exactly.
pub fn serialize(root: &Node) -> Vec<String> {
    let mut lines = Vec::new();
    write_node(root, 0, &mut lines);
    lines
}

fn write_node(node: &Node, depth: usize, lines: &mut Vec<String>) {
    let pad = "  ".repeat(depth);
    match node {
        Node::Game { name, revenue } => {
            lines.push(format!("{pad}{GAME_PREFIX}{name} {revenue}"));
        }
        Node::Group { name, children } => {
            lines.push(format!("{pad}{GROUP_PREFIX}{name}"));
            for child in children {
                write_node(child, depth + 1, lines);
            }
        }
    }
}
