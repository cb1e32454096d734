//! Catalog tree: games (leaves) nested in named groups (composites)

use crate::errors::{CatalogError, CatalogResult};

/// A node in the catalog tree.
///
/// Tagged union over the two record kinds. Children are owned by value inside
/// the parent group, so the structure is acyclic by construction and dropping
/// a node drops its entire subtree. There are no parent back-pointers.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Revenue-generating leaf.
    Game { name: String, revenue: f64 },
    /// Named composite holding an ordered sequence of child nodes.
    Group { name: String, children: Vec<Node> },
}

impl Node {
    pub fn game(name: impl Into<String>, revenue: f64) -> Self {
        Node::Game {
            name: name.into(),
            revenue,
        }
    }

    pub fn group(name: impl Into<String>) -> Self {
        Node::Group {
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Node::Game { name, .. } | Node::Group { name, .. } => name,
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, Node::Group { .. })
    }

    /// Aggregate revenue of the subtree.
    ///
    /// Games return their stored value, groups the recursive sum over all
    /// children. Recomputed on demand, never cached. An empty group is 0.0.
    pub fn revenue(&self) -> f64 {
        match self {
            Node::Game { revenue, .. } => *revenue,
            // Fold from positive zero: the empty `Sum<f64>` identity is -0.0,
            // which would display as "-0".
            Node::Group { children, .. } => children
                .iter()
                .map(Node::revenue)
                .fold(0.0, |acc, r| acc + r),
        }
    }

    /// Append a child to a group, taking ownership. Insertion order is preserved.
    ///
    /// Calling this on a game is a caller bug and returns `NotAGroup` without
    /// mutating anything.
    pub fn add(&mut self, child: Node) -> CatalogResult<()> {
        match self {
            Node::Group { children, .. } => {
                children.push(child);
                Ok(())
            }
            Node::Game { name, .. } => Err(CatalogError::NotAGroup(name.clone())),
        }
    }

    /// Add to a game's stored revenue. No bounds check, totals may go negative.
    pub fn add_revenue(&mut self, amount: f64) -> CatalogResult<()> {
        match self {
            Node::Game { revenue, .. } => {
                *revenue += amount;
                Ok(())
            }
            Node::Group { name, .. } => Err(CatalogError::NotAGame(name.clone())),
        }
    }

    /// Direct children of a group. A game has none.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Group { children, .. } => children,
            Node::Game { .. } => &[],
        }
    }

    /// Every game in the subtree, depth-first left-to-right.
    ///
    /// On a game node this is the node itself, which makes the group case a
    /// plain flat-map over the children.
    pub fn games(&self) -> Vec<&Node> {
        match self {
            Node::Game { .. } => vec![self],
            Node::Group { children, .. } => children.iter().flat_map(Node::games).collect(),
        }
    }

    /// Mutable twin of [`games`](Node::games), used for index-based selection.
    pub fn games_mut(&mut self) -> Vec<&mut Node> {
        match self {
            Node::Game { .. } => vec![self],
            Node::Group { children, .. } => {
                children.iter_mut().flat_map(Node::games_mut).collect()
            }
        }
    }

    /// Format the subtree for display, one line per node.
    ///
    /// Game lines show `name | Revenue: <v>`, group lines a header, the
    /// indented children, and a trailing total computed via [`revenue`](Node::revenue).
    /// Pure formatting; printing is the CLI's job.
    pub fn render(&self) -> Vec<String> {
        let mut out = Vec::new();
        self.render_into(0, &mut out);
        out
    }

    fn render_into(&self, indent: usize, out: &mut Vec<String>) {
        let pad = "  ".repeat(indent);
        match self {
            Node::Game { name, revenue } => {
                out.push(format!("{pad}{name} | Revenue: {revenue}"));
            }
            Node::Group { name, children } => {
                out.push(format!("{pad}----- {name} -----"));
                for child in children {
                    child.render_into(indent + 1, out);
                }
                out.push(format!("{pad}Total: {}", self.revenue()));
            }
        }
    }
}
