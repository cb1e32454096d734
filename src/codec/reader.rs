//! Recursive-descent parser: indented lines to catalog tree

use tracing::debug;

use crate::codec::{indent_depth, strip_indent, GAME_PREFIX, GROUP_PREFIX};
use crate::domain::Node;
use crate::errors::{CatalogError, CatalogResult};

/// Recovery behavior for malformed records.
///
/// The on-disk format has no error reporting of its own, so existing catalogs
/// may contain stray lines. `Lenient` (the default) drops unrecognized
/// records, over-indented orphan lines, and game records with a missing or
/// unparseable revenue, and keeps going. `Strict` turns each of those into a
/// `ParseFailure` with the offending line number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParsePolicy {
    #[default]
    Lenient,
    Strict,
}

/// Parser over a pre-split line sequence with an explicit cursor.
///
/// Each `parse_node` call either consumes at least one line or hits
/// end-of-input, so recursion depth is bounded by tree depth.
pub struct Parser<'a> {
    lines: Vec<&'a str>,
    cursor: usize,
    policy: ParsePolicy,
}

impl<'a> Parser<'a> {
    pub fn new(text: &'a str, policy: ParsePolicy) -> Self {
        Self {
            lines: text.lines().collect(),
            cursor: 0,
            policy,
        }
    }

    /// Parse the full input into a single tree.
    ///
    /// Trailing records after the first complete subtree are not consumed.
    pub fn parse(mut self) -> CatalogResult<Node> {
        match self.parse_node()? {
            Some(node) => Ok(node),
            // The cursor sits just past whatever was skipped, which is the
            // 1-based position of the line that failed to yield a record
            // (or 1 for empty input).
            None => Err(CatalogError::ParseFailure {
                line: self.cursor.max(1),
                reason: "no tree produced".to_string(),
            }),
        }
    }

    fn parse_node(&mut self) -> CatalogResult<Option<Node>> {
        self.skip_blank_lines();
        let Some(&line) = self.lines.get(self.cursor) else {
            return Ok(None);
        };

        let depth = indent_depth(line);
        let body = strip_indent(line);

        if let Some(name) = body.strip_prefix(GROUP_PREFIX) {
            self.cursor += 1;
            self.parse_group(name, depth).map(Some)
        } else if let Some(record) = body.strip_prefix(GAME_PREFIX) {
            self.parse_game(record)
        } else {
            debug!(line = self.cursor + 1, "unrecognized record");
            if self.policy == ParsePolicy::Strict {
                return Err(self.failure("unrecognized record"));
            }
            self.cursor += 1;
            Ok(None)
        }
    }

    /// Consume the children of a group whose header line (at `depth`) is
    /// already consumed.
    ///
    /// Lines at depth <= the group's own depth belong to an ancestor or
    /// sibling and are left for the caller. Lines exactly one level deeper
    /// are children; anything deeper is an orphan with no parent claiming it.
    fn parse_group(&mut self, name: &str, depth: usize) -> CatalogResult<Node> {
        let mut group = Node::group(name);
        while let Some(&line) = self.lines.get(self.cursor) {
            if line.trim().is_empty() {
                self.cursor += 1;
                continue;
            }
            let next_depth = indent_depth(line);
            if next_depth <= depth {
                break;
            }
            if next_depth == depth + 1 {
                if let Some(child) = self.parse_node()? {
                    group.add(child)?;
                }
            } else {
                debug!(line = self.cursor + 1, "orphan over-indented line");
                if self.policy == ParsePolicy::Strict {
                    return Err(self.failure("over-indented line with no parent"));
                }
                self.cursor += 1;
            }
        }
        Ok(group)
    }

    /// Parse a game record body (prefix already stripped): all tokens but the
    /// last form the name, the last must be the revenue.
    fn parse_game(&mut self, record: &str) -> CatalogResult<Option<Node>> {
        let tokens: Vec<&str> = record.split_whitespace().collect();
        let Some((revenue_token, name_tokens)) = tokens.split_last() else {
            return self.drop_game_record("game record is empty");
        };
        if name_tokens.is_empty() {
            return self.drop_game_record("game record needs a name and a revenue");
        }
        match revenue_token.parse::<f64>() {
            Ok(revenue) => {
                self.cursor += 1;
                Ok(Some(Node::game(name_tokens.join(" "), revenue)))
            }
            Err(_) => self.drop_game_record("revenue is not a number"),
        }
    }

    fn drop_game_record(&mut self, reason: &str) -> CatalogResult<Option<Node>> {
        debug!(line = self.cursor + 1, reason, "dropping game record");
        if self.policy == ParsePolicy::Strict {
            return Err(self.failure(reason));
        }
        self.cursor += 1;
        Ok(None)
    }

    fn skip_blank_lines(&mut self) {
        while self
            .lines
            .get(self.cursor)
            .is_some_and(|line| line.trim().is_empty())
        {
            self.cursor += 1;
        }
    }

    fn failure(&self, reason: impl Into<String>) -> CatalogError {
        CatalogError::ParseFailure {
            line: self.cursor + 1,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_game_record() {
        let node = Parser::new("GAME Blackjack 100.5", ParsePolicy::Lenient)
            .parse()
            .unwrap();
        assert_eq!(node, Node::game("Blackjack", 100.5));
    }

    #[test]
    fn test_multiword_name_keeps_last_token_as_revenue() {
        let node = Parser::new("GAME Lucky 7 Slot 10", ParsePolicy::Lenient)
            .parse()
            .unwrap();
        assert_eq!(node, Node::game("Lucky 7 Slot", 10.0));
    }

    #[test]
    fn test_empty_input_is_no_tree() {
        let result = Parser::new("", ParsePolicy::Lenient).parse();
        match result {
            Err(CatalogError::ParseFailure { line, .. }) => assert_eq!(line, 1),
            other => panic!("expected ParseFailure, got {other:?}"),
        }
    }

    #[test]
    fn test_no_tree_failure_points_at_offending_line() {
        let result = Parser::new("JUNK record", ParsePolicy::Lenient).parse();
        match result {
            Err(CatalogError::ParseFailure { line, .. }) => assert_eq!(line, 1),
            other => panic!("expected ParseFailure, got {other:?}"),
        }
    }

    #[test]
    fn test_lenient_drops_bad_revenue_strict_rejects_it() {
        let input = "GROUP Casino\n  GAME Blackjack abc\n  GAME Roulette 5";

        let lenient = Parser::new(input, ParsePolicy::Lenient).parse().unwrap();
        assert_eq!(lenient.children().len(), 1);
        assert_eq!(lenient.children()[0].name(), "Roulette");

        let strict = Parser::new(input, ParsePolicy::Strict).parse();
        match strict {
            Err(CatalogError::ParseFailure { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected ParseFailure, got {other:?}"),
        }
    }
}
