//! Indented-text codec for catalog trees
//!
//! One line per node, two spaces of indentation per nesting level:
//!
//! ```text
//! GROUP <name>
//!   GROUP <name>
//!     GAME <name> <revenue>
//!   GAME <name> <revenue>
//! ```
//!
//! Writer and reader are exact inverses for well-formed input. Names may
//! contain spaces but not newlines; there is no escaping for names that start
//! with the reserved `GROUP `/`GAME ` prefixes (known format limitation).

pub mod reader;
pub mod writer;

pub use reader::{ParsePolicy, Parser};
pub use writer::serialize;

pub(crate) const GROUP_PREFIX: &str = "GROUP ";
pub(crate) const GAME_PREFIX: &str = "GAME ";

/// Indentation depth of a line: the number of complete leading two-space
/// pairs. An odd trailing space does not count. The reader and writer must
/// agree on this for round-trips to hold.
pub(crate) fn indent_depth(line: &str) -> usize {
    let bytes = line.as_bytes();
    let mut i = 0;
    while i + 1 < bytes.len() && bytes[i] == b' ' && bytes[i + 1] == b' ' {
        i += 2;
    }
    i / 2
}

/// The line with its paired indentation removed.
pub(crate) fn strip_indent(line: &str) -> &str {
    &line[2 * indent_depth(line)..]
}
