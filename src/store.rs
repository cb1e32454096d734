//! File-level persistence for catalog trees

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::{debug, instrument};

use crate::codec::{serialize, ParsePolicy, Parser};
use crate::domain::Node;
use crate::errors::{CatalogError, CatalogResult};

/// Load a catalog tree from `path`.
///
/// An unopenable source is `NotFound` and leaves any in-memory tree with the
/// caller untouched. Record-level anomalies are handled per `policy`.
#[instrument(level = "debug")]
pub fn load(path: &Path, policy: ParsePolicy) -> CatalogResult<Node> {
    let text = fs::read_to_string(path).map_err(|_| CatalogError::NotFound(path.to_path_buf()))?;
    debug!(lines = text.lines().count(), "read catalog");
    Parser::new(&text, policy).parse()
}

/// Save a catalog tree to `path`, replacing the destination.
///
/// Writes to a temp file in the destination directory and persists it over
/// the target, so a failed save never leaves a half-written catalog behind.
#[instrument(level = "debug", skip(root))]
pub fn save(root: &Node, path: &Path) -> CatalogResult<()> {
    let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
    let mut tmp = match dir {
        Some(dir) => NamedTempFile::new_in(dir),
        None => NamedTempFile::new_in("."),
    }
    .map_err(|e| write_failure(path, e))?;

    for line in serialize(root) {
        writeln!(tmp, "{line}").map_err(|e| write_failure(path, e))?;
    }
    tmp.persist(path)
        .map_err(|e| write_failure(path, e.error))?;
    debug!("catalog saved");
    Ok(())
}

fn write_failure(path: &Path, e: std::io::Error) -> CatalogError {
    CatalogError::WriteFailure {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
}
