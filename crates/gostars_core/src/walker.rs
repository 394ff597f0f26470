use anyhow::{Context, Result};
use log::{debug, trace};
use std::collections::HashSet;

use crate::{oracle::ImportOracle, types::ImportSet};

/// Discovers every distinct non-standard import path reachable from `root`.
///
/// The walk uses an explicit stack with a visited set, so each path is
/// resolved at most once even when many packages import it, and import
/// cycles terminate. Standard-library packages are resolved to learn their
/// classification but are neither reported nor expanded.
///
/// Any resolution failure aborts the walk; there is no partial result.
pub fn discover<O: ImportOracle + ?Sized>(oracle: &O, root: &str) -> Result<ImportSet> {
    debug!("Discovering imports from root: {}", root);
    let root_pkg =
        oracle.resolve(root).with_context(|| format!("resolving root package {}", root))?;

    let mut found = ImportSet::new();
    if root_pkg.standard {
        debug!("Root {} is part of the standard library, nothing to discover", root);
        return Ok(found);
    }

    let mut visited: HashSet<String> = HashSet::new();
    visited.insert(root.to_string());
    visited.insert(root_pkg.import_path.clone());

    // Reverse so that the first listed import is resolved first.
    let mut stack: Vec<String> = root_pkg.imports.into_iter().rev().collect();

    while let Some(path) = stack.pop() {
        if !visited.insert(path.clone()) {
            trace!("Already visited: {}", path);
            continue;
        }

        let pkg =
            oracle.resolve(&path).with_context(|| format!("resolving imports of {}", path))?;
        if pkg.standard {
            trace!("Skipping standard package: {}", path);
            continue;
        }

        trace!("Found dependency {} with {} imports", path, pkg.imports.len());
        for next in pkg.imports.into_iter().rev() {
            if !visited.contains(&next) {
                stack.push(next);
            }
        }
        found.insert(path);
    }

    debug!("Discovered {} dependencies ({} paths resolved)", found.len(), visited.len());
    Ok(found)
}
