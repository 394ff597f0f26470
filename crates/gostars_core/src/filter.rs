use log::debug;

use crate::types::ImportSet;

/// Returns true when the first path segment is exactly `host`.
pub fn is_host_path(path: &str, host: &str) -> bool {
    path.split('/').next() == Some(host)
}

/// Keeps the paths matching `filter` and sorts them so output is reproducible.
pub fn filter_and_order<F>(imports: &ImportSet, filter: F) -> Vec<String>
where
    F: Fn(&str) -> bool,
{
    let mut paths: Vec<String> = imports.iter().filter(|p| filter(p.as_str())).cloned().collect();
    paths.sort();
    debug!("Kept {} of {} import paths", paths.len(), imports.len());
    paths
}
