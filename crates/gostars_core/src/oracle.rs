use log::{debug, trace};
use serde::Deserialize;
use std::{
    collections::HashMap,
    io,
    path::{Path, PathBuf},
    process::Command,
};

use crate::{error::ResolveError, types::Package};

/// The cgo pseudo-package. It has no source on disk and `go list` cannot resolve it.
const CGO_PSEUDO_PACKAGE: &str = "C";

/// Maps an import path to its direct imports and standard-library classification.
pub trait ImportOracle {
    fn resolve(&self, path: &str) -> Result<Package, ResolveError>;
}

/// Resolves packages by running `go list -e -json` from a base directory.
#[derive(Debug, Clone)]
pub struct GoListOracle {
    go: PathBuf,
    dir: PathBuf,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ListedPackage {
    import_path: String,
    #[serde(default)]
    imports: Vec<String>,
    #[serde(default)]
    standard: bool,
    #[serde(default)]
    goroot: bool,
    error: Option<ListedError>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ListedError {
    err: String,
}

impl GoListOracle {
    pub fn new(go: impl Into<PathBuf>, dir: impl Into<PathBuf>) -> Self {
        Self { go: go.into(), dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ImportOracle for GoListOracle {
    fn resolve(&self, path: &str) -> Result<Package, ResolveError> {
        if path == CGO_PSEUDO_PACKAGE {
            trace!("Treating cgo pseudo-package as standard");
            return Ok(Package::standard(path, &[]));
        }

        trace!("Running {} list for '{}' in {}", self.go.display(), path, self.dir.display());
        let output = Command::new(&self.go)
            .args(["list", "-e", "-json", "--", path])
            .current_dir(&self.dir)
            .output()
            .map_err(|e| {
                if e.kind() == io::ErrorKind::NotFound {
                    ResolveError::ToolchainMissing(self.go.display().to_string())
                } else {
                    ResolveError::Io(e)
                }
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            debug!("go list failed for '{}' with {}", path, output.status);
            return Err(ResolveError::Unresolved {
                path: path.to_string(),
                message: stderr.trim().to_string(),
            });
        }

        parse_listed_package(path, &output.stdout)
    }
}

fn parse_listed_package(path: &str, stdout: &[u8]) -> Result<Package, ResolveError> {
    let listed: ListedPackage = serde_json::from_slice(stdout)?;
    if let Some(err) = listed.error {
        return Err(ResolveError::Unresolved { path: path.to_string(), message: err.err });
    }

    trace!(
        "Resolved '{}' as {} ({} imports, standard={})",
        path,
        listed.import_path,
        listed.imports.len(),
        listed.standard || listed.goroot
    );
    Ok(Package {
        import_path: listed.import_path,
        imports: listed.imports,
        standard: listed.standard || listed.goroot,
    })
}

/// Resolves packages from a fixed in-memory table, keyed by import path.
#[derive(Debug, Clone, Default)]
pub struct MemoryOracle {
    packages: HashMap<String, Package>,
}

impl MemoryOracle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `package` under `path`. The root is usually registered as `.`.
    pub fn insert(&mut self, path: impl Into<String>, package: Package) -> &mut Self {
        self.packages.insert(path.into(), package);
        self
    }
}

impl FromIterator<Package> for MemoryOracle {
    fn from_iter<I: IntoIterator<Item = Package>>(iter: I) -> Self {
        let packages = iter.into_iter().map(|p| (p.import_path.clone(), p)).collect();
        Self { packages }
    }
}

impl ImportOracle for MemoryOracle {
    fn resolve(&self, path: &str) -> Result<Package, ResolveError> {
        self.packages.get(path).cloned().ok_or_else(|| ResolveError::Unresolved {
            path: path.to_string(),
            message: "no such package".to_string(),
        })
    }
}
