use std::collections::HashSet;

/// Distinct, non-standard import paths reachable from a root package.
pub type ImportSet = HashSet<String>;

/// A package as reported by an import oracle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    pub import_path: String,
    /// Direct imports, in the order the oracle listed them.
    pub imports: Vec<String>,
    /// Part of the Go standard distribution (GOROOT). Never expanded or reported.
    pub standard: bool,
}

impl Package {
    pub fn new(import_path: impl Into<String>, imports: &[&str]) -> Self {
        Self {
            import_path: import_path.into(),
            imports: imports.iter().map(|s| s.to_string()).collect(),
            standard: false,
        }
    }

    pub fn standard(import_path: impl Into<String>, imports: &[&str]) -> Self {
        Self { standard: true, ..Self::new(import_path, imports) }
    }
}
