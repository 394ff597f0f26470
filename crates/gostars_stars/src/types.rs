use serde::Serialize;

/// A GitHub-hosted dependency and its star count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StarResult {
    pub path: String,
    pub stars: u64,
}

#[derive(Debug, Clone)]
pub struct CheckResult {
    pub results: Vec<StarResult>,
    /// Distinct non-standard dependencies discovered.
    pub dependencies_found: usize,
    /// Dependencies hosted on GitHub, i.e. the number of lookups attempted.
    pub forge_dependencies: usize,
}

/// Which results survive the star filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Threshold {
    Disabled,
    /// Keep repositories with strictly fewer stars.
    Below(u64),
}

impl Threshold {
    /// Interprets the `--threshold` flag; any negative value disables filtering.
    pub fn from_flag(value: i64) -> Self {
        u64::try_from(value).map_or(Threshold::Disabled, Threshold::Below)
    }

    pub fn keeps(self, stars: u64) -> bool {
        match self {
            Threshold::Disabled => true,
            Threshold::Below(limit) => stars < limit,
        }
    }

    pub fn is_active(self) -> bool {
        matches!(self, Threshold::Below(_))
    }
}
