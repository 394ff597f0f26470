use std::time::Duration;

/// Forge whose dependencies are enriched.
pub const GITHUB_HOST: &str = "github.com";

pub const GITHUB_API_URL: &str = "https://api.github.com";

/// Pause between consecutive lookups; keeps unauthenticated runs under GitHub's rate limit.
pub const RATE_LIMIT_DELAY: Duration = Duration::from_secs(1);

/// Threshold flag value meaning "report everything".
pub const THRESHOLD_DISABLED: i64 = -1;

pub const USER_AGENT: &str = concat!("gostars/", env!("CARGO_PKG_VERSION"));
