//! GitHub star reporting for Go dependencies.
//!
//! This crate walks a Go package's dependency closure (via `gostars_core`),
//! keeps the GitHub-hosted dependencies and looks up each repository's star
//! count, optionally keeping only repositories below a threshold.
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```no_run
//! use clap::Parser;
//! use gostars_core::GoListOracle;
//! use gostars_stars::{Config, GitHubClient, run_star_check};
//! use std::io::{BufWriter, Write};
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut cfg = Config::parse_from(["gostars", "--threshold", "100", "./cmd/server"]);
//! cfg.initialize()?;
//!
//! let oracle = GoListOracle::new(&cfg.go, cfg.dir()?);
//! let client = GitHubClient::new(&cfg.api_url, cfg.token.clone());
//! let result = run_star_check(&cfg, &oracle, &client)?;
//!
//! // Use buffered output for better performance
//! let mut stdout = BufWriter::new(std::io::stdout());
//! gostars_stars::print_text(&mut stdout, &result.results)?;
//! stdout.flush()?;
//! # Ok(())
//! # }
//! ```

mod checker;
mod config;
mod constants;
mod enrich;
mod error;
mod github;
mod reporter;
mod types;

// Re-export public API
pub use checker::run_star_check;
pub use config::Config;
pub use constants::{GITHUB_API_URL, GITHUB_HOST, RATE_LIMIT_DELAY};
pub use enrich::enrich;
pub use error::{LookupError, MalformedPathError};
pub use github::{GitHubClient, RepoCoordinates, StarSource};
pub use reporter::{print_json, print_summary, print_text};
pub use types::{CheckResult, StarResult, Threshold};
