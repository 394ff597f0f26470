use anyhow::{Result, anyhow};
use clap::Parser;
use log::{debug, info};
use path_clean::clean;
use std::{env, path::PathBuf, time::Duration};

use crate::{
    constants::{GITHUB_API_URL, RATE_LIMIT_DELAY, THRESHOLD_DISABLED},
    types::Threshold,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "gostars")]
#[command(version)]
#[command(about = "Report the GitHub stars of every dependency of a Go package")]
pub struct Config {
    /// Package to analyze
    #[arg(default_value = ".")]
    pub package: String,

    /// Report any projects with fewer stars than threshold, exits with status 1 if any exist
    #[arg(
        long,
        default_value_t = THRESHOLD_DISABLED,
        allow_negative_numbers = true,
        value_parser = clap::value_parser!(i64).range(THRESHOLD_DISABLED..)
    )]
    pub threshold: i64,

    /// Output as json
    #[arg(long)]
    pub json: bool,

    /// Directory packages are resolved from (defaults to the current directory)
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// Go toolchain binary used to resolve imports
    #[arg(long, env = "GOSTARS_GO", default_value = "go")]
    pub go: PathBuf,

    /// GitHub token, lifts the unauthenticated rate limit
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// GitHub API base URL
    #[arg(long, default_value = GITHUB_API_URL)]
    pub api_url: String,

    #[clap(skip = RATE_LIMIT_DELAY)]
    pub delay: Duration,
}

impl Config {
    /// Resolve the base directory to an absolute, normalized path
    pub fn initialize(&mut self) -> Result<()> {
        let dir = match self.dir.take() {
            Some(d) => {
                debug!("Using provided directory: {:?}", d);
                let d = if d.is_absolute() { d } else { env::current_dir()?.join(d) };
                clean(d)
            }
            None => {
                debug!("No directory provided, using current directory");
                env::current_dir()?
            }
        };
        info!("Resolving packages from: {}", dir.display());

        self.dir = Some(dir);
        Ok(())
    }

    /// Get the base directory, returning an error if not initialized
    pub fn dir(&self) -> Result<&PathBuf> {
        self.dir.as_ref().ok_or_else(|| anyhow!("Config not initialized - call initialize() first"))
    }

    pub fn threshold(&self) -> Threshold {
        Threshold::from_flag(self.threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_defaults() {
        let cfg = Config::try_parse_from(["gostars"]).unwrap();
        assert_eq!(cfg.package, ".");
        assert_eq!(cfg.threshold, -1);
        assert_eq!(cfg.threshold(), Threshold::Disabled);
        assert!(!cfg.json);
        assert_eq!(cfg.api_url, "https://api.github.com");
        assert_eq!(cfg.delay, Duration::from_secs(1));
        assert!(cfg.dir.is_none());
    }

    #[test]
    fn test_package_and_flags() {
        let cfg = Config::try_parse_from([
            "gostars",
            "--threshold",
            "100",
            "--json",
            "github.com/me/tool/cmd/tool",
        ])
        .unwrap();
        assert_eq!(cfg.package, "github.com/me/tool/cmd/tool");
        assert_eq!(cfg.threshold(), Threshold::Below(100));
        assert!(cfg.json);
    }

    #[test]
    fn test_explicit_disabled_threshold() {
        let cfg = Config::try_parse_from(["gostars", "--threshold", "-1"]).unwrap();
        assert_eq!(cfg.threshold(), Threshold::Disabled);
    }

    #[test]
    fn test_threshold_below_sentinel_rejected() {
        assert!(Config::try_parse_from(["gostars", "--threshold", "-2"]).is_err());
        assert!(Config::try_parse_from(["gostars", "--threshold", "many"]).is_err());
    }

    #[test]
    fn test_single_package_only() {
        assert!(Config::try_parse_from(["gostars", "./a", "./b"]).is_err());
    }

    #[test]
    fn test_initialize_cleans_dir() {
        let mut cfg =
            Config::try_parse_from(["gostars", "--dir", "/tmp/project/./cmd/../pkg"]).unwrap();
        cfg.initialize().unwrap();
        assert_eq!(cfg.dir().unwrap(), Path::new("/tmp/project/pkg"));
    }

    #[test]
    fn test_initialize_relative_dir() {
        let mut cfg = Config::try_parse_from(["gostars", "--dir", "sub/dir"]).unwrap();
        cfg.initialize().unwrap();
        let dir = cfg.dir().unwrap();
        assert!(dir.is_absolute());
        assert!(dir.ends_with("sub/dir"));
    }

    #[test]
    fn test_dir_requires_initialize() {
        let cfg = Config::try_parse_from(["gostars"]).unwrap();
        assert!(cfg.dir().is_err());
    }
}
