use anyhow::{Context, Result};
use log::{debug, info};

use gostars_core::{ImportOracle, discover, filter_and_order, is_host_path};

use crate::{
    config::Config,
    constants::GITHUB_HOST,
    enrich::enrich,
    github::StarSource,
    types::CheckResult,
};

pub fn run_star_check<O, S>(cfg: &Config, oracle: &O, source: &S) -> Result<CheckResult>
where
    O: ImportOracle + ?Sized,
    S: StarSource + ?Sized,
{
    info!("Starting star check for {}", cfg.package);

    let imports = discover(oracle, &cfg.package).context("finding imports")?;
    info!("Found {} dependencies", imports.len());

    let paths = filter_and_order(&imports, |p| is_host_path(p, GITHUB_HOST));
    debug!("{} dependencies are hosted on {}", paths.len(), GITHUB_HOST);

    let results =
        enrich(&paths, source, cfg.threshold(), cfg.delay).context("getting github stars")?;

    info!("Star check complete. {} results", results.len());
    Ok(CheckResult {
        results,
        dependencies_found: imports.len(),
        forge_dependencies: paths.len(),
    })
}
