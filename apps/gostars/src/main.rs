use anyhow::{Context, Result};
use clap::{Parser, error::ErrorKind};
use colored::Colorize;
use gostars_core::GoListOracle;
use gostars_stars::{Config, GitHubClient};
use log::{debug, info};
use std::{
    ffi::OsString,
    io::{self, BufWriter, Write},
    process::ExitCode,
    time::Instant,
};

/// Exit status for unrecoverable errors, distinct from the threshold's status 1.
const EXIT_FATAL: u8 = 2;

fn main() -> ExitCode {
    env_logger::init();

    // stdio is blocked by LineWriter, use a BufWriter to reduce syscalls.
    // See https://github.com/rust-lang/rust/issues/60673
    let mut stdout = BufWriter::new(io::stdout());

    match run(&mut stdout, std::env::args_os()) {
        Ok(code) => code,
        Err(e) => {
            let _ = stdout.flush();
            eprintln!("{} {:#}", "error:".red().bold(), e);
            ExitCode::from(EXIT_FATAL)
        }
    }
}

fn run<W, I, T>(stdout: &mut W, args: I) -> Result<ExitCode>
where
    W: Write,
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let mut cfg = match Config::try_parse_from(args) {
        Ok(cfg) => cfg,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            write!(stdout, "{}", e.render())?;
            stdout.flush()?;
            return Ok(ExitCode::SUCCESS);
        }
        Err(e) => e.exit(),
    };
    debug!(
        "Parsed CLI arguments: package={}, threshold={}, json={}",
        cfg.package, cfg.threshold, cfg.json
    );

    cfg.initialize()?;
    let start = Instant::now();

    let oracle = GoListOracle::new(&cfg.go, cfg.dir()?);
    let client = GitHubClient::new(&cfg.api_url, cfg.token.clone());
    info!(
        "Running star check on {} from {} (authenticated: {})",
        cfg.package,
        oracle.dir().display(),
        cfg.token.is_some()
    );

    let result = gostars_stars::run_star_check(&cfg, &oracle, &client)?;
    debug!("Found {} results", result.results.len());

    if cfg.json {
        gostars_stars::print_json(stdout, &result.results).context("outputting json")?;
    } else {
        gostars_stars::print_text(stdout, &result.results).context("printing to stdout")?;
    }

    let threshold = cfg.threshold();
    gostars_stars::print_summary(&mut io::stderr(), &result, threshold, start.elapsed())?;

    if threshold.is_active() && !result.results.is_empty() {
        // Non-zero exit to fail CI
        return Ok(ExitCode::from(1));
    }
    Ok(ExitCode::SUCCESS)
}
