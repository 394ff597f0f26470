use std::{
    io::{self, Write},
    time::Duration,
};

use anyhow::Result;
use colored::Colorize;
use log::debug;

use crate::types::{CheckResult, StarResult, Threshold};

/// Writes one `stars<TAB>path` line per result.
pub fn print_text<W: Write>(writer: &mut W, results: &[StarResult]) -> io::Result<()> {
    debug!("Printing {} results as text", results.len());
    for r in results {
        writeln!(writer, "{}\t{}", r.stars, r.path)?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes the results as a single JSON array followed by a newline.
pub fn print_json<W: Write>(writer: &mut W, results: &[StarResult]) -> Result<()> {
    debug!("Printing {} results as json", results.len());
    serde_json::to_writer(&mut *writer, results)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Human-oriented run summary. Meant for stderr so stdout stays machine-readable.
pub fn print_summary<W: Write>(
    writer: &mut W,
    result: &CheckResult,
    threshold: Threshold,
    elapsed: Duration,
) -> io::Result<()> {
    match threshold {
        Threshold::Below(limit) if !result.results.is_empty() => {
            writeln!(
                writer,
                "{} {} {} with fewer than {} stars",
                "⚠".yellow().bold(),
                result.results.len().to_string().yellow().bold(),
                plural(result.results.len(), "dependency", "dependencies"),
                limit.to_string().yellow()
            )?;
        }
        Threshold::Below(limit) => {
            writeln!(
                writer,
                "{} No dependencies with fewer than {} stars",
                "✓".green().bold(),
                limit
            )?;
        }
        Threshold::Disabled => {}
    }

    writeln!(
        writer,
        "{} Checked {} of {} {} in {}ms.",
        "●".bright_blue(),
        result.forge_dependencies.to_string().cyan(),
        result.dependencies_found.to_string().cyan(),
        plural(result.dependencies_found, "dependency", "dependencies"),
        elapsed.as_millis().to_string().cyan()
    )?;
    writer.flush()?;
    Ok(())
}

fn plural<'a>(n: usize, one: &'a str, many: &'a str) -> &'a str {
    if n == 1 { one } else { many }
}
