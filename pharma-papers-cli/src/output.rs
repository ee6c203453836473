//! Rendering of retrieved papers as CSV or console text

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use pharma_papers::OutputRecord;

pub const NO_DATA_MESSAGE: &str = "No data to write.";
pub const NO_RESULTS_MESSAGE: &str = "No results found.";

const SEPARATOR_WIDTH: usize = 80;

/// Write `papers` to a CSV file with a header row
///
/// Returns `false` without touching the filesystem when there is nothing to
/// write.
pub fn write_csv(path: &Path, papers: &[OutputRecord]) -> Result<bool> {
    if papers.is_empty() {
        return Ok(false);
    }

    let mut wtr = csv::WriterBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;

    for paper in papers {
        wtr.serialize(paper)?;
    }
    wtr.flush()?;

    tracing::info!(path = %path.display(), rows = papers.len(), "Results saved to file");
    Ok(true)
}

/// Print every paper as labelled lines followed by a separator
pub fn print_results<W: Write>(out: &mut W, papers: &[OutputRecord]) -> Result<()> {
    if papers.is_empty() {
        writeln!(out, "{NO_RESULTS_MESSAGE}")?;
        return Ok(());
    }

    let separator = "-".repeat(SEPARATOR_WIDTH);
    for paper in papers {
        let fields = [
            &paper.pmid,
            &paper.title,
            &paper.publication_date,
            &paper.non_academic_authors,
            &paper.company_affiliations,
            &paper.corresponding_email,
        ];
        for (label, value) in OutputRecord::FIELD_NAMES.iter().zip(fields) {
            writeln!(out, "{label}: {value}")?;
        }
        writeln!(out, "{separator}")?;
    }

    Ok(())
}
