//! Output formatting for finder results.
//!
//! Provides functions to format a [`FindReport`] into plain path lines, a
//! human-readable text summary, or JSON.

use crate::FinderError;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Lines,
    Text,
    Json,
}

impl OutputFormat {
    /// Returns the conventional file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Lines => "txt",
            OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
        }
    }
}

/// Summary of one completed traversal, suitable for serialization.
#[derive(Debug, Serialize)]
pub struct FindReport {
    /// The root the traversal started from.
    pub root: PathBuf,
    /// Number of matching files.
    pub count: usize,
    /// Matching paths in traversal order.
    pub paths: Vec<PathBuf>,
}

impl FindReport {
    pub fn new(root: impl Into<PathBuf>, paths: Vec<PathBuf>) -> Self {
        Self {
            root: root.into(),
            count: paths.len(),
            paths,
        }
    }
}

/// Formats the report into a string.
pub fn format_report(report: &FindReport, format: OutputFormat, pretty: bool) -> String {
    match format {
        OutputFormat::Lines => format_lines(report),
        OutputFormat::Text => format_text(report),
        OutputFormat::Json => format_json(report, pretty),
    }
}

/// Writes the formatted report to a file.
pub fn write_result_to_file(
    report: &FindReport,
    format: OutputFormat,
    path: impl AsRef<Path>,
    pretty: bool,
) -> Result<(), FinderError> {
    let content = format_report(report, format, pretty);
    fs::write(&path, content).map_err(|e| FinderError::Io {
        path: path.as_ref().to_path_buf(),
        source: e,
    })?;
    Ok(())
}

// ----------------------- Internal formatting -----------------------

fn format_lines(report: &FindReport) -> String {
    let mut out = String::with_capacity(1024);
    for path in &report.paths {
        out.push_str(&path.display().to_string());
        out.push('\n');
    }
    out
}

fn format_text(report: &FindReport) -> String {
    let mut out = String::with_capacity(1024);
    out.push_str(&format!(
        "{} file(s) under {}\n",
        report.count,
        report.root.display()
    ));
    for path in &report.paths {
        out.push_str(&format!("  {}\n", path.display()));
    }
    out
}

fn format_json(report: &FindReport, pretty: bool) -> String {
    if pretty {
        serde_json::to_string_pretty(report).expect("JSON serialization failed")
    } else {
        serde_json::to_string(report).expect("JSON serialization failed")
    }
}
