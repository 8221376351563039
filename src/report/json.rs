use crate::analysis::ScanReport;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use std::path::PathBuf;

/// JSON reporter for programmatic output
pub struct JsonReporter {
    output_path: Option<PathBuf>,
}

impl JsonReporter {
    pub fn new(output_path: Option<PathBuf>) -> Self {
        Self { output_path }
    }

    pub fn report(&self, report: &ScanReport) -> Result<()> {
        let rendered = JsonReport::from_scan(report);
        let json = serde_json::to_string_pretty(&rendered).into_diagnostic()?;

        if let Some(path) = &self.output_path {
            std::fs::write(path, &json).into_diagnostic()?;
            println!("Report written to: {}", path.display());
        } else {
            println!("{}", json);
        }

        Ok(())
    }
}

#[derive(Serialize)]
struct JsonReport {
    version: &'static str,
    total_unused: usize,
    files: Vec<JsonFileEntry>,
    clean_files: Vec<String>,
}

#[derive(Serialize)]
struct JsonFileEntry {
    file: String,
    unused: Vec<String>,
}

impl JsonReport {
    /// File entries mirror the terminal ordering: ascending by path,
    /// identifiers ascending within each file.
    fn from_scan(report: &ScanReport) -> Self {
        let files: Vec<JsonFileEntry> = report
            .unused
            .iter()
            .map(|(file, identifiers)| JsonFileEntry {
                file: file.display().to_string(),
                unused: identifiers.clone(),
            })
            .collect();

        Self {
            version: env!("CARGO_PKG_VERSION"),
            total_unused: report.total_unused(),
            files,
            clean_files: report
                .clean
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
        }
    }
}
