use crate::analysis::ScanReport;
use colored::Colorize;
use miette::Result;

/// Terminal reporter with colored output
pub struct TerminalReporter;

impl TerminalReporter {
    pub fn new() -> Self {
        Self
    }

    /// Print the per-file unused listings, sorted by file path and then
    /// by identifier, one identifier per line, a blank line between
    /// files. An empty map prints the all-clear notice instead.
    pub fn report(&self, report: &ScanReport) -> Result<()> {
        if report.unused.is_empty() {
            println!(
                "{}",
                "No unused resource strings were detected.".green().bold()
            );
            return Ok(());
        }

        println!(
            "{}",
            "Unused resource strings were detected:".yellow().bold()
        );
        println!();

        for (file, identifiers) in &report.unused {
            println!("{}", file.display().to_string().cyan().bold());
            for identifier in identifiers {
                println!("  {}", identifier);
            }
            println!();
        }

        println!(
            "{}",
            format!(
                "{} unused identifiers in {} of {} generated files",
                report.total_unused(),
                report.unused.len(),
                report.unused.len() + report.clean.len()
            )
            .dimmed()
        );

        Ok(())
    }
}

impl Default for TerminalReporter {
    fn default() -> Self {
        Self::new()
    }
}
