//! Output formatting for the CLI.

use colored::*;
use neg2pheno_extractor::{BundleOutput, ExtractionResult};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(color_enabled: bool) -> Self {
        Self { color_enabled }
    }

    /// Per-note summary table with a totals row.
    pub fn extraction_summary(&self, result: &ExtractionResult) -> String {
        if result.reports.is_empty() {
            return self.colorize("No .txt notes found.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["Note", "Affirmed", "Negated"]);
        for report in &result.reports {
            builder.push_record([
                report.filename.clone(),
                report.affirmed.to_string(),
                report.negated.to_string(),
            ]);
        }
        builder.push_record([
            format!("{} notes", result.metadata.documents),
            result.metadata.affirmed_total.to_string(),
            result.metadata.negated_total.to_string(),
        ]);

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Lines announcing the files written.
    pub fn bundles_written(&self, output: &BundleOutput) -> Vec<String> {
        let mut lines = Vec::new();
        if let Some(txt_dir) = &output.txt_dir {
            lines.push(self.success(&format!(
                "Wrote TXT inputs for PhenoBERT: {}",
                txt_dir.display()
            )));
        }
        if let Some(json_path) = &output.json_path {
            lines.push(self.success(&format!("Wrote JSON for PhenoBERT: {}", json_path.display())));
        }
        lines
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use neg2pheno_domain::AffirmationMap;
    use neg2pheno_extractor::{DocumentReport, ExtractionMetadata, Termset};
    use std::path::PathBuf;

    fn result(reports: Vec<DocumentReport>) -> ExtractionResult {
        let metadata = ExtractionMetadata {
            documents: reports.len(),
            affirmed_total: reports.iter().map(|r| r.affirmed).sum(),
            negated_total: reports.iter().map(|r| r.negated).sum(),
            termset: Termset::EnClinical,
            processing_time_ms: 3,
        };
        ExtractionResult {
            affirmed: AffirmationMap::new(),
            reports,
            metadata,
        }
    }

    #[test]
    fn test_summary_table() {
        let formatter = Formatter::new(false);
        let output = formatter.extraction_summary(&result(vec![
            DocumentReport {
                filename: "case1.txt".to_string(),
                affirmed: 2,
                negated: 1,
            },
            DocumentReport {
                filename: "case2.txt".to_string(),
                affirmed: 0,
                negated: 4,
            },
        ]));
        assert!(output.contains("Affirmed"));
        assert!(output.contains("case1.txt"));
        assert!(output.contains("2 notes"));
        assert!(output.contains('5'));
    }

    #[test]
    fn test_empty_summary() {
        let formatter = Formatter::new(false);
        assert!(formatter
            .extraction_summary(&result(Vec::new()))
            .contains("No .txt notes found"));
    }

    #[test]
    fn test_bundles_written() {
        let formatter = Formatter::new(false);
        let lines = formatter.bundles_written(&BundleOutput {
            txt_dir: Some(PathBuf::from("out/in")),
            json_path: None,
        });
        assert_eq!(lines, vec!["✓ Wrote TXT inputs for PhenoBERT: out/in"]);
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(false);
        assert_eq!(formatter.error("boom"), "✗ boom");
        assert_eq!(formatter.info("note"), "ℹ note");
    }
}
