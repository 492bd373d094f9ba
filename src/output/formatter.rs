use anyhow::Result;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::scanner::ScanResult;

use super::Finding;

#[derive(Debug, Serialize)]
pub struct FileError {
    pub file: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct JsonOutput {
    pub files_scanned: usize,
    pub total_findings: usize,
    pub fixable_findings: usize,
    pub findings: Vec<Finding>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FileError>,
}

pub struct OutputFormatter;

impl OutputFormatter {
    pub fn format(results: &[ScanResult], format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&Self::build_output(results))?),
            OutputFormat::Text => Ok(Self::format_text(results)),
        }
    }

    pub fn build_output(results: &[ScanResult]) -> JsonOutput {
        let findings: Vec<Finding> = results.iter().flat_map(Finding::from_scan_result).collect();

        let errors = results
            .iter()
            .flat_map(|r| {
                r.errors.iter().map(|message| FileError {
                    file: r.file_path.clone(),
                    message: message.clone(),
                })
            })
            .collect();

        JsonOutput {
            files_scanned: results.len(),
            total_findings: findings.len(),
            fixable_findings: findings.iter().filter(|f| f.fixable).count(),
            findings,
            errors,
        }
    }

    /// Grouped per file, in the style of the usual JS linter reporters.
    pub fn format_text(results: &[ScanResult]) -> String {
        let mut out = String::new();
        let mut total = 0;
        let mut fixable = 0;

        for result in results {
            if result.diagnostics.is_empty() && result.errors.is_empty() {
                continue;
            }
            out.push_str(&result.file_path);
            out.push('\n');
            for error in &result.errors {
                out.push_str(&format!("  error  {error}\n"));
            }
            for finding in Finding::from_scan_result(result) {
                out.push_str(&format!(
                    "  {}:{}  error  {}  {}\n",
                    finding.line, finding.column, finding.message, finding.rule
                ));
                total += 1;
                if finding.fixable {
                    fixable += 1;
                }
            }
            out.push('\n');
        }

        if total > 0 {
            out.push_str(&summary_line(total, fixable));
        }
        out
    }
}

fn summary_line(total: usize, fixable: usize) -> String {
    let noun = if total == 1 { "problem" } else { "problems" };
    if fixable > 0 {
        format!("{total} {noun} ({fixable} fixable with --fix)\n")
    } else {
        format!("{total} {noun}\n")
    }
}
