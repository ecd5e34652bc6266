//! Report formatter implementations.

use serde_json::json;

use crate::{Error, Result};

use super::{CountReport, ReportFormatter};

/// Formatter for aligned text tables.
pub struct TableFormatter;

impl ReportFormatter for TableFormatter {
    fn format(&self, report: &CountReport) -> Result<String> {
        if report.rows().is_empty() {
            return Ok("No records.".to_string());
        }

        let key_width = report
            .rows()
            .iter()
            .map(|(key, _)| key.to_string().len())
            .chain(std::iter::once(report.key_column().len()))
            .max()
            .unwrap_or(0);

        let mut lines = vec![format!(
            "{:<key_width$}  {}",
            report.key_column(),
            report.value_column()
        )];
        for (key, value) in report.rows() {
            lines.push(format!("{key:<key_width$}  {value}"));
        }

        Ok(lines.join("\n"))
    }
}

/// Formatter for pretty-printed JSON.
pub struct JsonFormatter;

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &CountReport) -> Result<String> {
        let rows: Vec<serde_json::Value> = report
            .rows()
            .iter()
            .map(|(key, value)| {
                json!({
                    report.key_column(): key,
                    report.value_column(): value,
                })
            })
            .collect();

        serde_json::to_string_pretty(&rows).map_err(|e| Error::Validation {
            field: "json_output".to_string(),
            message: format!("failed to serialize to JSON: {e}"),
        })
    }
}

/// Formatter for CSV with a header record.
pub struct CsvFormatter;

impl ReportFormatter for CsvFormatter {
    fn format(&self, report: &CountReport) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        let map_err = |e: csv::Error| Error::Validation {
            field: "csv_output".to_string(),
            message: format!("failed to serialize to CSV: {e}"),
        };

        writer
            .write_record([report.key_column(), report.value_column()])
            .map_err(map_err)?;
        for (key, value) in report.rows() {
            writer
                .write_record([key.to_string(), value.to_string()])
                .map_err(map_err)?;
        }
        writer.flush()?;

        let bytes = writer.into_inner().map_err(|e| Error::Validation {
            field: "csv_output".to_string(),
            message: format!("failed to finish CSV output: {e}"),
        })?;
        String::from_utf8(bytes).map_err(|e| Error::Validation {
            field: "csv_output".to_string(),
            message: format!("CSV output was not valid UTF-8: {e}"),
        })
    }
}
