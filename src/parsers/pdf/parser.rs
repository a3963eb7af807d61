use super::dto::PdfLine;
use crate::parsers::traits::{ParseOutcome, Parser};
use regex::Regex;
use tracing::warn;

/// Statement line shape: `<D>/<D>/<YYYY> <description> <amount> <balance>`.
const LINE_PATTERN: &str = r"^(\d{1,2}/\d{1,2}/\d{4})\s+(.+?)\s+([\d,.]+)\s+([\d,.]+)$";

pub struct PdfParser;

impl Parser for PdfParser {
    type Output = PdfLine;

    fn is_supported(filename: Option<&str>, content: &str) -> bool {
        // PDF is the fallback format: any extension other than .csv lands here.
        match filename {
            Some(name) => !name.to_lowercase().ends_with(".csv"),
            None => Regex::new(LINE_PATTERN)
                .map(|re| content.lines().any(|line| re.is_match(line.trim())))
                .unwrap_or(false),
        }
    }

    /// Scan extracted text line by line. Lines that don't have the statement
    /// shape are skipped outright; lines that match but carry an unparseable
    /// field are logged and counted, never fatal for the batch.
    fn parse(content: &str) -> Result<ParseOutcome<Self::Output>, String> {
        let line_re = Regex::new(LINE_PATTERN).map_err(|e| e.to_string())?;

        let mut outcome = ParseOutcome::new();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let Some(caps) = line_re.captures(line) else {
                outcome.report.skipped += 1;
                continue;
            };

            match PdfLine::from_fields(&caps[1], &caps[2], &caps[3], &caps[4]) {
                Ok(parsed) => {
                    outcome.rows.push(parsed);
                    outcome.report.matched += 1;
                }
                Err(e) => {
                    warn!(error = %e, line, "skipping malformed statement line");
                    outcome.report.errored += 1;
                }
            }
        }

        Ok(outcome)
    }
}
