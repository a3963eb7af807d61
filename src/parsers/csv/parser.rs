use super::dto::{CsvRowRaw, CsvTransaction};
use crate::parsers::traits::{ParseOutcome, Parser};
use csv::ReaderBuilder;
use tracing::warn;

pub struct CsvParser;

impl Parser for CsvParser {
    type Output = CsvTransaction;

    fn is_supported(filename: Option<&str>, content: &str) -> bool {
        let has_csv_extension = filename
            .map(|name| name.to_lowercase().ends_with(".csv"))
            .unwrap_or(false);

        let first_line = content.lines().next().unwrap_or("");
        let looks_like_csv = first_line.contains("Date")
            && (first_line.contains("Debit") || first_line.contains("Credit"));

        match filename {
            Some(_) => has_csv_extension,
            None => looks_like_csv,
        }
    }

    /// Deserialize rows, converting each independently. A malformed row is
    /// logged and counted, never fatal for the batch.
    fn parse(content: &str) -> Result<ParseOutcome<Self::Output>, String> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .from_reader(content.as_bytes());

        let mut outcome = ParseOutcome::new();

        for result in reader.deserialize::<CsvRowRaw>() {
            let raw = match result {
                Ok(raw) => raw,
                Err(e) => {
                    warn!(error = %e, "skipping unreadable CSV row");
                    outcome.report.errored += 1;
                    continue;
                }
            };
            match CsvTransaction::try_from(raw) {
                Ok(txn) => {
                    outcome.rows.push(txn);
                    outcome.report.matched += 1;
                }
                Err(e) => {
                    warn!(error = %e, "skipping malformed CSV row");
                    outcome.report.errored += 1;
                }
            }
        }

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    const SAMPLE_CSV: &str = "\
Date,Description,Debit,Credit,Balance
01/02/2024,ATM,100,0,900
02/02/2024,Salary,0,500,1400
";

    const SAMPLE_CSV_FALLBACK_HEADERS: &str = "\
Transaction Date,Narrative,Debit,Credit,Running Balance
01/02/2024,Card Payment,25.50,,\"1,874.50\"
";

    #[rstest]
    #[case(Some("test.csv"), true)]
    #[case(Some("test.CSV"), true)]
    #[case(Some("test.pdf"), false)]
    #[case(None, true)]
    fn test_is_supported(#[case] filename: Option<&str>, #[case] expected: bool) {
        assert_eq!(CsvParser::is_supported(filename, SAMPLE_CSV), expected);
    }

    #[test]
    fn test_parse_valid_csv() {
        let outcome = CsvParser::parse(SAMPLE_CSV).unwrap();
        assert_eq!(outcome.rows.len(), 2);
        assert_eq!(outcome.report.matched, 2);
        assert_eq!(outcome.report.errored, 0);
        assert_eq!(outcome.rows[0].amount, Decimal::from_str("-100").unwrap());
        assert_eq!(outcome.rows[1].amount, Decimal::from_str("500").unwrap());
    }

    #[test]
    fn test_parse_fallback_headers() {
        let outcome = CsvParser::parse(SAMPLE_CSV_FALLBACK_HEADERS).unwrap();
        assert_eq!(outcome.rows.len(), 1);
        assert_eq!(outcome.rows[0].description, "Card Payment");
        assert_eq!(outcome.rows[0].amount, Decimal::from_str("-25.50").unwrap());
        assert_eq!(outcome.rows[0].balance, Decimal::from_str("1874.50").unwrap());
    }

    #[test]
    fn test_malformed_row_is_counted_not_fatal() {
        let csv = "\
Date,Description,Debit,Credit,Balance
01/02/2024,ATM,100,0,900
bad date,Mystery,1,0,899
02/02/2024,Salary,0,500,1400
";
        let outcome = CsvParser::parse(csv).unwrap();
        assert_eq!(outcome.rows.len(), 2);
        assert_eq!(outcome.report.matched, 2);
        assert_eq!(outcome.report.errored, 1);
        assert_eq!(outcome.rows[1].description, "Salary");
    }

    #[test]
    fn test_parse_empty_input_yields_empty_outcome() {
        let outcome = CsvParser::parse("Date,Description,Debit,Credit,Balance\n").unwrap();
        assert!(outcome.rows.is_empty());
        assert_eq!(outcome.report.matched, 0);
    }
}
