use std::fs;

use crate::{
    errors::{StatementParseError, StatementResult},
    extract::TextExtractor,
    parsers::prelude::*,
    types::Transaction,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileFormat {
    #[serde(rename = "csv")]
    Csv,
    #[serde(rename = "pdf")]
    Pdf,
}

impl FileFormat {
    /// The extension alone selects the path: `.csv` is CSV, anything else is
    /// treated as a PDF statement. No content sniffing.
    fn detect(filename: Option<&str>) -> Result<Self, StatementParseError> {
        match filename {
            Some(name) if name.to_lowercase().ends_with(".csv") => Ok(FileFormat::Csv),
            Some(_) => Ok(FileFormat::Pdf),
            None => Err(StatementParseError::UnsupportedFormat),
        }
    }
}

/// Final signed transactions for one upload, plus line-level diagnostics.
#[derive(Debug)]
pub struct ParsedStatement {
    pub transactions: Vec<Transaction>,
    pub report: LineReport,
}

#[derive(Default)]
pub struct ParserBuilder<'a> {
    bytes: Option<Vec<u8>>,
    filepath: Option<String>,
    format: Option<FileFormat>,
    extractor: Option<&'a mut TextExtractor>,
}

impl<'a> ParserBuilder<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bytes(mut self, bytes: &[u8]) -> Self {
        self.bytes = Some(bytes.to_vec());
        self
    }

    pub fn filename(mut self, filename: &str) -> Self {
        self.filepath = Some(filename.to_string());
        self
    }

    pub fn format(mut self, format: FileFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Reuse an external extractor (and its cache) instead of a throwaway one.
    pub fn extractor(mut self, extractor: &'a mut TextExtractor) -> Self {
        self.extractor = Some(extractor);
        self
    }

    pub fn parse(self) -> StatementResult<ParsedStatement> {
        let format = self
            .format
            .map(Ok)
            .unwrap_or_else(|| FileFormat::detect(self.filepath.as_deref()))?;

        let bytes = self
            .bytes
            .map(Ok)
            .unwrap_or_else(|| {
                self.filepath
                    .as_deref()
                    .ok_or(StatementParseError::MissingContentAndFilepath)
                    .and_then(|path| fs::read(path).map_err(Into::into))
            })?;

        match format {
            FileFormat::Csv => {
                // statement exports are not always clean UTF-8; decode lossily
                let content = String::from_utf8_lossy(&bytes);
                let outcome =
                    CsvParser::parse(&content).map_err(StatementParseError::ParseFailed)?;
                Ok(ParsedStatement {
                    transactions: outcome.rows.into_iter().map(Transaction::from).collect(),
                    report: outcome.report,
                })
            }
            FileFormat::Pdf => {
                let text = match self.extractor {
                    Some(extractor) => extractor.extract(&bytes)?,
                    None => TextExtractor::new().extract(&bytes)?,
                };
                let outcome =
                    PdfParser::parse(&text).map_err(StatementParseError::ParseFailed)?;
                Ok(ParsedStatement {
                    transactions: infer_directions(outcome.rows),
                    report: outcome.report,
                })
            }
        }
    }
}
