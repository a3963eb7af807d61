use crate::{
    builder::ParserBuilder,
    errors::IngestError,
    extract::TextExtractor,
    parsers::traits::LineReport,
    store::{merge_and_dedupe, StoreConfig, TransactionStore},
    types::Transaction,
};
use tracing::{info, warn};

/// What one upload did to the ledger. `added` is the raw parse count before
/// dedup and `total` the ledger size after; both metrics are intentionally
/// reported ("N transactions added, M total now").
#[derive(Debug)]
pub struct IngestSummary {
    pub added: usize,
    pub total: usize,
    pub report: LineReport,
    pub records: Vec<Transaction>,
}

impl IngestSummary {
    /// The upload produced zero transactions. A warning condition for the
    /// caller to surface, not an error.
    pub fn is_empty_batch(&self) -> bool {
        self.added == 0
    }
}

/// One upload at a time: extract → parse → infer → merge → persist, as a
/// single synchronous sequence. Owns the extractor (and its cache) and the
/// store, so repeated uploads share both.
#[derive(Debug)]
pub struct Ingestor {
    extractor: TextExtractor,
    store: TransactionStore,
}

impl Ingestor {
    pub fn new(config: StoreConfig) -> Self {
        Self {
            extractor: TextExtractor::new(),
            store: TransactionStore::new(config),
        }
    }

    pub fn store(&self) -> &TransactionStore {
        &self.store
    }

    pub fn ingest(&mut self, bytes: &[u8], filename: &str) -> Result<IngestSummary, IngestError> {
        let parsed = ParserBuilder::new()
            .bytes(bytes)
            .filename(filename)
            .extractor(&mut self.extractor)
            .parse()?;

        let existing = self.store.load()?;
        let added = parsed.transactions.len();
        let merged = merge_and_dedupe(&existing, &parsed.transactions);
        self.store.save(&merged)?;

        if added == 0 {
            warn!(filename, "statement produced no transactions");
        } else {
            info!(filename, added, total = merged.len(), "statement ingested");
        }

        Ok(IngestSummary {
            added,
            total: merged.len(),
            report: parsed.report,
            records: merged,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use tempfile::tempdir;

    const SAMPLE_CSV: &str = "\
Date,Description,Debit,Credit,Balance
01/02/2024,ATM,100,0,900
02/02/2024,Salary,0,500,1400
";

    fn ingestor_in(dir: &std::path::Path) -> Ingestor {
        Ingestor::new(StoreConfig {
            data_dir: dir.to_path_buf(),
            user_id: "1".to_string(),
        })
    }

    #[test]
    fn test_csv_upload_against_empty_store() {
        let dir = tempdir().unwrap();
        let mut ingestor = ingestor_in(dir.path());

        let summary = ingestor
            .ingest(SAMPLE_CSV.as_bytes(), "statement.csv")
            .unwrap();

        assert_eq!(summary.added, 2);
        assert_eq!(summary.total, 2);
        assert!(!summary.is_empty_batch());
        assert_eq!(
            summary.records[0].amount,
            Decimal::from_str("-100").unwrap()
        );
        assert_eq!(summary.records[1].amount, Decimal::from_str("500").unwrap());
    }

    #[test]
    fn test_reupload_dedupes_but_reports_raw_added_count() {
        let dir = tempdir().unwrap();
        let mut ingestor = ingestor_in(dir.path());

        ingestor
            .ingest(SAMPLE_CSV.as_bytes(), "statement.csv")
            .unwrap();
        let summary = ingestor
            .ingest(SAMPLE_CSV.as_bytes(), "statement.csv")
            .unwrap();

        // added counts the raw parse, total the deduped ledger
        assert_eq!(summary.added, 2);
        assert_eq!(summary.total, 2);
    }

    #[test]
    fn test_ingest_persists_across_ingestors() {
        let dir = tempdir().unwrap();
        {
            let mut ingestor = ingestor_in(dir.path());
            ingestor
                .ingest(SAMPLE_CSV.as_bytes(), "statement.csv")
                .unwrap();
        }

        let later = ingestor_in(dir.path());
        assert_eq!(later.store().load().unwrap().len(), 2);
    }

    #[test]
    fn test_empty_batch_is_a_warning_not_an_error() {
        let dir = tempdir().unwrap();
        let mut ingestor = ingestor_in(dir.path());

        let summary = ingestor
            .ingest(b"Date,Description,Debit,Credit,Balance\n", "empty.csv")
            .unwrap();

        assert!(summary.is_empty_batch());
        assert_eq!(summary.total, 0);
    }

    #[test]
    fn test_unreadable_document_surfaces_as_parse_error() {
        let dir = tempdir().unwrap();
        let mut ingestor = ingestor_in(dir.path());

        let result = ingestor.ingest(b"not a pdf", "statement.pdf");
        assert!(matches!(result, Err(IngestError::Parse(_))));
        // nothing was persisted
        assert!(ingestor.store().load().unwrap().is_empty());
    }
}
