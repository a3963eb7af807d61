//! Persistent transaction ledger: one pretty-printed JSON array per user.

use crate::errors::StoreError;
use crate::types::Transaction;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::HashSet;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::PathBuf;
use tempfile::NamedTempFile;

/// Where the ledger lives. The original deployment hardcoded one data
/// directory and one user; making both explicit lets callers run any number
/// of stores side by side.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub data_dir: PathBuf,
    pub user_id: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            user_id: "1".to_string(),
        }
    }
}

impl StoreConfig {
    pub fn json_path(&self) -> PathBuf {
        self.data_dir.join(format!("user_{}.json", self.user_id))
    }
}

/// Append-only-across-uploads record store. The whole sequence is read on
/// every load and rewritten on every save; there is no incremental append.
#[derive(Debug)]
pub struct TransactionStore {
    config: StoreConfig,
}

impl TransactionStore {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Full persisted sequence; an absent file is an empty ledger, not an
    /// error. Unparseable content fails without touching the file.
    pub fn load(&self) -> Result<Vec<Transaction>, StoreError> {
        let content = match fs::read_to_string(self.config.json_path()) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::Io(e)),
        };
        Ok(serde_json::from_str(&content)?)
    }

    /// Persist the full sequence. The JSON is written to a temp file in the
    /// same directory and renamed over the target, so readers never observe
    /// a half-written store.
    pub fn save(&self, records: &[Transaction]) -> Result<(), StoreError> {
        fs::create_dir_all(&self.config.data_dir)?;
        let json = serde_json::to_string_pretty(records)?;

        let mut tmp = NamedTempFile::new_in(&self.config.data_dir)?;
        tmp.write_all(json.as_bytes())?;
        tmp.persist(self.config.json_path())
            .map_err(|e| StoreError::Io(e.error))?;
        Ok(())
    }
}

/// Concatenate `existing` then `incoming` and keep the first occurrence of
/// each `(date, description, amount)` key, preserving first-seen order.
/// Inputs are not mutated.
pub fn merge_and_dedupe(existing: &[Transaction], incoming: &[Transaction]) -> Vec<Transaction> {
    let mut seen: HashSet<(NaiveDate, String, Decimal)> = HashSet::new();
    let mut unique = Vec::new();

    for txn in existing.iter().chain(incoming) {
        let key = (txn.date, txn.description.clone(), txn.amount);
        if seen.insert(key) {
            unique.push(txn.clone());
        }
    }

    unique
}
