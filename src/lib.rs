//! Turn bank statement uploads (PDF or CSV) into a deduplicated transaction ledger.
//!
//! ```rust,ignore
//! use statement_ledger_rs::{Ingestor, StoreConfig};
//!
//! let mut ingestor = Ingestor::new(StoreConfig::default());
//! let summary = ingestor.ingest(&file_bytes, &filename)?;
//! println!("{} transactions added, {} total now", summary.added, summary.total);
//! ```

mod builder;
mod ingest;
mod types;

pub mod errors;
pub mod extract;
pub mod parsers;
pub mod store;

pub use builder::{FileFormat, ParsedStatement, ParserBuilder};
pub use extract::TextExtractor;
pub use ingest::{IngestSummary, Ingestor};
pub use parsers::prelude::*;
pub use store::{merge_and_dedupe, StoreConfig, TransactionStore};
pub use types::Transaction;
