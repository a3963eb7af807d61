use crate::parsers::prelude::*;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single ledger entry. `amount` is signed: positive means credit/inflow,
/// negative means debit/outflow. `balance` is the running account balance
/// immediately after this transaction. Both are kept at 2 fractional digits
/// and persist as plain JSON numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub date: NaiveDate,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub balance: Decimal,
}

impl Transaction {
    /// Identity used for cross-upload deduplication. Two records sharing this
    /// key are the same real-world transaction, whatever their balances say.
    pub fn dedup_key(&self) -> (NaiveDate, &str, Decimal) {
        (self.date, self.description.as_str(), self.amount)
    }
}

impl From<CsvTransaction> for Transaction {
    fn from(stmt: CsvTransaction) -> Self {
        Transaction {
            date: stmt.date,
            description: stmt.description,
            amount: stmt.amount,
            balance: stmt.balance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn txn(amount: &str, balance: &str) -> Transaction {
        Transaction {
            date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            description: "ATM Withdrawal".to_string(),
            amount: Decimal::from_str(amount).unwrap(),
            balance: Decimal::from_str(balance).unwrap(),
        }
    }

    #[test]
    fn test_transaction_from_csv_transaction() {
        let csv = CsvTransaction {
            date: NaiveDate::from_ymd_opt(2024, 2, 2).unwrap(),
            description: "Salary".to_string(),
            amount: Decimal::from_str("500.00").unwrap(),
            balance: Decimal::from_str("1400.00").unwrap(),
        };

        let transaction: Transaction = csv.into();
        assert_eq!(transaction.description, "Salary");
        assert_eq!(transaction.amount, Decimal::from_str("500.00").unwrap());
        assert_eq!(transaction.balance, Decimal::from_str("1400.00").unwrap());
    }

    #[test]
    fn test_dedup_key_ignores_balance() {
        let a = txn("-50.00", "950.00");
        let b = txn("-50.00", "123.45");
        assert_eq!(a.dedup_key(), b.dedup_key());
    }

    #[test]
    fn test_dedup_key_distinguishes_amount() {
        let a = txn("-50.00", "950.00");
        let b = txn("50.00", "950.00");
        assert_ne!(a.dedup_key(), b.dedup_key());
    }

    #[test]
    fn test_transaction_serializes_amounts_as_numbers() {
        let transaction = txn("-50.00", "950.00");

        let json = serde_json::to_string(&transaction).unwrap();
        assert!(json.contains("\"date\":\"2024-02-01\""));
        assert!(json.contains("\"amount\":-50.0"));
        assert!(!json.contains("\"amount\":\"-50"));

        let deserialized: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, transaction);
    }
}
