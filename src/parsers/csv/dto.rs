use super::types::CsvDate;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Row as it appears in the export. Banks disagree on header names, so the
/// date/description/balance columns each accept a fallback spelling.
#[derive(Debug, Deserialize)]
pub struct CsvRowRaw {
    #[serde(rename = "Date", alias = "Transaction Date")]
    pub date: String,
    #[serde(rename = "Description", alias = "Narrative", default)]
    pub description: String,
    #[serde(rename = "Debit", default)]
    pub debit: Option<String>,
    #[serde(rename = "Credit", default)]
    pub credit: Option<String>,
    #[serde(rename = "Balance", alias = "Running Balance", default)]
    pub balance: Option<String>,
}

/// Normalized CSV row. The sign is already final here: separate debit and
/// credit columns make direction explicit, so this path never runs balance
/// inference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CsvTransaction {
    pub date: NaiveDate,
    pub description: String,
    pub amount: Decimal,
    pub balance: Decimal,
}

fn parse_column(cell: Option<&str>, strip_commas: bool) -> Result<Decimal, String> {
    let Some(s) = cell.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(Decimal::ZERO);
    };
    let s = if strip_commas {
        s.replace(',', "")
    } else {
        s.to_string()
    };
    s.parse::<Decimal>()
        .map_err(|e| format!("Invalid amount: {}", e))
}

impl TryFrom<CsvRowRaw> for CsvTransaction {
    type Error = String;

    fn try_from(raw: CsvRowRaw) -> Result<Self, Self::Error> {
        let date = CsvDate::from(raw.date)
            .parse()
            .map_err(|e| format!("Invalid date: {}", e))?;

        let debit = parse_column(raw.debit.as_deref(), false)?;
        let credit = parse_column(raw.credit.as_deref(), false)?;
        let balance = parse_column(raw.balance.as_deref(), true)?;

        Ok(CsvTransaction {
            date,
            description: raw.description.trim().to_string(),
            amount: (credit - debit).round_dp(2),
            balance: balance.round_dp(2),
        })
    }
}
