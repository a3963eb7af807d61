use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One statement line as printed: the amount column is an unsigned magnitude,
/// so `raw_amount` is only a candidate until direction inference replaces it
/// with a signed value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PdfLine {
    pub date: NaiveDate,
    pub description: String,
    pub raw_amount: Decimal,
    pub balance: Decimal,
}

impl PdfLine {
    /// Build a line from the four captured fields of the statement pattern.
    pub fn from_fields(
        date: &str,
        description: &str,
        amount: &str,
        balance: &str,
    ) -> Result<Self, String> {
        let date = NaiveDate::parse_from_str(date, "%d/%m/%Y")
            .map_err(|e| format!("Invalid date: {}", e))?;
        let raw_amount = parse_statement_decimal(amount)?;
        let balance = parse_statement_decimal(balance)?;

        Ok(PdfLine {
            date,
            description: description.trim().to_string(),
            raw_amount,
            balance: balance.round_dp(2),
        })
    }
}

/// Statement columns print thousands commas ("12,345.67").
fn parse_statement_decimal(s: &str) -> Result<Decimal, String> {
    s.replace(',', "")
        .parse::<Decimal>()
        .map_err(|e| format!("Invalid amount: {}", e))
}
