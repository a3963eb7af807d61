use crate::errors::StatementParseError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Representa uma data extraída de um arquivo CSV de extrato bancário.
///
/// Os extratos modelados aqui usam convenção dia-antes-do-mês:
/// - DD/MM/YYYY
/// - YYYY-MM-DD
/// - DD-MM-YYYY
///
/// Células exportadas de planilhas às vezes trazem quebras de linha; apenas a
/// primeira linha da célula é considerada.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CsvDate(String);

impl CsvDate {
    /// Tenta converter a string de data para `NaiveDate` aceitando os formatos mais comuns
    pub fn parse(&self) -> Result<NaiveDate, StatementParseError> {
        let s = self.0.lines().next().unwrap_or("").trim();

        if let Ok(date) = NaiveDate::parse_from_str(s, "%d/%m/%Y") {
            return Ok(date);
        }
        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Ok(date);
        }
        if let Ok(date) = NaiveDate::parse_from_str(s, "%d-%m-%Y") {
            return Ok(date);
        }

        Err(StatementParseError::CsvDateInvalidFormat)
    }
}

impl From<String> for CsvDate {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for CsvDate {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl TryFrom<CsvDate> for NaiveDate {
    type Error = StatementParseError;

    fn try_from(date: CsvDate) -> Result<Self, Self::Error> {
        date.parse()
    }
}

// -----------------------------------------------------------------------------
// Testes
// -----------------------------------------------------------------------------
