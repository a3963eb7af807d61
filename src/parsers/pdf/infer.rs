use super::dto::PdfLine;
use crate::types::Transaction;
use rust_decimal::Decimal;

/// Turn unsigned statement lines into signed transactions using the running
/// balance column.
///
/// The statement prints only a magnitude and the resulting balance, so the
/// sign of each entry comes from the balance delta against the immediately
/// preceding parsed line. The first line of a batch has nothing to diff
/// against and keeps its raw magnitude (positive).
///
/// Known limitation, kept on purpose: if extraction or pattern matching drops
/// an intermediate line, the delta spans the gap and the combined movement is
/// attributed to the next surviving line. No gap detection is performed.
pub fn infer_directions(lines: Vec<PdfLine>) -> Vec<Transaction> {
    let mut out = Vec::with_capacity(lines.len());
    let mut prev_balance: Option<Decimal> = None;

    for line in lines {
        let amount = match prev_balance {
            None => line.raw_amount.round_dp(2),
            Some(prev) => (line.balance - prev).round_dp(2),
        };
        prev_balance = Some(line.balance);

        out.push(Transaction {
            date: line.date,
            description: line.description,
            amount,
            balance: line.balance,
        });
    }

    out
}
