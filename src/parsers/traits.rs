/// Per-batch tally of how input lines (or rows) were handled. Skips and
/// errors are non-fatal: a batch only fails as a whole.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LineReport {
    /// Lines that matched the statement shape and produced a row
    pub matched: usize,
    /// Lines that did not look like a transaction at all
    pub skipped: usize,
    /// Lines that matched the shape but had an unparseable field
    pub errored: usize,
}

/// Parsed rows plus the line-level diagnostics for the same batch.
#[derive(Debug)]
pub struct ParseOutcome<T> {
    pub rows: Vec<T>,
    pub report: LineReport,
}

impl<T> ParseOutcome<T> {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            report: LineReport::default(),
        }
    }
}

impl<T> Default for ParseOutcome<T> {
    fn default() -> Self {
        Self::new()
    }
}

pub trait Parser {
    type Output;

    fn parse(content: &str) -> Result<ParseOutcome<Self::Output>, String>;

    fn is_supported(filename: Option<&str>, content: &str) -> bool;
}
