pub mod csv;
pub mod pdf;
pub mod traits;

pub mod prelude {
    pub use super::csv::prelude::*;
    pub use super::pdf::prelude::*;
    pub use super::traits::{LineReport, ParseOutcome, Parser};
}
