pub mod pair;
pub mod tsv;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("quality slice [{start}, {stop}] out of bounds for quality string of length {len}")]
    QualityOutOfBounds { start: usize, stop: usize, len: usize },
}

pub use pair::{format_pair_report, PairReportInput};
pub use tsv::{format_row, header as tsv_header, quality_slice, reverse_complement_label, TsvRowInput};
