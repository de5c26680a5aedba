pub mod fasta;
pub mod fastq;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("invalid FASTA input: {0}")]
    Fasta(String),
    #[error("invalid FASTQ input: {0}")]
    Fastq(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
