//! Command-line surface.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Local Smith-Waterman alignment of a stream of reads against a reference.
#[derive(Parser, Debug)]
#[command(name = "ednafull_linear_smith_waterman")]
#[command(version)]
#[command(about = "Align FASTQ reads against a reference with Smith-Waterman/EDNAFULL", long_about = None)]
pub struct Cli {
    /// FASTQ file of reads to align.
    pub reads: PathBuf,

    /// FASTA file containing the reference (query) sequence.
    #[arg(short = 'q', long = "query")]
    pub query: PathBuf,

    /// Linear gap penalty.
    #[arg(short = 'P', long = "gap-penalty", default_value_t = 16)]
    pub gap_penalty: i64,

    /// Output report format.
    #[arg(long = "type", value_enum, default_value = "tsv")]
    pub report_type: ReportType,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ReportType {
    Tsv,
    Pair,
}
