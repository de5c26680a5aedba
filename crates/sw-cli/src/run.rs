//! Driver / orchestration (C7): iterates reads, runs forward and
//! reverse-complement alignment per read, dispatches to the TSV or pair
//! writer.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::time::Instant;

use chrono::Local;
use sw_formats::fastq::FastqReader;
use sw_report::{PairReportInput, TsvRowInput};

use crate::cli::{Cli, ReportType};
use crate::error::CliError;

const MATRIX_NAME: &str = "EDNAFULL";
const PROGRESS_EVERY_READS: u64 = 256;

/// One local alignment's worth of output-ready data.
struct AlignmentOutcome {
    reference_token: String,
    read_token: String,
    trace_reference: String,
    trace_read: String,
    score: i64,
    counts: sw_core::AlignmentCounts,
    start_read: usize,
    stop_read: usize,
    start_reference: usize,
}

fn align(
    reference_token: String,
    read_token: String,
    read_seq: &[u8],
    reference_seq: &[u8],
    gap_penalty: i64,
) -> AlignmentOutcome {
    let len_x = read_seq.len();
    let len_y = reference_seq.len();
    let mut z = vec![0i64; len_x * len_y];
    sw_core::fill(read_seq, reference_seq, &mut z, sw_core::score, gap_penalty);
    let best = sw_core::argmax(len_x, len_y, &z).expect("non-empty read and reference");
    let (trace_read, trace_reference, (start_read, start_reference)) =
        sw_core::trace(read_seq, reference_seq, &z, best, sw_core::score, gap_penalty);
    let counts = sw_core::count(&trace_read, &trace_reference);

    AlignmentOutcome {
        reference_token,
        read_token,
        trace_reference,
        trace_read,
        score: z[best.0 * len_y + best.1],
        counts,
        start_read,
        stop_read: best.0,
        start_reference,
    }
}

/// First whitespace-delimited token of a FASTQ identifier line, leading `@`
/// stripped.
fn read_id_token(id: &str) -> &str {
    let stripped = id.strip_prefix('@').unwrap_or(id);
    stripped.split_whitespace().next().unwrap_or(stripped)
}

fn output_path(reads: &std::path::Path, report_type: ReportType) -> std::path::PathBuf {
    let mut name = reads.as_os_str().to_os_string();
    name.push(match report_type {
        ReportType::Tsv => ".sw.tsv",
        ReportType::Pair => ".sw.pair",
    });
    std::path::PathBuf::from(name)
}

fn write_outcome<W: Write>(
    out: &mut W,
    report_type: ReportType,
    outcome: &AlignmentOutcome,
    quality: &str,
    gap_penalty: i64,
) -> Result<(), CliError> {
    match report_type {
        ReportType::Tsv => {
            let quality_slice = sw_report::quality_slice(quality, outcome.start_read, outcome.stop_read)?;
            let row = TsvRowInput {
                reference_id: &outcome.reference_token,
                read_id: &outcome.read_token,
                score: outcome.score,
                gap_penalty,
                matrix_name: MATRIX_NAME,
                alignment_length: outcome.trace_read.chars().count(),
                identities: outcome.counts.identical,
                gaps: outcome.counts.gaps_x + outcome.counts.gaps_y,
                mismatches: outcome.counts.mismatches,
                reference_alignment: &outcome.trace_reference,
                read_alignment: &outcome.trace_read,
                quality: quality_slice,
            };
            out.write_all(sw_report::format_row(&row).as_bytes())
                .map_err(CliError::Runtime)
        }
        ReportType::Pair => {
            let rundate = Local::now().format("%a %b %d %H:%M:%S %Y").to_string();
            let input = PairReportInput {
                sequence_id: &outcome.read_token,
                query_id: &outcome.reference_token,
                matrix_name: MATRIX_NAME,
                gap_penalty,
                trace_x: &outcome.trace_read,
                trace_y: &outcome.trace_reference,
                score: outcome.score,
                counts: outcome.counts,
                start_x: outcome.start_read,
                start_y: outcome.start_reference,
                rundate: &rundate,
            };
            out.write_all(sw_report::format_pair_report(&input).as_bytes())
                .map_err(CliError::Runtime)
        }
    }
}

pub fn run(cli: &Cli) -> Result<(), CliError> {
    let query_contents = fs::read_to_string(&cli.query)?;
    let reference_record = sw_formats::fasta::extract_fasta_sequence(&query_contents)?;
    let reference_id = sw_formats::fasta::id_token(&reference_record.id).to_string();
    let reference_seq = reference_record.sequence.as_bytes().to_vec();
    let reference_seq_rc = sw_core::reverse_complement(&reference_seq)
        .ok_or_else(|| CliError::InvalidReference("reference sequence contains a non-IUPAC base".to_string()))?;

    let out_path = output_path(&cli.reads, cli.report_type);
    let out_file = File::create(&out_path)?;
    let mut out = BufWriter::new(out_file);

    if cli.report_type == ReportType::Tsv {
        out.write_all(sw_report::tsv_header().as_bytes()).map_err(CliError::Runtime)?;
        out.flush().map_err(CliError::Runtime)?;
    }

    let reads_file = File::open(&cli.reads)?;
    let reader = FastqReader::new(BufReader::new(reads_file));

    let start = Instant::now();
    let mut reads_processed: u64 = 0;

    for record in reader {
        let record = record.map_err(CliError::ReadFormat)?;
        let read_token = read_id_token(&record.id).to_string();
        let read_seq = record.sequence.as_bytes();

        let forward = align(reference_id.clone(), read_token.clone(), read_seq, &reference_seq, cli.gap_penalty);
        write_outcome(&mut out, cli.report_type, &forward, &record.quality, cli.gap_penalty)?;
        out.flush().map_err(CliError::Runtime)?;

        let reverse_reference_token = sw_report::reverse_complement_label(&reference_id);
        let reverse = align(reverse_reference_token, read_token, read_seq, &reference_seq_rc, cli.gap_penalty);
        write_outcome(&mut out, cli.report_type, &reverse, &record.quality, cli.gap_penalty)?;
        out.flush().map_err(CliError::Runtime)?;

        reads_processed += 1;
        if reads_processed % PROGRESS_EVERY_READS == 0 {
            eprintln!(
                "{reads_processed} reads processed in {:.2}s",
                start.elapsed().as_secs_f64()
            );
        }
    }

    Ok(())
}
