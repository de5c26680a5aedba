//! Tab-separated alignment row format.

use crate::ReportError;

const HEADER: &str = "Reference Sequence Identifier\tSequence Identifier\tSmith-Waterman Score\tLinear Gap Penalty\tSubstitution Matrix\tAlignment Length\tAlignment Identities\tAlignment Gaps\tAlignment Mismatches\tReference Sequence Alignment\tSequence Alignment\tSequence Alignment Base Quality\n";

/// The header line, emitted once at file start.
pub fn header() -> &'static str {
    HEADER
}

/// One row's worth of fields. `reference_id` should already carry the
/// `Reverse_Complement_` prefix for reverse-complement passes; this module
/// does not decide that, it only renders what it is given.
pub struct TsvRowInput<'a> {
    pub reference_id: &'a str,
    pub read_id: &'a str,
    pub score: i64,
    pub gap_penalty: i64,
    pub matrix_name: &'a str,
    pub alignment_length: usize,
    pub identities: usize,
    pub gaps: usize,
    pub mismatches: usize,
    pub reference_alignment: &'a str,
    pub read_alignment: &'a str,
    pub quality: &'a str,
}

pub fn format_row(input: &TsvRowInput) -> String {
    format!(
        "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\n",
        input.reference_id,
        input.read_id,
        input.score,
        input.gap_penalty,
        input.matrix_name,
        input.alignment_length,
        input.identities,
        input.gaps,
        input.mismatches,
        input.reference_alignment,
        input.read_alignment,
        input.quality,
    )
}

/// Slice of the FASTQ quality string spanning the alignment, inclusive of
/// both endpoints (`stop - start + 1` bytes).
///
/// Returns `Err` rather than panicking when the bounds don't fit the
/// quality string; this is a reported I/O-class error (§7), not a
/// programmer-error assertion.
pub fn quality_slice(quality: &str, start: usize, stop: usize) -> Result<&str, ReportError> {
    if start > stop || stop >= quality.len() {
        return Err(ReportError::QualityOutOfBounds { start, stop, len: quality.len() });
    }
    Ok(&quality[start..=stop])
}

/// Prefix a reference identifier for the reverse-complement pass.
pub fn reverse_complement_label(reference_id: &str) -> String {
    format!("Reverse_Complement_{reference_id}")
}
