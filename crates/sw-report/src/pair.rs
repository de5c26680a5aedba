//! EMBOSS-style "pair" report formatter.
//!
//! Reproduces the fixed-width pairwise alignment report bit-for-bit,
//! including the crossed identifier labelling described below.

use sw_core::AlignmentCounts;

const HASH_LINE: &str = "########################################";
const EQ_LINE: &str = "#=======================================";
const DASH_LINE: &str = "#---------------------------------------";

/// Everything needed to render one pairwise report.
///
/// `sequence_id` labels the `trace_y` row and `query_id` labels the
/// `trace_x` row; callers decide which biological entity plays which
/// role; see the crate-level note on crossed identifier labels.
pub struct PairReportInput<'a> {
    pub sequence_id: &'a str,
    pub query_id: &'a str,
    pub matrix_name: &'a str,
    pub gap_penalty: i64,
    pub trace_x: &'a str,
    pub trace_y: &'a str,
    pub score: i64,
    pub counts: AlignmentCounts,
    /// 0-based matrix coordinate where the traceback walk terminated.
    pub start_x: usize,
    pub start_y: usize,
    /// Preformatted per `"%a %b %d %H:%M:%S %Y"`.
    pub rundate: &'a str,
}

/// Strip a leading `>` or `@` and take the first whitespace-delimited token.
fn id_token(id: &str) -> &str {
    let stripped = id.strip_prefix('>').or_else(|| id.strip_prefix('@')).unwrap_or(id);
    stripped.split_whitespace().next().unwrap_or(stripped)
}

fn pct(count: usize, len: usize) -> f64 {
    if len == 0 {
        0.0
    } else {
        count as f64 / len as f64 * 100.0
    }
}

pub fn format_pair_report(input: &PairReportInput) -> String {
    assert_eq!(
        input.trace_x.chars().count(),
        input.trace_y.chars().count(),
        "trace_x and trace_y must have equal length"
    );

    let sequence_token = id_token(input.sequence_id);
    let query_token = id_token(input.query_id);
    let w = sequence_token.len().max(query_token.len());

    let len = input.trace_x.chars().count();
    let counts = input.counts;
    let gaps = counts.gaps_x + counts.gaps_y;

    let mut out = String::new();
    out.push_str(HASH_LINE);
    out.push('\n');
    out.push_str("# Program:  ednafull_linear_smith_waterman\n");
    out.push_str(&format!("# Rundate:  {}\n", input.rundate));
    out.push_str("# Report_file: stdout\n");
    out.push_str(HASH_LINE);
    out.push('\n');
    out.push_str(EQ_LINE);
    out.push('\n');
    out.push_str("#\n");
    out.push_str("# Aligned_sequences: 2\n");
    out.push_str(&format!("# 1: {sequence_token}\n"));
    out.push_str(&format!("# 2: {query_token}\n"));
    out.push_str(&format!("# Matrix: {}\n", input.matrix_name));
    out.push_str(&format!("# Gap_penalty: {}.0\n", input.gap_penalty));
    out.push_str(&format!("# Extend_penalty: {}.0\n", input.gap_penalty));
    out.push_str("#\n");
    out.push_str(&format!("# Length: {len}\n"));
    out.push_str(&format!(
        "# {:<12}{}/{} ({:.1}%)\n",
        "Identity:",
        counts.identical,
        len,
        pct(counts.identical, len)
    ));
    out.push_str(&format!(
        "# {:<12}{}/{} ({:.1}%)\n",
        "Similarity:",
        counts.identical,
        len,
        pct(counts.identical, len)
    ));
    out.push_str(&format!(
        "# {:<12}{}/{} ({:.1}%)\n",
        "Gaps:",
        gaps,
        len,
        pct(gaps, len)
    ));
    out.push_str(&format!(
        "# {:<12}{}/{} ({:.1}%)\n",
        "Mismatchs:",
        counts.mismatches,
        len,
        pct(counts.mismatches, len)
    ));
    out.push_str(&format!("# Score: {}\n", input.score));
    out.push_str("#\n");
    out.push_str("#\n");
    out.push_str(EQ_LINE);
    out.push('\n');

    let chars_x: Vec<char> = input.trace_x.chars().collect();
    let chars_y: Vec<char> = input.trace_y.chars().collect();

    let mut current_x = 0usize;
    let mut current_y = 0usize;

    for chunk_start in (0..len).step_by(50) {
        let chunk_end = (chunk_start + 50).min(len);
        let chunk_x = &chars_x[chunk_start..chunk_end];
        let chunk_y = &chars_y[chunk_start..chunk_end];

        let nongap_x = chunk_x.iter().filter(|&&c| c != '-').count();
        let nongap_y = chunk_y.iter().filter(|&&c| c != '-').count();

        let prev_x = current_x;
        let prev_y = current_y;
        current_x += nongap_x;
        current_y += nongap_y;

        let disp_start_x = input.start_x + if nongap_x > 0 { prev_x + 1 } else { prev_x };
        let disp_end_x = input.start_x + current_x;
        let disp_start_y = input.start_y + if nongap_y > 0 { prev_y + 1 } else { prev_y };
        let disp_end_y = input.start_y + current_y;

        let segment_x: String = chunk_x.iter().collect();
        let segment_y: String = chunk_y.iter().collect();
        let match_str: String = chunk_x
            .iter()
            .zip(chunk_y.iter())
            .map(|(&a, &b)| if a == b && a != '-' { '|' } else { ' ' })
            .collect();

        out.push('\n');
        out.push('\n');
        out.push_str(&format!(
            "{sequence_token:<w$} {disp_start_y:>20} {segment_y} {disp_end_y:>20}\n"
        ));
        out.push_str(&format!("{:w2$} {match_str}\n", "", w2 = w + 22));
        out.push_str(&format!(
            "{query_token:<w$} {disp_start_x:>20} {segment_x} {disp_end_x:>20}\n"
        ));
    }

    out.push('\n');
    out.push('\n');
    out.push_str(DASH_LINE);
    out.push('\n');
    out.push_str(DASH_LINE);
    out.push('\n');

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn base_counts(identical: usize, gaps_x: usize, gaps_y: usize, mismatches: usize) -> AlignmentCounts {
        AlignmentCounts { identical, gaps_x, gaps_y, mismatches }
    }

    #[test]
    fn test_header_fields_and_identifier_tokens() {
        let input = PairReportInput {
            sequence_id: ">read1 some description",
            query_id: ">ref1 reference description",
            matrix_name: "EDNAFULL",
            gap_penalty: 16,
            trace_x: "ACGT",
            trace_y: "ACGT",
            score: 20,
            counts: base_counts(4, 0, 0, 0),
            start_x: 0,
            start_y: 0,
            rundate: "Thu Jan 01 00:00:00 1970",
        };
        let report = format_pair_report(&input);
        assert!(report.starts_with("########################################\n"));
        assert!(report.contains("# 1: read1\n"));
        assert!(report.contains("# 2: ref1\n"));
        assert!(report.contains("# Matrix: EDNAFULL\n"));
        assert!(report.contains("# Gap_penalty: 16.0\n"));
        assert!(report.contains("# Length: 4\n"));
        assert!(report.contains("# Identity:   4/4 (100.0%)\n"));
        assert!(report.contains("# Similarity: 4/4 (100.0%)\n"));
        assert!(report.contains("# Gaps:       0/4 (0.0%)\n"));
        assert!(report.contains("# Mismatchs:  0/4 (0.0%)\n"));
        assert!(report.contains("# Score: 20\n"));
        assert!(report.ends_with(&format!("{DASH_LINE}\n{DASH_LINE}\n")));
    }

    #[test]
    fn test_crossed_identifier_labels_in_body() {
        let input = PairReportInput {
            sequence_id: ">read1",
            query_id: ">ref1",
            matrix_name: "EDNAFULL",
            gap_penalty: 16,
            trace_x: "ACGT",
            trace_y: "ACGT",
            score: 20,
            counts: base_counts(4, 0, 0, 0),
            start_x: 0,
            start_y: 0,
            rundate: "Thu Jan 01 00:00:00 1970",
        };
        let report = format_pair_report(&input);
        // "sequence" identifier (read1) decorates the trace_y row.
        let y_line = report.lines().find(|l| l.contains("ACGT") && l.starts_with("read1")).unwrap();
        assert!(y_line.starts_with("read1"));
        // "query" identifier (ref1) decorates the trace_x row.
        let x_line = report.lines().find(|l| l.contains("ACGT") && l.starts_with("ref1")).unwrap();
        assert!(x_line.starts_with("ref1"));
    }

    #[test]
    fn test_match_indicator_marks_mismatches_and_gaps() {
        let input = PairReportInput {
            sequence_id: ">s",
            query_id: ">q",
            matrix_name: "EDNAFULL",
            gap_penalty: 16,
            trace_x: "GTTGAC",
            trace_y: "GTT-AC",
            score: 13,
            counts: base_counts(5, 0, 1, 1),
            start_x: 3,
            start_y: 1,
            rundate: "Thu Jan 01 00:00:00 1970",
        };
        let report = format_pair_report(&input);
        let match_line = report.lines().find(|l| l.contains('|')).unwrap();
        // Columns: G/G T/T T/T G/- A/A C/C -> | | |   | |
        assert!(match_line.trim_end().ends_with("|| ||"));
    }

    #[test]
    fn test_two_segments_for_75_column_alignment() {
        let trace_x: String = "A".repeat(75);
        let trace_y: String = "A".repeat(75);
        let input = PairReportInput {
            sequence_id: ">read_of_a_certain_length_x",
            query_id: ">reference_token_2020202020",
            matrix_name: "EDNAFULL",
            gap_penalty: 16,
            trace_x: &trace_x,
            trace_y: &trace_y,
            score: 375,
            counts: base_counts(75, 0, 0, 0),
            start_x: 0,
            start_y: 0,
            rundate: "Thu Jan 01 00:00:00 1970",
        };
        let report = format_pair_report(&input);
        let segment_lines: Vec<&str> = report
            .lines()
            .filter(|l| l.contains('A') && !l.contains('#'))
            .collect();
        // Two segments -> 4 sequence lines (Y, X per segment).
        assert_eq!(segment_lines.len(), 4);
        assert!(report.contains(&format!("{:>20}", 50)));
        assert!(report.contains(&format!("{:>20}", 75)));
    }

    #[test]
    fn test_gap_only_segment_does_not_advance_start() {
        // First segment is entirely a gap in trace_y; its start must stay at
        // the previous value rather than advancing past it.
        let trace_x = "AAAA".to_string();
        let trace_y = "----".to_string();
        let input = PairReportInput {
            sequence_id: ">s",
            query_id: ">q",
            matrix_name: "EDNAFULL",
            gap_penalty: 16,
            trace_x: &trace_x,
            trace_y: &trace_y,
            score: 0,
            counts: base_counts(0, 0, 4, 4),
            start_x: 0,
            start_y: 0,
            rundate: "Thu Jan 01 00:00:00 1970",
        };
        let report = format_pair_report(&input);
        let y_line = report.lines().find(|l| l.contains("----")).unwrap();
        // start_Y and end_Y both render as 0 since no non-gap char was consumed.
        assert!(y_line.contains(&format!("{:>20}", 0)));
    }
}
