//! FASTQ read iteration: strict four-line record cadence.

use std::io::BufRead;

use crate::FormatError;

/// One sequencing read: identifier (with leading `@`), sequence, and
/// Phred-encoded quality string. The separator line (`+...`) is discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastqRecord {
    pub id: String,
    pub sequence: String,
    pub quality: String,
}

/// Streams `FastqRecord`s out of a `BufRead`, one four-line record at a
/// time, so a whole reads file never has to live in memory at once.
pub struct FastqReader<R> {
    lines: std::io::Lines<R>,
}

impl<R: BufRead> FastqReader<R> {
    pub fn new(reader: R) -> Self {
        Self { lines: reader.lines() }
    }

    fn next_line(&mut self) -> Option<Result<String, FormatError>> {
        self.lines.next().map(|r| r.map_err(FormatError::from))
    }
}

impl<R: BufRead> Iterator for FastqReader<R> {
    type Item = Result<FastqRecord, FormatError>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = match self.next_line()? {
            Ok(line) => line,
            Err(e) => return Some(Err(e)),
        };
        let id = id.trim_end_matches('\r').to_string();

        if !id.starts_with('@') {
            return Some(Err(FormatError::Fastq(format!(
                "expected identifier line starting with '@', got {id:?}"
            ))));
        }

        let sequence = match self.next_line() {
            Some(Ok(line)) => line.trim_end_matches('\r').to_string(),
            Some(Err(e)) => return Some(Err(e)),
            None => return Some(Err(FormatError::Fastq("truncated record: missing sequence line".into()))),
        };

        if sequence.is_empty() {
            return Some(Err(FormatError::Fastq("empty sequence line".to_string())));
        }

        let separator = match self.next_line() {
            Some(Ok(line)) => line,
            Some(Err(e)) => return Some(Err(e)),
            None => return Some(Err(FormatError::Fastq("truncated record: missing separator line".into()))),
        };
        if !separator.trim_end_matches('\r').starts_with('+') {
            return Some(Err(FormatError::Fastq(format!(
                "expected separator line starting with '+', got {separator:?}"
            ))));
        }

        let quality = match self.next_line() {
            Some(Ok(line)) => line.trim_end_matches('\r').to_string(),
            Some(Err(e)) => return Some(Err(e)),
            None => return Some(Err(FormatError::Fastq("truncated record: missing quality line".into()))),
        };

        if quality.len() != sequence.len() {
            return Some(Err(FormatError::Fastq(format!(
                "quality line length {} does not match sequence length {}",
                quality.len(),
                sequence.len()
            ))));
        }

        Some(Ok(FastqRecord { id, sequence, quality }))
    }
}
