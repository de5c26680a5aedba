//! FASTA query extraction.
//!
//! Only the full-sequence extraction variant is implemented (the one the
//! driver actually uses): a single identifier line followed by one or more
//! sequence lines, terminated by the next identifier line or a blank line.

use crate::FormatError;

/// A single extracted FASTA sequence. `id` retains its leading `>` exactly
/// as stored in the file; callers strip it when they need the bare token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaRecord {
    pub id: String,
    pub sequence: String,
}

/// Extract the first sequence from a FASTA document.
pub fn extract_fasta_sequence(input: &str) -> Result<FastaRecord, FormatError> {
    let mut id: Option<String> = None;
    let mut sequence = String::new();

    for raw_line in input.lines() {
        let line = raw_line.trim_end_matches('\r');

        if line.starts_with('>') {
            if id.is_some() {
                // Next record begins; the first sequence is complete.
                break;
            }
            id = Some(line.to_string());
            continue;
        }

        if id.is_none() {
            // Nothing before the first identifier line is meaningful.
            continue;
        }

        if line.is_empty() {
            break;
        }

        if line.starts_with(';') {
            continue;
        }

        sequence.push_str(line);
    }

    let id = id.ok_or_else(|| FormatError::Fasta("no identifier line found".to_string()))?;

    if sequence.is_empty() {
        return Err(FormatError::Fasta("no sequence data found".to_string()));
    }

    Ok(FastaRecord { id, sequence })
}

/// Strip the leading `>` from an identifier line, then take the first
/// whitespace-delimited token.
pub fn id_token(id: &str) -> &str {
    let stripped = id.strip_prefix('>').unwrap_or(id);
    stripped.split_whitespace().next().unwrap_or(stripped)
}
