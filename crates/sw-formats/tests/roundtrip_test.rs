use std::io::Cursor;

use sw_formats::fasta::{extract_fasta_sequence, id_token};
use sw_formats::fastq::FastqReader;

const QUERY_FASTA: &str = ">ref1 demo reference\nACGTACGTACGT\nACGTACGT\n";

const READS_FASTQ: &str = "\
@read1 machine:lane:tile\nACGTACGT\n+\nIIIIIIII\n\
@read2\nTTTTACGT\n+read2\nHHHHHHHH\n";

#[test]
fn test_fasta_query_extraction_matches_id_token() {
    let record = extract_fasta_sequence(QUERY_FASTA).unwrap();
    assert_eq!(record.sequence, "ACGTACGTACGTACGTACGT");
    assert_eq!(id_token(&record.id), "ref1");
}

#[test]
fn test_fastq_reader_drains_all_records_in_order() {
    let reader = FastqReader::new(Cursor::new(READS_FASTQ));
    let records: Vec<_> = reader.map(|r| r.unwrap()).collect();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id, "@read1 machine:lane:tile");
    assert_eq!(records[0].sequence, "ACGTACGT");
    assert_eq!(records[1].id, "@read2");
    assert_eq!(records[1].quality, "HHHHHHHH");
}
