//! The EDNAFULL (NUC4.4) nucleotide substitution matrix.
//!
//! Values are the literal EMBOSS EDNAFULL table. The table is materialized
//! once at startup into a dense 90x90 array indexed by `b * 90 + a`, wide
//! enough to hold the highest-valued IUPAC code (`'Y' = 89`). Bytes outside
//! the recognized alphabet resolve to 0.

use std::sync::OnceLock;

const DIM: usize = 90;

/// One direction of each EDNAFULL pair; the table builder mirrors every
/// entry across the diagonal since the matrix is symmetric in value (not
/// in storage order -- see `score`).
const ENTRIES: &[(u8, u8, i64)] = &[
    (b'A', b'A', 5), (b'A', b'T', -4), (b'A', b'G', -4), (b'A', b'C', -4),
    (b'A', b'S', -4), (b'A', b'W', 1), (b'A', b'R', 1), (b'A', b'Y', -4),
    (b'A', b'K', -4), (b'A', b'M', 1), (b'A', b'B', -4), (b'A', b'V', -1),
    (b'A', b'H', -1), (b'A', b'D', -1), (b'A', b'N', -2),

    (b'T', b'T', 5), (b'T', b'G', -4), (b'T', b'C', -4), (b'T', b'S', -4),
    (b'T', b'W', 1), (b'T', b'R', -4), (b'T', b'Y', 1), (b'T', b'K', 1),
    (b'T', b'M', -4), (b'T', b'B', -1), (b'T', b'V', -4), (b'T', b'H', -1),
    (b'T', b'D', -1), (b'T', b'N', -2),

    (b'G', b'G', 5), (b'G', b'C', -4), (b'G', b'S', 1), (b'G', b'W', -4),
    (b'G', b'R', 1), (b'G', b'Y', -4), (b'G', b'K', 1), (b'G', b'M', -4),
    (b'G', b'B', -1), (b'G', b'V', -1), (b'G', b'H', -4), (b'G', b'D', -1),
    (b'G', b'N', -2),

    (b'C', b'C', 5), (b'C', b'S', 1), (b'C', b'W', -4), (b'C', b'R', -4),
    (b'C', b'Y', 1), (b'C', b'K', -4), (b'C', b'M', 1), (b'C', b'B', -1),
    (b'C', b'V', -1), (b'C', b'H', -1), (b'C', b'D', -4), (b'C', b'N', -2),

    (b'S', b'S', -1), (b'S', b'W', -4), (b'S', b'R', -2), (b'S', b'Y', -2),
    (b'S', b'K', -2), (b'S', b'M', -2), (b'S', b'B', -1), (b'S', b'V', -1),
    (b'S', b'H', -3), (b'S', b'D', -3), (b'S', b'N', -1),

    (b'W', b'W', -1), (b'W', b'R', -2), (b'W', b'Y', -2), (b'W', b'K', -2),
    (b'W', b'M', -2), (b'W', b'B', -3), (b'W', b'V', -3), (b'W', b'H', -1),
    (b'W', b'D', -1), (b'W', b'N', -1),

    (b'R', b'R', -1), (b'R', b'Y', -4), (b'R', b'K', -2), (b'R', b'M', -2),
    (b'R', b'B', -3), (b'R', b'V', -1), (b'R', b'H', -3), (b'R', b'D', -1),
    (b'R', b'N', -1),

    (b'Y', b'Y', -1), (b'Y', b'K', -2), (b'Y', b'M', -2), (b'Y', b'B', -1),
    (b'Y', b'V', -3), (b'Y', b'H', -1), (b'Y', b'D', -3), (b'Y', b'N', -1),

    (b'K', b'K', -1), (b'K', b'M', -4), (b'K', b'B', -1), (b'K', b'V', -3),
    (b'K', b'H', -3), (b'K', b'D', -1), (b'K', b'N', -1),

    (b'M', b'M', -1), (b'M', b'B', -3), (b'M', b'V', -1), (b'M', b'H', -1),
    (b'M', b'D', -3), (b'M', b'N', -1),

    (b'B', b'B', -1), (b'B', b'V', -2), (b'B', b'H', -2), (b'B', b'D', -2),
    (b'B', b'N', -1),

    (b'V', b'V', -1), (b'V', b'H', -2), (b'V', b'D', -2), (b'V', b'N', -1),

    (b'H', b'H', -1), (b'H', b'D', -2), (b'H', b'N', -1),

    (b'D', b'D', -1), (b'D', b'N', -1),

    (b'N', b'N', -1),
];

/// `U` (uracil, RNA) is not part of EDNAFULL proper; EMBOSS treats it as a
/// synonym of `T` when scoring. We derive its entries from `T`'s instead of
/// repeating the whole table.
fn with_u_synonym(entries: &[(u8, u8, i64)]) -> Vec<(u8, u8, i64)> {
    let mut out = entries.to_vec();
    for &(a, b, v) in entries {
        if a == b'T' {
            out.push((b'U', b, v));
        }
        if b == b'T' {
            out.push((a, b'U', v));
        }
    }
    out.push((b'U', b'U', 5));
    out
}

fn build() -> Vec<i64> {
    let mut table = vec![0i64; DIM * DIM];
    for (a, b, v) in with_u_synonym(ENTRIES) {
        let (ai, bi) = (a as usize, b as usize);
        table[bi * DIM + ai] = v;
        table[ai * DIM + bi] = v;
    }
    table
}

static TABLE: OnceLock<Vec<i64>> = OnceLock::new();

/// Score a pair of ASCII base codes under EDNAFULL. Unrecognized bytes
/// (including any byte `>= 90`, which covers the lowercase alphabet) score
/// 0; callers needing case-insensitive scoring must uppercase first.
pub fn score(a: u8, b: u8) -> i64 {
    let table = TABLE.get_or_init(build);
    let (ai, bi) = (a as usize, b as usize);
    if ai >= DIM || bi >= DIM {
        return 0;
    }
    table[bi * DIM + ai]
}
