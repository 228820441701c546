//! Product labels.
//!
//! Products are addressed by column index inside the engine and by a
//! letter label for display: `A..Z` for the first 26, then the letter
//! cycle repeats with a numeric suffix (`A2..Z2`, `A3..`).
//!
//! | Index | Label |
//! |-------|-------|
//! | 0 | A |
//! | 25 | Z |
//! | 26 | A2 |
//! | 51 | Z2 |
//! | 52 | A3 |

/// Separator placed between labels in a sequence string.
pub const SEQUENCE_SEPARATOR: &str = "->";

const ALPHABET_LEN: usize = 26;

/// Converts a product index to its label.
pub fn encode_index(idx: usize) -> String {
    let letter = char::from(b'A' + (idx % ALPHABET_LEN) as u8);
    if idx < ALPHABET_LEN {
        letter.to_string()
    } else {
        format!("{letter}{}", idx / ALPHABET_LEN + 1)
    }
}

/// Joins the labels of `indices` with `->`, preserving order.
///
/// ```
/// use u_sequence::labels::encode_sequence;
///
/// assert_eq!(encode_sequence(&[0, 1, 2, 3]), "A->B->C->D");
/// ```
pub fn encode_sequence(indices: &[usize]) -> String {
    indices
        .iter()
        .map(|&idx| encode_index(idx))
        .collect::<Vec<_>>()
        .join(SEQUENCE_SEPARATOR)
}

/// Parses a label back into a product index.
///
/// Returns `None` for anything [`encode_index`] cannot produce
/// (lowercase letters, suffix `0` or `1`, leading zeros).
pub fn decode_label(label: &str) -> Option<usize> {
    let mut chars = label.chars();
    let letter = chars.next()?;
    if !letter.is_ascii_uppercase() {
        return None;
    }
    let offset = (letter as u8 - b'A') as usize;

    let suffix = chars.as_str();
    if suffix.is_empty() {
        return Some(offset);
    }
    if suffix.starts_with('0') || !suffix.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let cycle: usize = suffix.parse().ok()?;
    if cycle < 2 {
        return None;
    }
    (cycle - 1)
        .checked_mul(ALPHABET_LEN)?
        .checked_add(offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_letters() {
        assert_eq!(encode_index(0), "A");
        assert_eq!(encode_index(1), "B");
        assert_eq!(encode_index(25), "Z");
    }

    #[test]
    fn test_suffixed_labels() {
        assert_eq!(encode_index(26), "A2");
        assert_eq!(encode_index(27), "B2");
        assert_eq!(encode_index(51), "Z2");
        assert_eq!(encode_index(52), "A3");
        assert_eq!(encode_index(26 * 10 + 3), "D11");
    }

    #[test]
    fn test_encode_sequence() {
        assert_eq!(encode_sequence(&[0, 1, 2, 3, 4, 5]), "A->B->C->D->E->F");
        assert_eq!(encode_sequence(&[2, 26, 0]), "C->A2->A");
        assert_eq!(encode_sequence(&[7]), "H");
    }

    #[test]
    fn test_decode_label() {
        assert_eq!(decode_label("A"), Some(0));
        assert_eq!(decode_label("Z"), Some(25));
        assert_eq!(decode_label("A2"), Some(26));
        assert_eq!(decode_label("Z2"), Some(51));
        assert_eq!(decode_label("A3"), Some(52));
    }

    #[test]
    fn test_decode_rejects_foreign_labels() {
        assert_eq!(decode_label(""), None);
        assert_eq!(decode_label("a"), None);
        assert_eq!(decode_label("A1"), None);
        assert_eq!(decode_label("A0"), None);
        assert_eq!(decode_label("A02"), None);
        assert_eq!(decode_label("AB"), None);
        assert_eq!(decode_label("A-2"), None);
    }

    #[test]
    fn test_decode_inverts_encode() {
        for idx in 0..2_000 {
            assert_eq!(decode_label(&encode_index(idx)), Some(idx));
        }
    }
}
