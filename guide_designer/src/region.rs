// src/region.rs

use crate::errors::{DesignError, Result};

/// Extracts the 1-based inclusive coordinate range `start..=end` from the
/// sequence. The CLI already enforces `end > start`, but this function is
/// the enforcement boundary and re-validates the whole
/// `1 <= start < end <= len` invariant itself.
pub fn extract_region(sequence: &str, start: usize, end: usize) -> Result<String> {
    if start < 1 || end > sequence.len() {
        return Err(DesignError::OutOfRange {
            start,
            end,
            length: sequence.len(),
        });
    }
    if start >= end {
        return Err(DesignError::InvalidParameter(format!(
            "region start {} must be less than region end {}",
            start, end
        )));
    }
    Ok(sequence[start - 1..end].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_inclusive_range() {
        let region = extract_region("AUGCGAUC", 2, 5).unwrap();
        assert_eq!(region, "UGCG");
        assert_eq!(region.len(), 5 - 2 + 1);
    }

    #[test]
    fn full_range_returns_whole_sequence() {
        let seq = "AUGCGAUC";
        assert_eq!(extract_region(seq, 1, seq.len()).unwrap(), seq);
    }

    #[test]
    fn start_zero_is_out_of_range() {
        let err = extract_region("AUGC", 0, 3).unwrap_err();
        assert!(matches!(
            err,
            DesignError::OutOfRange { start: 0, end: 3, length: 4 }
        ));
    }

    #[test]
    fn end_past_sequence_is_out_of_range() {
        let err = extract_region("AUGC", 1, 5).unwrap_err();
        assert!(matches!(err, DesignError::OutOfRange { length: 4, .. }));
    }

    #[test]
    fn inverted_range_is_a_typed_error_not_a_panic() {
        let err = extract_region("AUGC", 4, 2).unwrap_err();
        assert!(matches!(err, DesignError::InvalidParameter(_)));
    }

    #[test]
    fn start_equal_to_end_is_rejected() {
        let err = extract_region("AUGC", 2, 2).unwrap_err();
        assert!(matches!(err, DesignError::InvalidParameter(_)));
    }
}
