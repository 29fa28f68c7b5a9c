/// Returns the character index of the first occurrence of `needle` in `haystack`.
///
/// Positions are counted in Unicode scalar values, so `"银行"` in `"浦发银行"` is at 2.
pub fn find_char_position(haystack: &str, needle: &str) -> Option<usize> {
    haystack
        .find(needle)
        .map(|byte_index| haystack[..byte_index].chars().count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_position() {
        assert_eq!(find_char_position("600036", "00"), Some(1));
    }

    #[test]
    fn test_multibyte_position() {
        assert_eq!(find_char_position("浦发银行", "银行"), Some(2));
    }

    #[test]
    fn test_first_occurrence_only() {
        assert_eq!(find_char_position("银行银行", "银行"), Some(0));
    }

    #[test]
    fn test_no_match() {
        assert_eq!(find_char_position("平安银行", "招商"), None);
    }
}
