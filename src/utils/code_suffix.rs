use crate::constants::CODE_SUFFIX_LEN;

/// Normalizes a code for watchlist comparison: trimmed, uppercased, last
/// `CODE_SUFFIX_LEN` characters.
pub fn code_suffix(code: &str) -> String {
    let normalized: Vec<char> = code.trim().to_uppercase().chars().collect();
    let start = normalized.len().saturating_sub(CODE_SUFFIX_LEN);

    normalized[start..].iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exchange_prefix_is_dropped() {
        assert_eq!(code_suffix("sh600000"), "600000");
    }

    #[test]
    fn test_short_code_is_kept_whole() {
        assert_eq!(code_suffix(" ab1 "), "AB1");
    }
}
