//! Shared formatting utilities.

/// Format a number with thousand separators.
pub fn format_number(n: usize) -> String {
    let digits: Vec<char> = n.to_string().chars().collect();
    let mut groups: Vec<String> = digits
        .rchunks(3)
        .map(|chunk| chunk.iter().collect())
        .collect();
    groups.reverse();
    groups.join(",")
}

/// Human-readable character count, e.g. `4,230 chars`.
pub fn char_count_label(n: usize) -> String {
    format!("{} chars", format_number(n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(48234), "48,234");
        assert_eq!(format_number(1234567), "1,234,567");
    }

    #[test]
    fn test_char_count_label() {
        assert_eq!(char_count_label(4230), "4,230 chars");
    }
}
