//! Content metrics computed on the markdown source.

/// Average reading speed in words per minute.
const WORDS_PER_MINUTE: usize = 215;

/// Number of whitespace-separated tokens.
pub fn word_count(source: &str) -> usize {
    source.split_whitespace().count()
}

/// Estimated reading time, rounded to the nearest minute and at least 1.
pub fn reading_time_minutes(words: usize) -> usize {
    // WORDS_PER_MINUTE is odd, so there is never an exact half to round
    ((words + WORDS_PER_MINUTE / 2) / WORDS_PER_MINUTE).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_word_count() {
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("  one\ttwo\n\nthree  "), 3);
        assert_eq!(word_count("{~ alert ~}Hi{~~}"), 3);
    }

    #[test]
    fn test_reading_time_minimum() {
        assert_eq!(reading_time_minutes(0), 1);
        assert_eq!(reading_time_minutes(100), 1);
    }

    #[test]
    fn test_reading_time_rounding() {
        assert_eq!(reading_time_minutes(322), 1);
        assert_eq!(reading_time_minutes(323), 2);
        assert_eq!(reading_time_minutes(430), 2);
        assert_eq!(reading_time_minutes(2150), 10);
    }
}
