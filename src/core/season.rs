/// Month → season word lookup.
use thiserror::Error;

/// Season word per calendar month, January first.
const SEASON_WORDS: [&str; 12] = [
    "冬", "冬", "春", "春", "初夏", "夏", "夏", "晩夏", "秋", "秋", "初冬", "冬",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeasonError {
    #[error("month out of range: {0}")]
    MonthOutOfRange(u32),
}

pub fn season_word(month: u32) -> Result<&'static str, SeasonError> {
    month
        .checked_sub(1)
        .and_then(|i| SEASON_WORDS.get(i as usize))
        .copied()
        .ok_or(SeasonError::MonthOutOfRange(month))
}

/// Every distinct season word, in first-appearance order.
pub fn all_season_words() -> Vec<&'static str> {
    let mut words: Vec<&'static str> = Vec::new();
    for word in SEASON_WORDS {
        if !words.contains(&word) {
            words.push(word);
        }
    }
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_covers_every_month() {
        assert_eq!(season_word(1).unwrap(), "冬");
        assert_eq!(season_word(5).unwrap(), "初夏");
        assert_eq!(season_word(8).unwrap(), "晩夏");
        assert_eq!(season_word(11).unwrap(), "初冬");
        assert_eq!(season_word(12).unwrap(), "冬");
    }

    #[test]
    fn out_of_range_months_fail() {
        assert_eq!(season_word(0), Err(SeasonError::MonthOutOfRange(0)));
        assert_eq!(season_word(13), Err(SeasonError::MonthOutOfRange(13)));
    }

    #[test]
    fn distinct_words() {
        assert_eq!(
            all_season_words(),
            vec!["冬", "春", "初夏", "夏", "晩夏", "秋", "初冬"]
        );
    }
}
