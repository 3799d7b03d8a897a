/// Type classification: `(mora count + birth-date digit sum) mod 6`.
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::validate::PHONETIC_CLASS;
use crate::schema::category::Category;

static PHONETIC_CHAR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(PHONETIC_CLASS).expect("valid regex"));

/// Count reading characters, skipping word separators.
pub fn mora_count(reading: &str) -> usize {
    PHONETIC_CHAR_RE.find_iter(reading).count()
}

/// Sum of the eight digits of `YYYYMMDD`.
pub fn digit_sum(date_of_birth: NaiveDate) -> u32 {
    date_of_birth
        .format("%Y%m%d")
        .to_string()
        .chars()
        .filter_map(|c| c.to_digit(10))
        .sum()
}

pub fn classify(reading: &str, date_of_birth: NaiveDate) -> Category {
    let index = (mora_count(reading) + digit_sum(date_of_birth) as usize) % Category::COUNT;
    Category::ALL[index]
}
