/// Input validation — reading script and birth-date range checks.
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::schema::request::{Field, GenerationRequest, OutputMode};

/// Character class for one reading character: hiragana, the long-vowel
/// mark and the small tsu. Shared with the classifier's mora count.
pub(crate) const PHONETIC_CLASS: &str = "[ぁ-ゖーっ]";

const READING_REASON: &str = "ふりがなは ひらがな/長音/促音 のみ";
const DATE_FORMAT_REASON: &str = "YYYY-MM-DD 形式の日付が必要";
const DATE_RANGE_REASON: &str = "1900-01-01〜今日の範囲";

/// One or more words of reading characters, separated by single
/// whitespace characters.
static READING_RE: Lazy<Regex> = Lazy::new(|| {
    let pattern = format!(r"^{c}+(?:\s{c}+)*$", c = PHONETIC_CLASS);
    Regex::new(&pattern).expect("valid regex")
});

static ISO_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("valid regex"));

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {field}: {reason}")]
pub struct ValidationError {
    pub field: Field,
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: Field, reason: &str) -> Self {
        Self {
            field,
            reason: reason.to_string(),
        }
    }
}

/// A request whose fields passed validation, with dates parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRequest<'a> {
    pub phonetic_reading: &'a str,
    pub date_of_birth: NaiveDate,
    pub reference_date: Option<NaiveDate>,
    pub use_archaic_form: bool,
    pub output_mode: OutputMode,
}

/// Earliest accepted date of birth.
pub fn earliest_birth_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1900, 1, 1).expect("valid constant date")
}

/// Validate every constrained field of `request`. `today` is the upper
/// bound for the date of birth; the reference date does not move it.
pub fn validate_request(
    request: &GenerationRequest,
    today: NaiveDate,
) -> Result<ValidatedRequest<'_>, ValidationError> {
    validate_reading(&request.phonetic_reading)?;
    let date_of_birth = validate_birth_date(&request.date_of_birth, today)?;
    let reference_date = request
        .reference_date
        .as_deref()
        .map(|raw| parse_iso_date(Field::ReferenceDate, raw))
        .transpose()?;

    Ok(ValidatedRequest {
        phonetic_reading: &request.phonetic_reading,
        date_of_birth,
        reference_date,
        use_archaic_form: request.use_archaic_form,
        output_mode: request.output_mode,
    })
}

pub fn validate_reading(reading: &str) -> Result<(), ValidationError> {
    if READING_RE.is_match(reading) {
        Ok(())
    } else {
        Err(ValidationError::new(Field::PhoneticReading, READING_REASON))
    }
}

pub fn validate_birth_date(raw: &str, today: NaiveDate) -> Result<NaiveDate, ValidationError> {
    let date = parse_iso_date(Field::DateOfBirth, raw)?;
    if date < earliest_birth_date() || date > today {
        return Err(ValidationError::new(Field::DateOfBirth, DATE_RANGE_REASON));
    }
    Ok(date)
}

/// Parse a strict, zero-padded `YYYY-MM-DD` date.
pub fn parse_iso_date(field: Field, raw: &str) -> Result<NaiveDate, ValidationError> {
    if !ISO_DATE_RE.is_match(raw) {
        return Err(ValidationError::new(field, DATE_FORMAT_REASON));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| ValidationError::new(field, DATE_FORMAT_REASON))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn reading_accepts_hiragana_marks_and_single_spaces() {
        assert!(validate_reading("たなか").is_ok());
        assert!(validate_reading("らーめん").is_ok());
        assert!(validate_reading("きっさ").is_ok());
        assert!(validate_reading("やまだ たろう").is_ok());
        assert!(validate_reading("やまだ\u{3000}たろう").is_ok());
    }

    #[test]
    fn reading_rejects_other_scripts_and_digits() {
        for bad in ["tanaka", "タナカ", "田中", "たなか1", "たなか!", "たなaか", ""] {
            let err = validate_reading(bad).unwrap_err();
            assert_eq!(err.field, Field::PhoneticReading, "input: {bad}");
        }
    }

    #[test]
    fn reading_rejects_edge_and_repeated_separators() {
        assert!(validate_reading(" たなか").is_err());
        assert!(validate_reading("たなか ").is_err());
        assert!(validate_reading("やまだ  たろう").is_err());
    }

    #[test]
    fn birth_date_range_is_inclusive() {
        assert!(validate_birth_date("1900-01-01", today()).is_ok());
        assert!(validate_birth_date("2024-06-15", today()).is_ok());

        let early = validate_birth_date("1899-12-31", today()).unwrap_err();
        assert_eq!(early.reason, DATE_RANGE_REASON);
        let future = validate_birth_date("2024-06-16", today()).unwrap_err();
        assert_eq!(future.field, Field::DateOfBirth);
    }

    #[test]
    fn birth_date_must_be_strict_iso() {
        for bad in ["1990-5-1", "19900501", "1990/05/01", "1990-02-30", " 1990-05-01", "１９９０-05-01"] {
            let err = validate_birth_date(bad, today()).unwrap_err();
            assert_eq!(err.reason, DATE_FORMAT_REASON, "input: {bad}");
        }
    }

    #[test]
    fn reference_date_is_parsed_but_not_range_checked() {
        let mut req = GenerationRequest::new("田中", "たなか", "1990-05-01");
        req.reference_date = Some("2099-01-01".to_string());
        let validated = validate_request(&req, today()).unwrap();
        assert_eq!(validated.reference_date, NaiveDate::from_ymd_opt(2099, 1, 1));

        req.reference_date = Some("tomorrow".to_string());
        let err = validate_request(&req, today()).unwrap_err();
        assert_eq!(err.field, Field::ReferenceDate);
    }

    #[test]
    fn error_message_names_the_field() {
        let err = validate_reading("abc").unwrap_err();
        assert!(err.to_string().starts_with("invalid phonetic_reading:"));
    }
}
