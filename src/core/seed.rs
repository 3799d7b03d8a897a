/// Daily seed derivation.
use chrono::NaiveDate;
use sha2::{Digest, Sha256};

/// Hash `reading|date_of_birth|reference_date` with SHA-256 and return the
/// lowercase hex digest (64 characters). An absent reference date falls
/// back to `today`.
///
/// The digest is handed to callers as an opaque per-person, per-day token;
/// nothing downstream reads it.
pub fn derive_seed(
    reading: &str,
    date_of_birth: NaiveDate,
    reference_date: Option<NaiveDate>,
    today: NaiveDate,
) -> String {
    let reference_date = reference_date.unwrap_or(today);
    let material = format!(
        "{}|{}|{}",
        reading,
        date_of_birth.format("%Y-%m-%d"),
        reference_date.format("%Y-%m-%d")
    );
    hex::encode(Sha256::digest(material.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn digest_matches_known_value() {
        let seed = derive_seed("たなか", date(1990, 5, 1), Some(date(2024, 1, 1)), date(2030, 1, 1));
        assert_eq!(
            seed,
            "f86b1d7545b63af376441381374b69c727ca850e82fb66346cb685817f973926"
        );
    }

    #[test]
    fn digest_is_lowercase_hex_of_fixed_length() {
        let seed = derive_seed("やまだ たろう", date(2000, 12, 31), None, date(2025, 6, 15));
        assert_eq!(seed.len(), 64);
        assert!(seed.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        assert_eq!(
            seed,
            "3bed47c0285d8965d78d78d264fc0f0b78e292944399f718ab7ef1767dba82c0"
        );
    }

    #[test]
    fn missing_reference_date_uses_today() {
        let explicit = derive_seed("たなか", date(1990, 5, 1), Some(date(2024, 1, 2)), date(2024, 1, 1));
        let fallback = derive_seed("たなか", date(1990, 5, 1), None, date(2024, 1, 2));
        assert_eq!(explicit, fallback);
    }

    #[test]
    fn reference_date_changes_digest() {
        let a = derive_seed("たなか", date(1990, 5, 1), Some(date(2024, 1, 1)), date(2024, 1, 1));
        let b = derive_seed("たなか", date(1990, 5, 1), Some(date(2024, 1, 2)), date(2024, 1, 1));
        assert_ne!(a, b);
        assert_eq!(
            b,
            "9b4d3253606e62250c7bbe77900e3ddfaff072a2bb87940e5bb8470193eafe2c"
        );
    }
}
