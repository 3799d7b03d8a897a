use serde::{Deserialize, Serialize};

/// The assembled output of one generation.
///
/// The two text fields are present according to the request's output mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub category_index: usize,
    pub category_label: String,
    /// Lowercase hex SHA-256; opaque to callers.
    pub seed_digest: String,
    pub season_word: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_only_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merged_text: Option<String>,
}
