//! Wire shapes for the generate endpoint.

use serde::{Deserialize, Serialize};

use seed_writer::{GenerationRequest, GenerationResult, OutputMode};

/// Body of `POST /v1/generate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateBody {
    pub name_kanji: String,
    pub name_kana: String,
    pub dob: String,
    #[serde(default)]
    pub old_form: bool,
    #[serde(default = "default_romanization")]
    pub romanization: Option<String>,
    #[serde(default)]
    pub today: Option<String>,
    #[serde(default)]
    pub mode: OutputMode,
}

fn default_romanization() -> Option<String> {
    Some("hepburn".to_string())
}

impl From<GenerateBody> for GenerationRequest {
    fn from(body: GenerateBody) -> Self {
        GenerationRequest {
            name: body.name_kanji,
            phonetic_reading: body.name_kana,
            date_of_birth: body.dob,
            use_archaic_form: body.old_form,
            romanization: body.romanization.unwrap_or_else(|| "hepburn".to_string()),
            reference_date: body.today,
            output_mode: body.mode,
        }
    }
}

/// Result payload, keyed the way front-end clients read it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateData {
    pub type6_index: usize,
    pub type6_label: String,
    pub seed: String,
    pub season: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_only_40: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merged_40: Option<String>,
}

impl From<GenerationResult> for GenerateData {
    fn from(result: GenerationResult) -> Self {
        GenerateData {
            type6_index: result.category_index,
            type6_label: result.category_label,
            seed: result.seed_digest,
            season: result.season_word,
            name_only_40: result.name_only_text,
            merged_40: result.merged_text,
        }
    }
}

/// Success envelope: `{ "ok": true, "data": ... }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub ok: bool,
    pub data: T,
}

impl<T> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self { ok: true, data }
    }
}
