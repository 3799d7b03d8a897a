use serde::{Deserialize, Serialize};
use std::fmt;

/// Which rendered texts a result should carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputMode {
    NameOnly,
    Merged,
    #[default]
    Both,
}

impl OutputMode {
    pub fn includes_name_only(&self) -> bool {
        matches!(self, Self::NameOnly | Self::Both)
    }

    pub fn includes_merged(&self) -> bool {
        matches!(self, Self::Merged | Self::Both)
    }
}

/// Request fields that validation can reject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    PhoneticReading,
    DateOfBirth,
    ReferenceDate,
}

impl Field {
    pub fn name(&self) -> &'static str {
        match self {
            Self::PhoneticReading => "phonetic_reading",
            Self::DateOfBirth => "date_of_birth",
            Self::ReferenceDate => "reference_date",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single generation request, as received from a caller.
///
/// Dates stay as strings here; the validator owns parsing them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Display name. Not used by the pipeline.
    pub name: String,
    /// Hiragana reading, optionally several words separated by single spaces.
    pub phonetic_reading: String,
    /// `YYYY-MM-DD`.
    pub date_of_birth: String,
    #[serde(default)]
    pub use_archaic_form: bool,
    /// Informational only.
    #[serde(default = "default_romanization")]
    pub romanization: String,
    /// `YYYY-MM-DD`; the clock's current date when absent.
    #[serde(default)]
    pub reference_date: Option<String>,
    #[serde(default)]
    pub output_mode: OutputMode,
}

fn default_romanization() -> String {
    "hepburn".to_string()
}

impl GenerationRequest {
    /// A request with default options for the given reading and birth date.
    pub fn new(name: &str, phonetic_reading: &str, date_of_birth: &str) -> Self {
        Self {
            name: name.to_string(),
            phonetic_reading: phonetic_reading.to_string(),
            date_of_birth: date_of_birth.to_string(),
            use_archaic_form: false,
            romanization: default_romanization(),
            reference_date: None,
            output_mode: OutputMode::default(),
        }
    }

    pub fn with_reference_date(mut self, date: &str) -> Self {
        self.reference_date = Some(date.to_string());
        self
    }

    pub fn with_output_mode(mut self, mode: OutputMode) -> Self {
        self.output_mode = mode;
        self
    }

    pub fn with_archaic_form(mut self, archaic: bool) -> Self {
        self.use_archaic_form = archaic;
        self
    }
}
