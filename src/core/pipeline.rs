/// The generation pipeline: request → result orchestration.
///
/// Wires together validation, seed derivation, classification, season
/// lookup, template rendering and result assembly.
use chrono::Datelike;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::core::classify::classify;
use crate::core::clock::{Clock, SystemClock};
use crate::core::season::season_word;
use crate::core::seed::derive_seed;
use crate::core::template::{RenderedTexts, TemplateError, TemplateSet};
use crate::core::validate::{validate_request, ValidationError};
use crate::schema::category::Category;
use crate::schema::request::{GenerationRequest, OutputMode};
use crate::schema::result::GenerationResult;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// A state validation should have ruled out. Indicates a defect, not
    /// bad input.
    #[error("internal invariant violated: {0}")]
    Invariant(String),
}

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("template error: {0}")]
    Template(#[from] TemplateError),
    #[error("template set is missing categories: {0}")]
    IncompleteTemplates(String),
}

/// The top-level writer. Built via `SeedWriter::builder()`.
pub struct SeedWriter {
    templates: TemplateSet,
    clock: Box<dyn Clock>,
}

/// Builder for constructing a `SeedWriter`.
pub struct SeedWriterBuilder {
    templates_path: Option<PathBuf>,
    /// Directly provided templates (for testing without files).
    templates: Option<TemplateSet>,
    clock: Option<Box<dyn Clock>>,
}

impl SeedWriter {
    pub fn builder() -> SeedWriterBuilder {
        SeedWriterBuilder {
            templates_path: None,
            templates: None,
            clock: None,
        }
    }

    pub fn templates(&self) -> &TemplateSet {
        &self.templates
    }

    /// Run one request through the pipeline. Either every stage succeeds
    /// or nothing is produced.
    pub fn generate(&self, request: &GenerationRequest) -> Result<GenerationResult, GenerateError> {
        let today = self.clock.today();
        let validated = validate_request(request, today)?;

        let seed_digest = derive_seed(
            validated.phonetic_reading,
            validated.date_of_birth,
            validated.reference_date,
            today,
        );
        let category = classify(validated.phonetic_reading, validated.date_of_birth);
        let season = season_word(validated.date_of_birth.month())
            .map_err(|e| GenerateError::Invariant(e.to_string()))?;
        let texts = self
            .templates
            .render(category, season, validated.use_archaic_form)
            .map_err(|e| GenerateError::Invariant(e.to_string()))?;

        debug!(
            category = category.key(),
            season,
            mode = ?validated.output_mode,
            archaic = validated.use_archaic_form,
            "generated"
        );

        Ok(assemble(
            category,
            seed_digest,
            season,
            texts,
            validated.output_mode,
        ))
    }
}

/// Build the result, keeping only the texts `mode` asks for.
fn assemble(
    category: Category,
    seed_digest: String,
    season: &str,
    texts: RenderedTexts,
    mode: OutputMode,
) -> GenerationResult {
    GenerationResult {
        category_index: category.index(),
        category_label: category.label().to_string(),
        seed_digest,
        season_word: season.to_string(),
        name_only_text: mode.includes_name_only().then_some(texts.name_only),
        merged_text: mode.includes_merged().then_some(texts.merged),
    }
}

impl SeedWriterBuilder {
    /// Override file merged over the base templates.
    pub fn templates_path(mut self, path: impl AsRef<Path>) -> Self {
        self.templates_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Provide templates directly, replacing the built-in set.
    pub fn with_templates(mut self, templates: TemplateSet) -> Self {
        self.templates = Some(templates);
        self
    }

    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Some(Box::new(clock));
        self
    }

    pub fn build(self) -> Result<SeedWriter, BuildError> {
        let mut templates = match self.templates {
            Some(templates) => templates,
            None => TemplateSet::builtin()?,
        };

        if let Some(ref path) = self.templates_path {
            templates.merge(TemplateSet::load_from_ron(path)?);
        }

        let missing = templates.missing_categories();
        if !missing.is_empty() {
            let keys: Vec<&str> = missing.iter().map(|c| c.key()).collect();
            return Err(BuildError::IncompleteTemplates(keys.join(", ")));
        }

        Ok(SeedWriter {
            templates,
            clock: self.clock.unwrap_or_else(|| Box::new(SystemClock)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::FixedClock;
    use crate::core::template::{MAX_CHARS, MIN_CHARS};
    use crate::schema::request::Field;
    use chrono::NaiveDate;

    fn build_test_writer() -> SeedWriter {
        SeedWriter::builder()
            .clock(FixedClock(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()))
            .build()
            .unwrap()
    }

    fn tanaka() -> GenerationRequest {
        GenerationRequest::new("田中", "たなか", "1990-05-01").with_reference_date("2024-01-01")
    }

    #[test]
    fn generate_worked_example() {
        let writer = build_test_writer();
        let result = writer.generate(&tanaka()).unwrap();

        assert_eq!(result.category_index, 4);
        assert_eq!(result.category_label, "ロジカ(理)");
        assert_eq!(result.season_word, "初夏");
        assert_eq!(
            result.seed_digest,
            "f86b1d7545b63af376441381374b69c727ca850e82fb66346cb685817f973926"
        );
        let name_only = result.name_only_text.unwrap();
        let merged = result.merged_text.unwrap();
        assert!(name_only.starts_with("枠を引く。順序を整え、無駄を削る。"));
        assert!(merged.starts_with("初夏に構造を敷く。要点三つで進路を描く。"));
        for text in [&name_only, &merged] {
            assert!((MIN_CHARS..=MAX_CHARS).contains(&text.chars().count()));
        }
    }

    #[test]
    fn generate_deterministic() {
        let a = build_test_writer().generate(&tanaka()).unwrap();
        let b = build_test_writer().generate(&tanaka()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn missing_reference_date_uses_clock() {
        let writer = build_test_writer();
        let implicit = writer
            .generate(&GenerationRequest::new("田中", "たなか", "1990-05-01"))
            .unwrap();
        let explicit = writer
            .generate(&GenerationRequest::new("田中", "たなか", "1990-05-01").with_reference_date("2024-06-15"))
            .unwrap();
        assert_eq!(implicit.seed_digest, explicit.seed_digest);
    }

    #[test]
    fn output_modes_filter_texts() {
        let writer = build_test_writer();

        let name_only = writer
            .generate(&tanaka().with_output_mode(OutputMode::NameOnly))
            .unwrap();
        assert!(name_only.name_only_text.is_some());
        assert!(name_only.merged_text.is_none());

        let merged = writer
            .generate(&tanaka().with_output_mode(OutputMode::Merged))
            .unwrap();
        assert!(merged.name_only_text.is_none());
        assert!(merged.merged_text.is_some());

        let both = writer.generate(&tanaka()).unwrap();
        assert!(both.name_only_text.is_some() && both.merged_text.is_some());
    }

    #[test]
    fn validation_failure_produces_no_result() {
        let writer = build_test_writer();
        let err = writer
            .generate(&GenerationRequest::new("田中", "tanaka", "1990-05-01"))
            .unwrap_err();
        assert!(matches!(
            err,
            GenerateError::Validation(ValidationError { field: Field::PhoneticReading, .. })
        ));
    }

    #[test]
    fn builder_rejects_incomplete_templates() {
        let partial = TemplateSet::parse_ron(
            r#"{ "silence": Templates(name_only: "a", merged: "{season}") }"#,
        )
        .unwrap();
        let err = SeedWriter::builder().with_templates(partial).build().err().unwrap();
        match err {
            BuildError::IncompleteTemplates(keys) => {
                assert_eq!(keys, "boost, inner, outer, logica, emotive")
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn builder_merges_override_file() {
        let writer = SeedWriter::builder()
            .templates_path("tests/fixtures/partial_templates.ron")
            .clock(FixedClock(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()))
            .build()
            .unwrap();
        let silence = writer.templates().get(Category::Silence).unwrap();
        assert_eq!(silence.name_only.render(""), "今日は静けさを味方に。");
        assert!(writer.templates().missing_categories().is_empty());
    }

    #[test]
    fn builder_missing_override_file_fails() {
        let result = SeedWriter::builder()
            .templates_path("tests/fixtures/does_not_exist.ron")
            .build();
        assert!(matches!(result, Err(BuildError::Template(TemplateError::Io(_)))));
    }
}
