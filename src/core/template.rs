/// Text templates — types, RON loading, rendering and length clamping.
use rustc_hash::FxHashMap;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

use crate::schema::category::Category;

/// Shortest rendered text; shorter strings are padded with [`FILLER`].
pub const MIN_CHARS: usize = 38;
/// Longest rendered text; longer strings are cut.
pub const MAX_CHARS: usize = 42;
/// Ideographic full stop.
pub const FILLER: char = '。';
/// Appended to merged text when the archaic form is requested.
pub const ARCHAIC_SUFFIX: &str = "（旧字体）";

const BUILTIN_TEMPLATES: &str = include_str!("../../template_data/type6.ron");

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("template parse error: {0}")]
    TemplateParse(String),
    #[error("unknown category key: {0}")]
    UnknownCategory(String),
    #[error("no templates for category: {0}")]
    MissingCategory(&'static str),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

/// A segment of a parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSegment {
    /// Literal text, emitted as-is.
    Literal(String),
    /// The `{season}` placeholder.
    Season,
}

/// A parsed template — a sequence of segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub segments: Vec<TemplateSegment>,
}

impl Template {
    /// Parse a template string into a sequence of segments.
    ///
    /// Syntax:
    /// - `{season}` → `Season`
    /// - `{{` / `}}` → literal `{` / `}`
    /// - Everything else → `Literal`
    pub fn parse(input: &str) -> Result<Template, TemplateError> {
        let mut segments = Vec::new();
        let mut literal_buf = String::new();
        let chars: Vec<char> = input.chars().collect();
        let len = chars.len();
        let mut i = 0;

        while i < len {
            match chars[i] {
                '{' if i + 1 < len && chars[i + 1] == '{' => {
                    literal_buf.push('{');
                    i += 2;
                }
                '{' => {
                    let start = i + 1;
                    let end = start
                        + chars[start..]
                            .iter()
                            .position(|c| *c == '}')
                            .ok_or_else(|| {
                                TemplateError::TemplateParse("unclosed brace".to_string())
                            })?;

                    let content: String = chars[start..end].iter().collect();
                    if content.contains('{') {
                        return Err(TemplateError::TemplateParse(
                            "nested braces are not allowed".to_string(),
                        ));
                    }
                    match content.as_str() {
                        "season" => {}
                        "" => {
                            return Err(TemplateError::TemplateParse(
                                "empty braces".to_string(),
                            ))
                        }
                        other => {
                            return Err(TemplateError::TemplateParse(format!(
                                "unknown placeholder '{other}'"
                            )))
                        }
                    }

                    if !literal_buf.is_empty() {
                        segments.push(TemplateSegment::Literal(std::mem::take(&mut literal_buf)));
                    }
                    segments.push(TemplateSegment::Season);
                    i = end + 1;
                }
                '}' if i + 1 < len && chars[i + 1] == '}' => {
                    literal_buf.push('}');
                    i += 2;
                }
                '}' => {
                    return Err(TemplateError::TemplateParse(
                        "unmatched closing brace".to_string(),
                    ));
                }
                c => {
                    literal_buf.push(c);
                    i += 1;
                }
            }
        }

        if !literal_buf.is_empty() {
            segments.push(TemplateSegment::Literal(literal_buf));
        }

        Ok(Template { segments })
    }

    pub fn has_season(&self) -> bool {
        self.segments.contains(&TemplateSegment::Season)
    }

    /// Substitute `season` for every placeholder.
    pub fn render(&self, season: &str) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                TemplateSegment::Literal(text) => out.push_str(text),
                TemplateSegment::Season => out.push_str(season),
            }
        }
        out
    }
}

/// The name-only and merged templates for one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTemplates {
    pub name_only: Template,
    pub merged: Template,
}

/// Both texts for one category, clamped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedTexts {
    pub name_only: String,
    pub merged: String,
}

/// Templates keyed by category.
#[derive(Debug, Clone, Default)]
pub struct TemplateSet {
    pub entries: FxHashMap<Category, CategoryTemplates>,
}

// RON files key entries by category name, so they go through an
// intermediate shape before parsing.
#[derive(Debug, Deserialize)]
#[serde(rename = "Templates")]
struct RonTemplates {
    name_only: String,
    merged: String,
}

impl TemplateSet {
    /// The templates compiled into the crate.
    pub fn builtin() -> Result<TemplateSet, TemplateError> {
        Self::parse_ron(BUILTIN_TEMPLATES)
    }

    /// Load a template set from a RON file.
    pub fn load_from_ron(path: &Path) -> Result<TemplateSet, TemplateError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_ron(&contents)
    }

    /// Parse a template set from a RON string. The set may be partial.
    pub fn parse_ron(input: &str) -> Result<TemplateSet, TemplateError> {
        let raw: HashMap<String, RonTemplates> = ron::from_str(input)?;
        let mut entries = FxHashMap::default();

        for (key, ron_templates) in raw {
            let category = Category::from_key(&key).ok_or(TemplateError::UnknownCategory(key))?;
            entries.insert(
                category,
                CategoryTemplates {
                    name_only: Template::parse(&ron_templates.name_only)?,
                    merged: Template::parse(&ron_templates.merged)?,
                },
            );
        }

        Ok(TemplateSet { entries })
    }

    /// Merge another template set into this one. Entries from `other`
    /// override entries in `self` for the same category.
    pub fn merge(&mut self, other: TemplateSet) {
        self.entries.extend(other.entries);
    }

    /// Categories with no templates, in index order.
    pub fn missing_categories(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|c| !self.entries.contains_key(c))
            .collect()
    }

    pub fn get(&self, category: Category) -> Option<&CategoryTemplates> {
        self.entries.get(&category)
    }

    /// Render both texts for `category`. The archaic-form suffix goes on
    /// the merged text only, before clamping.
    pub fn render(
        &self,
        category: Category,
        season: &str,
        use_archaic_form: bool,
    ) -> Result<RenderedTexts, TemplateError> {
        let templates = self
            .get(category)
            .ok_or(TemplateError::MissingCategory(category.key()))?;

        let name_only = templates.name_only.render(season);
        let mut merged = templates.merged.render(season);
        if use_archaic_form {
            merged.push_str(ARCHAIC_SUFFIX);
        }

        Ok(RenderedTexts {
            name_only: clamp(name_only),
            merged: clamp(merged),
        })
    }
}

/// Pad with [`FILLER`] while shorter than [`MIN_CHARS`], then cut to
/// [`MAX_CHARS`] if longer. Lengths count chars, not bytes.
pub fn clamp(mut text: String) -> String {
    let mut len = text.chars().count();
    while len < MIN_CHARS {
        text.push(FILLER);
        len += 1;
    }
    if len > MAX_CHARS {
        text.chars().take(MAX_CHARS).collect()
    } else {
        text
    }
}
