use serde::{Deserialize, Serialize};

/// The six fixed types a person can be sorted into.
///
/// Declaration order is the type index: `Silence` is 0, `Emotive` is 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Silence,
    Boost,
    Inner,
    Outer,
    Logica,
    Emotive,
}

impl Category {
    /// All categories in index order.
    pub const ALL: [Category; 6] = [
        Self::Silence,
        Self::Boost,
        Self::Inner,
        Self::Outer,
        Self::Logica,
        Self::Emotive,
    ];

    /// Number of categories; the classifier reduces modulo this.
    pub const COUNT: usize = Self::ALL.len();

    pub fn from_index(index: usize) -> Option<Category> {
        Self::ALL.get(index).copied()
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Display label shown to end users (e.g., "ロジカ(理)").
    pub fn label(&self) -> &'static str {
        match self {
            Self::Silence => "サイレンス(静)",
            Self::Boost => "ブースト(動)",
            Self::Inner => "インナー(内)",
            Self::Outer => "アウター(外)",
            Self::Logica => "ロジカ(理)",
            Self::Emotive => "エモティブ(情)",
        }
    }

    /// Key used for this category in template RON files (e.g., "logica").
    pub fn key(&self) -> &'static str {
        match self {
            Self::Silence => "silence",
            Self::Boost => "boost",
            Self::Inner => "inner",
            Self::Outer => "outer",
            Self::Logica => "logica",
            Self::Emotive => "emotive",
        }
    }

    pub fn from_key(key: &str) -> Option<Category> {
        Self::ALL.into_iter().find(|c| c.key() == key)
    }
}
