use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Lifecycle partition of a collection. Published files live directly in the
/// collection directory, drafts in its `drafts/` subdirectory.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Drafts,
    #[default]
    Published,
}

impl Stage {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Drafts => "drafts",
            Stage::Published => "published",
        }
    }

    /// Drafts tolerate incomplete front matter.
    #[must_use]
    pub fn is_lenient(self) -> bool {
        matches!(self, Stage::Drafts)
    }

    #[must_use]
    pub fn other(self) -> Stage {
        match self {
            Stage::Drafts => Stage::Published,
            Stage::Published => Stage::Drafts,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Unknown stage `{0}`, expected `drafts` or `published`")]
pub struct UnknownStage(String);

impl FromStr for Stage {
    type Err = UnknownStage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "drafts" => Ok(Stage::Drafts),
            "published" => Ok(Stage::Published),
            other => Err(UnknownStage(other.to_owned())),
        }
    }
}
