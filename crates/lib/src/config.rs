//! Project configuration, read from `typewriter.yaml`.
//!
//! ```yaml
//! baseUrl: https://example.com
//! supportedLocales: [en, fr]
//! defaultLocale: en
//! stage: published
//! home:
//!   label: { en: Home, fr: Accueil }
//! articles:
//!   segment: /articles
//!   label: { en: Articles, fr: Articles }
//! ```

use std::collections::BTreeMap;
use std::io;

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::filename::is_valid_locale;
use crate::repository::Layout;
use crate::stage::Stage;

pub const CONFIG_FILE: &str = "typewriter.yaml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Invalid config: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("No supported locales configured")]
    NoLocales,
    #[error("Invalid locale `{0}`: expected two lowercase letters")]
    InvalidLocale(String),
    #[error("Default locale `{0}` is not one of the supported locales")]
    UnknownDefaultLocale(String),
}

/// Per-locale display labels.
pub type Labels = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeConfig {
    #[serde(default)]
    pub label: Labels,
}

/// A collection's URL segment (with leading slash) and labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionConfig {
    pub segment: String,
    #[serde(default)]
    pub label: Labels,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    pub base_url: String,
    pub supported_locales: Vec<String>,
    pub default_locale: String,
    #[serde(default)]
    pub stage: Stage,
    /// Project root holding `content/`. Relative paths are resolved against
    /// the config file's directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<Utf8PathBuf>,
    pub home: HomeConfig,
    pub articles: SectionConfig,
    pub categories: SectionConfig,
    pub tags: SectionConfig,
    pub series: SectionConfig,
}

impl Config {
    /// Reads and validates the config at `path`.
    pub fn load(path: &Utf8Path) -> Result<Self, ConfigError> {
        debug!("Loading config from {path}");
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_owned(),
            source,
        })?;
        let base = path.parent().unwrap_or(Utf8Path::new("."));
        Self::from_yaml(&text, base)
    }

    /// Parses and validates `text`, resolving `directory` against `base`.
    pub fn from_yaml(text: &str, base: &Utf8Path) -> Result<Self, ConfigError> {
        let mut config: Config = serde_yaml::from_str(text)?;
        config.directory = Some(match config.directory.take() {
            Some(dir) if dir.is_absolute() => dir,
            Some(dir) => base.join(dir),
            None => base.to_owned(),
        });
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.supported_locales.is_empty() {
            return Err(ConfigError::NoLocales);
        }
        if let Some(bad) = self.supported_locales.iter().find(|l| !is_valid_locale(l)) {
            return Err(ConfigError::InvalidLocale(bad.clone()));
        }
        if !self.supported_locales.contains(&self.default_locale) {
            return Err(ConfigError::UnknownDefaultLocale(self.default_locale.clone()));
        }
        Ok(())
    }

    #[must_use]
    pub fn directory(&self) -> &Utf8Path {
        self.directory.as_deref().unwrap_or(Utf8Path::new("."))
    }

    #[must_use]
    pub fn layout(&self) -> Layout {
        Layout::new(self.directory(), self.supported_locales.clone())
    }
}


#[cfg(test)]
mod test {
    use camino::Utf8Path;
    use pretty_assertions::assert_eq;

    use super::test_support::YAML;
    use super::{Config, ConfigError};
    use crate::stage::Stage;

    #[test]
    fn sample_config() {
        let config = Config::from_yaml(YAML, Utf8Path::new("/site")).unwrap();
        assert_eq!(vec!["en", "fr"], config.supported_locales);
        assert_eq!(Stage::Published, config.stage);
        assert_eq!(Utf8Path::new("/site"), config.directory());
        assert_eq!("/tags", config.tags.segment);
        assert_eq!(Some("Accueil"), config.home.label.get("fr").map(String::as_str));
        assert_eq!(vec!["en", "fr"], config.layout().locales());
    }

    #[test]
    fn relative_directory() {
        let yaml = format!("{YAML}directory: site\nstage: drafts\n");
        let config = Config::from_yaml(&yaml, Utf8Path::new("/project")).unwrap();
        assert_eq!(Utf8Path::new("/project/site"), config.directory());
        assert_eq!(Stage::Drafts, config.stage);
    }

    #[test]
    fn default_locale_must_be_supported() {
        let yaml = YAML.replace("defaultLocale: en", "defaultLocale: de");
        assert!(matches!(
            Config::from_yaml(&yaml, Utf8Path::new(".")),
            Err(ConfigError::UnknownDefaultLocale(l)) if l == "de"
        ));
    }

    #[test]
    fn locales_are_validated() {
        let yaml = YAML.replace("[en, fr]", "[en, French]");
        assert!(matches!(
            Config::from_yaml(&yaml, Utf8Path::new(".")),
            Err(ConfigError::InvalidLocale(l)) if l == "French"
        ));
        let yaml = YAML.replace("[en, fr]", "[]");
        assert!(matches!(
            Config::from_yaml(&yaml, Utf8Path::new(".")),
            Err(ConfigError::NoLocales)
        ));
    }

    #[test]
    fn missing_section_is_a_yaml_error() {
        let yaml = YAML.replace("tags:", "labels:");
        assert!(matches!(
            Config::from_yaml(&yaml, Utf8Path::new(".")),
            Err(ConfigError::Yaml(_))
        ));
    }
}
