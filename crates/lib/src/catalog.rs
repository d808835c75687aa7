//! Closed option sets for cosmetic front matter (`icon`, `color`).
//!
//! Invalid or missing values never fail a build: resolution substitutes a
//! default and hands back a [`Fallback`] describing what happened, which the
//! repositories log.

mod icons;

use std::fmt;

use serde::Serialize;

pub use icons::ICONS;

pub const COLORS: &[&str] = &[
    "red", "orange", "amber", "yellow", "lime", "green", "emerald", "teal", "cyan", "sky", "blue",
    "indigo", "violet", "purple", "fuchsia", "pink", "rose", "primary", "secondary",
];

pub const DEFAULT_ICON: &str = "circle-dot";
pub const DEFAULT_COLOR: &str = "primary";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionKind {
    Icon,
    Color,
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionKind::Icon => f.write_str("icon"),
            OptionKind::Color => f.write_str("color"),
        }
    }
}

/// A substituted default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fallback {
    pub kind: OptionKind,
    pub given: Option<String>,
    pub substitute: String,
}

impl fmt::Display for Fallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.given {
            Some(given) => write!(
                f,
                "invalid {} `{given}`, falling back to `{}`",
                self.kind, self.substitute
            ),
            None => write!(f, "missing {}, falling back to `{}`", self.kind, self.substitute),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub value: String,
    pub fallback: Option<Fallback>,
}

/// The option repository: valid colors and icons plus their defaults.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    colors: Vec<String>,
    icons: Vec<String>,
    default_color: String,
    default_icon: String,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(
            COLORS.iter().map(ToString::to_string).collect(),
            ICONS.iter().map(ToString::to_string).collect(),
            DEFAULT_COLOR,
            DEFAULT_ICON,
        )
    }
}

impl Catalog {
    #[must_use]
    pub fn new(
        colors: Vec<String>,
        icons: Vec<String>,
        default_color: impl Into<String>,
        default_icon: impl Into<String>,
    ) -> Self {
        Self {
            colors,
            icons,
            default_color: default_color.into(),
            default_icon: default_icon.into(),
        }
    }

    #[must_use]
    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    #[must_use]
    pub fn icons(&self) -> &[String] {
        &self.icons
    }

    #[must_use]
    pub fn is_valid(&self, kind: OptionKind, value: &str) -> bool {
        self.options(kind).iter().any(|option| option == value)
    }

    #[must_use]
    pub fn resolve_icon(&self, raw: Option<&str>) -> Resolved {
        self.resolve(OptionKind::Icon, raw)
    }

    #[must_use]
    pub fn resolve_color(&self, raw: Option<&str>) -> Resolved {
        self.resolve(OptionKind::Color, raw)
    }

    fn resolve(&self, kind: OptionKind, raw: Option<&str>) -> Resolved {
        match raw {
            Some(value) if self.is_valid(kind, value) => Resolved {
                value: value.to_owned(),
                fallback: None,
            },
            given => {
                let substitute = self.default_for(kind).to_owned();
                Resolved {
                    value: substitute.clone(),
                    fallback: Some(Fallback {
                        kind,
                        given: given.map(ToOwned::to_owned),
                        substitute,
                    }),
                }
            }
        }
    }

    fn options(&self, kind: OptionKind) -> &[String] {
        match kind {
            OptionKind::Icon => &self.icons,
            OptionKind::Color => &self.colors,
        }
    }

    fn default_for(&self, kind: OptionKind) -> &str {
        match kind {
            OptionKind::Icon => &self.default_icon,
            OptionKind::Color => &self.default_color,
        }
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::{Catalog, OptionKind, DEFAULT_ICON, ICONS};

    #[test]
    fn icons_are_sorted_and_unique() {
        assert!(ICONS.windows(2).all(|w| w[0] < w[1]));
        assert!(ICONS.binary_search(&DEFAULT_ICON).is_ok());
    }

    #[test]
    fn valid_values_pass_through() {
        let catalog = Catalog::default();
        let icon = catalog.resolve_icon(Some("zap"));
        assert_eq!("zap", icon.value);
        assert_eq!(None, icon.fallback);

        let color = catalog.resolve_color(Some("teal"));
        assert_eq!("teal", color.value);
        assert_eq!(None, color.fallback);
    }

    #[test]
    fn missing_or_unknown_values_fall_back() {
        let catalog = Catalog::default();
        for raw in [None, Some("not-a-real-icon")] {
            let icon = catalog.resolve_icon(raw);
            assert_eq!("circle-dot", icon.value);
            let fallback = icon.fallback.unwrap();
            assert_eq!(OptionKind::Icon, fallback.kind);
            assert_eq!(raw.map(ToOwned::to_owned), fallback.given);
        }

        let color = catalog.resolve_color(Some("mauve"));
        assert_eq!("primary", color.value);
        assert_eq!(
            "invalid color `mauve`, falling back to `primary`",
            color.fallback.unwrap().to_string()
        );
    }

    #[test]
    fn injected_catalog() {
        let catalog = Catalog::new(vec!["ink".into()], vec!["pen".into()], "ink", "pen");
        assert_eq!("pen", catalog.resolve_icon(Some("zap")).value);
        assert!(catalog.is_valid(OptionKind::Color, "ink"));
    }
}
