//! URL paths for each routed collection.
//!
//! Segments come from config and carry their leading slash (`/articles`);
//! home is always `/`. Localized paths prefix the locale without a separator:
//! `en/articles/hello`.

use std::fmt;

use serde::Serialize;

use crate::config::{Config, Labels, SectionConfig};
use crate::repository::TermKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteKind {
    Home,
    Articles,
    Categories,
    Tags,
    Series,
}

impl RouteKind {
    pub const ALL: [RouteKind; 5] = [
        RouteKind::Home,
        RouteKind::Articles,
        RouteKind::Categories,
        RouteKind::Tags,
        RouteKind::Series,
    ];
}

impl From<TermKind> for RouteKind {
    fn from(kind: TermKind) -> Self {
        match kind {
            TermKind::Category => RouteKind::Categories,
            TermKind::Tag => RouteKind::Tags,
            TermKind::Serie => RouteKind::Series,
        }
    }
}

impl fmt::Display for RouteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RouteKind::Home => "home",
            RouteKind::Articles => "articles",
            RouteKind::Categories => "categories",
            RouteKind::Tags => "tags",
            RouteKind::Series => "series",
        })
    }
}

pub const HOME_SEGMENT: &str = "/";

#[derive(Debug, Clone)]
pub struct Router {
    base_url: String,
    home: Labels,
    articles: SectionConfig,
    categories: SectionConfig,
    tags: SectionConfig,
    series: SectionConfig,
}

impl Router {
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            base_url: config.base_url.clone(),
            home: config.home.label.clone(),
            articles: config.articles.clone(),
            categories: config.categories.clone(),
            tags: config.tags.clone(),
            series: config.series.clone(),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn route(&self, kind: RouteKind) -> Route<'_> {
        let section = match kind {
            RouteKind::Home => {
                return Route {
                    segment: HOME_SEGMENT,
                    labels: &self.home,
                }
            }
            RouteKind::Articles => &self.articles,
            RouteKind::Categories => &self.categories,
            RouteKind::Tags => &self.tags,
            RouteKind::Series => &self.series,
        };
        Route {
            segment: &section.segment,
            labels: &section.label,
        }
    }

    /// Whether the first segment of `path` is the segment of `kind`.
    #[must_use]
    pub fn is(&self, kind: RouteKind, path: &str) -> bool {
        first_segment(path) == self.route(kind).segment
    }
}

/// `/articles/hello` gives `/articles`; a path without a slash gives `/`.
fn first_segment(path: &str) -> String {
    let mut parts = path.split('/');
    match (parts.next(), parts.next()) {
        (_, Some(first)) => format!("/{first}"),
        _ => HOME_SEGMENT.to_owned(),
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Route<'a> {
    segment: &'a str,
    labels: &'a Labels,
}

impl<'a> Route<'a> {
    #[must_use]
    pub fn segment(&self) -> &'a str {
        self.segment
    }

    #[must_use]
    pub fn canonical(&self) -> &'a str {
        self.segment
    }

    #[must_use]
    pub fn path(&self, locale: &str) -> String {
        format!("{locale}{}", self.segment)
    }

    #[must_use]
    pub fn label(&self, locale: &str) -> Option<&'a str> {
        self.labels.get(locale).map(String::as_str)
    }

    #[must_use]
    pub fn by_slug(&self, slug: &str) -> SlugRoute {
        SlugRoute {
            canonical: format!("{}/{slug}", self.segment),
        }
    }
}

/// Paths of one item in a collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlugRoute {
    canonical: String,
}

impl SlugRoute {
    #[must_use]
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    #[must_use]
    pub fn path(&self, locale: &str) -> String {
        format!("{locale}{}", self.canonical)
    }
}
