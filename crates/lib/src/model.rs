use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seo {
    pub meta_title: String,
    pub meta_description: String,
}

impl Seo {
    #[must_use]
    pub fn mirror(title: &str, description: &str) -> Self {
        Self {
            meta_title: title.to_owned(),
            meta_description: description.to_owned(),
        }
    }
}

/// A singleton page (home) or the base page of a collection listing. One per
/// locale per stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub title: String,
    pub catchline: String,
    pub description: String,
    pub locale: String,
    pub updated_at: NaiveDate,
    pub content: String,
    pub seo: Seo,
}

impl Page {
    /// Empty scaffolding for a locale, as seeded by `setup`.
    #[must_use]
    pub fn blank(locale: impl Into<String>, updated_at: NaiveDate) -> Self {
        Self {
            title: String::new(),
            catchline: String::new(),
            description: String::new(),
            locale: locale.into(),
            updated_at,
            content: String::new(),
            seo: Seo::mirror("", ""),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerieRef {
    pub slug: String,
    pub order: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleMeta {
    pub tags: Vec<String>,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serie: Option<SerieRef>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub title: String,
    pub catchline: String,
    pub slug: String,
    pub locale: String,
    pub description: String,
    pub published_at: NaiveDate,
    pub updated_at: NaiveDate,
    pub content: String,
    pub seo: Seo,
    pub meta: ArticleMeta,
}

/// A category, tag or serie: the three share one shape and schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Term {
    pub title: String,
    pub catchline: String,
    pub slug: String,
    pub locale: String,
    pub description: String,
    pub content: String,
    pub icon: String,
    pub color: String,
    pub seo: Seo,
}

pub type Category = Term;
pub type Tag = Term;
pub type Serie = Term;

/// Site-wide metadata, one per locale. Has no body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Website {
    pub name: String,
    pub creator: String,
    pub publisher: String,
    pub twitter_profile: String,
    pub locale: String,
}

pub trait Localized {
    fn locale(&self) -> &str;
}

/// Entities addressed by `(slug, locale)`.
pub trait Slugged: Localized {
    fn slug(&self) -> &str;
}

macro_rules! localized {
    ($($ty:ty),*) => {
        $(impl Localized for $ty {
            fn locale(&self) -> &str {
                &self.locale
            }
        })*
    };
}

localized!(Page, Article, Term, Website);

impl Slugged for Article {
    fn slug(&self) -> &str {
        &self.slug
    }
}

impl Slugged for Term {
    fn slug(&self) -> &str {
        &self.slug
    }
}
