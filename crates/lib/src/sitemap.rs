//! Sitemap entries for every routed page, keyed by canonical path.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::content::{Content, ContentError};
use crate::repository::TermKind;
use crate::router::RouteKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Daily,
    Weekly,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Alternates {
    /// Localized path per locale, the default locale included.
    pub languages: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SitemapEntry {
    pub url: String,
    pub last_modified: NaiveDate,
    pub change_frequency: ChangeFrequency,
    pub priority: f64,
    pub alternates: Alternates,
}

/// Base pages in sitemap order with their priority and change frequency.
const BASE_PAGES: [(RouteKind, f64, ChangeFrequency); 5] = [
    (RouteKind::Home, 1.0, ChangeFrequency::Daily),
    (RouteKind::Articles, 0.9, ChangeFrequency::Daily),
    (RouteKind::Categories, 0.7, ChangeFrequency::Weekly),
    (RouteKind::Series, 0.5, ChangeFrequency::Weekly),
    (RouteKind::Tags, 0.6, ChangeFrequency::Weekly),
];

const TERM_PAGES: [(TermKind, f64); 3] = [
    (TermKind::Category, 0.7),
    (TermKind::Serie, 0.5),
    (TermKind::Tag, 0.6),
];

/// Builds the whole sitemap: base pages, then every article, category, serie
/// and tag slug. Each entry is resolved in `default_locale`, so a slug
/// missing from the default locale is an error. `today` stamps entries that
/// carry no date of their own.
pub fn build_all(content: &Content, default_locale: &str, today: NaiveDate) -> Result<Vec<SitemapEntry>, ContentError> {
    let mut entries = Vec::new();

    for (kind, priority, change_frequency) in BASE_PAGES {
        let page = content.page(kind, default_locale)?;
        entries.push(SitemapEntry {
            url: page.canonical,
            last_modified: today,
            change_frequency,
            priority,
            alternates: with_default(page.alternate.paths, default_locale, page.path),
        });
    }

    for slug in content.articles().unique_slugs {
        let article = content.article(slug, default_locale)?;
        entries.push(SitemapEntry {
            last_modified: article.entry.updated_at,
            change_frequency: ChangeFrequency::Daily,
            priority: 0.8,
            alternates: with_default(article.alternate.paths, default_locale, article.canonical.clone()),
            url: article.canonical,
        });
    }

    for (kind, priority) in TERM_PAGES {
        for slug in content.terms(kind).unique_slugs {
            let term = content.term(kind, slug, default_locale)?;
            entries.push(SitemapEntry {
                last_modified: today,
                change_frequency: ChangeFrequency::Weekly,
                priority,
                alternates: with_default(term.alternate.paths, default_locale, term.canonical.clone()),
                url: term.canonical,
            });
        }
    }

    Ok(entries)
}

fn with_default(mut paths: BTreeMap<String, String>, default_locale: &str, path: String) -> Alternates {
    paths.insert(default_locale.to_owned(), path);
    Alternates { languages: paths }
}

#[cfg(test)]
mod test {
    use std::collections::BTreeMap;

    use pretty_assertions::assert_eq;

    use super::{build_all, Alternates, ChangeFrequency, SitemapEntry};
    use crate::content::test_support::{site, ymd};
    use crate::content::{Content, ContentError};

    fn languages(pairs: &[(&str, &str)]) -> Alternates {
        Alternates {
            languages: pairs
                .iter()
                .map(|(l, p)| ((*l).to_owned(), (*p).to_owned()))
                .collect::<BTreeMap<_, _>>(),
        }
    }

    #[test]
    fn whole_site() {
        let (_project, config) = site();
        let content = Content::load(&config).unwrap();
        let today = ymd(2024, 10, 5);

        let entries = build_all(&content, "en", today).unwrap();

        let urls = entries.iter().map(|e| e.url.as_str()).collect::<Vec<_>>();
        assert_eq!(
            vec![
                "/",
                "/articles",
                "/categories",
                "/series",
                "/tags",
                "/articles/later",
                "/articles/hello",
                "/categories/news",
                "/series/basics",
                "/tags/rust",
            ],
            urls
        );
        assert_eq!(
            SitemapEntry {
                url: "/".to_owned(),
                last_modified: today,
                change_frequency: ChangeFrequency::Daily,
                priority: 1.0,
                alternates: languages(&[("en", "en/"), ("fr", "fr/")]),
            },
            entries[0]
        );
        assert_eq!(
            SitemapEntry {
                url: "/articles/hello".to_owned(),
                last_modified: ymd(2024, 1, 1),
                change_frequency: ChangeFrequency::Daily,
                priority: 0.8,
                alternates: languages(&[("en", "/articles/hello"), ("fr", "fr/articles/hello")]),
            },
            entries[6]
        );
        assert_eq!(ymd(2024, 7, 1), entries[5].last_modified);
        assert_eq!(0.6, entries[9].priority);
    }

    #[test]
    fn serializes_camel_case() {
        let (_project, config) = site();
        let content = Content::load(&config).unwrap();
        let entries = build_all(&content, "en", ymd(2024, 10, 5)).unwrap();

        let json = serde_json::to_value(&entries[1]).unwrap();
        assert_eq!("2024-10-05", json["lastModified"]);
        assert_eq!("daily", json["changeFrequency"]);
        assert_eq!(0.9, json["priority"]);
        assert_eq!("fr/articles", json["alternates"]["languages"]["fr"]);
    }

    #[test]
    fn default_locale_must_exist() {
        let (_project, config) = site();
        let content = Content::load(&config).unwrap();
        assert!(matches!(
            build_all(&content, "fr", ymd(2024, 10, 5)),
            Err(ContentError::EntityNotFound { .. })
        ));
    }
}
