//! Read-only view over every collection of one stage, loaded once.
//!
//! Lookups hand back borrowed entities together with the paths a site needs
//! to link them: the localized path, the canonical path, and the paths of the
//! same item in its other locales.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::model::{Article, Localized, Page, Slugged, Term, Website};
use crate::repository::{
    article::ARTICLES, ArticleRepository, ListPageRepository, PageRepository, RepositoryError,
    SingletonPageRepository, TermKind, TermRepository, WebsiteRepository,
};
use crate::router::{Route, RouteKind, Router};
use crate::stage::Stage;

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("No {kind} found for slug `{slug}` and locale `{locale}`")]
    EntityNotFound {
        kind: &'static str,
        slug: String,
        locale: String,
    },
    #[error("No {kind} page found for locale `{locale}`")]
    PageNotFound { kind: String, locale: String },
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// An entity resolved for one locale.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Localization<'a, T> {
    pub path: String,
    pub canonical: String,
    pub entry: &'a T,
    /// Every locale the entity exists in, including this one.
    pub supported_locales: Vec<&'a str>,
    pub alternate: Alternate<'a, T>,
}

/// The other locales of an entity.
#[derive(Debug, Serialize)]
pub struct Alternate<'a, T> {
    pub locales: Vec<&'a str>,
    pub entries: Vec<&'a T>,
    /// Localized path per alternate locale.
    pub paths: BTreeMap<String, String>,
}

/// A whole collection plus its distinct slugs in first-seen order.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing<'a, T> {
    pub entries: &'a [T],
    pub unique_slugs: Vec<&'a str>,
}

#[derive(Debug)]
pub struct Content {
    router: Router,
    stage: Stage,
    websites: Vec<Website>,
    home: Vec<Page>,
    articles: Vec<Article>,
    article_pages: Vec<Page>,
    categories: Vec<Term>,
    category_pages: Vec<Page>,
    tags: Vec<Term>,
    tag_pages: Vec<Page>,
    series: Vec<Term>,
    serie_pages: Vec<Page>,
}

impl Content {
    /// Loads the configured stage.
    pub fn load(config: &Config) -> Result<Self, ContentError> {
        Self::load_stage(config, config.stage)
    }

    /// Loads every collection of `stage`. The first malformed file fails the
    /// whole load.
    pub fn load_stage(config: &Config, stage: Stage) -> Result<Self, ContentError> {
        let layout = config.layout();
        let catalog = Catalog::default();
        let list_pages = |name: &str| ListPageRepository::new(&layout, name).all(stage);
        let terms = |kind| TermRepository::new(&layout, kind, catalog.clone()).all(stage);

        let content = Self {
            router: Router::new(config),
            stage,
            websites: WebsiteRepository::new(&layout).all(stage)?,
            home: SingletonPageRepository::home(&layout).all(stage)?,
            articles: ArticleRepository::new(&layout).all(stage)?,
            article_pages: list_pages(ARTICLES)?,
            categories: terms(TermKind::Category)?,
            category_pages: list_pages(TermKind::Category.collection())?,
            tags: terms(TermKind::Tag)?,
            tag_pages: list_pages(TermKind::Tag.collection())?,
            series: terms(TermKind::Serie)?,
            serie_pages: list_pages(TermKind::Serie.collection())?,
        };
        debug!(
            "Loaded {} content: {} articles, {} categories, {} tags, {} series",
            content.stage,
            content.articles.len(),
            content.categories.len(),
            content.tags.len(),
            content.series.len()
        );
        Ok(content)
    }

    #[must_use]
    pub fn router(&self) -> &Router {
        &self.router
    }

    #[must_use]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// The home page or a collection's base page, for `locale`.
    pub fn page(&self, kind: RouteKind, locale: &str) -> Result<Localization<'_, Page>, ContentError> {
        let pages = self.pages(kind);
        let route = self.router.route(kind);
        localize(pages, locale, |l| route.path(l), route.canonical().to_owned()).ok_or_else(|| {
            ContentError::PageNotFound {
                kind: kind.to_string(),
                locale: locale.to_owned(),
            }
        })
    }

    #[must_use]
    pub fn pages(&self, kind: RouteKind) -> &[Page] {
        match kind {
            RouteKind::Home => &self.home,
            RouteKind::Articles => &self.article_pages,
            RouteKind::Categories => &self.category_pages,
            RouteKind::Tags => &self.tag_pages,
            RouteKind::Series => &self.serie_pages,
        }
    }

    #[must_use]
    pub fn articles(&self) -> Listing<'_, Article> {
        listing(&self.articles)
    }

    #[must_use]
    pub fn articles_by_locale(&self, locale: &str) -> Vec<&Article> {
        by_locale(&self.articles, locale)
    }

    pub fn article(&self, slug: &str, locale: &str) -> Result<Localization<'_, Article>, ContentError> {
        by_slug(&self.articles, self.router.route(RouteKind::Articles), "article", slug, locale)
    }

    #[must_use]
    pub fn articles_by_category(&self, category: &str, locale: &str) -> Vec<&Article> {
        self.articles_where(locale, |a| a.meta.category == category)
    }

    #[must_use]
    pub fn articles_by_tag(&self, tag: &str, locale: &str) -> Vec<&Article> {
        self.articles_where(locale, |a| a.meta.tags.iter().any(|t| t == tag))
    }

    #[must_use]
    pub fn articles_by_serie(&self, serie: &str, locale: &str) -> Vec<&Article> {
        self.articles_where(locale, |a| a.meta.serie.as_ref().is_some_and(|s| s.slug == serie))
    }

    fn articles_where(&self, locale: &str, keep: impl Fn(&Article) -> bool) -> Vec<&Article> {
        self.articles
            .iter()
            .filter(|a| a.locale == locale && keep(a))
            .collect()
    }

    #[must_use]
    pub fn terms(&self, kind: TermKind) -> Listing<'_, Term> {
        listing(self.term_entries(kind))
    }

    #[must_use]
    pub fn terms_by_locale(&self, kind: TermKind, locale: &str) -> Vec<&Term> {
        by_locale(self.term_entries(kind), locale)
    }

    pub fn term(&self, kind: TermKind, slug: &str, locale: &str) -> Result<Localization<'_, Term>, ContentError> {
        let name = match kind {
            TermKind::Category => "category",
            TermKind::Tag => "tag",
            TermKind::Serie => "serie",
        };
        by_slug(self.term_entries(kind), self.router.route(kind.into()), name, slug, locale)
    }

    fn term_entries(&self, kind: TermKind) -> &[Term] {
        match kind {
            TermKind::Category => &self.categories,
            TermKind::Tag => &self.tags,
            TermKind::Serie => &self.series,
        }
    }

    #[must_use]
    pub fn websites(&self) -> &[Website] {
        &self.websites
    }

    pub fn website(&self, locale: &str) -> Result<&Website, ContentError> {
        self.websites
            .iter()
            .find(|w| w.locale == locale)
            .ok_or_else(|| ContentError::PageNotFound {
                kind: "website".to_owned(),
                locale: locale.to_owned(),
            })
    }
}

fn listing<T: Slugged>(entries: &[T]) -> Listing<'_, T> {
    let mut unique_slugs: Vec<&str> = Vec::new();
    for entry in entries {
        if !unique_slugs.contains(&entry.slug()) {
            unique_slugs.push(entry.slug());
        }
    }
    Listing { entries, unique_slugs }
}

fn by_locale<'a, T: Localized>(entries: &'a [T], locale: &str) -> Vec<&'a T> {
    entries.iter().filter(|e| e.locale() == locale).collect()
}

fn by_slug<'a, T: Slugged>(
    entries: &'a [T],
    route: Route<'_>,
    kind: &'static str,
    slug: &str,
    locale: &str,
) -> Result<Localization<'a, T>, ContentError> {
    let with_slug = entries.iter().filter(|e| e.slug() == slug).collect::<Vec<_>>();
    let slug_route = route.by_slug(slug);
    localize_refs(&with_slug, locale, |l| slug_route.path(l), slug_route.canonical().to_owned()).ok_or_else(
        || ContentError::EntityNotFound {
            kind,
            slug: slug.to_owned(),
            locale: locale.to_owned(),
        },
    )
}

fn localize<'a, T: Localized>(
    entries: &'a [T],
    locale: &str,
    path: impl Fn(&str) -> String,
    canonical: String,
) -> Option<Localization<'a, T>> {
    localize_refs(&entries.iter().collect::<Vec<_>>(), locale, path, canonical)
}

fn localize_refs<'a, T: Localized>(
    entries: &[&'a T],
    locale: &str,
    path: impl Fn(&str) -> String,
    canonical: String,
) -> Option<Localization<'a, T>> {
    let entry = *entries.iter().find(|e| e.locale() == locale)?;
    let others = entries
        .iter()
        .copied()
        .filter(|e| e.locale() != locale)
        .collect::<Vec<_>>();
    Some(Localization {
        path: path(locale),
        canonical,
        entry,
        supported_locales: entries.iter().copied().map(T::locale).collect(),
        alternate: Alternate {
            locales: others.iter().copied().map(T::locale).collect(),
            paths: others
                .iter()
                .map(|e| (e.locale().to_owned(), path(e.locale())))
                .collect(),
            entries: others,
        },
    })
}

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::NaiveDate;

    use crate::config::{test_support::config, Config};
    use crate::model::{Article, ArticleMeta, Page, Seo, SerieRef, Term};
    use crate::repository::test_support::Project;
    use crate::repository::{
        article::ARTICLES, ArticleRepository, ListPageRepository, PageRepository, SingletonPageRepository,
        TermKind, TermRepository,
    };
    use crate::catalog::Catalog;
    use crate::stage::Stage;

    pub fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    pub fn page(title: &str, locale: &str) -> Page {
        Page {
            title: title.to_owned(),
            catchline: "c".to_owned(),
            description: "d".to_owned(),
            locale: locale.to_owned(),
            updated_at: ymd(2024, 1, 1),
            content: String::new(),
            seo: Seo::mirror(title, "d"),
        }
    }

    pub fn article(slug: &str, locale: &str, published_at: NaiveDate, tags: &[&str]) -> Article {
        Article {
            title: slug.to_owned(),
            catchline: "c".to_owned(),
            slug: slug.to_owned(),
            locale: locale.to_owned(),
            description: "d".to_owned(),
            published_at,
            updated_at: published_at,
            content: String::new(),
            seo: Seo::mirror(slug, "d"),
            meta: ArticleMeta {
                tags: tags.iter().map(ToString::to_string).collect(),
                category: "news".to_owned(),
                serie: None,
            },
        }
    }

    pub fn term(slug: &str, locale: &str) -> Term {
        Term {
            title: slug.to_owned(),
            catchline: "c".to_owned(),
            slug: slug.to_owned(),
            locale: locale.to_owned(),
            description: "d".to_owned(),
            content: String::new(),
            icon: "circle-dot".to_owned(),
            color: "primary".to_owned(),
            seo: Seo::mirror(slug, "d"),
        }
    }

    /// A small published site: every page in `en` and `fr`, two articles
    /// (one translated), one category, one tag and one serie.
    pub fn site() -> (Project, Config) {
        let project = Project::new();
        let layout = &project.layout;
        let config = config(layout.directory());

        let home = SingletonPageRepository::home(layout);
        for locale in ["en", "fr"] {
            home.upsert(&page("Home", locale), Stage::Published).unwrap();
            for collection in [ARTICLES, "categories", "tags", "series"] {
                ListPageRepository::new(layout, collection)
                    .upsert(&page(collection, locale), Stage::Published)
                    .unwrap();
            }
        }

        let articles = ArticleRepository::new(layout);
        let mut hello = article("hello", "en", ymd(2024, 1, 1), &["rust"]);
        hello.meta.serie = Some(SerieRef {
            slug: "basics".to_owned(),
            order: 1,
        });
        articles.upsert(&hello, Stage::Published).unwrap();
        articles
            .upsert(&article("hello", "fr", ymd(2024, 1, 2), &["rust"]), Stage::Published)
            .unwrap();
        let mut later = article("later", "en", ymd(2024, 6, 1), &[]);
        later.updated_at = ymd(2024, 7, 1);
        articles.upsert(&later, Stage::Published).unwrap();

        for (kind, slug) in [
            (TermKind::Category, "news"),
            (TermKind::Tag, "rust"),
            (TermKind::Serie, "basics"),
        ] {
            TermRepository::new(layout, kind, Catalog::default())
                .upsert(&term(slug, "en"), Stage::Published)
                .unwrap();
        }

        (project, config)
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::test_support::{site, ymd};
    use super::{Content, ContentError};
    use crate::repository::TermKind;
    use crate::router::RouteKind;
    use crate::stage::Stage;

    #[test]
    fn localized_page() {
        let (_project, config) = site();
        let content = Content::load(&config).unwrap();

        let home = content.page(RouteKind::Home, "fr").unwrap();
        assert_eq!("fr/", home.path);
        assert_eq!("/", home.canonical);
        assert_eq!(vec!["en", "fr"], home.supported_locales);
        assert_eq!(vec!["en"], home.alternate.locales);
        assert_eq!(Some(&"en/".to_owned()), home.alternate.paths.get("en"));

        let tags = content.page(RouteKind::Tags, "en").unwrap();
        assert_eq!("en/tags", tags.path);
        assert_eq!("tags", tags.entry.title);
    }

    #[test]
    fn missing_page() {
        let (_project, config) = site();
        let content = Content::load(&config).unwrap();
        assert!(matches!(
            content.page(RouteKind::Articles, "de"),
            Err(ContentError::PageNotFound { .. })
        ));
    }

    #[test]
    fn article_by_slug() {
        let (_project, config) = site();
        let content = Content::load(&config).unwrap();

        let hello = content.article("hello", "en").unwrap();
        assert_eq!("en/articles/hello", hello.path);
        assert_eq!("/articles/hello", hello.canonical);
        assert_eq!(ymd(2024, 1, 1), hello.entry.published_at);
        assert_eq!(vec!["fr", "en"], hello.supported_locales);
        assert_eq!(Some(&"fr/articles/hello".to_owned()), hello.alternate.paths.get("fr"));
        assert_eq!(ymd(2024, 1, 2), hello.alternate.entries[0].published_at);
    }

    #[test]
    fn missing_slug_is_an_error() {
        let (_project, config) = site();
        let content = Content::load(&config).unwrap();
        assert!(matches!(
            content.article("does-not-exist", "en"),
            Err(ContentError::EntityNotFound { kind: "article", .. })
        ));
        assert!(matches!(
            content.term(TermKind::Tag, "rust", "fr"),
            Err(ContentError::EntityNotFound { kind: "tag", .. })
        ));
    }

    #[test]
    fn listings_and_filters() {
        let (_project, config) = site();
        let content = Content::load(&config).unwrap();

        let all = content.articles();
        assert_eq!(3, all.entries.len());
        assert_eq!(vec!["later", "hello"], all.unique_slugs);
        assert_eq!(2, content.articles_by_locale("en").len());
        assert_eq!(1, content.articles_by_tag("rust", "fr").len());
        assert_eq!(2, content.articles_by_category("news", "en").len());
        assert_eq!("hello", content.articles_by_serie("basics", "en")[0].slug);
        assert!(content.articles_by_serie("basics", "fr").is_empty());

        assert_eq!(vec!["basics"], content.terms(TermKind::Serie).unique_slugs);
        assert_eq!(1, content.terms_by_locale(TermKind::Category, "en").len());
        let rust = content.term(TermKind::Tag, "rust", "en").unwrap();
        assert_eq!("en/tags/rust", rust.path);
    }

    #[test]
    fn stages_are_separate() {
        let (_project, config) = site();
        let drafts = Content::load_stage(&config, Stage::Drafts).unwrap();
        assert!(drafts.articles().entries.is_empty());
        assert!(drafts.website("en").is_err());
    }
}
