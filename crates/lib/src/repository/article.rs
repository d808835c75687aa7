use camino::{Utf8Path, Utf8PathBuf};
use tracing::{debug, info};

use super::{today, Collection, Layout, RenderedFile, RepositoryError};
use crate::filename::{self, Dating, FileName};
use crate::frontmatter::schema::{
    self, CATCHLINE, CATEGORY, DESCRIPTION, PUBLISHED_AT, SERIE, SERIE_ORDER, TAGS, TITLE, UPDATED_AT,
};
use crate::frontmatter::{self, Metadata, Value};
use crate::fs::Selection;
use crate::model::{Article, ArticleMeta, Seo, SerieRef};
use crate::stage::Stage;

pub const ARTICLES: &str = "articles";

/// Articles live in `content/articles/` under dated names:
/// `2024-01-01-hello.en.mdx`.
#[derive(Debug, Clone)]
pub struct ArticleRepository {
    collection: Collection,
}

impl ArticleRepository {
    #[must_use]
    pub fn new(layout: &Layout) -> Self {
        Self {
            collection: layout.collection(ARTICLES),
        }
    }

    pub fn setup(&self) -> Result<(), RepositoryError> {
        self.collection.setup()
    }

    #[must_use]
    pub fn dir(&self, stage: Stage) -> &Utf8Path {
        self.collection.dir(stage)
    }

    /// Every article of `stage`, newest `publishedAt` first. Ties are broken
    /// by slug, then locale.
    pub fn all(&self, stage: Stage) -> Result<Vec<Article>, RepositoryError> {
        let mut articles = self
            .collection
            .files(stage, Selection::Items)?
            .iter()
            .map(|path| self.read(path, stage))
            .collect::<Result<Vec<_>, _>>()?;
        articles.sort_by(|a, b| {
            b.published_at
                .cmp(&a.published_at)
                .then_with(|| a.slug.cmp(&b.slug))
                .then_with(|| a.locale.cmp(&b.locale))
        });
        Ok(articles)
    }

    /// Reads one article file. Drafts missing `publishedAt` take the date of
    /// their file name.
    pub fn read(&self, path: &Utf8Path, stage: Stage) -> Result<Article, RepositoryError> {
        let doc = self.collection.read(path, stage, &schema::ARTICLE)?;
        let name = self.collection.file_name(path, Dating::Dated)?;
        let m = &doc.metadata;

        let published_at = m.date(PUBLISHED_AT).or(name.date).unwrap_or_else(today);
        let serie_slug = m.text(SERIE).filter(|slug| !slug.is_empty());
        let serie = match (serie_slug, m.integer(SERIE_ORDER)) {
            (Some(slug), Some(order)) => Some(SerieRef {
                slug: slug.to_owned(),
                order,
            }),
            (None, None) => None,
            _ => {
                debug!("Ignoring incomplete serie membership in {path}");
                None
            }
        };
        let title = m.text_or_empty(TITLE);
        let description = m.text_or_empty(DESCRIPTION);

        Ok(Article {
            seo: Seo::mirror(&title, &description),
            title,
            catchline: m.text_or_empty(CATCHLINE),
            slug: name.stem,
            locale: name.locale,
            description,
            published_at,
            updated_at: m.date(UPDATED_AT).unwrap_or(published_at),
            content: doc.body,
            meta: ArticleMeta {
                tags: m.list(TAGS).map(<[String]>::to_vec).unwrap_or_default(),
                category: m.text_or_empty(CATEGORY),
                serie,
            },
        })
    }

    /// Where `article` is written in `stage`, dated by its `publishedAt`.
    #[must_use]
    pub fn path(&self, article: &Article, stage: Stage) -> Utf8PathBuf {
        let name = FileName::dated(article.published_at, article.slug.as_str(), article.locale.as_str());
        self.collection.path(stage, &name)
    }

    /// The existing file holding `(slug, locale)` in `stage`, whatever date
    /// its name carries.
    pub fn find(&self, slug: &str, locale: &str, stage: Stage) -> Result<Option<Utf8PathBuf>, RepositoryError> {
        Ok(self.matching(slug, locale, stage)?.into_iter().next())
    }

    /// Every file of `stage` holding `(slug, locale)`, in file-name order.
    fn matching(&self, slug: &str, locale: &str, stage: Stage) -> Result<Vec<Utf8PathBuf>, RepositoryError> {
        let mut paths = Vec::new();
        for path in self.collection.files(stage, Selection::Items)? {
            let name = self.collection.file_name(&path, Dating::Dated)?;
            if name.stem == slug && name.locale == locale {
                paths.push(path);
            }
        }
        Ok(paths)
    }

    pub fn by_slug(&self, slug: &str, locale: &str, stage: Stage) -> Result<Option<Article>, RepositoryError> {
        self.find(slug, locale, stage)?
            .map(|path| self.read(&path, stage))
            .transpose()
    }

    #[must_use]
    pub fn render(&self, article: &Article, stage: Stage) -> RenderedFile {
        let mut metadata = Metadata::new()
            .with(TITLE, Value::Text(article.title.clone()))
            .with(CATCHLINE, Value::Text(article.catchline.clone()))
            .with(DESCRIPTION, Value::Text(article.description.clone()))
            .with(PUBLISHED_AT, Value::Date(article.published_at))
            .with(UPDATED_AT, Value::Date(article.updated_at))
            .with(CATEGORY, Value::Text(article.meta.category.clone()))
            .with(TAGS, Value::List(article.meta.tags.clone()));
        if let Some(serie) = &article.meta.serie {
            metadata.insert(SERIE, Value::Text(serie.slug.clone()));
            metadata.insert(SERIE_ORDER, Value::Integer(serie.order));
        }
        RenderedFile {
            path: self.path(article, stage),
            content: frontmatter::render(&schema::ARTICLE, &metadata, &article.content),
        }
    }

    /// Writes `article` into `stage`. A file for the same slug and locale
    /// under another date is removed in the same step.
    pub fn upsert(&self, article: &Article, stage: Stage) -> Result<(), RepositoryError> {
        let file = self.render(article, stage);
        let stale = self.matching(&article.slug, &article.locale, stage)?;
        self.collection.replace(&file, &stale)
    }

    pub fn delete(&self, article: &Article, stage: Stage) -> Result<(), RepositoryError> {
        let path = self.locate(article, stage)?;
        self.collection.remove(&path)
    }

    pub fn publish(&self, article: &Article) -> Result<(), RepositoryError> {
        self.move_to(article, Stage::Published)
    }

    pub fn unpublish(&self, article: &Article) -> Result<(), RepositoryError> {
        self.move_to(article, Stage::Drafts)
    }

    fn move_to(&self, article: &Article, target: Stage) -> Result<(), RepositoryError> {
        let source = self.locate(article, target.other())?;
        if !source.is_file() {
            return Err(RepositoryError::FileNotFound(source));
        }
        let file = self.render(article, target);
        let mut obsolete = vec![source];
        obsolete.extend(self.matching(&article.slug, &article.locale, target)?);
        self.collection.replace(&file, &obsolete)?;
        info!("Moved article {} ({}) to {target}", article.slug, article.locale);
        Ok(())
    }

    fn locate(&self, article: &Article, stage: Stage) -> Result<Utf8PathBuf, RepositoryError> {
        Ok(self
            .find(&article.slug, &article.locale, stage)?
            .unwrap_or_else(|| self.path(article, stage)))
    }

    /// Renames the article file `file` of `stage` to `new_slug`, keeping its
    /// date and locale. `file` is resolved against the stage directory.
    /// Fails when `new_slug` is already taken in that locale, whatever date
    /// the other file carries. Returns the new path.
    pub fn rename_slug(&self, file: &Utf8Path, new_slug: &str, stage: Stage) -> Result<Utf8PathBuf, RepositoryError> {
        filename::validate_slug(new_slug)?;
        let source = self.collection.dir(stage).join(file.file_name().unwrap_or(file.as_str()));
        if !source.is_file() {
            return Err(RepositoryError::FileNotFound(source));
        }
        let name = self.collection.file_name(&source, Dating::Dated)?;
        if let Some(existing) = self.find(new_slug, &name.locale, stage)? {
            return Err(RepositoryError::AlreadyExists(existing));
        }
        let target = self.collection.path(
            stage,
            &FileName {
                stem: new_slug.to_owned(),
                ..name
            },
        );
        self.collection.rename(&source, &target)?;
        Ok(target)
    }
}
