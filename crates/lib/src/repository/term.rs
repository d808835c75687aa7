use std::fmt;

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::{Collection, Layout, RenderedFile, RepositoryError};
use crate::catalog::{Catalog, Resolved};
use crate::filename::{Dating, FileName};
use crate::frontmatter::schema::{self, CATCHLINE, COLOR, DESCRIPTION, ICON, TITLE};
use crate::frontmatter::{self, Metadata, Value};
use crate::fs::Selection;
use crate::model::{Seo, Term};
use crate::stage::Stage;

/// The three taxonomies sharing the [`Term`] shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TermKind {
    Category,
    Tag,
    Serie,
}

impl TermKind {
    pub const ALL: [TermKind; 3] = [TermKind::Category, TermKind::Tag, TermKind::Serie];

    /// Collection directory name.
    #[must_use]
    pub fn collection(self) -> &'static str {
        match self {
            TermKind::Category => "categories",
            TermKind::Tag => "tags",
            TermKind::Serie => "series",
        }
    }
}

impl fmt::Display for TermKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TermKind::Category => f.write_str("category"),
            TermKind::Tag => f.write_str("tag"),
            TermKind::Serie => f.write_str("serie"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TermRepository {
    kind: TermKind,
    collection: Collection,
    catalog: Catalog,
}

impl TermRepository {
    #[must_use]
    pub fn new(layout: &Layout, kind: TermKind, catalog: Catalog) -> Self {
        Self {
            kind,
            collection: layout.collection(kind.collection()),
            catalog,
        }
    }

    #[must_use]
    pub fn categories(layout: &Layout, catalog: Catalog) -> Self {
        Self::new(layout, TermKind::Category, catalog)
    }

    #[must_use]
    pub fn tags(layout: &Layout, catalog: Catalog) -> Self {
        Self::new(layout, TermKind::Tag, catalog)
    }

    #[must_use]
    pub fn series(layout: &Layout, catalog: Catalog) -> Self {
        Self::new(layout, TermKind::Serie, catalog)
    }

    #[must_use]
    pub fn kind(&self) -> TermKind {
        self.kind
    }

    pub fn setup(&self) -> Result<(), RepositoryError> {
        self.collection.setup()
    }

    /// Every term of `stage` in file name order: slug, then locale.
    pub fn all(&self, stage: Stage) -> Result<Vec<Term>, RepositoryError> {
        self.collection
            .files(stage, Selection::Items)?
            .iter()
            .map(|path| self.read(path, stage))
            .collect()
    }

    /// Reads one term file. Invalid or missing `icon`/`color` values are
    /// replaced by the catalog defaults with a warning.
    pub fn read(&self, path: &Utf8Path, stage: Stage) -> Result<Term, RepositoryError> {
        let doc = self.collection.read(path, stage, &schema::TERM)?;
        let name = self.collection.file_name(path, Dating::Undated)?;
        let m = &doc.metadata;

        let icon = self.settle(self.catalog.resolve_icon(m.text(ICON)), path);
        let color = self.settle(self.catalog.resolve_color(m.text(COLOR)), path);

        let title = m.text_or_empty(TITLE);
        let description = m.text_or_empty(DESCRIPTION);
        Ok(Term {
            seo: Seo::mirror(&title, &description),
            title,
            catchline: m.text_or_empty(CATCHLINE),
            slug: name.stem,
            locale: name.locale,
            description,
            content: doc.body,
            icon,
            color,
        })
    }

    pub fn by_slug(&self, slug: &str, locale: &str, stage: Stage) -> Result<Option<Term>, RepositoryError> {
        let path = self.collection.path(stage, &FileName::undated(slug, locale));
        if !path.is_file() {
            return Ok(None);
        }
        self.read(&path, stage).map(Some)
    }

    fn settle(&self, resolved: Resolved, path: &Utf8Path) -> String {
        if let Some(fallback) = &resolved.fallback {
            warn!("{} {path}: {fallback}", self.kind);
        }
        resolved.value
    }

    #[must_use]
    pub fn path(&self, term: &Term, stage: Stage) -> Utf8PathBuf {
        self.collection
            .path(stage, &FileName::undated(term.slug.as_str(), term.locale.as_str()))
    }

    #[must_use]
    pub fn render(&self, term: &Term, stage: Stage) -> RenderedFile {
        let metadata = Metadata::new()
            .with(TITLE, Value::Text(term.title.clone()))
            .with(CATCHLINE, Value::Text(term.catchline.clone()))
            .with(DESCRIPTION, Value::Text(term.description.clone()))
            .with(ICON, Value::Text(term.icon.clone()))
            .with(COLOR, Value::Text(term.color.clone()));
        RenderedFile {
            path: self.path(term, stage),
            content: frontmatter::render(&schema::TERM, &metadata, &term.content),
        }
    }

    pub fn upsert(&self, term: &Term, stage: Stage) -> Result<(), RepositoryError> {
        self.collection.write(&self.render(term, stage))
    }

    pub fn delete(&self, term: &Term, stage: Stage) -> Result<(), RepositoryError> {
        self.collection.remove(&self.path(term, stage))
    }

    pub fn publish(&self, term: &Term) -> Result<(), RepositoryError> {
        self.move_to(term, Stage::Published)
    }

    pub fn unpublish(&self, term: &Term) -> Result<(), RepositoryError> {
        self.move_to(term, Stage::Drafts)
    }

    fn move_to(&self, term: &Term, target: Stage) -> Result<(), RepositoryError> {
        let source = self.path(term, target.other());
        self.collection.transfer(&source, &self.render(term, target))?;
        info!("Moved {} {} ({}) to {target}", self.kind, term.slug, term.locale);
        Ok(())
    }
}
