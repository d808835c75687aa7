//! Pages with one file per locale per stage: singleton pages such as `home`
//! and the `_{collection}` list pages sitting next to a collection's items.

use camino::{Utf8Path, Utf8PathBuf};
use tracing::info;

use super::{today, Collection, Layout, RenderedFile, RepositoryError};
use crate::filename::{Dating, FileName};
use crate::frontmatter::schema::{self, CATCHLINE, DESCRIPTION, TITLE, UPDATED_AT};
use crate::frontmatter::{self, Metadata, Value};
use crate::fs::{Selection, LIST_PAGE_PREFIX};
use crate::model::{Page, Seo};
use crate::stage::Stage;

/// Shared engine behind both page repository variants.
#[derive(Debug, Clone)]
pub struct PageStore {
    collection: Collection,
    /// File stem shared by every locale, e.g. `home` or `_articles`.
    name: String,
}

impl PageStore {
    fn new(collection: Collection, name: String) -> Self {
        Self { collection, name }
    }

    fn file_name(&self, locale: &str) -> FileName {
        FileName::undated(self.name.as_str(), locale)
    }

    fn path(&self, stage: Stage, locale: &str) -> Utf8PathBuf {
        self.collection.path(stage, &self.file_name(locale))
    }

    fn read(&self, path: &Utf8Path, stage: Stage) -> Result<Page, RepositoryError> {
        let doc = self.collection.read(path, stage, &schema::PAGE)?;
        let locale = self.collection.file_name(path, Dating::Undated)?.locale;
        let m = &doc.metadata;
        let title = m.text_or_empty(TITLE);
        let description = m.text_or_empty(DESCRIPTION);
        Ok(Page {
            seo: Seo::mirror(&title, &description),
            title,
            catchline: m.text_or_empty(CATCHLINE),
            description,
            locale,
            updated_at: m.date(UPDATED_AT).unwrap_or_else(today),
            content: doc.body,
        })
    }

    /// Seeds an empty draft for `locale` unless one exists in either stage.
    fn seed(&self, locale: &str) -> Result<bool, RepositoryError> {
        self.collection.setup()?;
        if self.path(Stage::Drafts, locale).exists() || self.path(Stage::Published, locale).exists() {
            return Ok(false);
        }
        self.upsert(&Page::blank(locale, today()), Stage::Drafts)?;
        info!("Seeded {} draft for locale {locale}", self.name);
        Ok(true)
    }

    fn render(&self, page: &Page, stage: Stage) -> RenderedFile {
        let metadata = Metadata::new()
            .with(TITLE, Value::Text(page.title.clone()))
            .with(CATCHLINE, Value::Text(page.catchline.clone()))
            .with(DESCRIPTION, Value::Text(page.description.clone()))
            .with(UPDATED_AT, Value::Date(page.updated_at));
        RenderedFile {
            path: self.path(stage, &page.locale),
            content: frontmatter::render(&schema::PAGE, &metadata, &page.content),
        }
    }

    fn upsert(&self, page: &Page, stage: Stage) -> Result<(), RepositoryError> {
        self.collection.write(&self.render(page, stage))
    }
}

/// Operations common to singleton and list pages.
pub trait PageRepository {
    fn store(&self) -> &PageStore;

    /// Pages of `stage`, one per locale, in locale order.
    fn all(&self, stage: Stage) -> Result<Vec<Page>, RepositoryError> {
        let store = self.store();
        store
            .collection
            .files(stage, Selection::Marker(&store.name))?
            .iter()
            .map(|path| store.read(path, stage))
            .collect()
    }

    fn by_locale(&self, locale: &str, stage: Stage) -> Result<Option<Page>, RepositoryError> {
        let store = self.store();
        let path = store.path(stage, locale);
        if !path.is_file() {
            return Ok(None);
        }
        store.read(&path, stage).map(Some)
    }

    fn render(&self, page: &Page, stage: Stage) -> RenderedFile {
        self.store().render(page, stage)
    }

    fn upsert(&self, page: &Page, stage: Stage) -> Result<(), RepositoryError> {
        self.store().upsert(page, stage)
    }

    fn delete(&self, page: &Page, stage: Stage) -> Result<(), RepositoryError> {
        let store = self.store();
        store.collection.remove(&store.path(stage, &page.locale))
    }

    fn publish(&self, page: &Page) -> Result<(), RepositoryError> {
        move_page(self.store(), page, Stage::Drafts)
    }

    fn unpublish(&self, page: &Page) -> Result<(), RepositoryError> {
        move_page(self.store(), page, Stage::Published)
    }
}

fn move_page(store: &PageStore, page: &Page, from: Stage) -> Result<(), RepositoryError> {
    let source = store.path(from, &page.locale);
    store.collection.transfer(&source, &store.render(page, from.other()))?;
    info!("Moved {} ({}) from {from} to {}", store.name, page.locale, from.other());
    Ok(())
}

/// A page that exists once per locale in its own directory, named after the
/// page: `content/home/home.en.mdx`.
#[derive(Debug, Clone)]
pub struct SingletonPageRepository {
    store: PageStore,
}

impl SingletonPageRepository {
    #[must_use]
    pub fn new(layout: &Layout, page_name: &str) -> Self {
        Self {
            store: PageStore::new(layout.collection(page_name), page_name.to_owned()),
        }
    }

    #[must_use]
    pub fn home(layout: &Layout) -> Self {
        Self::new(layout, "home")
    }

    pub fn setup(&self) -> Result<(), RepositoryError> {
        self.store.collection.setup()
    }

    /// Seeds an empty draft for `locale` if the page exists in neither stage.
    /// Returns whether a file was created.
    pub fn force_file_creation(&self, locale: &str) -> Result<bool, RepositoryError> {
        self.store.seed(locale)
    }
}

impl PageRepository for SingletonPageRepository {
    fn store(&self) -> &PageStore {
        &self.store
    }
}

/// The base page of a collection listing, stored beside the collection's items
/// with an underscore prefix: `content/articles/_articles.en.mdx`.
#[derive(Debug, Clone)]
pub struct ListPageRepository {
    store: PageStore,
}

impl ListPageRepository {
    /// `collection_name` is the plural collection, e.g. `articles`.
    #[must_use]
    pub fn new(layout: &Layout, collection_name: &str) -> Self {
        Self {
            store: PageStore::new(
                layout.collection(collection_name),
                format!("{LIST_PAGE_PREFIX}{collection_name}"),
            ),
        }
    }

    /// Ensures both stage directories exist and seeds an empty draft for
    /// `locale` if the list page exists in neither stage.
    pub fn setup(&self, locale: &str) -> Result<bool, RepositoryError> {
        self.store.seed(locale)
    }
}

impl PageRepository for ListPageRepository {
    fn store(&self) -> &PageStore {
        &self.store
    }
}
