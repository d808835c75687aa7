use camino::{Utf8Path, Utf8PathBuf};

use super::{Collection, Layout, RenderedFile, RepositoryError};
use crate::filename::{Dating, FileName};
use crate::frontmatter::schema::{self, CREATOR, LOCALE, NAME, PUBLISHER, TWITTER_PROFILE};
use crate::frontmatter::{self, Metadata, Value};
use crate::fs::Selection;
use crate::model::Website;
use crate::stage::Stage;

pub const WEBSITE: &str = "website";

/// Site-wide metadata: `content/website/website.{locale}.mdx`, front matter
/// only.
#[derive(Debug, Clone)]
pub struct WebsiteRepository {
    collection: Collection,
}

impl WebsiteRepository {
    #[must_use]
    pub fn new(layout: &Layout) -> Self {
        Self {
            collection: layout.collection(WEBSITE),
        }
    }

    pub fn setup(&self) -> Result<(), RepositoryError> {
        self.collection.setup()
    }

    pub fn all(&self, stage: Stage) -> Result<Vec<Website>, RepositoryError> {
        self.collection
            .files(stage, Selection::Marker(WEBSITE))?
            .iter()
            .map(|path| self.read(path, stage))
            .collect()
    }

    /// The file name decides the locale; a `locale` key is only written back.
    pub fn read(&self, path: &Utf8Path, stage: Stage) -> Result<Website, RepositoryError> {
        let doc = self.collection.read(path, stage, &schema::WEBSITE)?;
        let name = self.collection.file_name(path, Dating::Undated)?;
        let m = &doc.metadata;
        Ok(Website {
            name: m.text_or_empty(NAME),
            creator: m.text_or_empty(CREATOR),
            publisher: m.text_or_empty(PUBLISHER),
            twitter_profile: m.text_or_empty(TWITTER_PROFILE),
            locale: name.locale,
        })
    }

    #[must_use]
    pub fn path(&self, website: &Website, stage: Stage) -> Utf8PathBuf {
        self.collection
            .path(stage, &FileName::undated(WEBSITE, website.locale.as_str()))
    }

    #[must_use]
    pub fn render(&self, website: &Website, stage: Stage) -> RenderedFile {
        let metadata = Metadata::new()
            .with(NAME, Value::Text(website.name.clone()))
            .with(CREATOR, Value::Text(website.creator.clone()))
            .with(PUBLISHER, Value::Text(website.publisher.clone()))
            .with(TWITTER_PROFILE, Value::Text(website.twitter_profile.clone()))
            .with(LOCALE, Value::Text(website.locale.clone()));
        RenderedFile {
            path: self.path(website, stage),
            content: frontmatter::render(&schema::WEBSITE, &metadata, ""),
        }
    }

    pub fn upsert(&self, website: &Website, stage: Stage) -> Result<(), RepositoryError> {
        self.collection.write(&self.render(website, stage))
    }
}
