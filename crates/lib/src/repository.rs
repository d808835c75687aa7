//! Stage-aware CRUD over collection directories.
//!
//! Every repository is a projection of what is on disk: `all` scans, reads and
//! parses on each call, and the first malformed file aborts the listing.

pub mod article;
pub mod page;
pub mod term;
pub mod website;

use std::io;

use camino::{Utf8Path, Utf8PathBuf};
use chrono::NaiveDate;
use tracing::{debug, error, info};

use crate::filename::{Dating, FileName, FileNameError};
use crate::frontmatter::{self, Document, ParseError, Schema};
use crate::fs::{self, Selection};
use crate::stage::Stage;

pub use article::ArticleRepository;
pub use page::{ListPageRepository, PageRepository, SingletonPageRepository};
pub use term::{TermKind, TermRepository};
pub use website::WebsiteRepository;

pub const CONTENT_DIR: &str = "content";
pub const DRAFTS_DIR: &str = "drafts";

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("File not found: {0}")]
    FileNotFound(Utf8PathBuf),
    #[error("File already exists: {0}")]
    AlreadyExists(Utf8PathBuf),
    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: Utf8PathBuf,
        #[source]
        source: ParseError,
    },
    #[error(transparent)]
    FileName(#[from] FileNameError),
}

fn io_error(path: &Utf8Path) -> impl FnOnce(io::Error) -> RepositoryError + '_ {
    move |source| RepositoryError::Io {
        path: path.to_owned(),
        source,
    }
}

/// Where content lives and which locales it may use.
#[derive(Debug, Clone)]
pub struct Layout {
    directory: Utf8PathBuf,
    locales: Vec<String>,
}

impl Layout {
    /// An empty `locales` list accepts any well-formed locale.
    #[must_use]
    pub fn new(directory: impl Into<Utf8PathBuf>, locales: Vec<String>) -> Self {
        Self {
            directory: directory.into(),
            locales,
        }
    }

    #[must_use]
    pub fn directory(&self) -> &Utf8Path {
        &self.directory
    }

    #[must_use]
    pub fn content_dir(&self) -> Utf8PathBuf {
        self.directory.join(CONTENT_DIR)
    }

    #[must_use]
    pub fn locales(&self) -> &[String] {
        &self.locales
    }

    #[must_use]
    pub fn collection(&self, name: &str) -> Collection {
        let published = self.content_dir().join(name);
        let drafts = published.join(DRAFTS_DIR);
        Collection {
            published,
            drafts,
            locales: self.locales.clone(),
        }
    }
}

/// A file a repository would write: its path and full text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    pub path: Utf8PathBuf,
    pub content: String,
}

/// The two stage directories of one collection and the file operations the
/// repositories share.
#[derive(Debug, Clone)]
pub struct Collection {
    published: Utf8PathBuf,
    drafts: Utf8PathBuf,
    locales: Vec<String>,
}

impl Collection {
    #[must_use]
    pub fn dir(&self, stage: Stage) -> &Utf8Path {
        match stage {
            Stage::Drafts => &self.drafts,
            Stage::Published => &self.published,
        }
    }

    #[must_use]
    pub fn path(&self, stage: Stage, file_name: &FileName) -> Utf8PathBuf {
        self.dir(stage).join(file_name.encode())
    }

    /// Creates both stage directories. Idempotent.
    pub fn setup(&self) -> Result<(), RepositoryError> {
        for dir in [&self.published, &self.drafts] {
            std::fs::create_dir_all(dir).map_err(io_error(dir))?;
        }
        Ok(())
    }

    pub fn files(&self, stage: Stage, selection: Selection<'_>) -> Result<Vec<Utf8PathBuf>, RepositoryError> {
        let dir = self.dir(stage);
        fs::content_files(dir, selection).map_err(io_error(dir))
    }

    pub fn file_name(&self, path: &Utf8Path, dating: Dating) -> Result<FileName, RepositoryError> {
        let name = path.file_name().unwrap_or(path.as_str());
        Ok(FileName::parse(name, dating, &self.locales)?)
    }

    pub fn read(&self, path: &Utf8Path, stage: Stage, schema: &Schema) -> Result<Document, RepositoryError> {
        debug!("Reading {path} ({stage})");
        let raw = snapshot(path)?;
        frontmatter::parse(&raw, stage, schema).map_err(|source| RepositoryError::Parse {
            path: path.to_owned(),
            source,
        })
    }

    pub fn write(&self, file: &RenderedFile) -> Result<(), RepositoryError> {
        if let Some(dir) = file.path.parent() {
            std::fs::create_dir_all(dir).map_err(io_error(dir))?;
        }
        fs::write_atomic(&file.path, &file.content).map_err(io_error(&file.path))?;
        info!("Wrote {}", file.path);
        Ok(())
    }

    pub fn remove(&self, path: &Utf8Path) -> Result<(), RepositoryError> {
        if !path.is_file() {
            return Err(RepositoryError::FileNotFound(path.to_owned()));
        }
        std::fs::remove_file(path).map_err(io_error(path))?;
        info!("Removed {path}");
        Ok(())
    }

    /// Moves an entity between stages as one step: `file` is written into the
    /// target stage, then `source` is removed. If the removal fails the target
    /// is put back the way it was, so the entity never ends up in both stages.
    pub fn transfer(&self, source: &Utf8Path, file: &RenderedFile) -> Result<(), RepositoryError> {
        if !source.is_file() {
            return Err(RepositoryError::FileNotFound(source.to_owned()));
        }
        self.replace(file, &[source.to_owned()])
    }

    /// Writes `file` and removes every `obsolete` path as one step. When a
    /// removal fails, the files already removed are written back and the
    /// target regains its previous content.
    pub fn replace(&self, file: &RenderedFile, obsolete: &[Utf8PathBuf]) -> Result<(), RepositoryError> {
        let previous = if file.path.is_file() {
            Some(snapshot(&file.path)?)
        } else {
            None
        };
        let backups = obsolete
            .iter()
            .filter(|path| **path != file.path)
            .map(|path| snapshot(path).map(|content| (path.as_path(), content)))
            .collect::<Result<Vec<_>, _>>()?;

        self.write(file)?;

        for (done, (path, _)) in backups.iter().enumerate() {
            if let Err(err) = self.remove(path) {
                roll_back(file, previous.as_deref(), &backups[..done]);
                return Err(err);
            }
        }
        Ok(())
    }

    /// Renames `from` to `to` within a stage directory, refusing to overwrite.
    pub fn rename(&self, from: &Utf8Path, to: &Utf8Path) -> Result<(), RepositoryError> {
        if !from.is_file() {
            return Err(RepositoryError::FileNotFound(from.to_owned()));
        }
        if to.exists() {
            return Err(RepositoryError::AlreadyExists(to.to_owned()));
        }
        std::fs::rename(from, to).map_err(io_error(from))?;
        info!("Renamed {from} to {to}");
        Ok(())
    }
}

fn snapshot(path: &Utf8Path) -> Result<String, RepositoryError> {
    std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            RepositoryError::FileNotFound(path.to_owned())
        } else {
            RepositoryError::Io {
                path: path.to_owned(),
                source,
            }
        }
    })
}

fn roll_back(file: &RenderedFile, previous: Option<&str>, removed: &[(&Utf8Path, String)]) {
    for (path, content) in removed {
        if let Err(err) = fs::write_atomic(path, content) {
            error!("Failed to restore {path} after a failed write: {err}");
        }
    }
    let restored = match previous {
        Some(content) => fs::write_atomic(&file.path, content),
        None => std::fs::remove_file(&file.path),
    };
    if let Err(err) = restored {
        error!("Failed to roll back {} after a failed write: {err}", file.path);
    }
}

pub(crate) fn today() -> NaiveDate {
    chrono::Utc::now().date_naive()
}


#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::test_support::Project;
    use super::{RenderedFile, RepositoryError};
    use crate::stage::Stage;

    #[test]
    fn transfer_moves_between_stages() {
        let project = Project::new();
        let collection = project.layout.collection("tags");
        collection.setup().unwrap();
        let source = project.write("tags/drafts/rust.en.mdx", "old");
        let file = RenderedFile {
            path: collection.dir(Stage::Published).join("rust.en.mdx"),
            content: "new".to_owned(),
        };

        collection.transfer(&source, &file).unwrap();

        assert!(!project.exists("tags/drafts/rust.en.mdx"));
        assert_eq!("new", project.read("tags/rust.en.mdx"));
    }

    #[test]
    fn transfer_without_source_writes_nothing() {
        let project = Project::new();
        let collection = project.layout.collection("tags");
        let source = collection.dir(Stage::Drafts).join("rust.en.mdx");
        let file = RenderedFile {
            path: collection.dir(Stage::Published).join("rust.en.mdx"),
            content: "new".to_owned(),
        };

        let err = collection.transfer(&source, &file).unwrap_err();

        assert!(matches!(err, RepositoryError::FileNotFound(_)));
        assert!(!project.exists("tags/rust.en.mdx"));
    }

    #[test]
    fn replace_removes_obsolete_files() {
        let project = Project::new();
        let collection = project.layout.collection("articles");
        let stale = project.write("articles/2024-01-01-hello.en.mdx", "old");
        let file = RenderedFile {
            path: collection.dir(Stage::Published).join("2024-02-01-hello.en.mdx"),
            content: "new".to_owned(),
        };

        collection.replace(&file, &[stale, file.path.clone()]).unwrap();

        assert!(!project.exists("articles/2024-01-01-hello.en.mdx"));
        assert_eq!("new", project.read("articles/2024-02-01-hello.en.mdx"));
    }

    #[test]
    fn replace_with_missing_obsolete_writes_nothing() {
        let project = Project::new();
        let collection = project.layout.collection("articles");
        let missing = collection.dir(Stage::Published).join("2024-01-01-gone.en.mdx");
        let file = RenderedFile {
            path: collection.dir(Stage::Published).join("2024-02-01-gone.en.mdx"),
            content: "new".to_owned(),
        };

        let err = collection.replace(&file, &[missing]).unwrap_err();

        assert!(matches!(err, RepositoryError::FileNotFound(_)));
        assert!(!project.exists("articles/2024-02-01-gone.en.mdx"));
    }

    #[test]
    fn remove_missing_file() {
        let project = Project::new();
        let collection = project.layout.collection("tags");
        let path = collection.dir(Stage::Published).join("nope.en.mdx");
        assert!(matches!(
            collection.remove(&path),
            Err(RepositoryError::FileNotFound(p)) if p == path
        ));
    }

    #[test]
    fn setup_is_idempotent() {
        let project = Project::new();
        let collection = project.layout.collection("series");
        collection.setup().unwrap();
        collection.setup().unwrap();
        assert!(collection.dir(Stage::Drafts).is_dir());
        assert!(collection.dir(Stage::Published).is_dir());
    }
}
