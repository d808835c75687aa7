use std::io;

use camino::{Utf8Path as Path, Utf8PathBuf as PathBuf};

/// Extension of every content file.
pub const CONTENT_EXTENSION: &str = "mdx";

/// Leading character reserved for list-page marker files such as `_articles.en.mdx`.
pub const LIST_PAGE_PREFIX: char = '_';

/// Which files of a collection directory a scan should return.
#[derive(Debug, Clone, Copy)]
pub enum Selection<'a> {
    /// Singleton or list-page files, whose stem before the locale is exactly this name.
    Marker(&'a str),
    /// Per-item files: everything not reserved by the list-page prefix.
    Items,
}

impl Selection<'_> {
    fn accepts(self, file_name: &str) -> bool {
        match self {
            Selection::Marker(name) => file_name
                .strip_prefix(name)
                .is_some_and(|rest| rest.starts_with('.')),
            Selection::Items => !file_name.starts_with(LIST_PAGE_PREFIX),
        }
    }
}

pub fn path_has_extensions(path: &Path, extensions: &[&str]) -> bool {
    path.extension().is_some_and(|ext| extensions.contains(&ext))
}

/// Regular files in `dir` with one of `extensions`, sorted by path.
///
/// A missing directory is an empty collection, not an error.
pub fn filepaths_with_extensions(dir: &Path, extensions: &[&str]) -> Result<Vec<PathBuf>, io::Error> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }
    let mut paths = dir
        .read_dir_utf8()?
        .filter_map(|entry| {
            entry
                .map(|entry| {
                    let path = entry.path().to_path_buf();
                    if !path.is_file() {
                        return None;
                    }
                    if path_has_extensions(&path, extensions) {
                        Some(path)
                    } else {
                        None
                    }
                })
                .transpose()
        })
        .collect::<Result<Vec<_>, _>>()?;
    paths.sort();
    Ok(paths)
}

/// Content files of one stage directory matching `selection`.
pub fn content_files(dir: &Path, selection: Selection<'_>) -> Result<Vec<PathBuf>, io::Error> {
    Ok(filepaths_with_extensions(dir, &[CONTENT_EXTENSION])?
        .into_iter()
        .filter(|path| path.file_name().is_some_and(|name| selection.accepts(name)))
        .collect())
}

/// Writes `contents` next to `path` and renames it into place, so readers never
/// observe a half-written file.
pub fn write_atomic(path: &Path, contents: &str) -> Result<(), io::Error> {
    let file_name = path
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, format!("{path} has no file name")))?;
    let tmp = path.with_file_name(format!(".{file_name}.tmp"));
    std::fs::write(&tmp, contents)?;
    if let Err(err) = std::fs::rename(&tmp, path) {
        let _ = std::fs::remove_file(&tmp);
        return Err(err);
    }
    Ok(())
}
