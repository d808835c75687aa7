//! Filesystem notifications for the content tree, reduced to the few events a
//! content check cares about.

use camino::{Utf8Path, Utf8PathBuf};
use notify::{RecommendedWatcher, RecursiveMode, Watcher};
use tracing::{debug, warn};

use crate::fs::{path_has_extensions, CONTENT_EXTENSION};

#[derive(Debug, thiserror::Error)]
pub enum WatchError {
    #[error("Failed to watch {path}: {source}")]
    Notify {
        path: Utf8PathBuf,
        #[source]
        source: notify::Error,
    },
}

// The events we care about, everything else is ignored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsEvent {
    Create,
    Edit,
    Rename,
    Delete,
    Ignored,
}

impl From<notify::EventKind> for FsEvent {
    fn from(event_kind: notify::EventKind) -> Self {
        use notify::event::{CreateKind, EventKind, ModifyKind, RemoveKind};
        match event_kind {
            EventKind::Modify(ModifyKind::Name(_)) => Self::Rename,
            EventKind::Modify(ModifyKind::Data(_) | ModifyKind::Any) => Self::Edit,
            EventKind::Remove(RemoveKind::File | RemoveKind::Any) => Self::Delete,
            EventKind::Create(CreateKind::File | CreateKind::Any) => Self::Create,
            _ => Self::Ignored,
        }
    }
}

/// A content file that changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    pub event: FsEvent,
    pub path: Utf8PathBuf,
}

/// Forwards changes to `.mdx` files to a callback.
pub struct ChangeHandler<F> {
    on_change: F,
}

impl<F: FnMut(Change)> ChangeHandler<F> {
    pub fn new(on_change: F) -> Self {
        Self { on_change }
    }
}

impl<F: FnMut(Change) + Send + 'static> notify::EventHandler for ChangeHandler<F> {
    fn handle_event(&mut self, event: notify::Result<notify::Event>) {
        let event = match event {
            Ok(event) => event,
            Err(err) => {
                warn!("Watch error: {err}");
                return;
            }
        };
        let fs_event = FsEvent::from(event.kind);
        if fs_event == FsEvent::Ignored {
            debug!("Ignoring watch event {:?}", event.kind);
            return;
        }
        for path in event.paths {
            let path = match Utf8PathBuf::try_from(path) {
                Ok(path) => path,
                Err(err) => {
                    warn!("Skipping non UTF-8 path in watch event: {err}");
                    continue;
                }
            };
            if !path_has_extensions(&path, &[CONTENT_EXTENSION]) {
                continue;
            }
            (self.on_change)(Change { event: fs_event, path });
        }
    }
}

/// Watches `dir` recursively until the returned watcher is dropped.
pub fn watch<F>(dir: &Utf8Path, on_change: F) -> Result<RecommendedWatcher, WatchError>
where
    F: FnMut(Change) + Send + 'static,
{
    let notify_error = |source| WatchError::Notify {
        path: dir.to_owned(),
        source,
    };
    let mut watcher = notify::recommended_watcher(ChangeHandler::new(on_change)).map_err(notify_error)?;
    watcher
        .watch(dir.as_std_path(), RecursiveMode::Recursive)
        .map_err(notify_error)?;
    debug!("Watching {dir}");
    Ok(watcher)
}
