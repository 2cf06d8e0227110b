// SPDX-License-Identifier: MPL-2.0
//! Gallery navigator binding the image root to navigation states.
//!
//! The presentation layer owns one [`NavigationState`] per session and
//! forwards each user gesture here: folder chosen, refresh, delete. Index
//! gestures (thumbnail click, Previous/Next, Home/End) go straight to the
//! state's own methods since they need no filesystem access.
//!
//! # Examples
//!
//! ```no_run
//! use image_manager::config;
//! use image_manager::gallery::GalleryNavigator;
//! use image_manager::image_navigation::Direction;
//!
//! let config = config::load().unwrap_or_default();
//! let gallery = GalleryNavigator::from_config(&config).expect("no image root");
//!
//! let state = gallery.initialize();
//! let state = state.step(Direction::Next);
//! let (state, outcome) = gallery.delete_current(state);
//! println!("{}", outcome.message());
//! # let _ = state;
//! ```

use crate::config::{Config, FolderSortKey};
use crate::directory_scanner::{self, FolderEntry, ImageEntry};
use crate::error::Result;
use crate::image_navigation::NavigationState;
use std::fmt;
use std::fs;
use std::path::{Component, Path, PathBuf};
use std::time::SystemTime;

/// Result of a delete request, reported back to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The file was removed.
    Deleted { file_name: String },
    /// There was no displayed image.
    NothingToDelete,
    /// The file was refused or the filesystem failed; the state was left as it was.
    Failed { file_name: String, reason: String },
}

impl DeleteOutcome {
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, DeleteOutcome::Deleted { .. })
    }

    /// Human-readable status line.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for DeleteOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeleteOutcome::Deleted { file_name } => write!(f, "Deleted {}", file_name),
            DeleteOutcome::NothingToDelete => write!(f, "No image to delete"),
            DeleteOutcome::Failed { reason, .. } => write!(f, "Error: {}", reason),
        }
    }
}

/// Filesystem-facing navigator over one image root.
///
/// Holds no navigation state of its own, so one instance can serve any
/// number of sessions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryNavigator {
    root: PathBuf,
    folder_sort: FolderSortKey,
}

impl GalleryNavigator {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, folder_sort: FolderSortKey) -> Self {
        Self {
            root: root.into(),
            folder_sort,
        }
    }

    /// Creates a navigator from the user's settings.
    ///
    /// # Errors
    ///
    /// Returns an error if no root is configured and the home directory is unknown.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(config.resolved_root()?, config.folder_sort_key()))
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn folder_sort(&self) -> FolderSortKey {
        self.folder_sort
    }

    /// Whether the root directory exists. [`Self::list_folders`] treats a
    /// missing root like an empty one; callers wanting to tell them apart ask here.
    #[must_use]
    pub fn root_exists(&self) -> bool {
        self.root.is_dir()
    }

    /// Lists the folders under the root, newest first.
    #[must_use]
    pub fn list_folders(&self) -> Vec<FolderEntry> {
        directory_scanner::list_folders(&self.root, self.folder_sort)
    }

    /// Lists the images in the named folder, newest first.
    ///
    /// A name that is not a plain folder under the root yields no images.
    #[must_use]
    pub fn list_images(&self, folder: &str) -> Vec<ImageEntry> {
        directory_scanner::folder_path(&self.root, folder)
            .map(|path| directory_scanner::list_images(&path))
            .unwrap_or_default()
    }

    /// Selects a folder by name and positions on its newest image.
    #[must_use]
    pub fn select_folder(&self, folder: &str) -> NavigationState {
        let Some(path) = directory_scanner::folder_path(&self.root, folder) else {
            tracing::debug!(folder, "rejected folder name outside the image root");
            return NavigationState::for_folder(detached_folder(folder), Vec::new());
        };

        let entry = FolderEntry {
            name: folder.to_string(),
            modified: fs::metadata(&path)
                .and_then(|metadata| metadata.modified())
                .unwrap_or(SystemTime::UNIX_EPOCH),
            path,
        };
        self.select_entry(entry)
    }

    /// Selects an entry previously returned by [`Self::list_folders`].
    ///
    /// An entry whose path is not directly under the root lists no images.
    #[must_use]
    pub fn select_entry(&self, folder: FolderEntry) -> NavigationState {
        if !self.is_root_folder(&folder.path) {
            tracing::warn!(path = %folder.path.display(), "rejected folder outside the image root");
            return NavigationState::for_folder(folder, Vec::new());
        }
        let images = directory_scanner::list_images(&folder.path);
        tracing::debug!(folder = %folder.name, images = images.len(), "selected folder");
        NavigationState::for_folder(folder, images)
    }

    /// Selects the newest folder, or returns the `NoFolder` state if there is none.
    #[must_use]
    pub fn initialize(&self) -> NavigationState {
        self.refresh().1
    }

    /// Re-reads the folder list and selects its newest folder.
    #[must_use]
    pub fn refresh(&self) -> (Vec<FolderEntry>, NavigationState) {
        let folders = self.list_folders();
        tracing::debug!(root = %self.root.display(), folders = folders.len(), "refreshed folders");
        let state = match folders.first() {
            Some(newest) => self.select_entry(newest.clone()),
            None => NavigationState::new(),
        };
        (folders, state)
    }

    fn is_root_folder(&self, folder: &Path) -> bool {
        matches!(folder.components().next_back(), Some(Component::Normal(_)))
            && folder.parent() == Some(self.root.as_path())
    }

    /// Deletes the displayed image and re-reads its folder.
    ///
    /// Only a supported image directly inside the current folder, itself
    /// directly under the root, is ever removed.
    ///
    /// On failure the given state is returned untouched alongside the reason.
    #[must_use]
    pub fn delete_current(&self, state: NavigationState) -> (NavigationState, DeleteOutcome) {
        let Some((path, file_name)) = state
            .current_image()
            .map(|image| (image.path.clone(), image.file_name.clone()))
        else {
            return (state, DeleteOutcome::NothingToDelete);
        };
        let Some(folder_path) = state.current_folder().map(|folder| folder.path.clone()) else {
            return (state, DeleteOutcome::NothingToDelete);
        };

        if !self.is_root_folder(&folder_path)
            || path.parent() != Some(folder_path.as_path())
            || !directory_scanner::is_supported_image(&path)
        {
            tracing::warn!(path = %path.display(), "refused to delete file outside the image root");
            let reason = "not an image in the selected folder".to_string();
            return (state, DeleteOutcome::Failed { file_name, reason });
        }

        if let Err(err) = fs::remove_file(&path) {
            tracing::warn!(path = %path.display(), error = %err, "failed to delete image");
            let reason = err.to_string();
            return (state, DeleteOutcome::Failed { file_name, reason });
        }
        tracing::info!(path = %path.display(), "deleted image");

        let images = directory_scanner::list_images(&folder_path);
        (state.with_images(images), DeleteOutcome::Deleted { file_name })
    }
}

/// Folder entry for a name that cannot be resolved; it never lists images.
fn detached_folder(name: &str) -> FolderEntry {
    FolderEntry {
        name: name.to_string(),
        path: PathBuf::new(),
        modified: SystemTime::UNIX_EPOCH,
    }
}
