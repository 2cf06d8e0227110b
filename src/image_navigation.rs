// SPDX-License-Identifier: MPL-2.0
//! Image navigation module for the folder / image list / index triple.
//!
//! [`NavigationState`] is a plain value owned by one session. Every operation
//! here consumes a state and returns the next one; nothing touches the
//! filesystem. Operations that need the filesystem (selecting a folder,
//! deleting the current image) live on [`crate::gallery::GalleryNavigator`].

use crate::directory_scanner::{FolderEntry, ImageEntry};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Step direction for Previous/Next controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Previous,
    Next,
}

/// Which of the three navigation states a [`NavigationState`] is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationPhase {
    /// No folder has been selected (or none exists).
    NoFolder,
    /// A folder is selected but holds no images.
    FolderEmpty,
    /// Images are listed and the index points at one of them.
    Browsing,
}

/// Navigation state information for UI rendering.
///
/// A read-only snapshot of a [`NavigationState`], so a renderer can draw
/// navigation controls without inspecting the image list.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationInfo {
    /// Whether stepping previous would move.
    pub has_previous: bool,
    /// Whether stepping next would move.
    pub has_next: bool,
    pub at_first: bool,
    pub at_last: bool,
    /// Current position (0-indexed), `None` unless browsing.
    pub current_index: Option<usize>,
    pub total_count: usize,
}

impl NavigationInfo {
    /// One-based position label such as `3 / 10`, empty when there are no images.
    #[must_use]
    pub fn position_label(&self) -> String {
        match self.current_index {
            Some(index) => format!("{} / {}", index + 1, self.total_count),
            None => String::new(),
        }
    }
}

/// The current folder, its ordered images, and the displayed index.
///
/// If `images` is non-empty, `current_index < images.len()`; otherwise
/// `current_index == 0` and nothing is displayed. Deserialized states are
/// clamped back into that range.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StoredNavigationState")]
pub struct NavigationState {
    current_folder: Option<FolderEntry>,
    images: Vec<ImageEntry>,
    current_index: usize,
}

/// Wire form of [`NavigationState`], before the index is checked.
#[derive(Deserialize)]
struct StoredNavigationState {
    current_folder: Option<FolderEntry>,
    #[serde(default)]
    images: Vec<ImageEntry>,
    #[serde(default)]
    current_index: usize,
}

impl From<StoredNavigationState> for NavigationState {
    fn from(stored: StoredNavigationState) -> Self {
        Self {
            current_folder: stored.current_folder,
            current_index: clamp_index(stored.current_index, stored.images.len()),
            images: stored.images,
        }
    }
}

impl NavigationState {
    /// Creates the `NoFolder` state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a state for a freshly listed folder, positioned at the first image.
    #[must_use]
    pub fn for_folder(folder: FolderEntry, images: Vec<ImageEntry>) -> Self {
        Self {
            current_folder: Some(folder),
            images,
            current_index: 0,
        }
    }

    /// Replaces the image list after a re-read, keeping the index in range.
    #[must_use]
    pub(crate) fn with_images(self, images: Vec<ImageEntry>) -> Self {
        let current_index = clamp_index(self.current_index, images.len());
        Self {
            current_folder: self.current_folder,
            images,
            current_index,
        }
    }

    #[must_use]
    pub fn current_folder(&self) -> Option<&FolderEntry> {
        self.current_folder.as_ref()
    }

    #[must_use]
    pub fn images(&self) -> &[ImageEntry] {
        &self.images
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Returns the displayed image, if any.
    #[must_use]
    pub fn current_image(&self) -> Option<&ImageEntry> {
        self.images.get(self.current_index)
    }

    #[must_use]
    pub fn current_image_path(&self) -> Option<&Path> {
        self.current_image().map(|image| image.path.as_path())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    #[must_use]
    pub fn phase(&self) -> NavigationPhase {
        match (&self.current_folder, self.images.is_empty()) {
            (None, _) => NavigationPhase::NoFolder,
            (Some(_), true) => NavigationPhase::FolderEmpty,
            (Some(_), false) => NavigationPhase::Browsing,
        }
    }

    /// Moves to `index`, clamped into the image list. No-op outside `Browsing`.
    #[must_use]
    pub fn select_index(mut self, index: usize) -> Self {
        if self.phase() == NavigationPhase::Browsing {
            self.current_index = clamp_index(index, self.images.len());
        }
        self
    }

    /// Steps one image in `direction`. Stops at either end rather than wrapping.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        let target = match direction {
            Direction::Previous => self.current_index.saturating_sub(1),
            Direction::Next => self.current_index.saturating_add(1),
        };
        self.select_index(target)
    }

    /// Jumps to the newest image (Home).
    #[must_use]
    pub fn first(self) -> Self {
        self.select_index(0)
    }

    /// Jumps to the oldest image (End).
    #[must_use]
    pub fn last(self) -> Self {
        self.select_index(usize::MAX)
    }

    /// Paths of the images on either side of the current one, for preloading.
    #[must_use]
    pub fn adjacent_paths(&self) -> (Option<&Path>, Option<&Path>) {
        if self.images.is_empty() {
            return (None, None);
        }
        let previous = self
            .current_index
            .checked_sub(1)
            .and_then(|index| self.images.get(index));
        let next = self.images.get(self.current_index + 1);
        (
            previous.map(|image| image.path.as_path()),
            next.map(|image| image.path.as_path()),
        )
    }

    /// Iterates the thumbnail strip as `(index, image, is_current)`.
    pub fn thumbnails(&self) -> impl Iterator<Item = (usize, &ImageEntry, bool)> + '_ {
        self.images
            .iter()
            .enumerate()
            .map(move |(index, image)| (index, image, index == self.current_index))
    }

    #[must_use]
    pub fn info(&self) -> NavigationInfo {
        let total_count = self.images.len();
        if total_count == 0 {
            return NavigationInfo::default();
        }
        let at_first = self.current_index == 0;
        let at_last = self.current_index + 1 == total_count;
        NavigationInfo {
            has_previous: !at_first,
            has_next: !at_last,
            at_first,
            at_last,
            current_index: Some(self.current_index),
            total_count,
        }
    }
}

fn clamp_index(index: usize, len: usize) -> usize {
    index.min(len.saturating_sub(1))
}
