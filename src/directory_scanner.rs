// SPDX-License-Identifier: MPL-2.0
//! Directory scanner module for finding and sorting folders and images.
//!
//! The root directory holds one subdirectory per generation session. This
//! module lists those folders and the image files inside one of them, newest
//! first. Every listing is read fresh from the filesystem; nothing is cached.
//!
//! Missing directories are an expected steady state, so listings never fail:
//! an absent or unreadable directory yields an empty list.

use crate::config::{FolderSortKey, IMAGE_EXTENSIONS};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fs;
use std::path::{Component, Path, PathBuf};
use std::time::SystemTime;

/// An immediate subdirectory of the image root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderEntry {
    pub name: String,
    pub path: PathBuf,
    pub modified: SystemTime,
}

/// A supported image file inside a folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageEntry {
    pub file_name: String,
    pub path: PathBuf,
    pub modified: SystemTime,
}

/// Lists every immediate subdirectory of `root`, sorted descending by `sort_key`.
///
/// Returns an empty list if `root` does not exist or cannot be read.
pub fn list_folders(root: &Path, sort_key: FolderSortKey) -> Vec<FolderEntry> {
    let Some(entries) = read_dir_soft(root) else {
        return Vec::new();
    };

    let mut folders: Vec<FolderEntry> = entries
        .filter(|(_, metadata)| metadata.is_dir())
        .filter_map(|(path, metadata)| {
            // Folders are selected by name, so the name must round-trip.
            let Some(name) = path.file_name()?.to_str().map(str::to_owned) else {
                tracing::warn!(path = %path.display(), "skipping folder with non-UTF-8 name");
                return None;
            };
            Some(FolderEntry {
                name,
                modified: modified_or_epoch(&metadata),
                path,
            })
        })
        .collect();

    sort_folders(&mut folders, sort_key);
    folders
}

/// Lists the supported images directly inside `folder`, newest first.
///
/// Returns an empty list if the folder is missing, empty, or unreadable.
pub fn list_images(folder: &Path) -> Vec<ImageEntry> {
    let Some(entries) = read_dir_soft(folder) else {
        return Vec::new();
    };

    let mut images: Vec<ImageEntry> = entries
        .filter(|(path, metadata)| metadata.is_file() && is_supported_image(path))
        .filter_map(|(path, metadata)| {
            let file_name = path.file_name()?.to_string_lossy().into_owned();
            Some(ImageEntry {
                file_name,
                modified: modified_or_epoch(&metadata),
                path,
            })
        })
        .collect();

    sort_images(&mut images);
    images
}

/// Resolves a folder name against `root`.
///
/// Only plain single-component names are accepted, so a folder can never
/// point outside the root.
pub fn folder_path(root: &Path, name: &str) -> Option<PathBuf> {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(part)), None) if part == name => Some(root.join(part)),
        _ => None,
    }
}

/// Checks if a file has a supported image extension (case-insensitive).
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|allowed| ext.eq_ignore_ascii_case(allowed))
        })
}

/// Reads a directory, yielding `(path, metadata)` for each readable entry.
///
/// Metadata follows symlinks, so a link to a directory counts as a folder.
fn read_dir_soft(dir: &Path) -> Option<impl Iterator<Item = (PathBuf, fs::Metadata)>> {
    let read_dir = match fs::read_dir(dir) {
        Ok(read_dir) => read_dir,
        Err(err) => {
            tracing::debug!(dir = %dir.display(), error = %err, "directory not readable");
            return None;
        }
    };

    Some(read_dir.filter_map(|entry| {
        let path = match entry {
            Ok(entry) => entry.path(),
            Err(err) => {
                tracing::warn!(error = %err, "skipping unreadable directory entry");
                return None;
            }
        };
        match fs::metadata(&path) {
            Ok(metadata) => Some((path, metadata)),
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "skipping entry without metadata");
                None
            }
        }
    }))
}

fn modified_or_epoch(metadata: &fs::Metadata) -> SystemTime {
    metadata.modified().unwrap_or(SystemTime::UNIX_EPOCH)
}

fn sort_folders(folders: &mut [FolderEntry], sort_key: FolderSortKey) {
    match sort_key {
        FolderSortKey::Name => {
            folders.sort_by(|a, b| b.name.cmp(&a.name));
        }
        FolderSortKey::Modified => {
            folders.sort_by(|a, b| {
                b.modified
                    .cmp(&a.modified)
                    .then_with(|| b.name.cmp(&a.name))
            });
        }
    }
}

fn sort_images(images: &mut [ImageEntry]) {
    images.sort_by(|a, b| match b.modified.cmp(&a.modified) {
        Ordering::Equal => a.file_name.cmp(&b.file_name),
        other => other,
    });
}
