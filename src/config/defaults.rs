// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Root**: Where generated-image folders are looked up
//! - **Ordering**: How folders are ordered in the folder picker
//! - **Formats**: Which files count as images

use super::FolderSortKey;

// ==========================================================================
// Root Defaults
// ==========================================================================

/// Root directory for generated images, relative to the user's home directory.
pub const DEFAULT_ROOT_SUBPATH: &str = "StabilityMatrix-linux-x64/Data/Images/Text2Img";

/// Directory name used under the platform config directory.
pub const APP_NAME: &str = "ImageManager";

/// Settings file name.
pub const CONFIG_FILE: &str = "settings.toml";

// ==========================================================================
// Ordering Defaults
// ==========================================================================

/// Folders are named after their generation date, so the name is the default key.
pub const DEFAULT_FOLDER_SORT: FolderSortKey = FolderSortKey::Name;

// ==========================================================================
// Format Defaults
// ==========================================================================

/// Lowercase file extensions recognized as images.
pub const IMAGE_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "webp", "bmp", "tiff"];
