// SPDX-License-Identifier: MPL-2.0
//! `image_manager` is the navigation core of an image manager tab for an
//! image-generation UI.
//!
//! It lists the date-named folders under one root directory, lists the images
//! in a folder newest first, and pages through them with clamped index
//! arithmetic. The optional delete action removes the displayed file and
//! re-reads the folder. Rendering and gesture dispatch belong to the host.

#![doc(html_root_url = "https://docs.rs/image_manager/0.1.0")]

pub mod config;
pub mod directory_scanner;
pub mod error;
pub mod gallery;
pub mod image_navigation;

pub use gallery::{DeleteOutcome, GalleryNavigator};
pub use image_navigation::{Direction, NavigationInfo, NavigationPhase, NavigationState};
