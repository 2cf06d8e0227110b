// SPDX-License-Identifier: MPL-2.0
//! Integration tests for folder selection, paging and deletion against a
//! real directory tree.

use image_manager::config::{self, Config, FolderSortKey};
use image_manager::{DeleteOutcome, Direction, GalleryNavigator, NavigationPhase};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};
use tempfile::tempdir;

fn create_image(dir: &Path, name: &str, secs: u64) -> PathBuf {
    let path = dir.join(name);
    let mut file = fs::File::create(&path).expect("Failed to create image file");
    file.write_all(b"fake image data")
        .expect("Failed to write image file");
    file.set_modified(SystemTime::UNIX_EPOCH + Duration::from_secs(secs))
        .expect("Failed to set mtime");
    path
}

fn create_folder(root: &Path, name: &str) -> PathBuf {
    let path = root.join(name);
    fs::create_dir_all(&path).expect("Failed to create folder");
    path
}

fn file_names(gallery: &GalleryNavigator, folder: &str) -> Vec<String> {
    gallery
        .list_images(folder)
        .into_iter()
        .map(|image| image.file_name)
        .collect()
}

#[test]
fn test_select_folder_orders_images_newest_first() {
    let dir = tempdir().expect("Failed to create temporary directory");
    create_folder(dir.path(), "2024-01-01");
    let february = create_folder(dir.path(), "2024-02-01");
    create_image(&february, "a.png", 1_000);
    create_image(&february, "b.jpg", 2_000);

    let gallery = GalleryNavigator::new(dir.path(), FolderSortKey::Name);
    let folders: Vec<String> = gallery.list_folders().into_iter().map(|f| f.name).collect();
    assert_eq!(folders, ["2024-02-01", "2024-01-01"]);

    let state = gallery.select_folder("2024-02-01");
    let names: Vec<&str> = state.images().iter().map(|i| i.file_name.as_str()).collect();
    assert_eq!(names, ["b.jpg", "a.png"]);
    assert_eq!(state.current_index(), 0);
    assert_eq!(state.phase(), NavigationPhase::Browsing);
}

#[test]
fn test_stepping_clamps_at_both_ends() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let folder = create_folder(dir.path(), "2024-03-01");
    create_image(&folder, "one.png", 300);
    create_image(&folder, "two.png", 200);
    create_image(&folder, "three.png", 100);

    let gallery = GalleryNavigator::new(dir.path(), FolderSortKey::Name);
    let state = gallery.select_folder("2024-03-01");

    let state = state.step(Direction::Previous);
    assert_eq!(state.current_index(), 0);

    let state = state.step(Direction::Next).step(Direction::Next);
    assert_eq!(state.current_index(), 2);

    let state = state.step(Direction::Next);
    assert_eq!(state.current_index(), 2);
    assert_eq!(
        state.current_image().map(|i| i.file_name.as_str()),
        Some("three.png")
    );
}

#[test]
fn test_thumbnail_click_clamps_out_of_range() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let folder = create_folder(dir.path(), "2024-03-01");
    create_image(&folder, "one.png", 300);
    create_image(&folder, "two.png", 200);

    let gallery = GalleryNavigator::new(dir.path(), FolderSortKey::Name);
    let state = gallery.select_folder("2024-03-01").select_index(42);
    assert_eq!(state.current_index(), 1);
}

#[test]
fn test_deleting_every_image_ends_in_empty_folder() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let folder = create_folder(dir.path(), "2024-04-01");
    create_image(&folder, "keep.txt", 100);
    create_image(&folder, "x.png", 200);
    create_image(&folder, "y.webp", 300);

    let gallery = GalleryNavigator::new(dir.path(), FolderSortKey::Name);
    let mut state = gallery.initialize();
    let mut deleted = Vec::new();

    while state.phase() == NavigationPhase::Browsing {
        let before = state.len();
        let (next, outcome) = gallery.delete_current(state);
        match outcome {
            DeleteOutcome::Deleted { file_name } => deleted.push(file_name),
            other => panic!("unexpected outcome: {other}"),
        }
        assert_eq!(next.len(), before - 1);
        state = next;
    }

    assert_eq!(deleted, ["y.webp", "x.png"]);
    assert_eq!(state.phase(), NavigationPhase::FolderEmpty);
    assert_eq!(state.current_index(), 0);
    assert!(file_names(&gallery, "2024-04-01").is_empty());
    assert!(folder.join("keep.txt").exists());

    let (state, outcome) = gallery.delete_current(state);
    assert_eq!(outcome, DeleteOutcome::NothingToDelete);
    assert_eq!(state.phase(), NavigationPhase::FolderEmpty);
}

#[test]
fn test_delete_of_vanished_file_preserves_state() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let folder = create_folder(dir.path(), "2024-05-01");
    let vanished = create_image(&folder, "gone.png", 200);
    create_image(&folder, "stays.png", 100);

    let gallery = GalleryNavigator::new(dir.path(), FolderSortKey::Name);
    let state = gallery.select_folder("2024-05-01");
    fs::remove_file(&vanished).expect("Failed to remove file");

    let (after, outcome) = gallery.delete_current(state.clone());
    assert!(!outcome.is_success());
    assert_eq!(after.images(), state.images());
    assert_eq!(after.current_index(), state.current_index());

    // The next explicit selection reflects the directory again.
    assert_eq!(file_names(&gallery, "2024-05-01"), ["stays.png"]);
}

#[test]
fn test_refresh_picks_up_new_folder() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let january = create_folder(dir.path(), "2024-01-01");
    create_image(&january, "a.png", 100);

    let gallery = GalleryNavigator::new(dir.path(), FolderSortKey::Name);
    let (folders, state) = gallery.refresh();
    assert_eq!(folders.len(), 1);
    assert_eq!(state.current_folder().map(|f| f.name.as_str()), Some("2024-01-01"));

    create_folder(dir.path(), "2024-06-01");
    let (folders, state) = gallery.refresh();
    assert_eq!(folders.len(), 2);
    assert_eq!(state.current_folder().map(|f| f.name.as_str()), Some("2024-06-01"));
    assert_eq!(state.phase(), NavigationPhase::FolderEmpty);
}

#[test]
fn test_navigator_from_saved_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let root = create_folder(dir.path(), "renders");
    let folder = create_folder(&root, "2024-07-01");
    create_image(&folder, "a.bmp", 100);

    let config_path = dir.path().join("settings.toml");
    let saved = Config {
        root_dir: Some(root.clone()),
        folder_sort: Some(FolderSortKey::Modified),
    };
    config::save_to_path(&saved, &config_path).expect("Failed to write config file");

    let loaded = config::load_from_path(&config_path).expect("Failed to load config");
    let gallery = GalleryNavigator::from_config(&loaded).expect("Failed to build navigator");
    assert_eq!(gallery.root(), root.as_path());

    let state = gallery.initialize();
    assert_eq!(state.info().position_label(), "1 / 1");
}
