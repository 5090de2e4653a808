//! Tests for renaming a folder after extracted numbers

extern crate std;

use std::fs;
use std::sync::Arc;

use tempfile::TempDir;

use crate::archive::ImageRenamer;
use crate::config::Settings;
use crate::errors::IndexError;
use crate::extractor::NumberExtractor;
use crate::test_utils::{fill_rect, solid_image, write_png, ScriptedRecognizer, ScriptedSource, BLUE, WHITE};

fn renamer() -> ImageRenamer {
    ImageRenamer::new(&Settings::defaults().image_extensions)
}

fn touch(dir: &std::path::Path, name: &str) {
    fs::write(dir.join(name), b"data").unwrap();
}

#[test]
fn test_rename_identified_images() {
    let dir = TempDir::new().unwrap();
    for name in ["a.jpg", "b.png", "c.jpg"] {
        touch(dir.path(), name);
    }

    let source = ScriptedSource::new(&[Some("123"), None, Some("456")]);
    let report = renamer().rename_images_in_folder(&source, dir.path()).unwrap();

    std::assert!(dir.path().join("123.jpg").is_file());
    std::assert!(dir.path().join("b.png").is_file());
    std::assert!(dir.path().join("456.jpg").is_file());
    std::assert!(!dir.path().join("a.jpg").exists());
    std::assert!(!dir.path().join("c.jpg").exists());

    std::assert_eq!(report.identified_count(), 2);
    std::assert_eq!(report.unidentified_count(), 1);
    std::assert_eq!(report.unidentified, vec![dir.path().join("b.png")]);
    std::assert_eq!(
        report.renamed,
        vec![
            (dir.path().join("a.jpg"), dir.path().join("123.jpg")),
            (dir.path().join("c.jpg"), dir.path().join("456.jpg")),
        ]
    );
}

#[test]
fn test_rename_with_recognized_labels() {
    let dir = TempDir::new().unwrap();
    let mut first = solid_image(120, 80, WHITE);
    fill_rect(&mut first, 0, 30, 40, 20, BLUE);
    let mut third = solid_image(120, 80, WHITE);
    fill_rect(&mut third, 60, 10, 30, 15, BLUE);
    write_png(dir.path(), "a.png", &first);
    write_png(dir.path(), "b.png", &solid_image(120, 80, WHITE));
    write_png(dir.path(), "c.png", &third);

    // b.png has no label, so the recognizer is called for a.png and c.png only
    let recognizer = Arc::new(ScriptedRecognizer::new(&["No 123", "456"]));
    let extractor = NumberExtractor::new(Box::new(Arc::clone(&recognizer)));
    let report = renamer().rename_images_in_folder(&extractor, dir.path()).unwrap();

    std::assert!(dir.path().join("123.png").is_file());
    std::assert!(dir.path().join("456.png").is_file());
    std::assert!(dir.path().join("b.png").is_file());
    std::assert_eq!(report.identified_count(), 2);
    std::assert_eq!(report.unidentified, vec![dir.path().join("b.png")]);
    std::assert_eq!(recognizer.sizes(), vec![(40, 20), (30, 15)]);
}

#[test]
fn test_empty_recognition_leaves_image_unidentified() {
    let dir = TempDir::new().unwrap();
    for name in ["a.png", "b.png", "c.png"] {
        let mut image = solid_image(60, 40, WHITE);
        fill_rect(&mut image, 10, 10, 20, 10, BLUE);
        write_png(dir.path(), name, &image);
    }

    let recognizer = Arc::new(ScriptedRecognizer::new(&["123", "", "456"]));
    let extractor = NumberExtractor::new(Box::new(Arc::clone(&recognizer)));
    let report = renamer().rename_images_in_folder(&extractor, dir.path()).unwrap();

    std::assert!(dir.path().join("123.png").is_file());
    std::assert!(dir.path().join("b.png").is_file());
    std::assert!(dir.path().join("456.png").is_file());
    std::assert_eq!(report.identified_count(), 2);
    std::assert_eq!(report.unidentified_count(), 1);
    std::assert_eq!(recognizer.calls(), 3);
}

#[test]
fn test_non_image_files_are_not_examined() {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), "notes.txt");
    touch(dir.path(), "scan.JPG");
    fs::create_dir(dir.path().join("nested.jpg")).unwrap();

    let source = ScriptedSource::new(&[Some("9")]);
    let report = renamer().rename_images_in_folder(&source, dir.path()).unwrap();

    std::assert_eq!(source.seen(), vec![dir.path().join("scan.JPG")]);
    std::assert!(dir.path().join("notes.txt").is_file());
    std::assert!(dir.path().join("9.JPG").is_file());
    std::assert_eq!(report.identified_count(), 1);
}

#[test]
fn test_existing_target_is_not_overwritten() {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), "a.jpg");
    fs::write(dir.path().join("7.jpg"), b"keep me").unwrap();

    // "7.jpg" sorts before "a.jpg" and is already named after its number
    let source = ScriptedSource::new(&[Some("7"), Some("7")]);
    let report = renamer().rename_images_in_folder(&source, dir.path()).unwrap();

    std::assert_eq!(report.unchanged, vec![dir.path().join("7.jpg")]);
    std::assert_eq!(report.conflicts, vec![dir.path().join("a.jpg")]);
    std::assert!(report.renamed.is_empty());
    std::assert_eq!(fs::read(dir.path().join("7.jpg")).unwrap(), b"keep me");
    std::assert!(dir.path().join("a.jpg").is_file());
}

#[test]
fn test_extraction_error_counts_as_unidentified() {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), "a.jpg");
    touch(dir.path(), "b.jpg");

    let source = ScriptedSource::new(&[]);
    source.push_error(IndexError::ImageError(image::ImageError::IoError(std::io::Error::new(
        std::io::ErrorKind::InvalidData,
        "corrupt",
    ))));
    source.push_error(IndexError::GenericError("boom".to_string()));

    let report = renamer().rename_images_in_folder(&source, dir.path()).unwrap();

    std::assert_eq!(report.unidentified_count(), 2);
    std::assert_eq!(report.identified_count(), 0);
    std::assert!(dir.path().join("a.jpg").is_file());
}

#[test]
fn test_missing_folder_is_rejected() {
    let source = ScriptedSource::new(&[]);
    let err = renamer()
        .rename_images_in_folder(&source, std::path::Path::new("/nonexistent/folder"))
        .unwrap_err();
    std::assert!(err.is_validation());
}
