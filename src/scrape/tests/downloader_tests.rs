//! Tests for batch image downloads

extern crate std;

use tempfile::TempDir;

use crate::scrape::ImageDownloader;
use crate::test_utils::StubFetcher;

#[test]
fn test_download_images_success() {
    let fetcher = StubFetcher::default()
        .with_file("http://example.com/image1.jpg", b"fake_image_data")
        .with_file("http://example.com/image2.jpg", b"fake_image_data");
    let urls = vec![
        "http://example.com/image1.jpg".to_string(),
        "http://example.com/image2.jpg".to_string(),
    ];

    let dir = TempDir::new().unwrap();
    let report = ImageDownloader::new("image_").download_images(&fetcher, &urls, dir.path()).unwrap();

    std::assert_eq!(report.saved, vec![dir.path().join("image_001.jpg"), dir.path().join("image_002.jpg")]);
    std::assert!(report.failed.is_empty());
    for path in &report.saved {
        std::assert_eq!(std::fs::read(path).unwrap(), b"fake_image_data");
    }
    std::assert_eq!(fetcher.requests().len(), 2);
}

#[test]
fn test_failed_download_is_skipped() {
    let fetcher = StubFetcher::default()
        .with_file("http://example.com/ok1.jpg", b"one")
        .with_file("http://example.com/ok3.jpg", b"three");
    let urls = vec![
        "http://example.com/ok1.jpg".to_string(),
        "http://example.com/broken.jpg".to_string(),
        "http://example.com/ok3.jpg".to_string(),
    ];

    let dir = TempDir::new().unwrap();
    let report = ImageDownloader::new("image_").download_images(&fetcher, &urls, dir.path()).unwrap();

    std::assert_eq!(report.failed, vec!["http://example.com/broken.jpg".to_string()]);
    std::assert!(dir.path().join("image_001.jpg").exists());
    std::assert!(!dir.path().join("image_002.jpg").exists());
    // Numbering follows URL position, not success count
    std::assert_eq!(std::fs::read(dir.path().join("image_003.jpg")).unwrap(), b"three");
    std::assert_eq!(fetcher.requests().len(), 3);
}

#[test]
fn test_output_folder_is_created() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("nested").join("archive_images");
    let report = ImageDownloader::new("scan-")
        .download_images(&StubFetcher::default(), &[], &target)
        .unwrap();

    std::assert!(target.is_dir());
    std::assert!(report.saved.is_empty());
}

#[test]
fn test_file_name_padding() {
    let downloader = ImageDownloader::new("image_");
    std::assert_eq!(downloader.file_name(0), "image_001.jpg");
    std::assert_eq!(downloader.file_name(41), "image_042.jpg");
    std::assert_eq!(downloader.file_name(1233), "image_1234.jpg");
}
