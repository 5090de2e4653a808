//! Batch image downloads
//!
//! Files are saved as `<prefix>NNN.jpg` numbered from 1 in URL order. A
//! failed download is logged and skipped; the batch always runs to the end.

use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::errors::IndexResult;
use crate::utils::progress::ProgressTracker;
use super::fetcher::Fetcher;

/// Outcome of a download batch
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DownloadReport {
    /// Files written, in URL order
    pub saved: Vec<PathBuf>,
    /// URLs that could not be downloaded or saved
    pub failed: Vec<String>,
}

/// Downloads lists of image URLs into a folder
pub struct ImageDownloader {
    file_prefix: String,
}

impl ImageDownloader {
    /// Create a downloader naming files `<file_prefix>NNN.jpg`
    pub fn new(file_prefix: &str) -> Self {
        ImageDownloader {
            file_prefix: file_prefix.to_string(),
        }
    }

    /// File name for the image at zero-based position `index`
    pub fn file_name(&self, index: usize) -> String {
        format!("{}{:03}.jpg", self.file_prefix, index + 1)
    }

    /// Download every URL into `output_dir`
    ///
    /// # Arguments
    /// * `fetcher` - Used for each request
    /// * `urls` - Image URLs, in the order they should be numbered
    /// * `output_dir` - Target folder, created if missing
    ///
    /// # Returns
    /// Which files were saved and which URLs failed; only failing to create
    /// the output folder is an error
    pub fn download_images(&self, fetcher: &dyn Fetcher, urls: &[String], output_dir: &Path) -> IndexResult<DownloadReport> {
        fs::create_dir_all(output_dir)?;
        info!("Downloading {} image(s) to {}", urls.len(), output_dir.display());

        let progress = ProgressTracker::new(urls.len() as u64, "Downloading images");
        let mut report = DownloadReport::default();

        for (index, url) in urls.iter().enumerate() {
            progress.set_item(url);
            let path = output_dir.join(self.file_name(index));
            match self.download_one(fetcher, url, &path) {
                Ok(()) => {
                    info!("Downloaded {}", path.display());
                    report.saved.push(path);
                }
                Err(e) => {
                    warn!("Failed to download {}: {}", url, e);
                    report.failed.push(url.clone());
                }
            }
            progress.increment(1);
        }

        progress.finish();
        info!("Downloaded {} of {} image(s)", report.saved.len(), urls.len());
        Ok(report)
    }

    fn download_one(&self, fetcher: &dyn Fetcher, url: &str, path: &Path) -> IndexResult<()> {
        let data = fetcher.get_bytes(url)?;
        if let Err(e) = fs::write(path, &data) {
            let _ = fs::remove_file(path);
            return Err(e.into());
        }
        Ok(())
    }
}
