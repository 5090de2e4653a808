use std::path::Path;
use std::sync::Arc;

use log::info;

use crate::archive::{ImageRenamer, RenameReport, SheetWriter};
use crate::config::Settings;
use crate::errors::IndexResult;
use crate::extractor::{CropWindow, NumberExtractor};
use crate::recognition::{TesseractRecognizer, TextRecognizer};
use crate::scrape::{DownloadReport, Fetcher, HtmlParser, HttpFetcher, ImageDownloader};
use crate::utils::logger::Logger;

/// What a full pipeline run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineReport {
    /// Image URLs found on the page
    pub urls: Vec<String>,
    /// Downloaded and failed images
    pub downloads: DownloadReport,
    /// Outcome of renaming the downloads
    pub rename: RenameReport,
    /// Names written to the index sheet
    pub sheet_rows: Vec<String>,
}

/// Main interface to the IndexKit library
///
/// Wraps the settings and the external collaborators (recognition engine and
/// HTTP access). Both default to the production implementations and can be
/// replaced, for example with stubs in tests.
pub struct IndexKit<'a> {
    logger: &'a Logger,
    settings: Settings,
    recognizer: Option<Arc<dyn TextRecognizer>>,
    fetcher: Option<Box<dyn Fetcher>>,
}

impl<'a> IndexKit<'a> {
    /// Create a new IndexKit instance
    ///
    /// # Arguments
    /// * `logger` - Logger receiving batch summaries
    /// * `settings` - Detection, recognition and output settings
    pub fn new(logger: &'a Logger, settings: Settings) -> Self {
        IndexKit {
            logger,
            settings,
            recognizer: None,
            fetcher: None,
        }
    }

    /// Use this recognizer instead of Tesseract
    pub fn with_recognizer(mut self, recognizer: Arc<dyn TextRecognizer>) -> Self {
        self.recognizer = Some(recognizer);
        self
    }

    /// Use this fetcher instead of HTTP
    pub fn with_fetcher(mut self, fetcher: Box<dyn Fetcher>) -> Self {
        self.fetcher = Some(fetcher);
        self
    }

    /// Build a number extractor configured from the settings
    ///
    /// Without an injected recognizer this probes the Tesseract executable,
    /// so a missing engine is reported here rather than per image.
    pub fn number_extractor(&self) -> IndexResult<NumberExtractor> {
        let recognizer: Box<dyn TextRecognizer> = match &self.recognizer {
            Some(recognizer) => Box::new(Arc::clone(recognizer)),
            None => Box::new(TesseractRecognizer::new(&self.settings.tesseract)?),
        };

        let mut extractor = NumberExtractor::new(recognizer)
            .with_color_band(self.settings.lower_band.clone(), self.settings.upper_band.clone());
        if let Some(windows) = self.settings.crop_windows() {
            extractor = extractor.with_crop_windows(windows);
        }

        info!("Using {} for recognition", extractor.recognizer_name());
        Ok(extractor)
    }

    /// Extract the number printed on an image
    ///
    /// # Arguments
    /// * `image_path` - Path to the image file
    /// * `crop_windows` - Optional ordered windows, overriding the settings
    /// * `lower_band` - Optional lower HSV bound, overriding the settings
    /// * `upper_band` - Optional upper HSV bound, overriding the settings
    ///
    /// # Returns
    /// The digit string, `None` when no number was found, or an error
    pub fn extract_number(&self,
                          image_path: &Path,
                          crop_windows: Option<&[CropWindow]>,
                          lower_band: Option<&[i64]>,
                          upper_band: Option<&[i64]>) -> IndexResult<Option<String>> {
        self.number_extractor()?
            .extract_number(image_path, crop_windows, lower_band, upper_band)
    }

    /// Rename every image in a folder after its number
    pub fn rename_images(&self, folder: &Path) -> IndexResult<RenameReport> {
        let extractor = self.number_extractor()?;
        self.rename_with(&extractor, folder)
    }

    /// Write a spreadsheet index of a folder of images
    ///
    /// # Returns
    /// The names written, in row order
    pub fn create_index_sheet(&self, folder: &Path, output: &Path) -> IndexResult<Vec<String>> {
        let writer = SheetWriter::new(
            &self.settings.image_extensions,
            self.settings.thumbnail_width,
            self.settings.thumbnail_height,
        );
        let names = writer.create_sheet_from_images(folder, output, &self.settings.sheet_title)?;
        self.logger.log(&format!("index: {} row(s) written to {}", names.len(), output.display()))?;
        Ok(names)
    }

    /// Collect the image URLs of a web page
    pub fn fetch_image_urls(&self, url: &str) -> IndexResult<Vec<String>> {
        self.with_fetcher_do(|fetcher| HtmlParser::get_all_image_urls_from_site(fetcher, url))
    }

    /// Download images into a folder
    pub fn download_images(&self, urls: &[String], output_dir: &Path) -> IndexResult<DownloadReport> {
        let downloader = ImageDownloader::new(&self.settings.file_prefix);
        let report = self.with_fetcher_do(|fetcher| downloader.download_images(fetcher, urls, output_dir))?;
        self.logger.log_batch_summary("download", report.saved.len(), &report.failed)?;
        Ok(report)
    }

    /// Fetch a page's images, rename them after their numbers and index them
    ///
    /// # Arguments
    /// * `url` - Page listing the images
    /// * `download_dir` - Folder the images are saved and renamed in
    /// * `sheet_path` - Path of the `.xlsx` index to write
    pub fn run_pipeline(&self, url: &str, download_dir: &Path, sheet_path: &Path) -> IndexResult<PipelineReport> {
        // Probe the recognizer before any download
        let extractor = self.number_extractor()?;

        info!("Extracting image URLs from: {}", url);
        let urls = self.fetch_image_urls(url)?;
        info!("Found {} image URLs", urls.len());

        info!("Downloading images to: {}", download_dir.display());
        let downloads = self.download_images(&urls, download_dir)?;

        info!("Extracting numbers and renaming images");
        let rename = self.rename_with(&extractor, download_dir)?;

        info!("Generating index sheet: {}", sheet_path.display());
        let sheet_rows = self.create_index_sheet(download_dir, sheet_path)?;

        info!("Processing complete");
        Ok(PipelineReport {
            urls,
            downloads,
            rename,
            sheet_rows,
        })
    }

    fn rename_with(&self, extractor: &NumberExtractor, folder: &Path) -> IndexResult<RenameReport> {
        let renamer = ImageRenamer::new(&self.settings.image_extensions);
        let report = renamer.rename_images_in_folder(extractor, folder)?;

        let not_renamed: Vec<String> = report
            .unidentified
            .iter()
            .chain(report.conflicts.iter())
            .map(|path| path.display().to_string())
            .collect();
        self.logger.log_batch_summary("rename", report.renamed.len() + report.unchanged.len(), &not_renamed)?;

        Ok(report)
    }

    fn with_fetcher_do<T>(&self, operation: impl FnOnce(&dyn Fetcher) -> IndexResult<T>) -> IndexResult<T> {
        match &self.fetcher {
            Some(fetcher) => operation(fetcher.as_ref()),
            None => {
                let http = HttpFetcher::new(&self.settings.user_agent)?;
                operation(&http)
            }
        }
    }
}
