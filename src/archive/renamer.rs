//! Renaming images by their catalog number
//!
//! Each image file in a folder is handed to a `NumberSource`. A found number
//! becomes the new file name (keeping the extension); images without one are
//! left alone and reported as unidentified.

use std::fs;
use std::path::{Path, PathBuf};

use log::{error, info, warn};

use crate::errors::IndexResult;
use crate::extractor::NumberSource;
use crate::utils::file_utils::{has_image_extension, list_image_files};
use crate::utils::progress::ProgressTracker;

/// Outcome of renaming a folder
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RenameReport {
    /// (old path, new path) for every renamed image
    pub renamed: Vec<(PathBuf, PathBuf)>,
    /// Images whose target name was already correct
    pub unchanged: Vec<PathBuf>,
    /// Images without a recognizable number, or whose extraction failed
    pub unidentified: Vec<PathBuf>,
    /// Images whose target name was taken or could not be written
    pub conflicts: Vec<PathBuf>,
}

impl RenameReport {
    /// Number of images a number was found for
    pub fn identified_count(&self) -> usize {
        self.renamed.len() + self.unchanged.len() + self.conflicts.len()
    }

    /// Number of images no number was found for
    pub fn unidentified_count(&self) -> usize {
        self.unidentified.len()
    }
}

/// Renames the images of a folder after their extracted numbers
pub struct ImageRenamer {
    image_extensions: Vec<String>,
}

impl ImageRenamer {
    /// Create a renamer handling files with the given extensions
    ///
    /// # Arguments
    /// * `image_extensions` - Lowercase extensions without the dot
    pub fn new(image_extensions: &[String]) -> Self {
        ImageRenamer {
            image_extensions: image_extensions.to_vec(),
        }
    }

    /// Rename every image in `folder` to the number found in it
    ///
    /// Files are processed in file name order; non-image files are never
    /// passed to the source. The batch never stops on a single image.
    ///
    /// # Arguments
    /// * `source` - Reads the number of each image
    /// * `folder` - Folder containing the images
    ///
    /// # Returns
    /// A report of renamed, unidentified and conflicting images
    pub fn rename_images_in_folder(&self, source: &dyn NumberSource, folder: &Path) -> IndexResult<RenameReport> {
        let files = list_image_files(folder, |path| has_image_extension(path, &self.image_extensions))?;
        info!("Renaming {} image(s) in {}", files.len(), folder.display());

        let progress = ProgressTracker::new(files.len() as u64, "Identifying images");
        let mut report = RenameReport::default();

        for path in files {
            progress.set_item(&path.display().to_string());

            match source.extract(&path) {
                Ok(Some(number)) => self.rename_to_number(&path, &number, &mut report),
                Ok(None) => report.unidentified.push(path),
                Err(e) => {
                    error!("Failed to extract a number from {}: {}", path.display(), e);
                    report.unidentified.push(path);
                }
            }

            progress.increment(1);
        }

        progress.finish();
        info!("Number of images identified is {}", report.identified_count());
        info!("Number of unidentified images is {}", report.unidentified_count());
        for path in &report.unidentified {
            info!("Unidentified image: {}", path.display());
        }

        Ok(report)
    }

    fn rename_to_number(&self, path: &Path, number: &str, report: &mut RenameReport) {
        let new_name = match path.extension() {
            Some(ext) => format!("{}.{}", number, ext.to_string_lossy()),
            None => number.to_string(),
        };
        let new_path = path.with_file_name(&new_name);

        if new_path == path {
            info!("'{}' is already named after its number", new_name);
            report.unchanged.push(path.to_path_buf());
            return;
        }

        if new_path.exists() {
            warn!("Not renaming {}: {} already exists", path.display(), new_path.display());
            report.conflicts.push(path.to_path_buf());
            return;
        }

        match fs::rename(path, &new_path) {
            Ok(()) => {
                info!("Renamed '{}' to '{}'", path.display(), new_name);
                report.renamed.push((path.to_path_buf(), new_path));
            }
            Err(e) => {
                error!("Failed to rename {}: {}", path.display(), e);
                report.conflicts.push(path.to_path_buf());
            }
        }
    }
}
