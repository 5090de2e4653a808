//! File system helpers

use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use image::ImageReader;

use crate::errors::{IndexError, IndexResult};

/// List the image files directly inside a folder, sorted by file name
///
/// # Arguments
/// * `folder` - Folder to scan (not recursive)
/// * `is_image` - Predicate deciding which files count as images
///
/// # Returns
/// Sorted paths of regular files accepted by `is_image`
pub fn list_image_files<F>(folder: &Path, is_image: F) -> IndexResult<Vec<PathBuf>>
where
    F: Fn(&Path) -> bool,
{
    if !folder.is_dir() {
        return Err(IndexError::validation(
            "folder",
            format!("'{}' is not a directory", folder.display()),
        ));
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(folder)? {
        let path = entry?.path();
        if path.is_file() && is_image(&path) {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// File name without directory and extension, as displayed in reports
pub fn file_stem_string(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Check a path's extension against a list of lowercase extensions
pub fn has_image_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .map(|ext| extensions.iter().any(|allowed| *allowed == ext))
        .unwrap_or(false)
}

/// Open an image reader that detects the format from the file content
///
/// Downloaded files are saved with a fixed extension whatever their real
/// format, so the extension is only used when the content is not recognized.
pub fn image_reader(path: &Path) -> io::Result<ImageReader<BufReader<File>>> {
    ImageReader::open(path)?.with_guessed_format()
}
