//! Number extraction from labelled images
//!
//! This module drives the ordered search over crop windows and detected
//! regions, handing each candidate to a `TextRecognizer` and returning the
//! first digit string found.

mod crop_window;
mod preprocess;
mod number_extractor;
#[cfg(test)]
mod tests;

use std::path::Path;

use crate::errors::IndexResult;

pub use crop_window::CropWindow;
pub use preprocess::preprocess;
pub use number_extractor::{filter_digits, NumberExtractor};

/// Anything that can read the catalog number of an image file
///
/// `Ok(None)` means no number was found, which is an expected outcome
/// rather than a failure.
pub trait NumberSource {
    /// Extract the number printed on the image at `image_path`
    fn extract(&self, image_path: &Path) -> IndexResult<Option<String>>;
}
