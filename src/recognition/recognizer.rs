//! Recognition trait definition

use image::GrayImage;

use crate::errors::IndexResult;

/// Strategy trait for turning a prepared image into raw text
pub trait TextRecognizer: Send + Sync {
    /// Recognize the text in a single-channel image
    ///
    /// Output is best effort and may be empty; callers only rely on the
    /// digit characters it contains.
    fn recognize(&self, image: &GrayImage) -> IndexResult<String>;

    /// Get the name of this recognizer
    fn name(&self) -> &'static str;
}

/// Share one engine between several extractors
impl<T: TextRecognizer + ?Sized> TextRecognizer for std::sync::Arc<T> {
    fn recognize(&self, image: &GrayImage) -> IndexResult<String> {
        (**self).recognize(image)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
