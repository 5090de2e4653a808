//! Preparing candidate regions for recognition

use image::{imageops, GrayImage, RgbImage};

use crate::detector::Region;

/// Crop an image to a region's bounding rectangle and convert it to gray
///
/// # Arguments
/// * `image` - The (window) image the region was detected in
/// * `region` - The detected region
///
/// # Returns
/// A new single-channel image ready for recognition
pub fn preprocess(image: &RgbImage, region: &Region) -> GrayImage {
    let rect = region.bounding_rect();
    let cropped = imageops::crop_imm(image, rect.x, rect.y, rect.width, rect.height).to_image();
    imageops::grayscale(&cropped)
}
