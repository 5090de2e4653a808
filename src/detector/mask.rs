//! Binary color masks

use image::{GrayImage, Luma, RgbImage};

use crate::color::{to_hsv_image, ColorBand, Hsv};

/// Foreground value written for pixels inside the band
pub const MASK_ON: u8 = 255;

/// Threshold an RGB image against a color band
///
/// The image is converted to HSV and each pixel set to 255 when all three
/// channels lie inside the band (inclusive), 0 otherwise.
pub fn build_mask(image: &RgbImage, band: &ColorBand) -> GrayImage {
    let hsv = to_hsv_image(image);
    let mut mask = GrayImage::new(hsv.width(), hsv.height());
    for (x, y, pixel) in hsv.enumerate_pixels() {
        if band.contains(&Hsv::new(pixel[0], pixel[1], pixel[2])) {
            mask.put_pixel(x, y, Luma([MASK_ON]));
        }
    }
    mask
}
