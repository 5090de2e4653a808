//! Perceptual color space support
//!
//! This module converts RGB images into the 8-bit HSV representation and
//! defines the inclusive color bands used to threshold them.

mod hsv;
mod band;
#[cfg(test)]
mod tests;

pub use hsv::{rgb_to_hsv, to_hsv_image, Hsv, HsvImage, MAX_HUE, MAX_SATURATION, MAX_VALUE};
pub use band::ColorBand;
