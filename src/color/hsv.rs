//! RGB to HSV conversion
//!
//! Uses the 8-bit convention common to image processing toolkits: hue is
//! stored as degrees / 2 so that it fits in [0, 179], saturation and value
//! span [0, 255].

use image::{ImageBuffer, Rgb, RgbImage};

/// Largest hue value (degrees / 2)
pub const MAX_HUE: u8 = 179;
/// Largest saturation value
pub const MAX_SATURATION: u8 = 255;
/// Largest value (brightness)
pub const MAX_VALUE: u8 = 255;

/// Image whose three channels hold hue, saturation and value
pub type HsvImage = ImageBuffer<Rgb<u8>, Vec<u8>>;

/// A single HSV color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hsv {
    /// Hue in [0, 179]
    pub h: u8,
    /// Saturation in [0, 255]
    pub s: u8,
    /// Value in [0, 255]
    pub v: u8,
}

impl Hsv {
    /// Create a new HSV color
    pub fn new(h: u8, s: u8, v: u8) -> Self {
        Hsv { h, s, v }
    }

    /// Channels as `[h, s, v]` integers, the form used in settings
    pub fn to_triple(&self) -> Vec<i64> {
        vec![self.h as i64, self.s as i64, self.v as i64]
    }
}

/// Convert an RGB pixel to HSV
///
/// Achromatic pixels (r == g == b) get hue and saturation 0.
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> Hsv {
    let ri = r as i32;
    let gi = g as i32;
    let bi = b as i32;

    let max = ri.max(gi).max(bi);
    let min = ri.min(gi).min(bi);
    let delta = max - min;

    let v = max as u8;
    if delta == 0 {
        return Hsv { h: 0, s: 0, v };
    }

    let s = (255.0 * delta as f32 / max as f32 + 0.5) as u8;

    // Sector offset in units of 60 degrees
    let sector = if ri == max {
        (gi - bi) as f32 / delta as f32
    } else if gi == max {
        2.0 + (bi - ri) as f32 / delta as f32
    } else {
        4.0 + (ri - gi) as f32 / delta as f32
    };

    let mut h = sector * 30.0;
    if h < 0.0 {
        h += 180.0;
    }
    let mut h = (h + 0.5) as u32;
    if h > MAX_HUE as u32 {
        h = 0;
    }

    Hsv { h: h as u8, s, v }
}

/// Convert a whole RGB image to HSV
///
/// Returns a new buffer of the same dimensions; the input is left untouched.
pub fn to_hsv_image(image: &RgbImage) -> HsvImage {
    let mut hsv = HsvImage::new(image.width(), image.height());
    for (x, y, pixel) in image.enumerate_pixels() {
        let color = rgb_to_hsv(pixel[0], pixel[1], pixel[2]);
        hsv.put_pixel(x, y, Rgb([color.h, color.s, color.v]));
    }
    hsv
}
