//! Region detection by color
//!
//! This module isolates the contiguous areas of an image whose color falls
//! inside a `ColorBand` and reports their outlines.

mod mask;
mod region;

pub use mask::build_mask;
pub use region::{PixelRect, Region};

use image::{imageops, GrayImage, RgbImage};
use imageproc::contours::{find_contours, BorderType};
use log::debug;

use crate::color::ColorBand;

/// Find the externally connected regions of an image inside a color band
///
/// Only top-level outer borders are returned: holes inside a region, and
/// anything drawn inside those holes, are not reported separately. The
/// order is the tracer's discovery order (raster scan of the mask), not
/// sorted by size or position.
///
/// # Arguments
/// * `image` - The image to search
/// * `band` - The color band defining label pixels
///
/// # Returns
/// One `Region` per external component, possibly empty
pub fn find_regions(image: &RgbImage, band: &ColorBand) -> Vec<Region> {
    let mask = build_mask(image, band);

    // The tracer skips components starting in column 0, so trace on a mask
    // with a one pixel background border and shift the points back
    let mut padded = GrayImage::new(mask.width() + 2, mask.height() + 2);
    imageops::replace(&mut padded, &mask, 1, 1);

    let regions: Vec<Region> = find_contours::<u32>(&padded)
        .into_iter()
        .filter(|contour| contour.border_type == BorderType::Outer && contour.parent.is_none())
        .filter(|contour| !contour.points.is_empty())
        .map(|contour| Region::new(contour.points.iter().map(|p| (p.x - 1, p.y - 1)).collect()))
        .collect();

    debug!("Found {} region(s) in {}x{} image", regions.len(), image.width(), image.height());
    regions
}
