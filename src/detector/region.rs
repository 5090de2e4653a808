//! Detected regions and their bounding rectangles
//!
//! Coordinates are in pixels relative to the image the region was found in,
//! with (0,0) at the top-left corner.

/// Axis-aligned rectangle in pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    /// X-coordinate of the top-left corner
    pub x: u32,
    /// Y-coordinate of the top-left corner
    pub y: u32,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl PixelRect {
    /// Create a new rectangle
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        PixelRect { x, y, width, height }
    }
}

/// A connected set of in-band pixels, described by its outer boundary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    /// Boundary points in tracing order
    points: Vec<(u32, u32)>,
}

impl Region {
    /// Create a region from its boundary points
    pub fn new(points: Vec<(u32, u32)>) -> Self {
        Region { points }
    }

    /// Tight bounding rectangle of the boundary, inclusive of edge pixels
    ///
    /// A single-pixel region has a 1x1 rectangle. An empty region yields a
    /// zero-sized rectangle at the origin.
    pub fn bounding_rect(&self) -> PixelRect {
        let mut iter = self.points.iter();
        let Some(&(first_x, first_y)) = iter.next() else {
            return PixelRect::new(0, 0, 0, 0);
        };

        let (mut min_x, mut min_y, mut max_x, mut max_y) = (first_x, first_y, first_x, first_y);
        for &(x, y) in iter {
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }

        PixelRect::new(min_x, min_y, max_x - min_x + 1, max_y - min_y + 1)
    }
}
