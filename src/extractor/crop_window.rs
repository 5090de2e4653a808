//! Crop windows restricting the search area
//!
//! A crop window is given as (top, left, bottom, right) in source-image
//! pixel coordinates, with bottom and right exclusive.

use std::borrow::Cow;
use std::fmt;

use image::{imageops, RgbImage};

use crate::errors::{IndexError, IndexResult};

const ARGUMENT: &str = "crop_windows";

/// One candidate search area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CropWindow {
    /// Search the entire image
    Whole,
    /// Search a sub-rectangle
    Rect {
        top: u32,
        left: u32,
        bottom: u32,
        right: u32,
    },
}

impl CropWindow {
    /// Create a rectangular window
    pub fn rect(top: u32, left: u32, bottom: u32, right: u32) -> Self {
        CropWindow::Rect { top, left, bottom, right }
    }

    /// Parse a window from text
    ///
    /// Accepts `full` (or `whole`) for the entire image, otherwise four
    /// comma-separated integers `top,left,bottom,right`.
    pub fn from_string(value: &str) -> IndexResult<Self> {
        let trimmed = value.trim();
        if trimmed.eq_ignore_ascii_case("full") || trimmed.eq_ignore_ascii_case("whole") {
            return Ok(CropWindow::Whole);
        }

        let parts: Vec<&str> = trimmed.split(',').map(str::trim).collect();
        if parts.len() != 4 {
            return Err(IndexError::validation(
                ARGUMENT,
                format!("expected 'full' or 'top,left,bottom,right', got '{}'", value),
            ));
        }

        let mut components = Vec::with_capacity(4);
        for part in parts {
            let component = part.parse::<i64>().map_err(|_| {
                IndexError::validation(ARGUMENT, format!("'{}' is not an integer", part))
            })?;
            components.push(component);
        }

        Self::from_components(&components)
    }

    /// Build a window from raw integer components `[top, left, bottom, right]`
    pub fn from_components(components: &[i64]) -> IndexResult<Self> {
        if components.len() != 4 {
            return Err(IndexError::validation(
                ARGUMENT,
                format!("expected 4 components, got {}", components.len()),
            ));
        }

        let mut values = [0u32; 4];
        for (slot, &component) in values.iter_mut().zip(components) {
            *slot = u32::try_from(component).map_err(|_| {
                IndexError::validation(ARGUMENT, format!("component {} is not a pixel coordinate", component))
            })?;
        }

        Ok(CropWindow::rect(values[0], values[1], values[2], values[3]))
    }

    /// Check that the window has positive area and lies inside the image
    pub fn validate_against(&self, width: u32, height: u32) -> IndexResult<()> {
        let CropWindow::Rect { top, left, bottom, right } = *self else {
            return Ok(());
        };

        if top >= bottom || left >= right {
            return Err(IndexError::validation(ARGUMENT, format!("window {} has zero area", self)));
        }

        if bottom > height || right > width {
            return Err(IndexError::validation(
                ARGUMENT,
                format!("window {} exceeds image bounds {}x{}", self, width, height),
            ));
        }

        Ok(())
    }

    /// Derive the sub-image for this window
    ///
    /// The whole-image window borrows the source; rectangles produce a new
    /// image. Assumes `validate_against` has passed.
    pub fn crop<'a>(&self, image: &'a RgbImage) -> Cow<'a, RgbImage> {
        match *self {
            CropWindow::Whole => Cow::Borrowed(image),
            CropWindow::Rect { top, left, bottom, right } => Cow::Owned(
                imageops::crop_imm(image, left, top, right - left, bottom - top).to_image(),
            ),
        }
    }
}

impl fmt::Display for CropWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CropWindow::Whole => write!(f, "full"),
            CropWindow::Rect { top, left, bottom, right } => {
                write!(f, "({}, {}, {}, {})", top, left, bottom, right)
            }
        }
    }
}
