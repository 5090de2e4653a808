//! Ordered, first-match-wins number search
//!
//! Windows are visited in the order given and, inside each window, regions
//! in detector order. The first region whose recognized text contains any
//! digit ends the search.

use std::fmt::Display;
use std::path::Path;

use image::RgbImage;
use log::{debug, info, warn};

use crate::color::ColorBand;
use crate::detector::{find_regions, Region};
use crate::errors::{IndexError, IndexResult};
use crate::recognition::TextRecognizer;
use crate::utils::file_utils::image_reader;

use super::crop_window::CropWindow;
use super::preprocess::preprocess;
use super::NumberSource;

/// Keep only the ASCII decimal digits of `text`, in their original order
pub fn filter_digits(text: &str) -> String {
    text.chars().filter(char::is_ascii_digit).collect()
}

/// Extracts the printed catalog number from an image
pub struct NumberExtractor {
    /// Recognition engine for prepared regions
    recognizer: Box<dyn TextRecognizer>,
    /// Windows used when a call does not pass its own
    crop_windows: Option<Vec<CropWindow>>,
    /// Band bounds used when a call does not pass its own
    lower_band: Option<Vec<i64>>,
    upper_band: Option<Vec<i64>>,
}

impl NumberExtractor {
    /// Create an extractor using the built-in defaults
    ///
    /// # Arguments
    /// * `recognizer` - Recognition engine for prepared regions
    pub fn new(recognizer: Box<dyn TextRecognizer>) -> Self {
        NumberExtractor {
            recognizer,
            crop_windows: None,
            lower_band: None,
            upper_band: None,
        }
    }

    /// Set the windows searched when a call passes none
    pub fn with_crop_windows(mut self, crop_windows: Vec<CropWindow>) -> Self {
        self.crop_windows = Some(crop_windows);
        self
    }

    /// Set the color band used when a call passes none
    pub fn with_color_band(mut self, lower: Vec<i64>, upper: Vec<i64>) -> Self {
        self.lower_band = Some(lower);
        self.upper_band = Some(upper);
        self
    }

    /// Name of the recognition engine in use
    pub fn recognizer_name(&self) -> &'static str {
        self.recognizer.name()
    }

    /// Extract the number from an image
    ///
    /// All arguments are validated before the image is decoded or any
    /// recognition runs. Omitted arguments fall back to the extractor's
    /// configured values, then to the built-in defaults (blue band, whole
    /// image).
    ///
    /// # Arguments
    /// * `image_path` - Path to the image file
    /// * `crop_windows` - Ordered windows to search; the first hit wins
    /// * `lower_band` - Lower HSV bound `[h, s, v]`
    /// * `upper_band` - Upper HSV bound `[h, s, v]`
    ///
    /// # Returns
    /// `Ok(Some(digits))` for the first number found, `Ok(None)` if no
    /// candidate produced any digit, or a `ValidationError`
    pub fn extract_number(
        &self,
        image_path: &Path,
        crop_windows: Option<&[CropWindow]>,
        lower_band: Option<&[i64]>,
        upper_band: Option<&[i64]>,
    ) -> IndexResult<Option<String>> {
        if !image_path.is_file() {
            return Err(IndexError::validation(
                "image_path",
                format!("file '{}' does not exist", image_path.display()),
            ));
        }

        let band = ColorBand::new(
            lower_band
                .or(self.lower_band.as_deref())
                .unwrap_or(&ColorBand::default_lower()),
            upper_band
                .or(self.upper_band.as_deref())
                .unwrap_or(&ColorBand::default_upper()),
        )?;

        let full_image = [CropWindow::Whole];
        let windows = crop_windows
            .or(self.crop_windows.as_deref())
            .unwrap_or(&full_image);

        let (width, height) = image_reader(image_path)
            .map_err(|e| unreadable(image_path, e))?
            .into_dimensions()
            .map_err(|e| unreadable(image_path, e))?;

        for window in windows {
            window.validate_against(width, height)?;
        }

        debug!("Searching {} window(s) of {} with band {:?}", windows.len(), image_path.display(), band);

        let image = image_reader(image_path)
            .map_err(|e| unreadable(image_path, e))?
            .decode()
            .map_err(|e| unreadable(image_path, e))?
            .to_rgb8();

        let number = windows
            .iter()
            .find_map(|window| self.search_window(&image, window, &band));

        match &number {
            Some(digits) => info!("Found number {} in {}", digits, image_path.display()),
            None => info!("No number found in {}", image_path.display()),
        }

        Ok(number)
    }

    /// Search one window, returning the first digit string found in it
    fn search_window(&self, image: &RgbImage, window: &CropWindow, band: &ColorBand) -> Option<String> {
        let sub_image = window.crop(image);
        let regions = find_regions(&sub_image, band);
        debug!("Window {}: {} candidate region(s)", window, regions.len());

        let number = regions
            .iter()
            .find_map(|region| self.read_region(&sub_image, region));

        if number.is_some() {
            info!("Found a number with crop window {}", window);
        }
        number
    }

    /// Recognize one region; `None` means "try the next candidate"
    fn read_region(&self, image: &RgbImage, region: &Region) -> Option<String> {
        let prepared = preprocess(image, region);

        let text = match self.recognizer.recognize(&prepared) {
            Ok(text) => text,
            Err(e) => {
                warn!("{} failed on region {:?}: {}", self.recognizer.name(), region.bounding_rect(), e);
                return None;
            }
        };

        let digits = filter_digits(&text);
        if digits.is_empty() {
            debug!("Region {:?} recognized as {:?}, no digits", region.bounding_rect(), text.trim());
            None
        } else {
            Some(digits)
        }
    }
}

fn unreadable(image_path: &Path, error: impl Display) -> IndexError {
    IndexError::validation(
        "image_path",
        format!("'{}' is not a readable image: {}", image_path.display(), error),
    )
}

impl NumberSource for NumberExtractor {
    fn extract(&self, image_path: &Path) -> IndexResult<Option<String>> {
        self.extract_number(image_path, None, None, None)
    }
}
