//! Application settings backed by TOML
//!
//! The defaults file is embedded at build time and parsed once. User files
//! are overlaid on a copy of the defaults, so they only need the keys they
//! change.

use std::fs;
use std::path::Path;

use lazy_static::lazy_static;
use log::{info, warn};

use crate::color::ColorBand;
use crate::errors::{IndexError, IndexResult};
use crate::extractor::CropWindow;
use crate::recognition::TesseractSettings;

lazy_static! {
    // Parse the embedded defaults at first use
    static ref DEFAULT_SETTINGS: Settings = {
        let content = include_str!("../../indexkit.toml");
        Settings::from_str(content).unwrap_or_else(|e| {
            warn!("Failed to parse built-in settings: {}", e);
            Settings::built_in()
        })
    };
}

/// All tunable values of the application
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Lower HSV bound of the label color
    pub lower_band: Vec<i64>,
    /// Upper HSV bound of the label color
    pub upper_band: Vec<i64>,
    /// Ordered search windows; empty means the whole image
    pub crop_windows: Vec<CropWindow>,
    /// Recognition engine invocation
    pub tesseract: TesseractSettings,
    /// File extensions treated as images (lowercase, no dot)
    pub image_extensions: Vec<String>,
    /// Thumbnail size in the index sheet
    pub thumbnail_width: u32,
    pub thumbnail_height: u32,
    /// Worksheet name of the index sheet
    pub sheet_title: String,
    /// User-Agent header for page and image requests
    pub user_agent: String,
    /// Prefix of downloaded file names
    pub file_prefix: String,
}

impl Settings {
    /// Values used when even the embedded file cannot be parsed
    fn built_in() -> Self {
        Settings {
            lower_band: ColorBand::default_lower(),
            upper_band: ColorBand::default_upper(),
            crop_windows: Vec::new(),
            tesseract: TesseractSettings::default(),
            image_extensions: ["jpg", "jpeg", "png", "bmp", "gif"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            thumbnail_width: 150,
            thumbnail_height: 150,
            sheet_title: "Image Indexes".to_string(),
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64)".to_string(),
            file_prefix: "image_".to_string(),
        }
    }

    /// The embedded defaults
    pub fn defaults() -> Self {
        DEFAULT_SETTINGS.clone()
    }

    /// Load settings, overlaying an optional user file on the defaults
    ///
    /// # Arguments
    /// * `path` - Optional path to a TOML settings file
    pub fn load(path: Option<&Path>) -> IndexResult<Self> {
        let mut settings = Self::defaults();

        if let Some(path) = path {
            info!("Loading settings from {}", path.display());
            let content = fs::read_to_string(path).map_err(|e| {
                IndexError::ConfigError(format!("Cannot read '{}': {}", path.display(), e))
            })?;
            settings.overlay_str(&content)?;
        }

        Ok(settings)
    }

    /// Parse settings from TOML text on top of the built-in values
    pub fn from_str(content: &str) -> IndexResult<Self> {
        let mut settings = Self::built_in();
        settings.overlay_str(content)?;
        Ok(settings)
    }

    /// Crop windows as extractor input; `None` when the whole image is searched
    pub fn crop_windows(&self) -> Option<Vec<CropWindow>> {
        if self.crop_windows.is_empty() {
            None
        } else {
            Some(self.crop_windows.clone())
        }
    }

    fn overlay_str(&mut self, content: &str) -> IndexResult<()> {
        let value: toml::Value = content
            .parse()
            .map_err(|e| IndexError::ConfigError(format!("Invalid TOML: {}", e)))?;
        self.overlay(&value)
    }

    fn overlay(&mut self, value: &toml::Value) -> IndexResult<()> {
        if let Some(detection) = value.get("detection") {
            if let Some(lower) = detection.get("lower_band") {
                self.lower_band = int_array(lower, "lower_band")?;
            }
            if let Some(upper) = detection.get("upper_band") {
                self.upper_band = int_array(upper, "upper_band")?;
            }
            if let Some(windows) = detection.get("crop_windows") {
                self.crop_windows = crop_windows(windows)?;
            }
        }

        if let Some(recognition) = value.get("recognition") {
            if let Some(executable) = string_value(recognition, "recognition.executable")? {
                self.tesseract.executable = executable;
            }
            if let Some(language) = string_value(recognition, "recognition.language")? {
                self.tesseract.language = language;
            }
            if let Some(psm) = recognition.get("page_segmentation_mode") {
                let psm = psm.as_integer().ok_or_else(|| {
                    IndexError::ConfigError("recognition.page_segmentation_mode must be an integer".to_string())
                })?;
                self.tesseract.page_segmentation_mode = match psm {
                    0 => None,
                    1..=13 => Some(psm as u8),
                    _ => {
                        return Err(IndexError::ConfigError(format!(
                            "recognition.page_segmentation_mode {} is outside 0-13", psm)))
                    }
                };
            }
        }

        if let Some(archive) = value.get("archive") {
            if let Some(extensions) = archive.get("image_extensions") {
                self.image_extensions = string_array(extensions, "archive.image_extensions")?
                    .into_iter()
                    .map(|ext| ext.trim_start_matches('.').to_lowercase())
                    .collect();
            }
            if let Some(width) = dimension(archive, "thumbnail_width")? {
                self.thumbnail_width = width;
            }
            if let Some(height) = dimension(archive, "thumbnail_height")? {
                self.thumbnail_height = height;
            }
            if let Some(title) = string_value(archive, "archive.sheet_title")? {
                self.sheet_title = title;
            }
        }

        if let Some(fetch) = value.get("fetch") {
            if let Some(user_agent) = string_value(fetch, "fetch.user_agent")? {
                self.user_agent = user_agent;
            }
            if let Some(prefix) = string_value(fetch, "fetch.file_prefix")? {
                self.file_prefix = prefix;
            }
        }

        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::defaults()
    }
}

fn int_array(value: &toml::Value, argument: &str) -> IndexResult<Vec<i64>> {
    let array = value
        .as_array()
        .ok_or_else(|| IndexError::validation(argument, "expected an array of integers"))?;

    array
        .iter()
        .map(|item| {
            item.as_integer()
                .ok_or_else(|| IndexError::validation(argument, format!("{} is not an integer", item)))
        })
        .collect()
}

fn crop_windows(value: &toml::Value) -> IndexResult<Vec<CropWindow>> {
    let array = value
        .as_array()
        .ok_or_else(|| IndexError::validation("crop_windows", "expected a list of windows"))?;

    array
        .iter()
        .map(|item| match item {
            toml::Value::String(marker) => CropWindow::from_string(marker),
            toml::Value::Array(_) => CropWindow::from_components(&int_array(item, "crop_windows")?),
            other => Err(IndexError::validation(
                "crop_windows",
                format!("{} is neither \"full\" nor [top, left, bottom, right]", other),
            )),
        })
        .collect()
}

fn string_value(table: &toml::Value, key: &str) -> IndexResult<Option<String>> {
    let name = key.rsplit('.').next().unwrap_or(key);
    match table.get(name) {
        None => Ok(None),
        Some(value) => value
            .as_str()
            .map(|s| Some(s.to_string()))
            .ok_or_else(|| IndexError::ConfigError(format!("{} must be a string", key))),
    }
}

fn string_array(value: &toml::Value, key: &str) -> IndexResult<Vec<String>> {
    let array = value
        .as_array()
        .ok_or_else(|| IndexError::ConfigError(format!("{} must be an array of strings", key)))?;

    array
        .iter()
        .map(|item| {
            item.as_str()
                .map(str::to_string)
                .ok_or_else(|| IndexError::ConfigError(format!("{} must contain only strings", key)))
        })
        .collect()
}

fn dimension(table: &toml::Value, name: &str) -> IndexResult<Option<u32>> {
    let Some(value) = table.get(name) else {
        return Ok(None);
    };

    value
        .as_integer()
        .filter(|v| (1..=4096).contains(v))
        .map(|v| Some(v as u32))
        .ok_or_else(|| IndexError::ConfigError(format!("archive.{} must be an integer in 1-4096", name)))
}
