//! Tesseract command-line recognizer
//!
//! Runs the `tesseract` executable on a temporary PNG and reads the
//! recognized text from its standard output.

use std::process::Command;

use image::GrayImage;
use log::{debug, info};

use crate::errors::{IndexError, IndexResult};
use super::recognizer::TextRecognizer;

/// Settings for invoking the tesseract executable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TesseractSettings {
    /// Executable name or path
    pub executable: String,
    /// Language code passed with `-l`
    pub language: String,
    /// Page segmentation mode passed with `--psm`, engine default if `None`
    pub page_segmentation_mode: Option<u8>,
}

impl Default for TesseractSettings {
    fn default() -> Self {
        TesseractSettings {
            executable: "tesseract".to_string(),
            language: "eng".to_string(),
            page_segmentation_mode: None,
        }
    }
}

/// Recognizer backed by the tesseract CLI
#[derive(Debug)]
pub struct TesseractRecognizer {
    settings: TesseractSettings,
}

impl TesseractRecognizer {
    /// Create a recognizer after checking that the executable runs
    ///
    /// # Arguments
    /// * `settings` - Executable, language and segmentation mode
    ///
    /// # Returns
    /// A ready recognizer, or a `RecognitionError` if tesseract is missing
    pub fn new(settings: &TesseractSettings) -> IndexResult<Self> {
        let output = Command::new(&settings.executable)
            .arg("--version")
            .output()
            .map_err(|e| IndexError::RecognitionError(format!(
                "Cannot run '{}': {}", settings.executable, e)))?;

        if !output.status.success() {
            return Err(IndexError::RecognitionError(format!(
                "'{} --version' exited with {}", settings.executable, output.status)));
        }

        let version = String::from_utf8_lossy(&output.stdout);
        info!("Using {}", version.lines().next().unwrap_or("tesseract"));

        Ok(TesseractRecognizer {
            settings: settings.clone(),
        })
    }
}

impl TextRecognizer for TesseractRecognizer {
    fn recognize(&self, image: &GrayImage) -> IndexResult<String> {
        let input = tempfile::Builder::new()
            .prefix("indexkit-")
            .suffix(".png")
            .tempfile()?;
        image.save(input.path())?;

        let mut command = Command::new(&self.settings.executable);
        command
            .arg(input.path())
            .arg("stdout")
            .arg("-l")
            .arg(&self.settings.language);
        if let Some(psm) = self.settings.page_segmentation_mode {
            command.arg("--psm").arg(psm.to_string());
        }

        debug!("Running {:?}", command);
        let output = command.output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(IndexError::RecognitionError(format!(
                "tesseract failed: {}", stderr.trim())));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn name(&self) -> &'static str {
        "tesseract"
    }
}
