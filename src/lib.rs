pub mod errors;
pub mod color;
pub mod detector;
pub mod recognition;
pub mod extractor;
pub mod archive;
pub mod scrape;
pub mod config;
pub mod utils;
pub mod commands;
pub mod api;

#[cfg(test)]
mod test_utils;

pub use crate::api::{IndexKit, PipelineReport};
pub use crate::errors::{IndexError, IndexResult};

pub use color::{ColorBand, Hsv};
pub use detector::{find_regions, PixelRect, Region};
pub use extractor::{filter_digits, CropWindow, NumberExtractor, NumberSource};
pub use recognition::{TesseractRecognizer, TextRecognizer};
pub use archive::{ImageRenamer, RenameReport, SheetWriter};
pub use config::Settings;
