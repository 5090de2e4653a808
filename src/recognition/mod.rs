//! Text recognition capability
//!
//! The number extractor depends on recognition only through the
//! `TextRecognizer` trait; `TesseractRecognizer` is the production engine.

mod recognizer;
mod tesseract;

pub use recognizer::TextRecognizer;
pub use tesseract::{TesseractRecognizer, TesseractSettings};
