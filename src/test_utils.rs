//! Shared fixtures for unit tests

use std::collections::{HashMap, VecDeque};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use image::{GrayImage, Rgb, RgbImage};

use crate::errors::{IndexError, IndexResult};
use crate::extractor::NumberSource;
use crate::recognition::TextRecognizer;
use crate::scrape::Fetcher;

pub const BLUE: Rgb<u8> = Rgb([30, 60, 220]);
pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
pub const RED: Rgb<u8> = Rgb([220, 30, 30]);

/// Creates an image filled with one color
pub fn solid_image(width: u32, height: u32, color: Rgb<u8>) -> RgbImage {
    RgbImage::from_pixel(width, height, color)
}

/// Paints a filled rectangle
pub fn fill_rect(image: &mut RgbImage, x: u32, y: u32, width: u32, height: u32, color: Rgb<u8>) {
    for py in y..y + height {
        for px in x..x + width {
            image.put_pixel(px, py, color);
        }
    }
}

/// Saves an image as PNG inside `dir`
pub fn write_png(dir: &Path, name: &str, image: &RgbImage) -> PathBuf {
    let path = dir.join(name);
    image.save(&path).unwrap();
    path
}

/// Recognizer replaying a fixed script of responses
///
/// Once the script runs out it keeps answering with `fallback`.
pub struct ScriptedRecognizer {
    responses: Mutex<VecDeque<IndexResult<String>>>,
    fallback: String,
    calls: AtomicUsize,
    sizes: Mutex<Vec<(u32, u32)>>,
}

impl ScriptedRecognizer {
    pub fn new(responses: &[&str]) -> Self {
        Self::with_results(responses.iter().map(|r| Ok(r.to_string())).collect())
    }

    pub fn with_results(responses: Vec<IndexResult<String>>) -> Self {
        ScriptedRecognizer {
            responses: Mutex::new(responses.into_iter().collect()),
            fallback: String::new(),
            calls: AtomicUsize::new(0),
            sizes: Mutex::new(Vec::new()),
        }
    }

    pub fn always(text: &str) -> Self {
        let mut recognizer = Self::new(&[]);
        recognizer.fallback = text.to_string();
        recognizer
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn sizes(&self) -> Vec<(u32, u32)> {
        self.sizes.lock().unwrap().clone()
    }
}

impl TextRecognizer for ScriptedRecognizer {
    fn recognize(&self, image: &GrayImage) -> IndexResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.sizes.lock().unwrap().push(image.dimensions());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(self.fallback.clone()))
    }

    fn name(&self) -> &'static str {
        "scripted"
    }
}

/// Number source answering from a script, in call order
pub struct ScriptedSource {
    answers: Mutex<VecDeque<IndexResult<Option<String>>>>,
    seen: Mutex<Vec<PathBuf>>,
}

impl ScriptedSource {
    pub fn new(answers: &[Option<&str>]) -> Self {
        ScriptedSource {
            answers: Mutex::new(answers.iter().map(|a| Ok(a.map(str::to_string))).collect()),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn push_error(&self, error: IndexError) {
        self.answers.lock().unwrap().push_back(Err(error));
    }

    pub fn seen(&self) -> Vec<PathBuf> {
        self.seen.lock().unwrap().clone()
    }
}

impl NumberSource for ScriptedSource {
    fn extract(&self, image_path: &Path) -> IndexResult<Option<String>> {
        self.seen.lock().unwrap().push(image_path.to_path_buf());
        self.answers.lock().unwrap().pop_front().unwrap_or(Ok(None))
    }
}

/// Fetcher serving canned bodies; unknown URLs fail
#[derive(Default)]
pub struct StubFetcher {
    pages: HashMap<String, String>,
    files: HashMap<String, Vec<u8>>,
    requests: Mutex<Vec<String>>,
}

impl StubFetcher {
    pub fn with_page(mut self, url: &str, html: &str) -> Self {
        self.pages.insert(url.to_string(), html.to_string());
        self
    }

    pub fn with_file(mut self, url: &str, data: &[u8]) -> Self {
        self.files.insert(url.to_string(), data.to_vec());
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl Fetcher for StubFetcher {
    fn get_text(&self, url: &str) -> IndexResult<String> {
        self.requests.lock().unwrap().push(url.to_string());
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| IndexError::HttpError(format!("404 for {}", url)))
    }

    fn get_bytes(&self, url: &str) -> IndexResult<Vec<u8>> {
        self.requests.lock().unwrap().push(url.to_string());
        self.files
            .get(url)
            .cloned()
            .ok_or_else(|| IndexError::HttpError(format!("404 for {}", url)))
    }
}
