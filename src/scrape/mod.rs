//! Fetching source pages and images
//!
//! This module finds the image URLs referenced by a web page and downloads
//! them into a local folder under sequential names.

mod fetcher;
mod html_parser;
mod downloader;
#[cfg(test)]
mod tests;

pub use fetcher::{Fetcher, HttpFetcher};
pub use html_parser::HtmlParser;
pub use downloader::{DownloadReport, ImageDownloader};
