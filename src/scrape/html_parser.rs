//! Image URL extraction from HTML pages

use lazy_static::lazy_static;
use log::{debug, info};
use regex::Regex;
use reqwest::Url;

use crate::errors::{IndexError, IndexResult};
use super::fetcher::Fetcher;

lazy_static! {
    // src attribute of an <img> tag, double-quoted, single-quoted or bare
    static ref IMG_SRC: Regex = Regex::new(
        r#"(?is)<img\b[^>]*?\ssrc\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+))"#
    ).expect("image source pattern is valid");
}

/// Parser for the image references of a page
pub struct HtmlParser;

impl HtmlParser {
    /// Extract the `src` of every `<img>` tag, in document order
    ///
    /// Tags without a `src`, or with an empty one, are skipped. URLs are
    /// returned as written in the page.
    pub fn extract_img_urls(html: &str) -> Vec<String> {
        IMG_SRC
            .captures_iter(html)
            .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)).or_else(|| caps.get(3)))
            .map(|m| m.as_str().trim().replace("&amp;", "&"))
            .filter(|src| !src.is_empty())
            .collect()
    }

    /// Fetch a page and return the absolute URLs of all its images
    ///
    /// # Arguments
    /// * `fetcher` - Used to download the page
    /// * `url` - Page URL
    ///
    /// # Returns
    /// Image URLs resolved against the page URL
    pub fn get_all_image_urls_from_site(fetcher: &dyn Fetcher, url: &str) -> IndexResult<Vec<String>> {
        let base = Url::parse(url)
            .map_err(|e| IndexError::validation("url", format!("'{}' is not a valid URL: {}", url, e)))?;

        info!("Fetching page {}", url);
        let html = fetcher.get_text(url)?;
        debug!("Fetched {} bytes of HTML", html.len());

        let urls: Vec<String> = Self::extract_img_urls(&html)
            .into_iter()
            .filter_map(|src| match base.join(&src) {
                Ok(resolved) => Some(resolved.to_string()),
                Err(e) => {
                    debug!("Skipping unresolvable image source '{}': {}", src, e);
                    None
                }
            })
            .collect();

        info!("Found {} image URL(s) on {}", urls.len(), url);
        Ok(urls)
    }
}
