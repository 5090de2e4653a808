//! Image download command

use std::path::PathBuf;

use clap::ArgMatches;
use log::warn;

use crate::api::IndexKit;
use crate::commands::arguments::{self, DEFAULT_DOWNLOAD_DIR};
use crate::commands::command_traits::Command;
use crate::errors::IndexResult;
use crate::utils::logger::Logger;

/// Command downloading every image referenced by a web page
pub struct FetchCommand<'a> {
    /// Page to scan for images
    url: String,
    /// Folder receiving the downloads
    output_dir: PathBuf,
    kit: IndexKit<'a>,
}

impl<'a> FetchCommand<'a> {
    /// Create a new fetch command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> IndexResult<Self> {
        Ok(FetchCommand {
            url: arguments::input(args)?,
            output_dir: arguments::path_or(args, "output", DEFAULT_DOWNLOAD_DIR),
            kit: IndexKit::new(logger, arguments::settings(args)?),
        })
    }
}

impl<'a> Command for FetchCommand<'a> {
    fn execute(&self) -> IndexResult<()> {
        let urls = self.kit.fetch_image_urls(&self.url)?;
        println!("Found {} image URLs.", urls.len());

        let report = self.kit.download_images(&urls, &self.output_dir)?;
        println!("Downloaded {} image(s) to {}", report.saved.len(), self.output_dir.display());
        for url in &report.failed {
            warn!("Could not download {}", url);
        }

        Ok(())
    }
}
