//! Full archive pipeline command
//!
//! Fetch a page's images, rename them after their numbers and write the
//! index sheet, in that order.

use std::path::PathBuf;

use clap::ArgMatches;

use crate::api::IndexKit;
use crate::commands::arguments::{self, DEFAULT_DOWNLOAD_DIR, DEFAULT_SHEET_PATH};
use crate::commands::command_traits::Command;
use crate::errors::IndexResult;
use crate::utils::logger::Logger;

/// Command running download, rename and indexing for one page
pub struct PipelineCommand<'a> {
    /// Page to scan for images
    url: String,
    /// Folder the images are downloaded and renamed in
    download_dir: PathBuf,
    /// Index sheet to write
    sheet_file: PathBuf,
    kit: IndexKit<'a>,
}

impl<'a> PipelineCommand<'a> {
    /// Create a new pipeline command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> IndexResult<Self> {
        Ok(PipelineCommand {
            url: arguments::input(args)?,
            download_dir: arguments::path_or(args, "output", DEFAULT_DOWNLOAD_DIR),
            sheet_file: arguments::path_or(args, "sheet", DEFAULT_SHEET_PATH),
            kit: IndexKit::new(logger, arguments::settings(args)?),
        })
    }
}

impl<'a> Command for PipelineCommand<'a> {
    fn execute(&self) -> IndexResult<()> {
        let report = self.kit.run_pipeline(&self.url, &self.download_dir, &self.sheet_file)?;

        println!("Found {} image URLs.", report.urls.len());
        println!("Downloaded {} image(s), {} failed", report.downloads.saved.len(), report.downloads.failed.len());
        println!("Number of images identified is {}", report.rename.identified_count());
        println!("Number of unidentified images is {}", report.rename.unidentified_count());
        println!("Index sheet {} has {} row(s)", self.sheet_file.display(), report.sheet_rows.len());
        Ok(())
    }
}
