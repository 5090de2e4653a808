//! Folder renaming command

use std::path::PathBuf;

use clap::ArgMatches;
use log::info;

use crate::api::IndexKit;
use crate::commands::arguments;
use crate::commands::command_traits::Command;
use crate::errors::IndexResult;
use crate::utils::logger::Logger;

/// Command renaming every image of a folder after its number
pub struct RenameCommand<'a> {
    /// Folder containing the images
    folder: PathBuf,
    kit: IndexKit<'a>,
}

impl<'a> RenameCommand<'a> {
    /// Create a new rename command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> IndexResult<Self> {
        Ok(RenameCommand {
            folder: PathBuf::from(arguments::input(args)?),
            kit: IndexKit::new(logger, arguments::settings(args)?),
        })
    }
}

impl<'a> Command for RenameCommand<'a> {
    fn execute(&self) -> IndexResult<()> {
        let report = self.kit.rename_images(&self.folder)?;

        println!("Number of images identified is {}", report.identified_count());
        println!("Number of unidentified images is {}", report.unidentified_count());
        for path in &report.conflicts {
            println!("Not renamed (target exists): {}", path.display());
        }

        info!("Renamed {} image(s) in {}", report.renamed.len(), self.folder.display());
        Ok(())
    }
}
