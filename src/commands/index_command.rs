//! Index sheet command

use std::path::PathBuf;

use clap::ArgMatches;

use crate::api::IndexKit;
use crate::commands::arguments::{self, DEFAULT_SHEET_PATH};
use crate::commands::command_traits::Command;
use crate::errors::IndexResult;
use crate::utils::logger::Logger;

/// Command writing an `.xlsx` index of a folder of images
pub struct IndexCommand<'a> {
    /// Folder containing the images
    folder: PathBuf,
    /// Sheet to write
    output_file: PathBuf,
    kit: IndexKit<'a>,
}

impl<'a> IndexCommand<'a> {
    /// Create a new index command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> IndexResult<Self> {
        Ok(IndexCommand {
            folder: PathBuf::from(arguments::input(args)?),
            output_file: arguments::path_or(args, "output", DEFAULT_SHEET_PATH),
            kit: IndexKit::new(logger, arguments::settings(args)?),
        })
    }
}

impl<'a> Command for IndexCommand<'a> {
    fn execute(&self) -> IndexResult<()> {
        let names = self.kit.create_index_sheet(&self.folder, &self.output_file)?;
        println!("Wrote {} image(s) to {}", names.len(), self.output_file.display());
        Ok(())
    }
}
