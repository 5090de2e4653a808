//! Number extraction command
//!
//! Prints the number found on a single image to stdout.

use std::path::PathBuf;

use clap::ArgMatches;
use log::info;

use crate::api::IndexKit;
use crate::commands::arguments;
use crate::commands::command_traits::Command;
use crate::errors::IndexResult;
use crate::utils::logger::Logger;

/// Command for reading the number printed on one image
pub struct ExtractCommand<'a> {
    /// Path to the input image
    input_file: PathBuf,
    /// Library facade holding the effective settings
    kit: IndexKit<'a>,
}

impl<'a> ExtractCommand<'a> {
    /// Create a new extract command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> IndexResult<Self> {
        let input_file = PathBuf::from(arguments::input(args)?);
        let settings = arguments::settings(args)?;

        Ok(ExtractCommand {
            input_file,
            kit: IndexKit::new(logger, settings),
        })
    }
}

impl<'a> Command for ExtractCommand<'a> {
    fn execute(&self) -> IndexResult<()> {
        info!("Extracting number from {}", self.input_file.display());

        match self.kit.extract_number(&self.input_file, None, None, None)? {
            Some(number) => println!("{}", number),
            None => info!("No number found in {}", self.input_file.display()),
        }

        Ok(())
    }
}
