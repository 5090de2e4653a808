//! CLI command implementations
//!
//! This module contains the commands of the CLI application, built with
//! the Command pattern.

pub mod command_traits;
pub mod arguments;
pub mod extract_command;
pub mod rename_command;
pub mod index_command;
pub mod fetch_command;
pub mod pipeline_command;

pub use command_traits::{Command, CommandFactory};
pub use extract_command::ExtractCommand;
pub use rename_command::RenameCommand;
pub use index_command::IndexCommand;
pub use fetch_command::FetchCommand;
pub use pipeline_command::PipelineCommand;

use clap::ArgMatches;
use crate::errors::IndexResult;
use crate::utils::logger::Logger;

/// Factory for creating command instances based on CLI arguments
///
/// `--rename`, `--index`, `--fetch` and `--pipeline` select a command;
/// without any of them the input image is searched for its number.
pub struct IndexkitCommandFactory;

impl IndexkitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        IndexkitCommandFactory
    }
}

impl Default for IndexkitCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for IndexkitCommandFactory {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> IndexResult<Box<dyn Command + 'a>> {
        if args.get_flag("pipeline") {
            Ok(Box::new(PipelineCommand::new(args, logger)?))
        } else if args.get_flag("rename") {
            Ok(Box::new(RenameCommand::new(args, logger)?))
        } else if args.get_flag("index") {
            Ok(Box::new(IndexCommand::new(args, logger)?))
        } else if args.get_flag("fetch") {
            Ok(Box::new(FetchCommand::new(args, logger)?))
        } else {
            Ok(Box::new(ExtractCommand::new(args, logger)?))
        }
    }
}
