//! Command pattern interfaces
//!
//! Each CLI operation is a `Command` built from parsed arguments by a
//! `CommandFactory`.

use crate::errors::IndexResult;
use crate::utils::logger::Logger;

/// Represents an executable command in the application
///
/// Command objects encapsulate one CLI operation, so the binary does not
/// need to know about the library components behind it.
pub trait Command {
    /// Execute the command
    ///
    /// # Returns
    /// Result indicating success or an error
    fn execute(&self) -> IndexResult<()>;
}

/// Factory for creating commands from CLI arguments
pub trait CommandFactory<'a> {
    /// Create a new Command instance based on CLI arguments
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording batch summaries
    ///
    /// # Returns
    /// A command that implements the Command trait, or an error
    fn create_command(&self, args: &clap::ArgMatches, logger: &'a Logger) -> IndexResult<Box<dyn Command + 'a>>;
}
