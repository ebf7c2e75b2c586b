//! CLI command implementations
//!
//! This module contains implementations of various commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod info_command;
pub mod extract_command;
pub mod print_command;

pub use command_traits::{Command, CommandFactory};
pub use info_command::InfoCommand;
pub use extract_command::ExtractCommand;
pub use print_command::PrintCommand;

use clap::ArgMatches;
use crate::pdf::errors::SnipResult;
use crate::utils::logger::Logger;

/// Factory for creating command instances based on CLI arguments
///
/// This factory examines the command-line arguments and creates
/// the appropriate command instance for execution.
pub struct PdfsnipCommandFactory;

impl PdfsnipCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        PdfsnipCommandFactory
    }
}

impl Default for PdfsnipCommandFactory {
    fn default() -> Self {
        PdfsnipCommandFactory::new()
    }
}

impl<'a> CommandFactory<'a> for PdfsnipCommandFactory {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> SnipResult<Box<dyn Command + 'a>> {
        // Determine which command to run based on args
        if args.get_flag("extract") {
            Ok(Box::new(ExtractCommand::new(args, logger)?))
        } else if args.get_flag("print") {
            // Without --extract, the input itself is the file to print
            Ok(Box::new(PrintCommand::new(args, logger)?))
        } else {
            // Default to document inspection
            Ok(Box::new(InfoCommand::new(args, logger)?))
        }
    }
}
