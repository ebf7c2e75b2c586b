//! Print dispatch command
//!
//! Sends a previously exported image to the platform-default print or
//! open handler.

use clap::ArgMatches;
use log::info;

use crate::api::PdfSnip;
use crate::commands::command_traits::Command;
use crate::pdf::errors::{SnipError, SnipResult};
use crate::utils::logger::Logger;

/// Command for printing an exported file
pub struct PrintCommand<'a> {
    /// Path to the file to print
    input_file: String,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> PrintCommand<'a> {
    /// Create a new print command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new PrintCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> SnipResult<Self> {
        let input_file = args.get_one::<String>("input")
            .ok_or_else(|| SnipError::InvalidArgument("Missing file to print".to_string()))?
            .clone();

        Ok(PrintCommand { input_file, logger })
    }
}

impl<'a> Command for PrintCommand<'a> {
    fn execute(&self) -> SnipResult<()> {
        info!("Printing {}", self.input_file);

        let api = PdfSnip::new(Some("pdfsnip.log"))?;
        api.print(&self.input_file)?;

        println!("Sent to printer: {}", self.input_file);
        self.logger.log(&format!("Sent to printer: {}", self.input_file))?;
        Ok(())
    }
}
