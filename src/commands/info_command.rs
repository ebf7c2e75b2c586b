//! Document inspection command
//!
//! Default command: prints the page count and intrinsic page sizes of
//! a PDF document.

use clap::ArgMatches;
use log::info;

use crate::api::PdfSnip;
use crate::commands::command_traits::Command;
use crate::pdf::errors::{SnipError, SnipResult};
use crate::utils::logger::Logger;

/// Command for inspecting a PDF document
pub struct InfoCommand<'a> {
    /// Path to the input file
    input_file: String,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> InfoCommand<'a> {
    /// Create a new info command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new InfoCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> SnipResult<Self> {
        let input_file = args.get_one::<String>("input")
            .ok_or_else(|| SnipError::InvalidArgument("Missing input file".to_string()))?
            .clone();

        Ok(InfoCommand { input_file, logger })
    }
}

impl<'a> Command for InfoCommand<'a> {
    fn execute(&self) -> SnipResult<()> {
        info!("Inspecting {}", self.input_file);

        let api = PdfSnip::new(Some("pdfsnip.log"))?;
        let summary = api.info(&self.input_file)?;
        print!("{}", summary);

        self.logger.log(&format!("Inspected {}", self.input_file))?;
        Ok(())
    }
}
