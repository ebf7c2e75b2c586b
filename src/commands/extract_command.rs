//! Region extraction command
//!
//! This module implements the command for extracting a selected page
//! region from a PDF file to a PNG image, with an optional print of
//! the exported file.

use clap::ArgMatches;
use log::{error, info};

use crate::api::PdfSnip;
use crate::commands::command_traits::Command;
use crate::pdf::errors::{SnipError, SnipResult};
use crate::utils::logger::Logger;

/// Command for extracting a page region from a PDF file
pub struct ExtractCommand<'a> {
    /// Path to the input file
    input_file: String,
    /// Path to the output file (None for a timestamped default)
    output_file: Option<String>,
    /// Zero-based page index
    page: usize,
    /// Drag rectangle string in screen pixels ("x1,y1,x2,y2")
    rect_str: String,
    /// Display scale the rectangle coordinates refer to
    display_scale: f32,
    /// Export scale for the output bitmap
    export_scale: f32,
    /// Whether to dispatch the exported file to the printer
    print_after: bool,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> ExtractCommand<'a> {
    /// Create a new extract command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new ExtractCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> SnipResult<Self> {
        info!("Creating new extract command from arguments");

        let input_file = args.get_one::<String>("input")
            .ok_or_else(|| SnipError::InvalidArgument("Missing input file".to_string()))?
            .clone();
        info!("Input file: {}", input_file);

        let output_file = args.get_one::<String>("output").cloned();
        info!("Output file: {:?}", output_file);

        let rect_str = args.get_one::<String>("rect")
            .ok_or_else(|| SnipError::InvalidArgument(
                "Missing --rect for extraction (format: x1,y1,x2,y2)".to_string()))?
            .clone();
        info!("Selection rect: {}", rect_str);

        let page = match args.get_one::<String>("page") {
            Some(page_str) => page_str.parse::<usize>()
                .map_err(|_| SnipError::InvalidArgument(format!("Invalid page index: {}", page_str)))?,
            None => 0,
        };
        info!("Page index: {}", page);

        let display_scale = parse_scale(args, "display-scale", 1.0)?;
        info!("Display scale: {}", display_scale);

        let export_scale = parse_scale(args, "export-scale", 2.0)?;
        info!("Export scale: {}", export_scale);

        let print_after = args.get_flag("print");
        info!("Print after extraction: {}", print_after);

        Ok(ExtractCommand {
            input_file,
            output_file,
            page,
            rect_str,
            display_scale,
            export_scale,
            print_after,
            logger,
        })
    }
}

impl<'a> Command for ExtractCommand<'a> {
    fn execute(&self) -> SnipResult<()> {
        info!("Executing extract command");

        let api = PdfSnip::new(Some("pdfsnip.log"))?;

        let written = match api.extract(
            &self.input_file,
            self.page,
            &self.rect_str,
            self.display_scale,
            self.export_scale,
            self.output_file.as_deref(),
        ) {
            Ok(path) => path,
            Err(e) => {
                error!("Extraction failed: {}", e);
                return Err(e);
            }
        };

        println!("Selection saved as {}", written.display());
        self.logger.log(&format!("Selection saved as {}", written.display()))?;

        if self.print_after {
            info!("Dispatching exported file to printer");
            api.print(&written.to_string_lossy())?;
            println!("Sent to printer: {}", written.display());
        }

        Ok(())
    }
}

/// Parse a positive scale argument with a default
fn parse_scale(args: &ArgMatches, name: &str, default: f32) -> SnipResult<f32> {
    let value = match args.get_one::<String>(name) {
        Some(s) => s.parse::<f32>()
            .map_err(|_| SnipError::InvalidArgument(format!("Invalid {} value: {}", name, s)))?,
        None => default,
    };

    if !(value.is_finite() && value > 0.0) {
        return Err(SnipError::InvalidArgument(format!(
            "{} must be a positive number, got {}",
            name, value
        )));
    }
    Ok(value)
}
