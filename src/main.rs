use clap::{Arg, Command as ClapCommand, ArgAction};
use std::process;
use log::error;

// Import from your library
use pdfsnip::utils::logger::Logger;
use pdfsnip::commands::{CommandFactory, PdfsnipCommandFactory};

fn main() {
    let matches = ClapCommand::new("pdfsnip")
        .version("0.1")
        .about("Select a rectangular region of a rendered PDF page and export it as a PNG")
        .arg(
            Arg::new("input")
                .help("Input PDF file (or, with --print alone, the file to print)")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("extract")
                .short('e')
                .long("extract")
                .help("Extract the selected region to a PNG image")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("rect")
                .short('r')
                .long("rect")
                .help("Drag rectangle in screen pixels (x1,y1,x2,y2)")
                .value_name("RECT")
                .required(false),
        )
        .arg(
            Arg::new("page")
                .short('p')
                .long("page")
                .help("Zero-based page index")
                .value_name("INDEX")
                .default_value("0")
                .required(false),
        )
        .arg(
            Arg::new("display-scale")
                .long("display-scale")
                .help("Display scale the rectangle coordinates refer to")
                .value_name("SCALE")
                .default_value("1.0")
                .required(false),
        )
        .arg(
            Arg::new("export-scale")
                .long("export-scale")
                .help("Scale factor for the exported bitmap, independent of the display scale")
                .value_name("SCALE")
                .default_value("2.0")
                .required(false),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Output PNG file (defaults to selection_<timestamp>.png)")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("print")
                .long("print")
                .help("Send the exported file (or the input, without --extract) to the system print handler")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let log_file = "pdfsnip.log";
    let logger = match Logger::new(log_file) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error initializing logger: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = Logger::init_global_logger("pdfsnip-global.log") {
        eprintln!("Error setting up global logger: {}", e);
        process::exit(1);
    }

    let factory = PdfsnipCommandFactory::new();

    let command_result = factory.create_command(&matches, &logger);
    match command_result {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
