use clap::{Arg, ArgAction, Command as ClapCommand};
use log::error;
use std::process;

// Import from your library
use crskit::commands::{CommandFactory, CrsKitCommandFactory};
use crskit::utils::logger::Logger;

fn main() {
    let matches = ClapCommand::new("CrsKit")
        .version("1.0")
        .about("Parse, identify and convert coordinate reference system definitions")
        .arg(
            Arg::new("input")
                .help("CRS definition (WKT or PROJ string), or a path to a file holding one")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("output-format")
                .short('o')
                .long("output-format")
                .help("Convert to this format (wkt2, wkt2_2018, wkt1, esri, proj4, proj5)")
                .value_name("FORMAT")
                .required(false),
        )
        .arg(
            Arg::new("simplified")
                .long("simplified")
                .help("Use the simplified WKT2 variants")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let log_file = "crskit.log";
    let logger = match Logger::new(log_file) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error initializing logger: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = Logger::init_global_logger("crskit-global.log") {
        eprintln!("Error setting up global logger: {}", e);
        process::exit(1);
    }

    let factory = CrsKitCommandFactory::new();

    let command_result = factory.create_command(&matches, &logger);
    match command_result {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
