use clap::{Arg, ArgAction, Command as ClapCommand};
use log::{error, LevelFilter};
use std::process;

// Import from your library
use exifkit::commands::{CommandFactory, ExifkitCommandFactory};
use exifkit::utils::logger::Logger;

fn main() {
    let matches = ClapCommand::new("ExifKit")
        .version("1.0")
        .about("Read EXIF metadata from JPEG and TIFF images")
        .arg(
            Arg::new("input")
                .help("Input image file")
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
            Arg::new("strict")
                .long("strict")
                .help("Fail on unknown field types instead of skipping them")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quick")
                .short('q')
                .long("quick")
                .help("Skip MakerNote and UserComment tags")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("stop-tag")
                .long("stop-tag")
                .help("Stop decoding an IFD once this tag has been read")
                .value_name("NAME")
                .required(false),
        )
        .arg(
            Arg::new("tag")
                .long("tag")
                .help("Only display tags whose key contains NAME")
                .value_name("NAME")
                .required(false),
        )
        .get_matches();

    let logger = match Logger::new("exifkit.log") {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error initializing logger: {}", e);
            process::exit(1);
        }
    };

    let level = if matches.get_flag("verbose") {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    if let Err(e) = Logger::init_global_logger("exifkit-global.log", level) {
        eprintln!("Error setting up global logger: {}", e);
        process::exit(1);
    }

    let factory = ExifkitCommandFactory::new();

    match factory.create_command(&matches, &logger) {
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
