use clap::{Arg, Command as ClapCommand, ArgAction};
use std::path::Path;
use std::process;
use log::{error, Level};

use indexkit::utils::logger::Logger;
use indexkit::commands::{CommandFactory, IndexkitCommandFactory};

fn main() {
    let matches = ClapCommand::new("IndexKit")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Read catalog numbers printed on colored labels in archive images")
        .arg(
            Arg::new("input")
                .help("Image file, image folder (--rename, --index) or page URL (--fetch, --pipeline)")
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
            Arg::new("rename")
                .short('r')
                .long("rename")
                .help("Rename every image in the input folder after its number")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("index")
                .short('i')
                .long("index")
                .help("Write an .xlsx index of the images in the input folder")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("fetch")
                .short('f')
                .long("fetch")
                .help("Download every image of the input page")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("pipeline")
                .short('p')
                .long("pipeline")
                .help("Download, rename and index the images of the input page")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("crop")
                .long("crop")
                .help("Search window as top,left,bottom,right or 'full'; repeat for an ordered list")
                .value_name("WINDOW")
                .action(ArgAction::Append)
                .required(false),
        )
        .arg(
            Arg::new("lower")
                .long("lower")
                .help("Lower HSV bound of the label color (e.g., '90,50,50')")
                .value_name("H,S,V")
                .required(false),
        )
        .arg(
            Arg::new("upper")
                .long("upper")
                .help("Upper HSV bound of the label color (e.g., '130,255,255')")
                .value_name("H,S,V")
                .required(false),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("TOML settings file overlaid on the built-in defaults")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Sheet file for --index, download folder for --fetch and --pipeline")
                .value_name("PATH")
                .required(false),
        )
        .arg(
            Arg::new("sheet")
                .long("sheet")
                .help("Index sheet written by --pipeline")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("title")
                .long("title")
                .help("Worksheet name of the index sheet")
                .value_name("TITLE")
                .required(false),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Write log records to this file as well as stderr")
                .value_name("FILE")
                .required(false),
        )
        .get_matches();

    let level = if matches.get_flag("verbose") { Level::Debug } else { Level::Info };

    let logger = match matches.get_one::<String>("log-file") {
        Some(log_file) => {
            if let Err(e) = Logger::init_global_logger(Path::new(log_file), level) {
                eprintln!("Error setting up global logger: {}", e);
                process::exit(1);
            }
            match Logger::new(&Path::new(log_file).with_extension("summary.log")) {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("Error initializing logger: {}", e);
                    process::exit(1);
                }
            }
        }
        None => {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level.as_str().to_lowercase()))
                .init();
            Logger::disabled()
        }
    };

    let factory = IndexkitCommandFactory::new();

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
