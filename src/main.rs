use std::process;
use log::{error, Level};

use featurekit::commands::{build_cli, CommandFactory, FeaturekitCommandFactory};
use featurekit::utils::logger::{level_for, Logger};

fn main() {
    let matches = build_cli().get_matches();
    let verbose = matches.get_flag("verbose");

    // The file logger doubles as the global logger when a log file is given
    let logger = match matches.get_one::<String>("log-file") {
        Some(log_file) => {
            let level = if verbose { Level::Debug } else { Level::Info };
            if let Err(e) = Logger::init_global_logger(log_file, level) {
                eprintln!("Error setting up global logger: {}", e);
                process::exit(1);
            }
            match Logger::new(&format!("{}.summary", log_file)) {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("Error initializing logger: {}", e);
                    process::exit(1);
                }
            }
        },
        None => {
            env_logger::Builder::new()
                .filter_level(level_for(verbose))
                .parse_default_env()
                .init();
            Logger::disabled()
        },
    };

    let factory = FeaturekitCommandFactory::new();

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
