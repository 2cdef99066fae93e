//! CLI command implementations
//!
//! This module contains implementations of various commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod transform_command;
pub mod describe_command;

pub use command_traits::{Command, CommandFactory};
pub use transform_command::TransformCommand;
pub use describe_command::DescribeCommand;

use clap::{Arg, ArgAction, ArgMatches, Command as ClapCommand};
use crate::utils::logger::Logger;
use crate::errors::FeatureResult;

/// Build the command line definition
pub fn build_cli() -> ClapCommand {
    ClapCommand::new("featurekit")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Maurice Schilpp")
        .about("Reproject vector features and convert them to geocentric coordinates")
        .arg(
            Arg::new("input")
                .help("Input feature file, '-' for stdin")
                .default_value("-")
                .index(1),
        )
        .arg(
            Arg::new("from")
                .long("from")
                .help("CRS of the input features (e.g. EPSG:4326)")
                .value_name("CRS")
                .required(false),
        )
        .arg(
            Arg::new("to")
                .long("to")
                .help("CRS to transform into (e.g. EPSG:3857, 'UTM 33N')")
                .value_name("CRS")
                .required(false),
        )
        .arg(
            Arg::new("geocentric")
                .short('g')
                .long("geocentric")
                .help("Convert geographic output to geocentric (ECEF) coordinates")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("geometry")
                .long("geometry")
                .help("Geometry type of the features (point, line, polygon)")
                .value_name("TYPE")
                .required(false),
        )
        .arg(
            Arg::new("multi")
                .long("multi")
                .help("Mark the features as multi-geometries")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("TOML configuration file")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("describe")
                .long("describe")
                .help("Describe a CRS and exit")
                .value_name("CRS")
                .required(false),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Also write log output to this file")
                .value_name("FILE")
                .required(false),
        )
}

/// Factory for creating command instances based on CLI arguments
pub struct FeaturekitCommandFactory;

impl FeaturekitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        FeaturekitCommandFactory
    }
}

impl Default for FeaturekitCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for FeaturekitCommandFactory {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> FeatureResult<Box<dyn Command + 'a>> {
        if args.contains_id("describe") {
            Ok(Box::new(DescribeCommand::new(args, logger)?))
        } else {
            Ok(Box::new(TransformCommand::new(args, logger)?))
        }
    }
}
