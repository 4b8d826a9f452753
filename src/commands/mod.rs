//! CLI command implementations
//!
//! This module contains implementations of various commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod convert_command;
pub mod identify_command;

pub use command_traits::{Command, CommandFactory};
pub use convert_command::ConvertCommand;
pub use identify_command::IdentifyCommand;

use crate::errors::GeodeticResult;
use crate::utils::logger::Logger;
use clap::ArgMatches;

/// Factory for creating command instances based on CLI arguments
///
/// This factory examines the command-line arguments and creates
/// the appropriate command instance for execution.
pub struct CrsKitCommandFactory;

impl CrsKitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        CrsKitCommandFactory
    }
}

impl Default for CrsKitCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for CrsKitCommandFactory {
    fn create_command(
        &self,
        args: &ArgMatches,
        logger: &'a Logger,
    ) -> GeodeticResult<Box<dyn Command + 'a>> {
        // Determine which command to run based on args
        if args.get_one::<String>("output-format").is_some() {
            Ok(Box::new(ConvertCommand::new(args, logger)?))
        } else {
            // Default to identification
            Ok(Box::new(IdentifyCommand::new(args, logger)?))
        }
    }
}
