//! CRS identification command
//!
//! This module implements the command for parsing a CRS definition and
//! displaying its structure.

use clap::ArgMatches;
use log::info;
use std::fs;

use crate::commands::command_traits::Command;
use crate::errors::{GeodeticError, GeodeticResult};
use crate::utils::logger::Logger;
use crate::CrsKit;

/// Command for describing a CRS definition
pub struct IdentifyCommand<'a> {
    /// The CRS definition, inline or loaded from a file
    definition: String,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> IdentifyCommand<'a> {
    /// Create a new identify command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new IdentifyCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> GeodeticResult<Self> {
        let definition = read_definition(args)?;
        Ok(IdentifyCommand { definition, logger })
    }
}

impl<'a> Command for IdentifyCommand<'a> {
    fn execute(&self) -> GeodeticResult<()> {
        let kit = CrsKit::new(None)?;
        let summary = kit.identify(&self.definition)?;
        let _ = self.logger.log(&summary);
        info!("{}", summary);
        println!("{}", summary);
        Ok(())
    }
}

/// Read the CRS definition from the `input` argument, treating it as a file
/// path when one exists on disk
pub fn read_definition(args: &ArgMatches) -> GeodeticResult<String> {
    let input = args
        .get_one::<String>("input")
        .ok_or_else(|| GeodeticError::InvalidValueType("Missing input definition".to_string()))?;
    if std::path::Path::new(input).exists() {
        Ok(fs::read_to_string(input)?)
    } else {
        Ok(input.clone())
    }
}
