//! CRS conversion command
//!
//! This module implements the command for re-serializing a CRS definition
//! into another dialect: a WKT flavour or a PROJ string convention.

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::commands::identify_command::read_definition;
use crate::errors::GeodeticResult;
use crate::utils::logger::Logger;
use crate::CrsKit;

/// Command for converting a CRS definition between dialects
pub struct ConvertCommand<'a> {
    /// The CRS definition, inline or loaded from a file
    definition: String,
    /// Output format name (wkt2, wkt2_2018, wkt1, esri, proj4, proj5)
    output_format: String,
    /// Whether to use the simplified WKT2 variants
    simplified: bool,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> ConvertCommand<'a> {
    /// Create a new convert command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new ConvertCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> GeodeticResult<Self> {
        let definition = read_definition(args)?;
        let output_format = args
            .get_one::<String>("output-format")
            .cloned()
            .unwrap_or_else(|| "wkt2".to_string());
        let simplified = args.get_flag("simplified");
        Ok(ConvertCommand {
            definition,
            output_format,
            simplified,
            logger,
        })
    }
}

impl<'a> Command for ConvertCommand<'a> {
    fn execute(&self) -> GeodeticResult<()> {
        let kit = CrsKit::new(None)?;
        let crs = kit.parse(&self.definition)?;
        info!("converting '{}' to {}", crs.name(), self.output_format);
        let output = match self.output_format.as_str() {
            "proj4" | "proj5" | "pipeline" | "legacy" => kit.to_proj(&crs, &self.output_format)?,
            other => kit.to_wkt(&crs, other, self.simplified)?,
        };
        let _ = self.logger.log(&output);
        println!("{}", output);
        Ok(())
    }
}
