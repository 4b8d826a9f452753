use log::info;
use std::sync::Arc;

use crate::crs::Crs;
use crate::errors::{GeodeticError, GeodeticResult};
use crate::projstring::{crs_to_proj_string, ProjConvention, ProjStringParser};
use crate::utils::logger::Logger;
use crate::wkt::{emitter, WktParser, WktVersion};

/// Main interface to the CrsKit library
pub struct CrsKit {
    logger: Logger,
}

impl CrsKit {
    /// Create a new CrsKit instance
    ///
    /// # Arguments
    /// * `log_file` - Optional path to log file, defaults to "crskit.log"
    ///
    /// # Returns
    /// A CrsKit instance or an error if initialization fails
    pub fn new(log_file: Option<&str>) -> GeodeticResult<Self> {
        let log_path = log_file.unwrap_or("crskit.log");
        let logger = Logger::new(log_path)?;
        Ok(CrsKit { logger })
    }

    /// Parse a CRS definition, auto-detecting WKT versus PROJ string
    ///
    /// # Arguments
    /// * `input` - A WKT document or a `+key=value` PROJ string
    ///
    /// # Returns
    /// The parsed CRS or an error
    pub fn parse(&self, input: &str) -> GeodeticResult<Arc<Crs>> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(GeodeticError::InvalidValueType(
                "empty CRS definition".to_string(),
            ));
        }
        let _ = self
            .logger
            .log(&format!("parsing CRS definition ({} bytes)", trimmed.len()));
        if trimmed.starts_with('+') {
            info!("input detected as a PROJ string");
            ProjStringParser::new().parse(trimmed)
        } else {
            info!("input detected as WKT");
            WktParser::new().parse(trimmed)
        }
    }

    /// Serialize a CRS as WKT in the requested dialect
    ///
    /// # Arguments
    /// * `crs` - The CRS to serialize
    /// * `dialect` - One of "wkt2", "wkt2_2015", "wkt2_2018", "wkt1", "esri"
    /// * `simplified` - Whether to use the simplified WKT2 variants
    pub fn to_wkt(&self, crs: &Crs, dialect: &str, simplified: bool) -> GeodeticResult<String> {
        let version = Self::wkt_version(dialect)?;
        emitter::wkt_string(crs, version, simplified)
    }

    /// Serialize a CRS as a PROJ string
    ///
    /// # Arguments
    /// * `crs` - The CRS to serialize
    /// * `convention` - "proj5" for the pipeline form, "proj4" for the flat
    ///   legacy form
    pub fn to_proj(&self, crs: &Crs, convention: &str) -> GeodeticResult<String> {
        let convention = match convention {
            "proj5" | "pipeline" => ProjConvention::Proj5,
            "proj4" | "legacy" => ProjConvention::Proj4,
            other => {
                return Err(GeodeticError::InvalidValueType(format!(
                    "unrecognized PROJ convention '{}'",
                    other
                )))
            }
        };
        crs_to_proj_string(crs, convention)
    }

    /// Describe a CRS definition in a human-readable form
    ///
    /// # Arguments
    /// * `input` - A WKT document or PROJ string
    ///
    /// # Returns
    /// String containing a structural summary or an error
    pub fn identify(&self, input: &str) -> GeodeticResult<String> {
        let crs = self.parse(input)?;
        let mut result = String::from("CRS Analysis Results:\n");
        Self::describe(&crs, 1, &mut result);
        Ok(result)
    }

    fn describe(crs: &Crs, depth: usize, out: &mut String) {
        let indent = "  ".repeat(depth);
        let kind = match crs {
            Crs::Geographic(_) => "Geographic CRS",
            Crs::Geodetic(_) => "Geodetic CRS (geocentric)",
            Crs::Projected(_) => "Projected CRS",
            Crs::Vertical(_) => "Vertical CRS",
            Crs::Compound(_) => "Compound CRS",
            Crs::Bound(_) => "Bound CRS",
            Crs::Engineering(_) => "Engineering CRS",
            Crs::Temporal(_) => "Temporal CRS",
            Crs::Parametric(_) => "Parametric CRS",
            Crs::Derived(_) => "Derived CRS",
        };
        out.push_str(&format!("{}Kind: {}\n", indent, kind));
        out.push_str(&format!("{}Name: {}\n", indent, crs.name()));
        if let Some(code) = crs.epsg_code() {
            out.push_str(&format!("{}EPSG: {}\n", indent, code));
        }
        if let Some(cs) = crs.coordinate_system() {
            let axes: Vec<String> = cs
                .axes()
                .iter()
                .map(|a| format!("{} ({})", a.name(), a.direction.as_wkt2_str()))
                .collect();
            out.push_str(&format!("{}Axes: {}\n", indent, axes.join(", ")));
        }
        match crs {
            Crs::Compound(compound) => {
                for component in &compound.components {
                    Self::describe(component, depth + 1, out);
                }
            }
            Crs::Bound(bound) => {
                out.push_str(&format!(
                    "{}Transformation: {} (method {})\n",
                    indent,
                    bound.transformation.name(),
                    bound.transformation.method.name()
                ));
                Self::describe(&bound.base_crs, depth + 1, out);
            }
            Crs::Projected(projected) => {
                out.push_str(&format!(
                    "{}Method: {}\n",
                    indent,
                    projected.deriving_conversion().method.name()
                ));
            }
            _ => {}
        }
    }

    fn wkt_version(dialect: &str) -> GeodeticResult<WktVersion> {
        match dialect {
            "wkt2" | "wkt2_2015" => Ok(WktVersion::Wkt2_2015),
            "wkt2_2018" => Ok(WktVersion::Wkt2_2018),
            "wkt1" | "wkt1_gdal" | "gdal" => Ok(WktVersion::Wkt1Gdal),
            "wkt1_esri" | "esri" => Ok(WktVersion::Wkt1Esri),
            other => Err(GeodeticError::InvalidValueType(format!(
                "unrecognized WKT dialect '{}'",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_detection() {
        let kit = CrsKit::new(Some("test_api.log")).unwrap();
        let from_proj = kit.parse("+proj=longlat +datum=WGS84").unwrap();
        assert!(matches!(&*from_proj, Crs::Geographic(_)));

        let from_wkt = kit
            .parse(
                r#"GEOGCS["WGS 84",DATUM["WGS_1984",SPHEROID["WGS 84",6378137,298.257223563]],PRIMEM["Greenwich",0],UNIT["degree",0.0174532925199433]]"#,
            )
            .unwrap();
        assert!(matches!(&*from_wkt, Crs::Geographic(_)));
    }

    #[test]
    fn test_identify_summary() {
        let kit = CrsKit::new(Some("test_api.log")).unwrap();
        let summary = kit.identify("+proj=utm +zone=31 +datum=WGS84").unwrap();
        assert!(summary.contains("Projected CRS"));
        assert!(summary.contains("Transverse Mercator"));
    }
}
