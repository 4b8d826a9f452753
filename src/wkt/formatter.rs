//! WKT formatter state
//!
//! The emitter walks the object graph depth-first and writes through this
//! formatter, which owns the dialect, the omission rules, the pushed axis
//! unit, and the WKT1 datum-extension state (TOWGS84 and grid files).

use crate::common::Unit;

/// The WKT dialect being produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WktVersion {
    Wkt1Gdal,
    Wkt1Esri,
    Wkt2_2015,
    Wkt2_2018,
}

impl WktVersion {
    pub fn is_wkt2(&self) -> bool {
        matches!(self, WktVersion::Wkt2_2015 | WktVersion::Wkt2_2018)
    }

    pub fn is_wkt1(&self) -> bool {
        !self.is_wkt2()
    }
}

/// Format a number with 15 significant digits and trailing zeros trimmed,
/// always as a plain decimal
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value == value.trunc() && value.abs() < 1e15 {
        return format!("{}", value as i64);
    }
    let exponent = value.abs().log10().floor() as i32;
    let decimals = (15 - 1 - exponent).max(0) as usize;
    let mut s = format!("{:.*}", decimals, value);
    if s.contains('.') {
        s = s.trim_end_matches('0').trim_end_matches('.').to_string();
    }
    s
}

/// Stateful WKT writer
pub struct WktFormatter {
    version: WktVersion,
    simplified: bool,
    output_ids: bool,
    buffer: String,
    /// One entry per open node: whether a child has been written yet
    open_nodes: Vec<bool>,
    axis_units: Vec<Unit>,
    towgs84: Option<Vec<f64>>,
    horizontal_grid_extension: Option<String>,
    vertical_grid_extension: Option<String>,
    id_disabled_depth: usize,
}

impl WktFormatter {
    pub fn new(version: WktVersion) -> Self {
        WktFormatter {
            version,
            simplified: false,
            output_ids: true,
            buffer: String::new(),
            open_nodes: Vec::new(),
            axis_units: Vec::new(),
            towgs84: None,
            horizontal_grid_extension: None,
            vertical_grid_extension: None,
            id_disabled_depth: 0,
        }
    }

    /// A simplified WKT2 variant: no IDs, no ORDER, units hoisted
    pub fn simplified(version: WktVersion) -> Self {
        let mut formatter = Self::new(version);
        formatter.simplified = true;
        formatter.output_ids = false;
        formatter
    }

    pub fn version(&self) -> WktVersion {
        self.version
    }

    pub fn is_simplified(&self) -> bool {
        self.simplified
    }

    /// Whether `ID`/`AUTHORITY` nodes are currently wanted
    pub fn output_ids(&self) -> bool {
        self.output_ids && self.id_disabled_depth == 0
    }

    /// Suppress IDs while emitting an enclosed subtree
    ///
    /// Only WKT2 hides the identifiers of components whose parent carries
    /// one; WKT1-GDAL traditionally writes AUTHORITY everywhere.
    pub fn push_disable_ids(&mut self) {
        if self.version.is_wkt2() {
            self.id_disabled_depth += 1;
        }
    }

    pub fn pop_disable_ids(&mut self) {
        if self.version.is_wkt2() {
            self.id_disabled_depth = self.id_disabled_depth.saturating_sub(1);
        }
    }

    fn before_child(&mut self) {
        if let Some(has_child) = self.open_nodes.last_mut() {
            if *has_child {
                self.buffer.push(',');
            }
            *has_child = true;
        }
    }

    pub fn start_node(&mut self, keyword: &str) {
        self.before_child();
        self.buffer.push_str(keyword);
        self.buffer.push('[');
        self.open_nodes.push(false);
    }

    pub fn end_node(&mut self) {
        self.open_nodes.pop();
        self.buffer.push(']');
    }

    pub fn add_quoted_string(&mut self, value: &str) {
        self.before_child();
        self.buffer.push('"');
        self.buffer.push_str(&value.replace('"', "\"\""));
        self.buffer.push('"');
    }

    pub fn add_number(&mut self, value: f64) {
        self.before_child();
        self.buffer.push_str(&format_number(value));
    }

    pub fn add_int(&mut self, value: i64) {
        self.before_child();
        self.buffer.push_str(&value.to_string());
    }

    /// A bare token such as a WKT2 axis direction
    pub fn add_keyword(&mut self, value: &str) {
        self.before_child();
        self.buffer.push_str(value);
    }

    pub fn push_axis_unit(&mut self, unit: Unit) {
        self.axis_units.push(unit);
    }

    pub fn pop_axis_unit(&mut self) {
        self.axis_units.pop();
    }

    pub fn current_axis_unit(&self) -> Option<&Unit> {
        self.axis_units.last()
    }

    /// TOWGS84 parameters waiting to be injected into the WKT1 DATUM node
    pub fn set_towgs84(&mut self, params: Vec<f64>) {
        self.towgs84 = Some(params);
    }

    pub fn towgs84(&self) -> Option<&[f64]> {
        self.towgs84.as_deref()
    }

    pub fn clear_towgs84(&mut self) {
        self.towgs84 = None;
    }

    /// Grid filename to emit as EXTENSION["PROJ4_GRIDS"] on the horizontal
    /// datum
    pub fn set_horizontal_grid_extension(&mut self, filename: String) {
        self.horizontal_grid_extension = Some(filename);
    }

    pub fn horizontal_grid_extension(&self) -> Option<&str> {
        self.horizontal_grid_extension.as_deref()
    }

    /// Grid filename to emit as EXTENSION["PROJ4_GRIDS"] on the vertical
    /// datum
    pub fn set_vertical_grid_extension(&mut self, filename: String) {
        self.vertical_grid_extension = Some(filename);
    }

    pub fn vertical_grid_extension(&self) -> Option<&str> {
        self.vertical_grid_extension.as_deref()
    }

    pub fn into_string(self) -> String {
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_formatting() {
        assert_eq!(format_number(6378137.0), "6378137");
        assert_eq!(format_number(298.257223563), "298.257223563");
        assert_eq!(format_number(0.0174532925199433), "0.0174532925199433");
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-183.0), "-183");
        // 15 significant digits, so float noise is rounded away
        assert_eq!(format_number(2.3372291699999998), "2.33722917");
        assert_eq!(format_number(0.015707963267949), "0.015707963267949");
        assert_eq!(
            format_number(4.84813681109536e-06),
            "0.00000484813681109536"
        );
    }

    #[test]
    fn test_node_building() {
        let mut f = WktFormatter::new(WktVersion::Wkt2_2018);
        f.start_node("UNIT");
        f.add_quoted_string("degree");
        f.add_number(0.0174532925199433);
        f.end_node();
        assert_eq!(f.into_string(), r#"UNIT["degree",0.0174532925199433]"#);
    }

    #[test]
    fn test_quote_escaping() {
        let mut f = WktFormatter::new(WktVersion::Wkt2_2018);
        f.start_node("REMARK");
        f.add_quoted_string(r#"he said "hi""#);
        f.end_node();
        assert_eq!(f.into_string(), r#"REMARK["he said ""hi"""]"#);
    }

    #[test]
    fn test_nested_commas() {
        let mut f = WktFormatter::new(WktVersion::Wkt2_2018);
        f.start_node("A");
        f.add_quoted_string("x");
        f.start_node("B");
        f.add_number(1.0);
        f.add_number(2.0);
        f.end_node();
        f.start_node("C");
        f.end_node();
        f.end_node();
        assert_eq!(f.into_string(), r#"A["x",B[1,2],C[]]"#);
    }
}
