//! Units of measure and the interned unit registry
//!
//! Units carry a canonical name, a multiplicative conversion factor to the
//! SI base unit of their kind, and an optional authority code. Equality is
//! by canonical name, which is what WKT round-tripping relies on.

use lazy_static::lazy_static;

/// The kind of quantity a unit measures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitKind {
    Linear,
    Angular,
    Scale,
    Time,
    Parametric,
    None,
    Unknown,
}

/// A unit of measure
#[derive(Debug, Clone)]
pub struct Unit {
    name: String,
    to_si: f64,
    kind: UnitKind,
    codespace: Option<String>,
    code: Option<String>,
}

impl Unit {
    /// Create a unit without an authority code
    pub fn new(name: &str, to_si: f64, kind: UnitKind) -> Self {
        Unit {
            name: name.to_string(),
            to_si,
            kind,
            codespace: None,
            code: None,
        }
    }

    /// Create a unit carrying an authority code
    pub fn with_authority(name: &str, to_si: f64, kind: UnitKind, codespace: &str, code: &str) -> Self {
        Unit {
            name: name.to_string(),
            to_si,
            kind,
            codespace: Some(codespace.to_string()),
            code: Some(code.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Multiplicative factor converting a value in this unit to SI
    pub fn conversion_to_si(&self) -> f64 {
        self.to_si
    }

    pub fn kind(&self) -> UnitKind {
        self.kind
    }

    pub fn codespace(&self) -> Option<&str> {
        self.codespace.as_deref()
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// The keyword used for this unit in PROJ strings, when one exists
    pub fn proj_name(&self) -> Option<&'static str> {
        match self.name.as_str() {
            "metre" | "meter" => Some("m"),
            "degree" => Some("deg"),
            "grad" => Some("grad"),
            "radian" => Some("rad"),
            "foot" => Some("ft"),
            "US survey foot" => Some("us-ft"),
            "kilometre" => Some("km"),
            _ => None,
        }
    }

    /// Resolve a PROJ unit keyword (as in `+units=`) to a predefined unit
    pub fn from_proj_name(name: &str) -> Option<Unit> {
        match name {
            "m" => Some(METRE.clone()),
            "deg" => Some(DEGREE.clone()),
            "grad" => Some(GRAD.clone()),
            "rad" => Some(RADIAN.clone()),
            "ft" => Some(FOOT.clone()),
            "us-ft" => Some(US_SURVEY_FOOT.clone()),
            "km" => Some(Unit::with_authority("kilometre", 1000.0, UnitKind::Linear, "EPSG", "9036")),
            _ => None,
        }
    }

    /// Resolve a WKT unit name to a predefined unit, tolerating spelling
    /// variants seen in the wild
    pub fn from_wkt_name(name: &str, kind: UnitKind) -> Option<Unit> {
        match (name, kind) {
            ("metre", UnitKind::Linear)
            | ("meter", UnitKind::Linear)
            | ("Meter", UnitKind::Linear) => Some(METRE.clone()),
            ("foot", UnitKind::Linear) | ("Foot", UnitKind::Linear) => Some(FOOT.clone()),
            ("US survey foot", UnitKind::Linear)
            | ("Foot_US", UnitKind::Linear)
            | ("US Foot", UnitKind::Linear) => Some(US_SURVEY_FOOT.clone()),
            ("degree", UnitKind::Angular) | ("Degree", UnitKind::Angular) => Some(DEGREE.clone()),
            ("grad", UnitKind::Angular) | ("Grad", UnitKind::Angular) => Some(GRAD.clone()),
            ("radian", UnitKind::Angular) => Some(RADIAN.clone()),
            ("arc-second", UnitKind::Angular) | ("arcsecond", UnitKind::Angular) => {
                Some(ARC_SECOND.clone())
            }
            ("unity", UnitKind::Scale) => Some(UNITY.clone()),
            ("parts per million", UnitKind::Scale) => Some(PARTS_PER_MILLION.clone()),
            _ => None,
        }
    }
}

/// Equality is by canonical name only
impl PartialEq for Unit {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

lazy_static! {
    pub static ref METRE: Unit =
        Unit::with_authority("metre", 1.0, UnitKind::Linear, "EPSG", "9001");
    pub static ref FOOT: Unit =
        Unit::with_authority("foot", 0.3048, UnitKind::Linear, "EPSG", "9002");
    pub static ref US_SURVEY_FOOT: Unit = Unit::with_authority(
        "US survey foot",
        0.304800609601219,
        UnitKind::Linear,
        "EPSG",
        "9003"
    );
    pub static ref DEGREE: Unit = Unit::with_authority(
        "degree",
        0.0174532925199433,
        UnitKind::Angular,
        "EPSG",
        "9122"
    );
    pub static ref GRAD: Unit = Unit::with_authority(
        "grad",
        0.015707963267949,
        UnitKind::Angular,
        "EPSG",
        "9105"
    );
    pub static ref ARC_SECOND: Unit = Unit::with_authority(
        "arc-second",
        4.84813681109536e-06,
        UnitKind::Angular,
        "EPSG",
        "9104"
    );
    pub static ref RADIAN: Unit =
        Unit::with_authority("radian", 1.0, UnitKind::Angular, "EPSG", "9101");
    pub static ref UNITY: Unit =
        Unit::with_authority("unity", 1.0, UnitKind::Scale, "EPSG", "9201");
    pub static ref PARTS_PER_MILLION: Unit = Unit::with_authority(
        "parts per million",
        1e-06,
        UnitKind::Scale,
        "EPSG",
        "9202"
    );
    pub static ref SECOND: Unit =
        Unit::with_authority("second", 1.0, UnitKind::Time, "EPSG", "1040");
    pub static ref YEAR: Unit =
        Unit::with_authority("year", 31556925.445, UnitKind::Time, "EPSG", "1029");
    pub static ref NONE: Unit = Unit::new("", 1.0, UnitKind::None);
    pub static ref UNKNOWN: Unit = Unit::new("unknown", 1.0, UnitKind::Unknown);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_by_name() {
        let a = METRE.clone();
        let b = Unit::new("metre", 1.0, UnitKind::Linear);
        assert_eq!(a, b);
        assert_ne!(a, FOOT.clone());
    }

    #[test]
    fn test_degree_factor() {
        assert!((DEGREE.conversion_to_si() - 0.0174532925199433).abs() < 1e-18);
    }

    #[test]
    fn test_proj_names() {
        assert_eq!(METRE.proj_name(), Some("m"));
        assert_eq!(DEGREE.proj_name(), Some("deg"));
        assert_eq!(Unit::from_proj_name("us-ft").unwrap().name(), "US survey foot");
    }

    #[test]
    fn test_wkt_name_variants() {
        assert_eq!(
            Unit::from_wkt_name("Foot_US", UnitKind::Linear).unwrap(),
            US_SURVEY_FOOT.clone()
        );
        assert_eq!(
            Unit::from_wkt_name("meter", UnitKind::Linear).unwrap(),
            METRE.clone()
        );
    }
}
