//! Coordinate system axes and their directions

use crate::common::{Angle, IdentifiedObject, Unit};

/// Direction of an axis, a closed set with WKT2 spellings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisDirection {
    North,
    South,
    East,
    West,
    Up,
    Down,
    GeocentricX,
    GeocentricY,
    GeocentricZ,
    Future,
    Past,
    Other,
    Unspecified,
}

impl AxisDirection {
    /// The lower-case WKT2 token for this direction
    pub fn as_wkt2_str(&self) -> &'static str {
        match self {
            AxisDirection::North => "north",
            AxisDirection::South => "south",
            AxisDirection::East => "east",
            AxisDirection::West => "west",
            AxisDirection::Up => "up",
            AxisDirection::Down => "down",
            AxisDirection::GeocentricX => "geocentricX",
            AxisDirection::GeocentricY => "geocentricY",
            AxisDirection::GeocentricZ => "geocentricZ",
            AxisDirection::Future => "future",
            AxisDirection::Past => "past",
            AxisDirection::Other => "other",
            AxisDirection::Unspecified => "unspecified",
        }
    }

    /// The restricted upper-case WKT1 token set
    ///
    /// WKT1 only knows EAST/WEST/NORTH/SOUTH/UP/DOWN/OTHER; geocentric Z is
    /// conventionally written NORTH and everything else falls back to OTHER.
    pub fn as_wkt1_str(&self) -> &'static str {
        match self {
            AxisDirection::North => "NORTH",
            AxisDirection::South => "SOUTH",
            AxisDirection::East => "EAST",
            AxisDirection::West => "WEST",
            AxisDirection::Up => "UP",
            AxisDirection::Down => "DOWN",
            AxisDirection::GeocentricZ => "NORTH",
            _ => "OTHER",
        }
    }

    /// Parse either a WKT2 or WKT1 direction token
    pub fn parse(token: &str) -> Option<AxisDirection> {
        match token {
            "north" | "NORTH" => Some(AxisDirection::North),
            "south" | "SOUTH" => Some(AxisDirection::South),
            "east" | "EAST" => Some(AxisDirection::East),
            "west" | "WEST" => Some(AxisDirection::West),
            "up" | "UP" => Some(AxisDirection::Up),
            "down" | "DOWN" => Some(AxisDirection::Down),
            "geocentricX" => Some(AxisDirection::GeocentricX),
            "geocentricY" => Some(AxisDirection::GeocentricY),
            "geocentricZ" => Some(AxisDirection::GeocentricZ),
            "future" => Some(AxisDirection::Future),
            "past" => Some(AxisDirection::Past),
            "other" | "OTHER" => Some(AxisDirection::Other),
            "unspecified" => Some(AxisDirection::Unspecified),
            _ => None,
        }
    }

    /// Single-letter PROJ axis alphabet entry (`+axis=`)
    pub fn proj_letter(&self) -> Option<char> {
        match self {
            AxisDirection::East => Some('e'),
            AxisDirection::West => Some('w'),
            AxisDirection::North => Some('n'),
            AxisDirection::South => Some('s'),
            AxisDirection::Up => Some('u'),
            AxisDirection::Down => Some('d'),
            _ => None,
        }
    }

    pub fn from_proj_letter(letter: char) -> Option<AxisDirection> {
        match letter {
            'e' => Some(AxisDirection::East),
            'w' => Some(AxisDirection::West),
            'n' => Some(AxisDirection::North),
            's' => Some(AxisDirection::South),
            'u' => Some(AxisDirection::Up),
            'd' => Some(AxisDirection::Down),
            _ => None,
        }
    }
}

/// A single axis of a coordinate system
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateSystemAxis {
    pub base: IdentifiedObject,
    pub abbreviation: String,
    pub direction: AxisDirection,
    pub unit: Unit,
    pub minimum: Option<f64>,
    pub maximum: Option<f64>,
    /// Reference meridian for polar axes
    pub meridian: Option<Angle>,
}

impl CoordinateSystemAxis {
    pub fn new(name: &str, abbreviation: &str, direction: AxisDirection, unit: Unit) -> Self {
        CoordinateSystemAxis {
            base: IdentifiedObject::named(name),
            abbreviation: abbreviation.to_string(),
            direction,
            unit,
            minimum: None,
            maximum: None,
            meridian: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.base.name
    }

    /// Axis name with the first letter uppercased, the normalization applied
    /// to names coming from WKT1 documents
    pub fn normalized_name(name: &str) -> String {
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::unit::DEGREE;

    #[test]
    fn test_wkt1_direction_restriction() {
        assert_eq!(AxisDirection::GeocentricZ.as_wkt1_str(), "NORTH");
        assert_eq!(AxisDirection::GeocentricX.as_wkt1_str(), "OTHER");
        assert_eq!(AxisDirection::East.as_wkt1_str(), "EAST");
    }

    #[test]
    fn test_direction_round_trip() {
        for dir in [
            AxisDirection::North,
            AxisDirection::GeocentricX,
            AxisDirection::Future,
            AxisDirection::Unspecified,
        ] {
            assert_eq!(AxisDirection::parse(dir.as_wkt2_str()), Some(dir));
        }
    }

    #[test]
    fn test_name_normalization() {
        assert_eq!(CoordinateSystemAxis::normalized_name("longitude"), "Longitude");
        assert_eq!(CoordinateSystemAxis::normalized_name("Latitude"), "Latitude");
    }

    #[test]
    fn test_axis_construction() {
        let axis = CoordinateSystemAxis::new("Latitude", "lat", AxisDirection::North, DEGREE.clone());
        assert_eq!(axis.name(), "Latitude");
        assert!(axis.meridian.is_none());
    }
}
