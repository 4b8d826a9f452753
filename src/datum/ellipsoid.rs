//! Ellipsoid definitions
//!
//! An ellipsoid is stored in exactly one of three parameter forms: sphere
//! radius, semi-major axis + inverse flattening, or semi-major + semi-minor
//! axis. The missing quantity is always derivable from the stored pair.

use crate::common::{IdentifiedObject, Length, Properties, Scale};
use crate::errors::{GeodeticError, GeodeticResult};

/// Relative tolerance for ellipsoid equivalence comparisons
const EQUIVALENCE_TOLERANCE: f64 = 1e-8;

/// A biaxial reference ellipsoid
#[derive(Debug, Clone, PartialEq)]
pub struct Ellipsoid {
    pub base: IdentifiedObject,
    semi_major_axis: Length,
    inverse_flattening: Option<Scale>,
    semi_minor_axis: Option<Length>,
}

impl Ellipsoid {
    /// A sphere described by its radius
    pub fn create_sphere(properties: Properties, radius: Length) -> GeodeticResult<Self> {
        Self::validate_semi_major(&radius)?;
        Ok(Ellipsoid {
            base: properties.build_identified(),
            semi_major_axis: radius,
            inverse_flattening: None,
            semi_minor_axis: None,
        })
    }

    /// An ellipsoid described by semi-major axis and inverse flattening
    pub fn create_flattened_sphere(
        properties: Properties,
        semi_major_axis: Length,
        inverse_flattening: Scale,
    ) -> GeodeticResult<Self> {
        Self::validate_semi_major(&semi_major_axis)?;
        if inverse_flattening.value() < 0.0 {
            return Err(GeodeticError::InvariantViolation(format!(
                "inverse flattening must be >= 0, got {}",
                inverse_flattening.value()
            )));
        }
        Ok(Ellipsoid {
            base: properties.build_identified(),
            semi_major_axis,
            inverse_flattening: Some(inverse_flattening),
            semi_minor_axis: None,
        })
    }

    /// An ellipsoid described by its two axes
    pub fn create_two_axis(
        properties: Properties,
        semi_major_axis: Length,
        semi_minor_axis: Length,
    ) -> GeodeticResult<Self> {
        Self::validate_semi_major(&semi_major_axis)?;
        if semi_minor_axis.si_value() > semi_major_axis.si_value() {
            return Err(GeodeticError::InvariantViolation(format!(
                "semi-minor axis {} exceeds semi-major axis {}",
                semi_minor_axis.si_value(),
                semi_major_axis.si_value()
            )));
        }
        Ok(Ellipsoid {
            base: properties.build_identified(),
            semi_major_axis,
            inverse_flattening: None,
            semi_minor_axis: Some(semi_minor_axis),
        })
    }

    fn validate_semi_major(semi_major: &Length) -> GeodeticResult<()> {
        if semi_major.si_value() <= 0.0 {
            return Err(GeodeticError::InvariantViolation(format!(
                "semi-major axis must be > 0, got {}",
                semi_major.si_value()
            )));
        }
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.base.name
    }

    pub fn semi_major_axis(&self) -> &Length {
        &self.semi_major_axis
    }

    pub fn inverse_flattening(&self) -> Option<&Scale> {
        self.inverse_flattening.as_ref()
    }

    pub fn semi_minor_axis(&self) -> Option<&Length> {
        self.semi_minor_axis.as_ref()
    }

    /// Stored or derived inverse flattening; 0 for a sphere
    pub fn compute_inverse_flattening(&self) -> f64 {
        if let Some(rf) = &self.inverse_flattening {
            return rf.value();
        }
        if let Some(b) = &self.semi_minor_axis {
            let a = self.semi_major_axis.value();
            let b = b.value();
            return if a == b { 0.0 } else { a / (a - b) };
        }
        0.0
    }

    /// Stored or derived semi-minor axis, in the semi-major axis unit
    pub fn compute_semi_minor_axis(&self) -> Length {
        if let Some(b) = &self.semi_minor_axis {
            return b.clone();
        }
        if let Some(rf) = &self.inverse_flattening {
            if rf.value() != 0.0 {
                let b = (1.0 - 1.0 / rf.si_value()) * self.semi_major_axis.value();
                return Length::new(b, self.semi_major_axis.unit().clone())
                    .expect("semi-major unit is linear");
            }
        }
        self.semi_major_axis.clone()
    }

    /// True when the flattening is zero or both axes are equal
    pub fn is_sphere(&self) -> bool {
        if let Some(rf) = &self.inverse_flattening {
            return rf.value() == 0.0;
        }
        if let Some(b) = &self.semi_minor_axis {
            return self.semi_major_axis.si_value() == b.si_value();
        }
        true
    }

    /// Equivalence up to one part in 1e-8: semi-major axes must match and
    /// either flattening or semi-minor axis must match
    pub fn is_equivalent_to(&self, other: &Ellipsoid) -> bool {
        let a1 = self.semi_major_axis.si_value();
        let a2 = other.semi_major_axis.si_value();
        if (a1 - a2).abs() > a1.abs() * EQUIVALENCE_TOLERANCE {
            return false;
        }
        if self.is_sphere() && other.is_sphere() {
            return true;
        }
        let rf1 = self.compute_inverse_flattening();
        let rf2 = other.compute_inverse_flattening();
        if rf1 != 0.0 && (rf1 - rf2).abs() <= rf1.abs() * EQUIVALENCE_TOLERANCE {
            return true;
        }
        let b1 = self.compute_semi_minor_axis().si_value();
        let b2 = other.compute_semi_minor_axis().si_value();
        (b1 - b2).abs() <= b1.abs() * EQUIVALENCE_TOLERANCE
    }

    /// The WGS 84 ellipsoid, EPSG:7030
    pub fn wgs84() -> Ellipsoid {
        Ellipsoid::create_flattened_sphere(
            Properties::epsg("WGS 84", 7030),
            Length::metres(6378137.0),
            Scale::unity(298.257223563),
        )
        .expect("valid constant ellipsoid")
    }

    /// Clarke 1866, EPSG:7008 (the NAD27 ellipsoid)
    pub fn clarke_1866() -> Ellipsoid {
        Ellipsoid::create_two_axis(
            Properties::epsg("Clarke 1866", 7008),
            Length::metres(6378206.4),
            Length::metres(6356583.8),
        )
        .expect("valid constant ellipsoid")
    }

    /// GRS 1980, EPSG:7019 (the NAD83 ellipsoid)
    pub fn grs_1980() -> Ellipsoid {
        Ellipsoid::create_flattened_sphere(
            Properties::epsg("GRS 1980", 7019),
            Length::metres(6378137.0),
            Scale::unity(298.257222101),
        )
        .expect("valid constant ellipsoid")
    }

    /// Resolve a PROJ `+ellps=` keyword to a predefined ellipsoid
    pub fn from_proj_name(name: &str) -> Option<Ellipsoid> {
        match name {
            "WGS84" => Some(Ellipsoid::wgs84()),
            "GRS80" => Some(Ellipsoid::grs_1980()),
            "clrk66" => Some(Ellipsoid::clarke_1866()),
            "intl" => Some(
                Ellipsoid::create_flattened_sphere(
                    Properties::epsg("International 1924", 7022),
                    Length::metres(6378388.0),
                    Scale::unity(297.0),
                )
                .expect("valid constant ellipsoid"),
            ),
            "bessel" => Some(
                Ellipsoid::create_flattened_sphere(
                    Properties::epsg("Bessel 1841", 7004),
                    Length::metres(6377397.155),
                    Scale::unity(299.1528128),
                )
                .expect("valid constant ellipsoid"),
            ),
            "krass" => Some(
                Ellipsoid::create_flattened_sphere(
                    Properties::epsg("Krassowsky 1940", 7024),
                    Length::metres(6378245.0),
                    Scale::unity(298.3),
                )
                .expect("valid constant ellipsoid"),
            ),
            _ => None,
        }
    }

    /// The PROJ `+ellps=` keyword for this ellipsoid, when it is one of the
    /// well-known bodies
    pub fn proj_name(&self) -> Option<&'static str> {
        match self.base.epsg_code() {
            Some(7030) => Some("WGS84"),
            Some(7019) => Some("GRS80"),
            Some(7008) => Some("clrk66"),
            Some(7022) => Some("intl"),
            Some(7004) => Some("bessel"),
            Some(7024) => Some("krass"),
            _ => match self.name() {
                "WGS 84" => Some("WGS84"),
                "GRS 1980" => Some("GRS80"),
                "Clarke 1866" => Some("clrk66"),
                "International 1924" => Some("intl"),
                "Bessel 1841" => Some("bessel"),
                "Krassowsky 1940" => Some("krass"),
                _ => None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_semi_minor() {
        let e = Ellipsoid::wgs84();
        let b = e.compute_semi_minor_axis();
        assert!((b.value() - 6356752.31424518).abs() < 1e-8);
    }

    #[test]
    fn test_derived_inverse_flattening() {
        let e = Ellipsoid::clarke_1866();
        assert!((e.compute_inverse_flattening() - 294.978698).abs() < 1e-5);
    }

    #[test]
    fn test_round_trip_semi_minor() {
        // a -> 1/f -> b must land back on b within 1e-9 m
        let e = Ellipsoid::clarke_1866();
        let rf = e.compute_inverse_flattening();
        let rebuilt = Ellipsoid::create_flattened_sphere(
            Properties::named("check"),
            e.semi_major_axis().clone(),
            Scale::unity(rf),
        )
        .unwrap();
        let b1 = e.compute_semi_minor_axis().si_value();
        let b2 = rebuilt.compute_semi_minor_axis().si_value();
        assert!((b1 - b2).abs() < 1e-9);
    }

    #[test]
    fn test_sphere_detection() {
        let s = Ellipsoid::create_sphere(Properties::named("sphere"), Length::metres(6371000.0))
            .unwrap();
        assert!(s.is_sphere());
        assert!(!Ellipsoid::wgs84().is_sphere());

        let zero_flattening = Ellipsoid::create_flattened_sphere(
            Properties::named("flat sphere"),
            Length::metres(6371000.0),
            Scale::unity(0.0),
        )
        .unwrap();
        assert!(zero_flattening.is_sphere());
        assert!(s.is_equivalent_to(&zero_flattening));
    }

    #[test]
    fn test_equivalence() {
        let by_axes = Ellipsoid::create_two_axis(
            Properties::named("WGS 84 by axes"),
            Length::metres(6378137.0),
            Length::metres(6356752.31424518),
        )
        .unwrap();
        assert!(Ellipsoid::wgs84().is_equivalent_to(&by_axes));
        assert!(!Ellipsoid::wgs84().is_equivalent_to(&Ellipsoid::grs_1980()));
    }

    #[test]
    fn test_invariants_enforced() {
        assert!(Ellipsoid::create_sphere(Properties::named("bad"), Length::metres(0.0)).is_err());
        assert!(Ellipsoid::create_two_axis(
            Properties::named("bad"),
            Length::metres(6356752.0),
            Length::metres(6378137.0)
        )
        .is_err());
        assert!(Ellipsoid::create_flattened_sphere(
            Properties::named("bad"),
            Length::metres(6378137.0),
            Scale::unity(-1.0)
        )
        .is_err());
    }
}
