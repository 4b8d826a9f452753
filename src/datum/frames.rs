//! Reference frames, datum variants and datum ensembles

use crate::common::{Measure, ObjectUsage, Properties};
use crate::datum::ellipsoid::Ellipsoid;
use crate::datum::prime_meridian::PrimeMeridian;
use crate::errors::{GeodeticError, GeodeticResult};

/// A geodetic reference frame: ellipsoid + prime meridian + optional anchor
///
/// A frame with a `frame_reference_epoch` is a dynamic reference frame.
#[derive(Debug, Clone, PartialEq)]
pub struct GeodeticReferenceFrame {
    pub usage: ObjectUsage,
    pub ellipsoid: Ellipsoid,
    pub prime_meridian: PrimeMeridian,
    pub anchor: Option<String>,
    pub frame_reference_epoch: Option<Measure>,
}

impl GeodeticReferenceFrame {
    pub fn create(
        properties: Properties,
        ellipsoid: Ellipsoid,
        anchor: Option<String>,
        prime_meridian: PrimeMeridian,
    ) -> GeodeticResult<Self> {
        Ok(GeodeticReferenceFrame {
            usage: properties.build_usage(),
            ellipsoid,
            prime_meridian,
            anchor,
            frame_reference_epoch: None,
        })
    }

    /// A dynamic frame additionally carries its frame reference epoch
    pub fn create_dynamic(
        properties: Properties,
        ellipsoid: Ellipsoid,
        anchor: Option<String>,
        prime_meridian: PrimeMeridian,
        frame_reference_epoch: Measure,
    ) -> GeodeticResult<Self> {
        let mut frame = Self::create(properties, ellipsoid, anchor, prime_meridian)?;
        frame.frame_reference_epoch = Some(frame_reference_epoch);
        Ok(frame)
    }

    pub fn name(&self) -> &str {
        self.usage.name()
    }

    pub fn is_dynamic(&self) -> bool {
        self.frame_reference_epoch.is_some()
    }

    /// Equivalence: ellipsoid, prime meridian and anchor all equivalent
    pub fn is_equivalent_to(&self, other: &GeodeticReferenceFrame) -> bool {
        self.ellipsoid.is_equivalent_to(&other.ellipsoid)
            && self.prime_meridian.is_equivalent_to(&other.prime_meridian)
            && self.anchor == other.anchor
    }

    /// World Geodetic System 1984, EPSG:6326
    pub fn wgs84() -> GeodeticReferenceFrame {
        GeodeticReferenceFrame::create(
            Properties::epsg("World Geodetic System 1984", 6326),
            Ellipsoid::wgs84(),
            None,
            PrimeMeridian::greenwich(),
        )
        .expect("valid constant datum")
    }

    /// North American Datum 1927, EPSG:6267
    pub fn nad27() -> GeodeticReferenceFrame {
        GeodeticReferenceFrame::create(
            Properties::epsg("North American Datum 1927", 6267),
            Ellipsoid::clarke_1866(),
            None,
            PrimeMeridian::greenwich(),
        )
        .expect("valid constant datum")
    }

    /// North American Datum 1983, EPSG:6269
    pub fn nad83() -> GeodeticReferenceFrame {
        GeodeticReferenceFrame::create(
            Properties::epsg("North American Datum 1983", 6269),
            Ellipsoid::grs_1980(),
            None,
            PrimeMeridian::greenwich(),
        )
        .expect("valid constant datum")
    }

    /// The PROJ `+datum=` shorthand for the three datums PROJ knows
    pub fn proj_datum_name(&self) -> Option<&'static str> {
        match self.usage.base.epsg_code() {
            Some(6326) => Some("WGS84"),
            Some(6267) => Some("NAD27"),
            Some(6269) => Some("NAD83"),
            _ => None,
        }
    }
}

/// A vertical reference frame
#[derive(Debug, Clone, PartialEq)]
pub struct VerticalReferenceFrame {
    pub usage: ObjectUsage,
    pub anchor: Option<String>,
    pub realization_method: Option<String>,
}

impl VerticalReferenceFrame {
    pub fn create(
        properties: Properties,
        anchor: Option<String>,
        realization_method: Option<String>,
    ) -> GeodeticResult<Self> {
        Ok(VerticalReferenceFrame {
            usage: properties.build_usage(),
            anchor,
            realization_method,
        })
    }

    pub fn name(&self) -> &str {
        self.usage.name()
    }
}

/// A temporal datum: calendar plus origin instant
#[derive(Debug, Clone, PartialEq)]
pub struct TemporalDatum {
    pub usage: ObjectUsage,
    pub calendar: String,
    pub temporal_origin: String,
}

impl TemporalDatum {
    /// The proleptic Gregorian calendar identifier used by WKT2
    pub const CALENDAR_PROLEPTIC_GREGORIAN: &'static str = "proleptic Gregorian";

    pub fn create(
        properties: Properties,
        calendar: &str,
        temporal_origin: &str,
    ) -> GeodeticResult<Self> {
        Ok(TemporalDatum {
            usage: properties.build_usage(),
            calendar: calendar.to_string(),
            temporal_origin: temporal_origin.to_string(),
        })
    }
}

/// An engineering datum
#[derive(Debug, Clone, PartialEq)]
pub struct EngineeringDatum {
    pub usage: ObjectUsage,
    pub anchor: Option<String>,
}

impl EngineeringDatum {
    pub fn create(properties: Properties, anchor: Option<String>) -> GeodeticResult<Self> {
        Ok(EngineeringDatum {
            usage: properties.build_usage(),
            anchor,
        })
    }
}

/// A parametric datum
#[derive(Debug, Clone, PartialEq)]
pub struct ParametricDatum {
    pub usage: ObjectUsage,
    pub anchor: Option<String>,
}

impl ParametricDatum {
    pub fn create(properties: Properties, anchor: Option<String>) -> GeodeticResult<Self> {
        Ok(ParametricDatum {
            usage: properties.build_usage(),
            anchor,
        })
    }
}

/// Closed set of datum variants
#[derive(Debug, Clone, PartialEq)]
pub enum Datum {
    Geodetic(GeodeticReferenceFrame),
    Vertical(VerticalReferenceFrame),
    Temporal(TemporalDatum),
    Engineering(EngineeringDatum),
    Parametric(ParametricDatum),
}

impl Datum {
    pub fn name(&self) -> &str {
        match self {
            Datum::Geodetic(d) => d.name(),
            Datum::Vertical(d) => d.name(),
            Datum::Temporal(d) => d.usage.name(),
            Datum::Engineering(d) => d.usage.name(),
            Datum::Parametric(d) => d.usage.name(),
        }
    }

    fn kind_tag(&self) -> u8 {
        match self {
            Datum::Geodetic(_) => 0,
            Datum::Vertical(_) => 1,
            Datum::Temporal(_) => 2,
            Datum::Engineering(_) => 3,
            Datum::Parametric(_) => 4,
        }
    }
}

/// A non-empty list of same-kind datums with a positional accuracy
#[derive(Debug, Clone, PartialEq)]
pub struct DatumEnsemble {
    pub usage: ObjectUsage,
    pub members: Vec<Datum>,
    /// Ensemble positional accuracy in metres
    pub accuracy_metres: f64,
}

impl DatumEnsemble {
    pub fn create(
        properties: Properties,
        members: Vec<Datum>,
        accuracy_metres: f64,
    ) -> GeodeticResult<Self> {
        if members.is_empty() {
            return Err(GeodeticError::InvariantViolation(
                "datum ensemble requires at least one member".to_string(),
            ));
        }
        let first_kind = members[0].kind_tag();
        if members.iter().any(|m| m.kind_tag() != first_kind) {
            return Err(GeodeticError::InvariantViolation(
                "datum ensemble members must all be of the same kind".to_string(),
            ));
        }
        Ok(DatumEnsemble {
            usage: properties.build_usage(),
            members,
            accuracy_metres,
        })
    }

    pub fn name(&self) -> &str {
        self.usage.name()
    }

    /// The first member viewed as a geodetic frame, when the ensemble is
    /// geodetic
    pub fn representative_geodetic_frame(&self) -> Option<&GeodeticReferenceFrame> {
        match self.members.first() {
            Some(Datum::Geodetic(frame)) => Some(frame),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_datum_equivalence() {
        assert!(GeodeticReferenceFrame::wgs84()
            .is_equivalent_to(&GeodeticReferenceFrame::wgs84()));
        assert!(!GeodeticReferenceFrame::wgs84()
            .is_equivalent_to(&GeodeticReferenceFrame::nad27()));
    }

    #[test]
    fn test_proj_datum_shorthand() {
        assert_eq!(GeodeticReferenceFrame::wgs84().proj_datum_name(), Some("WGS84"));
        assert_eq!(GeodeticReferenceFrame::nad27().proj_datum_name(), Some("NAD27"));
        assert_eq!(GeodeticReferenceFrame::nad83().proj_datum_name(), Some("NAD83"));
    }

    #[test]
    fn test_ensemble_invariants() {
        assert!(DatumEnsemble::create(Properties::named("empty"), vec![], 2.0).is_err());

        let mixed = vec![
            Datum::Geodetic(GeodeticReferenceFrame::wgs84()),
            Datum::Vertical(
                VerticalReferenceFrame::create(Properties::named("v"), None, None).unwrap(),
            ),
        ];
        assert!(DatumEnsemble::create(Properties::named("mixed"), mixed, 2.0).is_err());

        let ok = DatumEnsemble::create(
            Properties::epsg("World Geodetic System 1984 ensemble", 6326),
            vec![Datum::Geodetic(GeodeticReferenceFrame::wgs84())],
            2.0,
        )
        .unwrap();
        assert!(ok.representative_geodetic_frame().is_some());
    }

    #[test]
    fn test_dynamic_frame() {
        use crate::common::unit::YEAR;
        let frame = GeodeticReferenceFrame::create_dynamic(
            Properties::named("ITRF2014"),
            Ellipsoid::grs_1980(),
            None,
            PrimeMeridian::greenwich(),
            Measure::new(2010.0, YEAR.clone()),
        )
        .unwrap();
        assert!(frame.is_dynamic());
        assert!(!GeodeticReferenceFrame::wgs84().is_dynamic());
    }
}
