//! Coordinate system variants with fixed axis arities

use crate::common::unit::{Unit, UnitKind};
use crate::cs::axis::{AxisDirection, CoordinateSystemAxis};
use crate::errors::{GeodeticError, GeodeticResult};

/// Flavour of a temporal coordinate system
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemporalCsKind {
    DateTime,
    Count,
    Measure,
}

/// A coordinate system: an ordered axis list with a variant-specific arity
#[derive(Debug, Clone, PartialEq)]
pub enum CoordinateSystem {
    Ellipsoidal(Vec<CoordinateSystemAxis>),
    Cartesian(Vec<CoordinateSystemAxis>),
    Spherical(Vec<CoordinateSystemAxis>),
    Vertical(Vec<CoordinateSystemAxis>),
    Temporal(TemporalCsKind, Vec<CoordinateSystemAxis>),
    Parametric(Vec<CoordinateSystemAxis>),
}

impl CoordinateSystem {
    /// Axes in declaration order
    pub fn axes(&self) -> &[CoordinateSystemAxis] {
        match self {
            CoordinateSystem::Ellipsoidal(axes)
            | CoordinateSystem::Cartesian(axes)
            | CoordinateSystem::Spherical(axes)
            | CoordinateSystem::Vertical(axes)
            | CoordinateSystem::Temporal(_, axes)
            | CoordinateSystem::Parametric(axes) => axes,
        }
    }

    /// WKT2 subtype token: `ellipsoidal`, `Cartesian`, ...
    pub fn wkt2_type(&self) -> &'static str {
        match self {
            CoordinateSystem::Ellipsoidal(_) => "ellipsoidal",
            CoordinateSystem::Cartesian(_) => "Cartesian",
            CoordinateSystem::Spherical(_) => "spherical",
            CoordinateSystem::Vertical(_) => "vertical",
            CoordinateSystem::Temporal(TemporalCsKind::DateTime, _) => "TemporalDateTime",
            CoordinateSystem::Temporal(TemporalCsKind::Count, _) => "TemporalCount",
            CoordinateSystem::Temporal(TemporalCsKind::Measure, _) => "TemporalMeasure",
            CoordinateSystem::Parametric(_) => "parametric",
        }
    }

    fn check_arity(axes: &[CoordinateSystemAxis], allowed: &[usize], what: &str) -> GeodeticResult<()> {
        if !allowed.contains(&axes.len()) {
            return Err(GeodeticError::InvariantViolation(format!(
                "{} coordinate system requires {:?} axes, got {}",
                what,
                allowed,
                axes.len()
            )));
        }
        Ok(())
    }

    fn check_unit_kinds(
        axes: &[CoordinateSystemAxis],
        allowed: &[UnitKind],
        what: &str,
    ) -> GeodeticResult<()> {
        for axis in axes {
            if !allowed.contains(&axis.unit.kind()) {
                return Err(GeodeticError::InvalidUnitKind(format!(
                    "axis '{}' of a {} coordinate system has unit kind {:?}",
                    axis.name(),
                    what,
                    axis.unit.kind()
                )));
            }
        }
        Ok(())
    }

    /// An ellipsoidal CS with 2 or 3 axes (the third, if any, linear height)
    pub fn ellipsoidal(axes: Vec<CoordinateSystemAxis>) -> GeodeticResult<Self> {
        Self::check_arity(&axes, &[2, 3], "ellipsoidal")?;
        Self::check_unit_kinds(&axes[..2], &[UnitKind::Angular, UnitKind::Unknown], "ellipsoidal")?;
        if axes.len() == 3 {
            Self::check_unit_kinds(&axes[2..], &[UnitKind::Linear, UnitKind::Unknown], "ellipsoidal")?;
        }
        Ok(CoordinateSystem::Ellipsoidal(axes))
    }

    /// A Cartesian CS with 2 or 3 axes
    pub fn cartesian(axes: Vec<CoordinateSystemAxis>) -> GeodeticResult<Self> {
        Self::check_arity(&axes, &[2, 3], "Cartesian")?;
        Self::check_unit_kinds(&axes, &[UnitKind::Linear, UnitKind::Unknown], "Cartesian")?;
        Ok(CoordinateSystem::Cartesian(axes))
    }

    /// A spherical CS, always 3 axes
    pub fn spherical(axes: Vec<CoordinateSystemAxis>) -> GeodeticResult<Self> {
        Self::check_arity(&axes, &[3], "spherical")?;
        Ok(CoordinateSystem::Spherical(axes))
    }

    /// A vertical CS, single axis
    pub fn vertical(axes: Vec<CoordinateSystemAxis>) -> GeodeticResult<Self> {
        Self::check_arity(&axes, &[1], "vertical")?;
        Self::check_unit_kinds(&axes, &[UnitKind::Linear, UnitKind::Unknown], "vertical")?;
        Ok(CoordinateSystem::Vertical(axes))
    }

    /// A temporal CS, single axis
    pub fn temporal(kind: TemporalCsKind, axes: Vec<CoordinateSystemAxis>) -> GeodeticResult<Self> {
        Self::check_arity(&axes, &[1], "temporal")?;
        Ok(CoordinateSystem::Temporal(kind, axes))
    }

    /// A parametric CS, single axis
    pub fn parametric(axes: Vec<CoordinateSystemAxis>) -> GeodeticResult<Self> {
        Self::check_arity(&axes, &[1], "parametric")?;
        Ok(CoordinateSystem::Parametric(axes))
    }

    /// Generic factory dispatching on the WKT2 subtype token
    pub fn create_with_axes(cs_type: &str, axes: Vec<CoordinateSystemAxis>) -> GeodeticResult<Self> {
        match cs_type {
            "ellipsoidal" => Self::ellipsoidal(axes),
            "Cartesian" | "cartesian" => Self::cartesian(axes),
            "spherical" => Self::spherical(axes),
            "vertical" => Self::vertical(axes),
            "temporal" | "TemporalDateTime" => Self::temporal(TemporalCsKind::DateTime, axes),
            "TemporalCount" => Self::temporal(TemporalCsKind::Count, axes),
            "TemporalMeasure" => Self::temporal(TemporalCsKind::Measure, axes),
            "parametric" => Self::parametric(axes),
            other => Err(GeodeticError::InvalidValueType(format!(
                "unrecognized coordinate system type '{}'",
                other
            ))),
        }
    }

    /// Latitude/longitude ellipsoidal CS in the given angular unit
    pub fn create_latitude_longitude(unit: &Unit) -> GeodeticResult<Self> {
        Self::ellipsoidal(vec![
            CoordinateSystemAxis::new("Latitude", "lat", AxisDirection::North, unit.clone()),
            CoordinateSystemAxis::new("Longitude", "lon", AxisDirection::East, unit.clone()),
        ])
    }

    /// Longitude/latitude ellipsoidal CS in the given angular unit
    pub fn create_longitude_latitude(unit: &Unit) -> GeodeticResult<Self> {
        Self::ellipsoidal(vec![
            CoordinateSystemAxis::new("Longitude", "lon", AxisDirection::East, unit.clone()),
            CoordinateSystemAxis::new("Latitude", "lat", AxisDirection::North, unit.clone()),
        ])
    }

    /// Easting/northing Cartesian CS in the given linear unit
    pub fn create_east_north(unit: &Unit) -> GeodeticResult<Self> {
        Self::cartesian(vec![
            CoordinateSystemAxis::new("Easting", "E", AxisDirection::East, unit.clone()),
            CoordinateSystemAxis::new("Northing", "N", AxisDirection::North, unit.clone()),
        ])
    }

    /// Geocentric X/Y/Z Cartesian CS in the given linear unit
    pub fn create_geocentric(unit: &Unit) -> GeodeticResult<Self> {
        Self::cartesian(vec![
            CoordinateSystemAxis::new("Geocentric X", "X", AxisDirection::GeocentricX, unit.clone()),
            CoordinateSystemAxis::new("Geocentric Y", "Y", AxisDirection::GeocentricY, unit.clone()),
            CoordinateSystemAxis::new("Geocentric Z", "Z", AxisDirection::GeocentricZ, unit.clone()),
        ])
    }

    /// Gravity-related height vertical CS in the given linear unit
    pub fn create_gravity_related_height(unit: &Unit) -> GeodeticResult<Self> {
        Self::vertical(vec![CoordinateSystemAxis::new(
            "Gravity-related height",
            "H",
            AxisDirection::Up,
            unit.clone(),
        )])
    }

    /// True when the first two axes are (east, north) in that order
    pub fn is_east_north_order(&self) -> bool {
        let axes = self.axes();
        axes.len() >= 2
            && axes[0].direction == AxisDirection::East
            && axes[1].direction == AxisDirection::North
    }

    /// The shared axis unit, when all axes agree
    pub fn common_unit(&self) -> Option<&Unit> {
        let axes = self.axes();
        let first = &axes.first()?.unit;
        if axes.iter().all(|a| &a.unit == first) {
            Some(first)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::unit::{DEGREE, METRE};

    #[test]
    fn test_arity_enforced() {
        assert!(CoordinateSystem::spherical(vec![CoordinateSystemAxis::new(
            "r",
            "r",
            AxisDirection::Up,
            METRE.clone()
        )])
        .is_err());
        assert!(CoordinateSystem::vertical(vec![]).is_err());
    }

    #[test]
    fn test_unit_kind_enforced() {
        // angular axes in a Cartesian CS must be rejected
        let axes = vec![
            CoordinateSystemAxis::new("Easting", "E", AxisDirection::East, DEGREE.clone()),
            CoordinateSystemAxis::new("Northing", "N", AxisDirection::North, DEGREE.clone()),
        ];
        assert!(CoordinateSystem::cartesian(axes).is_err());
    }

    #[test]
    fn test_factories() {
        let cs = CoordinateSystem::create_latitude_longitude(&DEGREE).unwrap();
        assert_eq!(cs.axes().len(), 2);
        assert_eq!(cs.axes()[0].direction, AxisDirection::North);
        assert!(!cs.is_east_north_order());

        let cs = CoordinateSystem::create_east_north(&METRE).unwrap();
        assert!(cs.is_east_north_order());

        let cs = CoordinateSystem::create_geocentric(&METRE).unwrap();
        assert_eq!(cs.axes().len(), 3);
        assert_eq!(cs.axes()[2].direction, AxisDirection::GeocentricZ);
    }

    #[test]
    fn test_common_unit() {
        let cs = CoordinateSystem::create_latitude_longitude(&DEGREE).unwrap();
        assert_eq!(cs.common_unit(), Some(&*DEGREE));
    }
}
