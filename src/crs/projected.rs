//! Projected coordinate reference systems
//!
//! A projected CRS owns its deriving conversion, whose target logically is
//! the projected CRS itself. The back-reference is a weak pointer bound by
//! the factory after the shared handle exists.

use crate::common::{ObjectUsage, Properties};
use crate::crs::Crs;
use crate::cs::CoordinateSystem;
use crate::errors::{GeodeticError, GeodeticResult};
use crate::operation::Conversion;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedCrs {
    pub usage: ObjectUsage,
    pub base_crs: Arc<Crs>,
    pub(crate) conversion: Conversion,
    pub coordinate_system: CoordinateSystem,
    /// Remembered BoundCRS used to re-emit TOWGS84/nadgrids on export
    pub canonical_bound_crs: Option<Arc<Crs>>,
}

impl ProjectedCrs {
    /// Build the CRS and bind the conversion's source and target links
    pub fn create(
        properties: Properties,
        base_crs: Arc<Crs>,
        mut conversion: Conversion,
        coordinate_system: CoordinateSystem,
    ) -> GeodeticResult<Arc<Crs>> {
        if !matches!(&*base_crs, Crs::Geographic(_) | Crs::Geodetic(_)) {
            return Err(GeodeticError::InvariantViolation(
                "the base of a projected CRS must be geographic or geodetic".to_string(),
            ));
        }
        if !matches!(&coordinate_system, CoordinateSystem::Cartesian(_)) {
            return Err(GeodeticError::InvariantViolation(
                "a projected CRS requires a Cartesian coordinate system".to_string(),
            ));
        }
        conversion.set_source_crs(base_crs.clone());
        let crs = Arc::new(Crs::Projected(ProjectedCrs {
            usage: properties.build_usage(),
            base_crs,
            conversion,
            coordinate_system,
            canonical_bound_crs: None,
        }));
        if let Crs::Projected(projected) = &*crs {
            projected.conversion.bind_target_crs(&crs);
        }
        Ok(crs)
    }

    pub fn name(&self) -> &str {
        self.usage.name()
    }

    /// A copy of the deriving conversion, so callers never alias the
    /// internal one
    pub fn deriving_conversion(&self) -> Conversion {
        self.conversion.clone()
    }

    /// Direct view of the internal conversion for serialization
    pub(crate) fn conversion_ref(&self) -> &Conversion {
        &self.conversion
    }

    /// Shallow clone with the conversion re-bound to the clone
    pub fn shallow_clone_rebound(&self) -> Arc<Crs> {
        let crs = Arc::new(Crs::Projected(ProjectedCrs {
            usage: self.usage.clone(),
            base_crs: self.base_crs.clone(),
            conversion: self.conversion.detached_clone(),
            coordinate_system: self.coordinate_system.clone(),
            canonical_bound_crs: self.canonical_bound_crs.clone(),
        }));
        if let Crs::Projected(projected) = &*crs {
            projected.conversion.bind_target_crs(&crs);
        }
        crs
    }

    /// WGS 84 / UTM zone 31N, EPSG:32631
    pub fn epsg_32631() -> Arc<Crs> {
        use crate::common::unit::METRE;
        use crate::crs::geodetic::GeographicCrs;
        ProjectedCrs::create(
            Properties::epsg("WGS 84 / UTM zone 31N", 32631),
            GeographicCrs::epsg_4326(),
            Conversion::create_utm(Properties::default(), 31, true)
                .expect("valid constant conversion"),
            CoordinateSystem::create_east_north(&METRE).expect("metre is linear"),
        )
        .expect("valid constant CRS")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crs::geodetic::GeographicCrs;

    #[test]
    fn test_conversion_self_reference() {
        let crs = ProjectedCrs::epsg_32631();
        match &*crs {
            Crs::Projected(projected) => {
                let target = projected
                    .deriving_conversion()
                    .target_crs()
                    .expect("target bound by factory");
                assert!(Arc::ptr_eq(&target, &crs));
                assert!(Arc::ptr_eq(
                    projected.deriving_conversion().source_crs().unwrap(),
                    &projected.base_crs
                ));
            }
            _ => panic!("expected a projected CRS"),
        }
    }

    #[test]
    fn test_shallow_clone_rebinds() {
        let crs = ProjectedCrs::epsg_32631();
        let clone = match &*crs {
            Crs::Projected(projected) => projected.shallow_clone_rebound(),
            _ => unreachable!(),
        };
        match &*clone {
            Crs::Projected(projected) => {
                let target = projected.deriving_conversion().target_crs().unwrap();
                assert!(Arc::ptr_eq(&target, &clone));
                assert!(!Arc::ptr_eq(&target, &crs));
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_base_must_be_geographic() {
        let vertical = crate::crs::vertical::VerticalCrs::epsg_5701();
        let result = ProjectedCrs::create(
            Properties::named("bad"),
            vertical,
            Conversion::create_utm(Properties::default(), 31, true).unwrap(),
            CoordinateSystem::create_east_north(&crate::common::unit::METRE).unwrap(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_cs_must_be_cartesian() {
        let result = ProjectedCrs::create(
            Properties::named("bad"),
            GeographicCrs::epsg_4326(),
            Conversion::create_utm(Properties::default(), 31, true).unwrap(),
            CoordinateSystem::create_latitude_longitude(&crate::common::unit::DEGREE).unwrap(),
        );
        assert!(result.is_err());
    }
}
