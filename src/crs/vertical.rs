//! Vertical coordinate reference systems

use crate::common::unit::METRE;
use crate::common::{ObjectUsage, Properties};
use crate::crs::geodetic::check_datum_exclusivity;
use crate::crs::Crs;
use crate::cs::CoordinateSystem;
use crate::datum::{DatumEnsemble, VerticalReferenceFrame};
use crate::errors::{GeodeticError, GeodeticResult};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub struct VerticalCrs {
    pub usage: ObjectUsage,
    pub datum: Option<VerticalReferenceFrame>,
    pub datum_ensemble: Option<DatumEnsemble>,
    pub coordinate_system: CoordinateSystem,
    /// Remembered BoundCRS used to re-emit geoidgrids on export
    pub canonical_bound_crs: Option<Arc<Crs>>,
}

impl VerticalCrs {
    pub fn new(
        properties: Properties,
        datum: Option<VerticalReferenceFrame>,
        datum_ensemble: Option<DatumEnsemble>,
        coordinate_system: CoordinateSystem,
    ) -> GeodeticResult<Self> {
        check_datum_exclusivity(datum.is_some(), datum_ensemble.is_some())?;
        if !matches!(&coordinate_system, CoordinateSystem::Vertical(_)) {
            return Err(GeodeticError::InvariantViolation(
                "a vertical CRS requires a vertical coordinate system".to_string(),
            ));
        }
        Ok(VerticalCrs {
            usage: properties.build_usage(),
            datum,
            datum_ensemble,
            coordinate_system,
            canonical_bound_crs: None,
        })
    }

    pub fn create(
        properties: Properties,
        datum: Option<VerticalReferenceFrame>,
        datum_ensemble: Option<DatumEnsemble>,
        coordinate_system: CoordinateSystem,
    ) -> GeodeticResult<Arc<Crs>> {
        Ok(Arc::new(Crs::Vertical(Self::new(
            properties,
            datum,
            datum_ensemble,
            coordinate_system,
        )?)))
    }

    pub fn name(&self) -> &str {
        self.usage.name()
    }

    /// ODN height, EPSG:5701
    pub fn epsg_5701() -> Arc<Crs> {
        VerticalCrs::create(
            Properties::epsg("ODN height", 5701),
            Some(
                VerticalReferenceFrame::create(
                    Properties::epsg("Ordnance Datum Newlyn", 5101),
                    None,
                    None,
                )
                .expect("valid constant datum"),
            ),
            None,
            CoordinateSystem::create_gravity_related_height(&METRE).expect("metre is linear"),
        )
        .expect("valid constant CRS")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_vertical_cs() {
        let datum =
            VerticalReferenceFrame::create(Properties::named("datum"), None, None).unwrap();
        let cartesian = CoordinateSystem::create_east_north(&METRE).unwrap();
        assert!(VerticalCrs::new(Properties::named("bad"), Some(datum), None, cartesian).is_err());
    }

    #[test]
    fn test_singleton() {
        let crs = VerticalCrs::epsg_5701();
        assert_eq!(crs.name(), "ODN height");
    }
}
