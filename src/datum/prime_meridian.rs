//! Prime meridians

use crate::common::unit::GRAD;
use crate::common::{Angle, IdentifiedObject, Properties};
use crate::errors::GeodeticResult;

/// A prime meridian: the zero-longitude reference of a datum
///
/// The longitude is kept in the unit it was defined in; conversion to
/// degree happens only on WKT1 export.
#[derive(Debug, Clone, PartialEq)]
pub struct PrimeMeridian {
    pub base: IdentifiedObject,
    longitude: Angle,
}

impl PrimeMeridian {
    pub fn create(properties: Properties, longitude: Angle) -> GeodeticResult<Self> {
        Ok(PrimeMeridian {
            base: properties.build_identified(),
            longitude,
        })
    }

    pub fn name(&self) -> &str {
        &self.base.name
    }

    pub fn longitude(&self) -> &Angle {
        &self.longitude
    }

    /// Longitude equality after SI conversion
    pub fn is_equivalent_to(&self, other: &PrimeMeridian) -> bool {
        (self.longitude.si_value() - other.longitude.si_value()).abs() < 1e-9
    }

    pub fn is_greenwich(&self) -> bool {
        self.longitude.si_value() == 0.0
    }

    /// Greenwich, EPSG:8901
    pub fn greenwich() -> PrimeMeridian {
        PrimeMeridian::create(Properties::epsg("Greenwich", 8901), Angle::degrees(0.0))
            .expect("valid constant meridian")
    }

    /// Paris, EPSG:8903, defined in grads
    pub fn paris() -> PrimeMeridian {
        PrimeMeridian::create(
            Properties::epsg("Paris", 8903),
            Angle::new(2.5969213, GRAD.clone()).expect("grad is angular"),
        )
        .expect("valid constant meridian")
    }

    /// The PROJ `+pm=` keyword for well-known meridians
    pub fn proj_name(&self) -> Option<&'static str> {
        match self.name() {
            "Paris" => Some("paris"),
            "Greenwich" => None,
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::unit::DEGREE;

    #[test]
    fn test_greenwich() {
        let pm = PrimeMeridian::greenwich();
        assert!(pm.is_greenwich());
        assert_eq!(pm.base.epsg_code(), Some(8901));
    }

    #[test]
    fn test_paris_in_grad() {
        let pm = PrimeMeridian::paris();
        assert_eq!(pm.longitude().unit(), &*GRAD);
        let deg = pm.longitude().convert_to_unit(&DEGREE).unwrap();
        assert!((deg.value() - 2.33722917).abs() < 1e-8);
    }

    #[test]
    fn test_equivalence_across_units() {
        let in_grad = PrimeMeridian::paris();
        let in_deg = PrimeMeridian::create(
            Properties::named("Paris"),
            Angle::degrees(2.33722917),
        )
        .unwrap();
        assert!(in_grad.is_equivalent_to(&in_deg));
        assert!(!in_grad.is_equivalent_to(&PrimeMeridian::greenwich()));
    }
}
