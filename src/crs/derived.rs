//! Derived coordinate reference systems
//!
//! A derived CRS carries a base CRS of a matching kind and a deriving
//! conversion, like a projected CRS but without the geographic-to-Cartesian
//! restriction.

use crate::common::{ObjectUsage, Properties};
use crate::crs::Crs;
use crate::cs::CoordinateSystem;
use crate::errors::{GeodeticError, GeodeticResult};
use crate::operation::Conversion;
use std::sync::Arc;

/// Which family the derived CRS belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DerivedKind {
    Geodetic,
    Geographic,
    Projected,
    Vertical,
    Engineering,
    Temporal,
    Parametric,
}

impl DerivedKind {
    /// The base CRS kind this derived kind requires
    fn base_matches(&self, base: &Crs) -> bool {
        match self {
            DerivedKind::Geodetic => matches!(base, Crs::Geodetic(_) | Crs::Geographic(_)),
            DerivedKind::Geographic => matches!(base, Crs::Geographic(_) | Crs::Geodetic(_)),
            DerivedKind::Projected => matches!(base, Crs::Projected(_)),
            DerivedKind::Vertical => matches!(base, Crs::Vertical(_)),
            DerivedKind::Engineering => matches!(base, Crs::Engineering(_)),
            DerivedKind::Temporal => matches!(base, Crs::Temporal(_)),
            DerivedKind::Parametric => matches!(base, Crs::Parametric(_)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DerivedCrs {
    pub usage: ObjectUsage,
    pub kind: DerivedKind,
    pub base_crs: Arc<Crs>,
    pub(crate) conversion: Conversion,
    pub coordinate_system: CoordinateSystem,
}

impl DerivedCrs {
    pub fn create(
        properties: Properties,
        kind: DerivedKind,
        base_crs: Arc<Crs>,
        mut conversion: Conversion,
        coordinate_system: CoordinateSystem,
    ) -> GeodeticResult<Arc<Crs>> {
        if !kind.base_matches(&base_crs) {
            return Err(GeodeticError::InvariantViolation(format!(
                "base CRS '{}' does not match the {:?} derived kind",
                base_crs.name(),
                kind
            )));
        }
        conversion.set_source_crs(base_crs.clone());
        let crs = Arc::new(Crs::Derived(DerivedCrs {
            usage: properties.build_usage(),
            kind,
            base_crs,
            conversion,
            coordinate_system,
        }));
        if let Crs::Derived(derived) = &*crs {
            derived.conversion.bind_target_crs(&crs);
        }
        Ok(crs)
    }

    pub fn name(&self) -> &str {
        self.usage.name()
    }

    /// A copy of the deriving conversion
    pub fn deriving_conversion(&self) -> Conversion {
        self.conversion.clone()
    }

    pub(crate) fn conversion_ref(&self) -> &Conversion {
        &self.conversion
    }

    /// Shallow clone with the conversion re-bound to the clone
    pub fn shallow_clone_rebound(&self) -> Arc<Crs> {
        let crs = Arc::new(Crs::Derived(DerivedCrs {
            usage: self.usage.clone(),
            kind: self.kind,
            base_crs: self.base_crs.clone(),
            conversion: self.conversion.detached_clone(),
            coordinate_system: self.coordinate_system.clone(),
        }));
        if let Crs::Derived(derived) = &*crs {
            derived.conversion.bind_target_crs(&crs);
        }
        crs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::unit::METRE;
    use crate::common::Measure;
    use crate::crs::geodetic::GeographicCrs;

    #[test]
    fn test_kind_base_check() {
        let conversion = Conversion::create_from_method_name_and_params(
            Properties::named("offset"),
            "Some Derivation",
            &[("offset", Measure::new(10.0, METRE.clone()))],
        )
        .unwrap();
        // a vertical derived CRS cannot sit on a geographic base
        let result = DerivedCrs::create(
            Properties::named("bad"),
            DerivedKind::Vertical,
            GeographicCrs::epsg_4326(),
            conversion,
            CoordinateSystem::create_gravity_related_height(&METRE).unwrap(),
        );
        assert!(result.is_err());
    }
}
