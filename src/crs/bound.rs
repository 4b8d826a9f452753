//! Bound coordinate reference systems
//!
//! A bound CRS annotates a base CRS with a transformation to a hub CRS,
//! typically WGS 84, preserving the legacy TOWGS84/nadgrids information.

use crate::common::{ObjectUsage, Properties};
use crate::crs::Crs;
use crate::errors::{GeodeticError, GeodeticResult};
use crate::operation::Transformation;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub struct BoundCrs {
    pub usage: ObjectUsage,
    pub base_crs: Arc<Crs>,
    pub hub_crs: Arc<Crs>,
    pub transformation: Transformation,
}

impl BoundCrs {
    /// The transformation must run from the base CRS to the hub CRS
    pub fn create(
        base_crs: Arc<Crs>,
        hub_crs: Arc<Crs>,
        transformation: Transformation,
    ) -> GeodeticResult<Arc<Crs>> {
        if transformation.target_crs().name() != hub_crs.name() {
            return Err(GeodeticError::InvariantViolation(format!(
                "the transformation target '{}' must be the hub CRS '{}'",
                transformation.target_crs().name(),
                hub_crs.name()
            )));
        }
        let properties = Properties::named(base_crs.name());
        Ok(Arc::new(Crs::Bound(BoundCrs {
            usage: properties.build_usage(),
            base_crs,
            hub_crs,
            transformation,
        })))
    }

    pub fn name(&self) -> &str {
        self.usage.name()
    }

    /// True when the hub is (equivalent to) EPSG:4326
    pub fn hub_is_wgs84(&self) -> bool {
        match &*self.hub_crs {
            Crs::Geographic(geog) => {
                geog.geodetic.usage.base.epsg_code() == Some(4326)
                    || geog
                        .geodetic
                        .effective_frame()
                        .map(|f| f.is_equivalent_to(&crate::datum::GeodeticReferenceFrame::wgs84()))
                        .unwrap_or(false)
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crs::geodetic::GeographicCrs;
    use crate::operation::registry;

    #[test]
    fn test_hub_must_be_transformation_target() {
        let base = GeographicCrs::epsg_4807();
        let hub = GeographicCrs::epsg_4326();
        let transformation = Transformation::create_position_vector(
            Properties::named("NTF (Paris) to WGS 84"),
            base.clone(),
            hub.clone(),
            registry::EPSG_CODE_METHOD_POSITION_VECTOR_GEOGRAPHIC_2D,
            -168.0,
            -60.0,
            320.0,
            0.0,
            0.0,
            0.0,
            0.0,
            vec![],
        )
        .unwrap();
        let bound = BoundCrs::create(base, hub, transformation).unwrap();
        match &*bound {
            Crs::Bound(b) => assert!(b.hub_is_wgs84()),
            _ => panic!("expected a bound CRS"),
        }
    }
}
