//! Engineering, temporal and parametric coordinate reference systems

use crate::common::{ObjectUsage, Properties};
use crate::crs::Crs;
use crate::cs::CoordinateSystem;
use crate::datum::{EngineeringDatum, ParametricDatum, TemporalDatum};
use crate::errors::{GeodeticError, GeodeticResult};
use std::sync::Arc;

/// A CRS tied to a local engineering datum
#[derive(Debug, Clone, PartialEq)]
pub struct EngineeringCrs {
    pub usage: ObjectUsage,
    pub datum: EngineeringDatum,
    pub coordinate_system: CoordinateSystem,
}

impl EngineeringCrs {
    pub fn create(
        properties: Properties,
        datum: EngineeringDatum,
        coordinate_system: CoordinateSystem,
    ) -> GeodeticResult<Arc<Crs>> {
        Ok(Arc::new(Crs::Engineering(EngineeringCrs {
            usage: properties.build_usage(),
            datum,
            coordinate_system,
        })))
    }

    pub fn name(&self) -> &str {
        self.usage.name()
    }
}

/// A CRS measuring time against a temporal datum
#[derive(Debug, Clone, PartialEq)]
pub struct TemporalCrs {
    pub usage: ObjectUsage,
    pub datum: TemporalDatum,
    pub coordinate_system: CoordinateSystem,
}

impl TemporalCrs {
    pub fn create(
        properties: Properties,
        datum: TemporalDatum,
        coordinate_system: CoordinateSystem,
    ) -> GeodeticResult<Arc<Crs>> {
        if !matches!(&coordinate_system, CoordinateSystem::Temporal(_, _)) {
            return Err(GeodeticError::InvariantViolation(
                "a temporal CRS requires a temporal coordinate system".to_string(),
            ));
        }
        Ok(Arc::new(Crs::Temporal(TemporalCrs {
            usage: properties.build_usage(),
            datum,
            coordinate_system,
        })))
    }

    pub fn name(&self) -> &str {
        self.usage.name()
    }
}

/// A CRS measuring a physical parameter against a parametric datum
#[derive(Debug, Clone, PartialEq)]
pub struct ParametricCrs {
    pub usage: ObjectUsage,
    pub datum: ParametricDatum,
    pub coordinate_system: CoordinateSystem,
}

impl ParametricCrs {
    pub fn create(
        properties: Properties,
        datum: ParametricDatum,
        coordinate_system: CoordinateSystem,
    ) -> GeodeticResult<Arc<Crs>> {
        if !matches!(&coordinate_system, CoordinateSystem::Parametric(_)) {
            return Err(GeodeticError::InvariantViolation(
                "a parametric CRS requires a parametric coordinate system".to_string(),
            ));
        }
        Ok(Arc::new(Crs::Parametric(ParametricCrs {
            usage: properties.build_usage(),
            datum,
            coordinate_system,
        })))
    }

    pub fn name(&self) -> &str {
        self.usage.name()
    }
}
