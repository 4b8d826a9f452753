//! Compound coordinate reference systems

use crate::common::{ObjectUsage, Properties};
use crate::crs::Crs;
use crate::errors::{GeodeticError, GeodeticResult};
use std::sync::Arc;

/// An ordered combination of independent CRS components
#[derive(Debug, Clone, PartialEq)]
pub struct CompoundCrs {
    pub usage: ObjectUsage,
    pub components: Vec<Arc<Crs>>,
}

impl CompoundCrs {
    /// Components must be mutually compatible: one horizontal CRS combined
    /// with at most one vertical and one temporal component
    pub fn create(properties: Properties, components: Vec<Arc<Crs>>) -> GeodeticResult<Arc<Crs>> {
        if components.len() < 2 {
            return Err(GeodeticError::InvariantViolation(
                "a compound CRS requires at least two components".to_string(),
            ));
        }
        let mut vertical = 0;
        let mut temporal = 0;
        let mut horizontal = 0;
        for component in &components {
            match &**component {
                Crs::Vertical(_) => vertical += 1,
                Crs::Temporal(_) => temporal += 1,
                Crs::Geographic(_) | Crs::Geodetic(_) | Crs::Projected(_) | Crs::Bound(_)
                | Crs::Engineering(_) => horizontal += 1,
                Crs::Compound(_) => {
                    return Err(GeodeticError::InvariantViolation(
                        "a compound CRS cannot nest another compound CRS".to_string(),
                    ))
                }
                _ => {}
            }
        }
        if horizontal > 1 || vertical > 1 || temporal > 1 {
            return Err(GeodeticError::InvariantViolation(format!(
                "incompatible compound components: {} horizontal, {} vertical, {} temporal",
                horizontal, vertical, temporal
            )));
        }
        Ok(Arc::new(Crs::Compound(CompoundCrs {
            usage: properties.build_usage(),
            components,
        })))
    }

    pub fn name(&self) -> &str {
        self.usage.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crs::projected::ProjectedCrs;
    use crate::crs::vertical::VerticalCrs;

    #[test]
    fn test_horizontal_plus_vertical() {
        let compound = CompoundCrs::create(
            Properties::named("WGS 84 / UTM zone 31N + ODN height"),
            vec![ProjectedCrs::epsg_32631(), VerticalCrs::epsg_5701()],
        )
        .unwrap();
        assert_eq!(compound.name(), "WGS 84 / UTM zone 31N + ODN height");
    }

    #[test]
    fn test_two_verticals_rejected() {
        let result = CompoundCrs::create(
            Properties::named("bad"),
            vec![VerticalCrs::epsg_5701(), VerticalCrs::epsg_5701()],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_single_component_rejected() {
        assert!(CompoundCrs::create(Properties::named("bad"), vec![VerticalCrs::epsg_5701()])
            .is_err());
    }
}
