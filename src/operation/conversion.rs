//! Conversions: coordinate operations without a datum change
//!
//! A conversion attached to a projected or derived CRS has that CRS as its
//! target. The back-reference is weak and bound by the CRS factory once the
//! owning CRS has been allocated.

use crate::common::unit::{ARC_SECOND, DEGREE, METRE, UNITY};
use crate::common::{Measure, ObjectUsage, Properties};
use crate::crs::Crs;
use crate::errors::{GeodeticError, GeodeticResult};
use crate::operation::registry::{self, MethodMapping};
use crate::operation::{
    OperationMethod, OperationParameter, OperationParameterValue, ParameterValue,
};
use std::sync::{Arc, OnceLock, Weak};

/// A coordinate operation with no datum change, e.g. a map projection
#[derive(Debug)]
pub struct Conversion {
    pub usage: ObjectUsage,
    pub method: OperationMethod,
    pub values: Vec<OperationParameterValue>,
    source_crs: Option<Arc<Crs>>,
    target_crs: OnceLock<Weak<Crs>>,
}

impl Clone for Conversion {
    fn clone(&self) -> Self {
        Conversion {
            usage: self.usage.clone(),
            method: self.method.clone(),
            values: self.values.clone(),
            source_crs: self.source_crs.clone(),
            target_crs: self.target_crs.clone(),
        }
    }
}

/// Equality ignores the CRS links so that comparing two projected CRSes
/// does not recurse through the back-reference
impl PartialEq for Conversion {
    fn eq(&self, other: &Self) -> bool {
        self.usage == other.usage && self.method == other.method && self.values == other.values
    }
}

impl Conversion {
    pub fn create(
        properties: Properties,
        method: OperationMethod,
        values: Vec<OperationParameterValue>,
    ) -> GeodeticResult<Self> {
        Ok(Conversion {
            usage: properties.build_usage(),
            method,
            values,
            source_crs: None,
            target_crs: OnceLock::new(),
        })
    }

    /// Build a conversion from a method name and (parameter, measure) pairs
    ///
    /// Known methods are resolved against the registry so the parameters are
    /// stored under their canonical EPSG identities. Unknown methods are
    /// accepted verbatim, which keeps them round-trippable.
    pub fn create_from_method_name_and_params(
        properties: Properties,
        method_name: &str,
        params: &[(&str, Measure)],
    ) -> GeodeticResult<Self> {
        match registry::find_method_by_name(method_name) {
            Some(mapping) => {
                let method = OperationMethod::from_mapping(mapping);
                let mut values = Vec::with_capacity(params.len());
                for (name, measure) in params {
                    let parameter = match registry::find_parameter(mapping, name, None) {
                        Some(pm) => OperationParameter::from_mapping(pm),
                        None => OperationParameter::named(name),
                    };
                    values.push(OperationParameterValue::measure(parameter, measure.clone()));
                }
                Conversion::create(properties, method, values)
            }
            None => {
                let method = OperationMethod::named(method_name);
                let values = params
                    .iter()
                    .map(|(name, measure)| {
                        OperationParameterValue::measure(
                            OperationParameter::named(name),
                            measure.clone(),
                        )
                    })
                    .collect();
                Conversion::create(properties, method, values)
            }
        }
    }

    pub fn name(&self) -> &str {
        self.usage.name()
    }

    pub fn source_crs(&self) -> Option<&Arc<Crs>> {
        self.source_crs.as_ref()
    }

    /// The owning CRS, upgraded from the weak back-reference
    pub fn target_crs(&self) -> Option<Arc<Crs>> {
        self.target_crs.get().and_then(|weak| weak.upgrade())
    }

    /// Attach the conversion to its source CRS; used by CRS factories
    pub(crate) fn set_source_crs(&mut self, source: Arc<Crs>) {
        self.source_crs = Some(source);
    }

    /// Bind the weak back-reference to the owning CRS; idempotent
    pub(crate) fn bind_target_crs(&self, target: &Arc<Crs>) {
        let _ = self.target_crs.set(Arc::downgrade(target));
    }

    /// A copy with the CRS links cleared, for re-attachment to a clone
    pub(crate) fn detached_clone(&self) -> Conversion {
        Conversion {
            usage: self.usage.clone(),
            method: self.method.clone(),
            values: self.values.clone(),
            source_crs: self.source_crs.clone(),
            target_crs: OnceLock::new(),
        }
    }

    /// The registry row for this conversion's method, when there is one
    pub fn mapping(&self) -> Option<&'static MethodMapping> {
        if let Some(code) = self.method.epsg_code() {
            if let Some(m) = registry::find_method_by_code(code as u16) {
                return Some(m);
            }
        }
        registry::find_method_by_name(self.method.name())
    }

    /// True for the EPSG:9601 Longitude rotation method
    pub fn is_longitude_rotation(&self) -> bool {
        self.method.epsg_code() == Some(registry::EPSG_CODE_METHOD_LONGITUDE_ROTATION as u32)
            || self.method.name() == registry::EPSG_NAME_METHOD_LONGITUDE_ROTATION
    }

    pub fn parameter_value(&self, code: u16) -> Option<&OperationParameterValue> {
        super::parameter_value_by_code(&self.values, code)
    }

    /// Numeric value of a parameter converted to the given unit
    pub fn parameter_value_in(&self, code: u16, unit: &crate::common::Unit) -> Option<f64> {
        match self.parameter_value(code).map(|v| &v.value) {
            Some(ParameterValue::Measure(m)) => m.convert_to_unit(unit).ok().map(|c| c.value()),
            _ => None,
        }
    }

    fn angular(value: f64) -> Measure {
        Measure::new(value, DEGREE.clone())
    }

    fn linear(value: f64) -> Measure {
        Measure::new(value, METRE.clone())
    }

    fn scale(value: f64) -> Measure {
        Measure::new(value, UNITY.clone())
    }

    fn from_mapping_code(
        properties: Properties,
        code: u16,
        values: Vec<(u16, Measure)>,
    ) -> GeodeticResult<Self> {
        let mapping = registry::find_method_by_code(code).ok_or_else(|| {
            GeodeticError::NotFound(format!("method EPSG:{} in registry", code))
        })?;
        let method = OperationMethod::from_mapping(mapping);
        let mut bound = Vec::with_capacity(values.len());
        for (param_code, measure) in values {
            let parameter = match registry::find_parameter(mapping, "", Some(param_code)) {
                Some(pm) => OperationParameter::from_mapping(pm),
                None => {
                    return Err(GeodeticError::NotFound(format!(
                        "parameter EPSG:{} of method EPSG:{}",
                        param_code, code
                    )))
                }
            };
            bound.push(OperationParameterValue::measure(parameter, measure));
        }
        Conversion::create(properties, method, bound)
    }

    /// Universal Transverse Mercator
    ///
    /// Normalizes the zone into [1, 60] and derives the natural-origin
    /// longitude as zone * 6 - 183.
    pub fn create_utm(properties: Properties, zone: u32, north: bool) -> GeodeticResult<Self> {
        if !(1..=60).contains(&zone) {
            return Err(GeodeticError::InvariantViolation(format!(
                "UTM zone must be in [1, 60], got {}",
                zone
            )));
        }
        let properties = if properties.name.is_none() {
            Properties::named(&format!("UTM zone {}{}", zone, if north { 'N' } else { 'S' }))
        } else {
            properties
        };
        Self::create_transverse_mercator(
            properties,
            registry::UTM_LATITUDE_OF_NATURAL_ORIGIN,
            (zone as f64) * 6.0 - 183.0,
            registry::UTM_SCALE_FACTOR,
            registry::UTM_FALSE_EASTING,
            if north {
                registry::UTM_NORTH_FALSE_NORTHING
            } else {
                registry::UTM_SOUTH_FALSE_NORTHING
            },
        )
    }

    pub fn create_transverse_mercator(
        properties: Properties,
        latitude_origin: f64,
        longitude_origin: f64,
        scale: f64,
        false_easting: f64,
        false_northing: f64,
    ) -> GeodeticResult<Self> {
        Self::from_mapping_code(
            properties,
            registry::EPSG_CODE_METHOD_TRANSVERSE_MERCATOR,
            vec![
                (
                    registry::EPSG_CODE_PARAMETER_LATITUDE_OF_NATURAL_ORIGIN,
                    Self::angular(latitude_origin),
                ),
                (
                    registry::EPSG_CODE_PARAMETER_LONGITUDE_OF_NATURAL_ORIGIN,
                    Self::angular(longitude_origin),
                ),
                (
                    registry::EPSG_CODE_PARAMETER_SCALE_FACTOR_AT_NATURAL_ORIGIN,
                    Self::scale(scale),
                ),
                (
                    registry::EPSG_CODE_PARAMETER_FALSE_EASTING,
                    Self::linear(false_easting),
                ),
                (
                    registry::EPSG_CODE_PARAMETER_FALSE_NORTHING,
                    Self::linear(false_northing),
                ),
            ],
        )
    }

    /// Mercator (variant A); the latitude of natural origin is always zero
    pub fn create_mercator_variant_a(
        properties: Properties,
        longitude_origin: f64,
        scale: f64,
        false_easting: f64,
        false_northing: f64,
    ) -> GeodeticResult<Self> {
        Self::from_mapping_code(
            properties,
            registry::EPSG_CODE_METHOD_MERCATOR_VARIANT_A,
            vec![
                (
                    registry::EPSG_CODE_PARAMETER_LATITUDE_OF_NATURAL_ORIGIN,
                    Self::angular(0.0),
                ),
                (
                    registry::EPSG_CODE_PARAMETER_LONGITUDE_OF_NATURAL_ORIGIN,
                    Self::angular(longitude_origin),
                ),
                (
                    registry::EPSG_CODE_PARAMETER_SCALE_FACTOR_AT_NATURAL_ORIGIN,
                    Self::scale(scale),
                ),
                (
                    registry::EPSG_CODE_PARAMETER_FALSE_EASTING,
                    Self::linear(false_easting),
                ),
                (
                    registry::EPSG_CODE_PARAMETER_FALSE_NORTHING,
                    Self::linear(false_northing),
                ),
            ],
        )
    }

    pub fn create_mercator_variant_b(
        properties: Properties,
        latitude_first_parallel: f64,
        longitude_origin: f64,
        false_easting: f64,
        false_northing: f64,
    ) -> GeodeticResult<Self> {
        Self::from_mapping_code(
            properties,
            registry::EPSG_CODE_METHOD_MERCATOR_VARIANT_B,
            vec![
                (
                    registry::EPSG_CODE_PARAMETER_LATITUDE_1ST_STD_PARALLEL,
                    Self::angular(latitude_first_parallel),
                ),
                (
                    registry::EPSG_CODE_PARAMETER_LONGITUDE_OF_NATURAL_ORIGIN,
                    Self::angular(longitude_origin),
                ),
                (
                    registry::EPSG_CODE_PARAMETER_FALSE_EASTING,
                    Self::linear(false_easting),
                ),
                (
                    registry::EPSG_CODE_PARAMETER_FALSE_NORTHING,
                    Self::linear(false_northing),
                ),
            ],
        )
    }

    pub fn create_lambert_conic_conformal_1sp(
        properties: Properties,
        latitude_origin: f64,
        longitude_origin: f64,
        scale: f64,
        false_easting: f64,
        false_northing: f64,
    ) -> GeodeticResult<Self> {
        Self::from_mapping_code(
            properties,
            registry::EPSG_CODE_METHOD_LAMBERT_CONIC_CONFORMAL_1SP,
            vec![
                (
                    registry::EPSG_CODE_PARAMETER_LATITUDE_OF_NATURAL_ORIGIN,
                    Self::angular(latitude_origin),
                ),
                (
                    registry::EPSG_CODE_PARAMETER_LONGITUDE_OF_NATURAL_ORIGIN,
                    Self::angular(longitude_origin),
                ),
                (
                    registry::EPSG_CODE_PARAMETER_SCALE_FACTOR_AT_NATURAL_ORIGIN,
                    Self::scale(scale),
                ),
                (
                    registry::EPSG_CODE_PARAMETER_FALSE_EASTING,
                    Self::linear(false_easting),
                ),
                (
                    registry::EPSG_CODE_PARAMETER_FALSE_NORTHING,
                    Self::linear(false_northing),
                ),
            ],
        )
    }

    fn lcc_2sp_values(
        latitude_false_origin: f64,
        longitude_false_origin: f64,
        latitude_first_parallel: f64,
        latitude_second_parallel: f64,
        easting_false_origin: f64,
        northing_false_origin: f64,
    ) -> Vec<(u16, Measure)> {
        vec![
            (
                registry::EPSG_CODE_PARAMETER_LATITUDE_FALSE_ORIGIN,
                Self::angular(latitude_false_origin),
            ),
            (
                registry::EPSG_CODE_PARAMETER_LONGITUDE_FALSE_ORIGIN,
                Self::angular(longitude_false_origin),
            ),
            (
                registry::EPSG_CODE_PARAMETER_LATITUDE_1ST_STD_PARALLEL,
                Self::angular(latitude_first_parallel),
            ),
            (
                registry::EPSG_CODE_PARAMETER_LATITUDE_2ND_STD_PARALLEL,
                Self::angular(latitude_second_parallel),
            ),
            (
                registry::EPSG_CODE_PARAMETER_EASTING_FALSE_ORIGIN,
                Self::linear(easting_false_origin),
            ),
            (
                registry::EPSG_CODE_PARAMETER_NORTHING_FALSE_ORIGIN,
                Self::linear(northing_false_origin),
            ),
        ]
    }

    pub fn create_lambert_conic_conformal_2sp(
        properties: Properties,
        latitude_false_origin: f64,
        longitude_false_origin: f64,
        latitude_first_parallel: f64,
        latitude_second_parallel: f64,
        easting_false_origin: f64,
        northing_false_origin: f64,
    ) -> GeodeticResult<Self> {
        Self::from_mapping_code(
            properties,
            registry::EPSG_CODE_METHOD_LAMBERT_CONIC_CONFORMAL_2SP,
            Self::lcc_2sp_values(
                latitude_false_origin,
                longitude_false_origin,
                latitude_first_parallel,
                latitude_second_parallel,
                easting_false_origin,
                northing_false_origin,
            ),
        )
    }

    /// Same parameter shape as the generic 2SP method, under the Belgium
    /// method name
    pub fn create_lambert_conic_conformal_2sp_belgium(
        properties: Properties,
        latitude_false_origin: f64,
        longitude_false_origin: f64,
        latitude_first_parallel: f64,
        latitude_second_parallel: f64,
        easting_false_origin: f64,
        northing_false_origin: f64,
    ) -> GeodeticResult<Self> {
        Self::from_mapping_code(
            properties,
            registry::EPSG_CODE_METHOD_LAMBERT_CONIC_CONFORMAL_2SP_BELGIUM,
            Self::lcc_2sp_values(
                latitude_false_origin,
                longitude_false_origin,
                latitude_first_parallel,
                latitude_second_parallel,
                easting_false_origin,
                northing_false_origin,
            ),
        )
    }

    pub fn create_oblique_stereographic(
        properties: Properties,
        latitude_origin: f64,
        longitude_origin: f64,
        scale: f64,
        false_easting: f64,
        false_northing: f64,
    ) -> GeodeticResult<Self> {
        Self::from_mapping_code(
            properties,
            registry::EPSG_CODE_METHOD_OBLIQUE_STEREOGRAPHIC,
            vec![
                (
                    registry::EPSG_CODE_PARAMETER_LATITUDE_OF_NATURAL_ORIGIN,
                    Self::angular(latitude_origin),
                ),
                (
                    registry::EPSG_CODE_PARAMETER_LONGITUDE_OF_NATURAL_ORIGIN,
                    Self::angular(longitude_origin),
                ),
                (
                    registry::EPSG_CODE_PARAMETER_SCALE_FACTOR_AT_NATURAL_ORIGIN,
                    Self::scale(scale),
                ),
                (
                    registry::EPSG_CODE_PARAMETER_FALSE_EASTING,
                    Self::linear(false_easting),
                ),
                (
                    registry::EPSG_CODE_PARAMETER_FALSE_NORTHING,
                    Self::linear(false_northing),
                ),
            ],
        )
    }

    pub fn create_polar_stereographic_variant_a(
        properties: Properties,
        latitude_origin: f64,
        longitude_origin: f64,
        scale: f64,
        false_easting: f64,
        false_northing: f64,
    ) -> GeodeticResult<Self> {
        Self::from_mapping_code(
            properties,
            registry::EPSG_CODE_METHOD_POLAR_STEREOGRAPHIC_VARIANT_A,
            vec![
                (
                    registry::EPSG_CODE_PARAMETER_LATITUDE_OF_NATURAL_ORIGIN,
                    Self::angular(latitude_origin),
                ),
                (
                    registry::EPSG_CODE_PARAMETER_LONGITUDE_OF_NATURAL_ORIGIN,
                    Self::angular(longitude_origin),
                ),
                (
                    registry::EPSG_CODE_PARAMETER_SCALE_FACTOR_AT_NATURAL_ORIGIN,
                    Self::scale(scale),
                ),
                (
                    registry::EPSG_CODE_PARAMETER_FALSE_EASTING,
                    Self::linear(false_easting),
                ),
                (
                    registry::EPSG_CODE_PARAMETER_FALSE_NORTHING,
                    Self::linear(false_northing),
                ),
            ],
        )
    }

    pub fn create_polar_stereographic_variant_b(
        properties: Properties,
        latitude_standard_parallel: f64,
        longitude_origin: f64,
        false_easting: f64,
        false_northing: f64,
    ) -> GeodeticResult<Self> {
        Self::from_mapping_code(
            properties,
            registry::EPSG_CODE_METHOD_POLAR_STEREOGRAPHIC_VARIANT_B,
            vec![
                (
                    registry::EPSG_CODE_PARAMETER_LATITUDE_STD_PARALLEL,
                    Self::angular(latitude_standard_parallel),
                ),
                (
                    registry::EPSG_CODE_PARAMETER_LONGITUDE_OF_ORIGIN,
                    Self::angular(longitude_origin),
                ),
                (
                    registry::EPSG_CODE_PARAMETER_FALSE_EASTING,
                    Self::linear(false_easting),
                ),
                (
                    registry::EPSG_CODE_PARAMETER_FALSE_NORTHING,
                    Self::linear(false_northing),
                ),
            ],
        )
    }

    pub fn create_hotine_oblique_mercator_variant_a(
        properties: Properties,
        latitude_centre: f64,
        longitude_centre: f64,
        azimuth: f64,
        rectified_grid_angle: f64,
        scale: f64,
        false_easting: f64,
        false_northing: f64,
    ) -> GeodeticResult<Self> {
        Self::from_mapping_code(
            properties,
            registry::EPSG_CODE_METHOD_HOTINE_OBLIQUE_MERCATOR_VARIANT_A,
            vec![
                (
                    registry::EPSG_CODE_PARAMETER_LATITUDE_PROJECTION_CENTRE,
                    Self::angular(latitude_centre),
                ),
                (
                    registry::EPSG_CODE_PARAMETER_LONGITUDE_PROJECTION_CENTRE,
                    Self::angular(longitude_centre),
                ),
                (
                    registry::EPSG_CODE_PARAMETER_AZIMUTH_INITIAL_LINE,
                    Self::angular(azimuth),
                ),
                (
                    registry::EPSG_CODE_PARAMETER_ANGLE_RECTIFIED_TO_SKEW_GRID,
                    Self::angular(rectified_grid_angle),
                ),
                (
                    registry::EPSG_CODE_PARAMETER_SCALE_FACTOR_INITIAL_LINE,
                    Self::scale(scale),
                ),
                (
                    registry::EPSG_CODE_PARAMETER_FALSE_EASTING,
                    Self::linear(false_easting),
                ),
                (
                    registry::EPSG_CODE_PARAMETER_FALSE_NORTHING,
                    Self::linear(false_northing),
                ),
            ],
        )
    }

    pub fn create_hotine_oblique_mercator_variant_b(
        properties: Properties,
        latitude_centre: f64,
        longitude_centre: f64,
        azimuth: f64,
        rectified_grid_angle: f64,
        scale: f64,
        easting_centre: f64,
        northing_centre: f64,
    ) -> GeodeticResult<Self> {
        Self::from_mapping_code(
            properties,
            registry::EPSG_CODE_METHOD_HOTINE_OBLIQUE_MERCATOR_VARIANT_B,
            vec![
                (
                    registry::EPSG_CODE_PARAMETER_LATITUDE_PROJECTION_CENTRE,
                    Self::angular(latitude_centre),
                ),
                (
                    registry::EPSG_CODE_PARAMETER_LONGITUDE_PROJECTION_CENTRE,
                    Self::angular(longitude_centre),
                ),
                (
                    registry::EPSG_CODE_PARAMETER_AZIMUTH_INITIAL_LINE,
                    Self::angular(azimuth),
                ),
                (
                    registry::EPSG_CODE_PARAMETER_ANGLE_RECTIFIED_TO_SKEW_GRID,
                    Self::angular(rectified_grid_angle),
                ),
                (
                    registry::EPSG_CODE_PARAMETER_SCALE_FACTOR_INITIAL_LINE,
                    Self::scale(scale),
                ),
                (
                    registry::EPSG_CODE_PARAMETER_EASTING_PROJECTION_CENTRE,
                    Self::linear(easting_centre),
                ),
                (
                    registry::EPSG_CODE_PARAMETER_NORTHING_PROJECTION_CENTRE,
                    Self::linear(northing_centre),
                ),
            ],
        )
    }

    fn krovak_values(
        latitude_centre: f64,
        longitude_origin: f64,
        colatitude_cone_axis: f64,
        latitude_pseudo_parallel: f64,
        scale_pseudo_parallel: f64,
        false_easting: f64,
        false_northing: f64,
    ) -> Vec<(u16, Measure)> {
        vec![
            (
                registry::EPSG_CODE_PARAMETER_LATITUDE_PROJECTION_CENTRE,
                Self::angular(latitude_centre),
            ),
            (
                registry::EPSG_CODE_PARAMETER_LONGITUDE_OF_ORIGIN,
                Self::angular(longitude_origin),
            ),
            (
                registry::EPSG_CODE_PARAMETER_COLATITUDE_CONE_AXIS,
                Self::angular(colatitude_cone_axis),
            ),
            (
                registry::EPSG_CODE_PARAMETER_LATITUDE_PSEUDO_STANDARD_PARALLEL,
                Self::angular(latitude_pseudo_parallel),
            ),
            (
                registry::EPSG_CODE_PARAMETER_SCALE_FACTOR_PSEUDO_STANDARD_PARALLEL,
                Self::scale(scale_pseudo_parallel),
            ),
            (
                registry::EPSG_CODE_PARAMETER_FALSE_EASTING,
                Self::linear(false_easting),
            ),
            (
                registry::EPSG_CODE_PARAMETER_FALSE_NORTHING,
                Self::linear(false_northing),
            ),
        ]
    }

    /// Krovak with the east-north orientation, EPSG:1041
    pub fn create_krovak_north_oriented(
        properties: Properties,
        latitude_centre: f64,
        longitude_origin: f64,
        colatitude_cone_axis: f64,
        latitude_pseudo_parallel: f64,
        scale_pseudo_parallel: f64,
        false_easting: f64,
        false_northing: f64,
    ) -> GeodeticResult<Self> {
        Self::from_mapping_code(
            properties,
            registry::EPSG_CODE_METHOD_KROVAK_NORTH_ORIENTED,
            Self::krovak_values(
                latitude_centre,
                longitude_origin,
                colatitude_cone_axis,
                latitude_pseudo_parallel,
                scale_pseudo_parallel,
                false_easting,
                false_northing,
            ),
        )
    }

    /// Classical south-west oriented Krovak, EPSG:9819
    pub fn create_krovak(
        properties: Properties,
        latitude_centre: f64,
        longitude_origin: f64,
        colatitude_cone_axis: f64,
        latitude_pseudo_parallel: f64,
        scale_pseudo_parallel: f64,
        false_easting: f64,
        false_northing: f64,
    ) -> GeodeticResult<Self> {
        Self::from_mapping_code(
            properties,
            registry::EPSG_CODE_METHOD_KROVAK,
            Self::krovak_values(
                latitude_centre,
                longitude_origin,
                colatitude_cone_axis,
                latitude_pseudo_parallel,
                scale_pseudo_parallel,
                false_easting,
                false_northing,
            ),
        )
    }

    /// Longitude rotation, EPSG:9601; offset in arc-seconds
    pub fn create_longitude_rotation(
        properties: Properties,
        offset_arc_seconds: f64,
    ) -> GeodeticResult<Self> {
        let method = OperationMethod {
            base: {
                let mut base =
                    crate::common::IdentifiedObject::named(registry::EPSG_NAME_METHOD_LONGITUDE_ROTATION);
                base.identifiers.push(crate::common::Identifier::epsg(
                    registry::EPSG_CODE_METHOD_LONGITUDE_ROTATION as u32,
                ));
                base
            },
            parameters: vec![OperationParameter::epsg(
                registry::EPSG_NAME_PARAMETER_LONGITUDE_OFFSET,
                registry::EPSG_CODE_PARAMETER_LONGITUDE_OFFSET,
            )],
        };
        let values = vec![OperationParameterValue::measure(
            OperationParameter::epsg(
                registry::EPSG_NAME_PARAMETER_LONGITUDE_OFFSET,
                registry::EPSG_CODE_PARAMETER_LONGITUDE_OFFSET,
            ),
            Measure::new(offset_arc_seconds, ARC_SECOND.clone()),
        )];
        Conversion::create(properties, method, values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::unit::DEGREE;

    #[test]
    fn test_utm_normalization() {
        let utm = Conversion::create_utm(Properties::default(), 31, true).unwrap();
        assert_eq!(utm.name(), "UTM zone 31N");
        assert_eq!(
            utm.parameter_value_in(registry::EPSG_CODE_PARAMETER_LONGITUDE_OF_NATURAL_ORIGIN, &DEGREE),
            Some(3.0)
        );
        assert_eq!(
            utm.parameter_value(registry::EPSG_CODE_PARAMETER_SCALE_FACTOR_AT_NATURAL_ORIGIN)
                .and_then(|v| v.value.numeric_value()),
            Some(0.9996)
        );

        let south = Conversion::create_utm(Properties::default(), 17, false).unwrap();
        assert_eq!(
            south
                .parameter_value(registry::EPSG_CODE_PARAMETER_FALSE_NORTHING)
                .and_then(|v| v.value.numeric_value()),
            Some(10000000.0)
        );

        assert!(Conversion::create_utm(Properties::default(), 0, true).is_err());
        assert!(Conversion::create_utm(Properties::default(), 61, true).is_err());
    }

    #[test]
    fn test_unknown_method_preserved() {
        let conv = Conversion::create_from_method_name_and_params(
            Properties::named("weird"),
            "Totally Custom Projection",
            &[("some_parameter", Measure::new(12.0, DEGREE.clone()))],
        )
        .unwrap();
        assert!(conv.mapping().is_none());
        assert_eq!(conv.values.len(), 1);
        assert_eq!(conv.values[0].parameter.name(), "some_parameter");
    }

    #[test]
    fn test_longitude_rotation_predicate() {
        let rot = Conversion::create_longitude_rotation(Properties::named("Paris to Greenwich"), 8414.975)
            .unwrap();
        assert!(rot.is_longitude_rotation());

        let utm = Conversion::create_utm(Properties::default(), 31, true).unwrap();
        assert!(!utm.is_longitude_rotation());
    }

    #[test]
    fn test_registry_binding_from_wkt1_names() {
        let conv = Conversion::create_from_method_name_and_params(
            Properties::named("proj"),
            "Transverse_Mercator",
            &[
                ("central_meridian", Measure::new(3.0, DEGREE.clone())),
                ("false_easting", Measure::new(500000.0, METRE.clone())),
            ],
        )
        .unwrap();
        // parameters resolved to canonical EPSG identities
        assert_eq!(
            conv.values[0].parameter.epsg_code(),
            Some(registry::EPSG_CODE_PARAMETER_LONGITUDE_OF_NATURAL_ORIGIN as u32)
        );
        assert_eq!(
            conv.values[1].parameter.epsg_code(),
            Some(registry::EPSG_CODE_PARAMETER_FALSE_EASTING as u32)
        );
    }
}
