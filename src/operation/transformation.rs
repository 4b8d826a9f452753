//! Transformations: coordinate operations between datums

use crate::common::unit::{ARC_SECOND, METRE, PARTS_PER_MILLION, UNITY};
use crate::common::{Measure, ObjectUsage, Properties, Unit};
use crate::crs::Crs;
use crate::errors::{GeodeticError, GeodeticResult};
use crate::operation::registry;
use crate::operation::{
    parameter_value_by_code, CoordinateOperation, OperationMethod, OperationParameter,
    OperationParameterValue, ParameterValue,
};
use std::sync::Arc;

/// Methods whose parameters form a 3-parameter geocentric translation
const GEOCENTRIC_TRANSLATION_CODES: [u16; 3] = [
    registry::EPSG_CODE_METHOD_GEOCENTRIC_TRANSLATION_GEOCENTRIC,
    registry::EPSG_CODE_METHOD_GEOCENTRIC_TRANSLATION_GEOGRAPHIC_2D,
    registry::EPSG_CODE_METHOD_GEOCENTRIC_TRANSLATION_GEOGRAPHIC_3D,
];

/// Methods using the position-vector rotation convention
const POSITION_VECTOR_CODES: [u16; 3] = [
    registry::EPSG_CODE_METHOD_POSITION_VECTOR_GEOCENTRIC,
    registry::EPSG_CODE_METHOD_POSITION_VECTOR_GEOGRAPHIC_2D,
    registry::EPSG_CODE_METHOD_POSITION_VECTOR_GEOGRAPHIC_3D,
];

/// Methods using the coordinate-frame rotation convention
const COORDINATE_FRAME_CODES: [u16; 3] = [
    registry::EPSG_CODE_METHOD_COORDINATE_FRAME_GEOCENTRIC,
    registry::EPSG_CODE_METHOD_COORDINATE_FRAME_GEOGRAPHIC_2D,
    registry::EPSG_CODE_METHOD_COORDINATE_FRAME_GEOGRAPHIC_3D,
];

/// An empirically-defined operation between two datums
#[derive(Debug, Clone, PartialEq)]
pub struct Transformation {
    pub usage: ObjectUsage,
    pub method: OperationMethod,
    pub values: Vec<OperationParameterValue>,
    source: Arc<Crs>,
    target: Arc<Crs>,
    /// Positional accuracies in metres
    pub accuracies: Vec<f64>,
}

impl Transformation {
    pub fn create(
        properties: Properties,
        source: Arc<Crs>,
        target: Arc<Crs>,
        method: OperationMethod,
        values: Vec<OperationParameterValue>,
        accuracies: Vec<f64>,
    ) -> GeodeticResult<Self> {
        Ok(Transformation {
            usage: properties.build_usage(),
            method,
            values,
            source,
            target,
            accuracies,
        })
    }

    pub fn name(&self) -> &str {
        self.usage.name()
    }

    pub fn source_crs(&self) -> &Arc<Crs> {
        &self.source
    }

    pub fn target_crs(&self) -> &Arc<Crs> {
        &self.target
    }

    fn method_code(&self) -> Option<u16> {
        self.method.epsg_code().map(|c| c as u16)
    }

    fn method_with_epsg(name: &str, code: u16) -> OperationMethod {
        let mut method = OperationMethod::named(name);
        method
            .base
            .identifiers
            .push(crate::common::Identifier::epsg(code as u32));
        method
    }

    fn helmert_translations(tx: f64, ty: f64, tz: f64) -> Vec<OperationParameterValue> {
        vec![
            OperationParameterValue::measure(
                OperationParameter::epsg(
                    registry::EPSG_NAME_PARAMETER_X_AXIS_TRANSLATION,
                    registry::EPSG_CODE_PARAMETER_X_AXIS_TRANSLATION,
                ),
                Measure::new(tx, METRE.clone()),
            ),
            OperationParameterValue::measure(
                OperationParameter::epsg(
                    registry::EPSG_NAME_PARAMETER_Y_AXIS_TRANSLATION,
                    registry::EPSG_CODE_PARAMETER_Y_AXIS_TRANSLATION,
                ),
                Measure::new(ty, METRE.clone()),
            ),
            OperationParameterValue::measure(
                OperationParameter::epsg(
                    registry::EPSG_NAME_PARAMETER_Z_AXIS_TRANSLATION,
                    registry::EPSG_CODE_PARAMETER_Z_AXIS_TRANSLATION,
                ),
                Measure::new(tz, METRE.clone()),
            ),
        ]
    }

    fn helmert_seven(
        tx: f64,
        ty: f64,
        tz: f64,
        rx: f64,
        ry: f64,
        rz: f64,
        scale_ppm: f64,
    ) -> Vec<OperationParameterValue> {
        let mut values = Self::helmert_translations(tx, ty, tz);
        values.push(OperationParameterValue::measure(
            OperationParameter::epsg(
                registry::EPSG_NAME_PARAMETER_X_AXIS_ROTATION,
                registry::EPSG_CODE_PARAMETER_X_AXIS_ROTATION,
            ),
            Measure::new(rx, ARC_SECOND.clone()),
        ));
        values.push(OperationParameterValue::measure(
            OperationParameter::epsg(
                registry::EPSG_NAME_PARAMETER_Y_AXIS_ROTATION,
                registry::EPSG_CODE_PARAMETER_Y_AXIS_ROTATION,
            ),
            Measure::new(ry, ARC_SECOND.clone()),
        ));
        values.push(OperationParameterValue::measure(
            OperationParameter::epsg(
                registry::EPSG_NAME_PARAMETER_Z_AXIS_ROTATION,
                registry::EPSG_CODE_PARAMETER_Z_AXIS_ROTATION,
            ),
            Measure::new(rz, ARC_SECOND.clone()),
        ));
        values.push(OperationParameterValue::measure(
            OperationParameter::epsg(
                registry::EPSG_NAME_PARAMETER_SCALE_DIFFERENCE,
                registry::EPSG_CODE_PARAMETER_SCALE_DIFFERENCE,
            ),
            Measure::new(scale_ppm, PARTS_PER_MILLION.clone()),
        ));
        values
    }

    /// Geocentric translations; `code` selects the geocentric / geog2D /
    /// geog3D domain variant
    pub fn create_geocentric_translations(
        properties: Properties,
        source: Arc<Crs>,
        target: Arc<Crs>,
        code: u16,
        tx: f64,
        ty: f64,
        tz: f64,
        accuracies: Vec<f64>,
    ) -> GeodeticResult<Self> {
        if !GEOCENTRIC_TRANSLATION_CODES.contains(&code) {
            return Err(GeodeticError::InvariantViolation(format!(
                "EPSG:{} is not a geocentric-translation method",
                code
            )));
        }
        let name = match code {
            registry::EPSG_CODE_METHOD_GEOCENTRIC_TRANSLATION_GEOCENTRIC => {
                registry::EPSG_NAME_METHOD_GEOCENTRIC_TRANSLATION_GEOCENTRIC
            }
            registry::EPSG_CODE_METHOD_GEOCENTRIC_TRANSLATION_GEOGRAPHIC_3D => {
                registry::EPSG_NAME_METHOD_GEOCENTRIC_TRANSLATION_GEOGRAPHIC_3D
            }
            _ => registry::EPSG_NAME_METHOD_GEOCENTRIC_TRANSLATION_GEOGRAPHIC_2D,
        };
        Transformation::create(
            properties,
            source,
            target,
            Self::method_with_epsg(name, code),
            Self::helmert_translations(tx, ty, tz),
            accuracies,
        )
    }

    /// Position Vector transformation; `code` selects the domain variant
    pub fn create_position_vector(
        properties: Properties,
        source: Arc<Crs>,
        target: Arc<Crs>,
        code: u16,
        tx: f64,
        ty: f64,
        tz: f64,
        rx: f64,
        ry: f64,
        rz: f64,
        scale_ppm: f64,
        accuracies: Vec<f64>,
    ) -> GeodeticResult<Self> {
        if !POSITION_VECTOR_CODES.contains(&code) {
            return Err(GeodeticError::InvariantViolation(format!(
                "EPSG:{} is not a position-vector method",
                code
            )));
        }
        let name = match code {
            registry::EPSG_CODE_METHOD_POSITION_VECTOR_GEOCENTRIC => {
                registry::EPSG_NAME_METHOD_POSITION_VECTOR_GEOCENTRIC
            }
            registry::EPSG_CODE_METHOD_POSITION_VECTOR_GEOGRAPHIC_3D => {
                registry::EPSG_NAME_METHOD_POSITION_VECTOR_GEOGRAPHIC_3D
            }
            _ => registry::EPSG_NAME_METHOD_POSITION_VECTOR_GEOGRAPHIC_2D,
        };
        Transformation::create(
            properties,
            source,
            target,
            Self::method_with_epsg(name, code),
            Self::helmert_seven(tx, ty, tz, rx, ry, rz, scale_ppm),
            accuracies,
        )
    }

    /// Coordinate Frame rotation; `code` selects the domain variant
    pub fn create_coordinate_frame(
        properties: Properties,
        source: Arc<Crs>,
        target: Arc<Crs>,
        code: u16,
        tx: f64,
        ty: f64,
        tz: f64,
        rx: f64,
        ry: f64,
        rz: f64,
        scale_ppm: f64,
        accuracies: Vec<f64>,
    ) -> GeodeticResult<Self> {
        if !COORDINATE_FRAME_CODES.contains(&code) {
            return Err(GeodeticError::InvariantViolation(format!(
                "EPSG:{} is not a coordinate-frame method",
                code
            )));
        }
        let name = match code {
            registry::EPSG_CODE_METHOD_COORDINATE_FRAME_GEOCENTRIC => {
                registry::EPSG_NAME_METHOD_COORDINATE_FRAME_GEOCENTRIC
            }
            registry::EPSG_CODE_METHOD_COORDINATE_FRAME_GEOGRAPHIC_3D => {
                registry::EPSG_NAME_METHOD_COORDINATE_FRAME_GEOGRAPHIC_3D
            }
            _ => registry::EPSG_NAME_METHOD_COORDINATE_FRAME_GEOGRAPHIC_2D,
        };
        Transformation::create(
            properties,
            source,
            target,
            Self::method_with_epsg(name, code),
            Self::helmert_seven(tx, ty, tz, rx, ry, rz, scale_ppm),
            accuracies,
        )
    }

    /// Time-dependent Helmert variant; `code` must be in 1053..=1058
    #[allow(clippy::too_many_arguments)]
    pub fn create_time_dependent_helmert(
        properties: Properties,
        source: Arc<Crs>,
        target: Arc<Crs>,
        code: u16,
        tx: f64,
        ty: f64,
        tz: f64,
        rx: f64,
        ry: f64,
        rz: f64,
        scale_ppm: f64,
        rates: [f64; 7],
        reference_epoch_year: f64,
        accuracies: Vec<f64>,
    ) -> GeodeticResult<Self> {
        let name = match code {
            registry::EPSG_CODE_METHOD_TIME_DEPENDENT_POSITION_VECTOR_GEOCENTRIC => {
                "Time-dependent Position Vector tfm (geocentric)"
            }
            registry::EPSG_CODE_METHOD_TIME_DEPENDENT_POSITION_VECTOR_GEOGRAPHIC_2D => {
                "Time-dependent Position Vector tfm (geog2D)"
            }
            registry::EPSG_CODE_METHOD_TIME_DEPENDENT_POSITION_VECTOR_GEOGRAPHIC_3D => {
                "Time-dependent Position Vector tfm (geog3D)"
            }
            registry::EPSG_CODE_METHOD_TIME_DEPENDENT_COORDINATE_FRAME_GEOCENTRIC => {
                "Time-dependent Coordinate Frame rotation (geocen)"
            }
            registry::EPSG_CODE_METHOD_TIME_DEPENDENT_COORDINATE_FRAME_GEOGRAPHIC_2D => {
                "Time-dependent Coordinate Frame rotation (geog2D)"
            }
            registry::EPSG_CODE_METHOD_TIME_DEPENDENT_COORDINATE_FRAME_GEOGRAPHIC_3D => {
                "Time-dependent Coordinate Frame rotation (geog3D)"
            }
            other => {
                return Err(GeodeticError::InvariantViolation(format!(
                    "EPSG:{} is not a time-dependent Helmert method",
                    other
                )))
            }
        };
        let mut values = Self::helmert_seven(tx, ty, tz, rx, ry, rz, scale_ppm);
        let rate_names = [
            ("Rate of change of X-axis translation", registry::EPSG_CODE_PARAMETER_RATE_X_AXIS_TRANSLATION),
            ("Rate of change of Y-axis translation", registry::EPSG_CODE_PARAMETER_RATE_Y_AXIS_TRANSLATION),
            ("Rate of change of Z-axis translation", registry::EPSG_CODE_PARAMETER_RATE_Z_AXIS_TRANSLATION),
            ("Rate of change of X-axis rotation", registry::EPSG_CODE_PARAMETER_RATE_X_AXIS_ROTATION),
            ("Rate of change of Y-axis rotation", registry::EPSG_CODE_PARAMETER_RATE_Y_AXIS_ROTATION),
            ("Rate of change of Z-axis rotation", registry::EPSG_CODE_PARAMETER_RATE_Z_AXIS_ROTATION),
            ("Rate of change of Scale difference", registry::EPSG_CODE_PARAMETER_RATE_SCALE_DIFFERENCE),
        ];
        for ((param_name, param_code), rate) in rate_names.iter().zip(rates.iter()) {
            let unit = match *param_code {
                registry::EPSG_CODE_PARAMETER_RATE_SCALE_DIFFERENCE => PARTS_PER_MILLION.clone(),
                registry::EPSG_CODE_PARAMETER_RATE_X_AXIS_ROTATION
                | registry::EPSG_CODE_PARAMETER_RATE_Y_AXIS_ROTATION
                | registry::EPSG_CODE_PARAMETER_RATE_Z_AXIS_ROTATION => ARC_SECOND.clone(),
                _ => METRE.clone(),
            };
            values.push(OperationParameterValue::measure(
                OperationParameter::epsg(param_name, *param_code),
                Measure::new(*rate, unit),
            ));
        }
        values.push(OperationParameterValue::measure(
            OperationParameter::epsg(
                "Parameter reference epoch",
                registry::EPSG_CODE_PARAMETER_REFERENCE_EPOCH,
            ),
            Measure::new(reference_epoch_year, crate::common::unit::YEAR.clone()),
        ));
        Transformation::create(
            properties,
            source,
            target,
            Self::method_with_epsg(name, code),
            values,
            accuracies,
        )
    }

    /// Molodensky, EPSG:9604 (or Abridged Molodensky, EPSG:9605)
    pub fn create_molodensky(
        properties: Properties,
        source: Arc<Crs>,
        target: Arc<Crs>,
        abridged: bool,
        tx: f64,
        ty: f64,
        tz: f64,
        semi_major_difference: f64,
        flattening_difference: f64,
        accuracies: Vec<f64>,
    ) -> GeodeticResult<Self> {
        let (name, code) = if abridged {
            (
                registry::EPSG_NAME_METHOD_ABRIDGED_MOLODENSKY,
                registry::EPSG_CODE_METHOD_ABRIDGED_MOLODENSKY,
            )
        } else {
            (
                registry::EPSG_NAME_METHOD_MOLODENSKY,
                registry::EPSG_CODE_METHOD_MOLODENSKY,
            )
        };
        let mut values = Self::helmert_translations(tx, ty, tz);
        values.push(OperationParameterValue::measure(
            OperationParameter::epsg(
                registry::EPSG_NAME_PARAMETER_SEMI_MAJOR_AXIS_DIFFERENCE,
                registry::EPSG_CODE_PARAMETER_SEMI_MAJOR_AXIS_DIFFERENCE,
            ),
            Measure::new(semi_major_difference, METRE.clone()),
        ));
        values.push(OperationParameterValue::measure(
            OperationParameter::epsg(
                registry::EPSG_NAME_PARAMETER_FLATTENING_DIFFERENCE,
                registry::EPSG_CODE_PARAMETER_FLATTENING_DIFFERENCE,
            ),
            Measure::new(flattening_difference, UNITY.clone()),
        ));
        Transformation::create(
            properties,
            source,
            target,
            Self::method_with_epsg(name, code),
            values,
            accuracies,
        )
    }

    fn grid_file_transformation(
        properties: Properties,
        source: Arc<Crs>,
        target: Arc<Crs>,
        method_name: &str,
        method_code: u16,
        param_name: &str,
        param_code: u16,
        filename: &str,
        accuracies: Vec<f64>,
    ) -> GeodeticResult<Self> {
        Transformation::create(
            properties,
            source,
            target,
            Self::method_with_epsg(method_name, method_code),
            vec![OperationParameterValue::filename(
                OperationParameter::epsg(param_name, param_code),
                filename,
            )],
            accuracies,
        )
    }

    /// NTv1, EPSG:9614
    pub fn create_ntv1(
        properties: Properties,
        source: Arc<Crs>,
        target: Arc<Crs>,
        filename: &str,
        accuracies: Vec<f64>,
    ) -> GeodeticResult<Self> {
        Self::grid_file_transformation(
            properties,
            source,
            target,
            registry::EPSG_NAME_METHOD_NTV1,
            registry::EPSG_CODE_METHOD_NTV1,
            registry::EPSG_NAME_PARAMETER_LATITUDE_LONGITUDE_DIFFERENCE_FILE,
            registry::EPSG_CODE_PARAMETER_LATITUDE_LONGITUDE_DIFFERENCE_FILE,
            filename,
            accuracies,
        )
    }

    /// NTv2, EPSG:9615
    pub fn create_ntv2(
        properties: Properties,
        source: Arc<Crs>,
        target: Arc<Crs>,
        filename: &str,
        accuracies: Vec<f64>,
    ) -> GeodeticResult<Self> {
        Self::grid_file_transformation(
            properties,
            source,
            target,
            registry::EPSG_NAME_METHOD_NTV2,
            registry::EPSG_CODE_METHOD_NTV2,
            registry::EPSG_NAME_PARAMETER_LATITUDE_LONGITUDE_DIFFERENCE_FILE,
            registry::EPSG_CODE_PARAMETER_LATITUDE_LONGITUDE_DIFFERENCE_FILE,
            filename,
            accuracies,
        )
    }

    /// NADCON, EPSG:9613: separate latitude and longitude shift files
    pub fn create_nadcon(
        properties: Properties,
        source: Arc<Crs>,
        target: Arc<Crs>,
        latitude_file: &str,
        longitude_file: &str,
        accuracies: Vec<f64>,
    ) -> GeodeticResult<Self> {
        Transformation::create(
            properties,
            source,
            target,
            Self::method_with_epsg(
                registry::EPSG_NAME_METHOD_NADCON,
                registry::EPSG_CODE_METHOD_NADCON,
            ),
            vec![
                OperationParameterValue::filename(
                    OperationParameter::epsg(
                        registry::EPSG_NAME_PARAMETER_LATITUDE_DIFFERENCE_FILE,
                        registry::EPSG_CODE_PARAMETER_LATITUDE_DIFFERENCE_FILE,
                    ),
                    latitude_file,
                ),
                OperationParameterValue::filename(
                    OperationParameter::epsg(
                        registry::EPSG_NAME_PARAMETER_LONGITUDE_DIFFERENCE_FILE,
                        registry::EPSG_CODE_PARAMETER_LONGITUDE_DIFFERENCE_FILE,
                    ),
                    longitude_file,
                ),
            ],
            accuracies,
        )
    }

    /// VERTCON, EPSG:9658
    pub fn create_vertcon(
        properties: Properties,
        source: Arc<Crs>,
        target: Arc<Crs>,
        filename: &str,
        accuracies: Vec<f64>,
    ) -> GeodeticResult<Self> {
        Self::grid_file_transformation(
            properties,
            source,
            target,
            registry::EPSG_NAME_METHOD_VERTCON,
            registry::EPSG_CODE_METHOD_VERTCON,
            registry::EPSG_NAME_PARAMETER_VERTICAL_OFFSET_FILE,
            registry::EPSG_CODE_PARAMETER_VERTICAL_OFFSET_FILE,
            filename,
            accuracies,
        )
    }

    /// GravityRelatedHeight to Geographic3D, the WKT2-only geoid model method
    pub fn create_gravity_related_height_to_geographic3d(
        properties: Properties,
        source: Arc<Crs>,
        target: Arc<Crs>,
        filename: &str,
        accuracies: Vec<f64>,
    ) -> GeodeticResult<Self> {
        Transformation::create(
            properties,
            source,
            target,
            OperationMethod::named(registry::PROJ_WKT2_NAME_METHOD_HEIGHT_TO_GEOG3D),
            vec![OperationParameterValue::filename(
                OperationParameter::epsg(
                    registry::EPSG_NAME_PARAMETER_GEOID_CORRECTION_FILENAME,
                    registry::EPSG_CODE_PARAMETER_GEOID_CORRECTION_FILENAME,
                ),
                filename,
            )],
            accuracies,
        )
    }

    /// Change of Vertical Unit, EPSG:1069
    pub fn create_change_vertical_unit(
        properties: Properties,
        source: Arc<Crs>,
        target: Arc<Crs>,
        factor: f64,
        accuracies: Vec<f64>,
    ) -> GeodeticResult<Self> {
        Transformation::create(
            properties,
            source,
            target,
            Self::method_with_epsg(
                registry::EPSG_NAME_METHOD_CHANGE_VERTICAL_UNIT,
                registry::EPSG_CODE_METHOD_CHANGE_VERTICAL_UNIT,
            ),
            vec![OperationParameterValue::measure(
                OperationParameter::epsg(
                    registry::EPSG_NAME_PARAMETER_UNIT_CONVERSION_SCALAR,
                    registry::EPSG_CODE_PARAMETER_UNIT_CONVERSION_SCALAR,
                ),
                Measure::new(factor, UNITY.clone()),
            )],
            accuracies,
        )
    }

    /// Longitude rotation, EPSG:9601, as a datum-level operation
    pub fn create_longitude_rotation(
        properties: Properties,
        source: Arc<Crs>,
        target: Arc<Crs>,
        offset: Measure,
        accuracies: Vec<f64>,
    ) -> GeodeticResult<Self> {
        Transformation::create(
            properties,
            source,
            target,
            Self::method_with_epsg(
                registry::EPSG_NAME_METHOD_LONGITUDE_ROTATION,
                registry::EPSG_CODE_METHOD_LONGITUDE_ROTATION,
            ),
            vec![OperationParameterValue::measure(
                OperationParameter::epsg(
                    registry::EPSG_NAME_PARAMETER_LONGITUDE_OFFSET,
                    registry::EPSG_CODE_PARAMETER_LONGITUDE_OFFSET,
                ),
                offset,
            )],
            accuracies,
        )
    }

    /// Geographic2D offsets, EPSG:9619
    pub fn create_geographic2d_offsets(
        properties: Properties,
        source: Arc<Crs>,
        target: Arc<Crs>,
        latitude_offset: Measure,
        longitude_offset: Measure,
        accuracies: Vec<f64>,
    ) -> GeodeticResult<Self> {
        Transformation::create(
            properties,
            source,
            target,
            Self::method_with_epsg(
                registry::EPSG_NAME_METHOD_GEOGRAPHIC2D_OFFSETS,
                registry::EPSG_CODE_METHOD_GEOGRAPHIC2D_OFFSETS,
            ),
            vec![
                OperationParameterValue::measure(
                    OperationParameter::epsg(
                        registry::EPSG_NAME_PARAMETER_LATITUDE_OFFSET,
                        registry::EPSG_CODE_PARAMETER_LATITUDE_OFFSET,
                    ),
                    latitude_offset,
                ),
                OperationParameterValue::measure(
                    OperationParameter::epsg(
                        registry::EPSG_NAME_PARAMETER_LONGITUDE_OFFSET,
                        registry::EPSG_CODE_PARAMETER_LONGITUDE_OFFSET,
                    ),
                    longitude_offset,
                ),
            ],
            accuracies,
        )
    }

    /// Geographic3D offsets, EPSG:9660
    pub fn create_geographic3d_offsets(
        properties: Properties,
        source: Arc<Crs>,
        target: Arc<Crs>,
        latitude_offset: Measure,
        longitude_offset: Measure,
        vertical_offset: Measure,
        accuracies: Vec<f64>,
    ) -> GeodeticResult<Self> {
        Transformation::create(
            properties,
            source,
            target,
            Self::method_with_epsg(
                registry::EPSG_NAME_METHOD_GEOGRAPHIC3D_OFFSETS,
                registry::EPSG_CODE_METHOD_GEOGRAPHIC3D_OFFSETS,
            ),
            vec![
                OperationParameterValue::measure(
                    OperationParameter::epsg(
                        registry::EPSG_NAME_PARAMETER_LATITUDE_OFFSET,
                        registry::EPSG_CODE_PARAMETER_LATITUDE_OFFSET,
                    ),
                    latitude_offset,
                ),
                OperationParameterValue::measure(
                    OperationParameter::epsg(
                        registry::EPSG_NAME_PARAMETER_LONGITUDE_OFFSET,
                        registry::EPSG_CODE_PARAMETER_LONGITUDE_OFFSET,
                    ),
                    longitude_offset,
                ),
                OperationParameterValue::measure(
                    OperationParameter::epsg(
                        registry::EPSG_NAME_PARAMETER_VERTICAL_OFFSET,
                        registry::EPSG_CODE_PARAMETER_VERTICAL_OFFSET,
                    ),
                    vertical_offset,
                ),
            ],
            accuracies,
        )
    }

    /// Affine parametric transformation, EPSG:9624
    pub fn create_affine_parametric(
        properties: Properties,
        source: Arc<Crs>,
        target: Arc<Crs>,
        a0: f64,
        a1: f64,
        a2: f64,
        b0: f64,
        b1: f64,
        b2: f64,
        accuracies: Vec<f64>,
    ) -> GeodeticResult<Self> {
        let coefficients = [
            ("A0", registry::EPSG_CODE_PARAMETER_A0, a0),
            ("A1", registry::EPSG_CODE_PARAMETER_A1, a1),
            ("A2", registry::EPSG_CODE_PARAMETER_A2, a2),
            ("B0", registry::EPSG_CODE_PARAMETER_B0, b0),
            ("B1", registry::EPSG_CODE_PARAMETER_B1, b1),
            ("B2", registry::EPSG_CODE_PARAMETER_B2, b2),
        ];
        Transformation::create(
            properties,
            source,
            target,
            Self::method_with_epsg(
                registry::EPSG_NAME_METHOD_AFFINE_PARAMETRIC_TRANSFORMATION,
                registry::EPSG_CODE_METHOD_AFFINE_PARAMETRIC_TRANSFORMATION,
            ),
            coefficients
                .iter()
                .map(|(name, code, value)| {
                    OperationParameterValue::measure(
                        OperationParameter::epsg(name, *code),
                        Measure::new(*value, UNITY.clone()),
                    )
                })
                .collect(),
            accuracies,
        )
    }

    /// The TOWGS84 7-tuple (tx, ty, tz, rx, ry, rz, s) when the method is a
    /// Helmert variant, or the 3-tuple for geocentric translations
    ///
    /// Values are converted to metres, arc-seconds and ppm. Coordinate-frame
    /// rotations are negated into the position-vector convention WKT1 uses.
    pub fn towgs84_parameters(&self) -> GeodeticResult<Vec<f64>> {
        let code = self.method_code().ok_or_else(|| {
            GeodeticError::UnsupportedOperation(format!(
                "method '{}' has no EPSG code",
                self.method.name()
            ))
        })?;

        let translation_codes = [
            registry::EPSG_CODE_PARAMETER_X_AXIS_TRANSLATION,
            registry::EPSG_CODE_PARAMETER_Y_AXIS_TRANSLATION,
            registry::EPSG_CODE_PARAMETER_Z_AXIS_TRANSLATION,
        ];
        let rotation_codes = [
            registry::EPSG_CODE_PARAMETER_X_AXIS_ROTATION,
            registry::EPSG_CODE_PARAMETER_Y_AXIS_ROTATION,
            registry::EPSG_CODE_PARAMETER_Z_AXIS_ROTATION,
        ];

        let value_in = |param_code: u16, unit: &Unit| -> GeodeticResult<f64> {
            match parameter_value_by_code(&self.values, param_code).map(|v| &v.value) {
                Some(ParameterValue::Measure(m)) => {
                    Ok(m.convert_to_unit(unit)?.value())
                }
                _ => Err(GeodeticError::NotFound(format!(
                    "Helmert parameter EPSG:{}",
                    param_code
                ))),
            }
        };

        if GEOCENTRIC_TRANSLATION_CODES.contains(&code) {
            let mut out = Vec::with_capacity(3);
            for param_code in translation_codes {
                out.push(value_in(param_code, &METRE)?);
            }
            return Ok(out);
        }

        let position_vector = POSITION_VECTOR_CODES.contains(&code);
        let coordinate_frame = COORDINATE_FRAME_CODES.contains(&code);
        if !position_vector && !coordinate_frame {
            return Err(GeodeticError::UnsupportedOperation(format!(
                "method '{}' (EPSG:{}) is not a Helmert variant",
                self.method.name(),
                code
            )));
        }

        let mut out = Vec::with_capacity(7);
        for param_code in translation_codes {
            out.push(value_in(param_code, &METRE)?);
        }
        let sign = if coordinate_frame { -1.0 } else { 1.0 };
        for param_code in rotation_codes {
            out.push(sign * value_in(param_code, &ARC_SECOND)?);
        }
        out.push(value_in(
            registry::EPSG_CODE_PARAMETER_SCALE_DIFFERENCE,
            &PARTS_PER_MILLION,
        )?);
        Ok(out)
    }

    /// The grid filename when the transformation is file-based
    pub fn grid_filename(&self) -> Option<&str> {
        self.values.iter().find_map(|v| match &v.value {
            ParameterValue::Filename(f) => Some(f.as_str()),
            _ => None,
        })
    }

    /// True for NTv1/NTv2/NADCON horizontal grid methods
    pub fn is_horizontal_grid_method(&self) -> bool {
        matches!(
            self.method_code(),
            Some(
                registry::EPSG_CODE_METHOD_NTV1
                    | registry::EPSG_CODE_METHOD_NTV2
                    | registry::EPSG_CODE_METHOD_NADCON
            )
        )
    }

    /// True for the geoid-model method lifting heights to geographic 3D
    pub fn is_height_to_geographic3d(&self) -> bool {
        self.method.name() == registry::PROJ_WKT2_NAME_METHOD_HEIGHT_TO_GEOG3D
    }
}

/// An ordered chain of operations whose endpoints must line up
#[derive(Debug, Clone, PartialEq)]
pub struct ConcatenatedOperation {
    pub usage: ObjectUsage,
    pub operations: Vec<CoordinateOperation>,
}

impl ConcatenatedOperation {
    pub fn create(
        properties: Properties,
        operations: Vec<CoordinateOperation>,
    ) -> GeodeticResult<Self> {
        if operations.len() < 2 {
            return Err(GeodeticError::InvariantViolation(
                "concatenated operation requires at least two steps".to_string(),
            ));
        }
        for window in operations.windows(2) {
            let target = window[0].target_crs();
            let source = window[1].source_crs();
            if let (Some(target), Some(source)) = (target, source) {
                if target.name() != source.name() {
                    return Err(GeodeticError::InvariantViolation(format!(
                        "step target '{}' does not match next step source '{}'",
                        target.name(),
                        source.name()
                    )));
                }
            }
        }
        Ok(ConcatenatedOperation {
            usage: properties.build_usage(),
            operations,
        })
    }

    pub fn name(&self) -> &str {
        self.usage.name()
    }

    /// Source of the first step
    pub fn source_crs(&self) -> Option<&Arc<Crs>> {
        self.operations.first().and_then(|op| op.source_crs())
    }

    /// Target of the last step
    pub fn target_crs(&self) -> Option<Arc<Crs>> {
        self.operations.last().and_then(|op| op.target_crs())
    }
}

/// Motion of points over time within one CRS
#[derive(Debug, Clone, PartialEq)]
pub struct PointMotionOperation {
    pub usage: ObjectUsage,
    pub crs: Arc<Crs>,
    pub method: OperationMethod,
    pub values: Vec<OperationParameterValue>,
    pub accuracies: Vec<f64>,
}

impl PointMotionOperation {
    pub fn create(
        properties: Properties,
        crs: Arc<Crs>,
        method: OperationMethod,
        values: Vec<OperationParameterValue>,
        accuracies: Vec<f64>,
    ) -> GeodeticResult<Self> {
        Ok(PointMotionOperation {
            usage: properties.build_usage(),
            crs,
            method,
            values,
            accuracies,
        })
    }

    pub fn name(&self) -> &str {
        self.usage.name()
    }
}
