//! Coordinate operation model
//!
//! Operation methods with their parameter descriptors, parameter values,
//! and the concrete operation kinds: conversions, transformations,
//! concatenated operations and point-motion operations. The method and
//! parameter registry lives in [`registry`].

pub mod conversion;
pub mod registry;
pub mod transformation;

pub use conversion::Conversion;
pub use transformation::{ConcatenatedOperation, PointMotionOperation, Transformation};

use crate::common::{IdentifiedObject, Identifier, Measure};
use crate::crs::Crs;
use crate::errors::{GeodeticError, GeodeticResult};
use crate::operation::registry::MethodMapping;
use std::sync::Arc;

/// The algorithm of a coordinate operation
#[derive(Debug, Clone, PartialEq)]
pub struct OperationMethod {
    pub base: IdentifiedObject,
    pub parameters: Vec<OperationParameter>,
}

impl OperationMethod {
    pub fn named(name: &str) -> Self {
        OperationMethod {
            base: IdentifiedObject::named(name),
            parameters: Vec::new(),
        }
    }

    /// Build a method carrying its EPSG identity from a registry row
    pub fn from_mapping(mapping: &MethodMapping) -> Self {
        let mut base = IdentifiedObject::named(mapping.epsg_name);
        if mapping.epsg_code != 0 {
            base.identifiers.push(Identifier::epsg(mapping.epsg_code as u32));
        }
        OperationMethod {
            base,
            parameters: mapping
                .params
                .iter()
                .map(OperationParameter::from_mapping)
                .collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.base.name
    }

    pub fn epsg_code(&self) -> Option<u32> {
        self.base.epsg_code()
    }
}

/// A parameter descriptor: a name with an optional EPSG code
#[derive(Debug, Clone, PartialEq)]
pub struct OperationParameter {
    pub base: IdentifiedObject,
}

impl OperationParameter {
    pub fn named(name: &str) -> Self {
        OperationParameter {
            base: IdentifiedObject::named(name),
        }
    }

    pub fn epsg(name: &str, code: u16) -> Self {
        let mut base = IdentifiedObject::named(name);
        base.identifiers.push(Identifier::epsg(code as u32));
        OperationParameter { base }
    }

    pub fn from_mapping(mapping: &registry::ParamMapping) -> Self {
        if mapping.epsg_code != 0 {
            OperationParameter::epsg(mapping.epsg_name, mapping.epsg_code)
        } else {
            OperationParameter::named(mapping.epsg_name)
        }
    }

    pub fn name(&self) -> &str {
        &self.base.name
    }

    pub fn epsg_code(&self) -> Option<u32> {
        self.base.epsg_code()
    }

    /// Equivalence by EPSG code when both sides carry one, else by name up
    /// to the equivalent-name table
    pub fn is_equivalent_to(&self, other: &OperationParameter) -> bool {
        if let (Some(a), Some(b)) = (self.epsg_code(), other.epsg_code()) {
            return a == b;
        }
        registry::are_equivalent_parameter_names(self.name(), other.name())
    }
}

/// The value bound to a parameter
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterValue {
    Measure(Measure),
    Integer(i32),
    String(String),
    Filename(String),
    Boolean(bool),
}

impl ParameterValue {
    pub fn numeric_value(&self) -> Option<f64> {
        match self {
            ParameterValue::Measure(m) => Some(m.value()),
            ParameterValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }
}

/// A parameter descriptor bound to its value
#[derive(Debug, Clone, PartialEq)]
pub struct OperationParameterValue {
    pub parameter: OperationParameter,
    pub value: ParameterValue,
}

impl OperationParameterValue {
    pub fn new(parameter: OperationParameter, value: ParameterValue) -> Self {
        OperationParameterValue { parameter, value }
    }

    pub fn measure(parameter: OperationParameter, measure: Measure) -> Self {
        OperationParameterValue {
            parameter,
            value: ParameterValue::Measure(measure),
        }
    }

    pub fn filename(parameter: OperationParameter, path: &str) -> Self {
        OperationParameterValue {
            parameter,
            value: ParameterValue::Filename(path.to_string()),
        }
    }
}

/// Closed set of concrete coordinate operations
#[derive(Debug, Clone, PartialEq)]
pub enum CoordinateOperation {
    Conversion(Conversion),
    Transformation(Transformation),
    Concatenated(ConcatenatedOperation),
    PointMotion(PointMotionOperation),
}

impl CoordinateOperation {
    pub fn name(&self) -> &str {
        match self {
            CoordinateOperation::Conversion(op) => op.name(),
            CoordinateOperation::Transformation(op) => op.name(),
            CoordinateOperation::Concatenated(op) => op.name(),
            CoordinateOperation::PointMotion(op) => op.name(),
        }
    }

    pub fn source_crs(&self) -> Option<&Arc<Crs>> {
        match self {
            CoordinateOperation::Conversion(op) => op.source_crs(),
            CoordinateOperation::Transformation(op) => Some(op.source_crs()),
            CoordinateOperation::Concatenated(op) => op.source_crs(),
            CoordinateOperation::PointMotion(op) => Some(&op.crs),
        }
    }

    pub fn target_crs(&self) -> Option<Arc<Crs>> {
        match self {
            CoordinateOperation::Conversion(op) => op.target_crs(),
            CoordinateOperation::Transformation(op) => Some(op.target_crs().clone()),
            CoordinateOperation::Concatenated(op) => op.target_crs(),
            CoordinateOperation::PointMotion(op) => Some(op.crs.clone()),
        }
    }
}

/// Look up a parameter value by EPSG code within a value list
pub fn parameter_value_by_code(
    values: &[OperationParameterValue],
    code: u16,
) -> Option<&OperationParameterValue> {
    values
        .iter()
        .find(|v| v.parameter.epsg_code() == Some(code as u32))
}

/// Look up a parameter value by name, honoring the equivalence table
pub fn parameter_value_by_name<'a>(
    values: &'a [OperationParameterValue],
    name: &str,
) -> Option<&'a OperationParameterValue> {
    values
        .iter()
        .find(|v| registry::are_equivalent_parameter_names(v.parameter.name(), name))
}

/// A numeric parameter expressed in a specific unit, failing when absent
pub fn required_measure(
    values: &[OperationParameterValue],
    code: u16,
    what: &str,
) -> GeodeticResult<Measure> {
    match parameter_value_by_code(values, code) {
        Some(OperationParameterValue {
            value: ParameterValue::Measure(m),
            ..
        }) => Ok(m.clone()),
        Some(_) => Err(GeodeticError::InvalidValueType(format!(
            "parameter '{}' is not a measure",
            what
        ))),
        None => Err(GeodeticError::NotFound(format!("parameter '{}'", what))),
    }
}
