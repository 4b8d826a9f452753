//! Measures: a numeric value tied to a unit
//!
//! `Length`, `Angle` and `Scale` are thin refinements that restrict the
//! unit kind at construction time; crossing kinds is an error.

use crate::common::unit::{self, Unit, UnitKind};
use crate::errors::{GeodeticError, GeodeticResult};

/// A value paired with its unit of measure
#[derive(Debug, Clone, PartialEq)]
pub struct Measure {
    value: f64,
    unit: Unit,
}

impl Measure {
    pub fn new(value: f64, unit: Unit) -> Self {
        Measure { value, unit }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    /// The value expressed in the SI base unit of its kind
    pub fn si_value(&self) -> f64 {
        self.value * self.unit.conversion_to_si()
    }

    /// Re-express this measure in another unit of the same kind
    pub fn convert_to_unit(&self, target: &Unit) -> GeodeticResult<Measure> {
        if self.unit.kind() != target.kind() {
            return Err(GeodeticError::InvalidUnitKind(format!(
                "cannot convert {:?} to {:?}",
                self.unit.kind(),
                target.kind()
            )));
        }
        Ok(Measure::new(
            self.si_value() / target.conversion_to_si(),
            target.clone(),
        ))
    }
}

/// A linear measure
#[derive(Debug, Clone, PartialEq)]
pub struct Length(Measure);

impl Length {
    pub fn new(value: f64, unit: Unit) -> GeodeticResult<Self> {
        if unit.kind() != UnitKind::Linear {
            return Err(GeodeticError::InvalidUnitKind(format!(
                "length requires a linear unit, got {:?}",
                unit.kind()
            )));
        }
        Ok(Length(Measure::new(value, unit)))
    }

    /// A length in metres
    pub fn metres(value: f64) -> Self {
        Length(Measure::new(value, unit::METRE.clone()))
    }

    pub fn value(&self) -> f64 {
        self.0.value()
    }

    pub fn unit(&self) -> &Unit {
        self.0.unit()
    }

    pub fn si_value(&self) -> f64 {
        self.0.si_value()
    }

    pub fn convert_to_unit(&self, target: &Unit) -> GeodeticResult<Length> {
        Ok(Length(self.0.convert_to_unit(target)?))
    }

    pub fn as_measure(&self) -> &Measure {
        &self.0
    }
}

/// An angular measure
#[derive(Debug, Clone, PartialEq)]
pub struct Angle(Measure);

impl Angle {
    pub fn new(value: f64, unit: Unit) -> GeodeticResult<Self> {
        if unit.kind() != UnitKind::Angular {
            return Err(GeodeticError::InvalidUnitKind(format!(
                "angle requires an angular unit, got {:?}",
                unit.kind()
            )));
        }
        Ok(Angle(Measure::new(value, unit)))
    }

    /// An angle in degrees
    pub fn degrees(value: f64) -> Self {
        Angle(Measure::new(value, unit::DEGREE.clone()))
    }

    pub fn value(&self) -> f64 {
        self.0.value()
    }

    pub fn unit(&self) -> &Unit {
        self.0.unit()
    }

    pub fn si_value(&self) -> f64 {
        self.0.si_value()
    }

    /// Re-express in another angular unit, keeping angular kind
    pub fn convert_to_unit(&self, target: &Unit) -> GeodeticResult<Angle> {
        Ok(Angle(self.0.convert_to_unit(target)?))
    }

    pub fn as_measure(&self) -> &Measure {
        &self.0
    }
}

/// A dimensionless scale measure
#[derive(Debug, Clone, PartialEq)]
pub struct Scale(Measure);

impl Scale {
    pub fn new(value: f64, unit: Unit) -> GeodeticResult<Self> {
        if unit.kind() != UnitKind::Scale {
            return Err(GeodeticError::InvalidUnitKind(format!(
                "scale requires a scale unit, got {:?}",
                unit.kind()
            )));
        }
        Ok(Scale(Measure::new(value, unit)))
    }

    /// A unity-scaled value
    pub fn unity(value: f64) -> Self {
        Scale(Measure::new(value, unit::UNITY.clone()))
    }

    pub fn value(&self) -> f64 {
        self.0.value()
    }

    pub fn unit(&self) -> &Unit {
        self.0.unit()
    }

    pub fn si_value(&self) -> f64 {
        self.0.si_value()
    }

    pub fn as_measure(&self) -> &Measure {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::unit::{DEGREE, FOOT, GRAD, METRE};

    #[test]
    fn test_si_conversion() {
        let l = Length::new(1.0, FOOT.clone()).unwrap();
        assert!((l.si_value() - 0.3048).abs() < 1e-12);
    }

    #[test]
    fn test_angle_grad_to_degree() {
        let paris = Angle::new(2.5969213, GRAD.clone()).unwrap();
        let deg = paris.convert_to_unit(&DEGREE).unwrap();
        assert!((deg.value() - 2.33722917).abs() < 1e-8);
        assert_eq!(deg.unit(), &*DEGREE);
    }

    #[test]
    fn test_kind_mismatch_rejected() {
        assert!(Length::new(1.0, DEGREE.clone()).is_err());
        assert!(Angle::new(1.0, METRE.clone()).is_err());
        let m = Measure::new(1.0, METRE.clone());
        assert!(m.convert_to_unit(&DEGREE).is_err());
    }
}
