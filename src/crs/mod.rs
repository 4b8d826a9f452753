//! Coordinate reference system model
//!
//! The closed set of CRS variants plus the capability functions every
//! variant answers to: coordinate-system access, geographic/vertical
//! extraction, vertical stripping, equivalence and WGS 84 bound-CRS
//! synthesis.

pub mod bound;
pub mod compound;
pub mod derived;
pub mod geodetic;
pub mod projected;
pub mod single;
pub mod vertical;

pub use bound::BoundCrs;
pub use compound::CompoundCrs;
pub use derived::{DerivedCrs, DerivedKind};
pub use geodetic::{GeodeticCrs, GeographicCrs};
pub use projected::ProjectedCrs;
pub use single::{EngineeringCrs, ParametricCrs, TemporalCrs};
pub use vertical::VerticalCrs;

use crate::common::{ObjectUsage, UnitKind};
use crate::context::AuthorityContext;
use crate::cs::CoordinateSystem;
use crate::errors::GeodeticResult;
use crate::operation::{Conversion, CoordinateOperation, ParameterValue};
use log::debug;
use std::sync::Arc;

/// How strictly two objects are compared
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Criterion {
    /// All attributes including names and identifiers
    Strict,
    /// Names ignored; values compared through the unit registry and the
    /// equivalent-parameter-name table
    Equivalent,
}

/// Closed set of coordinate reference system variants
#[derive(Debug, Clone, PartialEq)]
pub enum Crs {
    Geodetic(GeodeticCrs),
    Geographic(GeographicCrs),
    Projected(ProjectedCrs),
    Vertical(VerticalCrs),
    Compound(CompoundCrs),
    Bound(BoundCrs),
    Engineering(EngineeringCrs),
    Temporal(TemporalCrs),
    Parametric(ParametricCrs),
    Derived(DerivedCrs),
}

impl Crs {
    pub fn name(&self) -> &str {
        self.usage().name()
    }

    pub fn usage(&self) -> &ObjectUsage {
        match self {
            Crs::Geodetic(crs) => &crs.usage,
            Crs::Geographic(crs) => &crs.geodetic.usage,
            Crs::Projected(crs) => &crs.usage,
            Crs::Vertical(crs) => &crs.usage,
            Crs::Compound(crs) => &crs.usage,
            Crs::Bound(crs) => &crs.usage,
            Crs::Engineering(crs) => &crs.usage,
            Crs::Temporal(crs) => &crs.usage,
            Crs::Parametric(crs) => &crs.usage,
            Crs::Derived(crs) => &crs.usage,
        }
    }

    pub fn epsg_code(&self) -> Option<u32> {
        self.usage().base.epsg_code()
    }

    /// The coordinate system, absent for compound and bound CRSes
    pub fn coordinate_system(&self) -> Option<&CoordinateSystem> {
        match self {
            Crs::Geodetic(crs) => Some(&crs.coordinate_system),
            Crs::Geographic(crs) => Some(&crs.geodetic.coordinate_system),
            Crs::Projected(crs) => Some(&crs.coordinate_system),
            Crs::Vertical(crs) => Some(&crs.coordinate_system),
            Crs::Engineering(crs) => Some(&crs.coordinate_system),
            Crs::Temporal(crs) => Some(&crs.coordinate_system),
            Crs::Parametric(crs) => Some(&crs.coordinate_system),
            Crs::Derived(crs) => Some(&crs.coordinate_system),
            Crs::Compound(_) | Crs::Bound(_) => None,
        }
    }

    /// The geodetic view of this CRS when there is one
    pub fn geodetic_crs(&self) -> Option<&GeodeticCrs> {
        match self {
            Crs::Geodetic(crs) => Some(crs),
            Crs::Geographic(crs) => Some(&crs.geodetic),
            _ => None,
        }
    }

    /// The remembered canonical bound CRS, when installed
    pub fn canonical_bound_crs(&self) -> Option<&Arc<Crs>> {
        match self {
            Crs::Geodetic(crs) => crs.canonical_bound_crs.as_ref(),
            Crs::Geographic(crs) => crs.geodetic.canonical_bound_crs.as_ref(),
            Crs::Projected(crs) => crs.canonical_bound_crs.as_ref(),
            Crs::Vertical(crs) => crs.canonical_bound_crs.as_ref(),
            _ => None,
        }
    }

    /// A copy carrying the given canonical bound CRS; installing twice is a
    /// no-op on an already-carrying CRS
    pub fn with_canonical_bound_crs(&self, bound: Arc<Crs>) -> Crs {
        let mut copy = self.clone();
        match &mut copy {
            Crs::Geodetic(crs) => {
                crs.canonical_bound_crs.get_or_insert(bound);
            }
            Crs::Geographic(crs) => {
                crs.geodetic.canonical_bound_crs.get_or_insert(bound);
            }
            Crs::Projected(crs) => {
                crs.canonical_bound_crs.get_or_insert(bound);
            }
            Crs::Vertical(crs) => {
                crs.canonical_bound_crs.get_or_insert(bound);
            }
            _ => {}
        }
        copy
    }

    pub fn is_geographic(&self) -> bool {
        matches!(self, Crs::Geographic(_))
    }

    /// Equivalence at the given criterion
    pub fn is_equivalent_to(&self, other: &Crs, criterion: Criterion) -> bool {
        if criterion == Criterion::Strict {
            let a = self.usage();
            let b = other.usage();
            if a.base.name != b.base.name || a.base.identifiers != b.base.identifiers {
                return false;
            }
        }
        match (self, other) {
            (Crs::Geodetic(a), Crs::Geodetic(b)) => {
                equivalence::geodetic(a, b, criterion)
            }
            (Crs::Geographic(a), Crs::Geographic(b)) => {
                equivalence::geodetic(&a.geodetic, &b.geodetic, criterion)
            }
            (Crs::Projected(a), Crs::Projected(b)) => {
                a.base_crs.is_equivalent_to(&b.base_crs, criterion)
                    && equivalence::coordinate_system(
                        &a.coordinate_system,
                        &b.coordinate_system,
                        criterion,
                    )
                    && equivalence::conversion(a.conversion_ref(), b.conversion_ref(), criterion)
            }
            (Crs::Vertical(a), Crs::Vertical(b)) => {
                equivalence::coordinate_system(
                    &a.coordinate_system,
                    &b.coordinate_system,
                    criterion,
                ) && match (&a.datum, &b.datum) {
                    (Some(da), Some(db)) => {
                        criterion == Criterion::Equivalent || da.usage.base == db.usage.base
                    }
                    _ => a.datum_ensemble.is_some() == b.datum_ensemble.is_some(),
                }
            }
            (Crs::Compound(a), Crs::Compound(b)) => {
                a.components.len() == b.components.len()
                    && a.components
                        .iter()
                        .zip(b.components.iter())
                        .all(|(ca, cb)| ca.is_equivalent_to(cb, criterion))
            }
            (Crs::Bound(a), Crs::Bound(b)) => {
                a.base_crs.is_equivalent_to(&b.base_crs, criterion)
                    && a.hub_crs.is_equivalent_to(&b.hub_crs, criterion)
            }
            (Crs::Engineering(a), Crs::Engineering(b)) => equivalence::coordinate_system(
                &a.coordinate_system,
                &b.coordinate_system,
                criterion,
            ),
            (Crs::Temporal(a), Crs::Temporal(b)) => {
                a.datum.calendar == b.datum.calendar
                    && a.datum.temporal_origin == b.datum.temporal_origin
            }
            (Crs::Parametric(a), Crs::Parametric(b)) => equivalence::coordinate_system(
                &a.coordinate_system,
                &b.coordinate_system,
                criterion,
            ),
            (Crs::Derived(a), Crs::Derived(b)) => {
                a.kind == b.kind
                    && a.base_crs.is_equivalent_to(&b.base_crs, criterion)
                    && equivalence::conversion(a.conversion_ref(), b.conversion_ref(), criterion)
            }
            _ => false,
        }
    }
}

/// Shallow clone; self-referential conversions are re-bound to the clone
pub fn shallow_clone(crs: &Arc<Crs>) -> Arc<Crs> {
    match &**crs {
        Crs::Projected(projected) => projected.shallow_clone_rebound(),
        Crs::Derived(derived) => derived.shallow_clone_rebound(),
        other => Arc::new(other.clone()),
    }
}

/// The geographic CRS reachable from this CRS, if any
///
/// Walks projected CRSes to their base, compound CRSes to the first
/// component answering, and bound CRSes to their base.
pub fn extract_geographic_crs(crs: &Arc<Crs>) -> Option<Arc<Crs>> {
    match &**crs {
        Crs::Geographic(_) => Some(crs.clone()),
        Crs::Projected(projected) => extract_geographic_crs(&projected.base_crs),
        Crs::Compound(compound) => compound
            .components
            .iter()
            .find_map(extract_geographic_crs),
        Crs::Bound(bound) => extract_geographic_crs(&bound.base_crs),
        Crs::Derived(derived) => extract_geographic_crs(&derived.base_crs),
        _ => None,
    }
}

/// The vertical CRS reachable from this CRS, if any
pub fn extract_vertical_crs(crs: &Arc<Crs>) -> Option<Arc<Crs>> {
    match &**crs {
        Crs::Vertical(_) => Some(crs.clone()),
        Crs::Compound(compound) => compound.components.iter().find_map(extract_vertical_crs),
        Crs::Bound(bound) => extract_vertical_crs(&bound.base_crs),
        _ => None,
    }
}

/// A copy of the CRS with any ellipsoidal-height axis removed
///
/// A 3D geographic CRS keeps its first two axes; a 3D projected CRS keeps
/// easting and northing. Anything else is returned unchanged.
pub fn strip_vertical_component(crs: &Arc<Crs>) -> GeodeticResult<Arc<Crs>> {
    match &**crs {
        Crs::Geographic(geog) if geog.is_three_dimensional() => {
            let axes = geog.geodetic.coordinate_system.axes()[..2].to_vec();
            let cs = CoordinateSystem::ellipsoidal(axes)?;
            let mut stripped = geog.clone();
            stripped.geodetic.coordinate_system = cs;
            Ok(Arc::new(Crs::Geographic(stripped)))
        }
        Crs::Projected(projected) if projected.coordinate_system.axes().len() == 3 => {
            let axes = projected.coordinate_system.axes()[..2].to_vec();
            let cs = CoordinateSystem::cartesian(axes)?;
            ProjectedCrs::create(
                crate::common::Properties {
                    name: Some(projected.usage.base.name.clone()),
                    identifiers: projected.usage.base.identifiers.clone(),
                    ..Default::default()
                },
                projected.base_crs.clone(),
                projected.conversion_ref().detached_clone(),
                cs,
            )
        }
        _ => Ok(crs.clone()),
    }
}

/// Attach a transformation to WGS 84 when one can be found
///
/// Returns the canonical bound CRS when one is installed with a WGS 84 hub,
/// the input unchanged when it already is WGS 84 (or no context and no
/// candidate is available), and otherwise the first database candidate whose
/// parameters can be rendered as a TOWGS84 tuple.
pub fn create_bound_crs_to_wgs84_if_possible(
    crs: &Arc<Crs>,
    context: Option<&dyn AuthorityContext>,
) -> Arc<Crs> {
    if matches!(&**crs, Crs::Bound(_)) {
        return crs.clone();
    }
    if let Some(canonical) = crs.canonical_bound_crs() {
        if let Crs::Bound(bound) = &**canonical {
            if bound.hub_is_wgs84() {
                return canonical.clone();
            }
        }
    }

    let geographic = extract_geographic_crs(crs);
    let hub = match (&geographic, &**crs) {
        (Some(geog), _) => {
            if geog.is_equivalent_to(&GeographicCrs::epsg_4326(), Criterion::Equivalent) {
                return crs.clone();
            }
            GeographicCrs::epsg_4326()
        }
        (None, Crs::Geodetic(_)) => GeodeticCrs::epsg_4978(),
        _ => return crs.clone(),
    };

    let context = match context {
        Some(context) => context,
        None => return crs.clone(),
    };

    for candidate in context.create_operations(crs, &hub) {
        let transformation = match candidate {
            CoordinateOperation::Transformation(t) => Some(t),
            CoordinateOperation::Concatenated(chain) if chain.operations.len() == 2 => {
                // a leading longitude rotation or simple conversion may
                // precede the actual datum shift
                match (&chain.operations[0], &chain.operations[1]) {
                    (
                        CoordinateOperation::Conversion(_),
                        CoordinateOperation::Transformation(t),
                    ) => Some(t.clone()),
                    _ => None,
                }
            }
            _ => None,
        };
        if let Some(transformation) = transformation {
            if transformation.towgs84_parameters().is_ok() {
                match BoundCrs::create(crs.clone(), hub.clone(), transformation) {
                    Ok(bound) => return bound,
                    Err(e) => debug!("discarding bound CRS candidate: {}", e),
                }
            }
        }
    }
    crs.clone()
}

/// Equivalence helpers shared by the CRS variants
mod equivalence {
    use super::*;
    use crate::operation::registry;

    const VALUE_TOLERANCE: f64 = 1e-10;

    fn values_close(a: f64, b: f64) -> bool {
        if a == b {
            return true;
        }
        (a - b).abs() <= a.abs().max(b.abs()) * VALUE_TOLERANCE
    }

    pub fn coordinate_system(
        a: &CoordinateSystem,
        b: &CoordinateSystem,
        criterion: Criterion,
    ) -> bool {
        if std::mem::discriminant(a) != std::mem::discriminant(b) {
            return false;
        }
        let axes_a = a.axes();
        let axes_b = b.axes();
        if axes_a.len() != axes_b.len() {
            return false;
        }
        axes_a.iter().zip(axes_b.iter()).all(|(axis_a, axis_b)| {
            if axis_a.direction != axis_b.direction {
                return false;
            }
            match criterion {
                Criterion::Strict => axis_a.unit == axis_b.unit && axis_a.name() == axis_b.name(),
                Criterion::Equivalent => {
                    axis_a.unit.kind() == axis_b.unit.kind()
                        && values_close(
                            axis_a.unit.conversion_to_si(),
                            axis_b.unit.conversion_to_si(),
                        )
                }
            }
        })
    }

    pub fn geodetic(a: &GeodeticCrs, b: &GeodeticCrs, criterion: Criterion) -> bool {
        let datums = match (a.effective_frame(), b.effective_frame()) {
            (Some(fa), Some(fb)) => {
                fa.is_equivalent_to(fb)
                    && (criterion == Criterion::Equivalent || fa.usage.base == fb.usage.base)
            }
            (None, None) => true,
            _ => false,
        };
        datums && coordinate_system(&a.coordinate_system, &b.coordinate_system, criterion)
    }

    pub fn conversion(a: &Conversion, b: &Conversion, criterion: Criterion) -> bool {
        let methods_match = match (a.method.epsg_code(), b.method.epsg_code()) {
            (Some(ca), Some(cb)) => ca == cb,
            _ => {
                registry::normalize_name(a.method.name())
                    == registry::normalize_name(b.method.name())
            }
        };
        if !methods_match {
            return false;
        }
        if criterion == Criterion::Strict && a.usage.base.name != b.usage.base.name {
            return false;
        }
        // every substantive parameter of a must have an equivalent in b
        for value_a in &a.values {
            let matching = b
                .values
                .iter()
                .find(|value_b| value_a.parameter.is_equivalent_to(&value_b.parameter));
            match matching {
                Some(value_b) => {
                    let ok = match (&value_a.value, &value_b.value) {
                        (ParameterValue::Measure(ma), ParameterValue::Measure(mb)) => {
                            if ma.unit().kind() == mb.unit().kind()
                                && ma.unit().kind() != UnitKind::Unknown
                            {
                                values_close(ma.si_value(), mb.si_value())
                            } else {
                                values_close(ma.value(), mb.value())
                            }
                        }
                        (va, vb) => va == vb,
                    };
                    if !ok {
                        return false;
                    }
                }
                None => {
                    // tolerate an absent counterpart only for zero-valued
                    // measures
                    let zero = matches!(
                        &value_a.value,
                        ParameterValue::Measure(m) if m.value() == 0.0
                    );
                    if !zero {
                        return false;
                    }
                }
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::unit::{DEGREE, GRAD};
    use crate::common::Properties;
    use crate::datum::GeodeticReferenceFrame;

    #[test]
    fn test_extract_geographic_from_projected() {
        let projected = ProjectedCrs::epsg_32631();
        let geographic = extract_geographic_crs(&projected).unwrap();
        assert_eq!(geographic.name(), "WGS 84");
    }

    #[test]
    fn test_extract_from_compound() {
        let compound = CompoundCrs::create(
            Properties::named("horizontal + vertical"),
            vec![ProjectedCrs::epsg_32631(), VerticalCrs::epsg_5701()],
        )
        .unwrap();
        assert!(extract_geographic_crs(&compound).is_some());
        assert_eq!(extract_vertical_crs(&compound).unwrap().name(), "ODN height");
    }

    #[test]
    fn test_equivalence_ignores_names() {
        let wgs84 = GeographicCrs::epsg_4326();
        let renamed = GeographicCrs::create(
            Properties::named("WGS_1984"),
            Some(GeodeticReferenceFrame::wgs84()),
            None,
            CoordinateSystem::create_latitude_longitude(&DEGREE).unwrap(),
        )
        .unwrap();
        assert!(wgs84.is_equivalent_to(&renamed, Criterion::Equivalent));
        assert!(!wgs84.is_equivalent_to(&renamed, Criterion::Strict));
    }

    #[test]
    fn test_equivalence_unit_sensitive() {
        let in_grad = GeographicCrs::create(
            Properties::named("WGS 84"),
            Some(GeodeticReferenceFrame::wgs84()),
            None,
            CoordinateSystem::create_latitude_longitude(&GRAD).unwrap(),
        )
        .unwrap();
        assert!(!GeographicCrs::epsg_4326().is_equivalent_to(&in_grad, Criterion::Equivalent));
    }

    #[test]
    fn test_strip_vertical() {
        use crate::cs::axis::{AxisDirection, CoordinateSystemAxis};
        use crate::common::unit::METRE;
        let cs3d = CoordinateSystem::ellipsoidal(vec![
            CoordinateSystemAxis::new("Latitude", "lat", AxisDirection::North, DEGREE.clone()),
            CoordinateSystemAxis::new("Longitude", "lon", AxisDirection::East, DEGREE.clone()),
            CoordinateSystemAxis::new("Ellipsoidal height", "h", AxisDirection::Up, METRE.clone()),
        ])
        .unwrap();
        let crs3d = GeographicCrs::create(
            Properties::epsg("WGS 84", 4979),
            Some(GeodeticReferenceFrame::wgs84()),
            None,
            cs3d,
        )
        .unwrap();
        let stripped = strip_vertical_component(&crs3d).unwrap();
        assert_eq!(stripped.coordinate_system().unwrap().axes().len(), 2);

        // 2D input is returned unchanged
        let crs2d = GeographicCrs::epsg_4326();
        let same = strip_vertical_component(&crs2d).unwrap();
        assert!(Arc::ptr_eq(&crs2d, &same));
    }

    #[test]
    fn test_bound_synthesis_without_context() {
        let ntf = GeographicCrs::epsg_4807();
        let result = create_bound_crs_to_wgs84_if_possible(&ntf, None);
        assert!(Arc::ptr_eq(&ntf, &result));

        // WGS 84 itself needs no bound wrapper
        let wgs84 = GeographicCrs::epsg_4326();
        let result = create_bound_crs_to_wgs84_if_possible(&wgs84, None);
        assert!(Arc::ptr_eq(&wgs84, &result));
    }
}
