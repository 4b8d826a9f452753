//! WKT emitter
//!
//! Depth-first serialization of the object graph, driven by the formatter
//! state. Each dialect has its own keyword choices, unit handling and
//! name aliasing; incompatibilities surface as `FormattingError`.

use crate::common::unit::{self, Unit, UnitKind};
use crate::common::{Identifier, ObjectUsage};
use crate::context::ObjectKind;
use crate::crs::{
    BoundCrs, CompoundCrs, Crs, DerivedCrs, DerivedKind, GeodeticCrs, ProjectedCrs, VerticalCrs,
};
use crate::cs::{CoordinateSystem, CoordinateSystemAxis};
use crate::datum::{DatumEnsemble, GeodeticReferenceFrame, PrimeMeridian};
use crate::errors::{GeodeticError, GeodeticResult};
use crate::operation::registry;
use crate::operation::{Conversion, ParameterValue, Transformation};
use crate::wkt::esri;
use crate::wkt::formatter::{WktFormatter, WktVersion};
use crate::wkt::keywords as kw;

/// Serialize a CRS into the formatter
pub fn crs_to_wkt(crs: &Crs, f: &mut WktFormatter) -> GeodeticResult<()> {
    emit_crs_node(crs, f, None)
}

/// Convenience: serialize to a string in one call
pub fn wkt_string(crs: &Crs, version: WktVersion, simplified: bool) -> GeodeticResult<String> {
    let mut formatter = if simplified {
        WktFormatter::simplified(version)
    } else {
        WktFormatter::new(version)
    };
    crs_to_wkt(crs, &mut formatter)?;
    Ok(formatter.into_string())
}

/// Serialize a standalone coordinate operation (WKT2 only)
pub fn operation_to_wkt(
    operation: &crate::operation::CoordinateOperation,
    f: &mut WktFormatter,
) -> GeodeticResult<()> {
    use crate::operation::CoordinateOperation;
    if !f.version().is_wkt2() {
        return Err(GeodeticError::FormattingError(
            "coordinate operations cannot be represented in WKT1".to_string(),
        ));
    }
    match operation {
        CoordinateOperation::Conversion(conversion) => {
            emit_conversion_wkt2(conversion, f, kw::CONVERSION)
        }
        CoordinateOperation::Transformation(transformation) => {
            emit_transformation(transformation, f)
        }
        CoordinateOperation::Concatenated(chain) => {
            f.start_node(kw::CONCATENATEDOPERATION);
            f.add_quoted_string(display_name(&chain.usage));
            for step in &chain.operations {
                f.start_node(kw::STEP);
                operation_to_wkt(step, f)?;
                f.end_node();
            }
            emit_identifiers(&chain.usage.base.identifiers, f);
            f.end_node();
            Ok(())
        }
        CoordinateOperation::PointMotion(_) => Err(GeodeticError::UnsupportedOperation(
            "point-motion operations have no WKT representation".to_string(),
        )),
    }
}

/// `COORDINATEOPERATION` with explicit source and target CRSes
fn emit_transformation(
    transformation: &Transformation,
    f: &mut WktFormatter,
) -> GeodeticResult<()> {
    f.start_node(kw::COORDINATEOPERATION);
    f.add_quoted_string(display_name(&transformation.usage));
    f.start_node(kw::SOURCECRS);
    emit_crs_node(transformation.source_crs(), f, None)?;
    f.end_node();
    f.start_node(kw::TARGETCRS);
    emit_crs_node(transformation.target_crs(), f, None)?;
    f.end_node();
    f.start_node(kw::METHOD);
    f.add_quoted_string(transformation.method.name());
    emit_identifiers(&transformation.method.base.identifiers, f);
    f.end_node();
    for value in &transformation.values {
        match &value.value {
            ParameterValue::Filename(filename) => {
                f.start_node(kw::PARAMETERFILE);
                f.add_quoted_string(value.parameter.name());
                f.add_quoted_string(filename);
                f.end_node();
            }
            ParameterValue::Measure(measure) => {
                f.start_node(kw::PARAMETER);
                f.add_quoted_string(value.parameter.name());
                f.add_number(measure.value());
                if measure.unit().kind() != UnitKind::Unknown {
                    emit_unit(measure.unit(), f, wkt2_unit_keyword(measure.unit()));
                }
                emit_identifiers(&value.parameter.base.identifiers, f);
                f.end_node();
            }
            _ => {}
        }
    }
    for accuracy in &transformation.accuracies {
        f.start_node(kw::OPERATIONACCURACY);
        f.add_number(*accuracy);
        f.end_node();
    }
    emit_identifiers(&transformation.usage.base.identifiers, f);
    f.end_node();
    Ok(())
}

fn emit_crs_node(
    crs: &Crs,
    f: &mut WktFormatter,
    keyword_override: Option<&str>,
) -> GeodeticResult<()> {
    match crs {
        Crs::Geographic(geog) => emit_geodetic_crs(&geog.geodetic, true, f, keyword_override),
        Crs::Geodetic(geod) => emit_geodetic_crs(geod, false, f, keyword_override),
        Crs::Projected(projected) => emit_projected_crs(projected, f, keyword_override),
        Crs::Vertical(vertical) => emit_vertical_crs(vertical, f, keyword_override),
        Crs::Compound(compound) => emit_compound_crs(compound, f),
        Crs::Bound(bound) => emit_bound_crs(bound, f),
        Crs::Engineering(eng) => emit_engineering_crs(eng, f, keyword_override),
        Crs::Temporal(temporal) => emit_temporal_crs(temporal, f, keyword_override),
        Crs::Parametric(parametric) => emit_parametric_crs(parametric, f, keyword_override),
        Crs::Derived(derived) => emit_derived_crs(derived, f),
    }
}

fn display_name(usage: &ObjectUsage) -> &str {
    if usage.base.name.is_empty() {
        "unnamed"
    } else {
        &usage.base.name
    }
}

/// `ID["EPSG",4326]` in WKT2, `AUTHORITY["EPSG","4326"]` in WKT1.
/// WKT2 honors every identifier, WKT1 only the first.
fn emit_identifiers(identifiers: &[Identifier], f: &mut WktFormatter) {
    if !f.output_ids() || identifiers.is_empty() {
        return;
    }
    if f.version().is_wkt2() {
        for id in identifiers {
            f.start_node(kw::ID);
            f.add_quoted_string(id.codespace.as_deref().unwrap_or(""));
            match id.code.parse::<i64>() {
                Ok(code) => f.add_int(code),
                Err(_) => f.add_quoted_string(&id.code),
            }
            if let Some(version) = &id.version {
                f.add_quoted_string(version);
            }
            if let Some(citation) = &id.authority_citation {
                f.start_node(kw::CITATION);
                f.add_quoted_string(citation);
                f.end_node();
            }
            f.end_node();
        }
    } else if f.version() == WktVersion::Wkt1Gdal {
        let id = &identifiers[0];
        f.start_node(kw::AUTHORITY);
        f.add_quoted_string(id.codespace.as_deref().unwrap_or(""));
        f.add_quoted_string(&id.code);
        f.end_node();
    }
    // WKT1-ESRI carries no authorities
}

/// `SCOPE`/`AREA`/`BBOX`, wrapped in `USAGE` for WKT2:2018
fn emit_usage(usage: &ObjectUsage, f: &mut WktFormatter) {
    if !f.version().is_wkt2() || f.is_simplified() {
        return;
    }
    let has_scope = usage.scope.is_some();
    let has_extent = usage.domain_of_validity.is_some();
    if !has_scope && !has_extent {
        return;
    }
    let wrap = f.version() == WktVersion::Wkt2_2018;
    if wrap {
        f.start_node(kw::USAGE);
    }
    if let Some(scope) = &usage.scope {
        f.start_node(kw::SCOPE);
        f.add_quoted_string(scope);
        f.end_node();
    }
    if let Some(extent) = &usage.domain_of_validity {
        if let Some(description) = &extent.description {
            f.start_node(kw::AREA);
            f.add_quoted_string(description);
            f.end_node();
        }
        for bbox in &extent.bboxes {
            f.start_node(kw::BBOX);
            f.add_number(bbox.south);
            f.add_number(bbox.west);
            f.add_number(bbox.north);
            f.add_number(bbox.east);
            f.end_node();
        }
        for vertical in &extent.vertical {
            f.start_node(kw::VERTICALEXTENT);
            f.add_number(vertical.minimum);
            f.add_number(vertical.maximum);
            emit_unit(&vertical.unit, f, kw::LENGTHUNIT);
            f.end_node();
        }
        for temporal in &extent.temporal {
            f.start_node(kw::TIMEEXTENT);
            f.add_quoted_string(&temporal.start);
            f.add_quoted_string(&temporal.stop);
            f.end_node();
        }
    }
    if wrap {
        f.end_node();
    }
}

fn emit_remark(usage: &ObjectUsage, f: &mut WktFormatter) {
    if f.version().is_wkt2() && !f.is_simplified() && !usage.base.remarks.is_empty() {
        f.start_node(kw::REMARK);
        f.add_quoted_string(&usage.base.remarks);
        f.end_node();
    }
}

/// The ESRI spelling of a unit name
fn esri_unit_name(unit: &Unit) -> String {
    match unit.name() {
        "metre" => "Meter".to_string(),
        "degree" => "Degree".to_string(),
        "grad" => "Grad".to_string(),
        "foot" => "Foot".to_string(),
        "US survey foot" => "Foot_US".to_string(),
        other => other.replace(' ', "_"),
    }
}

fn emit_unit(unit: &Unit, f: &mut WktFormatter, wkt2_keyword: &str) {
    if f.version().is_wkt2() {
        f.start_node(wkt2_keyword);
        f.add_quoted_string(unit.name());
        f.add_number(unit.conversion_to_si());
        if let (Some(codespace), Some(code)) = (unit.codespace(), unit.code()) {
            emit_identifiers(&[Identifier::new(codespace, code)], f);
        }
        f.end_node();
    } else {
        f.start_node(kw::UNIT);
        if f.version() == WktVersion::Wkt1Esri {
            f.add_quoted_string(&esri_unit_name(unit));
            // ESRI writes the factor with a decimal point even when integral
            let factor = unit.conversion_to_si();
            if factor == factor.trunc() {
                f.add_keyword(&format!("{:.1}", factor));
            } else {
                f.add_number(factor);
            }
        } else {
            f.add_quoted_string(unit.name());
            f.add_number(unit.conversion_to_si());
            if let (Some(codespace), Some(code)) = (unit.codespace(), unit.code()) {
                emit_identifiers(&[Identifier::new(codespace, code)], f);
            }
        }
        f.end_node();
    }
}

fn wkt2_unit_keyword(unit: &Unit) -> &'static str {
    match unit.kind() {
        UnitKind::Linear => kw::LENGTHUNIT,
        UnitKind::Angular => kw::ANGLEUNIT,
        UnitKind::Scale => kw::SCALEUNIT,
        UnitKind::Time => kw::TIMEUNIT,
        UnitKind::Parametric => kw::PARAMETRICUNIT,
        _ => kw::UNIT,
    }
}

fn emit_ellipsoid(
    ellipsoid: &crate::datum::Ellipsoid,
    f: &mut WktFormatter,
) -> GeodeticResult<()> {
    let is_wkt2 = f.version().is_wkt2();
    f.start_node(if is_wkt2 { kw::ELLIPSOID } else { kw::SPHEROID });
    let name = if ellipsoid.base.name.is_empty() {
        "unnamed".to_string()
    } else if f.version() == WktVersion::Wkt1Esri {
        match ellipsoid.base.name.as_str() {
            "WGS 84" => "WGS_1984".to_string(),
            other => other.replace(' ', "_"),
        }
    } else {
        ellipsoid.base.name.clone()
    };
    f.add_quoted_string(&name);
    if is_wkt2 {
        f.add_number(ellipsoid.semi_major_axis().value());
        f.add_number(ellipsoid.compute_inverse_flattening());
        let metre = ellipsoid.semi_major_axis().unit() == &*unit::METRE;
        if !(f.is_simplified() && metre) {
            emit_unit(ellipsoid.semi_major_axis().unit(), f, kw::LENGTHUNIT);
        }
    } else {
        // WKT1 always expresses the semi-major axis in metres
        f.add_number(ellipsoid.semi_major_axis().convert_to_unit(&unit::METRE)?.value());
        f.add_number(ellipsoid.compute_inverse_flattening());
    }
    emit_identifiers(&ellipsoid.base.identifiers, f);
    f.end_node();
    Ok(())
}

fn emit_prime_meridian(
    pm: &PrimeMeridian,
    f: &mut WktFormatter,
) -> GeodeticResult<()> {
    let is_wkt2 = f.version().is_wkt2();
    if is_wkt2 && f.is_simplified() && pm.is_greenwich() && pm.name() == "Greenwich" {
        return Ok(());
    }
    f.start_node(kw::PRIMEM);
    f.add_quoted_string(if pm.name().is_empty() { "Greenwich" } else { pm.name() });
    if is_wkt2 {
        f.add_number(pm.longitude().value());
        let same_as_axis = f
            .current_axis_unit()
            .map(|axis_unit| axis_unit == pm.longitude().unit())
            .unwrap_or(false);
        if !(f.is_simplified() && same_as_axis) {
            emit_unit(pm.longitude().unit(), f, kw::ANGLEUNIT);
        }
    } else {
        // WKT1 exports the longitude in degrees whatever the source unit
        f.add_number(pm.longitude().convert_to_unit(&unit::DEGREE)?.value());
    }
    emit_identifiers(&pm.base.identifiers, f);
    f.end_node();
    Ok(())
}

fn emit_geodetic_datum(
    frame: &GeodeticReferenceFrame,
    f: &mut WktFormatter,
) -> GeodeticResult<()> {
    let is_wkt2 = f.version().is_wkt2();
    if is_wkt2 {
        if let Some(epoch) = &frame.frame_reference_epoch {
            f.start_node(kw::DYNAMIC);
            f.start_node(kw::FRAMEEPOCH);
            f.add_number(epoch.value());
            f.end_node();
            f.end_node();
        }
    }
    f.start_node(kw::DATUM);
    let name = if f.version() == WktVersion::Wkt1Esri {
        esri::esri_name(frame.name(), ObjectKind::Datum)
    } else {
        display_name(&frame.usage).to_string()
    };
    f.add_quoted_string(&name);
    emit_ellipsoid(&frame.ellipsoid, f)?;
    if is_wkt2 {
        if let Some(anchor) = &frame.anchor {
            f.start_node(kw::ANCHOR);
            f.add_quoted_string(anchor);
            f.end_node();
        }
    } else if f.version() == WktVersion::Wkt1Gdal {
        if let Some(params) = f.towgs84().map(|p| p.to_vec()) {
            f.start_node(kw::TOWGS84);
            for value in params {
                f.add_number(value);
            }
            f.end_node();
        }
        if let Some(filename) = f.horizontal_grid_extension().map(|s| s.to_string()) {
            f.start_node(kw::EXTENSION);
            f.add_quoted_string(kw::PROJ4_GRIDS);
            f.add_quoted_string(&filename);
            f.end_node();
        }
    }
    emit_identifiers(&frame.usage.base.identifiers, f);
    f.end_node();
    Ok(())
}

fn emit_datum_ensemble(
    ensemble: &DatumEnsemble,
    f: &mut WktFormatter,
) -> GeodeticResult<()> {
    if f.version().is_wkt2() {
        f.start_node(kw::ENSEMBLE);
        f.add_quoted_string(display_name(&ensemble.usage));
        for member in &ensemble.members {
            f.start_node(kw::MEMBER);
            f.add_quoted_string(member.name());
            f.end_node();
        }
        if let Some(frame) = ensemble.representative_geodetic_frame() {
            emit_ellipsoid(&frame.ellipsoid, f)?;
        }
        f.start_node(kw::ENSEMBLEACCURACY);
        f.add_number(ensemble.accuracy_metres);
        f.end_node();
        emit_identifiers(&ensemble.usage.base.identifiers, f);
        f.end_node();
        Ok(())
    } else {
        // WKT1 knows no ensembles; emit the representative member as DATUM
        match ensemble.representative_geodetic_frame() {
            Some(frame) => emit_geodetic_datum(frame, f),
            None => Err(GeodeticError::FormattingError(
                "cannot emit a non-geodetic datum ensemble in WKT1".to_string(),
            )),
        }
    }
}

/// The spelling of an axis name in WKT2: lowercased except proper nouns
fn wkt2_axis_name(name: &str) -> String {
    if name.starts_with("Geocentric") {
        name.to_string()
    } else {
        let mut out = name.to_string();
        if let Some(first) = out.get_mut(0..1) {
            first.make_ascii_lowercase();
        }
        out
    }
}

fn emit_axis_wkt2(
    axis: &CoordinateSystemAxis,
    order: usize,
    f: &mut WktFormatter,
    omit_unit: bool,
) -> GeodeticResult<()> {
    f.start_node(kw::AXIS);
    f.add_quoted_string(&wkt2_axis_name(axis.name()));
    f.add_keyword(axis.direction.as_wkt2_str());
    if let Some(meridian) = &axis.meridian {
        f.start_node(kw::MERIDIAN);
        f.add_number(meridian.value());
        emit_unit(meridian.unit(), f, kw::ANGLEUNIT);
        f.end_node();
    }
    if !f.is_simplified() {
        f.start_node(kw::ORDER);
        f.add_int(order as i64);
        f.end_node();
    }
    if !omit_unit {
        emit_unit(&axis.unit, f, wkt2_unit_keyword(&axis.unit));
    }
    f.end_node();
    Ok(())
}

fn emit_cs_wkt2(cs: &CoordinateSystem, f: &mut WktFormatter) -> GeodeticResult<()> {
    f.start_node(kw::CS);
    f.add_keyword(cs.wkt2_type());
    f.add_int(cs.axes().len() as i64);
    f.end_node();
    let common_unit = cs.common_unit().cloned();
    let hoist_unit = f.is_simplified() && common_unit.is_some();
    for (i, axis) in cs.axes().iter().enumerate() {
        emit_axis_wkt2(axis, i + 1, f, hoist_unit)?;
    }
    if hoist_unit {
        if let Some(u) = &common_unit {
            emit_unit(u, f, wkt2_unit_keyword(u));
        }
    }
    Ok(())
}

fn emit_axes_wkt1(cs: &CoordinateSystem, f: &mut WktFormatter) {
    if f.version() == WktVersion::Wkt1Esri {
        return;
    }
    for axis in cs.axes() {
        f.start_node(kw::AXIS);
        f.add_quoted_string(axis.name());
        f.add_keyword(axis.direction.as_wkt1_str());
        f.end_node();
    }
}

fn emit_geodetic_crs(
    geod: &GeodeticCrs,
    is_geographic: bool,
    f: &mut WktFormatter,
    keyword_override: Option<&str>,
) -> GeodeticResult<()> {
    if f.version().is_wkt2() {
        let two_d = geod.coordinate_system.axes().len() == 2;
        let keyword = keyword_override.unwrap_or(if is_geographic
            && two_d
            && f.version() == WktVersion::Wkt2_2018
        {
            kw::GEOGCRS
        } else {
            kw::GEODCRS
        });
        let base_node = keyword_override.is_some();
        f.start_node(keyword);
        f.add_quoted_string(display_name(&geod.usage));
        let has_ids = !geod.usage.base.identifiers.is_empty();
        if has_ids {
            f.push_disable_ids();
        }
        if let Some(u) = geod.coordinate_system.common_unit() {
            f.push_axis_unit(u.clone());
        }
        match (&geod.datum, &geod.datum_ensemble) {
            (Some(frame), _) => emit_geodetic_datum(frame, f)?,
            (None, Some(ensemble)) => emit_datum_ensemble(ensemble, f)?,
            (None, None) => {
                return Err(GeodeticError::InvariantViolation(
                    "CRS without a datum or datum ensemble".to_string(),
                ))
            }
        }
        if let Some(pm) = geod.prime_meridian() {
            emit_prime_meridian(pm, f)?;
        }
        if !base_node {
            emit_cs_wkt2(&geod.coordinate_system, f)?;
        }
        if geod.coordinate_system.common_unit().is_some() {
            f.pop_axis_unit();
        }
        if has_ids {
            f.pop_disable_ids();
        }
        if !base_node {
            emit_usage(&geod.usage, f);
        }
        emit_identifiers(&geod.usage.base.identifiers, f);
        if !base_node {
            emit_remark(&geod.usage, f);
        }
        f.end_node();
        Ok(())
    } else {
        emit_geodetic_crs_wkt1(geod, is_geographic, f)
    }
}

fn emit_geodetic_crs_wkt1(
    geod: &GeodeticCrs,
    is_geographic: bool,
    f: &mut WktFormatter,
) -> GeodeticResult<()> {
    let esri = f.version() == WktVersion::Wkt1Esri;
    if !is_geographic {
        // geocentric geodetic CRS
        f.start_node(kw::GEOCCS);
        f.add_quoted_string(display_name(&geod.usage));
        let has_ids = !geod.usage.base.identifiers.is_empty();
        if has_ids {
            f.push_disable_ids();
        }
        match (&geod.datum, &geod.datum_ensemble) {
            (Some(frame), _) => emit_geodetic_datum(frame, f)?,
            (None, Some(ensemble)) => emit_datum_ensemble(ensemble, f)?,
            (None, None) => {
                return Err(GeodeticError::InvariantViolation(
                    "CRS without a datum or datum ensemble".to_string(),
                ))
            }
        }
        if let Some(pm) = geod.prime_meridian() {
            emit_prime_meridian(pm, f)?;
        }
        let cs_unit = geod
            .coordinate_system
            .common_unit()
            .cloned()
            .unwrap_or_else(|| unit::METRE.clone());
        emit_unit(&cs_unit, f, kw::LENGTHUNIT);
        emit_axes_wkt1(&geod.coordinate_system, f);
        if has_ids {
            f.pop_disable_ids();
        }
        emit_identifiers(&geod.usage.base.identifiers, f);
        f.end_node();
        return Ok(());
    }

    if esri && geod.coordinate_system.axes().len() == 3 {
        return Err(GeodeticError::FormattingError(
            "a 3D geographic CRS cannot be represented in WKT1-ESRI".to_string(),
        ));
    }

    f.start_node(kw::GEOGCS);
    let name = if esri {
        esri::esri_name(display_name(&geod.usage), ObjectKind::GeodeticCrs)
    } else {
        display_name(&geod.usage).to_string()
    };
    f.add_quoted_string(&name);
    let has_ids = !geod.usage.base.identifiers.is_empty();
    if has_ids {
        f.push_disable_ids();
    }
    match (&geod.datum, &geod.datum_ensemble) {
        (Some(frame), _) => emit_geodetic_datum(frame, f)?,
        (None, Some(ensemble)) => emit_datum_ensemble(ensemble, f)?,
        (None, None) => {
                return Err(GeodeticError::InvariantViolation(
                    "CRS without a datum or datum ensemble".to_string(),
                ))
            }
    }
    if let Some(pm) = geod.prime_meridian() {
        emit_prime_meridian(pm, f)?;
    }
    let angular_unit = geod
        .coordinate_system
        .common_unit()
        .cloned()
        .unwrap_or_else(|| unit::DEGREE.clone());
    emit_unit(&angular_unit, f, kw::ANGLEUNIT);
    emit_axes_wkt1(&geod.coordinate_system, f);
    if has_ids {
        f.pop_disable_ids();
    }
    emit_identifiers(&geod.usage.base.identifiers, f);
    f.end_node();
    Ok(())
}

/// Parameter value normalized for WKT1: angles in degrees, lengths in the
/// target linear unit, scales verbatim
fn wkt1_parameter_value(
    value: &ParameterValue,
    linear_unit: &Unit,
) -> GeodeticResult<f64> {
    match value {
        ParameterValue::Measure(m) => match m.unit().kind() {
            UnitKind::Angular => Ok(m.convert_to_unit(&unit::DEGREE)?.value()),
            UnitKind::Linear => Ok(m.convert_to_unit(linear_unit)?.value()),
            _ => Ok(m.value()),
        },
        ParameterValue::Integer(i) => Ok(*i as f64),
        _ => Err(GeodeticError::FormattingError(
            "non-numeric parameter cannot be represented in WKT1".to_string(),
        )),
    }
}

/// ESRI projection-name selection with its method-specific special cases
fn esri_projection_name(
    conversion: &Conversion,
    mapping: &registry::MethodMapping,
) -> GeodeticResult<&'static str> {
    let angle = |code: u16| conversion.parameter_value_in(code, &unit::DEGREE).unwrap_or(0.0);
    match mapping.epsg_code {
        registry::EPSG_CODE_METHOD_HOTINE_OBLIQUE_MERCATOR_VARIANT_A => {
            let azimuth = angle(registry::EPSG_CODE_PARAMETER_AZIMUTH_INITIAL_LINE);
            let rectified = angle(registry::EPSG_CODE_PARAMETER_ANGLE_RECTIFIED_TO_SKEW_GRID);
            if (azimuth - rectified).abs() < 1e-10 {
                Ok("Hotine_Oblique_Mercator_Azimuth_Natural_Origin")
            } else {
                Ok("Rectified_Skew_Orthomorphic_Natural_Origin")
            }
        }
        registry::EPSG_CODE_METHOD_HOTINE_OBLIQUE_MERCATOR_VARIANT_B => {
            let azimuth = angle(registry::EPSG_CODE_PARAMETER_AZIMUTH_INITIAL_LINE);
            let rectified = angle(registry::EPSG_CODE_PARAMETER_ANGLE_RECTIFIED_TO_SKEW_GRID);
            if (azimuth - rectified).abs() < 1e-10 {
                Ok("Hotine_Oblique_Mercator_Azimuth_Center")
            } else {
                Ok("Rectified_Skew_Orthomorphic_Center")
            }
        }
        registry::EPSG_CODE_METHOD_POLAR_STEREOGRAPHIC_VARIANT_A => {
            let lat = angle(registry::EPSG_CODE_PARAMETER_LATITUDE_OF_NATURAL_ORIGIN);
            if lat > 0.0 {
                Ok("Stereographic_North_Pole")
            } else {
                Ok("Stereographic_South_Pole")
            }
        }
        registry::EPSG_CODE_METHOD_POLAR_STEREOGRAPHIC_VARIANT_B => {
            let lat = angle(registry::EPSG_CODE_PARAMETER_LATITUDE_STD_PARALLEL);
            if lat > 0.0 {
                Ok("Stereographic_North_Pole")
            } else {
                Ok("Stereographic_South_Pole")
            }
        }
        registry::EPSG_CODE_METHOD_MERCATOR_VARIANT_A
        | registry::EPSG_CODE_METHOD_MERCATOR_VARIANT_B => Ok("Mercator"),
        registry::EPSG_CODE_METHOD_KROVAK_NORTH_ORIENTED | registry::EPSG_CODE_METHOD_KROVAK => {
            Ok("Krovak")
        }
        registry::EPSG_CODE_METHOD_LAMBERT_CONIC_CONFORMAL_1SP
        | registry::EPSG_CODE_METHOD_LAMBERT_CONIC_CONFORMAL_2SP => {
            Ok("Lambert_Conformal_Conic")
        }
        _ => {
            if mapping.wkt1_name.is_empty() {
                Err(GeodeticError::FormattingError(format!(
                    "method '{}' has no WKT1 representation",
                    mapping.epsg_name
                )))
            } else {
                Ok(mapping.wkt1_name)
            }
        }
    }
}

fn emit_conversion_wkt1(
    conversion: &Conversion,
    linear_unit: &Unit,
    f: &mut WktFormatter,
) -> GeodeticResult<()> {
    let esri = f.version() == WktVersion::Wkt1Esri;
    let mapping = conversion.mapping().ok_or_else(|| {
        GeodeticError::FormattingError(format!(
            "cannot emit unknown projection '{}' in WKT1",
            conversion.method.name()
        ))
    })?;

    let projection_name = if esri {
        esri_projection_name(conversion, mapping)?
    } else if mapping.wkt1_name.is_empty() {
        return Err(GeodeticError::FormattingError(format!(
            "method '{}' has no WKT1 representation",
            mapping.epsg_name
        )));
    } else {
        mapping.wkt1_name
    };

    f.start_node(kw::PROJECTION);
    f.add_quoted_string(projection_name);
    if !esri {
        emit_identifiers(&conversion.method.base.identifiers, f);
    }
    f.end_node();

    let mercator_renormalized = esri
        && mapping.epsg_code == registry::EPSG_CODE_METHOD_MERCATOR_VARIANT_A;

    for value in &conversion.values {
        let param = registry::find_parameter(
            mapping,
            value.parameter.name(),
            value.parameter.epsg_code().map(|c| c as u16),
        );
        let wkt1_name = match param {
            Some(p) => p.wkt1_name,
            None => continue,
        };
        let numeric = wkt1_parameter_value(&value.value, linear_unit)?;
        if wkt1_name.is_empty() {
            // a parameter WKT1 cannot carry: the Mercator (1SP) latitude of
            // natural origin is renormalized for ESRI and must be zero for GDAL
            if mercator_renormalized {
                f.start_node(kw::PARAMETER);
                f.add_quoted_string("Standard_Parallel_1");
                f.add_number(numeric);
                f.end_node();
                continue;
            }
            if numeric != 0.0 {
                return Err(GeodeticError::FormattingError(format!(
                    "parameter '{}' with non-zero value cannot be represented in WKT1",
                    value.parameter.name()
                )));
            }
            continue;
        }
        f.start_node(kw::PARAMETER);
        if esri {
            f.add_quoted_string(&esri::esri_parameter_name(wkt1_name));
        } else {
            f.add_quoted_string(wkt1_name);
        }
        f.add_number(numeric);
        f.end_node();
    }

    if esri
        && matches!(
            mapping.epsg_code,
            registry::EPSG_CODE_METHOD_KROVAK_NORTH_ORIENTED | registry::EPSG_CODE_METHOD_KROVAK
        )
    {
        let north = mapping.epsg_code == registry::EPSG_CODE_METHOD_KROVAK_NORTH_ORIENTED;
        for (name, value) in [
            ("X_Scale", if north { -1.0 } else { 1.0 }),
            ("Y_Scale", 1.0),
            ("XY_Plane_Rotation", if north { 90.0 } else { 0.0 }),
        ] {
            f.start_node(kw::PARAMETER);
            f.add_quoted_string(name);
            f.add_number(value);
            f.end_node();
        }
    }
    Ok(())
}

fn emit_conversion_wkt2(
    conversion: &Conversion,
    f: &mut WktFormatter,
    keyword: &str,
) -> GeodeticResult<()> {
    f.start_node(keyword);
    f.add_quoted_string(display_name(&conversion.usage));
    f.start_node(kw::METHOD);
    f.add_quoted_string(conversion.method.name());
    emit_identifiers(&conversion.method.base.identifiers, f);
    f.end_node();
    for value in &conversion.values {
        match &value.value {
            ParameterValue::Filename(filename) => {
                f.start_node(kw::PARAMETERFILE);
                f.add_quoted_string(value.parameter.name());
                f.add_quoted_string(filename);
                f.end_node();
            }
            ParameterValue::Measure(measure) => {
                f.start_node(kw::PARAMETER);
                f.add_quoted_string(value.parameter.name());
                f.add_number(measure.value());
                let omit = f.is_simplified()
                    && match measure.unit().kind() {
                        UnitKind::Angular => measure.unit() == &*unit::DEGREE,
                        UnitKind::Linear => f
                            .current_axis_unit()
                            .map(|u| u == measure.unit())
                            .unwrap_or(false),
                        UnitKind::Scale => measure.unit() == &*unit::UNITY,
                        _ => true,
                    };
                if !omit && measure.unit().kind() != UnitKind::Unknown {
                    emit_unit(measure.unit(), f, wkt2_unit_keyword(measure.unit()));
                }
                emit_identifiers(&value.parameter.base.identifiers, f);
                f.end_node();
            }
            ParameterValue::Integer(i) => {
                f.start_node(kw::PARAMETER);
                f.add_quoted_string(value.parameter.name());
                f.add_int(*i as i64);
                f.end_node();
            }
            ParameterValue::String(s) => {
                f.start_node(kw::PARAMETER);
                f.add_quoted_string(value.parameter.name());
                f.add_quoted_string(s);
                f.end_node();
            }
            ParameterValue::Boolean(b) => {
                f.start_node(kw::PARAMETER);
                f.add_quoted_string(value.parameter.name());
                f.add_keyword(if *b { "true" } else { "false" });
                f.end_node();
            }
        }
    }
    f.end_node();
    Ok(())
}

fn emit_projected_crs(
    projected: &ProjectedCrs,
    f: &mut WktFormatter,
    keyword_override: Option<&str>,
) -> GeodeticResult<()> {
    let linear_unit = projected
        .coordinate_system
        .common_unit()
        .cloned()
        .unwrap_or_else(|| unit::METRE.clone());

    if f.version().is_wkt2() {
        f.start_node(keyword_override.unwrap_or(kw::PROJCRS));
        f.add_quoted_string(display_name(&projected.usage));
        let has_ids = !projected.usage.base.identifiers.is_empty();
        if has_ids {
            f.push_disable_ids();
        }
        let base_keyword = if f.version() == WktVersion::Wkt2_2018
            && projected.base_crs.is_geographic()
        {
            kw::BASEGEOGCRS
        } else {
            kw::BASEGEODCRS
        };
        match &*projected.base_crs {
            Crs::Geographic(geog) => {
                emit_geodetic_crs(&geog.geodetic, true, f, Some(base_keyword))?
            }
            Crs::Geodetic(geod) => emit_geodetic_crs(geod, false, f, Some(base_keyword))?,
            _ => {
                return Err(GeodeticError::InvariantViolation(
                    "projected CRS without a geodetic base".to_string(),
                ))
            }
        }
        f.push_axis_unit(linear_unit.clone());
        emit_conversion_wkt2(projected.conversion_ref(), f, kw::CONVERSION)?;
        emit_cs_wkt2(&projected.coordinate_system, f)?;
        f.pop_axis_unit();
        if has_ids {
            f.pop_disable_ids();
        }
        emit_usage(&projected.usage, f);
        emit_identifiers(&projected.usage.base.identifiers, f);
        emit_remark(&projected.usage, f);
        f.end_node();
        Ok(())
    } else {
        let esri = f.version() == WktVersion::Wkt1Esri;
        f.start_node(kw::PROJCS);
        let name = if esri {
            esri::esri_name(display_name(&projected.usage), ObjectKind::ProjectedCrs)
        } else {
            display_name(&projected.usage).to_string()
        };
        f.add_quoted_string(&name);
        let has_ids = !projected.usage.base.identifiers.is_empty();
        if has_ids {
            f.push_disable_ids();
        }
        match &*projected.base_crs {
            Crs::Geographic(geog) => emit_geodetic_crs_wkt1(&geog.geodetic, true, f)?,
            Crs::Geodetic(geod) => emit_geodetic_crs_wkt1(geod, false, f)?,
            _ => {
                return Err(GeodeticError::InvariantViolation(
                    "projected CRS without a geodetic base".to_string(),
                ))
            }
        }
        emit_conversion_wkt1(projected.conversion_ref(), &linear_unit, f)?;
        emit_unit(&linear_unit, f, kw::LENGTHUNIT);
        emit_axes_wkt1(&projected.coordinate_system, f);
        if has_ids {
            f.pop_disable_ids();
        }
        emit_identifiers(&projected.usage.base.identifiers, f);
        f.end_node();
        Ok(())
    }
}

fn emit_vertical_datum_wkt1(
    datum: &crate::datum::VerticalReferenceFrame,
    f: &mut WktFormatter,
) -> GeodeticResult<()> {
    f.start_node(kw::VERT_DATUM);
    f.add_quoted_string(display_name(&datum.usage));
    // CS_VD_GeoidModelDerived from OGC 01-009
    f.add_int(2005);
    if let Some(filename) = f.vertical_grid_extension().map(|s| s.to_string()) {
        f.start_node(kw::EXTENSION);
        f.add_quoted_string(kw::PROJ4_GRIDS);
        f.add_quoted_string(&filename);
        f.end_node();
    }
    emit_identifiers(&datum.usage.base.identifiers, f);
    f.end_node();
    Ok(())
}

fn emit_vertical_crs(
    vertical: &VerticalCrs,
    f: &mut WktFormatter,
    keyword_override: Option<&str>,
) -> GeodeticResult<()> {
    if f.version().is_wkt2() {
        f.start_node(keyword_override.unwrap_or(kw::VERTCRS));
        f.add_quoted_string(display_name(&vertical.usage));
        let has_ids = !vertical.usage.base.identifiers.is_empty();
        if has_ids {
            f.push_disable_ids();
        }
        match (&vertical.datum, &vertical.datum_ensemble) {
            (Some(datum), _) => {
                f.start_node(kw::VDATUM);
                f.add_quoted_string(display_name(&datum.usage));
                if let Some(anchor) = &datum.anchor {
                    f.start_node(kw::ANCHOR);
                    f.add_quoted_string(anchor);
                    f.end_node();
                }
                emit_identifiers(&datum.usage.base.identifiers, f);
                f.end_node();
            }
            (None, Some(ensemble)) => emit_datum_ensemble(ensemble, f)?,
            (None, None) => {
                return Err(GeodeticError::InvariantViolation(
                    "CRS without a datum or datum ensemble".to_string(),
                ))
            }
        }
        if keyword_override.is_none() {
            emit_cs_wkt2(&vertical.coordinate_system, f)?;
        }
        if has_ids {
            f.pop_disable_ids();
        }
        if keyword_override.is_none() {
            emit_usage(&vertical.usage, f);
        }
        emit_identifiers(&vertical.usage.base.identifiers, f);
        f.end_node();
        Ok(())
    } else {
        f.start_node(kw::VERT_CS);
        f.add_quoted_string(display_name(&vertical.usage));
        let has_ids = !vertical.usage.base.identifiers.is_empty();
        if has_ids {
            f.push_disable_ids();
        }
        match (&vertical.datum, &vertical.datum_ensemble) {
            (Some(datum), _) => emit_vertical_datum_wkt1(datum, f)?,
            (None, Some(_)) => {
                return Err(GeodeticError::FormattingError(
                    "cannot emit a vertical datum ensemble in WKT1".to_string(),
                ))
            }
            (None, None) => {
                return Err(GeodeticError::InvariantViolation(
                    "CRS without a datum or datum ensemble".to_string(),
                ))
            }
        }
        let cs_unit = vertical
            .coordinate_system
            .common_unit()
            .cloned()
            .unwrap_or_else(|| unit::METRE.clone());
        emit_unit(&cs_unit, f, kw::LENGTHUNIT);
        emit_axes_wkt1(&vertical.coordinate_system, f);
        if has_ids {
            f.pop_disable_ids();
        }
        emit_identifiers(&vertical.usage.base.identifiers, f);
        f.end_node();
        Ok(())
    }
}

fn emit_compound_crs(compound: &CompoundCrs, f: &mut WktFormatter) -> GeodeticResult<()> {
    let keyword = if f.version().is_wkt2() {
        kw::COMPOUNDCRS
    } else {
        kw::COMPD_CS
    };
    f.start_node(keyword);
    f.add_quoted_string(display_name(&compound.usage));
    let has_ids = !compound.usage.base.identifiers.is_empty();
    if has_ids {
        f.push_disable_ids();
    }
    for component in &compound.components {
        emit_crs_node(component, f, None)?;
    }
    if has_ids {
        f.pop_disable_ids();
    }
    emit_usage(&compound.usage, f);
    emit_identifiers(&compound.usage.base.identifiers, f);
    f.end_node();
    Ok(())
}

fn emit_abridged_transformation(
    transformation: &Transformation,
    f: &mut WktFormatter,
) -> GeodeticResult<()> {
    f.start_node(kw::ABRIDGEDTRANSFORMATION);
    f.add_quoted_string(display_name(&transformation.usage));
    f.start_node(kw::METHOD);
    f.add_quoted_string(transformation.method.name());
    emit_identifiers(&transformation.method.base.identifiers, f);
    f.end_node();
    for value in &transformation.values {
        match &value.value {
            ParameterValue::Filename(filename) => {
                f.start_node(kw::PARAMETERFILE);
                f.add_quoted_string(value.parameter.name());
                f.add_quoted_string(filename);
                f.end_node();
            }
            ParameterValue::Measure(measure) => {
                f.start_node(kw::PARAMETER);
                f.add_quoted_string(value.parameter.name());
                // abridged form: canonical units, scale as 1 + ppm
                let code = value.parameter.epsg_code().map(|c| c as u16);
                let emitted = match code {
                    Some(registry::EPSG_CODE_PARAMETER_SCALE_DIFFERENCE) => {
                        1.0 + measure.convert_to_unit(&unit::PARTS_PER_MILLION)?.value() * 1e-6
                    }
                    _ => match measure.unit().kind() {
                        UnitKind::Linear => measure.convert_to_unit(&unit::METRE)?.value(),
                        UnitKind::Angular => {
                            measure.convert_to_unit(&unit::ARC_SECOND)?.value()
                        }
                        _ => measure.value(),
                    },
                };
                f.add_number(emitted);
                emit_identifiers(&value.parameter.base.identifiers, f);
                f.end_node();
            }
            _ => {}
        }
    }
    emit_identifiers(&transformation.usage.base.identifiers, f);
    f.end_node();
    Ok(())
}

fn emit_bound_crs(bound: &BoundCrs, f: &mut WktFormatter) -> GeodeticResult<()> {
    if f.version().is_wkt2() {
        f.start_node(kw::BOUNDCRS);
        f.start_node(kw::SOURCECRS);
        emit_crs_node(&bound.base_crs, f, None)?;
        f.end_node();
        f.start_node(kw::TARGETCRS);
        emit_crs_node(&bound.hub_crs, f, None)?;
        f.end_node();
        emit_abridged_transformation(&bound.transformation, f)?;
        f.end_node();
        Ok(())
    } else {
        // WKT1 folds the bound information into the base CRS as TOWGS84 or
        // a datum grid extension
        if bound.hub_is_wgs84() {
            if let Ok(params) = bound.transformation.towgs84_parameters() {
                f.set_towgs84(params);
                let result = emit_crs_node(&bound.base_crs, f, None);
                f.clear_towgs84();
                return result;
            }
            if bound.transformation.is_horizontal_grid_method() {
                if let Some(filename) = bound.transformation.grid_filename() {
                    f.set_horizontal_grid_extension(filename.to_string());
                    return emit_crs_node(&bound.base_crs, f, None);
                }
            }
        }
        if bound.transformation.is_height_to_geographic3d() {
            if let Some(filename) = bound.transformation.grid_filename() {
                f.set_vertical_grid_extension(filename.to_string());
                return emit_crs_node(&bound.base_crs, f, None);
            }
        }
        Err(GeodeticError::FormattingError(
            "this bound CRS cannot be represented in WKT1".to_string(),
        ))
    }
}

fn emit_engineering_crs(
    eng: &crate::crs::EngineeringCrs,
    f: &mut WktFormatter,
    keyword_override: Option<&str>,
) -> GeodeticResult<()> {
    if f.version().is_wkt2() {
        f.start_node(keyword_override.unwrap_or(kw::ENGCRS));
        f.add_quoted_string(display_name(&eng.usage));
        f.start_node(kw::EDATUM);
        f.add_quoted_string(display_name(&eng.datum.usage));
        if let Some(anchor) = &eng.datum.anchor {
            f.start_node(kw::ANCHOR);
            f.add_quoted_string(anchor);
            f.end_node();
        }
        f.end_node();
        if keyword_override.is_none() {
            emit_cs_wkt2(&eng.coordinate_system, f)?;
        }
        emit_identifiers(&eng.usage.base.identifiers, f);
        f.end_node();
        Ok(())
    } else {
        f.start_node(kw::LOCAL_CS);
        f.add_quoted_string(display_name(&eng.usage));
        f.start_node(kw::LOCAL_DATUM);
        f.add_quoted_string(display_name(&eng.datum.usage));
        f.add_int(0);
        f.end_node();
        let cs_unit = eng
            .coordinate_system
            .common_unit()
            .cloned()
            .unwrap_or_else(|| unit::METRE.clone());
        emit_unit(&cs_unit, f, kw::LENGTHUNIT);
        emit_axes_wkt1(&eng.coordinate_system, f);
        emit_identifiers(&eng.usage.base.identifiers, f);
        f.end_node();
        Ok(())
    }
}

fn emit_temporal_crs(
    temporal: &crate::crs::TemporalCrs,
    f: &mut WktFormatter,
    keyword_override: Option<&str>,
) -> GeodeticResult<()> {
    if !f.version().is_wkt2() {
        return Err(GeodeticError::FormattingError(
            "a temporal CRS cannot be represented in WKT1".to_string(),
        ));
    }
    f.start_node(keyword_override.unwrap_or(kw::TIMECRS));
    f.add_quoted_string(display_name(&temporal.usage));
    f.start_node(kw::TDATUM);
    f.add_quoted_string(display_name(&temporal.datum.usage));
    if !temporal.datum.calendar.is_empty() && f.version() == WktVersion::Wkt2_2018 {
        f.start_node(kw::CALENDAR);
        f.add_quoted_string(&temporal.datum.calendar);
        f.end_node();
    }
    if !temporal.datum.temporal_origin.is_empty() {
        f.start_node(kw::TIMEORIGIN);
        f.add_quoted_string(&temporal.datum.temporal_origin);
        f.end_node();
    }
    f.end_node();
    if keyword_override.is_none() {
        // the TemporalDateTime/Count/Measure subtypes exist only in 2018
        if f.version() == WktVersion::Wkt2_2015 {
            f.start_node(kw::CS);
            f.add_keyword("temporal");
            f.add_int(temporal.coordinate_system.axes().len() as i64);
            f.end_node();
            for (i, axis) in temporal.coordinate_system.axes().iter().enumerate() {
                emit_axis_wkt2(axis, i + 1, f, false)?;
            }
        } else {
            emit_cs_wkt2(&temporal.coordinate_system, f)?;
        }
    }
    emit_identifiers(&temporal.usage.base.identifiers, f);
    f.end_node();
    Ok(())
}

fn emit_parametric_crs(
    parametric: &crate::crs::ParametricCrs,
    f: &mut WktFormatter,
    keyword_override: Option<&str>,
) -> GeodeticResult<()> {
    if !f.version().is_wkt2() {
        return Err(GeodeticError::FormattingError(
            "a parametric CRS cannot be represented in WKT1".to_string(),
        ));
    }
    f.start_node(keyword_override.unwrap_or(kw::PARAMETRICCRS));
    f.add_quoted_string(display_name(&parametric.usage));
    f.start_node(kw::PDATUM);
    f.add_quoted_string(display_name(&parametric.datum.usage));
    f.end_node();
    if keyword_override.is_none() {
        emit_cs_wkt2(&parametric.coordinate_system, f)?;
    }
    emit_identifiers(&parametric.usage.base.identifiers, f);
    f.end_node();
    Ok(())
}

fn emit_derived_crs(derived: &DerivedCrs, f: &mut WktFormatter) -> GeodeticResult<()> {
    if !f.version().is_wkt2() {
        return Err(GeodeticError::FormattingError(
            "a derived CRS cannot be represented in WKT1".to_string(),
        ));
    }
    let (outer, base_keyword): (&str, &str) = match derived.kind {
        DerivedKind::Geographic => {
            if f.version() == WktVersion::Wkt2_2018 {
                (kw::GEOGCRS, kw::BASEGEOGCRS)
            } else {
                (kw::GEODCRS, kw::BASEGEODCRS)
            }
        }
        DerivedKind::Geodetic => (kw::GEODCRS, kw::BASEGEODCRS),
        DerivedKind::Projected => {
            if f.version() != WktVersion::Wkt2_2018 {
                return Err(GeodeticError::FormattingError(
                    "a derived projected CRS requires WKT2:2018".to_string(),
                ));
            }
            (kw::DERIVEDPROJCRS, kw::BASEPROJCRS)
        }
        DerivedKind::Vertical => (kw::VERTCRS, kw::BASEVERTCRS),
        DerivedKind::Engineering => (kw::ENGCRS, kw::BASEENGCRS),
        DerivedKind::Temporal => {
            if f.version() != WktVersion::Wkt2_2018 {
                return Err(GeodeticError::FormattingError(
                    "a derived temporal CRS requires WKT2:2018".to_string(),
                ));
            }
            (kw::TIMECRS, kw::BASETIMECRS)
        }
        DerivedKind::Parametric => (kw::PARAMETRICCRS, kw::BASEPARAMCRS),
    };
    f.start_node(outer);
    f.add_quoted_string(display_name(&derived.usage));
    let has_ids = !derived.usage.base.identifiers.is_empty();
    if has_ids {
        f.push_disable_ids();
    }
    emit_crs_node(&derived.base_crs, f, Some(base_keyword))?;
    emit_conversion_wkt2(derived.conversion_ref(), f, kw::DERIVINGCONVERSION)?;
    emit_cs_wkt2(&derived.coordinate_system, f)?;
    if has_ids {
        f.pop_disable_ids();
    }
    emit_identifiers(&derived.usage.base.identifiers, f);
    f.end_node();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crs::{GeographicCrs, ProjectedCrs};

    #[test]
    fn test_epsg_4326_wkt2() {
        let crs = GeographicCrs::epsg_4326();
        let wkt = wkt_string(&crs, WktVersion::Wkt2_2015, false).unwrap();
        assert_eq!(
            wkt,
            "GEODCRS[\"WGS 84\",\
             DATUM[\"World Geodetic System 1984\",\
             ELLIPSOID[\"WGS 84\",6378137,298.257223563,LENGTHUNIT[\"metre\",1]]],\
             PRIMEM[\"Greenwich\",0,ANGLEUNIT[\"degree\",0.0174532925199433]],\
             CS[ellipsoidal,2],\
             AXIS[\"latitude\",north,ORDER[1],ANGLEUNIT[\"degree\",0.0174532925199433]],\
             AXIS[\"longitude\",east,ORDER[2],ANGLEUNIT[\"degree\",0.0174532925199433]],\
             ID[\"EPSG\",4326]]"
        );
    }

    #[test]
    fn test_epsg_4326_wkt2_2018_keyword() {
        let crs = GeographicCrs::epsg_4326();
        let wkt = wkt_string(&crs, WktVersion::Wkt2_2018, false).unwrap();
        assert!(wkt.starts_with("GEOGCRS[\"WGS 84\""));
    }

    #[test]
    fn test_epsg_4807_wkt1_gdal() {
        let crs = GeographicCrs::epsg_4807();
        let wkt = wkt_string(&crs, WktVersion::Wkt1Gdal, false).unwrap();
        // the Paris longitude is converted from grads to degrees
        assert!(wkt.contains("PRIMEM[\"Paris\",2.33722917"));
        assert!(wkt.contains("UNIT[\"grad\",0.015707963267949,AUTHORITY[\"EPSG\",\"9105\"]]"));
    }

    #[test]
    fn test_epsg_32631_wkt1_esri() {
        let crs = ProjectedCrs::epsg_32631();
        let wkt = wkt_string(&crs, WktVersion::Wkt1Esri, false).unwrap();
        assert!(wkt.starts_with("PROJCS[\"WGS_1984_UTM_Zone_31N\""));
        assert!(wkt.contains("GEOGCS[\"GCS_WGS_1984\""));
        assert!(wkt.contains("DATUM[\"D_WGS_1984\""));
        assert!(wkt.contains("SPHEROID[\"WGS_1984\""));
        assert!(wkt.contains("PROJECTION[\"Transverse_Mercator\"]"));
        assert!(wkt.contains("PARAMETER[\"False_Easting\",500000]"));
        assert!(wkt.contains("PARAMETER[\"False_Northing\",0]"));
        assert!(wkt.contains("PARAMETER[\"Central_Meridian\",3]"));
        assert!(wkt.contains("PARAMETER[\"Scale_Factor\",0.9996]"));
        assert!(wkt.contains("PARAMETER[\"Latitude_Of_Origin\",0]"));
        assert!(wkt.contains("UNIT[\"Meter\",1.0]"));
        // no authorities in the ESRI dialect
        assert!(!wkt.contains("AUTHORITY"));
    }

    #[test]
    fn test_simplified_mode() {
        let crs = GeographicCrs::epsg_4326();
        let wkt = wkt_string(&crs, WktVersion::Wkt2_2018, true).unwrap();
        assert!(!wkt.contains("ORDER"));
        assert!(!wkt.contains("ID["));
        // unit hoisted to CS level, prime meridian omitted for Greenwich
        assert!(!wkt.contains("PRIMEM"));
        assert_eq!(wkt.matches("ANGLEUNIT").count(), 1);
    }

    #[test]
    fn test_unknown_method_rejected_in_wkt1() {
        use crate::common::{Measure, Properties};
        use crate::common::unit::DEGREE;
        use crate::cs::CoordinateSystem;
        let conversion = Conversion::create_from_method_name_and_params(
            Properties::named("mystery"),
            "Mystery Projection",
            &[("some_angle", Measure::new(1.0, DEGREE.clone()))],
        )
        .unwrap();
        let crs = ProjectedCrs::create(
            Properties::named("mystery CRS"),
            GeographicCrs::epsg_4326(),
            conversion,
            CoordinateSystem::create_east_north(&unit::METRE).unwrap(),
        )
        .unwrap();
        let err = wkt_string(&crs, WktVersion::Wkt1Gdal, false).unwrap_err();
        assert!(matches!(err, GeodeticError::FormattingError(_)));
        // but WKT2 keeps it verbatim
        let wkt2 = wkt_string(&crs, WktVersion::Wkt2_2018, false).unwrap();
        assert!(wkt2.contains("METHOD[\"Mystery Projection\"]"));
    }
}
