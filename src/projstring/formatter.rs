//! PROJ-string emitter
//!
//! Builds `+proj=pipeline +step ...` output (PROJ 5 convention) or the
//! legacy flat `+proj=<name> +k=v ...` form (PROJ 4 convention) from the
//! CRS graph, consulting the method registry for keywords and unit
//! conversions.

use crate::common::unit::{self, Unit, UnitKind};
use crate::crs::{BoundCrs, CompoundCrs, Crs, GeodeticCrs, ProjectedCrs, VerticalCrs};
use crate::cs::{AxisDirection, CoordinateSystem};
use crate::datum::GeodeticReferenceFrame;
use crate::errors::{GeodeticError, GeodeticResult};
use crate::operation::registry;
use crate::operation::{Conversion, ParameterValue};
use crate::wkt::formatter::format_number;

/// Which PROJ-string flavour to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjConvention {
    /// `+proj=pipeline +step ...`
    Proj5,
    /// Legacy flat form
    Proj4,
}

#[derive(Debug, Default)]
struct Step {
    name: String,
    params: Vec<(String, Option<String>)>,
}

/// Assembles steps and parameters into the final string
#[derive(Debug)]
pub struct ProjStringFormatter {
    convention: ProjConvention,
    steps: Vec<Step>,
    /// Parameters appended after the last step (e.g. +vunits)
    globals: Vec<(String, Option<String>)>,
}

impl ProjStringFormatter {
    pub fn new(convention: ProjConvention) -> Self {
        ProjStringFormatter {
            convention,
            steps: Vec::new(),
            globals: Vec::new(),
        }
    }

    pub fn convention(&self) -> ProjConvention {
        self.convention
    }

    pub fn start_step(&mut self, name: &str) {
        self.steps.push(Step {
            name: name.to_string(),
            params: Vec::new(),
        });
    }

    pub fn add_flag(&mut self, key: &str) {
        if let Some(step) = self.steps.last_mut() {
            step.params.push((key.to_string(), None));
        }
    }

    pub fn add_param(&mut self, key: &str, value: &str) {
        if let Some(step) = self.steps.last_mut() {
            step.params.push((key.to_string(), Some(value.to_string())));
        }
    }

    pub fn add_param_number(&mut self, key: &str, value: f64) {
        self.add_param(key, &format_number(value));
    }

    pub fn add_global(&mut self, key: &str, value: &str) {
        self.globals.push((key.to_string(), Some(value.to_string())));
    }

    /// Append a raw modifier token such as `no_uoff` or `axis=wsu`
    pub fn add_modifier(&mut self, token: &str) {
        match token.split_once('=') {
            Some((key, value)) => self.add_param(key, value),
            None => self.add_flag(token),
        }
    }

    pub fn into_string(self) -> String {
        let mut parts: Vec<String> = Vec::new();
        match self.convention {
            ProjConvention::Proj5 => {
                let pipeline = self.steps.len() > 1;
                if pipeline {
                    parts.push("+proj=pipeline".to_string());
                }
                for step in &self.steps {
                    if pipeline {
                        parts.push("+step".to_string());
                    }
                    parts.push(format!("+proj={}", step.name));
                    for (key, value) in &step.params {
                        match value {
                            Some(value) => parts.push(format!("+{}={}", key, value)),
                            None => parts.push(format!("+{}", key)),
                        }
                    }
                }
            }
            ProjConvention::Proj4 => {
                if let Some(step) = self.steps.first() {
                    parts.push(format!("+proj={}", step.name));
                    for (key, value) in &step.params {
                        match value {
                            Some(value) => parts.push(format!("+{}={}", key, value)),
                            None => parts.push(format!("+{}", key)),
                        }
                    }
                }
            }
        }
        for (key, value) in &self.globals {
            match value {
                Some(value) => parts.push(format!("+{}={}", key, value)),
                None => parts.push(format!("+{}", key)),
            }
        }
        parts.join(" ")
    }
}

/// Serialize a CRS as a PROJ string
///
/// In the legacy convention an installed canonical bound CRS is emitted in
/// place of the bare CRS, so TOWGS84/nadgrids decorations survive.
pub fn crs_to_proj_string(crs: &Crs, convention: ProjConvention) -> GeodeticResult<String> {
    let mut formatter = ProjStringFormatter::new(convention);
    let effective = match (convention, crs.canonical_bound_crs()) {
        (ProjConvention::Proj4, Some(bound)) => &**bound,
        _ => crs,
    };
    emit_crs(effective, &mut formatter, &BoundExtras::default())?;
    Ok(formatter.into_string())
}

/// Datum-shift decorations harvested from a surrounding bound CRS
#[derive(Debug, Default, Clone)]
struct BoundExtras {
    towgs84: Option<Vec<f64>>,
    nadgrids: Option<String>,
    geoidgrids: Option<String>,
}

fn emit_crs(crs: &Crs, f: &mut ProjStringFormatter, extras: &BoundExtras) -> GeodeticResult<()> {
    match crs {
        Crs::Geographic(geog) => emit_geographic(&geog.geodetic, f, extras),
        Crs::Geodetic(geod) => emit_geocentric(geod, f, extras),
        Crs::Projected(projected) => emit_projected(projected, f, extras),
        Crs::Vertical(vertical) => emit_vertical(vertical, f),
        Crs::Compound(compound) => emit_compound(compound, f),
        Crs::Bound(bound) => emit_bound(bound, f),
        other => Err(GeodeticError::UnsupportedOperation(format!(
            "cannot express '{}' as a PROJ string",
            other.name()
        ))),
    }
}

/// `+ellps=`/`+a= +rf=` / `+datum=` tokens for a frame, plus `+pm=`
fn add_datum_params(
    frame: &GeodeticReferenceFrame,
    f: &mut ProjStringFormatter,
    extras: &BoundExtras,
    allow_datum_shorthand: bool,
) -> GeodeticResult<()> {
    let shorthand = if allow_datum_shorthand && extras.towgs84.is_none() && extras.nadgrids.is_none()
    {
        frame.proj_datum_name()
    } else {
        None
    };
    match shorthand {
        Some(datum) => {
            f.add_param("datum", datum);
        }
        None => {
            match frame.ellipsoid.proj_name() {
                Some(name) => f.add_param("ellps", name),
                None => {
                    let a = frame.ellipsoid.semi_major_axis().si_value();
                    f.add_param_number("a", a);
                    if frame.ellipsoid.is_sphere() {
                        f.add_param_number("b", a);
                    } else {
                        f.add_param_number("rf", frame.ellipsoid.compute_inverse_flattening());
                    }
                }
            }
            if let Some(towgs84) = &extras.towgs84 {
                let joined = towgs84
                    .iter()
                    .map(|v| format_number(*v))
                    .collect::<Vec<_>>()
                    .join(",");
                f.add_param("towgs84", &joined);
            }
            if let Some(nadgrids) = &extras.nadgrids {
                f.add_param("nadgrids", nadgrids);
            }
        }
    }
    if !frame.prime_meridian.is_greenwich() {
        match frame.prime_meridian.proj_name() {
            Some(name) => f.add_param("pm", name),
            None => f.add_param_number(
                "pm",
                frame
                    .prime_meridian
                    .longitude()
                    .convert_to_unit(&unit::DEGREE)?
                    .value(),
            ),
        }
    }
    Ok(())
}

/// Unit-conversion step token for an angular unit, `deg`-style keyword or a
/// numeric factor
fn angular_unit_token(unit_of_measure: &Unit) -> String {
    match unit_of_measure.proj_name() {
        Some(name) => name.to_string(),
        None => format_number(unit_of_measure.conversion_to_si()),
    }
}

fn frame_of(geod: &GeodeticCrs) -> GeodeticResult<&GeodeticReferenceFrame> {
    geod.effective_frame().ok_or_else(|| {
        GeodeticError::UnsupportedOperation(
            "CRS has no geodetic reference frame to derive PROJ parameters from".to_string(),
        )
    })
}

fn emit_geographic(
    geod: &GeodeticCrs,
    f: &mut ProjStringFormatter,
    extras: &BoundExtras,
) -> GeodeticResult<()> {
    let frame = frame_of(geod)?;
    match f.convention() {
        ProjConvention::Proj5 => {
            f.start_step("longlat");
            add_datum_params(frame, f, extras, false)?;
            let angular = geod
                .coordinate_system
                .common_unit()
                .cloned()
                .unwrap_or_else(|| unit::DEGREE.clone());
            if angular != *unit::RADIAN {
                f.start_step("unitconvert");
                f.add_param("xy_in", "rad");
                f.add_param("xy_out", &angular_unit_token(&angular));
            }
            if !geod.coordinate_system.is_east_north_order() {
                f.start_step("axisswap");
                f.add_param("order", "2,1");
            }
            Ok(())
        }
        ProjConvention::Proj4 => {
            f.start_step("longlat");
            add_datum_params(frame, f, extras, true)?;
            Ok(())
        }
    }
}

fn emit_geocentric(
    geod: &GeodeticCrs,
    f: &mut ProjStringFormatter,
    extras: &BoundExtras,
) -> GeodeticResult<()> {
    let frame = frame_of(geod)?;
    let cs_unit = geod
        .coordinate_system
        .common_unit()
        .cloned()
        .unwrap_or_else(|| unit::METRE.clone());
    match f.convention() {
        ProjConvention::Proj5 => {
            f.start_step("cart");
            add_datum_params(frame, f, extras, false)?;
            if cs_unit != *unit::METRE {
                f.start_step("unitconvert");
                f.add_param("xy_in", "m");
                f.add_param("z_in", "m");
                let token = match cs_unit.proj_name() {
                    Some(name) => name.to_string(),
                    None => format_number(cs_unit.conversion_to_si()),
                };
                f.add_param("xy_out", &token);
                f.add_param("z_out", &token);
            }
            Ok(())
        }
        ProjConvention::Proj4 => {
            if cs_unit != *unit::METRE {
                return Err(GeodeticError::UnsupportedOperation(
                    "a geocentric CRS with a non-metre unit has no legacy PROJ form".to_string(),
                ));
            }
            f.start_step("geocent");
            add_datum_params(frame, f, extras, true)?;
            Ok(())
        }
    }
}

/// Recognize the UTM parameter pattern and return (zone, north)
fn utm_parameters(conversion: &Conversion) -> Option<(u32, bool)> {
    if conversion.method.epsg_code() != Some(registry::EPSG_CODE_METHOD_TRANSVERSE_MERCATOR as u32)
    {
        return None;
    }
    let value = |code: u16| conversion.parameter_value_in(code, &unit::DEGREE);
    let linear = |code: u16| conversion.parameter_value_in(code, &unit::METRE);
    let scale = conversion
        .parameter_value(registry::EPSG_CODE_PARAMETER_SCALE_FACTOR_AT_NATURAL_ORIGIN)
        .and_then(|v| v.value.numeric_value())?;
    if value(registry::EPSG_CODE_PARAMETER_LATITUDE_OF_NATURAL_ORIGIN)? != 0.0
        || scale != registry::UTM_SCALE_FACTOR
        || linear(registry::EPSG_CODE_PARAMETER_FALSE_EASTING)? != registry::UTM_FALSE_EASTING
    {
        return None;
    }
    let false_northing = linear(registry::EPSG_CODE_PARAMETER_FALSE_NORTHING)?;
    let north = if false_northing == registry::UTM_NORTH_FALSE_NORTHING {
        true
    } else if false_northing == registry::UTM_SOUTH_FALSE_NORTHING {
        false
    } else {
        return None;
    };
    let lon0 = value(registry::EPSG_CODE_PARAMETER_LONGITUDE_OF_NATURAL_ORIGIN)?;
    let zone = (lon0 + 183.0) / 6.0;
    if zone.fract() == 0.0 && (1.0..=60.0).contains(&zone) {
        Some((zone as u32, north))
    } else {
        None
    }
}

fn emit_conversion_params(
    conversion: &Conversion,
    mapping: &registry::MethodMapping,
    f: &mut ProjStringFormatter,
) -> GeodeticResult<()> {
    for value in &conversion.values {
        let param = registry::find_parameter(
            mapping,
            value.parameter.name(),
            value.parameter.epsg_code().map(|c| c as u16),
        );
        let param = match param {
            Some(p) => p,
            None => continue,
        };
        let keyword = match param.proj_keywords.first() {
            Some(k) => *k,
            None => continue,
        };
        match &value.value {
            ParameterValue::Measure(measure) => {
                let emitted = match measure.unit().kind() {
                    UnitKind::Angular => measure.convert_to_unit(&unit::DEGREE)?.value(),
                    // lengths are multiplied into metres
                    UnitKind::Linear => measure.convert_to_unit(&unit::METRE)?.value(),
                    _ => measure.value(),
                };
                f.add_param_number(keyword, emitted);
            }
            ParameterValue::Integer(i) => f.add_param(keyword, &i.to_string()),
            ParameterValue::String(s) | ParameterValue::Filename(s) => f.add_param(keyword, s),
            ParameterValue::Boolean(true) => f.add_flag(keyword),
            ParameterValue::Boolean(false) => {}
        }
    }
    Ok(())
}

/// Axis-swap handling for projected CRSes, including the polar UPS case
/// where both axes share a direction
fn projected_axis_order(cs: &CoordinateSystem, f: &mut ProjStringFormatter) {
    let axes = cs.axes();
    if axes.len() < 2 || cs.is_east_north_order() {
        return;
    }
    let d0 = axes[0].direction;
    let d1 = axes[1].direction;
    if d0 == d1 {
        // both axes point the same way (polar grids): swap only when the
        // northing comes first
        let northing_first = axes[0].name().starts_with("Northing");
        let both_polar = matches!(d0, AxisDirection::North | AxisDirection::South);
        if both_polar && northing_first {
            f.start_step("axisswap");
            f.add_param("order", "2,1");
        }
        return;
    }
    if d0 == AxisDirection::North && d1 == AxisDirection::East {
        f.start_step("axisswap");
        f.add_param("order", "2,1");
    } else {
        let mut order = Vec::new();
        for axis in &axes[..2] {
            order.push(match axis.direction {
                AxisDirection::East => "1",
                AxisDirection::West => "-1",
                AxisDirection::North => "2",
                AxisDirection::South => "-2",
                _ => return,
            });
        }
        f.start_step("axisswap");
        f.add_param("order", &format!("{},{}", order[0], order[1]));
    }
}

fn emit_projected(
    projected: &ProjectedCrs,
    f: &mut ProjStringFormatter,
    extras: &BoundExtras,
) -> GeodeticResult<()> {
    let conversion = projected.conversion_ref();
    let base_geod = projected
        .base_crs
        .geodetic_crs()
        .ok_or_else(|| {
            GeodeticError::UnsupportedOperation(
                "projected CRS without a geodetic base".to_string(),
            )
        })?;
    let frame = frame_of(base_geod)?;

    let flat = f.convention() == ProjConvention::Proj4;
    match utm_parameters(conversion) {
        Some((zone, north)) => {
            f.start_step("utm");
            f.add_param("zone", &zone.to_string());
            if !north {
                f.add_flag("south");
            }
            add_datum_params(frame, f, extras, flat)?;
        }
        None => {
            let mapping = conversion.mapping();
            match mapping {
                Some(mapping) if !mapping.proj_name.is_empty() => {
                    f.start_step(mapping.proj_name);
                    for modifier in mapping.proj_modifiers {
                        f.add_modifier(modifier);
                    }
                    emit_conversion_params(conversion, mapping, f)?;
                    add_datum_params(frame, f, extras, flat)?;
                }
                _ => {
                    // lossy but explicit marker for methods PROJ cannot run
                    f.start_step("unimplemented");
                }
            }
        }
    }

    let linear = projected
        .coordinate_system
        .common_unit()
        .cloned()
        .unwrap_or_else(|| unit::METRE.clone());
    if linear != *unit::METRE {
        match f.convention() {
            ProjConvention::Proj5 => {
                f.start_step("unitconvert");
                f.add_param("xy_in", "m");
                let token = match linear.proj_name() {
                    Some(name) => name.to_string(),
                    None => format_number(linear.conversion_to_si()),
                };
                f.add_param("xy_out", &token);
            }
            ProjConvention::Proj4 => match linear.proj_name() {
                Some(name) => f.add_param("units", name),
                None => f.add_param_number("to_meter", linear.conversion_to_si()),
            },
        }
    }
    if f.convention() == ProjConvention::Proj5 {
        projected_axis_order(&projected.coordinate_system, f);
    }
    Ok(())
}

fn emit_vertical(vertical: &VerticalCrs, f: &mut ProjStringFormatter) -> GeodeticResult<()> {
    let vertical_unit = vertical
        .coordinate_system
        .common_unit()
        .cloned()
        .unwrap_or_else(|| unit::METRE.clone());
    match vertical_unit.proj_name() {
        Some(name) => f.add_global("vunits", name),
        None => f.add_global("vto_meter", &format_number(vertical_unit.conversion_to_si())),
    }
    Ok(())
}

fn emit_compound(compound: &CompoundCrs, f: &mut ProjStringFormatter) -> GeodeticResult<()> {
    for component in &compound.components {
        emit_crs(component, f, &BoundExtras::default())?;
    }
    Ok(())
}

fn emit_bound(bound: &BoundCrs, f: &mut ProjStringFormatter) -> GeodeticResult<()> {
    if f.convention() == ProjConvention::Proj5 {
        return Err(GeodeticError::UnsupportedOperation(
            "a bound CRS cannot be expressed in the pipeline convention".to_string(),
        ));
    }
    let mut extras = BoundExtras::default();
    if bound.hub_is_wgs84() {
        if let Ok(params) = bound.transformation.towgs84_parameters() {
            extras.towgs84 = Some(params);
        } else if bound.transformation.is_horizontal_grid_method() {
            extras.nadgrids = bound.transformation.grid_filename().map(|s| s.to_string());
        }
    }
    if extras.towgs84.is_none() && extras.nadgrids.is_none() {
        if bound.transformation.is_height_to_geographic3d() {
            extras.geoidgrids = bound.transformation.grid_filename().map(|s| s.to_string());
        } else {
            return Err(GeodeticError::UnsupportedOperation(
                "this bound CRS has no legacy PROJ representation".to_string(),
            ));
        }
    }
    if let Some(geoidgrids) = &extras.geoidgrids {
        emit_crs(&bound.base_crs, f, &BoundExtras::default())?;
        f.add_global("geoidgrids", geoidgrids);
        return Ok(());
    }
    emit_crs(&bound.base_crs, f, &extras)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Properties;
    use crate::crs::{GeographicCrs, ProjectedCrs, VerticalCrs};

    #[test]
    fn test_epsg_4326_pipeline() {
        let crs = GeographicCrs::epsg_4326();
        let s = crs_to_proj_string(&crs, ProjConvention::Proj5).unwrap();
        assert_eq!(
            s,
            "+proj=pipeline +step +proj=longlat +ellps=WGS84 \
             +step +proj=unitconvert +xy_in=rad +xy_out=deg \
             +step +proj=axisswap +order=2,1"
        );
    }

    #[test]
    fn test_epsg_4326_flat() {
        let crs = GeographicCrs::epsg_4326();
        let s = crs_to_proj_string(&crs, ProjConvention::Proj4).unwrap();
        assert_eq!(s, "+proj=longlat +datum=WGS84");
    }

    #[test]
    fn test_utm_flat() {
        let crs = ProjectedCrs::epsg_32631();
        let s = crs_to_proj_string(&crs, ProjConvention::Proj4).unwrap();
        assert_eq!(s, "+proj=utm +zone=31 +datum=WGS84");
    }

    #[test]
    fn test_compound_with_vertical() {
        let compound = crate::crs::CompoundCrs::create(
            Properties::named("WGS 84 / UTM zone 31N + ODN height"),
            vec![ProjectedCrs::epsg_32631(), VerticalCrs::epsg_5701()],
        )
        .unwrap();
        let flat = crs_to_proj_string(&compound, ProjConvention::Proj4).unwrap();
        assert_eq!(flat, "+proj=utm +zone=31 +datum=WGS84 +vunits=m");

        let pipeline = crs_to_proj_string(&compound, ProjConvention::Proj5).unwrap();
        assert!(pipeline.ends_with("+vunits=m"));
        assert!(pipeline.contains("+proj=utm +zone=31"));
    }

    #[test]
    fn test_bound_rejected_in_pipeline() {
        use crate::operation::Transformation;
        let base = GeographicCrs::epsg_4807();
        let hub = GeographicCrs::epsg_4326();
        let transformation = Transformation::create_geocentric_translations(
            Properties::named("NTF (Paris) to WGS 84"),
            base.clone(),
            hub.clone(),
            registry::EPSG_CODE_METHOD_GEOCENTRIC_TRANSLATION_GEOGRAPHIC_2D,
            -168.0,
            -60.0,
            320.0,
            vec![],
        )
        .unwrap();
        let bound = crate::crs::BoundCrs::create(base, hub, transformation).unwrap();
        let err = crs_to_proj_string(&bound, ProjConvention::Proj5).unwrap_err();
        assert!(matches!(err, GeodeticError::UnsupportedOperation(_)));

        let flat = crs_to_proj_string(&bound, ProjConvention::Proj4).unwrap();
        assert!(flat.contains("+towgs84=-168,-60,320"));
        // the datum shorthand is suppressed once a shift is attached
        assert!(!flat.contains("+datum="));
    }
}
