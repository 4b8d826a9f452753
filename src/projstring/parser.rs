//! PROJ-string parser
//!
//! Tokenizes `+key[=value]` sequences, decomposes pipelines, and rebuilds
//! the CRS graph. Unknown `+proj` values become opaque methods named
//! "PROJ <keyword>" so that round-tripping stays lossless.

use crate::common::unit::{self, Unit, UnitKind};
use crate::common::{Length, Measure, Properties, Scale};
use crate::crs::{
    BoundCrs, CompoundCrs, Crs, GeodeticCrs, GeographicCrs, ProjectedCrs, VerticalCrs,
};
use crate::cs::{AxisDirection, CoordinateSystem, CoordinateSystemAxis};
use crate::datum::{Ellipsoid, GeodeticReferenceFrame, PrimeMeridian, VerticalReferenceFrame};
use crate::errors::{GeodeticError, GeodeticResult};
use crate::operation::registry;
use crate::operation::{
    Conversion, OperationMethod, OperationParameter, OperationParameterValue, ParameterValue,
    Transformation,
};
use log::debug;
use std::sync::Arc;

type Token = (String, Option<String>);

/// One `+step` worth of tokens
#[derive(Debug, Clone, Default)]
struct ProjStep {
    inverted: bool,
    tokens: Vec<Token>,
}

impl ProjStep {
    fn proj_name(&self) -> Option<&str> {
        self.value("proj")
    }

    fn value(&self, key: &str) -> Option<&str> {
        self.tokens
            .iter()
            .find(|(k, _)| k == key)
            .and_then(|(_, v)| v.as_deref())
    }

    fn number(&self, key: &str) -> Option<f64> {
        self.value(key).and_then(|v| v.parse().ok())
    }

    fn has_flag(&self, key: &str) -> bool {
        self.tokens.iter().any(|(k, v)| k == key && v.is_none())
    }
}

/// PROJ-string parser
pub struct ProjStringParser;

impl ProjStringParser {
    pub fn new() -> Self {
        ProjStringParser
    }

    /// Parse a PROJ string into a CRS
    pub fn parse(&self, text: &str) -> GeodeticResult<Arc<Crs>> {
        let (title, mut steps, globals) = tokenize(text)?;
        if steps.is_empty() {
            return Err(GeodeticError::at(0, "no +proj token found"));
        }
        let crs = if steps.len() == 1 {
            // tokens written before +proj still belong to the lone step
            let mut step = steps.remove(0);
            for (key, value) in &globals {
                if step.value(key).is_none() && !step.has_flag(key) {
                    step.tokens.push((key.clone(), value.clone()));
                }
            }
            self.build_from_step(&step, title.as_deref(), &globals)?
        } else {
            self.build_from_pipeline(&steps, title.as_deref(), &globals)?
        };
        Ok(crs)
    }

    fn build_from_pipeline(
        &self,
        steps: &[ProjStep],
        title: Option<&str>,
        globals: &[Token],
    ) -> GeodeticResult<Arc<Crs>> {
        // postamble steps shape the coordinate system, the main step
        // carries the projection and datum
        let mut main: Option<&ProjStep> = None;
        let mut longlat: Option<&ProjStep> = None;
        let mut cart: Option<&ProjStep> = None;
        let mut unitconvert: Option<&ProjStep> = None;
        let mut axisswap: Option<&ProjStep> = None;
        for step in steps {
            match step.proj_name() {
                Some("unitconvert") => unitconvert = Some(step),
                Some("axisswap") => axisswap = Some(step),
                Some("longlat") | Some("latlon") | Some("latlong") | Some("lonlat") => {
                    longlat = Some(step)
                }
                Some("cart") => cart = Some(step),
                Some("push") | Some("pop") | None => {}
                Some(_) => main = Some(step),
            }
        }

        if let Some(main) = main {
            let mut synthetic = main.clone();
            if let Some(unitconvert) = unitconvert {
                if let Some(out) = unitconvert.value("xy_out") {
                    if out != "m" {
                        synthetic
                            .tokens
                            .push(("units".to_string(), Some(out.to_string())));
                    }
                }
            }
            if axisswap.map(|s| s.value("order") == Some("2,1")).unwrap_or(false) {
                synthetic
                    .tokens
                    .push(("axis".to_string(), Some("neu".to_string())));
            }
            return self.build_from_step(&synthetic, title, globals);
        }
        if let Some(longlat) = longlat {
            let mut synthetic = longlat.clone();
            if let Some(unitconvert) = unitconvert {
                if let Some(out) = unitconvert.value("xy_out") {
                    if out != "rad" && out != "deg" {
                        synthetic
                            .tokens
                            .push(("units".to_string(), Some(out.to_string())));
                    }
                }
            }
            // no axis swap step means the axes stay in longitude, latitude
            // order
            if axisswap.is_none() {
                synthetic
                    .tokens
                    .push(("axis".to_string(), Some("enu".to_string())));
            }
            return self.build_from_step(&synthetic, title, globals);
        }
        if let Some(cart) = cart {
            return self.build_from_step(cart, title, globals);
        }
        Err(GeodeticError::UnsupportedOperation(
            "pipeline contains no reconstructible CRS step".to_string(),
        ))
    }

    fn build_from_step(
        &self,
        step: &ProjStep,
        title: Option<&str>,
        globals: &[Token],
    ) -> GeodeticResult<Arc<Crs>> {
        let proj = step
            .proj_name()
            .ok_or_else(|| GeodeticError::at(0, "step without +proj"))?
            .to_string();
        if step.inverted {
            debug!("ignoring +inv on a CRS-defining step");
        }
        let crs = match proj.as_str() {
            "longlat" | "latlon" | "latlong" | "lonlat" => {
                self.build_geographic(step, title)?
            }
            "geocent" | "cart" => self.build_geocentric(step, title)?,
            _ => self.build_projected(step, &proj, title)?,
        };
        let crs = self.wrap_grid_shift(crs, step)?;
        self.wrap_vertical(crs, step, globals, title)
    }

    fn datum_from_step(&self, step: &ProjStep) -> GeodeticResult<GeodeticReferenceFrame> {
        let prime_meridian = match step.value("pm") {
            Some("paris") => PrimeMeridian::paris(),
            Some("greenwich") | None => PrimeMeridian::greenwich(),
            Some(numeric) => {
                let degrees: f64 = numeric.parse().map_err(|_| {
                    GeodeticError::InvalidValueType(format!(
                        "+pm value '{}' is neither a known meridian nor a number",
                        numeric
                    ))
                })?;
                PrimeMeridian::create(
                    Properties::named("unnamed"),
                    crate::common::Angle::degrees(degrees),
                )?
            }
        };

        if let Some(datum) = step.value("datum") {
            let frame = match datum {
                "WGS84" => GeodeticReferenceFrame::wgs84(),
                "NAD27" => GeodeticReferenceFrame::nad27(),
                "NAD83" => GeodeticReferenceFrame::nad83(),
                other => {
                    return Err(GeodeticError::NotFound(format!(
                        "+datum shorthand '{}'",
                        other
                    )))
                }
            };
            return Ok(frame);
        }

        let ellipsoid = if let Some(name) = step.value("ellps") {
            Ellipsoid::from_proj_name(name)
                .ok_or_else(|| GeodeticError::NotFound(format!("+ellps name '{}'", name)))?
        } else if let Some(a) = step.number("a") {
            if let Some(rf) = step.number("rf") {
                Ellipsoid::create_flattened_sphere(
                    Properties::named("unknown"),
                    Length::metres(a),
                    Scale::unity(rf),
                )?
            } else if let Some(b) = step.number("b") {
                Ellipsoid::create_two_axis(
                    Properties::named("unknown"),
                    Length::metres(a),
                    Length::metres(b),
                )?
            } else {
                Ellipsoid::create_sphere(Properties::named("unknown"), Length::metres(a))?
            }
        } else if let Some(radius) = step.number("R") {
            Ellipsoid::create_sphere(Properties::named("unknown"), Length::metres(radius))?
        } else {
            Ellipsoid::wgs84()
        };
        GeodeticReferenceFrame::create(
            Properties::named("unknown"),
            ellipsoid,
            None,
            prime_meridian,
        )
    }

    fn angular_unit_from_step(&self, step: &ProjStep) -> GeodeticResult<Unit> {
        match step.value("units") {
            Some(name) => Unit::from_proj_name(name)
                .filter(|u| u.kind() == UnitKind::Angular)
                .ok_or_else(|| GeodeticError::InvalidUnit(format!("angular unit '{}'", name))),
            None => Ok(unit::DEGREE.clone()),
        }
    }

    fn linear_unit_from_step(&self, step: &ProjStep) -> GeodeticResult<Unit> {
        if let Some(name) = step.value("units") {
            return Unit::from_proj_name(name)
                .filter(|u| u.kind() == UnitKind::Linear)
                .ok_or_else(|| GeodeticError::InvalidUnit(format!("linear unit '{}'", name)));
        }
        if let Some(to_meter) = step.number("to_meter") {
            return Ok(Unit::new("unknown", to_meter, UnitKind::Linear));
        }
        Ok(unit::METRE.clone())
    }

    /// The `+axis=` alphabet, e.g. `wsu` or `neu`
    fn cartesian_cs_from_axis(&self, step: &ProjStep, linear: &Unit) -> GeodeticResult<CoordinateSystem> {
        let spec = match step.value("axis") {
            Some(spec) => spec.to_string(),
            None => return CoordinateSystem::create_east_north(linear),
        };
        let mut axes = Vec::new();
        for letter in spec.chars().take(2) {
            let direction = AxisDirection::from_proj_letter(letter).ok_or_else(|| {
                GeodeticError::InvalidValueType(format!("+axis letter '{}'", letter))
            })?;
            let name = match direction {
                AxisDirection::East => "Easting",
                AxisDirection::West => "Westing",
                AxisDirection::North => "Northing",
                AxisDirection::South => "Southing",
                _ => "Unknown",
            };
            let abbreviation = match direction {
                AxisDirection::East | AxisDirection::West => "E",
                _ => "N",
            };
            axes.push(CoordinateSystemAxis::new(
                name,
                abbreviation,
                direction,
                linear.clone(),
            ));
        }
        CoordinateSystem::cartesian(axes)
    }

    fn build_geographic(
        &self,
        step: &ProjStep,
        title: Option<&str>,
    ) -> GeodeticResult<Arc<Crs>> {
        let frame = self.datum_from_step(step)?;
        let angular = self.angular_unit_from_step(step)?;
        let cs = match step.value("axis") {
            // the PROJ-internal order is longitude first
            Some("enu") => CoordinateSystem::create_longitude_latitude(&angular)?,
            _ => CoordinateSystem::create_latitude_longitude(&angular)?,
        };
        let name = title.unwrap_or(match frame.proj_datum_name() {
            Some("WGS84") => "WGS 84",
            Some("NAD27") => "NAD27",
            Some("NAD83") => "NAD83",
            _ => "unknown",
        });
        GeographicCrs::create(Properties::named(name), Some(frame), None, cs)
    }

    fn build_geocentric(
        &self,
        step: &ProjStep,
        title: Option<&str>,
    ) -> GeodeticResult<Arc<Crs>> {
        let frame = self.datum_from_step(step)?;
        let linear = self.linear_unit_from_step(step)?;
        let cs = CoordinateSystem::create_geocentric(&linear)?;
        GeodeticCrs::create(
            Properties::named(title.unwrap_or("unknown")),
            Some(frame),
            None,
            cs,
        )
    }

    fn build_projected(
        &self,
        step: &ProjStep,
        proj: &str,
        title: Option<&str>,
    ) -> GeodeticResult<Arc<Crs>> {
        let frame = self.datum_from_step(step)?;
        let base = GeographicCrs::create(
            Properties::named("unknown"),
            Some(frame),
            None,
            CoordinateSystem::create_latitude_longitude(&unit::DEGREE)?,
        )?;

        let conversion = if proj == "utm" {
            let zone = step.number("zone").unwrap_or(0.0) as u32;
            Conversion::create_utm(Properties::default(), zone, !step.has_flag("south"))?
        } else {
            match registry::find_method_by_proj_name(proj, &step.tokens) {
                Some(mapping) => {
                    let method = OperationMethod::from_mapping(mapping);
                    let mut values = Vec::new();
                    for param in mapping.params {
                        let keyword = match param.proj_keywords.iter().find(|k| step.value(k).is_some())
                        {
                            Some(k) => *k,
                            None => continue,
                        };
                        let value = match step.number(keyword) {
                            Some(v) => v,
                            None => continue,
                        };
                        let measure = match param.unit_kind {
                            UnitKind::Angular => Measure::new(value, unit::DEGREE.clone()),
                            UnitKind::Linear => Measure::new(value, unit::METRE.clone()),
                            UnitKind::Scale => Measure::new(value, unit::UNITY.clone()),
                            _ => Measure::new(value, unit::UNKNOWN.clone()),
                        };
                        values.push(OperationParameterValue::measure(
                            OperationParameter::from_mapping(param),
                            measure,
                        ));
                    }
                    Conversion::create(
                        Properties::named(&format!("unnamed ({})", mapping.epsg_name)),
                        method,
                        values,
                    )?
                }
                None => {
                    // opaque but lossless: keep every token as a parameter
                    let method = OperationMethod::named(&format!("PROJ {}", proj));
                    let skip = [
                        "proj", "datum", "ellps", "a", "b", "rf", "R", "pm", "units", "to_meter",
                        "axis", "towgs84", "nadgrids", "geoidgrids", "vunits", "vto_meter",
                        "no_defs", "type", "wktext",
                    ];
                    let mut values = Vec::new();
                    for (key, value) in &step.tokens {
                        if skip.contains(&key.as_str()) {
                            continue;
                        }
                        let parameter = OperationParameter::named(key);
                        let value = match value {
                            Some(v) => match v.parse::<f64>() {
                                Ok(n) => ParameterValue::Measure(Measure::new(
                                    n,
                                    unit::UNKNOWN.clone(),
                                )),
                                Err(_) => ParameterValue::String(v.clone()),
                            },
                            None => ParameterValue::Boolean(true),
                        };
                        values.push(OperationParameterValue::new(parameter, value));
                    }
                    Conversion::create(
                        Properties::named(&format!("PROJ {}", proj)),
                        method,
                        values,
                    )?
                }
            }
        };

        let linear = self.linear_unit_from_step(step)?;
        let cs = self.cartesian_cs_from_axis(step, &linear)?;
        ProjectedCrs::create(
            Properties::named(title.unwrap_or("unknown")),
            base,
            conversion,
            cs,
        )
    }

    /// `+towgs84=` / `+nadgrids=` wrap the CRS into a bound CRS
    fn wrap_grid_shift(&self, crs: Arc<Crs>, step: &ProjStep) -> GeodeticResult<Arc<Crs>> {
        if let Some(spec) = step.value("towgs84") {
            let params: Vec<f64> = spec
                .split(',')
                .map(|p| p.trim().parse::<f64>())
                .collect::<Result<_, _>>()
                .map_err(|_| {
                    GeodeticError::InvalidValueType(format!("+towgs84 values '{}'", spec))
                })?;
            if params.len() != 3 && params.len() != 7 {
                return Err(GeodeticError::InvalidValueType(format!(
                    "+towgs84 requires 3 or 7 values, got {}",
                    params.len()
                )));
            }
            let hub = GeographicCrs::epsg_4326();
            let transformation = if params.len() == 7 {
                Transformation::create_position_vector(
                    Properties::named(&format!("{} to WGS 84", crs.name())),
                    crs.clone(),
                    hub.clone(),
                    registry::EPSG_CODE_METHOD_POSITION_VECTOR_GEOGRAPHIC_2D,
                    params[0], params[1], params[2], params[3], params[4], params[5], params[6],
                    vec![],
                )?
            } else {
                Transformation::create_geocentric_translations(
                    Properties::named(&format!("{} to WGS 84", crs.name())),
                    crs.clone(),
                    hub.clone(),
                    registry::EPSG_CODE_METHOD_GEOCENTRIC_TRANSLATION_GEOGRAPHIC_2D,
                    params[0], params[1], params[2],
                    vec![],
                )?
            };
            return BoundCrs::create(crs, hub, transformation);
        }
        if let Some(filename) = step.value("nadgrids") {
            let hub = GeographicCrs::epsg_4326();
            let transformation = Transformation::create_ntv2(
                Properties::named(&format!("{} to WGS 84", crs.name())),
                crs.clone(),
                hub.clone(),
                filename,
                vec![],
            )?;
            return BoundCrs::create(crs, hub, transformation);
        }
        Ok(crs)
    }

    /// `+vunits=` / `+vto_meter=` add a vertical component
    fn wrap_vertical(
        &self,
        crs: Arc<Crs>,
        step: &ProjStep,
        globals: &[Token],
        title: Option<&str>,
    ) -> GeodeticResult<Arc<Crs>> {
        let lookup = |key: &str| {
            step.value(key)
                .map(|s| s.to_string())
                .or_else(|| {
                    globals
                        .iter()
                        .find(|(k, _)| k == key)
                        .and_then(|(_, v)| v.clone())
                })
        };
        let vertical_unit = if let Some(name) = lookup("vunits") {
            Some(
                Unit::from_proj_name(&name)
                    .filter(|u| u.kind() == UnitKind::Linear)
                    .ok_or_else(|| {
                        GeodeticError::InvalidUnit(format!("vertical unit '{}'", name))
                    })?,
            )
        } else if let Some(factor) = lookup("vto_meter") {
            let factor: f64 = factor.parse().map_err(|_| {
                GeodeticError::InvalidValueType(format!("+vto_meter value '{}'", factor))
            })?;
            Some(Unit::new("unknown", factor, UnitKind::Linear))
        } else {
            None
        };
        match vertical_unit {
            Some(vertical_unit) => {
                if matches!(&*crs, Crs::Vertical(_) | Crs::Compound(_)) {
                    return Ok(crs);
                }
                let vertical = VerticalCrs::create(
                    Properties::named("unknown height"),
                    Some(VerticalReferenceFrame::create(
                        Properties::named("unknown"),
                        None,
                        None,
                    )?),
                    None,
                    CoordinateSystem::create_gravity_related_height(&vertical_unit)?,
                )?;
                CompoundCrs::create(
                    Properties::named(title.unwrap_or("unknown + unknown height")),
                    vec![crs, vertical],
                )
            }
            None => Ok(crs),
        }
    }
}

impl Default for ProjStringParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Split the input into the optional title, the step list and the global
/// tokens. `+proj=pipeline` must be the first `+proj` when present.
fn tokenize(text: &str) -> GeodeticResult<(Option<String>, Vec<ProjStep>, Vec<Token>)> {
    let mut title = None;
    let mut steps: Vec<ProjStep> = Vec::new();
    let mut globals: Vec<Token> = Vec::new();
    let mut pipeline = false;
    let mut in_step = false;
    let mut seen_proj = false;

    for (index, raw) in text.split_whitespace().enumerate() {
        if raw.is_empty() || raw.starts_with('#') {
            continue;
        }
        let token = raw.strip_prefix('+').unwrap_or(raw);
        let (key, value) = match token.split_once('=') {
            Some((k, v)) => (k.to_string(), Some(v.to_string())),
            None => (token.to_string(), None),
        };

        if key == "step" {
            if !pipeline {
                return Err(GeodeticError::at(index, "+step outside of a pipeline"));
            }
            steps.push(ProjStep::default());
            in_step = true;
            continue;
        }
        if key == "inv" {
            match steps.last_mut() {
                Some(step) if in_step => step.inverted = true,
                _ => return Err(GeodeticError::at(index, "+inv outside of a step")),
            }
            continue;
        }
        if key == "title" && !seen_proj {
            title = value;
            continue;
        }
        if key == "proj" {
            match value.as_deref() {
                Some("pipeline") => {
                    if seen_proj {
                        return Err(GeodeticError::at(
                            index,
                            "+proj=pipeline must be the first +proj token",
                        ));
                    }
                    pipeline = true;
                    seen_proj = true;
                    continue;
                }
                Some(_) => {
                    seen_proj = true;
                    if !pipeline && steps.is_empty() {
                        steps.push(ProjStep::default());
                        in_step = true;
                    }
                }
                None => return Err(GeodeticError::at(index, "+proj without a value")),
            }
        }

        if in_step {
            match steps.last_mut() {
                Some(step) => step.tokens.push((key, value)),
                None => globals.push((key, value)),
            }
        } else if pipeline {
            globals.push((key, value));
        } else if !steps.is_empty() {
            steps.last_mut().unwrap().tokens.push((key, value));
        } else {
            globals.push((key, value));
        }
    }
    Ok((title, steps, globals))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crs::Criterion;

    #[test]
    fn test_parse_longlat_wgs84() {
        let parser = ProjStringParser::new();
        let crs = parser.parse("+proj=longlat +datum=WGS84").unwrap();
        assert!(crs.is_equivalent_to(&GeographicCrs::epsg_4326(), Criterion::Equivalent));
    }

    #[test]
    fn test_parse_utm() {
        let parser = ProjStringParser::new();
        let crs = parser.parse("+proj=utm +zone=31 +datum=WGS84").unwrap();
        match &*crs {
            Crs::Projected(projected) => {
                let conversion = projected.deriving_conversion();
                assert_eq!(
                    conversion.parameter_value_in(
                        registry::EPSG_CODE_PARAMETER_LONGITUDE_OF_NATURAL_ORIGIN,
                        &unit::DEGREE
                    ),
                    Some(3.0)
                );
            }
            _ => panic!("expected projected CRS"),
        }
    }

    #[test]
    fn test_parse_pipeline_round_trip() {
        let parser = ProjStringParser::new();
        let crs = parser
            .parse(
                "+proj=pipeline +step +proj=longlat +ellps=WGS84 \
                 +step +proj=unitconvert +xy_in=rad +xy_out=deg \
                 +step +proj=axisswap +order=2,1",
            )
            .unwrap();
        assert!(crs.is_equivalent_to(&GeographicCrs::epsg_4326(), Criterion::Equivalent));
    }

    #[test]
    fn test_parse_title_and_towgs84() {
        let parser = ProjStringParser::new();
        let crs = parser
            .parse("+title=My CRS +proj=longlat +ellps=intl +towgs84=1,2,3,4,5,6,7")
            .unwrap();
        match &*crs {
            Crs::Bound(bound) => {
                assert!(bound.hub_is_wgs84());
                let params = bound.transformation.towgs84_parameters().unwrap();
                assert_eq!(params.len(), 7);
                assert_eq!(params[6], 7.0);
            }
            _ => panic!("expected a bound CRS"),
        }
    }

    #[test]
    fn test_parse_unknown_projection_is_opaque() {
        let parser = ProjStringParser::new();
        let crs = parser
            .parse("+proj=madeup +lat_0=12 +custom_flag +strategy=fancy")
            .unwrap();
        match &*crs {
            Crs::Projected(projected) => {
                let conversion = projected.deriving_conversion();
                assert_eq!(conversion.method.name(), "PROJ madeup");
                assert_eq!(conversion.values.len(), 3);
            }
            _ => panic!("expected projected CRS"),
        }
    }

    #[test]
    fn test_parse_axis_wsu() {
        let parser = ProjStringParser::new();
        let crs = parser
            .parse("+proj=tmerc +lat_0=0 +lon_0=29 +axis=wsu +ellps=WGS84")
            .unwrap();
        let cs = crs.coordinate_system().unwrap();
        assert_eq!(cs.axes()[0].direction, AxisDirection::West);
        assert_eq!(cs.axes()[1].direction, AxisDirection::South);
    }

    #[test]
    fn test_parse_vunits_creates_compound() {
        let parser = ProjStringParser::new();
        let crs = parser
            .parse("+proj=utm +zone=31 +datum=WGS84 +vunits=m")
            .unwrap();
        match &*crs {
            Crs::Compound(compound) => {
                assert_eq!(compound.components.len(), 2);
                assert!(matches!(&*compound.components[1], Crs::Vertical(_)));
            }
            _ => panic!("expected compound CRS"),
        }
    }

    #[test]
    fn test_comment_and_pipeline_ordering() {
        let parser = ProjStringParser::new();
        assert!(parser.parse("# just a comment").is_err());
        assert!(parser
            .parse("+proj=longlat +proj=pipeline")
            .is_err());
    }
}
