//! WKT parser
//!
//! Dispatches on the root keyword of the tokenized tree and builds the
//! object graph. Accepts WKT1-GDAL, WKT1-ESRI, WKT2:2015 and WKT2:2018
//! input; the dialect is detected, never declared.

use crate::common::unit::{self, Unit, UnitKind};
use crate::common::{Angle, Identifier, Length, Measure, Properties, Scale};
use crate::context::{AuthorityContext, ObjectKind};
use crate::crs::{
    BoundCrs, CompoundCrs, Crs, DerivedCrs, DerivedKind, EngineeringCrs, GeodeticCrs,
    GeographicCrs, ParametricCrs, ProjectedCrs, TemporalCrs, VerticalCrs,
};
use crate::cs::{AxisDirection, CoordinateSystem, CoordinateSystemAxis, TemporalCsKind};
use crate::datum::{
    Datum, DatumEnsemble, Ellipsoid, EngineeringDatum, GeodeticReferenceFrame, ParametricDatum,
    PrimeMeridian, TemporalDatum, VerticalReferenceFrame,
};
use crate::errors::{GeodeticError, GeodeticResult};
use crate::operation::registry;
use crate::operation::{
    ConcatenatedOperation, Conversion, CoordinateOperation, OperationMethod, OperationParameter,
    OperationParameterValue, Transformation,
};
use crate::wkt::esri;
use crate::wkt::keywords as kw;
use crate::wkt::tokenizer::{tokenize, WktNode, WktValue};
use log::debug;
use std::sync::Arc;

/// Grid filenames captured from WKT1 datum extensions, lifted to a bound
/// CRS once the tree is built
#[derive(Debug, Default, Clone)]
struct DatumExtensions {
    towgs84: Option<Vec<f64>>,
    nadgrids: Option<String>,
    geoidgrids: Option<String>,
}

/// WKT parser with an optional authority database
pub struct WktParser<'a> {
    context: Option<&'a dyn AuthorityContext>,
    esri_input: bool,
}

impl<'a> WktParser<'a> {
    pub fn new() -> Self {
        WktParser {
            context: None,
            esri_input: false,
        }
    }

    pub fn with_context(context: &'a dyn AuthorityContext) -> Self {
        WktParser {
            context: Some(context),
            esri_input: false,
        }
    }

    /// Parse a WKT document into a CRS
    pub fn parse(&mut self, text: &str) -> GeodeticResult<Arc<Crs>> {
        let root = tokenize(text)?;
        self.esri_input = detect_esri(&root);
        if self.esri_input {
            debug!("detected WKT1-ESRI input");
        }
        self.parse_crs_node(&root)
    }

    /// Parse a standalone coordinate-operation document
    pub fn parse_operation(&mut self, text: &str) -> GeodeticResult<CoordinateOperation> {
        let root = tokenize(text)?;
        self.parse_operation_node(&root)
    }

    fn parse_operation_node(&self, node: &WktNode) -> GeodeticResult<CoordinateOperation> {
        let keyword = node.keyword.to_ascii_uppercase();
        match keyword.as_str() {
            kw::COORDINATEOPERATION | kw::ABRIDGEDTRANSFORMATION => Ok(
                CoordinateOperation::Transformation(self.parse_transformation(node)?),
            ),
            kw::CONVERSION | kw::DERIVINGCONVERSION => Ok(CoordinateOperation::Conversion(
                self.parse_conversion_wkt2(node)?,
            )),
            kw::CONCATENATEDOPERATION => {
                let mut operations = Vec::new();
                for step in node.nodes(kw::STEP) {
                    let inner = step
                        .children
                        .iter()
                        .find_map(|c| c.as_node())
                        .ok_or_else(|| GeodeticError::at(step.position, "empty STEP"))?;
                    operations.push(self.parse_operation_node(inner)?);
                }
                Ok(CoordinateOperation::Concatenated(
                    ConcatenatedOperation::create(self.parse_properties(node), operations)?,
                ))
            }
            other => Err(GeodeticError::UnknownKeyword(other.to_string())),
        }
    }

    /// WKT2 `COORDINATEOPERATION` with explicit source and target CRSes
    fn parse_transformation(&self, node: &WktNode) -> GeodeticResult<Transformation> {
        let source = node
            .node(&[kw::SOURCECRS])
            .and_then(|n| n.children.first())
            .and_then(|c| c.as_node())
            .ok_or_else(|| GeodeticError::at(node.position, "operation without SOURCECRS"))?;
        let target = node
            .node(&[kw::TARGETCRS])
            .and_then(|n| n.children.first())
            .and_then(|c| c.as_node())
            .ok_or_else(|| GeodeticError::at(node.position, "operation without TARGETCRS"))?;
        let source = self.parse_crs_node(source)?;
        let target = self.parse_crs_node(target)?;

        let method_node = node
            .node(&[kw::METHOD])
            .ok_or_else(|| GeodeticError::at(node.position, "operation without METHOD"))?;
        let mut method = OperationMethod::named(method_node.name_child().unwrap_or(""));
        method.base.identifiers = parse_identifiers(method_node);

        let mut values = Vec::new();
        for param_node in node.nodes(kw::PARAMETER) {
            let param_name = param_node.name_child().unwrap_or("").to_string();
            let code = parse_identifiers(param_node).iter().find_map(|id| {
                if id.codespace.as_deref() == Some("EPSG") {
                    id.code.parse::<u16>().ok()
                } else {
                    None
                }
            });
            let value = param_node
                .numbers()
                .first()
                .copied()
                .ok_or_else(|| GeodeticError::at(param_node.position, "PARAMETER without value"))?;
            let declared_unit = param_node
                .node(&[kw::LENGTHUNIT, kw::ANGLEUNIT, kw::SCALEUNIT, kw::TIMEUNIT, kw::UNIT])
                .map(|n| parse_unit(n, UnitKind::Unknown))
                .transpose()?
                .unwrap_or_else(|| unit::UNKNOWN.clone());
            let parameter = match code {
                Some(code) => OperationParameter::epsg(&param_name, code),
                None => OperationParameter::named(&param_name),
            };
            values.push(OperationParameterValue::measure(
                parameter,
                Measure::new(value, declared_unit),
            ));
        }
        for file_node in node.nodes(kw::PARAMETERFILE) {
            let mut strings = file_node.children.iter().filter_map(|c| c.as_quoted());
            let param_name = strings.next().unwrap_or("").to_string();
            let filename = strings.next().unwrap_or("").to_string();
            values.push(OperationParameterValue::filename(
                OperationParameter::named(&param_name),
                &filename,
            ));
        }

        let accuracies = node
            .nodes(kw::OPERATIONACCURACY)
            .filter_map(|n| n.numbers().first().copied())
            .collect();
        Transformation::create(
            self.parse_properties(node),
            source,
            target,
            method,
            values,
            accuracies,
        )
    }

    fn parse_crs_node(&self, node: &WktNode) -> GeodeticResult<Arc<Crs>> {
        let keyword = node.keyword.to_ascii_uppercase();
        match keyword.as_str() {
            kw::GEOGCS | kw::GEOGCRS | kw::GEODCRS | kw::BASEGEOGCRS | kw::BASEGEODCRS => {
                self.parse_geodetic_crs(node)
            }
            kw::GEOCCS => self.parse_geodetic_crs(node),
            kw::PROJCS | kw::PROJCRS | kw::BASEPROJCRS => self.parse_projected_crs(node),
            kw::VERTCS | kw::VERT_CS | kw::VERTCRS | kw::BASEVERTCRS => {
                self.parse_vertical_crs(node)
            }
            kw::COMPD_CS | kw::COMPOUNDCRS => self.parse_compound_crs(node),
            kw::BOUNDCRS => self.parse_bound_crs(node),
            kw::TIMECRS | kw::BASETIMECRS => self.parse_temporal_crs(node),
            kw::ENGCRS | kw::LOCAL_CS | kw::BASEENGCRS => self.parse_engineering_crs(node),
            kw::PARAMETRICCRS | kw::BASEPARAMCRS => self.parse_parametric_crs(node),
            kw::DERIVEDPROJCRS => self.parse_derived_projected_crs(node),
            other => Err(GeodeticError::UnknownKeyword(other.to_string())),
        }
    }

    fn parse_properties(&self, node: &WktNode) -> Properties {
        let mut properties = Properties {
            name: node.name_child().map(|s| s.to_string()),
            identifiers: parse_identifiers(node),
            ..Default::default()
        };
        if let Some(scope) = node.node(&[kw::SCOPE]).and_then(|n| n.name_child()) {
            properties.scope = Some(scope.to_string());
        }
        let mut extent = crate::common::Extent::default();
        let mut extent_nodes: Vec<&WktNode> = node.nodes(kw::AREA).collect();
        extent_nodes.extend(node.nodes(kw::BBOX));
        extent_nodes.extend(node.nodes(kw::VERTICALEXTENT));
        extent_nodes.extend(node.nodes(kw::TIMEEXTENT));
        for usage in node.nodes(kw::USAGE) {
            if let Some(scope) = usage.node(&[kw::SCOPE]).and_then(|n| n.name_child()) {
                properties.scope = Some(scope.to_string());
            }
            extent_nodes.extend(usage.nodes(kw::AREA));
            extent_nodes.extend(usage.nodes(kw::BBOX));
            extent_nodes.extend(usage.nodes(kw::VERTICALEXTENT));
            extent_nodes.extend(usage.nodes(kw::TIMEEXTENT));
        }
        for extent_node in extent_nodes {
            match extent_node.keyword.to_ascii_uppercase().as_str() {
                kw::AREA => {
                    extent.description = extent_node.name_child().map(|s| s.to_string());
                }
                kw::BBOX => {
                    let numbers = extent_node.numbers();
                    if numbers.len() == 4 {
                        extent.bboxes.push(crate::common::GeographicBoundingBox {
                            south: numbers[0],
                            west: numbers[1],
                            north: numbers[2],
                            east: numbers[3],
                        });
                    }
                }
                kw::VERTICALEXTENT => {
                    let numbers = extent_node.numbers();
                    if numbers.len() >= 2 {
                        let vertical_unit = extent_node
                            .node(&[kw::LENGTHUNIT, kw::UNIT])
                            .map(|n| parse_unit(n, UnitKind::Linear))
                            .transpose()
                            .ok()
                            .flatten()
                            .unwrap_or_else(|| unit::METRE.clone());
                        extent.vertical.push(crate::common::VerticalExtent {
                            minimum: numbers[0],
                            maximum: numbers[1],
                            unit: vertical_unit,
                        });
                    }
                }
                kw::TIMEEXTENT => {
                    let mut strings = extent_node
                        .children
                        .iter()
                        .filter_map(|c| c.as_quoted().map(|s| s.to_string()));
                    if let (Some(start), Some(stop)) = (strings.next(), strings.next()) {
                        extent.temporal.push(crate::common::TemporalExtent { start, stop });
                    }
                }
                _ => {}
            }
        }
        if extent.description.is_some()
            || !extent.bboxes.is_empty()
            || !extent.vertical.is_empty()
            || !extent.temporal.is_empty()
        {
            properties.domain_of_validity = Some(extent);
        }
        if let Some(remark) = node.node(&[kw::REMARK]).and_then(|n| n.name_child()) {
            properties.remarks = Some(remark.to_string());
        }
        properties
    }

    /// Reverse-alias an ESRI CRS name, through the database when available
    fn dealias_crs_name(&self, name: &str, kind: ObjectKind) -> String {
        if !self.esri_input {
            return name.to_string();
        }
        if let Some(context) = self.context {
            if let Some(official) = context.resolve_official_name(name, kind, "ESRI") {
                return official;
            }
        }
        if let Some(official) = esri::official_name(name) {
            return official;
        }
        esri::dealias_without_database(name)
    }

    fn parse_geodetic_datum(
        &self,
        node: &WktNode,
        prime_meridian: PrimeMeridian,
        extensions: &mut DatumExtensions,
    ) -> GeodeticResult<GeodeticReferenceFrame> {
        let ellipsoid_node = node
            .node(&[kw::ELLIPSOID, kw::SPHEROID])
            .ok_or_else(|| {
                GeodeticError::at(node.position, "datum without ELLIPSOID/SPHEROID")
            })?;
        let ellipsoid = self.parse_ellipsoid(ellipsoid_node)?;
        let anchor = node
            .node(&[kw::ANCHOR])
            .and_then(|n| n.name_child())
            .map(|s| s.to_string());

        if let Some(towgs84) = node.node(&[kw::TOWGS84]) {
            let numbers = towgs84.numbers();
            if numbers.len() == 7 || numbers.len() == 3 {
                extensions.towgs84 = Some(numbers);
            } else {
                return Err(GeodeticError::at(
                    towgs84.position,
                    format!("TOWGS84 requires 3 or 7 values, got {}", numbers.len()),
                ));
            }
        }
        if let Some(extension) = node.node(&[kw::EXTENSION]) {
            let mut strings = extension.children.iter().filter_map(|c| c.as_quoted());
            if strings.next() == Some(kw::PROJ4_GRIDS) {
                if let Some(filename) = strings.next() {
                    extensions.nadgrids = Some(filename.to_string());
                }
            }
        }

        let mut properties = self.parse_properties(node);
        if let Some(name) = &properties.name {
            let dealiased = self.dealias_crs_name(name, ObjectKind::Datum);
            properties.name = Some(dealiased);
        }
        GeodeticReferenceFrame::create(properties, ellipsoid, anchor, prime_meridian)
    }

    fn parse_ellipsoid(&self, node: &WktNode) -> GeodeticResult<Ellipsoid> {
        let numbers = node.numbers();
        if numbers.len() < 2 {
            return Err(GeodeticError::at(
                node.position,
                "ellipsoid requires a semi-major axis and an inverse flattening",
            ));
        }
        let axis_unit = node
            .node(&[kw::LENGTHUNIT, kw::UNIT])
            .map(|n| parse_unit(n, UnitKind::Linear))
            .transpose()?
            .unwrap_or_else(|| unit::METRE.clone());
        let semi_major = Length::new(numbers[0], axis_unit)?;
        let properties = self.parse_properties(node);
        if numbers[1] == 0.0 {
            Ellipsoid::create_sphere(properties, semi_major)
        } else {
            Ellipsoid::create_flattened_sphere(properties, semi_major, Scale::unity(numbers[1]))
        }
    }

    fn parse_prime_meridian(
        &self,
        node: Option<&WktNode>,
        crs_angular_unit: &Unit,
        is_wkt1: bool,
    ) -> GeodeticResult<PrimeMeridian> {
        let node = match node {
            Some(n) => n,
            None => return Ok(PrimeMeridian::greenwich()),
        };
        let value = node
            .numbers()
            .first()
            .copied()
            .ok_or_else(|| GeodeticError::at(node.position, "PRIMEM without a longitude"))?;
        let explicit_unit = node
            .node(&[kw::ANGLEUNIT, kw::UNIT])
            .map(|n| parse_unit(n, UnitKind::Angular))
            .transpose()?;
        let longitude = match explicit_unit {
            Some(u) => Angle::new(value, u)?,
            None if is_wkt1 => {
                // WKT1 states the longitude in degrees; re-express it in the
                // CRS angular unit so WKT2 round-trips keep the native unit
                let in_degrees = Angle::degrees(value);
                if crs_angular_unit != &*unit::DEGREE
                    && crs_angular_unit.kind() == UnitKind::Angular
                {
                    in_degrees.convert_to_unit(crs_angular_unit)?
                } else {
                    in_degrees
                }
            }
            None => Angle::new(value, crs_angular_unit.clone())?,
        };
        let mut properties = self.parse_properties(node);
        if properties.name.is_none() {
            properties.name = Some("Greenwich".to_string());
        }
        // recover the well-known identity of Greenwich and Paris
        if properties.identifiers.is_empty() {
            match properties.name.as_deref() {
                Some("Greenwich") => properties.identifiers.push(Identifier::epsg(8901)),
                Some("Paris") => properties.identifiers.push(Identifier::epsg(8903)),
                _ => {}
            }
        }
        PrimeMeridian::create(properties, longitude)
    }

    fn parse_datum_ensemble(&self, node: &WktNode) -> GeodeticResult<DatumEnsemble> {
        let ellipsoid = node
            .node(&[kw::ELLIPSOID, kw::SPHEROID])
            .map(|n| self.parse_ellipsoid(n))
            .transpose()?;
        let mut members = Vec::new();
        for member in node.nodes(kw::MEMBER) {
            let properties = self.parse_properties(member);
            match &ellipsoid {
                Some(ellipsoid) => members.push(Datum::Geodetic(GeodeticReferenceFrame::create(
                    properties,
                    ellipsoid.clone(),
                    None,
                    PrimeMeridian::greenwich(),
                )?)),
                None => members.push(Datum::Vertical(VerticalReferenceFrame::create(
                    properties, None, None,
                )?)),
            }
        }
        let accuracy = node
            .node(&[kw::ENSEMBLEACCURACY])
            .and_then(|n| n.numbers().first().copied())
            .ok_or_else(|| {
                GeodeticError::at(node.position, "ENSEMBLE without ENSEMBLEACCURACY")
            })?;
        DatumEnsemble::create(self.parse_properties(node), members, accuracy)
    }

    fn parse_axis(
        &self,
        node: &WktNode,
        fallback_unit: &Unit,
    ) -> GeodeticResult<CoordinateSystemAxis> {
        let raw_name = node.name_child().unwrap_or("");
        let direction_token = node
            .children
            .iter()
            .find_map(|c| c.as_bare())
            .ok_or_else(|| GeodeticError::at(node.position, "AXIS without a direction"))?;
        let direction = AxisDirection::parse(direction_token).ok_or_else(|| {
            GeodeticError::at(
                node.position,
                format!("unrecognized axis direction '{}'", direction_token),
            )
        })?;
        let axis_unit = node
            .node(&[kw::LENGTHUNIT, kw::ANGLEUNIT, kw::SCALEUNIT, kw::TIMEUNIT, kw::PARAMETRICUNIT, kw::UNIT])
            .map(|n| parse_unit(n, UnitKind::Unknown))
            .transpose()?
            .unwrap_or_else(|| fallback_unit.clone());

        // "longitude (lon)" carries the abbreviation in parentheses
        let (name_part, abbreviation) = match raw_name.rfind('(') {
            Some(open) if raw_name.ends_with(')') => {
                let abbrev = raw_name[open + 1..raw_name.len() - 1].to_string();
                (raw_name[..open].trim_end().to_string(), abbrev)
            }
            _ => (raw_name.to_string(), String::new()),
        };
        // names arrive lowercased from both WKT1 and WKT2 documents
        let name = CoordinateSystemAxis::normalized_name(&name_part);
        let mut axis = CoordinateSystemAxis::new(&name, &abbreviation, direction, axis_unit);
        if let Some(meridian) = node.node(&[kw::MERIDIAN]) {
            if let Some(value) = meridian.numbers().first() {
                let meridian_unit = meridian
                    .node(&[kw::ANGLEUNIT, kw::UNIT])
                    .map(|n| parse_unit(n, UnitKind::Angular))
                    .transpose()?
                    .unwrap_or_else(|| unit::DEGREE.clone());
                axis.meridian = Some(Angle::new(*value, meridian_unit)?);
            }
        }
        Ok(axis)
    }

    /// WKT2 `CS` + `AXIS` children; ordered by their `ORDER` nodes when
    /// present
    fn parse_cs_wkt2(&self, node: &WktNode) -> GeodeticResult<Option<CoordinateSystem>> {
        let cs_node = match node.node(&[kw::CS]) {
            Some(n) => n,
            None => return Ok(None),
        };
        let cs_type = cs_node
            .children
            .iter()
            .find_map(|c| c.as_bare())
            .ok_or_else(|| GeodeticError::at(cs_node.position, "CS without a type"))?
            .to_string();

        // a CS-level unit may follow the axes in simplified output
        let cs_unit = node
            .children
            .iter()
            .filter_map(|c| c.as_node())
            .filter(|n| {
                [kw::UNIT, kw::LENGTHUNIT, kw::ANGLEUNIT, kw::SCALEUNIT, kw::TIMEUNIT, kw::PARAMETRICUNIT]
                    .iter()
                    .any(|k| n.is_keyword(k))
            })
            .last()
            .map(|n| parse_unit(n, UnitKind::Unknown))
            .transpose()?
            .unwrap_or_else(|| unit::UNKNOWN.clone());

        let mut axes: Vec<(usize, CoordinateSystemAxis)> = Vec::new();
        for (index, axis_node) in node.nodes(kw::AXIS).enumerate() {
            let order = axis_node
                .node(&[kw::ORDER])
                .and_then(|n| n.numbers().first().copied())
                .map(|n| n as usize)
                .unwrap_or(index + 1);
            axes.push((order, self.parse_axis(axis_node, &cs_unit)?));
        }
        axes.sort_by_key(|(order, _)| *order);
        let axes: Vec<CoordinateSystemAxis> = axes.into_iter().map(|(_, a)| a).collect();
        Ok(Some(CoordinateSystem::create_with_axes(&cs_type, axes)?))
    }

    fn parse_geodetic_crs(&self, node: &WktNode) -> GeodeticResult<Arc<Crs>> {
        let keyword = node.keyword.to_ascii_uppercase();
        let is_wkt1 = keyword == kw::GEOGCS || keyword == kw::GEOCCS;
        let is_geocentric_wkt1 = keyword == kw::GEOCCS;

        // derived geographic: a WKT2 GEOGCRS/GEODCRS with a base + conversion
        if !is_wkt1 {
            if let (Some(base_node), Some(deriving)) = (
                node.node(&[kw::BASEGEOGCRS, kw::BASEGEODCRS]),
                node.node(&[kw::DERIVINGCONVERSION]),
            ) {
                let base = self.parse_crs_node(base_node)?;
                let conversion = self.parse_conversion_wkt2(deriving)?;
                let cs = self.parse_cs_wkt2(node)?.ok_or_else(|| {
                    GeodeticError::at(node.position, "derived CRS without a CS")
                })?;
                return DerivedCrs::create(
                    self.parse_properties(node),
                    DerivedKind::Geographic,
                    base,
                    conversion,
                    cs,
                );
            }
        }

        let mut extensions = DatumExtensions::default();

        // the CS determines the angular unit the prime meridian is
        // re-expressed in
        let (cs, angular_unit) = if is_wkt1 {
            let declared_unit = node
                .node(&[kw::UNIT, kw::ANGLEUNIT, kw::LENGTHUNIT])
                .map(|n| {
                    parse_unit(
                        n,
                        if is_geocentric_wkt1 {
                            UnitKind::Linear
                        } else {
                            UnitKind::Angular
                        },
                    )
                })
                .transpose()?
                .unwrap_or_else(|| {
                    if is_geocentric_wkt1 {
                        unit::METRE.clone()
                    } else {
                        unit::DEGREE.clone()
                    }
                });
            let explicit_axes: Vec<&WktNode> = node.nodes(kw::AXIS).collect();
            let cs = if is_geocentric_wkt1 {
                CoordinateSystem::create_geocentric(&declared_unit)?
            } else if explicit_axes.is_empty() {
                // WKT1 default axis order: latitude north, longitude east
                CoordinateSystem::create_latitude_longitude(&declared_unit)?
            } else {
                let mut axes = Vec::new();
                for axis_node in explicit_axes {
                    axes.push(self.parse_axis(axis_node, &declared_unit)?);
                }
                CoordinateSystem::ellipsoidal(axes)?
            };
            (cs, declared_unit)
        } else {
            match self.parse_cs_wkt2(node)? {
                Some(cs) => {
                    let angular = cs
                        .axes()
                        .iter()
                        .find(|a| a.unit.kind() == UnitKind::Angular)
                        .map(|a| a.unit.clone())
                        .unwrap_or_else(|| unit::DEGREE.clone());
                    (cs, angular)
                }
                None => {
                    // a BASEGEOGCRS has no CS of its own
                    let declared_unit = node
                        .node(&[kw::ANGLEUNIT, kw::UNIT])
                        .map(|n| parse_unit(n, UnitKind::Angular))
                        .transpose()?
                        .unwrap_or_else(|| unit::DEGREE.clone());
                    (
                        CoordinateSystem::create_latitude_longitude(&declared_unit)?,
                        declared_unit,
                    )
                }
            }
        };

        let prime_meridian = self.parse_prime_meridian(
            node.node(&[kw::PRIMEM, kw::PRIMEMERIDIAN]),
            &angular_unit,
            is_wkt1,
        )?;

        let datum_node = node.node(&[kw::DATUM, kw::GEODETICDATUM, kw::TRF]);
        let ensemble_node = node.node(&[kw::ENSEMBLE]);
        let (datum, ensemble) = match (datum_node, ensemble_node) {
            (Some(datum_node), _) => {
                let mut frame =
                    self.parse_geodetic_datum(datum_node, prime_meridian, &mut extensions)?;
                if let Some(dynamic) = node.node(&[kw::DYNAMIC]) {
                    if let Some(epoch) = dynamic
                        .node(&[kw::FRAMEEPOCH])
                        .and_then(|n| n.numbers().first().copied())
                    {
                        frame.frame_reference_epoch =
                            Some(Measure::new(epoch, unit::YEAR.clone()));
                    }
                }
                (Some(frame), None)
            }
            (None, Some(ensemble_node)) => (None, Some(self.parse_datum_ensemble(ensemble_node)?)),
            (None, None) => {
                return Err(GeodeticError::at(
                    node.position,
                    "geodetic CRS without a datum or ensemble",
                ))
            }
        };

        let mut properties = self.parse_properties(node);
        if let Some(name) = &properties.name {
            properties.name = Some(self.dealias_crs_name(name, ObjectKind::GeodeticCrs));
        }

        let is_ellipsoidal = matches!(&cs, CoordinateSystem::Ellipsoidal(_));
        let crs = if is_ellipsoidal {
            Arc::new(Crs::Geographic(GeographicCrs::new(
                properties, datum, ensemble, cs,
            )?))
        } else {
            Arc::new(Crs::Geodetic(GeodeticCrs::new(
                properties, datum, ensemble, cs,
            )?))
        };
        self.lift_extensions(crs, &extensions)
    }

    /// Wrap a freshly parsed CRS into the bound CRS its WKT1 datum
    /// extensions call for
    fn lift_extensions(
        &self,
        crs: Arc<Crs>,
        extensions: &DatumExtensions,
    ) -> GeodeticResult<Arc<Crs>> {
        if let Some(params) = &extensions.towgs84 {
            let hub = GeographicCrs::epsg_4326();
            let transformation = if params.len() == 7 {
                Transformation::create_position_vector(
                    Properties::named(&format!("{} to WGS 84", crs.name())),
                    crs.clone(),
                    hub.clone(),
                    registry::EPSG_CODE_METHOD_POSITION_VECTOR_GEOGRAPHIC_2D,
                    params[0],
                    params[1],
                    params[2],
                    params[3],
                    params[4],
                    params[5],
                    params[6],
                    vec![],
                )?
            } else {
                Transformation::create_geocentric_translations(
                    Properties::named(&format!("{} to WGS 84", crs.name())),
                    crs.clone(),
                    hub.clone(),
                    registry::EPSG_CODE_METHOD_GEOCENTRIC_TRANSLATION_GEOGRAPHIC_2D,
                    params[0],
                    params[1],
                    params[2],
                    vec![],
                )?
            };
            let bound = BoundCrs::create(crs, hub, transformation)?;
            return Ok(bound);
        }
        if let Some(filename) = &extensions.nadgrids {
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
        if let Some(filename) = &extensions.geoidgrids {
            let hub = GeographicCrs::epsg_4326();
            let transformation = Transformation::create_gravity_related_height_to_geographic3d(
                Properties::named(&format!("{} to WGS 84 ellipsoidal height", crs.name())),
                crs.clone(),
                hub.clone(),
                filename,
                vec![],
            )?;
            return BoundCrs::create(crs, hub, transformation);
        }
        Ok(crs)
    }

    /// WKT2 `CONVERSION`/`DERIVINGCONVERSION`
    fn parse_conversion_wkt2(&self, node: &WktNode) -> GeodeticResult<Conversion> {
        let method_node = node
            .node(&[kw::METHOD, kw::PROJECTION])
            .ok_or_else(|| GeodeticError::at(node.position, "conversion without METHOD"))?;
        let method_name = method_node.name_child().unwrap_or("").to_string();
        let method_code = parse_identifiers(method_node)
            .iter()
            .find_map(|id| if id.codespace.as_deref() == Some("EPSG") {
                id.code.parse::<u16>().ok()
            } else {
                None
            });
        let mapping = method_code
            .and_then(registry::find_method_by_code)
            .or_else(|| registry::find_method_by_name(&method_name));

        let method = match mapping {
            Some(mapping) => OperationMethod::from_mapping(mapping),
            None => {
                let mut method = OperationMethod::named(&method_name);
                method.base.identifiers = parse_identifiers(method_node);
                method
            }
        };

        let mut values = Vec::new();
        for param_node in node.nodes(kw::PARAMETER) {
            let param_name = param_node.name_child().unwrap_or("").to_string();
            let param_code = parse_identifiers(param_node).iter().find_map(|id| {
                if id.codespace.as_deref() == Some("EPSG") {
                    id.code.parse::<u16>().ok()
                } else {
                    None
                }
            });
            let value = param_node
                .numbers()
                .first()
                .copied()
                .ok_or_else(|| GeodeticError::at(param_node.position, "PARAMETER without value"))?;
            let declared_unit = param_node
                .node(&[kw::LENGTHUNIT, kw::ANGLEUNIT, kw::SCALEUNIT, kw::TIMEUNIT, kw::PARAMETRICUNIT, kw::UNIT])
                .map(|n| parse_unit(n, UnitKind::Unknown))
                .transpose()?;

            let (parameter, measure) = match mapping
                .and_then(|m| registry::find_parameter(m, &param_name, param_code))
            {
                Some(param_mapping) => {
                    let unit = declared_unit.unwrap_or_else(|| default_unit(param_mapping.unit_kind));
                    (
                        OperationParameter::from_mapping(param_mapping),
                        Measure::new(value, unit),
                    )
                }
                None => {
                    let mut parameter = OperationParameter::named(&param_name);
                    parameter.base.identifiers = parse_identifiers(param_node);
                    let unit = declared_unit.unwrap_or_else(|| unit::UNKNOWN.clone());
                    (parameter, Measure::new(value, unit))
                }
            };
            values.push(OperationParameterValue::measure(parameter, measure));
        }
        for file_node in node.nodes(kw::PARAMETERFILE) {
            let mut strings = file_node.children.iter().filter_map(|c| c.as_quoted());
            let param_name = strings.next().unwrap_or("").to_string();
            let filename = strings.next().unwrap_or("").to_string();
            values.push(OperationParameterValue::filename(
                OperationParameter::named(&param_name),
                &filename,
            ));
        }
        Conversion::create(self.parse_properties(node), method, values)
    }

    /// ESRI projection names that require looking at the parameters to pick
    /// the EPSG method
    fn resolve_esri_method(
        method_name: &str,
        params: &[(String, f64)],
    ) -> Option<&'static registry::MethodMapping> {
        let has_param = |wanted: &str| {
            params
                .iter()
                .any(|(name, _)| name.eq_ignore_ascii_case(wanted))
        };
        let param_value = |wanted: &str| {
            params
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(wanted))
                .map(|(_, value)| *value)
        };
        let code = match method_name {
            "Lambert_Conformal_Conic" => {
                if has_param("Standard_Parallel_2") {
                    registry::EPSG_CODE_METHOD_LAMBERT_CONIC_CONFORMAL_2SP
                } else {
                    registry::EPSG_CODE_METHOD_LAMBERT_CONIC_CONFORMAL_1SP
                }
            }
            "Stereographic_North_Pole" | "Stereographic_South_Pole" => {
                registry::EPSG_CODE_METHOD_POLAR_STEREOGRAPHIC_VARIANT_B
            }
            "Mercator" => registry::EPSG_CODE_METHOD_MERCATOR_VARIANT_B,
            "Hotine_Oblique_Mercator_Azimuth_Natural_Origin"
            | "Rectified_Skew_Orthomorphic_Natural_Origin" => {
                registry::EPSG_CODE_METHOD_HOTINE_OBLIQUE_MERCATOR_VARIANT_A
            }
            "Rectified_Skew_Orthomorphic_Center" => {
                registry::EPSG_CODE_METHOD_HOTINE_OBLIQUE_MERCATOR_VARIANT_B
            }
            "Krovak" => {
                if param_value("XY_Plane_Rotation") == Some(90.0) {
                    registry::EPSG_CODE_METHOD_KROVAK_NORTH_ORIENTED
                } else {
                    registry::EPSG_CODE_METHOD_KROVAK
                }
            }
            _ => return None,
        };
        registry::find_method_by_code(code)
    }

    /// WKT1 `PROJECTION` + `PARAMETER` children of a PROJCS
    fn parse_conversion_wkt1(
        &self,
        node: &WktNode,
        linear_unit: &Unit,
    ) -> GeodeticResult<Conversion> {
        let projection_node = node
            .node(&[kw::PROJECTION])
            .ok_or_else(|| GeodeticError::at(node.position, "PROJCS without PROJECTION"))?;
        let method_name = projection_node.name_child().unwrap_or("").to_string();
        let raw_params: Vec<(String, f64)> = node
            .nodes(kw::PARAMETER)
            .filter_map(|p| {
                Some((
                    p.name_child()?.to_string(),
                    p.numbers().first().copied()?,
                ))
            })
            .collect();
        let mapping = Self::resolve_esri_method(&method_name, &raw_params)
            .or_else(|| registry::find_method_by_name(&method_name));

        let method = match mapping {
            Some(mapping) => OperationMethod::from_mapping(mapping),
            None => OperationMethod::named(&method_name),
        };

        let mut values = Vec::new();
        for param_node in node.nodes(kw::PARAMETER) {
            let param_name = param_node.name_child().unwrap_or("").to_string();
            let value = param_node
                .numbers()
                .first()
                .copied()
                .ok_or_else(|| GeodeticError::at(param_node.position, "PARAMETER without value"))?;
            match mapping.and_then(|m| registry::find_parameter(m, &param_name, None)) {
                Some(param_mapping) => {
                    let unit = match param_mapping.unit_kind {
                        UnitKind::Angular => unit::DEGREE.clone(),
                        UnitKind::Linear => linear_unit.clone(),
                        UnitKind::Scale => unit::UNITY.clone(),
                        _ => unit::UNKNOWN.clone(),
                    };
                    values.push(OperationParameterValue::measure(
                        OperationParameter::from_mapping(param_mapping),
                        Measure::new(value, unit),
                    ));
                }
                None => {
                    // ESRI Krovak decoration and other unknown parameters are
                    // preserved verbatim
                    values.push(OperationParameterValue::measure(
                        OperationParameter::named(&param_name),
                        Measure::new(value, unit::UNKNOWN.clone()),
                    ));
                }
            }
        }
        let name = if method.name().is_empty() {
            "unnamed".to_string()
        } else {
            format!("unnamed ({})", method.name())
        };
        Conversion::create(Properties::named(&name), method, values)
    }

    fn parse_projected_crs(&self, node: &WktNode) -> GeodeticResult<Arc<Crs>> {
        let keyword = node.keyword.to_ascii_uppercase();
        let is_wkt1 = keyword == kw::PROJCS;

        let base_node = node
            .node(&[kw::GEOGCS, kw::BASEGEOGCRS, kw::BASEGEODCRS, kw::GEOGCRS, kw::GEODCRS])
            .ok_or_else(|| {
                GeodeticError::at(node.position, "projected CRS without a geographic base")
            })?;
        let base = self.parse_crs_node(base_node)?;

        // a TOWGS84/nadgrids on the base must wrap the full projected CRS,
        // so unwrap it here and re-lift at the end
        let (base, pending_bound) = match &*base {
            Crs::Bound(bound) => (bound.base_crs.clone(), Some(bound.transformation.clone())),
            _ => (base, None),
        };

        let mut properties = self.parse_properties(node);
        if let Some(name) = &properties.name {
            properties.name = Some(self.dealias_crs_name(name, ObjectKind::ProjectedCrs));
        }

        let crs = if is_wkt1 {
            let linear_unit = node
                .node(&[kw::UNIT, kw::LENGTHUNIT])
                .map(|n| parse_unit(n, UnitKind::Linear))
                .transpose()?
                .unwrap_or_else(|| unit::METRE.clone());
            let conversion = self.parse_conversion_wkt1(node, &linear_unit)?;
            let explicit_axes: Vec<&WktNode> = node.nodes(kw::AXIS).collect();
            let cs = if explicit_axes.is_empty() {
                CoordinateSystem::create_east_north(&linear_unit)?
            } else {
                let mut axes = Vec::new();
                for axis_node in explicit_axes {
                    axes.push(self.parse_axis(axis_node, &linear_unit)?);
                }
                CoordinateSystem::cartesian(axes)?
            };
            ProjectedCrs::create(properties, base, conversion, cs)?
        } else {
            let conversion_node = node
                .node(&[kw::CONVERSION])
                .ok_or_else(|| GeodeticError::at(node.position, "PROJCRS without CONVERSION"))?;
            let conversion = self.parse_conversion_wkt2(conversion_node)?;
            let cs = self.parse_cs_wkt2(node)?.ok_or_else(|| {
                GeodeticError::at(node.position, "PROJCRS without a coordinate system")
            })?;
            ProjectedCrs::create(properties, base, conversion, cs)?
        };

        match pending_bound {
            Some(transformation) => {
                let hub = GeographicCrs::epsg_4326();
                // rebuild the datum shift with the projected CRS as source
                let rebuilt = Transformation::create(
                    Properties::named(&format!("{} to WGS 84", crs.name())),
                    crs.clone(),
                    hub.clone(),
                    transformation.method.clone(),
                    transformation.values.clone(),
                    transformation.accuracies.clone(),
                )?;
                BoundCrs::create(crs, hub, rebuilt)
            }
            None => Ok(crs),
        }
    }

    fn parse_vertical_crs(&self, node: &WktNode) -> GeodeticResult<Arc<Crs>> {
        let keyword = node.keyword.to_ascii_uppercase();
        let is_wkt1 = keyword == kw::VERT_CS || keyword == kw::VERTCS;

        if let Some(derived) = self.try_parse_derived(node, kw::BASEVERTCRS, DerivedKind::Vertical)? {
            return Ok(derived);
        }

        let mut extensions = DatumExtensions::default();
        let datum_node = node
            .node(&[kw::VDATUM, kw::VERT_DATUM, kw::VRF])
            .ok_or_else(|| GeodeticError::at(node.position, "vertical CRS without a datum"))?;

        if let Some(extension) = datum_node.node(&[kw::EXTENSION]) {
            let mut strings = extension.children.iter().filter_map(|c| c.as_quoted());
            if strings.next() == Some(kw::PROJ4_GRIDS) {
                if let Some(filename) = strings.next() {
                    extensions.geoidgrids = Some(filename.to_string());
                }
            }
        }

        let anchor = datum_node
            .node(&[kw::ANCHOR])
            .and_then(|n| n.name_child())
            .map(|s| s.to_string());
        let datum =
            VerticalReferenceFrame::create(self.parse_properties(datum_node), anchor, None)?;

        let cs = if is_wkt1 {
            let linear_unit = node
                .node(&[kw::UNIT, kw::LENGTHUNIT])
                .map(|n| parse_unit(n, UnitKind::Linear))
                .transpose()?
                .unwrap_or_else(|| unit::METRE.clone());
            CoordinateSystem::create_gravity_related_height(&linear_unit)?
        } else {
            match self.parse_cs_wkt2(node)? {
                Some(cs) => cs,
                None => CoordinateSystem::create_gravity_related_height(&unit::METRE)?,
            }
        };

        let crs = VerticalCrs::create(self.parse_properties(node), Some(datum), None, cs)?;
        self.lift_extensions(crs, &extensions)
    }

    fn parse_compound_crs(&self, node: &WktNode) -> GeodeticResult<Arc<Crs>> {
        let mut components = Vec::new();
        for child in node.children.iter().filter_map(|c| c.as_node()) {
            if self.is_crs_keyword(&child.keyword) {
                components.push(self.parse_crs_node(child)?);
            }
        }
        CompoundCrs::create(self.parse_properties(node), components)
    }

    fn is_crs_keyword(&self, keyword: &str) -> bool {
        let keyword = keyword.to_ascii_uppercase();
        [
            kw::GEOGCS, kw::GEOGCRS, kw::GEODCRS, kw::GEOCCS, kw::PROJCS, kw::PROJCRS,
            kw::VERTCS, kw::VERT_CS, kw::VERTCRS, kw::COMPD_CS, kw::COMPOUNDCRS, kw::BOUNDCRS,
            kw::TIMECRS, kw::ENGCRS, kw::LOCAL_CS, kw::PARAMETRICCRS, kw::DERIVEDPROJCRS,
        ]
        .contains(&keyword.as_str())
    }

    fn parse_bound_crs(&self, node: &WktNode) -> GeodeticResult<Arc<Crs>> {
        let source = node
            .node(&[kw::SOURCECRS])
            .and_then(|n| n.children.first())
            .and_then(|c| c.as_node())
            .ok_or_else(|| GeodeticError::at(node.position, "BOUNDCRS without SOURCECRS"))?;
        let target = node
            .node(&[kw::TARGETCRS])
            .and_then(|n| n.children.first())
            .and_then(|c| c.as_node())
            .ok_or_else(|| GeodeticError::at(node.position, "BOUNDCRS without TARGETCRS"))?;
        let transformation_node = node.node(&[kw::ABRIDGEDTRANSFORMATION]).ok_or_else(|| {
            GeodeticError::at(node.position, "BOUNDCRS without ABRIDGEDTRANSFORMATION")
        })?;

        let base = self.parse_crs_node(source)?;
        let hub = self.parse_crs_node(target)?;

        let method_node = transformation_node
            .node(&[kw::METHOD])
            .ok_or_else(|| GeodeticError::at(transformation_node.position, "transformation without METHOD"))?;
        let method_name = method_node.name_child().unwrap_or("").to_string();
        let mut method = OperationMethod::named(&method_name);
        method.base.identifiers = parse_identifiers(method_node);

        let mut values = Vec::new();
        for param_node in transformation_node.nodes(kw::PARAMETER) {
            let param_name = param_node.name_child().unwrap_or("").to_string();
            let code = parse_identifiers(param_node).iter().find_map(|id| {
                if id.codespace.as_deref() == Some("EPSG") {
                    id.code.parse::<u16>().ok()
                } else {
                    None
                }
            });
            let raw = param_node
                .numbers()
                .first()
                .copied()
                .ok_or_else(|| GeodeticError::at(param_node.position, "PARAMETER without value"))?;
            // undo the abridged normalization
            let (value, canonical_unit) = match code {
                Some(registry::EPSG_CODE_PARAMETER_SCALE_DIFFERENCE) => {
                    ((raw - 1.0) * 1e6, unit::PARTS_PER_MILLION.clone())
                }
                Some(
                    registry::EPSG_CODE_PARAMETER_X_AXIS_ROTATION
                    | registry::EPSG_CODE_PARAMETER_Y_AXIS_ROTATION
                    | registry::EPSG_CODE_PARAMETER_Z_AXIS_ROTATION,
                ) => (raw, unit::ARC_SECOND.clone()),
                _ => (raw, unit::METRE.clone()),
            };
            let parameter = match code {
                Some(code) => OperationParameter::epsg(&param_name, code),
                None => OperationParameter::named(&param_name),
            };
            values.push(OperationParameterValue::measure(
                parameter,
                Measure::new(value, canonical_unit),
            ));
        }
        for file_node in transformation_node.nodes(kw::PARAMETERFILE) {
            let mut strings = file_node.children.iter().filter_map(|c| c.as_quoted());
            let param_name = strings.next().unwrap_or("").to_string();
            let filename = strings.next().unwrap_or("").to_string();
            values.push(OperationParameterValue::filename(
                OperationParameter::named(&param_name),
                &filename,
            ));
        }

        let transformation = Transformation::create(
            self.parse_properties(transformation_node),
            base.clone(),
            hub.clone(),
            method,
            values,
            vec![],
        )?;
        BoundCrs::create(base, hub, transformation)
    }

    fn parse_temporal_crs(&self, node: &WktNode) -> GeodeticResult<Arc<Crs>> {
        if let Some(derived) =
            self.try_parse_derived(node, kw::BASETIMECRS, DerivedKind::Temporal)?
        {
            return Ok(derived);
        }
        let datum_node = node
            .node(&[kw::TDATUM])
            .ok_or_else(|| GeodeticError::at(node.position, "TIMECRS without TDATUM"))?;
        let calendar = datum_node
            .node(&[kw::CALENDAR])
            .and_then(|n| n.name_child())
            .unwrap_or(TemporalDatum::CALENDAR_PROLEPTIC_GREGORIAN);
        let origin = datum_node
            .node(&[kw::TIMEORIGIN])
            .and_then(|n| n.name_child())
            .unwrap_or("");
        let datum = TemporalDatum::create(self.parse_properties(datum_node), calendar, origin)?;

        let cs = match self.parse_cs_wkt2(node)? {
            Some(cs @ CoordinateSystem::Temporal(_, _)) => cs,
            Some(CoordinateSystem::Parametric(axes)) | Some(CoordinateSystem::Vertical(axes)) => {
                CoordinateSystem::temporal(TemporalCsKind::DateTime, axes)?
            }
            _ => CoordinateSystem::temporal(
                TemporalCsKind::DateTime,
                vec![CoordinateSystemAxis::new(
                    "Time",
                    "T",
                    AxisDirection::Future,
                    unit::YEAR.clone(),
                )],
            )?,
        };
        TemporalCrs::create(self.parse_properties(node), datum, cs)
    }

    /// A WKT2 CRS node carrying a base CRS and a deriving conversion is a
    /// derived CRS of the corresponding kind
    fn try_parse_derived(
        &self,
        node: &WktNode,
        base_keyword: &str,
        kind: DerivedKind,
    ) -> GeodeticResult<Option<Arc<Crs>>> {
        let (base_node, deriving) = match (
            node.node(&[base_keyword]),
            node.node(&[kw::DERIVINGCONVERSION]),
        ) {
            (Some(base), Some(deriving)) => (base, deriving),
            _ => return Ok(None),
        };
        let base = self.parse_crs_node(base_node)?;
        let conversion = self.parse_conversion_wkt2(deriving)?;
        let cs = self
            .parse_cs_wkt2(node)?
            .ok_or_else(|| GeodeticError::at(node.position, "derived CRS without a CS"))?;
        Ok(Some(DerivedCrs::create(
            self.parse_properties(node),
            kind,
            base,
            conversion,
            cs,
        )?))
    }

    fn parse_engineering_crs(&self, node: &WktNode) -> GeodeticResult<Arc<Crs>> {
        if let Some(derived) =
            self.try_parse_derived(node, kw::BASEENGCRS, DerivedKind::Engineering)?
        {
            return Ok(derived);
        }
        let datum_node = node
            .node(&[kw::EDATUM, kw::LOCAL_DATUM])
            .ok_or_else(|| GeodeticError::at(node.position, "engineering CRS without a datum"))?;
        let anchor = datum_node
            .node(&[kw::ANCHOR])
            .and_then(|n| n.name_child())
            .map(|s| s.to_string());
        let datum = EngineeringDatum::create(self.parse_properties(datum_node), anchor)?;

        let cs = match self.parse_cs_wkt2(node)? {
            Some(cs) => cs,
            None => {
                let linear_unit = node
                    .node(&[kw::UNIT, kw::LENGTHUNIT])
                    .map(|n| parse_unit(n, UnitKind::Linear))
                    .transpose()?
                    .unwrap_or_else(|| unit::METRE.clone());
                CoordinateSystem::create_east_north(&linear_unit)?
            }
        };
        EngineeringCrs::create(self.parse_properties(node), datum, cs)
    }

    fn parse_parametric_crs(&self, node: &WktNode) -> GeodeticResult<Arc<Crs>> {
        if let Some(derived) =
            self.try_parse_derived(node, kw::BASEPARAMCRS, DerivedKind::Parametric)?
        {
            return Ok(derived);
        }
        let datum_node = node
            .node(&[kw::PDATUM])
            .ok_or_else(|| GeodeticError::at(node.position, "PARAMETRICCRS without PDATUM"))?;
        let datum = ParametricDatum::create(self.parse_properties(datum_node), None)?;
        let cs = match self.parse_cs_wkt2(node)? {
            Some(cs) => cs,
            None => CoordinateSystem::parametric(vec![CoordinateSystemAxis::new(
                "Pressure",
                "hPa",
                AxisDirection::Up,
                unit::UNKNOWN.clone(),
            )])?,
        };
        ParametricCrs::create(self.parse_properties(node), datum, cs)
    }

    fn parse_derived_projected_crs(&self, node: &WktNode) -> GeodeticResult<Arc<Crs>> {
        let base_node = node
            .node(&[kw::BASEPROJCRS])
            .ok_or_else(|| GeodeticError::at(node.position, "DERIVEDPROJCRS without BASEPROJCRS"))?;
        let base = self.parse_crs_node(base_node)?;
        let deriving = node
            .node(&[kw::DERIVINGCONVERSION])
            .ok_or_else(|| {
                GeodeticError::at(node.position, "DERIVEDPROJCRS without DERIVINGCONVERSION")
            })?;
        let conversion = self.parse_conversion_wkt2(deriving)?;
        let cs = self.parse_cs_wkt2(node)?.ok_or_else(|| {
            GeodeticError::at(node.position, "DERIVEDPROJCRS without a coordinate system")
        })?;
        DerivedCrs::create(
            self.parse_properties(node),
            DerivedKind::Projected,
            base,
            conversion,
            cs,
        )
    }
}

impl<'a> Default for WktParser<'a> {
    fn default() -> Self {
        Self::new()
    }
}

/// `ID`/`AUTHORITY` children of a node
fn parse_identifiers(node: &WktNode) -> Vec<Identifier> {
    let mut identifiers = Vec::new();
    for id_node in node.children.iter().filter_map(|c| c.as_node()) {
        if !(id_node.is_keyword(kw::ID) || id_node.is_keyword(kw::AUTHORITY)) {
            continue;
        }
        let codespace = id_node
            .children
            .first()
            .and_then(|c| c.as_quoted())
            .unwrap_or("");
        let code = match id_node.children.get(1) {
            Some(WktValue::Quoted(s)) => s.clone(),
            Some(WktValue::Number(n)) => crate::wkt::formatter::format_number(*n),
            _ => continue,
        };
        let mut identifier = Identifier::new(codespace, code);
        if let Some(WktValue::Quoted(version)) = id_node.children.get(2) {
            identifier.version = Some(version.clone());
        }
        if let Some(citation) = id_node.node(&[kw::CITATION]).and_then(|n| n.name_child()) {
            identifier.authority_citation = Some(citation.to_string());
        }
        identifiers.push(identifier);
    }
    identifiers
}

fn default_unit(kind: UnitKind) -> Unit {
    match kind {
        UnitKind::Angular => unit::DEGREE.clone(),
        UnitKind::Linear => unit::METRE.clone(),
        UnitKind::Scale => unit::UNITY.clone(),
        UnitKind::Time => unit::SECOND.clone(),
        _ => unit::UNKNOWN.clone(),
    }
}

/// Parse a unit node, preferring the predefined singleton when the name is
/// recognized so authority codes survive the round trip
fn parse_unit(node: &WktNode, default_kind: UnitKind) -> GeodeticResult<Unit> {
    let kind = match node.keyword.to_ascii_uppercase().as_str() {
        kw::LENGTHUNIT => UnitKind::Linear,
        kw::ANGLEUNIT => UnitKind::Angular,
        kw::SCALEUNIT => UnitKind::Scale,
        kw::TIMEUNIT => UnitKind::Time,
        kw::PARAMETRICUNIT => UnitKind::Parametric,
        _ => default_kind,
    };
    let name = node.name_child().unwrap_or("");
    let factor = node.numbers().first().copied();

    if let Some(predefined) = Unit::from_wkt_name(name, kind) {
        // tolerate both an exact SI factor and a rounded decimal
        let close = factor
            .map(|f| (f - predefined.conversion_to_si()).abs() <= predefined.conversion_to_si() * 1e-8)
            .unwrap_or(true);
        if close {
            return Ok(predefined);
        }
    }
    let factor = factor.ok_or_else(|| {
        GeodeticError::at(node.position, format!("unit '{}' without a conversion factor", name))
    })?;
    if factor <= 0.0 && kind != UnitKind::None {
        return Err(GeodeticError::InvalidUnit(format!(
            "unit '{}' has a non-positive conversion factor",
            name
        )));
    }
    let identifiers = parse_identifiers(node);
    Ok(match identifiers.first() {
        Some(id) => Unit::with_authority(
            name,
            factor,
            kind,
            id.codespace.as_deref().unwrap_or(""),
            &id.code,
        ),
        None => Unit::new(name, factor, kind),
    })
}

/// ESRI WKT1 is recognized by the `GCS_`/`D_` naming pattern
fn detect_esri(root: &WktNode) -> bool {
    let geogcs = if root.is_keyword(kw::GEOGCS) {
        Some(root)
    } else if root.is_keyword(kw::PROJCS) {
        root.node(&[kw::GEOGCS])
    } else {
        None
    };
    match geogcs {
        Some(geogcs) => {
            let name_is_gcs = geogcs
                .name_child()
                .map(|n| n.starts_with("GCS_"))
                .unwrap_or(false);
            let datum_is_d = geogcs
                .node(&[kw::DATUM])
                .and_then(|d| d.name_child())
                .map(|n| n.starts_with("D_"))
                .unwrap_or(false);
            name_is_gcs || datum_is_d
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crs::Criterion;

    #[test]
    fn test_parse_wkt1_geographic_defaults() {
        let mut parser = WktParser::new();
        let crs = parser
            .parse(
                r#"GEOGCS["WGS 84",DATUM["WGS_1984",SPHEROID["WGS 84",6378137,298.257223563]],PRIMEM["Greenwich",0],UNIT["degree",0.0174532925199433]]"#,
            )
            .unwrap();
        match &*crs {
            Crs::Geographic(geog) => {
                let axes = geog.geodetic.coordinate_system.axes();
                // WKT1 default axis order is latitude, longitude
                assert_eq!(axes[0].direction, AxisDirection::North);
                assert_eq!(axes[1].direction, AxisDirection::East);
                assert_eq!(axes[0].unit, *unit::DEGREE);
            }
            other => panic!("expected geographic CRS, got {:?}", other.name()),
        }
        assert!(crs.is_equivalent_to(&GeographicCrs::epsg_4326(), Criterion::Equivalent));
    }

    #[test]
    fn test_parse_wkt2_round_trip() {
        let wkt = crate::wkt::emitter::wkt_string(
            &GeographicCrs::epsg_4326(),
            crate::wkt::formatter::WktVersion::Wkt2_2015,
            false,
        )
        .unwrap();
        let mut parser = WktParser::new();
        let reparsed = parser.parse(&wkt).unwrap();
        assert!(reparsed.is_equivalent_to(&GeographicCrs::epsg_4326(), Criterion::Equivalent));
        assert_eq!(reparsed.epsg_code(), Some(4326));
    }

    #[test]
    fn test_parse_towgs84_lifts_to_bound() {
        let mut parser = WktParser::new();
        let crs = parser
            .parse(
                r#"GEOGCS["X",DATUM["Y",SPHEROID["intl",6378388,297],TOWGS84[1,2,3,4,5,6,7]],PRIMEM["Greenwich",0],UNIT["degree",0.0174532925199433]]"#,
            )
            .unwrap();
        match &*crs {
            Crs::Bound(bound) => {
                assert!(bound.hub_is_wgs84());
                assert_eq!(
                    bound.transformation.method.epsg_code(),
                    Some(registry::EPSG_CODE_METHOD_POSITION_VECTOR_GEOGRAPHIC_2D as u32)
                );
                let params = bound.transformation.towgs84_parameters().unwrap();
                assert_eq!(params, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
            }
            other => panic!("expected bound CRS, got {:?}", other.name()),
        }
    }

    #[test]
    fn test_parse_esri_detection_and_dealiasing() {
        let mut parser = WktParser::new();
        let crs = parser
            .parse(
                r#"GEOGCS["GCS_WGS_1984",DATUM["D_WGS_1984",SPHEROID["WGS_1984",6378137,298.257223563]],PRIMEM["Greenwich",0],UNIT["Degree",0.0174532925199433]]"#,
            )
            .unwrap();
        assert_eq!(crs.name(), "WGS 84");
        match &*crs {
            Crs::Geographic(geog) => {
                assert_eq!(geog.geodetic.datum.as_ref().unwrap().name(), "WGS_1984");
            }
            _ => panic!("expected geographic CRS"),
        }
    }

    #[test]
    fn test_parse_projected_wkt1() {
        let mut parser = WktParser::new();
        let crs = parser
            .parse(
                r#"PROJCS["WGS 84 / UTM zone 31N",GEOGCS["WGS 84",DATUM["WGS_1984",SPHEROID["WGS 84",6378137,298.257223563]],PRIMEM["Greenwich",0],UNIT["degree",0.0174532925199433]],PROJECTION["Transverse_Mercator"],PARAMETER["latitude_of_origin",0],PARAMETER["central_meridian",3],PARAMETER["scale_factor",0.9996],PARAMETER["false_easting",500000],PARAMETER["false_northing",0],UNIT["metre",1],AUTHORITY["EPSG","32631"]]"#,
            )
            .unwrap();
        match &*crs {
            Crs::Projected(projected) => {
                let conversion = projected.deriving_conversion();
                assert_eq!(
                    conversion.method.epsg_code(),
                    Some(registry::EPSG_CODE_METHOD_TRANSVERSE_MERCATOR as u32)
                );
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
        assert_eq!(crs.epsg_code(), Some(32631));
    }

    #[test]
    fn test_parse_grad_prime_meridian_rebase() {
        let mut parser = WktParser::new();
        let crs = parser
            .parse(
                r#"GEOGCS["NTF (Paris)",DATUM["Nouvelle_Triangulation_Francaise_Paris",SPHEROID["Clarke 1880 (IGN)",6378249.2,293.466021293627]],PRIMEM["Paris",2.33722917],UNIT["grad",0.015707963267949]]"#,
            )
            .unwrap();
        match &*crs {
            Crs::Geographic(geog) => {
                let pm = geog.geodetic.prime_meridian().unwrap();
                // 2.33722917 degrees re-expressed in the CRS unit (grads)
                assert_eq!(pm.longitude().unit(), &*unit::GRAD);
                assert!((pm.longitude().value() - 2.5969213).abs() < 1e-7);
            }
            _ => panic!("expected geographic CRS"),
        }
    }

    #[test]
    fn test_unknown_root_keyword() {
        let mut parser = WktParser::new();
        let err = parser.parse(r#"FANCYCRS["x"]"#).unwrap_err();
        assert!(matches!(err, GeodeticError::UnknownKeyword(_)));
    }

    #[test]
    fn test_parse_vertical_with_geoid_extension() {
        let mut parser = WktParser::new();
        let crs = parser
            .parse(
                r#"VERT_CS["EGM96 geoid",VERT_DATUM["EGM96 geoid",2005,EXTENSION["PROJ4_GRIDS","egm96_15.gtx"]],UNIT["metre",1]]"#,
            )
            .unwrap();
        match &*crs {
            Crs::Bound(bound) => {
                assert!(bound.transformation.is_height_to_geographic3d());
                assert_eq!(bound.transformation.grid_filename(), Some("egm96_15.gtx"));
            }
            _ => panic!("expected bound CRS"),
        }
    }
}
