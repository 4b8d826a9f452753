//! Integration tests for WKT and PROJ-string round-tripping

use std::sync::Arc;

use crskit::common::unit::{ARC_SECOND, METRE, PARTS_PER_MILLION};
use crskit::common::Properties;
use crskit::crs::{
    create_bound_crs_to_wgs84_if_possible, shallow_clone, CompoundCrs, Crs, Criterion,
    GeodeticCrs, GeographicCrs, ProjectedCrs, VerticalCrs,
};
use crskit::datum::Ellipsoid;
use crskit::operation::ParameterValue;
use crskit::projstring::{crs_to_proj_string, ProjConvention, ProjStringParser};
use crskit::wkt::emitter::wkt_string;
use crskit::wkt::{WktParser, WktVersion};

#[test]
fn test_epsg_4326_to_wkt2() {
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
fn test_epsg_4326_to_proj_strings() {
    let crs = GeographicCrs::epsg_4326();
    assert_eq!(
        crs_to_proj_string(&crs, ProjConvention::Proj5).unwrap(),
        "+proj=pipeline +step +proj=longlat +ellps=WGS84 \
         +step +proj=unitconvert +xy_in=rad +xy_out=deg \
         +step +proj=axisswap +order=2,1"
    );
    assert_eq!(
        crs_to_proj_string(&crs, ProjConvention::Proj4).unwrap(),
        "+proj=longlat +datum=WGS84"
    );
}

#[test]
fn test_epsg_4807_to_wkt1_gdal() {
    let crs = GeographicCrs::epsg_4807();
    let wkt = wkt_string(&crs, WktVersion::Wkt1Gdal, false).unwrap();
    // the grad longitude of Paris is exported in degrees
    assert!(wkt.contains("PRIMEM[\"Paris\",2.33722917"));
    assert!(wkt.contains("UNIT[\"grad\",0.015707963267949,AUTHORITY[\"EPSG\",\"9105\"]]"));
}

#[test]
fn test_epsg_32631_to_wkt1_esri() {
    let crs = ProjectedCrs::epsg_32631();
    let wkt = wkt_string(&crs, WktVersion::Wkt1Esri, false).unwrap();
    assert!(wkt.starts_with("PROJCS[\"WGS_1984_UTM_Zone_31N\""));
    assert!(wkt.contains("GEOGCS[\"GCS_WGS_1984\""));
    assert!(wkt.contains("PROJECTION[\"Transverse_Mercator\"]"));
    assert!(wkt.contains("PARAMETER[\"False_Easting\",500000]"));
    assert!(wkt.contains("PARAMETER[\"False_Northing\",0]"));
    assert!(wkt.contains("PARAMETER[\"Central_Meridian\",3]"));
    assert!(wkt.contains("PARAMETER[\"Scale_Factor\",0.9996]"));
    assert!(wkt.contains("PARAMETER[\"Latitude_Of_Origin\",0]"));
    assert!(wkt.contains("UNIT[\"Meter\",1.0]"));
}

#[test]
fn test_wkt1_towgs84_lifts_to_bound_crs() {
    let mut parser = WktParser::new();
    let crs = parser
        .parse(
            r#"GEOGCS["X",DATUM["Y",SPHEROID["intl",6378388,297],TOWGS84[1,2,3,4,5,6,7]],PRIMEM["Greenwich",0],UNIT["degree",0.0174532925199433]]"#,
        )
        .unwrap();
    let bound = match &*crs {
        Crs::Bound(bound) => bound,
        other => panic!("expected a bound CRS, got '{}'", other.name()),
    };
    assert!(bound.hub_is_wgs84());
    assert_eq!(
        bound.transformation.method.name(),
        "Position Vector transformation (geog2D domain)"
    );
    // parameters are stored in metres, arc-seconds and ppm
    for (index, expected_unit) in [
        (0, &*METRE),
        (3, &*ARC_SECOND),
        (6, &*PARTS_PER_MILLION),
    ] {
        match &bound.transformation.values[index].value {
            ParameterValue::Measure(m) => assert_eq!(m.unit(), expected_unit),
            other => panic!("expected a measure, got {:?}", other),
        }
    }
    assert_eq!(
        bound.transformation.towgs84_parameters().unwrap(),
        vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]
    );
}

#[test]
fn test_compound_to_proj_strings() {
    let compound = CompoundCrs::create(
        Properties::named("WGS 84 / UTM zone 31N + ODN height"),
        vec![ProjectedCrs::epsg_32631(), VerticalCrs::epsg_5701()],
    )
    .unwrap();
    assert_eq!(
        crs_to_proj_string(&compound, ProjConvention::Proj4).unwrap(),
        "+proj=utm +zone=31 +datum=WGS84 +vunits=m"
    );
    // pipeline form: the horizontal component's steps plus a +vunits tail
    let horizontal = crs_to_proj_string(&ProjectedCrs::epsg_32631(), ProjConvention::Proj5).unwrap();
    let pipeline = crs_to_proj_string(&compound, ProjConvention::Proj5).unwrap();
    assert_eq!(pipeline, format!("{} +vunits=m", horizontal));
}

#[test]
fn test_wkt2_round_trip_of_predefined_crs() {
    let predefined: Vec<Arc<Crs>> = vec![
        GeographicCrs::epsg_4326(),
        GeographicCrs::epsg_4807(),
        GeodeticCrs::epsg_4978(),
        ProjectedCrs::epsg_32631(),
        VerticalCrs::epsg_5701(),
    ];
    for crs in predefined {
        let wkt = wkt_string(&crs, WktVersion::Wkt2_2015, false).unwrap();
        let mut parser = WktParser::new();
        let reparsed = parser
            .parse(&wkt)
            .unwrap_or_else(|e| panic!("failed to reparse '{}': {}", crs.name(), e));
        assert!(
            reparsed.is_equivalent_to(&crs, Criterion::Equivalent),
            "round trip of '{}' lost information:\n{}",
            crs.name(),
            wkt
        );
    }
}

#[test]
fn test_wkt1_round_trip_of_projected_crs() {
    let crs = ProjectedCrs::epsg_32631();
    let wkt = wkt_string(&crs, WktVersion::Wkt1Gdal, false).unwrap();
    let mut parser = WktParser::new();
    let reparsed = parser.parse(&wkt).unwrap();
    assert!(reparsed.is_equivalent_to(&crs, Criterion::Equivalent));
}

#[test]
fn test_projected_self_reference() {
    let crs = ProjectedCrs::epsg_32631();
    match &*crs {
        Crs::Projected(projected) => {
            let target = projected.deriving_conversion().target_crs().unwrap();
            assert!(Arc::ptr_eq(&target, &crs));
        }
        _ => unreachable!(),
    }
    // shallow clones stay internally consistent
    let clone = shallow_clone(&crs);
    match &*clone {
        Crs::Projected(projected) => {
            let target = projected.deriving_conversion().target_crs().unwrap();
            assert!(Arc::ptr_eq(&target, &clone));
        }
        _ => unreachable!(),
    }
}

#[test]
fn test_towgs84_survives_wkt1_round_trip() {
    let mut parser = WktParser::new();
    let crs = parser
        .parse(
            r#"GEOGCS["X",DATUM["Y",SPHEROID["intl",6378388,297],TOWGS84[1,2,3,4,5,6,7]],PRIMEM["Greenwich",0],UNIT["degree",0.0174532925199433]]"#,
        )
        .unwrap();
    let wkt = wkt_string(&crs, WktVersion::Wkt1Gdal, false).unwrap();
    assert!(wkt.contains("TOWGS84[1,2,3,4,5,6,7]"));
    let mut parser = WktParser::new();
    let reparsed = parser.parse(&wkt).unwrap();
    match &*reparsed {
        Crs::Bound(bound) => {
            assert_eq!(
                bound.transformation.towgs84_parameters().unwrap(),
                vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]
            );
        }
        _ => panic!("expected a bound CRS"),
    }
}

#[test]
fn test_ellipsoid_derived_quantities() {
    for ellipsoid in [
        Ellipsoid::wgs84(),
        Ellipsoid::grs_1980(),
        Ellipsoid::clarke_1866(),
    ] {
        if ellipsoid.is_sphere() {
            continue;
        }
        let rf = ellipsoid.compute_inverse_flattening();
        let rebuilt = Ellipsoid::create_flattened_sphere(
            Properties::named("rebuilt"),
            ellipsoid.semi_major_axis().clone(),
            crskit::common::Scale::unity(rf),
        )
        .unwrap();
        let difference = (ellipsoid.compute_semi_minor_axis().si_value()
            - rebuilt.compute_semi_minor_axis().si_value())
        .abs();
        assert!(difference < 1e-9, "semi-minor axis drifted by {}", difference);
    }
}

#[test]
fn test_bound_crs_synthesis_preserves_already_wgs84() {
    let wgs84 = GeographicCrs::epsg_4326();
    let unchanged = create_bound_crs_to_wgs84_if_possible(&wgs84, None);
    assert!(Arc::ptr_eq(&wgs84, &unchanged));

    let projected = ProjectedCrs::epsg_32631();
    let unchanged = create_bound_crs_to_wgs84_if_possible(&projected, None);
    assert!(Arc::ptr_eq(&projected, &unchanged));
}

#[test]
fn test_proj_string_round_trip() {
    let parser = ProjStringParser::new();
    for text in [
        "+proj=longlat +datum=WGS84",
        "+proj=utm +zone=31 +datum=WGS84",
        "+proj=merc +lat_ts=0 +lon_0=0 +x_0=0 +y_0=0 +ellps=WGS84",
    ] {
        let crs = parser.parse(text).unwrap();
        let emitted = crs_to_proj_string(&crs, ProjConvention::Proj4).unwrap();
        let reparsed = parser.parse(&emitted).unwrap();
        assert!(
            reparsed.is_equivalent_to(&crs, Criterion::Equivalent),
            "PROJ round trip of '{}' produced '{}'",
            text,
            emitted
        );
    }
}

#[test]
fn test_esri_wkt_reimport() {
    let crs = ProjectedCrs::epsg_32631();
    let esri = wkt_string(&crs, WktVersion::Wkt1Esri, false).unwrap();
    let mut parser = WktParser::new();
    let reparsed = parser.parse(&esri).unwrap();
    // names come back through the alias table
    assert_eq!(reparsed.name(), "WGS 84 / UTM zone 31N");
    assert!(reparsed.is_equivalent_to(&crs, Criterion::Equivalent));
}

#[test]
fn test_lambert_belgium_shares_generic_lcc_parameters() {
    use crskit::operation::Conversion;
    // the Belgium variant keeps its own method identity but the parameter
    // shape of the generic 2SP method
    let belgium = Conversion::create_lambert_conic_conformal_2sp_belgium(
        Properties::named("Belge Lambert 72"),
        90.0,
        4.367486666666666,
        51.16666723333333,
        49.8333339,
        150000.013,
        5400088.438,
    )
    .unwrap();
    let generic = Conversion::create_lambert_conic_conformal_2sp(
        Properties::named("generic"),
        90.0,
        4.367486666666666,
        51.16666723333333,
        49.8333339,
        150000.013,
        5400088.438,
    )
    .unwrap();
    assert_eq!(belgium.method.epsg_code(), Some(9803));
    assert_eq!(generic.method.epsg_code(), Some(9802));
    assert_eq!(belgium.values.len(), generic.values.len());
    for (b, g) in belgium.values.iter().zip(generic.values.iter()) {
        assert!(b.parameter.is_equivalent_to(&g.parameter));
        assert_eq!(b.value, g.value);
    }
    // both travel through PROJ as the same lcc keyword
    assert_eq!(belgium.mapping().unwrap().proj_name, "lcc");
}

#[test]
fn test_esri_morphism_regressions() {
    use crskit::context::ObjectKind;
    use crskit::wkt::esri;
    // without a database the deterministic morphism applies
    assert_eq!(
        esri::morphism("Some Custom System", ObjectKind::GeodeticCrs),
        "GCS_Some_Custom_System"
    );
    assert_eq!(
        esri::morphism("Custom Datum 2000", ObjectKind::Datum),
        "D_Custom_Datum_2000"
    );
    // already-prefixed names are not double-prefixed
    assert_eq!(
        esri::morphism("GCS_Already", ObjectKind::GeodeticCrs),
        "GCS_Already"
    );
    // the alias table wins over the morphism for well-known objects
    assert_eq!(esri::esri_name("WGS 84", ObjectKind::GeodeticCrs), "GCS_WGS_1984");
}

#[test]
fn test_wkt2_2018_usage_and_id() {
    let crs = GeographicCrs::epsg_4326();
    let wkt = wkt_string(&crs, WktVersion::Wkt2_2018, false).unwrap();
    assert!(wkt.starts_with("GEOGCRS["));
    assert!(wkt.ends_with("ID[\"EPSG\",4326]]"));
    let mut parser = WktParser::new();
    let reparsed = parser.parse(&wkt).unwrap();
    assert!(reparsed.is_equivalent_to(&crs, Criterion::Equivalent));
}

#[test]
fn test_coordinate_operation_wkt2_round_trip() {
    use crskit::operation::{CoordinateOperation, Transformation};
    use crskit::operation::registry;
    let transformation = Transformation::create_position_vector(
        Properties::named("NTF (Paris) to WGS 84 (1)"),
        GeographicCrs::epsg_4807(),
        GeographicCrs::epsg_4326(),
        registry::EPSG_CODE_METHOD_POSITION_VECTOR_GEOGRAPHIC_2D,
        -168.0,
        -60.0,
        320.0,
        0.0,
        0.0,
        0.0,
        0.0,
        vec![2.0],
    )
    .unwrap();
    let operation = CoordinateOperation::Transformation(transformation);

    let mut formatter = crskit::WktFormatter::new(WktVersion::Wkt2_2015);
    crskit::wkt::emitter::operation_to_wkt(&operation, &mut formatter).unwrap();
    let wkt = formatter.into_string();
    assert!(wkt.starts_with("COORDINATEOPERATION[\"NTF (Paris) to WGS 84 (1)\""));
    assert!(wkt.contains("OPERATIONACCURACY[2]"));

    let mut parser = WktParser::new();
    let reparsed = match parser.parse_operation(&wkt).unwrap() {
        CoordinateOperation::Transformation(t) => t,
        other => panic!("expected a transformation, got '{}'", other.name()),
    };
    assert_eq!(
        reparsed.towgs84_parameters().unwrap(),
        vec![-168.0, -60.0, 320.0, 0.0, 0.0, 0.0, 0.0]
    );
    assert_eq!(reparsed.accuracies, vec![2.0]);
}

#[test]
fn test_degree_unit_value_tolerance() {
    // both the exact SI factor and a shortened decimal must resolve to the
    // same degree unit
    let mut parser = WktParser::new();
    let a = parser
        .parse(
            r#"GEOGCS["A",DATUM["WGS_1984",SPHEROID["WGS 84",6378137,298.257223563]],PRIMEM["Greenwich",0],UNIT["degree",0.0174532925199433]]"#,
        )
        .unwrap();
    let mut parser = WktParser::new();
    let b = parser
        .parse(
            r#"GEOGCS["B",DATUM["WGS_1984",SPHEROID["WGS 84",6378137,298.257223563]],PRIMEM["Greenwich",0],UNIT["degree",0.017453292519943295]]"#,
        )
        .unwrap();
    assert!(a.is_equivalent_to(&b, Criterion::Equivalent));
}
