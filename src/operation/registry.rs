//! Method and parameter registry
//!
//! The closed table mapping EPSG method/parameter names and codes to WKT1
//! names, PROJ projection keywords and per-parameter unit kinds. The WKT
//! parser, the WKT emitter and the PROJ-string emitter all consult this
//! table, each in its own direction.

use crate::common::unit::UnitKind;
use lazy_static::lazy_static;
use std::collections::HashMap;

/// Cross-dialect identity of one operation parameter
#[derive(Debug, Clone, Copy)]
pub struct ParamMapping {
    pub epsg_name: &'static str,
    /// 0 when the parameter has no EPSG code
    pub epsg_code: u16,
    /// Empty when the parameter must not appear in WKT1
    pub wkt1_name: &'static str,
    pub unit_kind: UnitKind,
    /// PROJ keywords, most specific first; empty when PROJ ignores it
    pub proj_keywords: &'static [&'static str],
}

/// Cross-dialect identity of one operation method
#[derive(Debug, Clone, Copy)]
pub struct MethodMapping {
    pub epsg_name: &'static str,
    /// 0 for WKT2-only methods
    pub epsg_code: u16,
    /// Empty when there is no WKT1 representation
    pub wkt1_name: &'static str,
    /// Empty when PROJ has no equivalent
    pub proj_name: &'static str,
    /// Extra PROJ tokens disambiguating related methods (e.g. "axis=wsu")
    pub proj_modifiers: &'static [&'static str],
    pub params: &'static [ParamMapping],
}

// EPSG method codes for projections
pub const EPSG_CODE_METHOD_TRANSVERSE_MERCATOR: u16 = 9807;
pub const EPSG_CODE_METHOD_TRANSVERSE_MERCATOR_SOUTH_ORIENTATED: u16 = 9808;
pub const EPSG_CODE_METHOD_LAMBERT_CONIC_CONFORMAL_1SP: u16 = 9801;
pub const EPSG_CODE_METHOD_LAMBERT_CONIC_CONFORMAL_2SP: u16 = 9802;
pub const EPSG_CODE_METHOD_LAMBERT_CONIC_CONFORMAL_2SP_BELGIUM: u16 = 9803;
pub const EPSG_CODE_METHOD_LAMBERT_CONIC_CONFORMAL_2SP_MICHIGAN: u16 = 1051;
pub const EPSG_CODE_METHOD_NZMG: u16 = 9811;
pub const EPSG_CODE_METHOD_TUNISIA_MAPPING_GRID: u16 = 9816;
pub const EPSG_CODE_METHOD_ALBERS_EQUAL_AREA: u16 = 9822;
pub const EPSG_CODE_METHOD_MODIFIED_AZIMUTHAL_EQUIDISTANT: u16 = 9832;
pub const EPSG_CODE_METHOD_GUAM_PROJECTION: u16 = 9831;
pub const EPSG_CODE_METHOD_BONNE: u16 = 9827;
pub const EPSG_CODE_METHOD_LAMBERT_CYLINDRICAL_EQUAL_AREA_SPHERICAL: u16 = 9834;
pub const EPSG_CODE_METHOD_LAMBERT_CYLINDRICAL_EQUAL_AREA: u16 = 9835;
pub const EPSG_CODE_METHOD_CASSINI_SOLDNER: u16 = 9806;
pub const EPSG_CODE_METHOD_EQUIDISTANT_CYLINDRICAL: u16 = 1028;
pub const EPSG_CODE_METHOD_EQUIDISTANT_CYLINDRICAL_SPHERICAL: u16 = 1029;
pub const EPSG_CODE_METHOD_HOTINE_OBLIQUE_MERCATOR_VARIANT_A: u16 = 9812;
pub const EPSG_CODE_METHOD_HOTINE_OBLIQUE_MERCATOR_VARIANT_B: u16 = 9815;
pub const EPSG_CODE_METHOD_KROVAK_NORTH_ORIENTED: u16 = 1041;
pub const EPSG_CODE_METHOD_KROVAK: u16 = 9819;
pub const EPSG_CODE_METHOD_LAMBERT_AZIMUTHAL_EQUAL_AREA: u16 = 9820;
pub const EPSG_CODE_METHOD_MERCATOR_VARIANT_A: u16 = 9804;
pub const EPSG_CODE_METHOD_MERCATOR_VARIANT_B: u16 = 9805;
pub const EPSG_CODE_METHOD_POPULAR_VISUALISATION_PSEUDO_MERCATOR: u16 = 1024;
pub const EPSG_CODE_METHOD_OBLIQUE_STEREOGRAPHIC: u16 = 9809;
pub const EPSG_CODE_METHOD_ORTHOGRAPHIC: u16 = 9840;
pub const EPSG_CODE_METHOD_AMERICAN_POLYCONIC: u16 = 9818;
pub const EPSG_CODE_METHOD_POLAR_STEREOGRAPHIC_VARIANT_A: u16 = 9810;
pub const EPSG_CODE_METHOD_POLAR_STEREOGRAPHIC_VARIANT_B: u16 = 9829;
pub const EPSG_CODE_METHOD_EQUAL_EARTH: u16 = 1078;

// EPSG method codes for transformations
pub const EPSG_CODE_METHOD_COORDINATE_FRAME_GEOCENTRIC: u16 = 1032;
pub const EPSG_CODE_METHOD_COORDINATE_FRAME_GEOGRAPHIC_2D: u16 = 9607;
pub const EPSG_CODE_METHOD_COORDINATE_FRAME_GEOGRAPHIC_3D: u16 = 1038;
pub const EPSG_CODE_METHOD_POSITION_VECTOR_GEOCENTRIC: u16 = 1033;
pub const EPSG_CODE_METHOD_POSITION_VECTOR_GEOGRAPHIC_2D: u16 = 9606;
pub const EPSG_CODE_METHOD_POSITION_VECTOR_GEOGRAPHIC_3D: u16 = 1037;
pub const EPSG_CODE_METHOD_GEOCENTRIC_TRANSLATION_GEOCENTRIC: u16 = 1031;
pub const EPSG_CODE_METHOD_GEOCENTRIC_TRANSLATION_GEOGRAPHIC_2D: u16 = 9603;
pub const EPSG_CODE_METHOD_GEOCENTRIC_TRANSLATION_GEOGRAPHIC_3D: u16 = 1035;
pub const EPSG_CODE_METHOD_TIME_DEPENDENT_POSITION_VECTOR_GEOCENTRIC: u16 = 1053;
pub const EPSG_CODE_METHOD_TIME_DEPENDENT_POSITION_VECTOR_GEOGRAPHIC_2D: u16 = 1054;
pub const EPSG_CODE_METHOD_TIME_DEPENDENT_POSITION_VECTOR_GEOGRAPHIC_3D: u16 = 1055;
pub const EPSG_CODE_METHOD_TIME_DEPENDENT_COORDINATE_FRAME_GEOCENTRIC: u16 = 1056;
pub const EPSG_CODE_METHOD_TIME_DEPENDENT_COORDINATE_FRAME_GEOGRAPHIC_2D: u16 = 1057;
pub const EPSG_CODE_METHOD_TIME_DEPENDENT_COORDINATE_FRAME_GEOGRAPHIC_3D: u16 = 1058;
pub const EPSG_CODE_METHOD_MOLODENSKY: u16 = 9604;
pub const EPSG_CODE_METHOD_ABRIDGED_MOLODENSKY: u16 = 9605;
pub const EPSG_CODE_METHOD_NTV1: u16 = 9614;
pub const EPSG_CODE_METHOD_NTV2: u16 = 9615;
pub const EPSG_CODE_METHOD_NADCON: u16 = 9613;
pub const EPSG_CODE_METHOD_VERTCON: u16 = 9658;
pub const EPSG_CODE_METHOD_CHANGE_VERTICAL_UNIT: u16 = 1069;
pub const EPSG_CODE_METHOD_LONGITUDE_ROTATION: u16 = 9601;
pub const EPSG_CODE_METHOD_VERTICAL_OFFSET: u16 = 9616;
pub const EPSG_CODE_METHOD_GEOGRAPHIC2D_OFFSETS: u16 = 9619;
pub const EPSG_CODE_METHOD_GEOGRAPHIC2D_WITH_HEIGHT_OFFSETS: u16 = 9618;
pub const EPSG_CODE_METHOD_GEOGRAPHIC3D_OFFSETS: u16 = 9660;
pub const EPSG_CODE_METHOD_GEOGRAPHIC_GEOCENTRIC: u16 = 9602;
pub const EPSG_CODE_METHOD_AFFINE_PARAMETRIC_TRANSFORMATION: u16 = 9624;

pub const EPSG_NAME_METHOD_GEOCENTRIC_TRANSLATION_GEOCENTRIC: &str =
    "Geocentric translations (geocentric domain)";
pub const EPSG_NAME_METHOD_GEOCENTRIC_TRANSLATION_GEOGRAPHIC_2D: &str =
    "Geocentric translations (geog2D domain)";
pub const EPSG_NAME_METHOD_GEOCENTRIC_TRANSLATION_GEOGRAPHIC_3D: &str =
    "Geocentric translations (geog3D domain)";
pub const EPSG_NAME_METHOD_POSITION_VECTOR_GEOCENTRIC: &str =
    "Position Vector transformation (geocentric domain)";
pub const EPSG_NAME_METHOD_POSITION_VECTOR_GEOGRAPHIC_2D: &str =
    "Position Vector transformation (geog2D domain)";
pub const EPSG_NAME_METHOD_POSITION_VECTOR_GEOGRAPHIC_3D: &str =
    "Position Vector transformation (geog3D domain)";
pub const EPSG_NAME_METHOD_COORDINATE_FRAME_GEOCENTRIC: &str =
    "Coordinate Frame rotation (geocentric domain)";
pub const EPSG_NAME_METHOD_COORDINATE_FRAME_GEOGRAPHIC_2D: &str =
    "Coordinate Frame rotation (geog2D domain)";
pub const EPSG_NAME_METHOD_COORDINATE_FRAME_GEOGRAPHIC_3D: &str =
    "Coordinate Frame rotation (geog3D domain)";
pub const EPSG_NAME_METHOD_MOLODENSKY: &str = "Molodensky";
pub const EPSG_NAME_METHOD_ABRIDGED_MOLODENSKY: &str = "Abridged Molodensky";
pub const EPSG_NAME_METHOD_NTV1: &str = "NTv1";
pub const EPSG_NAME_METHOD_NTV2: &str = "NTv2";
pub const EPSG_NAME_METHOD_NADCON: &str = "NADCON";
pub const EPSG_NAME_METHOD_VERTCON: &str = "VERTCON";
pub const EPSG_NAME_METHOD_CHANGE_VERTICAL_UNIT: &str = "Change of Vertical Unit";
pub const EPSG_NAME_METHOD_LONGITUDE_ROTATION: &str = "Longitude rotation";
pub const EPSG_NAME_METHOD_VERTICAL_OFFSET: &str = "Vertical Offset";
pub const EPSG_NAME_METHOD_GEOGRAPHIC2D_OFFSETS: &str = "Geographic2D offsets";
pub const EPSG_NAME_METHOD_GEOGRAPHIC2D_WITH_HEIGHT_OFFSETS: &str =
    "Geographic2D with Height Offsets";
pub const EPSG_NAME_METHOD_GEOGRAPHIC3D_OFFSETS: &str = "Geographic3D offsets";
pub const EPSG_NAME_METHOD_GEOGRAPHIC_GEOCENTRIC: &str = "Geographic/geocentric conversions";
pub const EPSG_NAME_METHOD_AFFINE_PARAMETRIC_TRANSFORMATION: &str =
    "Affine parametric transformation";
pub const PROJ_WKT2_NAME_METHOD_HEIGHT_TO_GEOG3D: &str = "GravityRelatedHeight to Geographic3D";
pub const PROJ_WKT2_NAME_METHOD_CTABLE2: &str = "CTABLE2";

// EPSG parameter codes for Helmert-family transformations
pub const EPSG_CODE_PARAMETER_X_AXIS_TRANSLATION: u16 = 8605;
pub const EPSG_CODE_PARAMETER_Y_AXIS_TRANSLATION: u16 = 8606;
pub const EPSG_CODE_PARAMETER_Z_AXIS_TRANSLATION: u16 = 8607;
pub const EPSG_CODE_PARAMETER_X_AXIS_ROTATION: u16 = 8608;
pub const EPSG_CODE_PARAMETER_Y_AXIS_ROTATION: u16 = 8609;
pub const EPSG_CODE_PARAMETER_Z_AXIS_ROTATION: u16 = 8610;
pub const EPSG_CODE_PARAMETER_SCALE_DIFFERENCE: u16 = 8611;
pub const EPSG_CODE_PARAMETER_RATE_X_AXIS_TRANSLATION: u16 = 1040;
pub const EPSG_CODE_PARAMETER_RATE_Y_AXIS_TRANSLATION: u16 = 1041;
pub const EPSG_CODE_PARAMETER_RATE_Z_AXIS_TRANSLATION: u16 = 1042;
pub const EPSG_CODE_PARAMETER_RATE_X_AXIS_ROTATION: u16 = 1043;
pub const EPSG_CODE_PARAMETER_RATE_Y_AXIS_ROTATION: u16 = 1044;
pub const EPSG_CODE_PARAMETER_RATE_Z_AXIS_ROTATION: u16 = 1045;
pub const EPSG_CODE_PARAMETER_RATE_SCALE_DIFFERENCE: u16 = 1046;
pub const EPSG_CODE_PARAMETER_REFERENCE_EPOCH: u16 = 1047;

pub const EPSG_NAME_PARAMETER_X_AXIS_TRANSLATION: &str = "X-axis translation";
pub const EPSG_NAME_PARAMETER_Y_AXIS_TRANSLATION: &str = "Y-axis translation";
pub const EPSG_NAME_PARAMETER_Z_AXIS_TRANSLATION: &str = "Z-axis translation";
pub const EPSG_NAME_PARAMETER_X_AXIS_ROTATION: &str = "X-axis rotation";
pub const EPSG_NAME_PARAMETER_Y_AXIS_ROTATION: &str = "Y-axis rotation";
pub const EPSG_NAME_PARAMETER_Z_AXIS_ROTATION: &str = "Z-axis rotation";
pub const EPSG_NAME_PARAMETER_SCALE_DIFFERENCE: &str = "Scale difference";

// Other transformation parameters
pub const EPSG_CODE_PARAMETER_LATITUDE_OFFSET: u16 = 8601;
pub const EPSG_CODE_PARAMETER_LONGITUDE_OFFSET: u16 = 8602;
pub const EPSG_CODE_PARAMETER_VERTICAL_OFFSET: u16 = 8603;
pub const EPSG_CODE_PARAMETER_GEOID_UNDULATION: u16 = 8604;
pub const EPSG_CODE_PARAMETER_SEMI_MAJOR_AXIS_DIFFERENCE: u16 = 8654;
pub const EPSG_CODE_PARAMETER_FLATTENING_DIFFERENCE: u16 = 8655;
pub const EPSG_CODE_PARAMETER_LATITUDE_LONGITUDE_DIFFERENCE_FILE: u16 = 8656;
pub const EPSG_CODE_PARAMETER_LATITUDE_DIFFERENCE_FILE: u16 = 8657;
pub const EPSG_CODE_PARAMETER_LONGITUDE_DIFFERENCE_FILE: u16 = 8658;
pub const EPSG_CODE_PARAMETER_GEOID_CORRECTION_FILENAME: u16 = 8666;
pub const EPSG_CODE_PARAMETER_VERTICAL_OFFSET_FILE: u16 = 8732;
pub const EPSG_CODE_PARAMETER_UNIT_CONVERSION_SCALAR: u16 = 1051;
pub const EPSG_CODE_PARAMETER_A0: u16 = 8623;
pub const EPSG_CODE_PARAMETER_A1: u16 = 8624;
pub const EPSG_CODE_PARAMETER_A2: u16 = 8625;
pub const EPSG_CODE_PARAMETER_B0: u16 = 8639;
pub const EPSG_CODE_PARAMETER_B1: u16 = 8640;
pub const EPSG_CODE_PARAMETER_B2: u16 = 8641;

pub const EPSG_NAME_PARAMETER_LATITUDE_OFFSET: &str = "Latitude offset";
pub const EPSG_NAME_PARAMETER_LONGITUDE_OFFSET: &str = "Longitude offset";
pub const EPSG_NAME_PARAMETER_VERTICAL_OFFSET: &str = "Vertical Offset";
pub const EPSG_NAME_PARAMETER_GEOID_UNDULATION: &str = "Geoid undulation";
pub const EPSG_NAME_PARAMETER_SEMI_MAJOR_AXIS_DIFFERENCE: &str =
    "Semi-major axis length difference";
pub const EPSG_NAME_PARAMETER_FLATTENING_DIFFERENCE: &str = "Flattening difference";
pub const EPSG_NAME_PARAMETER_LATITUDE_LONGITUDE_DIFFERENCE_FILE: &str =
    "Latitude and longitude difference file";
pub const EPSG_NAME_PARAMETER_LATITUDE_DIFFERENCE_FILE: &str = "Latitude difference file";
pub const EPSG_NAME_PARAMETER_LONGITUDE_DIFFERENCE_FILE: &str = "Longitude difference file";
pub const EPSG_NAME_PARAMETER_GEOID_CORRECTION_FILENAME: &str =
    "Geoid (height correction) model file";
pub const EPSG_NAME_PARAMETER_VERTICAL_OFFSET_FILE: &str = "Vertical offset file";
pub const EPSG_NAME_PARAMETER_UNIT_CONVERSION_SCALAR: &str = "Unit conversion scalar";

// Projection parameter codes
pub const EPSG_CODE_PARAMETER_COLATITUDE_CONE_AXIS: u16 = 1036;
pub const EPSG_CODE_PARAMETER_LATITUDE_OF_NATURAL_ORIGIN: u16 = 8801;
pub const EPSG_CODE_PARAMETER_LONGITUDE_OF_NATURAL_ORIGIN: u16 = 8802;
pub const EPSG_CODE_PARAMETER_SCALE_FACTOR_AT_NATURAL_ORIGIN: u16 = 8805;
pub const EPSG_CODE_PARAMETER_FALSE_EASTING: u16 = 8806;
pub const EPSG_CODE_PARAMETER_FALSE_NORTHING: u16 = 8807;
pub const EPSG_CODE_PARAMETER_LATITUDE_PROJECTION_CENTRE: u16 = 8811;
pub const EPSG_CODE_PARAMETER_LONGITUDE_PROJECTION_CENTRE: u16 = 8812;
pub const EPSG_CODE_PARAMETER_AZIMUTH_INITIAL_LINE: u16 = 8813;
pub const EPSG_CODE_PARAMETER_ANGLE_RECTIFIED_TO_SKEW_GRID: u16 = 8814;
pub const EPSG_CODE_PARAMETER_SCALE_FACTOR_INITIAL_LINE: u16 = 8815;
pub const EPSG_CODE_PARAMETER_EASTING_PROJECTION_CENTRE: u16 = 8816;
pub const EPSG_CODE_PARAMETER_NORTHING_PROJECTION_CENTRE: u16 = 8817;
pub const EPSG_CODE_PARAMETER_LATITUDE_PSEUDO_STANDARD_PARALLEL: u16 = 8818;
pub const EPSG_CODE_PARAMETER_SCALE_FACTOR_PSEUDO_STANDARD_PARALLEL: u16 = 8819;
pub const EPSG_CODE_PARAMETER_LATITUDE_FALSE_ORIGIN: u16 = 8821;
pub const EPSG_CODE_PARAMETER_LONGITUDE_FALSE_ORIGIN: u16 = 8822;
pub const EPSG_CODE_PARAMETER_LATITUDE_1ST_STD_PARALLEL: u16 = 8823;
pub const EPSG_CODE_PARAMETER_LATITUDE_2ND_STD_PARALLEL: u16 = 8824;
pub const EPSG_CODE_PARAMETER_EASTING_FALSE_ORIGIN: u16 = 8826;
pub const EPSG_CODE_PARAMETER_NORTHING_FALSE_ORIGIN: u16 = 8827;
pub const EPSG_CODE_PARAMETER_LATITUDE_STD_PARALLEL: u16 = 8832;
pub const EPSG_CODE_PARAMETER_LONGITUDE_OF_ORIGIN: u16 = 8833;
pub const EPSG_CODE_PARAMETER_ELLIPSOID_SCALE_FACTOR: u16 = 1038;

pub const EPSG_NAME_PARAMETER_LATITUDE_OF_NATURAL_ORIGIN: &str = "Latitude of natural origin";
pub const EPSG_NAME_PARAMETER_LONGITUDE_OF_NATURAL_ORIGIN: &str = "Longitude of natural origin";
pub const EPSG_NAME_PARAMETER_SCALE_FACTOR_AT_NATURAL_ORIGIN: &str =
    "Scale factor at natural origin";
pub const EPSG_NAME_PARAMETER_FALSE_EASTING: &str = "False easting";
pub const EPSG_NAME_PARAMETER_FALSE_NORTHING: &str = "False northing";
pub const EPSG_NAME_PARAMETER_LATITUDE_FALSE_ORIGIN: &str = "Latitude of false origin";
pub const EPSG_NAME_PARAMETER_LONGITUDE_FALSE_ORIGIN: &str = "Longitude of false origin";
pub const EPSG_NAME_PARAMETER_EASTING_FALSE_ORIGIN: &str = "Easting of false origin";
pub const EPSG_NAME_PARAMETER_NORTHING_FALSE_ORIGIN: &str = "Northing of false origin";
pub const EPSG_NAME_PARAMETER_LATITUDE_1ST_STD_PARALLEL: &str =
    "Latitude of 1st standard parallel";
pub const EPSG_NAME_PARAMETER_LATITUDE_2ND_STD_PARALLEL: &str =
    "Latitude of 2nd standard parallel";
pub const EPSG_NAME_PARAMETER_LATITUDE_STD_PARALLEL: &str = "Latitude of standard parallel";
pub const EPSG_NAME_PARAMETER_LONGITUDE_OF_ORIGIN: &str = "Longitude of origin";
pub const EPSG_NAME_PARAMETER_LATITUDE_PROJECTION_CENTRE: &str = "Latitude of projection centre";
pub const EPSG_NAME_PARAMETER_LONGITUDE_PROJECTION_CENTRE: &str = "Longitude of projection centre";
pub const EPSG_NAME_PARAMETER_AZIMUTH_INITIAL_LINE: &str = "Azimuth of initial line";
pub const EPSG_NAME_PARAMETER_ANGLE_RECTIFIED_TO_SKEW_GRID: &str =
    "Angle from Rectified to Skew Grid";
pub const EPSG_NAME_PARAMETER_SCALE_FACTOR_INITIAL_LINE: &str = "Scale factor on initial line";
pub const EPSG_NAME_PARAMETER_EASTING_PROJECTION_CENTRE: &str = "Easting at projection centre";
pub const EPSG_NAME_PARAMETER_NORTHING_PROJECTION_CENTRE: &str = "Northing at projection centre";

const WKT1_LATITUDE_OF_ORIGIN: &str = "latitude_of_origin";
const WKT1_CENTRAL_MERIDIAN: &str = "central_meridian";
const WKT1_SCALE_FACTOR: &str = "scale_factor";
const WKT1_FALSE_EASTING: &str = "false_easting";
const WKT1_FALSE_NORTHING: &str = "false_northing";
const WKT1_STANDARD_PARALLEL_1: &str = "standard_parallel_1";
const WKT1_STANDARD_PARALLEL_2: &str = "standard_parallel_2";

// UTM constants
pub const UTM_LATITUDE_OF_NATURAL_ORIGIN: f64 = 0.0;
pub const UTM_SCALE_FACTOR: f64 = 0.9996;
pub const UTM_FALSE_EASTING: f64 = 500000.0;
pub const UTM_NORTH_FALSE_NORTHING: f64 = 0.0;
pub const UTM_SOUTH_FALSE_NORTHING: f64 = 10000000.0;

const PARAM_LATITUDE_NAT_ORIGIN: ParamMapping = ParamMapping {
    epsg_name: EPSG_NAME_PARAMETER_LATITUDE_OF_NATURAL_ORIGIN,
    epsg_code: EPSG_CODE_PARAMETER_LATITUDE_OF_NATURAL_ORIGIN,
    wkt1_name: WKT1_LATITUDE_OF_ORIGIN,
    unit_kind: UnitKind::Angular,
    proj_keywords: &["lat_0"],
};

const PARAM_LONGITUDE_NAT_ORIGIN: ParamMapping = ParamMapping {
    epsg_name: EPSG_NAME_PARAMETER_LONGITUDE_OF_NATURAL_ORIGIN,
    epsg_code: EPSG_CODE_PARAMETER_LONGITUDE_OF_NATURAL_ORIGIN,
    wkt1_name: WKT1_CENTRAL_MERIDIAN,
    unit_kind: UnitKind::Angular,
    proj_keywords: &["lon_0"],
};

const PARAM_SCALE_FACTOR: ParamMapping = ParamMapping {
    epsg_name: EPSG_NAME_PARAMETER_SCALE_FACTOR_AT_NATURAL_ORIGIN,
    epsg_code: EPSG_CODE_PARAMETER_SCALE_FACTOR_AT_NATURAL_ORIGIN,
    wkt1_name: WKT1_SCALE_FACTOR,
    unit_kind: UnitKind::Scale,
    proj_keywords: &["k_0"],
};

const PARAM_SCALE_FACTOR_K: ParamMapping = ParamMapping {
    epsg_name: EPSG_NAME_PARAMETER_SCALE_FACTOR_AT_NATURAL_ORIGIN,
    epsg_code: EPSG_CODE_PARAMETER_SCALE_FACTOR_AT_NATURAL_ORIGIN,
    wkt1_name: WKT1_SCALE_FACTOR,
    unit_kind: UnitKind::Scale,
    proj_keywords: &["k"],
};

const PARAM_FALSE_EASTING: ParamMapping = ParamMapping {
    epsg_name: EPSG_NAME_PARAMETER_FALSE_EASTING,
    epsg_code: EPSG_CODE_PARAMETER_FALSE_EASTING,
    wkt1_name: WKT1_FALSE_EASTING,
    unit_kind: UnitKind::Linear,
    proj_keywords: &["x_0"],
};

const PARAM_FALSE_NORTHING: ParamMapping = ParamMapping {
    epsg_name: EPSG_NAME_PARAMETER_FALSE_NORTHING,
    epsg_code: EPSG_CODE_PARAMETER_FALSE_NORTHING,
    wkt1_name: WKT1_FALSE_NORTHING,
    unit_kind: UnitKind::Linear,
    proj_keywords: &["y_0"],
};

const PARAM_LATITUDE_FALSE_ORIGIN: ParamMapping = ParamMapping {
    epsg_name: EPSG_NAME_PARAMETER_LATITUDE_FALSE_ORIGIN,
    epsg_code: EPSG_CODE_PARAMETER_LATITUDE_FALSE_ORIGIN,
    wkt1_name: WKT1_LATITUDE_OF_ORIGIN,
    unit_kind: UnitKind::Angular,
    proj_keywords: &["lat_0"],
};

const PARAM_LONGITUDE_FALSE_ORIGIN: ParamMapping = ParamMapping {
    epsg_name: EPSG_NAME_PARAMETER_LONGITUDE_FALSE_ORIGIN,
    epsg_code: EPSG_CODE_PARAMETER_LONGITUDE_FALSE_ORIGIN,
    wkt1_name: WKT1_CENTRAL_MERIDIAN,
    unit_kind: UnitKind::Angular,
    proj_keywords: &["lon_0"],
};

const PARAM_FALSE_EASTING_ORIGIN: ParamMapping = ParamMapping {
    epsg_name: EPSG_NAME_PARAMETER_EASTING_FALSE_ORIGIN,
    epsg_code: EPSG_CODE_PARAMETER_EASTING_FALSE_ORIGIN,
    wkt1_name: WKT1_FALSE_EASTING,
    unit_kind: UnitKind::Linear,
    proj_keywords: &["x_0"],
};

const PARAM_FALSE_NORTHING_ORIGIN: ParamMapping = ParamMapping {
    epsg_name: EPSG_NAME_PARAMETER_NORTHING_FALSE_ORIGIN,
    epsg_code: EPSG_CODE_PARAMETER_NORTHING_FALSE_ORIGIN,
    wkt1_name: WKT1_FALSE_NORTHING,
    unit_kind: UnitKind::Linear,
    proj_keywords: &["y_0"],
};

const PARAM_LATITUDE_1ST_STD_PARALLEL: ParamMapping = ParamMapping {
    epsg_name: EPSG_NAME_PARAMETER_LATITUDE_1ST_STD_PARALLEL,
    epsg_code: EPSG_CODE_PARAMETER_LATITUDE_1ST_STD_PARALLEL,
    wkt1_name: WKT1_STANDARD_PARALLEL_1,
    unit_kind: UnitKind::Angular,
    proj_keywords: &["lat_1"],
};

const PARAM_LATITUDE_2ND_STD_PARALLEL: ParamMapping = ParamMapping {
    epsg_name: EPSG_NAME_PARAMETER_LATITUDE_2ND_STD_PARALLEL,
    epsg_code: EPSG_CODE_PARAMETER_LATITUDE_2ND_STD_PARALLEL,
    wkt1_name: WKT1_STANDARD_PARALLEL_2,
    unit_kind: UnitKind::Angular,
    proj_keywords: &["lat_2"],
};

const PARAM_LATITUDE_TS: ParamMapping = ParamMapping {
    epsg_name: EPSG_NAME_PARAMETER_LATITUDE_1ST_STD_PARALLEL,
    epsg_code: EPSG_CODE_PARAMETER_LATITUDE_1ST_STD_PARALLEL,
    wkt1_name: WKT1_STANDARD_PARALLEL_1,
    unit_kind: UnitKind::Angular,
    proj_keywords: &["lat_ts"],
};

const PARAM_LATITUDE_OF_CENTER: ParamMapping = ParamMapping {
    epsg_name: EPSG_NAME_PARAMETER_LATITUDE_OF_NATURAL_ORIGIN,
    epsg_code: EPSG_CODE_PARAMETER_LATITUDE_OF_NATURAL_ORIGIN,
    wkt1_name: "latitude_of_center",
    unit_kind: UnitKind::Angular,
    proj_keywords: &["lat_0"],
};

const PARAM_LONGITUDE_OF_CENTER: ParamMapping = ParamMapping {
    epsg_name: EPSG_NAME_PARAMETER_LONGITUDE_OF_NATURAL_ORIGIN,
    epsg_code: EPSG_CODE_PARAMETER_LONGITUDE_OF_NATURAL_ORIGIN,
    wkt1_name: "longitude_of_center",
    unit_kind: UnitKind::Angular,
    proj_keywords: &["lon_0"],
};

const KROVAK_PARAMETERS: [ParamMapping; 7] = [
    ParamMapping {
        epsg_name: EPSG_NAME_PARAMETER_LATITUDE_PROJECTION_CENTRE,
        epsg_code: EPSG_CODE_PARAMETER_LATITUDE_PROJECTION_CENTRE,
        wkt1_name: "latitude_of_center",
        unit_kind: UnitKind::Angular,
        proj_keywords: &["lat_0"],
    },
    ParamMapping {
        epsg_name: EPSG_NAME_PARAMETER_LONGITUDE_OF_ORIGIN,
        epsg_code: EPSG_CODE_PARAMETER_LONGITUDE_OF_ORIGIN,
        wkt1_name: "longitude_of_center",
        unit_kind: UnitKind::Angular,
        proj_keywords: &["lon_0"],
    },
    // ignored by PROJ currently
    ParamMapping {
        epsg_name: "Co-latitude of cone axis",
        epsg_code: EPSG_CODE_PARAMETER_COLATITUDE_CONE_AXIS,
        wkt1_name: "azimuth",
        unit_kind: UnitKind::Angular,
        proj_keywords: &[],
    },
    // ignored by PROJ currently
    ParamMapping {
        epsg_name: "Latitude of pseudo standard parallel",
        epsg_code: EPSG_CODE_PARAMETER_LATITUDE_PSEUDO_STANDARD_PARALLEL,
        wkt1_name: "pseudo_standard_parallel_1",
        unit_kind: UnitKind::Angular,
        proj_keywords: &[],
    },
    ParamMapping {
        epsg_name: "Scale factor on pseudo standard parallel",
        epsg_code: EPSG_CODE_PARAMETER_SCALE_FACTOR_PSEUDO_STANDARD_PARALLEL,
        wkt1_name: WKT1_SCALE_FACTOR,
        unit_kind: UnitKind::Scale,
        proj_keywords: &["k"],
    },
    PARAM_FALSE_EASTING,
    PARAM_FALSE_NORTHING,
];

const HOTINE_CENTRE_PARAMETERS: [ParamMapping; 7] = [
    ParamMapping {
        epsg_name: EPSG_NAME_PARAMETER_LATITUDE_PROJECTION_CENTRE,
        epsg_code: EPSG_CODE_PARAMETER_LATITUDE_PROJECTION_CENTRE,
        wkt1_name: WKT1_LATITUDE_OF_ORIGIN,
        unit_kind: UnitKind::Angular,
        proj_keywords: &["lat_0"],
    },
    ParamMapping {
        epsg_name: EPSG_NAME_PARAMETER_LONGITUDE_PROJECTION_CENTRE,
        epsg_code: EPSG_CODE_PARAMETER_LONGITUDE_PROJECTION_CENTRE,
        wkt1_name: WKT1_CENTRAL_MERIDIAN,
        unit_kind: UnitKind::Angular,
        proj_keywords: &["lonc"],
    },
    ParamMapping {
        epsg_name: EPSG_NAME_PARAMETER_AZIMUTH_INITIAL_LINE,
        epsg_code: EPSG_CODE_PARAMETER_AZIMUTH_INITIAL_LINE,
        wkt1_name: "azimuth",
        unit_kind: UnitKind::Angular,
        proj_keywords: &["alpha"],
    },
    ParamMapping {
        epsg_name: EPSG_NAME_PARAMETER_ANGLE_RECTIFIED_TO_SKEW_GRID,
        epsg_code: EPSG_CODE_PARAMETER_ANGLE_RECTIFIED_TO_SKEW_GRID,
        wkt1_name: "rectified_grid_angle",
        unit_kind: UnitKind::Angular,
        proj_keywords: &["gamma"],
    },
    ParamMapping {
        epsg_name: EPSG_NAME_PARAMETER_SCALE_FACTOR_INITIAL_LINE,
        epsg_code: EPSG_CODE_PARAMETER_SCALE_FACTOR_INITIAL_LINE,
        wkt1_name: WKT1_SCALE_FACTOR,
        unit_kind: UnitKind::Scale,
        proj_keywords: &["k"],
    },
    ParamMapping {
        epsg_name: EPSG_NAME_PARAMETER_EASTING_PROJECTION_CENTRE,
        epsg_code: EPSG_CODE_PARAMETER_EASTING_PROJECTION_CENTRE,
        wkt1_name: WKT1_FALSE_EASTING,
        unit_kind: UnitKind::Linear,
        proj_keywords: &["x_0"],
    },
    ParamMapping {
        epsg_name: EPSG_NAME_PARAMETER_NORTHING_PROJECTION_CENTRE,
        epsg_code: EPSG_CODE_PARAMETER_NORTHING_PROJECTION_CENTRE,
        wkt1_name: WKT1_FALSE_NORTHING,
        unit_kind: UnitKind::Linear,
        proj_keywords: &["y_0"],
    },
];

/// The closed projection-method table
pub static METHOD_MAPPINGS: &[MethodMapping] = &[
    MethodMapping {
        epsg_name: "Transverse Mercator",
        epsg_code: EPSG_CODE_METHOD_TRANSVERSE_MERCATOR,
        wkt1_name: "Transverse_Mercator",
        proj_name: "tmerc",
        proj_modifiers: &[],
        params: &[
            PARAM_LATITUDE_NAT_ORIGIN,
            PARAM_LONGITUDE_NAT_ORIGIN,
            PARAM_SCALE_FACTOR,
            PARAM_FALSE_EASTING,
            PARAM_FALSE_NORTHING,
        ],
    },
    MethodMapping {
        epsg_name: "Transverse Mercator (South Orientated)",
        epsg_code: EPSG_CODE_METHOD_TRANSVERSE_MERCATOR_SOUTH_ORIENTATED,
        wkt1_name: "Transverse_Mercator_South_Orientated",
        proj_name: "tmerc",
        proj_modifiers: &["axis=wsu"],
        params: &[
            PARAM_LATITUDE_NAT_ORIGIN,
            PARAM_LONGITUDE_NAT_ORIGIN,
            PARAM_SCALE_FACTOR,
            PARAM_FALSE_EASTING,
            PARAM_FALSE_NORTHING,
        ],
    },
    MethodMapping {
        epsg_name: "Two Point Equidistant",
        epsg_code: 0,
        wkt1_name: "Two_Point_Equidistant",
        proj_name: "tpeqd",
        proj_modifiers: &[],
        params: &[
            ParamMapping {
                epsg_name: "Latitude of first point",
                epsg_code: 0,
                wkt1_name: "Latitude_Of_1st_Point",
                unit_kind: UnitKind::Angular,
                proj_keywords: &["lat_1"],
            },
            ParamMapping {
                epsg_name: "Longitude of first point",
                epsg_code: 0,
                wkt1_name: "Longitude_Of_1st_Point",
                unit_kind: UnitKind::Angular,
                proj_keywords: &["lon_1"],
            },
            ParamMapping {
                epsg_name: "Latitude of second point",
                epsg_code: 0,
                wkt1_name: "Latitude_Of_2nd_Point",
                unit_kind: UnitKind::Angular,
                proj_keywords: &["lat_2"],
            },
            ParamMapping {
                epsg_name: "Longitude of second point",
                epsg_code: 0,
                wkt1_name: "Longitude_Of_2nd_Point",
                unit_kind: UnitKind::Angular,
                proj_keywords: &["lon_2"],
            },
            PARAM_FALSE_EASTING,
            PARAM_FALSE_NORTHING,
        ],
    },
    // no PROJ equivalent
    MethodMapping {
        epsg_name: "Tunisia Mapping Grid",
        epsg_code: EPSG_CODE_METHOD_TUNISIA_MAPPING_GRID,
        wkt1_name: "Tunisia_Mapping_Grid",
        proj_name: "",
        proj_modifiers: &[],
        params: &[
            PARAM_LATITUDE_FALSE_ORIGIN,
            PARAM_LONGITUDE_FALSE_ORIGIN,
            PARAM_FALSE_EASTING_ORIGIN,
            PARAM_FALSE_NORTHING_ORIGIN,
        ],
    },
    MethodMapping {
        epsg_name: "Albers Equal Area",
        epsg_code: EPSG_CODE_METHOD_ALBERS_EQUAL_AREA,
        wkt1_name: "Albers_Conic_Equal_Area",
        proj_name: "aea",
        proj_modifiers: &[],
        params: &[
            ParamMapping {
                epsg_name: EPSG_NAME_PARAMETER_LATITUDE_FALSE_ORIGIN,
                epsg_code: EPSG_CODE_PARAMETER_LATITUDE_FALSE_ORIGIN,
                wkt1_name: "latitude_of_center",
                unit_kind: UnitKind::Angular,
                proj_keywords: &["lat_0"],
            },
            ParamMapping {
                epsg_name: EPSG_NAME_PARAMETER_LONGITUDE_FALSE_ORIGIN,
                epsg_code: EPSG_CODE_PARAMETER_LONGITUDE_FALSE_ORIGIN,
                wkt1_name: "longitude_of_center",
                unit_kind: UnitKind::Angular,
                proj_keywords: &["lon_0"],
            },
            PARAM_LATITUDE_1ST_STD_PARALLEL,
            PARAM_LATITUDE_2ND_STD_PARALLEL,
            PARAM_FALSE_EASTING_ORIGIN,
            PARAM_FALSE_NORTHING_ORIGIN,
        ],
    },
    MethodMapping {
        epsg_name: "Lambert Conic Conformal (1SP)",
        epsg_code: EPSG_CODE_METHOD_LAMBERT_CONIC_CONFORMAL_1SP,
        wkt1_name: "Lambert_Conformal_Conic_1SP",
        proj_name: "lcc",
        proj_modifiers: &[],
        params: &[
            ParamMapping {
                epsg_name: EPSG_NAME_PARAMETER_LATITUDE_OF_NATURAL_ORIGIN,
                epsg_code: EPSG_CODE_PARAMETER_LATITUDE_OF_NATURAL_ORIGIN,
                wkt1_name: WKT1_LATITUDE_OF_ORIGIN,
                unit_kind: UnitKind::Angular,
                proj_keywords: &["lat_1", "lat_0"],
            },
            PARAM_LONGITUDE_NAT_ORIGIN,
            PARAM_SCALE_FACTOR,
            PARAM_FALSE_EASTING,
            PARAM_FALSE_NORTHING,
        ],
    },
    MethodMapping {
        epsg_name: "Lambert Conic Conformal (2SP)",
        epsg_code: EPSG_CODE_METHOD_LAMBERT_CONIC_CONFORMAL_2SP,
        wkt1_name: "Lambert_Conformal_Conic_2SP",
        proj_name: "lcc",
        proj_modifiers: &[],
        params: &[
            PARAM_LATITUDE_FALSE_ORIGIN,
            PARAM_LONGITUDE_FALSE_ORIGIN,
            PARAM_LATITUDE_1ST_STD_PARALLEL,
            PARAM_LATITUDE_2ND_STD_PARALLEL,
            PARAM_FALSE_EASTING_ORIGIN,
            PARAM_FALSE_NORTHING_ORIGIN,
        ],
    },
    // no mapping to WKT1_GDAL
    MethodMapping {
        epsg_name: "Lambert Conic Conformal (2SP Michigan)",
        epsg_code: EPSG_CODE_METHOD_LAMBERT_CONIC_CONFORMAL_2SP_MICHIGAN,
        wkt1_name: "",
        proj_name: "lcc",
        proj_modifiers: &[],
        params: &[
            PARAM_LATITUDE_FALSE_ORIGIN,
            PARAM_LONGITUDE_FALSE_ORIGIN,
            PARAM_LATITUDE_1ST_STD_PARALLEL,
            PARAM_LATITUDE_2ND_STD_PARALLEL,
            PARAM_FALSE_EASTING_ORIGIN,
            PARAM_FALSE_NORTHING_ORIGIN,
            ParamMapping {
                epsg_name: "Ellipsoid scaling factor",
                epsg_code: EPSG_CODE_PARAMETER_ELLIPSOID_SCALE_FACTOR,
                wkt1_name: "",
                unit_kind: UnitKind::Scale,
                proj_keywords: &["k_0"],
            },
        ],
    },
    // shares the generic LCC path even though the EPSG guidance formula
    // differs; kept under its own method name
    MethodMapping {
        epsg_name: "Lambert Conic Conformal (2SP Belgium)",
        epsg_code: EPSG_CODE_METHOD_LAMBERT_CONIC_CONFORMAL_2SP_BELGIUM,
        wkt1_name: "Lambert_Conformal_Conic_2SP_Belgium",
        proj_name: "lcc",
        proj_modifiers: &[],
        params: &[
            PARAM_LATITUDE_FALSE_ORIGIN,
            PARAM_LONGITUDE_FALSE_ORIGIN,
            PARAM_LATITUDE_1ST_STD_PARALLEL,
            PARAM_LATITUDE_2ND_STD_PARALLEL,
            PARAM_FALSE_EASTING_ORIGIN,
            PARAM_FALSE_NORTHING_ORIGIN,
        ],
    },
    MethodMapping {
        epsg_name: "Modified Azimuthal Equidistant",
        epsg_code: EPSG_CODE_METHOD_MODIFIED_AZIMUTHAL_EQUIDISTANT,
        wkt1_name: "Azimuthal_Equidistant",
        proj_name: "aeqd",
        proj_modifiers: &[],
        params: &[
            PARAM_LATITUDE_OF_CENTER,
            PARAM_LONGITUDE_OF_CENTER,
            PARAM_FALSE_EASTING,
            PARAM_FALSE_NORTHING,
        ],
    },
    // no mapping to GDAL WKT1
    MethodMapping {
        epsg_name: "Guam Projection",
        epsg_code: EPSG_CODE_METHOD_GUAM_PROJECTION,
        wkt1_name: "",
        proj_name: "aeqd",
        proj_modifiers: &["guam"],
        params: &[
            PARAM_LATITUDE_NAT_ORIGIN,
            PARAM_LONGITUDE_NAT_ORIGIN,
            PARAM_FALSE_EASTING,
            PARAM_FALSE_NORTHING,
        ],
    },
    MethodMapping {
        epsg_name: "Bonne",
        epsg_code: EPSG_CODE_METHOD_BONNE,
        wkt1_name: "Bonne",
        proj_name: "bonne",
        proj_modifiers: &[],
        params: &[
            ParamMapping {
                epsg_name: EPSG_NAME_PARAMETER_LATITUDE_OF_NATURAL_ORIGIN,
                epsg_code: EPSG_CODE_PARAMETER_LATITUDE_OF_NATURAL_ORIGIN,
                wkt1_name: WKT1_STANDARD_PARALLEL_1,
                unit_kind: UnitKind::Angular,
                proj_keywords: &["lat_1"],
            },
            PARAM_LONGITUDE_NAT_ORIGIN,
            PARAM_FALSE_EASTING,
            PARAM_FALSE_NORTHING,
        ],
    },
    MethodMapping {
        epsg_name: "Lambert Cylindrical Equal Area (Spherical)",
        epsg_code: EPSG_CODE_METHOD_LAMBERT_CYLINDRICAL_EQUAL_AREA_SPHERICAL,
        wkt1_name: "Cylindrical_Equal_Area",
        proj_name: "cea",
        proj_modifiers: &[],
        params: &[
            PARAM_LATITUDE_TS,
            PARAM_LONGITUDE_NAT_ORIGIN,
            PARAM_FALSE_EASTING,
            PARAM_FALSE_NORTHING,
        ],
    },
    MethodMapping {
        epsg_name: "Lambert Cylindrical Equal Area",
        epsg_code: EPSG_CODE_METHOD_LAMBERT_CYLINDRICAL_EQUAL_AREA,
        wkt1_name: "Cylindrical_Equal_Area",
        proj_name: "cea",
        proj_modifiers: &[],
        params: &[
            PARAM_LATITUDE_TS,
            PARAM_LONGITUDE_NAT_ORIGIN,
            PARAM_FALSE_EASTING,
            PARAM_FALSE_NORTHING,
        ],
    },
    MethodMapping {
        epsg_name: "Cassini-Soldner",
        epsg_code: EPSG_CODE_METHOD_CASSINI_SOLDNER,
        wkt1_name: "Cassini_Soldner",
        proj_name: "cass",
        proj_modifiers: &[],
        params: &[
            PARAM_LATITUDE_NAT_ORIGIN,
            PARAM_LONGITUDE_NAT_ORIGIN,
            PARAM_FALSE_EASTING,
            PARAM_FALSE_NORTHING,
        ],
    },
    MethodMapping {
        epsg_name: "Equidistant Conic",
        epsg_code: 0,
        wkt1_name: "Equidistant_Conic",
        proj_name: "eqdc",
        proj_modifiers: &[],
        params: &[
            PARAM_LATITUDE_OF_CENTER,
            PARAM_LONGITUDE_OF_CENTER,
            PARAM_LATITUDE_1ST_STD_PARALLEL,
            PARAM_LATITUDE_2ND_STD_PARALLEL,
            PARAM_FALSE_EASTING,
            PARAM_FALSE_NORTHING,
        ],
    },
    MethodMapping {
        epsg_name: "Eckert I",
        epsg_code: 0,
        wkt1_name: "Eckert_I",
        proj_name: "eck1",
        proj_modifiers: &[],
        params: &[PARAM_LONGITUDE_NAT_ORIGIN, PARAM_FALSE_EASTING, PARAM_FALSE_NORTHING],
    },
    MethodMapping {
        epsg_name: "Eckert II",
        epsg_code: 0,
        wkt1_name: "Eckert_II",
        proj_name: "eck2",
        proj_modifiers: &[],
        params: &[PARAM_LONGITUDE_NAT_ORIGIN, PARAM_FALSE_EASTING, PARAM_FALSE_NORTHING],
    },
    MethodMapping {
        epsg_name: "Eckert III",
        epsg_code: 0,
        wkt1_name: "Eckert_III",
        proj_name: "eck3",
        proj_modifiers: &[],
        params: &[PARAM_LONGITUDE_NAT_ORIGIN, PARAM_FALSE_EASTING, PARAM_FALSE_NORTHING],
    },
    MethodMapping {
        epsg_name: "Eckert IV",
        epsg_code: 0,
        wkt1_name: "Eckert_IV",
        proj_name: "eck4",
        proj_modifiers: &[],
        params: &[PARAM_LONGITUDE_NAT_ORIGIN, PARAM_FALSE_EASTING, PARAM_FALSE_NORTHING],
    },
    MethodMapping {
        epsg_name: "Eckert V",
        epsg_code: 0,
        wkt1_name: "Eckert_V",
        proj_name: "eck5",
        proj_modifiers: &[],
        params: &[PARAM_LONGITUDE_NAT_ORIGIN, PARAM_FALSE_EASTING, PARAM_FALSE_NORTHING],
    },
    MethodMapping {
        epsg_name: "Eckert VI",
        epsg_code: 0,
        wkt1_name: "Eckert_VI",
        proj_name: "eck6",
        proj_modifiers: &[],
        params: &[PARAM_LONGITUDE_NAT_ORIGIN, PARAM_FALSE_EASTING, PARAM_FALSE_NORTHING],
    },
    MethodMapping {
        epsg_name: "Equidistant Cylindrical",
        epsg_code: EPSG_CODE_METHOD_EQUIDISTANT_CYLINDRICAL,
        wkt1_name: "Equirectangular",
        proj_name: "eqc",
        proj_modifiers: &[],
        params: &[
            PARAM_LATITUDE_TS,
            PARAM_LONGITUDE_NAT_ORIGIN,
            PARAM_FALSE_EASTING,
            PARAM_FALSE_NORTHING,
        ],
    },
    MethodMapping {
        epsg_name: "Equidistant Cylindrical (Spherical)",
        epsg_code: EPSG_CODE_METHOD_EQUIDISTANT_CYLINDRICAL_SPHERICAL,
        wkt1_name: "Equirectangular",
        proj_name: "eqc",
        proj_modifiers: &[],
        params: &[
            PARAM_LATITUDE_TS,
            PARAM_LONGITUDE_NAT_ORIGIN,
            PARAM_FALSE_EASTING,
            PARAM_FALSE_NORTHING,
        ],
    },
    MethodMapping {
        epsg_name: "Gall",
        epsg_code: 0,
        wkt1_name: "Gall_Stereographic",
        proj_name: "gall",
        proj_modifiers: &[],
        params: &[PARAM_LONGITUDE_NAT_ORIGIN, PARAM_FALSE_EASTING, PARAM_FALSE_NORTHING],
    },
    MethodMapping {
        epsg_name: "Goode Homolosine",
        epsg_code: 0,
        wkt1_name: "Goode_Homolosine",
        proj_name: "goode",
        proj_modifiers: &[],
        params: &[PARAM_LONGITUDE_NAT_ORIGIN, PARAM_FALSE_EASTING, PARAM_FALSE_NORTHING],
    },
    MethodMapping {
        epsg_name: "Interrupted Goode Homolosine",
        epsg_code: 0,
        wkt1_name: "Interrupted_Goode_Homolosine",
        proj_name: "igh",
        proj_modifiers: &[],
        params: &[PARAM_LONGITUDE_NAT_ORIGIN, PARAM_FALSE_EASTING, PARAM_FALSE_NORTHING],
    },
    // no WKT1 representation for sweep=x
    MethodMapping {
        epsg_name: "Geostationary Satellite (Sweep X)",
        epsg_code: 0,
        wkt1_name: "",
        proj_name: "geos",
        proj_modifiers: &["sweep=x"],
        params: &[
            PARAM_LONGITUDE_NAT_ORIGIN,
            ParamMapping {
                epsg_name: "Satellite Height",
                epsg_code: 0,
                wkt1_name: "satellite_height",
                unit_kind: UnitKind::Linear,
                proj_keywords: &["h"],
            },
            PARAM_FALSE_EASTING,
            PARAM_FALSE_NORTHING,
        ],
    },
    MethodMapping {
        epsg_name: "Geostationary Satellite (Sweep Y)",
        epsg_code: 0,
        wkt1_name: "Geostationary_Satellite",
        proj_name: "geos",
        proj_modifiers: &[],
        params: &[
            PARAM_LONGITUDE_NAT_ORIGIN,
            ParamMapping {
                epsg_name: "Satellite Height",
                epsg_code: 0,
                wkt1_name: "satellite_height",
                unit_kind: UnitKind::Linear,
                proj_keywords: &["h"],
            },
            PARAM_FALSE_EASTING,
            PARAM_FALSE_NORTHING,
        ],
    },
    MethodMapping {
        epsg_name: "Gauss Schreiber Transverse Mercator",
        epsg_code: 0,
        wkt1_name: "Gauss_Schreiber_Transverse_Mercator",
        proj_name: "gstmerc",
        proj_modifiers: &[],
        params: &[
            PARAM_LATITUDE_NAT_ORIGIN,
            PARAM_LONGITUDE_NAT_ORIGIN,
            PARAM_SCALE_FACTOR,
            PARAM_FALSE_EASTING,
            PARAM_FALSE_NORTHING,
        ],
    },
    MethodMapping {
        epsg_name: "Gnomonic",
        epsg_code: 0,
        wkt1_name: "Gnomonic",
        proj_name: "gnom",
        proj_modifiers: &[],
        params: &[
            PARAM_LATITUDE_NAT_ORIGIN,
            PARAM_LONGITUDE_NAT_ORIGIN,
            PARAM_FALSE_EASTING,
            PARAM_FALSE_NORTHING,
        ],
    },
    MethodMapping {
        epsg_name: "Hotine Oblique Mercator (variant A)",
        epsg_code: EPSG_CODE_METHOD_HOTINE_OBLIQUE_MERCATOR_VARIANT_A,
        wkt1_name: "Hotine_Oblique_Mercator",
        proj_name: "omerc",
        proj_modifiers: &["no_uoff"],
        params: &[
            ParamMapping {
                epsg_name: EPSG_NAME_PARAMETER_LATITUDE_PROJECTION_CENTRE,
                epsg_code: EPSG_CODE_PARAMETER_LATITUDE_PROJECTION_CENTRE,
                wkt1_name: WKT1_LATITUDE_OF_ORIGIN,
                unit_kind: UnitKind::Angular,
                proj_keywords: &["lat_0"],
            },
            ParamMapping {
                epsg_name: EPSG_NAME_PARAMETER_LONGITUDE_PROJECTION_CENTRE,
                epsg_code: EPSG_CODE_PARAMETER_LONGITUDE_PROJECTION_CENTRE,
                wkt1_name: WKT1_CENTRAL_MERIDIAN,
                unit_kind: UnitKind::Angular,
                proj_keywords: &["lonc"],
            },
            ParamMapping {
                epsg_name: EPSG_NAME_PARAMETER_AZIMUTH_INITIAL_LINE,
                epsg_code: EPSG_CODE_PARAMETER_AZIMUTH_INITIAL_LINE,
                wkt1_name: "azimuth",
                unit_kind: UnitKind::Angular,
                proj_keywords: &["alpha"],
            },
            ParamMapping {
                epsg_name: EPSG_NAME_PARAMETER_ANGLE_RECTIFIED_TO_SKEW_GRID,
                epsg_code: EPSG_CODE_PARAMETER_ANGLE_RECTIFIED_TO_SKEW_GRID,
                wkt1_name: "rectified_grid_angle",
                unit_kind: UnitKind::Angular,
                proj_keywords: &["gamma"],
            },
            ParamMapping {
                epsg_name: EPSG_NAME_PARAMETER_SCALE_FACTOR_INITIAL_LINE,
                epsg_code: EPSG_CODE_PARAMETER_SCALE_FACTOR_INITIAL_LINE,
                wkt1_name: WKT1_SCALE_FACTOR,
                unit_kind: UnitKind::Scale,
                proj_keywords: &["k"],
            },
            PARAM_FALSE_EASTING,
            PARAM_FALSE_NORTHING,
        ],
    },
    MethodMapping {
        epsg_name: "Hotine Oblique Mercator (variant B)",
        epsg_code: EPSG_CODE_METHOD_HOTINE_OBLIQUE_MERCATOR_VARIANT_B,
        wkt1_name: "Hotine_Oblique_Mercator_Azimuth_Center",
        proj_name: "omerc",
        proj_modifiers: &[],
        params: &HOTINE_CENTRE_PARAMETERS,
    },
    MethodMapping {
        epsg_name: "Hotine Oblique Mercator Two Point Natural Origin",
        epsg_code: 0,
        wkt1_name: "Hotine_Oblique_Mercator_Two_Point_Natural_Origin",
        proj_name: "omerc",
        proj_modifiers: &[],
        params: &[
            ParamMapping {
                epsg_name: EPSG_NAME_PARAMETER_LATITUDE_PROJECTION_CENTRE,
                epsg_code: EPSG_CODE_PARAMETER_LATITUDE_PROJECTION_CENTRE,
                wkt1_name: WKT1_LATITUDE_OF_ORIGIN,
                unit_kind: UnitKind::Angular,
                proj_keywords: &["lat_0"],
            },
            ParamMapping {
                epsg_name: "Latitude of point 1",
                epsg_code: 0,
                wkt1_name: "latitude_of_point_1",
                unit_kind: UnitKind::Angular,
                proj_keywords: &["lat_1"],
            },
            ParamMapping {
                epsg_name: "Longitude of point 1",
                epsg_code: 0,
                wkt1_name: "longitude_of_point_1",
                unit_kind: UnitKind::Angular,
                proj_keywords: &["lon_1"],
            },
            ParamMapping {
                epsg_name: "Latitude of point 2",
                epsg_code: 0,
                wkt1_name: "latitude_of_point_2",
                unit_kind: UnitKind::Angular,
                proj_keywords: &["lat_2"],
            },
            ParamMapping {
                epsg_name: "Longitude of point 2",
                epsg_code: 0,
                wkt1_name: "longitude_of_point_2",
                unit_kind: UnitKind::Angular,
                proj_keywords: &["lon_2"],
            },
            ParamMapping {
                epsg_name: EPSG_NAME_PARAMETER_SCALE_FACTOR_INITIAL_LINE,
                epsg_code: EPSG_CODE_PARAMETER_SCALE_FACTOR_INITIAL_LINE,
                wkt1_name: WKT1_SCALE_FACTOR,
                unit_kind: UnitKind::Scale,
                proj_keywords: &["k"],
            },
            ParamMapping {
                epsg_name: EPSG_NAME_PARAMETER_EASTING_PROJECTION_CENTRE,
                epsg_code: EPSG_CODE_PARAMETER_EASTING_PROJECTION_CENTRE,
                wkt1_name: WKT1_FALSE_EASTING,
                unit_kind: UnitKind::Linear,
                proj_keywords: &["x_0"],
            },
            ParamMapping {
                epsg_name: EPSG_NAME_PARAMETER_NORTHING_PROJECTION_CENTRE,
                epsg_code: EPSG_CODE_PARAMETER_NORTHING_PROJECTION_CENTRE,
                wkt1_name: WKT1_FALSE_NORTHING,
                unit_kind: UnitKind::Linear,
                proj_keywords: &["y_0"],
            },
        ],
    },
    MethodMapping {
        epsg_name: "International Map of the World Polyconic",
        epsg_code: 0,
        wkt1_name: "International_Map_of_the_World_Polyconic",
        proj_name: "imw_p",
        proj_modifiers: &[],
        params: &[
            PARAM_LONGITUDE_NAT_ORIGIN,
            PARAM_LATITUDE_1ST_STD_PARALLEL,
            PARAM_LATITUDE_2ND_STD_PARALLEL,
            PARAM_FALSE_EASTING,
            PARAM_FALSE_NORTHING,
        ],
    },
    MethodMapping {
        epsg_name: "Krovak (North Orientated)",
        epsg_code: EPSG_CODE_METHOD_KROVAK_NORTH_ORIENTED,
        wkt1_name: "Krovak",
        proj_name: "krovak",
        proj_modifiers: &[],
        params: &KROVAK_PARAMETERS,
    },
    MethodMapping {
        epsg_name: "Krovak",
        epsg_code: EPSG_CODE_METHOD_KROVAK,
        wkt1_name: "",
        proj_name: "krovak",
        proj_modifiers: &["axis=swu"],
        params: &KROVAK_PARAMETERS,
    },
    MethodMapping {
        epsg_name: "Lambert Azimuthal Equal Area",
        epsg_code: EPSG_CODE_METHOD_LAMBERT_AZIMUTHAL_EQUAL_AREA,
        wkt1_name: "Lambert_Azimuthal_Equal_Area",
        proj_name: "laea",
        proj_modifiers: &[],
        params: &[
            PARAM_LATITUDE_OF_CENTER,
            PARAM_LONGITUDE_OF_CENTER,
            PARAM_FALSE_EASTING,
            PARAM_FALSE_NORTHING,
        ],
    },
    MethodMapping {
        epsg_name: "Miller Cylindrical",
        epsg_code: 0,
        wkt1_name: "Miller_Cylindrical",
        proj_name: "mill",
        proj_modifiers: &["R_A"],
        params: &[
            PARAM_LATITUDE_OF_CENTER,
            PARAM_LONGITUDE_OF_CENTER,
            PARAM_FALSE_EASTING,
            PARAM_FALSE_NORTHING,
        ],
    },
    MethodMapping {
        epsg_name: "Mercator (variant A)",
        epsg_code: EPSG_CODE_METHOD_MERCATOR_VARIANT_A,
        wkt1_name: "Mercator_1SP",
        proj_name: "merc",
        proj_modifiers: &[],
        params: &[
            // always zero, not exported in WKT1 or PROJ strings
            ParamMapping {
                epsg_name: EPSG_NAME_PARAMETER_LATITUDE_OF_NATURAL_ORIGIN,
                epsg_code: EPSG_CODE_PARAMETER_LATITUDE_OF_NATURAL_ORIGIN,
                wkt1_name: "",
                unit_kind: UnitKind::Angular,
                proj_keywords: &[],
            },
            PARAM_LONGITUDE_NAT_ORIGIN,
            PARAM_SCALE_FACTOR_K,
            PARAM_FALSE_EASTING,
            PARAM_FALSE_NORTHING,
        ],
    },
    MethodMapping {
        epsg_name: "Mercator (variant B)",
        epsg_code: EPSG_CODE_METHOD_MERCATOR_VARIANT_B,
        wkt1_name: "Mercator_2SP",
        proj_name: "merc",
        proj_modifiers: &[],
        params: &[
            PARAM_LATITUDE_TS,
            PARAM_LONGITUDE_NAT_ORIGIN,
            PARAM_FALSE_EASTING,
            PARAM_FALSE_NORTHING,
        ],
    },
    // particular case actually handled manually in the WKT1 emitter
    MethodMapping {
        epsg_name: "Popular Visualisation Pseudo Mercator",
        epsg_code: EPSG_CODE_METHOD_POPULAR_VISUALISATION_PSEUDO_MERCATOR,
        wkt1_name: "Popular_Visualisation_Pseudo_Mercator",
        proj_name: "webmerc",
        proj_modifiers: &[],
        params: &[
            PARAM_LATITUDE_NAT_ORIGIN,
            PARAM_LONGITUDE_NAT_ORIGIN,
            PARAM_FALSE_EASTING,
            PARAM_FALSE_NORTHING,
        ],
    },
    MethodMapping {
        epsg_name: "Mollweide",
        epsg_code: 0,
        wkt1_name: "Mollweide",
        proj_name: "moll",
        proj_modifiers: &[],
        params: &[PARAM_LONGITUDE_NAT_ORIGIN, PARAM_FALSE_EASTING, PARAM_FALSE_NORTHING],
    },
    MethodMapping {
        epsg_name: "New Zealand Map Grid",
        epsg_code: EPSG_CODE_METHOD_NZMG,
        wkt1_name: "New_Zealand_Map_Grid",
        proj_name: "nzmg",
        proj_modifiers: &[],
        params: &[
            PARAM_LATITUDE_NAT_ORIGIN,
            PARAM_LONGITUDE_NAT_ORIGIN,
            PARAM_FALSE_EASTING,
            PARAM_FALSE_NORTHING,
        ],
    },
    MethodMapping {
        epsg_name: "Oblique Stereographic",
        epsg_code: EPSG_CODE_METHOD_OBLIQUE_STEREOGRAPHIC,
        wkt1_name: "Oblique_Stereographic",
        proj_name: "sterea",
        proj_modifiers: &[],
        params: &[
            PARAM_LATITUDE_NAT_ORIGIN,
            PARAM_LONGITUDE_NAT_ORIGIN,
            PARAM_SCALE_FACTOR_K,
            PARAM_FALSE_EASTING,
            PARAM_FALSE_NORTHING,
        ],
    },
    MethodMapping {
        epsg_name: "Orthographic",
        epsg_code: EPSG_CODE_METHOD_ORTHOGRAPHIC,
        wkt1_name: "Orthographic",
        proj_name: "ortho",
        proj_modifiers: &[],
        params: &[
            PARAM_LATITUDE_NAT_ORIGIN,
            PARAM_LONGITUDE_NAT_ORIGIN,
            PARAM_FALSE_EASTING,
            PARAM_FALSE_NORTHING,
        ],
    },
    MethodMapping {
        epsg_name: "American Polyconic",
        epsg_code: EPSG_CODE_METHOD_AMERICAN_POLYCONIC,
        wkt1_name: "Polyconic",
        proj_name: "poly",
        proj_modifiers: &[],
        params: &[
            PARAM_LATITUDE_NAT_ORIGIN,
            PARAM_LONGITUDE_NAT_ORIGIN,
            PARAM_FALSE_EASTING,
            PARAM_FALSE_NORTHING,
        ],
    },
    MethodMapping {
        epsg_name: "Polar Stereographic (variant A)",
        epsg_code: EPSG_CODE_METHOD_POLAR_STEREOGRAPHIC_VARIANT_A,
        wkt1_name: "Polar_Stereographic",
        proj_name: "stere",
        proj_modifiers: &[],
        params: &[
            PARAM_LATITUDE_NAT_ORIGIN,
            PARAM_LONGITUDE_NAT_ORIGIN,
            PARAM_SCALE_FACTOR_K,
            PARAM_FALSE_EASTING,
            PARAM_FALSE_NORTHING,
        ],
    },
    MethodMapping {
        epsg_name: "Polar Stereographic (variant B)",
        epsg_code: EPSG_CODE_METHOD_POLAR_STEREOGRAPHIC_VARIANT_B,
        wkt1_name: "Polar_Stereographic",
        proj_name: "stere",
        proj_modifiers: &[],
        params: &[
            ParamMapping {
                epsg_name: EPSG_NAME_PARAMETER_LATITUDE_STD_PARALLEL,
                epsg_code: EPSG_CODE_PARAMETER_LATITUDE_STD_PARALLEL,
                wkt1_name: WKT1_LATITUDE_OF_ORIGIN,
                unit_kind: UnitKind::Angular,
                proj_keywords: &["lat_ts"],
            },
            ParamMapping {
                epsg_name: EPSG_NAME_PARAMETER_LONGITUDE_OF_ORIGIN,
                epsg_code: EPSG_CODE_PARAMETER_LONGITUDE_OF_ORIGIN,
                wkt1_name: WKT1_CENTRAL_MERIDIAN,
                unit_kind: UnitKind::Angular,
                proj_keywords: &["lon_0"],
            },
            PARAM_FALSE_EASTING,
            PARAM_FALSE_NORTHING,
        ],
    },
    MethodMapping {
        epsg_name: "Robinson",
        epsg_code: 0,
        wkt1_name: "Robinson",
        proj_name: "robin",
        proj_modifiers: &[],
        params: &[
            ParamMapping {
                epsg_name: EPSG_NAME_PARAMETER_LONGITUDE_OF_NATURAL_ORIGIN,
                epsg_code: EPSG_CODE_PARAMETER_LONGITUDE_OF_NATURAL_ORIGIN,
                wkt1_name: "longitude_of_center",
                unit_kind: UnitKind::Angular,
                proj_keywords: &["lon_0"],
            },
            PARAM_FALSE_EASTING,
            PARAM_FALSE_NORTHING,
        ],
    },
    MethodMapping {
        epsg_name: "Sinusoidal",
        epsg_code: 0,
        wkt1_name: "Sinusoidal",
        proj_name: "sinu",
        proj_modifiers: &[],
        params: &[
            ParamMapping {
                epsg_name: EPSG_NAME_PARAMETER_LONGITUDE_OF_NATURAL_ORIGIN,
                epsg_code: EPSG_CODE_PARAMETER_LONGITUDE_OF_NATURAL_ORIGIN,
                wkt1_name: "longitude_of_center",
                unit_kind: UnitKind::Angular,
                proj_keywords: &["lon_0"],
            },
            PARAM_FALSE_EASTING,
            PARAM_FALSE_NORTHING,
        ],
    },
    MethodMapping {
        epsg_name: "Stereographic",
        epsg_code: 0,
        wkt1_name: "Stereographic",
        proj_name: "stere",
        proj_modifiers: &[],
        params: &[
            PARAM_LATITUDE_NAT_ORIGIN,
            PARAM_LONGITUDE_NAT_ORIGIN,
            PARAM_SCALE_FACTOR_K,
            PARAM_FALSE_EASTING,
            PARAM_FALSE_NORTHING,
        ],
    },
    MethodMapping {
        epsg_name: "VanDerGrinten",
        epsg_code: 0,
        wkt1_name: "VanDerGrinten",
        proj_name: "vandg",
        proj_modifiers: &["R_A"],
        params: &[PARAM_LONGITUDE_NAT_ORIGIN, PARAM_FALSE_EASTING, PARAM_FALSE_NORTHING],
    },
    MethodMapping {
        epsg_name: "Wagner I",
        epsg_code: 0,
        wkt1_name: "Wagner_I",
        proj_name: "wag1",
        proj_modifiers: &[],
        params: &[PARAM_LONGITUDE_NAT_ORIGIN, PARAM_FALSE_EASTING, PARAM_FALSE_NORTHING],
    },
    MethodMapping {
        epsg_name: "Wagner II",
        epsg_code: 0,
        wkt1_name: "Wagner_II",
        proj_name: "wag2",
        proj_modifiers: &[],
        params: &[PARAM_LONGITUDE_NAT_ORIGIN, PARAM_FALSE_EASTING, PARAM_FALSE_NORTHING],
    },
    MethodMapping {
        epsg_name: "Wagner III",
        epsg_code: 0,
        wkt1_name: "Wagner_III",
        proj_name: "wag3",
        proj_modifiers: &[],
        params: &[
            ParamMapping {
                epsg_name: "Latitude of true scale",
                epsg_code: 0,
                wkt1_name: WKT1_LATITUDE_OF_ORIGIN,
                unit_kind: UnitKind::Angular,
                proj_keywords: &["lat_ts"],
            },
            PARAM_LONGITUDE_NAT_ORIGIN,
            PARAM_FALSE_EASTING,
            PARAM_FALSE_NORTHING,
        ],
    },
    MethodMapping {
        epsg_name: "Wagner IV",
        epsg_code: 0,
        wkt1_name: "Wagner_IV",
        proj_name: "wag4",
        proj_modifiers: &[],
        params: &[PARAM_LONGITUDE_NAT_ORIGIN, PARAM_FALSE_EASTING, PARAM_FALSE_NORTHING],
    },
    MethodMapping {
        epsg_name: "Wagner V",
        epsg_code: 0,
        wkt1_name: "Wagner_V",
        proj_name: "wag5",
        proj_modifiers: &[],
        params: &[PARAM_LONGITUDE_NAT_ORIGIN, PARAM_FALSE_EASTING, PARAM_FALSE_NORTHING],
    },
    MethodMapping {
        epsg_name: "Wagner VI",
        epsg_code: 0,
        wkt1_name: "Wagner_VI",
        proj_name: "wag6",
        proj_modifiers: &[],
        params: &[PARAM_LONGITUDE_NAT_ORIGIN, PARAM_FALSE_EASTING, PARAM_FALSE_NORTHING],
    },
    MethodMapping {
        epsg_name: "Wagner VII",
        epsg_code: 0,
        wkt1_name: "Wagner_VII",
        proj_name: "wag7",
        proj_modifiers: &[],
        params: &[PARAM_LONGITUDE_NAT_ORIGIN, PARAM_FALSE_EASTING, PARAM_FALSE_NORTHING],
    },
    MethodMapping {
        epsg_name: "Quadrilateralized Spherical Cube",
        epsg_code: 0,
        wkt1_name: "Quadrilateralized_Spherical_Cube",
        proj_name: "qsc",
        proj_modifiers: &[],
        params: &[
            PARAM_LATITUDE_NAT_ORIGIN,
            PARAM_LONGITUDE_NAT_ORIGIN,
            PARAM_FALSE_EASTING,
            PARAM_FALSE_NORTHING,
        ],
    },
    MethodMapping {
        epsg_name: "Spherical Cross-Track Height",
        epsg_code: 0,
        wkt1_name: "Spherical_Cross_Track_Height",
        proj_name: "sch",
        proj_modifiers: &[],
        params: &[
            ParamMapping {
                epsg_name: "Peg point latitude",
                epsg_code: 0,
                wkt1_name: "peg_point_latitude",
                unit_kind: UnitKind::Angular,
                proj_keywords: &["plat_0"],
            },
            ParamMapping {
                epsg_name: "Peg point longitude",
                epsg_code: 0,
                wkt1_name: "peg_point_longitude",
                unit_kind: UnitKind::Angular,
                proj_keywords: &["plon_0"],
            },
            ParamMapping {
                epsg_name: "Peg point heading",
                epsg_code: 0,
                wkt1_name: "peg_point_heading",
                unit_kind: UnitKind::Angular,
                proj_keywords: &["phdg_0"],
            },
            ParamMapping {
                epsg_name: "Peg point height",
                epsg_code: 0,
                wkt1_name: "peg_point_height",
                unit_kind: UnitKind::Linear,
                proj_keywords: &["h_0"],
            },
        ],
    },
    // WKT <--> PROJ mapping only, no dedicated constructor
    MethodMapping {
        epsg_name: "Aitoff",
        epsg_code: 0,
        wkt1_name: "Aitoff",
        proj_name: "aitoff",
        proj_modifiers: &[],
        params: &[
            PARAM_LATITUDE_NAT_ORIGIN,
            PARAM_LONGITUDE_NAT_ORIGIN,
            PARAM_FALSE_EASTING,
            PARAM_FALSE_NORTHING,
        ],
    },
    MethodMapping {
        epsg_name: "Winkel I",
        epsg_code: 0,
        wkt1_name: "Winkel_I",
        proj_name: "wink1",
        proj_modifiers: &[],
        params: &[
            PARAM_LATITUDE_NAT_ORIGIN,
            PARAM_LONGITUDE_NAT_ORIGIN,
            PARAM_LATITUDE_TS,
            PARAM_FALSE_EASTING,
            PARAM_FALSE_NORTHING,
        ],
    },
    MethodMapping {
        epsg_name: "Winkel II",
        epsg_code: 0,
        wkt1_name: "Winkel_II",
        proj_name: "wink2",
        proj_modifiers: &[],
        params: &[
            PARAM_LATITUDE_NAT_ORIGIN,
            PARAM_LONGITUDE_NAT_ORIGIN,
            PARAM_LATITUDE_1ST_STD_PARALLEL,
            PARAM_FALSE_EASTING,
            PARAM_FALSE_NORTHING,
        ],
    },
    MethodMapping {
        epsg_name: "Winkel Tripel",
        epsg_code: 0,
        wkt1_name: "Winkel_Tripel",
        proj_name: "wintri",
        proj_modifiers: &[],
        params: &[
            PARAM_LATITUDE_NAT_ORIGIN,
            PARAM_LONGITUDE_NAT_ORIGIN,
            PARAM_LATITUDE_1ST_STD_PARALLEL,
            PARAM_FALSE_EASTING,
            PARAM_FALSE_NORTHING,
        ],
    },
    MethodMapping {
        epsg_name: "Craster Parabolic",
        epsg_code: 0,
        wkt1_name: "Craster_Parabolic",
        proj_name: "crast",
        proj_modifiers: &[],
        params: &[
            PARAM_LATITUDE_NAT_ORIGIN,
            PARAM_LONGITUDE_NAT_ORIGIN,
            PARAM_FALSE_EASTING,
            PARAM_FALSE_NORTHING,
        ],
    },
    MethodMapping {
        epsg_name: "Loximuthal",
        epsg_code: 0,
        wkt1_name: "Loximuthal",
        proj_name: "loxim",
        proj_modifiers: &[],
        params: &[
            ParamMapping {
                epsg_name: EPSG_NAME_PARAMETER_LATITUDE_OF_NATURAL_ORIGIN,
                epsg_code: EPSG_CODE_PARAMETER_LATITUDE_OF_NATURAL_ORIGIN,
                wkt1_name: WKT1_LATITUDE_OF_ORIGIN,
                unit_kind: UnitKind::Angular,
                proj_keywords: &["lat_1"],
            },
            PARAM_LONGITUDE_NAT_ORIGIN,
            PARAM_FALSE_EASTING,
            PARAM_FALSE_NORTHING,
        ],
    },
    MethodMapping {
        epsg_name: "Quartic Authalic",
        epsg_code: 0,
        wkt1_name: "Quartic_Authalic",
        proj_name: "qua_aut",
        proj_modifiers: &[],
        params: &[
            PARAM_LATITUDE_NAT_ORIGIN,
            PARAM_LONGITUDE_NAT_ORIGIN,
            PARAM_FALSE_EASTING,
            PARAM_FALSE_NORTHING,
        ],
    },
    MethodMapping {
        epsg_name: "Equal Earth",
        epsg_code: EPSG_CODE_METHOD_EQUAL_EARTH,
        wkt1_name: "",
        proj_name: "eqearth",
        proj_modifiers: &[],
        params: &[PARAM_LONGITUDE_NAT_ORIGIN, PARAM_FALSE_EASTING, PARAM_FALSE_NORTHING],
    },
];

/// Groups of parameter names that compare equal under the EQUIVALENT
/// criterion
pub static EQUIVALENT_PARAMETER_NAMES: &[&[&str]] = &[
    &["latitude_of_point_1", "Latitude_Of_1st_Point"],
    &["longitude_of_point_1", "Longitude_Of_1st_Point"],
    &["latitude_of_point_2", "Latitude_Of_2nd_Point"],
    &["longitude_of_point_2", "Longitude_Of_2nd_Point"],
    &[
        EPSG_NAME_PARAMETER_FALSE_EASTING,
        EPSG_NAME_PARAMETER_EASTING_FALSE_ORIGIN,
        EPSG_NAME_PARAMETER_EASTING_PROJECTION_CENTRE,
    ],
    &[
        EPSG_NAME_PARAMETER_FALSE_NORTHING,
        EPSG_NAME_PARAMETER_NORTHING_FALSE_ORIGIN,
        EPSG_NAME_PARAMETER_NORTHING_PROJECTION_CENTRE,
    ],
    &[
        EPSG_NAME_PARAMETER_LATITUDE_OF_NATURAL_ORIGIN,
        EPSG_NAME_PARAMETER_LATITUDE_FALSE_ORIGIN,
        EPSG_NAME_PARAMETER_LATITUDE_PROJECTION_CENTRE,
    ],
    &[
        EPSG_NAME_PARAMETER_LONGITUDE_OF_NATURAL_ORIGIN,
        EPSG_NAME_PARAMETER_LONGITUDE_FALSE_ORIGIN,
        EPSG_NAME_PARAMETER_LONGITUDE_PROJECTION_CENTRE,
        EPSG_NAME_PARAMETER_LONGITUDE_OF_ORIGIN,
    ],
];

lazy_static! {
    static ref BY_EPSG_NAME: HashMap<&'static str, &'static MethodMapping> = {
        let mut map = HashMap::new();
        for mapping in METHOD_MAPPINGS {
            map.entry(mapping.epsg_name).or_insert(mapping);
        }
        map
    };
    static ref BY_WKT1_NAME: HashMap<&'static str, &'static MethodMapping> = {
        let mut map = HashMap::new();
        for mapping in METHOD_MAPPINGS {
            if !mapping.wkt1_name.is_empty() {
                map.entry(mapping.wkt1_name).or_insert(mapping);
            }
        }
        map
    };
}

/// Lowercase with underscores, spaces, parentheses and hyphens removed, the
/// normalization used for forgiving method-name comparison
pub fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '_' | ' ' | '(' | ')' | '-' | '/'))
        .flat_map(|c| c.to_lowercase())
        .collect()
}

/// Find a method row by EPSG code
pub fn find_method_by_code(code: u16) -> Option<&'static MethodMapping> {
    METHOD_MAPPINGS
        .iter()
        .find(|m| m.epsg_code != 0 && m.epsg_code == code)
}

/// Find a method row by any of its names, EPSG first, then WKT1, then a
/// normalized comparison that also covers ESRI spellings
pub fn find_method_by_name(name: &str) -> Option<&'static MethodMapping> {
    if let Some(mapping) = BY_EPSG_NAME.get(name) {
        return Some(mapping);
    }
    if let Some(mapping) = BY_WKT1_NAME.get(name) {
        return Some(mapping);
    }
    let wanted = normalize_name(name);
    METHOD_MAPPINGS.iter().find(|m| {
        normalize_name(m.epsg_name) == wanted
            || (!m.wkt1_name.is_empty() && normalize_name(m.wkt1_name) == wanted)
    })
}

/// Find a method row for a PROJ step: keyword plus any modifier tokens
/// present on the step (`no_uoff`, `guam`, `sweep=x`, `axis=wsu`, ...)
///
/// Among rows sharing the keyword, an explicit modifier match wins;
/// otherwise the row whose parameter keywords cover the most step tokens
/// does, which is what tells `merc +lat_ts=` apart from `merc +k=`.
pub fn find_method_by_proj_name(
    proj_name: &str,
    step_tokens: &[(String, Option<String>)],
) -> Option<&'static MethodMapping> {
    let has_token = |wanted: &str| {
        step_tokens.iter().any(|(k, v)| match wanted.split_once('=') {
            Some((wk, wv)) => k == wk && v.as_deref() == Some(wv),
            None => k == wanted && v.is_none(),
        })
    };
    let mut best: Option<(usize, &'static MethodMapping)> = None;
    for mapping in METHOD_MAPPINGS {
        if mapping.proj_name != proj_name {
            continue;
        }
        if !mapping.proj_modifiers.iter().all(|m| has_token(m)) {
            continue;
        }
        if !mapping.proj_modifiers.is_empty() {
            return Some(mapping);
        }
        let covered = mapping
            .params
            .iter()
            .filter(|p| {
                p.proj_keywords
                    .iter()
                    .any(|k| step_tokens.iter().any(|(token, _)| token == k))
            })
            .count();
        if best.map(|(score, _)| covered > score).unwrap_or(true) {
            best = Some((covered, mapping));
        }
    }
    best.map(|(_, mapping)| mapping)
}

/// Resolve one parameter against a method row, matching by EPSG name, WKT1
/// name, normalized (ESRI) spelling or EPSG code
pub fn find_parameter<'a>(
    method: &'a MethodMapping,
    name: &str,
    code: Option<u16>,
) -> Option<&'a ParamMapping> {
    if let Some(code) = code {
        if let Some(param) = method
            .params
            .iter()
            .find(|p| p.epsg_code != 0 && p.epsg_code == code)
        {
            return Some(param);
        }
    }
    if let Some(param) = method
        .params
        .iter()
        .find(|p| p.epsg_name == name || (!p.wkt1_name.is_empty() && p.wkt1_name == name))
    {
        return Some(param);
    }
    let wanted = normalize_name(name);
    method.params.iter().find(|p| {
        normalize_name(p.epsg_name) == wanted
            || (!p.wkt1_name.is_empty() && normalize_name(p.wkt1_name) == wanted)
    })
}

/// True when the two names are the same parameter under the EQUIVALENT
/// criterion
pub fn are_equivalent_parameter_names(a: &str, b: &str) -> bool {
    if a == b || normalize_name(a) == normalize_name(b) {
        return true;
    }
    EQUIVALENT_PARAMETER_NAMES
        .iter()
        .any(|group| group.contains(&a) && group.contains(&b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_code_and_name() {
        let tm = find_method_by_code(EPSG_CODE_METHOD_TRANSVERSE_MERCATOR).unwrap();
        assert_eq!(tm.epsg_name, "Transverse Mercator");
        assert_eq!(tm.proj_name, "tmerc");

        assert!(find_method_by_name("Transverse_Mercator").is_some());
        assert!(find_method_by_name("Transverse Mercator").is_some());
        // normalized comparison catches mixed spellings
        assert!(find_method_by_name("transverse mercator").is_some());
    }

    #[test]
    fn test_wkt2_only_methods() {
        let robinson = find_method_by_name("Robinson").unwrap();
        assert_eq!(robinson.epsg_code, 0);
        assert_eq!(robinson.proj_name, "robin");

        let tunisia = find_method_by_name("Tunisia Mapping Grid").unwrap();
        assert_eq!(tunisia.proj_name, "");
    }

    #[test]
    fn test_proj_modifier_disambiguation() {
        let plain: Vec<(String, Option<String>)> = vec![];
        let aeqd = find_method_by_proj_name("aeqd", &plain).unwrap();
        assert_eq!(aeqd.epsg_name, "Modified Azimuthal Equidistant");

        let guam = vec![("guam".to_string(), None)];
        let method = find_method_by_proj_name("aeqd", &guam).unwrap();
        assert_eq!(method.epsg_name, "Guam Projection");

        let wsu = vec![("axis".to_string(), Some("wsu".to_string()))];
        let method = find_method_by_proj_name("tmerc", &wsu).unwrap();
        assert_eq!(
            method.epsg_code,
            EPSG_CODE_METHOD_TRANSVERSE_MERCATOR_SOUTH_ORIENTATED
        );

        let no_uoff = vec![("no_uoff".to_string(), None)];
        let method = find_method_by_proj_name("omerc", &no_uoff).unwrap();
        assert_eq!(method.epsg_code, EPSG_CODE_METHOD_HOTINE_OBLIQUE_MERCATOR_VARIANT_A);
    }

    #[test]
    fn test_parameter_resolution() {
        let tm = find_method_by_code(EPSG_CODE_METHOD_TRANSVERSE_MERCATOR).unwrap();
        let p = find_parameter(tm, "central_meridian", None).unwrap();
        assert_eq!(p.epsg_code, EPSG_CODE_PARAMETER_LONGITUDE_OF_NATURAL_ORIGIN);
        let p = find_parameter(tm, "Central_Meridian", None).unwrap();
        assert_eq!(p.epsg_code, EPSG_CODE_PARAMETER_LONGITUDE_OF_NATURAL_ORIGIN);
        let p = find_parameter(tm, "", Some(EPSG_CODE_PARAMETER_FALSE_EASTING)).unwrap();
        assert_eq!(p.epsg_name, EPSG_NAME_PARAMETER_FALSE_EASTING);
    }

    #[test]
    fn test_equivalent_parameter_names() {
        assert!(are_equivalent_parameter_names(
            "Latitude of natural origin",
            "Latitude of false origin"
        ));
        assert!(are_equivalent_parameter_names(
            "Longitude of natural origin",
            "Longitude of origin"
        ));
        assert!(!are_equivalent_parameter_names(
            "Latitude of natural origin",
            "Longitude of natural origin"
        ));
    }
}
