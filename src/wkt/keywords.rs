//! WKT keyword constants
//!
//! The canonical spellings of every node keyword the parser recognizes and
//! the emitter produces, WKT1 and WKT2 together.

pub const GEOGCS: &str = "GEOGCS";
pub const GEOGCRS: &str = "GEOGCRS";
pub const GEODCRS: &str = "GEODCRS";
pub const BASEGEOGCRS: &str = "BASEGEOGCRS";
pub const BASEGEODCRS: &str = "BASEGEODCRS";
pub const GEOCCS: &str = "GEOCCS";
pub const PROJCS: &str = "PROJCS";
pub const PROJCRS: &str = "PROJCRS";
pub const BASEPROJCRS: &str = "BASEPROJCRS";
pub const VERTCS: &str = "VERTCS";
pub const VERT_CS: &str = "VERT_CS";
pub const VERTCRS: &str = "VERTCRS";
pub const BASEVERTCRS: &str = "BASEVERTCRS";
pub const COMPD_CS: &str = "COMPD_CS";
pub const COMPOUNDCRS: &str = "COMPOUNDCRS";
pub const BOUNDCRS: &str = "BOUNDCRS";
pub const SOURCECRS: &str = "SOURCECRS";
pub const TARGETCRS: &str = "TARGETCRS";
pub const TIMECRS: &str = "TIMECRS";
pub const BASETIMECRS: &str = "BASETIMECRS";
pub const ENGCRS: &str = "ENGCRS";
pub const LOCAL_CS: &str = "LOCAL_CS";
pub const BASEENGCRS: &str = "BASEENGCRS";
pub const PARAMETRICCRS: &str = "PARAMETRICCRS";
pub const BASEPARAMCRS: &str = "BASEPARAMCRS";
pub const DERIVEDPROJCRS: &str = "DERIVEDPROJCRS";

pub const DATUM: &str = "DATUM";
pub const GEODETICDATUM: &str = "GEODETICDATUM";
pub const TRF: &str = "TRF";
pub const ENSEMBLE: &str = "ENSEMBLE";
pub const MEMBER: &str = "MEMBER";
pub const ENSEMBLEACCURACY: &str = "ENSEMBLEACCURACY";
pub const VDATUM: &str = "VDATUM";
pub const VERT_DATUM: &str = "VERT_DATUM";
pub const VRF: &str = "VRF";
pub const TDATUM: &str = "TDATUM";
pub const EDATUM: &str = "EDATUM";
pub const PDATUM: &str = "PDATUM";
pub const LOCAL_DATUM: &str = "LOCAL_DATUM";
pub const DYNAMIC: &str = "DYNAMIC";
pub const ELLIPSOID: &str = "ELLIPSOID";
pub const SPHEROID: &str = "SPHEROID";
pub const PRIMEM: &str = "PRIMEM";
pub const PRIMEMERIDIAN: &str = "PRIMEMERIDIAN";
pub const ANCHOR: &str = "ANCHOR";
pub const FRAMEEPOCH: &str = "FRAMEEPOCH";
pub const CALENDAR: &str = "CALENDAR";
pub const TIMEORIGIN: &str = "TIMEORIGIN";

pub const CS: &str = "CS";
pub const AXIS: &str = "AXIS";
pub const ORDER: &str = "ORDER";
pub const MERIDIAN: &str = "MERIDIAN";
pub const UNIT: &str = "UNIT";
pub const LENGTHUNIT: &str = "LENGTHUNIT";
pub const ANGLEUNIT: &str = "ANGLEUNIT";
pub const SCALEUNIT: &str = "SCALEUNIT";
pub const PARAMETRICUNIT: &str = "PARAMETRICUNIT";
pub const TIMEUNIT: &str = "TIMEUNIT";

pub const CONVERSION: &str = "CONVERSION";
pub const DERIVINGCONVERSION: &str = "DERIVINGCONVERSION";
pub const METHOD: &str = "METHOD";
pub const PROJECTION: &str = "PROJECTION";
pub const PARAMETER: &str = "PARAMETER";
pub const PARAMETERFILE: &str = "PARAMETERFILE";
pub const COORDINATEOPERATION: &str = "COORDINATEOPERATION";
pub const ABRIDGEDTRANSFORMATION: &str = "ABRIDGEDTRANSFORMATION";
pub const CONCATENATEDOPERATION: &str = "CONCATENATEDOPERATION";
pub const STEP: &str = "STEP";
pub const OPERATIONACCURACY: &str = "OPERATIONACCURACY";

pub const ID: &str = "ID";
pub const AUTHORITY: &str = "AUTHORITY";
pub const CITATION: &str = "CITATION";
pub const URI: &str = "URI";
pub const REMARK: &str = "REMARK";
pub const SCOPE: &str = "SCOPE";
pub const AREA: &str = "AREA";
pub const BBOX: &str = "BBOX";
pub const VERTICALEXTENT: &str = "VERTICALEXTENT";
pub const TIMEEXTENT: &str = "TIMEEXTENT";
pub const USAGE: &str = "USAGE";

pub const TOWGS84: &str = "TOWGS84";
pub const EXTENSION: &str = "EXTENSION";
pub const PROJ4_GRIDS: &str = "PROJ4_GRIDS";
