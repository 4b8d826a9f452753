pub mod common;
pub mod errors;
pub mod context;
pub mod cs;
pub mod datum;
pub mod crs;
pub mod operation;
pub mod wkt;
pub mod projstring;
pub mod utils;
pub mod commands;
pub mod api;

pub use crate::api::CrsKit;

pub use crs::{Crs, Criterion};
pub use errors::{GeodeticError, GeodeticResult};
pub use projstring::{crs_to_proj_string, ProjConvention, ProjStringParser};
pub use wkt::{crs_to_wkt, WktFormatter, WktParser, WktVersion};
