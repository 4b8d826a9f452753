//! PROJ-string serialization
//!
//! The `+key=value` language of the PROJ runtime, in both the modern
//! pipeline convention and the legacy flat form.

pub mod formatter;
pub mod parser;

pub use formatter::{crs_to_proj_string, ProjConvention, ProjStringFormatter};
pub use parser::ProjStringParser;
