//! Common value types shared by the whole object model
//!
//! Units of measure, measures with their Length/Angle/Scale refinements,
//! identifiers and the identified-object base that every model type embeds.

pub mod identified;
pub mod measure;
pub mod unit;

pub use identified::{
    Extent, GeographicBoundingBox, IdentifiedObject, Identifier, ObjectUsage, Properties,
    TemporalExtent, VerticalExtent,
};
pub use measure::{Angle, Length, Measure, Scale};
pub use unit::{Unit, UnitKind};
