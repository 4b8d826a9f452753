//! Datum model
//!
//! Ellipsoids, prime meridians, the reference-frame variants and datum
//! ensembles.

pub mod ellipsoid;
pub mod frames;
pub mod prime_meridian;

pub use ellipsoid::Ellipsoid;
pub use frames::{
    Datum, DatumEnsemble, EngineeringDatum, GeodeticReferenceFrame, ParametricDatum,
    TemporalDatum, VerticalReferenceFrame,
};
pub use prime_meridian::PrimeMeridian;
