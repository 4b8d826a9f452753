//! Pluggable authority database collaborator
//!
//! The EPSG database and grid catalog live outside the core; the object
//! model only needs this narrow lookup surface. Passing no context
//! disables database-dependent behavior: ESRI aliasing falls back to the
//! deterministic morphism and BoundCRS synthesis returns the input.

use crate::crs::Crs;
use crate::errors::GeodeticResult;
use crate::operation::CoordinateOperation;
use std::sync::Arc;

/// Object kinds used for alias lookups
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    GeodeticCrs,
    ProjectedCrs,
    VerticalCrs,
    Datum,
    Ellipsoid,
    PrimeMeridian,
}

/// Read-only authority lookups
pub trait AuthorityContext {
    /// Resolve an alias, e.g. (official name, kind, "ESRI") -> ESRI name
    fn resolve_alias(&self, name: &str, kind: ObjectKind, authority: &str) -> Option<String>;

    /// Reverse alias lookup, e.g. an ESRI name back to the official name
    fn resolve_official_name(&self, alias: &str, kind: ObjectKind, authority: &str)
        -> Option<String>;

    /// Instantiate a CRS from an authority code
    fn create_crs(&self, authority: &str, code: &str) -> GeodeticResult<Arc<Crs>>;

    /// Candidate operations between two CRSes, most relevant first
    fn create_operations(&self, source: &Arc<Crs>, target: &Arc<Crs>) -> Vec<CoordinateOperation>;
}
