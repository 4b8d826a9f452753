//! Identification and usage metadata shared by all model objects

use crate::common::unit::Unit;

/// An authority reference such as EPSG:4326
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub codespace: Option<String>,
    pub code: String,
    pub authority_citation: Option<String>,
    pub version: Option<String>,
}

impl Identifier {
    pub fn new(codespace: &str, code: impl ToString) -> Self {
        Identifier {
            codespace: Some(codespace.to_string()),
            code: code.to_string(),
            authority_citation: None,
            version: None,
        }
    }

    /// Shorthand for an EPSG identifier
    pub fn epsg(code: u32) -> Self {
        Identifier::new("EPSG", code)
    }

    /// True when this is the given EPSG code
    pub fn is_epsg(&self, code: u32) -> bool {
        self.codespace.as_deref() == Some("EPSG") && self.code == code.to_string()
    }
}

/// Name, identifiers and bookkeeping common to every model object
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IdentifiedObject {
    pub name: String,
    pub identifiers: Vec<Identifier>,
    pub aliases: Vec<String>,
    pub remarks: String,
    pub deprecated: bool,
}

impl IdentifiedObject {
    pub fn named(name: &str) -> Self {
        IdentifiedObject {
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// First identifier matching the EPSG codespace, parsed as a number
    pub fn epsg_code(&self) -> Option<u32> {
        self.identifiers
            .iter()
            .find(|id| id.codespace.as_deref() == Some("EPSG"))
            .and_then(|id| id.code.parse().ok())
    }
}

/// A latitude/longitude rectangle in degrees
#[derive(Debug, Clone, PartialEq)]
pub struct GeographicBoundingBox {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

/// A height range with its unit
#[derive(Debug, Clone, PartialEq)]
pub struct VerticalExtent {
    pub minimum: f64,
    pub maximum: f64,
    pub unit: Unit,
}

/// A time range, ISO-8601 strings as found in WKT
#[derive(Debug, Clone, PartialEq)]
pub struct TemporalExtent {
    pub start: String,
    pub stop: String,
}

/// Domain of validity of an object
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extent {
    pub description: Option<String>,
    pub bboxes: Vec<GeographicBoundingBox>,
    pub vertical: Vec<VerticalExtent>,
    pub temporal: Vec<TemporalExtent>,
}

/// Identification plus scope and domain of validity
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectUsage {
    pub base: IdentifiedObject,
    pub scope: Option<String>,
    pub domain_of_validity: Option<Extent>,
}

impl ObjectUsage {
    pub fn named(name: &str) -> Self {
        ObjectUsage {
            base: IdentifiedObject::named(name),
            ..Default::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.base.name
    }
}

/// Optional-field property bag accepted by every factory
///
/// Replaces a dynamically-typed property map: the type system decides what
/// each factory can receive, and unset fields simply stay at their default.
#[derive(Debug, Clone, Default)]
pub struct Properties {
    pub name: Option<String>,
    pub identifiers: Vec<Identifier>,
    pub aliases: Vec<String>,
    pub remarks: Option<String>,
    pub deprecated: bool,
    pub scope: Option<String>,
    pub domain_of_validity: Option<Extent>,
}

impl Properties {
    pub fn named(name: &str) -> Self {
        Properties {
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    /// Name plus a single EPSG identifier
    pub fn epsg(name: &str, code: u32) -> Self {
        Properties {
            name: Some(name.to_string()),
            identifiers: vec![Identifier::epsg(code)],
            ..Default::default()
        }
    }

    pub fn with_identifier(mut self, id: Identifier) -> Self {
        self.identifiers.push(id);
        self
    }

    pub fn with_scope(mut self, scope: &str) -> Self {
        self.scope = Some(scope.to_string());
        self
    }

    pub fn with_extent(mut self, extent: Extent) -> Self {
        self.domain_of_validity = Some(extent);
        self
    }

    /// Materialize the identification part
    pub fn build_identified(&self) -> IdentifiedObject {
        IdentifiedObject {
            name: self.name.clone().unwrap_or_default(),
            identifiers: self.identifiers.clone(),
            aliases: self.aliases.clone(),
            remarks: self.remarks.clone().unwrap_or_default(),
            deprecated: self.deprecated,
        }
    }

    /// Materialize identification plus usage
    pub fn build_usage(&self) -> ObjectUsage {
        ObjectUsage {
            base: self.build_identified(),
            scope: self.scope.clone(),
            domain_of_validity: self.domain_of_validity.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epsg_identifier() {
        let id = Identifier::epsg(4326);
        assert!(id.is_epsg(4326));
        assert!(!id.is_epsg(4979));
    }

    #[test]
    fn test_properties_build() {
        let props = Properties::epsg("WGS 84", 4326).with_scope("Horizontal component of 3D system.");
        let usage = props.build_usage();
        assert_eq!(usage.name(), "WGS 84");
        assert_eq!(usage.base.epsg_code(), Some(4326));
        assert!(usage.scope.is_some());
    }
}
