//! ESRI name aliasing
//!
//! The alias table ships as an embedded TOML document parsed at startup.
//! When a name is not in the table, the deterministic morphism applies:
//! spaces become underscores and a kind-specific prefix is added.

use crate::context::ObjectKind;
use lazy_static::lazy_static;
use std::collections::HashMap;

/// Parsed alias tables
#[derive(Debug, Default)]
pub struct EsriAliases {
    geographic_crs: HashMap<String, String>,
    datum: HashMap<String, String>,
    projected_crs: HashMap<String, String>,
    reverse: HashMap<String, String>,
}

impl EsriAliases {
    fn from_str(content: &str) -> Result<Self, String> {
        let value: toml::Value = content
            .parse()
            .map_err(|e| format!("failed to parse alias TOML: {}", e))?;
        let mut aliases = EsriAliases::default();
        Self::read_table(&value, "geographic_crs", &mut aliases.geographic_crs);
        Self::read_table(&value, "datum", &mut aliases.datum);
        Self::read_table(&value, "projected_crs", &mut aliases.projected_crs);
        Self::read_table(&value, "datum_reverse", &mut aliases.reverse);
        // the forward tables are also usable backwards
        for table in [&aliases.geographic_crs, &aliases.projected_crs] {
            for (official, esri) in table {
                aliases
                    .reverse
                    .entry(esri.clone())
                    .or_insert_with(|| official.clone());
            }
        }
        Ok(aliases)
    }

    fn read_table(value: &toml::Value, table: &str, target: &mut HashMap<String, String>) {
        if let Some(table) = value.get(table).and_then(|v| v.as_table()) {
            for (k, v) in table {
                if let Some(s) = v.as_str() {
                    target.insert(k.clone(), s.to_string());
                }
            }
        }
    }
}

lazy_static! {
    static ref ALIASES: EsriAliases = {
        let content = include_str!("../../esri_aliases.toml");
        EsriAliases::from_str(content).unwrap_or_else(|e| {
            eprintln!("Warning: failed to parse ESRI alias definitions: {}", e);
            EsriAliases::default()
        })
    };
}

/// The ESRI spelling of an official name, from the table when present,
/// otherwise via the deterministic morphism
pub fn esri_name(official: &str, kind: ObjectKind) -> String {
    let table = match kind {
        ObjectKind::GeodeticCrs => &ALIASES.geographic_crs,
        ObjectKind::Datum => &ALIASES.datum,
        ObjectKind::ProjectedCrs => &ALIASES.projected_crs,
        _ => return morphism(official, kind),
    };
    table
        .get(official)
        .cloned()
        .unwrap_or_else(|| morphism(official, kind))
}

/// Reverse lookup of an ESRI alias, when the table knows it
pub fn official_name(esri: &str) -> Option<String> {
    ALIASES.reverse.get(esri).cloned()
}

/// Spaces to underscores plus the kind-specific prefix
pub fn morphism(official: &str, kind: ObjectKind) -> String {
    let underscored = official.replace(' ', "_");
    match kind {
        ObjectKind::GeodeticCrs => {
            if underscored.starts_with("GCS_") {
                underscored
            } else {
                format!("GCS_{}", underscored)
            }
        }
        ObjectKind::Datum => {
            if underscored.starts_with("D_") {
                underscored
            } else {
                format!("D_{}", underscored)
            }
        }
        _ => underscored,
    }
}

/// Best-effort de-aliasing without a database: strip known prefixes and
/// turn underscores back into spaces
pub fn dealias_without_database(esri: &str) -> String {
    for prefix in ["GCS_", "D_"] {
        if let Some(rest) = esri.strip_prefix(prefix) {
            return rest.replace('_', " ");
        }
    }
    esri.to_string()
}

/// ESRI parameter spelling: each underscore-separated word capitalized
pub fn esri_parameter_name(wkt1_name: &str) -> String {
    wkt1_name
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join("_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_lookup() {
        assert_eq!(esri_name("WGS 84", ObjectKind::GeodeticCrs), "GCS_WGS_1984");
        assert_eq!(
            esri_name("World Geodetic System 1984", ObjectKind::Datum),
            "D_WGS_1984"
        );
        assert_eq!(
            esri_name("WGS 84 / UTM zone 31N", ObjectKind::ProjectedCrs),
            "WGS_1984_UTM_Zone_31N"
        );
    }

    #[test]
    fn test_morphism_fallback() {
        assert_eq!(
            esri_name("My Custom CRS", ObjectKind::GeodeticCrs),
            "GCS_My_Custom_CRS"
        );
        assert_eq!(esri_name("Local Datum", ObjectKind::Datum), "D_Local_Datum");
        assert_eq!(
            esri_name("Some Projected Thing", ObjectKind::ProjectedCrs),
            "Some_Projected_Thing"
        );
    }

    #[test]
    fn test_reverse() {
        assert_eq!(official_name("GCS_WGS_1984").as_deref(), Some("WGS 84"));
        assert_eq!(official_name("D_WGS_1984").as_deref(), Some("WGS_1984"));
        assert_eq!(official_name("GCS_Unknown_Thing"), None);
    }

    #[test]
    fn test_dealias_without_database() {
        assert_eq!(dealias_without_database("GCS_Foo_Bar"), "Foo Bar");
        assert_eq!(dealias_without_database("D_Foo"), "Foo");
        assert_eq!(dealias_without_database("Plain_Name"), "Plain_Name");
    }

    #[test]
    fn test_parameter_names() {
        assert_eq!(esri_parameter_name("false_easting"), "False_Easting");
        assert_eq!(esri_parameter_name("latitude_of_origin"), "Latitude_Of_Origin");
        assert_eq!(esri_parameter_name("central_meridian"), "Central_Meridian");
        assert_eq!(esri_parameter_name("scale_factor"), "Scale_Factor");
    }
}
