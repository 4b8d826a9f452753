//! Geodetic and geographic coordinate reference systems

use crate::common::unit::{DEGREE, GRAD, METRE};
use crate::common::{ObjectUsage, Properties};
use crate::cs::CoordinateSystem;
use crate::datum::{DatumEnsemble, GeodeticReferenceFrame, PrimeMeridian};
use crate::errors::{GeodeticError, GeodeticResult};
use crate::crs::Crs;
use std::sync::Arc;

/// A CRS anchored to a geodetic reference frame
///
/// The coordinate system is geocentric Cartesian, spherical, or ellipsoidal;
/// an ellipsoidal one makes the CRS geographic.
#[derive(Debug, Clone, PartialEq)]
pub struct GeodeticCrs {
    pub usage: ObjectUsage,
    pub datum: Option<GeodeticReferenceFrame>,
    pub datum_ensemble: Option<DatumEnsemble>,
    pub coordinate_system: CoordinateSystem,
    /// Remembered BoundCRS used to re-emit TOWGS84/nadgrids on export
    pub canonical_bound_crs: Option<Arc<Crs>>,
}

impl GeodeticCrs {
    pub fn new(
        properties: Properties,
        datum: Option<GeodeticReferenceFrame>,
        datum_ensemble: Option<DatumEnsemble>,
        coordinate_system: CoordinateSystem,
    ) -> GeodeticResult<Self> {
        check_datum_exclusivity(datum.is_some(), datum_ensemble.is_some())?;
        match &coordinate_system {
            CoordinateSystem::Cartesian(axes) if axes.len() == 3 => {}
            CoordinateSystem::Spherical(_) | CoordinateSystem::Ellipsoidal(_) => {}
            _ => {
                return Err(GeodeticError::InvariantViolation(
                    "geodetic CRS requires a 3-axis Cartesian, spherical or ellipsoidal \
                     coordinate system"
                        .to_string(),
                ))
            }
        }
        Ok(GeodeticCrs {
            usage: properties.build_usage(),
            datum,
            datum_ensemble,
            coordinate_system,
            canonical_bound_crs: None,
        })
    }

    /// Factory producing the shared CRS handle
    pub fn create(
        properties: Properties,
        datum: Option<GeodeticReferenceFrame>,
        datum_ensemble: Option<DatumEnsemble>,
        coordinate_system: CoordinateSystem,
    ) -> GeodeticResult<Arc<Crs>> {
        Ok(Arc::new(Crs::Geodetic(Self::new(
            properties,
            datum,
            datum_ensemble,
            coordinate_system,
        )?)))
    }

    pub fn name(&self) -> &str {
        self.usage.name()
    }

    /// The frame, from the datum or from the ensemble representative
    pub fn effective_frame(&self) -> Option<&GeodeticReferenceFrame> {
        self.datum
            .as_ref()
            .or_else(|| self.datum_ensemble.as_ref()?.representative_geodetic_frame())
    }

    pub fn prime_meridian(&self) -> Option<&PrimeMeridian> {
        self.effective_frame().map(|f| &f.prime_meridian)
    }

    pub fn is_geocentric(&self) -> bool {
        matches!(&self.coordinate_system, CoordinateSystem::Cartesian(_))
    }

    /// WGS 84 geocentric, EPSG:4978
    pub fn epsg_4978() -> Arc<Crs> {
        GeodeticCrs::create(
            Properties::epsg("WGS 84", 4978),
            Some(GeodeticReferenceFrame::wgs84()),
            None,
            CoordinateSystem::create_geocentric(&METRE).expect("metre is linear"),
        )
        .expect("valid constant CRS")
    }
}

/// A geodetic CRS with an ellipsoidal coordinate system
#[derive(Debug, Clone, PartialEq)]
pub struct GeographicCrs {
    pub geodetic: GeodeticCrs,
}

impl GeographicCrs {
    pub fn new(
        properties: Properties,
        datum: Option<GeodeticReferenceFrame>,
        datum_ensemble: Option<DatumEnsemble>,
        coordinate_system: CoordinateSystem,
    ) -> GeodeticResult<Self> {
        if !matches!(&coordinate_system, CoordinateSystem::Ellipsoidal(_)) {
            return Err(GeodeticError::InvariantViolation(
                "geographic CRS requires an ellipsoidal coordinate system".to_string(),
            ));
        }
        Ok(GeographicCrs {
            geodetic: GeodeticCrs::new(properties, datum, datum_ensemble, coordinate_system)?,
        })
    }

    pub fn create(
        properties: Properties,
        datum: Option<GeodeticReferenceFrame>,
        datum_ensemble: Option<DatumEnsemble>,
        coordinate_system: CoordinateSystem,
    ) -> GeodeticResult<Arc<Crs>> {
        Ok(Arc::new(Crs::Geographic(Self::new(
            properties,
            datum,
            datum_ensemble,
            coordinate_system,
        )?)))
    }

    pub fn name(&self) -> &str {
        self.geodetic.name()
    }

    pub fn is_three_dimensional(&self) -> bool {
        self.geodetic.coordinate_system.axes().len() == 3
    }

    /// WGS 84 2D, EPSG:4326, latitude/longitude in degrees
    pub fn epsg_4326() -> Arc<Crs> {
        GeographicCrs::create(
            Properties::epsg("WGS 84", 4326),
            Some(GeodeticReferenceFrame::wgs84()),
            None,
            CoordinateSystem::create_latitude_longitude(&DEGREE).expect("degree is angular"),
        )
        .expect("valid constant CRS")
    }

    /// NTF (Paris), EPSG:4807, latitude/longitude in grads with the Paris
    /// prime meridian
    pub fn epsg_4807() -> Arc<Crs> {
        let frame = GeodeticReferenceFrame::create(
            Properties::epsg("Nouvelle Triangulation Francaise (Paris)", 6807),
            crate::datum::Ellipsoid::create_flattened_sphere(
                Properties::epsg("Clarke 1880 (IGN)", 7011),
                crate::common::Length::metres(6378249.2),
                crate::common::Scale::unity(293.4660212936269),
            )
            .expect("valid constant ellipsoid"),
            None,
            PrimeMeridian::paris(),
        )
        .expect("valid constant datum");
        GeographicCrs::create(
            Properties::epsg("NTF (Paris)", 4807),
            Some(frame),
            None,
            CoordinateSystem::create_latitude_longitude(&GRAD).expect("grad is angular"),
        )
        .expect("valid constant CRS")
    }
}

pub(crate) fn check_datum_exclusivity(
    has_datum: bool,
    has_ensemble: bool,
) -> GeodeticResult<()> {
    match (has_datum, has_ensemble) {
        (true, true) => Err(GeodeticError::InvariantViolation(
            "a CRS cannot carry both a datum and a datum ensemble".to_string(),
        )),
        (false, false) => Err(GeodeticError::InvariantViolation(
            "a CRS requires either a datum or a datum ensemble".to_string(),
        )),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_of_datum_or_ensemble() {
        let cs = CoordinateSystem::create_latitude_longitude(&DEGREE).unwrap();
        assert!(GeographicCrs::new(Properties::named("bad"), None, None, cs.clone()).is_err());

        let ensemble = DatumEnsemble::create(
            Properties::named("WGS 84 ensemble"),
            vec![crate::datum::Datum::Geodetic(GeodeticReferenceFrame::wgs84())],
            2.0,
        )
        .unwrap();
        assert!(GeographicCrs::new(
            Properties::named("bad"),
            Some(GeodeticReferenceFrame::wgs84()),
            Some(ensemble.clone()),
            cs.clone()
        )
        .is_err());

        let ok = GeographicCrs::new(Properties::named("ok"), None, Some(ensemble), cs).unwrap();
        assert!(ok.geodetic.effective_frame().is_some());
    }

    #[test]
    fn test_geographic_requires_ellipsoidal() {
        let cartesian = CoordinateSystem::create_geocentric(&METRE).unwrap();
        assert!(GeographicCrs::new(
            Properties::named("bad"),
            Some(GeodeticReferenceFrame::wgs84()),
            None,
            cartesian
        )
        .is_err());
    }

    #[test]
    fn test_epsg_4326() {
        let crs = GeographicCrs::epsg_4326();
        assert_eq!(crs.name(), "WGS 84");
        match &*crs {
            Crs::Geographic(geog) => {
                assert!(!geog.is_three_dimensional());
                assert!(!geog.geodetic.is_geocentric());
            }
            _ => panic!("expected a geographic CRS"),
        }
    }

    #[test]
    fn test_epsg_4978_geocentric() {
        let crs = GeodeticCrs::epsg_4978();
        match &*crs {
            Crs::Geodetic(geod) => assert!(geod.is_geocentric()),
            _ => panic!("expected a geodetic CRS"),
        }
    }
}
