//! Reference catalogs of bodies to place on the sky map
//!
//! A [`SkyCatalog`] is plain data owned by the caller: the positions module
//! only ever borrows it. Catalogs can be read from JSON or built from the
//! standard set shipped with the crate (the Sun, the Moon, the seven planets
//! from Mercury to Neptune, and the brightest navigation stars).
//!
//! The JSON shape is a list of tagged records:
//!
//! ```json
//! {"bodies": [
//!   {"id": "sun", "kind": "sun"},
//!   {"id": "sirius", "kind": "star", "ra_hours": 6.7525, "dec_degrees": -16.7161, "magnitude": -1.46},
//!   {"id": "mars", "kind": "planet", "elements": { ... }}
//! ]}
//! ```

mod standard;

use crate::constants::ELEMENT_VALIDITY_DAYS;
use crate::coordinates::Equatorial;
use crate::ephemeris::OrbitalElements;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Error type for catalog loading
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Unsupported body kind '{kind}' for '{id}'")]
    UnsupportedBodyKind { id: String, kind: String },

    #[error("Missing field '{field}' for '{id}'")]
    MissingField { id: String, field: &'static str },

    #[error("Invalid coordinate for '{id}': {reason}")]
    InvalidCoordinate { id: String, reason: String },

    #[error("Invalid orbital elements for '{id}': {reason}")]
    InvalidElements { id: String, reason: String },

    #[error("Duplicate body id '{0}'")]
    DuplicateId(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;

/// What kind of body a catalog entry describes, and the data needed to place it
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    /// Fixed star at catalog coordinates
    Star(Equatorial),
    Sun,
    Moon,
    /// Planet on a heliocentric Keplerian orbit
    Planet(OrbitalElements),
}

impl Body {
    /// Tag used for this kind in catalog files
    pub fn kind(&self) -> &'static str {
        match self {
            Body::Star(_) => "star",
            Body::Sun => "sun",
            Body::Moon => "moon",
            Body::Planet(_) => "planet",
        }
    }
}

/// A named catalog entry
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogBody {
    pub id: String,
    pub body: Body,
    /// Apparent visual magnitude, when known
    pub magnitude: Option<f64>,
}

impl CatalogBody {
    pub fn new(id: &str, body: Body) -> Self {
        CatalogBody {
            id: id.to_string(),
            body,
            magnitude: None,
        }
    }

    pub fn with_magnitude(mut self, magnitude: f64) -> Self {
        self.magnitude = Some(magnitude);
        self
    }

    fn validate(&self) -> Result<()> {
        match &self.body {
            Body::Star(eq) => {
                if !(eq.ra_hours.is_finite() && (0.0..24.0).contains(&eq.ra_hours)) {
                    return Err(CatalogError::InvalidCoordinate {
                        id: self.id.clone(),
                        reason: format!("right ascension {}h outside [0, 24)", eq.ra_hours),
                    });
                }
                if !(eq.dec_degrees.is_finite() && (-90.0..=90.0).contains(&eq.dec_degrees)) {
                    return Err(CatalogError::InvalidCoordinate {
                        id: self.id.clone(),
                        reason: format!("declination {}° outside [-90, 90]", eq.dec_degrees),
                    });
                }
            }
            Body::Planet(elements) => {
                let rates = [
                    elements.semi_major_axis,
                    elements.eccentricity,
                    elements.inclination,
                    elements.mean_longitude,
                    elements.longitude_of_perihelion,
                    elements.longitude_of_ascending_node,
                ];
                if rates
                    .iter()
                    .any(|el| !(el.base.is_finite() && el.rate_per_day.is_finite()))
                {
                    return Err(CatalogError::InvalidElements {
                        id: self.id.clone(),
                        reason: "non-finite element".to_string(),
                    });
                }
                // Elements drift linearly, so checking the ends covers the whole span
                for days in [-ELEMENT_VALIDITY_DAYS, 0.0, ELEMENT_VALIDITY_DAYS] {
                    let a = elements.semi_major_axis.at(days);
                    let e = elements.eccentricity.at(days);
                    if a <= 0.0 {
                        return Err(CatalogError::InvalidElements {
                            id: self.id.clone(),
                            reason: format!("semi-major axis {} AU at day {} must be positive", a, days),
                        });
                    }
                    if !(0.0..1.0).contains(&e) {
                        return Err(CatalogError::InvalidElements {
                            id: self.id.clone(),
                            reason: format!("eccentricity {} at day {} is not elliptical", e, days),
                        });
                    }
                }
            }
            Body::Sun | Body::Moon => {}
        }
        Ok(())
    }
}

/// Catalog record as it appears on disk
#[derive(Debug, Clone, Serialize, Deserialize)]
struct BodyRecord {
    id: String,
    kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    ra_hours: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    dec_degrees: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    magnitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    elements: Option<OrbitalElements>,
}

#[derive(Debug, Serialize, Deserialize)]
struct CatalogFile {
    bodies: Vec<BodyRecord>,
}

impl TryFrom<BodyRecord> for CatalogBody {
    type Error = CatalogError;

    fn try_from(record: BodyRecord) -> Result<Self> {
        let missing = |field| CatalogError::MissingField {
            id: record.id.clone(),
            field,
        };

        let body = match record.kind.to_ascii_lowercase().as_str() {
            "star" => {
                let ra = record.ra_hours.ok_or_else(|| missing("ra_hours"))?;
                let dec = record.dec_degrees.ok_or_else(|| missing("dec_degrees"))?;
                Body::Star(Equatorial {
                    ra_hours: ra,
                    dec_degrees: dec,
                })
            }
            "sun" => Body::Sun,
            "moon" => Body::Moon,
            "planet" => Body::Planet(record.elements.ok_or_else(|| missing("elements"))?),
            _ => {
                return Err(CatalogError::UnsupportedBodyKind {
                    id: record.id,
                    kind: record.kind,
                })
            }
        };

        let entry = CatalogBody {
            id: record.id,
            body,
            magnitude: record.magnitude,
        };
        entry.validate()?;
        Ok(entry)
    }
}

impl From<&CatalogBody> for BodyRecord {
    fn from(entry: &CatalogBody) -> Self {
        let mut record = BodyRecord {
            id: entry.id.clone(),
            kind: entry.body.kind().to_string(),
            ra_hours: None,
            dec_degrees: None,
            magnitude: entry.magnitude,
            elements: None,
        };
        match &entry.body {
            Body::Star(eq) => {
                record.ra_hours = Some(eq.ra_hours);
                record.dec_degrees = Some(eq.dec_degrees);
            }
            Body::Planet(elements) => record.elements = Some(*elements),
            Body::Sun | Body::Moon => {}
        }
        record
    }
}

/// An ordered collection of uniquely named bodies
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkyCatalog {
    bodies: Vec<CatalogBody>,
}

impl SkyCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from entries, rejecting duplicates and invalid data
    pub fn from_bodies(bodies: Vec<CatalogBody>) -> Result<Self> {
        let mut catalog = Self::new();
        for body in bodies {
            catalog.push(body)?;
        }
        Ok(catalog)
    }

    /// The Sun, Moon, planets and bright stars
    pub fn standard() -> Self {
        Self {
            bodies: standard::standard_bodies(),
        }
    }

    /// Parse a catalog from JSON text
    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        let mut seen = HashSet::new();
        let mut bodies = Vec::with_capacity(file.bodies.len());
        for record in file.bodies {
            let entry = CatalogBody::try_from(record)?;
            if !seen.insert(entry.id.clone()) {
                return Err(CatalogError::DuplicateId(entry.id));
            }
            bodies.push(entry);
        }
        debug!("parsed sky catalog with {} bodies", bodies.len());
        Ok(Self { bodies })
    }

    /// Load a catalog from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(&path)?;
        debug!("loading sky catalog from {}", path.as_ref().display());
        Self::from_json_str(&text)
    }

    /// Serialize the catalog to pretty-printed JSON
    pub fn to_json_string(&self) -> Result<String> {
        let file = CatalogFile {
            bodies: self.bodies.iter().map(BodyRecord::from).collect(),
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }

    /// Add an entry
    pub fn push(&mut self, body: CatalogBody) -> Result<()> {
        if self.get(&body.id).is_some() {
            return Err(CatalogError::DuplicateId(body.id));
        }
        body.validate()?;
        self.bodies.push(body);
        Ok(())
    }

    /// Look up an entry by id
    pub fn get(&self, id: &str) -> Option<&CatalogBody> {
        self.bodies.iter().find(|b| b.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogBody> {
        self.bodies.iter()
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Entries with a known magnitude at or below `magnitude`
    pub fn brighter_than(&self, magnitude: f64) -> Vec<&CatalogBody> {
        self.bodies
            .iter()
            .filter(|b| b.magnitude.is_some_and(|m| m <= magnitude))
            .collect()
    }
}

impl<'a> IntoIterator for &'a SkyCatalog {
    type Item = &'a CatalogBody;
    type IntoIter = std::slice::Iter<'a, CatalogBody>;

    fn into_iter(self) -> Self::IntoIter {
        self.bodies.iter()
    }
}
