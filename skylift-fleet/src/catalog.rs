use crate::aircraft::Aircraft;
use std::collections::HashMap;

/// In-memory fleet registry, keyed by tail number.
///
/// The catalog is pure configuration data: it is populated once (in code or
/// from a JSON document) and read by flight construction.
#[derive(Debug, Default)]
pub struct FleetCatalog {
    aircraft: HashMap<String, Aircraft>,
}

impl FleetCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an aircraft. Replaces any previous entry with the same
    /// registration.
    pub fn register(&mut self, aircraft: Aircraft) {
        self.aircraft
            .insert(aircraft.registration().to_string(), aircraft);
    }

    /// Look up an aircraft by tail number.
    pub fn find(&self, registration: &str) -> Result<&Aircraft, FleetError> {
        self.aircraft
            .get(registration)
            .ok_or_else(|| FleetError::UnknownAircraft(registration.to_string()))
    }

    /// Build a catalog from a JSON array of aircraft records.
    pub fn from_json(doc: &str) -> Result<Self, FleetError> {
        let aircraft: Vec<Aircraft> = serde_json::from_str(doc)?;
        let mut catalog = Self::new();
        for entry in aircraft {
            catalog.register(entry);
        }
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.aircraft.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aircraft.is_empty()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FleetError {
    #[error("Unknown aircraft registration: {0}")]
    UnknownAircraft(String),

    #[error("Malformed fleet document: {0}")]
    Malformed(#[from] serde_json::Error),
}
