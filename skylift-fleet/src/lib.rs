pub mod aircraft;
pub mod catalog;

pub use aircraft::{Aircraft, AircraftVariant, SeatingPlan};
pub use catalog::{FleetCatalog, FleetError};
