//! Seat-allocation model for a single flight.

pub mod flight;
pub mod seat;

pub use flight::{BoardingCard, Flight, FlightNumber};
pub use seat::SeatDesignator;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FlightError {
    #[error("Invalid airline code in {0}")]
    InvalidAirlineCode(String),
    #[error("Invalid route number {0}")]
    InvalidRouteNumber(String),
    #[error("Invalid seat letter {0}")]
    InvalidSeatLetter(char),
    #[error("Invalid seat row {0}")]
    InvalidSeatRow(String),
    #[error("Seat {0} already occupied")]
    SeatOccupied(SeatDesignator),
    #[error("No passenger to relocate in seat {0}")]
    SeatEmpty(SeatDesignator),
}

pub type FlightResult<T> = Result<T, FlightError>;
