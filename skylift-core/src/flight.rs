use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use skylift_fleet::Aircraft;

use crate::seat::SeatDesignator;
use crate::{FlightError, FlightResult};

/// A validated flight number: two-letter uppercase airline code followed by
/// a route number in 0..=9999, e.g. "BA758".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightNumber {
    text: String,
    route: u16,
}

impl FlightNumber {
    pub fn parse(number: &str) -> FlightResult<Self> {
        let mut chars = number.chars();
        let code_ok = matches!(
            (chars.next(), chars.next()),
            (Some(a), Some(b)) if a.is_ascii_uppercase() && b.is_ascii_uppercase()
        );
        if !code_ok {
            return Err(FlightError::InvalidAirlineCode(number.to_string()));
        }

        let route_text = chars.as_str();
        if route_text.is_empty() || !route_text.chars().all(|c| c.is_ascii_digit()) {
            return Err(FlightError::InvalidRouteNumber(number.to_string()));
        }
        let route: u16 = route_text
            .parse()
            .ok()
            .filter(|route| *route <= 9999)
            .ok_or_else(|| FlightError::InvalidRouteNumber(number.to_string()))?;

        Ok(Self {
            text: number.to_string(),
            route,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The two-letter airline code prefix.
    pub fn airline(&self) -> &str {
        &self.text[..2]
    }

    pub fn route(&self) -> u16 {
        self.route
    }
}

impl fmt::Display for FlightNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// One boarding card record, handed to the card emitter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardingCard {
    pub passenger: String,
    pub seat: String,
    pub flight_number: String,
    pub aircraft_model: String,
}

type SeatMap = BTreeMap<u32, BTreeMap<char, Option<String>>>;

/// Seat occupancy for one flight on one aircraft.
///
/// The seat map's key set is fixed at construction to exactly the aircraft's
/// seating plan; only occupant values change afterwards. Not internally
/// synchronized: a Flight belongs to one logical owner.
#[derive(Debug, Clone)]
pub struct Flight {
    number: FlightNumber,
    aircraft: Aircraft,
    seating: SeatMap,
}

impl Flight {
    /// Create a flight with an all-empty seat map covering the aircraft's
    /// seating plan.
    pub fn new(number: &str, aircraft: Aircraft) -> FlightResult<Self> {
        let number = FlightNumber::parse(number)?;
        let plan = aircraft.seating_plan();
        let seating = plan
            .row_numbers()
            .map(|row| (row, plan.letters().map(|letter| (letter, None)).collect()))
            .collect();

        Ok(Self {
            number,
            aircraft,
            seating,
        })
    }

    pub fn number(&self) -> &str {
        self.number.as_str()
    }

    pub fn airline(&self) -> &str {
        self.number.airline()
    }

    pub fn aircraft_model(&self) -> &str {
        self.aircraft.model()
    }

    pub fn registration(&self) -> &str {
        self.aircraft.registration()
    }

    /// Allocate a seat to a passenger.
    pub fn allocate_seat(&mut self, seat: &str, passenger: &str) -> FlightResult<()> {
        let designator = self.parse_seat(seat)?;
        let slot = self.slot_mut(designator)?;
        if slot.is_some() {
            return Err(FlightError::SeatOccupied(designator));
        }
        *slot = Some(passenger.to_string());
        tracing::debug!(seat = %designator, passenger, "seat allocated");
        Ok(())
    }

    /// Move a passenger to a different seat.
    ///
    /// Both designators are validated and both occupancy checks run before
    /// any write, so a failure leaves the seat map untouched. Relocating a
    /// seat to itself fails with SeatOccupied: the destination check sees
    /// the passenger already sitting there.
    pub fn relocate_passenger(&mut self, from_seat: &str, to_seat: &str) -> FlightResult<()> {
        let from = self.parse_seat(from_seat)?;
        let to = self.parse_seat(to_seat)?;

        if self.slot(from)?.is_none() {
            return Err(FlightError::SeatEmpty(from));
        }
        if self.slot(to)?.is_some() {
            return Err(FlightError::SeatOccupied(to));
        }

        let passenger = self.slot_mut(from)?.take();
        *self.slot_mut(to)? = passenger;
        tracing::debug!(from = %from, to = %to, "passenger relocated");
        Ok(())
    }

    /// The occupant of a seat, if any.
    pub fn occupant(&self, seat: &str) -> FlightResult<Option<&str>> {
        let designator = self.parse_seat(seat)?;
        Ok(self.slot(designator)?.as_deref())
    }

    /// Count of unoccupied seats across the whole cabin.
    pub fn num_available_seats(&self) -> usize {
        self.seating
            .values()
            .flat_map(|row| row.values())
            .filter(|occupant| occupant.is_none())
            .count()
    }

    /// Emit one boarding card per occupied seat, ordered by passenger name.
    pub fn make_boarding_cards<F>(&self, mut emit: F)
    where
        F: FnMut(&BoardingCard),
    {
        let mut cards: Vec<BoardingCard> = self
            .passenger_seats()
            .map(|(passenger, seat)| BoardingCard {
                passenger: passenger.to_string(),
                seat: seat.to_string(),
                flight_number: self.number.as_str().to_string(),
                aircraft_model: self.aircraft.model().to_string(),
            })
            .collect();
        cards.sort_by(|a, b| a.passenger.cmp(&b.passenger));

        for card in &cards {
            emit(card);
        }
    }

    fn parse_seat(&self, seat: &str) -> FlightResult<SeatDesignator> {
        SeatDesignator::parse(seat, &self.aircraft.seating_plan())
    }

    /// Occupied seats in cabin order.
    fn passenger_seats(&self) -> impl Iterator<Item = (&str, SeatDesignator)> {
        self.seating.iter().flat_map(|(&row, letters)| {
            letters.iter().filter_map(move |(&letter, occupant)| {
                occupant
                    .as_deref()
                    .map(|passenger| (passenger, SeatDesignator { row, letter }))
            })
        })
    }

    // A parsed designator always addresses an existing map entry; the error
    // arm is unreachable but keeps indexing panic-free.
    fn slot(&self, seat: SeatDesignator) -> FlightResult<&Option<String>> {
        self.seating
            .get(&seat.row)
            .and_then(|row| row.get(&seat.letter))
            .ok_or_else(|| FlightError::InvalidSeatRow(seat.row.to_string()))
    }

    fn slot_mut(&mut self, seat: SeatDesignator) -> FlightResult<&mut Option<String>> {
        self.seating
            .get_mut(&seat.row)
            .and_then(|row| row.get_mut(&seat.letter))
            .ok_or_else(|| FlightError::InvalidSeatRow(seat.row.to_string()))
    }
}
