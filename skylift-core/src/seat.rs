use std::fmt;

use skylift_fleet::SeatingPlan;

use crate::{FlightError, FlightResult};

/// A validated seat address, e.g. row 12 letter F for "12F".
///
/// Designators are derived on every call that addresses a seat; they are
/// never stored, so one can only exist for a seat its plan actually has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SeatDesignator {
    pub row: u32,
    pub letter: char,
}

impl SeatDesignator {
    /// Parse a designator such as "12F" against a seating plan.
    ///
    /// The trailing character is the seat letter and the remaining prefix is
    /// the row number. Every allocation, relocation, and query path goes
    /// through this, so validation is identical everywhere.
    pub fn parse(seat: &str, plan: &SeatingPlan) -> FlightResult<Self> {
        let mut chars = seat.chars();
        let letter = chars
            .next_back()
            .ok_or_else(|| FlightError::InvalidSeatRow(seat.to_string()))?;

        if !plan.has_letter(letter) {
            return Err(FlightError::InvalidSeatLetter(letter));
        }

        let row_text = chars.as_str();
        let row: u32 = row_text
            .parse()
            .map_err(|_| FlightError::InvalidSeatRow(row_text.to_string()))?;

        if !plan.has_row(row) {
            return Err(FlightError::InvalidSeatRow(row_text.to_string()));
        }

        Ok(Self { row, letter })
    }
}

impl fmt::Display for SeatDesignator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row, self.letter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skylift_fleet::AircraftVariant;

    fn plan() -> SeatingPlan {
        AircraftVariant::AirbusA319.seating_plan()
    }

    #[test]
    fn test_parse_valid_designators() {
        let seat = SeatDesignator::parse("12F", &plan()).unwrap();
        assert_eq!(seat, SeatDesignator { row: 12, letter: 'F' });
        assert_eq!(seat.to_string(), "12F");

        let first = SeatDesignator::parse("1A", &plan()).unwrap();
        assert_eq!(first.to_string(), "1A");

        let last = SeatDesignator::parse("22F", &plan()).unwrap();
        assert_eq!(last.to_string(), "22F");
    }

    #[test]
    fn test_parse_rejects_unknown_letter() {
        assert_eq!(
            SeatDesignator::parse("12G", &plan()),
            Err(FlightError::InvalidSeatLetter('G'))
        );
        // A bare row number ends in a digit, which is not a seat letter.
        assert_eq!(
            SeatDesignator::parse("12", &plan()),
            Err(FlightError::InvalidSeatLetter('2'))
        );
    }

    #[test]
    fn test_parse_rejects_bad_rows() {
        assert_eq!(
            SeatDesignator::parse("0A", &plan()),
            Err(FlightError::InvalidSeatRow("0".to_string()))
        );
        assert_eq!(
            SeatDesignator::parse("23A", &plan()),
            Err(FlightError::InvalidSeatRow("23".to_string()))
        );
        assert_eq!(
            SeatDesignator::parse("xxA", &plan()),
            Err(FlightError::InvalidSeatRow("xx".to_string()))
        );
        assert_eq!(
            SeatDesignator::parse("A", &plan()),
            Err(FlightError::InvalidSeatRow("".to_string()))
        );
        assert_eq!(
            SeatDesignator::parse("", &plan()),
            Err(FlightError::InvalidSeatRow("".to_string()))
        );
    }
}
