use serde::{Deserialize, Serialize};

/// Fixed seating layout for an aircraft variant: a contiguous run of
/// 1-based rows and an ordered set of seat letters per row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatingPlan {
    rows: u32,
    letters: String,
}

impl SeatingPlan {
    pub fn new(rows: u32, letters: &str) -> Self {
        Self {
            rows,
            letters: letters.to_string(),
        }
    }

    /// Valid row numbers, in cabin order.
    pub fn row_numbers(&self) -> impl Iterator<Item = u32> {
        1..=self.rows
    }

    /// Valid seat letters, in cabin order.
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.letters.chars()
    }

    pub fn has_row(&self, row: u32) -> bool {
        (1..=self.rows).contains(&row)
    }

    pub fn has_letter(&self, letter: char) -> bool {
        self.letters.contains(letter)
    }

    pub fn seat_count(&self) -> u32 {
        self.rows * self.letters.chars().count() as u32
    }
}

/// Aircraft variants in the fleet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AircraftVariant {
    AirbusA319,
    Boeing777,
    /// One-off layouts not covered by the named variants.
    Custom {
        model: String,
        rows: u32,
        letters: String,
    },
}

impl AircraftVariant {
    pub fn model(&self) -> &str {
        match self {
            AircraftVariant::AirbusA319 => "Airbus A319",
            AircraftVariant::Boeing777 => "Boeing 777",
            AircraftVariant::Custom { model, .. } => model,
        }
    }

    pub fn seating_plan(&self) -> SeatingPlan {
        match self {
            AircraftVariant::AirbusA319 => SeatingPlan::new(22, "ABCDEF"),
            AircraftVariant::Boeing777 => SeatingPlan::new(55, "ABCDEFGHIJK"),
            AircraftVariant::Custom { rows, letters, .. } => SeatingPlan::new(*rows, letters),
        }
    }
}

/// A physical aircraft: a tail number bound to one variant's layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aircraft {
    registration: String,
    variant: AircraftVariant,
}

impl Aircraft {
    pub fn new(registration: impl Into<String>, variant: AircraftVariant) -> Self {
        Self {
            registration: registration.into(),
            variant,
        }
    }

    pub fn registration(&self) -> &str {
        &self.registration
    }

    pub fn model(&self) -> &str {
        self.variant.model()
    }

    pub fn seating_plan(&self) -> SeatingPlan {
        self.variant.seating_plan()
    }

    pub fn num_seats(&self) -> u32 {
        self.seating_plan().seat_count()
    }
}
