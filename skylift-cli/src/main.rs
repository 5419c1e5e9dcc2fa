use std::env;
use std::fs;

use anyhow::Context;
use skylift_core::{BoardingCard, Flight};
use skylift_fleet::{Aircraft, AircraftVariant, FleetCatalog};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "skylift_cli=info,skylift_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let fleet = match env::args().nth(1) {
        Some(path) => {
            let doc = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read fleet file {path}"))?;
            FleetCatalog::from_json(&doc).context("Failed to parse fleet file")?
        }
        None => reference_fleet(),
    };
    tracing::info!("Fleet loaded with {} aircraft", fleet.len());

    for flight in demo_flights(&fleet)? {
        tracing::info!(
            "Flight {} ({}, {}): {} seats available",
            flight.number(),
            flight.aircraft_model(),
            flight.registration(),
            flight.num_available_seats()
        );
        flight.make_boarding_cards(console_card_printer);
    }

    Ok(())
}

fn reference_fleet() -> FleetCatalog {
    let mut fleet = FleetCatalog::new();
    fleet.register(Aircraft::new("P-LATA", AircraftVariant::Boeing777));
    fleet.register(Aircraft::new("G-EUPT", AircraftVariant::AirbusA319));
    fleet
}

fn demo_flights(fleet: &FleetCatalog) -> anyhow::Result<Vec<Flight>> {
    let mut long_haul = Flight::new("PE979", fleet.find("P-LATA")?.clone())?;
    long_haul.allocate_seat("1A", "Marvin Abisrror")?;
    long_haul.allocate_seat("2C", "Perla Cristal")?;
    long_haul.allocate_seat("20A", "Carla Segovia")?;
    long_haul.allocate_seat("15B", "Cintia Irina")?;
    long_haul.allocate_seat("12B", "Esmeralda Princesa")?;

    let mut short_haul = Flight::new("BA758", fleet.find("G-EUPT")?.clone())?;
    short_haul.allocate_seat("12A", "Alejandro Perez")?;
    short_haul.allocate_seat("15F", "Armando Paredes")?;
    short_haul.allocate_seat("12B", "Ciro Perez")?;
    short_haul.allocate_seat("1A", "Peredo Marco")?;
    short_haul.allocate_seat("3C", "Gilberto Tuesta")?;

    Ok(vec![long_haul, short_haul])
}

/// Print a boarding card as a banner-boxed line on stdout.
fn console_card_printer(card: &BoardingCard) {
    let line = format!(
        "| Name: {}  Flight: {}  Seat: {}  Aircraft: {} |",
        card.passenger, card.flight_number, card.seat, card.aircraft_model
    );
    let banner = format!("+{}+", "-".repeat(line.len() - 2));
    let border = format!("|{}|", " ".repeat(line.len() - 2));
    println!("{banner}\n{border}\n{line}\n{border}\n{banner}\n");
}
