//! # Showroom Walkthrough
//!
//! The fixed demonstration script: greet with the dealer name, stock four
//! listings from prompted values, then exercise increment, combine, character
//! access and the mileage handle on the first vehicle.
//!
//! Input and output go through the [`Intake`] and [`Console`] seams so the
//! script runs the same against stdin or a canned answer list.

use dealer_common::error::DealerError;

pub use crate::console::Console;
use crate::fleet::{Car, ElectricCar, HybridVehicle, Listing};
use crate::registry::Registry;
use crate::vehicle::{DisplayInfo, Vehicle, show_vehicle_details};

/// One question asked of the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prompt {
    /// Short name used in error reports.
    pub field: &'static str,
    pub text: &'static str,
}

const fn prompt(field: &'static str, text: &'static str) -> Prompt {
    Prompt { field, text }
}

pub const VEHICLE_BRAND: Prompt = prompt("vehicle brand", "Enter vehicle brand: ");
pub const VEHICLE_PRICE: Prompt = prompt("vehicle price", "Enter vehicle price: ");
pub const VEHICLE_MILEAGE: Prompt = prompt("vehicle mileage", "Enter vehicle mileage: ");

pub const CAR_BRAND: Prompt = prompt("car brand", "Enter car brand: ");
pub const CAR_PRICE: Prompt = prompt("car price", "Enter car price: ");
pub const CAR_MILEAGE: Prompt = prompt("car mileage", "Enter car mileage: ");
pub const CAR_TYPE: Prompt = prompt("car type", "Enter car type (e.g., SUV, Sedan): ");

pub const ELECTRIC_BRAND: Prompt = prompt("electric car brand", "Enter electric car brand: ");
pub const ELECTRIC_PRICE: Prompt = prompt("electric car price", "Enter electric car price: ");
pub const ELECTRIC_MILEAGE: Prompt =
    prompt("electric car mileage", "Enter electric car mileage: ");
pub const BATTERY_CAPACITY: Prompt =
    prompt("battery capacity", "Enter battery capacity (kWh): ");

pub const HYBRID_BRAND: Prompt = prompt("hybrid vehicle brand", "Enter hybrid vehicle brand: ");
pub const HYBRID_PRICE: Prompt = prompt("hybrid vehicle price", "Enter hybrid vehicle price: ");
pub const HYBRID_MILEAGE: Prompt =
    prompt("hybrid vehicle mileage", "Enter hybrid vehicle mileage: ");
pub const LOAD_CAPACITY: Prompt = prompt("load capacity", "Enter load capacity (tons): ");
pub const FUEL_TYPE: Prompt = prompt("fuel type", "Enter fuel type (e.g., Hybrid, Petrol): ");

/// Every prompt in the order the walkthrough asks it.
pub const SCRIPT: [Prompt; 16] = [
    VEHICLE_BRAND,
    VEHICLE_PRICE,
    VEHICLE_MILEAGE,
    CAR_BRAND,
    CAR_PRICE,
    CAR_MILEAGE,
    CAR_TYPE,
    ELECTRIC_BRAND,
    ELECTRIC_PRICE,
    ELECTRIC_MILEAGE,
    BATTERY_CAPACITY,
    HYBRID_BRAND,
    HYBRID_PRICE,
    HYBRID_MILEAGE,
    LOAD_CAPACITY,
    FUEL_TYPE,
];

/// The vehicle combined with the first one near the end of the tour.
pub const PARTNER_BRAND: &str = "BMW";
pub const PARTNER_PRICE: i64 = 35000;
pub const PARTNER_MILEAGE: i64 = 20000;

pub const RESET_MILEAGE: i64 = 18000;
pub const STOCKED_VEHICLES: usize = 4;

/// Source of prompted values.
pub trait Intake {
    fn text(&mut self, prompt: &Prompt) -> Result<String, DealerError>;

    /// Whole numbers are limited to the `i32` range so sums of two answers
    /// never leave `i64`.
    fn number(&mut self, prompt: &Prompt) -> Result<i64, DealerError> {
        let token = self.text(prompt)?;
        match token.parse::<i32>() {
            Ok(value) => Ok(i64::from(value)),
            Err(_) => Err(DealerError::invalid_input(prompt.field, token)),
        }
    }
}

fn display(console: &mut impl Console, item: &impl DisplayInfo) {
    for line in item.info_lines() {
        console.line(&line);
    }
}

/// Runs the full walkthrough. Any error stops it; everything built so far is
/// dropped on the way out.
pub fn run(intake: &mut impl Intake, console: &mut impl Console) -> Result<(), DealerError> {
    let dealer = Registry::instance();
    console.line(&dealer.display_dealer_name());

    let brand = intake.text(&VEHICLE_BRAND)?;
    let price = intake.number(&VEHICLE_PRICE)?;
    let mileage = intake.number(&VEHICLE_MILEAGE)?;
    let mut vehicle1 = Vehicle::with_mileage(brand, price, mileage);
    console.line(&show_vehicle_details(&vehicle1));

    console.section("Car Information");
    let brand = intake.text(&CAR_BRAND)?;
    let price = intake.number(&CAR_PRICE)?;
    let mileage = intake.number(&CAR_MILEAGE)?;
    let car_type = intake.text(&CAR_TYPE)?;
    let car1 = Listing::from(Car::with_type(brand, price, mileage, car_type));
    display(console, &car1);

    console.section("Electric Car Information");
    let brand = intake.text(&ELECTRIC_BRAND)?;
    let price = intake.number(&ELECTRIC_PRICE)?;
    let mileage = intake.number(&ELECTRIC_MILEAGE)?;
    let battery = intake.number(&BATTERY_CAPACITY)?;
    let ecar1 = Listing::from(ElectricCar::new(brand, price, mileage, battery));
    display(console, &ecar1);

    console.section("Hybrid Vehicle Information");
    let brand = intake.text(&HYBRID_BRAND)?;
    let price = intake.number(&HYBRID_PRICE)?;
    let mileage = intake.number(&HYBRID_MILEAGE)?;
    let load_capacity = intake.number(&LOAD_CAPACITY)?;
    let fuel_type = intake.text(&FUEL_TYPE)?;
    let hybrid1 = Listing::from(HybridVehicle::with_fuel(
        brand,
        price,
        mileage,
        load_capacity,
        fuel_type,
    ));
    display(console, &hybrid1);

    vehicle1.increment(console);
    let vehicle2 = Vehicle::with_mileage(PARTNER_BRAND, PARTNER_PRICE, PARTNER_MILEAGE);
    let combined = &vehicle1 + &vehicle2;
    console.line(&show_vehicle_details(&combined));

    console.line(&format!(
        "First character of brand in vehicle1: {}",
        vehicle1.char_at(0)?
    ));

    vehicle1.set_mileage(&RESET_MILEAGE);
    console.line(&format!(
        "Updated Mileage (via pass by reference): {} km",
        *vehicle1.mileage_mut()
    ));

    console.line(&Vehicle::show_total_vehicles(STOCKED_VEHICLES));
    Ok(())
}
