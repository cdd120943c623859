use crate::fleet::{Car, ElectricCar, HybridVehicle};
use crate::vehicle::{DisplayInfo, Vehicle};

/// Anything the showroom can put on display.
#[derive(Debug, Clone)]
pub enum Listing {
    Vehicle(Vehicle),
    Car(Car),
    Electric(ElectricCar),
    Hybrid(HybridVehicle),
}

impl Listing {
    /// The base vehicle part of any listing.
    pub fn vehicle(&self) -> &Vehicle {
        match self {
            Listing::Vehicle(vehicle) => vehicle,
            Listing::Car(car) => car.vehicle(),
            Listing::Electric(ecar) => ecar.vehicle(),
            Listing::Hybrid(hybrid) => hybrid.vehicle(),
        }
    }

    pub fn vehicle_mut(&mut self) -> &mut Vehicle {
        match self {
            Listing::Vehicle(vehicle) => vehicle,
            Listing::Car(car) => car.vehicle_mut(),
            Listing::Electric(ecar) => ecar.vehicle_mut(),
            Listing::Hybrid(hybrid) => hybrid.vehicle_mut(),
        }
    }
}

impl DisplayInfo for Listing {
    fn info_lines(&self) -> Vec<String> {
        match self {
            Listing::Vehicle(vehicle) => vehicle.info_lines(),
            Listing::Car(car) => car.info_lines(),
            Listing::Electric(ecar) => ecar.info_lines(),
            Listing::Hybrid(hybrid) => hybrid.info_lines(),
        }
    }
}

impl From<Vehicle> for Listing {
    fn from(vehicle: Vehicle) -> Self {
        Listing::Vehicle(vehicle)
    }
}

impl From<Car> for Listing {
    fn from(car: Car) -> Self {
        Listing::Car(car)
    }
}

impl From<ElectricCar> for Listing {
    fn from(ecar: ElectricCar) -> Self {
        Listing::Electric(ecar)
    }
}

impl From<HybridVehicle> for Listing {
    fn from(hybrid: HybridVehicle) -> Self {
        Listing::Hybrid(hybrid)
    }
}
