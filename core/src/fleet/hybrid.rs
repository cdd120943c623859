use crate::fleet::LoadCarrier;
use crate::vehicle::{DisplayInfo, Vehicle};

pub const DEFAULT_FUEL_TYPE: &str = "Hybrid";

/// A vehicle part and a load-carrier part side by side. The two parts are
/// initialized independently and share nothing.
#[derive(Debug, Clone)]
pub struct HybridVehicle {
    vehicle: Vehicle,
    carrier: LoadCarrier,
    fuel_type: String,
}

impl HybridVehicle {
    pub fn new(brand: impl Into<String>, price: i64, mileage: i64, load_capacity: i64) -> Self {
        Self::with_fuel(brand, price, mileage, load_capacity, DEFAULT_FUEL_TYPE)
    }

    pub fn with_fuel(
        brand: impl Into<String>,
        price: i64,
        mileage: i64,
        load_capacity: i64,
        fuel_type: impl Into<String>,
    ) -> Self {
        Self {
            vehicle: Vehicle::with_mileage(brand, price, mileage),
            carrier: LoadCarrier::new(load_capacity),
            fuel_type: fuel_type.into(),
        }
    }

    pub fn fuel_type(&self) -> &str {
        &self.fuel_type
    }

    pub fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    pub fn vehicle_mut(&mut self) -> &mut Vehicle {
        &mut self.vehicle
    }

    pub fn carrier(&self) -> &LoadCarrier {
        &self.carrier
    }

    pub fn show_load_capacity(&self) -> String {
        self.carrier.show_load_capacity()
    }
}

impl DisplayInfo for HybridVehicle {
    fn info_lines(&self) -> Vec<String> {
        let mut lines = self.vehicle.info_lines();
        lines.push(format!("Fuel Type: {}", self.fuel_type));
        lines.push(self.show_load_capacity());
        lines
    }
}
