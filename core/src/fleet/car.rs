use crate::vehicle::{DisplayInfo, Vehicle};

pub const DEFAULT_CAR_TYPE: &str = "Sedan";

#[derive(Debug, Clone)]
pub struct Car {
    vehicle: Vehicle,
    car_type: String,
}

impl Car {
    pub fn new(brand: impl Into<String>, price: i64, mileage: i64) -> Self {
        Self::with_type(brand, price, mileage, DEFAULT_CAR_TYPE)
    }

    pub fn with_type(
        brand: impl Into<String>,
        price: i64,
        mileage: i64,
        car_type: impl Into<String>,
    ) -> Self {
        Self {
            vehicle: Vehicle::with_mileage(brand, price, mileage),
            car_type: car_type.into(),
        }
    }

    pub fn car_type(&self) -> &str {
        &self.car_type
    }

    pub fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    pub fn vehicle_mut(&mut self) -> &mut Vehicle {
        &mut self.vehicle
    }
}

impl DisplayInfo for Car {
    fn info_lines(&self) -> Vec<String> {
        let mut lines = self.vehicle.info_lines();
        lines.push(format!("Car Type: {}", self.car_type));
        lines
    }
}
