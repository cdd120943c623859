use crate::fleet::Car;
use crate::vehicle::{DisplayInfo, Vehicle};

pub const ELECTRIC_CAR_TYPE: &str = "Electric";

#[derive(Debug, Clone)]
pub struct ElectricCar {
    car: Car,
    /// kWh
    battery_capacity: i64,
}

impl ElectricCar {
    pub fn new(brand: impl Into<String>, price: i64, mileage: i64, battery_capacity: i64) -> Self {
        Self::with_type(brand, price, mileage, battery_capacity, ELECTRIC_CAR_TYPE)
    }

    pub fn with_type(
        brand: impl Into<String>,
        price: i64,
        mileage: i64,
        battery_capacity: i64,
        car_type: impl Into<String>,
    ) -> Self {
        Self {
            car: Car::with_type(brand, price, mileage, car_type),
            battery_capacity,
        }
    }

    pub fn battery_capacity(&self) -> i64 {
        self.battery_capacity
    }

    pub fn car(&self) -> &Car {
        &self.car
    }

    pub fn vehicle(&self) -> &Vehicle {
        self.car.vehicle()
    }

    pub fn vehicle_mut(&mut self) -> &mut Vehicle {
        self.car.vehicle_mut()
    }
}

impl DisplayInfo for ElectricCar {
    fn info_lines(&self) -> Vec<String> {
        let mut lines = self.car.info_lines();
        lines.push(format!("Battery Capacity: {} kWh", self.battery_capacity));
        lines
    }
}
