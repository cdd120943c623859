//! # Vehicle
//!
//! The base entity of the dealership. A vehicle owns its brand, price and a
//! heap-allocated mileage cell. Copies get an independent cell, and every
//! construction and destruction is written to the [`lifecycle`] journal.
//!
//! Other code never touches the fields directly:
//! * [`Vehicle::view`] grants read access (used by [`show_vehicle_details`]).
//! * [`Vehicle::mileage_mut`] hands out a live handle to the mileage cell.

use std::ops::{Add, Deref, DerefMut};

use dealer_common::error::DealerError;

use crate::console::Console;
use crate::lifecycle::{self, LifecycleKind};

pub const UNKNOWN_BRAND: &str = "Unknown";
pub const MILEAGE_INCREMENTED: &str = "Mileage incremented by 1";

/// Overridable display. Derived entities start from their base part's lines
/// and append their own.
pub trait DisplayInfo {
    fn info_lines(&self) -> Vec<String>;
}

#[derive(Debug)]
pub struct Vehicle {
    brand: String,
    price: i64,
    mileage: Box<i64>,
}

impl Vehicle {
    /// Creates a vehicle with zero mileage.
    pub fn new(brand: impl Into<String>, price: i64) -> Self {
        Self::with_mileage(brand, price, 0)
    }

    pub fn with_mileage(brand: impl Into<String>, price: i64, mileage: i64) -> Self {
        Self::construct(brand.into(), price, mileage, LifecycleKind::Constructed)
    }

    fn construct(brand: String, price: i64, mileage: i64, kind: LifecycleKind) -> Self {
        let vehicle = Self {
            brand,
            price,
            mileage: Box::new(mileage),
        };
        lifecycle::record(kind, &vehicle.brand);
        vehicle
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn price(&self) -> i64 {
        self.price
    }

    pub fn mileage(&self) -> i64 {
        *self.mileage
    }

    /// Adds one to the mileage in place and reports it on `console`.
    ///
    /// Saturates at `i64::MAX`.
    pub fn increment(&mut self, console: &mut impl Console) {
        *self.mileage = self.mileage.saturating_add(1);
        console.line(MILEAGE_INCREMENTED);
    }

    /// Builds a new vehicle out of both operands. Neither operand changes.
    ///
    /// Price and mileage sums saturate at the `i64` bounds.
    pub fn combine(&self, other: &Vehicle) -> Vehicle {
        Vehicle::with_mileage(
            format!("{} & {}", self.brand, other.brand),
            self.price.saturating_add(other.price),
            self.mileage.saturating_add(*other.mileage),
        )
    }

    /// Returns the character at `index` of the brand.
    pub fn char_at(&self, index: usize) -> Result<char, DealerError> {
        self.brand
            .chars()
            .nth(index)
            .ok_or_else(|| DealerError::IndexOutOfRange {
                index,
                len: self.brand.chars().count(),
            })
    }

    pub fn set_mileage(&mut self, value: &i64) {
        *self.mileage = *value;
    }

    /// Live handle to the mileage cell. Writes through it land in this vehicle.
    pub fn mileage_mut(&mut self) -> MileageHandle<'_> {
        MileageHandle {
            cell: &mut self.mileage,
        }
    }

    pub fn view(&self) -> VehicleView<'_> {
        VehicleView { vehicle: self }
    }

    pub fn show_total_vehicles(count: usize) -> String {
        format!("Total vehicles available: {count}")
    }
}

impl Default for Vehicle {
    fn default() -> Self {
        Self::construct(
            UNKNOWN_BRAND.to_string(),
            0,
            0,
            LifecycleKind::DefaultConstructed,
        )
    }
}

impl Clone for Vehicle {
    fn clone(&self) -> Self {
        Self::construct(
            self.brand.clone(),
            self.price,
            *self.mileage,
            LifecycleKind::Copied,
        )
    }
}

impl Drop for Vehicle {
    fn drop(&mut self) {
        lifecycle::record(LifecycleKind::Destroyed, &self.brand);
    }
}

impl Add for &Vehicle {
    type Output = Vehicle;

    fn add(self, other: &Vehicle) -> Vehicle {
        self.combine(other)
    }
}

impl DisplayInfo for Vehicle {
    fn info_lines(&self) -> Vec<String> {
        vec![format!(
            "Vehicle Brand: {}, Price: ${}, Mileage: {}",
            self.brand, self.price, self.mileage
        )]
    }
}

pub struct MileageHandle<'a> {
    cell: &'a mut i64,
}

impl MileageHandle<'_> {
    pub fn get(&self) -> i64 {
        *self.cell
    }

    pub fn set(&mut self, value: i64) {
        *self.cell = value;
    }
}

impl Deref for MileageHandle<'_> {
    type Target = i64;

    fn deref(&self) -> &i64 {
        &*self.cell
    }
}

impl DerefMut for MileageHandle<'_> {
    fn deref_mut(&mut self) -> &mut i64 {
        &mut *self.cell
    }
}

/// Read-only access to every field of a [`Vehicle`].
#[derive(Clone, Copy)]
pub struct VehicleView<'a> {
    vehicle: &'a Vehicle,
}

impl<'a> VehicleView<'a> {
    pub fn brand(&self) -> &'a str {
        &self.vehicle.brand
    }

    pub fn price(&self) -> i64 {
        self.vehicle.price
    }

    pub fn mileage(&self) -> i64 {
        *self.vehicle.mileage
    }
}

pub fn show_vehicle_details(vehicle: &Vehicle) -> String {
    let view = vehicle.view();
    format!(
        "Brand: {}, Price: ${}, Mileage: {} km",
        view.brand(),
        view.price(),
        view.mileage()
    )
}
