//! Vehicles built on top of [`Vehicle`](crate::vehicle::Vehicle).
//!
//! Each derived entity owns its base part and delegates to it. Display
//! output always starts with the base part's lines.

mod car;
mod carrier;
mod electric;
mod hybrid;
mod listing;

pub use car::{Car, DEFAULT_CAR_TYPE};
pub use carrier::LoadCarrier;
pub use electric::{ELECTRIC_CAR_TYPE, ElectricCar};
pub use hybrid::{DEFAULT_FUEL_TYPE, HybridVehicle};
pub use listing::Listing;
