//! The dealership object model and the scripted showroom walkthrough.

pub mod console;
pub mod fleet;
pub mod lifecycle;
pub mod registry;
pub mod showroom;
pub mod vehicle;
