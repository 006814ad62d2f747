//! In-memory store for dealership vehicles

pub mod inventory;
pub mod sample;

pub use inventory::{Inventory, MAX_VEHICLES};
pub use sample::sample_vehicles;
