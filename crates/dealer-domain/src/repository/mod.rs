//! Repository trait definitions for vehicle storage

use dealer_types::{InventoryError, Vehicle};

/// Repository for the vehicles of a single dealership
///
/// Plates are unique and insertion order is preserved.
pub trait VehicleRepository {
    /// Append a vehicle, rejecting it when the inventory is full or the plate is taken
    fn insert(&mut self, vehicle: Vehicle) -> Result<(), InventoryError>;

    /// Find a vehicle by exact license plate
    fn find_by_plate(&self, plate: &str) -> Option<&Vehicle>;

    /// Whether a vehicle with this plate is stored
    fn exists_plate(&self, plate: &str) -> bool {
        self.find_by_plate(plate).is_some()
    }

    /// Overwrite the mileage of a stored vehicle
    ///
    /// No ordering rule is applied here; see [`crate::service::check_mileage_increase`].
    fn update_mileage(&mut self, plate: &str, mileage: u32) -> Result<(), InventoryError>;

    /// Remove a vehicle and hand it back
    fn delete(&mut self, plate: &str) -> Result<Vehicle, InventoryError>;

    /// Snapshot of every vehicle in insertion order
    fn list_all(&self) -> Vec<Vehicle>;

    /// Number of stored vehicles
    fn count(&self) -> usize;

    /// Maximum number of vehicles
    fn capacity(&self) -> usize;
}
