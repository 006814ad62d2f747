//! Vehicle inventory for a single dealership

use dealer_domain::repository::VehicleRepository;
use dealer_types::{InventoryError, Vehicle};
use tracing::{debug, info, warn};

/// Maximum number of vehicles a dealership holds
pub const MAX_VEHICLES: usize = 50;

/// In-memory inventory of vehicles, kept in insertion order
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    vehicles: Vec<Vehicle>,
}

impl Inventory {
    pub fn new() -> Self {
        Self {
            vehicles: Vec::with_capacity(MAX_VEHICLES),
        }
    }

    /// Build an inventory from a list of vehicles, stopping at the first rejection
    pub fn with_vehicles(vehicles: impl IntoIterator<Item = Vehicle>) -> Result<Self, InventoryError> {
        let mut inventory = Self::new();
        for vehicle in vehicles {
            inventory.insert(vehicle)?;
        }
        Ok(inventory)
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    fn position(&self, plate: &str) -> Option<usize> {
        self.vehicles.iter().position(|v| v.plate == plate)
    }
}

impl VehicleRepository for Inventory {
    fn insert(&mut self, vehicle: Vehicle) -> Result<(), InventoryError> {
        if self.vehicles.len() >= MAX_VEHICLES {
            warn!(plate = %vehicle.plate, capacity = MAX_VEHICLES, "inventory full, vehicle rejected");
            return Err(InventoryError::CapacityExceeded {
                capacity: MAX_VEHICLES,
            });
        }
        if self.exists_plate(&vehicle.plate) {
            warn!(plate = %vehicle.plate, "duplicate plate, vehicle rejected");
            return Err(InventoryError::DuplicatePlate(vehicle.plate));
        }

        info!(plate = %vehicle.plate, brand = %vehicle.brand, "vehicle added");
        self.vehicles.push(vehicle);
        Ok(())
    }

    fn find_by_plate(&self, plate: &str) -> Option<&Vehicle> {
        let found = self.vehicles.iter().find(|v| v.plate == plate);
        debug!(plate, found = found.is_some(), "plate lookup");
        found
    }

    fn update_mileage(&mut self, plate: &str, mileage: u32) -> Result<(), InventoryError> {
        let vehicle = self
            .vehicles
            .iter_mut()
            .find(|v| v.plate == plate)
            .ok_or_else(|| InventoryError::NotFound(plate.to_string()))?;

        info!(plate, from = vehicle.mileage, to = mileage, "mileage updated");
        vehicle.mileage = mileage;
        Ok(())
    }

    fn delete(&mut self, plate: &str) -> Result<Vehicle, InventoryError> {
        let index = self
            .position(plate)
            .ok_or_else(|| InventoryError::NotFound(plate.to_string()))?;

        info!(plate, "vehicle removed");
        Ok(self.vehicles.remove(index))
    }

    fn list_all(&self) -> Vec<Vehicle> {
        self.vehicles.clone()
    }

    fn count(&self) -> usize {
        self.vehicles.len()
    }

    fn capacity(&self) -> usize {
        MAX_VEHICLES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toyota() -> Vehicle {
        Vehicle::new("Toyota", "1234ABC", 20000.0, 10000).with_description("Corolla 1.8 hybrid")
    }

    fn numbered(n: usize) -> Vehicle {
        Vehicle::new("Seat", format!("{:04}XYZ", n), 9000.0, 50000)
    }

    #[test]
    fn test_insert_and_find() {
        let mut inventory = Inventory::new();
        inventory.insert(toyota()).unwrap();

        assert_eq!(inventory.find_by_plate("1234ABC"), Some(&toyota()));
        assert!(inventory.exists_plate("1234ABC"));
        assert_eq!(inventory.count(), 1);
    }

    #[test]
    fn test_find_requires_exact_plate() {
        let inventory = Inventory::with_vehicles([toyota()]).unwrap();
        assert!(inventory.find_by_plate("1234abc").is_none());
        assert!(inventory.find_by_plate("1234ABC ").is_none());
        assert!(!inventory.exists_plate("0000AAA"));
    }

    #[test]
    fn test_capacity_limit() {
        let mut inventory = Inventory::new();
        for n in 0..MAX_VEHICLES {
            inventory.insert(numbered(n)).unwrap();
        }
        let before = inventory.list_all();

        let result = inventory.insert(numbered(MAX_VEHICLES));
        assert_eq!(
            result,
            Err(InventoryError::CapacityExceeded {
                capacity: MAX_VEHICLES
            })
        );
        assert_eq!(inventory.count(), MAX_VEHICLES);
        assert_eq!(inventory.list_all(), before);
    }

    #[test]
    fn test_capacity_checked_before_duplicate() {
        let mut inventory = Inventory::new();
        for n in 0..MAX_VEHICLES {
            inventory.insert(numbered(n)).unwrap();
        }
        assert!(matches!(
            inventory.insert(numbered(0)),
            Err(InventoryError::CapacityExceeded { .. })
        ));
    }

    #[test]
    fn test_duplicate_plate_keeps_first() {
        let mut inventory = Inventory::new();
        inventory.insert(toyota()).unwrap();

        let impostor = Vehicle::new("Ford", "1234ABC", 1.0, 1);
        assert_eq!(
            inventory.insert(impostor),
            Err(InventoryError::DuplicatePlate("1234ABC".to_string()))
        );
        assert_eq!(inventory.count(), 1);
        assert_eq!(inventory.find_by_plate("1234ABC").unwrap().brand, "Toyota");
    }

    #[test]
    fn test_update_mileage_is_unconditional() {
        let mut inventory = Inventory::with_vehicles([toyota()]).unwrap();

        inventory.update_mileage("1234ABC", 12000).unwrap();
        assert_eq!(inventory.find_by_plate("1234ABC").unwrap().mileage, 12000);

        inventory.update_mileage("1234ABC", 5000).unwrap();
        assert_eq!(inventory.find_by_plate("1234ABC").unwrap().mileage, 5000);
    }

    #[test]
    fn test_update_mileage_not_found() {
        let mut inventory = Inventory::new();
        assert_eq!(
            inventory.update_mileage("ZZZZ", 100),
            Err(InventoryError::NotFound("ZZZZ".to_string()))
        );
    }

    #[test]
    fn test_delete() {
        let mut inventory = Inventory::with_vehicles([toyota(), numbered(1)]).unwrap();

        let removed = inventory.delete("1234ABC").unwrap();
        assert_eq!(removed, toyota());
        assert!(inventory.find_by_plate("1234ABC").is_none());
        assert_eq!(inventory.count(), 1);

        assert_eq!(
            inventory.delete("1234ABC"),
            Err(InventoryError::NotFound("1234ABC".to_string()))
        );
    }

    #[test]
    fn test_list_all_preserves_insertion_order() {
        let inventory = Inventory::with_vehicles([numbered(3), toyota(), numbered(1)]).unwrap();
        let plates: Vec<_> = inventory.list_all().into_iter().map(|v| v.plate).collect();
        assert_eq!(plates, vec!["0003XYZ", "1234ABC", "0001XYZ"]);
    }

    #[test]
    fn test_list_all_is_a_snapshot() {
        let mut inventory = Inventory::with_vehicles([toyota(), numbered(1)]).unwrap();
        let snapshot = inventory.list_all();

        inventory.update_mileage("1234ABC", 99999).unwrap();
        inventory.delete("0001XYZ").unwrap();
        inventory.insert(numbered(2)).unwrap();

        assert_eq!(snapshot, vec![toyota(), numbered(1)]);
    }

    #[test]
    fn test_delete_then_reinsert_keeps_order_at_end() {
        let mut inventory = Inventory::with_vehicles([toyota(), numbered(1)]).unwrap();
        inventory.delete("1234ABC").unwrap();
        inventory.insert(toyota()).unwrap();

        let plates: Vec<_> = inventory.list_all().into_iter().map(|v| v.plate).collect();
        assert_eq!(plates, vec!["0001XYZ", "1234ABC"]);
    }
}
