//! Demonstration vehicles

use dealer_types::Vehicle;

/// A handful of vehicles for trying the application out
pub fn sample_vehicles() -> Vec<Vehicle> {
    vec![
        Vehicle::new("Toyota", "1234ABC", 20000.0, 10000).with_description("Corolla 1.8 hybrid"),
        Vehicle::new("Seat", "5678DEF", 12500.0, 45000).with_description("Ibiza, one owner"),
        Vehicle::new("Renault", "9012GHI", 8900.0, 98000).with_description("Clio diesel"),
        Vehicle::new("Volkswagen", "3456JKL", 31000.0, 2500).with_description("ID.3 demo unit"),
    ]
}
