//! Vehicle record type

use serde::{Deserialize, Serialize};

/// A vehicle held in the dealership inventory
///
/// The license plate identifies the vehicle; mileage is the only field
/// changed after registration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Manufacturer (e.g., "Toyota", "Seat")
    pub brand: String,
    /// License plate, unique within an inventory
    pub plate: String,
    /// Asking price
    pub price: f64,
    /// Odometer reading in kilometres
    pub mileage: u32,
    /// Free-form description
    #[serde(default)]
    pub description: String,
}

impl Vehicle {
    pub fn new(brand: impl Into<String>, plate: impl Into<String>, price: f64, mileage: u32) -> Self {
        Self {
            brand: brand.into(),
            plate: plate.into(),
            price,
            mileage,
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

impl std::fmt::Display for Vehicle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Vehicle {{ brand: {}, plate: {}, price: {}, mileage: {} km, description: {} }}",
            self.brand, self.plate, self.price, self.mileage, self.description
        )
    }
}
