//! Register-vehicle workflow

use dealer_domain::repository::VehicleRepository;
use dealer_domain::service::{parse_non_negative_integer, parse_price, require_non_empty};
use dealer_types::{Result, Vehicle};

use super::Session;

impl<R: VehicleRepository> Session<'_, R> {
    /// Prompt for a new vehicle's fields and add it to the inventory.
    ///
    /// Badly formatted fields are asked again; a full inventory or a taken
    /// plate is reported and ends the workflow with `false`.
    pub fn register_vehicle(&mut self) -> Result<bool> {
        let brand = self.prompt_valid("Brand:", |s| require_non_empty("Brand", s))?;
        let plate = self.prompt_valid("License plate:", |s| require_non_empty("License plate", s))?;
        let price = self.prompt_valid("Price:", parse_price)?;
        let mileage = self.prompt_valid("Mileage:", parse_non_negative_integer)?;
        let description = self.prompt("Description:")?;

        let vehicle = Vehicle::new(brand, plate, price, mileage).with_description(description);
        let summary = vehicle.to_string();

        match self.repo.insert(vehicle) {
            Ok(()) => {
                writeln!(self.out, "{}", summary)?;
                writeln!(self.out, "Vehicle added successfully.")?;
                Ok(true)
            }
            Err(e) => {
                writeln!(self.out, "Error: {}.", e)?;
                Ok(false)
            }
        }
    }
}
