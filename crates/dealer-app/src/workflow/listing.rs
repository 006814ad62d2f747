//! Listing workflow

use dealer_domain::repository::VehicleRepository;
use dealer_types::Result;

use super::Session;
use crate::presentation::write_listing;

impl<R: VehicleRepository> Session<'_, R> {
    /// Print every vehicle in insertion order; returns how many were listed
    pub fn list_vehicles(&mut self) -> Result<usize> {
        let vehicles = self.repo.list_all();

        if vehicles.is_empty() {
            writeln!(self.out, "There are no vehicles in the dealership.")?;
            return Ok(0);
        }

        write_listing(self.out, &vehicles, self.format)?;
        Ok(vehicles.len())
    }
}
