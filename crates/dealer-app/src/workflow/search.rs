//! Search and show-vehicle workflows

use dealer_domain::repository::VehicleRepository;
use dealer_types::{Result, Vehicle};

use super::Session;

impl<R: VehicleRepository> Session<'_, R> {
    /// Look a plate up and print the vehicle, offering to search again
    /// with another plate until one matches or the user declines.
    pub fn search(&mut self, plate: &str) -> Result<Option<Vehicle>> {
        if let Some(vehicle) = self.repo.find_by_plate(plate).cloned() {
            self.report_vehicle(plate, &vehicle)?;
            return Ok(Some(vehicle));
        }

        self.report_not_found(plate)?;
        self.retry_lookup()
    }

    /// Print the full record for a plate, without retry
    pub fn show_vehicle(&mut self, plate: &str) -> Result<Option<Vehicle>> {
        match self.repo.find_by_plate(plate).cloned() {
            Some(vehicle) => {
                writeln!(self.out, "Full vehicle record for license plate {}:", plate)?;
                writeln!(self.out, "{}", vehicle)?;
                Ok(Some(vehicle))
            }
            None => {
                self.report_not_found(plate)?;
                Ok(None)
            }
        }
    }
}
