//! Modify-mileage workflow

use dealer_domain::repository::VehicleRepository;
use dealer_domain::service::check_mileage_increase;
use dealer_types::Result;
use tracing::info;

use super::Session;

impl<R: VehicleRepository> Session<'_, R> {
    /// Set a new odometer reading, which must exceed the current one.
    ///
    /// After an unknown plate or a rejected value the user may retry with a
    /// freshly entered mileage for the same plate. Returns `true` once the
    /// mileage is applied, `false` when the user gives up.
    pub fn modify_mileage(&mut self, plate: &str, mileage: u32) -> Result<bool> {
        let mut mileage = mileage;
        loop {
            if self.apply_mileage(plate, mileage)? {
                info!(plate, mileage, "mileage modified");
                return Ok(true);
            }
            if !self.ask_retry()? {
                info!(plate, "mileage modification abandoned");
                return Ok(false);
            }
            mileage = self.prompt_mileage("Enter the new mileage:")?;
        }
    }

    fn apply_mileage(&mut self, plate: &str, mileage: u32) -> Result<bool> {
        let Some(vehicle) = self.repo.find_by_plate(plate).cloned() else {
            self.report_not_found(plate)?;
            return Ok(false);
        };

        writeln!(self.out, "Vehicle data for license plate {}:", plate)?;
        self.report_row(&vehicle)?;
        writeln!(self.out, "Current mileage: {}", vehicle.mileage)?;
        writeln!(self.out, "New mileage: {}", mileage)?;

        if let Err(e) = check_mileage_increase(vehicle.mileage, mileage) {
            writeln!(self.out, "Error: {}.", e)?;
            return Ok(false);
        }

        match self.repo.update_mileage(plate, mileage) {
            Ok(()) => {
                writeln!(self.out, "Mileage updated successfully.")?;
                Ok(true)
            }
            Err(e) => {
                writeln!(self.out, "Error updating mileage: {}.", e)?;
                Ok(false)
            }
        }
    }
}
