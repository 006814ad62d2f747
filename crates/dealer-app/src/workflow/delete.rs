//! Confirm-and-delete workflow

use dealer_domain::repository::VehicleRepository;
use dealer_types::{Result, Vehicle};
use tracing::info;

use super::Session;
use crate::io::Answer;

/// How a delete workflow ended
#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    /// Confirmed and removed
    Deleted(Vehicle),
    /// The user did not confirm
    Cancelled,
    /// Found by a retried search; nothing was deleted
    Located(Vehicle),
    /// No vehicle found and the user stopped retrying
    NotFound,
}

impl<R: VehicleRepository> Session<'_, R> {
    /// Delete a vehicle after explicit confirmation.
    ///
    /// When the plate is unknown the user may search again, but a vehicle
    /// found that way is only shown; deleting it takes another invocation.
    pub fn delete(&mut self, plate: &str) -> Result<DeleteOutcome> {
        if !self.repo.exists_plate(plate) {
            self.report_not_found(plate)?;
            return Ok(match self.retry_lookup()? {
                Some(vehicle) => DeleteOutcome::Located(vehicle),
                None => DeleteOutcome::NotFound,
            });
        }

        let question = format!(
            "Are you sure you want to delete the vehicle with license plate {}?",
            plate
        );
        if self.confirm.confirm(&question)? != Answer::Yes {
            writeln!(self.out, "Delete operation cancelled.")?;
            info!(plate, "delete cancelled");
            return Ok(DeleteOutcome::Cancelled);
        }

        match self.repo.delete(plate) {
            Ok(vehicle) => {
                writeln!(
                    self.out,
                    "The vehicle with license plate {} has been deleted.",
                    plate
                )?;
                Ok(DeleteOutcome::Deleted(vehicle))
            }
            Err(e) => {
                writeln!(self.out, "Error deleting vehicle: {}.", e)?;
                Ok(DeleteOutcome::NotFound)
            }
        }
    }
}
