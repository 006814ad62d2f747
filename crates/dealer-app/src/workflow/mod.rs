//! Interactive workflows around the vehicle repository
//!
//! Every failure a workflow meets (unknown plate, rejected mileage, bad
//! input format) is reported to the user and either offers a retry or ends
//! the workflow. Only I/O errors on the collaborators are returned as `Err`.

mod delete;
mod listing;
mod mileage;
mod register;
mod search;

pub use delete::DeleteOutcome;

use std::io::Write;

use dealer_domain::repository::VehicleRepository;
use dealer_domain::service::{is_affirmative, parse_positive_integer};
use dealer_types::{OutputFormat, Result, ValidationError, Vehicle};

use crate::io::{Confirm, LineInput};
use crate::presentation::write_row;

const RETRY_QUESTION: &str = "Do you want to try again? (yes/no)";

/// One user's interactive session over a repository
pub struct Session<'a, R: VehicleRepository> {
    repo: &'a mut R,
    input: &'a mut dyn LineInput,
    confirm: &'a mut dyn Confirm,
    out: &'a mut dyn Write,
    format: OutputFormat,
}

impl<'a, R: VehicleRepository> Session<'a, R> {
    pub fn new(
        repo: &'a mut R,
        input: &'a mut dyn LineInput,
        confirm: &'a mut dyn Confirm,
        out: &'a mut dyn Write,
    ) -> Self {
        Self {
            repo,
            input,
            confirm,
            out,
            format: OutputFormat::default(),
        }
    }

    /// Listing format used by [`Session::list_vehicles`]
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn repository(&self) -> &R {
        &*self.repo
    }

    /// Read a line and trim it
    pub fn prompt(&mut self, prompt: &str) -> Result<String> {
        Ok(self.input.read_line(prompt)?.trim().to_string())
    }

    /// Prompt until `parse` accepts the input, reporting each rejection
    pub fn prompt_valid<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> std::result::Result<T, ValidationError>,
    ) -> Result<T> {
        loop {
            let line = self.input.read_line(prompt)?;
            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(e) => writeln!(self.out, "Error: {}.", e)?,
            }
        }
    }

    /// Prompt until a positive integer mileage is entered
    pub fn prompt_mileage(&mut self, prompt: &str) -> Result<u32> {
        self.prompt_valid(prompt, parse_positive_integer)
    }

    fn ask_retry(&mut self) -> Result<bool> {
        writeln!(self.out, "{}", RETRY_QUESTION)?;
        let answer = self.input.read_line("")?;
        Ok(is_affirmative(&answer))
    }

    fn report_not_found(&mut self, plate: &str) -> Result<()> {
        writeln!(self.out, "No vehicle found with license plate {}.", plate)?;
        Ok(())
    }

    fn report_vehicle(&mut self, plate: &str, vehicle: &Vehicle) -> Result<()> {
        writeln!(self.out, "Vehicle data for license plate {}:", plate)?;
        writeln!(self.out, "{}", vehicle)?;
        Ok(())
    }

    fn report_row(&mut self, vehicle: &Vehicle) -> Result<()> {
        write_row(self.out, vehicle)
    }

    /// Offer retries, prompting for a new plate each time, until a vehicle
    /// is found or the user declines. Only looks vehicles up.
    fn retry_lookup(&mut self) -> Result<Option<Vehicle>> {
        while self.ask_retry()? {
            let plate = self.prompt("Enter the license plate of the vehicle to search:")?;
            match self.repo.find_by_plate(&plate).cloned() {
                Some(vehicle) => {
                    self.report_vehicle(&plate, &vehicle)?;
                    return Ok(Some(vehicle));
                }
                None => self.report_not_found(&plate)?,
            }
        }
        Ok(None)
    }
}
