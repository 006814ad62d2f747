//! Output formatting for vehicle listings

use std::io::Write;

use dealer_types::{OutputFormat, Result, Vehicle};

const SEPARATOR: &str = "--------------------------------------------------------------------";

/// Write the fixed-width column header
pub fn write_header(out: &mut dyn Write) -> Result<()> {
    writeln!(
        out,
        "{:<20}{:<15}{:<15}{:<15}{:<30}",
        "Brand", "Plate", "Price", "Mileage", "Description"
    )?;
    writeln!(out, "{}", SEPARATOR)?;
    Ok(())
}

/// Write one vehicle as a fixed-width row
pub fn write_row(out: &mut dyn Write, vehicle: &Vehicle) -> Result<()> {
    writeln!(
        out,
        "{:<20}{:<15}{:<15}{:<15}{:<30}",
        vehicle.brand, vehicle.plate, vehicle.price, vehicle.mileage, vehicle.description
    )?;
    Ok(())
}

/// Write a non-empty snapshot in the requested format
pub fn write_listing(out: &mut dyn Write, vehicles: &[Vehicle], format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(vehicles)?;
        writeln!(out, "{}", content)?;
        return Ok(());
    }

    writeln!(out, "Vehicles in the dealership:")?;
    write_header(out)?;
    for vehicle in vehicles {
        write_row(out, vehicle)?;
    }
    writeln!(out, "Total vehicles in the dealership: {}", vehicles.len())?;
    Ok(())
}
