//! Mileage update rule

use dealer_types::ValidationError;

/// A new odometer reading must be strictly greater than the current one
pub fn check_mileage_increase(current: u32, proposed: u32) -> Result<(), ValidationError> {
    if proposed > current {
        Ok(())
    } else {
        Err(ValidationError::MileageNotIncreased { current, proposed })
    }
}
