//! Error types for the dealership inventory

use thiserror::Error;

/// Rejections raised by the inventory repository
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    #[error("The dealership has reached its limit of {capacity} vehicles")]
    CapacityExceeded { capacity: usize },

    #[error("License plate {0} already exists in the dealership")]
    DuplicatePlate(String),

    #[error("No vehicle found with license plate {0}")]
    NotFound(String),
}

/// Input and business-rule validation failures
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("New mileage ({proposed}) must be greater than the current mileage ({current})")]
    MileageNotIncreased { current: u32, proposed: u32 },

    #[error("Mileage must be a positive integer, got {0:?}")]
    NotPositiveInteger(String),

    #[error("Mileage must be a non-negative integer, got {0:?}")]
    NotNonNegativeInteger(String),

    #[error("Price must be a non-negative number, got {0:?}")]
    InvalidPrice(String),

    #[error("{0} must not be empty")]
    EmptyField(&'static str),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Inventory error: {0}")]
    Inventory(#[from] InventoryError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

pub type Result<T> = std::result::Result<T, Error>;
