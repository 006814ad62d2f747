//! Domain layer - repository trait and business rules

pub mod repository;
pub mod service;
