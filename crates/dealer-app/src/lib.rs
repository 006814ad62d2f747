//! Application layer - config, presentation, interactive workflows

pub mod config;
pub mod io;
pub mod presentation;
pub mod workflow;

pub use workflow::{DeleteOutcome, Session};
