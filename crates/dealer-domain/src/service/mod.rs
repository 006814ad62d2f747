//! Domain services

pub mod input_rules;
pub mod mileage_rule;

pub use input_rules::{
    is_affirmative, parse_non_negative_integer, parse_positive_integer, parse_price, require_non_empty,
};
pub use mileage_rule::check_mileage_increase;
