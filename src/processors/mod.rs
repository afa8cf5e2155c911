pub mod data_validator;
pub mod rules;
pub mod unit_converter;

pub use data_validator::DataValidator;
pub use rules::{Dimension, RuleSet, DEFAULT_RULES};
pub use unit_converter::{ConversionSummary, UnitConverter};
