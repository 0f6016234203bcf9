use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum NozzleError {
    #[error("Invalid input: {field} must be {requirement}, got {value}")]
    InvalidInput {
        field: &'static str,
        requirement: &'static str,
        value: f64,
    },
}
