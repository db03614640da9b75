use thiserror::Error;

pub type ClResult<T> = Result<T, ClError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Non-positive numeric value for {what}: {value}")]
    NonPositive { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Unknown {what}: '{name}'")]
    UnknownName { what: &'static str, name: String },
}
