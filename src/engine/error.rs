/// Errors raised by the conversion engine.
#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum ConversionError {
    #[error("{0}")]
    InvalidAmount(String),
    #[error("Year must be between {min} and {max}")]
    YearOutOfRange { year: i32, min: i32, max: i32 },
    #[error("Item '{0}' not found in historical prices")]
    UnknownCommodity(String),
    #[error("invalid table configuration: {0}")]
    Configuration(String),
    #[error("cannot convert to {target_year}: inflation multiplier is zero")]
    Division { target_year: i32 },
}
