pub mod commodity;
pub mod convert;
pub mod currency;
pub mod data;
pub mod error;
pub mod inflation;
pub mod purchasing;
pub mod table;

// Flat public surface for the conversion engine.
pub use commodity::Commodity;
pub use convert::{ConversionResult, Converter};
pub use currency::CurrencyAmount;
pub use data::{HistoricalData, BASE_YEAR};
pub use error::ConversionError;
pub use inflation::{check_year, InflationConverter};
pub use purchasing::{PurchasingPower, PurchasingPowerCalculator};
