//! Static historical datasets.

use super::commodity::Commodity;
use super::error::ConversionError;
use super::table::PiecewiseTable;

/// Year against which inflation multipliers are expressed.
pub const BASE_YEAR: i32 = 2017;
/// Earliest year accepted as a conversion source.
pub const MIN_YEAR: i32 = 1270;
/// Latest year accepted as a conversion source.
pub const MAX_YEAR: i32 = 2017;

/// Approximate price level of each year relative to 2017.
const INFLATION_MULTIPLIERS: &[(i32, f64)] = &[
    (1270, 1000.0),
    (1300, 800.0),
    (1400, 600.0),
    (1500, 400.0),
    (1600, 200.0),
    (1700, 150.0),
    (1750, 120.0),
    (1800, 100.0),
    (1850, 80.0),
    (1900, 60.0),
    (1910, 50.0),
    (1920, 25.0),
    (1930, 35.0),
    (1940, 30.0),
    (1950, 25.0),
    (1960, 20.0),
    (1970, 15.0),
    // decimalisation
    (1971, 14.8),
    (1980, 5.0),
    (1990, 2.5),
    (2000, 1.8),
    (2010, 1.3),
    (2017, 1.0),
];

/// Unit prices in decimal pounds.
fn commodity_prices(commodity: Commodity) -> &'static [(i32, f64)] {
    match commodity {
        Commodity::Horse => &[
            (1300, 1.5),
            (1400, 2.0),
            (1500, 3.0),
            (1600, 4.0),
            (1700, 6.0),
            (1800, 15.0),
            (1850, 20.0),
            (1900, 25.0),
            (1950, 50.0),
        ],
        Commodity::Cow => &[
            (1300, 0.5),
            (1400, 0.75),
            (1500, 1.0),
            (1600, 1.5),
            (1700, 2.0),
            (1800, 8.0),
            (1850, 12.0),
            (1900, 15.0),
            (1950, 30.0),
        ],
        Commodity::Sheep => &[
            (1300, 0.08),
            (1400, 0.1),
            (1500, 0.15),
            (1600, 0.2),
            (1700, 0.3),
            (1800, 1.0),
            (1850, 1.5),
            (1900, 2.0),
            (1950, 4.0),
        ],
        Commodity::Pig => &[
            (1300, 0.05),
            (1400, 0.08),
            (1500, 0.1),
            (1600, 0.15),
            (1700, 0.25),
            (1800, 0.8),
            (1850, 1.2),
            (1900, 1.5),
            (1950, 3.0),
        ],
        Commodity::WheatQuarter => &[
            (1300, 0.3),
            (1400, 0.25),
            (1500, 0.3),
            (1600, 0.4),
            (1700, 0.5),
            (1800, 2.0),
            (1850, 2.5),
            (1900, 1.5),
            (1950, 3.0),
        ],
        Commodity::WoolStone => &[
            (1300, 0.5),
            (1400, 0.4),
            (1500, 0.6),
            (1600, 0.8),
            (1700, 1.0),
            (1800, 2.0),
            (1850, 2.5),
            (1900, 2.0),
            (1950, 4.0),
        ],
        Commodity::BreadLoaf => &[
            (1300, 0.001),
            (1400, 0.002),
            (1500, 0.003),
            (1600, 0.004),
            (1700, 0.008),
            (1800, 0.02),
            (1850, 0.03),
            (1900, 0.025),
            (1950, 0.05),
        ],
        Commodity::AleGallon => &[
            (1300, 0.01),
            (1400, 0.01),
            (1500, 0.015),
            (1600, 0.02),
            (1700, 0.025),
            (1800, 0.05),
            (1850, 0.08),
            (1900, 0.1),
            (1950, 0.2),
        ],
    }
}

/// Read-only datasets shared by every engine component.
///
/// Built once at startup and lent out by reference; nothing mutates it afterwards.
#[derive(Debug, Clone)]
pub struct HistoricalData {
    inflation: PiecewiseTable,
    prices: Vec<(Commodity, PiecewiseTable)>,
}

impl HistoricalData {
    /// Load the built-in datasets.
    pub fn new() -> Result<Self, ConversionError> {
        let inflation = PiecewiseTable::new(INFLATION_MULTIPLIERS.iter().copied())?;
        let prices = Commodity::ALL
            .iter()
            .map(|commodity| {
                let table = PiecewiseTable::new(commodity_prices(*commodity).iter().copied())?;
                Ok((*commodity, table))
            })
            .collect::<Result<Vec<_>, ConversionError>>()?;
        log::debug!(
            "loaded inflation table ({}-{}) and {} commodity price tables",
            inflation.first_year(),
            inflation.last_year(),
            prices.len()
        );
        Ok(HistoricalData { inflation, prices })
    }

    /// Build from explicit tables. Commodities without a table are treated as unknown.
    #[cfg(test)]
    pub fn from_tables(inflation: PiecewiseTable, prices: Vec<(Commodity, PiecewiseTable)>) -> Self {
        HistoricalData { inflation, prices }
    }

    pub fn inflation(&self) -> &PiecewiseTable {
        &self.inflation
    }

    pub fn price_table(&self, commodity: Commodity) -> Option<&PiecewiseTable> {
        self.prices
            .iter()
            .find(|(c, _)| *c == commodity)
            .map(|(_, table)| table)
    }
}
