use super::data::{HistoricalData, MAX_YEAR, MIN_YEAR};
use super::error::ConversionError;

/// Converts decimal-pound amounts between years using the inflation table.
#[derive(Debug, Clone, Copy)]
pub struct InflationConverter<'a> {
    data: &'a HistoricalData,
}

impl<'a> InflationConverter<'a> {
    pub fn new(data: &'a HistoricalData) -> Self {
        InflationConverter { data }
    }

    /// Price level of `year` relative to the base year. Years outside the
    /// table clamp to its nearest edge.
    pub fn multiplier(&self, year: i32) -> f64 {
        self.data.inflation().lookup(year)
    }

    /// Ratio of the source year's price level to the target year's.
    ///
    /// Only `source_year` is range-checked; `target_year` clamps like any other
    /// table lookup.
    pub fn relative_multiplier(&self, source_year: i32, target_year: i32) -> Result<f64, ConversionError> {
        check_year(source_year)?;
        let multiplier = self.multiplier(source_year);
        let target_multiplier = self.multiplier(target_year);
        if target_multiplier == 0.0 {
            return Err(ConversionError::Division { target_year });
        }
        Ok(multiplier / target_multiplier)
    }

    pub fn convert(&self, amount: f64, source_year: i32, target_year: i32) -> Result<f64, ConversionError> {
        let relative = self.relative_multiplier(source_year, target_year)?;
        log::debug!(
            "converting {} from {} to {} (x{})",
            amount,
            source_year,
            target_year,
            relative
        );
        Ok(amount * relative)
    }
}

/// Fails unless `year` lies in the dataset's source-year domain.
pub fn check_year(year: i32) -> Result<(), ConversionError> {
    if (MIN_YEAR..=MAX_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(ConversionError::YearOutOfRange {
            year,
            min: MIN_YEAR,
            max: MAX_YEAR,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::data::BASE_YEAR;
    use crate::engine::table::PiecewiseTable;

    fn data() -> HistoricalData {
        HistoricalData::new().unwrap()
    }

    #[test]
    fn earliest_year_to_base_year() {
        let data = data();
        let converter = InflationConverter::new(&data);
        assert_eq!(converter.convert(1.0, 1270, BASE_YEAR).unwrap(), 1000.0);
    }

    #[test]
    fn same_year_is_identity() {
        let data = data();
        let converter = InflationConverter::new(&data);
        assert_eq!(converter.convert(1.0, 1971, 1971).unwrap(), 1.0);
        for year in [1270, 1333, 1666, 1925, 1971, 2017] {
            assert_eq!(converter.convert(5.525, year, year).unwrap(), 5.525);
        }
    }

    #[test]
    fn interpolated_multiplier() {
        let data = data();
        let converter = InflationConverter::new(&data);
        assert_eq!(converter.multiplier(1925), 30.0);
        assert_eq!(converter.multiplier(1850), 80.0);
    }

    #[test]
    fn relative_to_other_target() {
        let data = data();
        let converter = InflationConverter::new(&data);
        // 1900 (60.0) expressed in 1950 (25.0) money
        assert_eq!(converter.relative_multiplier(1900, 1950).unwrap(), 2.4);
    }

    #[test]
    fn source_year_out_of_range() {
        let data = data();
        let converter = InflationConverter::new(&data);
        assert_eq!(
            converter.convert(1.0, 1269, BASE_YEAR),
            Err(ConversionError::YearOutOfRange {
                year: 1269,
                min: 1270,
                max: 2017
            })
        );
        assert!(converter.convert(1.0, 2018, BASE_YEAR).is_err());
    }

    #[test]
    fn target_year_out_of_range_clamps() {
        let data = data();
        let converter = InflationConverter::new(&data);
        assert_eq!(
            converter.convert(1.0, 1900, 2050).unwrap(),
            converter.convert(1.0, 1900, 2017).unwrap()
        );
        assert_eq!(converter.convert(1.0, 1300, 1000).unwrap(), 0.8);
    }

    #[test]
    fn zero_target_multiplier_is_an_error() {
        let inflation = PiecewiseTable::new([(1270, 1000.0), (2017, 0.0)]).unwrap();
        let data = HistoricalData::from_tables(inflation, Vec::new());
        let converter = InflationConverter::new(&data);
        assert_eq!(
            converter.convert(1.0, 1500, 2017),
            Err(ConversionError::Division { target_year: 2017 })
        );
    }
}
