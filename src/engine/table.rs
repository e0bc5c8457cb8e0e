use super::error::ConversionError;

/// Sparse year-indexed dataset answered by exact match, linear interpolation
/// between the bracketing known years, or flat extrapolation past either edge.
#[derive(Debug, Clone, PartialEq)]
pub struct PiecewiseTable {
    /// Known points, sorted by year with no duplicates.
    points: Vec<(i32, f64)>,
}

impl PiecewiseTable {
    /// Build a table from `(year, value)` points in any order.
    ///
    /// Fails if no points are given or if a year appears twice.
    pub fn new<I>(points: I) -> Result<Self, ConversionError>
    where
        I: IntoIterator<Item = (i32, f64)>,
    {
        let mut points: Vec<_> = points.into_iter().collect();
        if points.is_empty() {
            return Err(ConversionError::Configuration(
                "table must contain at least one entry".to_string(),
            ));
        }
        points.sort_by_key(|(year, _)| *year);
        if let Some(pair) = points.windows(2).find(|pair| pair[0].0 == pair[1].0) {
            return Err(ConversionError::Configuration(format!(
                "duplicate entry for year {}",
                pair[0].0
            )));
        }
        Ok(PiecewiseTable { points })
    }

    pub fn first_year(&self) -> i32 {
        self.points[0].0
    }

    pub fn last_year(&self) -> i32 {
        self.points[self.points.len() - 1].0
    }

    #[cfg(test)]
    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        self.points.iter().map(|(year, _)| *year)
    }

    /// Value for `year`.
    pub fn lookup(&self, year: i32) -> f64 {
        match self.points.binary_search_by_key(&year, |(y, _)| *y) {
            Ok(index) => self.points[index].1,
            Err(0) => {
                log::trace!("year {} before table start, clamping to {}", year, self.first_year());
                self.points[0].1
            }
            Err(index) if index == self.points.len() => {
                log::trace!("year {} after table end, clamping to {}", year, self.last_year());
                self.points[index - 1].1
            }
            Err(index) => {
                let (lower_year, lower_value) = self.points[index - 1];
                let (upper_year, upper_value) = self.points[index];
                let ratio = f64::from(year - lower_year) / f64::from(upper_year - lower_year);
                log::trace!(
                    "interpolating year {} between {} and {} (ratio {:.3})",
                    year,
                    lower_year,
                    upper_year,
                    ratio
                );
                lower_value + ratio * (upper_value - lower_value)
            }
        }
    }
}
