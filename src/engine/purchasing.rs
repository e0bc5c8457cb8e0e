use super::commodity::Commodity;
use super::data::HistoricalData;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Quantities of each commodity an amount could buy, in commodity declaration order.
///
/// Serializes as a JSON object keyed by display name, keeping that order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PurchasingPower(Vec<(Commodity, f64)>);

impl PurchasingPower {
    #[cfg(test)]
    pub fn get(&self, commodity: Commodity) -> Option<f64> {
        self.0
            .iter()
            .find(|(c, _)| *c == commodity)
            .map(|(_, quantity)| *quantity)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Commodity, f64)> + '_ {
        self.0.iter().copied()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for PurchasingPower {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (commodity, quantity) in &self.0 {
            map.serialize_entry(commodity.display_name(), quantity)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for PurchasingPower {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PurchasingPowerVisitor;

        impl<'de> Visitor<'de> for PurchasingPowerVisitor {
            type Value = PurchasingPower;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of commodity display names to quantities")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::new();
                while let Some((name, quantity)) = access.next_entry::<String, f64>()? {
                    let commodity = Commodity::find_by_display_name(&name).ok_or_else(|| {
                        serde::de::Error::custom(format!("unknown commodity '{}'", name))
                    })?;
                    entries.push((commodity, quantity));
                }
                Ok(PurchasingPower(entries))
            }
        }

        deserializer.deserialize_map(PurchasingPowerVisitor)
    }
}

/// Computes how many units of each commodity an amount buys in a given year.
#[derive(Debug, Clone, Copy)]
pub struct PurchasingPowerCalculator<'a> {
    data: &'a HistoricalData,
}

impl<'a> PurchasingPowerCalculator<'a> {
    pub fn new(data: &'a HistoricalData) -> Self {
        PurchasingPowerCalculator { data }
    }

    /// Unit price of `commodity` in `year`, if the commodity has a price table.
    pub fn price(&self, commodity: Commodity, year: i32) -> Option<f64> {
        self.data
            .price_table(commodity)
            .map(|table| table.lookup(year))
    }

    /// Quantities purchasable with `amount` decimal pounds in `year`.
    ///
    /// `item` restricts the result to the commodity with that internal key. An
    /// unrecognised key yields an empty result. Commodities with no price table
    /// or a zero price are left out.
    pub fn calculate(&self, amount: f64, year: i32, item: Option<&str>) -> PurchasingPower {
        let commodities = match item {
            None => Commodity::ALL.to_vec(),
            Some(key) => match key.parse::<Commodity>() {
                Ok(commodity) => vec![commodity],
                Err(err) => {
                    log::debug!("{}; returning no purchasing power", err);
                    Vec::new()
                }
            },
        };

        let entries = commodities
            .iter()
            .filter_map(|commodity| match self.price(*commodity, year) {
                Some(price) if price != 0.0 => Some((*commodity, amount / price)),
                Some(_) => {
                    log::debug!("skipping {}: zero price in {}", commodity.key(), year);
                    None
                }
                None => {
                    log::debug!("skipping {}: no price data", commodity.key());
                    None
                }
            })
            .collect();
        PurchasingPower(entries)
    }
}
