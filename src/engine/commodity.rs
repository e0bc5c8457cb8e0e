use super::error::ConversionError;
use std::fmt;
use std::str::FromStr;
use yeolde_derive::Commodity;

/// Historical goods used to express purchasing power, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Commodity)]
pub enum Commodity {
    /// Working or riding horse
    #[commodity(key = "horse", display = "horses", icon = "icons/horse.png")]
    Horse,
    /// Dairy cow
    #[commodity(key = "cow", display = "cows", icon = "icons/cow.png")]
    Cow,
    /// Sheep
    #[commodity(key = "sheep", display = "sheep", icon = "icons/sheep.png")]
    Sheep,
    /// Pig
    #[commodity(key = "pig", display = "pigs", icon = "icons/pig.png")]
    Pig,
    /// Quarter of wheat (8 bushels)
    #[commodity(key = "wheat_quarter", display = "quarters_of_wheat", icon = "icons/wheat.png")]
    WheatQuarter,
    /// Stone of wool (14 lb)
    #[commodity(key = "wool_stone", display = "stones_of_wool", icon = "icons/wool.png")]
    WoolStone,
    /// Loaf of bread
    #[commodity(key = "bread_loaf", display = "loaves_of_bread", icon = "icons/bread.png")]
    BreadLoaf,
    /// Gallon of ale
    #[commodity(key = "ale_gallon", display = "gallons_of_ale", icon = "icons/ale.png")]
    AleGallon,
}

impl FromStr for Commodity {
    type Err = ConversionError;

    /// Parse an internal key such as `horse` or `wheat_quarter`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Commodity::find_by_key(s).ok_or_else(|| ConversionError::UnknownCommodity(s.to_string()))
    }
}

impl fmt::Display for Commodity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
