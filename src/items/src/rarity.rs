use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Item rarity, ordered from worst to best
#[derive(
    Debug,
    Display,
    EnumString,
    EnumIter,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
pub enum Rarity {
    Junk,
    Basic,
    Fine,
    Masterwork,
    Rare,
    Exotic,
    Ascended,
    Legendary,
}

impl Rarity {
    /// Lower-case name used in sentences ("at least ascended")
    pub fn lowercase(self) -> String {
        self.to_string().to_lowercase()
    }
}
