//! Equipment data model
//!
//! Items and equipment sets as delivered by the game-data and build-reference
//! providers, already normalized: stat sets and upgrades are resolved to names.

pub use crate::equipment::{EquipmentSet, WeaponSet};
pub use crate::item::Item;
pub use crate::rarity::Rarity;
pub use crate::slot::{EquipmentSlot, SlotCategory};
pub use crate::weapon::{is_two_handed, TWO_HANDED_TYPES};

pub mod equipment;
pub mod item;
pub mod rarity;
pub mod slot;
pub mod weapon;

#[cfg(test)]
mod tests;

/// Items below this level never qualify
pub const MAX_LEVEL: u32 = 80;

/// Upgrade slots on a single item
pub const MAX_UPGRADES: usize = 2;
