use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// The 16 slots of an equipment template
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
pub enum EquipmentSlot {
    // Armor
    Helm,
    Shoulders,
    Coat,
    Gloves,
    Leggings,
    Boots,

    // Trinkets
    Backpack,
    Accessory1,
    Accessory2,
    Amulet,
    Ring1,
    Ring2,

    // Weapons
    WeaponA1,
    WeaponA2,
    WeaponB1,
    WeaponB2,
}

/// Slot grouping; each category becomes one feedback group
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlotCategory {
    Armor,
    Trinket,
    Weapon,
}

impl SlotCategory {
    /// What an upgrade in this category is called in findings
    pub fn upgrade_noun(self) -> &'static str {
        match self {
            SlotCategory::Armor => "rune",
            SlotCategory::Weapon => "sigil",
            SlotCategory::Trinket => "upgrade",
        }
    }
}

impl EquipmentSlot {
    pub const ARMOR: [EquipmentSlot; 6] = [
        EquipmentSlot::Helm,
        EquipmentSlot::Shoulders,
        EquipmentSlot::Coat,
        EquipmentSlot::Gloves,
        EquipmentSlot::Leggings,
        EquipmentSlot::Boots,
    ];

    /// Trinkets with a single, fixed slot
    pub const SINGLE_TRINKETS: [EquipmentSlot; 2] = [EquipmentSlot::Backpack, EquipmentSlot::Amulet];

    /// Trinket slot pairs whose items are interchangeable
    pub const PAIRED_TRINKETS: [(EquipmentSlot, EquipmentSlot); 2] = [
        (EquipmentSlot::Accessory1, EquipmentSlot::Accessory2),
        (EquipmentSlot::Ring1, EquipmentSlot::Ring2),
    ];

    pub const WEAPONS: [EquipmentSlot; 4] = [
        EquipmentSlot::WeaponA1,
        EquipmentSlot::WeaponA2,
        EquipmentSlot::WeaponB1,
        EquipmentSlot::WeaponB2,
    ];

    pub fn category(self) -> SlotCategory {
        use EquipmentSlot::*;
        match self {
            Helm | Shoulders | Coat | Gloves | Leggings | Boots => SlotCategory::Armor,
            Backpack | Accessory1 | Accessory2 | Amulet | Ring1 | Ring2 => SlotCategory::Trinket,
            WeaponA1 | WeaponA2 | WeaponB1 | WeaponB2 => SlotCategory::Weapon,
        }
    }

    pub fn is_weapon(self) -> bool {
        self.category() == SlotCategory::Weapon
    }
}
