//! Builders shared by the integration tests

#![allow(dead_code)]

use tiergate::{EquipmentSet, EquipmentSlot, Item, Rarity};

pub const SCHOLAR: &str = "Superior Rune of the Scholar";
pub const FORCE: &str = "Superior Sigil of Force";
pub const ACCURACY: &str = "Superior Sigil of Accuracy";
pub const IMPACT: &str = "Superior Sigil of Impact";

pub fn armor(slot: EquipmentSlot, stats: &str) -> Item {
    Item::new(slot.to_string(), Rarity::Exotic, stats)
        .with_upgrade(SCHOLAR)
        .expect("one rune")
}

pub fn trinket(kind: &str, stats: &str) -> Item {
    Item::new(kind, Rarity::Ascended, stats)
}

pub fn weapon(kind: &str, sigils: &[&str]) -> Item {
    Item::new(kind, Rarity::Ascended, "Berserker's")
        .with_upgrades(sigils.iter().copied())
        .expect("at most two sigils")
}

/// Power build with distinct stats on each paired trinket and a
/// sword/dagger set next to a greatsword
pub fn reference_build() -> EquipmentSet {
    let mut set = EquipmentSet::new("Power Weaver");
    for slot in EquipmentSlot::ARMOR {
        set.equip(slot, armor(slot, "Berserker's"));
    }
    set.with(EquipmentSlot::Backpack, trinket("Back", "Berserker's"))
        .with(EquipmentSlot::Amulet, trinket("Amulet", "Berserker's"))
        .with(EquipmentSlot::Accessory1, trinket("Accessory", "Berserker's"))
        .with(EquipmentSlot::Accessory2, trinket("Accessory", "Assassin's"))
        .with(EquipmentSlot::Ring1, trinket("Ring", "Berserker's"))
        .with(EquipmentSlot::Ring2, trinket("Ring", "Assassin's"))
        .with(EquipmentSlot::WeaponA1, weapon("Sword", &[FORCE, ACCURACY]))
        .with(EquipmentSlot::WeaponA2, weapon("Dagger", &[IMPACT]))
        .with(EquipmentSlot::WeaponB1, weapon("Greatsword", &[FORCE, IMPACT]))
}

pub fn messages(group: &tiergate::FeedbackGroup) -> Vec<String> {
    group.iter().map(|f| f.message.clone()).collect()
}
