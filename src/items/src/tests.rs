//! Data model tests

use crate::*;
use pretty_assertions::assert_eq;
use std::str::FromStr;
use strum::IntoEnumIterator;

fn sword() -> Item {
    Item::new("Sword", Rarity::Ascended, "Berserker's")
}

#[test]
fn rarity_order_matches_game() {
    let order: Vec<Rarity> = Rarity::iter().collect();
    let mut sorted = order.clone();
    sorted.sort();
    assert_eq!(order, sorted);
    assert!(Rarity::Exotic < Rarity::Ascended);
    assert!(Rarity::Legendary >= Rarity::Ascended);
    assert_eq!(Rarity::from_str("Masterwork").ok(), Some(Rarity::Masterwork));
    assert_eq!(Rarity::Ascended.lowercase(), "ascended");
}

#[test]
fn item_rejects_third_upgrade() {
    let item = sword()
        .with_upgrades(["Superior Sigil of Force", "Superior Sigil of Accuracy"])
        .expect("two upgrades fit");
    assert_eq!(item.upgrades().len(), 2);
    assert!(item.with_upgrade("Superior Sigil of Air").is_err());
}

#[test]
fn item_display_lists_upgrades() {
    let item = sword()
        .with_upgrade("Superior Sigil of Force")
        .expect("one upgrade fits");
    assert_eq!(item.to_string(), "Ascended Berserker's Sword (Superior Sigil of Force)");
}

#[test]
fn item_without_stats_fails_validation() {
    let item = Item::new("Ring", Rarity::Ascended, " ");
    assert!(item.validate("Ring1").is_err());
    assert!(sword().validate("WeaponA1").is_ok());
}

#[test]
fn slots_split_into_categories() {
    let armor = EquipmentSlot::iter()
        .filter(|s| s.category() == SlotCategory::Armor)
        .count();
    let trinkets = EquipmentSlot::iter()
        .filter(|s| s.category() == SlotCategory::Trinket)
        .count();
    let weapons = EquipmentSlot::iter().filter(|s| s.is_weapon()).count();
    assert_eq!((armor, trinkets, weapons), (6, 6, 4));
    assert_eq!(EquipmentSlot::iter().count(), 16);
}

#[test]
fn weapons_str_renders_both_sets() {
    let set = EquipmentSet::new("player")
        .with(EquipmentSlot::WeaponA1, Item::new("Greatsword", Rarity::Ascended, "Berserker's"))
        .with(EquipmentSlot::WeaponB1, sword())
        .with(EquipmentSlot::WeaponB2, Item::new("Focus", Rarity::Ascended, "Berserker's"));
    assert_eq!(set.weapons_str(), "Greatsword and Sword/Focus");

    let one_hand = EquipmentSet::new("partial").with(EquipmentSlot::WeaponA1, sword());
    assert_eq!(one_hand.weapons_str(), "Sword/None and None/None");
}

#[test]
fn two_hander_with_off_hand_is_invalid() {
    let set = EquipmentSet::new("broken")
        .with(EquipmentSlot::WeaponA1, Item::new("Staff", Rarity::Ascended, "Viper's"))
        .with(EquipmentSlot::WeaponA2, Item::new("Torch", Rarity::Ascended, "Viper's"));
    assert!(set.validate().is_err());
}

#[test]
fn equip_replaces_previous_item() {
    let mut set = EquipmentSet::new("player");
    assert!(set.equip(EquipmentSlot::Ring1, Item::new("Ring", Rarity::Exotic, "Berserker's")).is_none());
    let old = set.equip(EquipmentSlot::Ring1, Item::new("Ring", Rarity::Ascended, "Berserker's"));
    assert_eq!(old.map(|i| i.rarity()), Some(Rarity::Exotic));
    assert_eq!(set.len(), 1);
    assert!(set.unequip(EquipmentSlot::Ring1).is_some());
    assert!(set.is_empty(EquipmentSlot::Ring1));
}

#[test]
fn equipment_set_json_uses_slot_names() {
    let set = EquipmentSet::new("ref").with(EquipmentSlot::Helm, Item::new("Helm", Rarity::Exotic, "Berserker's"));
    let json = serde_json::to_string(&set).expect("serialize set");
    assert!(json.contains("\"Helm\":"));
    let back: EquipmentSet = serde_json::from_str(&json).expect("deserialize set");
    assert_eq!(back, set);
}
