use error::EngineError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::{EquipmentSlot, Item, is_two_handed};

/// One of the two swappable weapon sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponSet {
    A,
    B,
}

impl WeaponSet {
    pub const BOTH: [WeaponSet; 2] = [WeaponSet::A, WeaponSet::B];

    pub fn main_hand(self) -> EquipmentSlot {
        match self {
            WeaponSet::A => EquipmentSlot::WeaponA1,
            WeaponSet::B => EquipmentSlot::WeaponB1,
        }
    }

    pub fn off_hand(self) -> EquipmentSlot {
        match self {
            WeaponSet::A => EquipmentSlot::WeaponA2,
            WeaponSet::B => EquipmentSlot::WeaponB2,
        }
    }
}

/// A 16-slot loadout, either a player's or a reference build's
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentSet {
    pub name: String,
    #[serde(default)]
    items: BTreeMap<EquipmentSlot, Item>,
}

impl EquipmentSet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: BTreeMap::new(),
        }
    }

    /// Builder form of [`EquipmentSet::equip`]
    pub fn with(mut self, slot: EquipmentSlot, item: Item) -> Self {
        self.equip(slot, item);
        self
    }

    /// Place an item, returning whatever occupied the slot
    pub fn equip(&mut self, slot: EquipmentSlot, item: Item) -> Option<Item> {
        self.items.insert(slot, item)
    }

    pub fn unequip(&mut self, slot: EquipmentSlot) -> Option<Item> {
        self.items.remove(&slot)
    }

    pub fn get(&self, slot: EquipmentSlot) -> Option<&Item> {
        self.items.get(&slot)
    }

    pub fn is_empty(&self, slot: EquipmentSlot) -> bool {
        !self.items.contains_key(&slot)
    }

    /// Occupied slots in slot order
    pub fn iter(&self) -> impl Iterator<Item = (EquipmentSlot, &Item)> {
        self.items.iter().map(|(slot, item)| (*slot, item))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Occupied weapon slots in A1, A2, B1, B2 order
    pub fn weapons(&self) -> impl Iterator<Item = (EquipmentSlot, &Item)> {
        EquipmentSlot::WEAPONS
            .into_iter()
            .filter_map(|slot| self.get(slot).map(|item| (slot, item)))
    }

    pub fn has_weapons(&self) -> bool {
        self.weapons().next().is_some()
    }

    /// "Sword/Focus", "Staff" for a two-hander, "None/None" when empty
    pub fn weapon_set_str(&self, set: WeaponSet) -> String {
        let main = self.get(set.main_hand());
        let off = self.get(set.off_hand());
        match (main, off) {
            (Some(main), None) if is_two_handed(main.kind()) => main.kind().to_string(),
            _ => format!(
                "{}/{}",
                main.map_or("None", Item::kind),
                off.map_or("None", Item::kind)
            ),
        }
    }

    /// Both weapon sets, e.g. "Greatsword and Sword/Focus"
    pub fn weapons_str(&self) -> String {
        format!(
            "{} and {}",
            self.weapon_set_str(WeaponSet::A),
            self.weapon_set_str(WeaponSet::B)
        )
    }

    /// Rejects input the comparison cannot interpret: unresolved stat sets,
    /// overfull upgrade lists and off-hands held behind a two-handed weapon.
    pub fn validate(&self) -> Result<(), EngineError> {
        for (slot, item) in self.iter() {
            item.validate(&slot.to_string())?;
        }
        for set in WeaponSet::BOTH {
            if let (Some(main), Some(off)) = (self.get(set.main_hand()), self.get(set.off_hand())) {
                if is_two_handed(main.kind()) {
                    return Err(EngineError::InvalidLoadout {
                        set: format!("{} weapon set {:?}", self.name, set),
                        reason: format!("{} is two-handed but off-hand holds {}", main.kind(), off.kind()),
                    });
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for EquipmentSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Equipment Name: {}", self.name)?;
        for (slot, item) in self.iter() {
            write!(f, "\n{}: {}", slot, item)?;
        }
        Ok(())
    }
}
