//! Equipment comparison
//!
//! Compares a player's equipment template against a reference build and reports
//! one feedback group per slot category: armor, trinkets and weapons.

use error::EngineError;
use feedback::{FeedbackCollection, FeedbackGroup};
use items::{EquipmentSet, Rarity};
use serde::{Deserialize, Serialize};

pub mod item;
pub mod slots;
pub mod weapons;


pub use item::{check_basics, compare_items};
pub use slots::{compare_armor, compare_pair, compare_trinkets};
pub use weapons::compare_weapons;

/// Minimum requirements applied by the comparison
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareConfig {
    pub armor_min_rarity: Rarity,
    pub trinket_min_rarity: Rarity,
    pub weapon_min_rarity: Rarity,
    pub min_level: u32,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            armor_min_rarity: Rarity::Exotic,
            trinket_min_rarity: Rarity::Ascended,
            weapon_min_rarity: Rarity::Ascended,
            min_level: items::MAX_LEVEL,
        }
    }
}

/// Compare with the default requirements
pub fn compare_equipment(
    player: &EquipmentSet,
    reference: &EquipmentSet,
) -> Result<FeedbackCollection, EngineError> {
    compare_equipment_with(player, reference, &CompareConfig::default())
}

/// Full comparison: armor, trinkets, weapons, in that order.
///
/// Fails only when either set violates the input contract (see
/// [`EquipmentSet::validate`]) or the reference carries no weapons.
pub fn compare_equipment_with(
    player: &EquipmentSet,
    reference: &EquipmentSet,
    config: &CompareConfig,
) -> Result<FeedbackCollection, EngineError> {
    reference.validate()?;
    player.validate()?;

    let mut collection = FeedbackCollection::new();
    collection.add(compare_armor(player, reference, config));
    collection.add(compare_trinkets(player, reference, config));
    collection.add(compare_weapons(player, reference, config)?);

    tracing::debug!(
        player = %player.name,
        reference = %reference.name,
        severity = %collection.aggregate(),
        "equipment compared"
    );
    Ok(collection)
}

/// Positive confirmations closing a category group
pub(crate) fn add_summaries(group: &mut FeedbackGroup, min_rarity: Rarity, stats_message: &str) {
    use feedback::Severity;

    if group.aggregate() <= Severity::Warning {
        group.ok(format!("All items are at least {}", min_rarity.lowercase()));
    }
    if group.aggregate() == Severity::Ok {
        group.ok(stats_message);
    }
}
