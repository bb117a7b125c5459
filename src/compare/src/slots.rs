//! Armor and trinket comparison, including interchangeable slot pairs

use feedback::FeedbackGroup;
use items::{EquipmentSet, EquipmentSlot, Item, Rarity, SlotCategory};

use crate::item::{check_basics, compare_items};
use crate::{CompareConfig, add_summaries};

pub fn compare_armor(player: &EquipmentSet, reference: &EquipmentSet, config: &CompareConfig) -> FeedbackGroup {
    let mut group = FeedbackGroup::new("Armor");
    for slot in EquipmentSlot::ARMOR {
        compare_slot(
            player.get(slot),
            reference.get(slot),
            SlotCategory::Armor,
            config.armor_min_rarity,
            config.min_level,
            &mut group,
        );
    }
    add_summaries(&mut group, config.armor_min_rarity, "Stats and upgrades of all items are correct");
    group
}

pub fn compare_trinkets(player: &EquipmentSet, reference: &EquipmentSet, config: &CompareConfig) -> FeedbackGroup {
    let mut group = FeedbackGroup::new("Trinkets");
    for slot in EquipmentSlot::SINGLE_TRINKETS {
        compare_slot(
            player.get(slot),
            reference.get(slot),
            SlotCategory::Trinket,
            config.trinket_min_rarity,
            config.min_level,
            &mut group,
        );
    }
    for (first, second) in EquipmentSlot::PAIRED_TRINKETS {
        group.absorb(compare_pair(first, second, player, reference, config.trinket_min_rarity, config.min_level));
    }
    add_summaries(&mut group, config.trinket_min_rarity, "Stats of all items are correct");
    group
}

/// Compare two interchangeable slots.
///
/// Both the direct and the crossed pairing are evaluated; the crossed one wins
/// only if it ranks strictly better. With an item missing on the player's side
/// the direct pairing is used as is.
pub fn compare_pair(
    first: EquipmentSlot,
    second: EquipmentSlot,
    player: &EquipmentSet,
    reference: &EquipmentSet,
    min_rarity: Rarity,
    min_level: u32,
) -> FeedbackGroup {
    let category = first.category();
    let references = [reference.get(first), reference.get(second)];
    let mine = [player.get(first), player.get(second)];

    let direct = evaluate_pairing(mine, references, category, min_rarity, min_level);
    if mine.iter().any(Option::is_none) {
        return direct;
    }

    let crossed = evaluate_pairing([mine[1], mine[0]], references, category, min_rarity, min_level);
    if crossed.rank() < direct.rank() {
        tracing::debug!(%first, %second, "crossed pairing ranks better");
        crossed
    } else {
        direct
    }
}

fn evaluate_pairing(
    mine: [Option<&Item>; 2],
    references: [Option<&Item>; 2],
    category: SlotCategory,
    min_rarity: Rarity,
    min_level: u32,
) -> FeedbackGroup {
    let mut group = FeedbackGroup::new("pairing");
    for (mine, reference) in mine.into_iter().zip(references) {
        compare_slot(mine, reference, category, min_rarity, min_level, &mut group);
    }
    group
}

/// Nothing to check if the reference leaves the slot empty
fn compare_slot(
    mine: Option<&Item>,
    reference: Option<&Item>,
    category: SlotCategory,
    min_rarity: Rarity,
    min_level: u32,
    group: &mut FeedbackGroup,
) {
    let Some(reference) = reference else {
        return;
    };
    let Some(mine) = mine else {
        group.error(format!("{} is missing", reference.kind()));
        return;
    };
    group.absorb(check_basics(mine, min_rarity, min_level));
    compare_items(mine, reference, category, group);
}
