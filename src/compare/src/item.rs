//! Single item checks

use feedback::FeedbackGroup;
use items::{Item, Rarity, SlotCategory};

/// Rarity floor and level check for one item
pub fn check_basics(item: &Item, min_rarity: Rarity, min_level: u32) -> FeedbackGroup {
    let mut group = FeedbackGroup::new(item.kind());
    if item.rarity() < min_rarity {
        group.error(format!(
            "Your {} has to be at least {}",
            item.kind(),
            min_rarity.lowercase()
        ));
    }
    if item.level() < min_level {
        group.error(format!(
            "Your {} has to be a level {} item",
            item.kind(),
            min_level
        ));
    }
    group
}

/// Stat set and upgrade comparison of `mine` against `reference`.
///
/// Upgrades are compared as multisets. An upgrade shortfall ends the comparison
/// for this item; on a legendary weapon it is only noted, since those may hide
/// their sigils.
pub fn compare_items(mine: &Item, reference: &Item, category: SlotCategory, group: &mut FeedbackGroup) {
    if mine.stats() != reference.stats() {
        group.warning(format!(
            "Your {} {} should be {}",
            mine.stats(),
            mine.kind(),
            reference.stats()
        ));
    }

    let noun = category.upgrade_noun();
    if mine.upgrades().len() < reference.upgrades().len() {
        let mut needed: Vec<&str> = reference.upgrades().iter().map(String::as_str).collect();
        needed.sort_unstable();
        let needed = needed.join(" and a ");
        if mine.is_legendary() && category == SlotCategory::Weapon {
            group.ok(format!(
                "Your legendary {} does not show a {noun}. It should have a {needed}",
                mine.kind()
            ));
        } else {
            group.error(format!(
                "Your {} is missing a {noun}. It needs a {needed}",
                mine.kind()
            ));
        }
        return;
    }

    let (have, need) = upgrade_difference(mine.upgrades(), reference.upgrades());
    match (have.is_empty(), need.is_empty()) {
        (true, true) => {}
        (false, true) => group.warning(format!(
            "Your {} has an unneeded {noun}: {}",
            mine.kind(),
            have.join(" and ")
        )),
        _ => group.warning(format!(
            "Your {} has a {} instead of a {}",
            mine.kind(),
            have.join(" and "),
            need.join(" and ")
        )),
    }
}

/// Multiset difference in both directions, each side sorted so the result
/// does not depend on slot order
pub(crate) fn upgrade_difference<'a>(
    mine: &'a [String],
    reference: &'a [String],
) -> (Vec<&'a str>, Vec<&'a str>) {
    let mut have: Vec<&str> = mine.iter().map(String::as_str).collect();
    let mut need = Vec::new();
    for upgrade in reference {
        match have.iter().position(|h| *h == upgrade.as_str()) {
            Some(index) => {
                have.remove(index);
            }
            None => need.push(upgrade.as_str()),
        }
    }
    have.sort_unstable();
    need.sort_unstable();
    (have, need)
}
