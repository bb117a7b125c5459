//! Weapon comparison
//!
//! Weapons are matched by type, not by slot. The game does not guarantee which
//! set or hand a weapon is reported in, so several physical arrangements of the
//! player's weapons are evaluated and the best-ranked one is reported.

use error::EngineError;
use feedback::FeedbackGroup;
use items::{EquipmentSet, EquipmentSlot, Item, SlotCategory, WeaponSet, is_two_handed};

use crate::item::{check_basics, compare_items};
use crate::{CompareConfig, add_summaries};

/// Player weapon slot shown at each of A1, A2, B1, B2
type Arrangement = [EquipmentSlot; 4];

const IDENTITY: Arrangement = EquipmentSlot::WEAPONS;

pub fn compare_weapons(
    player: &EquipmentSet,
    reference: &EquipmentSet,
    config: &CompareConfig,
) -> Result<FeedbackGroup, EngineError> {
    if !reference.has_weapons() {
        return Err(EngineError::ReferenceWithoutWeapons {
            build: reference.name.clone(),
        });
    }

    let mut group = FeedbackGroup::new("Weapons");
    if !covers_reference_types(player, reference) {
        group.error(format!(
            "You are not using the correct weapons. You are using {} instead of required {}",
            player.weapons_str(),
            reference.weapons_str()
        ));
        return Ok(group);
    }

    let mut best: Option<(Arrangement, FeedbackGroup)> = None;
    for arrangement in arrangements(player) {
        let candidate = evaluate_arrangement(player, reference, arrangement, config);
        let better = best
            .as_ref()
            .is_none_or(|(_, current)| candidate.rank() < current.rank());
        if better {
            best = Some((arrangement, candidate));
        }
    }

    if let Some((arrangement, winner)) = best {
        tracing::debug!(?arrangement, severity = %winner.aggregate(), "weapon arrangement selected");
        group.absorb(winner);
    }

    if !group.contains(feedback::Severity::Error) {
        group.ok("You are using the correct weapons");
    }
    add_summaries(&mut group, config.weapon_min_rarity, "Stats and upgrades of all items are correct");
    Ok(group)
}

/// Every reference weapon needs its own player weapon of the same type.
/// Extra player weapons are tolerated.
fn covers_reference_types(player: &EquipmentSet, reference: &EquipmentSet) -> bool {
    let mut available: Vec<&str> = player.weapons().map(|(_, item)| item.kind()).collect();
    reference.weapons().all(|(_, wanted)| {
        match available.iter().position(|kind| *kind == wanted.kind()) {
            Some(index) => {
                available.swap_remove(index);
                true
            }
            None => false,
        }
    })
}

/// A set whose two hands hold separate one-handed weapons can be read either way round
fn hands_swappable(player: &EquipmentSet, set: WeaponSet) -> bool {
    match (player.get(set.main_hand()), player.get(set.off_hand())) {
        (Some(main), Some(_)) => !is_two_handed(main.kind()),
        _ => false,
    }
}

/// Identity, swapped sets, swapped hands and both; duplicates removed
fn arrangements(player: &EquipmentSet) -> Vec<Arrangement> {
    use EquipmentSlot::*;

    let swap_a = hands_swappable(player, WeaponSet::A);
    let swap_b = hands_swappable(player, WeaponSet::B);
    let hands: Arrangement = [
        if swap_a { WeaponA2 } else { WeaponA1 },
        if swap_a { WeaponA1 } else { WeaponA2 },
        if swap_b { WeaponB2 } else { WeaponB1 },
        if swap_b { WeaponB1 } else { WeaponB2 },
    ];
    let sets_of = |a: Arrangement| -> Arrangement { [a[2], a[3], a[0], a[1]] };

    let mut result = Vec::with_capacity(4);
    for candidate in [IDENTITY, sets_of(IDENTITY), hands, sets_of(hands)] {
        if !result.contains(&candidate) {
            result.push(candidate);
        }
    }
    result
}

/// Pair each reference weapon with a player weapon of the same type, preferring
/// the one shown in the same slot under this arrangement
fn match_weapons<'a>(
    shown: &[Option<&'a Item>; 4],
    reference: &EquipmentSet,
) -> Vec<(&'a Item, EquipmentSlot)> {
    let wanted: Vec<(usize, &Item)> = IDENTITY
        .iter()
        .enumerate()
        .filter_map(|(index, slot)| reference.get(*slot).map(|item| (index, item)))
        .collect();

    let mut used = [false; 4];
    let mut pairs: Vec<Option<usize>> = vec![None; wanted.len()];

    for (pair, (index, item)) in pairs.iter_mut().zip(&wanted) {
        if shown[*index].is_some_and(|mine| mine.kind() == item.kind()) {
            used[*index] = true;
            *pair = Some(*index);
        }
    }
    for (pair, (_, item)) in pairs.iter_mut().zip(&wanted) {
        if pair.is_some() {
            continue;
        }
        let found = (0..4).find(|j| !used[*j] && shown[*j].is_some_and(|mine| mine.kind() == item.kind()));
        if let Some(j) = found {
            used[j] = true;
            *pair = Some(j);
        }
    }

    pairs
        .into_iter()
        .zip(&wanted)
        .filter_map(|(pair, (index, _))| pair.and_then(|j| shown[j]).map(|mine| (mine, IDENTITY[*index])))
        .collect()
}

fn evaluate_arrangement(
    player: &EquipmentSet,
    reference: &EquipmentSet,
    arrangement: Arrangement,
    config: &CompareConfig,
) -> FeedbackGroup {
    let shown = arrangement.map(|slot| player.get(slot));
    let mut group = FeedbackGroup::new("arrangement");
    for (mine, reference_slot) in match_weapons(&shown, reference) {
        let Some(wanted) = reference.get(reference_slot) else {
            continue;
        };
        group.absorb(check_basics(mine, config.weapon_min_rarity, config.min_level));
        compare_items(mine, wanted, SlotCategory::Weapon, &mut group);
    }
    group
}
