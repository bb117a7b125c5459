//! Kill-proof tiers

use std::collections::HashSet;

use feedback::FeedbackGroup;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::Tier;
use crate::boss::{Boss, KillProofPool, Roster};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KillProofConfig {
    pub tier1_required_kills: usize,
    pub tier2_required_total: usize,
    /// Pool B kills beyond this many do not count towards tier 2
    pub tier2_pool_b_cap: usize,
    /// Full boss names that may be missing for tier 3
    pub tier3_permitted_missing: Vec<String>,
}

impl Default for KillProofConfig {
    fn default() -> Self {
        Self {
            tier1_required_kills: 5,
            tier2_required_total: 10,
            tier2_pool_b_cap: 5,
            tier3_permitted_missing: vec![
                "Harvest Temple CM".to_string(),
                "Temple of Febe CM".to_string(),
            ],
        }
    }
}

/// One entry of the game API's account achievement list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementProgress {
    pub id: u32,
    #[serde(default)]
    pub done: bool,
}

/// Bosses whose kill achievement is completed
pub fn kills_from_achievements(roster: &Roster, progress: &[AchievementProgress]) -> Vec<Boss> {
    let done: HashSet<u32> = progress.iter().filter(|p| p.done).map(|p| p.id).collect();
    roster
        .bosses()
        .iter()
        .filter(|b| b.achievement_id.is_some_and(|id| done.contains(&id)))
        .cloned()
        .collect()
}

/// Tier check with the default roster and requirements
pub fn check_tier_eligibility(tier: Tier, kills: &[Boss]) -> FeedbackGroup {
    let roster = Roster::default();
    let config = KillProofConfig::default();
    KillProof::new(&roster, &config).check(tier, kills)
}

pub struct KillProof<'a> {
    roster: &'a Roster,
    config: &'a KillProofConfig,
}

impl<'a> KillProof<'a> {
    pub fn new(roster: &'a Roster, config: &'a KillProofConfig) -> Self {
        Self { roster, config }
    }

    pub fn check(&self, tier: Tier, kills: &[Boss]) -> FeedbackGroup {
        let mut group = FeedbackGroup::new(format!("Kill proof for tier {tier}"));
        let killed = self.killed(kills);
        match tier {
            Tier::One => self.tier_one(&killed, &mut group),
            Tier::Two => self.tier_two(&killed, &mut group),
            Tier::Three => self.tier_three(&killed, &mut group),
        }
        group
    }

    /// Distinct roster keys of the given kills
    fn killed(&self, kills: &[Boss]) -> HashSet<(u32, bool)> {
        let mut killed = HashSet::new();
        for kill in kills {
            match self.roster.resolve(kill.encounter_id, kill.is_cm) {
                Some(boss) => {
                    killed.insert(boss.key());
                }
                None => warn!(boss = %kill.full_name(), "ignoring kill outside the roster"),
            }
        }
        killed
    }

    fn tier_one(&self, killed: &HashSet<(u32, bool)>, group: &mut FeedbackGroup) {
        let eligible: Vec<&Boss> = self
            .roster
            .bosses()
            .iter()
            .filter(|b| b.achievement_id.is_some())
            .collect();
        let (statues, bosses): (Vec<&Boss>, Vec<&Boss>) =
            eligible.into_iter().partition(|b| b.is_statue());

        // The statues only grant a single credit, and only all together
        let statue_credit =
            usize::from(!statues.is_empty() && statues.iter().all(|b| killed.contains(&b.key())));
        let credited = bosses.iter().filter(|b| killed.contains(&b.key())).count() + statue_credit;
        let max = bosses.len() + usize::from(!statues.is_empty());
        let required = self.config.tier1_required_kills;
        debug!(credited, max, required, "tier 1 kill credit");

        if credited >= required {
            group.ok(format!("You have killed {credited}/{max} different bosses"));
        } else {
            group.error(format!(
                "You have killed {credited}/{max} different bosses, at least {required} are required"
            ));
        }
    }

    fn tier_two(&self, killed: &HashSet<(u32, bool)>, group: &mut FeedbackGroup) {
        let count = |pool: KillProofPool| {
            self.roster
                .bosses()
                .iter()
                .filter(|b| b.kp_pool == pool && killed.contains(&b.key()))
                .count()
        };
        let pool_a = count(KillProofPool::PoolA);
        let pool_b = count(KillProofPool::PoolB);
        let cap = self.config.tier2_pool_b_cap;
        let required = self.config.tier2_required_total;
        let credited = pool_a + pool_b.min(cap);
        debug!(pool_a, pool_b, credited, required, "tier 2 kill credit");

        if credited >= required {
            group.ok(format!(
                "You have killed {pool_a} bosses from pool A and {pool_b} bosses from pool B"
            ));
        } else {
            group.error(format!(
                "You have killed {pool_a} bosses from pool A and {pool_b} bosses from pool B. \
                 You need {required} different boss kills of which at most {cap} may come from pool B"
            ));
        }
    }

    fn tier_three(&self, killed: &HashSet<(u32, bool)>, group: &mut FeedbackGroup) {
        let missing: Vec<String> = self
            .roster
            .bosses()
            .iter()
            .filter(|b| b.kp_pool != KillProofPool::NotAllowed && !killed.contains(&b.key()))
            .map(Boss::full_name)
            .collect();
        debug!(missing = missing.len(), "tier 3 kill credit");

        if missing.is_empty() {
            group.ok("You have killed every boss");
        } else if missing
            .iter()
            .all(|m| self.config.tier3_permitted_missing.contains(m))
        {
            group.ok(format!(
                "You have killed every required boss, only missing {}",
                missing.join(", ")
            ));
        } else {
            group.error(format!(
                "You have not killed every boss yet. Missing: {}",
                missing.join(", ")
            ));
        }
    }
}
