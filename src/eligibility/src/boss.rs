//! Boss reference data

use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};
use strum::Display;

/// Kill-proof bucket a boss kill is credited to
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KillProofPool {
    #[strum(serialize = "not allowed")]
    NotAllowed,
    #[strum(serialize = "A")]
    PoolA,
    #[strum(serialize = "B")]
    PoolB,
}

/// Quota bucket a submitted log is assigned to
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Encode, Decode, Serialize, Deserialize)]
pub enum BossLogPool {
    #[strum(serialize = "not allowed")]
    NotAllowed,
    #[strum(serialize = "1")]
    Pool1,
    #[strum(serialize = "2")]
    Pool2,
    #[strum(serialize = "3")]
    Pool3,
    #[strum(serialize = "4")]
    Pool4,
}

/// Names of the three statue encounters that only count together
pub const STATUES: [&str; 3] = ["Statue of Death", "Statue of Ice", "Statue of Darkness"];

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Boss {
    /// Elite Insights encounter id
    pub encounter_id: u32,
    pub is_cm: bool,
    pub name: String,
    pub kp_pool: KillProofPool,
    pub log_pool: BossLogPool,
    pub achievement_id: Option<u32>,
}

impl Boss {
    pub fn new(
        encounter_id: u32,
        is_cm: bool,
        name: impl Into<String>,
        kp_pool: KillProofPool,
        log_pool: BossLogPool,
        achievement_id: Option<u32>,
    ) -> Self {
        Self {
            encounter_id,
            is_cm,
            name: name.into(),
            kp_pool,
            log_pool,
            achievement_id,
        }
    }

    /// Name with a " CM" suffix for challenge modes
    pub fn full_name(&self) -> String {
        if self.is_cm {
            format!("{} CM", self.name)
        } else {
            self.name.clone()
        }
    }

    pub fn key(&self) -> (u32, bool) {
        (self.encounter_id, self.is_cm)
    }

    pub fn is_statue(&self) -> bool {
        STATUES.contains(&self.name.as_str())
    }
}

/// Static boss table, created once and only read afterwards
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    bosses: Vec<Boss>,
}

impl Roster {
    pub fn new(bosses: Vec<Boss>) -> Self {
        Self { bosses }
    }

    pub fn bosses(&self) -> &[Boss] {
        &self.bosses
    }

    pub fn get(&self, encounter_id: u32, is_cm: bool) -> Option<&Boss> {
        self.bosses
            .iter()
            .find(|b| b.encounter_id == encounter_id && b.is_cm == is_cm)
    }

    /// Same as [`Roster::get`] but a CM without an entry of its own
    /// falls back to the normal mode entry
    pub fn resolve(&self, encounter_id: u32, is_cm: bool) -> Option<&Boss> {
        self.get(encounter_id, is_cm).or_else(|| {
            if is_cm {
                self.get(encounter_id, false)
            } else {
                None
            }
        })
    }

    /// Log pool for an encounter; unknown encounters are not allowed
    pub fn log_pool(&self, encounter_id: u32, is_cm: bool) -> BossLogPool {
        self.resolve(encounter_id, is_cm)
            .map_or(BossLogPool::NotAllowed, |b| b.log_pool)
    }

    pub fn contains(&self, boss: &Boss) -> bool {
        self.get(boss.encounter_id, boss.is_cm).is_some()
    }
}

impl Default for Roster {
    fn default() -> Self {
        use BossLogPool as L;
        use KillProofPool as K;

        let b = Boss::new;
        Self::new(vec![
            // Wing 1
            b(131329, false, "Vale Guardian", K::PoolB, L::Pool1, Some(2654)),
            b(131330, false, "Gorseval", K::PoolA, L::Pool1, Some(2667)),
            b(131331, false, "Sabetha", K::PoolB, L::Pool3, Some(2659)),
            // Wing 2
            b(131585, false, "Slothasor", K::PoolB, L::Pool2, Some(2826)),
            b(131586, false, "Bandit Trio", K::NotAllowed, L::NotAllowed, None),
            b(131587, false, "Matthias", K::PoolB, L::Pool3, Some(2836)),
            // Wing 3
            b(131842, false, "Keep Construct", K::PoolB, L::Pool2, Some(3014)),
            b(131843, false, "Twisted Castle", K::NotAllowed, L::NotAllowed, None),
            b(131844, false, "Xera", K::PoolB, L::Pool2, Some(3017)),
            // Wing 4
            b(132097, false, "Cairn", K::PoolA, L::Pool1, Some(3349)),
            b(132098, false, "Mursaat Overseer", K::PoolA, L::NotAllowed, Some(3321)),
            b(132099, false, "Samarog", K::PoolA, L::Pool1, Some(3347)),
            b(132100, false, "Deimos", K::PoolB, L::Pool3, Some(3364)),
            // Wing 5
            b(132353, false, "Soulless Horror", K::PoolB, L::Pool4, Some(4004)),
            b(132354, false, "River of Souls", K::NotAllowed, L::NotAllowed, None),
            b(132355, false, "Statue of Ice", K::NotAllowed, L::NotAllowed, Some(4038)),
            b(132356, false, "Statue of Death", K::NotAllowed, L::NotAllowed, Some(3998)),
            b(132357, false, "Statue of Darkness", K::NotAllowed, L::NotAllowed, Some(4036)),
            b(132358, false, "Dhuum", K::PoolB, L::Pool4, Some(4016)),
            // Wing 6
            b(132609, false, "Conjured Amalgamate", K::PoolB, L::Pool2, Some(4423)),
            b(132610, false, "Twin Largos", K::PoolB, L::Pool3, Some(4364)),
            b(132611, false, "Qadim", K::PoolB, L::Pool4, Some(4396)),
            // Wing 7
            b(132865, false, "Cardinal Adina", K::PoolB, L::Pool2, Some(4796)),
            b(132866, false, "Cardinal Sabir", K::PoolB, L::Pool3, Some(4801)),
            b(132867, false, "Qadim the Peerless", K::PoolB, L::Pool4, Some(4799)),
            // Icebrood Saga strike missions
            b(262661, false, "Whisper of Jormag", K::PoolA, L::NotAllowed, Some(5118)),
            // End of Dragons strike missions
            b(262913, false, "Mai Trin", K::NotAllowed, L::NotAllowed, None),
            b(262914, false, "Ankka", K::NotAllowed, L::NotAllowed, None),
            b(262915, false, "Kaineng Overlook", K::PoolA, L::NotAllowed, Some(6243)),
            b(262916, false, "Harvest Temple", K::PoolA, L::NotAllowed, Some(6513)),
            // End of Dragons strike mission CMs
            b(262913, true, "Mai Trin", K::PoolB, L::Pool1, Some(6433)),
            b(262914, true, "Ankka", K::PoolA, L::Pool1, Some(6411)),
            b(262915, true, "Kaineng Overlook", K::PoolB, L::Pool4, Some(6431)),
            b(262916, true, "Harvest Temple", K::PoolB, L::Pool4, Some(6115)),
        ])
    }
}
