//! Eligibility rules
//!
//! Decides whether a player's boss-kill history and submitted combat logs
//! satisfy the requirements of a tier. Every check returns feedback; errors
//! are reserved for calls that make no sense for the requested tier.

use bincode::{Decode, Encode};
use error::EngineError;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

pub mod application;
pub mod boss;
pub mod killproof;
pub mod log;
pub mod quota;
pub mod report;


pub use application::{ApplicationStatus, PromotionConfig, promotion_earned};
pub use boss::{Boss, BossLogPool, KillProofPool, Roster, STATUES};
pub use killproof::{
    AchievementProgress, KillProof, KillProofConfig, check_tier_eligibility,
    kills_from_achievements,
};
pub use log::{Log, LogStatus, LogSubmission, Role, is_valid_log_url};
pub use quota::{QuotaConfig, check_log_quota, check_log_quota_with, check_submission};
pub use report::{LogReport, ReportConfig, check_log_report};

/// Ranked tier of the community
#[derive(
    Debug,
    Display,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumIter,
    Encode,
    Decode,
    Serialize,
    Deserialize,
)]
pub enum Tier {
    #[strum(serialize = "1")]
    One,
    #[strum(serialize = "2")]
    Two,
    #[strum(serialize = "3")]
    Three,
}

impl Tier {
    pub fn number(self) -> u8 {
        match self {
            Tier::One => 1,
            Tier::Two => 2,
            Tier::Three => 3,
        }
    }
}

impl TryFrom<u8> for Tier {
    type Error = EngineError;

    fn try_from(tier: u8) -> Result<Self, Self::Error> {
        match tier {
            1 => Ok(Tier::One),
            2 => Ok(Tier::Two),
            3 => Ok(Tier::Three),
            _ => Err(EngineError::UnsupportedTier {
                tier,
                operation: "tier lookup",
            }),
        }
    }
}
