//! Application outcome and tier promotion

use feedback::Severity;
use serde::{Deserialize, Serialize};
use strum::Display;

use crate::Tier;
use crate::log::{Log, LogStatus};

/// State of a tier application
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApplicationStatus {
    #[strum(serialize = "accepted")]
    Accepted,
    #[strum(serialize = "denied")]
    Denied,
    /// Only warnings; the applicant may ask an officer for a review
    #[strum(serialize = "no review requested")]
    NoReviewRequested,
}

impl ApplicationStatus {
    pub fn from_severity(severity: Severity) -> Self {
        match severity {
            Severity::Ok => ApplicationStatus::Accepted,
            Severity::Warning => ApplicationStatus::NoReviewRequested,
            Severity::Error => ApplicationStatus::Denied,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromotionConfig {
    pub tier2_accepted_logs: usize,
    /// Counted per role
    pub tier3_accepted_logs: usize,
}

impl Default for PromotionConfig {
    fn default() -> Self {
        Self {
            tier2_accepted_logs: 2,
            tier3_accepted_logs: 3,
        }
    }
}

/// Whether accepting `log` completes the applicant's tier.
///
/// `history` holds the applicant's logs; `log` itself may or may not be in it.
pub fn promotion_earned(log: &Log, history: &[Log], config: &PromotionConfig) -> bool {
    if log.status() != LogStatus::ReviewAccepted {
        return false;
    }
    let required = match log.tier() {
        Tier::One => return false,
        Tier::Two => config.tier2_accepted_logs,
        Tier::Three => config.tier3_accepted_logs,
    };
    let earlier = history
        .iter()
        .filter(|l| {
            l.id() != log.id()
                && l.user_id() == log.user_id()
                && l.tier() == log.tier()
                && l.role() == log.role()
                && l.status() == LogStatus::ReviewAccepted
        })
        .count();
    earlier + 1 >= required
}
