//! Submitted combat logs

use std::sync::LazyLock;
use std::time::SystemTime;

use bincode::{Decode, Encode};
use error::EngineError;
use feedback::Severity;
use regex::Regex;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::Tier;
use crate::boss::{BossLogPool, Roster};

static LOG_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https://dps\.report/[A-Za-z0-9_\-]+$").expect("valid log url pattern")
});

/// Logs are only accepted as dps.report permalinks
pub fn is_valid_log_url(url: &str) -> bool {
    LOG_URL.is_match(url.trim())
}

/// Squad role a log is submitted for; tier 2 logs carry no role
#[derive(
    Debug,
    Display,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumString,
    Encode,
    Decode,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    None,
    Dps,
    Heal,
    Boon,
    Tank,
}

#[derive(
    Debug, Display, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Encode, Decode, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
pub enum LogStatus {
    Submitted,
    /// Rejected by the automatic checks
    Denied,
    WaitingForReview,
    ReviewAccepted,
    ReviewDenied,
    ClosedByApplicant,
}

impl LogStatus {
    pub fn can_transition(self, to: LogStatus) -> bool {
        use LogStatus::*;
        matches!(
            (self, to),
            (Submitted, Denied)
                | (Submitted, WaitingForReview)
                | (Submitted, ClosedByApplicant)
                | (WaitingForReview, ReviewAccepted)
                | (WaitingForReview, ReviewDenied)
                | (WaitingForReview, ClosedByApplicant)
        )
    }

    /// Pending or accepted logs occupy quota and block duplicates
    pub fn is_counted(self) -> bool {
        matches!(
            self,
            LogStatus::Submitted | LogStatus::WaitingForReview | LogStatus::ReviewAccepted
        )
    }

    pub fn is_final(self) -> bool {
        !matches!(self, LogStatus::Submitted | LogStatus::WaitingForReview)
    }
}

/// What an applicant hands in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogSubmission {
    pub user_id: u64,
    pub tier: Tier,
    pub role: Role,
    pub url: String,
    pub encounter_id: u32,
    pub is_cm: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, Serialize, Deserialize)]
pub struct Log {
    id: u64,
    user_id: u64,
    tier: Tier,
    role: Role,
    url: String,
    encounter_id: u32,
    is_cm: bool,
    pool: BossLogPool,
    status: LogStatus,
    reviewer: Option<u64>,
    submitted_at: SystemTime,
}

impl Log {
    /// Creates a log in [`LogStatus::Submitted`]; the pool is resolved here
    /// once and never changes afterwards
    pub fn new(id: u64, submission: LogSubmission, roster: &Roster) -> Self {
        let pool = roster.log_pool(submission.encounter_id, submission.is_cm);
        Self {
            id,
            user_id: submission.user_id,
            tier: submission.tier,
            role: submission.role,
            url: submission.url.trim().to_string(),
            encounter_id: submission.encounter_id,
            is_cm: submission.is_cm,
            pool,
            status: LogStatus::Submitted,
            reviewer: None,
            submitted_at: SystemTime::now(),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn user_id(&self) -> u64 {
        self.user_id
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn encounter_id(&self) -> u32 {
        self.encounter_id
    }

    pub fn is_cm(&self) -> bool {
        self.is_cm
    }

    pub fn pool(&self) -> BossLogPool {
        self.pool
    }

    pub fn status(&self) -> LogStatus {
        self.status
    }

    pub fn reviewer(&self) -> Option<u64> {
        self.reviewer
    }

    pub fn submitted_at(&self) -> SystemTime {
        self.submitted_at
    }

    /// Same boss and tier as `other`; tier 3 logs also need the same role
    pub fn same_slot(&self, other: &Log) -> bool {
        self.encounter_id == other.encounter_id
            && self.is_cm == other.is_cm
            && self.tier == other.tier
            && (self.tier != Tier::Three || self.role == other.role)
    }

    fn transition(&mut self, to: LogStatus) -> Result<(), EngineError> {
        if !self.status.can_transition(to) {
            return Err(EngineError::InvalidTransition {
                from: self.status.to_string(),
                to: to.to_string(),
            });
        }
        self.status = to;
        Ok(())
    }

    /// Outcome of the automatic checks: denied on ERROR, otherwise queued
    pub fn settle(&mut self, verdict: Severity) -> Result<LogStatus, EngineError> {
        let to = match verdict {
            Severity::Error => LogStatus::Denied,
            Severity::Ok | Severity::Warning => LogStatus::WaitingForReview,
        };
        self.transition(to)?;
        Ok(to)
    }

    pub fn review(&mut self, accepted: bool, reviewer: u64) -> Result<LogStatus, EngineError> {
        let to = if accepted {
            LogStatus::ReviewAccepted
        } else {
            LogStatus::ReviewDenied
        };
        self.transition(to)?;
        self.reviewer = Some(reviewer);
        Ok(to)
    }

    pub fn close(&mut self) -> Result<(), EngineError> {
        self.transition(LogStatus::ClosedByApplicant)
    }
}
