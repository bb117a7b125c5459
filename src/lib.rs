//! Equipment comparison and tier eligibility
//!
//! Thin facade over the workspace crates plus the configuration file that
//! parameterizes all of them.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub use compare::{CompareConfig, compare_equipment, compare_equipment_with};
pub use eligibility::{
    AchievementProgress, ApplicationStatus, Boss, BossLogPool, KillProof, KillProofConfig,
    KillProofPool, Log, LogReport, LogStatus, LogSubmission, PromotionConfig, QuotaConfig,
    ReportConfig, Role, Roster, Tier, check_log_quota, check_log_report, check_submission,
    check_tier_eligibility, kills_from_achievements,
};
pub use error::{EngineError, handle_error};
pub use feedback::{Feedback, FeedbackCollection, FeedbackGroup, Severity};
pub use items::{EquipmentSet, EquipmentSlot, Item, Rarity};
pub use store::LogLedger;

/// Every tunable requirement, loadable from a JSON file. Missing fields keep
/// their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub compare: CompareConfig,
    pub killproof: KillProofConfig,
    pub quota: QuotaConfig,
    pub report: ReportConfig,
    pub promotion: PromotionConfig,
}

impl EngineConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Empty ledger using these limits and the default roster
    pub fn ledger(&self) -> LogLedger {
        LogLedger::new(Roster::default(), self.quota.clone(), self.promotion.clone())
    }
}

/// Plain text rendering, one line per finding
pub fn render_group(group: &FeedbackGroup) -> String {
    let mut out = format!("{} {}\n", group.aggregate().marker(), group.label());
    for feedback in group.iter() {
        let _ = writeln!(out, "  {} {}", feedback.severity.marker(), feedback.message);
    }
    out
}

pub fn render_collection(collection: &FeedbackCollection) -> String {
    let mut out = String::new();
    for group in collection.iter() {
        out.push_str(&render_group(group));
    }
    let _ = writeln!(out, "Result: {}", collection.aggregate());
    out
}
