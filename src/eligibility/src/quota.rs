//! Log-pool quotas and submission admission

use error::EngineError;
use feedback::FeedbackGroup;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::Tier;
use crate::boss::BossLogPool;
use crate::log::{Log, is_valid_log_url};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuotaConfig {
    pub tier2_max_pool_1: usize,
    pub tier3_max_pool_3: usize,
}

impl Default for QuotaConfig {
    fn default() -> Self {
        Self {
            tier2_max_pool_1: 1,
            tier3_max_pool_3: 2,
        }
    }
}

/// Quota check with the default limits
pub fn check_log_quota(
    tier: Tier,
    candidate: BossLogPool,
    existing: &[Log],
) -> Result<FeedbackGroup, EngineError> {
    check_log_quota_with(tier, candidate, existing, &QuotaConfig::default())
}

/// Checks whether a log from `candidate` still fits the pool quota of `tier`.
///
/// `existing` are the applicant's logs; only pending and accepted logs of the
/// same tier count. Tier 1 is granted without logs and has no quota.
pub fn check_log_quota_with(
    tier: Tier,
    candidate: BossLogPool,
    existing: &[Log],
    config: &QuotaConfig,
) -> Result<FeedbackGroup, EngineError> {
    let mut group = FeedbackGroup::new("Log pool");
    let used = |pool: BossLogPool| {
        existing
            .iter()
            .filter(|l| l.tier() == tier && l.status().is_counted() && l.pool() == pool)
            .count()
    };

    if tier == Tier::One {
        return Err(EngineError::UnsupportedTier {
            tier: tier.number(),
            operation: "log quota",
        });
    }
    if candidate == BossLogPool::NotAllowed {
        group.error("Logs of this boss are not accepted");
        return Ok(group);
    }

    match tier {
        Tier::One => {}
        Tier::Two => {
            let max = config.tier2_max_pool_1;
            if candidate == BossLogPool::Pool1 && used(BossLogPool::Pool1) >= max {
                group.error(format!(
                    "You can only submit {max} log(s) from pool 1 for tier 2"
                ));
            }
        }
        Tier::Three => match candidate {
            BossLogPool::Pool1 | BossLogPool::Pool2 => {
                group.error("Logs from pool 1 and pool 2 are not accepted for tier 3");
            }
            BossLogPool::Pool3 => {
                let max = config.tier3_max_pool_3;
                let used = used(BossLogPool::Pool3);
                debug!(used, max, "tier 3 pool 3 usage");
                if used >= max {
                    group.error(format!(
                        "You can only submit {max} logs from pool 3 for tier 3, \
                         the remaining log has to come from pool 4"
                    ));
                }
            }
            _ => {}
        },
    }

    if group.is_empty() {
        group.ok(format!("Logs from pool {candidate} are accepted for tier {tier}"));
    }
    Ok(group)
}

/// Admission check for a new log against the applicant's earlier logs.
///
/// The URL and duplicate checks run first; quota counting only happens when
/// the log is not a duplicate. Only pending and accepted logs take part.
/// `existing` may contain other users' logs.
pub fn check_submission(
    candidate: &Log,
    existing: &[Log],
    config: &QuotaConfig,
) -> Result<FeedbackGroup, EngineError> {
    let mut group = FeedbackGroup::new("Submission");

    if !is_valid_log_url(candidate.url()) {
        group.error("Invalid log url, please submit a https://dps.report/ link");
        return Ok(group);
    }

    // Denied and withdrawn logs may be handed in again
    let active = existing
        .iter()
        .filter(|l| l.id() != candidate.id() && l.status().is_counted());
    if active.clone().any(|l| l.url() == candidate.url()) {
        group.error("This log has already been submitted");
        return Ok(group);
    }

    // Tier 3 quotas are per role, tier 2 quotas per player
    let own: Vec<Log> = active
        .filter(|l| {
            l.user_id() == candidate.user_id()
                && (candidate.tier() != Tier::Three || l.role() == candidate.role())
        })
        .cloned()
        .collect();
    if own.iter().any(|l| l.same_slot(candidate)) {
        let tier = candidate.tier();
        group.error(match tier {
            Tier::Three => format!(
                "You already submitted a log of this boss for tier {tier} as {}",
                candidate.role()
            ),
            _ => format!("You already submitted a log of this boss for tier {tier}"),
        });
        return Ok(group);
    }

    group.absorb(check_log_quota_with(
        candidate.tier(),
        candidate.pool(),
        &own,
        config,
    )?);
    Ok(group)
}
