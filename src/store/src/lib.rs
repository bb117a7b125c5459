//! Log ledger
//!
//! Keeps every submitted log and admits new ones. The duplicate and quota
//! checks read the applicant's earlier logs, so check and insert happen under
//! one lock; two racing submissions can never both pass a quota that only
//! one of them fits.

use std::fs;
use std::io::Write;
use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::SystemTime;

use anyhow::Context;
use bincode::{Decode, Encode, config};
use eligibility::{
    Log, LogStatus, LogSubmission, PromotionConfig, QuotaConfig, Roster, check_submission,
    promotion_earned,
};
use error::EngineError;
use feedback::FeedbackCollection;
use tracing::{debug, info};

#[cfg(test)]
mod tests;

/// Current snapshot format version
pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Debug, Encode, Decode)]
struct Snapshot {
    version: u32,
    saved_at: SystemTime,
    next_id: u64,
    logs: Vec<Log>,
}

#[derive(Debug)]
struct LedgerState {
    next_id: u64,
    logs: Vec<Log>,
}

/// Result of a submission: the stored log and everything that was checked
#[derive(Debug, Clone)]
pub struct Admission {
    pub log: Log,
    pub feedback: FeedbackCollection,
}

/// Result of a review decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReviewOutcome {
    pub status: LogStatus,
    /// The accepted log completed the applicant's tier
    pub promoted: bool,
}

pub struct LogLedger {
    roster: Roster,
    quota: QuotaConfig,
    promotion: PromotionConfig,
    state: Mutex<LedgerState>,
}

impl LogLedger {
    pub fn new(roster: Roster, quota: QuotaConfig, promotion: PromotionConfig) -> Self {
        Self {
            roster,
            quota,
            promotion,
            state: Mutex::new(LedgerState {
                next_id: 1,
                logs: Vec::new(),
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, LedgerState> {
        // A panic while holding the lock cannot leave a half-inserted log behind
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Admits a log.
    ///
    /// `checks` are the automatic report checks computed by the caller. The
    /// admission checks are added to them and decide the status: a log with
    /// any ERROR is stored as denied, everything else waits for review.
    pub fn submit(
        &self,
        submission: LogSubmission,
        mut checks: FeedbackCollection,
    ) -> Result<Admission, EngineError> {
        let mut state = self.lock();
        let mut log = Log::new(state.next_id, submission, &self.roster);

        checks.add(check_submission(&log, &state.logs, &self.quota)?);
        let status = log.settle(checks.aggregate())?;
        info!(id = log.id(), user = log.user_id(), %status, "log submitted");

        state.next_id += 1;
        state.logs.push(log.clone());
        Ok(Admission {
            log,
            feedback: checks,
        })
    }

    pub fn review(
        &self,
        id: u64,
        accepted: bool,
        reviewer: u64,
    ) -> Result<ReviewOutcome, EngineError> {
        let mut state = self.lock();
        let index = state
            .logs
            .iter()
            .position(|l| l.id() == id)
            .ok_or(EngineError::UnknownLog { id })?;
        let status = state.logs[index].review(accepted, reviewer)?;

        let log = &state.logs[index];
        let history: Vec<Log> = state
            .logs
            .iter()
            .filter(|l| l.user_id() == log.user_id())
            .cloned()
            .collect();
        let promoted = promotion_earned(log, &history, &self.promotion);
        info!(id, reviewer, %status, promoted, "log reviewed");
        Ok(ReviewOutcome { status, promoted })
    }

    /// Withdraws a pending log
    pub fn close(&self, id: u64) -> Result<(), EngineError> {
        let mut state = self.lock();
        let log = state
            .logs
            .iter_mut()
            .find(|l| l.id() == id)
            .ok_or(EngineError::UnknownLog { id })?;
        log.close()
    }

    pub fn get(&self, id: u64) -> Option<Log> {
        self.lock().logs.iter().find(|l| l.id() == id).cloned()
    }

    pub fn logs_of(&self, user_id: u64) -> Vec<Log> {
        self.lock()
            .logs
            .iter()
            .filter(|l| l.user_id() == user_id)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.lock().logs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Writes a snapshot next to `path` and renames it into place
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), EngineError> {
        let path = path.as_ref();
        let snapshot = {
            let state = self.lock();
            Snapshot {
                version: SNAPSHOT_VERSION,
                saved_at: SystemTime::now(),
                next_id: state.next_id,
                logs: state.logs.clone(),
            }
        };

        let temp_path = path.with_extension("tmp");
        let mut file =
            fs::File::create(&temp_path).context("Failed to create temporary snapshot file")?;
        bincode::encode_into_std_write(&snapshot, &mut file, config::standard())?;
        file.flush().context("Failed to flush snapshot")?;
        fs::rename(&temp_path, path).context("Failed to commit snapshot file")?;

        debug!(logs = snapshot.logs.len(), path = %path.display(), "ledger saved");
        Ok(())
    }

    pub fn load(
        path: impl AsRef<Path>,
        roster: Roster,
        quota: QuotaConfig,
        promotion: PromotionConfig,
    ) -> Result<Self, EngineError> {
        let path = path.as_ref();
        let mut file = fs::File::open(path)
            .with_context(|| format!("Snapshot not found: {}", path.display()))?;
        let snapshot: Snapshot = bincode::decode_from_std_read(&mut file, config::standard())?;
        if snapshot.version > SNAPSHOT_VERSION {
            return Err(EngineError::CorruptedSnapshot);
        }

        debug!(logs = snapshot.logs.len(), path = %path.display(), "ledger loaded");
        Ok(Self {
            roster,
            quota,
            promotion,
            state: Mutex::new(LedgerState {
                next_id: snapshot.next_id,
                logs: snapshot.logs,
            }),
        })
    }
}

impl Default for LogLedger {
    fn default() -> Self {
        Self::new(
            Roster::default(),
            QuotaConfig::default(),
            PromotionConfig::default(),
        )
    }
}
