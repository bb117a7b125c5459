use std::thread;

use eligibility::{BossLogPool, Role, Tier};
use feedback::{FeedbackGroup, Severity};
use pretty_assertions::assert_eq;
use tempfile::tempdir;

use super::*;

fn submission(user_id: u64, tier: Tier, role: Role, encounter_id: u32, url: &str) -> LogSubmission {
    LogSubmission {
        user_id,
        tier,
        role,
        url: url.to_string(),
        encounter_id,
        is_cm: false,
    }
}

fn clean_checks() -> FeedbackCollection {
    let mut checks = FeedbackCollection::new();
    checks.add(FeedbackGroup::new("Checking performance"));
    checks
}

#[test]
fn submissions_wait_for_review() {
    let ledger = LogLedger::default();
    let admission = ledger
        .submit(
            submission(1, Tier::Two, Role::None, 132358, "https://dps.report/a"),
            clean_checks(),
        )
        .unwrap();

    assert_eq!(admission.log.status(), LogStatus::WaitingForReview);
    assert_eq!(admission.log.pool(), BossLogPool::Pool4);
    assert_eq!(admission.feedback.aggregate(), Severity::Ok);
    assert_eq!(ledger.len(), 1);
}

#[test]
fn failed_report_checks_deny_the_log() {
    let ledger = LogLedger::default();
    let mut checks = FeedbackCollection::new();
    let mut performance = FeedbackGroup::new("Checking performance");
    performance.error("Boss was not killed");
    checks.add(performance);

    let admission = ledger
        .submit(
            submission(1, Tier::Two, Role::None, 132358, "https://dps.report/a"),
            checks,
        )
        .unwrap();
    assert_eq!(admission.log.status(), LogStatus::Denied);

    // A denied log does not block the same boss
    let admission = ledger
        .submit(
            submission(1, Tier::Two, Role::None, 132358, "https://dps.report/b"),
            clean_checks(),
        )
        .unwrap();
    assert_eq!(admission.log.status(), LogStatus::WaitingForReview);
}

#[test]
fn duplicate_boss_is_denied() {
    let ledger = LogLedger::default();
    let first = submission(1, Tier::Three, Role::Heal, 132611, "https://dps.report/a");
    let second = submission(1, Tier::Three, Role::Heal, 132611, "https://dps.report/b");
    ledger.submit(first, clean_checks()).unwrap();
    let admission = ledger.submit(second, clean_checks()).unwrap();
    assert_eq!(admission.log.status(), LogStatus::Denied);
    assert_eq!(admission.feedback.aggregate(), Severity::Error);
}

#[test]
fn concurrent_submissions_respect_the_quota() {
    let ledger = LogLedger::default();
    // Vale Guardian and Gorseval are both pool 1; tier 2 allows one of them
    thread::scope(|scope| {
        for (encounter_id, url) in [(131329, "https://dps.report/vg"), (131330, "https://dps.report/gorse")] {
            let ledger = &ledger;
            scope.spawn(move || {
                ledger
                    .submit(submission(5, Tier::Two, Role::None, encounter_id, url), clean_checks())
                    .unwrap();
            });
        }
    });

    let statuses: Vec<LogStatus> = ledger.logs_of(5).iter().map(Log::status).collect();
    assert_eq!(statuses.len(), 2);
    assert_eq!(
        statuses.iter().filter(|s| **s == LogStatus::WaitingForReview).count(),
        1
    );
    assert_eq!(statuses.iter().filter(|s| **s == LogStatus::Denied).count(), 1);
}

#[test]
fn second_accepted_tier_two_log_promotes() {
    let ledger = LogLedger::default();
    let a = ledger
        .submit(
            submission(2, Tier::Two, Role::None, 132358, "https://dps.report/a"),
            clean_checks(),
        )
        .unwrap();
    let b = ledger
        .submit(
            submission(2, Tier::Two, Role::None, 132611, "https://dps.report/b"),
            clean_checks(),
        )
        .unwrap();

    let outcome = ledger.review(a.log.id(), true, 100).unwrap();
    assert_eq!(
        outcome,
        ReviewOutcome {
            status: LogStatus::ReviewAccepted,
            promoted: false
        }
    );
    let outcome = ledger.review(b.log.id(), true, 100).unwrap();
    assert!(outcome.promoted);
    assert_eq!(ledger.get(b.log.id()).unwrap().reviewer(), Some(100));
}

#[test]
fn unknown_ids_and_illegal_transitions() {
    let ledger = LogLedger::default();
    assert!(matches!(
        ledger.review(42, true, 1),
        Err(EngineError::UnknownLog { id: 42 })
    ));

    let admission = ledger
        .submit(
            submission(3, Tier::Two, Role::None, 132358, "https://dps.report/a"),
            clean_checks(),
        )
        .unwrap();
    ledger.close(admission.log.id()).unwrap();
    assert!(matches!(
        ledger.review(admission.log.id(), true, 1),
        Err(EngineError::InvalidTransition { .. })
    ));
}

#[test]
fn snapshot_roundtrip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("ledger.bin");

    let ledger = LogLedger::default();
    ledger
        .submit(
            submission(4, Tier::Three, Role::Dps, 132867, "https://dps.report/qtp"),
            clean_checks(),
        )
        .unwrap();
    ledger.save(&path).unwrap();
    assert!(!path.with_extension("tmp").exists());

    let restored = LogLedger::load(
        &path,
        Roster::default(),
        QuotaConfig::default(),
        PromotionConfig::default(),
    )
    .unwrap();
    assert_eq!(restored.logs_of(4), ledger.logs_of(4));

    // Ids continue after the restored logs
    let admission = restored
        .submit(
            submission(4, Tier::Three, Role::Dps, 132358, "https://dps.report/dhuum"),
            clean_checks(),
        )
        .unwrap();
    assert_eq!(admission.log.id(), 2);
}

#[test]
fn garbage_snapshot_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("ledger.bin");
    std::fs::write(&path, [0xff; 3]).unwrap();

    let result = LogLedger::load(
        &path,
        Roster::default(),
        QuotaConfig::default(),
        PromotionConfig::default(),
    );
    assert!(matches!(
        result,
        Err(EngineError::CorruptedSnapshot | EngineError::Deserialization(_))
    ));
}

#[test]
fn missing_snapshot_is_a_persistence_error() {
    let dir = tempdir().unwrap();
    let result = LogLedger::load(
        dir.path().join("absent.bin"),
        Roster::default(),
        QuotaConfig::default(),
        PromotionConfig::default(),
    );
    assert!(matches!(result, Err(EngineError::Persistence(_))));
}

#[test]
fn tier_two_pool_one_cap_holds_across_roles() {
    let ledger = LogLedger::default();
    // Vale Guardian and Gorseval are both pool 1
    let first = ledger
        .submit(
            submission(9, Tier::Two, Role::Dps, 131329, "https://dps.report/vg"),
            clean_checks(),
        )
        .unwrap();
    let second = ledger
        .submit(
            submission(9, Tier::Two, Role::Heal, 131330, "https://dps.report/gorse"),
            clean_checks(),
        )
        .unwrap();

    assert_eq!(first.log.status(), LogStatus::WaitingForReview);
    assert_eq!(second.log.status(), LogStatus::Denied);
}

#[test]
fn log_denied_for_quota_can_be_resubmitted_later() {
    let ledger = LogLedger::default();
    let vg = ledger
        .submit(
            submission(9, Tier::Two, Role::None, 131329, "https://dps.report/vg"),
            clean_checks(),
        )
        .unwrap();
    let gorse = submission(9, Tier::Two, Role::None, 131330, "https://dps.report/gorse");
    let denied = ledger.submit(gorse.clone(), clean_checks()).unwrap();
    assert_eq!(denied.log.status(), LogStatus::Denied);

    ledger.review(vg.log.id(), false, 100).unwrap();
    let retry = ledger.submit(gorse, clean_checks()).unwrap();
    assert_eq!(retry.log.status(), LogStatus::WaitingForReview);
    assert_eq!(retry.feedback.aggregate(), Severity::Ok);
}
