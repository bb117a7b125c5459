//! Automatic checks on a parsed combat-log report

use feedback::{FeedbackCollection, FeedbackGroup};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The part of an Elite Insights JSON report the checks look at
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogReport {
    #[serde(rename = "eiEncounterID", default)]
    pub encounter_id: u32,
    #[serde(default)]
    pub fight_name: String,
    #[serde(rename = "isCM", default)]
    pub is_cm: bool,
    pub success: bool,
    /// Zero when the report does not carry a build
    #[serde(rename = "gW2Build", default)]
    pub game_build: u64,
    pub players: Vec<ReportPlayer>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportPlayer {
    pub account: String,
    #[serde(default)]
    pub defenses: Vec<Defenses>,
    #[serde(default)]
    pub buff_uptimes: Vec<BuffUptime>,
}

impl ReportPlayer {
    fn downs(&self) -> u32 {
        self.defenses.first().map_or(0, |d| d.down_count)
    }

    fn deaths(&self) -> u32 {
        self.defenses.first().map_or(0, |d| d.dead_count)
    }

    fn has_buff(&self, id: u64) -> bool {
        self.buff_uptimes.iter().any(|b| b.id == id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Defenses {
    #[serde(default)]
    pub down_count: u32,
    #[serde(default)]
    pub dead_count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuffUptime {
    pub id: u64,
}

/// A buff that invalidates a log when anyone in the squad had it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForbiddenBuff {
    pub id: u64,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub max_squad_downs: u32,
    pub max_squad_deaths: u32,
    pub min_game_build: u64,
    pub forbidden_buffs: Vec<ForbiddenBuff>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            max_squad_downs: 9,
            max_squad_deaths: 2,
            min_game_build: 147894,
            forbidden_buffs: vec![
                ForbiddenBuff {
                    id: 29726,
                    message: "We do not allow logs with a Blood Magic Necromancer present"
                        .to_string(),
                },
                ForbiddenBuff {
                    id: 68087,
                    message: "We do not allow logs with Emboldened Mode active".to_string(),
                },
            ],
        }
    }
}

pub fn check_log_report(
    report: &LogReport,
    account: &str,
    config: &ReportConfig,
) -> FeedbackCollection {
    let mut collection = FeedbackCollection::new();
    let applicant = report.players.iter().find(|p| p.account == account);

    let mut valid = FeedbackGroup::new("Checking if log is valid");
    if applicant.is_none() {
        valid.error(format!("Could not find account {account} in log"));
    }
    if report.game_build != 0 && report.game_build < config.min_game_build {
        valid.error(format!(
            "The log was recorded on game build {}, at least build {} is required",
            report.game_build, config.min_game_build
        ));
    }
    collection.add(valid);

    let mut performance = FeedbackGroup::new("Checking performance");
    if !report.success {
        performance.error("Boss was not killed");
    }
    if applicant.is_some_and(|p| p.deaths() > 0) {
        performance.error("You've died. You must be alive at the end of the fight");
    }

    let downs: u32 = report.players.iter().map(ReportPlayer::downs).sum();
    let deaths: u32 = report.players.iter().map(ReportPlayer::deaths).sum();
    debug!(fight = %report.fight_name, downs, deaths, "squad defenses");
    if downs > config.max_squad_downs {
        performance.warning(format!("Your squad has a lot of downs ({downs})"));
    }
    if deaths > config.max_squad_deaths {
        performance.warning(format!("Your squad has a lot of deaths ({deaths})"));
    }

    for buff in &config.forbidden_buffs {
        if report.players.iter().any(|p| p.has_buff(buff.id)) {
            performance.error(buff.message.clone());
        }
    }
    collection.add(performance);

    collection
}

#[cfg(test)]
mod tests {
    use super::*;
    use feedback::Severity;
    use pretty_assertions::assert_eq;

    const REPORT: &str = r#"{
        "eiEncounterID": 132358,
        "fightName": "Dhuum",
        "isCM": false,
        "success": true,
        "gW2Build": 150000,
        "duration": "06m 12s",
        "players": [
            {"account": "Applicant.1234", "defenses": [{"downCount": 1, "deadCount": 0}], "buffUptimes": [{"id": 740}]},
            {"account": "Healer.5678", "defenses": [{"downCount": 0, "deadCount": 0}], "buffUptimes": []}
        ]
    }"#;

    fn report() -> LogReport {
        serde_json::from_str(REPORT).unwrap()
    }

    #[test]
    fn clean_log_has_no_findings() {
        let report = report();
        assert_eq!(report.encounter_id, 132358);
        let collection = check_log_report(&report, "Applicant.1234", &ReportConfig::default());
        assert_eq!(collection.aggregate(), Severity::Ok);
        assert!(collection.iter().all(FeedbackGroup::is_empty));
    }

    #[test]
    fn missing_account_and_failed_kill() {
        let mut report = report();
        report.success = false;
        let collection = check_log_report(&report, "Someone.0000", &ReportConfig::default());
        assert_eq!(collection.aggregate(), Severity::Error);
        let messages: Vec<&str> = collection
            .iter()
            .flat_map(FeedbackGroup::iter)
            .map(|f| f.message.as_str())
            .collect();
        assert_eq!(
            messages,
            vec!["Could not find account Someone.0000 in log", "Boss was not killed"]
        );
    }

    #[test]
    fn squad_trouble_is_a_warning() {
        let mut report = report();
        report.players[1].defenses[0].down_count = 12;
        report.players[1].defenses[0].dead_count = 3;
        let collection = check_log_report(&report, "Applicant.1234", &ReportConfig::default());
        assert_eq!(collection.aggregate(), Severity::Warning);
        let performance = collection.group("Checking performance").unwrap();
        assert_eq!(performance.len(), 2);
    }

    #[test]
    fn dead_applicant_and_forbidden_buffs_are_errors() {
        let mut report = report();
        report.players[0].defenses[0].dead_count = 1;
        report.players[1].buff_uptimes.push(BuffUptime { id: 29726 });
        let collection = check_log_report(&report, "Applicant.1234", &ReportConfig::default());
        let performance = collection.group("Checking performance").unwrap();
        assert_eq!(performance.aggregate(), Severity::Error);
        assert_eq!(performance.len(), 2);
    }

    #[test]
    fn old_builds_are_rejected() {
        let mut report = report();
        report.game_build = 140000;
        let collection = check_log_report(&report, "Applicant.1234", &ReportConfig::default());
        let valid = collection.group("Checking if log is valid").unwrap();
        assert_eq!(valid.aggregate(), Severity::Error);
    }
}
