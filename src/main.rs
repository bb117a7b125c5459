use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tiergate::{
    AchievementProgress, EngineConfig, EquipmentSet, FeedbackCollection, KillProof, LogReport, Roster, Tier,
    check_log_report, compare_equipment_with, kills_from_achievements, render_collection,
    render_group,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "tiergate", version, about = "Check gear and kill proof against tier requirements")]
struct Cli {
    /// JSON file overriding the default requirements
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print findings as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compare a player's equipment against a reference build
    Compare {
        #[arg(long)]
        player: PathBuf,
        #[arg(long)]
        reference: PathBuf,
    },
    /// Check kill proof from the account's achievement progress
    Killproof {
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=3))]
        tier: u8,
        /// Achievement progress as returned by the game API
        #[arg(long)]
        kills: PathBuf,
    },
    /// Run the automatic checks on an Elite Insights JSON report
    CheckLog {
        #[arg(long)]
        report: PathBuf,
        #[arg(long)]
        account: String,
    },
    /// List the boss roster
    Roster,
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let text =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Failed to parse {}", path.display()))
}

fn print<T: Serialize>(json: bool, value: &T, text: impl FnOnce() -> String) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        print!("{}", text());
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => EngineConfig::default(),
    };

    match cli.command {
        Command::Compare { player, reference } => {
            let player: EquipmentSet = read_json(&player)?;
            let reference: EquipmentSet = read_json(&reference)?;
            info!(player = %player.name, reference = %reference.name, "comparing equipment");
            let collection = compare_equipment_with(&player, &reference, &config.compare)?;
            print(cli.json, &collection, || render_collection(&collection))?;
        }
        Command::Killproof { tier, kills } => {
            let tier = Tier::try_from(tier)?;
            let progress: Vec<AchievementProgress> = read_json(&kills)?;
            let roster = Roster::default();
            let kills = kills_from_achievements(&roster, &progress);
            info!(%tier, kills = kills.len(), "checking kill proof");
            let group = KillProof::new(&roster, &config.killproof).check(tier, &kills);
            print(cli.json, &group, || render_group(&group))?;
        }
        Command::CheckLog { report, account } => {
            let report: LogReport = read_json(&report)?;
            let collection: FeedbackCollection = check_log_report(&report, &account, &config.report);
            print(cli.json, &collection, || render_collection(&collection))?;
        }
        Command::Roster => {
            let roster = Roster::default();
            print(cli.json, &roster, || {
                roster
                    .bosses()
                    .iter()
                    .map(|b| {
                        format!(
                            "{:<8} {:<24} kill proof {:<12} log pool {}\n",
                            b.encounter_id,
                            b.full_name(),
                            b.kp_pool.to_string(),
                            b.log_pool
                        )
                    })
                    .collect()
            })?;
        }
    }
    Ok(())
}
