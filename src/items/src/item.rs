use error::EngineError;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{MAX_LEVEL, MAX_UPGRADES, Rarity};

/// One equipped piece, fully resolved
#[derive(PartialEq, Eq, Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    id: u64,
    name: String,
    /// Display type, e.g. "Helm", "Ring", "Greatsword"
    kind: String,
    rarity: Rarity,
    level: u32,
    /// Stat set name, e.g. "Berserker's"
    stats: String,
    #[serde(default)]
    upgrades: Vec<String>,
}

impl Item {
    /// Level 80 item with no upgrades; name defaults to the type
    pub fn new(kind: impl Into<String>, rarity: Rarity, stats: impl Into<String>) -> Self {
        let kind = kind.into();
        Self {
            id: 0,
            name: kind.clone(),
            kind,
            rarity,
            level: MAX_LEVEL,
            stats: stats.into(),
            upgrades: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: u64) -> Self {
        self.id = id;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    /// Add one upgrade; a third upgrade is rejected
    pub fn with_upgrade(mut self, upgrade: impl Into<String>) -> Result<Self, EngineError> {
        if self.upgrades.len() >= MAX_UPGRADES {
            return Err(EngineError::TooManyUpgrades {
                item: self.name.clone(),
            });
        }
        self.upgrades.push(upgrade.into());
        Ok(self)
    }

    pub fn with_upgrades<I, S>(self, upgrades: I) -> Result<Self, EngineError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        upgrades
            .into_iter()
            .try_fold(self, |item, upgrade| item.with_upgrade(upgrade))
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn rarity(&self) -> Rarity {
        self.rarity
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn stats(&self) -> &str {
        &self.stats
    }

    pub fn upgrades(&self) -> &[String] {
        &self.upgrades
    }

    pub fn is_legendary(&self) -> bool {
        self.rarity == Rarity::Legendary
    }

    /// Checks the invariants deserialization cannot enforce
    pub fn validate(&self, slot: &str) -> Result<(), EngineError> {
        if self.stats.trim().is_empty() {
            return Err(EngineError::UnresolvedStats {
                slot: slot.to_string(),
            });
        }
        if self.upgrades.len() > MAX_UPGRADES {
            return Err(EngineError::TooManyUpgrades {
                item: self.name.clone(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.rarity, self.stats, self.kind)?;
        if !self.upgrades.is_empty() {
            write!(f, " ({})", self.upgrades.join(", "))?;
        }
        Ok(())
    }
}
