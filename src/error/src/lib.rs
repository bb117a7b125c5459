//! Engine error handling
//!
//! Mismatches between a player's gear and a reference build are *findings* and travel
//! as feedback. The variants here are reserved for violated input contracts and for
//! failures of the surrounding plumbing (configuration, ledger snapshots).

use bincode::error::{DecodeError, EncodeError};
use thiserror::Error;

/// Errors that abort a single engine call
#[derive(Debug, Error)]
pub enum EngineError {
    /// An item arrived without a resolved stat set
    #[error("Item in slot {slot} has no resolved stat set")]
    UnresolvedStats { slot: String },

    /// Items carry at most two upgrades
    #[error("Max amount of upgrades reached on {item}")]
    TooManyUpgrades { item: String },

    /// The reference build carries no weapons at all
    #[error("Reference build {build} has no weapons")]
    ReferenceWithoutWeapons { build: String },

    /// Off-hand occupied behind a two-handed main-hand
    #[error("Invalid weapon loadout in {set}: {reason}")]
    InvalidLoadout { set: String, reason: String },

    /// The operation is not defined for the requested tier
    #[error("Tier {tier} is not supported by {operation}")]
    UnsupportedTier { tier: u8, operation: &'static str },

    /// Log status machine violation
    #[error("Log cannot move from {from} to {to}")]
    InvalidTransition { from: String, to: String },

    /// No log with this id in the ledger
    #[error("Log {id} does not exist")]
    UnknownLog { id: u64 },

    /// Configuration file could not be parsed
    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Ledger snapshot errors
    #[error("Persistence error: {0}")]
    Persistence(#[from] anyhow::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Deserialization error
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    /// Snapshot bytes do not decode into a ledger
    #[error("Corrupted ledger snapshot")]
    CorruptedSnapshot,
}

impl From<DecodeError> for EngineError {
    fn from(err: DecodeError) -> Self {
        // Truncated or foreign files surface as utf-8 failures inside string fields
        if err.to_string().contains("invalid utf-8 sequence") {
            EngineError::CorruptedSnapshot
        } else {
            EngineError::Deserialization(err.to_string())
        }
    }
}

impl From<EncodeError> for EngineError {
    fn from(err: EncodeError) -> Self {
        EngineError::Serialization(err.to_string())
    }
}

/// Converts an engine error into a short message for the applicant
pub fn handle_error(error: &EngineError) -> String {
    match error {
        EngineError::UnresolvedStats { slot } => {
            format!("Could not verify the stats of your {slot}, please try again later")
        }
        EngineError::ReferenceWithoutWeapons { build } => {
            format!("The reference build {build} is incomplete, please contact an officer")
        }
        EngineError::UnsupportedTier { tier, .. } => format!("Tier {tier} cannot be checked here"),
        EngineError::UnknownLog { id } => format!("Could not find log {id}"),
        EngineError::CorruptedSnapshot => "The log ledger snapshot is corrupted".to_string(),
        EngineError::Io(e) => match e.kind() {
            std::io::ErrorKind::NotFound => "File not found".to_string(),
            std::io::ErrorKind::PermissionDenied => "Permission denied".to_string(),
            _ => format!("IO error: {}", e),
        },
        _ => error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unresolved_stats_message_names_slot() {
        let err = EngineError::UnresolvedStats {
            slot: "Ring1".to_string(),
        };
        assert_eq!(err.to_string(), "Item in slot Ring1 has no resolved stat set");
        assert!(handle_error(&err).contains("Ring1"));
    }

    #[test]
    fn io_not_found_is_friendly() {
        let err = EngineError::from(std::io::Error::from(std::io::ErrorKind::NotFound));
        assert_eq!(handle_error(&err), "File not found");
    }

    #[test]
    fn other_errors_fall_back_to_display() {
        let err = EngineError::InvalidTransition {
            from: "denied".to_string(),
            to: "accepted".to_string(),
        };
        assert_eq!(handle_error(&err), "Log cannot move from denied to accepted");
    }
}
