//! Engine configuration

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::search::StrategyKind;

/// How the driver picks a piece to remove after the computer forms a mill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CapturePolicy {
    /// Lowest-numbered capture candidate
    #[default]
    FirstCandidate,
    /// Candidate whose removal the evaluator likes best for the mover
    Evaluated,
}

impl fmt::Display for CapturePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CapturePolicy::FirstCandidate => f.write_str("first"),
            CapturePolicy::Evaluated => f.write_str("evaluated"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown capture policy {0:?}, expected \"first\" or \"evaluated\"")]
pub struct ParseCapturePolicyError(String);

impl FromStr for CapturePolicy {
    type Err = ParseCapturePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first" | "first-candidate" => Ok(CapturePolicy::FirstCandidate),
            "evaluated" | "best" => Ok(CapturePolicy::Evaluated),
            _ => Err(ParseCapturePolicyError(s.to_string())),
        }
    }
}

/// Engine settings.
///
/// The default plays the lookahead strategy, seeds the greedy tie-break from
/// the OS and removes the first capture candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    pub strategy: StrategyKind,
    /// Seed for the greedy tie-break; `None` draws one from the OS
    pub seed: Option<u64>,
    pub capture_policy: CapturePolicy,
}

impl EngineConfig {
    pub fn with_strategy(strategy: StrategyKind) -> Self {
        Self {
            strategy,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn seeded(self, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..self
        }
    }

    #[must_use]
    pub fn capture_policy(self, capture_policy: CapturePolicy) -> Self {
        Self {
            capture_policy,
            ..self
        }
    }
}
