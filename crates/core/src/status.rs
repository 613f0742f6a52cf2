//! Chef competition status and its normalization rule.
//!
//! Older data carried a boolean `eliminated` flag; current data carries an
//! explicit status string. [`ChefStatus::normalize`] collapses both
//! representations into one enum exactly once, at ingestion. Read sites
//! must never re-derive status from the legacy flag.

use serde::{Deserialize, Serialize};

/// Where a chef currently stands in the competition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChefStatus {
    /// Still cooking in the main competition.
    Active,
    /// Competing in Last Chance Kitchen after elimination.
    #[serde(rename = "lck")]
    LastChanceKitchen,
    /// Out of the competition entirely.
    Eliminated,
}

impl ChefStatus {
    /// Parse an explicit status string. Returns `None` for anything that
    /// is not one of the three valid values.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "active" => Some(ChefStatus::Active),
            "lck" => Some(ChefStatus::LastChanceKitchen),
            "eliminated" => Some(ChefStatus::Eliminated),
            _ => None,
        }
    }

    /// Collapse the explicit status field and the legacy eliminated flag
    /// into a single status.
    ///
    /// An explicit, valid status wins. Otherwise the legacy flag maps to
    /// `Eliminated` when true and `Active` when false.
    pub fn normalize(explicit: Option<&str>, legacy_eliminated: bool) -> Self {
        if let Some(status) = explicit.and_then(Self::parse) {
            return status;
        }
        if legacy_eliminated {
            ChefStatus::Eliminated
        } else {
            ChefStatus::Active
        }
    }

    /// Sort rank: active rows group before LCK rows, which group before
    /// eliminated rows.
    pub fn rank(self) -> u8 {
        match self {
            ChefStatus::Active => 0,
            ChefStatus::LastChanceKitchen => 1,
            ChefStatus::Eliminated => 2,
        }
    }

    /// The wire representation (`active`, `lck`, `eliminated`).
    pub fn as_str(self) -> &'static str {
        match self {
            ChefStatus::Active => "active",
            ChefStatus::LastChanceKitchen => "lck",
            ChefStatus::Eliminated => "eliminated",
        }
    }
}
