use serde::{Deserialize, Serialize};

/// Named investor band derived from a questionnaire score.
///
/// Bands are inclusive ranges over 0..=60; every other integer falls into
/// `Unknown`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RiskBand {
    VeryConservative,
    Conservative,
    Balanced,
    Aggressive,
    VeryAggressive,
    Unknown,
}

impl RiskBand {
    /// Bands a user can pick directly, in display order.
    pub const SELECTABLE: [RiskBand; 5] = [
        RiskBand::VeryConservative,
        RiskBand::Conservative,
        RiskBand::Balanced,
        RiskBand::Aggressive,
        RiskBand::VeryAggressive,
    ];

    pub fn from_score(score: i64) -> Self {
        match score {
            0..=12 => RiskBand::VeryConservative,
            13..=24 => RiskBand::Conservative,
            25..=36 => RiskBand::Balanced,
            37..=48 => RiskBand::Aggressive,
            49..=60 => RiskBand::VeryAggressive,
            _ => RiskBand::Unknown,
        }
    }

    /// How quote results are ordered for investors in this band.
    pub fn ordering_policy(&self) -> OrderingPolicy {
        match self {
            RiskBand::VeryConservative => OrderingPolicy::MinimalVolatility,
            RiskBand::Conservative => OrderingPolicy::ConservativeGrowth,
            RiskBand::Balanced => OrderingPolicy::Balanced,
            RiskBand::Aggressive => OrderingPolicy::Aggressive,
            RiskBand::VeryAggressive => OrderingPolicy::MaximalGrowth,
            RiskBand::Unknown => OrderingPolicy::Default,
        }
    }

    /// Representative score used when the band is picked manually.
    pub fn preset_score(&self) -> Option<i64> {
        match self {
            RiskBand::VeryConservative => Some(6),
            RiskBand::Conservative => Some(18),
            RiskBand::Balanced => Some(30),
            RiskBand::Aggressive => Some(42),
            RiskBand::VeryAggressive => Some(55),
            RiskBand::Unknown => None,
        }
    }

    pub fn preset_label(&self) -> Option<&'static str> {
        match self {
            RiskBand::VeryConservative => Some("Very Conservative (0–12)"),
            RiskBand::Conservative => Some("Conservative (13–24)"),
            RiskBand::Balanced => Some("Balanced (25–36)"),
            RiskBand::Aggressive => Some("Aggressive (37–48)"),
            RiskBand::VeryAggressive => Some("Very Aggressive (49–60)"),
            RiskBand::Unknown => None,
        }
    }
}

impl std::fmt::Display for RiskBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskBand::VeryConservative => write!(f, "very_conservative"),
            RiskBand::Conservative => write!(f, "conservative"),
            RiskBand::Balanced => write!(f, "balanced"),
            RiskBand::Aggressive => write!(f, "aggressive"),
            RiskBand::VeryAggressive => write!(f, "very_aggressive"),
            RiskBand::Unknown => write!(f, "unknown"),
        }
    }
}

/// Symbolic display color attached to a profile. Rendering is up to the client.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorKey {
    Blue,
    Teal,
    Green,
    Orange,
    Red,
    Gray,
}

/// Ordering rule applied to ranked instruments.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OrderingPolicy {
    /// Ascending by absolute percent change
    MinimalVolatility,
    /// Ascending by raw percent change
    ConservativeGrowth,
    /// Ascending by distance from a 5% reference return
    Balanced,
    /// Descending by raw percent change
    Aggressive,
    /// Descending by raw percent change
    MaximalGrowth,
    /// Used when no band applies; descending by raw percent change
    Default,
}

impl Default for OrderingPolicy {
    fn default() -> Self {
        OrderingPolicy::Default
    }
}

/// Investor profile for a score band.
///
/// All text is static; two profiles for the same score compare equal.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RiskProfile {
    pub band: RiskBand,
    pub title: &'static str,
    pub summary: &'static str,
    /// Fund categories in display order
    pub recommended_categories: &'static [&'static str],
    pub personal_message: &'static str,
    pub color_key: ColorKey,
}

/// Entry in the manual profile picker.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RiskPreset {
    pub band: RiskBand,
    pub label: &'static str,
    pub score: i64,
}
