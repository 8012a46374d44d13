use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::risk::RiskProfile;

/// Answers to the psychological survey, keyed by question id per section.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PsychologicalAssessment {
    #[serde(default)]
    pub emotional_reactivity: HashMap<String, i64>,
    #[serde(default)]
    pub cognitive_biases: HashMap<String, i64>,
    #[serde(default)]
    pub decision_making_style: HashMap<String, i64>,
    #[serde(default)]
    pub time_preference: HashMap<String, i64>,
    #[serde(default)]
    pub personality_traits: HashMap<String, i64>,
}

impl PsychologicalAssessment {
    pub fn sections(&self) -> [&HashMap<String, i64>; 5] {
        [
            &self.emotional_reactivity,
            &self.cognitive_biases,
            &self.decision_making_style,
            &self.time_preference,
            &self.personality_traits,
        ]
    }
}

/// Self-reported tolerance from the onboarding questionnaire.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RiskTolerance {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EstimateRequest {
    pub risk_tolerance: RiskTolerance,
}

/// Fields of the stored user profile document that carry a score.
///
/// The document store owns the schema; only these keys are read.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDocument {
    /// Estimate written by the onboarding questionnaire
    #[serde(default)]
    pub risk_profile: Option<i64>,
    /// Sum written by the psychological survey
    #[serde(default)]
    pub risk_total_score: Option<i64>,
    #[serde(default)]
    pub has_completed_questionnaire: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoredProfile {
    pub score: i64,
    pub profile: RiskProfile,
}
