use crate::models::{ProfileDocument, PsychologicalAssessment, RiskTolerance};

/// Sum of every answer across all survey sections, or `None` if the total
/// does not fit in an `i64`.
pub fn total_score(assessment: &PsychologicalAssessment) -> Option<i64> {
    assessment
        .sections()
        .iter()
        .flat_map(|section| section.values())
        .try_fold(0i64, |total, answer| total.checked_add(*answer))
}

/// Rough score used before the psychological survey has been taken.
pub fn estimate_score(tolerance: RiskTolerance) -> i64 {
    match tolerance {
        RiskTolerance::Low => 10,
        RiskTolerance::Medium => 30,
        RiskTolerance::High => 50,
    }
}

/// Score to classify for a stored profile document.
///
/// The onboarding estimate wins over the survey total when both are present.
pub fn effective_score(document: &ProfileDocument) -> Option<i64> {
    document.risk_profile.or(document.risk_total_score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RiskBand;

    #[test]
    fn test_total_score_sums_all_sections() {
        let mut assessment = PsychologicalAssessment::default();
        assessment.emotional_reactivity.insert("market_drop".into(), 3);
        assessment.emotional_reactivity.insert("investment_fall".into(), 2);
        assessment.cognitive_biases.insert("loss_aversion".into(), 1);
        assessment.time_preference.insert("now_or_later".into(), 4);
        assessment.personality_traits.insert("openness".into(), 0);

        assert_eq!(total_score(&assessment), Some(10));
    }

    #[test]
    fn test_empty_assessment_scores_zero() {
        assert_eq!(total_score(&PsychologicalAssessment::default()), Some(0));
    }

    #[test]
    fn test_total_score_overflow_is_rejected() {
        let mut assessment = PsychologicalAssessment::default();
        assessment.emotional_reactivity.insert("market_drop".into(), i64::MAX);
        assessment.cognitive_biases.insert("anchoring".into(), 1);
        assert_eq!(total_score(&assessment), None);

        let mut negative = PsychologicalAssessment::default();
        negative.emotional_reactivity.insert("market_drop".into(), i64::MIN);
        negative.cognitive_biases.insert("anchoring".into(), -1);
        assert_eq!(total_score(&negative), None);
    }

    #[test]
    fn test_estimates_map_to_expected_bands() {
        assert_eq!(RiskBand::from_score(estimate_score(RiskTolerance::Low)), RiskBand::VeryConservative);
        assert_eq!(RiskBand::from_score(estimate_score(RiskTolerance::Medium)), RiskBand::Balanced);
        assert_eq!(RiskBand::from_score(estimate_score(RiskTolerance::High)), RiskBand::VeryAggressive);
    }

    #[test]
    fn test_effective_score_prefers_onboarding_estimate() {
        let document = ProfileDocument {
            risk_profile: Some(30),
            risk_total_score: Some(44),
            has_completed_questionnaire: true,
        };
        assert_eq!(effective_score(&document), Some(30));

        let survey_only = ProfileDocument {
            risk_profile: None,
            risk_total_score: Some(44),
            has_completed_questionnaire: true,
        };
        assert_eq!(effective_score(&survey_only), Some(44));
    }
}
