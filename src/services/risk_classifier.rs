use crate::models::{ColorKey, ProfileDocument, RiskBand, RiskPreset, RiskProfile};
use crate::services::scoring_service;

const VERY_CONSERVATIVE: RiskProfile = RiskProfile {
    band: RiskBand::VeryConservative,
    title: "Very Conservative Investor",
    summary: "You prefer safety and capital preservation over high returns. Your focus is on minimizing risk and avoiding losses.",
    recommended_categories: &["Government Bond Funds", "Money Market Funds", "Short-Term Bond Funds"],
    personal_message: "A steady approach suits you best. Consider regular reviews to ensure your investments remain low risk.",
    color_key: ColorKey::Blue,
};

const CONSERVATIVE: RiskProfile = RiskProfile {
    band: RiskBand::Conservative,
    title: "Conservative Investor",
    summary: "You are cautious but open to some growth. You value stability and are willing to accept limited risk for modest returns.",
    recommended_categories: &["Bond Funds", "Conservative Allocation Funds", "Dividend Funds"],
    personal_message: "Balance is key. Diversify with a tilt toward safety, but don't shy away from small growth opportunities.",
    color_key: ColorKey::Teal,
};

const BALANCED: RiskProfile = RiskProfile {
    band: RiskBand::Balanced,
    title: "Balanced Investor",
    summary: "You seek a mix of growth and stability. You are comfortable with moderate risk for the potential of higher returns.",
    recommended_categories: &["Index Funds", "Balanced Funds", "Large Cap Equity Funds"],
    personal_message: "A diversified portfolio can help you achieve your goals. Review your allocations as your needs change.",
    color_key: ColorKey::Green,
};

const AGGRESSIVE: RiskProfile = RiskProfile {
    band: RiskBand::Aggressive,
    title: "Aggressive Investor",
    summary: "You are growth-oriented and willing to accept significant risk for higher returns. You can tolerate market ups and downs.",
    recommended_categories: &["Equity Funds", "International Funds", "Sector Funds"],
    personal_message: "Stay focused on your long-term goals, but be mindful of volatility. Regularly reassess your risk tolerance.",
    color_key: ColorKey::Orange,
};

const VERY_AGGRESSIVE: RiskProfile = RiskProfile {
    band: RiskBand::VeryAggressive,
    title: "Very Aggressive Investor",
    summary: "You thrive on risk and pursue maximum growth. You are comfortable with large fluctuations in your portfolio value.",
    recommended_categories: &["Emerging Market Funds", "Small Cap Funds", "Thematic/Innovation Funds"],
    personal_message: "Your bold approach can yield high rewards, but remember to periodically secure gains and manage risk.",
    color_key: ColorKey::Red,
};

const UNKNOWN: RiskProfile = RiskProfile {
    band: RiskBand::Unknown,
    title: "Unknown",
    summary: "Score out of range.",
    recommended_categories: &[],
    personal_message: "Please retake the risk assessment.",
    color_key: ColorKey::Gray,
};

/// Map any integer score to its investor profile.
///
/// Out-of-range scores (negative or above 60) yield the "Unknown" profile.
pub fn profile(score: i64) -> RiskProfile {
    profile_for_band(RiskBand::from_score(score))
}

pub fn profile_for_band(band: RiskBand) -> RiskProfile {
    match band {
        RiskBand::VeryConservative => VERY_CONSERVATIVE,
        RiskBand::Conservative => CONSERVATIVE,
        RiskBand::Balanced => BALANCED,
        RiskBand::Aggressive => AGGRESSIVE,
        RiskBand::VeryAggressive => VERY_AGGRESSIVE,
        RiskBand::Unknown => UNKNOWN,
    }
}

/// Profile for the score held in a stored user document, if it has one.
pub fn profile_for_document(document: &ProfileDocument) -> Option<(i64, RiskProfile)> {
    scoring_service::effective_score(document).map(|score| (score, profile(score)))
}

pub fn presets() -> Vec<RiskPreset> {
    RiskBand::SELECTABLE
        .iter()
        .filter_map(|band| {
            Some(RiskPreset {
                band: *band,
                label: band.preset_label()?,
                score: band.preset_score()?,
            })
        })
        .collect()
}
