use std::collections::HashSet;

use crate::models::{CategoryMatch, ASSET_CATALOG};

/// Upper bound on the number of category recommendations returned.
pub const MAX_RECOMMENDATIONS: usize = 5;

pub const NO_STYLE_DETECTED: &str =
    "We couldn't detect a clear investment style. Try selecting more focused items.";

/// Catalog categories that share at least one ticker with the selection,
/// strongest overlap first. Equal overlaps keep catalog order.
pub fn score_categories(selected: &HashSet<String>) -> Vec<CategoryMatch> {
    let mut matches: Vec<CategoryMatch> = ASSET_CATALOG
        .iter()
        .map(|category| CategoryMatch {
            category,
            overlap: category
                .member_tickers
                .iter()
                .filter(|ticker| selected.contains(**ticker))
                .count(),
        })
        .filter(|m| m.overlap > 0)
        .collect();

    // sort_by is stable
    matches.sort_by(|a, b| b.overlap.cmp(&a.overlap));
    matches.truncate(MAX_RECOMMENDATIONS);
    matches
}

/// One recommendation sentence per top category, or a single fallback
/// sentence when nothing in the catalog matches.
pub fn recommend(selected: &HashSet<String>) -> Vec<String> {
    let matches = score_categories(selected);

    if matches.is_empty() {
        return vec![NO_STYLE_DETECTED.to_string()];
    }

    matches.iter().map(recommendation_sentence).collect()
}

fn recommendation_sentence(m: &CategoryMatch) -> String {
    let [first, second, pick] = m.category.recommendation_seeds;
    format!(
        "For {}: Other users with similar portfolios also invested in {} and {}. Based on that, we recommend {}.",
        m.category.name, first, second, pick
    )
}
