use crate::types::profile::{FeeEntry, ProfileDocument};
use crate::types::report::FeesAnalysis;
use crate::types::scoring::round1;
use std::collections::{BTreeMap, BTreeSet};

const BASE_POINTS: f64 = 50.0;
const COVERAGE_POINTS: f64 = 50.0;

pub fn analyse_fees(doc: &ProfileDocument) -> FeesAnalysis {
    fees_analysis(
        &doc.fees_structure,
        &doc.class_names(),
        doc.internal.selected_session.as_deref(),
    )
}

/// Fee coverage of the configured classes for the selected session.
///
/// With no configured classes the coverage term is skipped: a session with any priced
/// entry earns the base points only.
pub fn fees_analysis(
    fees_structure: &BTreeMap<String, Vec<FeeEntry>>,
    class_list: &[&str],
    selected_session: Option<&str>,
) -> FeesAnalysis {
    let entries = selected_session
        .and_then(|session| fees_structure.get(session))
        .map(Vec::as_slice)
        .unwrap_or_default();

    let priced = entries.iter().filter(|entry| entry.has_fee());
    let covered: BTreeSet<&str> = priced
        .clone()
        .filter_map(|entry| entry.class.as_deref())
        .collect();
    let latest_session_fees_available = priced.count() > 0;

    let missing: Vec<String> = class_list
        .iter()
        .filter(|class| !covered.contains(**class))
        .map(|class| class.to_string())
        .collect();

    let mut score = 0.0;
    if latest_session_fees_available {
        score += BASE_POINTS;
        if !class_list.is_empty() {
            let covered_count = class_list.len() - missing.len();
            score += round1(covered_count as f64 / class_list.len() as f64 * COVERAGE_POINTS);
        }
    }

    FeesAnalysis {
        latest_session_fees_available,
        missing_classes_in_selected_session: missing,
        fee_completeness_score: score,
    }
}
