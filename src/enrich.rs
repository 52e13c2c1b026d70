use crate::analyze::analyse_school_profile;
use crate::error::Result;
use crate::store::ScanStore;
use crate::trend::get_profile_scan_delta;
use crate::types::profile::ProfileDocument;
use crate::types::report::{AnalysisReport, ConfidenceLevel, ScanTrend};
use crate::types::scoring::ScoreWeights;

/// Adds the trend (when there is one) and the confidence band to a scored report.
pub fn attach_extras(mut report: AnalysisReport, trend: Option<ScanTrend>) -> AnalysisReport {
    report.trend = trend;
    report.confidence_level = Some(ConfidenceLevel::for_score(report.overall_score));
    report
}

/// Scores `document` and enriches it with scan history for `slug`.
///
/// The trend reflects scans already in the store; recording this run is the caller's call.
pub fn run_complete_school_analysis(
    store: &dyn ScanStore,
    slug: &str,
    document: &ProfileDocument,
    weights: &ScoreWeights,
) -> Result<AnalysisReport> {
    let report = analyse_school_profile(document, weights);
    let trend = get_profile_scan_delta(store, slug)?;
    tracing::info!(
        slug,
        overall_score = report.overall_score,
        trend = trend.is_some(),
        "profile analysed"
    );
    Ok(attach_extras(report, trend))
}
