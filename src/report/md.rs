use crate::types::report::{AnalysisReport, ScanTrend};

pub fn to_markdown(report: &AnalysisReport) -> String {
    let summary = &report.detailed_analysis.profile_summary;
    let mut output = String::new();
    output.push_str(&format!("# Profile Report: {}\n\n", summary.school_name));
    if !summary.location.is_empty() {
        output.push_str(&format!("Location: {}\n\n", summary.location));
    }
    output.push_str(&format!("Overall score: {:.1}", report.overall_score));
    if let Some(confidence) = report.confidence_level {
        output.push_str(&format!(" (confidence: {confidence})"));
    }
    output.push_str("\n\n");

    if let Some(trend) = &report.trend {
        output.push_str("## Trend\n\n");
        output.push_str(&trend_line(trend));
        output.push_str("\n\n");
    }

    output.push_str("## Scores\n\n");
    for (name, score) in report.scores.entries() {
        output.push_str(&format!("- {name}: {score:.1}\n"));
    }
    output.push_str(&format!(
        "- admission_readiness: {:.1} (not weighted)\n\n",
        report.detailed_analysis.data_completeness.admission_readiness_score
    ));

    let fees = &report.detailed_analysis.fees_analysis;
    output.push_str("## Fees\n\n");
    output.push_str(&format!(
        "- selected session priced: {}\n",
        if fees.latest_session_fees_available {
            "yes"
        } else {
            "no"
        }
    ));
    if fees.missing_classes_in_selected_session.is_empty() {
        output.push_str("- missing classes: none\n\n");
    } else {
        output.push_str(&format!(
            "- missing classes: {}\n\n",
            fees.missing_classes_in_selected_session.join(", ")
        ));
    }

    push_list(&mut output, "Strengths", &report.strength_points);
    push_list(&mut output, "Improvement Suggestions", &report.improvement_suggestions);
    push_list(&mut output, "Recommendations", &report.recommendations);
    output
}

fn trend_line(trend: &ScanTrend) -> String {
    let percent = trend
        .percent_change
        .map(|percent| format!("{percent:+.1}%"))
        .unwrap_or_else(|| "n/a".to_string());
    format!(
        "{:.1} -> {:.1} (delta {:+.1}, {percent}) over {}",
        trend.previous_score, trend.current_score, trend.delta, trend.comparison_period
    )
}

fn push_list(output: &mut String, title: &str, items: &[String]) {
    output.push_str(&format!("## {title}\n\n"));
    if items.is_empty() {
        output.push_str("- none\n");
    } else {
        for item in items {
            output.push_str(&format!("- {item}\n"));
        }
    }
    output.push('\n');
}
