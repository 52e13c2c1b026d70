pub mod admission;
pub mod completeness;
pub mod content;
pub mod facts;
pub mod fees;
pub mod infrastructure;
pub mod insights;
pub mod summary;
pub mod visual;

use crate::types::profile::ProfileDocument;
use crate::types::report::AnalysisReport;
use crate::types::scoring::{round1, ScoreCard, ScoreWeights};
use facts::ProfileFacts;
use summary::Completion;

/// Scores a profile document. Pure and total: sparse or malformed input never fails.
pub fn analyse_school_profile(doc: &ProfileDocument, weights: &ScoreWeights) -> AnalysisReport {
    let facts = ProfileFacts::gather(doc);

    let basic = completeness::basic_info_score(doc);
    let academic = completeness::academic_score(doc);
    let contact = completeness::contact_score(doc);
    let special = completeness::special_features_score(doc);
    let infra = infrastructure::infrastructure_score(doc);
    let visual = visual::visual_score(&doc.gallery);
    let content = content::content_score(doc);
    let admission = admission::admission_score(doc);
    let fees = fees::analyse_fees(doc);

    let scores = ScoreCard::new(
        round1((basic + academic + contact) / 3.0),
        round1((content + special) / 2.0),
        content,
        round1(visual),
        round1(contact),
        round1(academic),
        round1(infra),
        fees.fee_completeness_score,
    );
    let overall_score = scores.overall(weights);

    tracing::debug!(
        overall_score,
        basic,
        academic,
        contact,
        special,
        content,
        visual,
        infra,
        admission,
        fee = fees.fee_completeness_score,
        "profile scored"
    );

    let strength_points = insights::strength_points(&facts);
    let improvement_suggestions = insights::improvement_suggestions(&facts);
    let recommendations = insights::recommendations(
        overall_score,
        scores.visual_content,
        scores.academic_information,
        scores.infrastructure,
    );

    let completion = Completion {
        basic,
        academic,
        contact,
        admission,
    };

    AnalysisReport {
        overall_score,
        data_insights: summary::data_insights(doc, &facts),
        detailed_analysis: summary::detailed_analysis(doc, &facts, fees, &completion),
        scores,
        strength_points,
        improvement_suggestions,
        recommendations,
        trend: None,
        confidence_level: None,
    }
}
