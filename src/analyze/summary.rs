use super::facts::ProfileFacts;
use crate::types::profile::{Content, ProfileDocument, Scalar};
use crate::types::report::{
    ContentAnalysis, DataCompleteness, DataInsights, DetailedAnalysis, FacilityDocumentation,
    FeesAnalysis, ProfileSummary, TextualContent, VisualAssets, NOT_SPECIFIED,
};
use crate::types::scoring::Score;

fn describe(value: &Option<Scalar>) -> String {
    value
        .as_ref()
        .map(Scalar::to_string)
        .unwrap_or_else(|| NOT_SPECIFIED.to_string())
}

fn location(doc: &ProfileDocument) -> String {
    let part = |value: &Option<Scalar>| value.as_ref().map(Scalar::to_string).unwrap_or_default();
    format!(
        "{}, {}",
        part(&doc.address.area),
        part(&doc.address.district)
    )
    .trim_matches(|c| c == ',' || c == ' ')
    .to_string()
}

fn count(value: &Option<Content>) -> usize {
    value.as_ref().map(|content| content.item_count()).unwrap_or(0)
}

pub struct Completion {
    pub basic: Score,
    pub academic: Score,
    pub contact: Score,
    pub admission: Score,
}

pub fn detailed_analysis(
    doc: &ProfileDocument,
    facts: &ProfileFacts,
    fees: FeesAnalysis,
    completion: &Completion,
) -> DetailedAnalysis {
    let fee_completeness_score = fees.fee_completeness_score;
    DetailedAnalysis {
        profile_summary: ProfileSummary {
            school_name: describe(&doc.name),
            location: location(doc),
            establishment_year: describe(&doc.year_of_establishment),
            school_type: describe(&doc.format),
            boards: doc.boards.clone(),
            classes: describe(&doc.classes_offered),
        },
        content_analysis: ContentAnalysis {
            visual_assets: VisualAssets {
                gallery_images: facts.images,
                promotional_videos: facts.videos,
                infrastructure_images: facts.infra_images,
            },
            textual_content: TextualContent {
                about_length: facts.about_len,
                usp_length: facts.usp_len,
                awards_length: facts.awards_len,
                pre_post_admission_process_length: ProfileDocument::text_len(
                    &doc.pre_post_admission_process,
                ),
                withdrawl_policy_length: ProfileDocument::text_len(&doc.withdrawl_policy),
                scholarship_length: ProfileDocument::text_len(&doc.scholarship),
                life_at_school_length: ProfileDocument::text_len(&doc.life_at_school),
                infra_and_facilities_length: ProfileDocument::text_len(&doc.infra_and_facilities),
                leader_message_count: count(&doc.leader_messages),
                event_count: count(&doc.events),
                news_count: count(&doc.news),
            },
            facility_documentation: FacilityDocumentation {
                infrastructure_categories: facts.infra_categories,
                total_features: facts.facility_features,
            },
        },
        fees_analysis: fees,
        data_completeness: DataCompleteness {
            basic_info_completion: format!("{:.1}", completion.basic),
            academic_info_completion: format!("{:.1}", completion.academic),
            contact_info_completion: format!("{:.1}", completion.contact),
            fee_completeness_score,
            admission_readiness_score: completion.admission,
        },
    }
}

pub fn data_insights(doc: &ProfileDocument, facts: &ProfileFacts) -> DataInsights {
    DataInsights {
        total_images: facts.images,
        total_videos: facts.videos,
        infrastructure_categories: facts.infra_categories,
        total_infrastructure_images: facts.infra_images,
        facility_features_count: facts.facility_features,
        available_fee_sessions: facts.fee_sessions,
        boards_offered: facts.boards.len(),
        classes_range: describe(&doc.classes_offered),
        campus_size: describe(&doc.built_in_area),
        student_count: describe(&doc.number_of_students),
        establishment_year: describe(&doc.year_of_establishment),
        view_count: facts.views,
    }
}
