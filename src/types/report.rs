use crate::types::scoring::{Score, ScoreCard};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const NOT_SPECIFIED: &str = "Not specified";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub overall_score: Score,
    pub scores: ScoreCard,
    pub detailed_analysis: DetailedAnalysis,
    pub data_insights: DataInsights,
    pub strength_points: Vec<String>,
    pub improvement_suggestions: Vec<String>,
    pub recommendations: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend: Option<ScanTrend>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence_level: Option<ConfidenceLevel>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailedAnalysis {
    pub profile_summary: ProfileSummary,
    pub content_analysis: ContentAnalysis,
    pub fees_analysis: FeesAnalysis,
    pub data_completeness: DataCompleteness,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileSummary {
    pub school_name: String,
    pub location: String,
    pub establishment_year: String,
    pub school_type: String,
    pub boards: Vec<String>,
    pub classes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentAnalysis {
    pub visual_assets: VisualAssets,
    pub textual_content: TextualContent,
    pub facility_documentation: FacilityDocumentation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualAssets {
    pub gallery_images: usize,
    pub promotional_videos: usize,
    pub infrastructure_images: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextualContent {
    pub about_length: usize,
    pub usp_length: usize,
    pub awards_length: usize,
    pub pre_post_admission_process_length: usize,
    pub withdrawl_policy_length: usize,
    pub scholarship_length: usize,
    pub life_at_school_length: usize,
    pub infra_and_facilities_length: usize,
    pub leader_message_count: usize,
    pub event_count: usize,
    pub news_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacilityDocumentation {
    pub infrastructure_categories: usize,
    pub total_features: usize,
}

/// Fee coverage for the selected session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeesAnalysis {
    pub latest_session_fees_available: bool,
    pub missing_classes_in_selected_session: Vec<String>,
    pub fee_completeness_score: Score,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataCompleteness {
    pub basic_info_completion: String,
    pub academic_info_completion: String,
    pub contact_info_completion: String,
    pub fee_completeness_score: Score,
    /// Not part of the overall score.
    pub admission_readiness_score: Score,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataInsights {
    pub total_images: usize,
    pub total_videos: usize,
    pub infrastructure_categories: usize,
    pub total_infrastructure_images: usize,
    pub facility_features_count: usize,
    pub available_fee_sessions: usize,
    pub boards_offered: usize,
    pub classes_range: String,
    pub campus_size: String,
    pub student_count: String,
    pub establishment_year: String,
    pub view_count: f64,
}

/// Comparison between the two most recent scans of a school.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanTrend {
    pub current_score: Score,
    pub previous_score: Score,
    pub delta: f64,
    pub percent_change: Option<f64>,
    pub comparison_period: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

impl ConfidenceLevel {
    pub fn for_score(score: Score) -> Self {
        if score >= 85.0 {
            Self::High
        } else if score >= 65.0 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
