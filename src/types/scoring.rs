use serde::{Deserialize, Serialize};

pub type Score = f64;

pub const MAX_SCORE: Score = 100.0;

/// Clamp a score into the reportable 0..=100 range.
pub fn normalize(score: Score) -> Score {
    score.clamp(0.0, MAX_SCORE)
}

/// Round to one decimal; exact ties go to the even digit.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Share of `filled` over `total`, on a 0..=100 scale.
pub fn fraction_score(filled: usize, total: usize) -> Score {
    if total == 0 {
        return 0.0;
    }
    filled as f64 / total as f64 * MAX_SCORE
}

/// Weights applied to the six components of the overall score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    pub profile_completeness: f64,
    pub data_quality: f64,
    pub visual_content: f64,
    pub infrastructure: f64,
    pub academic_information: f64,
    pub fee_completeness: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            profile_completeness: 0.20,
            data_quality: 0.20,
            visual_content: 0.15,
            infrastructure: 0.15,
            academic_information: 0.20,
            fee_completeness: 0.10,
        }
    }
}

impl ScoreWeights {
    pub fn as_array(&self) -> [f64; 6] {
        [
            self.profile_completeness,
            self.data_quality,
            self.visual_content,
            self.infrastructure,
            self.academic_information,
            self.fee_completeness,
        ]
    }
}

/// The eight reported sub-scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreCard {
    pub profile_completeness: Score,
    pub data_quality: Score,
    pub content_richness: Score,
    pub visual_content: Score,
    pub contact_accessibility: Score,
    pub academic_information: Score,
    pub infrastructure: Score,
    pub fee_completeness: Score,
}

impl ScoreCard {
    /// Builds a card with every entry normalized.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        profile_completeness: Score,
        data_quality: Score,
        content_richness: Score,
        visual_content: Score,
        contact_accessibility: Score,
        academic_information: Score,
        infrastructure: Score,
        fee_completeness: Score,
    ) -> Self {
        Self {
            profile_completeness: normalize(profile_completeness),
            data_quality: normalize(data_quality),
            content_richness: normalize(content_richness),
            visual_content: normalize(visual_content),
            contact_accessibility: normalize(contact_accessibility),
            academic_information: normalize(academic_information),
            infrastructure: normalize(infrastructure),
            fee_completeness: normalize(fee_completeness),
        }
    }

    /// Weighted composite, rounded to one decimal.
    pub fn overall(&self, weights: &ScoreWeights) -> Score {
        let total = normalize(self.profile_completeness) * weights.profile_completeness
            + normalize(self.data_quality) * weights.data_quality
            + normalize(self.visual_content) * weights.visual_content
            + normalize(self.infrastructure) * weights.infrastructure
            + normalize(self.academic_information) * weights.academic_information
            + normalize(self.fee_completeness) * weights.fee_completeness;
        normalize(round1(total))
    }

    pub fn entries(&self) -> [(&'static str, Score); 8] {
        [
            ("profile_completeness", self.profile_completeness),
            ("data_quality", self.data_quality),
            ("content_richness", self.content_richness),
            ("visual_content", self.visual_content),
            ("contact_accessibility", self.contact_accessibility),
            ("academic_information", self.academic_information),
            ("infrastructure", self.infrastructure),
            ("fee_completeness", self.fee_completeness),
        ]
    }
}
