//! Ordered rule tables turning profile facts into human-readable feedback.
//!
//! Strength and suggestion rules are evaluated independently; a profile can trip both a
//! strength and a suggestion on related thresholds.

use super::facts::ProfileFacts;
use crate::types::scoring::Score;

pub const MAX_STRENGTHS: usize = 8;
pub const MAX_SUGGESTIONS: usize = 10;

fn strength_rules(facts: &ProfileFacts) -> [Option<String>; 12] {
    [
        (facts.images >= 15).then(|| {
            format!(
                "Excellent visual representation with {} high-quality gallery images",
                facts.images
            )
        }),
        (facts.videos >= 3).then(|| {
            format!(
                "Strong multimedia content with {} promotional videos",
                facts.videos
            )
        }),
        (facts.infra_categories >= 6).then(|| {
            format!(
                "Comprehensive infrastructure documentation across {} categories",
                facts.infra_categories
            )
        }),
        (facts.infra_images >= 20).then(|| {
            format!(
                "Detailed infrastructure showcase with {} facility images",
                facts.infra_images
            )
        }),
        (facts.boards.len() >= 2).then(|| {
            format!(
                "Multiple board options available: {}",
                facts.boards.join(", ")
            )
        }),
        facts
            .verified
            .then(|| "School-verified profile ensuring authentic information".to_string()),
        facts
            .establishment_year
            .filter(|year| *year < 2010)
            .map(|year| format!("Well-established institution since {year}")),
        facts
            .built_area
            .as_deref()
            .filter(|area| {
                let lower = area.to_lowercase();
                lower.contains("acre") || lower.contains("sq ft")
            })
            .map(|area| format!("Spacious campus with {area} of built area")),
        (facts.fee_sessions >= 3).then(|| {
            format!(
                "Transparent fee structure available for {} academic sessions",
                facts.fee_sessions
            )
        }),
        (facts.awards_len > 100)
            .then(|| "Strong recognition with documented awards and achievements".to_string()),
        (facts.facility_features >= 15).then(|| {
            format!(
                "Well-equipped with {} documented facilities and features",
                facts.facility_features
            )
        }),
        facts
            .ratio_students
            .filter(|students| *students <= 15)
            .and(facts.ratio.as_deref())
            .map(|ratio| format!("Excellent student-teacher ratio of {ratio}")),
    ]
}

fn suggestion_rules(facts: &ProfileFacts) -> [(bool, &'static str); 15] {
    [
        (
            facts.images < 10,
            "Add more high-quality photos of campus facilities and student activities",
        ),
        (
            facts.videos < 2,
            "Include school videos and virtual campus tours to enhance engagement",
        ),
        (
            facts.about_len < 200,
            "Expand the 'About Us' section with detailed school philosophy and vision",
        ),
        (
            facts.usp_len < 100,
            "Add comprehensive Unique Selling Points (USP) to highlight school advantages",
        ),
        (
            facts.infra_categories < 5,
            "Document more infrastructure categories with detailed descriptions",
        ),
        (
            facts.infra_images < 15,
            "Include more infrastructure images to showcase facilities better",
        ),
        (
            facts.awards_len < 50,
            "Add school awards, recognitions, and achievements section",
        ),
        (
            facts.fee_sessions < 2,
            "Provide fee structure for multiple academic sessions",
        ),
        (
            !facts.has_brochure,
            "Upload school brochure for comprehensive information access",
        ),
        (
            !facts.has_website || !facts.has_email,
            "Update contact information including website and email details",
        ),
        (
            !facts.has_coordinates,
            "Add precise location coordinates for better accessibility",
        ),
        (
            !facts.has_admission_process,
            "Include detailed admission process and requirements",
        ),
        (
            facts.facility_features < 10,
            "Document more facilities and features to showcase school amenities",
        ),
        (
            !facts.has_virtual_tour,
            "Add virtual tour link for immersive campus experience",
        ),
        (
            facts.views < 5000.0,
            "Optimize profile content and SEO to increase visibility and views",
        ),
    ]
}

pub fn strength_points(facts: &ProfileFacts) -> Vec<String> {
    strength_rules(facts)
        .into_iter()
        .flatten()
        .take(MAX_STRENGTHS)
        .collect()
}

pub fn improvement_suggestions(facts: &ProfileFacts) -> Vec<String> {
    suggestion_rules(facts)
        .into_iter()
        .filter(|(triggered, _)| *triggered)
        .map(|(_, message)| message.to_string())
        .take(MAX_SUGGESTIONS)
        .collect()
}

/// Tiered headline plus add-ons for weak visual, academic and infrastructure areas.
pub fn recommendations(
    overall: Score,
    visual: Score,
    academic: Score,
    infrastructure: Score,
) -> Vec<String> {
    let headline = if overall >= 80.0 {
        "Excellent profile! Focus on regular content updates and engagement"
    } else if overall >= 60.0 {
        "Good profile foundation. Enhance visual content and facility documentation"
    } else {
        "Profile needs significant improvement in content quality and completeness"
    };

    let mut recommendations = vec![headline.to_string()];
    if visual < 50.0 {
        recommendations
            .push("Prioritize adding high-quality images and videos for better engagement".into());
    }
    if academic < 70.0 {
        recommendations
            .push("Complete academic information including all curriculum details".into());
    }
    if infrastructure < 60.0 {
        recommendations.push(
            "Enhance infrastructure documentation with detailed descriptions and images".into(),
        );
    }
    recommendations
}
