use crate::types::profile::{filled, ProfileDocument, Scalar};

/// Counts and flags derived once from a profile and shared by the rule tables.
#[derive(Debug, Clone, Default)]
pub struct ProfileFacts {
    pub images: usize,
    pub videos: usize,
    pub infra_categories: usize,
    pub infra_images: usize,
    pub facility_features: usize,
    pub fee_sessions: usize,
    pub boards: Vec<String>,
    pub verified: bool,
    pub establishment_year: Option<i64>,
    pub built_area: Option<String>,
    pub about_len: usize,
    pub usp_len: usize,
    pub awards_len: usize,
    pub ratio: Option<String>,
    pub ratio_students: Option<i64>,
    pub has_brochure: bool,
    pub has_website: bool,
    pub has_email: bool,
    pub has_coordinates: bool,
    pub has_admission_process: bool,
    pub has_virtual_tour: bool,
    pub views: f64,
}

impl ProfileFacts {
    pub fn gather(doc: &ProfileDocument) -> Self {
        let ratio = doc
            .student_teacher_ratio
            .as_ref()
            .filter(|ratio| ratio.is_filled())
            .map(Scalar::to_string);

        Self {
            images: doc.gallery.images.len(),
            videos: doc.gallery.videos.len(),
            infra_categories: doc.infrastructure.len(),
            infra_images: doc.infrastructure_image_count(),
            facility_features: doc.facility_feature_count(),
            fee_sessions: doc.fee_session_count(),
            boards: doc.boards.clone(),
            verified: filled(&doc.verified_by_school),
            establishment_year: doc
                .year_of_establishment
                .as_ref()
                .filter(|year| year.is_filled())
                .and_then(Scalar::as_integer),
            built_area: doc
                .built_in_area
                .as_ref()
                .filter(|area| area.is_filled())
                .map(Scalar::to_string),
            about_len: doc.about_len(),
            usp_len: doc.usp_len(),
            awards_len: doc.awards_len(),
            ratio_students: ratio.as_deref().and_then(ratio_students),
            ratio,
            has_brochure: filled(&doc.brochure),
            has_website: filled(&doc.website),
            has_email: filled(&doc.email),
            has_coordinates: filled(&doc.address.latitude) && filled(&doc.address.longitude),
            has_admission_process: filled(&doc.pre_post_admission_process),
            has_virtual_tour: filled(&doc.gallery.virtual_tour),
            views: doc.view_count(),
        }
    }
}

/// Student side of an `a:b` ratio; anything else is unparseable.
fn ratio_students(ratio: &str) -> Option<i64> {
    let mut parts = ratio.split(':');
    let students = parts.next()?;
    parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    students.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ratio_requires_exactly_two_parts() {
        assert_eq!(ratio_students("12:1"), Some(12));
        assert_eq!(ratio_students(" 30 :1"), Some(30));
        assert_eq!(ratio_students("12"), None);
        assert_eq!(ratio_students("12:1:4"), None);
        assert_eq!(ratio_students("twelve:1"), None);
    }

    #[test]
    fn gather_collects_counts_and_flags() {
        let doc = ProfileDocument::from_value(json!({
            "gallery": {"images": ["a", "b"], "videos": ["v"], "virtual_tour": "https://tour"},
            "infrastruture": [{"images": ["x", "y", "z"]}],
            "feature_facilities": [{"features": ["wifi", "ac"]}, {"features": ["bus"]}],
            "fees_structure": {"2024-25": [], "2025-26": []},
            "year_of_establishment": "1987",
            "student_teacher_ratio": "15:1",
            "address": {"latitude": 28.61, "longitude": null}
        }))
        .expect("document should parse");

        let facts = ProfileFacts::gather(&doc);
        assert_eq!(facts.images, 2);
        assert_eq!(facts.videos, 1);
        assert_eq!(facts.infra_images, 3);
        assert_eq!(facts.facility_features, 3);
        assert_eq!(facts.fee_sessions, 2);
        assert_eq!(facts.establishment_year, Some(1987));
        assert_eq!(facts.ratio_students, Some(15));
        assert!(facts.has_virtual_tour);
        assert!(!facts.has_coordinates);
    }
}
