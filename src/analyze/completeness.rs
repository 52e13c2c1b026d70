use crate::types::profile::{filled, ProfileDocument};
use crate::types::scoring::{fraction_score, Score};

fn presence_score(flags: &[bool]) -> Score {
    fraction_score(flags.iter().filter(|flag| **flag).count(), flags.len())
}

pub fn basic_info_score(doc: &ProfileDocument) -> Score {
    presence_score(&[
        filled(&doc.name),
        filled(&doc.slug),
        filled(&doc.logo),
        filled(&doc.email),
        filled(&doc.phone_no),
        filled(&doc.website),
        filled(&doc.short_name),
    ])
}

pub fn academic_score(doc: &ProfileDocument) -> Score {
    presence_score(&[
        !doc.boards.is_empty(),
        filled(&doc.classes_offered),
        filled(&doc.medium),
        filled(&doc.languages_taught),
        filled(&doc.academic_session),
        filled(&doc.student_teacher_ratio),
    ])
}

pub fn contact_score(doc: &ProfileDocument) -> Score {
    let address = &doc.address;
    presence_score(&[
        filled(&address.line_1),
        filled(&address.area),
        filled(&address.district),
        filled(&address.state),
        filled(&address.pincode),
        filled(&address.latitude),
        filled(&address.longitude),
    ])
}

pub fn special_features_score(doc: &ProfileDocument) -> Score {
    presence_score(&[
        filled(&doc.verified_by_school),
        filled(&doc.year_of_establishment),
        filled(&doc.built_in_area),
        filled(&doc.number_of_students),
        filled(&doc.brochure),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: serde_json::Value) -> ProfileDocument {
        ProfileDocument::from_value(value).expect("document should parse")
    }

    #[test]
    fn basic_info_counts_only_non_blank_fields() {
        let profile = doc(json!({
            "name": "Green Valley School",
            "slug": "green-valley-school",
            "email": "   ",
            "website": ""
        }));
        let expected = 2.0 / 7.0 * 100.0;
        assert!((basic_info_score(&profile) - expected).abs() < 1e-9);
    }

    #[test]
    fn academic_score_full_when_all_fields_present() {
        let profile = doc(json!({
            "boards": ["CBSE"],
            "classes_offered": "Nursery - 12",
            "medium": "English",
            "languages_taught": ["English", "Hindi"],
            "academic_session": "April - March",
            "student_teacher_ratio": "20:1"
        }));
        assert_eq!(academic_score(&profile), 100.0);
    }

    #[test]
    fn contact_score_treats_zero_coordinates_as_missing() {
        let profile = doc(json!({
            "address": {
                "adress_1": "Sector 5",
                "area": "Dwarka",
                "district": "South West Delhi",
                "state": "Delhi",
                "pincode": 110075,
                "latitude": 0,
                "longitude": 0.0
            }
        }));
        let expected = 5.0 / 7.0 * 100.0;
        assert!((contact_score(&profile) - expected).abs() < 1e-9);
    }

    #[test]
    fn special_features_ignore_false_verification() {
        let profile = doc(json!({
            "verified_by_school": false,
            "year_of_establishment": 1995,
            "brochure": "https://cdn.example.com/brochure.pdf"
        }));
        assert_eq!(special_features_score(&profile), 40.0);
    }

    #[test]
    fn empty_document_scores_zero_everywhere() {
        let profile = ProfileDocument::default();
        assert_eq!(basic_info_score(&profile), 0.0);
        assert_eq!(academic_score(&profile), 0.0);
        assert_eq!(contact_score(&profile), 0.0);
        assert_eq!(special_features_score(&profile), 0.0);
    }
}
