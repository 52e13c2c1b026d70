use crate::types::profile::{Content, ProfileDocument};
use crate::types::scoring::{round1, round2, Score, MAX_SCORE};

/// A scored content field: weight and the text length earning the full weight.
struct ContentField<'a> {
    weight: f64,
    max_len: usize,
    value: Option<&'a Content>,
}

fn field(weight: f64, max_len: usize, value: &Option<Content>) -> ContentField<'_> {
    ContentField {
        weight,
        max_len,
        value: value.as_ref(),
    }
}

fn content_fields(doc: &ProfileDocument) -> [ContentField<'_>; 11] {
    [
        field(10.0, 1000, &doc.about),
        field(10.0, 600, &doc.usp),
        field(10.0, 600, &doc.awards),
        field(4.0, 200, &doc.pre_post_admission_process),
        field(4.0, 100, &doc.withdrawl_policy),
        field(2.0, 100, &doc.scholarship),
        field(4.0, 100, &doc.life_at_school),
        field(4.0, 100, &doc.infra_and_facilities),
        field(1.0, 1, &doc.leader_messages),
        field(1.0, 1, &doc.events),
        field(1.0, 1, &doc.news),
    ]
}

fn field_points(field: &ContentField<'_>) -> f64 {
    match field.value {
        None => 0.0,
        Some(content) if !content.is_filled() => 0.0,
        Some(Content::Items(_)) => field.weight,
        Some(text) => {
            let length = text.trimmed_len();
            if length >= field.max_len {
                field.weight
            } else {
                round2(length as f64 / field.max_len as f64 * field.weight)
            }
        }
    }
}

/// Weighted text/list richness, normalized to 0..=100.
pub fn content_score(doc: &ProfileDocument) -> Score {
    let fields = content_fields(doc);
    let possible: f64 = fields.iter().map(|field| field.weight).sum();
    let earned: f64 = fields.iter().map(field_points).sum();
    round1(earned / possible * MAX_SCORE)
}
