//! Optional-field schema for the upstream school profile document.
//!
//! Upstream data is sparse and loosely typed. Every field defaults when absent, and a
//! field whose JSON type does not match is read as absent rather than failing the parse.
//! Wire names (including upstream misspellings) are preserved through `serde(rename)`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

/// Elements of a JSON array that parse as `T`; anything else yields an empty list.
fn elements<T: DeserializeOwned>(value: Value) -> Vec<T> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| T::deserialize(item).ok())
            .collect(),
        _ => Vec::new(),
    }
}

fn lenient_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(elements(Value::deserialize(deserializer)?))
}

/// Session map where each session keeps its key even when its entries are malformed.
fn lenient_sessions<'de, D>(deserializer: D) -> Result<BTreeMap<String, Vec<FeeEntry>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Object(sessions) => Ok(sessions
            .into_iter()
            .map(|(session, entries)| (session, elements(entries)))
            .collect()),
        _ => Ok(BTreeMap::new()),
    }
}

/// A loosely typed leaf value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Flag(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl Scalar {
    pub fn is_filled(&self) -> bool {
        match self {
            Self::Flag(flag) => *flag,
            Self::Int(value) => *value != 0,
            Self::Float(value) => *value != 0.0,
            Self::Text(text) => !text.trim().is_empty(),
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            Self::Float(value) if value.fract() == 0.0 => Some(*value as i64),
            Self::Text(text) => text.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Int(value) => Some(*value as f64),
            Self::Float(value) => Some(*value),
            Self::Text(text) => text.trim().parse().ok(),
            Self::Flag(_) => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag(flag) => write!(f, "{flag}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// Free-form content: either prose or a list of items (events, news, documents).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Content {
    Items(Vec<Value>),
    Text(Scalar),
}

impl Content {
    pub fn is_filled(&self) -> bool {
        match self {
            Self::Items(items) => !items.is_empty(),
            Self::Text(scalar) => scalar.is_filled(),
        }
    }

    /// Character count of the text form. Lists have no text form.
    pub fn char_len(&self) -> usize {
        match self {
            Self::Items(_) => 0,
            Self::Text(scalar) => scalar.to_string().chars().count(),
        }
    }

    pub fn trimmed_len(&self) -> usize {
        match self {
            Self::Items(_) => 0,
            Self::Text(scalar) => scalar.to_string().trim().chars().count(),
        }
    }

    pub fn item_count(&self) -> usize {
        match self {
            Self::Items(items) => items.len(),
            Self::Text(_) => 0,
        }
    }
}

pub fn filled<T: Filled>(value: &Option<T>) -> bool {
    value.as_ref().map(Filled::is_filled).unwrap_or(false)
}

pub trait Filled {
    fn is_filled(&self) -> bool;
}

impl Filled for Scalar {
    fn is_filled(&self) -> bool {
        Scalar::is_filled(self)
    }
}

impl Filled for Content {
    fn is_filled(&self) -> bool {
        Content::is_filled(self)
    }
}

impl Filled for String {
    fn is_filled(&self) -> bool {
        !self.trim().is_empty()
    }
}

fn content_len(value: &Option<Content>) -> usize {
    value.as_ref().map(Content::char_len).unwrap_or(0)
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProfileDocument {
    #[serde(deserialize_with = "lenient")]
    pub name: Option<Scalar>,
    #[serde(deserialize_with = "lenient")]
    pub slug: Option<Scalar>,
    #[serde(deserialize_with = "lenient")]
    pub logo: Option<Scalar>,
    #[serde(deserialize_with = "lenient")]
    pub email: Option<Scalar>,
    #[serde(deserialize_with = "lenient")]
    pub phone_no: Option<Scalar>,
    #[serde(deserialize_with = "lenient")]
    pub website: Option<Scalar>,
    #[serde(deserialize_with = "lenient")]
    pub short_name: Option<Scalar>,
    #[serde(deserialize_with = "lenient")]
    pub format: Option<Scalar>,

    #[serde(deserialize_with = "lenient_vec")]
    pub boards: Vec<String>,
    #[serde(deserialize_with = "lenient")]
    pub classes_offered: Option<Scalar>,
    #[serde(deserialize_with = "lenient")]
    pub medium: Option<Content>,
    #[serde(deserialize_with = "lenient")]
    pub languages_taught: Option<Content>,
    #[serde(deserialize_with = "lenient")]
    pub academic_session: Option<Content>,
    #[serde(deserialize_with = "lenient")]
    pub student_teacher_ratio: Option<Scalar>,
    #[serde(deserialize_with = "lenient_vec")]
    pub classes: Vec<ClassEntry>,

    #[serde(rename = "infrastruture", deserialize_with = "lenient_vec")]
    pub infrastructure: Vec<InfraCategory>,
    #[serde(deserialize_with = "lenient_vec")]
    pub feature_facilities: Vec<FacilityGroup>,
    #[serde(deserialize_with = "lenient")]
    pub gallery: Gallery,

    #[serde(deserialize_with = "lenient_sessions")]
    pub fees_structure: BTreeMap<String, Vec<FeeEntry>>,
    #[serde(deserialize_with = "lenient")]
    pub internal: Internal,
    #[serde(deserialize_with = "lenient")]
    pub admissions: Admissions,

    #[serde(deserialize_with = "lenient")]
    pub about: Option<Content>,
    #[serde(deserialize_with = "lenient")]
    pub usp: Option<Content>,
    #[serde(deserialize_with = "lenient")]
    pub awards: Option<Content>,
    #[serde(deserialize_with = "lenient")]
    pub pre_post_admission_process: Option<Content>,
    #[serde(deserialize_with = "lenient")]
    pub withdrawl_policy: Option<Content>,
    #[serde(deserialize_with = "lenient")]
    pub scholarship: Option<Content>,
    #[serde(deserialize_with = "lenient")]
    pub life_at_school: Option<Content>,
    #[serde(deserialize_with = "lenient")]
    pub infra_and_facilities: Option<Content>,
    #[serde(deserialize_with = "lenient")]
    pub leader_messages: Option<Content>,
    #[serde(deserialize_with = "lenient")]
    pub events: Option<Content>,
    #[serde(deserialize_with = "lenient")]
    pub news: Option<Content>,

    #[serde(deserialize_with = "lenient")]
    pub address: Address,

    #[serde(deserialize_with = "lenient")]
    pub verified_by_school: Option<Scalar>,
    #[serde(deserialize_with = "lenient")]
    pub year_of_establishment: Option<Scalar>,
    #[serde(deserialize_with = "lenient")]
    pub built_in_area: Option<Scalar>,
    #[serde(deserialize_with = "lenient")]
    pub number_of_students: Option<Scalar>,
    #[serde(deserialize_with = "lenient")]
    pub brochure: Option<Scalar>,
    #[serde(deserialize_with = "lenient")]
    pub views: Option<Scalar>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ClassEntry {
    #[serde(deserialize_with = "lenient")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct InfraCategory {
    #[serde(deserialize_with = "lenient")]
    pub images: Vec<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FacilityGroup {
    #[serde(deserialize_with = "lenient")]
    pub features: Vec<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Gallery {
    #[serde(deserialize_with = "lenient")]
    pub images: Vec<Value>,
    #[serde(deserialize_with = "lenient")]
    pub videos: Vec<Value>,
    #[serde(deserialize_with = "lenient")]
    pub display_images: Vec<Value>,
    #[serde(deserialize_with = "lenient")]
    pub virtual_tour: Option<Content>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FeeEntry {
    #[serde(deserialize_with = "lenient")]
    pub class: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub monthly_fee: Option<Scalar>,
    #[serde(deserialize_with = "lenient")]
    pub cost_of_year_for_new_admission: Option<Scalar>,
}

impl FeeEntry {
    pub fn has_fee(&self) -> bool {
        filled(&self.monthly_fee) || filled(&self.cost_of_year_for_new_admission)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Internal {
    #[serde(deserialize_with = "lenient")]
    pub selected_session: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Admissions {
    #[serde(deserialize_with = "lenient")]
    pub documents: Option<Content>,
    #[serde(deserialize_with = "lenient")]
    pub school_timings: Option<Content>,
    #[serde(rename = "openSession", deserialize_with = "lenient")]
    pub open_session: Option<Scalar>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Address {
    #[serde(rename = "adress_1", deserialize_with = "lenient")]
    pub line_1: Option<Scalar>,
    #[serde(deserialize_with = "lenient")]
    pub area: Option<Scalar>,
    #[serde(deserialize_with = "lenient")]
    pub district: Option<Scalar>,
    #[serde(deserialize_with = "lenient")]
    pub state: Option<Scalar>,
    #[serde(deserialize_with = "lenient")]
    pub pincode: Option<Scalar>,
    #[serde(deserialize_with = "lenient")]
    pub latitude: Option<Scalar>,
    #[serde(deserialize_with = "lenient")]
    pub longitude: Option<Scalar>,
}

impl ProfileDocument {
    pub fn from_json_str(input: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(input)
    }

    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    /// Class names configured for the school, blanks skipped.
    pub fn class_names(&self) -> Vec<&str> {
        self.classes
            .iter()
            .filter_map(|class| class.name.as_deref())
            .filter(|name| !name.is_empty())
            .collect()
    }

    pub fn infrastructure_image_count(&self) -> usize {
        self.infrastructure
            .iter()
            .map(|category| category.images.len())
            .sum()
    }

    pub fn facility_feature_count(&self) -> usize {
        self.feature_facilities
            .iter()
            .map(|group| group.features.len())
            .sum()
    }

    pub fn fee_session_count(&self) -> usize {
        self.fees_structure.len()
    }

    pub fn about_len(&self) -> usize {
        content_len(&self.about)
    }

    pub fn usp_len(&self) -> usize {
        content_len(&self.usp)
    }

    pub fn awards_len(&self) -> usize {
        content_len(&self.awards)
    }

    pub fn text_len(value: &Option<Content>) -> usize {
        content_len(value)
    }

    pub fn view_count(&self) -> f64 {
        self.views
            .as_ref()
            .and_then(Scalar::as_number)
            .unwrap_or(0.0)
    }

    pub fn slug_text(&self) -> Option<String> {
        self.slug
            .as_ref()
            .filter(|slug| slug.is_filled())
            .map(|slug| slug.to_string().trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_object_parses_to_defaults() {
        let doc = ProfileDocument::from_json_str("{}").expect("empty document should parse");
        assert!(doc.name.is_none());
        assert!(doc.boards.is_empty());
        assert!(doc.gallery.images.is_empty());
        assert!(doc.fees_structure.is_empty());
        assert_eq!(doc.view_count(), 0.0);
    }

    #[test]
    fn mistyped_fields_degrade_to_absent() {
        let doc = ProfileDocument::from_value(json!({
            "boards": "CBSE",
            "gallery": ["not", "an", "object"],
            "fees_structure": 42,
            "infrastruture": {"images": []},
            "name": {"nested": true},
            "views": null
        }))
        .expect("mistyped document should still parse");

        assert!(doc.boards.is_empty());
        assert!(doc.gallery.images.is_empty());
        assert!(doc.fees_structure.is_empty());
        assert!(doc.infrastructure.is_empty());
        assert!(doc.name.is_none());
    }

    #[test]
    fn malformed_elements_do_not_wipe_their_siblings() {
        let doc = ProfileDocument::from_value(json!({
            "boards": ["CBSE", null, "ICSE"],
            "classes": [{"name": "A"}, null, {"name": "B"}],
            "infrastruture": [{"images": ["a"]}, {"images": ["b", "c"]}, null],
            "fees_structure": {
                "2024-25": null,
                "2025-26": [null, {"class": "A", "monthly_fee": 500}]
            }
        }))
        .expect("document should parse");

        assert_eq!(doc.boards, vec!["CBSE".to_string(), "ICSE".to_string()]);
        assert_eq!(doc.class_names(), vec!["A", "B"]);
        assert_eq!(doc.infrastructure.len(), 2);
        assert_eq!(doc.infrastructure_image_count(), 3);
        assert_eq!(doc.fee_session_count(), 2);
        assert!(doc.fees_structure["2024-25"].is_empty());
        assert_eq!(doc.fees_structure["2025-26"].len(), 1);
    }

    #[test]
    fn wire_names_are_preserved() {
        let doc = ProfileDocument::from_value(json!({
            "infrastruture": [{"images": ["a", "b"]}, {"images": ["c"]}],
            "address": {"adress_1": "12 Ring Road", "latitude": 28.6},
            "admissions": {"openSession": true},
            "withdrawl_policy": "Refunds within 30 days"
        }))
        .expect("document should parse");

        assert_eq!(doc.infrastructure.len(), 2);
        assert_eq!(doc.infrastructure_image_count(), 3);
        assert!(filled(&doc.address.line_1));
        assert!(filled(&doc.address.latitude));
        assert!(filled(&doc.admissions.open_session));
        assert!(filled(&doc.withdrawl_policy));
    }

    #[test]
    fn scalar_fill_rules_follow_truthiness() {
        assert!(!Scalar::Text("   ".to_string()).is_filled());
        assert!(!Scalar::Int(0).is_filled());
        assert!(!Scalar::Float(0.0).is_filled());
        assert!(!Scalar::Flag(false).is_filled());
        assert!(Scalar::Text("0".to_string()).is_filled());
        assert!(Scalar::Int(1998).is_filled());
    }

    #[test]
    fn scalar_integer_parsing_accepts_text() {
        assert_eq!(Scalar::Text(" 2004 ".to_string()).as_integer(), Some(2004));
        assert_eq!(Scalar::Float(2004.0).as_integer(), Some(2004));
        assert_eq!(Scalar::Text("est. 2004".to_string()).as_integer(), None);
    }

    #[test]
    fn class_names_skip_blank_entries() {
        let doc = ProfileDocument::from_value(json!({
            "classes": [{"name": "Nursery"}, {"name": ""}, {}, {"name": "Class 1"}]
        }))
        .expect("document should parse");
        assert_eq!(doc.class_names(), vec!["Nursery", "Class 1"]);
    }

    #[test]
    fn content_lengths_distinguish_text_and_lists() {
        let text = Content::Text(Scalar::Text("  hello  ".to_string()));
        assert_eq!(text.char_len(), 9);
        assert_eq!(text.trimmed_len(), 5);

        let items = Content::Items(vec![json!({"title": "Sports day"})]);
        assert!(items.is_filled());
        assert_eq!(items.item_count(), 1);
        assert_eq!(items.char_len(), 0);
    }
}
