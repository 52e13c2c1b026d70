//! Review prompt assembly.
//!
//! A prompt is one of a handful of templates wrapped around the profile's section text.
//! The template is picked from a digest of the school slug, so the same school always gets
//! the same template.

use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

/// A named section of the public profile page and the id of the element holding it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileSection {
    pub title: &'static str,
    pub element_id: &'static str,
}

pub const PROFILE_SECTIONS: [ProfileSection; 9] = [
    ProfileSection {
        title: "Quick Facts",
        element_id: "quick-facts",
    },
    ProfileSection {
        title: "Admission Process",
        element_id: "admission-process",
    },
    ProfileSection {
        title: "Facilities",
        element_id: "facilities",
    },
    ProfileSection {
        title: "Why you should consider this school",
        element_id: "why-you-should-consider-this-school",
    },
    ProfileSection {
        title: "Scholarship",
        element_id: "scholarship",
    },
    ProfileSection {
        title: "About Us",
        element_id: "about-us",
    },
    ProfileSection {
        title: "Food Details",
        element_id: "food-details",
    },
    ProfileSection {
        title: "Awards & Recognition",
        element_id: "awards-recognition",
    },
    ProfileSection {
        title: "Fees Structure",
        element_id: "fees-structure",
    },
];

const TEMPLATES: [&str; 5] = [
    "You are a parent writing a short review of {school}.\n\
     Using the profile details below, give your honest impressions in 5 to 7 sentences.\n\
     Call out what stood out, good or bad: academics, campus, food or admissions.\n\
     Keep it specific and conversational.\n",
    "You are giving quick feedback about {school} to another parent.\n\
     From the profile data below, write a brief, honest review of 5 to 7 sentences.\n\
     Cover strengths as well as gaps such as missing facilities, meals or fees.\n\
     It should read like a real parent, not a template.\n",
    "Write a short parent review of {school} based on the details below.\n\
     Keep it natural, like a message to a friend whose child may join.\n\
     Touch on the teachers, facilities, meals, value or safety.\n\
     Skip generic openings.\n",
    "You have just filled in a parent survey for {school}.\n\
     Summarise in 5 to 7 lines what you liked and what felt lacking.\n\
     Be candid about academics, facilities, food or communication.\n\
     Keep the tone personal rather than formal.\n",
    "Write a casual, honest review of {school} using the information below.\n\
     Share real pros and cons the way a friend would: academics, staff, meals, pricing.\n\
     Use your own voice and keep it to 5 to 7 sentences.\n",
];

/// `green-valley-school` becomes `Green Valley School`.
pub fn school_name_from_slug(slug: &str) -> String {
    let mut name = String::with_capacity(slug.len());
    let mut word_start = true;
    for c in slug.chars() {
        let c = if c == '-' { ' ' } else { c };
        if word_start {
            name.extend(c.to_uppercase());
        } else {
            name.extend(c.to_lowercase());
        }
        word_start = !c.is_alphabetic();
    }
    name
}

/// Sections rendered as `## Title` blocks, catalogue order first, then any extras by title.
pub fn section_text(sections: &BTreeMap<String, String>) -> String {
    let is_catalogued =
        |title: &str| PROFILE_SECTIONS.iter().any(|section| section.title == title);
    let catalogued = PROFILE_SECTIONS
        .iter()
        .filter_map(|section| sections.get_key_value(section.title));
    let extras = sections
        .iter()
        .filter(|(title, _)| !is_catalogued(title.as_str()));

    catalogued
        .chain(extras)
        .map(|(title, content)| format!("\n\n## {title}\n{}", content.trim()))
        .collect()
}

pub fn template_index(slug: &str) -> usize {
    let digest = Sha256::digest(slug.as_bytes());
    usize::from(digest[0]) % TEMPLATES.len()
}

pub fn build_review_prompt(slug: &str, school_name: &str, section_text: &str) -> String {
    let template = TEMPLATES[template_index(slug)];
    format!(
        "\n{}\n{section_text}\n",
        template.replace("{school}", &format!("**{school_name}**"))
    )
}
