//! Parent-review batch: collaborator seams for fetching profile sections, generating
//! review text and submitting it, plus the pure pieces (slug extraction, prompt assembly,
//! rating validation) that sit between them.

pub mod pipeline;
pub mod prompt;
pub mod ratings;
pub mod slugs;

use std::collections::BTreeMap;

pub use pipeline::{
    to_ndjson_line, ReviewBatch, ReviewFailure, ReviewOutcome, ReviewSubmission, ReviewTarget,
    SubmissionReceipt, SubmittedReview,
};
pub use ratings::Rating;

/// Fetches the named text sections of a public school profile page.
pub trait SectionSource {
    fn fetch_profile_sections(&self, url: &str) -> Result<BTreeMap<String, String>, ReviewError>;
}

/// Turns a prompt into review text.
pub trait ReviewGenerator {
    fn generate_review(&self, prompt: &str) -> Result<String, ReviewError>;

    /// Ratings to accompany the review; `None` falls back to the default set.
    fn suggest_ratings(&self, _school_name: &str) -> Option<Vec<Rating>> {
        None
    }
}

pub trait ReviewSubmitter {
    fn submit_review(
        &self,
        submission: &ReviewSubmission,
    ) -> Result<SubmissionReceipt, ReviewError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ReviewError {
    #[error("no valid school profile URLs found")]
    NoProfileUrls,
    #[error("no content extracted from school profile {0}")]
    NoSections(String),
    #[error("section fetch failed: {0}")]
    Fetch(String),
    #[error("review generation failed: {0}")]
    Generation(String),
    #[error("invalid ratings: {0}")]
    InvalidRatings(String),
    #[error("review submission failed: {0}")]
    Submission(String),
}
