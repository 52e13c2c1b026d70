use super::prompt::{build_review_prompt, school_name_from_slug, section_text};
use super::ratings::{default_ratings, validate_ratings, Rating};
use super::{ReviewError, ReviewGenerator, ReviewSubmitter, SectionSource};
use crate::types::config::ReviewConfig;
use serde::Serialize;

/// Endpoints and the reviewing account for one batch.
#[derive(Debug, Clone)]
pub struct ReviewTarget {
    pub profile_base_url: String,
    pub submit_base_url: String,
    pub user_id: String,
}

impl ReviewTarget {
    pub fn new(config: &ReviewConfig, user_id: impl Into<String>) -> Self {
        Self {
            profile_base_url: config.profile_base_url.clone(),
            submit_base_url: config.submit_base_url.clone(),
            user_id: user_id.into(),
        }
    }

    pub fn profile_url(&self, slug: &str) -> String {
        format!("{}{slug}", self.profile_base_url)
    }

    pub fn submit_url(&self, slug: &str) -> String {
        format!("{}{slug}/parent-review/", self.submit_base_url)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReviewSubmission {
    pub slug: String,
    pub url: String,
    pub user_id: String,
    pub review: String,
    pub ratings: Vec<Rating>,
}

impl ReviewSubmission {
    /// Multipart form fields; ratings travel as a JSON string.
    pub fn form_fields(&self) -> Result<[(&'static str, String); 3], ReviewError> {
        let ratings = serde_json::to_string(&self.ratings)
            .map_err(|err| ReviewError::InvalidRatings(err.to_string()))?;
        Ok([
            ("user_id", self.user_id.clone()),
            ("review", self.review.clone()),
            ("ratings", ratings),
        ])
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionReceipt {
    pub status: u16,
    pub response: serde_json::Value,
}

impl SubmissionReceipt {
    pub fn success(&self) -> bool {
        self.status == 200
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmittedReview {
    pub slug: String,
    pub review: String,
    pub ratings: Vec<Rating>,
    pub submitted: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewFailure {
    pub slug: String,
    submitted: bool,
    pub error: String,
}

impl ReviewFailure {
    pub fn new(slug: impl Into<String>, error: &ReviewError) -> Self {
        Self {
            slug: slug.into(),
            submitted: false,
            error: error.to_string(),
        }
    }
}

pub type ReviewOutcome = Result<SubmittedReview, ReviewFailure>;

/// Reviews schools one slug at a time. A failing school yields a [`ReviewFailure`] and the
/// batch moves on.
pub struct ReviewBatch<'a> {
    slugs: std::vec::IntoIter<String>,
    target: &'a ReviewTarget,
    source: &'a dyn SectionSource,
    generator: &'a dyn ReviewGenerator,
    submitter: &'a dyn ReviewSubmitter,
}

impl<'a> ReviewBatch<'a> {
    pub fn new(
        slugs: Vec<String>,
        target: &'a ReviewTarget,
        source: &'a dyn SectionSource,
        generator: &'a dyn ReviewGenerator,
        submitter: &'a dyn ReviewSubmitter,
    ) -> Result<Self, ReviewError> {
        if slugs.is_empty() {
            return Err(ReviewError::NoProfileUrls);
        }
        Ok(Self {
            slugs: slugs.into_iter(),
            target,
            source,
            generator,
            submitter,
        })
    }

    fn review_school(&self, slug: &str) -> Result<SubmittedReview, ReviewError> {
        let url = self.target.profile_url(slug);
        let sections = self.source.fetch_profile_sections(&url)?;
        if sections.is_empty() {
            return Err(ReviewError::NoSections(url));
        }

        let school_name = school_name_from_slug(slug);
        let prompt = build_review_prompt(slug, &school_name, &section_text(&sections));
        let review = self.generator.generate_review(&prompt)?.trim().to_string();
        let ratings = self
            .generator
            .suggest_ratings(&school_name)
            .unwrap_or_else(default_ratings);
        validate_ratings(&ratings)?;

        let submission = ReviewSubmission {
            slug: slug.to_string(),
            url: self.target.submit_url(slug),
            user_id: self.target.user_id.clone(),
            review,
            ratings,
        };
        let receipt = self.submitter.submit_review(&submission)?;
        tracing::info!(slug, status = receipt.status, "review submitted");

        Ok(SubmittedReview {
            slug: submission.slug,
            review: submission.review,
            ratings: submission.ratings,
            submitted: receipt.success(),
        })
    }
}

impl Iterator for ReviewBatch<'_> {
    type Item = ReviewOutcome;

    fn next(&mut self) -> Option<Self::Item> {
        let slug = self.slugs.next()?;
        Some(self.review_school(&slug).map_err(|err| {
            tracing::warn!(slug = %slug, error = %err, "review failed");
            ReviewFailure::new(slug, &err)
        }))
    }
}

/// One newline-terminated JSON object per outcome.
pub fn to_ndjson_line(outcome: &ReviewOutcome) -> Result<String, serde_json::Error> {
    let line = match outcome {
        Ok(review) => serde_json::to_string(review)?,
        Err(failure) => serde_json::to_string(failure)?,
    };
    Ok(line + "\n")
}
