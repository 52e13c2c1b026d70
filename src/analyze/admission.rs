use crate::types::profile::{filled, ProfileDocument};
use crate::types::scoring::Score;

/// Admission readiness. Reported in the breakdown only; the overall score ignores it.
pub fn admission_score(doc: &ProfileDocument) -> Score {
    let admissions = &doc.admissions;
    let mut score = 0.0;
    if filled(&admissions.documents) {
        score += 30.0;
    }
    if filled(&admissions.school_timings) {
        score += 20.0;
    }
    if filled(&admissions.open_session) {
        score += 30.0;
    }
    if filled(&doc.pre_post_admission_process) {
        score += 20.0;
    }
    score
}
