use crate::types::profile::ProfileDocument;
use crate::types::scoring::{Score, MAX_SCORE};

pub fn infrastructure_score(doc: &ProfileDocument) -> Score {
    let categories = doc.infrastructure.len();
    if categories == 0 {
        return 0.0;
    }
    let category_points = categories.saturating_mul(15);
    let image_points = doc.infrastructure_image_count().saturating_mul(2).min(50);
    (category_points.saturating_add(image_points) as Score).min(MAX_SCORE)
}
