use crate::types::profile::{filled, Gallery};
use crate::types::scoring::{Score, MAX_SCORE};

const IMAGE_POINTS: usize = 2;
const IMAGE_CAP: usize = 40;
const VIDEO_POINTS: usize = 6;
const VIDEO_CAP: usize = 30;
const DISPLAY_IMAGE_POINTS: usize = 3;
const DISPLAY_IMAGE_CAP: usize = 20;
const VIRTUAL_TOUR_BONUS: usize = 10;

pub fn visual_score(gallery: &Gallery) -> Score {
    let mut points = 0usize;
    points += gallery
        .images
        .len()
        .saturating_mul(IMAGE_POINTS)
        .min(IMAGE_CAP);
    points += gallery
        .videos
        .len()
        .saturating_mul(VIDEO_POINTS)
        .min(VIDEO_CAP);
    points += gallery
        .display_images
        .len()
        .saturating_mul(DISPLAY_IMAGE_POINTS)
        .min(DISPLAY_IMAGE_CAP);
    if filled(&gallery.virtual_tour) {
        points += VIRTUAL_TOUR_BONUS;
    }
    (points as Score).min(MAX_SCORE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn items(count: usize) -> Vec<Value> {
        (0..count).map(|i| json!(format!("asset-{i}.jpg"))).collect()
    }

    #[test]
    fn each_media_kind_is_capped() {
        let gallery = Gallery {
            images: items(50),
            videos: items(1),
            display_images: items(2),
            virtual_tour: None,
        };
        assert_eq!(visual_score(&gallery), 40.0 + 6.0 + 6.0);
    }

    #[test]
    fn full_gallery_reaches_hundred() {
        let gallery: Gallery = serde_json::from_value(json!({
            "images": items(20),
            "videos": items(5),
            "display_images": items(7),
            "virtual_tour": "https://tour.example.com"
        }))
        .expect("gallery should parse");
        assert_eq!(visual_score(&gallery), 100.0);
    }

    #[test]
    fn empty_gallery_scores_zero() {
        assert_eq!(visual_score(&Gallery::default()), 0.0);
    }
}
