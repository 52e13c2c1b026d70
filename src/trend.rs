use crate::store::{ScanRecord, ScanStore};
use crate::types::report::ScanTrend;
use crate::types::scoring::round1;
use chrono::Duration;

const MINUTE: f64 = 60.0;
const HOUR: f64 = 3_600.0;
const DAY: f64 = 86_400.0;

/// Trend between the two newest scans of `slug`, or `None` with less than two scans.
pub fn get_profile_scan_delta(
    store: &dyn ScanStore,
    slug: &str,
) -> crate::error::Result<Option<ScanTrend>> {
    let recent = store.recent(slug, 2)?;
    let trend = scan_delta(&recent);
    tracing::debug!(slug, scans = recent.len(), has_trend = trend.is_some(), "trend lookup");
    Ok(trend)
}

/// `records` must be newest first, as returned by [`ScanStore::recent`].
pub fn scan_delta(records: &[ScanRecord]) -> Option<ScanTrend> {
    let [current, previous, ..] = records else {
        return None;
    };

    let raw_delta = current.score - previous.score;
    let percent_change =
        (previous.score != 0.0).then(|| round1(raw_delta / previous.score * 100.0));

    Some(ScanTrend {
        current_score: current.score,
        previous_score: previous.score,
        delta: round1(raw_delta),
        percent_change,
        comparison_period: comparison_period(current.created_at - previous.created_at),
    })
}

/// Human-readable elapsed time in the largest whole unit; units are never singularized.
pub fn comparison_period(elapsed: Duration) -> String {
    let seconds = (elapsed.num_milliseconds() as f64 / 1000.0).max(0.0);
    if seconds < MINUTE {
        format!("{seconds:.0} seconds")
    } else if seconds < HOUR {
        format!("{} minutes", (seconds / MINUTE).floor())
    } else if seconds < DAY {
        format!("{} hours", (seconds / HOUR).floor())
    } else {
        format!("{} days", elapsed.num_days())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures::record_at;
    use crate::store::MemoryStore;

    #[test]
    fn period_buckets() {
        assert_eq!(comparison_period(Duration::seconds(0)), "0 seconds");
        assert_eq!(comparison_period(Duration::seconds(59)), "59 seconds");
        assert_eq!(comparison_period(Duration::seconds(60)), "1 minutes");
        assert_eq!(comparison_period(Duration::seconds(90)), "1 minutes");
        assert_eq!(comparison_period(Duration::seconds(3_599)), "59 minutes");
        assert_eq!(comparison_period(Duration::seconds(3_600)), "1 hours");
        assert_eq!(comparison_period(Duration::seconds(86_399)), "23 hours");
        assert_eq!(comparison_period(Duration::seconds(86_400)), "1 days");
        assert_eq!(comparison_period(Duration::days(45)), "45 days");
    }

    #[test]
    fn negative_elapsed_time_reads_as_zero() {
        assert_eq!(comparison_period(Duration::seconds(-30)), "0 seconds");
    }

    #[test]
    fn delta_between_two_scans() {
        let records = vec![record_at("a", 80.0, 90), record_at("a", 70.0, 0)];
        let trend = scan_delta(&records).expect("two scans should produce a trend");
        assert_eq!(trend.current_score, 80.0);
        assert_eq!(trend.previous_score, 70.0);
        assert_eq!(trend.delta, 10.0);
        assert_eq!(trend.percent_change, Some(14.3));
        assert_eq!(trend.comparison_period, "1 minutes");
    }

    #[test]
    fn percent_change_tie_rounds_to_even() {
        let records = vec![record_at("a", 17.0, 30), record_at("a", 16.0, 0)];
        let trend = scan_delta(&records).expect("two scans should produce a trend");
        assert_eq!(trend.delta, 1.0);
        assert_eq!(trend.percent_change, Some(6.2));
    }

    #[test]
    fn zero_previous_score_has_no_percent_change() {
        let records = vec![record_at("a", 40.0, 10), record_at("a", 0.0, 0)];
        let trend = scan_delta(&records).expect("two scans should produce a trend");
        assert_eq!(trend.delta, 40.0);
        assert_eq!(trend.percent_change, None);
        assert_eq!(trend.comparison_period, "10 seconds");
    }

    #[test]
    fn fewer_than_two_scans_has_no_trend() {
        assert!(scan_delta(&[]).is_none());
        assert!(scan_delta(&[record_at("a", 50.0, 0)]).is_none());
    }

    #[test]
    fn store_lookup_uses_two_newest_scans() {
        let store = MemoryStore::new();
        store.record(record_at("a", 50.0, 0)).expect("record should store");
        assert!(get_profile_scan_delta(&store, "a")
            .expect("lookup should succeed")
            .is_none());

        store.record(record_at("a", 60.0, 7_200)).expect("record should store");
        store.record(record_at("a", 45.0, 3_600)).expect("record should store");
        let trend = get_profile_scan_delta(&store, "a")
            .expect("lookup should succeed")
            .expect("trend should exist");
        assert_eq!(trend.previous_score, 45.0);
        assert_eq!(trend.delta, 15.0);
        assert_eq!(trend.percent_change, Some(33.3));
        assert_eq!(trend.comparison_period, "1 hours");
    }
}
