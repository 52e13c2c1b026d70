//! Persistence of scan history.
//!
//! A scan is one scoring run for a school. The trend tracker only ever asks for the newest
//! few scans of a single slug, so the store contract is append plus a bounded newest-first
//! query.

pub mod jsonl;
pub mod memory;

use crate::types::report::AnalysisReport;
use crate::types::scoring::Score;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

pub use jsonl::JsonLinesStore;
pub use memory::MemoryStore;

const SCAN_ID_LEN: usize = 12;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanRecord {
    pub scan_id: String,
    pub slug: String,
    pub score: Score,
    pub analysis: AnalysisReport,
    pub created_at: DateTime<Utc>,
}

impl ScanRecord {
    pub fn new(slug: &str, analysis: AnalysisReport, created_at: DateTime<Utc>) -> Self {
        Self {
            scan_id: scan_id(slug, created_at),
            slug: slug.to_string(),
            score: analysis.overall_score,
            analysis,
            created_at,
        }
    }
}

impl fmt::Display for ScanRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.slug, self.score)
    }
}

fn scan_id(slug: &str, created_at: DateTime<Utc>) -> String {
    let mut hasher = Sha256::new();
    hasher.update(slug.as_bytes());
    hasher.update(b"\n");
    hasher.update(created_at.to_rfc3339().as_bytes());
    let digest = hasher.finalize();
    digest
        .iter()
        .map(|byte| format!("{byte:02x}"))
        .collect::<String>()
        .chars()
        .take(SCAN_ID_LEN)
        .collect()
}

/// Append-only scan history keyed by school slug.
pub trait ScanStore: Send + Sync {
    fn record(&self, record: ScanRecord) -> Result<(), StoreError>;

    /// Newest-first scans for `slug`, at most `limit` of them.
    fn recent(&self, slug: &str, limit: usize) -> Result<Vec<ScanRecord>, StoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("scan store io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("corrupt scan record at line {line}: {source}")]
    Corrupt {
        line: usize,
        source: serde_json::Error,
    },
    #[error("scan record encoding failed: {0}")]
    Encode(serde_json::Error),
    #[error("scan store unavailable: {0}")]
    Unavailable(String),
}

/// Newest first, stable for equal timestamps (later insertion wins).
pub(crate) fn newest_first(
    mut records: Vec<ScanRecord>,
    slug: &str,
    limit: usize,
) -> Vec<ScanRecord> {
    records.retain(|record| record.slug == slug);
    records.reverse();
    records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    records.truncate(limit);
    records
}
