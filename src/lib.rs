pub mod analyze;
pub mod config;
pub mod enrich;
pub mod error;
pub mod input;
pub mod report;
pub mod review;
pub mod store;
pub mod telemetry;
pub mod trend;
pub mod types;

pub use analyze::analyse_school_profile;
pub use enrich::run_complete_school_analysis;
pub use error::{Result, ScanError};
pub use trend::get_profile_scan_delta;
