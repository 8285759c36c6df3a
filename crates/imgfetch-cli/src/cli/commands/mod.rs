//! Session driver and per-URL fetch reporting.

mod fetch;
mod session;

pub use fetch::{fetch_and_report, report_outcome};
pub use session::{parse_url_list, run_session, SessionSummary};
