//! Mock answer search.
//!
//! Queries are answered from four canned topic templates chosen by keyword matching
//! ([`topics`]). [`SearchSession`] adds the per-session search history and the simulated
//! latency shown by the interactive front-end.

pub mod history;
pub mod session;
pub mod synthesizer;
pub mod topics;

pub use history::{HISTORY_LIMIT, SearchHistory};
pub use session::SearchSession;
pub use synthesizer::{PLACEHOLDER_CONFIDENCE, select_template, synthesize};
pub use topics::EXAMPLE_QUESTIONS;
