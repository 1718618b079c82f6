//! Report rendering for the timecard audit.
//!
//! Reports come in two forms: the fixed three-section text listing and a
//! JSON document carrying counts and the classification trace.

mod json;
mod text;

pub use json::{BucketSummary, FlaggedEmployee, JsonReport, render_json};
pub use text::render_text;
