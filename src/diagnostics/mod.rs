//! Diagnostics data model returned alongside the reconstructed image.
//!
//! `UnshredReport` records the tables the chain was derived from, the
//! resulting order, per-seam affinities and per-stage timings. It serializes
//! to JSON for the command-line tool.

pub mod report;
pub mod timing;

pub use report::{InputDescriptor, UnshredOutcome, UnshredReport};
pub use timing::{StageTiming, TimingBreakdown};
