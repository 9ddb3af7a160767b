//! Data models for the career portal.
//!
//! - [`Feature`] - Collection tag driving sidebar navigation
//! - [`PracticeQuestion`], [`JobRequirement`], [`RoadmapStep`],
//!   [`InterviewExperience`] - The four immutable record kinds
//!
//! Records derive `Serialize` so the CLI can emit them as JSON.

pub mod feature;
pub mod records;

pub use feature::Feature;
pub use records::{Difficulty, InterviewExperience, JobRequirement, PracticeQuestion, RoadmapStep};
