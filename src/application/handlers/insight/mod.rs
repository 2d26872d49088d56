//! Insight handlers.

mod analyze_profile;

pub use analyze_profile::{AnalyzeProfileCommand, AnalyzeProfileHandler, AnalyzeProfileResult};
