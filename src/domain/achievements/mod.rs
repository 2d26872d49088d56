//! Achievements module - progress counters, catalog, and unlock evaluation.

mod catalog;
mod engine;
mod progress;

pub use catalog::{achievement_catalog, AchievementSpec};
pub use engine::{evaluate, Achievement};
pub use progress::{ProgressCounters, UserProgressState};
