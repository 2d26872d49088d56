//! Achievement handlers.

mod refresh_achievements;

pub use refresh_achievements::{RefreshAchievementsHandler, RefreshAchievementsResult};
