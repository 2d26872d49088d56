//! Achievement store adapters.

mod in_memory;
mod postgres;

pub use in_memory::InMemoryAchievementStore;
pub use postgres::PostgresAchievementStore;
