//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between the
//! domain and the outside world. Adapters implement these ports.
//!
//! - `InsightCache` - content-addressed, TTL-bounded insight memoization
//! - `InsightSource` - swappable insight generation capability
//! - `PartnerStore` - row-store CRUD for partner records, scoped by user
//! - `AchievementStore` - per-user progress/unlock persistence
//! - `ChangeHandler` - reaction to realtime row-change events

mod achievement_store;
mod change_feed;
mod insight_cache;
mod insight_source;
mod partner_store;

pub use achievement_store::{AchievementStore, AchievementStoreError};
pub use change_feed::{ChangeHandler, RecordChange};
pub use insight_cache::{CacheEntry, CacheStoreError, InsightCache};
pub use insight_source::{InsightRequest, InsightSource, InsightSourceError};
pub use partner_store::{PartnerStore, PartnerStoreError};
