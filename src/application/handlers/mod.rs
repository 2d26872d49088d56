//! Command handlers.
//!
//! One handler per user-facing operation. Handlers own orchestration only:
//! classification, scoring and unlock rules live in the domain layer, and
//! all storage goes through ports.

pub mod achievements;
pub mod insight;
pub mod partner;
pub mod quiz;

pub use achievements::{RefreshAchievementsHandler, RefreshAchievementsResult};
pub use insight::{AnalyzeProfileCommand, AnalyzeProfileHandler, AnalyzeProfileResult};
pub use partner::{
    CreatePartnerCommand, CreatePartnerHandler, DeletePartnerCommand, DeletePartnerHandler,
    ListPartnersHandler, UpdatePartnerCommand, UpdatePartnerHandler,
};
pub use quiz::{SubmitQuizCommand, SubmitQuizHandler, SubmitQuizResult};
