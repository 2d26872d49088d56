//! Partner record handlers.

mod create_partner;
mod delete_partner;
mod list_partners;
mod update_partner;

pub use create_partner::{CreatePartnerCommand, CreatePartnerHandler};
pub use delete_partner::{DeletePartnerCommand, DeletePartnerHandler};
pub use list_partners::ListPartnersHandler;
pub use update_partner::{UpdatePartnerCommand, UpdatePartnerHandler};
