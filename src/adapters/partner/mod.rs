//! Partner store adapters.

mod in_memory;
mod postgres;

pub use in_memory::InMemoryPartnerStore;
pub use postgres::PostgresPartnerStore;
