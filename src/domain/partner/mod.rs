//! Partner module - Past-relationship records.

mod record;

pub use record::{DurationBucket, OutcomeBucket, PartnerRecord};
