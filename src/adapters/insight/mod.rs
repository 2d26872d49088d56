//! Insight source adapters.

mod mock_source;
mod template_source;

pub use mock_source::{MockInsightSource, MockOutcome};
pub use template_source::TemplateInsightSource;
