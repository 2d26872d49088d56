//! Quiz handlers.

mod submit_quiz;

pub use submit_quiz::{SubmitQuizCommand, SubmitQuizHandler, SubmitQuizResult};
