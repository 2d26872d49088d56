//! Quiz module - Questionnaire answers and flavour archetype classification.

mod answers;
mod archetype;
mod classifier;

pub use answers::{default_questionnaire, Question, QuestionId, Questionnaire, QuizAnswers};
pub use archetype::Archetype;
pub use classifier::{classify, ClassifyError};
