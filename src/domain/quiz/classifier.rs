//! Archetype classifier - pattern-overlap scoring over the fixed catalog.

use thiserror::Error;

use super::{Archetype, QuestionId, Questionnaire, QuizAnswers};
use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors from classification. Both variants are user-correctable
/// validation failures and propagate to the caller.
#[derive(Debug, Clone, Error)]
pub enum ClassifyError {
    /// One or more required questions were not answered. Classification
    /// never silently defaults missing answers.
    #[error("Quiz incomplete: missing answers for {}", format_ids(.missing))]
    IncompleteInput { missing: Vec<QuestionId> },

    /// An answer value is not in the question's option set.
    #[error("Answer '{value}' is not a valid option for question '{question}'")]
    UnknownOption { question: QuestionId, value: String },
}

impl From<ClassifyError> for DomainError {
    fn from(err: ClassifyError) -> Self {
        match &err {
            ClassifyError::IncompleteInput { missing } => {
                DomainError::new(ErrorCode::IncompleteInput, err.to_string())
                    .with_detail("missing", format_ids(missing))
            }
            ClassifyError::UnknownOption { question, .. } => {
                DomainError::new(ErrorCode::ValidationFailed, err.to_string())
                    .with_detail("question", question.as_str())
            }
        }
    }
}

fn format_ids(ids: &[QuestionId]) -> String {
    ids.iter()
        .map(QuestionId::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Classifies a complete answer set into a flavour archetype.
///
/// Each archetype scores one point per answered option value that appears in
/// its pattern-token list; the highest score wins. Ties resolve to the
/// earlier-declared archetype in [`Archetype::ALL`] - a deliberate, stable
/// policy, since which flavour a user sees on a tie is a UX-visible choice.
///
/// Pure and idempotent: the same answers always yield the same archetype.
pub fn classify(
    questionnaire: &Questionnaire,
    answers: &QuizAnswers,
) -> Result<Archetype, ClassifyError> {
    let missing: Vec<QuestionId> = questionnaire
        .questions()
        .iter()
        .filter(|q| answers.get(&q.id).is_none())
        .map(|q| q.id.clone())
        .collect();
    if !missing.is_empty() {
        return Err(ClassifyError::IncompleteInput { missing });
    }

    for question in questionnaire.questions() {
        // Presence checked above.
        if let Some(value) = answers.get(&question.id) {
            if !question.accepts(value) {
                return Err(ClassifyError::UnknownOption {
                    question: question.id.clone(),
                    value: value.to_string(),
                });
            }
        }
    }

    let mut best = Archetype::ALL[0];
    let mut best_score = 0usize;
    for archetype in Archetype::ALL {
        let score = questionnaire
            .questions()
            .iter()
            .filter_map(|q| answers.get(&q.id))
            .filter(|value| archetype.pattern_tokens().contains(value))
            .count();
        // Strictly-greater comparison keeps the first-declared archetype on ties.
        if score > best_score {
            best = archetype;
            best_score = score;
        }
    }

    Ok(best)
}
