//! SubmitQuizHandler - classifies a completed quiz and records the activity.

use std::sync::Arc;
use tracing::info;

use crate::domain::achievements::evaluate;
use crate::domain::foundation::{DomainError, UserId};
use crate::domain::quiz::{classify, default_questionnaire, Archetype, QuizAnswers};
use crate::ports::AchievementStore;

/// Command to submit a completed quiz.
#[derive(Debug, Clone)]
pub struct SubmitQuizCommand {
    pub user_id: UserId,
    pub answers: QuizAnswers,
}

/// Result of a successful quiz submission.
#[derive(Debug, Clone)]
pub struct SubmitQuizResult {
    pub archetype: Archetype,
    /// Achievement ids newly unlocked by this submission.
    pub newly_unlocked: Vec<String>,
}

/// Handler for quiz submission.
pub struct SubmitQuizHandler {
    achievement_store: Arc<dyn AchievementStore>,
}

impl SubmitQuizHandler {
    pub fn new(achievement_store: Arc<dyn AchievementStore>) -> Self {
        Self { achievement_store }
    }

    pub async fn handle(&self, cmd: SubmitQuizCommand) -> Result<SubmitQuizResult, DomainError> {
        // Classification is strict: incomplete or tampered answers fail
        // before any state is touched.
        let archetype = classify(default_questionnaire(), &cmd.answers)?;

        let state = self.achievement_store.load(&cmd.user_id).await?;
        let state = state.with_quiz_completed();

        let evaluated = evaluate(&state.counters, state.unlocked());
        let newly_unlocked: Vec<String> = evaluated
            .iter()
            .filter(|a| a.unlocked && !state.is_unlocked(&a.id))
            .map(|a| a.id.as_str().to_string())
            .collect();

        let state = state.with_unlocked(
            evaluated
                .into_iter()
                .filter(|a| a.unlocked)
                .map(|a| a.id),
        );
        self.achievement_store.save(&cmd.user_id, &state).await?;

        info!(
            user_id = %cmd.user_id,
            archetype = archetype.as_str(),
            "quiz classified"
        );

        Ok(SubmitQuizResult {
            archetype,
            newly_unlocked,
        })
    }
}
