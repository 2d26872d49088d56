//! Questionnaire definition and submitted quiz answers.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Identifier for a quiz question.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(String);

impl QuestionId {
    /// Creates a QuestionId from a key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single question with its fixed option set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// Stable question key.
    pub id: QuestionId,
    /// Prompt shown to the user.
    pub prompt: String,
    /// The enumerated option values a user may choose from.
    pub options: Vec<String>,
}

impl Question {
    /// Creates a question from a key, prompt, and option values.
    pub fn new(id: impl Into<String>, prompt: impl Into<String>, options: &[&str]) -> Self {
        Self {
            id: QuestionId::new(id),
            prompt: prompt.into(),
            options: options.iter().map(|o| o.to_string()).collect(),
        }
    }

    /// Checks whether a value is one of this question's options.
    pub fn accepts(&self, value: &str) -> bool {
        self.options.iter().any(|o| o == value)
    }
}

/// The active questionnaire: an ordered list of required questions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Questionnaire {
    questions: Vec<Question>,
}

impl Questionnaire {
    /// Creates a questionnaire from a question list.
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// Returns the questions in declaration order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Looks up a question by id.
    pub fn question(&self, id: &QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| &q.id == id)
    }

    /// Returns the number of questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Returns true if the questionnaire has no questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// A user's submitted answers: question id to chosen option value.
///
/// Classification requires exactly one answer for every question in the
/// active questionnaire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuizAnswers {
    answers: HashMap<QuestionId, String>,
}

impl QuizAnswers {
    /// Creates an empty answer set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an answer, replacing any previous answer to the question.
    pub fn with_answer(mut self, question: impl Into<String>, value: impl Into<String>) -> Self {
        self.answers.insert(QuestionId::new(question), value.into());
        self
    }

    /// Returns the answer to a question, if present.
    pub fn get(&self, id: &QuestionId) -> Option<&str> {
        self.answers.get(id).map(String::as_str)
    }

    /// Returns the number of answered questions.
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    /// Returns true if no questions have been answered.
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

static DEFAULT_QUESTIONNAIRE: Lazy<Questionnaire> = Lazy::new(|| {
    Questionnaire::new(vec![
        Question::new(
            "conflict_style",
            "When the two of you disagreed, what usually happened?",
            &[
                "talk_it_out",
                "need_space",
                "passionate_debate",
                "keep_the_peace",
                "quick_apology",
            ],
        ),
        Question::new(
            "ideal_weekend",
            "What did a good weekend together look like?",
            &[
                "cozy_night_in",
                "spontaneous_trip",
                "brunch_with_friends",
                "quiet_hike",
                "late_night_party",
            ],
        ),
        Question::new(
            "love_language",
            "How did they most often show affection?",
            &["words", "touch", "gifts", "acts", "quality_time"],
        ),
        Question::new(
            "pace",
            "How fast did the relationship move?",
            &["slow_burn", "all_in_fast", "steady", "hot_and_cold"],
        ),
        Question::new(
            "social_energy",
            "How did they recharge?",
            &["homebody", "social_butterfly", "small_circle", "lone_wolf"],
        ),
        Question::new(
            "surprise_reaction",
            "How did they feel about surprises?",
            &["love_surprises", "prefer_plans", "depends_on_mood"],
        ),
        Question::new(
            "texting_style",
            "What was their texting style?",
            &["constant", "bursts", "minimal", "memes"],
        ),
    ])
});

/// The fixed questionnaire the app ships with.
pub fn default_questionnaire() -> &'static Questionnaire {
    &DEFAULT_QUESTIONNAIRE
}
