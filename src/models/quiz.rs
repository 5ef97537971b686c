use serde::{Deserialize, Serialize};

/// A quiz document as loaded from `quiz.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizData {
    pub name: String,

    #[serde(default)]
    pub description: String,

    pub questions: Vec<Question>,
}

/// A single multiple-choice question.
///
/// **Convention:** `options[0]` is always the correct answer in the source
/// ordering. Display order is randomized by
/// [`shuffle_options`](crate::services::shuffle::shuffle_options), which reports
/// where the correct option ended up. The loader checks once that `options`
/// is non-empty; nothing else re-validates this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub text: String,
    pub options: Vec<String>,
}

impl Question {
    pub fn new<S: Into<String>>(text: S, options: Vec<String>) -> Self {
        Self {
            text: text.into(),
            options,
        }
    }

    /// The correct answer text (the first option in source order).
    pub fn correct_answer(&self) -> Option<&str> {
        self.options.first().map(String::as_str)
    }
}

impl QuizData {
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }
}

/// Correctness marker stored per answered question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnswerMark {
    Correct,
    Incorrect,
}

impl AnswerMark {
    pub fn from_indices(selected_index: usize, correct_index: usize) -> Self {
        if selected_index == correct_index {
            Self::Correct
        } else {
            Self::Incorrect
        }
    }

    pub fn is_correct(self) -> bool {
        self == Self::Correct
    }

    /// Legacy numeric encoding: 0 for correct, 1 for incorrect.
    pub fn code(self) -> u8 {
        match self {
            Self::Correct => 0,
            Self::Incorrect => 1,
        }
    }
}
