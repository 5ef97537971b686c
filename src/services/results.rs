//! Result scoring and share helpers.
//!
//! Turns a finished [`QuizState`] into a summary (percentage, tier, per-question
//! review) and builds the text and compose URL used to share a score.

use crate::models::{QuizData, QuizState, percentage};

/// Performance band for a final percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultTier {
    Excellent,
    Great,
    Good,
    KeepPracticing,
}

impl ResultTier {
    pub fn from_percentage(percentage: u32) -> Self {
        if percentage >= 90 {
            Self::Excellent
        } else if percentage >= 70 {
            Self::Great
        } else if percentage >= 50 {
            Self::Good
        } else {
            Self::KeepPracticing
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent!",
            Self::Great => "Great job!",
            Self::Good => "Good effort!",
            Self::KeepPracticing => "Keep practicing!",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Self::Excellent => "🏆",
            Self::Great => "🎉",
            Self::Good => "👍",
            Self::KeepPracticing => "🔄",
        }
    }
}

/// One line of the end-of-quiz review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionReview {
    pub question: String,
    pub is_correct: bool,
    pub correct_answer: String,
}

/// Summary of a finished quiz
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizResults {
    pub quiz_name: String,
    pub score: usize,
    pub total: usize,
    pub percentage: u32,
    pub tier: ResultTier,
    pub review: Vec<QuestionReview>,
}

impl QuizResults {
    /// Build the summary. Questions without a recorded answer count as incorrect.
    pub fn from_state(quiz: &QuizData, state: &QuizState) -> Self {
        let total = quiz.total_questions();
        let pct = percentage(state.score, total);

        let review = quiz
            .questions
            .iter()
            .enumerate()
            .map(|(index, question)| QuestionReview {
                question: question.text.clone(),
                is_correct: state.answer_for(index).is_some_and(|mark| mark.is_correct()),
                correct_answer: question.correct_answer().unwrap_or_default().to_string(),
            })
            .collect();

        Self {
            quiz_name: quiz.name.clone(),
            score: state.score,
            total,
            percentage: pct,
            tier: ResultTier::from_percentage(pct),
            review,
        }
    }

    pub fn share_text(&self) -> String {
        share_text(&self.quiz_name, self.score, self.total)
    }
}

/// Text posted when sharing a score.
pub fn share_text(quiz_name: &str, score: usize, total: usize) -> String {
    let pct = percentage(score, total);
    let tier = ResultTier::from_percentage(pct);
    format!(
        "{} I scored {}% ({}/{}) on the \"{}\" quiz! Try it yourself:",
        tier.emoji(),
        pct,
        score,
        total,
        quiz_name
    )
}

/// Compose-intent URL that pre-fills `text` and embeds `app_url`.
///
/// The embed is a single plain `embed` parameter; some clients reject the
/// `embeds[]` array form.
pub fn share_intent_url(compose_url: &str, text: &str, app_url: &str) -> String {
    format!(
        "{}?text={}&embed={}",
        compose_url,
        encode_uri_component(text),
        encode_uri_component(app_url)
    )
}

/// Percent-encode everything except the characters JavaScript's
/// `encodeURIComponent` leaves alone.
pub fn encode_uri_component(input: &str) -> String {
    let mut encoded = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => encoded.push(byte as char),
            _ => encoded.push_str(&format!("%{:02X}", byte)),
        }
    }
    encoded
}
