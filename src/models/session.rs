use crate::models::QuizState;

/// Which screen the session is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuizPhase {
    /// Welcome screen, no question shown yet
    #[default]
    Welcome,
    InProgress,
    Completed,
}

/// A selection shown to the player but not yet scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingSelection {
    /// Session generation the selection was made in
    pub generation: u64,
    pub question_index: usize,
    pub selected_index: usize,
    pub correct_index: usize,
    pub is_correct: bool,
}

/// Everything the front end needs to know about the running quiz.
///
/// Wrapped by [`StateManager`](crate::state::StateManager); see there for the
/// select/commit flow.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub quiz: QuizState,
    pub phase: QuizPhase,
    pub pending: Option<PendingSelection>,
    /// Bumped on every restart, so selections made before it can't be committed
    pub generation: u64,
}

impl SessionState {
    pub fn new(total_questions: usize) -> Self {
        Self {
            quiz: QuizState::new(total_questions),
            phase: QuizPhase::Welcome,
            pending: None,
            generation: 0,
        }
    }

    pub fn is_awaiting_selection(&self) -> bool {
        self.phase == QuizPhase::InProgress && self.pending.is_none()
    }

    /// 1-based number of the question on screen, for "Question n of m".
    pub fn question_number(&self) -> usize {
        self.quiz.current_index + 1
    }
}
