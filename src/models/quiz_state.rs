use crate::models::quiz::AnswerMark;

/// Progress through a single quiz session.
///
/// Created fresh at quiz start, mutated once per answered question by
/// [`record_answer()`](Self::record_answer), and reset wholesale by
/// [`restart()`](Self::restart).
///
/// # Thread Safety
///
/// `QuizState` is owned by [`crate::state::StateManager`], which wraps it in
/// `Arc<RwLock<..>>` and emits [`StateChange`](crate::state::StateChange)
/// events. The front end should go through the manager rather than mutating
/// a `QuizState` directly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizState {
    /// Question the player is on (0-based). Stays on the last question once
    /// the quiz completes.
    pub current_index: usize,

    /// Number of correctly answered questions.
    pub score: usize,

    /// Correctness per question, `answers[i]` belongs to question `i`.
    pub answers: Vec<AnswerMark>,

    pub is_completed: bool,

    total_questions: usize,
}

impl QuizState {
    pub fn new(total_questions: usize) -> Self {
        Self {
            current_index: 0,
            score: 0,
            answers: Vec::new(),
            is_completed: false,
            total_questions,
        }
    }

    pub fn total_questions(&self) -> usize {
        self.total_questions
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    /// Correctness of question `index`, if it has been answered.
    pub fn answer_for(&self, index: usize) -> Option<AnswerMark> {
        self.answers.get(index).copied()
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 >= self.total_questions
    }

    /// Record the answer to the current question and advance.
    ///
    /// `selected_index` and `correct_index` are positions in the displayed
    /// (shuffled) option list. They are not bounds-checked.
    ///
    /// On the last question the pointer stays put and `is_completed` is set.
    pub fn record_answer(&mut self, selected_index: usize, correct_index: usize) -> AnswerMark {
        let mark = AnswerMark::from_indices(selected_index, correct_index);

        if self.answers.len() > self.current_index {
            self.answers[self.current_index] = mark;
        } else {
            self.answers.push(mark);
        }

        if mark.is_correct() {
            self.score += 1;
        }

        if self.is_last_question() {
            self.is_completed = true;
        } else {
            self.current_index += 1;
        }

        mark
    }

    /// Reset to the initial state. The question count is kept.
    pub fn restart(&mut self) {
        self.current_index = 0;
        self.score = 0;
        self.answers.clear();
        self.is_completed = false;
    }

    /// Score as a whole percentage of the quiz.
    pub fn percentage(&self) -> u32 {
        percentage(self.score, self.total_questions)
    }
}

/// `round(score / total * 100)`, using `f64::round` (ties away from zero).
///
/// Returns 0 for an empty quiz.
pub fn percentage(score: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (score as f64 / total as f64 * 100.0).round() as u32
}
