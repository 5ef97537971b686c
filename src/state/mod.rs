// State management module
//
// This module provides the StateManager which wraps SessionState with thread-safe access
// using Arc<RwLock<T>> and emits change events for front-end updates.

use crate::models::{PendingSelection, QuizPhase, SessionState};
use std::sync::{Arc, RwLock};
use tokio::sync::broadcast;

/// Change events emitted when the session is modified
///
/// These events let the front end redraw without polling the state.
#[derive(Clone, Debug, PartialEq)]
pub enum StateChange {
    /// Player left the welcome screen
    QuizStarted {
        total_questions: usize,
    },

    /// An option was picked and is being revealed; nothing is scored yet
    OptionSelected {
        question_index: usize,
        selected_index: usize,
        is_correct: bool,
    },

    /// A selection was committed to the score
    AnswerRecorded {
        question_index: usize,
        is_correct: bool,
        score: usize,
    },

    /// Moved on to the next question
    QuestionAdvanced {
        current_index: usize,
        total_questions: usize,
    },

    /// The last question was answered
    QuizCompleted {
        score: usize,
        total_questions: usize,
        percentage: u32,
    },

    /// Session was reset back to the welcome screen
    QuizRestarted,
}

/// Thread-safe quiz session manager with event emission
///
/// This is the central state management component that:
/// - Provides thread-safe access to [`SessionState`] via `Arc<RwLock<T>>`
/// - Detects state changes and emits [`StateChange`] events
/// - Splits answering into [`select()`](Self::select) and [`commit()`](Self::commit)
///   so the front end can show the pick before it is scored
/// - Supports subscribing to state changes via tokio broadcast channels
///
/// The manager itself has no notion of time. The front end decides how long to
/// wait between `select` and `commit`, and drops the commit if the view goes away.
///
/// # Related Types
///
/// - [`crate::models::QuizState`]: The progression state machine
/// - [`StateChange`]: Event types emitted on state mutations
/// - [`crate::ui::QuizController`]: Primary consumer of state events
pub struct StateManager {
    /// The session state protected by RwLock for thread-safe access
    state: Arc<RwLock<SessionState>>,

    /// Broadcast channel for emitting state change events
    state_tx: broadcast::Sender<StateChange>,
}

impl StateManager {
    /// Create a new StateManager for a quiz with `total_questions` questions
    ///
    /// # Returns
    /// A new StateManager with a broadcast channel buffer of 100 events
    pub fn new(total_questions: usize) -> Self {
        let (state_tx, _) = broadcast::channel(100);
        Self {
            state: Arc::new(RwLock::new(SessionState::new(total_questions))),
            state_tx,
        }
    }

    /// Get a read-only snapshot of the current state
    pub fn snapshot(&self) -> SessionState {
        self.state.read().unwrap().clone()
    }

    /// Execute a function with read access to the state
    ///
    /// # Example
    /// ```ignore
    /// let score = state_manager.read(|state| state.quiz.score);
    /// ```
    pub fn read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&SessionState) -> R,
    {
        let state = self.state.read().unwrap();
        f(&state)
    }

    /// Update the state and emit change events
    ///
    /// 1. Captures the old state
    /// 2. Applies the update function
    /// 3. Detects what changed
    /// 4. Emits appropriate events
    ///
    /// # Returns
    /// A vector of StateChange events that were emitted
    pub fn update<F>(&self, update_fn: F) -> Vec<StateChange>
    where
        F: FnOnce(&mut SessionState),
    {
        let mut state = self.state.write().unwrap();
        let old_state = state.clone();

        update_fn(&mut state);

        let changes = self.detect_changes(&old_state, &state);

        for change in &changes {
            // Ignore send errors - it's OK if no one is listening
            let _ = self.state_tx.send(change.clone());
        }

        changes
    }

    /// Subscribe to state change events
    pub fn subscribe(&self) -> broadcast::Receiver<StateChange> {
        self.state_tx.subscribe()
    }

    fn detect_changes(&self, old: &SessionState, new: &SessionState) -> Vec<StateChange> {
        let mut changes = Vec::new();

        if old.phase == QuizPhase::Welcome && new.phase == QuizPhase::InProgress {
            changes.push(StateChange::QuizStarted {
                total_questions: new.quiz.total_questions(),
            });
        }

        if old.pending.is_none() {
            if let Some(pending) = new.pending {
                changes.push(StateChange::OptionSelected {
                    question_index: pending.question_index,
                    selected_index: pending.selected_index,
                    is_correct: pending.is_correct,
                });
            }
        }

        if new.quiz.answered_count() > old.quiz.answered_count() {
            let question_index = old.quiz.current_index;
            changes.push(StateChange::AnswerRecorded {
                question_index,
                is_correct: new
                    .quiz
                    .answer_for(question_index)
                    .is_some_and(|mark| mark.is_correct()),
                score: new.quiz.score,
            });
        }

        if new.quiz.current_index > old.quiz.current_index {
            changes.push(StateChange::QuestionAdvanced {
                current_index: new.quiz.current_index,
                total_questions: new.quiz.total_questions(),
            });
        }

        if !old.quiz.is_completed && new.quiz.is_completed {
            changes.push(StateChange::QuizCompleted {
                score: new.quiz.score,
                total_questions: new.quiz.total_questions(),
                percentage: new.quiz.percentage(),
            });
        }

        changes
    }

    /// Leave the welcome screen and show the first question
    pub fn start(&self) -> Vec<StateChange> {
        self.update(|state| {
            if state.phase == QuizPhase::Welcome {
                state.phase = QuizPhase::InProgress;
            } else {
                tracing::debug!("start() ignored in phase {:?}", state.phase);
            }
        })
    }

    /// Mark an option as picked for the current question.
    ///
    /// Score and pointer are untouched until [`commit()`](Self::commit). Only
    /// one selection per question is accepted; later picks are ignored.
    ///
    /// # Returns
    /// The accepted selection, or `None` if it was ignored
    pub fn select(&self, selected_index: usize, correct_index: usize) -> Option<PendingSelection> {
        self.select_with_changes(selected_index, correct_index).0
    }

    fn select_with_changes(
        &self,
        selected_index: usize,
        correct_index: usize,
    ) -> (Option<PendingSelection>, Vec<StateChange>) {
        let mut accepted = None;

        let changes = self.update(|state| {
            if !state.is_awaiting_selection() {
                if state.phase != QuizPhase::InProgress {
                    tracing::warn!(
                        "Selection {} ignored: quiz is not in progress ({:?})",
                        selected_index,
                        state.phase
                    );
                } else {
                    tracing::debug!("Selection {} ignored: answer already pending", selected_index);
                }
                return;
            }

            let pending = PendingSelection {
                generation: state.generation,
                question_index: state.quiz.current_index,
                selected_index,
                correct_index,
                is_correct: selected_index == correct_index,
            };
            state.pending = Some(pending);
            accepted = Some(pending);
        });

        (accepted, changes)
    }

    /// Score `selection` and advance (or complete).
    ///
    /// Only the selection that is still pending is scored. A selection that a
    /// restart overtook is a no-op, even if a newer one is pending by now.
    pub fn commit(&self, selection: &PendingSelection) -> Vec<StateChange> {
        self.update(|state| {
            if state.pending.as_ref() != Some(selection) {
                tracing::debug!(
                    "Stale commit for question {} dropped (generation {}, now {})",
                    selection.question_index,
                    selection.generation,
                    state.generation
                );
                return;
            }
            state.pending = None;
            let pending = *selection;

            let mark = state
                .quiz
                .record_answer(pending.selected_index, pending.correct_index);

            tracing::debug!(
                "Question {} answered {:?}, score {}",
                pending.question_index,
                mark,
                state.quiz.score
            );

            if state.quiz.is_completed {
                state.phase = QuizPhase::Completed;
                tracing::info!(
                    "Quiz completed: {}/{} ({}%)",
                    state.quiz.score,
                    state.quiz.total_questions(),
                    state.quiz.percentage()
                );
            }
        })
    }

    /// Select and commit in one step, with no reveal in between
    pub fn record_answer(&self, selected_index: usize, correct_index: usize) -> Vec<StateChange> {
        let (accepted, mut changes) = self.select_with_changes(selected_index, correct_index);
        if let Some(selection) = accepted {
            changes.extend(self.commit(&selection));
        }
        changes
    }

    /// Reset the session to the welcome screen, dropping any pending selection
    pub fn restart(&self) -> Vec<StateChange> {
        let mut changes = self.update(|state| {
            state.quiz.restart();
            state.pending = None;
            state.generation = state.generation.wrapping_add(1);
            state.phase = QuizPhase::Welcome;
        });

        let reset_event = StateChange::QuizRestarted;
        let _ = self.state_tx.send(reset_event.clone());
        changes.push(reset_event);

        tracing::info!("Quiz restarted");
        changes
    }

}

// Make StateManager cloneable for sharing across tasks
impl Clone for StateManager {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            state_tx: self.state_tx.clone(),
        }
    }
}
