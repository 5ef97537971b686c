//! Data models for the quiz engine.
//!
//! - [`QuizData`] / [`Question`]: the quiz document loaded from JSON
//! - [`QuizState`]: progress through one quiz session (pointer, score, answers, completion)
//! - [`AnswerMark`]: per-question correctness marker
//! - [`SessionState`]: `QuizState` plus the current screen and any pending selection
//! - [`UserConfig`]: presentation and share settings loaded from `Quiz Settings.yaml`
//!
//! # Architecture Note
//!
//! `QuizState` is a plain value. [`StateManager`](crate::state::StateManager) wraps it
//! in `Arc<RwLock<>>` and emits change events; all front-end mutations go through it.

pub mod config;
pub mod quiz;
pub mod quiz_state;
pub mod session;

pub use config::{QuizSettings, UserConfig};
pub use quiz::{AnswerMark, Question, QuizData};
pub use quiz_state::{QuizState, percentage};
pub use session::{PendingSelection, QuizPhase, SessionState};
