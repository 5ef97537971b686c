//! Services module - Pure quiz logic with no front-end dependencies.
//!
//! # Components
//!
//! - [`shuffle`]: Fisher-Yates option shuffling that reports where the correct
//!   option (source index 0) landed
//! - [`loader`]: Reads the quiz JSON document and validates its shape once
//! - [`results`]: Final percentage, result tier, per-question review, share text
//!   and compose-intent URL
//!
//! # Usage Example
//!
//! ```ignore
//! use framequiz::services::{shuffle_options, FileQuizLoader, QuizLoader};
//!
//! let quiz = FileQuizLoader::new("quiz.json").load()?;
//! let shuffled = shuffle_options(&quiz.questions[0].options);
//! println!("correct answer is shown at {}", shuffled.correct_index);
//! ```

pub mod loader;
pub mod results;
pub mod shuffle;

pub use loader::{FileQuizLoader, QuizLoadError, QuizLoader, validate_quiz};
pub use results::{QuestionReview, QuizResults, ResultTier, share_intent_url, share_text};
pub use shuffle::{ShuffleResult, shuffle_options, shuffle_options_with};
