// FrameQuiz - Multiple-choice quiz engine
//
// This is the library crate containing the quiz state machine, option shuffler,
// loaders and the terminal front end. The binary crate (main.rs) wires them up.

pub mod config;
pub mod logging;
pub mod models;
pub mod services;
pub mod state;
pub mod ui;

// Re-export commonly used types for convenience
pub use config::ConfigManager;
pub use models::{AnswerMark, Question, QuizData, QuizPhase, QuizState, SessionState, UserConfig};
pub use services::{QuizResults, ShuffleResult, shuffle_options};
pub use state::{StateChange, StateManager};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
