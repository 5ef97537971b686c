// UI module - Terminal front end
//
// This module contains:
// - views: Pure text renderers for the welcome, question and results screens
// - QuizController: Plays a quiz against the StateManager over async input/output

pub mod controller;
pub mod views;

pub use controller::{CancelHandle, QuizController, SessionOutcome, spawn_state_logger};
