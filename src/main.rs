//! FrameQuiz - Multiple-choice quiz in the terminal
//!
//! Main entry point for the terminal front end.
//!
//! # Overview
//!
//! This binary initializes:
//! - Logging infrastructure (file rotation + optional console output)
//! - A single-threaded tokio runtime (input loop and answer delays)
//! - Configuration loading ([`ConfigManager`])
//! - State management ([`StateManager`])
//! - The terminal controller ([`QuizController`])
//!
//! # Execution Flow
//!
//! 1. Load `Quiz Settings.yaml` from `FrameQuiz Data/`
//! 2. Initialize logging → logs/framequiz.<date>
//! 3. Load the quiz document (argument, settings, or built-in sample)
//! 4. Run the controller until the player quits or presses Ctrl-C
//!
//! # Usage
//!
//! ```text
//! framequiz [path/to/quiz.json]
//! ```

use anyhow::{Context, Result};
use framequiz::logging::{LoggingOptions, setup_logging};
use framequiz::ui::{QuizController, SessionOutcome, spawn_state_logger};
use framequiz::{APP_NAME, ConfigManager, StateManager, VERSION};
use std::sync::Arc;
use std::time::Duration;

fn main() -> Result<()> {
    let config_manager = ConfigManager::new("FrameQuiz Data")?;
    let mut user_config = config_manager.load_user_config()?;

    let mut logging = LoggingOptions::new("logs", APP_NAME);
    logging.debug_mode = user_config.quiz_settings.debug_mode;
    let _log_guard = setup_logging(&logging)?;

    tracing::info!("Starting {} v{}", APP_NAME, VERSION);

    if let Some(quiz_file) = std::env::args().nth(1) {
        tracing::info!("Using quiz file from command line: {}", quiz_file);
        user_config.quiz_settings.quiz_file = quiz_file;
    }

    // Everything runs on one thread; the runtime only provides timers and async stdin
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to build tokio runtime")?;

    let result = runtime.block_on(async {
        let quiz = config_manager.load_quiz(&user_config.quiz_settings)?;

        let state_manager = Arc::new(StateManager::new(quiz.total_questions()));
        let state_logger = spawn_state_logger(&state_manager);

        let input = tokio::io::BufReader::new(tokio::io::stdin());
        let mut controller = QuizController::new(
            Arc::clone(&state_manager),
            Arc::new(quiz),
            user_config.quiz_settings.clone(),
            input,
            tokio::io::stdout(),
        );

        let cancel = controller.cancel_handle();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::warn!("Interrupted - dropping any pending answer");
                cancel.cancel();
            }
        });

        let outcome = controller.run().await;
        state_logger.abort();
        outcome
    });

    // stdin reads park a blocking thread; don't wait on it at exit
    runtime.shutdown_timeout(Duration::from_millis(200));

    match &result {
        Ok(SessionOutcome::Finished(results)) => {
            tracing::info!(
                "Player finished \"{}\" with {}%",
                results.quiz_name,
                results.percentage
            );
        }
        Ok(outcome) => tracing::info!("Session ended: {:?}", outcome),
        Err(e) => tracing::error!("Quiz error: {:#}", e),
    }

    tracing::info!("Application shutdown complete");
    result.map(|_| ())
}
