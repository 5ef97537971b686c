// Quiz Controller - Drives the terminal front end
//
// This module contains the QuizController which coordinates between:
// - Terminal input/output (any AsyncBufRead / AsyncWrite)
// - StateManager (quiz session state)
// - Option shuffler and results/share helpers
//
// It handles:
// - Shuffling options on question entry
// - Selection → reveal → delayed commit
// - Results and restart
// - Cancellation via a watch channel (pending commits are dropped)

use crate::models::{QuizData, QuizPhase, QuizSettings};
use crate::services::results::{QuizResults, share_intent_url};
use crate::services::shuffle::{ShuffleResult, shuffle_options, unshuffled};
use crate::state::{StateChange, StateManager};
use crate::ui::views;
use anyhow::{Context, Result, anyhow};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;

/// How a controller run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Player saw the results and chose not to play again
    Finished(QuizResults),
    /// Player quit, or input ended
    Quit,
    /// Cancellation was requested; any pending answer was dropped
    Cancelled,
}

/// Cloneable handle for cancelling a running controller from another task
#[derive(Clone, Debug)]
pub struct CancelHandle {
    cancel_tx: Arc<watch::Sender<bool>>,
}

impl CancelHandle {
    pub fn cancel(&self) {
        tracing::info!("Cancellation requested");
        let _ = self.cancel_tx.send(true);
    }
}

/// Outcome of waiting for a line of input
enum Input {
    Line(String),
    Eof,
    Cancelled,
}

/// Terminal controller that plays a quiz against the state manager
///
/// # Example
/// ```ignore
/// let state_manager = Arc::new(StateManager::new(quiz.total_questions()));
/// let input = tokio::io::BufReader::new(tokio::io::stdin());
/// let mut controller = QuizController::new(
///     state_manager,
///     Arc::new(quiz),
///     settings,
///     input,
///     tokio::io::stdout(),
/// );
/// let outcome = controller.run().await?;
/// ```
pub struct QuizController<R, W> {
    state_manager: Arc<StateManager>,
    quiz: Arc<QuizData>,
    settings: QuizSettings,
    input: R,
    output: W,

    /// Send `true` to drop pending commits and end the run
    cancel_tx: Arc<watch::Sender<bool>>,
    cancel_rx: watch::Receiver<bool>,
}

impl<R, W> QuizController<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(
        state_manager: Arc<StateManager>,
        quiz: Arc<QuizData>,
        settings: QuizSettings,
        input: R,
        output: W,
    ) -> Self {
        let (cancel_tx, cancel_rx) = watch::channel(false);

        tracing::info!(
            "Quiz controller initialized: \"{}\", {} questions, shuffle={}",
            quiz.name,
            quiz.total_questions(),
            settings.shuffle_options
        );

        Self {
            state_manager,
            quiz,
            settings,
            input,
            output,
            cancel_tx: Arc::new(cancel_tx),
            cancel_rx,
        }
    }

    pub fn cancel_handle(&self) -> CancelHandle {
        CancelHandle {
            cancel_tx: Arc::clone(&self.cancel_tx),
        }
    }

    /// Request cancellation of the running session
    pub fn request_cancel(&self) {
        self.cancel_handle().cancel();
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Play until the player quits, input ends, or cancellation is requested.
    pub async fn run(&mut self) -> Result<SessionOutcome> {
        loop {
            self.write(&views::welcome(&self.quiz)).await?;

            match self.read_line().await? {
                Input::Line(line) if is_quit(&line) => return Ok(SessionOutcome::Quit),
                Input::Line(_) => {}
                Input::Eof => return Ok(SessionOutcome::Quit),
                Input::Cancelled => return Ok(SessionOutcome::Cancelled),
            }

            self.state_manager.start();

            while self.state_manager.read(|s| s.phase) == QuizPhase::InProgress {
                if let Some(outcome) = self.play_question().await? {
                    return Ok(outcome);
                }
            }

            let results = self
                .state_manager
                .read(|s| QuizResults::from_state(&self.quiz, &s.quiz));
            let share_url = share_intent_url(
                &self.settings.compose_url,
                &results.share_text(),
                &self.settings.app_url,
            );
            self.write(&views::results(&results, &share_url)).await?;

            match self.read_line().await? {
                Input::Line(line) if line.trim().eq_ignore_ascii_case("y") => {
                    self.state_manager.restart();
                }
                Input::Line(_) | Input::Eof => return Ok(SessionOutcome::Finished(results)),
                Input::Cancelled => return Ok(SessionOutcome::Cancelled),
            }
        }
    }

    /// Show the current question, take one selection and commit it after the
    /// configured delay. Returns an outcome if the session ends mid-question.
    async fn play_question(&mut self) -> Result<Option<SessionOutcome>> {
        let (index, number) = self
            .state_manager
            .read(|s| (s.quiz.current_index, s.question_number()));
        let quiz = Arc::clone(&self.quiz);
        let question = quiz
            .question(index)
            .ok_or_else(|| anyhow!("No question at index {}", index))?;

        let ShuffleResult {
            options,
            correct_index,
        } = if self.settings.shuffle_options {
            shuffle_options(&question.options)
        } else {
            unshuffled(&question.options)
        };

        let view = views::question(number, quiz.total_questions(), &question.text, &options);
        self.write(&view).await?;

        let selected_index = loop {
            let line = match self.read_line().await? {
                Input::Line(line) => line,
                Input::Eof => return Ok(Some(SessionOutcome::Quit)),
                Input::Cancelled => return Ok(Some(SessionOutcome::Cancelled)),
            };
            if is_quit(&line) {
                return Ok(Some(SessionOutcome::Quit));
            }
            match parse_choice(&line, options.len()) {
                Some(choice) => break choice,
                None => self.write(&views::invalid_choice(options.len())).await?,
            }
        };

        let Some(pending) = self.state_manager.select(selected_index, correct_index) else {
            return Err(anyhow!("Selection for question {} was not accepted", number));
        };
        self.write(&views::reveal(&pending)).await?;

        let delay = self.settings.answer_delay();
        if !self.wait_or_cancel(delay).await {
            tracing::info!("Dropping pending answer for question {}", number);
            return Ok(Some(SessionOutcome::Cancelled));
        }

        self.state_manager.commit(&pending);
        Ok(None)
    }

    /// Sleep for `delay` unless cancelled first. Returns false on cancellation.
    async fn wait_or_cancel(&mut self, delay: Duration) -> bool {
        if *self.cancel_rx.borrow() {
            return false;
        }

        tokio::select! {
            _ = tokio::time::sleep(delay) => true,
            _ = self.cancel_rx.changed() => false,
        }
    }

    async fn read_line(&mut self) -> Result<Input> {
        if *self.cancel_rx.borrow() {
            return Ok(Input::Cancelled);
        }

        let mut line = String::new();
        let read = tokio::select! {
            read = self.input.read_line(&mut line) => Some(read),
            _ = self.cancel_rx.changed() => None,
        };

        let Some(read) = read else {
            return Ok(Input::Cancelled);
        };
        if read.context("Failed to read input")? == 0 {
            Ok(Input::Eof)
        } else {
            Ok(Input::Line(line))
        }
    }

    async fn write(&mut self, text: &str) -> Result<()> {
        self.output
            .write_all(text.as_bytes())
            .await
            .context("Failed to write output")?;
        self.output.flush().await.context("Failed to flush output")?;
        Ok(())
    }
}

fn is_quit(line: &str) -> bool {
    matches!(line.trim(), "q" | "Q" | "quit")
}

/// Parse a 1-based option number into a 0-based index.
fn parse_choice(line: &str, option_count: usize) -> Option<usize> {
    let choice: usize = line.trim().parse().ok()?;
    (1..=option_count).contains(&choice).then(|| choice - 1)
}

/// Log state change events in the background
///
/// Spawns a task that listens for [`StateChange`] events until the state
/// manager is dropped.
pub fn spawn_state_logger(state_manager: &StateManager) -> JoinHandle<()> {
    let mut rx = state_manager.subscribe();

    tokio::spawn(async move {
        tracing::debug!("State logger started");

        loop {
            match rx.recv().await {
                Ok(StateChange::QuizCompleted {
                    score,
                    total_questions,
                    percentage,
                }) => {
                    tracing::info!(
                        "Session finished with {}/{} ({}%)",
                        score,
                        total_questions,
                        percentage
                    );
                }
                Ok(change) => tracing::debug!("State change: {:?}", change),
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!("State logger lagged, skipped {} events", skipped);
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }

        tracing::debug!("State logger stopped");
    })
}
