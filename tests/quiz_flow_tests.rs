//! End-to-end tests for the terminal controller
//!
//! Input is fed from in-memory buffers and time is paused, so the answer
//! delays elapse instantly while keeping their ordering.

use framequiz::models::QuizSettings;
use framequiz::ui::{QuizController, SessionOutcome};
use framequiz::{Question, QuizData, QuizPhase, StateChange, StateManager};
use std::sync::Arc;
use tokio::time::{Duration, timeout};

fn capitals_quiz() -> QuizData {
    QuizData {
        name: "Capitals".to_string(),
        description: "World capitals".to_string(),
        questions: vec![
            Question::new("France?", vec!["Paris".into(), "Lyon".into(), "Nice".into()]),
            Question::new("Japan?", vec!["Tokyo".into(), "Osaka".into(), "Kyoto".into()]),
            Question::new("Peru?", vec!["Lima".into(), "Cusco".into(), "Arequipa".into()]),
        ],
    }
}

/// Unshuffled options so the correct answer is always choice 1.
fn fixed_order_settings() -> QuizSettings {
    QuizSettings {
        shuffle_options: false,
        ..QuizSettings::default()
    }
}

fn controller(
    input: &'static [u8],
    settings: QuizSettings,
) -> (Arc<StateManager>, QuizController<&'static [u8], Vec<u8>>) {
    let quiz = capitals_quiz();
    let state = Arc::new(StateManager::new(quiz.total_questions()));
    let controller = QuizController::new(
        Arc::clone(&state),
        Arc::new(quiz),
        settings,
        input,
        Vec::new(),
    );
    (state, controller)
}

#[tokio::test(start_paused = true)]
async fn test_play_through_and_finish() {
    let (state, mut controller) = controller(b"\n1\n2\n1\nn\n", fixed_order_settings());

    let outcome = controller.run().await.unwrap();

    let SessionOutcome::Finished(results) = outcome else {
        panic!("Expected Finished, got {:?}", outcome);
    };
    assert_eq!(results.score, 2);
    assert_eq!(results.total, 3);
    assert_eq!(results.percentage, 67);
    assert!(!results.review[1].is_correct);

    let snapshot = state.snapshot();
    assert_eq!(snapshot.phase, QuizPhase::Completed);
    assert_eq!(snapshot.quiz.current_index, 2);

    let output = String::from_utf8(controller.into_output()).unwrap();
    assert!(output.contains("=== Capitals ==="));
    assert!(output.contains("Question 1 of 3"));
    assert!(output.contains("Question 3 of 3"));
    assert!(output.contains("Incorrect."));
    assert!(output.contains("67%  Good effort!"));
    assert!(output.contains("[incorrect] Japan? (Answer: Tokyo)"));
    assert!(output.contains("&embed=https%3A%2F%2Fweb4-quiz-template.vercel.app"));
    assert!(!output.contains("embeds%5B%5D"));
}

#[tokio::test(start_paused = true)]
async fn test_invalid_choice_is_reprompted() {
    let (_state, mut controller) = controller(b"\n9\nabc\n1\n1\n1\n\n", fixed_order_settings());

    let outcome = controller.run().await.unwrap();

    assert!(matches!(outcome, SessionOutcome::Finished(ref r) if r.score == 3));
    let output = String::from_utf8(controller.into_output()).unwrap();
    assert_eq!(output.matches("Please enter a number from 1 to 3").count(), 2);
    assert!(output.contains("100%  Excellent!"));
}

#[tokio::test(start_paused = true)]
async fn test_play_again_restarts() {
    let (state, mut controller) = controller(b"\n2\n2\n2\ny\n\n1\n1\n1\nn\n", fixed_order_settings());
    let mut rx = state.subscribe();

    let outcome = controller.run().await.unwrap();

    assert!(matches!(outcome, SessionOutcome::Finished(ref r) if r.score == 3));

    let mut restarted = false;
    while let Ok(event) = rx.try_recv() {
        if event == StateChange::QuizRestarted {
            restarted = true;
        }
    }
    assert!(restarted, "Expected a QuizRestarted event");
}

#[tokio::test(start_paused = true)]
async fn test_quit_from_welcome() {
    let (state, mut controller) = controller(b"q\n", fixed_order_settings());

    assert_eq!(controller.run().await.unwrap(), SessionOutcome::Quit);
    assert_eq!(state.read(|s| s.phase), QuizPhase::Welcome);
}

#[tokio::test(start_paused = true)]
async fn test_input_ends_mid_quiz() {
    let (state, mut controller) = controller(b"\n1\n", fixed_order_settings());

    assert_eq!(controller.run().await.unwrap(), SessionOutcome::Quit);

    let snapshot = state.snapshot();
    assert_eq!(snapshot.quiz.score, 1);
    assert_eq!(snapshot.quiz.current_index, 1);
    assert!(!snapshot.quiz.is_completed);
}

#[tokio::test(start_paused = true)]
async fn test_commit_waits_for_answer_delay() {
    let settings = QuizSettings {
        reveal_delay_ms: 400,
        advance_delay_ms: 320,
        ..fixed_order_settings()
    };
    let (state, mut controller) = controller(b"\n1\n", settings);
    let mut rx = state.subscribe();

    let started = tokio::time::Instant::now();
    let task = tokio::spawn(async move { controller.run().await });

    // Selection is shown first...
    loop {
        let event = timeout(Duration::from_secs(5), rx.recv()).await.unwrap().unwrap();
        if matches!(event, StateChange::OptionSelected { .. }) {
            break;
        }
    }
    assert_eq!(state.read(|s| s.quiz.score), 0);

    // ...and only scored once the full delay has passed
    loop {
        let event = timeout(Duration::from_secs(5), rx.recv()).await.unwrap().unwrap();
        if matches!(event, StateChange::AnswerRecorded { .. }) {
            break;
        }
    }
    assert!(started.elapsed() >= Duration::from_millis(720));
    assert_eq!(state.read(|s| s.quiz.score), 1);

    task.await.unwrap().unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_cancel_drops_pending_answer() {
    let settings = QuizSettings {
        reveal_delay_ms: 10_000,
        ..fixed_order_settings()
    };
    let (state, mut controller) = controller(b"\n1\n1\n1\nn\n", settings);
    let cancel = controller.cancel_handle();
    let mut rx = state.subscribe();

    let task = tokio::spawn(async move { controller.run().await });

    loop {
        let event = timeout(Duration::from_secs(5), rx.recv()).await.unwrap().unwrap();
        if matches!(event, StateChange::OptionSelected { .. }) {
            break;
        }
    }
    cancel.cancel();

    let outcome = task.await.unwrap().unwrap();
    assert_eq!(outcome, SessionOutcome::Cancelled);

    let snapshot = state.snapshot();
    assert_eq!(snapshot.quiz.score, 0);
    assert!(snapshot.quiz.answers.is_empty());
    assert!(snapshot.pending.is_some());
}

#[tokio::test(start_paused = true)]
async fn test_cancel_before_run() {
    let (_state, mut controller) = controller(b"\n1\n1\n1\n", fixed_order_settings());
    controller.request_cancel();

    assert_eq!(controller.run().await.unwrap(), SessionOutcome::Cancelled);
}

#[test]
fn test_shuffled_play_scores_by_text() {
    // Pick whichever displayed option carries the correct text
    let quiz = capitals_quiz();
    let state = Arc::new(StateManager::new(quiz.total_questions()));
    state.start();

    for question in &quiz.questions {
        let shuffled = framequiz::shuffle_options(&question.options);
        let pick = shuffled
            .options
            .iter()
            .position(|o| o == &question.options[0])
            .unwrap();
        state.record_answer(pick, shuffled.correct_index);
    }

    assert_eq!(state.read(|s| s.quiz.score), 3);
}
