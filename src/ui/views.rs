// Text views for the terminal front end
//
// Pure render functions; the controller decides when to write them.

use crate::models::{PendingSelection, QuizData};
use crate::services::QuizResults;
use std::fmt::Write;

pub fn welcome(quiz: &QuizData) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== {} ===", quiz.name);
    if !quiz.description.is_empty() {
        let _ = writeln!(out, "{}", quiz.description);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "{} questions", quiz.total_questions());
    let _ = writeln!(out, "Press Enter to start, or q to quit.");
    out
}

pub fn question<S: AsRef<str>>(number: usize, total: usize, text: &str, options: &[S]) -> String {
    let mut out = String::new();
    let _ = writeln!(out);
    let _ = writeln!(out, "Question {} of {}", number, total);
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", text);
    let _ = writeln!(out);
    for (index, option) in options.iter().enumerate() {
        let _ = writeln!(out, "  {}) {}", index + 1, option.as_ref());
    }
    let _ = write!(out, "Your answer [1-{}]: ", options.len());
    out
}

/// Feedback shown while the selection is held before commit.
pub fn reveal(pending: &PendingSelection) -> String {
    if pending.is_correct {
        "Correct!\n".to_string()
    } else {
        "Incorrect.\n".to_string()
    }
}

pub fn invalid_choice(option_count: usize) -> String {
    format!("Please enter a number from 1 to {}: ", option_count)
}

pub fn results(results: &QuizResults, share_url: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out);
    let _ = writeln!(out, "=== Quiz Results ===");
    let _ = writeln!(out);
    let _ = writeln!(out, "{}%  {}", results.percentage, results.tier.message());
    let _ = writeln!(
        out,
        "You got {} out of {} questions correct",
        results.score, results.total
    );
    let _ = writeln!(out);

    for line in &results.review {
        if line.is_correct {
            let _ = writeln!(out, "  [correct]   {}", line.question);
        } else {
            let _ = writeln!(
                out,
                "  [incorrect] {} (Answer: {})",
                line.question, line.correct_answer
            );
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Share your score: {}", share_url);
    let _ = write!(out, "Play again? [y/N]: ");
    out
}
