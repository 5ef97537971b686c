//! Quiz document loading and validation.
//!
//! The quiz is a static JSON document. It is read once at startup and checked
//! for the shape the state machine relies on: at least one question, and at
//! least one option per question (the first being the correct answer).

use crate::models::QuizData;
use camino::{Utf8Path, Utf8PathBuf};
use std::collections::HashSet;
use std::fs;
use thiserror::Error;

/// Errors that can occur while loading a quiz document
#[derive(Error, Debug)]
pub enum QuizLoadError {
    #[error("Failed to read quiz file {path}: {source}")]
    Io {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse quiz file {path}: {source}")]
    Parse {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Quiz has no questions")]
    NoQuestions,

    #[error("Question {index} (\"{question}\") has no options")]
    EmptyOptions { index: usize, question: String },
}

/// Source of quiz documents.
#[cfg_attr(test, mockall::automock)]
pub trait QuizLoader {
    fn load(&self) -> Result<QuizData, QuizLoadError>;
}

/// Loads a quiz from a JSON file on disk.
#[derive(Debug, Clone)]
pub struct FileQuizLoader {
    path: Utf8PathBuf,
}

impl FileQuizLoader {
    pub fn new<P: AsRef<Utf8Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Utf8Path {
        &self.path
    }
}

impl QuizLoader for FileQuizLoader {
    fn load(&self) -> Result<QuizData, QuizLoadError> {
        let contents = fs::read_to_string(&self.path).map_err(|source| QuizLoadError::Io {
            path: self.path.clone(),
            source,
        })?;

        let quiz = parse_quiz(&contents).map_err(|source| QuizLoadError::Parse {
            path: self.path.clone(),
            source,
        })?;

        validate_quiz(&quiz)?;

        tracing::info!(
            "Loaded quiz \"{}\" with {} questions from {}",
            quiz.name,
            quiz.total_questions(),
            self.path
        );
        Ok(quiz)
    }
}

pub fn parse_quiz(contents: &str) -> Result<QuizData, serde_json::Error> {
    serde_json::from_str(contents)
}

/// Check the quiz shape once, at load time.
///
/// Duplicate option text is allowed (the shuffler tracks the correct option by
/// position) but logged, since it is usually a data mistake.
pub fn validate_quiz(quiz: &QuizData) -> Result<(), QuizLoadError> {
    if quiz.questions.is_empty() {
        return Err(QuizLoadError::NoQuestions);
    }

    for (index, question) in quiz.questions.iter().enumerate() {
        if question.options.is_empty() {
            return Err(QuizLoadError::EmptyOptions {
                index,
                question: question.text.clone(),
            });
        }

        let mut seen = HashSet::new();
        if question.options.iter().any(|option| !seen.insert(option)) {
            tracing::warn!(
                "Question {} (\"{}\") has duplicate option text",
                index,
                question.text
            );
        }
    }

    Ok(())
}
