use serde::{Deserialize, Serialize};
use std::time::Duration;

/// User configuration from `Quiz Settings.yaml`
///
/// Contains quiz file location, presentation timings and share targets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserConfig {
    #[serde(rename = "Quiz_Settings", default)]
    pub quiz_settings: QuizSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizSettings {
    #[serde(rename = "Quiz File", default = "default_quiz_file")]
    pub quiz_file: String,

    /// Time the selected option stays highlighted before the answer is sent on
    #[serde(rename = "Reveal Delay", default = "default_reveal_delay")]
    pub reveal_delay_ms: u64,

    /// Extra pause before the next question is shown
    #[serde(rename = "Advance Delay", default = "default_advance_delay")]
    pub advance_delay_ms: u64,

    #[serde(rename = "Shuffle Options", default = "default_true")]
    pub shuffle_options: bool,

    #[serde(rename = "App URL", default = "default_app_url")]
    pub app_url: String,

    #[serde(rename = "Compose URL", default = "default_compose_url")]
    pub compose_url: String,

    #[serde(rename = "Debug Mode", default)]
    pub debug_mode: bool,
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            quiz_file: default_quiz_file(),
            reveal_delay_ms: default_reveal_delay(),
            advance_delay_ms: default_advance_delay(),
            shuffle_options: true,
            app_url: default_app_url(),
            compose_url: default_compose_url(),
            debug_mode: false,
        }
    }
}

impl QuizSettings {
    /// Total pause between a selection and its commit.
    pub fn answer_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms.saturating_add(self.advance_delay_ms))
    }

    /// Whether the quiz file is still the stock `quiz.json`, which may be
    /// absent and then falls back to the built-in sample quiz.
    pub fn uses_default_quiz_file(&self) -> bool {
        self.quiz_file == default_quiz_file()
    }
}

fn default_quiz_file() -> String {
    "quiz.json".to_string()
}

fn default_reveal_delay() -> u64 {
    400
}

fn default_advance_delay() -> u64 {
    320
}

fn default_true() -> bool {
    true
}

fn default_app_url() -> String {
    "https://web4-quiz-template.vercel.app".to_string()
}

fn default_compose_url() -> String {
    "https://warpcast.com/~/compose".to_string()
}
