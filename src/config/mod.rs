use crate::models::{Question, QuizData, QuizSettings, UserConfig};
use crate::services::loader::{FileQuizLoader, QuizLoader};
use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;

/// Configuration manager for the settings file and the quiz document.
///
/// Manages files inside one data directory:
/// - User config (`Quiz Settings.yaml`): delays, share URLs, quiz file name
/// - Quiz document (`quiz.json` by default): questions in JSON
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_dir: Utf8PathBuf,
    user_config_path: Utf8PathBuf,
}

impl ConfigManager {
    /// Create a new ConfigManager with the specified configuration directory.
    ///
    /// # Arguments
    /// * `config_dir` - Directory containing configuration files (e.g., "FrameQuiz Data")
    pub fn new<P: AsRef<Utf8Path>>(config_dir: P) -> Result<Self> {
        let config_dir = config_dir.as_ref().to_path_buf();

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)
                .with_context(|| format!("Failed to create config directory: {}", config_dir))?;
        }

        Ok(Self {
            user_config_path: config_dir.join("Quiz Settings.yaml"),
            config_dir,
        })
    }

    /// Load the user configuration file.
    ///
    /// # Returns
    /// The loaded UserConfig, or default if file doesn't exist
    pub fn load_user_config(&self) -> Result<UserConfig> {
        if !self.user_config_path.exists() {
            tracing::warn!(
                "User config file not found at {}, using defaults",
                self.user_config_path
            );
            return Ok(UserConfig::default());
        }

        let file_contents = fs::read_to_string(&self.user_config_path)
            .with_context(|| format!("Failed to read user config: {}", self.user_config_path))?;

        let config: UserConfig = serde_yaml_ng::from_str(&file_contents)
            .with_context(|| format!("Failed to parse user config: {}", self.user_config_path))?;

        tracing::info!("Loaded user config from {}", self.user_config_path);
        Ok(config)
    }

    /// Save the user configuration file.
    pub fn save_user_config(&self, config: &UserConfig) -> Result<()> {
        let yaml_string =
            serde_yaml_ng::to_string(config).context("Failed to serialize user config to YAML")?;

        fs::write(&self.user_config_path, yaml_string)
            .with_context(|| format!("Failed to write user config: {}", self.user_config_path))?;

        tracing::info!("Saved user config to {}", self.user_config_path);
        Ok(())
    }

    /// Resolve the quiz file named in settings. Relative paths are taken
    /// from the config directory.
    pub fn quiz_path(&self, settings: &QuizSettings) -> Utf8PathBuf {
        let path = Utf8Path::new(&settings.quiz_file);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.config_dir.join(path)
        }
    }

    /// Load the quiz document named in settings.
    ///
    /// # Returns
    /// The loaded quiz. A missing file is only replaced by the built-in sample
    /// quiz when settings still name the default `quiz.json`; any other
    /// missing path is an error.
    pub fn load_quiz(&self, settings: &QuizSettings) -> Result<QuizData> {
        let loader = FileQuizLoader::new(self.quiz_path(settings));

        if !loader.path().exists() {
            if !settings.uses_default_quiz_file() {
                anyhow::bail!("Quiz file not found: {}", loader.path());
            }
            tracing::warn!("Quiz file not found at {}, using sample quiz", loader.path());
            return Ok(self.create_default_quiz());
        }

        self.load_quiz_with(&loader)
    }

    /// Load a quiz through any [`QuizLoader`].
    pub fn load_quiz_with<L: QuizLoader + ?Sized>(&self, loader: &L) -> Result<QuizData> {
        loader.load().context("Failed to load quiz")
    }

    /// Write a quiz document as pretty-printed JSON.
    pub fn save_quiz(&self, settings: &QuizSettings, quiz: &QuizData) -> Result<()> {
        let quiz_path = self.quiz_path(settings);
        let json = serde_json::to_string_pretty(quiz).context("Failed to serialize quiz to JSON")?;

        fs::write(&quiz_path, json)
            .with_context(|| format!("Failed to write quiz: {}", quiz_path))?;

        tracing::info!("Saved quiz to {}", quiz_path);
        Ok(())
    }

    /// Sample quiz used when no quiz file is present.
    fn create_default_quiz(&self) -> QuizData {
        let question = |text: &str, options: &[&str]| {
            Question::new(text, options.iter().map(|o| o.to_string()).collect())
        };

        QuizData {
            name: "Web3 Basics".to_string(),
            description: "Test your knowledge of the decentralized web".to_string(),
            questions: vec![
                question(
                    "What is Farcaster?",
                    &[
                        "A sufficiently decentralized social network",
                        "A layer 1 blockchain",
                        "A crypto wallet",
                        "A token standard",
                    ],
                ),
                question(
                    "What does a Frame add to a cast?",
                    &[
                        "An interactive mini app",
                        "A paid subscription",
                        "A private message",
                        "A new account",
                    ],
                ),
                question(
                    "Which of these is a wallet connector library?",
                    &["wagmi", "serde", "tokio", "tailwind"],
                ),
                question(
                    "What identifies a Farcaster user?",
                    &["A fid", "An email address", "A phone number", "A username only"],
                ),
            ],
        }
    }

    /// Get the configuration directory path.
    pub fn config_dir(&self) -> &Utf8Path {
        &self.config_dir
    }
}
