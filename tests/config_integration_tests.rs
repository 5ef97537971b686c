//! Integration tests for ConfigManager and quiz document handling
//!
//! These tests verify:
//! - Settings loading, saving and defaults
//! - Quiz loading from disk with validation
//! - Fallback to the sample quiz
//! - Integration with StateManager

use camino::Utf8PathBuf;
use framequiz::models::QuizSettings;
use framequiz::{ConfigManager, StateManager, UserConfig};
use std::fs;
use tempfile::TempDir;

fn create_test_config_dir() -> (TempDir, Utf8PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let config_path = Utf8PathBuf::try_from(temp_dir.path().to_path_buf()).unwrap();
    (temp_dir, config_path)
}

#[test]
fn test_create_config_manager() {
    let (_temp_dir, config_path) = create_test_config_dir();
    let manager = ConfigManager::new(&config_path).unwrap();

    assert_eq!(manager.config_dir(), &config_path);
}

#[test]
fn test_create_config_manager_makes_directory() {
    let (_temp_dir, config_path) = create_test_config_dir();
    let nested = config_path.join("FrameQuiz Data");

    ConfigManager::new(&nested).unwrap();

    assert!(nested.exists());
}

#[test]
fn test_load_default_user_config() {
    let (_temp_dir, config_path) = create_test_config_dir();
    let manager = ConfigManager::new(&config_path).unwrap();

    let user_config = manager.load_user_config().unwrap();

    assert_eq!(user_config.quiz_settings.reveal_delay_ms, 400);
    assert_eq!(user_config.quiz_settings.advance_delay_ms, 320);
    assert!(user_config.quiz_settings.shuffle_options);
}

#[test]
fn test_save_and_load_user_config() {
    let (_temp_dir, config_path) = create_test_config_dir();
    let manager = ConfigManager::new(&config_path).unwrap();

    let mut config = UserConfig::default();
    config.quiz_settings.shuffle_options = false;
    config.quiz_settings.app_url = "https://quiz.example".to_string();
    manager.save_user_config(&config).unwrap();

    let loaded = manager.load_user_config().unwrap();
    assert!(!loaded.quiz_settings.shuffle_options);
    assert_eq!(loaded.quiz_settings.app_url, "https://quiz.example");
}

#[test]
fn test_user_config_file_uses_spaced_keys() {
    let (_temp_dir, config_path) = create_test_config_dir();
    let manager = ConfigManager::new(&config_path).unwrap();

    manager.save_user_config(&UserConfig::default()).unwrap();

    let contents = fs::read_to_string(config_path.join("Quiz Settings.yaml")).unwrap();
    assert!(contents.contains("Quiz_Settings:"));
    assert!(contents.contains("Reveal Delay: 400"));
    assert!(contents.contains("Shuffle Options: true"));
}

#[test]
fn test_invalid_user_config_is_error() {
    let (_temp_dir, config_path) = create_test_config_dir();
    fs::write(config_path.join("Quiz Settings.yaml"), "Quiz_Settings: [unclosed").unwrap();
    let manager = ConfigManager::new(&config_path).unwrap();

    assert!(manager.load_user_config().is_err());
}

#[test]
fn test_missing_quiz_falls_back_to_sample() {
    let (_temp_dir, config_path) = create_test_config_dir();
    let manager = ConfigManager::new(&config_path).unwrap();

    let quiz = manager.load_quiz(&QuizSettings::default()).unwrap();

    assert!(!quiz.questions.is_empty());
    assert!(quiz.questions.iter().all(|q| !q.options.is_empty()));
}

#[test]
fn test_missing_named_quiz_is_not_replaced_by_sample() {
    let (_temp_dir, config_path) = create_test_config_dir();
    let manager = ConfigManager::new(&config_path).unwrap();
    let settings = QuizSettings {
        quiz_file: "typo.json".to_string(),
        ..QuizSettings::default()
    };

    let err = manager.load_quiz(&settings).unwrap_err();

    assert!(format!("{:#}", err).contains("typo.json"));
}

#[test]
fn test_save_and_load_quiz() {
    let (_temp_dir, config_path) = create_test_config_dir();
    let manager = ConfigManager::new(&config_path).unwrap();
    let settings = QuizSettings::default();

    let mut quiz = manager.load_quiz(&settings).unwrap();
    quiz.name = "Edited".to_string();
    manager.save_quiz(&settings, &quiz).unwrap();

    let loaded = manager.load_quiz(&settings).unwrap();
    assert_eq!(loaded, quiz);
}

#[test]
fn test_quiz_with_empty_options_rejected() {
    let (_temp_dir, config_path) = create_test_config_dir();
    fs::write(
        config_path.join("quiz.json"),
        r#"{"name":"Bad","questions":[{"text":"Nothing?","options":[]}]}"#,
    )
    .unwrap();
    let manager = ConfigManager::new(&config_path).unwrap();

    let err = manager.load_quiz(&QuizSettings::default()).unwrap_err();
    assert!(format!("{:#}", err).contains("has no options"));
}

#[test]
fn test_loaded_quiz_drives_state_manager() {
    let (_temp_dir, config_path) = create_test_config_dir();
    fs::write(
        config_path.join("custom.json"),
        r#"{"name":"Two","questions":[
            {"text":"a?","options":["1","2"]},
            {"text":"b?","options":["3","4"]}
        ]}"#,
    )
    .unwrap();
    let manager = ConfigManager::new(&config_path).unwrap();
    let settings = QuizSettings {
        quiz_file: "custom.json".to_string(),
        ..QuizSettings::default()
    };

    let quiz = manager.load_quiz(&settings).unwrap();
    let state = StateManager::new(quiz.total_questions());
    state.start();
    state.record_answer(0, 0);
    state.record_answer(0, 0);

    let snapshot = state.snapshot();
    assert!(snapshot.quiz.is_completed);
    assert_eq!(snapshot.quiz.percentage(), 100);
}
