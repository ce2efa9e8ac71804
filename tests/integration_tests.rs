//! Integration tests for resume insight

use resume_insight::input::manager::InputManager;
use resume_insight::processing::analyzer::AnalysisEngine;
use resume_insight::processing::job_matcher::{JobPosting, UserPreferences};
use resume_insight::store::{AtsScoreCache, JsonFileStore, MemoryStore, Store};
use std::path::Path;

async fn fixture_text(name: &str) -> String {
    let mut manager = InputManager::new();
    manager
        .extract_text(&Path::new("tests/fixtures").join(name))
        .await
        .expect("fixture should be readable")
}

fn fixture_jobs() -> Vec<JobPosting> {
    let content = std::fs::read_to_string("tests/fixtures/sample_jobs.json").unwrap();
    serde_json::from_str(&content).unwrap()
}

fn fixture_preferences() -> UserPreferences {
    let content = std::fs::read_to_string("tests/fixtures/sample_preferences.toml").unwrap();
    toml::from_str(&content).unwrap()
}

#[tokio::test]
async fn test_text_extraction_from_txt() {
    let text = fixture_text("sample_resume.txt").await;

    assert!(text.contains("John Smith"));
    assert!(text.contains("Senior Software Engineer"));
    assert!(text.contains("React"));
    assert!(text.contains("Node.js"));
}

#[tokio::test]
async fn test_text_extraction_from_markdown() {
    let text = fixture_text("sample_resume.md").await;

    assert!(text.contains("John Smith"));
    assert!(text.contains("Senior Software Engineer"));
    assert!(text.contains("React"));
    // Markdown formatting must be stripped.
    assert!(!text.contains("**"));
    assert!(!text.contains("##"));
}

#[tokio::test]
async fn test_extraction_caching() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let first = manager.extract_text(path).await.unwrap();
    assert_eq!(manager.cache_size(), 1);

    let second = manager.extract_text(path).await.unwrap();
    assert_eq!(first, second);
    assert_eq!(manager.cache_size(), 1);
}

#[tokio::test]
async fn test_unsupported_and_missing_files() {
    let mut manager = InputManager::new();

    assert!(manager
        .extract_text(Path::new("tests/fixtures/resume.xyz"))
        .await
        .is_err());
    assert!(manager
        .extract_text(Path::new("tests/fixtures/resume.pdf"))
        .await
        .is_err());
    assert!(manager
        .extract_text(Path::new("tests/fixtures/nonexistent.txt"))
        .await
        .is_err());
}

#[tokio::test]
async fn test_full_analysis_pipeline() {
    let text = fixture_text("sample_resume.txt").await;
    let engine = AnalysisEngine::default();

    let analysis = engine.analyze(&text, None);

    assert!(analysis.ats.score <= 100);
    assert!(analysis.ats.score >= 50, "strong sample resume scored {}", analysis.ats.score);
    assert!(analysis.document.contact.is_complete());
    assert!(analysis.document.skills.iter().any(|s| s == "JavaScript"));
    assert!(analysis.document.skills.iter().any(|s| s == "React"));
    assert_eq!(analysis.document.experience.len(), 2);
    assert!(!analysis.document.education.is_empty());
}

#[tokio::test]
async fn test_analysis_is_deterministic() {
    let text = fixture_text("sample_resume.txt").await;
    let engine = AnalysisEngine::default();

    let first = engine.score(&text, None);
    let second = engine.score(&text, None);

    assert_eq!(first.score, second.score);
    assert_eq!(first.feedback, second.feedback);
}

#[tokio::test]
async fn test_matching_pipeline_end_to_end() {
    let text = fixture_text("sample_resume.txt").await;
    let engine = AnalysisEngine::default();
    let document = engine.extract(&text);

    let report = engine.match_jobs(&fixture_jobs(), &fixture_preferences(), &document.skills);

    assert_eq!(report.matches.len(), 3);
    for pair in report.matches.windows(2) {
        assert!(pair[0].match_score >= pair[1].match_score);
    }

    // The entry-level remote developer job fits the preferences best.
    assert_eq!(report.matches[0].job.id, "sd1");
    assert!(report.matches[0].is_recommended);

    // The accounting job matches neither industry nor work style.
    assert_eq!(report.matches[2].job.id, "fin1");
    assert!(!report.matches[2].is_recommended);

    assert!(report.strengths.len() >= 4);
    assert!(!report.improvements.is_empty());
}

#[tokio::test]
async fn test_score_caching_through_file_store() {
    let text = fixture_text("sample_resume.txt").await;
    let engine = AnalysisEngine::default();

    let dir = tempfile::tempdir().unwrap();
    let store_path = dir.path().join("store.json");

    let first = engine.score(&text, None);
    {
        let store = JsonFileStore::open(&store_path).unwrap();
        let mut cache = AtsScoreCache::new(store, 24);
        cache.put(&text, &first);
    }

    // A fresh store handle must see the persisted entry.
    let store = JsonFileStore::open(&store_path).unwrap();
    let mut cache = AtsScoreCache::new(store, 24);
    let cached = cache.get(&text).expect("cached score should be present");
    assert_eq!(cached.score, first.score);
}

#[test]
fn test_memory_store_contract() {
    let mut store = MemoryStore::new();
    assert!(store.get("missing").unwrap().is_none());

    store.set("preferences", "{}").unwrap();
    assert_eq!(store.get("preferences").unwrap().as_deref(), Some("{}"));

    store.delete("preferences").unwrap();
    assert!(store.get("preferences").unwrap().is_none());
}

#[test]
fn test_empty_resume_degrades_gracefully() {
    let engine = AnalysisEngine::default();
    let result = engine.score("", None);

    assert_eq!(result.score, 0);
    assert!(!result.feedback.is_empty());
}
