//! Integration tests for the resume matcher

use resume_matcher::error::ResumeMatcherError;
use resume_matcher::input::manager::InputManager;
use resume_matcher::matching::{compare, normalize_skills};
use std::io::Write;
use std::path::Path;

#[tokio::test]
async fn test_text_extraction_from_txt() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let result = manager.extract_text(path).await;
    assert!(result.is_ok());

    let text = result.unwrap();
    assert!(text.contains("John Doe"));
    assert!(text.contains("Software Engineer"));
    assert!(text.contains("React"));
    assert!(text.contains("Node.js"));
}

#[tokio::test]
async fn test_text_extraction_from_markdown() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.md");

    let result = manager.extract_text(path).await;
    assert!(result.is_ok());

    let text = result.unwrap();
    assert!(text.contains("John Doe"));
    assert!(text.contains("React"));
    assert!(text.contains("Node.js"));
    // Should not contain markdown formatting
    assert!(!text.contains("**"));
    assert!(!text.contains("##"));
}

#[tokio::test]
async fn test_caching_functionality() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    // First extraction
    let text1 = manager.extract_text(path).await.unwrap();
    assert_eq!(manager.cache_size(), 1);

    // Second extraction should use cache
    let text2 = manager.extract_text(path).await.unwrap();
    assert_eq!(text1, text2);
    assert_eq!(manager.cache_size(), 1);
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/unsupported.xyz");

    let result = manager.extract_text(path).await;
    assert!(matches!(
        result,
        Err(ResumeMatcherError::UnsupportedFormat(_))
    ));
}

#[tokio::test]
async fn test_nonexistent_file() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/nonexistent.txt");

    let result = manager.extract_text(path).await;
    assert!(matches!(result, Err(ResumeMatcherError::InvalidInput(_))));
}

#[tokio::test]
async fn test_whitespace_only_file_is_terminal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("blank.txt");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "   \n\t  \n").unwrap();

    let mut manager = InputManager::new();
    let result = manager.extract_text(&path).await;
    assert!(matches!(
        result,
        Err(ResumeMatcherError::UnsupportedFormat(_))
    ));
}

#[tokio::test]
async fn test_corrupt_docx_is_terminal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.docx");
    std::fs::write(&path, b"this is not a zip archive").unwrap();

    let mut manager = InputManager::new();
    let result = manager.extract_text(&path).await;
    assert!(matches!(result, Err(ResumeMatcherError::DocxExtraction(_))));
}

#[test]
fn test_end_to_end_matching_on_fixture_skills() {
    // Skills as an extractor would emit them from the fixtures
    let candidate_skills: Vec<String> = [
        "React", "Node.js", "Express", "MongoDB", "JavaScript", "HTML", "CSS",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    let requirement_skills: Vec<String> = ["react", "Node.JS", "MongoDB", "Express"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let result = compare(
        &normalize_skills(&candidate_skills),
        &normalize_skills(&requirement_skills),
    );

    assert_eq!(
        result.common_skills,
        vec!["express", "mongodb", "node.js", "react"]
    );
    assert!(result.missing_skills.is_empty());
    assert_eq!(result.match_percentage, 100.0);
}
