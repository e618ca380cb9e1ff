//! Integration tests for resume ingestion

use resume_checker::config::InputConfig;
use resume_checker::input::InputManager;
use resume_checker::{ResumeAnalyzer, ResumeCheckerError};
use std::path::Path;
use tempfile::TempDir;

#[tokio::test]
async fn test_text_extraction_from_txt() {
    let mut manager = InputManager::default();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let text = manager.extract_text(path).await.unwrap();
    assert!(text.contains("John Doe"));
    assert!(text.contains("Software Engineer"));
    assert!(text.contains("React"));
    assert!(text.contains("Node.js"));
}

#[tokio::test]
async fn test_text_extraction_from_markdown() {
    let mut manager = InputManager::default();
    let path = Path::new("tests/fixtures/sample_resume.md");

    let text = manager.extract_text(path).await.unwrap();
    assert!(text.contains("John Doe"));
    assert!(text.contains("Software Engineer"));
    assert!(text.contains("React"));
    assert!(text.contains("Node.js"));
    // Should not contain markdown formatting
    assert!(!text.contains("**"));
    assert!(!text.contains("##"));
    // List items keep a bullet marker
    assert!(text.contains("- Built a React dashboard"));
}

#[tokio::test]
async fn test_markdown_headings_are_detected() {
    let mut manager = InputManager::default();
    let text = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.md"))
        .await
        .unwrap();

    let result = ResumeAnalyzer::with_defaults().unwrap().analyze(&text, None);
    assert_eq!(result.summary.critical, 0, "{:#?}", result.issues);
}

#[tokio::test]
async fn test_caching_functionality() {
    let mut manager = InputManager::default();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let text1 = manager.extract_text(path).await.unwrap();
    assert_eq!(manager.cache_size(), 1);

    let text2 = manager.extract_text(path).await.unwrap();
    assert_eq!(text1, text2);
    assert_eq!(manager.cache_size(), 1);

    manager.clear_cache();
    assert_eq!(manager.cache_size(), 0);
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let mut manager = InputManager::default();
    let path = Path::new("tests/fixtures/unsupported.xyz");

    let err = manager.extract_text(path).await.unwrap_err();
    assert!(matches!(err, ResumeCheckerError::UnsupportedFormat(_)));
}

fn write_docx(path: &Path, paragraphs: &[&str]) {
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    let body: String = paragraphs
        .iter()
        .map(|p| format!("<w:p><w:r><w:t xml:space=\"preserve\">{p}</w:t></w:r></w:p>"))
        .collect();
    let xml = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{body}</w:body></w:document>"#
    );

    let mut writer = zip::ZipWriter::new(std::fs::File::create(path).unwrap());
    writer.start_file("word/document.xml", SimpleFileOptions::default()).unwrap();
    writer.write_all(xml.as_bytes()).unwrap();
    writer.finish().unwrap();
}

#[tokio::test]
async fn test_text_extraction_from_docx() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("resume.docx");
    write_docx(
        &path,
        &[
            "Jane Smith",
            "jane.smith@example.com",
            "EXPERIENCE",
            "Software Engineer at Acme, 2019 - 2023",
            "EDUCATION",
            "BSc Computer Science",
            "SKILLS",
            "Rust, Python, Docker",
        ],
    );

    let text = InputManager::default().extract_text(&path).await.unwrap();
    assert!(text.starts_with("Jane Smith\njane.smith@example.com\nEXPERIENCE"));
    assert!(text.contains("Rust, Python, Docker"));
    assert!(!text.contains("w:t"));

    let result = ResumeAnalyzer::with_defaults().unwrap().analyze(&text, None);
    assert!(result.issues.iter().all(|i| !i.message.ends_with("section not found")));
}

#[tokio::test]
async fn test_corrupt_docx_is_a_user_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("resume.docx");
    std::fs::write(&path, b"PK\x03\x04 not really a word document").unwrap();

    let err = InputManager::default().extract_text(&path).await.unwrap_err();
    assert!(matches!(err, ResumeCheckerError::DocxExtraction(_)));
    assert!(err.is_user_error());
}

#[tokio::test]
async fn test_legacy_word_documents_are_rejected_with_guidance() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("resume.doc");
    std::fs::write(&path, b"\xD0\xCF\x11\xE0 legacy word binary").unwrap();

    let err = InputManager::default().extract_text(&path).await.unwrap_err();
    match err {
        ResumeCheckerError::UnsupportedFormat(message) => assert!(message.contains(".docx")),
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_nonexistent_file() {
    let mut manager = InputManager::default();
    let path = Path::new("tests/fixtures/nonexistent.txt");

    let err = manager.extract_text(path).await.unwrap_err();
    assert!(matches!(err, ResumeCheckerError::InvalidInput(_)));
}

#[tokio::test]
async fn test_file_over_size_limit() {
    let limits = InputConfig {
        max_file_bytes: 100,
        ..InputConfig::default()
    };
    let mut manager = InputManager::new(limits);

    let err = manager
        .extract_text(Path::new("tests/fixtures/strong_resume.txt"))
        .await
        .unwrap_err();
    assert!(matches!(err, ResumeCheckerError::FileTooLarge { limit: 100, .. }));
    assert_eq!(manager.cache_size(), 0);
}

#[tokio::test]
async fn test_blank_document_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("blank.txt");
    std::fs::write(&path, "   \n\n  Jane  \n").unwrap();

    let err = InputManager::default().extract_text(&path).await.unwrap_err();
    assert!(matches!(err, ResumeCheckerError::EmptyDocument(_)));
    assert!(err.is_user_error());
}

#[tokio::test]
async fn test_end_to_end_strong_resume() {
    let mut manager = InputManager::default();
    let text = manager
        .extract_text(Path::new("tests/fixtures/strong_resume.txt"))
        .await
        .unwrap();

    let result = ResumeAnalyzer::with_defaults().unwrap().analyze(&text, None);
    assert_eq!(result.score, 100, "{:#?}", result.issues);
    assert!(!result.has_critical_issues());
}
