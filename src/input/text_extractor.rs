//! Text extraction from various file formats

use crate::error::{Result, ResumeCheckerError};
use pulldown_cmark::{Event, Parser, Tag};
use quick_xml::events::Event as XmlEvent;
use quick_xml::Reader;
use std::io::{Cursor, Read};
use std::path::Path;
use tokio::fs;

/// Main body part inside a .docx package
const DOCX_BODY_PART: &str = "word/document.xml";

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;

        pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
            ResumeCheckerError::PdfExtraction(format!("Failed to extract text from PDF '{}': {}", path.display(), e))
        })
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let markdown_content = fs::read_to_string(path).await?;
        Ok(Self::to_plain_text(&markdown_content))
    }
}

impl MarkdownExtractor {
    /// Flatten markdown to plain lines: headings and paragraphs on their own
    /// lines, list items prefixed with "- " so bullets survive.
    pub fn to_plain_text(markdown: &str) -> String {
        let mut text = String::new();

        for event in Parser::new(markdown) {
            match event {
                Event::Start(Tag::Item) => {
                    end_line(&mut text);
                    text.push_str("- ");
                }
                Event::End(Tag::Heading(..)) | Event::End(Tag::Paragraph) | Event::End(Tag::Item) => {
                    end_line(&mut text);
                }
                Event::Text(t) | Event::Code(t) => text.push_str(&t),
                Event::SoftBreak | Event::HardBreak => text.push('\n'),
                _ => {}
            }
        }

        non_blank_lines(&text)
    }
}

pub struct DocxExtractor;

impl TextExtractor for DocxExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;
        Self::to_plain_text(&bytes).map_err(|e| match e {
            ResumeCheckerError::DocxExtraction(msg) => {
                ResumeCheckerError::DocxExtraction(format!("Failed to read Word document '{}': {}", path.display(), msg))
            }
            other => other,
        })
    }
}

impl DocxExtractor {
    /// Read the body part of a .docx package: one line per paragraph, tabs
    /// and breaks kept, numbered or bulleted paragraphs prefixed with "- ".
    pub fn to_plain_text(bytes: &[u8]) -> Result<String> {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).map_err(docx_error)?;
        let mut xml = String::new();
        archive
            .by_name(DOCX_BODY_PART)
            .map_err(docx_error)?
            .read_to_string(&mut xml)?;

        let mut reader = Reader::from_str(&xml);
        let mut text = String::new();
        let mut in_run_text = false;

        loop {
            match reader.read_event().map_err(docx_error)? {
                XmlEvent::Start(e) => match e.name().as_ref() {
                    b"w:t" => in_run_text = true,
                    b"w:numPr" => start_list_item(&mut text),
                    _ => {}
                },
                XmlEvent::Empty(e) => match e.name().as_ref() {
                    b"w:tab" => text.push('\t'),
                    b"w:br" | b"w:cr" => text.push('\n'),
                    b"w:numPr" => start_list_item(&mut text),
                    _ => {}
                },
                XmlEvent::End(e) => match e.name().as_ref() {
                    b"w:t" => in_run_text = false,
                    b"w:p" => end_line(&mut text),
                    _ => {}
                },
                XmlEvent::Text(t) if in_run_text => text.push_str(&t.unescape().map_err(docx_error)?),
                XmlEvent::Eof => break,
                _ => {}
            }
        }

        Ok(non_blank_lines(&text))
    }
}

fn docx_error(err: impl std::fmt::Display) -> ResumeCheckerError {
    ResumeCheckerError::DocxExtraction(err.to_string())
}

fn start_list_item(text: &mut String) {
    if text.is_empty() || text.ends_with('\n') {
        text.push_str("- ");
    }
}

fn non_blank_lines(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn end_line(text: &mut String) {
    if !text.is_empty() && !text.ends_with('\n') {
        text.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_keeps_headings_and_bullets() {
        let markdown = "# Jane Doe\n\n## Experience\n\n* **Led** a team of `5`\n* Built APIs\n\nPlain paragraph\nwrapped line";
        let text = MarkdownExtractor::to_plain_text(markdown);

        assert_eq!(
            text,
            "Jane Doe\nExperience\n- Led a team of 5\n- Built APIs\nPlain paragraph\nwrapped line"
        );
    }

    fn docx_package(body: &str) -> Vec<u8> {
        use std::io::Write;
        use zip::write::SimpleFileOptions;

        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer.start_file(DOCX_BODY_PART, SimpleFileOptions::default()).unwrap();
        writer
            .write_all(
                format!(
                    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{body}</w:body></w:document>"#
                )
                .as_bytes(),
            )
            .unwrap();
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn test_docx_paragraphs_and_list_items() {
        let body = concat!(
            r#"<w:p><w:r><w:t>EXPERIENCE</w:t></w:r></w:p>"#,
            r#"<w:p><w:pPr><w:numPr><w:ilvl w:val="0"/><w:numId w:val="1"/></w:numPr></w:pPr>"#,
            r#"<w:r><w:t xml:space="preserve">Reduced costs by </w:t></w:r><w:r><w:t>30% &amp; more</w:t></w:r></w:p>"#,
            r#"<w:p/>"#,
            r#"<w:p><w:r><w:t>Rust</w:t><w:tab/><w:t>Go</w:t><w:br/><w:t>SQL</w:t></w:r></w:p>"#,
        );

        let text = DocxExtractor::to_plain_text(&docx_package(body)).unwrap();
        assert_eq!(text, "EXPERIENCE\n- Reduced costs by 30% & more\nRust\tGo\nSQL");
    }

    #[test]
    fn test_docx_rejects_non_zip_bytes() {
        let err = DocxExtractor::to_plain_text(b"not a zip archive").unwrap_err();
        assert!(matches!(err, ResumeCheckerError::DocxExtraction(_)));
    }
}
