//! Input manager for handling different file types

use crate::config::InputConfig;
use crate::error::{Result, ResumeCheckerError};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{DocxExtractor, MarkdownExtractor, PdfExtractor, PlainTextExtractor, TextExtractor};
use log::info;
use std::collections::HashMap;
use std::path::Path;

pub struct InputManager {
    cache: HashMap<String, String>,
    enable_cache: bool,
    limits: InputConfig,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new(InputConfig::default())
    }
}

impl InputManager {
    pub fn new(limits: InputConfig) -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: true,
            limits,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    /// Read a resume file and return its text. Rejects missing, unsupported,
    /// oversized and effectively empty documents.
    pub async fn extract_text(&mut self, path: &Path) -> Result<String> {
        let path_str = path.to_string_lossy().to_string();

        if self.enable_cache {
            if let Some(cached_text) = self.cache.get(&path_str) {
                info!("Using cached text for: {}", path.display());
                return Ok(cached_text.clone());
            }
        }

        if !path.exists() {
            return Err(ResumeCheckerError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let file_type = self.detect_file_type(path)?;
        if !file_type.is_supported() {
            return Err(Self::unsupported(path, file_type));
        }

        let size = tokio::fs::metadata(path).await?.len();
        if size > self.limits.max_file_bytes {
            return Err(ResumeCheckerError::FileTooLarge {
                size,
                limit: self.limits.max_file_bytes,
            });
        }

        let text = match file_type {
            FileType::Pdf => {
                info!("Extracting text from PDF: {}", path.display());
                PdfExtractor.extract(path).await?
            }
            FileType::Text => {
                info!("Reading plain text file: {}", path.display());
                PlainTextExtractor.extract(path).await?
            }
            FileType::Markdown => {
                info!("Processing markdown file: {}", path.display());
                MarkdownExtractor.extract(path).await?
            }
            FileType::Docx => {
                info!("Extracting text from Word document: {}", path.display());
                DocxExtractor.extract(path).await?
            }
            FileType::LegacyWord | FileType::Unknown => return Err(Self::unsupported(path, file_type)),
        };

        let meaningful_chars = text.trim().chars().count();
        if meaningful_chars < self.limits.min_text_chars {
            return Err(ResumeCheckerError::EmptyDocument(format!(
                "{} contains only {} characters of text (at least {} required)",
                path.display(),
                meaningful_chars,
                self.limits.min_text_chars
            )));
        }

        if self.enable_cache {
            self.cache.insert(path_str, text.clone());
        }

        Ok(text)
    }

    fn detect_file_type(&self, path: &Path) -> Result<FileType> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| ResumeCheckerError::InvalidInput(format!("File has no extension: {}", path.display())))?;

        Ok(FileType::from_extension(extension))
    }

    fn unsupported(path: &Path, file_type: FileType) -> ResumeCheckerError {
        match file_type {
            FileType::LegacyWord => ResumeCheckerError::UnsupportedFormat(format!(
                "Legacy Word documents (.doc) are not supported: {}. Save it as .docx, PDF or plain text first",
                path.display()
            )),
            _ => ResumeCheckerError::UnsupportedFormat(format!(
                "Unsupported file type for: {}. Supported: pdf, docx, txt, md",
                path.display()
            )),
        }
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}
