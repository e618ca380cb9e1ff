//! File type detection

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Pdf,
    Text,
    Markdown,
    Docx,
    /// Binary `.doc` files are recognised so users get a clear message, but not read
    LegacyWord,
    Unknown,
}

impl FileType {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "pdf" => FileType::Pdf,
            "txt" => FileType::Text,
            "md" | "markdown" => FileType::Markdown,
            "docx" => FileType::Docx,
            "doc" => FileType::LegacyWord,
            _ => FileType::Unknown,
        }
    }

    pub fn is_supported(self) -> bool {
        matches!(self, FileType::Pdf | FileType::Text | FileType::Markdown | FileType::Docx)
    }
}
