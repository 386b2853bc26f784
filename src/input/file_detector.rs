//! File type detection

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileType {
    Pdf,
    Docx,
    Unknown,
}

impl FileType {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "pdf" => FileType::Pdf,
            "docx" => FileType::Docx,
            _ => FileType::Unknown,
        }
    }

    /// Detect from the final extension of a path, so `cv.final.PDF` is a PDF
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or(FileType::Unknown)
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, FileType::Unknown)
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileType::Pdf => write!(f, "pdf"),
            FileType::Docx => write!(f, "docx"),
            FileType::Unknown => write!(f, "unknown"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_is_case_insensitive() {
        assert_eq!(FileType::from_extension("PDF"), FileType::Pdf);
        assert_eq!(FileType::from_extension("Docx"), FileType::Docx);
        assert_eq!(FileType::from_extension("doc"), FileType::Unknown);
    }

    #[test]
    fn test_from_path_uses_last_extension() {
        assert_eq!(FileType::from_path(Path::new("resume.v2.pdf")), FileType::Pdf);
        assert_eq!(FileType::from_path(Path::new("resume.pdf.txt")), FileType::Unknown);
        assert_eq!(FileType::from_path(Path::new("resume")), FileType::Unknown);
        assert!(!FileType::Unknown.is_supported());
    }
}
