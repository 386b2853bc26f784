//! Raw document handed to the extraction pipeline

use crate::input::file_detector::FileType;

/// Document bytes with their declared format; consumed once by extraction
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub content: Vec<u8>,
    pub file_type: FileType,
    pub source: String,
}

impl Document {
    pub fn new(content: Vec<u8>, file_type: FileType, source: String) -> Self {
        Self {
            content,
            file_type,
            source,
        }
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_creation() {
        let doc = Document::new(b"%PDF-1.5".to_vec(), FileType::Pdf, "cv.pdf".to_string());
        assert_eq!(doc.len(), 8);
        assert!(!doc.is_empty());
        assert_eq!(doc.file_type, FileType::Pdf);
    }
}
