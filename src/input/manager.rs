//! Input manager for loading documents and routing them to extractors

use crate::error::{CareerMatchError, Result};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{DocxExtractor, PdfExtractor, TextExtractor};
use crate::processing::document::Document;
use log::{debug, info};
use std::path::Path;
use tokio::fs;

#[derive(Debug, Default)]
pub struct InputManager;

impl InputManager {
    pub fn new() -> Self {
        Self
    }

    /// Read a document from disk, checking existence before format
    pub async fn load_document(&self, path: &Path) -> Result<Document> {
        if !path.exists() {
            return Err(CareerMatchError::NotFound(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let file_type = FileType::from_path(path);
        if !file_type.is_supported() {
            return Err(CareerMatchError::UnsupportedFormat(format!(
                "Unsupported file type for: {} (expected .pdf or .docx)",
                path.display()
            )));
        }

        let bytes = fs::read(path).await?;
        debug!("Read {} bytes from {}", bytes.len(), path.display());

        Ok(Document::new(bytes, file_type, path.to_string_lossy().to_string()))
    }

    /// Route a loaded document to the extractor for its format
    pub fn extract_document(&self, document: &Document) -> Result<Option<String>> {
        let text = match document.file_type {
            FileType::Pdf => {
                info!("Extracting text from PDF: {}", document.source);
                PdfExtractor.extract(&document.content)?
            }
            FileType::Docx => {
                info!("Extracting text from DOCX: {}", document.source);
                DocxExtractor.extract(&document.content)?
            }
            FileType::Unknown => {
                return Err(CareerMatchError::UnsupportedFormat(format!(
                    "Unsupported file type for: {}",
                    document.source
                )));
            }
        };

        match &text {
            Some(text) => debug!("Extracted {} characters from {}", text.len(), document.source),
            None => debug!("No text extracted from {}", document.source),
        }

        Ok(text)
    }

    pub async fn extract_text(&self, path: &Path) -> Result<Option<String>> {
        let document = self.load_document(path).await?;
        self.extract_document(&document)
    }
}
