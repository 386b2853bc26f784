//! Text extraction from PDF and DOCX documents

use crate::error::{CareerMatchError, Result};
use log::{debug, warn};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::{Cursor, Read};

/// Extract plain text from raw document bytes.
///
/// Returns `Ok(None)` when the document parses but holds no usable text.
pub trait TextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<Option<String>>;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<Option<String>> {
        let pages = match lopdf::Document::load_mem(bytes) {
            Ok(doc) => Self::page_texts(&doc),
            Err(lopdf_err) => {
                warn!("lopdf could not load PDF ({}), falling back to pdf-extract", lopdf_err);
                let text = pdf_extract::extract_text_from_mem(bytes).map_err(|e| {
                    CareerMatchError::PdfExtraction(format!(
                        "Failed to load PDF. lopdf: {}; pdf-extract: {}",
                        lopdf_err, e
                    ))
                })?;
                vec![text]
            }
        };

        let text = pages
            .iter()
            .map(|page| page.trim_end())
            .filter(|page| !page.trim_start().is_empty())
            .collect::<Vec<_>>()
            .join("\n");

        let text = text.trim();
        if text.is_empty() {
            Ok(None)
        } else {
            Ok(Some(text.to_string()))
        }
    }
}

impl PdfExtractor {
    /// Per-page text in page order; pages that fail to decode count as empty
    fn page_texts(doc: &lopdf::Document) -> Vec<String> {
        let pages = doc.get_pages();
        debug!("PDF has {} pages", pages.len());

        pages
            .keys()
            .map(|&page_num| match doc.extract_text(&[page_num]) {
                Ok(text) => text,
                Err(e) => {
                    warn!("Skipping PDF page {}: {}", page_num, e);
                    String::new()
                }
            })
            .collect()
    }
}

pub struct DocxExtractor;

impl TextExtractor for DocxExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<Option<String>> {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
            .map_err(|e| CareerMatchError::DocxExtraction(format!("Invalid DOCX container: {}", e)))?;

        let mut xml = String::new();
        archive
            .by_name("word/document.xml")
            .map_err(|e| CareerMatchError::DocxExtraction(format!("Missing word/document.xml: {}", e)))?
            .read_to_string(&mut xml)?;

        let paragraphs = Self::body_paragraphs(&xml)?;
        debug!("DOCX has {} non-empty paragraphs", paragraphs.len());

        if paragraphs.is_empty() {
            Ok(None)
        } else {
            Ok(Some(paragraphs.join("\n")))
        }
    }
}

impl DocxExtractor {
    /// Collect trimmed, non-empty text of top-level body paragraphs.
    ///
    /// Paragraphs inside tables, text boxes and content controls (`w:sdt`)
    /// are not body paragraphs and contribute nothing.
    pub fn body_paragraphs(xml: &str) -> Result<Vec<String>> {
        let mut reader = Reader::from_str(xml);

        let mut paragraphs = Vec::new();
        let mut current = String::new();
        let mut nested = 0usize;
        let mut in_paragraph = false;
        let mut in_run = false;
        let mut in_text = false;

        loop {
            match reader.read_event() {
                Ok(Event::Start(e)) => match e.local_name().as_ref() {
                    b"tbl" | b"txbxContent" | b"sdt" => nested += 1,
                    b"p" if nested == 0 => {
                        in_paragraph = true;
                        current.clear();
                    }
                    b"r" if nested == 0 => in_run = true,
                    b"t" if nested == 0 => in_text = true,
                    _ => {}
                },
                Ok(Event::Empty(e)) if in_paragraph && in_run && nested == 0 => {
                    match e.local_name().as_ref() {
                        b"tab" => current.push('\t'),
                        b"br" | b"cr" => current.push('\n'),
                        _ => {}
                    }
                }
                Ok(Event::Text(t)) if in_paragraph && in_text && nested == 0 => {
                    let text = t
                        .unescape()
                        .map_err(|e| CareerMatchError::DocxExtraction(format!("Bad text node: {}", e)))?;
                    current.push_str(&text);
                }
                Ok(Event::End(e)) => match e.local_name().as_ref() {
                    b"tbl" | b"txbxContent" | b"sdt" => nested = nested.saturating_sub(1),
                    b"p" if nested == 0 && in_paragraph => {
                        in_paragraph = false;
                        let trimmed = current.trim();
                        if !trimmed.is_empty() {
                            paragraphs.push(trimmed.to_string());
                        }
                    }
                    b"r" if nested == 0 => in_run = false,
                    b"t" if nested == 0 => in_text = false,
                    _ => {}
                },
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(CareerMatchError::DocxExtraction(format!(
                        "Malformed document.xml at position {}: {}",
                        reader.buffer_position(),
                        e
                    )))
                }
                _ => {}
            }
        }

        Ok(paragraphs)
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn test_docx_paragraphs_joined_and_trimmed() {
        let bytes = docx_from_lines(&["  Jane Doe  ", "", "Skills", "Python, SQL", "   "]);
        let text = DocxExtractor.extract(&bytes).unwrap().unwrap();
        assert_eq!(text, "Jane Doe\nSkills\nPython, SQL");
    }

    #[test]
    fn test_docx_runs_and_entities() {
        let body = r#"<w:p><w:pPr><w:tabs><w:tab w:val="left" w:pos="720"/></w:tabs></w:pPr><w:r><w:t>R&amp;D</w:t></w:r><w:r><w:tab/><w:t>lead</w:t></w:r></w:p>"#;
        let text = DocxExtractor.extract(&docx_bytes(body)).unwrap().unwrap();
        assert_eq!(text, "R&D\tlead");
    }

    #[test]
    fn test_docx_skips_table_paragraphs() {
        let body = r#"<w:p><w:r><w:t>Intro</w:t></w:r></w:p><w:tbl><w:tr><w:tc><w:p><w:r><w:t>Cell</w:t></w:r></w:p></w:tc></w:tr></w:tbl><w:p><w:r><w:t>Outro</w:t></w:r></w:p>"#;
        let text = DocxExtractor.extract(&docx_bytes(body)).unwrap().unwrap();
        assert_eq!(text, "Intro\nOutro");
    }

    #[test]
    fn test_docx_skips_content_control_paragraphs() {
        let body = r#"<w:p><w:r><w:t>Rust</w:t></w:r></w:p><w:p><w:r><w:t>Go</w:t></w:r></w:p><w:sdt><w:sdtPr/><w:sdtContent><w:p><w:r><w:t>SDT</w:t></w:r></w:p></w:sdtContent></w:sdt>"#;
        let text = DocxExtractor.extract(&docx_bytes(body)).unwrap().unwrap();
        assert_eq!(text, "Rust\nGo");
    }

    #[test]
    fn test_docx_without_text_is_none() {
        let bytes = docx_from_lines(&["", "   "]);
        assert_eq!(DocxExtractor.extract(&bytes).unwrap(), None);
    }

    #[test]
    fn test_docx_rejects_non_zip() {
        let result = DocxExtractor.extract(b"definitely not a zip file");
        assert!(matches!(result, Err(CareerMatchError::DocxExtraction(_))));
    }

    #[test]
    fn test_pdf_pages_in_order() {
        let bytes = pdf_from_pages(&[&["Jane Doe"], &["Skills", "Python"]]);
        let text = PdfExtractor.extract(&bytes).unwrap().unwrap();

        let name = text.find("Jane Doe").unwrap();
        let skills = text.find("Skills").unwrap();
        let python = text.find("Python").unwrap();
        assert!(name < skills && skills < python);
        assert_eq!(text, text.trim());
    }

    #[test]
    fn test_pdf_skips_empty_pages() {
        let bytes = pdf_from_pages(&[&[], &["Skills"], &[]]);
        let text = PdfExtractor.extract(&bytes).unwrap().unwrap();
        assert!(text.contains("Skills"));
        assert!(!text.starts_with('\n'));
    }

    #[test]
    fn test_pdf_pages_joined_without_blank_lines() {
        let bytes = pdf_from_pages(&[&["Jane Doe"], &[], &["Skills", "Python"]]);
        let text = PdfExtractor.extract(&bytes).unwrap().unwrap();
        assert_eq!(text, "Jane Doe\nSkills\nPython");
    }

    #[test]
    fn test_pdf_without_text_is_none() {
        let bytes = pdf_from_pages(&[&[]]);
        assert_eq!(PdfExtractor.extract(&bytes).unwrap(), None);
    }

    #[test]
    fn test_garbage_pdf_is_error() {
        let result = PdfExtractor.extract(b"not a pdf");
        assert!(matches!(result, Err(CareerMatchError::PdfExtraction(_))));
    }
}
