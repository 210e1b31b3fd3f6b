//! PDF text extraction using lopdf.

use lopdf::Document;
use tracing::{debug, warn};

use crate::types::{AppError, AppResult};

/// Extract the text of every page, in page order.
///
/// Pages whose content cannot be decoded are skipped. A document with no
/// text (scanned images, for instance) yields an empty string.
pub fn extract_pdf_text(data: &[u8]) -> AppResult<String> {
    let doc = Document::load_mem(data)
        .map_err(|e| AppError::Extraction(format!("Failed to load PDF: {}", e)))?;

    let pages = doc.get_pages();
    debug!(page_count = pages.len(), "Extracting text from PDF");

    let mut text = String::new();
    for page_num in pages.keys() {
        match doc.extract_text(&[*page_num]) {
            Ok(page_text) => {
                text.push_str(&page_text);
                if !page_text.ends_with('\n') {
                    text.push('\n');
                }
            }
            Err(e) => {
                warn!(page = page_num, error = %e, "Failed to extract text from page, skipping");
            }
        }
    }

    if text.trim().is_empty() {
        return Ok(String::new());
    }

    Ok(text)
}
