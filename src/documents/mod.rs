//! Document text extraction
//!
//! Turns an uploaded file's bytes into plain text, dispatching on the declared
//! media type:
//! - `text/plain` - UTF-8 decode
//! - `application/pdf` - lopdf page text
//! - DOCX (declared type, or a `.docx` file name) - raw paragraph text
//!
//! Anything else is rejected with [`AppError::UnsupportedType`].

pub mod docx;
pub mod pdf;

use crate::types::{AppError, AppResult};

pub const TEXT_PLAIN: &str = "text/plain";
pub const APPLICATION_PDF: &str = "application/pdf";
pub const DOCX: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// An uploaded file, consumed by [`extract_text`]
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub data: bytes::Bytes,
    pub media_type: String,
    pub filename: String,
}

impl UploadedDocument {
    /// Build from multipart metadata. A missing content type is guessed from the file name.
    pub fn new(data: bytes::Bytes, media_type: Option<&str>, filename: Option<&str>) -> Self {
        let filename = filename.unwrap_or_default().to_string();
        let media_type = match media_type {
            Some(declared) => declared.to_string(),
            None => mime_guess::from_path(&filename)
                .first_or_octet_stream()
                .essence_str()
                .to_string(),
        };

        Self {
            data,
            media_type,
            filename,
        }
    }

    pub fn extract_text(&self) -> AppResult<String> {
        extract_text(&self.data, &self.media_type, &self.filename)
    }
}

/// Extract plain text from a document buffer.
///
/// PDF and DOCX documents that contain no text yield an empty string, not an error.
pub fn extract_text(buffer: &[u8], media_type: &str, filename: &str) -> AppResult<String> {
    let essence = essence(media_type);

    if essence == TEXT_PLAIN {
        Ok(String::from_utf8_lossy(buffer).into_owned())
    } else if essence == APPLICATION_PDF {
        pdf::extract_pdf_text(buffer)
    } else if essence == DOCX || filename.to_lowercase().ends_with(".docx") {
        docx::extract_docx_text(buffer)
    } else {
        Err(AppError::UnsupportedType(media_type.to_string()))
    }
}

/// Media type without parameters, lowercased (`Text/Plain; charset=utf-8` -> `text/plain`)
fn essence(media_type: &str) -> String {
    match media_type.parse::<mime::Mime>() {
        Ok(parsed) => parsed.essence_str().to_lowercase(),
        Err(_) => media_type.trim().to_lowercase(),
    }
}
