//! Raw text from Word (OOXML) documents.
//!
//! A `.docx` file is a ZIP container; the body lives in `word/document.xml`.
//! Text runs (`w:t`) are concatenated, tabs and breaks become `\t` / `\n`,
//! and every paragraph is terminated by a blank line.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;
use tracing::debug;
use zip::ZipArchive;

use crate::types::{AppError, AppResult};

const DOCUMENT_PART: &str = "word/document.xml";

pub fn extract_docx_text(data: &[u8]) -> AppResult<String> {
    let mut archive = ZipArchive::new(Cursor::new(data))
        .map_err(|e| AppError::Extraction(format!("Failed to open DOCX archive: {}", e)))?;

    let mut xml = String::new();
    archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| AppError::Extraction(format!("Missing {}: {}", DOCUMENT_PART, e)))?
        .read_to_string(&mut xml)
        .map_err(|e| AppError::Extraction(format!("Failed to read {}: {}", DOCUMENT_PART, e)))?;

    let text = document_xml_to_text(&xml)?;
    debug!(xml_len = xml.len(), text_len = text.len(), "Extracted DOCX text");
    Ok(text)
}

fn document_xml_to_text(xml: &str) -> AppResult<String> {
    let mut reader = Reader::from_str(xml);
    let mut text = String::new();
    let mut in_run_text = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                if e.name().as_ref() == b"w:t" {
                    in_run_text = true;
                }
            }
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:t" => in_run_text = false,
                b"w:p" => text.push_str("\n\n"),
                _ => {}
            },
            Ok(Event::Empty(e)) => match e.name().as_ref() {
                b"w:tab" => text.push('\t'),
                b"w:br" | b"w:cr" => text.push('\n'),
                b"w:p" => text.push_str("\n\n"),
                _ => {}
            },
            Ok(Event::Text(t)) if in_run_text => {
                let unescaped = t
                    .unescape()
                    .map_err(|e| AppError::Extraction(format!("Invalid DOCX text: {}", e)))?;
                text.push_str(&unescaped);
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                return Err(AppError::Extraction(format!(
                    "Malformed {} at position {}: {}",
                    DOCUMENT_PART,
                    reader.buffer_position(),
                    e
                )))
            }
        }
    }

    Ok(text)
}
