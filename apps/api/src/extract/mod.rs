//! Resume text extraction — turns a typed byte buffer into plain text.
//!
//! Dispatch is MIME-first with a filename-extension fallback for the generic
//! types browsers sometimes send. Treated as a leaf collaborator: callers
//! only see text out or `UnsupportedFormat`.

use std::io::Read;

use quick_xml::events::Event;
use quick_xml::Reader;
use thiserror::Error;

const DOCX_MIME: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to extract text: {0}")]
    Extraction(String),
}

enum Format {
    Pdf,
    Docx,
    Text,
}

pub fn extract_text(file_name: &str, mime_type: &str, data: &[u8]) -> Result<String, ExtractError> {
    match resolve_format(file_name, mime_type) {
        Some(Format::Pdf) => extract_pdf(data),
        Some(Format::Docx) => extract_docx(data),
        Some(Format::Text) => Ok(String::from_utf8_lossy(data).into_owned()),
        None => Err(ExtractError::UnsupportedFormat(mime_type.to_string())),
    }
}

fn resolve_format(file_name: &str, mime_type: &str) -> Option<Format> {
    match mime_type.trim().to_lowercase().as_str() {
        "application/pdf" => Some(Format::Pdf),
        DOCX_MIME => Some(Format::Docx),
        "text/plain" | "text/markdown" => Some(Format::Text),
        // Browsers send these for anything they can't classify; fall back to
        // the filename extension.
        "" | "application/octet-stream" => format_from_extension(file_name),
        _ => None,
    }
}

fn format_from_extension(file_name: &str) -> Option<Format> {
    let ext = file_name.rsplit('.').next()?.to_lowercase();
    match ext.as_str() {
        "pdf" => Some(Format::Pdf),
        "docx" => Some(Format::Docx),
        "txt" | "md" => Some(Format::Text),
        _ => None,
    }
}

fn extract_pdf(data: &[u8]) -> Result<String, ExtractError> {
    pdf_extract::extract_text_from_mem(data).map_err(|e| ExtractError::Extraction(e.to_string()))
}

/// A .docx file is a zip container; the document body lives in
/// `word/document.xml`. Text runs are collected and each `w:p` paragraph end
/// becomes a newline.
fn extract_docx(data: &[u8]) -> Result<String, ExtractError> {
    let cursor = std::io::Cursor::new(data);
    let mut archive =
        zip::ZipArchive::new(cursor).map_err(|e| ExtractError::Extraction(e.to_string()))?;
    let mut document = archive
        .by_name("word/document.xml")
        .map_err(|e| ExtractError::Extraction(e.to_string()))?;
    let mut xml = String::new();
    document
        .read_to_string(&mut xml)
        .map_err(|e| ExtractError::Extraction(e.to_string()))?;

    let mut reader = Reader::from_str(&xml);
    let mut text = String::new();
    loop {
        match reader.read_event() {
            Ok(Event::Text(t)) => {
                let chunk = t
                    .unescape()
                    .map_err(|e| ExtractError::Extraction(e.to_string()))?;
                text.push_str(&chunk);
            }
            Ok(Event::End(e)) if e.name().as_ref() == b"w:p" => text.push('\n'),
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(ExtractError::Extraction(e.to_string())),
        }
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_plain_text_passthrough() {
        let text = extract_text("resume.txt", "text/plain", b"Senior engineer, 8 years").unwrap();
        assert_eq!(text, "Senior engineer, 8 years");
    }

    #[test]
    fn test_unknown_mime_is_unsupported() {
        let err = extract_text("resume.xyz", "application/x-unknown", b"data").unwrap_err();
        assert!(matches!(err, ExtractError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_octet_stream_falls_back_to_extension() {
        let text = extract_text("notes.txt", "application/octet-stream", b"hello").unwrap();
        assert_eq!(text, "hello");
    }

    #[test]
    fn test_octet_stream_without_known_extension_is_unsupported() {
        let err = extract_text("blob", "application/octet-stream", b"data").unwrap_err();
        assert!(matches!(err, ExtractError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_docx_extraction_joins_paragraphs() {
        let mut cursor = std::io::Cursor::new(Vec::new());
        {
            let mut writer = zip::ZipWriter::new(&mut cursor);
            writer
                .start_file("word/document.xml", zip::write::SimpleFileOptions::default())
                .unwrap();
            writer
                .write_all(
                    br#"<w:document><w:body><w:p><w:r><w:t>Jane Doe</w:t></w:r></w:p><w:p><w:r><w:t>Backend Engineer</w:t></w:r></w:p></w:body></w:document>"#,
                )
                .unwrap();
            writer.finish().unwrap();
        }
        let bytes = cursor.into_inner();

        let text = extract_text("resume.docx", DOCX_MIME, &bytes).unwrap();
        assert!(text.contains("Jane Doe\n"));
        assert!(text.contains("Backend Engineer"));
    }

    #[test]
    fn test_docx_garbage_bytes_is_extraction_error() {
        let err = extract_text("resume.docx", DOCX_MIME, b"not a zip").unwrap_err();
        assert!(matches!(err, ExtractError::Extraction(_)));
    }
}
