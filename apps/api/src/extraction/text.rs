//! Document → plain text.

use bytes::Bytes;
use tracing::info;

use super::ExtractionError;

pub const PDF_CONTENT_TYPE: &str = "application/pdf";
pub const TEXT_CONTENT_TYPE: &str = "text/plain";

/// Extracts plain text from an uploaded document.
///
/// Fails with a distinct error when the bytes cannot be parsed or yield no
/// text, instead of handing an empty string to the extractor.
pub fn extract_text(content_type: &str, data: &Bytes) -> Result<String, ExtractionError> {
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_lowercase();

    let text = match mime.as_str() {
        PDF_CONTENT_TYPE => pdf_extract::extract_text_from_mem(data)
            .map_err(|e| ExtractionError::UnreadableDocument(e.to_string()))?,
        TEXT_CONTENT_TYPE => String::from_utf8(data.to_vec())
            .map_err(|_| ExtractionError::UnreadableDocument("text is not valid UTF-8".into()))?,
        _ => return Err(ExtractionError::UnsupportedType(content_type.to_string())),
    };

    if text.trim().is_empty() {
        return Err(ExtractionError::EmptyText);
    }

    info!(mime = %mime, chars = text.len(), "document text extracted");
    Ok(text)
}
