use std::io::Cursor;

use png::DecodingError;
use shared::domain::Metadata;

use crate::BackendError;

/// Reads the uncompressed Latin-1 text chunks of a PNG, in file order.
pub async fn read_png_metadata(filename: &str) -> Result<Metadata, BackendError> {
    let bytes = tokio::fs::read(filename)
        .await
        .map_err(|err| BackendError::Decode(err.to_string()))?;
    parse_png_metadata(filename, &bytes)
}

pub fn parse_png_metadata(filename: &str, bytes: &[u8]) -> Result<Metadata, BackendError> {
    let decoder = png::Decoder::new(Cursor::new(bytes));
    let reader = decoder.read_info().map_err(|err| match err {
        DecodingError::Format(_) => BackendError::NotPng(filename.to_string()),
        other => BackendError::Decode(other.to_string()),
    })?;

    Ok(reader
        .info()
        .uncompressed_latin1_text
        .iter()
        .map(|chunk| (chunk.keyword.clone(), chunk.text.clone()))
        .collect())
}
