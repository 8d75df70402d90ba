// SPDX-License-Identifier: Apache-2.0
// © Folio Contributors <https://github.com/folio-dev/folio>
//! Reads an uploaded image file into an inline `data:` URL for the
//! `profileImage` field. The MIME type is inferred from the file extension;
//! unknown extensions fall back to `application/octet-stream`.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Error type for image reads.
#[derive(Debug, Error)]
pub enum ImageError {
    /// The file could not be read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read `path` and encode it as a `data:<mime>;base64,<payload>` URL.
/// The caller passes the result to the document store as the new
/// `profileImage` value; on error the field is simply left unchanged.
pub fn read_data_url(path: &Path) -> Result<String, ImageError> {
    let bytes = fs::read(path)?;
    Ok(format!(
        "data:{};base64,{}",
        mime_for(path),
        STANDARD.encode(bytes)
    ))
}

fn mime_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use std::io::Write as _;

    #[test]
    fn encodes_file_contents_as_a_data_url() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("avatar.png");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(&[0x89, b'P', b'N', b'G']).unwrap();

        let url = read_data_url(&path).unwrap();
        assert!(url.starts_with("data:image/png;base64,"));
        let payload = url.rsplit(',').next().unwrap();
        assert_eq!(STANDARD.decode(payload).unwrap(), [0x89, b'P', b'N', b'G']);
    }

    #[test]
    fn unknown_extensions_use_the_octet_stream_mime() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("avatar.blob");
        fs::write(&path, b"x").unwrap();
        assert!(read_data_url(&path)
            .unwrap()
            .starts_with("data:application/octet-stream;base64,"));
    }

    #[test]
    fn missing_file_reports_an_io_error() {
        let err = read_data_url(Path::new("/nonexistent/avatar.png")).unwrap_err();
        assert!(matches!(err, ImageError::Io(_)));
    }
}
