//! Embedding image assets as `data:` URIs.
//!
//! Branding images are optional: callers are expected to fall back to a
//! placeholder glyph when [`encode`] reports [`AssetError::NotFound`].

use alloc::format;
use alloc::string::String;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

#[cfg(feature = "std")]
use std::fs;
#[cfg(feature = "std")]
use std::path::{Path, PathBuf};

#[cfg(feature = "std")]
use crate::error::AssetError;

/// MIME type used when the extension is missing or unrecognized.
pub const DEFAULT_MIME: &str = "image/png";

/// Maps a file extension (without the dot, any case) to an image MIME type.
///
/// ```
/// use pairdeal::asset::mime_for_extension;
///
/// assert_eq!(mime_for_extension(Some("JPG")), "image/jpeg");
/// assert_eq!(mime_for_extension(Some("bmp")), "image/png");
/// assert_eq!(mime_for_extension(None), "image/png");
/// ```
#[must_use]
pub fn mime_for_extension(extension: Option<&str>) -> &'static str {
    let Some(extension) = extension else {
        return DEFAULT_MIME;
    };

    match extension.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        _ => DEFAULT_MIME,
    }
}

/// Builds a `data:` URI from raw bytes and a MIME type.
///
/// ```
/// use pairdeal::asset::data_uri;
///
/// assert_eq!(data_uri(b"hi", "image/png"), "data:image/png;base64,aGk=");
/// ```
#[must_use]
pub fn data_uri(bytes: &[u8], mime: &str) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// Returns the MIME type implied by a path's extension.
#[cfg(feature = "std")]
#[must_use]
pub fn mime_type(path: &Path) -> &'static str {
    mime_for_extension(path.extension().and_then(|ext| ext.to_str()))
}

/// Reads an image file and encodes it as a `data:` URI.
///
/// # Errors
///
/// Returns [`AssetError::NotFound`] if nothing exists at `path`, or
/// [`AssetError::Io`] if the file cannot be read.
#[cfg(feature = "std")]
pub fn encode(path: impl AsRef<Path>) -> Result<String, AssetError> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::debug!(path = %path.display(), "asset not found");
        return Err(AssetError::NotFound(path.to_path_buf()));
    }

    let bytes = fs::read(path)?;
    Ok(data_uri(&bytes, mime_type(path)))
}

/// Returns the first candidate path that exists.
#[cfg(feature = "std")]
pub fn find_asset<I>(candidates: I) -> Option<PathBuf>
where
    I: IntoIterator,
    I::Item: AsRef<Path>,
{
    candidates.into_iter().find_map(|candidate| {
        let candidate = candidate.as_ref();
        if candidate.exists() {
            Some(candidate.to_path_buf())
        } else {
            tracing::debug!(path = %candidate.display(), "asset candidate missing");
            None
        }
    })
}

/// Encodes the first existing candidate.
///
/// # Errors
///
/// Returns [`AssetError::NotFound`] carrying the last candidate if none
/// exists (or an empty path when there were no candidates), or
/// [`AssetError::Io`] if the found file cannot be read.
#[cfg(feature = "std")]
pub fn encode_first<I>(candidates: I) -> Result<String, AssetError>
where
    I: IntoIterator,
    I::Item: AsRef<Path>,
{
    let mut last = PathBuf::new();
    for candidate in candidates {
        let candidate = candidate.as_ref();
        if candidate.exists() {
            return encode(candidate);
        }
        last = candidate.to_path_buf();
    }

    tracing::debug!(path = %last.display(), "no asset candidate found");
    Err(AssetError::NotFound(last))
}
