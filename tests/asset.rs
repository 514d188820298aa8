//! Asset embedding integration tests.

use std::fs;
use std::path::Path;

use pairdeal::AssetError;
use pairdeal::asset::{DEFAULT_MIME, data_uri, encode, encode_first, find_asset, mime_type};

const LOGO_GLYPH: &str = "🧠";

fn write_asset(dir: &Path, name: &str, bytes: &[u8]) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, bytes).unwrap();
    path
}

#[test]
fn missing_file_reports_not_found() {
    let err = encode("/no/such/file.png").unwrap_err();
    match err {
        AssetError::NotFound(path) => assert_eq!(path, Path::new("/no/such/file.png")),
        AssetError::Io(err) => panic!("unexpected io error: {err}"),
    }
}

#[test]
fn missing_file_falls_back_to_glyph() {
    let icon = encode("/no/such/file.png").unwrap_or_else(|_| LOGO_GLYPH.to_string());
    assert_eq!(icon, LOGO_GLYPH);
}

#[test]
fn encodes_png_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_asset(dir.path(), "dlc-logo.png", &[0x89, b'P', b'N', b'G']);

    assert_eq!(encode(&path).unwrap(), "data:image/png;base64,iVBORw==");
}

#[test]
fn mime_follows_extension() {
    let dir = tempfile::tempdir().unwrap();
    let jpeg = write_asset(dir.path(), "ai-icon.JPEG", b"abc");
    let svg = write_asset(dir.path(), "data-icon.svg", b"<svg/>");
    let unknown = write_asset(dir.path(), "icon.bmp", b"abc");
    let bare = write_asset(dir.path(), "icon", b"abc");

    assert_eq!(encode(&jpeg).unwrap(), "data:image/jpeg;base64,YWJj");
    assert!(encode(&svg).unwrap().starts_with("data:image/svg+xml;base64,"));
    assert_eq!(mime_type(&unknown), DEFAULT_MIME);
    assert_eq!(mime_type(&bare), DEFAULT_MIME);
    assert_eq!(encode(&bare).unwrap(), data_uri(b"abc", DEFAULT_MIME));
}

#[test]
fn first_existing_candidate_wins() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("dlc-logo.png");
    let second = write_asset(dir.path(), "logo.gif", b"GIF89a");
    let third = write_asset(dir.path(), "logo.webp", b"RIFF");

    assert_eq!(
        find_asset([&missing, &second, &third]),
        Some(second.clone())
    );
    assert_eq!(
        encode_first([&missing, &second, &third]).unwrap(),
        "data:image/gif;base64,R0lGODlh"
    );
}

#[test]
fn no_candidate_reports_last_path() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("ai-icon.png");
    let last = dir.path().join("./ai-icon.png");

    assert_eq!(find_asset([&first, &last]), None);
    match encode_first([&first, &last]).unwrap_err() {
        AssetError::NotFound(path) => assert_eq!(path, last),
        AssetError::Io(err) => panic!("unexpected io error: {err}"),
    }
}
