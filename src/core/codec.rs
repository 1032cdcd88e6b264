//! # Save File Codec
//!
//! Counter values live in a single flat file: signed integers separated by
//! one ASCII space, with a trailing space and no newline.
//!
//! ```text
//! "3 -1 0 12 "
//! ```
//!
//! Decoding is lossy but never fails on content: a token that isn't an
//! integer becomes `0` and is counted in [`Decoded::lost`]. Only the file
//! itself (missing, unreadable, not text) produces a [`StorageError`].
//!
//! Writes use atomic rename (write `.tmp`, then `rename()`) for crash safety.

use std::fs;
use std::io;
use std::path::Path;

use log::{debug, info, warn};

use crate::core::error::{InvalidArgument, StorageError};

const DELIMITER: char = ' ';

/// Result of decoding a save file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decoded {
    pub values: Vec<i32>,
    /// How many tokens failed to parse and were replaced with `0`.
    pub lost: usize,
}

pub fn encode(values: &[i32]) -> String {
    let mut out = String::new();
    for value in values {
        out.push_str(&value.to_string());
        out.push(DELIMITER);
    }
    out
}

pub fn decode(text: &str) -> Decoded {
    let mut decoded = Decoded::default();
    for token in text.split(DELIMITER).filter(|t| !t.is_empty()) {
        match token.trim().parse::<i32>() {
            Ok(value) => decoded.values.push(value),
            Err(e) => {
                debug!("Unreadable token {:?} replaced with 0: {}", token, e);
                decoded.values.push(0);
                decoded.lost += 1;
            }
        }
    }
    decoded
}

fn check_path(path: &Path) -> Result<(), InvalidArgument> {
    if path.to_string_lossy().trim().is_empty() {
        return Err(InvalidArgument::BlankPath);
    }
    Ok(())
}

/// Read and decode the save file at `path`.
pub fn load(path: &Path) -> Result<Decoded, StorageError> {
    check_path(path)?;

    let bytes = fs::read(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => StorageError::NotFound {
            path: path.to_path_buf(),
        },
        _ => StorageError::Io {
            operation: "reading",
            path: path.to_path_buf(),
            source,
        },
    })?;

    let text = String::from_utf8(bytes).map_err(|e| StorageError::Corrupt {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let decoded = decode(&text);
    if decoded.lost > 0 {
        warn!(
            "Loaded {} values from {} ({} unreadable)",
            decoded.values.len(),
            path.display(),
            decoded.lost
        );
    } else {
        info!("Loaded {} values from {}", decoded.values.len(), path.display());
    }
    Ok(decoded)
}

/// Encode `values` and write them to `path`, creating the parent directory if needed.
pub fn save(path: &Path, values: &[i32]) -> Result<(), StorageError> {
    check_path(path)?;

    let io_err = |operation: &'static str| {
        move |source: io::Error| StorageError::Io {
            operation,
            path: path.to_path_buf(),
            source,
        }
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err("creating directory for"))?;
    }

    let tmp_path = path.with_extension("tmp");
    fs::write(&tmp_path, encode(values)).map_err(io_err("writing"))?;
    fs::rename(&tmp_path, path).map_err(io_err("replacing"))?;

    info!("Saved {} values to {}", values.len(), path.display());
    Ok(())
}

/// Delete the save file at `path` if it exists.
pub fn discard(path: &Path) -> Result<(), StorageError> {
    check_path(path)?;
    match fs::remove_file(path) {
        Ok(()) => {
            info!("Discarded save file {}", path.display());
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(source) => Err(StorageError::Io {
            operation: "deleting",
            path: path.to_path_buf(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_encode_uses_trailing_space_and_no_newline() {
        assert_eq!(encode(&[3, -1, 0, 12]), "3 -1 0 12 ");
        assert_eq!(encode(&[]), "");
    }

    #[test]
    fn test_decode_round_trips_encode() {
        for values in [vec![0], vec![5, -5, 42], vec![i32::MIN, 0, i32::MAX]] {
            let decoded = decode(&encode(&values));
            assert_eq!(decoded, Decoded { values, lost: 0 });
        }
    }

    #[test]
    fn test_decode_replaces_bad_tokens_with_zero() {
        let decoded = decode("3 x 5 ");
        assert_eq!(decoded.values, vec![3, 0, 5]);
        assert_eq!(decoded.lost, 1);
    }

    #[test]
    fn test_decode_counts_every_bad_token_in_place() {
        let decoded = decode("abc 1 2.5 99999999999 -4 --");
        assert_eq!(decoded.values, vec![0, 1, 0, 0, -4, 0]);
        assert_eq!(decoded.lost, 4);
    }

    #[test]
    fn test_decode_ignores_repeated_delimiters() {
        let decoded = decode("  1    2  ");
        assert_eq!(decoded.values, vec![1, 2]);
        assert_eq!(decoded.lost, 0);
    }

    #[test]
    fn test_decode_length_follows_token_count_not_values() {
        let decoded = decode("7 ");
        assert_eq!(decoded.values, vec![7]);
    }

    #[test]
    fn test_decode_tolerates_trailing_newline_and_sign() {
        let decoded = decode("+4 8\n");
        assert_eq!(decoded.values, vec![4, 8]);
        assert_eq!(decoded.lost, 0);
    }

    #[test]
    fn test_decode_empty_text_yields_no_values() {
        assert_eq!(decode(""), Decoded::default());
        assert_eq!(decode("   "), Decoded::default());
    }

    #[test]
    fn test_load_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(&dir.path().join("save.out")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_blank_path_is_invalid_argument() {
        for path in ["", "   "] {
            let path = PathBuf::from(path);
            assert!(matches!(
                load(&path),
                Err(StorageError::InvalidArgument(InvalidArgument::BlankPath))
            ));
            assert!(matches!(
                save(&path, &[1]),
                Err(StorageError::InvalidArgument(InvalidArgument::BlankPath))
            ));
        }
    }

    #[test]
    fn test_load_non_text_file_is_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("save.out");
        fs::write(&path, b"\xff\xfe ").unwrap();
        assert!(matches!(load(&path), Err(StorageError::Corrupt { .. })));
    }

    #[test]
    fn test_load_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(load(dir.path()), Err(StorageError::Io { .. })));
    }

    #[test]
    fn test_save_writes_exact_bytes_and_creates_parent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("save.out");
        save(&path, &[1, -2, 3]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "1 -2 3 ");
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("save.out");
        save(&path, &[9, 0, -9]).unwrap();
        let decoded = load(&path).unwrap();
        assert_eq!(decoded.values, vec![9, 0, -9]);
        assert_eq!(decoded.lost, 0);
    }

    #[test]
    fn test_discard_removes_file_and_tolerates_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("save.out");
        save(&path, &[1]).unwrap();

        discard(&path).unwrap();
        assert!(!path.exists());
        discard(&path).unwrap();
    }
}
