//! Dictionary loading utilities
//!
//! Provides functions to load a dictionary from a file or the embedded list.

use super::Dictionary;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors raised while reading a dictionary file
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to read dictionary {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("dictionary {path} is not a JSON array of strings: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Load a dictionary from a file
///
/// Files whose first non-blank character is `[` are read as a JSON array of
/// strings; anything else is read as one word per line.
///
/// # Errors
///
/// Returns `DictionaryError` if the file cannot be read or the JSON is malformed.
///
/// # Examples
/// ```no_run
/// use boggle_solver::wordlists::loader::load_from_file;
///
/// let dictionary = load_from_file("data/csw24-words.json").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Dictionary, DictionaryError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| DictionaryError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words = parse_word_list(&content).map_err(|source| DictionaryError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), entries = words.len(), "read dictionary file");

    Ok(Dictionary::from_words(words))
}

/// Resolve a `--dictionary` argument: `embedded` or a file path
///
/// # Errors
///
/// Propagates `load_from_file` errors for paths.
pub fn load(source: &str) -> Result<Dictionary, DictionaryError> {
    match source {
        "embedded" => Ok(Dictionary::embedded()),
        path => load_from_file(path),
    }
}

/// Split raw file contents into entries
fn parse_word_list(content: &str) -> Result<Vec<String>, serde_json::Error> {
    if content.trim_start().starts_with('[') {
        serde_json::from_str(content)
    } else {
        Ok(content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_lines() {
        let words = parse_word_list("cat\n\n  dog  \n# comment\nbird\n").unwrap();
        assert_eq!(words, vec!["cat", "dog", "bird"]);
    }

    #[test]
    fn parses_json_array() {
        let words = parse_word_list(r#"  ["aa", "aah", "aahed"]"#).unwrap();
        assert_eq!(words, vec!["aa", "aah", "aahed"]);
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(parse_word_list(r#"["aa", 3]"#).is_err());
    }

    #[test]
    fn load_from_file_reads_disk() {
        let path = std::env::temp_dir().join(format!("boggle-dict-{}.txt", std::process::id()));
        fs::write(&path, "quit\nqat\nnot a word\n").unwrap();

        let dictionary = load_from_file(&path).unwrap();
        assert_eq!(dictionary.len(), 2);
        assert!(dictionary.contains("QAT"));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = load_from_file("/definitely/not/here.txt");
        assert!(matches!(result, Err(DictionaryError::Io { .. })));
    }

    #[test]
    fn load_embedded_keyword() {
        assert!(!load("embedded").unwrap().is_empty());
    }
}
