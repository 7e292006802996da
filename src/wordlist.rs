//! Word list management module
//!
//! Holds the words memorable passwords are built from. A built-in list is
//! used until a custom one is loaded from file.

use std::path::PathBuf;
use std::sync::{PoisonError, RwLock};
use thiserror::Error;

/// Built-in word list (common Indonesian words).
pub const DEFAULT_WORDS: &[&str] = &[
    "merah", "biru", "hijau", "kuning", "putih", "hitam",
    "cepat", "lambat", "tinggi", "rendah", "besar", "kecil",
    "pintar", "cerdas", "ramah", "baik", "kuat", "hebat",
];

static CUSTOM_WORDS: RwLock<Option<Vec<String>>> = RwLock::new(None);

#[derive(Error, Debug)]
pub enum WordlistError {
    #[error("Word list file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read word list file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Word list file is empty")]
    EmptyFile,
}

/// Where [`init_wordlist`] looks for a custom word list: `PWD_WORDLIST_PATH`
/// when set, `./assets/wordlist.txt` otherwise.
pub fn get_wordlist_path() -> PathBuf {
    std::env::var("PWD_WORDLIST_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./assets/wordlist.txt"))
}

/// Loads a custom word list from [`get_wordlist_path`].
///
/// Fails when the file is missing, unreadable, or holds no words.
pub fn init_wordlist() -> Result<usize, WordlistError> {
    let path = get_wordlist_path();
    init_wordlist_from_path(&path)
}

/// Loads a custom word list from a specific file path.
///
/// One word per line; words are trimmed and lowercased, blank lines and
/// duplicates are dropped. Idempotent: once a list is loaded, later calls
/// return its size without reading the file.
///
/// # Example
///
/// ```rust,ignore
/// let count = pwd_gen::init_wordlist_from_path("/etc/pwd-gen/words.txt")?;
/// ```
pub fn init_wordlist_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<usize, WordlistError> {
    {
        let guard = CUSTOM_WORDS.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(words) = guard.as_ref() {
            return Ok(words.len());
        }
    }

    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Word list initialization FAILED: FileNotFound {:?}", path);
        return Err(WordlistError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;

    let words = normalize_words(content.lines());
    if words.is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("Word list initialization FAILED: Empty file {:?}", path);
        return Err(WordlistError::EmptyFile);
    }

    let count = words.len();
    *CUSTOM_WORDS.write().unwrap_or_else(PoisonError::into_inner) = Some(words);

    #[cfg(feature = "tracing")]
    tracing::info!("Word list initialized: {} words from {:?}", count, path);

    Ok(count)
}

/// Trims and lowercases `words`, dropping blanks and duplicates.
///
/// Memorable passwords pick distinct entries, so the list must not repeat.
pub(crate) fn normalize_words<I, S>(words: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut words: Vec<String> = words
        .into_iter()
        .map(|w| w.as_ref().trim().to_lowercase())
        .filter(|w| !w.is_empty())
        .collect();
    words.sort();
    words.dedup();
    words
}

/// Returns the words in use: the loaded custom list, or [`DEFAULT_WORDS`].
pub fn active_words() -> Vec<String> {
    let guard = CUSTOM_WORDS.read().unwrap_or_else(PoisonError::into_inner);
    match guard.as_ref() {
        Some(words) => words.clone(),
        None => DEFAULT_WORDS.iter().map(|w| w.to_string()).collect(),
    }
}

/// Resets to the built-in word list for testing purposes.
#[cfg(test)]
pub fn reset_wordlist_for_testing() {
    *CUSTOM_WORDS.write().unwrap_or_else(PoisonError::into_inner) = None;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn point_wordlist_env_at(path: &str) {
        // SAFETY: every test touching PWD_WORDLIST_PATH is #[serial]
        unsafe { std::env::set_var("PWD_WORDLIST_PATH", path) };
    }

    fn clear_wordlist_env() {
        // SAFETY: every test touching PWD_WORDLIST_PATH is #[serial]
        unsafe { std::env::remove_var("PWD_WORDLIST_PATH") };
    }

    #[test]
    #[serial]
    fn test_get_wordlist_path_default() {
        clear_wordlist_env();

        let path = get_wordlist_path();
        assert_eq!(path, PathBuf::from("./assets/wordlist.txt"));
    }

    #[test]
    #[serial]
    fn test_get_wordlist_path_from_env() {
        let custom_path = "/custom/path/wordlist.txt";
        point_wordlist_env_at(custom_path);

        let path = get_wordlist_path();
        assert_eq!(path, PathBuf::from(custom_path));

        clear_wordlist_env();
    }

    #[test]
    #[serial]
    fn test_active_words_defaults_to_builtin() {
        reset_wordlist_for_testing();
        let words = active_words();
        assert_eq!(words.len(), DEFAULT_WORDS.len());
        assert_eq!(words[0], "merah");
    }

    #[test]
    #[serial]
    fn test_init_wordlist_file_not_found() {
        reset_wordlist_for_testing();
        point_wordlist_env_at("/nonexistent/path/wordlist.txt");

        let result = init_wordlist();
        assert!(matches!(result, Err(WordlistError::FileNotFound(_))));
        assert_eq!(active_words().len(), DEFAULT_WORDS.len());

        clear_wordlist_env();
    }

    #[test]
    #[serial]
    fn test_init_wordlist_blank_file() {
        reset_wordlist_for_testing();
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(temp_file, "   ").expect("Failed to write");
        writeln!(temp_file).expect("Failed to write");

        let result = init_wordlist_from_path(temp_file.path());
        assert!(matches!(result, Err(WordlistError::EmptyFile)));
    }

    #[test]
    #[serial]
    fn test_init_wordlist_normalizes_and_dedups() {
        reset_wordlist_for_testing();
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(temp_file, "  Apple ").expect("Failed to write");
        writeln!(temp_file, "apple").expect("Failed to write");
        writeln!(temp_file, "Banana").expect("Failed to write");

        let count = init_wordlist_from_path(temp_file.path()).expect("Should load");
        assert_eq!(count, 2);
        assert_eq!(active_words(), vec!["apple".to_string(), "banana".to_string()]);

        reset_wordlist_for_testing();
    }

    #[test]
    fn test_normalize_words() {
        assert_eq!(
            normalize_words(["kata", " KATA", "", "buku", "kata "]),
            vec!["buku".to_string(), "kata".to_string()]
        );
    }

    #[test]
    #[serial]
    fn test_init_wordlist_is_idempotent() {
        reset_wordlist_for_testing();
        let mut first = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(first, "one").expect("Failed to write");
        let mut second = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(second, "two").expect("Failed to write");
        writeln!(second, "three").expect("Failed to write");

        assert_eq!(init_wordlist_from_path(first.path()).ok(), Some(1));
        assert_eq!(init_wordlist_from_path(second.path()).ok(), Some(1));
        assert_eq!(active_words(), vec!["one".to_string()]);

        reset_wordlist_for_testing();
    }
}
