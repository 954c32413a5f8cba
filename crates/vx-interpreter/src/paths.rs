//! File-path extraction from raw (uncorrected) utterance text.
//!
//! Three pattern families: absolute paths, `./` or `../` relative paths, and
//! bare filenames with an extension. A match must begin a token, so the tail
//! of a relative path or URL is never reported on its own.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

// Start of text, whitespace, or an opening quote/bracket.
const TOKEN_START: &str = r#"(?:^|[\s"'`(\[<])"#;

// /usr/local/bin/app, /etc/nginx/
static RE_ABSOLUTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"{TOKEN_START}((?:/[\w.\-~@+]+)+/?)")).unwrap());

// ./config.json, ../lib/util.rs
static RE_RELATIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"{TOKEN_START}(\.\.?/[\w.\-~@+/]+)")).unwrap());

// server.js, archive.tar.gz, src/main.rs; extensions start with a letter.
static RE_FILENAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"{TOKEN_START}((?:[\w\-]+/)*[\w\-]+(?:\.[A-Za-z0-9]+)*\.[A-Za-z][A-Za-z0-9]{{0,9}})\b"
    ))
    .unwrap()
});

const TRAILING_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?'];

/// Scans text for file paths.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathExtractor;

impl PathExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Paths in order of first appearance, without duplicates.
    pub fn extract(&self, text: &str) -> Vec<String> {
        extract_paths(text)
    }
}

/// Paths in order of first appearance, without duplicates.
pub fn extract_paths(text: &str) -> Vec<String> {
    let mut found: Vec<(usize, &str)> = Vec::new();

    for re in [&*RE_ABSOLUTE, &*RE_RELATIVE, &*RE_FILENAME] {
        for caps in re.captures_iter(text) {
            if let Some(m) = caps.get(1) {
                let path = m.as_str().trim_end_matches(TRAILING_PUNCTUATION);
                if path.chars().any(char::is_alphanumeric) {
                    found.push((m.start(), path));
                }
            }
        }
    }

    // Stable: families keep their relative order at the same offset.
    found.sort_by_key(|(start, _)| *start);

    let mut seen = HashSet::new();
    found
        .into_iter()
        .filter(|(_, path)| seen.insert(*path))
        .map(|(_, path)| path.to_string())
        .collect()
}
