use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Result, ScorerError};
use crate::normalizer::normalize_guess;

pub const EMBEDDED_WORDBANK: &str = include_str!("resources/words.txt");

/// Turns one line of a word list into a target word, or `None` for blank
/// lines and `#` comments.
fn parse_line(line: &str) -> Option<String> {
    let line = line.trim();
    if line.starts_with('#') {
        return None;
    }
    let word = normalize_guess(line);
    (!word.is_empty()).then_some(word)
}

fn push_unique(words: &mut Vec<String>, seen: &mut HashSet<String>, word: String) {
    if seen.insert(word.clone()) {
        words.push(word);
    }
}

/// Normalized, de-duplicated target words in file order.
pub fn load_wordbank_from_str(data: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut seen = HashSet::new();
    for word in data.lines().filter_map(parse_line) {
        push_unique(&mut words, &mut seen, word);
    }
    words
}

pub fn load_wordbank_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let io_error = |source| ScorerError::Wordbank {
        path: path.to_path_buf(),
        source,
    };

    let reader = BufReader::new(File::open(path).map_err(io_error)?);
    let mut words = Vec::new();
    let mut seen = HashSet::new();
    for line in reader.lines() {
        if let Some(word) = parse_line(&line.map_err(io_error)?) {
            push_unique(&mut words, &mut seen, word);
        }
    }

    if words.is_empty() {
        return Err(ScorerError::EmptyWordbank);
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_from_str_normalizes_and_skips() {
        let words = load_wordbank_from_str("# animals\n  Giraffe \n\nHot-Dog!\n   \n?!\n");
        assert_eq!(words, vec!["giraffe".to_string(), "hotdog".to_string()]);
    }

    #[test]
    fn test_load_from_str_dedups_in_order() {
        let words = load_wordbank_from_str("cat\nDog\nCAT\ndog.\nbird");
        assert_eq!(words, vec!["cat", "dog", "bird"]);
    }

    #[test]
    fn test_embedded_wordbank_is_usable() {
        let words = load_wordbank_from_str(EMBEDDED_WORDBANK);
        assert!(words.len() >= 10);
        assert!(words.contains(&"ice cream".to_string()));
        assert!(words.iter().all(|w| *w == normalize_guess(w)));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join("guess_scorer_wordbank_unit.txt");
        {
            let mut file = File::create(&path).unwrap();
            writeln!(file, "Rocket").unwrap();
            writeln!(file, "# comment").unwrap();
            writeln!(file, "snowman").unwrap();
        }
        let words = load_wordbank_from_file(&path).unwrap();
        assert_eq!(words, vec!["rocket", "snowman"]);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_from_missing_file() {
        let result = load_wordbank_from_file("/definitely/not/here/words.txt");
        assert!(matches!(result, Err(ScorerError::Wordbank { .. })));
    }

    #[test]
    fn test_load_from_file_with_no_words() {
        let path = std::env::temp_dir().join("guess_scorer_wordbank_empty.txt");
        std::fs::write(&path, "# nothing\n\n").unwrap();
        assert!(matches!(
            load_wordbank_from_file(&path),
            Err(ScorerError::EmptyWordbank)
        ));
        std::fs::remove_file(&path).unwrap();
    }
}
