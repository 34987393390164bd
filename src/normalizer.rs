/// Punctuation removed from guesses before comparison.
pub const STRIPPED_PUNCTUATION: [char; 7] = ['.', ',', '!', '?', '\'', '"', '-'];

/// Canonical form of a guess or target word: lowercase, trimmed, with the
/// characters in [`STRIPPED_PUNCTUATION`] removed.
///
/// Internal whitespace is kept as-is, so `"ice  cream"` and `"ice cream"`
/// stay distinct. Any other punctuation or symbol survives untouched.
#[must_use]
pub fn normalize_guess(input: &str) -> String {
    let stripped: String = input
        .to_lowercase()
        .trim()
        .chars()
        .filter(|c| !STRIPPED_PUNCTUATION.contains(c))
        .collect();

    // Stripping can expose edge whitespace ("hi !" -> "hi ").
    if stripped.trim().len() == stripped.len() {
        stripped
    } else {
        stripped.trim().to_string()
    }
}
