/// Levenshtein distance between `a` and `b`: the minimum number of
/// single-character insertions, deletions and substitutions that turn `a`
/// into `b`.
///
/// Characters are Unicode scalar values, so `"café"` and `"cafe"` are one
/// substitution apart. Only two rows of the DP table are kept, sized by the
/// shorter input.
///
/// ```
/// use guess_scorer::word_distance;
///
/// assert_eq!(word_distance("apple", "appl"), 1);
/// assert_eq!(word_distance("apple", "banana"), 5);
/// ```
#[must_use]
pub fn word_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    // distance is symmetric, so the shorter string can index the columns
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    if short.is_empty() {
        return long.len();
    }

    let mut prev_row: Vec<usize> = (0..=short.len()).collect();
    let mut curr_row = vec![0; short.len() + 1];

    for (i, lc) in long.iter().enumerate() {
        curr_row[0] = i + 1;
        for (j, sc) in short.iter().enumerate() {
            let cost = usize::from(lc != sc);
            curr_row[j + 1] = (prev_row[j + 1] + 1) // deletion
                .min(curr_row[j] + 1) // insertion
                .min(prev_row[j] + cost); // substitution or match
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[short.len()]
}

/// True when `a` can be turned into `b` with at most `max_edits` edits.
#[must_use]
pub fn is_within_distance(a: &str, b: &str, max_edits: usize) -> bool {
    // Cheap length check before building any rows.
    let (len_a, len_b) = (a.chars().count(), b.chars().count());
    if len_a.abs_diff(len_b) > max_edits {
        return false;
    }
    word_distance(a, b) <= max_edits
}
