//! Word-boundary-aware character n-grams.

/// Splits `text` on whitespace, pads every word with one space on each side and
/// returns all character n-grams of length `min_n..=max_n` taken inside the
/// padded words.
///
/// A padded word no longer than `n` contributes itself once and stops the
/// search for longer grams of that word.
///
/// ```
/// use tally_core::fuzzy::char_wb_ngrams;
///
/// assert_eq!(char_wb_ngrams("ab", 2, 3), vec![" a", "ab", "b ", " ab", "ab "]);
/// ```
#[must_use]
pub fn char_wb_ngrams(text: &str, min_n: usize, max_n: usize) -> Vec<String> {
    let mut grams = Vec::new();

    for word in text.split_whitespace() {
        let padded: Vec<char> = std::iter::once(' ')
            .chain(word.chars())
            .chain(std::iter::once(' '))
            .collect();
        let len = padded.len();

        for n in min_n.max(1)..=max_n {
            grams.push(padded[..n.min(len)].iter().collect());
            if len <= n {
                break;
            }
            for offset in 1..=len - n {
                grams.push(padded[offset..offset + n].iter().collect());
            }
        }
    }

    grams
}
