// Characters that hurt recall in Spotify's full text search
const QUERY_NOISE: [char; 6] = ['’', '\'', '"', '&', '(', ')'];

// Characters that are illegal or reserved in common filesystem path segments
const UNSAFE_FILENAME_CHARS: [char; 9] = ['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

const FILENAME_REPLACEMENT: char = '_';

/// Remove quotes, ampersands and parentheses from a search term.
///
/// ```
/// use rartwork::text::normalize_query;
///
/// assert_eq!(normalize_query("Rock & Roll (Live)"), "Rock  Roll Live");
/// ```
pub fn normalize_query(text: &str) -> String {
    text.chars().filter(|c| !QUERY_NOISE.contains(c)).collect()
}

/// Replace every character that can't appear in a file name with `_`.
///
/// The output always has as many characters as the input.
pub fn sanitize_filename(text: &str) -> String {
    text.chars()
        .map(|c| {
            if UNSAFE_FILENAME_CHARS.contains(&c) {
                FILENAME_REPLACEMENT
            } else {
                c
            }
        })
        .collect()
}
