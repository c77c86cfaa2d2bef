//! Helpers for the whitespace separated lists that the build model hands over as a
//! single string (custom command lines, custom inputs and outputs...)

/// Splits `input` on every occurrence of `sep`.
///
/// An empty input produces an empty list, while consecutive separators produce
/// empty tokens, so the tokens can be joined back into the very same string.
///
/// ```rust
/// use ewgen::utils::text::split;
///
/// assert!(split("", ' ').is_empty());
/// assert_eq!(split("a b", ' '), vec!["a", "b"]);
/// assert_eq!(split("a  b", ' '), vec!["a", "", "b"]);
/// ```
pub fn split(input: &str, sep: char) -> Vec<&str> {
    if input.is_empty() {
        return Vec::new();
    }
    input.split(sep).collect()
}

/// Joins `tokens` inserting `sep` in between them.
///
/// The separator is only inserted once something has been written, so leading
/// empty tokens vanish from the result.
pub fn join<I, S>(tokens: I, sep: char) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut result = String::new();
    for token in tokens {
        if !result.is_empty() {
            result.push(sep);
        }
        result.push_str(token.as_ref());
    }
    result
}
