use std::collections::HashSet;

/// The only token boundary.
/// Runs of spaces yield empty tokens, tabs and newlines stay inside tokens.
pub const TOKEN_SEPARATOR: char = ' ';

/// Split a document into its tokens
///
/// Never returns an empty list for `str` input: `""` is one empty token and
/// `" "` is two.
///
/// # Examples
/// ```
/// use tf_idf_table::vectorizer::token::tokenize;
/// assert_eq!(tokenize("a  b"), vec!["a", "", "b"]);
/// assert_eq!(tokenize(""), vec![""]);
/// ```
#[inline]
pub fn tokenize(document: &str) -> Vec<&str> {
    document.split(TOKEN_SEPARATOR).collect()
}

/// Distinct tokens of a document
/// duplicates collapse, used for document frequency
#[inline]
pub fn token_set(document: &str) -> HashSet<&str> {
    document.split(TOKEN_SEPARATOR).collect()
}
