use tracing::debug;

use crate::vectorizer::{table::Vocabulary, token::tokenize};

/// Build the vocabulary of a corpus
///
/// Union of every document's tokens. An empty corpus gives an empty vocabulary.
pub fn build_vocabulary<S>(corpus: &[S]) -> Vocabulary
where
    S: AsRef<str>,
{
    let mut vocabulary = Vocabulary::new();
    for document in corpus {
        for token in tokenize(document.as_ref()) {
            vocabulary.insert(token);
        }
    }
    debug!(doc_num = corpus.len(), vocab_size = vocabulary.len(), "built vocabulary");
    vocabulary
}
