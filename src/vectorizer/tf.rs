use indexmap::IndexMap;
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::{
    config::TfIdfConfig,
    error::{Result, TfIdfError},
    vectorizer::{
        table::{weight_from_count, TermFrequencyTable, Vocabulary, Weight, WeightTable},
        token::tokenize,
    },
};

/// Compute the term frequency table with the default configuration
///
/// See [`compute_term_frequency_with`].
pub fn compute_term_frequency<N, S>(
    vocabulary: &Vocabulary,
    corpus: &[S],
) -> Result<TermFrequencyTable<N>>
where
    N: Weight,
    S: AsRef<str> + Sync,
{
    compute_term_frequency_with(vocabulary, corpus, &TfIdfConfig::default())
}

/// Compute the term frequency table
///
/// Row `i` has an entry for every vocabulary term, starting at zero. Each
/// occurrence of a token in document `i` adds `1 / token_count(i)`.
///
/// # Errors
/// * `EmptyDocument` - a document has no tokens
/// * `UnknownTerm` - a token is missing from `vocabulary`
pub fn compute_term_frequency_with<N, S>(
    vocabulary: &Vocabulary,
    corpus: &[S],
    config: &TfIdfConfig,
) -> Result<TermFrequencyTable<N>>
where
    N: Weight,
    S: AsRef<str> + Sync,
{
    let rows = if config.use_parallel(corpus.len()) {
        corpus
            .par_iter()
            .enumerate()
            .map(|(document, text)| tf_row(vocabulary, document, text.as_ref()))
            .collect::<Result<Vec<_>>>()?
    } else {
        corpus
            .iter()
            .enumerate()
            .map(|(document, text)| tf_row(vocabulary, document, text.as_ref()))
            .collect::<Result<Vec<_>>>()?
    };
    debug!(doc_num = rows.len(), vocab_size = vocabulary.len(), "computed term frequency");
    Ok(WeightTable::from_rows(rows))
}

/// One document's row
/// Built fresh from the vocabulary, never shared with another row
fn tf_row<N>(vocabulary: &Vocabulary, document: usize, text: &str) -> Result<IndexMap<String, N>>
where
    N: Weight,
{
    let tokens = tokenize(text);
    if tokens.is_empty() {
        warn!(document, "document has no tokens");
        return Err(TfIdfError::EmptyDocument { document });
    }
    let step = N::one() / weight_from_count::<N>(tokens.len())?;

    let mut row: IndexMap<String, N> = IndexMap::with_capacity(vocabulary.len());
    for term in vocabulary.iter() {
        row.insert(term.to_owned(), N::zero());
    }
    for token in tokens {
        match row.get_mut(token) {
            Some(freq) => *freq = *freq + step,
            None => {
                warn!(document, token, "token missing from vocabulary");
                return Err(TfIdfError::UnknownTerm {
                    document,
                    term: token.to_owned(),
                });
            }
        }
    }
    Ok(row)
}
