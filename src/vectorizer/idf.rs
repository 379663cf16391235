use std::collections::HashSet;

use indexmap::IndexMap;
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::{
    config::TfIdfConfig,
    error::{Result, TfIdfError},
    vectorizer::{
        table::{weight_from_count, IdfTable, Vocabulary, Weight},
        token::token_set,
    },
};

/// Compute the inverse document frequency table with the default configuration
///
/// See [`compute_inverse_document_frequency_with`].
pub fn compute_inverse_document_frequency<N, S>(
    vocabulary: &Vocabulary,
    corpus: &[S],
) -> Result<IdfTable<N>>
where
    N: Weight,
    S: AsRef<str> + Sync,
{
    compute_inverse_document_frequency_with(vocabulary, corpus, &TfIdfConfig::default())
}

/// Compute the inverse document frequency table
///
/// `idf(w) = log10(N / df(w))` where `df(w)` counts the documents containing
/// `w` at least once. A term in every document scores 0, a term in exactly one
/// scores `log10(N)`.
///
/// # Errors
/// * `EmptyCorpus` - `corpus` has no documents
/// * `ZeroDocumentFrequency` - a vocabulary term occurs in no document
pub fn compute_inverse_document_frequency_with<N, S>(
    vocabulary: &Vocabulary,
    corpus: &[S],
    config: &TfIdfConfig,
) -> Result<IdfTable<N>>
where
    N: Weight,
    S: AsRef<str> + Sync,
{
    if corpus.is_empty() {
        warn!("idf requested for an empty corpus");
        return Err(TfIdfError::EmptyCorpus);
    }
    let doc_num = weight_from_count::<N>(corpus.len())?;
    // 文書ごとのtoken集合 重複は1回として数える
    let doc_sets: Vec<HashSet<&str>> = corpus.iter().map(|doc| token_set(doc.as_ref())).collect();

    let weights: IndexMap<String, N> = if config.use_parallel(corpus.len()) {
        let terms: Vec<&str> = vocabulary.iter().collect();
        terms
            .par_iter()
            .map(|term| idf_entry(term, &doc_sets, doc_num))
            .collect::<Result<Vec<_>>>()?
            .into_iter()
            .collect()
    } else {
        vocabulary
            .iter()
            .map(|term| idf_entry(term, &doc_sets, doc_num))
            .collect::<Result<IndexMap<_, _>>>()?
    };
    debug!(doc_num = corpus.len(), vocab_size = weights.len(), "computed inverse document frequency");
    Ok(IdfTable::from_weights(weights, corpus.len()))
}

fn idf_entry<N>(term: &str, doc_sets: &[HashSet<&str>], doc_num: N) -> Result<(String, N)>
where
    N: Weight,
{
    let doc_freq = doc_sets.iter().filter(|set| set.contains(term)).count();
    if doc_freq == 0 {
        warn!(term, "vocabulary term not found in any document");
        return Err(TfIdfError::ZeroDocumentFrequency {
            term: term.to_owned(),
        });
    }
    let idf = (doc_num / weight_from_count::<N>(doc_freq)?).log10();
    Ok((term.to_owned(), idf))
}
