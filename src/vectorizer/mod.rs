pub mod idf;
pub mod table;
pub mod tf;
pub mod tfidf;
pub mod token;
pub mod vocabulary;

use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

use crate::{
    config::TfIdfConfig,
    error::{Result, TfIdfError},
    vectorizer::table::{IdfTable, TermFrequencyTable, TfIdfTable, Vocabulary, Weight},
};

/// Every intermediate table of one pipeline run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TfIdfReport<N = f64> {
    pub vocabulary: Vocabulary,
    pub tf: TermFrequencyTable<N>,
    pub idf: IdfTable<N>,
    pub tfidf: TfIdfTable<N>,
}

/// Run the whole pipeline with the default configuration
///
/// See [`compute_tfidf_with`].
pub fn compute_tfidf<N, S>(corpus: &[S]) -> Result<TfIdfReport<N>>
where
    N: Weight,
    S: AsRef<str> + Sync,
{
    compute_tfidf_with(corpus, &TfIdfConfig::default())
}

/// Run vocabulary, TF, IDF and the combiner in order
///
/// The first failing step aborts the run, nothing partial is returned.
///
/// # Examples
/// ```
/// use tf_idf_table::compute_tfidf;
/// let report = compute_tfidf::<f64, _>(&["a b a", "b c"]).unwrap();
/// assert_eq!(report.vocabulary.len(), 3);
/// assert_eq!(report.tfidf.get(1, "b"), Some(0.0));
/// ```
#[instrument(level = "debug", skip_all, fields(doc_num = corpus.len(), parallel = config.parallel))]
pub fn compute_tfidf_with<N, S>(corpus: &[S], config: &TfIdfConfig) -> Result<TfIdfReport<N>>
where
    N: Weight,
    S: AsRef<str> + Sync,
{
    if corpus.is_empty() {
        warn!("tf-idf requested for an empty corpus");
        return Err(TfIdfError::EmptyCorpus);
    }
    let vocabulary = vocabulary::build_vocabulary(corpus);
    let tf = tf::compute_term_frequency_with(&vocabulary, corpus, config)?;
    let idf = idf::compute_inverse_document_frequency_with(&vocabulary, corpus, config)?;
    let tfidf = tfidf::combine_with(&vocabulary, corpus, &tf, &idf, config)?;
    Ok(TfIdfReport {
        vocabulary,
        tf,
        idf,
        tfidf,
    })
}
