use indexmap::IndexMap;
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::{
    config::TfIdfConfig,
    error::{Result, TfIdfError},
    vectorizer::table::{IdfTable, TermFrequencyTable, TfIdfTable, Vocabulary, Weight, WeightTable},
};

/// Combine TF and IDF with the default configuration
///
/// See [`combine_with`].
pub fn combine<N, S>(
    vocabulary: &Vocabulary,
    corpus: &[S],
    tf_table: &TermFrequencyTable<N>,
    idf_table: &IdfTable<N>,
) -> Result<TfIdfTable<N>>
where
    N: Weight,
    S: AsRef<str>,
{
    combine_with(vocabulary, corpus, tf_table, idf_table, &TfIdfConfig::default())
}

/// Combine TF and IDF into the TF-IDF table
///
/// `tfidf[i][w] = tf[i][w] * idf[w]` for every document `i` and term `w`.
/// The output has the same shape as `tf_table`.
///
/// # Errors
/// * `ShapeMismatch` - `tf_table` does not have one row per document, or a row
///   or `idf_table` does not have exactly the vocabulary as keys
pub fn combine_with<N, S>(
    vocabulary: &Vocabulary,
    corpus: &[S],
    tf_table: &TermFrequencyTable<N>,
    idf_table: &IdfTable<N>,
    config: &TfIdfConfig,
) -> Result<TfIdfTable<N>>
where
    N: Weight,
    S: AsRef<str>,
{
    check_shape(vocabulary, corpus.len(), tf_table, idf_table).inspect_err(|err| {
        warn!(%err, "combiner input rejected");
    })?;

    let rows = if config.use_parallel(corpus.len()) {
        let tf_rows: Vec<&IndexMap<String, N>> = tf_table.iter().map(|(_, row)| row).collect();
        tf_rows
            .par_iter()
            .map(|tf_row| tfidf_row(vocabulary, tf_row, idf_table))
            .collect::<Vec<_>>()
    } else {
        tf_table
            .iter()
            .map(|(_, tf_row)| tfidf_row(vocabulary, tf_row, idf_table))
            .collect::<Vec<_>>()
    };
    debug!(doc_num = rows.len(), vocab_size = vocabulary.len(), "combined tf-idf");
    Ok(WeightTable::from_rows(rows))
}

fn check_shape<N>(
    vocabulary: &Vocabulary,
    doc_num: usize,
    tf_table: &TermFrequencyTable<N>,
    idf_table: &IdfTable<N>,
) -> Result<()> {
    if tf_table.doc_num() != doc_num {
        return Err(TfIdfError::ShapeMismatch(format!(
            "tf table has {} rows for {} documents",
            tf_table.doc_num(),
            doc_num
        )));
    }
    // 長さが同じで語彙を全部含むならキー集合は一致
    if idf_table.len() != vocabulary.len() {
        return Err(TfIdfError::ShapeMismatch(format!(
            "idf table has {} terms, vocabulary has {}",
            idf_table.len(),
            vocabulary.len()
        )));
    }
    if let Some(term) = vocabulary.iter().find(|term| !idf_table.contains(term)) {
        return Err(TfIdfError::ShapeMismatch(format!("idf table lacks term {term:?}")));
    }
    for (document, row) in tf_table.iter() {
        if row.len() != vocabulary.len() {
            return Err(TfIdfError::ShapeMismatch(format!(
                "tf row {document} has {} terms, vocabulary has {}",
                row.len(),
                vocabulary.len()
            )));
        }
        if let Some(term) = vocabulary.iter().find(|term| !row.contains_key(*term)) {
            return Err(TfIdfError::ShapeMismatch(format!(
                "tf row {document} lacks term {term:?}"
            )));
        }
    }
    Ok(())
}

/// Caller must have passed `check_shape`
fn tfidf_row<N>(
    vocabulary: &Vocabulary,
    tf_row: &IndexMap<String, N>,
    idf_table: &IdfTable<N>,
) -> IndexMap<String, N>
where
    N: Weight,
{
    vocabulary
        .iter()
        .map(|term| (term.to_owned(), tf_row[term] * idf_table.weight_of(term)))
        .collect()
}
