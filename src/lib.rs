/// This crate computes dense TF-IDF tables over a small in-memory corpus.
pub mod vectorizer;
pub mod config;
pub mod error;

/// TF-IDF Pipeline
/// Runs the four steps in order and returns every table they produce.
///
/// - Vocabulary: distinct tokens of the corpus
/// - TF: per document, `occurrences / token_count` for every vocabulary term
/// - IDF: per term, `log10(doc_num / doc_freq)`
/// - TF-IDF: elementwise `tf * idf`
///
/// Documents are split on the single space character only. Consecutive spaces
/// produce empty-string tokens that are counted like any other token.
pub use vectorizer::{compute_tfidf, compute_tfidf_with, TfIdfReport};

/// Pipeline Steps
/// Each step is a free function over the corpus and the outputs of earlier steps,
/// so callers may run them separately or feed in their own vocabulary.
pub use vectorizer::vocabulary::build_vocabulary;
pub use vectorizer::tf::{compute_term_frequency, compute_term_frequency_with};
pub use vectorizer::idf::{compute_inverse_document_frequency, compute_inverse_document_frequency_with};
pub use vectorizer::tfidf::{combine, combine_with};

/// Tables
/// `WeightTable` is the dense per-document table shared by TF and TF-IDF.
/// Every row carries exactly the vocabulary as keys, in vocabulary order.
///
/// # Serialization
/// Supported for every table, in memory only.
pub use vectorizer::table::{IdfTable, TermFrequencyTable, TfIdfTable, Vocabulary, Weight, WeightTable};

/// Execution Settings
/// Chooses between sequential and rayon-parallel evaluation.
/// Results are identical either way.
pub use config::TfIdfConfig;

/// Error Taxonomy
pub use error::{Result, TfIdfError};
