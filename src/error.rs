use thiserror::Error;

/// Errors raised by the TF-IDF pipeline.
///
/// Every variant aborts the computation that detected it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TfIdfError {
    /// corpus has no documents, IDF is undefined
    #[error("corpus is empty")]
    EmptyCorpus,
    /// a document produced no tokens, TF normalization is undefined
    #[error("document {document} has no tokens")]
    EmptyDocument { document: usize },
    /// a vocabulary term is not contained in any document
    #[error("term {term:?} does not occur in any document")]
    ZeroDocumentFrequency { term: String },
    /// tables handed to the combiner disagree on their key sets
    #[error("table shape mismatch: {0}")]
    ShapeMismatch(String),
    /// a document token is missing from the supplied vocabulary
    #[error("token {term:?} of document {document} is not in the vocabulary")]
    UnknownTerm { document: usize, term: String },
    /// a count could not be represented in the table's numeric type
    #[error("count {0} is not representable in the target numeric type")]
    NumericConversion(usize),
}

pub type Result<T> = std::result::Result<T, TfIdfError>;
