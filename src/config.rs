use serde::{Deserialize, Serialize};

/// Execution settings for the pipeline.
///
/// These never change the computed values, only how rows and terms are scheduled.
///
/// # Examples
/// ```
/// use tf_idf_table::TfIdfConfig;
/// let config = TfIdfConfig::parallel();
/// assert!(config.use_parallel(10_000));
/// assert!(!config.use_parallel(3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TfIdfConfig {
    /// compute TF rows, IDF terms and TF-IDF rows on the rayon pool
    pub parallel: bool,
    /// corpora with fewer documents than this run every step sequentially
    /// counted in documents for all steps, including IDF which splits work by term
    pub parallel_min_docs: usize,
}

impl Default for TfIdfConfig {
    fn default() -> Self {
        Self {
            parallel: false,
            parallel_min_docs: 256,
        }
    }
}

impl TfIdfConfig {
    /// Sequential configuration
    pub fn sequential() -> Self {
        Self::default()
    }

    /// Parallel configuration with the default threshold
    pub fn parallel() -> Self {
        Self {
            parallel: true,
            ..Self::default()
        }
    }

    pub fn with_parallel_min_docs(mut self, min_docs: usize) -> Self {
        self.parallel_min_docs = min_docs;
        self
    }

    /// Whether a corpus of `doc_num` documents goes through rayon
    ///
    /// Every step asks with the corpus size. IDF work grows with
    /// `doc_num * vocab_size`, and vocabulary size follows the document count.
    #[inline]
    pub fn use_parallel(&self, doc_num: usize) -> bool {
        self.parallel && doc_num >= self.parallel_min_docs
    }
}
