use std::cmp::Ordering;

use indexmap::{IndexMap, IndexSet};
use num::{Float, FromPrimitive};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TfIdfError};

/// Numeric type a table can be computed in.
///
/// Blanket implemented, `f64` and `f32` both qualify.
pub trait Weight: Float + FromPrimitive + Send + Sync {}

impl<T> Weight for T where T: Float + FromPrimitive + Send + Sync {}

/// count を N に変換する
#[inline]
pub(crate) fn weight_from_count<N: Weight>(count: usize) -> Result<N> {
    N::from_usize(count).ok_or(TfIdfError::NumericConversion(count))
}

/// Vocabulary
/// The distinct tokens of a corpus.
///
/// Terms keep their first-occurrence order so every table built from the same
/// vocabulary iterates identically. Equality ignores that order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    terms: IndexSet<String>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self {
            terms: IndexSet::new(),
        }
    }

    /// Add a term
    /// Returns `false` if it was already present
    #[inline]
    pub fn insert(&mut self, term: &str) -> bool {
        if self.terms.contains(term) {
            return false;
        }
        self.terms.insert(term.to_owned())
    }

    #[inline]
    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains(term)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Terms in first-occurrence order
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.terms.iter().map(String::as_str)
    }

    /// Position of a term in iteration order
    #[inline]
    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.terms.get_index_of(term)
    }
}

impl<S> FromIterator<S> for Vocabulary
where
    S: AsRef<str>,
{
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut vocabulary = Vocabulary::new();
        for term in iter {
            vocabulary.insert(term.as_ref());
        }
        vocabulary
    }
}

/// Dense per-document weight table.
///
/// Row `i` belongs to document `i` of the corpus and holds one entry per
/// vocabulary term. Used for both term frequencies and TF-IDF weights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightTable<N> {
    rows: Vec<IndexMap<String, N>>,
}

/// Term frequency per document
pub type TermFrequencyTable<N = f64> = WeightTable<N>;

/// TF-IDF weight per document
pub type TfIdfTable<N = f64> = WeightTable<N>;

impl<N> WeightTable<N> {
    /// Build a table from rows already indexed by document position
    pub fn from_rows(rows: Vec<IndexMap<String, N>>) -> Self {
        Self { rows }
    }

    /// Number of documents (rows)
    #[inline]
    pub fn doc_num(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[inline]
    pub fn row(&self, document: usize) -> Option<&IndexMap<String, N>> {
        self.rows.get(document)
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &IndexMap<String, N>)> + '_ {
        self.rows.iter().enumerate()
    }

    pub fn into_rows(self) -> Vec<IndexMap<String, N>> {
        self.rows
    }
}

impl<N> WeightTable<N>
where
    N: Weight,
{
    /// Weight of `term` in `document`
    /// `None` if either is out of the table
    #[inline]
    pub fn get(&self, document: usize, term: &str) -> Option<N> {
        self.rows.get(document)?.get(term).copied()
    }

    /// Sum of one document's row
    pub fn row_sum(&self, document: usize) -> Option<N> {
        let row = self.rows.get(document)?;
        Some(row.values().fold(N::zero(), |acc, &w| acc + w))
    }

    /// The `k` heaviest terms of a document, descending.
    /// Equal weights keep vocabulary order.
    pub fn top_terms(&self, document: usize, k: usize) -> Vec<(&str, N)> {
        let Some(row) = self.rows.get(document) else {
            return Vec::new();
        };
        let mut terms: Vec<(&str, N)> = row.iter().map(|(t, &w)| (t.as_str(), w)).collect();
        // 安定ソートなので同値は語彙順のまま
        terms.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        terms.truncate(k);
        terms
    }
}

/// Inverse document frequency of each vocabulary term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdfTable<N = f64> {
    weights: IndexMap<String, N>,
    /// corpus size the table was computed against
    doc_num: usize,
}

impl<N> IdfTable<N> {
    pub fn from_weights(weights: IndexMap<String, N>, doc_num: usize) -> Self {
        Self { weights, doc_num }
    }

    #[inline]
    pub fn doc_num(&self) -> usize {
        self.doc_num
    }

    /// Number of terms
    #[inline]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    #[inline]
    pub fn contains(&self, term: &str) -> bool {
        self.weights.contains_key(term)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &N)> + '_ {
        self.weights.iter().map(|(t, w)| (t.as_str(), w))
    }
}

impl<N> IdfTable<N>
where
    N: Weight,
{
    #[inline]
    pub fn get(&self, term: &str) -> Option<N> {
        self.weights.get(term).copied()
    }

    /// Weight of a term already known to be present
    #[inline]
    pub(crate) fn weight_of(&self, term: &str) -> N {
        self.weights[term]
    }
}
