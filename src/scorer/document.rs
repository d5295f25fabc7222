use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A single document reduced to a bag of words.
/// Keeps the occurrence count of each term and the total number of
/// occurrences, the base data for TF (Term Frequency) calculation.
///
/// # Examples
/// ```
/// use tf_idf_scorer::Document;
/// let mut document = Document::new();
/// document.add_terms(&["this", "is", "a", "a", "sample"]);
///
/// assert_eq!(document.term_count("a"), 2);
/// assert_eq!(document.term_frequency("this"), 0.2);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Document {
    term_count: IndexMap<String, u64>,
    total_term_count: u64,
}

impl Document {
    /// Create an empty document
    pub fn new() -> Self {
        Document {
            term_count: IndexMap::new(),
            total_term_count: 0,
        }
    }

    /// Record one occurrence of `term`
    #[inline]
    pub fn add_term(&mut self, term: &str) -> &mut Self {
        let count = self.term_count.entry(term.to_string()).or_insert(0);
        *count += 1;
        self.total_term_count += 1;
        self
    }

    /// Record `n` occurrences of `term` at once.
    /// `n == 0` still records the term, with a zero count.
    #[inline]
    pub fn add_term_n(&mut self, term: &str, n: u64) -> &mut Self {
        let count = self.term_count.entry(term.to_string()).or_insert(0);
        *count += n;
        self.total_term_count += n;
        self
    }

    /// Record one occurrence per element of `terms`
    #[inline]
    pub fn add_terms<T>(&mut self, terms: &[T]) -> &mut Self
    where
        T: AsRef<str>,
    {
        for term in terms {
            self.add_term(term.as_ref());
        }
        self
    }

    /// Get the occurrence count of `term`, 0 if it was never recorded
    #[inline]
    pub fn term_count(&self, term: &str) -> u64 {
        self.term_count.get(term).copied().unwrap_or(0)
    }

    /// Get the total number of occurrences across all terms
    #[inline]
    pub fn total_term_count(&self) -> u64 {
        self.total_term_count
    }

    /// Check whether `term` was recorded, zero counts included
    #[inline]
    pub fn contains_term(&self, term: &str) -> bool {
        self.term_count.contains_key(term)
    }

    /// Get the number of distinct terms
    #[inline]
    pub fn term_num(&self) -> usize {
        self.term_count.len()
    }

    /// Returns true if no term was ever recorded
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.term_count.is_empty()
    }

    /// Iterate over the recorded terms and their counts
    #[inline]
    pub fn terms(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.term_count.iter().map(|(term, &count)| (term.as_str(), count))
    }

    /// Reset all counts
    #[inline]
    pub fn clear(&mut self) {
        self.term_count.clear();
        self.total_term_count = 0;
    }

    /// Relative frequency of `term` in this document:
    /// `count(term) / total_count`.
    ///
    /// Total by construction: a document with a zero total count (empty, or
    /// holding only zero-count terms) yields `0.0` for every term, presence
    /// notwithstanding. An absent term yields exactly `0.0`.
    pub fn term_frequency(&self, term: &str) -> f64 {
        if self.total_term_count == 0 {
            return 0.0;
        }
        self.term_count(term) as f64 / self.total_term_count as f64
    }

    /// Log-dampened term frequency: `1 + log10(term_frequency)`.
    ///
    /// Fails with [`Error::ZeroTermFrequency`] when the term frequency is
    /// zero, since the logarithm has no value there.
    pub fn log_term_frequency(&self, term: &str) -> Result<f64> {
        let tf = self.term_frequency(term);
        if tf == 0.0 {
            return Err(Error::ZeroTermFrequency(term.to_string()));
        }
        Ok(1.0 + tf.log10())
    }

    /// Relative frequency of every recorded term, in insertion order.
    /// Zero-total documents yield all-zero frequencies.
    pub fn tf_vector(&self) -> Vec<(String, f64)> {
        let total = self.total_term_count as f64;
        self.term_count
            .iter()
            .map(|(term, &count)| {
                let tf = if self.total_term_count == 0 {
                    0.0
                } else {
                    count as f64 / total
                };
                (term.clone(), tf)
            })
            .collect()
    }
}

impl<S: Into<String>> FromIterator<(S, u64)> for Document {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        let mut document = Document::new();
        for (term, count) in iter {
            document.add_term_n(&term.into(), count);
        }
        document
    }
}
