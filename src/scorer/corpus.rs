use indexmap::IndexSet;
use num::Float;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use super::document::Document;
use super::tfidf::TfIdfEngine;

/// A collection of documents, the base data for document-level statistics
/// (DF and IDF). Element order never affects any score.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Corpus {
    documents: Vec<Document>,
}

impl Corpus {
    /// Create an empty corpus
    pub fn new() -> Self {
        Corpus {
            documents: Vec::new(),
        }
    }

    /// Add a document to the corpus
    #[inline]
    pub fn add_document(&mut self, document: Document) -> &mut Self {
        self.documents.push(document);
        self
    }

    /// Get the number of documents in the corpus
    #[inline]
    pub fn doc_num(&self) -> usize {
        self.documents.len()
    }

    /// Returns true if the corpus holds no documents
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Iterate over the documents
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Document> {
        self.documents.iter()
    }

    /// Get the documents as a slice
    #[inline]
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Count the documents whose term frequency of `term` is above zero.
    /// Total: an empty corpus counts 0.
    pub fn document_frequency(&self, term: &str) -> usize {
        self.documents
            .iter()
            .filter(|document| document.term_frequency(term) > 0.0)
            .count()
    }

    /// Inverse document frequency of `term`:
    /// `log10(doc_num) - log10(document_frequency)`, the rarity weight that
    /// grows as a term appears in fewer documents.
    ///
    /// Fails with [`Error::EmptyCorpus`] over zero documents and with
    /// [`Error::TermNotInCorpus`] when no document contains the term, the two
    /// inputs that would otherwise put a zero inside the logarithms.
    pub fn inverse_document_frequency(&self, term: &str) -> Result<f64> {
        if self.documents.is_empty() {
            return Err(Error::EmptyCorpus);
        }
        let df = self.document_frequency(term);
        if df == 0 {
            return Err(Error::TermNotInCorpus(term.to_string()));
        }
        Ok((self.doc_num() as f64).log10() - (df as f64).log10())
    }

    /// TF-IDF of `term` in `document` against this corpus:
    /// `term_frequency * inverse_document_frequency`.
    ///
    /// A zero term frequency short-circuits to `Ok(0.0)` without consulting
    /// the IDF, so a document can be scored even when some of its vocabulary
    /// never made it into the corpus. When the term frequency is above zero
    /// the result is exactly the product of the two factors, and IDF errors
    /// propagate.
    pub fn tfidf(&self, term: &str, document: &Document) -> Result<f64> {
        let tf = document.term_frequency(term);
        if tf == 0.0 {
            return Ok(0.0);
        }
        Ok(tf * self.inverse_document_frequency(term)?)
    }

    /// TF-IDF with the log-dampened term frequency:
    /// `log_term_frequency * inverse_document_frequency`.
    ///
    /// No short-circuit here: the log weight itself is undefined at zero
    /// frequency, so [`Error::ZeroTermFrequency`] propagates, as do the IDF
    /// errors.
    pub fn tfidf_log(&self, term: &str, document: &Document) -> Result<f64> {
        let tf = document.log_term_frequency(term)?;
        Ok(tf * self.inverse_document_frequency(term)?)
    }

    /// TF-IDF of every term recorded in `document`, in its insertion order.
    /// Terms the corpus never saw take weight `0.0` rather than failing the
    /// whole row; the scalar [`Corpus::tfidf`] is the strict surface.
    pub fn tfidf_vector(&self, document: &Document) -> Vec<(String, f64)> {
        document
            .terms()
            .map(|(term, _)| {
                let weight = self.tfidf(term, document).unwrap_or(0.0);
                (term.to_string(), weight)
            })
            .collect()
    }

    /// Every distinct term across the corpus, sorted, so that row layouts
    /// derived from it do not depend on document or insertion order.
    pub fn vocabulary(&self) -> Vec<String> {
        let mut vocab: IndexSet<String> = IndexSet::new();
        for document in &self.documents {
            for (term, _) in document.terms() {
                vocab.insert(term.to_string());
            }
        }
        vocab.sort_unstable();
        vocab.into_iter().collect()
    }

    /// One dense TF-IDF row per document over [`Corpus::vocabulary`],
    /// computed in parallel. Row `i` corresponds to document `i`.
    pub fn tfidf_matrix<N, E>(&self) -> Vec<Vec<N>>
    where
        N: Float + Send + Sync,
        E: TfIdfEngine<N>,
    {
        let vocab = self.vocabulary();
        self.documents
            .par_iter()
            .map(|document| E::tfidf_vec(document, self, &vocab))
            .collect()
    }
}

impl FromIterator<Document> for Corpus {
    fn from_iter<I: IntoIterator<Item = Document>>(iter: I) -> Self {
        Corpus {
            documents: iter.into_iter().collect(),
        }
    }
}

impl Extend<Document> for Corpus {
    fn extend<I: IntoIterator<Item = Document>>(&mut self, iter: I) {
        self.documents.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(expected: f64, actual: f64) {
        assert!(
            (expected - actual).abs() <= 0.01,
            "expected {expected}, got {actual}"
        );
    }

    fn first_document() -> Document {
        [("this", 1), ("is", 1), ("a", 2), ("sample", 1)]
            .into_iter()
            .collect()
    }

    fn second_document() -> Document {
        [("this", 1), ("is", 1), ("another", 2), ("example", 3)]
            .into_iter()
            .collect()
    }

    fn sample_corpus() -> Corpus {
        [first_document(), second_document()].into_iter().collect()
    }

    #[test]
    fn document_frequency_counts_containing_documents() {
        let corpus = sample_corpus();
        assert_eq!(corpus.document_frequency("this"), 2);
        assert_eq!(corpus.document_frequency("example"), 1);
        assert_eq!(corpus.document_frequency("missing"), 0);
    }

    #[test]
    fn document_frequency_of_empty_corpus_is_zero() {
        let corpus = Corpus::new();
        assert_eq!(corpus.document_frequency("anything"), 0);
    }

    #[test]
    fn document_frequency_ignores_zero_count_terms() {
        let mut ghost_only = Document::new();
        ghost_only.add_term_n("ghost", 0);
        let corpus: Corpus = [ghost_only].into_iter().collect();

        assert_eq!(corpus.document_frequency("ghost"), 0);
    }

    #[test]
    fn document_frequency_never_decreases_as_documents_are_added() {
        let mut corpus = Corpus::new();
        let mut previous = corpus.document_frequency("this");
        for document in [first_document(), second_document(), first_document()] {
            corpus.add_document(document);
            let current = corpus.document_frequency("this");
            assert!(current >= previous);
            previous = current;
        }
    }

    #[test]
    fn idf_is_zero_when_term_appears_everywhere() {
        let corpus = sample_corpus();
        assert_eq!(corpus.inverse_document_frequency("this").unwrap(), 0.0);
    }

    #[test]
    fn idf_matches_reference_value() {
        let corpus = sample_corpus();
        assert_close(
            0.301,
            corpus.inverse_document_frequency("example").unwrap(),
        );
    }

    #[test]
    fn idf_of_absent_term_is_an_error() {
        let corpus = sample_corpus();
        assert_eq!(
            corpus.inverse_document_frequency("missing"),
            Err(Error::TermNotInCorpus("missing".to_string()))
        );
    }

    #[test]
    fn idf_of_empty_corpus_is_an_error() {
        let corpus = Corpus::new();
        assert_eq!(
            corpus.inverse_document_frequency("anything"),
            Err(Error::EmptyCorpus)
        );
    }

    #[test]
    fn reference_scores_match() {
        let first = first_document();
        let second = second_document();
        let corpus = sample_corpus();

        assert_close(0.2, first.term_frequency("this"));
        assert_close(0.14, second.term_frequency("this"));
        assert_close(0.0, corpus.inverse_document_frequency("this").unwrap());
        assert_close(0.0, corpus.tfidf("this", &first).unwrap());
        assert_close(0.0, corpus.tfidf("this", &second).unwrap());

        assert_close(0.0, first.term_frequency("example"));
        assert_close(0.429, second.term_frequency("example"));
        assert_close(0.301, corpus.inverse_document_frequency("example").unwrap());
        assert_close(0.0, corpus.tfidf("example", &first).unwrap());
        assert_close(0.129, corpus.tfidf("example", &second).unwrap());
    }

    #[test]
    fn tfidf_is_exactly_the_product_of_its_factors() {
        let second = second_document();
        let corpus = sample_corpus();

        let tf = second.term_frequency("example");
        let idf = corpus.inverse_document_frequency("example").unwrap();
        assert_eq!(corpus.tfidf("example", &second).unwrap(), tf * idf);
    }

    #[test]
    fn tfidf_of_absent_term_short_circuits_to_zero() {
        let first = first_document();
        let corpus = sample_corpus();

        // "novel" is in neither the document nor the corpus: the IDF alone
        // would be an error, but the zero frequency wins
        assert_eq!(corpus.tfidf("novel", &first), Ok(0.0));
    }

    #[test]
    fn tfidf_log_matches_formula() {
        let second = second_document();
        let corpus = sample_corpus();

        let expected = (1.0 + second.term_frequency("example").log10())
            * corpus.inverse_document_frequency("example").unwrap();
        assert_close(expected, corpus.tfidf_log("example", &second).unwrap());
    }

    #[test]
    fn tfidf_log_propagates_zero_frequency_error() {
        let first = first_document();
        let corpus = sample_corpus();

        assert_eq!(
            corpus.tfidf_log("example", &first),
            Err(Error::ZeroTermFrequency("example".to_string()))
        );
    }

    #[test]
    fn tfidf_vector_zeroes_terms_unknown_to_the_corpus() {
        let corpus = sample_corpus();
        let mut external = Document::new();
        external.add_terms(&["example", "novel"]);

        let scores = corpus.tfidf_vector(&external);
        let novel = scores.iter().find(|(term, _)| term == "novel").unwrap();
        let example = scores.iter().find(|(term, _)| term == "example").unwrap();

        assert_eq!(novel.1, 0.0);
        assert!(example.1 > 0.0);
    }

    #[test]
    fn scores_do_not_depend_on_document_order() {
        let corpus = sample_corpus();
        let reversed: Corpus = [second_document(), first_document()]
            .into_iter()
            .collect();

        for term in ["this", "is", "a", "another", "example", "sample"] {
            assert_eq!(
                corpus.document_frequency(term),
                reversed.document_frequency(term)
            );
            assert_eq!(
                corpus.inverse_document_frequency(term),
                reversed.inverse_document_frequency(term)
            );
        }
        assert_eq!(corpus.vocabulary(), reversed.vocabulary());
    }

    #[test]
    fn vocabulary_is_sorted_and_distinct() {
        let corpus = sample_corpus();
        assert_eq!(
            corpus.vocabulary(),
            vec!["a", "another", "example", "is", "sample", "this"]
        );
    }

    #[test]
    fn repeated_calls_yield_identical_results() {
        let second = second_document();
        let corpus = sample_corpus();

        assert_eq!(
            corpus.tfidf("example", &second),
            corpus.tfidf("example", &second)
        );
        assert_eq!(
            corpus.tfidf_log("example", &second),
            corpus.tfidf_log("example", &second)
        );
    }

    #[test]
    fn serde_round_trip_preserves_documents() {
        let corpus = sample_corpus();
        let json = serde_json::to_string(&corpus).unwrap();
        let restored: Corpus = serde_json::from_str(&json).unwrap();

        assert_eq!(corpus, restored);
    }
}
