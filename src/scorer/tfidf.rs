use num::Float;

use super::corpus::Corpus;
use super::document::Document;

/// A TF-IDF calculation engine producing dense rows over a fixed vocabulary.
///
/// `N` is the score type the rows are emitted in (e.g. `f32`, `f64`).
/// Implementing this trait plugs a different weighting strategy into
/// [`Corpus::tfidf_matrix`]; [`DefaultTfIdfEngine`] performs the textbook
/// calculation.
pub trait TfIdfEngine<N>
where
    N: Float,
{
    /// IDF row over `vocab`.
    /// Entries with no defined IDF (a term no document contains, or an empty
    /// corpus) take weight zero instead of failing the row.
    fn idf_vec(corpus: &Corpus, vocab: &[String]) -> Vec<N>;

    /// TF row for `document` over `vocab`
    fn tf_vec(document: &Document, vocab: &[String]) -> Vec<N>;

    /// TF-IDF row: the element-wise product of [`TfIdfEngine::tf_vec`] and
    /// [`TfIdfEngine::idf_vec`]
    fn tfidf_vec(document: &Document, corpus: &Corpus, vocab: &[String]) -> Vec<N> {
        Self::tf_vec(document, vocab)
            .into_iter()
            .zip(Self::idf_vec(corpus, vocab))
            .map(|(tf, idf)| tf * idf)
            .collect()
    }
}

/// The default TF-IDF engine: relative term frequency times
/// `log10(doc_num / document_frequency)`, computed in f64 and narrowed to
/// `N` at the edge.
#[derive(Debug, Default)]
pub struct DefaultTfIdfEngine;

impl DefaultTfIdfEngine {
    pub fn new() -> Self {
        DefaultTfIdfEngine
    }
}

impl<N> TfIdfEngine<N> for DefaultTfIdfEngine
where
    N: Float,
{
    fn idf_vec(corpus: &Corpus, vocab: &[String]) -> Vec<N> {
        let doc_num = corpus.doc_num() as f64;
        vocab
            .iter()
            .map(|term| {
                let df = corpus.document_frequency(term);
                if df == 0 {
                    return N::zero();
                }
                let idf = doc_num.log10() - (df as f64).log10();
                N::from(idf).unwrap_or_else(N::zero)
            })
            .collect()
    }

    fn tf_vec(document: &Document, vocab: &[String]) -> Vec<N> {
        vocab
            .iter()
            .map(|term| {
                N::from(document.term_frequency(term)).unwrap_or_else(N::zero)
            })
            .collect()
    }
}
