#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Log-dampened term frequency of a term whose plain term frequency is
    /// zero. Covers absent terms, terms recorded with a zero count, and
    /// documents with a zero total count: `log10(0)` has no value.
    #[error("log term frequency is undefined: `{0}` has zero term frequency")]
    ZeroTermFrequency(String),

    /// Inverse document frequency of a term that no document in the corpus
    /// contains. The document frequency is zero, so the quotient inside the
    /// logarithm is undefined.
    #[error("inverse document frequency is undefined: no document contains `{0}`")]
    TermNotInCorpus(String),

    /// Corpus-level statistics requested over zero documents.
    #[error("corpus contains no documents")]
    EmptyCorpus,
}

pub type Result<T> = core::result::Result<T, Error>;
