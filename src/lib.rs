/// This crate is a TF-IDF calculator over in-memory word-count tables.
pub mod error;
pub mod scorer;

/// Document structure
/// A bag-of-words representation of one unit of text: a mapping from term to
/// its occurrence count, plus the cached total count.
///
/// It is the base data for TF (Term Frequency) calculation and provides the
/// construction API (adding terms or whole count tables), accessors, and the
/// per-document frequency functions:
/// - `term_frequency`: relative frequency, total over every input
/// - `log_term_frequency`: log-dampened frequency, failing on zero frequency
///
/// Counts are unsigned, so negative occurrence counts cannot be constructed.
///
/// # Serialization
/// Supported.
pub use scorer::document::Document;

/// Corpus structure
/// The collection of documents over which document-level statistics are
/// computed. Element order never affects any score.
///
/// It provides:
/// - `document_frequency`: how many documents contain a term
/// - `inverse_document_frequency`: the rarity weight, with typed errors for
///   the undefined inputs (empty corpus, term in no document)
/// - `tfidf` / `tfidf_log`: the two TF-IDF combinations
/// - `tfidf_vector` / `vocabulary` / `tfidf_matrix`: the bulk surface, with
///   the matrix sweep running one document per rayon task
///
/// # Serialization
/// Supported.
pub use scorer::corpus::Corpus;

/// TF-IDF Calculation Engine Trait
/// Defines the behavior of a TF-IDF engine producing dense score rows over a
/// fixed vocabulary, generic over the output float type.
///
/// By implementing this trait you can plug a different weighting strategy
/// into `Corpus::tfidf_matrix`. The default implementation,
/// `DefaultTfIdfEngine`, performs the textbook calculation in f64 and narrows
/// to the requested type at the edge.
pub use scorer::tfidf::{DefaultTfIdfEngine, TfIdfEngine};

/// Error taxonomy and crate-level result alias
/// Every undefined numeric situation surfaces as a typed error instead of a
/// NaN or infinity:
/// - `ZeroTermFrequency`: log weighting of a zero term frequency
/// - `TermNotInCorpus`: IDF of a term no document contains
/// - `EmptyCorpus`: IDF over zero documents
pub use error::{Error, Result};
