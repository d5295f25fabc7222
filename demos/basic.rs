use tf_idf_scorer::{Corpus, DefaultTfIdfEngine, Document, TfIdfEngine};

fn main() {
    // make word-count tables
    let mut first = Document::new();
    first.add_terms(&["this", "is", "a", "a", "sample"]);
    let mut second = Document::new();
    second.add_terms(&[
        "this", "is", "another", "another", "example", "example", "example",
    ]);

    // build corpus
    let corpus: Corpus = [first.clone(), second.clone()].into_iter().collect();

    // scalar scores
    println!("tf(this, doc1)        = {}", first.term_frequency("this"));
    println!("tf(example, doc2)     = {}", second.term_frequency("example"));
    println!("df(example)           = {}", corpus.document_frequency("example"));
    println!(
        "idf(example)          = {:?}",
        corpus.inverse_document_frequency("example")
    );
    println!("tfidf(example, doc2)  = {:?}", corpus.tfidf("example", &second));
    println!(
        "tfidf_log(example, doc2) = {:?}",
        corpus.tfidf_log("example", &second)
    );

    // undefined inputs come back as typed errors
    println!(
        "idf(rust)             = {:?}",
        corpus.inverse_document_frequency("rust")
    );
    println!(
        "log_tf(rust, doc1)    = {:?}",
        first.log_term_frequency("rust")
    );

    // bulk surface
    let vocab = corpus.vocabulary();
    let row: Vec<f64> = DefaultTfIdfEngine::tfidf_vec(&second, &corpus, &vocab);
    let matrix: Vec<Vec<f32>> = corpus.tfidf_matrix::<f32, DefaultTfIdfEngine>();
    println!("vocabulary            = {vocab:?}");
    println!("tfidf row (doc2)      = {row:?}");
    println!("tfidf matrix (f32)    = {matrix:?}");
}
