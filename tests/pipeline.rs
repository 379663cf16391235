use tf_idf_table::{
    build_vocabulary, combine, compute_inverse_document_frequency, compute_term_frequency,
    compute_tfidf, compute_tfidf_with, IdfTable, TermFrequencyTable, TfIdfConfig, TfIdfError,
    TfIdfReport,
};

const EPS: f64 = 1e-9;

fn assert_close(left: f64, right: f64) {
    assert!((left - right).abs() < EPS, "{left} != {right}");
}

#[test]
fn two_document_scenario() {
    let report: TfIdfReport = compute_tfidf(&["a b a", "b c"]).unwrap();

    let expected: tf_idf_table::Vocabulary = ["a", "b", "c"].into_iter().collect();
    assert_eq!(report.vocabulary, expected);

    assert_close(report.tf.get(0, "a").unwrap(), 2.0 / 3.0);
    assert_close(report.tf.get(0, "b").unwrap(), 1.0 / 3.0);
    assert_eq!(report.tf.get(0, "c"), Some(0.0));
    assert_eq!(report.tf.get(1, "a"), Some(0.0));
    assert_close(report.tf.get(1, "b").unwrap(), 0.5);
    assert_close(report.tf.get(1, "c").unwrap(), 0.5);

    assert_close(report.idf.get("a").unwrap(), 2f64.log10());
    assert!((report.idf.get("a").unwrap() - 0.30103).abs() < 1e-5);
    assert_eq!(report.idf.get("b"), Some(0.0));
    assert_close(report.idf.get("c").unwrap(), 2f64.log10());

    assert!((report.tfidf.get(0, "a").unwrap() - 0.20069).abs() < 1e-5);
    assert_eq!(report.tfidf.get(1, "b"), Some(0.0));
}

#[test]
fn steps_compose_like_the_pipeline() {
    let corpus = ["This here is doc1", "and this here is another doc called doc2"];
    let vocabulary = build_vocabulary(&corpus);
    let tf: TermFrequencyTable = compute_term_frequency(&vocabulary, &corpus).unwrap();
    let idf: IdfTable = compute_inverse_document_frequency(&vocabulary, &corpus).unwrap();
    let tfidf = combine(&vocabulary, &corpus, &tf, &idf).unwrap();

    let report: TfIdfReport = compute_tfidf(&corpus).unwrap();
    assert_eq!(report.tf, tf);
    assert_eq!(report.idf, idf);
    assert_eq!(report.tfidf, tfidf);
    // case sensitive: "This" and "this" are different terms
    assert!(report.idf.get("This").unwrap() > 0.0);
    assert_ne!(report.tf, report.tfidf);
}

#[test]
fn shape_invariant_holds() {
    let corpus = ["red green", "green blue blue", "blue", "red red red yellow"];
    let report: TfIdfReport = compute_tfidf(&corpus).unwrap();
    let vocab_size = report.vocabulary.len();

    assert_eq!(report.idf.len(), vocab_size);
    assert_eq!(report.tf.doc_num(), corpus.len());
    assert_eq!(report.tfidf.doc_num(), corpus.len());
    for document in 0..corpus.len() {
        let tf_row = report.tf.row(document).unwrap();
        let tfidf_row = report.tfidf.row(document).unwrap();
        assert_eq!(tf_row.len(), vocab_size);
        assert_eq!(tfidf_row.len(), vocab_size);
        for term in report.vocabulary.iter() {
            assert!(tf_row.contains_key(term));
            assert!(tfidf_row.contains_key(term));
            assert!(report.idf.contains(term));
        }
    }
}

#[test]
fn tf_rows_are_normalized() {
    let corpus = ["x", "x y", "x y z z", "  lead and trail  "];
    let report: TfIdfReport = compute_tfidf(&corpus).unwrap();
    for document in 0..corpus.len() {
        assert_close(report.tf.row_sum(document).unwrap(), 1.0);
    }
}

#[test]
fn tfidf_is_exact_product() {
    let corpus = ["one two three", "two three three", "three four"];
    let report: TfIdfReport = compute_tfidf(&corpus).unwrap();
    for (document, row) in report.tfidf.iter() {
        for (term, &weight) in row {
            let expected = report.tf.get(document, term).unwrap() * report.idf.get(term).unwrap();
            assert_eq!(weight, expected);
        }
    }
}

#[test]
fn runs_are_deterministic() {
    let corpus: Vec<String> = (0..300)
        .map(|i| format!("w{} w{} w{} common", i % 13, i % 29, i % 7))
        .collect();
    let first: TfIdfReport = compute_tfidf(&corpus).unwrap();
    let second: TfIdfReport = compute_tfidf(&corpus).unwrap();
    assert_eq!(first, second);

    let parallel: TfIdfReport = compute_tfidf_with(&corpus, &TfIdfConfig::parallel()).unwrap();
    assert_eq!(first, parallel);
    assert!(first.vocabulary.iter().eq(parallel.vocabulary.iter()));
}

#[test]
fn empty_corpus_is_an_error() {
    let corpus: Vec<&str> = Vec::new();
    let err = compute_tfidf::<f64, _>(&corpus).unwrap_err();
    assert_eq!(err, TfIdfError::EmptyCorpus);
}

#[test]
fn empty_string_document_is_one_empty_token() {
    let report: TfIdfReport = compute_tfidf(&["", "a b"]).unwrap();
    assert_eq!(report.tf.get(0, ""), Some(1.0));
    assert_close(report.idf.get("").unwrap(), 2f64.log10());
}

#[test]
fn single_space_document_is_not_empty() {
    let report: TfIdfReport = compute_tfidf(&[" "]).unwrap();
    assert_eq!(report.vocabulary.len(), 1);
    assert_eq!(report.tf.get(0, ""), Some(1.0));
    assert_eq!(report.idf.get(""), Some(0.0));
    assert_eq!(report.tfidf.get(0, ""), Some(0.0));
}

#[test]
fn top_terms_rank_discriminative_terms_first() {
    let corpus = ["rust fast rust safe", "rust safe", "rust go"];
    let report: TfIdfReport = compute_tfidf(&corpus).unwrap();
    let top = report.tfidf.top_terms(0, 2);
    // rust は全文書にあるので idf = 0
    assert_eq!(top.iter().map(|(term, _)| *term).collect::<Vec<_>>(), vec!["fast", "safe"]);
    assert!(top[0].1 > top[1].1);
    assert_eq!(report.tfidf.get(0, "rust"), Some(0.0));
}

#[test]
fn single_precision_pipeline() {
    let report: TfIdfReport<f32> = compute_tfidf(&["a b a", "b c"]).unwrap();
    assert!((report.tfidf.get(0, "a").unwrap() - 0.20069f32).abs() < 1e-4);
}
