use docsim_core::{compare, cosine_similarity, find_similar, Corpus, Error, Normalizer, SimilarityMode};

fn approx(a: f64, b: f64) -> bool { (a - b).abs() < 1e-12 }

fn processed(texts: &[&str]) -> Corpus {
    let n = Normalizer::new(true, ["."], Vec::<String>::new()).unwrap();
    let sources: Vec<(String, &str)> = texts.iter().enumerate().map(|(i, t)| (format!("doc{i}"), *t)).collect();
    let mut c = Corpus::from_sources(sources, &n);
    c.process().unwrap();
    c
}

#[test]
fn cosine_of_vector_with_itself_is_one() {
    for v in [vec![1.0, 2.0, 3.0], vec![0.0, 0.5], vec![1e-3, 7.0, 0.0, 2.5]] {
        assert!(approx(cosine_similarity(&v, &v).unwrap(), 1.0));
    }
}

#[test]
fn cosine_is_symmetric() {
    let a = [0.3, 0.0, 1.2, 4.0];
    let b = [1.0, 2.0, 0.0, 0.5];
    assert_eq!(cosine_similarity(&a, &b).unwrap(), cosine_similarity(&b, &a).unwrap());
}

#[test]
fn orthogonal_vectors_score_zero() {
    assert_eq!(cosine_similarity(&[1.0, 0.0], &[0.0, 3.0]).unwrap(), 0.0);
}

#[test]
fn mismatched_vectors_are_rejected() {
    let err = cosine_similarity(&[1.0, 2.0], &[1.0]).unwrap_err();
    assert!(matches!(err, Error::DimensionMismatch { left: 2, right: 1 }));
    assert_eq!(err.to_string(), "cannot compare vectors of length 2 and 1");
}

#[test]
fn identical_documents_share_everything() {
    let c = processed(&["red green blue", "blue green red", "other"]);
    let shared = find_similar(&c.documents()[0], &c.documents()[1]);
    assert_eq!(shared.terms, vec!["blue", "green", "red"]);
    assert_eq!(shared.a, vec![1.0, 1.0, 1.0]);
    assert_eq!(shared.penalty, 0.0);
    assert!(approx(shared.score(), 1.0));
}

#[test]
fn disjoint_documents_are_fully_penalized() {
    let c = processed(&["red green", "blue yellow"]);
    let shared = find_similar(&c.documents()[0], &c.documents()[1]);
    assert!(shared.terms.is_empty());
    assert!(approx(shared.penalty, 1.0));
    assert!(approx(shared.score(), -1.0));
}

#[test]
fn back_filled_terms_are_not_shared() {
    let c = processed(&["red green", "red blue"]);
    let d0 = &c.documents()[0];
    assert!(d0.terms.contains_key("blue"));
    let shared = find_similar(d0, &c.documents()[1]);
    assert_eq!(shared.terms, vec!["red"]);
    // two unshared terms over 2 + 2 nonzero terms
    assert!(approx(shared.penalty, 0.5));
    assert!(approx(shared.score(), 0.5));
}

#[test]
fn penalty_grows_with_unshared_terms() {
    let base = "alpha beta alpha";
    let mut last = -1.0;
    let mut other = String::from("alpha beta alpha");
    for extra in ["c1", "c2", "c3", "c4", "c5"] {
        other.push(' ');
        other.push_str(extra);
        let c = processed(&[base, other.as_str()]);
        let shared = find_similar(&c.documents()[0], &c.documents()[1]);
        assert_eq!(shared.terms, vec!["alpha", "beta"]);
        assert!(shared.penalty >= last);
        last = shared.penalty;
    }
    assert!(last > 0.0);
}

#[test]
fn compare_supports_both_modes() {
    let c = processed(&["cat sat", "dog sat", "cat cat"]);
    let order = c.vocabulary_order().unwrap();
    let docs = c.documents();
    let dense = compare(&docs[0], &docs[2], &order, SimilarityMode::Dense).unwrap();
    assert!(dense > 0.0 && dense <= 1.0);
    let sparse = compare(&docs[0], &docs[1], &order, SimilarityMode::Sparse).unwrap();
    assert!(approx(sparse, find_similar(&docs[0], &docs[1]).score()));
}
