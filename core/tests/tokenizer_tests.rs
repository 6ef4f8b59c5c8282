use docsim_core::tokenizer::{default_punctuation, default_stopwords, Normalizer};

#[test]
fn it_lowercases_and_strips_punctuation() {
    let n = Normalizer::new(true, default_punctuation(), Vec::<String>::new()).unwrap();
    let words = n.normalize("Running, RUNNERS run! (The café's menu...)");
    assert_eq!(words, vec!["running", "runners", "run", "the", "café", "s", "menu"]);
}

#[test]
fn it_filters_stopwords() {
    let n = Normalizer::new(true, default_punctuation(), default_stopwords()).unwrap();
    let words = n.normalize("The quick brown fox and the lazy dog");
    assert!(!words.contains(&"the".to_string()));
    assert!(!words.contains(&"and".to_string()));
    assert_eq!(words, vec!["quick", "brown", "fox", "lazy", "dog"]);
}

#[test]
fn case_is_kept_without_lowercase() {
    let n = Normalizer::new(false, ["."], ["the"]).unwrap();
    assert_eq!(n.normalize("The cat. the dog."), vec!["The", "cat", "dog"]);
}

#[test]
fn markers_inside_words_split_them() {
    let n = Normalizer::new(true, ["::", ":"], Vec::<String>::new()).unwrap();
    assert_eq!(n.normalize("std::io:read"), vec!["std", "io", "read"]);
}

#[test]
fn all_stopwords_yield_nothing() {
    let n = Normalizer::default();
    assert!(n.normalize("the and of, to!").is_empty());
    assert!(n.normalize("   \n\t ").is_empty());
}
