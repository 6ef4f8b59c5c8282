use crate::index::{Corpus, TermStats};
use std::collections::BTreeSet;

/// Union of every term observed in any document of a corpus.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    terms: BTreeSet<String>,
}

impl Vocabulary {
    pub fn new() -> Self { Self::default() }

    pub fn insert_terms<I>(&mut self, terms: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for term in terms {
            let term = term.as_ref();
            if !self.terms.contains(term) {
                self.terms.insert(term.to_string());
            }
        }
    }

    pub fn contains(&self, term: &str) -> bool { self.terms.contains(term) }

    pub fn len(&self) -> usize { self.terms.len() }

    pub fn is_empty(&self) -> bool { self.terms.is_empty() }

    /// Terms in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &str> { self.terms.iter().map(String::as_str) }
}

/// Give every document an entry for every vocabulary term. Missing terms get zeroed stats and
/// existing entries are untouched, so repeated calls change nothing.
pub fn unify(corpus: &mut Corpus) {
    let (documents, vocabulary) = corpus.parts_mut();
    let mut inserted = 0usize;
    for doc in documents.iter_mut() {
        for term in vocabulary.iter() {
            if !doc.terms.contains_key(term) {
                doc.terms.insert(term.to_string(), TermStats::zero());
                inserted += 1;
            }
        }
    }
    tracing::debug!(inserted, vocabulary = vocabulary.len(), "vocabulary unified");
}

/// Frozen lexicographic enumeration of a vocabulary. Index `i` names the same term in every
/// vector extracted against the same order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabularyOrder {
    terms: Vec<String>,
}

impl VocabularyOrder {
    pub fn new(vocabulary: &Vocabulary) -> Self {
        Self { terms: vocabulary.iter().map(str::to_string).collect() }
    }

    pub fn terms(&self) -> &[String] { &self.terms }

    pub fn len(&self) -> usize { self.terms.len() }

    pub fn is_empty(&self) -> bool { self.terms.is_empty() }

    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.terms.binary_search_by(|t| t.as_str().cmp(term)).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_is_lexicographic() {
        let mut v = Vocabulary::new();
        v.insert_terms(["pear", "apple", "fig", "apple"]);
        let order = VocabularyOrder::new(&v);
        assert_eq!(order.terms(), ["apple", "fig", "pear"]);
        assert_eq!(order.index_of("fig"), Some(1));
        assert_eq!(order.index_of("kiwi"), None);
    }
}
