use crate::bow::BagOfWords;
use crate::error::{Error, Result};
use crate::idf::compute_idf;
use crate::tokenizer::Normalizer;
use crate::vector::extract_vector;
use crate::vocabulary::{unify, Vocabulary, VocabularyOrder};
use parking_lot::Mutex;
use rayon::prelude::*;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct TermStats {
    pub count: u32,
    pub tf: f64,
    /// Corpus-wide, only meaningful after an IDF pass.
    pub idf: f64,
    pub tfidf: f64,
}

impl TermStats {
    pub fn zero() -> Self { Self::default() }
}

#[derive(Debug, Clone)]
pub struct Document {
    pub name: String,
    pub terms: HashMap<String, TermStats>,
    pub total_tokens: usize,
}

impl Document {
    pub fn new(name: impl Into<String>, bow: BagOfWords) -> Self {
        Self { name: name.into(), terms: bow.terms, total_tokens: bow.total_tokens }
    }

    pub fn is_empty(&self) -> bool { self.total_tokens == 0 }

    /// Terms that actually occur in the document, skipping back-filled entries.
    pub fn nonzero_terms(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().filter(|(_, s)| s.count > 0).map(|(t, _)| t.as_str())
    }

    pub fn sorted_terms(&self) -> Vec<(&str, &TermStats)> {
        let mut terms: Vec<(&str, &TermStats)> = self.terms.iter().map(|(t, s)| (t.as_str(), s)).collect();
        terms.sort_by(|a, b| a.0.cmp(b.0));
        terms
    }
}

/// Ordered documents plus the vocabulary accumulated over all of them.
///
/// Every mutation bumps `generation`; IDF values are current only while `idf_generation`
/// matches it.
#[derive(Debug, Default)]
pub struct Corpus {
    documents: Vec<Document>,
    vocabulary: Vocabulary,
    generation: u64,
    idf_generation: Option<u64>,
}

impl Corpus {
    pub fn new() -> Self { Self::default() }

    /// Normalize and count every source on the rayon pool. Document order follows `sources`.
    pub fn from_sources<N, T>(sources: Vec<(N, T)>, normalizer: &Normalizer) -> Self
    where
        N: Into<String> + Send,
        T: AsRef<str> + Send,
    {
        let vocabulary = Mutex::new(Vocabulary::new());
        let documents: Vec<Document> = sources
            .into_par_iter()
            .map(|(name, text)| {
                let bow = BagOfWords::from_tokens(&normalizer.normalize(text.as_ref()));
                vocabulary.lock().insert_terms(bow.terms.keys());
                let doc = Document::new(name, bow);
                if doc.is_empty() {
                    tracing::warn!(document = %doc.name, "document has no tokens after normalization");
                }
                doc
            })
            .collect();
        tracing::info!(num_docs = documents.len(), "documents ingested");
        Self { generation: 1, documents, vocabulary: vocabulary.into_inner(), idf_generation: None }
    }

    pub fn add_document(&mut self, name: impl Into<String>, raw_text: &str, normalizer: &Normalizer) -> &Document {
        let doc = Document::new(name, BagOfWords::from_tokens(&normalizer.normalize(raw_text)));
        if doc.is_empty() {
            tracing::warn!(document = %doc.name, "document has no tokens after normalization");
        }
        self.push(doc)
    }

    pub fn push(&mut self, doc: Document) -> &Document {
        self.vocabulary.insert_terms(doc.nonzero_terms());
        self.generation += 1;
        self.documents.push(doc);
        &self.documents[self.documents.len() - 1]
    }

    /// Remove the first document called `name`. Terms no other document uses leave the vocabulary.
    pub fn remove_document(&mut self, name: &str) -> Option<Document> {
        let pos = self.documents.iter().position(|d| d.name == name)?;
        let removed = self.documents.remove(pos);
        let mut vocabulary = Vocabulary::new();
        for doc in &self.documents {
            vocabulary.insert_terms(doc.nonzero_terms());
        }
        for doc in &mut self.documents {
            doc.terms.retain(|term, stats| stats.count > 0 || vocabulary.contains(term));
        }
        self.vocabulary = vocabulary;
        self.generation += 1;
        Some(removed)
    }

    pub fn documents(&self) -> &[Document] { &self.documents }

    pub fn get(&self, name: &str) -> Option<&Document> { self.documents.iter().find(|d| d.name == name) }

    pub fn len(&self) -> usize { self.documents.len() }

    pub fn is_empty(&self) -> bool { self.documents.is_empty() }

    pub fn vocabulary(&self) -> &Vocabulary { &self.vocabulary }

    /// True when IDF values reflect the current set of documents.
    pub fn is_current(&self) -> bool { self.idf_generation == Some(self.generation) }

    pub(crate) fn parts_mut(&mut self) -> (&mut [Document], &Vocabulary) {
        (&mut self.documents, &self.vocabulary)
    }

    pub(crate) fn mark_current(&mut self) { self.idf_generation = Some(self.generation); }

    /// Full-corpus pass: back-fill the vocabulary into every document, then compute IDF.
    pub fn process(&mut self) -> Result<()> {
        unify(self);
        compute_idf(self)
    }

    /// Sorted enumeration of the vocabulary shared by every vector of this snapshot.
    pub fn vocabulary_order(&self) -> Result<VocabularyOrder> {
        if self.is_empty() {
            return Err(Error::EmptyCorpus);
        }
        if !self.is_current() {
            return Err(Error::StaleStatistics);
        }
        Ok(VocabularyOrder::new(&self.vocabulary))
    }

    pub fn vectors(&self) -> Result<Vec<(&str, Vec<f64>)>> {
        let order = self.vocabulary_order()?;
        Ok(self.documents.iter().map(|d| (d.name.as_str(), extract_vector(d, &order))).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> Normalizer { Normalizer::new(true, ["."], ["the"]).unwrap() }

    #[test]
    fn parallel_build_keeps_source_order() {
        let sources: Vec<(String, String)> = (0..32).map(|i| (format!("doc{i}"), format!("term{i} shared"))).collect();
        let corpus = Corpus::from_sources(sources, &plain());
        let names: Vec<&str> = corpus.documents().iter().map(|d| d.name.as_str()).collect();
        let expected: Vec<String> = (0..32).map(|i| format!("doc{i}")).collect();
        assert_eq!(names, expected);
        assert_eq!(corpus.vocabulary().len(), 33);
    }

    #[test]
    fn adding_a_document_invalidates_idf() {
        let n = plain();
        let mut corpus = Corpus::new();
        corpus.add_document("a", "the cat sat", &n);
        corpus.add_document("b", "the dog sat", &n);
        corpus.process().unwrap();
        assert!(corpus.is_current());
        corpus.add_document("c", "a bird", &n);
        assert!(!corpus.is_current());
        assert!(matches!(corpus.vectors(), Err(Error::StaleStatistics)));
        corpus.process().unwrap();
        assert_eq!(corpus.vectors().unwrap().len(), 3);
    }

    #[test]
    fn removing_a_document_shrinks_vocabulary() {
        let n = plain();
        let mut corpus = Corpus::new();
        corpus.add_document("a", "the cat sat", &n);
        corpus.add_document("b", "the dog sat", &n);
        corpus.process().unwrap();
        let removed = corpus.remove_document("b").unwrap();
        assert_eq!(removed.terms["dog"].count, 1);
        assert!(!corpus.vocabulary().contains("dog"));
        assert!(!corpus.get("a").unwrap().terms.contains_key("dog"));
        assert!(!corpus.is_current());
        assert!(corpus.remove_document("b").is_none());
    }

    #[test]
    fn empty_corpus_has_no_order() {
        assert!(matches!(Corpus::new().vocabulary_order(), Err(Error::EmptyCorpus)));
    }
}
