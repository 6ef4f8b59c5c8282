use crate::index::Document;
use crate::vocabulary::VocabularyOrder;

/// Dense TF-IDF vector of `document`, one slot per term of `order`. Absent terms are 0.
pub fn extract_vector(document: &Document, order: &VocabularyOrder) -> Vec<f64> {
    order
        .terms()
        .iter()
        .map(|term| document.terms.get(term).map_or(0.0, |s| s.tfidf))
        .collect()
}
