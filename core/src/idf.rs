use crate::error::{Error, Result};
use crate::index::Corpus;
use std::collections::BTreeMap;

/// `ln(N / df)`. Zero when either count is zero, so no NaN or infinity reaches a vector.
pub fn inverse_document_frequency(num_docs: usize, df: usize) -> f64 {
    if num_docs == 0 || df == 0 {
        return 0.0;
    }
    (num_docs as f64 / df as f64).ln()
}

/// Number of documents in which each vocabulary term has a nonzero count.
pub fn document_frequency(corpus: &Corpus) -> BTreeMap<String, usize> {
    let mut df: BTreeMap<String, usize> = corpus.vocabulary().iter().map(|t| (t.to_string(), 0)).collect();
    for doc in corpus.documents() {
        for term in doc.nonzero_terms() {
            match df.get_mut(term) {
                Some(n) => *n += 1,
                None => { df.insert(term.to_string(), 1); }
            }
        }
    }
    df
}

/// Assign IDF and TF-IDF to every entry of every document. Run after unification.
pub fn compute_idf(corpus: &mut Corpus) -> Result<()> {
    if corpus.is_empty() {
        return Err(Error::EmptyCorpus);
    }
    let n = corpus.len();
    let idf: BTreeMap<String, f64> = document_frequency(corpus)
        .into_iter()
        .map(|(term, df)| (term, inverse_document_frequency(n, df)))
        .collect();

    let (documents, _) = corpus.parts_mut();
    for doc in documents.iter_mut() {
        for (term, stats) in doc.terms.iter_mut() {
            stats.idf = idf.get(term.as_str()).copied().unwrap_or(0.0);
            stats.tfidf = stats.tf * stats.idf;
        }
        tracing::debug!(document = %doc.name, "tf-idf analyzed");
    }
    corpus.mark_current();
    tracing::info!(num_docs = n, num_terms = idf.len(), "idf pass complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_counts_give_zero_idf() {
        assert_eq!(inverse_document_frequency(0, 0), 0.0);
        assert_eq!(inverse_document_frequency(5, 0), 0.0);
        assert_eq!(inverse_document_frequency(4, 4), 0.0);
        assert!((inverse_document_frequency(4, 1) - 4f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn empty_corpus_is_rejected() {
        let mut corpus = Corpus::new();
        assert!(matches!(compute_idf(&mut corpus), Err(Error::EmptyCorpus)));
    }
}
