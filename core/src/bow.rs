use crate::error::Result;
use crate::index::TermStats;
use crate::tokenizer::Normalizer;
use std::collections::HashMap;

/// Per-document term counts and term frequencies.
#[derive(Debug, Clone, Default)]
pub struct BagOfWords {
    pub terms: HashMap<String, TermStats>,
    /// Number of tokens that survived normalization.
    pub total_tokens: usize,
}

impl BagOfWords {
    /// Count `tokens` and derive `tf = count / total`. An empty token list yields an empty bag.
    pub fn from_tokens<T: AsRef<str>>(tokens: &[T]) -> Self {
        let mut counts: HashMap<String, u32> = HashMap::new();
        for token in tokens {
            *counts.entry(token.as_ref().to_string()).or_insert(0) += 1;
        }
        let total_tokens = tokens.len();
        let terms = counts
            .into_iter()
            .map(|(term, count)| {
                let tf = if total_tokens > 0 { count as f64 / total_tokens as f64 } else { 0.0 };
                (term, TermStats { count, tf, ..TermStats::zero() })
            })
            .collect();
        Self { terms, total_tokens }
    }

    /// True when no token survived normalization.
    pub fn is_empty(&self) -> bool { self.total_tokens == 0 }

    /// Number of distinct terms.
    pub fn len(&self) -> usize { self.terms.len() }

    pub fn sorted_terms(&self) -> Vec<(&str, &TermStats)> {
        let mut terms: Vec<(&str, &TermStats)> = self.terms.iter().map(|(t, s)| (t.as_str(), s)).collect();
        terms.sort_by(|a, b| a.0.cmp(b.0));
        terms
    }
}

/// Normalize `raw_text` and count the surviving tokens in one step.
pub fn build_bag_of_words<S, P>(raw_text: &str, lowercase: bool, stopwords: S, punctuation: P) -> Result<BagOfWords>
where
    S: IntoIterator,
    S::Item: Into<String>,
    P: IntoIterator,
    P::Item: AsRef<str>,
{
    let normalizer = Normalizer::new(lowercase, punctuation, stopwords)?;
    let bow = BagOfWords::from_tokens(&normalizer.normalize(raw_text));
    if bow.is_empty() {
        tracing::warn!("document has no tokens after normalization");
    }
    Ok(bow)
}
