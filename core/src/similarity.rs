use crate::error::{Error, Result};
use crate::index::Document;
use crate::vector::extract_vector;
use crate::vocabulary::VocabularyOrder;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Score at or above which a pair is reported as related.
pub const DEFAULT_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SimilarityMode {
    /// Cosine over full TF-IDF vectors.
    Dense,
    /// Cosine over shared term counts minus a vocabulary-overlap penalty.
    Sparse,
}

impl fmt::Display for SimilarityMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dense => f.write_str("dense"),
            Self::Sparse => f.write_str("sparse"),
        }
    }
}

impl FromStr for SimilarityMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dense" => Ok(Self::Dense),
            "sparse" => Ok(Self::Sparse),
            other => Err(format!("unknown similarity mode '{other}', expected dense or sparse")),
        }
    }
}

/// `dot(a, b) / (|a| * |b|)`. Zero when either vector has zero norm.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> Result<f64> {
    if a.len() != b.len() {
        return Err(Error::DimensionMismatch { left: a.len(), right: b.len() });
    }
    if a.is_empty() {
        return Err(Error::EmptyVector);
    }
    // Components are divided by the largest magnitude so the squared sums stay within [1, len].
    let (scale_a, scale_b) = (max_abs(a), max_abs(b));
    if scale_a == 0.0 || scale_b == 0.0 || !scale_a.is_finite() || !scale_b.is_finite() {
        return Ok(0.0);
    }
    let (mut dot, mut norm_a, mut norm_b) = (0.0f64, 0.0f64, 0.0f64);
    for (x, y) in a.iter().zip(b) {
        let (x, y) = (x / scale_a, y / scale_b);
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    let cosine = dot / (norm_a * norm_b).sqrt();
    if !cosine.is_finite() {
        return Ok(0.0);
    }
    Ok(cosine.clamp(-1.0, 1.0))
}

fn max_abs(v: &[f64]) -> f64 {
    v.iter().fold(0.0f64, |m, x| m.max(x.abs()))
}

/// Raw counts of the terms two documents share, in lexicographic term order, plus the penalty for
/// the terms only one of them has.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SharedTerms {
    pub terms: Vec<String>,
    pub a: Vec<f64>,
    pub b: Vec<f64>,
    pub penalty: f64,
}

impl SharedTerms {
    /// Cosine of the shared counts minus the penalty. Nothing shared counts as cosine 0.
    pub fn score(&self) -> f64 {
        let cosine = if self.terms.is_empty() { 0.0 } else { cosine_similarity(&self.a, &self.b).unwrap_or(0.0) };
        cosine - self.penalty
    }
}

pub fn find_similar(doc1: &Document, doc2: &Document) -> SharedTerms {
    let left: BTreeSet<&str> = doc1.nonzero_terms().collect();
    let right: BTreeSet<&str> = doc2.nonzero_terms().collect();

    let shared: Vec<&str> = left.intersection(&right).copied().collect();
    let a = shared.iter().map(|t| doc1.terms[*t].count as f64).collect();
    let b = shared.iter().map(|t| doc2.terms[*t].count as f64).collect();

    // Each term present in only one document costs 1 / (|doc1| + |doc2|).
    let size = left.len() + right.len();
    let penalty = if size == 0 {
        0.0
    } else {
        let step = 1.0 / size as f64;
        left.symmetric_difference(&right).map(|_| step).sum::<f64>()
    };

    SharedTerms { terms: shared.into_iter().map(str::to_string).collect(), a, b, penalty }
}

/// Score one pair in the requested mode. Dense mode extracts both vectors against `order`.
pub fn compare(a: &Document, b: &Document, order: &VocabularyOrder, mode: SimilarityMode) -> Result<f64> {
    match mode {
        SimilarityMode::Dense => cosine_similarity(&extract_vector(a, order), &extract_vector(b, order)),
        SimilarityMode::Sparse => Ok(find_similar(a, b).score()),
    }
}

pub fn is_related(score: f64, threshold: f64) -> bool { score >= threshold }
