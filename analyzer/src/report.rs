use anyhow::Result;
use docsim_core::{compare, is_related, Corpus, Document, SimilarityMode, TermStats};
use serde::Serialize;
use time::format_description::well_known::Rfc3339;

#[derive(Debug, Serialize)]
pub struct TermReport {
    pub term: String,
    #[serde(flatten)]
    pub stats: TermStats,
}

#[derive(Debug, Serialize)]
pub struct DocumentReport {
    pub name: String,
    pub empty: bool,
    pub total_tokens: usize,
    /// Terms that occur in the document, sorted.
    pub terms: Vec<TermReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vector: Option<Vec<f64>>,
}

#[derive(Debug, Serialize)]
pub struct CorpusReport {
    pub generated_at: String,
    pub num_docs: usize,
    pub vocabulary_size: usize,
    /// Slot order of every `vector`, present only alongside vectors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vocabulary: Option<Vec<String>>,
    pub documents: Vec<DocumentReport>,
}

impl CorpusReport {
    pub fn build(corpus: &Corpus, with_vectors: bool) -> Result<Self> {
        let order = corpus.vocabulary_order()?;
        let documents = corpus
            .documents()
            .iter()
            .map(|doc| DocumentReport {
                name: doc.name.clone(),
                empty: doc.is_empty(),
                total_tokens: doc.total_tokens,
                terms: term_reports(doc),
                vector: with_vectors.then(|| docsim_core::extract_vector(doc, &order)),
            })
            .collect();
        Ok(Self {
            generated_at: now(),
            num_docs: corpus.len(),
            vocabulary_size: order.len(),
            vocabulary: with_vectors.then(|| order.terms().to_vec()),
            documents,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct PairReport {
    pub a: String,
    pub b: String,
    pub score: f64,
    pub related: bool,
}

#[derive(Debug, Serialize)]
pub struct ComparisonReport {
    pub generated_at: String,
    pub mode: SimilarityMode,
    pub threshold: f64,
    pub total_pairs: usize,
    pub related_pairs: usize,
    /// Highest score first.
    pub pairs: Vec<PairReport>,
}

impl ComparisonReport {
    /// Score every unordered pair. A failed comparison is logged and left out of the report.
    pub fn build(corpus: &Corpus, mode: SimilarityMode, threshold: f64) -> Result<Self> {
        let order = corpus.vocabulary_order()?;
        let docs = corpus.documents();
        let mut pairs = Vec::new();
        for (i, a) in docs.iter().enumerate() {
            for b in &docs[i + 1..] {
                match compare(a, b, &order, mode) {
                    Ok(score) => pairs.push(PairReport { a: a.name.clone(), b: b.name.clone(), score, related: is_related(score, threshold) }),
                    Err(err) => tracing::warn!(a = %a.name, b = %b.name, error = %err, "comparison skipped"),
                }
            }
        }
        pairs.sort_by(|x, y| y.score.partial_cmp(&x.score).unwrap_or(std::cmp::Ordering::Equal));
        let related_pairs = pairs.iter().filter(|p| p.related).count();
        tracing::info!(total_pairs = pairs.len(), related_pairs, %mode, threshold, "comparison complete");
        Ok(Self { generated_at: now(), mode, threshold, total_pairs: pairs.len(), related_pairs, pairs })
    }
}

pub fn render<T: Serialize>(report: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

fn term_reports(doc: &Document) -> Vec<TermReport> {
    doc.sorted_terms()
        .into_iter()
        .filter(|(_, s)| s.count > 0)
        .map(|(term, stats)| TermReport { term: term.to_string(), stats: *stats })
        .collect()
}

fn now() -> String {
    time::OffsetDateTime::now_utc().format(&Rfc3339).unwrap_or_else(|_| "".into())
}
