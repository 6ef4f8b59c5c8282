use crate::source::{load_documents, load_word_list};
use anyhow::{Context, Result};
use docsim_core::tokenizer::{default_punctuation, default_stopwords};
use docsim_core::{Corpus, Normalizer};
use std::path::PathBuf;

/// Where the corpus comes from and how its text is normalized.
#[derive(Debug, Clone)]
pub struct CorpusOptions {
    pub input: PathBuf,
    /// Stopword file; the built-in English list when `None`.
    pub stopwords: Option<PathBuf>,
    /// Punctuation file; the built-in marker list when `None`.
    pub punctuation: Option<PathBuf>,
    /// Count stopwords like any other token.
    pub keep_stopwords: bool,
    pub lowercase: bool,
}

impl CorpusOptions {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self { input: input.into(), stopwords: None, punctuation: None, keep_stopwords: false, lowercase: true }
    }

    pub fn normalizer(&self) -> Result<Normalizer> {
        let stopwords = match (&self.stopwords, self.keep_stopwords) {
            (_, true) => Vec::new(),
            (Some(path), false) => load_word_list(path)?,
            (None, false) => default_stopwords().into_iter().collect(),
        };
        let punctuation = match &self.punctuation {
            Some(path) => load_word_list(path)?,
            None => default_punctuation(),
        };
        tracing::info!(markers = ?punctuation, "these markers will be removed");
        tracing::info!(stopwords = stopwords.len(), lowercase = self.lowercase, "stopwords loaded");
        Normalizer::new(self.lowercase, punctuation, stopwords).context("unable to build normalizer")
    }

    /// Load, normalize and fully process the corpus.
    pub fn load_corpus(&self) -> Result<Corpus> {
        let normalizer = self.normalizer()?;
        let docs = load_documents(&self.input)?;
        let mut corpus = Corpus::from_sources(docs.into_iter().map(|d| (d.name, d.text)).collect(), &normalizer);
        corpus.process().context("unable to compute tf-idf")?;
        Ok(corpus)
    }
}
