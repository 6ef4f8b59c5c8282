use crate::error::Result;
use lazy_static::lazy_static;
use regex::Regex;
use std::borrow::Cow;
use std::collections::HashSet;

lazy_static! {
    static ref STOPWORDS: HashSet<&'static str> = {
        let words: &[&str] = &[
            "a","about","above","after","again","against","all","am","an","and","any","are","as","at",
            "be","because","been","before","being","below","between","both","but","by",
            "can","cannot","could","d","did","do","does","doing","down","during",
            "each","few","for","from","further",
            "had","has","have","having","he","her","here","hers","herself","him","himself","his","how",
            "i","if","in","into","is","it","its","itself","ll","m","me","more","most","my","myself",
            "no","nor","not","of","off","on","once","only","or","other","ought","our","ours","ourselves","out","over","own",
            "re","s","same","she","should","so","some","such",
            "t","than","that","the","their","theirs","them","themselves","then","there","these","they","this","those","through","to","too",
            "under","until","up","ve","very",
            "was","we","were","what","when","where","which","while","who","whom","why","with","would",
            "you","your","yours","yourself","yourselves"
        ];
        words.iter().copied().collect()
    };
    static ref PUNCTUATION: Vec<&'static str> = vec![
        "...", "--", ".", ",", ";", ":", "!", "?", "\"", "'", "`", "(", ")", "[", "]", "{", "}", "<", ">",
        "-", "_", "/", "\\", "|", "*", "#", "@", "&", "%", "+", "=", "~", "^", "$",
        "\u{2018}", "\u{2019}", "\u{201c}", "\u{201d}", "\u{2013}", "\u{2014}", "\u{2026}", "\u{ab}", "\u{bb}",
    ];
}

/// Built-in English function words, matched against already lowercased tokens.
pub fn default_stopwords() -> HashSet<String> {
    STOPWORDS.iter().map(|w| w.to_string()).collect()
}

/// Built-in punctuation markers, stripped before whitespace tokenization.
pub fn default_punctuation() -> Vec<String> {
    PUNCTUATION.iter().map(|m| m.to_string()).collect()
}

/// Lowercases, strips punctuation markers and drops stopwords.
#[derive(Debug, Clone)]
pub struct Normalizer {
    lowercase: bool,
    markers: Option<Regex>,
    stopwords: HashSet<String>,
}

impl Normalizer {
    pub fn new<P, S>(lowercase: bool, punctuation: P, stopwords: S) -> Result<Self>
    where
        P: IntoIterator,
        P::Item: AsRef<str>,
        S: IntoIterator,
        S::Item: Into<String>,
    {
        let markers: Vec<String> = punctuation.into_iter().map(|m| m.as_ref().to_string()).collect();
        let markers = match marker_pattern(&markers) {
            Some(pattern) => Some(Regex::new(&pattern)?),
            None => None,
        };
        let stopwords: HashSet<String> = stopwords.into_iter().map(Into::into).collect();
        tracing::debug!(lowercase, stopwords = stopwords.len(), "normalizer ready");
        Ok(Self { lowercase, markers, stopwords })
    }

    pub fn lowercase(&self) -> bool { self.lowercase }

    pub fn is_stopword(&self, token: &str) -> bool { self.stopwords.contains(token) }

    /// Split `text` into the tokens that survive lowercasing, marker removal and stopword filtering.
    pub fn normalize(&self, text: &str) -> Vec<String> {
        let lowered;
        let text = if self.lowercase {
            lowered = text.to_lowercase();
            lowered.as_str()
        } else {
            text
        };
        let stripped = match &self.markers {
            Some(re) => re.replace_all(text, " "),
            None => Cow::Borrowed(text),
        };
        stripped
            .split_whitespace()
            .filter(|token| !self.is_stopword(token))
            .map(str::to_string)
            .collect()
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        let markers = marker_pattern(&default_punctuation())
            .map(|pattern| Regex::new(&pattern).expect("built-in markers compile"));
        Self { lowercase: true, markers, stopwords: default_stopwords() }
    }
}

/// Alternation of the escaped markers, longest first. The regex engine prefers the earliest
/// alternative at a given position, so a long marker is never split by a shorter prefix of it.
fn marker_pattern(markers: &[String]) -> Option<String> {
    let mut markers: Vec<&str> = markers.iter().map(String::as_str).filter(|m| !m.is_empty()).collect();
    if markers.is_empty() {
        return None;
    }
    markers.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    markers.dedup();
    Some(markers.iter().map(|m| regex::escape(m)).collect::<Vec<_>>().join("|"))
}
