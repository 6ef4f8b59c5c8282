pub mod bow;
pub mod error;
pub mod idf;
pub mod index;
pub mod similarity;
pub mod tokenizer;
pub mod vector;
pub mod vocabulary;

pub use bow::{build_bag_of_words, BagOfWords};
pub use error::{Error, Result};
pub use idf::{compute_idf, document_frequency, inverse_document_frequency};
pub use index::{Corpus, Document, TermStats};
pub use similarity::{compare, cosine_similarity, find_similar, is_related, SharedTerms, SimilarityMode, DEFAULT_THRESHOLD};
pub use tokenizer::Normalizer;
pub use vector::extract_vector;
pub use vocabulary::{unify, Vocabulary, VocabularyOrder};
