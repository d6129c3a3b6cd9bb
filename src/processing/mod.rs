//! Text analytics: tokenization, TF-IDF, keywords, and generated prose

pub mod text_processor;
pub mod tfidf;
pub mod keywords;
pub mod summary;
pub mod star;
pub mod cover_letter;
pub mod generator;

pub use cover_letter::generate_cover_letter;
pub use keywords::{extract_keywords, merge_keywords};
pub use star::generate_star_bullets;
pub use summary::enhance_resume;
pub use text_processor::{extract_ngrams, tokenize};
pub use tfidf::calculate_tfidf;
