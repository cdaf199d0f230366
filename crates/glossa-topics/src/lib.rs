//! Glossa Topics — maps cleaned responses onto nine discourse topics.

pub mod cleaner;
pub mod matrix;
pub mod taxonomy;

pub use cleaner::TopicCleaner;
pub use matrix::{bigram_matrix, unigram_matrix, TopicMatrix, TopicPresence};
pub use taxonomy::{Topic, TopicTaxonomy};
