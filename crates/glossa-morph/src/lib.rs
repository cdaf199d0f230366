//! Glossa Morph — morphological reduction of accent-folded tokens.
//!
//! Provides the `MorphologicalReducer` trait for stem/lemma backends.
//! `GreekStemmer` wraps the Snowball Greek stemmer; `LexiconLemmatizer`
//! looks forms up in a form → lemma table. `Reducer` adds the abbreviation
//! bypass and `CachedReducer` memoizes per corpus.

pub mod backend;
pub mod cache;
pub mod lemmatizer;
pub mod reducer;
pub mod stemmer;

pub use backend::MorphologicalReducer;
pub use cache::{CacheStats, CachedReducer};
pub use lemmatizer::LexiconLemmatizer;
pub use reducer::Reducer;
pub use stemmer::GreekStemmer;

use std::path::Path;
use std::sync::Arc;

use glossa_core::{Error, ReductionMode, Result};

/// Create the reducer for `mode`. Lemma mode needs a lexicon file.
pub fn create_reducer(mode: ReductionMode, lexicon: Option<&Path>) -> Result<Reducer> {
    let backend: Arc<dyn MorphologicalReducer> = match mode {
        ReductionMode::Stem => Arc::new(GreekStemmer::new()),
        ReductionMode::Lemma => {
            let path = lexicon.ok_or_else(|| {
                Error::InvalidArgument("lemma mode requires a lemma lexicon".into())
            })?;
            Arc::new(LexiconLemmatizer::load(path)?)
        }
    };
    tracing::info!(mode = %mode, backend = backend.name(), "Created morphological reducer");
    Ok(Reducer::new(backend))
}
