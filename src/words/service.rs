//! Review service: the two operations the HTTP layer exposes
//!
//! The service holds no state of its own between calls; the store is the
//! single source of truth and every operation is a fresh load. The mutex
//! serializes the load-mutate-save sequence so two concurrent outcome
//! submissions cannot lose an update.

use std::sync::Mutex;

use super::models::WordRecord;
use super::sampler;
use super::storage::{Result, StorageError, WordStore};

pub struct ReviewService<S: WordStore> {
    store: Mutex<S>,
}

impl<S: WordStore> ReviewService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store: Mutex::new(store),
        }
    }

    /// Build a practice deck: all words, repeated by difficulty, shuffled.
    pub fn practice_deck(&self) -> Result<Vec<WordRecord>> {
        let store = self
            .store
            .lock()
            .map_err(|e| StorageError::Lock(e.to_string()))?;
        let records = store.load()?;
        Ok(sampler::build_pool(&records, &mut rand::thread_rng()))
    }

    /// Record a practice outcome for `word`, bumping its `correct` or
    /// `wrong` counter by one.
    ///
    /// Lookup is a linear scan; if the file carries duplicate words the
    /// first match wins. An unknown word is not an error: the collection
    /// is written back unchanged and the call succeeds.
    pub fn record_outcome(&self, word: &str, is_correct: bool) -> Result<()> {
        let store = self
            .store
            .lock()
            .map_err(|e| StorageError::Lock(e.to_string()))?;
        let mut records = store.load()?;

        match records.iter_mut().find(|r| r.word == word) {
            Some(record) => {
                if is_correct {
                    record.correct += 1;
                } else {
                    record.wrong += 1;
                }
                log::debug!(
                    "recorded {} for {:?} (now {}/{})",
                    if is_correct { "correct" } else { "wrong" },
                    word,
                    record.correct,
                    record.wrong
                );
            }
            None => {
                log::warn!("outcome for unknown word {:?}, collection left unchanged", word);
            }
        }

        store.save(&records)?;
        Ok(())
    }
}
