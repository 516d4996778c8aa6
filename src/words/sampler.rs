//! Weighted practice pool construction
//!
//! A word's weight is `max(1, (wrong - correct) + 1)`: words the user keeps
//! missing are repeated in the deck, while every word shows up at least once
//! no matter how good its history is. The expanded pool is then uniformly
//! shuffled, so one practice session walks a random order of the weighted
//! deck.

use rand::seq::SliceRandom;
use rand::Rng;

use super::models::WordRecord;

/// Number of times a record appears in the practice pool.
pub fn weight_for(record: &WordRecord) -> usize {
    // Signed arithmetic: correct > wrong would underflow u32
    let spread = record.wrong as i64 - record.correct as i64 + 1;
    spread.max(1) as usize
}

/// Expand records into a weighted pool and shuffle it.
///
/// Pure function of the input and the RNG; repeated entries are clones of
/// the same record, not distinct identities.
pub fn build_pool<R: Rng>(records: &[WordRecord], rng: &mut R) -> Vec<WordRecord> {
    let mut pool = Vec::new();
    for record in records {
        for _ in 0..weight_for(record) {
            pool.push(record.clone());
        }
    }
    pool.shuffle(rng);
    pool
}
