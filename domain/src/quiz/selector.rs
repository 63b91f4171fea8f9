//! Random unseen-question selection.
//!
//! Selection is stateless: everything the selector knows about earlier picks
//! comes from the `seen` set supplied by the caller.

use crate::core::question::{Question, QuestionId};
use rand::Rng;
use rand::seq::IteratorRandom;
use std::collections::HashSet;

/// Pick one question from `pool` whose id is not in `seen`, uniformly at random.
///
/// Returns `None` when every question in the pool has been seen (or the pool
/// is empty). That is the normal end of a quiz, not an error.
pub fn next_question<'a, R: Rng + ?Sized>(
    pool: &'a [Question],
    seen: &HashSet<QuestionId>,
    rng: &mut R,
) -> Option<&'a Question> {
    pool.iter().filter(|q| !seen.contains(&q.id)).choose(rng)
}

/// [`next_question`] using the thread-local RNG.
pub fn pick_next_question<'a>(
    pool: &'a [Question],
    seen: &HashSet<QuestionId>,
) -> Option<&'a Question> {
    next_question(pool, seen, &mut rand::thread_rng())
}
