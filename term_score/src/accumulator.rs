/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use crate::DocId;

/// The mutable docid → score mapping a scoring call writes into.
///
/// The accumulator is owned by the surrounding engine and outlives the
/// individual [`score_term`](crate::score_term) calls of one query; each
/// call only touches the entries of the documents in its posting list and
/// never removes an entry.
///
/// The engine must serialize the calls sharing one accumulator; no
/// internal locking is performed.
pub trait ScoreAccumulator {
    /// Records `score` for `doc_id`, overwriting any prior value.
    ///
    /// Overwrite, not accumulate: how the partial scores of a query's
    /// terms combine into a final ranking is the engine's policy, decided
    /// outside this crate.
    fn record(&mut self, doc_id: DocId, score: f64);
}

impl<S: BuildHasher> ScoreAccumulator for HashMap<DocId, f64, S> {
    fn record(&mut self, doc_id: DocId, score: f64) {
        self.insert(doc_id, score);
    }
}

impl ScoreAccumulator for BTreeMap<DocId, f64> {
    fn record(&mut self, doc_id: DocId, score: f64) {
        self.insert(doc_id, score);
    }
}
