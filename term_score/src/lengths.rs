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

/// Resolves a document id to the document's length in words.
///
/// The oracle must cover every document id appearing in the posting list
/// being scored; a miss is a data error
/// ([`ScoreError::UnknownDocument`](crate::ScoreError::UnknownDocument)),
/// not a skip. Lengths are consumed as real numbers regardless of how the
/// index stores them.
pub trait LengthOracle {
    /// The document's length in words, or `None` if the document is
    /// unknown.
    fn doc_length(&self, doc_id: DocId) -> Option<f64>;
}

impl<S: BuildHasher> LengthOracle for HashMap<DocId, f64, S> {
    fn doc_length(&self, doc_id: DocId) -> Option<f64> {
        self.get(&doc_id).copied()
    }
}

impl LengthOracle for BTreeMap<DocId, f64> {
    fn doc_length(&self, doc_id: DocId) -> Option<f64> {
        self.get(&doc_id).copied()
    }
}
