/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Per-term [BM25] relevance scoring.
//!
//! A full-text engine evaluates a query one term at a time: for each term it
//! resolves the term's posting list and IDF from its inverted index, then
//! computes the term's partial contribution to the relevance of every
//! document that contains it. This crate implements exactly that inner loop,
//! which is the hot path of query evaluation — its cost is linear in the
//! posting list, and for a common term the posting list covers most of the
//! corpus.
//!
//! For a document `d` with length `len(d)` words, a term frequency `f`, and
//! a corpus mean document length `m`, the partial score is:
//!
//! ```text
//! lenweight = (1 - B) + B * len(d) / m
//! tf        = f * (K1 + 1) / (f + K1 * lenweight)
//! partial   = tf * idf
//! ```
//!
//! with the standard constants [`K1`](formula::K1)` = 1.2` and
//! [`B`](formula::B)` = 0.75`. `tf` saturates: repeated occurrences of a
//! term have diminishing returns, approaching but never reaching
//! `(K1 + 1) * idf` (see [`formula::score_bound`]). `lenweight` rewards
//! documents shorter than the corpus mean and penalizes longer ones.
//!
//! # Roles
//!
//! [`score_term`] ties together four roles, each its own type or trait so
//! they can be tested and faked independently:
//!
//! - [`PostingSource`] — yields the term's [`Posting`]s (document id and
//!   term frequency). Implemented for posting slices, and by
//!   [`RawPostings`] for loosely-typed rows that still need validation.
//! - [`LengthOracle`] — resolves a document id to its length in words.
//!   Implemented for the standard maps.
//! - [`formula`] — the pure score functions.
//! - [`ScoreAccumulator`] — the mutable docid → score mapping the call
//!   writes into, owned by the surrounding engine and shared across the
//!   per-term calls of one query.
//!
//! # Example
//!
//! ```
//! use std::collections::BTreeMap;
//! use term_score::{score_term, DocId, Posting};
//!
//! let postings = [Posting::new(1, 3.0)?, Posting::new(2, 1.0)?];
//! let doc_lengths = BTreeMap::from([(1, 200.0), (2, 50.0)]);
//! let mut scores: BTreeMap<DocId, f64> = BTreeMap::new();
//!
//! score_term(&mut scores, &postings[..], &doc_lengths, 2.0, 100.0)?;
//!
//! // Document 2 is short, so its single occurrence weighs almost as much
//! // as document 1's three occurrences in a long document.
//! assert!(scores[&1] > scores[&2]);
//! assert!(scores[&2] > 2.4);
//! # Ok::<(), term_score::ScoreError>(())
//! ```
//!
//! # Errors
//!
//! The call is fail-fast: the first malformed posting, non-numeric value,
//! or document id without a recorded length aborts the call with a
//! [`ScoreError`]. Documents scored before the failing entry remain in the
//! accumulator; callers that need atomicity must discard the accumulator
//! on error.
//!
//! # Preconditions
//!
//! `mean_doc_length` must be strictly positive; it is a caller-supplied
//! corpus statistic and is not validated here. A zero or negative mean
//! produces non-finite or negative scores.
//!
//! The accumulator is mutated without any internal locking. One query's
//! per-term calls must be serialized; an engine that scores terms in
//! parallel has to give each worker its own accumulator and merge
//! afterwards.
//!
//! [BM25]: https://en.wikipedia.org/wiki/Okapi_BM25

mod accumulator;
mod error;
pub mod formula;
mod lengths;
mod postings;

pub use accumulator::ScoreAccumulator;
pub use error::{PostingError, ScoreError};
pub use lengths::LengthOracle;
pub use postings::{Posting, PostingSource, RawPostings};

/// Identifies a document within the corpus. Used only as a map key; no
/// ordering is implied.
pub type DocId = u64;

/// Scores one term against every document in its posting list, recording
/// the partial score of each document in `accumulator`.
///
/// For each posting, the document's length is resolved through
/// `doc_lengths`, the BM25 term-frequency weight is computed with the
/// [`formula`] functions, multiplied by `idf`, and written into the
/// accumulator. A prior entry for the same document is overwritten, not
/// added to; combining scores across terms is the caller's policy.
///
/// `mean_doc_length` must be strictly positive (see the
/// [crate docs](crate#preconditions)).
///
/// # Errors
///
/// Aborts on the first posting that fails to decode
/// ([`ScoreError::Posting`]) or whose document id has no recorded length
/// ([`ScoreError::UnknownDocument`]) or a non-numeric one
/// ([`ScoreError::InvalidLength`]). Entries recorded before the failure
/// remain in the accumulator.
pub fn score_term<P, L, A>(
    accumulator: &mut A,
    postings: &P,
    doc_lengths: &L,
    idf: f64,
    mean_doc_length: f64,
) -> Result<(), ScoreError>
where
    P: PostingSource + ?Sized,
    L: LengthOracle + ?Sized,
    A: ScoreAccumulator + ?Sized,
{
    for entry in postings.postings() {
        let posting = entry?;
        let doc_id = posting.doc_id();

        let doc_length = doc_lengths
            .doc_length(doc_id)
            .ok_or(ScoreError::UnknownDocument { doc_id })?;
        if !doc_length.is_finite() || doc_length < 0.0 {
            return Err(ScoreError::InvalidLength {
                doc_id,
                value: doc_length,
            });
        }

        let lenweight = formula::length_weight(doc_length, mean_doc_length);
        let tf = formula::saturated_tf(posting.frequency(), lenweight);
        accumulator.record(doc_id, tf * idf);
    }
    Ok(())
}
