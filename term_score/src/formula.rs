/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! The pure BM25 score functions.
//!
//! These are the scalar pieces of the per-term score, split out so each can
//! be unit-tested in isolation. [`crate::score_term`] composes them over a
//! posting list; nothing here allocates or fails.
//!
//! [`K1`] and [`B`] are fixed constants of the formula, not tuning knobs:
//! every recorded score, every stored bound, and every test vector assumes
//! these exact values.

/// Term-frequency saturation constant. Higher values delay the diminishing
/// returns of repeated term occurrences.
pub const K1: f64 = 1.2;

/// Document-length normalization strength, in `[0, 1]`. At `0` document
/// length is ignored; at `1` term frequency is fully scaled by relative
/// document length.
pub const B: f64 = 0.75;

/// Computes the length-normalization weight of a document:
///
/// ```text
/// lenweight = (1 - B) + B * doc_length / mean_doc_length
/// ```
///
/// Documents at the corpus mean weigh `1.0`; shorter documents weigh less
/// (boosting their term-frequency weight), longer ones more.
///
/// `mean_doc_length` must be strictly positive.
///
/// # Examples
///
/// ```
/// # use term_score::formula::length_weight;
/// // A document exactly at the corpus mean is not normalized at all.
/// assert_eq!(length_weight(100.0, 100.0), 1.0);
///
/// // A document at half the mean weighs less than one at double the mean.
/// assert!(length_weight(50.0, 100.0) < length_weight(200.0, 100.0));
/// ```
#[inline]
#[must_use]
pub fn length_weight(doc_length: f64, mean_doc_length: f64) -> f64 {
    (1.0 - B) + B * doc_length / mean_doc_length
}

/// Computes the saturated term-frequency weight:
///
/// ```text
/// tf = frequency * (K1 + 1) / (frequency + K1 * length_weight)
/// ```
///
/// For a fixed `length_weight` the weight is strictly increasing in
/// `frequency` but saturates toward `K1 + 1`: the tenth occurrence of a
/// term adds far less relevance than the first.
///
/// # Examples
///
/// ```
/// # use term_score::formula::{saturated_tf, K1};
/// let once = saturated_tf(1.0, 1.0);
/// let hundred = saturated_tf(100.0, 1.0);
/// assert!(once < hundred);
/// assert!(hundred < K1 + 1.0);
/// ```
#[inline]
#[must_use]
pub fn saturated_tf(frequency: f64, length_weight: f64) -> f64 {
    frequency * (K1 + 1.0) / (frequency + K1 * length_weight)
}

/// Computes a term's partial relevance score for one document: the
/// saturated, length-normalized term-frequency weight times the term's
/// inverse document frequency.
///
/// `mean_doc_length` must be strictly positive.
///
/// # Examples
///
/// ```
/// # use term_score::formula::partial_score;
/// let score = partial_score(3.0, 200.0, 100.0, 2.0);
/// assert!((score - 2.5882352941176476).abs() < 1e-9);
/// ```
#[inline]
#[must_use]
pub fn partial_score(frequency: f64, doc_length: f64, mean_doc_length: f64, idf: f64) -> f64 {
    saturated_tf(frequency, length_weight(doc_length, mean_doc_length)) * idf
}

/// The least upper bound of a term's partial score: `(K1 + 1) * idf`.
///
/// [`saturated_tf`] approaches `K1 + 1` as the frequency grows but never
/// reaches it, so no document can score this high for the term. Engines
/// use the summed bounds of a query's terms to normalize relevance scores
/// into `[0, 1]`.
///
/// # Examples
///
/// ```
/// # use term_score::formula::{partial_score, score_bound};
/// let bound = score_bound(2.0);
/// assert!(partial_score(1e9, 100.0, 100.0, 2.0) < bound);
/// assert_eq!(bound, 4.4);
/// ```
#[inline]
#[must_use]
pub fn score_bound(idf: f64) -> f64 {
    (K1 + 1.0) * idf
}
