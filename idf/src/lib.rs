/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! [Inverse Document Frequency] (IDF) computation for search scoring.
//!
//! IDF measures how discriminative a term is across a corpus. Terms that
//! appear in fewer documents receive a higher weight, so a rare term
//! contributes more to a document's relevance than a ubiquitous one.
//!
//! The formula used here is the smoothed logarithmic variant:
//!
//! ```text
//! IDF(t) = ln(1.0 + total_docs / term_docs)
//! ```
//!
//! The `1.0 +` smoothing keeps the weight strictly positive even for a term
//! that occurs in every document, which in turn keeps downstream relevance
//! scores strictly positive for any matched document.
//!
//! The result is an unscaled weight, intended to be multiplied with a
//! term-frequency weight such as the one computed by the `term_score` crate.
//!
//! [Inverse Document Frequency]: https://en.wikipedia.org/wiki/Tf%E2%80%93idf#Inverse_document_frequency

/// Computes the Inverse Document Frequency (IDF) for a term that occurs in
/// `term_docs` of the `total_docs` documents in a corpus.
///
/// A `term_docs` of zero is treated as one: callers are expected to drop
/// out-of-vocabulary terms before scoring, but the function must not divide
/// by zero if one slips through.
///
/// # Examples
///
/// ```
/// # use idf::inverse_doc_frequency;
/// // A rare term in a large corpus has a high IDF.
/// assert!(inverse_doc_frequency(1000, 1) > inverse_doc_frequency(1000, 500));
///
/// // Even a term occurring in every document keeps a positive weight.
/// assert!(inverse_doc_frequency(1000, 1000) > 0.0);
/// ```
#[inline]
#[must_use]
pub fn inverse_doc_frequency(total_docs: usize, term_docs: usize) -> f64 {
    let term_docs = if term_docs == 0 { 1 } else { term_docs };
    (1.0 + total_docs as f64 / term_docs as f64).ln()
}
