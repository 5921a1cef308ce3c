/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

use crate::DocId;

/// Why a posting entry could not be turned into a [`Posting`](crate::Posting).
///
/// Postings usually arrive as already-typed values and never fail, but a
/// source reading from loosely-typed storage (see
/// [`RawPostings`](crate::RawPostings)) validates each entry on the way
/// out and reports the first bad one through this type.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum PostingError {
    /// The entry does not have the (document id, frequency) shape.
    #[error("posting entry {index} has {fields} fields, expected a (doc id, frequency) pair")]
    Malformed {
        /// Position of the entry within its posting list.
        index: usize,
        /// Number of fields the entry actually had.
        fields: usize,
    },

    /// The document id field is not a non-negative integer.
    #[error("posting entry {index} has a document id that is not a non-negative integer: {value}")]
    InvalidDocId {
        /// Position of the entry within its posting list.
        index: usize,
        /// The offending raw value.
        value: f64,
    },

    /// The frequency field cannot be interpreted as a real term count.
    #[error("document {doc_id} has a term frequency that is not a finite non-negative number: {value}")]
    InvalidFrequency {
        /// Document the bad frequency belongs to.
        doc_id: DocId,
        /// The offending raw value.
        value: f64,
    },
}

/// Errors that abort a [`score_term`](crate::score_term) call.
///
/// All of these are contract violations in the caller-supplied data, not
/// transient conditions; there is nothing to retry. The call is fail-fast:
/// documents scored before the failing entry remain in the accumulator.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum ScoreError {
    /// A posting entry failed to decode.
    #[error(transparent)]
    Posting(#[from] PostingError),

    /// A posted document id has no recorded length.
    #[error("no length recorded for document {doc_id}")]
    UnknownDocument {
        /// The unresolvable document id.
        doc_id: DocId,
    },

    /// A recorded document length cannot be interpreted as a real word
    /// count.
    #[error("document {doc_id} has a length that is not a finite non-negative number: {value}")]
    InvalidLength {
        /// Document the bad length belongs to.
        doc_id: DocId,
        /// The offending stored value.
        value: f64,
    },
}
