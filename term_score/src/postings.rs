/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

use crate::{DocId, PostingError};

/// One entry of a term's posting list: a document and the number of times
/// the term occurs in it.
///
/// The frequency is carried as an `f64` regardless of whether the index
/// stores integral counts; construction validates that it is a finite,
/// non-negative real. A frequency of zero is accepted but pointless — a
/// posting list should only contain documents the term occurs in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Posting {
    doc_id: DocId,
    frequency: f64,
}

impl Posting {
    /// Creates a posting, validating the frequency.
    ///
    /// # Errors
    ///
    /// [`PostingError::InvalidFrequency`] if `frequency` is NaN, infinite,
    /// or negative.
    ///
    /// # Examples
    ///
    /// ```
    /// # use term_score::Posting;
    /// let posting = Posting::new(7, 3.0).unwrap();
    /// assert_eq!(posting.doc_id(), 7);
    ///
    /// assert!(Posting::new(7, f64::NAN).is_err());
    /// assert!(Posting::new(7, -1.0).is_err());
    /// ```
    pub fn new(doc_id: DocId, frequency: f64) -> Result<Self, PostingError> {
        if !frequency.is_finite() || frequency < 0.0 {
            return Err(PostingError::InvalidFrequency {
                doc_id,
                value: frequency,
            });
        }
        Ok(Self { doc_id, frequency })
    }

    /// Decodes a posting from an untyped storage row.
    ///
    /// A well-formed row holds exactly two fields: the document id followed
    /// by the term frequency. `index` is the row's position within its
    /// posting list and is only used to report errors.
    ///
    /// # Errors
    ///
    /// - [`PostingError::Malformed`] if the row does not have exactly two
    ///   fields.
    /// - [`PostingError::InvalidDocId`] if the first field is not a
    ///   non-negative integer.
    /// - [`PostingError::InvalidFrequency`] if the second field is not a
    ///   finite non-negative number.
    pub fn from_row(index: usize, row: &[f64]) -> Result<Self, PostingError> {
        let &[doc_id, frequency] = row else {
            return Err(PostingError::Malformed {
                index,
                fields: row.len(),
            });
        };
        // `DocId::MAX as f64` rounds up to 2^64, which is itself out of
        // range, so the comparison must be inclusive.
        if !doc_id.is_finite()
            || doc_id < 0.0
            || doc_id.fract() != 0.0
            || doc_id >= DocId::MAX as f64
        {
            return Err(PostingError::InvalidDocId {
                index,
                value: doc_id,
            });
        }
        Self::new(doc_id as DocId, frequency)
    }

    /// The document this posting belongs to.
    #[inline]
    #[must_use]
    pub fn doc_id(&self) -> DocId {
        self.doc_id
    }

    /// How often the term occurs in the document.
    #[inline]
    #[must_use]
    pub fn frequency(&self) -> f64 {
        self.frequency
    }
}

/// A finite, read-only sequence of one term's postings.
///
/// Iteration order does not matter for correctness. Sources backed by
/// loosely-typed storage yield an error for entries that fail to decode;
/// [`score_term`](crate::score_term) aborts on the first such entry.
pub trait PostingSource {
    /// Iterates the term's postings.
    fn postings(&self) -> impl Iterator<Item = Result<Posting, PostingError>> + '_;
}

impl PostingSource for [Posting] {
    fn postings(&self) -> impl Iterator<Item = Result<Posting, PostingError>> + '_ {
        self.iter().copied().map(Ok)
    }
}

impl PostingSource for Vec<Posting> {
    fn postings(&self) -> impl Iterator<Item = Result<Posting, PostingError>> + '_ {
        self.as_slice().postings()
    }
}

/// A posting list as it comes out of untyped storage: one row of numbers
/// per posting, validated lazily while iterating.
///
/// # Examples
///
/// ```
/// # use term_score::{PostingSource, RawPostings};
/// let rows = vec![vec![1.0, 3.0], vec![2.0, 1.0]];
/// let source = RawPostings::new(&rows);
/// assert!(source.postings().all(|entry| entry.is_ok()));
///
/// // A row with the wrong arity surfaces as an error, not a skip.
/// let rows = vec![vec![1.0]];
/// let source = RawPostings::new(&rows);
/// assert!(source.postings().next().unwrap().is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RawPostings<'a> {
    rows: &'a [Vec<f64>],
}

impl<'a> RawPostings<'a> {
    /// Wraps a slice of raw rows.
    #[must_use]
    pub fn new(rows: &'a [Vec<f64>]) -> Self {
        Self { rows }
    }
}

impl PostingSource for RawPostings<'_> {
    fn postings(&self) -> impl Iterator<Item = Result<Posting, PostingError>> + '_ {
        self.rows
            .iter()
            .enumerate()
            .map(|(index, row)| Posting::from_row(index, row))
    }
}
