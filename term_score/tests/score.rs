/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

use std::collections::BTreeMap;

use term_score::{DocId, Posting, PostingError, RawPostings, ScoreError, formula, score_term};

const TOLERANCE: f64 = 1e-9;

fn postings(pairs: &[(DocId, f64)]) -> Vec<Posting> {
    pairs
        .iter()
        .map(|&(d, f)| Posting::new(d, f).unwrap())
        .collect()
}

/// Worked example: two documents, one at double the corpus mean length and
/// one at half of it.
///
/// ```text
/// doc 1: lenweight = 0.25 + 0.75 * 2   = 1.75
///        tf        = 3 * 2.2 / (3 + 1.2 * 1.75) = 6.6 / 5.1
/// doc 2: lenweight = 0.25 + 0.75 * 0.5 = 0.625
///        tf        = 1 * 2.2 / (1 + 1.2 * 0.625) = 2.2 / 1.75
/// ```
#[test]
fn worked_example_matches_hand_computation() {
    let postings = postings(&[(1, 3.0), (2, 1.0)]);
    let doc_lengths = BTreeMap::from([(1, 200.0), (2, 50.0)]);
    let mut scores: BTreeMap<DocId, f64> = BTreeMap::new();

    score_term(&mut scores, &postings, &doc_lengths, 2.0, 100.0).unwrap();

    assert_eq!(scores.len(), 2);
    assert!((scores[&1] - 2.0 * 6.6 / 5.1).abs() < TOLERANCE);
    assert!((scores[&2] - 2.0 * 2.2 / 1.75).abs() < TOLERANCE);
    assert!((scores[&1] - 2.5882352941176476).abs() < TOLERANCE);
    assert!((scores[&2] - 2.5142857142857147).abs() < TOLERANCE);
}

#[test]
fn prior_entries_are_overwritten_not_summed() {
    let postings = postings(&[(1, 3.0), (2, 1.0)]);
    let doc_lengths = BTreeMap::from([(1, 200.0), (2, 50.0)]);
    let mut scores: BTreeMap<DocId, f64> = BTreeMap::from([(1, 99.0)]);

    score_term(&mut scores, &postings, &doc_lengths, 2.0, 100.0).unwrap();

    // Not 99.0 + 2.588... — the prior value is replaced outright.
    assert!((scores[&1] - 2.5882352941176476).abs() < TOLERANCE);
}

#[test]
fn repeated_calls_are_idempotent() {
    let postings = postings(&[(1, 3.0), (2, 1.0), (3, 7.0)]);
    let doc_lengths = BTreeMap::from([(1, 200.0), (2, 50.0), (3, 100.0)]);

    let mut first: BTreeMap<DocId, f64> = BTreeMap::new();
    score_term(&mut first, &postings, &doc_lengths, 2.0, 100.0).unwrap();
    let mut second: BTreeMap<DocId, f64> = BTreeMap::new();
    score_term(&mut second, &postings, &doc_lengths, 2.0, 100.0).unwrap();

    assert_eq!(first, second);

    // Scoring into the same accumulator again changes nothing either.
    let again = first.clone();
    let mut first_again = first;
    score_term(&mut first_again, &postings, &doc_lengths, 2.0, 100.0).unwrap();
    assert_eq!(first_again, again);
}

#[test]
fn malformed_raw_row_aborts_the_call() {
    let rows = vec![vec![1.0, 3.0], vec![2.0]];
    let doc_lengths = BTreeMap::from([(1, 200.0), (2, 50.0)]);
    let mut scores: BTreeMap<DocId, f64> = BTreeMap::new();

    let err = score_term(
        &mut scores,
        &RawPostings::new(&rows),
        &doc_lengths,
        2.0,
        100.0,
    )
    .unwrap_err();

    assert_eq!(
        err,
        ScoreError::Posting(PostingError::Malformed { index: 1, fields: 1 })
    );
    // Fail-fast: the first row was already recorded.
    assert_eq!(scores.len(), 1);
    assert!(scores.contains_key(&1));
}

#[test]
fn non_numeric_frequency_aborts_the_call() {
    let rows = vec![vec![1.0, f64::NAN]];
    let doc_lengths = BTreeMap::from([(1, 200.0)]);
    let mut scores: BTreeMap<DocId, f64> = BTreeMap::new();

    let err = score_term(
        &mut scores,
        &RawPostings::new(&rows),
        &doc_lengths,
        2.0,
        100.0,
    )
    .unwrap_err();

    assert!(matches!(
        err,
        ScoreError::Posting(PostingError::InvalidFrequency { doc_id: 1, .. })
    ));
    assert!(scores.is_empty());
}

#[test]
fn unknown_document_aborts_the_call() {
    let postings = postings(&[(42, 1.0)]);
    let doc_lengths = BTreeMap::from([(1, 200.0)]);
    let mut scores: BTreeMap<DocId, f64> = BTreeMap::new();

    let err = score_term(&mut scores, &postings, &doc_lengths, 2.0, 100.0).unwrap_err();

    assert_eq!(err, ScoreError::UnknownDocument { doc_id: 42 });
    assert!(scores.is_empty());
}

/// End to end with the `idf` crate, the way an engine would drive the
/// scorer: one call per query term against a shared accumulator.
#[test]
fn rarer_terms_contribute_more() {
    // Corpus of four documents of equal length; "common" occurs in all
    // four, "rare" in one, both once per document.
    let total_docs = 4;
    let doc_lengths: BTreeMap<DocId, f64> =
        (1..=4).map(|d| (d, 100.0)).collect();
    let mean_doc_length = 100.0;

    let common = postings(&[(1, 1.0), (2, 1.0), (3, 1.0), (4, 1.0)]);
    let rare = postings(&[(2, 1.0)]);

    let mut common_scores: BTreeMap<DocId, f64> = BTreeMap::new();
    score_term(
        &mut common_scores,
        &common,
        &doc_lengths,
        idf::inverse_doc_frequency(total_docs, common.len()),
        mean_doc_length,
    )
    .unwrap();

    let mut rare_scores: BTreeMap<DocId, f64> = BTreeMap::new();
    score_term(
        &mut rare_scores,
        &rare,
        &doc_lengths,
        idf::inverse_doc_frequency(total_docs, rare.len()),
        mean_doc_length,
    )
    .unwrap();

    assert!(rare_scores[&2] > common_scores[&2]);
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest::proptest! {
        /// For valid inputs and a non-negative IDF, every recorded score is
        /// finite, non-negative, and strictly below the term's score bound.
        #[test]
        fn scores_are_finite_and_bounded(
            frequency in 0.1f64..1e6,
            doc_length in 0.0f64..1e5,
            mean_doc_length in 1.0f64..1e4,
            idf in 0.0f64..50.0,
        ) {
            let postings = [Posting::new(1, frequency).unwrap()];
            let doc_lengths = BTreeMap::from([(1, doc_length)]);
            let mut scores: BTreeMap<DocId, f64> = BTreeMap::new();

            score_term(&mut scores, &postings[..], &doc_lengths, idf, mean_doc_length).unwrap();

            let score = scores[&1];
            prop_assert!(score.is_finite());
            prop_assert!(score >= 0.0);
            prop_assert!(score <= formula::score_bound(idf));
        }

        /// Holding everything else fixed, more occurrences of the term can
        /// only raise the document's score.
        #[test]
        fn score_is_increasing_in_frequency(
            frequency in 0.1f64..1e3,
            bump in 0.5f64..100.0,
            doc_length in 1.0f64..1e4,
            mean_doc_length in 1.0f64..1e4,
        ) {
            let idf = 2.0;
            let low = formula::partial_score(frequency, doc_length, mean_doc_length, idf);
            let high = formula::partial_score(frequency + bump, doc_length, mean_doc_length, idf);
            prop_assert!(high > low, "tf saturation must still be strictly increasing");
        }

        /// A document at exactly the corpus mean length is scored with the
        /// unnormalized term-frequency form `f * (K1+1) / (f + K1)`.
        #[test]
        fn mean_length_document_is_unnormalized(
            frequency in 0.1f64..1e4,
            length in 1.0f64..1e4,
        ) {
            let normalized = formula::partial_score(frequency, length, length, 1.0);
            let unnormalized =
                frequency * (formula::K1 + 1.0) / (frequency + formula::K1);
            prop_assert!((normalized - unnormalized).abs() < TOLERANCE);
        }
    }
}
