//! Integration tests for the public alignment API.

use std::io::Write as _;

use pairalign::align::{align_global, align_local, Algorithm, AlignmentScoring, GAP};
use pairalign::sequence::{clean, read_fasta, record_id};
use pairalign::stats::AlignmentMetrics;
use pairalign::utils::mutate::mutate_sequence;

fn strip_gaps(aligned: &[u8]) -> Vec<u8> {
    aligned.iter().copied().filter(|&b| b != GAP).collect()
}

#[test]
fn global_known_alignment() {
    let scoring = AlignmentScoring::new(1, -1, -2);
    let result = align_global(b"GATTACA", b"GTCGACGC", &scoring);

    assert_eq!(result.score, -3);
    assert_eq!(result.aligned_query, b"GATTAC-A");
    assert_eq!(result.aligned_subject, b"GTCGACGC");

    let metrics =
        AlignmentMetrics::from_aligned_pair(&result.aligned_query, &result.aligned_subject);
    assert_eq!(metrics.matches, 3);
    assert_eq!(metrics.mismatches, 4);
    assert_eq!(metrics.gaps, 1);
    assert!((metrics.identity - 37.5).abs() < 1e-9);
}

#[test]
fn global_reconstructs_inputs() {
    let scoring = AlignmentScoring::new(1, -1, -2);
    let base = b"ACGTACGTTGCAACGGTTACGT".to_vec();

    for seed in 0..10u64 {
        let (mutated, _) = mutate_sequence(&base, 6, seed);
        let result = align_global(&base, &mutated, &scoring);

        assert_eq!(result.aligned_query.len(), result.aligned_subject.len());
        assert!(result.aligned_query.len() >= base.len().max(mutated.len()));
        assert_eq!(strip_gaps(&result.aligned_query), base);
        assert_eq!(strip_gaps(&result.aligned_subject), mutated);
    }
}

#[test]
fn global_self_alignment_is_gapless() {
    let scoring = AlignmentScoring::new(2, -1, -2);
    let seq = b"ACGTTGCA";
    let result = align_global(seq, seq, &scoring);

    assert_eq!(result.score, seq.len() as i32 * 2);
    assert_eq!(result.aligned_query, seq);
    assert_eq!(result.aligned_subject, seq);
}

#[test]
fn global_empty_inputs() {
    let scoring = AlignmentScoring::new(1, -1, -2);

    let both = align_global(b"", b"", &scoring);
    assert_eq!(both.score, 0);
    assert!(both.aligned_query.is_empty());
    assert!(both.aligned_subject.is_empty());

    let one = align_global(b"", b"AC", &scoring);
    assert_eq!(one.score, -4);
    assert_eq!(one.aligned_query, b"--");
    assert_eq!(one.aligned_subject, b"AC");
}

#[test]
fn local_finds_exact_substring() {
    let scoring = AlignmentScoring::new(1, -1, -2);
    let result = align_local(b"AAAGGGTTTTCCCC", b"GGGTT", &scoring);

    assert_eq!(result.score, 5);
    assert_eq!(result.aligned_query, b"GGGTT");
    assert_eq!(result.aligned_subject, b"GGGTT");
    assert_eq!(result.q_start, 4);
    assert_eq!(result.q_end, 8);
}

#[test]
fn local_alignment_covers_substrings_of_inputs() {
    let scoring = AlignmentScoring::new(1, -1, -2);
    let base = b"TTGACCTTAGGCATTGACGT".to_vec();

    for seed in 0..10u64 {
        let (mutated, _) = mutate_sequence(&base, 4, seed);
        let result = align_local(&base, &mutated, &scoring);

        assert!(result.score >= 0);
        assert_eq!(result.aligned_query.len(), result.aligned_subject.len());

        let q = strip_gaps(&result.aligned_query);
        let s = strip_gaps(&result.aligned_subject);
        if !q.is_empty() {
            assert_eq!(&base[result.q_start - 1..result.q_end], &q[..]);
        }
        if !s.is_empty() {
            assert_eq!(&mutated[result.s_start - 1..result.s_end], &s[..]);
        }
    }
}

#[test]
fn local_score_never_negative() {
    let scoring = AlignmentScoring::new(1, -10, -10);
    let result = align_local(b"AAAA", b"TTTT", &scoring);

    assert_eq!(result.score, 0);
    assert!(result.aligned_query.is_empty());
    assert!(result.aligned_subject.is_empty());
}

#[test]
fn metrics_partition_alignment_columns() {
    let scoring = AlignmentScoring::new(1, -1, -2);
    let base = b"ACGGCTTAAGGCTA".to_vec();

    for seed in 0..10u64 {
        let (mutated, _) = mutate_sequence(&base, 5, seed);
        for algorithm in [Algorithm::Global, Algorithm::Local] {
            let result = algorithm.align(&base, &mutated, &scoring);
            let metrics = AlignmentMetrics::from_aligned_pair(
                &result.aligned_query,
                &result.aligned_subject,
            );

            assert_eq!(
                metrics.matches + metrics.mismatches + metrics.gaps,
                metrics.length
            );

            let expected = if metrics.length == 0 {
                0.0
            } else {
                100.0 * metrics.matches as f64 / metrics.length as f64
            };
            assert!((metrics.identity - expected).abs() < 1e-9);
        }
    }
}

#[test]
fn algorithm_dispatch_accepts_aliases() {
    for name in ["needleman-wunsch", "needleman", "global", "Global"] {
        assert_eq!(Algorithm::from_name(name).unwrap(), Algorithm::Global);
    }
    for name in ["smith-waterman", "smith", "local", "LOCAL"] {
        assert_eq!(Algorithm::from_name(name).unwrap(), Algorithm::Local);
    }
}

#[test]
fn algorithm_dispatch_rejects_unknown_names() {
    let err = Algorithm::from_name("blastp").unwrap_err();
    assert!(err.to_string().contains("unrecognized algorithm"));
}

#[test]
fn fasta_records_are_cleaned_before_alignment() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("query.fasta");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, ">q1 first query").unwrap();
    writeln!(file, "gatt").unwrap();
    writeln!(file, "aca").unwrap();
    drop(file);

    let records = read_fasta(&path).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(record_id(&records[0]), "q1");
    assert_eq!(clean(records[0].seq()), b"GATTACA");
}

#[test]
fn empty_fasta_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.fasta");
    std::fs::write(&path, "").unwrap();

    let err = read_fasta(&path).unwrap_err();
    assert!(err.to_string().contains("no sequences found"));
}

#[test]
fn mutation_fixtures_are_deterministic() {
    let (seq_a, log_a) = mutate_sequence(b"ACGTACGT", 5, 8);
    let (seq_b, log_b) = mutate_sequence(b"ACGTACGT", 5, 8);

    assert_eq!(seq_a, seq_b);
    assert_eq!(log_a, log_b);
    assert_eq!(log_a.len(), 5);
}
