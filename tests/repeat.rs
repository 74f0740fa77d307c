use strmatch::repeat::{longest_run, longest_run_naive, longest_run_span, run_at, StrProfile};
use strmatch::Error;

#[test]
fn test_documented_examples() {
    assert_eq!(longest_run("", "AT").unwrap(), 0);
    assert!(matches!(longest_run("AATG", ""), Err(Error::EmptyPattern)));
    assert_eq!(longest_run("AATGAATGAATGAATG", "AATG").unwrap(), 4);
    assert_eq!(longest_run("AATGAATGAATGAATGAT", "AATG").unwrap(), 4);
    assert_eq!(longest_run("GATTACA", "TA").unwrap(), 1);
}

#[test]
fn test_naive_agrees_on_examples() {
    let cases = [
        ("", "AT"),
        ("AATGAATGAATGAATG", "AATG"),
        ("AATGAATGAATGAATGAT", "AATG"),
        ("GATTACA", "TA"),
        ("TTTTTTT", "TT"),
        ("AGATCAGATCAGATCTTAGATC", "AGATC"),
    ];
    for (seq, pattern) in cases {
        assert_eq!(
            longest_run(seq, pattern).unwrap(),
            longest_run_naive(seq, pattern).unwrap(),
            "mismatch for {} / {}",
            seq,
            pattern
        );
    }
}

#[test]
fn test_run_at_matches_longest_span() {
    let seq = "CCAGATCAGATCAGATCGGAGATC";
    let span = longest_run_span(seq, "AGATC").unwrap().unwrap();
    assert_eq!(span.start, 2);
    assert_eq!(span.count, 3);
    assert_eq!(run_at(seq, "AGATC", span.start).unwrap(), span.count);
    assert_eq!(span.len(), 15);
}

#[test]
fn test_case_sensitive_comparison() {
    assert_eq!(longest_run("aatgaatg", "AATG").unwrap(), 0);
    assert_eq!(longest_run("aatgAATG", "AATG").unwrap(), 1);
}

#[test]
fn test_repeated_calls_are_identical() {
    // Copies join across the boundary: GG TATC + TATC TATC TATC GG
    let seq = "TATCTATCTATCGGTATC".repeat(50);
    let first = StrProfile::compute(&seq, &["TATC", "GGTA"]).unwrap();
    let second = StrProfile::compute(&seq, &["TATC", "GGTA"]).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.get("TATC"), Some(4));
}
