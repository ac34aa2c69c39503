use super::case_loader::{TestCase, load_cases};
use super::case_runner::run_cases;

#[test]
fn test_case_data() {
    let cases = load_cases(include_str!("./make_url_cases.json")).expect("Failed to parse case data");
    let total = cases
        .iter()
        .filter(|case| matches!(case, TestCase::Build { .. }))
        .count();
    assert!(total > 0, "no build cases loaded");

    let result = run_cases(cases);
    for failure in &result.failures {
        eprintln!(
            "case #{} {:?}\n  expected: {}\n  actual:   {}",
            failure.case_num, failure.fragments, failure.expected, failure.actual
        );
    }

    assert_eq!(result.failed, 0, "{}", result.summary());
    assert_eq!(result.passed, total);
}
