use super::case_loader::{CaseFailure, CaseResult, TestCase};
/// Data-driven case runner
///
/// Builds every case with its own `UrlMaker` and compares the URL or the
/// error kind with the expectation.
use make_url::{Arg, MakeUrlError, UrlMaker};

fn error_kind(err: &MakeUrlError) -> &'static str {
    match err {
        MakeUrlError::MissingFragment => "missing-fragment",
        MakeUrlError::ParamsNotLast { .. } => "params-not-last",
        MakeUrlError::InvalidUrl { .. } => "invalid-url",
    }
}

fn describe(result: &Result<String, MakeUrlError>) -> String {
    match result {
        Ok(url) => url.clone(),
        Err(err) => format!("error {}: {err}", error_kind(err)),
    }
}

/// Run cases and return results
pub fn run_cases(cases: Vec<TestCase>) -> CaseResult {
    let mut result = CaseResult::default();
    let mut case_num = 0;

    for case in cases {
        let TestCase::Build {
            fragments,
            params,
            config,
            url,
            error,
        } = case
        else {
            continue;
        };
        case_num += 1;

        let mut maker = UrlMaker::new();
        maker.set_config(config);

        let mut args: Vec<Arg> = fragments.iter().map(Arg::from).collect();
        args.extend(params.map(Arg::from));
        let actual = maker.make_url(args);

        let passed = match (&error, &actual) {
            (Some(kind), Err(err)) => {
                kind == error_kind(err)
                    && url.as_deref().is_none_or(|expected| err.url() == Some(expected))
            }
            (None, Ok(actual_url)) => url.as_deref() == Some(actual_url.as_str()),
            _ => false,
        };

        if passed {
            result.passed += 1;
        } else {
            result.failed += 1;
            let expected = match (&error, &url) {
                (Some(kind), _) => format!("error {kind}"),
                (None, Some(url)) => url.clone(),
                (None, None) => "a url".to_string(),
            };
            result.failures.push(CaseFailure {
                case_num,
                fragments,
                expected,
                actual: describe(&actual),
            });
        }
    }

    result
}
