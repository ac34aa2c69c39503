/// Data-driven case loader
///
/// Cases are a JSON array mixing comment strings and build cases, in the
/// same shape as the `Params` and `PartialConfig` objects callers pass.
use make_url::{Params, PartialConfig};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
#[allow(dead_code)]
pub enum TestCase {
    /// One URL build
    Build {
        fragments: Vec<String>,
        #[serde(default)]
        params: Option<Params>,
        /// Default config of the maker used for this case
        #[serde(default)]
        config: PartialConfig,
        #[serde(default)]
        url: Option<String>,
        /// `missing-fragment`, `params-not-last` or `invalid-url`
        #[serde(default)]
        error: Option<String>,
    },
    /// A comment line (string)
    Comment(String),
}

#[derive(Debug, Clone, Default)]
pub struct CaseResult {
    pub passed: usize,
    pub failed: usize,
    pub failures: Vec<CaseFailure>,
}

#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct CaseFailure {
    pub case_num: usize,
    pub fragments: Vec<String>,
    pub expected: String,
    pub actual: String,
}

impl CaseResult {
    pub fn summary(&self) -> String {
        format!("Passed: {}, Failed: {}", self.passed, self.failed)
    }
}

pub fn load_cases(json: &str) -> serde_json::Result<Vec<TestCase>> {
    serde_json::from_str(json)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_load_comments_and_cases() {
        let cases = load_cases(
            r#"["comment", {"fragments": ["a"], "config": {"strict": true}, "url": "a/"}]"#,
        )
        .unwrap();
        assert_eq!(cases.len(), 2);
        assert!(matches!(cases[0], TestCase::Comment(_)));

        let TestCase::Build { config, url, .. } = &cases[1] else {
            unreachable!("second entry is a build case");
        };
        assert_eq!(config.strict, Some(true));
        assert_eq!(url.as_deref(), Some("a/"));
    }

    #[test]
    fn test_case_result_summary() {
        let result = CaseResult {
            passed: 3,
            failed: 1,
            failures: Vec::new(),
        };
        assert_eq!(result.summary(), "Passed: 3, Failed: 1");
    }
}
