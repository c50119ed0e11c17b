//! Built-in acceptance checks for the rewriter, runnable with `--self-test`.

use crate::rewrite::rewrite;

/// One input/expected-output pair for the rewriter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelfTestCase {
    pub input: &'static str,
    pub version: &'static str,
    pub expected: &'static str,
}

/// Result of running a single case.
#[derive(Debug, Clone, PartialEq)]
pub struct SelfTestOutcome {
    pub case: SelfTestCase,
    pub actual: String,
}

impl SelfTestOutcome {
    pub fn passed(&self) -> bool {
        self.actual == self.case.expected
    }
}

pub const SELF_TEST_CASES: &[SelfTestCase] = &[
    SelfTestCase {
        input: "https://api.emberjs.com/ember/release/",
        version: "3.15",
        expected: "https://api.emberjs.com/ember/3.15/",
    },
    SelfTestCase {
        input: "https://api.emberjs.com/ember/3.20",
        version: "3.15",
        expected: "https://api.emberjs.com/ember/3.15",
    },
    SelfTestCase {
        input: "https://api.emberjs.com/ember-data/release/classes/Model/",
        version: "3.15",
        expected: "https://api.emberjs.com/ember-data/3.15/classes/Model/",
    },
    SelfTestCase {
        input: "https://api.emberjs.com/ember/release/classes/@ember%2Fapplication/methods/getOwner",
        version: "3.15",
        expected: "https://api.emberjs.com/ember/3.15/classes/@ember%2Fapplication/methods/getOwner",
    },
    SelfTestCase {
        input: "https://guides.emberjs.com/release/getting-started/",
        version: "3.15",
        expected: "https://guides.emberjs.com/v3.15.0/getting-started/",
    },
    SelfTestCase {
        input: "https://guides.emberjs.com/release/getting-started/",
        version: "3.16.0",
        expected: "https://guides.emberjs.com/v3.16.0/getting-started/",
    },
];

/// Runs every case in [`SELF_TEST_CASES`] against the default rewriter.
pub fn run_self_test() -> Vec<SelfTestOutcome> {
    SELF_TEST_CASES
        .iter()
        .map(|case| SelfTestOutcome {
            case: *case,
            actual: rewrite(case.input, case.version),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_cases_pass() {
        for outcome in run_self_test() {
            assert!(
                outcome.passed(),
                "{} with {}: expected {}, got {}",
                outcome.case.input,
                outcome.case.version,
                outcome.case.expected,
                outcome.actual
            );
        }
    }

    #[test]
    fn test_failed_outcome_detected() {
        let outcome = SelfTestOutcome {
            case: SELF_TEST_CASES[0],
            actual: SELF_TEST_CASES[0].input.to_string(),
        };
        assert!(!outcome.passed());
    }
}
