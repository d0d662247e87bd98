use crate::core::palindrome::is_palindrome;
use crate::core::second_largest::second_largest_with;
use crate::core::{Case, CaseOutcome, CaseSource, Expectation, RunReport, SecondLargestMode};
use crate::utils::error::Result;

pub struct TaskRunner<S: CaseSource> {
    source: S,
}

impl<S: CaseSource> TaskRunner<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// 執行所有案例；個別案例失敗不會中斷整個執行
    pub fn run(&self) -> Result<RunReport> {
        let cases = self.source.cases()?;
        let mode = self.source.mode();
        tracing::info!("🚀 Running {} case(s) in {} mode", cases.len(), mode.as_str());

        let outcomes: Vec<CaseOutcome> = cases.iter().map(|case| evaluate(case, mode)).collect();
        let report = RunReport { mode, outcomes };

        for failure in report.failures() {
            tracing::warn!(
                "❌ {} - expected {}, got {}",
                failure.name,
                failure.expected,
                failure.actual
            );
        }
        tracing::info!(
            "📊 {} passed, {} failed",
            report.passed(),
            report.failed()
        );

        Ok(report)
    }
}

pub fn evaluate(case: &Case, mode: SecondLargestMode) -> CaseOutcome {
    let outcome = match case {
        Case::SecondLargest {
            name,
            values,
            expect,
        } => {
            let actual = second_largest_with(values, mode);
            let passed = match (&actual, expect) {
                (Ok(got), Expectation::Value(want)) => got == want,
                (Err(err), Expectation::Error(want)) => err.expected_kind() == Some(*want),
                _ => false,
            };
            let actual = match actual {
                Ok(value) => value.to_string(),
                Err(err) => match err.expected_kind() {
                    Some(kind) => format!("error({})", kind.as_str()),
                    None => format!("error({})", err),
                },
            };
            CaseOutcome {
                name: name.clone(),
                passed,
                expected: expect.to_string(),
                actual,
            }
        }
        Case::Palindrome {
            name,
            input,
            expect,
        } => {
            let actual = is_palindrome(input);
            CaseOutcome {
                name: name.clone(),
                passed: actual == *expect,
                expected: expect.to_string(),
                actual: actual.to_string(),
            }
        }
    };

    tracing::debug!(
        case = %outcome.name,
        passed = outcome.passed,
        "evaluated case"
    );
    outcome
}
