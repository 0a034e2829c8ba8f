//! Batch verification of user test cases against the sandbox
//!
//! Cases run strictly one after another, in submission order, with at most
//! one sandbox call in flight. Failures stay local to the case that hit them.
//! Callers must not run the same case list concurrently from two places.

use std::sync::Arc;

use codementor_engine::{ExecutionRequest, SandboxPort, SandboxResult, TestCase, TestSuiteSummary};
use tracing::{debug, error, info};

pub struct TestCaseRunner {
    sandbox: Arc<dyn SandboxPort>,
}

impl TestCaseRunner {
    pub fn new(sandbox: Arc<dyn SandboxPort>) -> Self {
        Self { sandbox }
    }

    /// Run every case and return them in the same order with verdicts filled in
    pub async fn run_all(&self, code: &str, cases: Vec<TestCase>) -> Vec<TestCase> {
        info!("Running {} test case(s)", cases.len());

        let mut results = Vec::with_capacity(cases.len());
        for (index, mut case) in cases.into_iter().enumerate() {
            let request = ExecutionRequest::new(code, case.input.clone());

            match self.sandbox.execute(&request).await {
                Ok(result) => {
                    record_verdict(&mut case, &result);
                    debug!(
                        "Case {} ({}) {}",
                        index + 1,
                        case.id,
                        if case.passed == Some(true) { "passed" } else { "failed" }
                    );
                }
                Err(e) => {
                    error!("Case {} ({}) could not be executed: {}", index + 1, case.id, e);
                    case.actual_output = Some(format!("Error: {}", e));
                    case.passed = Some(false);
                }
            }

            results.push(case);
        }

        info!("Test run finished: {}", TestSuiteSummary::from_cases(&results));
        results
    }
}

/// Compare trimmed output; interior whitespace stays significant
fn record_verdict(case: &mut TestCase, result: &SandboxResult) {
    let actual = result.output.trim();
    case.passed = Some(actual == case.expected_output.trim());
    case.actual_output = Some(actual.to_string());
}
