//! Shared models used across features

pub mod execution;
pub mod finding;
pub mod test_case;

pub use execution::{ExecutionRequest, SandboxResult};
pub use finding::{ComplexityReport, Finding, Hint, HintKind, LogicError, SampleCase};
pub use test_case::{TestCase, TestSuiteSummary};
