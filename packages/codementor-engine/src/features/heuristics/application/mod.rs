pub mod analyzer;

pub use analyzer::{analyze, HeuristicAnalyzer};
