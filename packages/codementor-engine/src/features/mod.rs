//! Feature slices
//!
//! Each slice follows domain / application / infrastructure where it needs all
//! three; `execution` has no application logic of its own.

pub mod execution;
pub mod heuristics;
pub mod llm;
