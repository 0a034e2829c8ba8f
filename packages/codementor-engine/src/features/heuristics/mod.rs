/// Heuristic Analysis Feature
///
/// Deterministic pattern checks that stand in for the remote critic.
///
/// ## Rules (first match wins)
/// 1. Division by a literal zero
/// 2. Dynamic allocation with no deallocation anywhere
/// 3. Bare pointer declaration with no null sentinel
/// 4. Statement line missing its terminator
///
/// No rule firing yields a clean Finding with best-practice hints.
pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-export application layer (primary interface)
pub use application::*;

// Re-export domain types
pub use domain::*;
