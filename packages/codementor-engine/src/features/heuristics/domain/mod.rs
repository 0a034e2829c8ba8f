/// Heuristic Analysis Domain Models
pub mod rule_kind;

pub use rule_kind::*;
