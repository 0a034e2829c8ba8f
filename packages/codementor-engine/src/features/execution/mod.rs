//! Remote code execution
//!
//! - `domain`: the `SandboxPort` trait
//! - `infrastructure`: Piston wire format, reply normalization, HTTP adapter

pub mod domain;
pub mod infrastructure;

pub use domain::SandboxPort;
pub use infrastructure::PistonClient;
