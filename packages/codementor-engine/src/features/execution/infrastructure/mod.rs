//! Sandbox adapters

pub mod piston_client;
pub mod piston_wire;

pub use piston_client::PistonClient;
pub use piston_wire::{PistonExecuteRequest, PistonExecuteResponse, PistonFile, PistonStage};
