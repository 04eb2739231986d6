//! # s1-mcp-core
//!
//! Core types shared by the s1-mcp tool layer.
//!
//! This crate provides:
//! - The `RpcClient` contract for the game-side RPC server
//! - RPC response types and their success/failure classification
//! - Tool argument handling
//! - Error types

pub mod arguments;
pub mod error;
pub mod rpc;

pub use arguments::ToolArguments;
pub use error::{Result, S1Error, error_codes};
pub use rpc::{Payload, ResponseOutcome, RpcClient, RpcError, RpcResponse};
