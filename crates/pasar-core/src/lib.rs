//! Shared service infrastructure: tracing, health endpoints, request-id
//! middleware, and the gateway identity extractor.

pub mod health;
pub mod identity;
pub mod middleware;
pub mod tracing;
