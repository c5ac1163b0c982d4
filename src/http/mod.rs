//! HTTP transport layer
//!
//! Health probe, service descriptor, and the simulated `/process` workload.

pub mod handlers;
