//! HTTP middleware for the web layer.

pub mod tracing;
