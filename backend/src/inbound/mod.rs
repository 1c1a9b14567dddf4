//! Inbound adapters that translate external requests into resource calls
//! while keeping framework details at the edge.

pub mod http;
