//! Request middleware for tracing and panic containment.

pub mod catch_panic;
pub mod trace;

pub use catch_panic::CatchPanic;
pub use trace::Trace;
