//! Synthetic processing results and the static service descriptor
//!
//! Nothing here performs real work: the envelope echoes its input and attaches random scores.

pub mod descriptor;
pub mod envelope;
