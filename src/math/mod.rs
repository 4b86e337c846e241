//! Mathematical utilities for the layout engine

/// Canvas height rounding
pub mod rounding;
