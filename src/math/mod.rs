//! Integer arithmetic used by the synthesis loop

/// Depth-to-displacement conversion and lookup
pub mod displacement;
/// Floored modulo with non-negative results
pub mod modulo;
