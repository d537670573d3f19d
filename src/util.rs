/// Numeric conversion helpers.
///
/// This module provides safe functions for converting between integer and
/// floating-point types without risking silent data loss or rounding
/// errors. Use these helpers whenever a conversion between `i64` and `f64`
/// must be guaranteed exact.
pub mod num;
