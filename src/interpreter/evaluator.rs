/// Core evaluation logic and context management.
///
/// Contains the main execution engine, the runtime context with its
/// variable and function stores, output collection, and error propagation.
pub mod core;

/// Binary operator evaluation logic.
///
/// Handles the execution of all binary operations in expressions:
/// arithmetic (including string concatenation), comparisons, and logical
/// connectives.
pub mod binary;

/// Function call evaluation.
///
/// Implements the call statement: argument evaluation, positional
/// parameter binding, and the snapshot/restore scoping discipline.
pub mod call;
