use std::collections::HashMap;

use crate::{
    ast::{Expr, FunctionDef, Statement, UnaryOperator},
    error::RuntimeError,
    interpreter::value::Value,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure. The first error raised anywhere
/// aborts the rest of the run; nothing is retried or locally recovered.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state: all variable bindings, all
/// user-defined functions, and the output lines collected from `print`
/// statements. Both maps are flat; the language has no nested scopes.
///
/// ## Usage
///
/// A `Context` is created once per interpreter session and reused across
/// program runs, so bindings left behind by one run are visible to the
/// next. `reset` returns it to a pristine state.
pub struct Context {
    /// A mapping from variable names to their current values. Written by
    /// `let` statements and by call parameter binding.
    pub variables: HashMap<String, Value>,
    /// A mapping from function names to their [`FunctionDef`] definitions.
    /// Populated by `def` statements; never rolled back.
    pub functions: HashMap<String, FunctionDef>,
    /// Lines produced by `print`, in execution order.
    output:        Vec<String>,
    /// Optional statement budget. `None` means unbounded execution: a
    /// `while` loop whose condition never turns false runs forever.
    step_limit:    Option<u64>,
    /// Statements executed by the current program run.
    steps:         u64,
}

#[allow(clippy::new_without_default)]
impl Context {
    /// Creates a new evaluation context with no bindings, no user-defined
    /// functions, and no execution budget.
    #[must_use]
    pub fn new() -> Self {
        Self { variables:  HashMap::new(),
               functions:  HashMap::new(),
               output:     Vec::new(),
               step_limit: None,
               steps:      0, }
    }

    /// Creates a context that refuses to execute more than `limit`
    /// statements per program run.
    ///
    /// This is an embedder safeguard against runaway loops; exceeding the
    /// budget fails the run with [`RuntimeError::StepLimitExceeded`].
    #[must_use]
    pub fn with_step_limit(limit: u64) -> Self {
        Self { step_limit: Some(limit),
               ..Self::new() }
    }

    /// Clears all bindings, functions and buffered output.
    pub fn reset(&mut self) {
        self.variables.clear();
        self.functions.clear();
        self.output.clear();
        self.steps = 0;
    }

    /// Drains and returns the output lines collected so far.
    pub fn take_output(&mut self) -> Vec<String> {
        std::mem::take(&mut self.output)
    }

    /// Appends one rendered line to the program output.
    pub(crate) fn push_output(&mut self, line: String) {
        self.output.push(line);
    }

    /// Executes a whole program against this context.
    ///
    /// The statement budget, when configured, applies per run and is reset
    /// here. Output accumulates in the context; the caller decides whether
    /// to keep or discard it on failure.
    ///
    /// # Errors
    /// Returns the first [`RuntimeError`] raised by any statement. The
    /// remainder of the program is not executed.
    pub fn exec_program(&mut self, program: &[Statement]) -> EvalResult<()> {
        self.steps = 0;
        self.exec_block(program)
    }

    /// Executes the statements of a block in order.
    ///
    /// The block runs against the current environment; there is no
    /// sub-scope, so mutations are visible after the block completes.
    ///
    /// # Errors
    /// Stops at and returns the first failing statement's error.
    pub fn exec_block(&mut self, block: &[Statement]) -> EvalResult<()> {
        for statement in block {
            self.exec_statement(statement)?;
        }
        Ok(())
    }

    /// Executes a single statement.
    ///
    /// Handles bindings, printing, conditionals, loops, function
    /// definitions and calls. Statements may modify the context and never
    /// produce a value.
    ///
    /// # Parameters
    /// - `statement`: Statement to execute.
    ///
    /// # Returns
    /// `Ok(())` on success, or the error that aborted execution.
    pub fn exec_statement(&mut self, statement: &Statement) -> EvalResult<()> {
        self.count_step(statement.line_number())?;

        match statement {
            Statement::Let { name, value, .. } => {
                let value = self.eval(value)?;
                self.variables.insert(name.clone(), value);
                Ok(())
            },
            Statement::Print { expr, .. } => {
                let value = self.eval(expr)?;
                self.push_output(value.to_string());
                Ok(())
            },
            Statement::If { condition, body, .. } => {
                if self.eval(condition)?.is_truthy() {
                    self.exec_block(body)?;
                }
                Ok(())
            },
            Statement::While { condition, body, .. } => {
                while self.eval(condition)?.is_truthy() {
                    self.exec_block(body)?;
                }
                Ok(())
            },
            Statement::Def(def) => {
                // Redefinition silently replaces the previous definition.
                self.functions.insert(def.name.clone(), def.clone());
                Ok(())
            },
            Statement::Call { name,
                              arguments,
                              line, } => self.exec_call(name, arguments, *line),
        }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The
    /// evaluator dispatches based on expression variant: literals,
    /// variables, unary and binary operations, list literals and list
    /// indexing. Evaluation reads the environment but never writes it.
    ///
    /// Both operands of a binary operation are always evaluated; the
    /// logical connectives do not short-circuit.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The computed [`Value`], or the error that aborted evaluation.
    pub fn eval(&self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(Value::from(value)),
            Expr::Variable { name, line } => self.eval_variable(name, *line),
            Expr::UnaryOp { op: UnaryOperator::Not,
                            expr,
                            .. } => Ok(Value::Bool(!self.eval(expr)?.is_truthy())),
            Expr::BinaryOp { left,
                             op,
                             right,
                             line, } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_binary(*op, &left, &right, *line)
            },
            Expr::ListLiteral { elements, .. } => {
                let values = elements.iter()
                                     .map(|element| self.eval(element))
                                     .collect::<EvalResult<Vec<_>>>()?;
                Ok(Value::from(values))
            },
            Expr::Index { list, index, line } => self.eval_index(list, index, *line),
        }
    }

    /// Looks up a variable by name.
    ///
    /// An unbound name is a hard error; identifiers never fall back to a
    /// default value or to their own spelling.
    fn eval_variable(&self, name: &str, line: usize) -> EvalResult<Value> {
        self.variables
            .get(name)
            .cloned()
            .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.to_string(),
                                                             line })
    }

    /// Evaluates a list indexing expression.
    ///
    /// The base expression must evaluate to a list and the index to an
    /// integer inside `[0, len)`.
    fn eval_index(&self, list: &Expr, index: &Expr, line: usize) -> EvalResult<Value> {
        let elements = match self.eval(list)? {
            Value::List(elements) => elements,
            other => {
                return Err(RuntimeError::TypeError { details: format!("cannot index into {}",
                                                                      other.type_name()),
                                                     line });
            },
        };

        let index = match self.eval(index)? {
            Value::Integer(i) => i,
            other => {
                return Err(RuntimeError::TypeError { details: format!("list index must be an integer, found {}",
                                                                      other.type_name()),
                                                     line });
            },
        };

        usize::try_from(index).ok()
                              .and_then(|i| elements.get(i))
                              .cloned()
                              .ok_or(RuntimeError::IndexOutOfRange { index,
                                                                     len: elements.len(),
                                                                     line })
    }

    /// Counts one executed statement against the configured budget.
    fn count_step(&mut self, line: usize) -> EvalResult<()> {
        if let Some(limit) = self.step_limit {
            self.steps += 1;
            if self.steps > limit {
                return Err(RuntimeError::StepLimitExceeded { limit, line });
            }
        }
        Ok(())
    }
}
