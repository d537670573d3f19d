use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::evaluator::core::{Context, EvalResult},
};

impl Context {
    /// Executes a function call statement.
    ///
    /// Arguments are evaluated left to right against the *current*
    /// environment, before any parameter is bound. The call then follows
    /// the language's rollback discipline:
    ///
    /// 1. Snapshot the entire variable map.
    /// 2. Bind each parameter to its argument positionally. If the
    ///    argument count differs from the parameter count, the shorter of
    ///    the two wins and the rest is ignored; no arity error is raised.
    /// 3. Execute the function body against the mutated map.
    /// 4. Restore the variable map to the snapshot, unconditionally.
    ///
    /// Every mutation performed inside the call, including writes to names
    /// that existed before it, is discarded on return. Output printed
    /// inside the call is kept, and the function table is never rolled
    /// back. This is dynamic scoping with rollback, not lexical scoping;
    /// the restore is a structural replacement of the owned map, so no
    /// per-key cleanup is involved.
    ///
    /// # Parameters
    /// - `name`: Function name.
    /// - `arguments`: Unevaluated argument expressions.
    /// - `line`: Line number for error reporting.
    ///
    /// # Errors
    /// - [`RuntimeError::UnknownFunction`] if no function with this name
    ///   has been defined.
    /// - Any error raised while evaluating arguments or executing the
    ///   body; the snapshot is restored before the error propagates.
    pub(crate) fn exec_call(&mut self,
                            name: &str,
                            arguments: &[Expr],
                            line: usize)
                            -> EvalResult<()> {
        let mut values = Vec::with_capacity(arguments.len());
        for argument in arguments {
            values.push(self.eval(argument)?);
        }

        let def = self.functions
                      .get(name)
                      .cloned()
                      .ok_or_else(|| RuntimeError::UnknownFunction { name: name.to_string(),
                                                                     line })?;

        let snapshot = self.variables.clone();
        for (param, value) in def.params.iter().zip(values) {
            self.variables.insert(param.clone(), value);
        }

        let result = self.exec_block(&def.body);
        self.variables = snapshot;

        result
    }
}
