/// Represents a literal value in the language.
///
/// `LiteralValue` covers the raw, constant values that can appear directly in
/// source code: integer literals and quoted string literals. Keeping string
/// literals separate from identifiers at the AST level means `print "x"` and
/// `print x` can never be confused during evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// A double-quoted string literal, stored without the quotes.
    Str(String),
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for LiteralValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// `Expr` covers all expression forms of the language: literals, variable
/// references, unary and binary operations, list literals, and list indexing.
/// Each variant carries the source line it came from for error reporting.
///
/// Function calls are deliberately absent: in this language a call is a
/// statement form, never an expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value (integer or string).
    Literal {
        /// The constant value.
        value: LiteralValue,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A unary operation (logical `not`).
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary operation (arithmetic, comparison or logical).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// List literal expression (e.g. `[1, 2, 3]`).
    ListLiteral {
        /// Elements of the list.
        elements: Vec<Self>,
        /// Line number in the source code.
        line:     usize,
    },
    /// List indexing expression (e.g. `items[2]`).
    Index {
        /// The list to index into.
        list:  Box<Self>,
        /// The index to access.
        index: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use multiop::ast::Expr;
    ///
    /// let expr = Expr::Variable { name: "x".to_string(),
    ///                             line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Literal { line, .. }
            | Self::Variable { line, .. }
            | Self::UnaryOp { line, .. }
            | Self::BinaryOp { line, .. }
            | Self::ListLiteral { line, .. }
            | Self::Index { line, .. } => *line,
        }
    }
}

/// An indentation-delimited ordered sequence of statements following a
/// control header (`if`, `while`, `def`).
pub type Block = Vec<Statement>;

/// Represents a user-defined function definition.
///
/// A function binds a list of parameter names to a statement block. The body
/// is captured at definition time and executed only when the function is
/// called.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    /// The name of the function.
    pub name:   String,
    /// The parameter names, in positional order.
    pub params: Vec<String>,
    /// The statements executed when the function is called.
    pub body:   Block,
    /// Line number in the source code.
    pub line:   usize,
}

/// Represents a single statement.
///
/// Statements are the units a program is made of; a program is an ordered
/// sequence of statements.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A variable binding using `let`.
    Let {
        /// The name of the variable.
        name:  String,
        /// The value which is being assigned.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// A `print` statement appending one rendered line to program output.
    Print {
        /// The expression to render.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// A conditional guarding a single pass over its body. There is no
    /// `else` form.
    If {
        /// The guard condition, evaluated once.
        condition: Expr,
        /// The statements executed when the condition is truthy.
        body:      Block,
        /// Line number in the source code.
        line:      usize,
    },
    /// A loop re-evaluating its condition before every pass.
    While {
        /// The loop condition.
        condition: Expr,
        /// The statements executed on each pass.
        body:      Block,
        /// Line number in the source code.
        line:      usize,
    },
    /// A user-defined function declaration.
    Def(FunctionDef),
    /// A function call used as a statement.
    Call {
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function.
        arguments: Vec<Expr>,
        /// Line number in the source code.
        line:      usize,
    },
}

impl Statement {
    /// Gets the line number from `self`.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Let { line, .. }
            | Self::Print { line, .. }
            | Self::If { line, .. }
            | Self::While { line, .. }
            | Self::Call { line, .. } => *line,
            Self::Def(def) => def.line,
        }
    }
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic, comparisons and the logical
/// connectives.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition, or string concatenation when either operand is a string
    /// (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Equal to (`==`)
    Equal,
    /// Logical and (`and`)
    And,
    /// Logical or (`or`)
    Or,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Logical NOT (e.g. `not x`).
    Not,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{Add, And, Div, Equal, Greater, Less, Mul, Or, Sub};
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Less => "<",
            Greater => ">",
            Equal => "==",
            And => "and",
            Or => "or",
        };
        write!(f, "{operator}")
    }
}
