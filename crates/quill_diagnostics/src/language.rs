//! Small language enums carried by diagnostics.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of statement whose body a diagnostic talks about.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum StatementKind {
    /// `do { } while (cond)`
    DoWhileLoop,
    /// `for (;;)`, `for (x in y)`, and `for (x of y)`
    ForLoop,
    /// `if (cond)`
    IfStatement,
    /// `while (cond)`
    WhileLoop,
    /// `with (obj)`
    WithStatement,
    /// `label: statement`
    LabelledStatement,
}

impl StatementKind {
    /// Returns the noun-phrase form used in headlines, e.g. `'do-while' loop`.
    pub fn headlinese(self) -> &'static str {
        match self {
            StatementKind::DoWhileLoop => "'do-while' loop",
            StatementKind::ForLoop => "'for' loop",
            StatementKind::IfStatement => "'if' statement",
            StatementKind::WhileLoop => "'while' loop",
            StatementKind::WithStatement => "'with' statement",
            StatementKind::LabelledStatement => "labelled statement",
        }
    }

    /// Returns the form used mid-sentence, with its article, e.g. `an 'if' statement`.
    pub fn singular(self) -> &'static str {
        match self {
            StatementKind::DoWhileLoop => "a 'do-while' loop",
            StatementKind::ForLoop => "a 'for' loop",
            StatementKind::IfStatement => "an 'if' statement",
            StatementKind::WhileLoop => "a 'while' loop",
            StatementKind::WithStatement => "a 'with' statement",
            StatementKind::LabelledStatement => "a labelled statement",
        }
    }
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.headlinese())
    }
}

/// How a variable was declared.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum VariableKind {
    /// `catch (e)`
    Catch,
    /// `class C {}`
    Class,
    /// `const x = ...`
    Const,
    /// `function f() {}`
    Function,
    /// `import x from "mod"`
    Import,
    /// `let x`
    Let,
    /// a function parameter
    Parameter,
    /// `var x`
    Var,
}

impl VariableKind {
    /// Returns the keyword (or role) that declared the variable.
    pub fn as_str(self) -> &'static str {
        match self {
            VariableKind::Catch => "catch",
            VariableKind::Class => "class",
            VariableKind::Const => "const",
            VariableKind::Function => "function",
            VariableKind::Import => "import",
            VariableKind::Let => "let",
            VariableKind::Parameter => "parameter",
            VariableKind::Var => "var",
        }
    }
}

impl fmt::Display for VariableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
