use std::fmt;

use crate::statement::Statement;

/// The AST root: an ordered sequence of top-level statements (§3.2).
/// `Program` owns every node beneath it; the tree is strictly acyclic.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn new(statements: Vec<Statement>) -> Self {
        Program { statements }
    }

    pub fn token_literal(&self) -> &str {
        self.statements.first().map(Statement::token_literal).unwrap_or("")
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}
