mod expression;
mod program;
mod statement;

pub use expression::{
    ArrayLiteral, AssignExpression, BooleanLiteral, CallExpression, Expression, FunctionLiteral, HashLiteral,
    Identifier, IfExpression, IndexExpression, InfixExpression, IntegerLiteral, PrefixExpression, StringLiteral,
};
pub use program::Program;
pub use statement::{BlockStatement, ExpressionStatement, LetStatement, ReturnStatement, Statement};
