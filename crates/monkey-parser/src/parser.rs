use monkey_ast::{
    ArrayLiteral, AssignExpression, BlockStatement, BooleanLiteral, CallExpression, Expression, ExpressionStatement,
    FunctionLiteral, HashLiteral, Identifier, IfExpression, IndexExpression, InfixExpression, IntegerLiteral,
    LetStatement, PrefixExpression, Program, ReturnStatement, Statement, StringLiteral,
};
use monkey_errors::ParseError;
use monkey_lexer::{Lexer, Token, TokenKind};

use crate::precedence::{precedence_of, Precedence};

/// Single-pass Pratt parser over a token stream (§4.2). Parsing never
/// panics: a recoverable failure records a [`ParseError`] and the
/// caller skips the offending statement, but `parse_program` always
/// returns a `Program`.
pub struct Parser {
    lexer: Lexer,
    cur_token: Token,
    peek_token: Token,
    errors: Vec<ParseError>,
}

impl Parser {
    pub fn new(mut lexer: Lexer) -> Self {
        let cur_token = lexer.next_token();
        let peek_token = lexer.next_token();
        Parser { lexer, cur_token, peek_token, errors: Vec::new() }
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.iter().map(ParseError::to_string).collect()
    }

    fn next_token(&mut self) {
        std::mem::swap(&mut self.cur_token, &mut self.peek_token);
        self.peek_token = self.lexer.next_token();
    }

    fn cur_is(&self, kind: TokenKind) -> bool {
        self.cur_token.kind == kind
    }

    fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek_token.kind == kind
    }

    /// Advances past `kind` if the peek token matches, else records an
    /// `ExpectedToken` error and leaves the cursor where it was.
    fn expect_peek(&mut self, kind: TokenKind) -> bool {
        if self.peek_is(kind) {
            self.next_token();
            true
        } else {
            self.errors.push(ParseError::ExpectedToken {
                expected: kind.to_string(),
                got: self.peek_token.kind.to_string(),
            });
            false
        }
    }

    fn peek_precedence(&self) -> Precedence {
        precedence_of(self.peek_token.kind)
    }

    fn cur_precedence(&self) -> Precedence {
        precedence_of(self.cur_token.kind)
    }

    #[tracing::instrument(level = "debug", skip_all)]
    pub fn parse_program(&mut self) -> Program {
        let mut statements = Vec::new();
        while !self.cur_is(TokenKind::Eof) {
            if let Some(statement) = self.parse_statement() {
                tracing::trace!(?statement, "parsed top-level statement");
                statements.push(statement);
            }
            self.next_token();
        }
        Program::new(statements)
    }

    fn parse_statement(&mut self) -> Option<Statement> {
        match self.cur_token.kind {
            TokenKind::Let => self.parse_let_statement(),
            TokenKind::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    fn parse_let_statement(&mut self) -> Option<Statement> {
        let token = self.cur_token.clone();

        if !self.expect_peek(TokenKind::Ident) {
            return None;
        }
        let name = Identifier { token: self.cur_token.clone(), name: self.cur_token.literal.clone() };

        if !self.expect_peek(TokenKind::Assign) {
            return None;
        }
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest)?;

        if self.peek_is(TokenKind::Semicolon) {
            self.next_token();
        }

        Some(Statement::Let(LetStatement { token, name, value }))
    }

    fn parse_return_statement(&mut self) -> Option<Statement> {
        let token = self.cur_token.clone();
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest)?;

        if self.peek_is(TokenKind::Semicolon) {
            self.next_token();
        }

        Some(Statement::Return(ReturnStatement { token, value }))
    }

    fn parse_expression_statement(&mut self) -> Option<Statement> {
        let token = self.cur_token.clone();
        let expression = self.parse_expression(Precedence::Lowest)?;

        if self.peek_is(TokenKind::Semicolon) {
            self.next_token();
        }

        Some(Statement::Expression(ExpressionStatement { token, expression }))
    }

    fn parse_block_statement(&mut self) -> BlockStatement {
        let token = self.cur_token.clone();
        let mut statements = Vec::new();

        self.next_token();
        while !self.cur_is(TokenKind::Rbrace) && !self.cur_is(TokenKind::Eof) {
            if let Some(statement) = self.parse_statement() {
                statements.push(statement);
            }
            self.next_token();
        }

        BlockStatement { token, statements }
    }

    #[tracing::instrument(level = "trace", skip(self))]
    fn parse_expression(&mut self, precedence: Precedence) -> Option<Expression> {
        let mut left = self.parse_prefix()?;

        while !self.peek_is(TokenKind::Semicolon) && precedence < self.peek_precedence() {
            self.next_token();
            left = self.parse_infix(left)?;
        }

        Some(left)
    }

    fn parse_prefix(&mut self) -> Option<Expression> {
        match self.cur_token.kind {
            TokenKind::Ident => Some(self.parse_identifier()),
            TokenKind::Int => self.parse_integer_literal(),
            TokenKind::StringLit => Some(self.parse_string_literal()),
            TokenKind::True | TokenKind::False => Some(self.parse_boolean()),
            TokenKind::Bang | TokenKind::Minus => self.parse_prefix_expression(),
            TokenKind::Lparen => self.parse_grouped_expression(),
            TokenKind::If => self.parse_if_expression(),
            TokenKind::Function => self.parse_function_literal(),
            TokenKind::Lbracket => self.parse_array_literal(),
            TokenKind::Lbrace => self.parse_hash_literal(),
            other => {
                self.errors.push(ParseError::NoPrefixParseFn { found: other.to_string() });
                None
            }
        }
    }

    fn parse_infix(&mut self, left: Expression) -> Option<Expression> {
        match self.cur_token.kind {
            TokenKind::Lparen => self.parse_call_expression(left),
            TokenKind::Lbracket => self.parse_index_expression(left),
            TokenKind::Assign => self.parse_assign_expression(left),
            _ => self.parse_infix_expression(left),
        }
    }

    fn parse_identifier(&mut self) -> Expression {
        Expression::Identifier(Identifier { token: self.cur_token.clone(), name: self.cur_token.literal.clone() })
    }

    fn parse_integer_literal(&mut self) -> Option<Expression> {
        let token = self.cur_token.clone();
        match token.literal.parse::<i64>() {
            Ok(value) => Some(Expression::IntegerLiteral(IntegerLiteral { token, value })),
            Err(source) => {
                self.errors.push(ParseError::InvalidInteger { literal: token.literal.clone(), source: source.into() });
                None
            }
        }
    }

    fn parse_string_literal(&mut self) -> Expression {
        let token = self.cur_token.clone();
        Expression::StringLiteral(StringLiteral { value: token.literal.clone(), token })
    }

    fn parse_boolean(&mut self) -> Expression {
        let token = self.cur_token.clone();
        let value = self.cur_is(TokenKind::True);
        Expression::Boolean(BooleanLiteral { token, value })
    }

    fn parse_prefix_expression(&mut self) -> Option<Expression> {
        let token = self.cur_token.clone();
        let operator = token.literal.clone();
        self.next_token();
        let right = self.parse_expression(Precedence::Prefix)?;
        Some(Expression::Prefix(PrefixExpression { token, operator, right: Box::new(right) }))
    }

    fn parse_infix_expression(&mut self, left: Expression) -> Option<Expression> {
        let token = self.cur_token.clone();
        let operator = token.literal.clone();
        let precedence = self.cur_precedence();
        self.next_token();
        let right = self.parse_expression(precedence)?;
        Some(Expression::Infix(InfixExpression { token, left: Box::new(left), operator, right: Box::new(right) }))
    }

    fn parse_grouped_expression(&mut self) -> Option<Expression> {
        self.next_token();
        let expression = self.parse_expression(Precedence::Lowest)?;
        if !self.expect_peek(TokenKind::Rparen) {
            return None;
        }
        Some(expression)
    }

    fn parse_if_expression(&mut self) -> Option<Expression> {
        let token = self.cur_token.clone();

        if !self.expect_peek(TokenKind::Lparen) {
            return None;
        }
        self.next_token();
        let condition = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(TokenKind::Rparen) {
            return None;
        }
        if !self.expect_peek(TokenKind::Lbrace) {
            return None;
        }
        let consequence = self.parse_block_statement();

        let alternative = if self.peek_is(TokenKind::Else) {
            self.next_token();
            if !self.expect_peek(TokenKind::Lbrace) {
                return None;
            }
            Some(self.parse_block_statement())
        } else {
            None
        };

        Some(Expression::If(IfExpression { token, condition: Box::new(condition), consequence, alternative }))
    }

    fn parse_function_literal(&mut self) -> Option<Expression> {
        let token = self.cur_token.clone();

        if !self.expect_peek(TokenKind::Lparen) {
            return None;
        }
        let parameters = self.parse_function_parameters()?;

        if !self.expect_peek(TokenKind::Lbrace) {
            return None;
        }
        let body = self.parse_block_statement();

        Some(Expression::FunctionLiteral(FunctionLiteral { token, parameters, body }))
    }

    fn parse_function_parameters(&mut self) -> Option<Vec<Identifier>> {
        let mut identifiers = Vec::new();

        if self.peek_is(TokenKind::Rparen) {
            self.next_token();
            return Some(identifiers);
        }

        self.next_token();
        identifiers.push(Identifier { token: self.cur_token.clone(), name: self.cur_token.literal.clone() });

        while self.peek_is(TokenKind::Comma) {
            self.next_token();
            self.next_token();
            identifiers.push(Identifier { token: self.cur_token.clone(), name: self.cur_token.literal.clone() });
        }

        if !self.expect_peek(TokenKind::Rparen) {
            return None;
        }

        Some(identifiers)
    }

    fn parse_call_expression(&mut self, function: Expression) -> Option<Expression> {
        let token = self.cur_token.clone();
        let arguments = self.parse_expression_list(TokenKind::Rparen)?;
        Some(Expression::Call(CallExpression { token, function: Box::new(function), arguments }))
    }

    fn parse_array_literal(&mut self) -> Option<Expression> {
        let token = self.cur_token.clone();
        let elements = self.parse_expression_list(TokenKind::Rbracket)?;
        Some(Expression::ArrayLiteral(ArrayLiteral { token, elements }))
    }

    fn parse_index_expression(&mut self, left: Expression) -> Option<Expression> {
        let token = self.cur_token.clone();
        self.next_token();
        let index = self.parse_expression(Precedence::Lowest)?;
        if !self.expect_peek(TokenKind::Rbracket) {
            return None;
        }
        Some(Expression::Index(IndexExpression { token, left: Box::new(left), index: Box::new(index) }))
    }

    fn parse_assign_expression(&mut self, left: Expression) -> Option<Expression> {
        let token = self.cur_token.clone();
        let name = match left {
            Expression::Identifier(identifier) => identifier,
            other => {
                self.errors.push(ParseError::NoPrefixParseFn { found: format!("assignment target {other}") });
                return None;
            }
        };
        self.next_token();
        let value = self.parse_expression(Precedence::Lowest)?;
        Some(Expression::Assign(AssignExpression { token, name, value: Box::new(value) }))
    }

    fn parse_hash_literal(&mut self) -> Option<Expression> {
        let token = self.cur_token.clone();
        let mut pairs = Vec::new();

        while !self.peek_is(TokenKind::Rbrace) {
            self.next_token();
            let key = self.parse_expression(Precedence::Lowest)?;

            if !self.expect_peek(TokenKind::Colon) {
                return None;
            }
            self.next_token();
            let value = self.parse_expression(Precedence::Lowest)?;

            pairs.push((key, value));

            if !self.peek_is(TokenKind::Rbrace) && !self.expect_peek(TokenKind::Comma) {
                return None;
            }
        }

        if !self.expect_peek(TokenKind::Rbrace) {
            return None;
        }

        Some(Expression::HashLiteral(HashLiteral { token, pairs }))
    }

    fn parse_expression_list(&mut self, end: TokenKind) -> Option<Vec<Expression>> {
        let mut list = Vec::new();

        if self.peek_is(end) {
            self.next_token();
            return Some(list);
        }

        self.next_token();
        list.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek_is(TokenKind::Comma) {
            self.next_token();
            self.next_token();
            list.push(self.parse_expression(Precedence::Lowest)?);
        }

        if !self.expect_peek(end) {
            return None;
        }

        Some(list)
    }
}
