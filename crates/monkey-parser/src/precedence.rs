use monkey_lexer::TokenKind;

/// The precedence ladder of §4.2, low to high. `=` is pinned at `Call`
/// so `ident = expr` parses as an assignment expression rather than a
/// statement form (§4.2, §4.2.3).
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub enum Precedence {
    Lowest,
    Equals,
    LessGreater,
    Sum,
    Product,
    Prefix,
    Call,
}

pub fn precedence_of(kind: TokenKind) -> Precedence {
    match kind {
        TokenKind::Eq | TokenKind::NotEq => Precedence::Equals,
        TokenKind::Lt | TokenKind::Gt => Precedence::LessGreater,
        TokenKind::Plus | TokenKind::Minus => Precedence::Sum,
        TokenKind::Slash | TokenKind::Asterisk => Precedence::Product,
        TokenKind::Lparen | TokenKind::Lbracket | TokenKind::Assign => Precedence::Call,
        _ => Precedence::Lowest,
    }
}
