use crate::internal::TokenKind;

#[derive(Eq, Ord, PartialEq, PartialOrd, Copy, Clone, Debug)]
pub enum Prec {
  Lowest,
  Equals,
  LessGreater,
  Sum,
  Product,
  Prefix,
  Call,
}

/// Binding power of a token in infix position.
pub const fn precedence(kind: TokenKind) -> Prec {
  match kind {
    TokenKind::Eq | TokenKind::NotEq | TokenKind::LtEq | TokenKind::GtEq => Prec::Equals,
    TokenKind::Lt | TokenKind::Gt => Prec::LessGreater,
    TokenKind::Plus | TokenKind::Minus => Prec::Sum,
    // NB: logical ops sit with `*` and `/`, so `a == b && c` is `a == (b && c)`
    TokenKind::Star | TokenKind::Slash | TokenKind::And | TokenKind::Or => Prec::Product,
    TokenKind::LParen => Prec::Call,
    TokenKind::Eof
    | TokenKind::Illegal
    | TokenKind::Ident
    | TokenKind::IntLit
    | TokenKind::True
    | TokenKind::False
    | TokenKind::Assign
    | TokenKind::Bang
    | TokenKind::Comma
    | TokenKind::Semicolon
    | TokenKind::Colon
    | TokenKind::RParen
    | TokenKind::LBrace
    | TokenKind::RBrace
    | TokenKind::LBracket
    | TokenKind::RBracket
    | TokenKind::Function
    | TokenKind::Let
    | TokenKind::If
    | TokenKind::Else
    | TokenKind::Return => Prec::Lowest,
  }
}
