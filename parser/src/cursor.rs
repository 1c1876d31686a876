use crate::internal::*;

/// Anything that hands out tokens one at a time, `Eof` forever once drained.
pub trait TokenSource {
  fn next_token(&mut self) -> Token;
}

impl TokenSource for Lexer {
  fn next_token(&mut self) -> Token {
    Lexer::next_token(self)
  }
}

/// A canned token sequence, mostly for driving the parser without a lexer.
#[derive(Debug)]
pub struct Tokens(std::vec::IntoIter<Token>);

impl From<Vec<Token>> for Tokens {
  fn from(tokens: Vec<Token>) -> Self {
    Tokens(tokens.into_iter())
  }
}

impl TokenSource for Tokens {
  fn next_token(&mut self) -> Token {
    self.0.next().unwrap_or_else(Token::eof)
  }
}

/// Two-slot lookahead window over a token source.
#[derive(Debug)]
pub struct Cursor<S> {
  source: S,
  current: Token,
  next: Token,
}

impl<S: TokenSource> Cursor<S> {
  pub fn new(mut source: S) -> Self {
    let current = source.next_token();
    let next = source.next_token();
    Cursor { source, current, next }
  }

  pub fn advance(&mut self) {
    let pulled = self.source.next_token();
    self.current = std::mem::replace(&mut self.next, pulled);
  }

  pub const fn current(&self) -> &Token {
    &self.current
  }

  pub const fn next(&self) -> &Token {
    &self.next
  }

  pub fn current_is(&self, kind: TokenKind) -> bool {
    self.current.kind == kind
  }

  pub fn next_is(&self, kind: TokenKind) -> bool {
    self.next.kind == kind
  }

  pub const fn source(&self) -> &S {
    &self.source
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::token::TokenKind as T;
  use pretty_assertions::assert_eq;

  fn canned() -> Tokens {
    Tokens::from(vec![
      Token::new(T::Let, "let"),
      Token::new(T::Ident, "x"),
      Token::new(T::Semicolon, ";"),
    ])
  }

  #[test]
  fn primes_both_slots() {
    let cursor = Cursor::new(canned());
    assert_eq!(cursor.current(), &Token::new(T::Let, "let"));
    assert_eq!(cursor.next(), &Token::new(T::Ident, "x"));
  }

  #[test]
  fn advance_shifts_window_then_sticks_at_eof() {
    let mut cursor = Cursor::new(canned());
    cursor.advance();
    assert!(cursor.current_is(T::Ident));
    assert!(cursor.next_is(T::Semicolon));
    cursor.advance();
    assert!(cursor.current_is(T::Semicolon));
    assert!(cursor.next_is(T::Eof));
    for _ in 0..3 {
      cursor.advance();
      assert!(cursor.current_is(T::Eof));
      assert!(cursor.next_is(T::Eof));
    }
  }

  #[test]
  fn empty_source_is_all_eof() {
    let cursor = Cursor::new(Tokens::from(vec![]));
    assert_eq!(cursor.current(), &Token::eof());
    assert_eq!(cursor.next(), &Token::eof());
  }

  #[test]
  fn lexer_backed_cursor() {
    let mut cursor = Cursor::new(Lexer::new_str("a <= b"));
    assert!(cursor.current_is(T::Ident));
    assert!(cursor.next_is(T::LtEq));
    cursor.advance();
    cursor.advance();
    assert_eq!(cursor.current(), &Token::new(T::Ident, "b"));
    assert!(cursor.next_is(T::Eof));
  }
}
