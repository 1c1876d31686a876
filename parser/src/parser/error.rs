use thiserror::Error;

use crate::internal::*;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
  #[error("expected {expected} token, got {found} instead")]
  ExpectedToken { expected: TokenKind, found: Token },
  #[error("unexpected token {0}")]
  UnexpectedToken(Token),
  #[error("unexpected infix operator {0}")]
  UnexpectedOperator(Token),
  #[error("missing operand for operator {operator}")]
  MissingOperand { operator: Token },
  #[error("could not parse `{literal}` as a 64-bit integer")]
  MalformedInt { literal: String },
  #[error("call target must be an identifier, got `{0}`")]
  InvalidCallee(String),
  #[error("parsed [{index}]: {stmt}")]
  PartialBlock { index: usize, stmt: String },
  #[error("block aborted at {current}, next {next}")]
  BlockAborted { current: Token, next: Token },
}

impl ParseError {
  /// Whether this error names the root cause rather than context around it.
  pub const fn is_cause(&self) -> bool {
    !matches!(
      self,
      ParseError::MissingOperand { .. }
        | ParseError::PartialBlock { .. }
        | ParseError::BlockAborted { .. }
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::token::TokenKind as T;

  #[test]
  fn messages_keep_the_distinctions() {
    let expected = ParseError::ExpectedToken {
      expected: T::Assign,
      found: Token::new(T::IntLit, "5"),
    };
    assert_eq!(expected.to_string(), "expected `=` token, got integer `5` instead");
    let unexpected = ParseError::UnexpectedToken(Token::new(T::RBrace, "}"));
    assert_eq!(unexpected.to_string(), "unexpected token `}`");
    let malformed = ParseError::MalformedInt { literal: "99999999999999999999".into() };
    assert_eq!(
      malformed.to_string(),
      "could not parse `99999999999999999999` as a 64-bit integer"
    );
  }

  #[test]
  fn context_errors_are_not_causes() {
    assert!(ParseError::UnexpectedToken(Token::eof()).is_cause());
    assert!(
      !ParseError::PartialBlock { index: 0, stmt: "return;".into() }.is_cause()
    );
  }
}
