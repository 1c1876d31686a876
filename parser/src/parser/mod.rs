use crate::internal::{TokenKind as T, *};
#[cfg(test)]
use std::sync::Once;
#[cfg(test)]
use tracing_subscriber::fmt::format::FmtSpan;
#[cfg(test)]
use tracing_subscriber::{EnvFilter, fmt};
use error::ParseError as E;

mod error;
mod expr;
mod stmt;

pub use error::ParseError;

#[derive(Debug)]
pub struct Parser<S = Lexer> {
  cursor: Cursor<S>,
  errors: Vec<ParseError>,
}

impl Parser<Lexer> {
  pub fn new_str(src: &str) -> Self {
    Parser::new(Lexer::new_str(src))
  }

  /// Every token of the input, from a restarted lexer. Leaves the parser's
  /// own position alone.
  pub fn tokens(&self) -> Vec<Token> {
    self.cursor.source().restart().tokenize()
  }
}

impl<S: TokenSource> Parser<S> {
  pub fn new(source: S) -> Self {
    #[cfg(test)]
    configure_test_tracing();

    Parser {
      cursor: Cursor::new(source),
      errors: Vec::new(),
    }
  }

  /// Parses statements until end of input. On failure the program holds
  /// the statements parsed before the failing one, and must not be run.
  #[instrument(skip_all)]
  pub fn parse_program(&mut self) -> (Program, bool) {
    trace!("Parser::parse_program()");
    let mut program = Program::default();
    while !self.cur_is(T::Eof) {
      let Some(stmt) = self.parse_stmt() else {
        debug!(parsed = program.len(), errors = self.errors.len(), "program aborted");
        return (program, false);
      };
      self.skip_semicolon();
      program.statements.push(stmt);
    }
    (program, true)
  }

  pub fn errors(&self) -> &[ParseError] {
    &self.errors
  }

  pub fn into_errors(self) -> Vec<ParseError> {
    self.errors
  }

  fn cur(&self) -> &Token {
    self.cursor.current()
  }

  fn cur_is(&self, kind: TokenKind) -> bool {
    self.cursor.current_is(kind)
  }

  fn peek_is(&self, kind: TokenKind) -> bool {
    self.cursor.next_is(kind)
  }

  fn advance(&mut self) {
    self.cursor.advance();
  }

  fn error(&mut self, err: ParseError) {
    trace!(%err, "parse error");
    self.errors.push(err);
  }

  /// Moves onto the next token if it is `kind`.
  fn expect_peek(&mut self, kind: TokenKind) -> Option<()> {
    if self.peek_is(kind) {
      self.advance();
      Some(())
    } else {
      let found = self.cursor.next().clone();
      self.error(E::ExpectedToken { expected: kind, found });
      None
    }
  }

  /// Moves past the current token if it is `kind`.
  fn consume_expecting(&mut self, kind: TokenKind) -> Option<()> {
    if self.cur_is(kind) {
      self.advance();
      Some(())
    } else {
      let found = self.cur().clone();
      self.error(E::ExpectedToken { expected: kind, found });
      None
    }
  }

  /// Statements may be followed by one stray `;`.
  fn skip_semicolon(&mut self) {
    if self.cur_is(T::Semicolon) {
      self.advance();
    }
  }
}

#[cfg(test)]
static INIT: Once = Once::new();

#[cfg(test)]
fn configure_test_tracing() {
  INIT.call_once(|| {
    let subscriber = fmt::Subscriber::builder()
      .with_env_filter(EnvFilter::from_default_env())
      .with_test_writer()
      .with_span_events(FmtSpan::ACTIVE)
      .finish();
    tracing::subscriber::set_global_default(subscriber)
      .expect("setting default tracing subscriber failed");
  });
}
