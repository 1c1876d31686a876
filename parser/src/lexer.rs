use crate::internal::{TokenKind as T, *};

#[derive(Debug, Clone)]
pub struct Lexer {
  src: Vec<u8>,
  pos: usize,
}

impl Lexer {
  pub fn new(src: Vec<u8>) -> Self {
    Lexer { src, pos: 0 }
  }

  pub fn new_str(src: &str) -> Self {
    Self::new(src.bytes().collect())
  }

  /// A fresh lexer over the same source, positioned at the start.
  pub fn restart(&self) -> Self {
    Self::new(self.src.clone())
  }

  /// Drains the remaining tokens, excluding the final `Eof`.
  pub fn tokenize(mut self) -> Vec<Token> {
    let mut tokens = Vec::with_capacity(64);
    loop {
      let token = self.next_token();
      if token.is(T::Eof) {
        return tokens;
      }
      tokens.push(token);
    }
  }

  pub fn next_token(&mut self) -> Token {
    self.skip_whitespace();
    let Some(&byte) = self.src.get(self.pos) else {
      return Token::eof();
    };
    match byte {
      b'=' if self.peek() == b'=' => self.double(T::Eq),
      b'!' if self.peek() == b'=' => self.double(T::NotEq),
      b'<' if self.peek() == b'=' => self.double(T::LtEq),
      b'>' if self.peek() == b'=' => self.double(T::GtEq),
      b'&' if self.peek() == b'&' => self.double(T::And),
      b'|' if self.peek() == b'|' => self.double(T::Or),
      b'=' => self.single(T::Assign),
      b'!' => self.single(T::Bang),
      b'<' => self.single(T::Lt),
      b'>' => self.single(T::Gt),
      b'+' => self.single(T::Plus),
      b'-' => self.single(T::Minus),
      b'*' => self.single(T::Star),
      b'/' => self.single(T::Slash),
      b',' => self.single(T::Comma),
      b';' => self.single(T::Semicolon),
      b':' => self.single(T::Colon),
      b'(' => self.single(T::LParen),
      b')' => self.single(T::RParen),
      b'{' => self.single(T::LBrace),
      b'}' => self.single(T::RBrace),
      b'[' => self.single(T::LBracket),
      b']' => self.single(T::RBracket),
      b if is_ident_byte(b) => self.ident(),
      b if b.is_ascii_digit() => self.int_lit(),
      // no single `&` or `|` in the language
      _ => self.single(T::Illegal),
    }
  }

  fn single(&mut self, kind: TokenKind) -> Token {
    self.lexeme(kind, 1)
  }

  fn double(&mut self, kind: TokenKind) -> Token {
    self.lexeme(kind, 2)
  }

  fn lexeme(&mut self, kind: TokenKind, len: usize) -> Token {
    let span = &self.src[self.pos..self.pos + len];
    let token = Token::new(kind, String::from_utf8_lossy(span));
    self.pos += len;
    token
  }

  fn ident(&mut self) -> Token {
    let start = self.pos;
    while !self.eof() && is_ident_byte(self.src[self.pos]) {
      self.pos += 1;
    }
    let span = &self.src[start..self.pos];
    // SAFETY: identifiers are made of ascii letters and underscores only
    let lexeme = unsafe { std::str::from_utf8_unchecked(span) };
    Token::new(lookup_ident(span), lexeme)
  }

  fn int_lit(&mut self) -> Token {
    let start = self.pos;
    while !self.eof() && self.src[self.pos].is_ascii_digit() {
      self.pos += 1;
    }
    let span = &self.src[start..self.pos];
    // SAFETY: we only have ascii digits, so this is fine
    let lexeme = unsafe { std::str::from_utf8_unchecked(span) };
    Token::new(T::IntLit, lexeme)
  }

  fn skip_whitespace(&mut self) {
    while !self.eof() && matches!(self.src[self.pos], b' ' | b'\t' | b'\r' | b'\n') {
      self.pos += 1;
    }
  }

  fn peek(&self) -> u8 {
    *self.src.get(self.pos + 1).unwrap_or(&0)
  }

  const fn eof(&self) -> bool {
    self.pos >= self.src.len()
  }
}

const fn is_ident_byte(byte: u8) -> bool {
  byte.is_ascii_alphabetic() || byte == b'_'
}
