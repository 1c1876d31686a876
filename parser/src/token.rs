use std::collections::HashMap;
use std::fmt;

use lazy_static::lazy_static;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
  Eof,
  Illegal,
  Ident,
  IntLit,
  True,
  False,
  // operators
  Assign,
  Plus,
  Minus,
  Bang,
  Star,
  Slash,
  Lt,
  Gt,
  LtEq,
  GtEq,
  Eq,
  NotEq,
  And,
  Or,
  // delimiters
  Comma,
  Semicolon,
  Colon,
  LParen,
  RParen,
  LBrace,
  RBrace,
  LBracket,
  RBracket,
  // keywords
  Function,
  Let,
  If,
  Else,
  Return,
}

lazy_static! {
  static ref KEYWORDS: HashMap<&'static [u8], TokenKind> = HashMap::from([
    (&b"fn"[..], TokenKind::Function),
    (&b"let"[..], TokenKind::Let),
    (&b"true"[..], TokenKind::True),
    (&b"false"[..], TokenKind::False),
    (&b"if"[..], TokenKind::If),
    (&b"else"[..], TokenKind::Else),
    (&b"return"[..], TokenKind::Return),
  ]);
}

/// Classifies an identifier-shaped lexeme, keywords win over `Ident`.
pub fn lookup_ident(lexeme: &[u8]) -> TokenKind {
  KEYWORDS.get(lexeme).copied().unwrap_or(TokenKind::Ident)
}

impl TokenKind {
  /// Kinds whose literal text varies, as opposed to fixed spellings.
  pub const fn has_payload(self) -> bool {
    matches!(self, TokenKind::Ident | TokenKind::IntLit | TokenKind::Illegal)
  }
}

impl fmt::Display for TokenKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let s = match self {
      TokenKind::Eof => "end of input",
      TokenKind::Illegal => "illegal",
      TokenKind::Ident => "identifier",
      TokenKind::IntLit => "integer",
      TokenKind::True => "`true`",
      TokenKind::False => "`false`",
      TokenKind::Assign => "`=`",
      TokenKind::Plus => "`+`",
      TokenKind::Minus => "`-`",
      TokenKind::Bang => "`!`",
      TokenKind::Star => "`*`",
      TokenKind::Slash => "`/`",
      TokenKind::Lt => "`<`",
      TokenKind::Gt => "`>`",
      TokenKind::LtEq => "`<=`",
      TokenKind::GtEq => "`>=`",
      TokenKind::Eq => "`==`",
      TokenKind::NotEq => "`!=`",
      TokenKind::And => "`&&`",
      TokenKind::Or => "`||`",
      TokenKind::Comma => "`,`",
      TokenKind::Semicolon => "`;`",
      TokenKind::Colon => "`:`",
      TokenKind::LParen => "`(`",
      TokenKind::RParen => "`)`",
      TokenKind::LBrace => "`{`",
      TokenKind::RBrace => "`}`",
      TokenKind::LBracket => "`[`",
      TokenKind::RBracket => "`]`",
      TokenKind::Function => "`fn`",
      TokenKind::Let => "`let`",
      TokenKind::If => "`if`",
      TokenKind::Else => "`else`",
      TokenKind::Return => "`return`",
    };
    f.write_str(s)
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
  pub kind: TokenKind,
  pub literal: String,
}

impl Token {
  pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
    Token { kind, literal: literal.into() }
  }

  pub fn eof() -> Self {
    Token::new(TokenKind::Eof, "")
  }

  pub fn is(&self, kind: TokenKind) -> bool {
    self.kind == kind
  }
}

impl fmt::Display for Token {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if self.kind.has_payload() {
      write!(f, "{} `{}`", self.kind, self.literal)
    } else {
      write!(f, "{}", self.kind)
    }
  }
}
