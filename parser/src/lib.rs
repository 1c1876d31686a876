pub mod ast;
pub mod cursor;
pub mod lexer;
pub mod parser;
pub mod prec;
pub mod token;

pub use ast::Program;
pub use lexer::Lexer;
pub use parser::{ParseError, Parser};
pub use token::{Token, TokenKind};

pub mod internal {
  pub use crate::ast::*;
  pub use crate::cursor::*;
  pub use crate::lexer::*;
  pub use crate::parser::*;
  pub use crate::prec::*;
  pub use crate::token::*;
  pub use tracing::{debug, instrument, trace};
}
