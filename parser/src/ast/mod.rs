mod display;

use crate::internal::{TokenKind as T, *};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
  pub statements: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
  Let(LetStmt),
  Return(ReturnStmt),
  Block(BlockStmt),
  If(IfStmt),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
  Ident(Ident),
  IntLit(i64),
  BoolLit(bool),
  Prefix {
    op: PrefixOp,
    operand: Box<Expr>,
  },
  Infix {
    op: InfixOp,
    lhs: Box<Expr>,
    rhs: Box<Expr>,
  },
  /// `then if cond else otherwise`
  Ternary {
    then: Box<Expr>,
    cond: Box<Expr>,
    otherwise: Box<Expr>,
  },
  Function(FunctionLit),
  Call {
    callee: Ident,
    args: Vec<Expr>,
  },
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ident {
  pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixOp {
  Not,
  Neg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfixOp {
  Add,
  Sub,
  Mul,
  Div,
  Eq,
  NotEq,
  Lt,
  Gt,
  LtEq,
  GtEq,
  And,
  Or,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetStmt {
  pub name: Ident,
  pub value: Expr,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnStmt {
  pub value: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BlockStmt {
  pub statements: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IfStmt {
  pub cond: Expr,
  pub then: BlockStmt,
  pub otherwise: Option<ElseStmt>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElseStmt {
  If(Box<IfStmt>),
  Block(BlockStmt),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionLit {
  pub params: Vec<Ident>,
  pub body: BlockStmt,
}

impl Program {
  pub fn len(&self) -> usize {
    self.statements.len()
  }

  pub fn is_empty(&self) -> bool {
    self.statements.is_empty()
  }

  pub fn iter(&self) -> std::slice::Iter<'_, Stmt> {
    self.statements.iter()
  }
}

impl<'a> IntoIterator for &'a Program {
  type Item = &'a Stmt;
  type IntoIter = std::slice::Iter<'a, Stmt>;
  fn into_iter(self) -> Self::IntoIter {
    self.statements.iter()
  }
}

impl Ident {
  pub fn new(name: impl Into<String>) -> Self {
    Ident { name: name.into() }
  }

  pub fn as_str(&self) -> &str {
    &self.name
  }
}

impl Expr {
  pub fn ident(name: impl Into<String>) -> Self {
    Expr::Ident(Ident::new(name))
  }

  pub fn prefix(op: PrefixOp, operand: Expr) -> Self {
    Expr::Prefix { op, operand: Box::new(operand) }
  }

  pub fn infix(op: InfixOp, lhs: Expr, rhs: Expr) -> Self {
    Expr::Infix {
      op,
      lhs: Box::new(lhs),
      rhs: Box::new(rhs),
    }
  }

  pub fn ternary(then: Expr, cond: Expr, otherwise: Expr) -> Self {
    Expr::Ternary {
      then: Box::new(then),
      cond: Box::new(cond),
      otherwise: Box::new(otherwise),
    }
  }

  pub const fn as_ident(&self) -> Option<&Ident> {
    match self {
      Expr::Ident(ident) => Some(ident),
      _ => None,
    }
  }

  pub const fn as_int(&self) -> Option<i64> {
    match self {
      Expr::IntLit(value) => Some(*value),
      _ => None,
    }
  }
}

impl Stmt {
  pub const fn name(&self) -> &'static str {
    match self {
      Stmt::Let(_) => "let",
      Stmt::Return(_) => "return",
      Stmt::Block(_) => "block",
      Stmt::If(_) => "if",
    }
  }
}

impl BlockStmt {
  pub fn new(statements: Vec<Stmt>) -> Self {
    BlockStmt { statements }
  }

  pub fn is_empty(&self) -> bool {
    self.statements.is_empty()
  }
}

impl IfStmt {
  /// Number of `if` arms in the chain, including this one.
  pub fn arms(&self) -> usize {
    let mut arms = 1;
    let mut cur = self;
    while let Some(ElseStmt::If(next)) = &cur.otherwise {
      arms += 1;
      cur = next;
    }
    arms
  }
}

impl PrefixOp {
  pub const fn from_token(kind: TokenKind) -> Option<Self> {
    match kind {
      T::Bang => Some(PrefixOp::Not),
      T::Minus => Some(PrefixOp::Neg),
      _ => None,
    }
  }

  pub const fn symbol(self) -> &'static str {
    match self {
      PrefixOp::Not => "!",
      PrefixOp::Neg => "-",
    }
  }
}

impl InfixOp {
  pub const fn from_token(kind: TokenKind) -> Option<Self> {
    match kind {
      T::Plus => Some(InfixOp::Add),
      T::Minus => Some(InfixOp::Sub),
      T::Star => Some(InfixOp::Mul),
      T::Slash => Some(InfixOp::Div),
      T::Eq => Some(InfixOp::Eq),
      T::NotEq => Some(InfixOp::NotEq),
      T::Lt => Some(InfixOp::Lt),
      T::Gt => Some(InfixOp::Gt),
      T::LtEq => Some(InfixOp::LtEq),
      T::GtEq => Some(InfixOp::GtEq),
      T::And => Some(InfixOp::And),
      T::Or => Some(InfixOp::Or),
      _ => None,
    }
  }

  pub const fn symbol(self) -> &'static str {
    match self {
      InfixOp::Add => "+",
      InfixOp::Sub => "-",
      InfixOp::Mul => "*",
      InfixOp::Div => "/",
      InfixOp::Eq => "==",
      InfixOp::NotEq => "!=",
      InfixOp::Lt => "<",
      InfixOp::Gt => ">",
      InfixOp::LtEq => "<=",
      InfixOp::GtEq => ">=",
      InfixOp::And => "&&",
      InfixOp::Or => "||",
    }
  }
}
