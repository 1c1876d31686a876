use std::fmt::{self, Display, Formatter};

use super::*;

impl Display for Program {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    for (i, stmt) in self.statements.iter().enumerate() {
      if i > 0 {
        writeln!(f)?;
      }
      write!(f, "{stmt}")?;
    }
    Ok(())
  }
}

impl Display for Stmt {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      Stmt::Let(stmt) => write!(f, "let {} = {};", stmt.name, stmt.value),
      Stmt::Return(ReturnStmt { value: Some(value) }) => write!(f, "return {value};"),
      Stmt::Return(ReturnStmt { value: None }) => f.write_str("return;"),
      Stmt::Block(block) => write!(f, "{block}"),
      Stmt::If(stmt) => write!(f, "{stmt}"),
    }
  }
}

impl Display for BlockStmt {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    if self.statements.is_empty() {
      return f.write_str("{}");
    }
    f.write_str("{\n")?;
    for stmt in &self.statements {
      for line in stmt.to_string().lines() {
        writeln!(f, "  {line}")?;
      }
    }
    f.write_str("}")
  }
}

impl Display for IfStmt {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "if ({}) {}", self.cond, self.then)?;
    match &self.otherwise {
      Some(otherwise) => write!(f, " else {otherwise}"),
      None => Ok(()),
    }
  }
}

impl Display for ElseStmt {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      ElseStmt::If(stmt) => write!(f, "{stmt}"),
      ElseStmt::Block(block) => write!(f, "{block}"),
    }
  }
}

impl Display for Expr {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      Expr::Ident(ident) => write!(f, "{ident}"),
      Expr::IntLit(value) => write!(f, "{value}"),
      Expr::BoolLit(value) => write!(f, "{value}"),
      Expr::Prefix { op, operand } => write!(f, "({op}{operand})"),
      Expr::Infix { op, lhs, rhs } => write!(f, "({lhs} {op} {rhs})"),
      Expr::Ternary { then, cond, otherwise } => {
        write!(f, "({then} if {cond} else {otherwise})")
      }
      Expr::Function(func) => write!(f, "{func}"),
      Expr::Call { callee, args } => {
        write!(f, "{callee}(")?;
        write_list(f, args)?;
        f.write_str(")")
      }
    }
  }
}

impl Display for FunctionLit {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.write_str("fn(")?;
    write_list(f, &self.params)?;
    write!(f, ") {}", self.body)
  }
}

impl Display for Ident {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.write_str(&self.name)
  }
}

impl Display for PrefixOp {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.write_str(self.symbol())
  }
}

impl Display for InfixOp {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.write_str(self.symbol())
  }
}

fn write_list<T: Display>(f: &mut Formatter<'_>, items: &[T]) -> fmt::Result {
  for (i, item) in items.iter().enumerate() {
    if i > 0 {
      f.write_str(", ")?;
    }
    write!(f, "{item}")?;
  }
  Ok(())
}
