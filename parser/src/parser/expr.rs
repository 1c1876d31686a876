use super::*;

impl<S: TokenSource> Parser<S> {
  /// Pratt loop. Starts on the expression's first token and leaves the
  /// cursor on its last one.
  #[instrument(skip_all)]
  pub(super) fn parse_expr(&mut self, prec: Prec) -> Option<Expr> {
    trace!(?prec, token = %self.cur(), "Parser::parse_expr()");
    let mut expr = self.parse_prefix_position()?;
    if self.peek_is(T::Semicolon) {
      return Some(expr);
    }
    while self.peek_precedence() > prec {
      expr = if self.peek_is(T::LParen) {
        self.parse_call(expr)?
      } else {
        self.parse_infix_expr(expr)?
      };
      if self.peek_is(T::Semicolon) {
        break;
      }
    }
    if self.peek_is(T::If) {
      expr = self.parse_ternary(expr)?;
    }
    Some(expr)
  }

  fn peek_precedence(&self) -> Prec {
    let next = self.cursor.next().kind;
    // `-` or `!` right after an operator binds as a prefix, as in `a * -b`
    if matches!(next, T::Minus | T::Bang) && precedence(self.cur().kind) > Prec::Lowest {
      return Prec::Prefix;
    }
    precedence(next)
  }

  fn parse_prefix_position(&mut self) -> Option<Expr> {
    match self.cur().kind {
      T::Ident => Some(Expr::ident(self.cur().literal.as_str())),
      T::True => Some(Expr::BoolLit(true)),
      T::False => Some(Expr::BoolLit(false)),
      T::IntLit => self.parse_int_lit(),
      T::Bang | T::Minus => self.parse_prefix_expr(),
      T::LParen => self.parse_grouped_expr(),
      T::Function => self.parse_function_lit().map(Expr::Function),
      _ => {
        let token = self.cur().clone();
        self.error(E::UnexpectedToken(token));
        None
      }
    }
  }

  fn parse_int_lit(&mut self) -> Option<Expr> {
    match self.cur().literal.parse::<i64>() {
      Ok(value) => Some(Expr::IntLit(value)),
      Err(_) => {
        let literal = self.cur().literal.clone();
        self.error(E::MalformedInt { literal });
        None
      }
    }
  }

  #[instrument(skip_all)]
  fn parse_prefix_expr(&mut self) -> Option<Expr> {
    let operator = self.cur().clone();
    let Some(op) = PrefixOp::from_token(operator.kind) else {
      self.error(E::UnexpectedToken(operator));
      return None;
    };
    self.advance();
    let Some(operand) = self.parse_expr(Prec::Prefix) else {
      self.error(E::MissingOperand { operator });
      return None;
    };
    match (op, operand) {
      // `-5` is the literal -5, not a negation. The sign joins the literal's
      // text, so a second one (`--5`) makes it malformed.
      (PrefixOp::Neg, Expr::IntLit(value)) if value < 0 => {
        self.error(E::MalformedInt { literal: format!("-{value}") });
        None
      }
      (PrefixOp::Neg, Expr::IntLit(value)) => Some(Expr::IntLit(-value)),
      (op, operand) => Some(Expr::prefix(op, operand)),
    }
  }

  fn parse_grouped_expr(&mut self) -> Option<Expr> {
    self.advance();
    let expr = self.parse_expr(Prec::Lowest)?;
    self.expect_peek(T::RParen)?;
    Some(expr)
  }

  #[instrument(skip_all)]
  fn parse_infix_expr(&mut self, lhs: Expr) -> Option<Expr> {
    self.advance();
    let operator = self.cur().clone();
    let Some(op) = InfixOp::from_token(operator.kind) else {
      self.error(E::UnexpectedOperator(operator));
      return None;
    };
    self.advance();
    let Some(rhs) = self.parse_expr(precedence(operator.kind)) else {
      self.error(E::MissingOperand { operator });
      return None;
    };
    Some(Expr::infix(op, lhs, rhs))
  }

  /// `then if cond else otherwise`, entered with `if` as the next token.
  #[instrument(skip_all)]
  fn parse_ternary(&mut self, then: Expr) -> Option<Expr> {
    self.advance();
    self.advance();
    let cond = self.parse_expr(Prec::Lowest)?;
    self.expect_peek(T::Else)?;
    self.advance();
    let otherwise = self.parse_expr(Prec::Lowest)?;
    Some(Expr::ternary(then, cond, otherwise))
  }

  #[instrument(skip_all)]
  fn parse_call(&mut self, callee: Expr) -> Option<Expr> {
    let callee = match callee {
      Expr::Ident(ident) => ident,
      other => {
        self.error(E::InvalidCallee(other.to_string()));
        return None;
      }
    };
    self.advance();
    let args = self.parse_list(T::RParen, |parser| parser.parse_expr(Prec::Lowest))?;
    Some(Expr::Call { callee, args })
  }

  #[instrument(skip_all)]
  fn parse_function_lit(&mut self) -> Option<FunctionLit> {
    self.expect_peek(T::LParen)?;
    let params = self.parse_list(T::RParen, Self::parse_param)?;
    self.advance();
    let body = self.parse_block_body()?;
    Some(FunctionLit { params, body })
  }

  fn parse_param(&mut self) -> Option<Ident> {
    if self.cur_is(T::Ident) {
      return Some(Ident::new(self.cur().literal.as_str()));
    }
    let found = self.cur().clone();
    self.error(E::ExpectedToken { expected: T::Ident, found });
    None
  }

  /// Comma separated items, entered on the opening delimiter and left on
  /// the closing `end`.
  fn parse_list<Item>(
    &mut self,
    end: TokenKind,
    mut item: impl FnMut(&mut Self) -> Option<Item>,
  ) -> Option<Vec<Item>> {
    let mut items = Vec::new();
    if self.peek_is(end) {
      self.advance();
      return Some(items);
    }
    self.advance();
    items.push(item(self)?);
    while self.peek_is(T::Comma) {
      self.advance();
      self.advance();
      items.push(item(self)?);
    }
    self.expect_peek(end)?;
    Some(items)
  }
}
