use super::*;

impl<S: TokenSource> Parser<S> {
  /// Parses one statement, leaving the cursor on the token after it.
  #[instrument(skip_all)]
  pub(super) fn parse_stmt(&mut self) -> Option<Stmt> {
    trace!(token = %self.cur(), "Parser::parse_stmt()");
    match self.cur().kind {
      T::Let => self.parse_let_stmt().map(Stmt::Let),
      T::Return => self.parse_return_stmt().map(Stmt::Return),
      T::If => self.parse_if_stmt().map(Stmt::If),
      T::LBrace => self.parse_block().map(Stmt::Block),
      T::RBrace | T::Semicolon => {
        let token = self.cur().clone();
        self.error(E::UnexpectedToken(token));
        None
      }
      _ => {
        let token = self.cur().clone();
        self.error(E::UnexpectedToken(token));
        self.advance();
        None
      }
    }
  }

  #[instrument(skip_all)]
  fn parse_let_stmt(&mut self) -> Option<LetStmt> {
    self.expect_peek(T::Ident)?;
    let name = Ident::new(self.cur().literal.as_str());
    self.expect_peek(T::Assign)?;
    self.advance();
    let value = self.parse_expr(Prec::Lowest)?;
    self.expect_peek(T::Semicolon)?;
    self.advance();
    Some(LetStmt { name, value })
  }

  #[instrument(skip_all)]
  fn parse_return_stmt(&mut self) -> Option<ReturnStmt> {
    if self.peek_is(T::Semicolon) {
      self.advance();
      self.advance();
      return Some(ReturnStmt { value: None });
    }
    self.advance();
    let value = self.parse_expr(Prec::Lowest)?;
    self.expect_peek(T::Semicolon)?;
    self.advance();
    Some(ReturnStmt { value: Some(value) })
  }

  /// `if (cond) {..}` with any number of `else if` arms and an optional
  /// final `else {..}`.
  #[instrument(skip_all)]
  fn parse_if_stmt(&mut self) -> Option<IfStmt> {
    self.expect_peek(T::LParen)?;
    self.advance();
    let cond = self.parse_expr(Prec::Lowest)?;
    self.expect_peek(T::RParen)?;
    self.advance();
    let then = self.parse_block()?;
    if !self.cur_is(T::Else) {
      return Some(IfStmt { cond, then, otherwise: None });
    }
    self.advance();
    let otherwise = if self.cur_is(T::If) {
      ElseStmt::If(Box::new(self.parse_if_stmt()?))
    } else {
      ElseStmt::Block(self.parse_block()?)
    };
    Some(IfStmt { cond, then, otherwise: Some(otherwise) })
  }

  #[instrument(skip_all)]
  pub(super) fn parse_block(&mut self) -> Option<BlockStmt> {
    let block = self.parse_block_body()?;
    self.advance();
    Some(block)
  }

  /// Parses `{ stmts }`, leaving the cursor on the closing `}`.
  pub(super) fn parse_block_body(&mut self) -> Option<BlockStmt> {
    self.consume_expecting(T::LBrace)?;
    let mut block = BlockStmt::default();
    while !self.cur_is(T::RBrace) {
      if self.cur_is(T::Eof) {
        self.error(E::ExpectedToken {
          expected: T::RBrace,
          found: Token::eof(),
        });
        self.block_aborted(&block);
        return None;
      }
      let Some(stmt) = self.parse_stmt() else {
        self.block_aborted(&block);
        return None;
      };
      self.skip_semicolon();
      block.statements.push(stmt);
    }
    Some(block)
  }

  fn block_aborted(&mut self, block: &BlockStmt) {
    debug!(parsed = block.statements.len(), "block aborted");
    for (index, stmt) in block.statements.iter().enumerate() {
      self.error(E::PartialBlock { index, stmt: stmt.to_string() });
    }
    let current = self.cur().clone();
    let next = self.cursor.next().clone();
    self.error(E::BlockAborted { current, next });
  }
}
