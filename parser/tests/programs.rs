use gorilla_parser::ast::{ElseStmt, Expr, ReturnStmt, Stmt};
use gorilla_parser::{ParseError, Parser, Program, Token, TokenKind};
use pretty_assertions::assert_eq;

fn parse_ok(src: &str) -> Program {
  let mut parser = Parser::new_str(src);
  let (program, ok) = parser.parse_program();
  assert!(ok, "`{src}` failed: {:?}", parser.errors());
  program
}

fn parse_fail(src: &str) -> Vec<ParseError> {
  let mut parser = Parser::new_str(src);
  let (_, ok) = parser.parse_program();
  assert!(!ok, "`{src}` should not parse");
  parser.into_errors()
}

const SAMPLES: &[&str] = &[
  "let five = 5; let ten = 10;",
  "let add = fn(x, y) { return x + y; }; let result = add(five, ten);",
  "return -y * -1 + 1;",
  "let z = !(a && b) || c == d;",
  "let t = 1 if x > 2 else -2;",
  "return a if b else c if d else e;",
  "let a = x + 1 if c else 2; let b = -x if c else d;",
  "if (x < y) { return x; } else if (x == y) { return; } else { let z = x; }",
  "{ { let a = 1; } {} return a <= b; }",
  "let call = outer(inner(1), fn() { return true; }, 3 - -4);",
  "if (true) {} else {}",
  "let n = (1 + 2) * (3 - 4) / 5 != 6;",
];

#[test]
fn rendering_reparses_to_the_same_tree() {
  for src in SAMPLES {
    let program = parse_ok(src);
    let rendered = program.to_string();
    let reparsed = parse_ok(&rendered);
    assert_eq!(reparsed, program, "rendered as:\n{rendered}");
    assert_eq!(reparsed.to_string(), rendered);
  }
}

#[test]
fn canonical_rendering() {
  let program = parse_ok(
    "let add = fn(a, b) { return a + b; }; if (add(1, 2) > 2) { return true; } else { return; }",
  );
  assert_eq!(
    program.to_string(),
    [
      "let add = fn(a, b) {",
      "  return (a + b);",
      "};",
      "if ((add(1, 2) > 2)) {",
      "  return true;",
      "} else {",
      "  return;",
      "}",
    ]
    .join("\n")
  );
}

#[test]
fn return_ternary() {
  let program = parse_ok("return 1 if x else 2;");
  assert_eq!(
    program.statements,
    vec![Stmt::Return(ReturnStmt {
      value: Some(Expr::ternary(Expr::IntLit(1), Expr::ident("x"), Expr::IntLit(2))),
    })]
  );
}

#[test]
fn ternary_inside_operands() {
  let program = parse_ok("let a = x + 1 if c else 2; let b = -x if c else d;");
  assert_eq!(
    program.to_string(),
    "let a = (x + (1 if c else 2));\nlet b = (-(x if c else d));"
  );
}

#[test]
fn deep_else_if_chain() {
  const DEPTH: usize = 100;
  let mut src = String::new();
  for i in 0..DEPTH {
    if i > 0 {
      src.push_str(" else ");
    }
    src.push_str(&format!("if (x == {i}) {{ return {i}; }}"));
  }
  src.push_str(" else { return; }");

  let program = parse_ok(&src);
  assert_eq!(program.len(), 1);
  let Stmt::If(stmt) = &program.statements[0] else {
    panic!("expected an if statement");
  };
  assert_eq!(stmt.arms(), DEPTH);

  let mut last = stmt;
  while let Some(ElseStmt::If(next)) = &last.otherwise {
    last = next;
  }
  assert_eq!(last.cond.to_string(), format!("(x == {})", DEPTH - 1));
  assert!(matches!(last.otherwise, Some(ElseStmt::Block(_))));
  assert_eq!(parse_ok(&program.to_string()), program);
}

#[test]
fn deep_nested_blocks() {
  let depth = 100;
  let src = format!("{}return;{}", "{ ".repeat(depth), " }".repeat(depth));
  let program = parse_ok(&src);
  let mut stmt = &program.statements[0];
  let mut levels = 0;
  while let Stmt::Block(block) = stmt {
    levels += 1;
    stmt = &block.statements[0];
  }
  assert_eq!(levels, depth);
  assert_eq!(stmt, &Stmt::Return(ReturnStmt { value: None }));
}

#[test]
fn structural_error_cases() {
  let cases: &[(&str, ParseError)] = &[
    (
      "let = 5;",
      ParseError::ExpectedToken {
        expected: TokenKind::Ident,
        found: Token::new(TokenKind::Assign, "="),
      },
    ),
    (
      "let x 5;",
      ParseError::ExpectedToken {
        expected: TokenKind::Assign,
        found: Token::new(TokenKind::IntLit, "5"),
      },
    ),
    (
      "if (x) { return }",
      ParseError::UnexpectedToken(Token::new(TokenKind::RBrace, "}")),
    ),
  ];
  for (src, first) in cases {
    let errors = parse_fail(src);
    assert_eq!(&errors[0], first, "source: {src}");
  }
}

#[test]
fn errors_render_as_messages() {
  let errors = parse_fail("let x 5;");
  let messages: Vec<_> = errors.iter().map(ToString::to_string).collect();
  assert_eq!(messages, vec!["expected `=` token, got integer `5` instead"]);
}

#[test]
fn garbage_never_panics() {
  let inputs = [
    "", ";", "}", "{", "(", ")", "let", "let x", "let x =", "return", "if", "if (", "if (x",
    "if (x) {", "if (x) {} else", "fn", "fn(", "fn(x", "fn(x)", "1 if", "a & b", "a | b", "@#$",
    "let x = 99999999999999999999;", "let x = --;", "f(,)", "{ { { {", "} } }", "else {}",
  ];
  for src in inputs {
    let mut parser = Parser::new_str(src);
    let (_, ok) = parser.parse_program();
    assert_eq!(ok, parser.errors().is_empty(), "source: {src:?}");
  }
}
