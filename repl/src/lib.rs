use std::io::{self, BufRead, Write};

use gorilla_parser::Parser;
use tracing::{debug, instrument};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplConfig {
  pub prompt: String,
  /// On a failed parse, also dump the line's tokens.
  pub show_tokens: bool,
}

impl Default for ReplConfig {
  fn default() -> Self {
    ReplConfig {
      prompt: ">> ".to_string(),
      show_tokens: false,
    }
  }
}

/// Reads `input` line by line until it runs dry, parsing each line as a
/// whole program and writing either its canonical rendering or its errors.
#[instrument(skip_all)]
pub fn run<R: BufRead, W: Write>(config: &ReplConfig, mut input: R, out: &mut W) -> io::Result<()> {
  let mut line = String::new();
  loop {
    write!(out, "{}", config.prompt)?;
    out.flush()?;
    line.clear();
    if input.read_line(&mut line)? == 0 {
      writeln!(out)?;
      return Ok(());
    }
    if line.trim().is_empty() {
      continue;
    }
    print_line(config, &line, out)?;
  }
}

fn print_line<W: Write>(config: &ReplConfig, line: &str, out: &mut W) -> io::Result<()> {
  let mut parser = Parser::new_str(line);
  let (program, ok) = parser.parse_program();
  if ok {
    writeln!(out, "Parsed Program:")?;
    if !program.is_empty() {
      writeln!(out, "{program}")?;
    }
    return writeln!(out, "[END]");
  }

  debug!(errors = parser.errors().len(), "line failed to parse");
  for err in parser.errors() {
    if err.is_cause() {
      writeln!(out, "\t{err}")?;
    } else {
      writeln!(out, "\t  {err}")?;
    }
  }
  if config.show_tokens {
    writeln!(out, "tokens:")?;
    for token in parser.tokens() {
      writeln!(out, "\t{:?} {}", token.kind, token.literal)?;
    }
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  fn session(config: &ReplConfig, input: &str) -> String {
    let mut out = Vec::new();
    run(config, input.as_bytes(), &mut out).expect("writing to a Vec never fails");
    String::from_utf8(out).expect("repl output is utf8")
  }

  #[test]
  fn prints_rendered_programs() {
    let output = session(&ReplConfig::default(), "let x = 1 + 2 * 3;\nreturn -x;\n");
    assert_eq!(
      output,
      [
        ">> Parsed Program:",
        "let x = (1 + (2 * 3));",
        "[END]",
        ">> Parsed Program:",
        "return (-x);",
        "[END]",
        ">> ",
        "",
      ]
      .join("\n")
    );
  }

  #[test]
  fn prints_errors_with_tab() {
    let output = session(&ReplConfig::default(), "let = 5;");
    assert_eq!(
      output,
      ">> \texpected identifier token, got `=` instead\n>> \n"
    );
  }

  #[test]
  fn context_errors_are_indented() {
    let output = session(&ReplConfig::default(), "{ let a = 1; let = 2; }\n");
    assert_eq!(
      output,
      [
        ">> \texpected identifier token, got `=` instead",
        "\t  parsed [0]: let a = 1;",
        "\t  block aborted at `let`, next `=`",
        ">> \n",
      ]
      .join("\n")
    );
  }

  #[test]
  fn blank_lines_just_prompt_again() {
    let config = ReplConfig {
      prompt: "? ".into(),
      ..ReplConfig::default()
    };
    assert_eq!(session(&config, "\n  \n"), "? ? ? \n");
  }

  #[test]
  fn token_dump_on_failure() {
    let config = ReplConfig {
      show_tokens: true,
      ..ReplConfig::default()
    };
    let output = session(&config, "let x 5;\n");
    assert_eq!(
      output,
      [
        ">> \texpected `=` token, got integer `5` instead",
        "tokens:",
        "\tLet let",
        "\tIdent x",
        "\tIntLit 5",
        "\tSemicolon ;",
        ">> \n",
      ]
      .join("\n")
    );
  }
}
