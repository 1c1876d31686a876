use std::fs;
use std::io;

use anyhow::{Context, Result, anyhow, bail};
use gorilla_repl::{ReplConfig, run};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
    .with_writer(io::stderr)
    .init();

  let mut config = ReplConfig::default();
  let mut input_path: Option<String> = None;
  let mut args = std::env::args().skip(1);
  while let Some(arg) = args.next() {
    match arg.as_str() {
      "--prompt" => {
        config.prompt = args
          .next()
          .ok_or_else(|| anyhow!("Missing prompt text after {arg}"))?;
      }
      "--tokens" => config.show_tokens = true,
      _ => {
        if input_path.is_some() {
          bail!("Only one input file is supported");
        }
        input_path = Some(arg);
      }
    }
  }

  if let Some(path) = input_path {
    let source = fs::read_to_string(&path).with_context(|| format!("Reading {path}"))?;
    return run(&config, source.as_bytes(), &mut io::stdout().lock())
      .with_context(|| format!("Running {path}"));
  }

  println!(
    "Gorilla programming language {} [{}]",
    env!("CARGO_PKG_VERSION"),
    std::env::consts::OS
  );
  run(&config, io::stdin().lock(), &mut io::stdout().lock()).context("Running repl")
}
