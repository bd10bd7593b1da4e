//! Binary entrypoint: read one snapshot JSON object from stdin, write one report to stdout.
//!
//! Invalid input produces an ErrorOutput object instead of a report. Logs go to
//! stderr (`RUST_LOG`, default `warn`) so stdout stays pure JSON.

use chrono::Utc;
use scoring_engine::types::ErrorOutput;
use scoring_engine::{Engine, EngineError};
use std::io::{self, Read, Write};
use tracing_subscriber::EnvFilter;

fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
    .with_writer(io::stderr)
    .init();

  if let Err(e) = run_binary() {
    tracing::error!("scoring-engine: {}", e);
    std::process::exit(1);
  }
}

fn run_binary() -> io::Result<()> {
  let mut raw = String::new();
  io::stdin().lock().read_to_string(&mut raw)?;

  let stdout = io::stdout();
  let mut out = io::BufWriter::new(stdout.lock());

  // Sampled once so the whole run shares one clock.
  let now = Utc::now();
  let written = match Engine::with_defaults().process_str(&raw, now) {
    Ok(report) => serde_json::to_writer(&mut out, &report),
    Err(e) => serde_json::to_writer(&mut out, &error_output(&e)),
  };
  written.map_err(io::Error::from)?;
  writeln!(out)?;
  out.flush()
}

fn error_output(e: &EngineError) -> ErrorOutput {
  tracing::warn!("rejected snapshot: {}", e);
  match e {
    EngineError::Validation { field, reason } => ErrorOutput::new(reason.clone()).with_field(field.clone()),
    EngineError::Json(inner) => ErrorOutput::new(format!("json parse: {}", inner)),
  }
}
