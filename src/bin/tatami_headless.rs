//! Headless Runner
//!
//! Runs the emulation engine without a renderer: reads raw bytes from
//! stdin, feeds them through the pipeline, and prints a deterministic
//! JSON snapshot of the resulting document on stdout. Used for
//! inspection and golden-style testing.

use std::io::{self, Read, Write};

use tracing_subscriber::EnvFilter;

use tatami_terminal::Terminal;

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut input = Vec::new();
    io::stdin().read_to_end(&mut input)?;

    let mut terminal = Terminal::new();
    terminal.write_bytes(&input);

    let snapshot = terminal.snapshot();
    let json = serde_json::to_string_pretty(&snapshot)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    let mut stdout = io::stdout();
    stdout.write_all(json.as_bytes())?;
    stdout.write_all(b"\n")?;

    Ok(())
}
