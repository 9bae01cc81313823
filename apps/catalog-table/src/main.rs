//! catalog-table - render the product table page
//!
//! Reads interaction commands from stdin (when piped), applies them in
//! order and writes the resulting page to stdout.

use std::io::{self, BufRead, IsTerminal, Write};

use catalog_core::Fixture;
use catalog_table::{App, TableConfig};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = TableConfig::discover()?;
    init_logging(&config.log_level);

    let fixture = match &config.fixture_dir {
        Some(dir) => Fixture::from_dir(dir)?,
        None => Fixture::builtin()?,
    };
    let mut app = App::new(fixture, config)?;

    let stdin = io::stdin();
    if !stdin.is_terminal() {
        for line in stdin.lock().lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            app.run_command(&line)?;
        }
    }

    let html = app.render()?;
    let mut stdout = io::stdout().lock();
    stdout.write_all(html.as_bytes())?;
    stdout.flush()?;

    Ok(())
}

fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
