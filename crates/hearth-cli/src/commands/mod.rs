pub mod auth;
pub mod properties;

use std::io::{self, Write};

use anyhow::Result;

/// Reads one line of input after printing a label.
pub fn prompt(label: &str) -> Result<String> {
    print!("{}", label);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim_end().to_string())
}
