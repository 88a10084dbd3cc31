//! Where rendered documentation is written: a pager process or stdout.

use crate::error::Result;
use anyhow::Context;
use std::io::{IsTerminal, Write};
use std::process::{Command, Stdio};

/// Pager used when none is requested and stdout is a terminal.
pub const DEFAULT_PAGER: &str = "less";

/// Output sink for rendered documentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Stdout,
    /// Command line of a pager, split on whitespace into program and arguments.
    Pager(String),
}

impl Output {
    /// Sink chosen from the command-line flags. `--no-pager` wins over `--pager`.
    pub fn from_flags(no_pager: bool, pager: Option<String>) -> Self {
        if no_pager {
            return Self::Stdout;
        }
        match pager {
            Some(pager) => Self::Pager(pager),
            None => Self::default_for_platform(),
        }
    }

    /// `less` on an interactive non-Windows terminal, stdout otherwise.
    pub fn default_for_platform() -> Self {
        if cfg!(windows) || !std::io::stdout().is_terminal() {
            Self::Stdout
        } else {
            Self::Pager(DEFAULT_PAGER.to_string())
        }
    }

    /// Write `text` to the sink. A pager that cannot be started falls back to stdout.
    pub fn write(&self, text: &str) -> Result<()> {
        match self {
            Self::Stdout => write_stdout(text),
            Self::Pager(command) => {
                let mut parts = command.split_whitespace();
                let Some(program) = parts.next() else {
                    return write_stdout(text);
                };
                match Command::new(program).args(parts).stdin(Stdio::piped()).spawn() {
                    Ok(child) => write_to_child(child, text, program),
                    Err(e) => {
                        tracing::warn!("Could not start pager `{}`: {}", command, e);
                        write_stdout(text)
                    }
                }
            }
        }
    }
}

fn write_stdout(text: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    match stdout.write_all(text.as_bytes()).and_then(|()| stdout.flush()) {
        Err(e) if e.kind() == std::io::ErrorKind::BrokenPipe => Ok(()),
        result => result.context("Failed to write to stdout"),
    }
}

fn write_to_child(mut child: std::process::Child, text: &str, program: &str) -> Result<()> {
    if let Some(mut stdin) = child.stdin.take() {
        match stdin.write_all(text.as_bytes()) {
            // The user quit the pager before reading everything.
            Err(e) if e.kind() == std::io::ErrorKind::BrokenPipe => {}
            result => result.with_context(|| format!("Failed to write to pager `{}`", program))?,
        }
    }
    let status = child
        .wait()
        .with_context(|| format!("Failed to wait for pager `{}`", program))?;
    tracing::debug!("Pager `{}` exited with {}", program, status);
    Ok(())
}
