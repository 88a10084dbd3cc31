//! Interactive choice between several matching entries.

use crate::error::{Result, SessionError};
use crate::store::DocEntry;
use anyhow::Context;
use std::io::{BufRead, Write};

/// Pick one entry out of `candidates`.
///
/// A single candidate is returned without prompting. Otherwise a numbered list is written
/// to `output` and one line is read from `input`; anything but a listed number fails with
/// [`SessionError::InvalidChoice`].
pub fn choose(
    mut candidates: Vec<DocEntry>,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<DocEntry> {
    anyhow::ensure!(!candidates.is_empty(), "no candidates to choose from");
    if candidates.len() == 1 {
        return Ok(candidates.swap_remove(0));
    }

    for (i, candidate) in candidates.iter().enumerate() {
        writeln!(output, "{}. {}", i + 1, candidate.path)?;
    }
    write!(output, "Choose one: ")?;
    output.flush()?;

    let mut line = Vec::new();
    input
        .read_until(b'\n', &mut line)
        .context("Failed to read choice")?;
    let answer = String::from_utf8_lossy(&line);
    let answer = answer.trim_end_matches(['\r', '\n']);

    let index = parse_choice(answer, candidates.len()).ok_or_else(|| SessionError::InvalidChoice {
        answer: answer.to_string(),
    })?;
    Ok(candidates.swap_remove(index))
}

/// Zero-based index for a 1-based answer made only of digits and within `1..=count`.
fn parse_choice(answer: &str, count: usize) -> Option<usize> {
    if answer.is_empty() || !answer.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let choice: usize = answer.parse().ok()?;
    (1..=count).contains(&choice).then(|| choice - 1)
}
