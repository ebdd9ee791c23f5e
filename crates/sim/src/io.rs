//! Sequence input.
//!
//! Two loaders are provided:
//!
//! - [`read_reference`] for the editor input: the first line is a label and
//!   every following line is sequence.
//! - [`read_genome`] for read sampling: plain text or FASTA, headers and blank
//!   lines skipped.
//!
//! Both trim each line, upper-case the result, and treat a missing file or an
//! empty payload as an [`InputError`].

use crate::errors::InputError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

fn read_lines(path: &Path) -> Result<Vec<String>, InputError> {
    let file = File::open(path).map_err(|e| InputError::from_io(path, e))?;
    BufReader::new(file)
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| InputError::from_io(path, e))
}

/// Join the lines after the label into one upper-cased sequence.
///
/// Returns `None` when there is no sequence line or the payload is empty.
pub fn parse_reference<S: AsRef<str>>(lines: &[S]) -> Option<String> {
    if lines.len() < 2 {
        return None;
    }
    let sequence: String = lines[1..]
        .iter()
        .map(|line| line.as_ref().trim().to_ascii_uppercase())
        .collect();
    (!sequence.is_empty()).then_some(sequence)
}

/// Load the reference for the editor.
pub fn read_reference(path: impl AsRef<Path>) -> Result<String, InputError> {
    let path = path.as_ref();
    let lines = read_lines(path)?;
    let sequence = parse_reference(&lines).ok_or_else(|| InputError::Empty {
        path: path.to_path_buf(),
    })?;
    log::info!("Loaded reference of {} bp from {}", sequence.len(), path.display());
    Ok(sequence)
}

/// Load a genome to sample reads from.
pub fn read_genome(path: impl AsRef<Path>) -> Result<String, InputError> {
    let path = path.as_ref();
    let mut sequence = String::new();
    for line in read_lines(path)? {
        let line = line.trim();
        if line.is_empty() || line.starts_with('>') {
            continue;
        }
        sequence.push_str(&line.to_ascii_uppercase());
    }
    if sequence.is_empty() {
        return Err(InputError::Empty {
            path: path.to_path_buf(),
        });
    }
    log::info!("Loaded genome of {} bp from {}", sequence.len(), path.display());
    Ok(sequence)
}
