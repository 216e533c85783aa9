//! Access traces: one `segment offset` pair per line.
//!
//! Blank lines and `#` comments are ignored, so a trace can be annotated:
//!
//! ```text
//! # fill all four frames
//! 0 0
//! 0 256
//! 1 10   # page 2
//! ```

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::common::types::AccessRequest;

#[derive(Error, Debug)]
pub enum TraceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Line {line}: {reason}")]
    Parse { line: usize, reason: String },
}

/// Read and parse a trace file
pub fn read_trace(path: impl AsRef<Path>) -> Result<Vec<AccessRequest>, TraceError> {
    let content = fs::read_to_string(path)?;
    parse_trace(&content)
}

/// Parse trace text into access requests
pub fn parse_trace(content: &str) -> Result<Vec<AccessRequest>, TraceError> {
    let mut requests = Vec::new();

    for (idx, raw) in content.lines().enumerate() {
        let line = idx + 1;
        let text = match raw.split_once('#') {
            Some((before, _)) => before,
            None => raw,
        };

        let tokens: Vec<&str> = text.split_whitespace().collect();
        match tokens.as_slice() {
            [] => continue,
            [segment, offset] => {
                let segment = parse_number(segment, "segment index", line)?;
                let offset = parse_number(offset, "offset", line)?;
                requests.push(AccessRequest::new(segment, offset));
            }
            _ => {
                return Err(TraceError::Parse {
                    line,
                    reason: format!("expected 'segment offset', got {} tokens", tokens.len()),
                });
            }
        }
    }

    Ok(requests)
}

fn parse_number(token: &str, what: &str, line: usize) -> Result<usize, TraceError> {
    token.parse().map_err(|_| TraceError::Parse {
        line,
        reason: format!("invalid {}: {}", what, token),
    })
}
