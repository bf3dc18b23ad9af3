//! Locating the header terminator and tail marker inside the raw line
//! stream, and splitting the stream around them.

use tracing::debug;

use crate::error::ParseError;

/// Prefix of the line that ends the header (the column-name line).
pub const HEADER_PROMPT: &str = "TimeStamp";

/// Prefix of the line that starts the tail.
pub const TAIL_PROMPT: &str = "### Acquisition Ended";

/// The three contiguous slices of a run-data line stream.
///
/// `header`, `body` and `tail` partition the original sequence: gluing them
/// back together in order reproduces it exactly.
#[derive(Debug)]
pub struct Sections<'a> {
    /// Free-form preamble up to and including the column-name line.
    pub header: &'a [&'a str],
    /// Tab-separated data lines, one sample per line.
    pub body: &'a [&'a str],
    /// Acquisition-end marker and everything after it.
    pub tail: &'a [&'a str],
}

/// Index of the first line starting with `prompt`, scanning from the top.
///
/// The prefix test runs against the line as read; leading whitespace is
/// significant.
pub fn find_header_end(lines: &[&str], prompt: &str) -> Option<usize> {
    lines.iter().position(|line| line.starts_with(prompt))
}

/// Index of the last line starting with `prompt`, scanning from the bottom.
pub fn find_tail_start(lines: &[&str], prompt: &str) -> Option<usize> {
    lines.iter().rposition(|line| line.starts_with(prompt))
}

/// Split `lines` into header, body and tail.
///
/// Both markers are required. A stream without a tail marker is presumed
/// truncated and rejected outright rather than decoded to the end
/// best-effort, and a tail marker sitting at or before the column-name line
/// is rejected rather than yielding a negative-length body.
pub fn split_sections<'a>(lines: &'a [&'a str]) -> Result<Sections<'a>, ParseError> {
    let header_end =
        find_header_end(lines, HEADER_PROMPT).ok_or_else(|| ParseError::MissingHeader {
            prompt: HEADER_PROMPT.into(),
        })?;
    let tail_start = find_tail_start(lines, TAIL_PROMPT).ok_or_else(|| ParseError::MissingTail {
        prompt: TAIL_PROMPT.into(),
    })?;
    if tail_start <= header_end {
        return Err(ParseError::TailBeforeHeader {
            header: header_end + 1,
            tail: tail_start + 1,
        });
    }
    debug!(header_end, tail_start, "located section boundaries");

    Ok(Sections {
        header: &lines[..=header_end],
        body: &lines[header_end + 1..tail_start],
        tail: &lines[tail_start..],
    })
}
