use crate::config::OutputFormat;
use crate::core::finder::find_pair;
use crate::core::{PairReport, Result};
use std::io::{BufRead, Write};

/// Reads the first whitespace-delimited token and parses a leading `i32` from it.
///
/// Returns `Ok(None)` when input ends before any token, when the token does not
/// start with an integer, or when the integer is out of range. Characters after
/// the integer inside the same token are ignored, so `"12abc"` reads as 12.
/// Input is handled as raw bytes; bytes that are not valid UTF-8 count as
/// malformed input, not as an I/O error.
pub fn read_target<R: BufRead>(reader: &mut R) -> Result<Option<i32>> {
    let mut line = Vec::new();

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            tracing::debug!("input ended before a target was read");
            return Ok(None);
        }

        if let Some(token) = line
            .split(u8::is_ascii_whitespace)
            .find(|token| !token.is_empty())
        {
            let target = parse_leading_int(token);
            if target.is_none() {
                tracing::debug!(
                    token = %String::from_utf8_lossy(token),
                    "input does not start with an integer"
                );
            }
            return Ok(target);
        }
    }
}

fn parse_leading_int(token: &[u8]) -> Option<i32> {
    let digits_start = usize::from(matches!(token.first(), Some(&(b'+' | b'-'))));
    let digits_len = token[digits_start..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();

    if digits_len == 0 {
        return None;
    }

    // sign and digits are ASCII, so this prefix is always valid UTF-8
    std::str::from_utf8(&token[..digits_start + digits_len])
        .ok()?
        .parse()
        .ok()
}

pub fn render_text(report: &PairReport) -> String {
    match (report.indices, report.values) {
        (Some([first, second]), Some([a, b])) => format!(
            "Found: indices {} and {}, values {} + {} = {}",
            first, second, a, b, report.target
        ),
        _ => format!("No pair sums to {}", report.target),
    }
}

pub fn render_json(report: &PairReport) -> Result<String> {
    Ok(serde_json::to_string(report)?)
}

/// Reads one target from `reader`, looks it up in `sequence` and writes one
/// line to `writer`. Nothing is written when no target could be read.
pub fn run<R: BufRead, W: Write>(
    format: OutputFormat,
    sequence: &[i32],
    reader: &mut R,
    writer: &mut W,
) -> Result<()> {
    let Some(target) = read_target(reader)? else {
        return Ok(());
    };

    let result = find_pair(sequence, target);
    tracing::info!(sum = target, found = result.is_found(), "lookup finished");

    let report = PairReport::new(sequence, target, result);
    let line = match format {
        OutputFormat::Text => render_text(&report),
        OutputFormat::Json => render_json(&report)?,
    };

    writeln!(writer, "{}", line)?;
    writer.flush()?;
    Ok(())
}
