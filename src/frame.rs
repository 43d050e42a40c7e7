//! Reply framing over the engine's output stream.
//!
//! GTP replies are blocks of one or more lines terminated by a single
//! empty line. The framer accumulates lines until it sees the
//! terminator and hands the block back joined with `\n`, leaving the
//! reader positioned at the start of the next block.

use std::io::BufRead;

use crate::error::GtpError;

/// Read one complete reply block.
///
/// Blocks until the terminating empty line arrives; there is no
/// timeout here, responsiveness policy belongs to the caller. A block
/// with zero content lines yields the empty string. Trailing `\r` is
/// stripped from each line. EOF before the terminator means the engine
/// went away and is reported as [`GtpError::ProcessExited`].
pub fn read_reply<R: BufRead>(reader: &mut R) -> Result<String, GtpError> {
    let mut block: Vec<String> = Vec::new();

    loop {
        let mut line = String::new();
        let n = reader.read_line(&mut line)?;
        if n == 0 {
            return Err(GtpError::ProcessExited);
        }

        let line = line.trim_end_matches('\n').trim_end_matches('\r');
        if line.is_empty() {
            return Ok(block.join("\n"));
        }
        block.push(line.to_string());
    }
}
