//! Decoding framed reply blocks into typed values.
//!
//! A GTP reply carries no verb name, so the block alone does not say
//! how to decode it; the originating [`Command`] selects the grammar.
//! Every block starts with `=` (success) or `?` (failure). Failure
//! text becomes [`GtpError::Engine`] no matter which command was sent.
//! Parsing is strict: a malformed token is a [`GtpError::Protocol`],
//! never a silently substituted default.

use std::str::FromStr;

use crate::command::Command;
use crate::error::GtpError;
use crate::vertex::{Move, Vertex};

/// A successfully decoded reply. The variant is determined by the
/// grammar of the command that was sent.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// Bare acknowledgment; any trailing text is ignored.
    Unit,
    Int(u32),
    Text(String),
    Bool(bool),
    Vertices(Vec<Vertex>),
    Lines(Vec<String>),
    Move(Move),
}

impl Reply {
    /// Decode a framed reply block for the command that produced it.
    pub fn parse(command: &Command, raw: &str) -> Result<Self, GtpError> {
        let content = strip_status(command, raw)?;

        match command {
            Command::ProtocolVersion => {
                let version = content.trim().parse().map_err(|_| {
                    GtpError::Protocol(format!("bad protocol_version reply: {content:?}"))
                })?;
                Ok(Self::Int(version))
            }
            Command::Name | Command::Version | Command::FinalScore | Command::Showboard => {
                Ok(Self::Text(content.to_string()))
            }
            Command::KnownCommand(_) => match content.trim() {
                "true" => Ok(Self::Bool(true)),
                "false" => Ok(Self::Bool(false)),
                other => Err(GtpError::Protocol(format!(
                    "bad boolean reply: {other:?}"
                ))),
            },
            Command::ListCommands => {
                let lines = content
                    .lines()
                    .filter(|line| !line.is_empty())
                    .map(str::to_string)
                    .collect();
                Ok(Self::Lines(lines))
            }
            Command::FixedHandicap(_)
            | Command::PlaceFreeHandicap(_)
            | Command::FinalStatusList(_) => {
                let vertices = content
                    .split_whitespace()
                    .map(Vertex::from_str)
                    .collect::<Result<_, _>>()?;
                Ok(Self::Vertices(vertices))
            }
            Command::Genmove(_) | Command::RegGenmove(_) => {
                let mv = content.trim().parse()?;
                Ok(Self::Move(mv))
            }
            _ => Ok(Self::Unit),
        }
    }
}

/// Strip the `=`/`?` status marker and the separating space, turning a
/// `?` failure into [`GtpError::Engine`] with the trailing diagnostic.
///
/// This client never sends command IDs, so the engine never echoes one
/// and the first marker character is followed directly by the content.
fn strip_status<'a>(command: &Command, raw: &'a str) -> Result<&'a str, GtpError> {
    let Some(rest) = raw.strip_prefix('=') else {
        if let Some(diagnostic) = raw.strip_prefix('?') {
            let diagnostic = diagnostic.strip_prefix(' ').unwrap_or(diagnostic);
            return Err(GtpError::Engine(diagnostic.to_string()));
        }
        return Err(GtpError::Protocol(format!(
            "reply to {} has no status marker: {raw:?}",
            command.verb()
        )));
    };
    Ok(rest.strip_prefix(' ').unwrap_or(rest))
}
