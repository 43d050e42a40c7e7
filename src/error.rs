//! Error types for the GTP session layer.

use std::io;

use thiserror::Error;

/// Everything that can go wrong between the caller and the engine.
///
/// `Engine` is a normal, recoverable outcome (the engine rejected the
/// command, e.g. an illegal move) and leaves the session usable.
/// `Protocol` means the reply did not match the grammar for the issued
/// command; the framing state is then indeterminate and the session
/// should be restarted. `ProcessExited` is terminal.
#[derive(Debug, Error)]
pub enum GtpError {
    /// The engine executable was not found on the search path.
    #[error("engine executable not found: {command}")]
    EngineNotFound {
        command: String,
        #[source]
        source: io::Error,
    },

    /// Process creation failed for a reason other than a missing binary.
    #[error("failed to spawn engine: {message}")]
    Spawn {
        message: String,
        #[source]
        source: io::Error,
    },

    /// The engine answered with a `?` failure reply.
    #[error("engine reported failure: {0}")]
    Engine(String),

    /// The reply text did not match the expected grammar.
    #[error("malformed reply: {0}")]
    Protocol(String),

    /// The engine closed its output stream.
    #[error("engine process exited unexpectedly")]
    ProcessExited,

    /// A command was sent while a previous reply was still outstanding.
    #[error("a command is already awaiting its reply")]
    CommandInFlight,

    /// I/O failure on the engine's stdin or stdout pipe.
    #[error("engine I/O error: {0}")]
    Io(#[from] io::Error),
}
