//! Engine session: subprocess lifecycle and command dispatch.
//!
//! A [`Session`] owns one engine subprocess and one half-duplex GTP
//! conversation with it. Exactly one command may be in flight at a
//! time; the protocol has no pipelining and no cancellation. Most
//! callers use the per-verb methods, which each perform one full
//! synchronous round trip. The two-phase [`Session::send`] /
//! [`Session::receive`] pair exposes the same discipline with the
//! reply deferred, which is what [`Session::genmove_async`] uses to
//! let the caller do other work while the engine thinks.

use std::io::{BufReader, Write};
use std::process::{Child, ChildStdin, ChildStdout, Stdio};

use tracing::{debug, warn};

use crate::command::Command;
use crate::error::GtpError;
use crate::frame;
use crate::reply::Reply;
use crate::vertex::{Color, Move, Status, Vertex};

/// Receipt for a command whose reply has not been consumed yet.
///
/// Holds the originating command so the parser knows which grammar to
/// apply when the reply finally arrives; GTP reply bodies are not
/// self-describing.
#[derive(Debug)]
#[must_use = "every sent command must have its reply received"]
pub struct PendingReply {
    command: Command,
}

impl PendingReply {
    /// The command this receipt was issued for.
    pub fn command(&self) -> &Command {
        &self.command
    }
}

/// A live GTP conversation with one engine subprocess.
pub struct Session {
    child: Child,
    stdin: ChildStdin,
    stdout: BufReader<ChildStdout>,
    in_flight: bool,
}

impl Session {
    /// Spawn `program` (resolved via the OS search path) with the given
    /// arguments and attach to its standard streams.
    ///
    /// The arguments must put the engine into GTP mode over stdio; for
    /// GNU Go that is `--mode gtp`. A missing executable is reported as
    /// [`GtpError::EngineNotFound`], any other spawn failure as
    /// [`GtpError::Spawn`].
    pub fn start(program: &str, args: &[&str]) -> Result<Self, GtpError> {
        debug!(program, ?args, "spawning engine");

        let mut child = std::process::Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    GtpError::EngineNotFound {
                        command: program.to_string(),
                        source: e,
                    }
                } else {
                    GtpError::Spawn {
                        message: format!("failed to start {program}"),
                        source: e,
                    }
                }
            })?;

        let stdin = child.stdin.take().ok_or_else(|| GtpError::Spawn {
            message: "failed to capture engine stdin".to_string(),
            source: std::io::Error::other("no stdin"),
        })?;
        let stdout = child.stdout.take().ok_or_else(|| GtpError::Spawn {
            message: "failed to capture engine stdout".to_string(),
            source: std::io::Error::other("no stdout"),
        })?;

        debug!(pid = child.id(), "engine spawned");

        Ok(Self {
            child,
            stdin,
            stdout: BufReader::new(stdout),
            in_flight: false,
        })
    }

    /// Encode and send a command without waiting for the reply.
    ///
    /// Fails with [`GtpError::CommandInFlight`] if the previous reply
    /// has not been received yet; GTP is strictly request/response and
    /// a second command would desynchronize the conversation.
    pub fn send(&mut self, command: Command) -> Result<PendingReply, GtpError> {
        if self.in_flight {
            return Err(GtpError::CommandInFlight);
        }

        debug!(command = %command, "sending");
        writeln!(self.stdin, "{command}")?;
        self.stdin.flush()?;

        self.in_flight = true;
        Ok(PendingReply { command })
    }

    /// Block until the reply for a previously sent command arrives and
    /// decode it with that command's grammar.
    pub fn receive(&mut self, pending: PendingReply) -> Result<Reply, GtpError> {
        let block = frame::read_reply(&mut self.stdout)?;
        self.in_flight = false;

        debug!(command = pending.command.verb(), reply = %block, "received");
        Reply::parse(&pending.command, &block)
    }

    /// One full synchronous round trip.
    fn roundtrip(&mut self, command: Command) -> Result<Reply, GtpError> {
        let pending = self.send(command)?;
        self.receive(pending)
    }

    // Per-verb facade. Each method is one synchronous dispatch; the
    // match arms below only unwrap the reply variant the parser is
    // guaranteed to produce for that verb.

    pub fn protocol_version(&mut self) -> Result<u32, GtpError> {
        match self.roundtrip(Command::ProtocolVersion)? {
            Reply::Int(version) => Ok(version),
            other => Err(unexpected("protocol_version", &other)),
        }
    }

    pub fn name(&mut self) -> Result<String, GtpError> {
        match self.roundtrip(Command::Name)? {
            Reply::Text(name) => Ok(name),
            other => Err(unexpected("name", &other)),
        }
    }

    pub fn version(&mut self) -> Result<String, GtpError> {
        match self.roundtrip(Command::Version)? {
            Reply::Text(version) => Ok(version),
            other => Err(unexpected("version", &other)),
        }
    }

    pub fn known_command(&mut self, name: &str) -> Result<bool, GtpError> {
        match self.roundtrip(Command::KnownCommand(name.to_string()))? {
            Reply::Bool(known) => Ok(known),
            other => Err(unexpected("known_command", &other)),
        }
    }

    pub fn list_commands(&mut self) -> Result<Vec<String>, GtpError> {
        match self.roundtrip(Command::ListCommands)? {
            Reply::Lines(commands) => Ok(commands),
            other => Err(unexpected("list_commands", &other)),
        }
    }

    /// Ask the engine to exit, then reap the subprocess.
    pub fn quit(mut self) -> Result<(), GtpError> {
        self.roundtrip(Command::Quit)?;
        self.child.wait()?;
        Ok(())
    }

    pub fn boardsize(&mut self, size: u32) -> Result<(), GtpError> {
        self.roundtrip(Command::Boardsize(size)).map(drop)
    }

    pub fn clear_board(&mut self) -> Result<(), GtpError> {
        self.roundtrip(Command::ClearBoard).map(drop)
    }

    pub fn komi(&mut self, komi: f32) -> Result<(), GtpError> {
        self.roundtrip(Command::Komi(komi)).map(drop)
    }

    pub fn fixed_handicap(&mut self, stones: u32) -> Result<Vec<Vertex>, GtpError> {
        match self.roundtrip(Command::FixedHandicap(stones))? {
            Reply::Vertices(vertices) => Ok(vertices),
            other => Err(unexpected("fixed_handicap", &other)),
        }
    }

    pub fn place_free_handicap(&mut self, stones: u32) -> Result<Vec<Vertex>, GtpError> {
        match self.roundtrip(Command::PlaceFreeHandicap(stones))? {
            Reply::Vertices(vertices) => Ok(vertices),
            other => Err(unexpected("place_free_handicap", &other)),
        }
    }

    pub fn set_free_handicap(&mut self, vertices: &[Vertex]) -> Result<(), GtpError> {
        self.roundtrip(Command::SetFreeHandicap(vertices.to_vec()))
            .map(drop)
    }

    pub fn play(&mut self, color: Color, mv: Move) -> Result<(), GtpError> {
        self.roundtrip(Command::Play(color, mv)).map(drop)
    }

    pub fn genmove(&mut self, color: Color) -> Result<Move, GtpError> {
        match self.roundtrip(Command::Genmove(color))? {
            Reply::Move(mv) => Ok(mv),
            other => Err(unexpected("genmove", &other)),
        }
    }

    /// Send `genmove` and return immediately; the engine thinks while
    /// the caller does other work. The returned receipt must be handed
    /// to [`Session::recv_move`] before any further command.
    pub fn genmove_async(&mut self, color: Color) -> Result<PendingReply, GtpError> {
        self.send(Command::Genmove(color))
    }

    /// The deferred receive matching [`Session::genmove_async`].
    pub fn recv_move(&mut self, pending: PendingReply) -> Result<Move, GtpError> {
        match self.receive(pending)? {
            Reply::Move(mv) => Ok(mv),
            other => Err(unexpected("genmove", &other)),
        }
    }

    pub fn undo(&mut self) -> Result<(), GtpError> {
        self.roundtrip(Command::Undo).map(drop)
    }

    pub fn time_settings(
        &mut self,
        main_time: u32,
        byo_yomi_time: u32,
        byo_yomi_stones: u32,
    ) -> Result<(), GtpError> {
        self.roundtrip(Command::TimeSettings(main_time, byo_yomi_time, byo_yomi_stones))
            .map(drop)
    }

    pub fn time_left(&mut self, color: Color, time: u32, stones: u32) -> Result<(), GtpError> {
        self.roundtrip(Command::TimeLeft(color, time, stones))
            .map(drop)
    }

    /// The engine's scoring of the finished game, e.g. `B+3.5` or `0`,
    /// returned verbatim.
    pub fn final_score(&mut self) -> Result<String, GtpError> {
        match self.roundtrip(Command::FinalScore)? {
            Reply::Text(score) => Ok(score),
            other => Err(unexpected("final_score", &other)),
        }
    }

    pub fn final_status_list(&mut self, status: Status) -> Result<Vec<Vertex>, GtpError> {
        match self.roundtrip(Command::FinalStatusList(status))? {
            Reply::Vertices(vertices) => Ok(vertices),
            other => Err(unexpected("final_status_list", &other)),
        }
    }

    pub fn loadsgf(&mut self, file: &str, move_number: Option<u32>) -> Result<(), GtpError> {
        self.roundtrip(Command::Loadsgf(file.to_string(), move_number))
            .map(drop)
    }

    pub fn reg_genmove(&mut self, color: Color) -> Result<Move, GtpError> {
        match self.roundtrip(Command::RegGenmove(color))? {
            Reply::Move(mv) => Ok(mv),
            other => Err(unexpected("reg_genmove", &other)),
        }
    }

    pub fn showboard(&mut self) -> Result<String, GtpError> {
        match self.roundtrip(Command::Showboard)? {
            Reply::Text(board) => Ok(board),
            other => Err(unexpected("showboard", &other)),
        }
    }
}

fn unexpected(verb: &str, reply: &Reply) -> GtpError {
    GtpError::Protocol(format!("unexpected reply shape for {verb}: {reply:?}"))
}

impl Drop for Session {
    fn drop(&mut self) {
        // Already reaped by quit() if the child exited cleanly
        match self.child.try_wait() {
            Ok(Some(_)) => {}
            _ => {
                if let Err(e) = self.child.kill() {
                    warn!(error = %e, "failed to kill engine on drop");
                } else {
                    let _ = self.child.wait();
                }
            }
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("pid", &self.child.id())
            .field("in_flight", &self.in_flight)
            .finish()
    }
}
