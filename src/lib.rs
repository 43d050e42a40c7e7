//! Gtp-Rust: a client for Go engines speaking the Go Text Protocol.
//!
//! This crate drives an external Go-playing engine (GNU Go, Pachi,
//! KataGo, ...) as a subprocess, speaking GTP version 2 over its
//! standard streams: typed commands are rendered onto stdin, and the
//! blank-line-terminated reply blocks on stdout are framed and decoded
//! back into typed values.
//!
//! ## Modules
//!
//! - [`vertex`] - Board coordinates, colors, moves, group status
//! - [`command`] - Typed GTP commands and their wire encoding
//! - [`frame`] - Reply-block framing over the engine's output
//! - [`reply`] - Decoding reply blocks into typed values
//! - [`session`] - Subprocess lifecycle and command dispatch
//! - [`error`] - The error taxonomy
//!
//! ## Example
//!
//! ```ignore
//! use gtp_rust::session::Session;
//! use gtp_rust::vertex::Color;
//!
//! let mut engine = Session::start("gnugo", &["--mode", "gtp"])?;
//! engine.boardsize(9)?;
//! engine.komi(6.5)?;
//! let mv = engine.genmove(Color::Black)?;
//! println!("engine plays {mv}");
//! engine.quit()?;
//! ```
//!
//! GTP is strictly half-duplex: one command, one reply, in order. The
//! session enforces this; sending while a reply is outstanding is an
//! error rather than a silent queue.

pub mod command;
pub mod error;
pub mod frame;
pub mod reply;
pub mod session;
pub mod vertex;
