//! GTP command values and their wire encoding.
//!
//! Each supported verb is one variant of [`Command`], carrying that
//! verb's typed arguments. The `Display` impl renders the exact
//! request line GTP expects: the lowercase verb token followed by
//! space-separated arguments, colors as `black`/`white`, vertices as
//! `<COLUMN><ROW>` with the `I` column skipped, and the `pass`/`resign`
//! sentinels as literal tokens. Floats render in plain decimal.
//!
//! The session appends the terminating newline when it writes the
//! line; `Display` produces the bare request.

use std::fmt;

use crate::vertex::{Color, Move, Status, Vertex};

/// One GTP request, ready to be rendered onto the wire.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    ProtocolVersion,
    Name,
    Version,
    /// Ask whether the engine knows the named command. The name is
    /// passed through unescaped.
    KnownCommand(String),
    ListCommands,
    Quit,
    Boardsize(u32),
    ClearBoard,
    Komi(f32),
    FixedHandicap(u32),
    PlaceFreeHandicap(u32),
    SetFreeHandicap(Vec<Vertex>),
    Play(Color, Move),
    Genmove(Color),
    Undo,
    /// Main time, byo-yomi time (both seconds), byo-yomi stones.
    TimeSettings(u32, u32, u32),
    /// Remaining time in seconds and stones for one color.
    TimeLeft(Color, u32, u32),
    FinalScore,
    FinalStatusList(Status),
    /// File name and optional move number to stop loading at.
    Loadsgf(String, Option<u32>),
    RegGenmove(Color),
    Showboard,
}

impl Command {
    /// The canonical lowercase GTP token for this command.
    pub fn verb(&self) -> &'static str {
        match self {
            Self::ProtocolVersion => "protocol_version",
            Self::Name => "name",
            Self::Version => "version",
            Self::KnownCommand(_) => "known_command",
            Self::ListCommands => "list_commands",
            Self::Quit => "quit",
            Self::Boardsize(_) => "boardsize",
            Self::ClearBoard => "clear_board",
            Self::Komi(_) => "komi",
            Self::FixedHandicap(_) => "fixed_handicap",
            Self::PlaceFreeHandicap(_) => "place_free_handicap",
            Self::SetFreeHandicap(_) => "set_free_handicap",
            Self::Play(..) => "play",
            Self::Genmove(_) => "genmove",
            Self::Undo => "undo",
            Self::TimeSettings(..) => "time_settings",
            Self::TimeLeft(..) => "time_left",
            Self::FinalScore => "final_score",
            Self::FinalStatusList(_) => "final_status_list",
            Self::Loadsgf(..) => "loadsgf",
            Self::RegGenmove(_) => "reg_genmove",
            Self::Showboard => "showboard",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.verb())?;
        match self {
            Self::KnownCommand(name) => write!(f, " {name}"),
            Self::Boardsize(size) => write!(f, " {size}"),
            Self::Komi(komi) => write!(f, " {komi}"),
            Self::FixedHandicap(n) | Self::PlaceFreeHandicap(n) => write!(f, " {n}"),
            Self::SetFreeHandicap(vertices) => {
                for v in vertices {
                    write!(f, " {v}")?;
                }
                Ok(())
            }
            Self::Play(color, mv) => write!(f, " {color} {mv}"),
            Self::Genmove(color) | Self::RegGenmove(color) => write!(f, " {color}"),
            Self::TimeSettings(main, byo_yomi, stones) => {
                write!(f, " {main} {byo_yomi} {stones}")
            }
            Self::TimeLeft(color, time, stones) => write!(f, " {color} {time} {stones}"),
            Self::FinalStatusList(status) => write!(f, " {status}"),
            Self::Loadsgf(file, move_number) => {
                write!(f, " {file}")?;
                if let Some(n) = move_number {
                    write!(f, " {n}")?;
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_bare_verbs() {
        assert_eq!(Command::ProtocolVersion.to_string(), "protocol_version");
        assert_eq!(Command::ClearBoard.to_string(), "clear_board");
        assert_eq!(Command::Quit.to_string(), "quit");
        assert_eq!(Command::Showboard.to_string(), "showboard");
    }

    #[test]
    fn test_encode_play() {
        let cmd = Command::Play(Color::Black, Move::Vertex(Vertex::new(4, 4)));
        assert_eq!(cmd.to_string(), "play black D4");

        let cmd = Command::Play(Color::White, Move::Pass);
        assert_eq!(cmd.to_string(), "play white pass");

        let cmd = Command::Play(Color::Black, Move::Resign);
        assert_eq!(cmd.to_string(), "play black resign");
    }

    #[test]
    fn test_encode_genmove() {
        assert_eq!(Command::Genmove(Color::White).to_string(), "genmove white");
        assert_eq!(
            Command::RegGenmove(Color::Black).to_string(),
            "reg_genmove black"
        );
    }

    #[test]
    fn test_encode_komi_plain_decimal() {
        assert_eq!(Command::Komi(6.5).to_string(), "komi 6.5");
        assert_eq!(Command::Komi(7.0).to_string(), "komi 7");
    }

    #[test]
    fn test_encode_handicap() {
        assert_eq!(Command::FixedHandicap(4).to_string(), "fixed_handicap 4");
        let cmd = Command::SetFreeHandicap(vec![Vertex::new(3, 3), Vertex::new(9, 9)]);
        assert_eq!(cmd.to_string(), "set_free_handicap C3 J9");
    }

    #[test]
    fn test_encode_time_commands() {
        assert_eq!(
            Command::TimeSettings(300, 30, 5).to_string(),
            "time_settings 300 30 5"
        );
        assert_eq!(
            Command::TimeLeft(Color::Black, 120, 0).to_string(),
            "time_left black 120 0"
        );
    }

    #[test]
    fn test_encode_known_command_unescaped() {
        let cmd = Command::KnownCommand("final_status_list".to_string());
        assert_eq!(cmd.to_string(), "known_command final_status_list");
    }

    #[test]
    fn test_encode_loadsgf() {
        let cmd = Command::Loadsgf("game.sgf".to_string(), None);
        assert_eq!(cmd.to_string(), "loadsgf game.sgf");
        let cmd = Command::Loadsgf("game.sgf".to_string(), Some(50));
        assert_eq!(cmd.to_string(), "loadsgf game.sgf 50");
    }

    #[test]
    fn test_encode_final_status_list() {
        assert_eq!(
            Command::FinalStatusList(Status::Dead).to_string(),
            "final_status_list dead"
        );
    }
}
