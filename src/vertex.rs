//! Board coordinate and move value types.
//!
//! GTP writes a board intersection as a column letter followed by a
//! 1-based row number, e.g. `D4` or `J9`. The column letters skip `I`
//! to avoid confusion with `J`, so the columns run A..H, J, K, ...
//! Moves extend vertices with the `pass` and `resign` sentinels, which
//! appear both as command arguments (`play`) and in engine answers
//! (`genmove`).

use std::fmt;
use std::str::FromStr;

use crate::error::GtpError;

/// Stone color, `black` or `white` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Black,
    White,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Black => write!(f, "black"),
            Self::White => write!(f, "white"),
        }
    }
}

/// Group status as queried by `final_status_list`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Alive,
    Seki,
    Dead,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Alive => write!(f, "alive"),
            Self::Seki => write!(f, "seki"),
            Self::Dead => write!(f, "dead"),
        }
    }
}

/// A single board intersection.
///
/// Both fields are 1-based. `col` counts playable columns, so the `I`
/// gap is already folded out: col 8 is `H`, col 9 is `J`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vertex {
    pub col: u8,
    pub row: u8,
}

impl Vertex {
    /// Build a vertex from 1-based column and row indices.
    pub fn new(col: u8, row: u8) -> Self {
        Self { col, row }
    }

    /// The column letter as written on the wire.
    pub fn col_char(&self) -> char {
        let mut c = b'A' + self.col - 1;
        // Skip 'I' (Go convention to avoid confusion with 'J')
        if c >= b'I' {
            c += 1;
        }
        c as char
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.col_char(), self.row)
    }
}

impl FromStr for Vertex {
    type Err = GtpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() < 2 {
            return Err(GtpError::Protocol(format!("vertex too short: {s:?}")));
        }

        let col_char = bytes[0].to_ascii_uppercase();
        if !col_char.is_ascii_uppercase() || col_char == b'I' {
            return Err(GtpError::Protocol(format!(
                "bad column letter in vertex {s:?}"
            )));
        }
        let mut col = col_char - b'A' + 1;
        if col_char > b'I' {
            col -= 1;
        }

        let row: u8 = s[1..]
            .parse()
            .map_err(|_| GtpError::Protocol(format!("bad row number in vertex {s:?}")))?;
        if row == 0 {
            return Err(GtpError::Protocol(format!("row 0 in vertex {s:?}")));
        }

        Ok(Self { col, row })
    }
}

/// A move: a vertex, or one of the `pass`/`resign` sentinels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Vertex(Vertex),
    Pass,
    Resign,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vertex(v) => write!(f, "{v}"),
            Self::Pass => write!(f, "pass"),
            Self::Resign => write!(f, "resign"),
        }
    }
}

impl FromStr for Move {
    type Err = GtpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Engines vary in case here; GNU Go answers "PASS"
        if s.eq_ignore_ascii_case("pass") {
            return Ok(Self::Pass);
        }
        if s.eq_ignore_ascii_case("resign") {
            return Ok(Self::Resign);
        }
        s.parse().map(Self::Vertex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_display_skips_i() {
        assert_eq!(Vertex::new(8, 5).to_string(), "H5");
        assert_eq!(Vertex::new(9, 5).to_string(), "J5");
    }

    #[test]
    fn test_vertex_roundtrip() {
        for col in 1..=19u8 {
            for row in [1u8, 4, 9, 13, 19, 25] {
                let v = Vertex::new(col, row);
                let parsed: Vertex = v.to_string().parse().unwrap();
                assert_eq!(v, parsed, "roundtrip failed for {v}");
            }
        }
    }

    #[test]
    fn test_vertex_parse_case_insensitive() {
        let lower: Vertex = "d4".parse().unwrap();
        let upper: Vertex = "D4".parse().unwrap();
        assert_eq!(lower, upper);
    }

    #[test]
    fn test_vertex_rejects_i_column() {
        assert!("I5".parse::<Vertex>().is_err());
        assert!("i5".parse::<Vertex>().is_err());
    }

    #[test]
    fn test_vertex_rejects_malformed() {
        assert!("".parse::<Vertex>().is_err());
        assert!("D".parse::<Vertex>().is_err());
        assert!("D0".parse::<Vertex>().is_err());
        assert!("Dx".parse::<Vertex>().is_err());
        assert!("4D".parse::<Vertex>().is_err());
    }

    #[test]
    fn test_move_pass_resign() {
        assert_eq!(Move::Pass.to_string(), "pass");
        assert_eq!(Move::Resign.to_string(), "resign");
        assert_eq!("pass".parse::<Move>().unwrap(), Move::Pass);
        assert_eq!("PASS".parse::<Move>().unwrap(), Move::Pass);
        assert_eq!("resign".parse::<Move>().unwrap(), Move::Resign);
    }

    #[test]
    fn test_move_vertex() {
        let mv: Move = "C3".parse().unwrap();
        assert_eq!(mv, Move::Vertex(Vertex::new(3, 3)));
    }

    #[test]
    fn test_color_display() {
        assert_eq!(Color::Black.to_string(), "black");
        assert_eq!(Color::White.to_string(), "white");
    }

    #[test]
    fn test_status_display() {
        assert_eq!(Status::Alive.to_string(), "alive");
        assert_eq!(Status::Seki.to_string(), "seki");
        assert_eq!(Status::Dead.to_string(), "dead");
    }
}
