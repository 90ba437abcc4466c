use std::fmt::Display;
use std::io;

use crate::value::{Location, Position};

#[derive(Debug, PartialEq)]
pub enum Kind {
    Io(io::ErrorKind),
    Parse(String),
    Encode(String),
    MissingKey(String),
    MissingIndex(usize),
    NotAnObject,
    NotAnArray,
    Mismatch { expected: String, found: String },
}

impl Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(kind) => write!(f, "I/O error: {}", kind),
            Self::Parse(reason) => write!(f, "parse error: {}", reason),
            Self::Encode(reason) => write!(f, "encode error: {}", reason),
            Self::MissingKey(key) => write!(f, "missing key {:?}", key),
            Self::MissingIndex(index) => write!(f, "missing index {}", index),
            Self::NotAnObject => write!(f, "expected an object"),
            Self::NotAnArray => write!(f, "expected an array"),
            Self::Mismatch { expected, found } => {
                write!(f, "assertion failed: expected {}, found {}", expected, found)
            }
        }
    }
}

#[derive(Debug)]
pub struct Error {
    pub kind: Kind,
    /// Set for parse errors.
    pub position: Option<Position>,
    /// Set for lookup and assertion errors.
    pub location: Option<Location>,
}

impl Error {
    pub fn new(kind: Kind) -> Self {
        Self {
            kind,
            position: None,
            location: None,
        }
    }

    pub fn at(location: Location, kind: Kind) -> Self {
        Self {
            kind,
            position: None,
            location: Some(location),
        }
    }

    pub fn mismatch(location: Location, expected: String, found: String) -> Self {
        Self::at(location, Kind::Mismatch { expected, found })
    }

    pub fn is_io(&self) -> bool {
        matches!(self.kind, Kind::Io(_))
    }

    pub fn is_parse(&self) -> bool {
        matches!(self.kind, Kind::Parse(_))
    }

    pub fn is_lookup(&self) -> bool {
        matches!(
            self.kind,
            Kind::MissingKey(_) | Kind::MissingIndex(_) | Kind::NotAnObject | Kind::NotAnArray
        )
    }

    pub fn is_assertion(&self) -> bool {
        matches!(self.kind, Kind::Mismatch { .. })
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind)?;

        if let Some(location) = &self.location {
            write!(f, " at {}", location)?;
        }

        if let Some(position) = &self.position {
            write!(f, " ({})", position)?;
        }

        Ok(())
    }
}

impl std::error::Error for Error {}

impl From<io::Error> for Error {
    fn from(value: io::Error) -> Self {
        Self::new(Kind::Io(value.kind()))
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        use serde_json::error::Category;

        match value.classify() {
            Category::Io => Self::from(io::Error::from(value)),
            Category::Syntax | Category::Eof | Category::Data => Self {
                kind: Kind::Parse(value.to_string()),
                position: Some(Position {
                    line: value.line(),
                    col: value.column(),
                }),
                location: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_points_at_the_failing_field() {
        let error = Error::mismatch(
            Location::field("array3", 17, "width"),
            "10.0".into(),
            "11.0".into(),
        );

        assert_eq!(
            error.to_string(),
            "assertion failed: expected 10.0, found 11.0 at array3[17].width"
        );
        assert!(error.is_assertion());
        assert!(!error.is_lookup());
    }

    #[test]
    fn io_error_keeps_its_kind() {
        let error = Error::from(io::Error::new(io::ErrorKind::NotFound, "gone"));

        assert_eq!(error.kind, Kind::Io(io::ErrorKind::NotFound));
        assert!(error.is_io());
    }
}
