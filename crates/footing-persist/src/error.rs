//! Error types for the persistence layer.

use std::error::Error;
use std::fmt;
use std::io;

/// Errors from saving, loading, or decoding layer data.
#[derive(Debug)]
pub enum PersistError {
    /// Reading or writing the backing store failed.
    Io {
        /// Where the store tried to read or write.
        path: String,
        /// The underlying error.
        source: io::Error,
    },
    /// A save line could not be decoded.
    MalformedLine {
        /// The offending line.
        line: String,
        /// What was wrong with it.
        detail: String,
    },
    /// A save name that is empty or would escape the save directory.
    InvalidName {
        /// The rejected name.
        name: String,
    },
}

impl fmt::Display for PersistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "I/O error on {path}: {source}"),
            Self::MalformedLine { line, detail } => {
                write!(f, "malformed save line {line:?}: {detail}")
            }
            Self::InvalidName { name } => write!(f, "invalid save name {name:?}"),
        }
    }
}

impl Error for PersistError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_chains_source() {
        let e = PersistError::Io {
            path: "SaveFiles/home".into(),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(e.to_string(), "I/O error on SaveFiles/home: gone");
        assert!(e.source().is_some());
    }

    #[test]
    fn malformed_line_has_no_source() {
        let e = PersistError::MalformedLine {
            line: "x".into(),
            detail: "expected 3 fields".into(),
        };
        assert!(e.source().is_none());
        assert_eq!(e.to_string(), "malformed save line \"x\": expected 3 fields");
    }
}
