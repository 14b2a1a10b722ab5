use std::fmt::{self, Display, Formatter};

use crate::Kind;

/// Everything that can go wrong while building or mutating a [`Graph`](crate::Graph), or while
/// parsing a [`Matrix`](crate::Matrix) from its textual form.
#[derive(Debug, Clone)]
pub enum Error {
    /// A vertex name used in an edge or lookup doesn't exist.
    UnknownVertex(String),
    /// A vertex exists but isn't of the [`Kind`] the caller expected.
    WrongKind { name: String, expected: Kind },
    /// A realization was attempted whose precondition wasn't met: gaining a character that's
    /// already active, or losing one that still has a black edge.
    InconsistentMove(String),
    /// The textual matrix file was malformed.
    Parse(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownVertex(name) => write!(f, "no vertex named `{name}`"),
            Error::WrongKind { name, expected } => {
                write!(f, "`{name}` is not a {expected}")
            }
            Error::InconsistentMove(reason) => write!(f, "inconsistent move: {reason}"),
            Error::Parse(reason) => write!(f, "malformed matrix: {reason}"),
        }
    }
}

impl std::error::Error for Error {}
